use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activity::{ActivityTag, ActivityType, AppointmentKind, Direction};

/// Kind of asset a payout order moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetType {
    Money,
    Security,
    #[serde(other)]
    Unknown,
}

impl AssetType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetType::Money => "money",
            AssetType::Security => "security",
            AssetType::Unknown => "unknown",
        }
    }
}

/// Destination side of a payout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayoutType {
    ExternalPayout,
    InternalPayout,
    #[serde(other)]
    Unknown,
}

impl PayoutType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutType::ExternalPayout => "externalPayout",
            PayoutType::InternalPayout => "internalPayout",
            PayoutType::Unknown => "unknown",
        }
    }
}

/// Back-office processing state of a payout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PayoutStatus {
    InProgress,
    Completed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl PayoutStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PayoutStatus::InProgress => "inProgress",
            PayoutStatus::Completed => "completed",
            PayoutStatus::Canceled => "canceled",
            PayoutStatus::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneCallData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<Direction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<AppointmentKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Whether the client showed up. Absent means "not recorded".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_client_has_come: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMessageData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_informed_callcenter: Option<bool>,
    #[serde(
        default,
        rename = "isInformedMSOSKO",
        skip_serializing_if = "Option::is_none"
    )]
    pub is_informed_msosko: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

impl ServiceMessageData {
    /// At least one desk confirmed the client was notified.
    pub fn is_notified(&self) -> bool {
        self.is_informed_callcenter.unwrap_or(false) || self.is_informed_msosko.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutTaskData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_type: Option<PayoutType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_status: Option<PayoutStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agreement_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_sum: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_reason_detail: Option<String>,
    /// Target product for internal transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_amount: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailData {
    /// Raw HTML body of the message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebportalNewsData {
    /// Raw HTML body of the news item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,
}

/// Per-channel payload container.
///
/// The feed sends this as an object keyed by channel name, and an activity
/// is supposed to populate at most the key matching its own type. The feed
/// also sends `{}` as "present but empty", which matters to chip rules, so
/// this stays a struct of options rather than a tagged enum. Any key outside
/// the channel set fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AdditionalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_call: Option<PhoneCallData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment: Option<AppointmentData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_message: Option<ServiceMessageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payout_task: Option<PayoutTaskData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sms: Option<SmsData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webportal_news: Option<WebportalNewsData>,
}

impl AdditionalData {
    pub fn phone_call(data: PhoneCallData) -> Self {
        Self {
            phone_call: Some(data),
            ..Default::default()
        }
    }

    pub fn appointment(data: AppointmentData) -> Self {
        Self {
            appointment: Some(data),
            ..Default::default()
        }
    }

    pub fn service_message(data: ServiceMessageData) -> Self {
        Self {
            service_message: Some(data),
            ..Default::default()
        }
    }

    pub fn payout_task(data: PayoutTaskData) -> Self {
        Self {
            payout_task: Some(data),
            ..Default::default()
        }
    }

    pub fn email(data: EmailData) -> Self {
        Self {
            email: Some(data),
            ..Default::default()
        }
    }

    pub fn sms(data: SmsData) -> Self {
        Self {
            sms: Some(data),
            ..Default::default()
        }
    }

    pub fn webportal_news(data: WebportalNewsData) -> Self {
        Self {
            webportal_news: Some(data),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.channel().is_none()
    }

    /// The populated payload, if any. When a malformed record populates
    /// several keys, declaration order decides.
    pub fn channel(&self) -> Option<Channel<'_>> {
        if let Some(data) = &self.phone_call {
            Some(Channel::PhoneCall(data))
        } else if let Some(data) = &self.appointment {
            Some(Channel::Appointment(data))
        } else if let Some(data) = &self.service_message {
            Some(Channel::ServiceMessage(data))
        } else if let Some(data) = &self.payout_task {
            Some(Channel::PayoutTask(data))
        } else if let Some(data) = &self.email {
            Some(Channel::Email(data))
        } else if let Some(data) = &self.sms {
            Some(Channel::Sms(data))
        } else if let Some(data) = &self.webportal_news {
            Some(Channel::WebportalNews(data))
        } else {
            None
        }
    }

    /// The payload under the key matching `activity_type`, mirroring the
    /// feed's own lookup convention.
    pub fn for_type(&self, activity_type: ActivityType) -> Option<Channel<'_>> {
        match activity_type {
            ActivityType::PhoneCall => self.phone_call.as_ref().map(Channel::PhoneCall),
            ActivityType::Appointment => self.appointment.as_ref().map(Channel::Appointment),
            ActivityType::ServiceMessage => {
                self.service_message.as_ref().map(Channel::ServiceMessage)
            }
            ActivityType::PayoutTask => self.payout_task.as_ref().map(Channel::PayoutTask),
            ActivityType::Email => self.email.as_ref().map(Channel::Email),
            ActivityType::Sms => self.sms.as_ref().map(Channel::Sms),
            ActivityType::WebportalNews => self.webportal_news.as_ref().map(Channel::WebportalNews),
            ActivityType::Unknown => None,
        }
    }
}

/// Borrowed view over the populated channel payload. This is what detail
/// rendering dispatches on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel<'a> {
    PhoneCall(&'a PhoneCallData),
    Appointment(&'a AppointmentData),
    ServiceMessage(&'a ServiceMessageData),
    PayoutTask(&'a PayoutTaskData),
    Email(&'a EmailData),
    Sms(&'a SmsData),
    WebportalNews(&'a WebportalNewsData),
}

impl<'a> Channel<'a> {
    /// Wire key of the payload.
    pub fn key(&self) -> &'static str {
        match self {
            Channel::PhoneCall(_) => "phoneCall",
            Channel::Appointment(_) => "appointment",
            Channel::ServiceMessage(_) => "serviceMessage",
            Channel::PayoutTask(_) => "payoutTask",
            Channel::Email(_) => "email",
            Channel::Sms(_) => "sms",
            Channel::WebportalNews(_) => "webportalNews",
        }
    }

    pub fn tag(&self) -> Option<ActivityTag> {
        match self {
            Channel::PhoneCall(data) => data.activity_tag,
            Channel::Appointment(data) => data.activity_tag,
            Channel::ServiceMessage(data) => data.activity_tag,
            Channel::PayoutTask(data) => data.activity_tag,
            Channel::Email(data) => data.activity_tag,
            Channel::Sms(data) => data.activity_tag,
            Channel::WebportalNews(data) => data.activity_tag,
        }
    }

    pub fn description(&self) -> Option<&'a str> {
        match self {
            Channel::PhoneCall(data) => data.description.as_deref(),
            Channel::Appointment(data) => data.description.as_deref(),
            Channel::PayoutTask(data) => data.description.as_deref(),
            _ => None,
        }
    }

    pub fn contact_result(&self) -> Option<&'a str> {
        match self {
            Channel::PhoneCall(data) => data.contact_result.as_deref(),
            Channel::Appointment(data) => data.contact_result.as_deref(),
            _ => None,
        }
    }

    pub fn phone_number(&self) -> Option<&'a str> {
        match self {
            Channel::PhoneCall(data) => data.phone_number.as_deref(),
            Channel::Sms(data) => data.phone_number.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_is_present_but_empty() {
        let data: AdditionalData = serde_json::from_str("{}").unwrap();
        assert!(data.is_empty());
        assert!(data.channel().is_none());
    }

    #[test]
    fn test_unknown_channel_key_is_rejected() {
        let result = serde_json::from_str::<AdditionalData>(r#"{"faxMessage": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_payload_parses_under_its_key() {
        let data: AdditionalData = serde_json::from_str(
            r#"{"phoneCall": {"direction": "incoming", "phoneNumber": "9194557007"}}"#,
        )
        .unwrap();

        match data.channel() {
            Some(Channel::PhoneCall(call)) => {
                assert_eq!(call.direction, Some(crate::Direction::Incoming));
                assert_eq!(call.phone_number.as_deref(), Some("9194557007"));
            }
            other => panic!("wrong channel: {:?}", other),
        }
    }

    #[test]
    fn test_for_type_only_sees_the_matching_key() {
        let data = AdditionalData::sms(SmsData {
            message_text: Some("SMS full text".to_string()),
            ..Default::default()
        });

        assert!(data.for_type(ActivityType::Sms).is_some());
        assert!(data.for_type(ActivityType::PhoneCall).is_none());
    }

    #[test]
    fn test_service_message_notified_flags() {
        let neither = ServiceMessageData::default();
        assert!(!neither.is_notified());

        let callcenter = ServiceMessageData {
            is_informed_callcenter: Some(true),
            ..Default::default()
        };
        assert!(callcenter.is_notified());

        let msosko: ServiceMessageData =
            serde_json::from_str(r#"{"isInformedMSOSKO": true}"#).unwrap();
        assert!(msosko.is_notified());
    }

    #[test]
    fn test_payout_sum_parses_as_decimal() {
        let data: PayoutTaskData =
            serde_json::from_str(r#"{"payoutSum": 2150000, "securityAmount": 300}"#).unwrap();

        assert_eq!(data.payout_sum, Some(Decimal::from(2_150_000)));
        assert_eq!(data.security_amount, Some(300));
    }
}
