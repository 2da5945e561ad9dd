//! Fluent construction of activity records and canned channel payloads.
//!
//! The canned payloads mirror the shapes the CRM actually sends (payout
//! orders with securities, appointments with visit outcomes) so tests read
//! like real traffic rather than minimal synthetic records.

use actcard_types::{
    Activity, ActivityState, ActivityTag, ActivityType, AdditionalData, AppointmentData,
    AppointmentKind, Direction, PayoutStatus, PayoutTaskData, PayoutType, PhoneCallData,
    ServiceMessageData, SmsData,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::date_mock;

/// Builder for one activity record. Starts minimal: open state, no dates,
/// no payload. Everything else is opt-in so each test states exactly what
/// it depends on.
pub struct ActivityBuilder {
    activity: Activity,
}

impl ActivityBuilder {
    pub fn new(activity_type: ActivityType) -> Self {
        Self {
            activity: Activity {
                activity_id: "activity-1".to_string(),
                activity_type,
                state: ActivityState::Open,
                subject: None,
                status: None,
                activity_tag: None,
                planned_start_date: None,
                actual_end_date: None,
                create_date: None,
                phone_call_direction: None,
                appointment_type: None,
                client_full_name: None,
                pfp_id: None,
                owner_full_name: None,
                created_by_full_name: None,
                additional_data: None,
            },
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.activity.activity_id = id.into();
        self
    }

    pub fn state(mut self, state: ActivityState) -> Self {
        self.activity.state = state;
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.activity.subject = Some(subject.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.activity.status = Some(status.into());
        self
    }

    pub fn tag(mut self, tag: ActivityTag) -> Self {
        self.activity.activity_tag = Some(tag);
        self
    }

    pub fn planned_start(mut self, date: DateTime<Utc>) -> Self {
        self.activity.planned_start_date = Some(date);
        self
    }

    pub fn actual_end(mut self, date: DateTime<Utc>) -> Self {
        self.activity.actual_end_date = Some(date);
        self
    }

    pub fn create_date(mut self, date: DateTime<Utc>) -> Self {
        self.activity.create_date = Some(date);
        self
    }

    /// Top-level `phoneCallDirection` override.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.activity.phone_call_direction = Some(direction);
        self
    }

    /// Top-level `appointmentType` override.
    pub fn appointment_kind(mut self, kind: AppointmentKind) -> Self {
        self.activity.appointment_type = Some(kind);
        self
    }

    pub fn client(mut self, name: impl Into<String>) -> Self {
        self.activity.client_full_name = Some(name.into());
        self
    }

    pub fn client_id(mut self, pfp_id: impl Into<String>) -> Self {
        self.activity.pfp_id = Some(pfp_id.into());
        self
    }

    pub fn owner(mut self, name: impl Into<String>) -> Self {
        self.activity.owner_full_name = Some(name.into());
        self
    }

    pub fn created_by(mut self, name: impl Into<String>) -> Self {
        self.activity.created_by_full_name = Some(name.into());
        self
    }

    pub fn additional_data(mut self, data: AdditionalData) -> Self {
        self.activity.additional_data = Some(data);
        self
    }

    pub fn phone_call(self, data: PhoneCallData) -> Self {
        self.additional_data(AdditionalData::phone_call(data))
    }

    pub fn appointment(self, data: AppointmentData) -> Self {
        self.additional_data(AdditionalData::appointment(data))
    }

    pub fn service_message(self, data: ServiceMessageData) -> Self {
        self.additional_data(AdditionalData::service_message(data))
    }

    pub fn payout_task(self, data: PayoutTaskData) -> Self {
        self.additional_data(AdditionalData::payout_task(data))
    }

    pub fn build(self) -> Activity {
        self.activity
    }
}

/// Incoming call payload, as sent for phone-call activities.
pub fn incoming_call() -> PhoneCallData {
    PhoneCallData {
        direction: Some(Direction::Incoming),
        phone_number: Some("9194557007".to_string()),
        ..Default::default()
    }
}

/// Appointment with an address and a recorded visit outcome.
pub fn appointment_with_visit(client_has_come: bool) -> AppointmentData {
    AppointmentData {
        address: Some("Улица Пушкина, дом 1".to_string()),
        is_client_has_come: Some(client_has_come),
        contact_result: Some("Связался с клиентом".to_string()),
        ..Default::default()
    }
}

/// Completed external payout of securities, every field populated.
pub fn payout_task_security() -> PayoutTaskData {
    PayoutTaskData {
        payout_type: Some(PayoutType::ExternalPayout),
        payout_status: Some(PayoutStatus::Completed),
        asset_type: Some(actcard_types::AssetType::Security),
        order_date: Some(date_mock()),
        agreement_number: Some("21992038".to_string()),
        payout_sum: Some(Decimal::from(2_150_000)),
        payout_reason: Some("Нужны деньги на новый бизнес".to_string()),
        payout_reason_detail: Some("Правда нужны".to_string()),
        security_name: Some("Название ценной бумаги 1, Название ценной бумаги 2".to_string()),
        security_amount: Some(300),
        ..Default::default()
    }
}

/// Service message with the callcenter notification flag set.
pub fn notified_service_message() -> ServiceMessageData {
    ServiceMessageData {
        text: Some("Клиент уведомлен об изменении тарифа".to_string()),
        is_informed_callcenter: Some(true),
        ..Default::default()
    }
}

/// Sms payload with a delivered text.
pub fn sms_with_text() -> SmsData {
    SmsData {
        message_text: Some("SMS full text".to_string()),
        phone_number: Some("9194557007".to_string()),
        ..Default::default()
    }
}
