use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::channel::{AdditionalData, Channel};

// NOTE: Wire Schema
//
// Field names mirror the CRM activity feed (camelCase JSON). Two quirks of
// that feed are kept on purpose:
//
// 1. `phoneCallDirection` / `appointmentType` exist both on the record and
//    inside the channel payload; the top-level value wins when both are set.
// 2. `activityTag` can likewise arrive top-level or nested under the payload
//    that matches `activityType`. `effective_tag` resolves the precedence.
//
// Open string enums (`activityType`, `state`, `activityTag`, directions,
// payout vocabulary) carry an `Unknown` catch-all so a new upstream value
// degrades a single field rather than failing the whole record. Only the
// channel key set inside `additionalData` stays closed: an unrecognized key
// there is a contract violation and surfaces as a parse error.

/// Delivery channel of an activity. Drives all dispatch; a value outside the
/// known set keeps the record parseable but renders without channel visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityType {
    PhoneCall,
    Appointment,
    Email,
    Sms,
    ServiceMessage,
    PayoutTask,
    WebportalNews,
    #[serde(other)]
    Unknown,
}

impl ActivityType {
    /// Wire name, also the suffix of the `enum.ActivityType.*` title keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityType::PhoneCall => "phoneCall",
            ActivityType::Appointment => "appointment",
            ActivityType::Email => "email",
            ActivityType::Sms => "sms",
            ActivityType::ServiceMessage => "serviceMessage",
            ActivityType::PayoutTask => "payoutTask",
            ActivityType::WebportalNews => "webportalNews",
            ActivityType::Unknown => "unknown",
        }
    }

    /// Phone calls and appointments share the "interaction" chip behavior.
    pub fn is_interaction(&self) -> bool {
        matches!(self, ActivityType::PhoneCall | ActivityType::Appointment)
    }
}

/// Lifecycle state of an activity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityState {
    #[default]
    Open,
    Completed,
    Canceled,
    #[serde(other)]
    Unknown,
}

impl ActivityState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityState::Open => "Open",
            ActivityState::Completed => "Completed",
            ActivityState::Canceled => "Canceled",
            ActivityState::Unknown => "Unknown",
        }
    }

    /// Completed and Canceled activities render their final timestamp and
    /// suppress deadline badges.
    pub fn is_closed(&self) -> bool {
        matches!(self, ActivityState::Completed | ActivityState::Canceled)
    }
}

/// Workflow tag attached by the desk. Only `KVP` and `Alert` carry
/// presentation weight; anything else is preserved but inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityTag {
    KVP,
    Alert,
    #[serde(other)]
    Unknown,
}

impl ActivityTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityTag::KVP => "KVP",
            ActivityTag::Alert => "Alert",
            ActivityTag::Unknown => "Unknown",
        }
    }

    /// Tags that drive chips and deadline declination.
    pub fn is_exception(&self) -> bool {
        matches!(self, ActivityTag::KVP | ActivityTag::Alert)
    }
}

/// Direction of a phone call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Direction {
    Incoming,
    Outgoing,
    #[serde(other)]
    Unknown,
}

/// Where an appointment takes place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentKind {
    InternalAppointment,
    ExternalAppointment,
    #[serde(other)]
    Unknown,
}

/// One activity record as delivered by the feed.
///
/// All timestamps are optional: short-view payloads omit whichever the
/// backend did not compute, and every consumer downstream handles absence
/// by omission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub activity_id: String,

    pub activity_type: ActivityType,

    #[serde(default)]
    pub state: ActivityState,

    /// Card title; falls back to the channel name when empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,

    /// Free-text closing status entered by the operator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_tag: Option<ActivityTag>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planned_start_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,

    /// Top-level duplicate of `additionalData.phoneCall.direction`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_call_direction: Option<Direction>,

    /// Top-level duplicate of `additionalData.appointment.appointmentType`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<AppointmentKind>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_full_name: Option<String>,

    /// Client identifier used to build the dashboard route.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pfp_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<AdditionalData>,
}

impl Activity {
    /// The channel payload matching this record's own `activityType`.
    pub fn channel_data(&self) -> Option<Channel<'_>> {
        self.additional_data
            .as_ref()
            .and_then(|data| data.for_type(self.activity_type))
    }

    /// Top-level tag, falling back to the tag nested in the payload that
    /// matches `activityType`.
    pub fn effective_tag(&self) -> Option<ActivityTag> {
        self.activity_tag
            .or_else(|| self.channel_data().and_then(|channel| channel.tag()))
    }

    /// Top-level direction, falling back to `additionalData.phoneCall`.
    /// The nested lookup ignores `activityType` on purpose: the feed keys it
    /// by channel name, not by the record's type.
    pub fn phone_direction(&self) -> Option<Direction> {
        self.phone_call_direction.or_else(|| {
            self.additional_data
                .as_ref()
                .and_then(|data| data.phone_call.as_ref())
                .and_then(|call| call.direction)
        })
    }

    /// Top-level appointment kind, falling back to
    /// `additionalData.appointment`.
    pub fn appointment_kind(&self) -> Option<AppointmentKind> {
        self.appointment_type.or_else(|| {
            self.additional_data
                .as_ref()
                .and_then(|data| data.appointment.as_ref())
                .and_then(|meeting| meeting.appointment_type)
        })
    }

    pub fn description(&self) -> Option<&str> {
        self.channel_data().and_then(|channel| channel.description())
    }

    pub fn contact_result(&self) -> Option<&str> {
        self.channel_data()
            .and_then(|channel| channel.contact_result())
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.channel_data()
            .and_then(|channel| channel.phone_number())
    }
}
