use actcard_types::{Activity, ActivityState, ActivityType, AppointmentKind, Direction};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::chip::{chip_facts, ChipFacts};
use crate::declination::{declination_bucket, DeclinationBucket};
use crate::keys;

/// Icon identifying the activity channel. Serialized names double as the
/// host's icon-set keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconKey {
    Phone,
    People,
    MailOutline,
    SmsOutlined,
    InfoOutlined,
    Payment,
    Receipt,
}

impl IconKey {
    /// `None` for an activity type outside the known set: the card renders
    /// without a channel icon instead of failing.
    pub fn for_type(activity_type: ActivityType) -> Option<Self> {
        match activity_type {
            ActivityType::PhoneCall => Some(IconKey::Phone),
            ActivityType::Appointment => Some(IconKey::People),
            ActivityType::Email => Some(IconKey::MailOutline),
            ActivityType::Sms => Some(IconKey::SmsOutlined),
            ActivityType::ServiceMessage => Some(IconKey::InfoOutlined),
            ActivityType::PayoutTask => Some(IconKey::Payment),
            ActivityType::WebportalNews => Some(IconKey::Receipt),
            ActivityType::Unknown => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IconKey::Phone => "phone",
            IconKey::People => "people",
            IconKey::MailOutline => "mail_outline",
            IconKey::SmsOutlined => "sms_outlined",
            IconKey::InfoOutlined => "info_outlined",
            IconKey::Payment => "payment",
            IconKey::Receipt => "receipt",
        }
    }
}

/// Direction overlay on the channel icon. Only calls and appointments have
/// one: received for incoming/office, made for outgoing/field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconSubtype {
    CallReceived,
    CallMade,
}

impl IconSubtype {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconSubtype::CallReceived => "call_received",
            IconSubtype::CallMade => "call_made",
        }
    }
}

pub fn icon_subtype(activity: &Activity) -> Option<IconSubtype> {
    match activity.activity_type {
        ActivityType::PhoneCall => match activity.phone_direction()? {
            Direction::Incoming => Some(IconSubtype::CallReceived),
            Direction::Outgoing => Some(IconSubtype::CallMade),
            Direction::Unknown => None,
        },
        ActivityType::Appointment => match activity.appointment_kind()? {
            AppointmentKind::InternalAppointment => Some(IconSubtype::CallReceived),
            AppointmentKind::ExternalAppointment => Some(IconSubtype::CallMade),
            AppointmentKind::Unknown => None,
        },
        _ => None,
    }
}

/// Closed set of tooltip keys. Serialized values are the catalog key
/// suffixes, quirky spellings included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TooltipKey {
    #[serde(rename = "email")]
    Email,
    #[serde(rename = "payoutTask")]
    PayoutTask,
    #[serde(rename = "sms")]
    Sms,
    #[serde(rename = "serviceMessage")]
    ServiceMessage,
    #[serde(rename = "webportalNews")]
    WebportalNews,
    #[serde(rename = "appointment_inner")]
    AppointmentInner,
    #[serde(rename = "appointment_outer")]
    AppointmentOuter,
    #[serde(rename = "phoneCall_incoming")]
    PhoneCallIncoming,
    #[serde(rename = "phoneCall_outgoing")]
    PhoneCallOutgoing,
}

impl TooltipKey {
    pub fn key_suffix(&self) -> &'static str {
        match self {
            TooltipKey::Email => "email",
            TooltipKey::PayoutTask => "payoutTask",
            TooltipKey::Sms => "sms",
            TooltipKey::ServiceMessage => "serviceMessage",
            TooltipKey::WebportalNews => "webportalNews",
            TooltipKey::AppointmentInner => "appointment_inner",
            TooltipKey::AppointmentOuter => "appointment_outer",
            TooltipKey::PhoneCallIncoming => "phoneCall_incoming",
            TooltipKey::PhoneCallOutgoing => "phoneCall_outgoing",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("{}{}", keys::TOOLTIP_PREFIX, self.key_suffix())
    }
}

/// Tooltip for the channel icon.
///
/// Phone calls with no usable direction get no tooltip at all; composing a
/// key outside the closed set would only surface as a raw key to the user.
/// Appointments default to the in-office wording unless explicitly external.
pub fn tooltip_key(activity: &Activity) -> Option<TooltipKey> {
    match activity.activity_type {
        ActivityType::PhoneCall => match activity.phone_direction()? {
            Direction::Incoming => Some(TooltipKey::PhoneCallIncoming),
            Direction::Outgoing => Some(TooltipKey::PhoneCallOutgoing),
            Direction::Unknown => None,
        },
        ActivityType::Appointment => {
            if activity.appointment_kind() == Some(AppointmentKind::ExternalAppointment) {
                Some(TooltipKey::AppointmentOuter)
            } else {
                Some(TooltipKey::AppointmentInner)
            }
        }
        ActivityType::Email => Some(TooltipKey::Email),
        ActivityType::Sms => Some(TooltipKey::Sms),
        ActivityType::ServiceMessage => Some(TooltipKey::ServiceMessage),
        ActivityType::PayoutTask => Some(TooltipKey::PayoutTask),
        ActivityType::WebportalNews => Some(TooltipKey::WebportalNews),
        ActivityType::Unknown => None,
    }
}

/// Which timestamp field the card shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    PlannedStart,
    ActualEnd,
}

/// Closed activities show when they actually ended; everything else shows
/// when it is planned to start.
pub fn timestamp_source(state: ActivityState) -> TimestampSource {
    if state.is_closed() {
        TimestampSource::ActualEnd
    } else {
        TimestampSource::PlannedStart
    }
}

pub fn display_timestamp(activity: &Activity) -> Option<DateTime<Utc>> {
    match timestamp_source(activity.state) {
        TimestampSource::PlannedStart => activity.planned_start_date,
        TimestampSource::ActualEnd => activity.actual_end_date,
    }
}

/// A piece of text the host must produce: either a literal from the record
/// (operator input) or a key into the message catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum TextFact {
    Literal(String),
    Key(String),
}

impl TextFact {
    pub fn literal(value: impl Into<String>) -> Self {
        TextFact::Literal(value.into())
    }

    pub fn key(value: impl Into<String>) -> Self {
        TextFact::Key(value.into())
    }
}

/// Card title: the subject verbatim, or the channel name key when the
/// subject is missing or empty.
pub fn title(activity: &Activity) -> TextFact {
    match activity.subject.as_deref().filter(|s| !s.is_empty()) {
        Some(subject) => TextFact::literal(subject),
        None => TextFact::key(keys::activity_type_title(activity.activity_type)),
    }
}

/// Everything a card needs to render one activity, fully decided.
///
/// Rendering surfaces consume this record without re-reading the activity:
/// resolution happens exactly once, here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationFacts {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconKey>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_subtype: Option<IconSubtype>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipKey>,
    pub title: TextFact,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chip: Option<ChipFacts>,
    /// Deadline badge. Already gated: closed activities never carry one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declination: Option<DeclinationBucket>,
    pub timestamp_source: TimestampSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Resolve one activity into presentation facts.
///
/// Pure: same record and same `today` give the same facts, and the record
/// is never mutated.
pub fn resolve(activity: &Activity, today: NaiveDate) -> PresentationFacts {
    let declination = if activity.state.is_closed() {
        None
    } else {
        declination_bucket(activity, today)
    };

    PresentationFacts {
        icon: IconKey::for_type(activity.activity_type),
        icon_subtype: icon_subtype(activity),
        tooltip: tooltip_key(activity),
        title: title(activity),
        chip: chip_facts(activity),
        declination,
        timestamp_source: timestamp_source(activity.state),
        timestamp: display_timestamp(activity),
    }
}
