use actcard_types::{
    Activity, ActivityType, AssetType, Channel, PayoutStatus, PayoutTaskData, PayoutType,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::keys;

fn nonempty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}

/// One section of the expanded detail view, in render order. Sections that
/// would have nothing to say are absent rather than empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "section", rename_all = "snake_case")]
pub enum DetailSection<'a> {
    ClientInfo {
        name: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        phone_number: Option<&'a str>,
        /// Present only when the client can be linked to a dashboard.
        #[serde(skip_serializing_if = "Option::is_none")]
        client_id: Option<&'a str>,
    },
    PayoutInfo(PayoutInfoBlock<'a>),
    Description(DescriptionBlock<'a>),
    ChannelData(ChannelBlock<'a>),
    Owner {
        name: &'a str,
    },
    Created {
        #[serde(skip_serializing_if = "Option::is_none")]
        created_by: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        create_date: Option<DateTime<Utc>>,
    },
}

/// Why-this-payout summary, shown only for closed payout tasks.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutInfoBlock<'a> {
    pub type_line: PayoutTypeLine,
    /// Second line; absent when the payout type is missing or unrecognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<PayoutDetailLine<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "line", content = "value", rename_all = "snake_case")]
pub enum PayoutTypeLine {
    Known(PayoutType),
    Missing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "line", content = "value", rename_all = "snake_case")]
pub enum PayoutDetailLine<'a> {
    /// External payout: the reason, detail text preferred over the short one.
    Reason(&'a str),
    ReasonMissing,
    /// Internal transfer: the target product.
    Product(&'a str),
    ProductMissing,
}

impl PayoutDetailLine<'_> {
    pub fn missing_key(&self) -> Option<&'static str> {
        match self {
            PayoutDetailLine::ReasonMissing => Some("App.ActivityDetails.payoutReasonMissing"),
            PayoutDetailLine::ProductMissing => Some("App.ActivityDetails.productMissing"),
            _ => None,
        }
    }
}

/// Operator-entered outcome text for the activity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptionBlock<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_result: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    /// Appointment-only sentence prefixed to the contact result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_visit: Option<ClientVisit>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ClientVisit {
    Came,
    DidNotCome,
}

impl ClientVisit {
    pub fn translation_key(&self) -> String {
        let suffix = match self {
            ClientVisit::Came => "clientHasCome",
            ClientVisit::DidNotCome => "clientHasNotCome",
        };
        format!("{}{}", keys::DETAILS_PREFIX, suffix)
    }
}

/// Channel-specific body of the detail view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "channel", rename_all = "snake_case")]
pub enum ChannelBlock<'a> {
    Appointment {
        address: &'a str,
    },
    ServiceMessage {
        text: &'a str,
    },
    PayoutOrder(PayoutOrderBlock<'a>),
    /// Email and portal news carry raw HTML; the host decides how to open it.
    Markup {
        markup: &'a str,
        action: MarkupAction,
    },
    Sms {
        text: &'a str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkupAction {
    OpenEmail,
    OpenNews,
}

impl MarkupAction {
    /// Catalog key of the "open in viewer" control.
    pub fn hint_key(&self) -> &'static str {
        match self {
            MarkupAction::OpenEmail => "App.ActivityDetails.openEmail",
            MarkupAction::OpenNews => "App.ActivityDetails.openNews",
        }
    }
}

/// Order header plus agreement facts for a payout task.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutOrderBlock<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<AssetType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PayoutStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement_number: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sum: Option<Decimal>,
    /// Present only for security payouts with something to show.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security: Option<SecurityLine<'a>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SecurityLine<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<u32>,
}

impl PayoutOrderBlock<'_> {
    /// Header row exists when any of asset type, order date or status do.
    pub fn has_header(&self) -> bool {
        self.asset_type.is_some() || self.order_date.is_some() || self.status.is_some()
    }

    pub fn is_empty(&self) -> bool {
        !self.has_header()
            && self.agreement_number.is_none()
            && self.sum.is_none()
            && self.security.is_none()
    }
}

fn payout_order_block(payout: &PayoutTaskData) -> PayoutOrderBlock<'_> {
    let security = if payout.asset_type == Some(AssetType::Security) {
        let line = SecurityLine {
            name: nonempty(payout.security_name.as_deref()),
            amount: payout.security_amount,
        };
        (line.name.is_some() || line.amount.is_some()).then_some(line)
    } else {
        None
    };

    PayoutOrderBlock {
        asset_type: payout.asset_type,
        order_date: payout.order_date,
        status: payout.payout_status,
        agreement_number: nonempty(payout.agreement_number.as_deref()),
        sum: payout.payout_sum,
        security,
    }
}

fn payout_info_block(activity: &Activity) -> PayoutInfoBlock<'_> {
    let payout = activity
        .additional_data
        .as_ref()
        .and_then(|data| data.payout_task.as_ref());

    let payout_type = payout.and_then(|p| p.payout_type);
    let type_line = match payout_type {
        Some(PayoutType::ExternalPayout) => PayoutTypeLine::Known(PayoutType::ExternalPayout),
        Some(PayoutType::InternalPayout) => PayoutTypeLine::Known(PayoutType::InternalPayout),
        Some(PayoutType::Unknown) | None => PayoutTypeLine::Missing,
    };

    let detail = match payout_type {
        Some(PayoutType::ExternalPayout) => {
            let reason = payout.and_then(|p| {
                nonempty(p.payout_reason_detail.as_deref())
                    .or_else(|| nonempty(p.payout_reason.as_deref()))
            });
            Some(match reason {
                Some(text) => PayoutDetailLine::Reason(text),
                None => PayoutDetailLine::ReasonMissing,
            })
        }
        Some(PayoutType::InternalPayout) => {
            let product = payout.and_then(|p| nonempty(p.product.as_deref()));
            Some(match product {
                Some(text) => PayoutDetailLine::Product(text),
                None => PayoutDetailLine::ProductMissing,
            })
        }
        _ => None,
    };

    PayoutInfoBlock { type_line, detail }
}

/// Contact result and description, with the appointment visit sentence when
/// it applies. `None` when neither text exists.
pub fn description_block(activity: &Activity) -> Option<DescriptionBlock<'_>> {
    let contact_result = nonempty(activity.contact_result());
    let description = nonempty(activity.description());
    if contact_result.is_none() && description.is_none() {
        return None;
    }

    // The visit flag always lives under the appointment payload, and the
    // sentence only accompanies a contact result on appointment records.
    // An unrecorded flag reads as "did not come", as the desk expects.
    let client_visit = (activity.activity_type == ActivityType::Appointment
        && contact_result.is_some())
    .then(|| {
        let came = activity
            .additional_data
            .as_ref()
            .and_then(|data| data.appointment.as_ref())
            .and_then(|meeting| meeting.is_client_has_come)
            .unwrap_or(false);
        if came {
            ClientVisit::Came
        } else {
            ClientVisit::DidNotCome
        }
    });

    Some(DescriptionBlock {
        contact_result,
        description,
        client_visit,
    })
}

/// The channel body for whatever payload is populated. Phone calls have no
/// body of their own; empty payloads produce nothing.
pub fn channel_block(activity: &Activity) -> Option<ChannelBlock<'_>> {
    let data = activity.additional_data.as_ref()?;
    match data.channel()? {
        Channel::PhoneCall(_) => None,
        Channel::Appointment(meeting) => nonempty(meeting.address.as_deref())
            .map(|address| ChannelBlock::Appointment { address }),
        Channel::ServiceMessage(message) => nonempty(message.text.as_deref())
            .map(|text| ChannelBlock::ServiceMessage { text }),
        Channel::PayoutTask(payout) => {
            let block = payout_order_block(payout);
            (!block.is_empty()).then_some(ChannelBlock::PayoutOrder(block))
        }
        Channel::Email(email) => nonempty(email.message_text.as_deref()).map(|markup| {
            ChannelBlock::Markup {
                markup,
                action: MarkupAction::OpenEmail,
            }
        }),
        Channel::Sms(sms) => {
            nonempty(sms.message_text.as_deref()).map(|text| ChannelBlock::Sms { text })
        }
        Channel::WebportalNews(news) => nonempty(news.message_text.as_deref()).map(|markup| {
            ChannelBlock::Markup {
                markup,
                action: MarkupAction::OpenNews,
            }
        }),
    }
}

/// Ordered plan of the expanded detail view.
///
/// Order is fixed: client, payout summary, outcome text, channel body,
/// owner, created-by. Gates:
/// - client info needs a client name;
/// - the payout summary appears only on closed payout tasks;
/// - the owner row is suppressed for service messages (system-generated);
/// - the created row needs at least one of author and date.
pub fn detail_sections(activity: &Activity) -> Vec<DetailSection<'_>> {
    let mut sections = Vec::new();

    if let Some(name) = nonempty(activity.client_full_name.as_deref()) {
        sections.push(DetailSection::ClientInfo {
            name,
            phone_number: nonempty(activity.phone_number()),
            client_id: nonempty(activity.pfp_id.as_deref()),
        });
    }

    if activity.activity_type == ActivityType::PayoutTask && activity.state.is_closed() {
        sections.push(DetailSection::PayoutInfo(payout_info_block(activity)));
    }

    if let Some(block) = description_block(activity) {
        sections.push(DetailSection::Description(block));
    }

    if let Some(block) = channel_block(activity) {
        sections.push(DetailSection::ChannelData(block));
    }

    if activity.activity_type != ActivityType::ServiceMessage {
        if let Some(name) = nonempty(activity.owner_full_name.as_deref()) {
            sections.push(DetailSection::Owner { name });
        }
    }

    let created_by = nonempty(activity.created_by_full_name.as_deref());
    if created_by.is_some() || activity.create_date.is_some() {
        sections.push(DetailSection::Created {
            created_by,
            create_date: activity.create_date,
        });
    }

    sections
}
