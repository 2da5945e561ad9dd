// Resolver module - Presentation decisions (card facts, chip, detail plan)
// This layer sits between parsed activity records (types) and rendering

pub mod chip;
pub mod declination;
pub mod details;
pub mod facts;
pub mod keys;

pub use chip::{chip_facts, ChipFacts, ChipKind, NoticeKind};
pub use declination::{declination_bucket, DeclinationBucket};
pub use details::{
    channel_block, description_block, detail_sections, ChannelBlock, ClientVisit,
    DescriptionBlock, DetailSection, MarkupAction, PayoutDetailLine, PayoutInfoBlock,
    PayoutOrderBlock, PayoutTypeLine, SecurityLine,
};
pub use facts::{
    display_timestamp, icon_subtype, resolve, timestamp_source, title, tooltip_key, IconKey,
    IconSubtype, PresentationFacts, TextFact, TimestampSource, TooltipKey,
};

use actcard_types::Activity;
use chrono::NaiveDate;

// Façade API - Stable public interface for rendering layers
// Callers should use these functions instead of reaching into modules

/// Resolve everything the compact card needs for one activity.
pub fn resolve_card(activity: &Activity, today: NaiveDate) -> PresentationFacts {
    facts::resolve(activity, today)
}

/// Plan the expanded detail view: ordered sections, empty ones omitted.
pub fn plan_details(activity: &Activity) -> Vec<DetailSection<'_>> {
    details::detail_sections(activity)
}
