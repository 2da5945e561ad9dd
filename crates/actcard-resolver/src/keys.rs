//! Translation key vocabulary.
//!
//! The resolver never produces display text, only keys into the host's
//! message catalog (plus literal pass-through for operator-entered text).
//! Prefixes live here so every composition site agrees on spelling.

use actcard_types::ActivityType;

pub const CARD_PREFIX: &str = "App.ActivityCard.";
pub const TOOLTIP_PREFIX: &str = "App.ActivityCard.tooltip.";
pub const DECLINATION_PREFIX: &str = "App.ActivityCard.declination.";
pub const ASSET_TYPE_PREFIX: &str = "App.ActivityCard.payoutType.";
pub const DETAILS_PREFIX: &str = "App.ActivityDetails.";

pub const ACTIVITY_TYPE_ENUM: &str = "enum.ActivityType.";
pub const ACTIVITY_STATE_ENUM: &str = "enum.ActivityStateType.";
pub const ACTIVITY_TAG_ENUM: &str = "enum.ActivityTag.";
pub const PAYOUT_TYPE_ENUM: &str = "enum.PayoutType.";
pub const PAYOUT_STATUS_ENUM: &str = "enum.PayoutStatus.";

/// Title key used when an activity has no subject.
pub fn activity_type_title(activity_type: ActivityType) -> String {
    format!("{}{}", ACTIVITY_TYPE_ENUM, activity_type.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_key_uses_wire_name() {
        assert_eq!(
            activity_type_title(ActivityType::WebportalNews),
            "enum.ActivityType.webportalNews"
        );
    }
}
