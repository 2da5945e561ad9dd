use actcard_types::Activity;
use chrono::NaiveDate;
use serde::Serialize;

use crate::keys;

/// Deadline proximity bucket for tagged activities.
///
/// Buckets exist only for "overdue" through "three days left"; anything
/// further out gets no badge at all. Each bucket maps to its own catalog key
/// because Russian day words decline irregularly (день / дня / дней).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclinationBucket {
    Overdue,
    ZeroDays,
    OneDay,
    TwoDays,
    ThreeDays,
}

impl DeclinationBucket {
    /// Bucket for a calendar-day distance, `days` being "deadline minus
    /// today". All negative distances collapse into `Overdue`.
    pub fn from_days_left(days: i64) -> Option<Self> {
        match days {
            d if d < 0 => Some(DeclinationBucket::Overdue),
            0 => Some(DeclinationBucket::ZeroDays),
            1 => Some(DeclinationBucket::OneDay),
            2 => Some(DeclinationBucket::TwoDays),
            3 => Some(DeclinationBucket::ThreeDays),
            _ => None,
        }
    }

    pub fn key_suffix(&self) -> &'static str {
        match self {
            DeclinationBucket::Overdue => "overdue",
            DeclinationBucket::ZeroDays => "zeroDays",
            DeclinationBucket::OneDay => "oneDay",
            DeclinationBucket::TwoDays => "twoDays",
            DeclinationBucket::ThreeDays => "threeDays",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("{}{}", keys::DECLINATION_PREFIX, self.key_suffix())
    }
}

/// Deadline bucket for an activity, or `None` when no badge applies.
///
/// Only KVP/Alert-tagged activities carry a deadline. The anchor date is
/// `plannedStartDate`, falling back to `createDate`; the distance is counted
/// in calendar days with the time of day stripped, so 23:59 today is still
/// "zero days". `today` is passed in rather than read from a clock, which
/// keeps the whole resolver a pure function of its inputs.
pub fn declination_bucket(activity: &Activity, today: NaiveDate) -> Option<DeclinationBucket> {
    let tag = activity.effective_tag()?;
    if !tag.is_exception() {
        return None;
    }

    let anchor = activity.planned_start_date.or(activity.create_date)?;
    let days_left = anchor.date_naive().signed_duration_since(today).num_days();
    DeclinationBucket::from_days_left(days_left)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actcard_testing::{fixed_today, ActivityBuilder};
    use actcard_types::{ActivityTag, ActivityType};
    use chrono::Duration;

    fn tagged(offset_days: i64) -> Activity {
        ActivityBuilder::new(ActivityType::PhoneCall)
            .tag(ActivityTag::KVP)
            .planned_start(
                fixed_today().and_hms_opt(23, 59, 0).unwrap().and_utc()
                    + Duration::days(offset_days),
            )
            .build()
    }

    #[test]
    fn test_buckets_cover_minus_one_through_three() {
        let today = fixed_today();

        assert_eq!(
            declination_bucket(&tagged(-1), today),
            Some(DeclinationBucket::Overdue)
        );
        assert_eq!(
            declination_bucket(&tagged(0), today),
            Some(DeclinationBucket::ZeroDays)
        );
        assert_eq!(
            declination_bucket(&tagged(1), today),
            Some(DeclinationBucket::OneDay)
        );
        assert_eq!(
            declination_bucket(&tagged(2), today),
            Some(DeclinationBucket::TwoDays)
        );
        assert_eq!(
            declination_bucket(&tagged(3), today),
            Some(DeclinationBucket::ThreeDays)
        );
    }

    #[test]
    fn test_beyond_three_days_has_no_badge() {
        assert_eq!(declination_bucket(&tagged(4), fixed_today()), None);
        assert_eq!(declination_bucket(&tagged(45), fixed_today()), None);
    }

    #[test]
    fn test_far_overdue_still_collapses_to_overdue() {
        assert_eq!(
            declination_bucket(&tagged(-30), fixed_today()),
            Some(DeclinationBucket::Overdue)
        );
    }

    #[test]
    fn test_time_of_day_does_not_shift_the_bucket() {
        // 23:59 two days out is still two calendar days, not "almost three".
        assert_eq!(
            declination_bucket(&tagged(2), fixed_today()),
            Some(DeclinationBucket::TwoDays)
        );
    }

    #[test]
    fn test_untagged_activity_has_no_deadline() {
        let activity = ActivityBuilder::new(ActivityType::PhoneCall)
            .planned_start(fixed_today().and_hms_opt(10, 0, 0).unwrap().and_utc())
            .build();
        assert_eq!(declination_bucket(&activity, fixed_today()), None);
    }

    #[test]
    fn test_unrecognized_tag_has_no_deadline() {
        let activity = ActivityBuilder::new(ActivityType::PhoneCall)
            .tag(ActivityTag::Unknown)
            .planned_start(fixed_today().and_hms_opt(10, 0, 0).unwrap().and_utc())
            .build();
        assert_eq!(declination_bucket(&activity, fixed_today()), None);
    }

    #[test]
    fn test_nested_tag_also_arms_the_deadline() {
        use actcard_types::PhoneCallData;

        let activity = ActivityBuilder::new(ActivityType::PhoneCall)
            .phone_call(PhoneCallData {
                activity_tag: Some(ActivityTag::Alert),
                ..Default::default()
            })
            .planned_start(fixed_today().and_hms_opt(10, 0, 0).unwrap().and_utc())
            .build();
        assert_eq!(
            declination_bucket(&activity, fixed_today()),
            Some(DeclinationBucket::ZeroDays)
        );
    }

    #[test]
    fn test_create_date_is_the_fallback_anchor() {
        let activity = ActivityBuilder::new(ActivityType::Appointment)
            .tag(ActivityTag::Alert)
            .create_date(fixed_today().and_hms_opt(9, 30, 0).unwrap().and_utc() + Duration::days(1))
            .build();
        assert_eq!(
            declination_bucket(&activity, fixed_today()),
            Some(DeclinationBucket::OneDay)
        );
    }

    #[test]
    fn test_no_anchor_means_no_badge() {
        let activity = ActivityBuilder::new(ActivityType::Appointment)
            .tag(ActivityTag::Alert)
            .build();
        assert_eq!(declination_bucket(&activity, fixed_today()), None);
    }

    #[test]
    fn test_translation_keys() {
        assert_eq!(
            DeclinationBucket::TwoDays.translation_key(),
            "App.ActivityCard.declination.twoDays"
        );
        assert_eq!(
            DeclinationBucket::Overdue.translation_key(),
            "App.ActivityCard.declination.overdue"
        );
    }
}
