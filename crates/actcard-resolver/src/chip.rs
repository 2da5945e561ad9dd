use actcard_types::{Activity, ActivityState, ActivityTag, ActivityType};
use serde::Serialize;

use crate::facts::TextFact;
use crate::keys;

/// Palette the chip renders with. Mirrors what the chip *means*, not how a
/// particular surface colors it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ChipKind {
    /// Lifecycle chip for a finished interaction.
    State(ActivityState),
    /// Workflow tag chip on an activity that is still open.
    Tag(ActivityTag),
    /// Client-notification chip on service messages.
    Notice(NoticeKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    Notified,
    NotNotified,
}

impl NoticeKind {
    pub fn key_suffix(&self) -> &'static str {
        match self {
            NoticeKind::Notified => "notified",
            NoticeKind::NotNotified => "notNotified",
        }
    }

    pub fn translation_key(&self) -> String {
        format!("{}{}", keys::CARD_PREFIX, self.key_suffix())
    }
}

/// A chip the card should show: what it is plus what it says. The two always
/// travel together; there is no typed-but-unlabelled chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChipFacts {
    #[serde(flatten)]
    pub kind: ChipKind,
    pub label: TextFact,
}

// The four rules below are evaluated strictly in order; the first one that
// yields a chip wins. Order is visible behavior: a completed phone call with
// an Alert tag shows the state chip, not the tag chip.
const CHIP_RULES: [ChipRule; 4] = [
    ChipRule::ClosedInteraction,
    ChipRule::OpenExceptionTag,
    ChipRule::ClosedStatus,
    ChipRule::ServiceNotice,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChipRule {
    /// Closed phone call or appointment: lifecycle chip.
    ClosedInteraction,
    /// Open activity tagged KVP/Alert: tag chip.
    OpenExceptionTag,
    /// Closed activity with operator-entered status: state-colored literal.
    ClosedStatus,
    /// Service message with payload present: notification chip.
    ServiceNotice,
}

impl ChipRule {
    fn evaluate(&self, activity: &Activity) -> Option<ChipFacts> {
        match self {
            ChipRule::ClosedInteraction => {
                if !(activity.activity_type.is_interaction() && activity.state.is_closed()) {
                    return None;
                }
                Some(ChipFacts {
                    kind: ChipKind::State(activity.state),
                    label: TextFact::key(format!(
                        "{}{}",
                        keys::ACTIVITY_STATE_ENUM,
                        activity.state.as_str()
                    )),
                })
            }

            ChipRule::OpenExceptionTag => {
                if activity.state.is_closed() {
                    return None;
                }
                let tag = activity.effective_tag().filter(ActivityTag::is_exception)?;
                Some(ChipFacts {
                    kind: ChipKind::Tag(tag),
                    label: TextFact::key(format!("{}{}", keys::ACTIVITY_TAG_ENUM, tag.as_str())),
                })
            }

            ChipRule::ClosedStatus => {
                if !activity.state.is_closed() {
                    return None;
                }
                let status = activity.status.as_deref().filter(|s| !s.is_empty())?;
                Some(ChipFacts {
                    kind: ChipKind::State(activity.state),
                    label: TextFact::literal(status),
                })
            }

            ChipRule::ServiceNotice => {
                if activity.activity_type != ActivityType::ServiceMessage {
                    return None;
                }
                let data = activity.additional_data.as_ref()?;
                let notified = data
                    .service_message
                    .as_ref()
                    .is_some_and(|message| message.is_notified());
                let notice = if notified {
                    NoticeKind::Notified
                } else {
                    NoticeKind::NotNotified
                };
                Some(ChipFacts {
                    kind: ChipKind::Notice(notice),
                    label: TextFact::key(notice.translation_key()),
                })
            }
        }
    }
}

/// The chip for an activity, or `None` when nothing applies.
pub fn chip_facts(activity: &Activity) -> Option<ChipFacts> {
    CHIP_RULES.iter().find_map(|rule| rule.evaluate(activity))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actcard_testing::{builders, ActivityBuilder};
    use actcard_types::{PhoneCallData, ServiceMessageData, WebportalNewsData};

    #[test]
    fn test_closed_interaction_shows_the_state_chip() {
        for state in [ActivityState::Completed, ActivityState::Canceled] {
            let activity = ActivityBuilder::new(ActivityType::PhoneCall)
                .state(state)
                .build();

            let chip = chip_facts(&activity).unwrap();
            assert_eq!(chip.kind, ChipKind::State(state));
            assert_eq!(
                chip.label,
                TextFact::key(format!("enum.ActivityStateType.{}", state.as_str()))
            );
        }
    }

    #[test]
    fn test_state_chip_outranks_tag_and_status() {
        let activity = ActivityBuilder::new(ActivityType::Appointment)
            .state(ActivityState::Completed)
            .tag(ActivityTag::Alert)
            .status("Готово")
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::State(ActivityState::Completed));
    }

    #[test]
    fn test_open_tagged_activity_shows_the_tag_chip() {
        let activity = ActivityBuilder::new(ActivityType::Email)
            .tag(ActivityTag::KVP)
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Tag(ActivityTag::KVP));
        assert_eq!(chip.label, TextFact::key("enum.ActivityTag.KVP"));
    }

    #[test]
    fn test_nested_tag_counts_for_the_tag_chip() {
        let activity = ActivityBuilder::new(ActivityType::WebportalNews)
            .additional_data(actcard_types::AdditionalData::webportal_news(
                WebportalNewsData {
                    activity_tag: Some(ActivityTag::Alert),
                    ..Default::default()
                },
            ))
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Tag(ActivityTag::Alert));
    }

    #[test]
    fn test_unrecognized_tag_yields_no_chip() {
        let activity = ActivityBuilder::new(ActivityType::Email)
            .tag(ActivityTag::Unknown)
            .build();

        assert_eq!(chip_facts(&activity), None);
    }

    #[test]
    fn test_closed_non_interaction_uses_the_status_literal() {
        let activity = ActivityBuilder::new(ActivityType::WebportalNews)
            .state(ActivityState::Completed)
            .status("Обработано")
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::State(ActivityState::Completed));
        assert_eq!(chip.label, TextFact::literal("Обработано"));
    }

    #[test]
    fn test_closed_non_interaction_without_status_has_no_chip() {
        let activity = ActivityBuilder::new(ActivityType::WebportalNews)
            .state(ActivityState::Completed)
            .build();

        assert_eq!(chip_facts(&activity), None);
    }

    #[test]
    fn test_empty_status_counts_as_absent() {
        let activity = ActivityBuilder::new(ActivityType::Email)
            .state(ActivityState::Canceled)
            .status("")
            .build();

        assert_eq!(chip_facts(&activity), None);
    }

    #[test]
    fn test_closed_tag_does_not_fire_the_tag_rule() {
        // A canceled email with an Alert tag and no status: the tag rule is
        // blocked by the closed state and the status rule has no text.
        let activity = ActivityBuilder::new(ActivityType::Email)
            .state(ActivityState::Canceled)
            .tag(ActivityTag::Alert)
            .build();

        assert_eq!(chip_facts(&activity), None);
    }

    #[test]
    fn test_service_message_notified() {
        let activity = ActivityBuilder::new(ActivityType::ServiceMessage)
            .service_message(builders::notified_service_message())
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Notice(NoticeKind::Notified));
        assert_eq!(chip.label, TextFact::key("App.ActivityCard.notified"));
    }

    #[test]
    fn test_service_message_with_flags_unset_is_not_notified() {
        let activity = ActivityBuilder::new(ActivityType::ServiceMessage)
            .service_message(ServiceMessageData {
                is_informed_callcenter: Some(false),
                ..Default::default()
            })
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Notice(NoticeKind::NotNotified));
    }

    #[test]
    fn test_empty_payload_still_counts_as_present() {
        let activity = ActivityBuilder::new(ActivityType::ServiceMessage)
            .additional_data(actcard_types::AdditionalData::default())
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Notice(NoticeKind::NotNotified));
    }

    #[test]
    fn test_service_message_without_payload_has_no_chip() {
        let activity = ActivityBuilder::new(ActivityType::ServiceMessage).build();
        assert_eq!(chip_facts(&activity), None);
    }

    #[test]
    fn test_open_service_message_with_tag_prefers_the_tag_chip() {
        let activity = ActivityBuilder::new(ActivityType::ServiceMessage)
            .tag(ActivityTag::KVP)
            .service_message(ServiceMessageData::default())
            .build();

        let chip = chip_facts(&activity).unwrap();
        assert_eq!(chip.kind, ChipKind::Tag(ActivityTag::KVP));
    }

    #[test]
    fn test_phone_tag_lookup_ignores_foreign_payloads() {
        // Tag sits under phoneCall but the record is an email: the feed's
        // type-keyed lookup must not see it.
        let activity = ActivityBuilder::new(ActivityType::Email)
            .additional_data(actcard_types::AdditionalData::phone_call(PhoneCallData {
                activity_tag: Some(ActivityTag::Alert),
                ..Default::default()
            }))
            .build();

        assert_eq!(chip_facts(&activity), None);
    }
}
