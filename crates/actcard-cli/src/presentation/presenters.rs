//! Activity record to view model.
//!
//! The resolver decides what to show; this layer decides what it says on a
//! terminal. All catalog lookups and text formatting happen here, so views
//! and the JSON renderer stay dumb.

use actcard_resolver::{
    keys, plan_details, resolve_card, ChannelBlock, ChipFacts, ChipKind, DeclinationBucket,
    DetailSection, NoticeKind, PayoutDetailLine, PayoutOrderBlock, PayoutTypeLine, SecurityLine,
    TextFact,
};
use actcard_types::{
    Activity, ActivityState, ActivityTag, AssetType, FetchError, PayoutStatus, RemoteData,
};
use chrono::{DateTime, NaiveDate, Utc};

use crate::config::Config;
use crate::presentation::formatters::{
    format_date_time, format_money, format_phone_number, strip_markup, truncate,
};
use crate::presentation::i18n;
use crate::presentation::view_models::{
    CardViewModel, CardViewState, ChipAccent, ChipViewModel, DeadlineViewModel, DetailsViewModel,
    SectionViewModel,
};

const MARKUP_PREVIEW_CHARS: usize = 120;

/// Card for any point of the fetch lifecycle. Initial and pending fetches
/// both draw the skeleton, matching the desk's loading shimmer.
pub fn present_card(remote: &RemoteData<FetchError, Activity>, today: NaiveDate) -> CardViewState {
    remote.fold(
        || CardViewState::Skeleton,
        || CardViewState::Skeleton,
        |error| CardViewState::Error {
            message: error.to_string(),
        },
        |activity| CardViewState::Ready(card_view_model(activity, today)),
    )
}

pub fn card_view_model(activity: &Activity, today: NaiveDate) -> CardViewModel {
    let facts = resolve_card(activity, today);

    CardViewModel {
        icon: facts.icon.map(|icon| icon.as_str()),
        icon_subtype: facts.icon_subtype.map(|subtype| subtype.as_str()),
        tooltip: facts
            .tooltip
            .map(|key| i18n::message(&key.translation_key()).to_string()),
        title: resolve_text(&facts.title),
        chip: facts.chip.as_ref().map(chip_view),
        deadline: facts.declination.map(deadline_view),
        timestamp: facts.timestamp.map(format_date_time),
    }
}

pub fn details_view_model(
    activity: &Activity,
    today: NaiveDate,
    config: &Config,
) -> DetailsViewModel {
    let sections = plan_details(activity)
        .into_iter()
        .map(|section| section_view(section, config))
        .collect();

    DetailsViewModel {
        card: card_view_model(activity, today),
        sections,
    }
}

fn resolve_text(fact: &TextFact) -> String {
    match fact {
        TextFact::Literal(text) => text.clone(),
        TextFact::Key(key) => i18n::message(key).to_string(),
    }
}

fn chip_view(chip: &ChipFacts) -> ChipViewModel {
    ChipViewModel {
        accent: chip_accent(&chip.kind),
        label: resolve_text(&chip.label),
    }
}

fn chip_accent(kind: &ChipKind) -> ChipAccent {
    match kind {
        ChipKind::State(ActivityState::Completed) => ChipAccent::Success,
        ChipKind::State(ActivityState::Canceled) => ChipAccent::Danger,
        ChipKind::State(_) => ChipAccent::Neutral,
        ChipKind::Tag(ActivityTag::KVP) => ChipAccent::Warning,
        ChipKind::Tag(ActivityTag::Alert) => ChipAccent::Danger,
        ChipKind::Tag(_) => ChipAccent::Neutral,
        ChipKind::Notice(NoticeKind::Notified) => ChipAccent::Success,
        ChipKind::Notice(NoticeKind::NotNotified) => ChipAccent::Warning,
    }
}

fn deadline_view(bucket: DeclinationBucket) -> DeadlineViewModel {
    DeadlineViewModel {
        label: i18n::message(&bucket.translation_key()).to_string(),
        overdue: bucket == DeclinationBucket::Overdue,
    }
}

fn section_view(section: DetailSection<'_>, config: &Config) -> SectionViewModel {
    match section {
        DetailSection::ClientInfo {
            name,
            phone_number,
            client_id,
        } => SectionViewModel::Client {
            name: name.to_string(),
            phone: phone_number.map(format_phone_number),
            profile_url: client_id.map(|id| config.routes.client_dashboard_url(id)),
        },
        DetailSection::PayoutInfo(block) => SectionViewModel::PayoutSummary {
            type_line: payout_type_text(&block.type_line),
            detail: block.detail.as_ref().map(payout_detail_text),
        },
        DetailSection::Description(block) => SectionViewModel::Outcome {
            visit: block
                .client_visit
                .map(|visit| format!("{}.", i18n::message(&visit.translation_key()))),
            contact_result: block.contact_result.map(str::to_string),
            description: block.description.map(str::to_string),
        },
        DetailSection::ChannelData(block) => channel_section(block),
        DetailSection::Owner { name } => SectionViewModel::Owner {
            name: name.to_string(),
        },
        DetailSection::Created {
            created_by,
            create_date,
        } => SectionViewModel::Created {
            line: created_line(created_by, create_date),
        },
    }
}

fn channel_section(block: ChannelBlock<'_>) -> SectionViewModel {
    match block {
        ChannelBlock::Appointment { address } => SectionViewModel::Address {
            address: address.to_string(),
        },
        ChannelBlock::ServiceMessage { text } | ChannelBlock::Sms { text } => {
            SectionViewModel::Message {
                text: text.to_string(),
            }
        }
        ChannelBlock::PayoutOrder(order) => SectionViewModel::PayoutOrder {
            header: payout_header(&order),
            agreement: order
                .agreement_number
                .map(|number| format!("Договор: {}", number)),
            sum: order.sum.map(format_money),
            security: order.security.as_ref().map(security_text),
        },
        ChannelBlock::Markup { markup, action } => SectionViewModel::Markup {
            preview: truncate(&strip_markup(markup), MARKUP_PREVIEW_CHARS),
            hint: i18n::message(action.hint_key()).to_string(),
        },
    }
}

fn payout_type_text(line: &PayoutTypeLine) -> String {
    match line {
        PayoutTypeLine::Known(payout_type) => i18n::message(&format!(
            "{}{}",
            keys::PAYOUT_TYPE_ENUM,
            payout_type.as_str()
        ))
        .to_string(),
        PayoutTypeLine::Missing => {
            i18n::message("App.ActivityDetails.payoutTypeMissing").to_string()
        }
    }
}

fn payout_detail_text(line: &PayoutDetailLine<'_>) -> String {
    match line {
        PayoutDetailLine::Reason(text) | PayoutDetailLine::Product(text) => (*text).to_string(),
        missing => missing
            .missing_key()
            .map(|key| i18n::message(key).to_string())
            .unwrap_or_default(),
    }
}

/// Header row of the order: asset kind, order date and status, joined with
/// a middle dot. Unrecognized enum values leave no trace.
fn payout_header(order: &PayoutOrderBlock<'_>) -> Option<String> {
    let mut parts: Vec<String> = Vec::new();

    if let Some(asset) = order.asset_type.filter(|a| *a != AssetType::Unknown) {
        parts.push(
            i18n::message(&format!("{}{}", keys::ASSET_TYPE_PREFIX, asset.as_str())).to_string(),
        );
    }
    if let Some(date) = order.order_date {
        parts.push(format_date_time(date));
    }
    if let Some(status) = order.status.filter(|s| *s != PayoutStatus::Unknown) {
        parts.push(
            i18n::message(&format!("{}{}", keys::PAYOUT_STATUS_ENUM, status.as_str())).to_string(),
        );
    }

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" · "))
    }
}

fn security_text(line: &SecurityLine<'_>) -> String {
    match (line.name, line.amount) {
        (Some(name), Some(amount)) => format!("{}, {} шт.", name, amount),
        (Some(name), None) => name.to_string(),
        (None, Some(amount)) => format!("{} шт.", amount),
        (None, None) => String::new(),
    }
}

fn created_line(created_by: Option<&str>, create_date: Option<DateTime<Utc>>) -> String {
    let mut line = String::from("Создана");
    if let Some(name) = created_by {
        line.push(' ');
        line.push_str(name);
    }
    if let Some(date) = create_date {
        line.push(' ');
        line.push_str(&format_date_time(date));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use actcard_testing::{builders, date_mock, fixed_today, ActivityBuilder};
    use actcard_types::ActivityType;

    fn find_section<'a>(
        model: &'a DetailsViewModel,
        pick: impl Fn(&SectionViewModel) -> bool,
    ) -> &'a SectionViewModel {
        model
            .sections
            .iter()
            .find(|section| pick(section))
            .expect("section missing")
    }

    #[test]
    fn test_skeleton_for_unsettled_fetches() {
        for remote in [RemoteData::Initial, RemoteData::Pending] {
            let state = present_card(&remote, fixed_today());
            assert!(matches!(state, CardViewState::Skeleton));
        }
    }

    #[test]
    fn test_error_card_carries_the_message() {
        let remote: RemoteData<FetchError, Activity> =
            RemoteData::Failure(FetchError::with_status("Сервис недоступен", 502));

        match present_card(&remote, fixed_today()) {
            CardViewState::Error { message } => {
                assert_eq!(message, "HTTP 502: Сервис недоступен");
            }
            other => panic!("expected error card, got {:?}", other),
        }
    }

    #[test]
    fn test_completed_payout_chip_is_green() {
        let activity = ActivityBuilder::new(ActivityType::PayoutTask)
            .state(ActivityState::Completed)
            .status("Исполнено")
            .build();

        let card = card_view_model(&activity, fixed_today());
        let chip = card.chip.expect("chip missing");
        assert_eq!(chip.accent, ChipAccent::Success);
        assert_eq!(chip.label, "Исполнено");
    }

    #[test]
    fn test_tag_chip_accents() {
        let kvp = ActivityBuilder::new(ActivityType::Email)
            .tag(ActivityTag::KVP)
            .build();
        let card = card_view_model(&kvp, fixed_today());
        let chip = card.chip.expect("chip missing");
        assert_eq!(chip.accent, ChipAccent::Warning);
        assert_eq!(chip.label, "КВП");

        let alert = ActivityBuilder::new(ActivityType::Email)
            .tag(ActivityTag::Alert)
            .build();
        let chip = card_view_model(&alert, fixed_today()).chip.expect("chip missing");
        assert_eq!(chip.accent, ChipAccent::Danger);
        assert_eq!(chip.label, "Важное");
    }

    #[test]
    fn test_title_key_resolves_through_the_catalog() {
        let activity = ActivityBuilder::new(ActivityType::PhoneCall).build();
        let card = card_view_model(&activity, fixed_today());
        assert_eq!(card.title, "Телефонный звонок");
        assert_eq!(card.icon, Some("phone"));
    }

    #[test]
    fn test_card_timestamp_is_formatted() {
        let activity = ActivityBuilder::new(ActivityType::Sms)
            .planned_start(date_mock())
            .build();

        let card = card_view_model(&activity, fixed_today());
        assert_eq!(card.timestamp.as_deref(), Some("1 января 2018 в 00:00"));
    }

    #[test]
    fn test_client_section_formats_phone_and_link() {
        let activity = ActivityBuilder::new(ActivityType::PhoneCall)
            .client("Васильев Клиент Иванович")
            .client_id("pfp-77")
            .phone_call(builders::incoming_call())
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::Client { .. })) {
            SectionViewModel::Client {
                name,
                phone,
                profile_url,
            } => {
                assert_eq!(name, "Васильев Клиент Иванович");
                assert_eq!(phone.as_deref(), Some("+7 919 455-70-07"));
                assert_eq!(profile_url.as_deref(), Some("/clients/pfp-77/dashboard"));
            }
            other => panic!("expected client section, got {:?}", other),
        }
    }

    #[test]
    fn test_visit_sentence_ends_with_a_period() {
        let activity = ActivityBuilder::new(ActivityType::Appointment)
            .state(ActivityState::Completed)
            .appointment(builders::appointment_with_visit(true))
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::Outcome { .. })) {
            SectionViewModel::Outcome {
                visit,
                contact_result,
                ..
            } => {
                assert_eq!(visit.as_deref(), Some("Клиент пришёл."));
                assert_eq!(contact_result.as_deref(), Some("Связался с клиентом"));
            }
            other => panic!("expected outcome section, got {:?}", other),
        }
    }

    #[test]
    fn test_payout_order_section_composes_every_row() {
        let activity = ActivityBuilder::new(ActivityType::PayoutTask)
            .state(ActivityState::Completed)
            .payout_task(builders::payout_task_security())
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::PayoutOrder { .. })) {
            SectionViewModel::PayoutOrder {
                header,
                agreement,
                sum,
                security,
            } => {
                assert_eq!(
                    header.as_deref(),
                    Some("Ценные бумаги · 1 января 2018 в 00:00 · Исполнено")
                );
                assert_eq!(agreement.as_deref(), Some("Договор: 21992038"));
                assert_eq!(sum.as_deref(), Some("2 150 000 ₽"));
                assert_eq!(
                    security.as_deref(),
                    Some("Название ценной бумаги 1, Название ценной бумаги 2, 300 шт.")
                );
            }
            other => panic!("expected payout order section, got {:?}", other),
        }
    }

    #[test]
    fn test_payout_summary_resolves_type_and_reason() {
        let activity = ActivityBuilder::new(ActivityType::PayoutTask)
            .state(ActivityState::Completed)
            .payout_task(builders::payout_task_security())
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::PayoutSummary { .. })) {
            SectionViewModel::PayoutSummary { type_line, detail } => {
                assert_eq!(type_line, "Внешний вывод");
                assert_eq!(detail.as_deref(), Some("Правда нужны"));
            }
            other => panic!("expected payout summary, got {:?}", other),
        }
    }

    #[test]
    fn test_markup_section_previews_and_hints() {
        let activity = ActivityBuilder::new(ActivityType::Email)
            .additional_data(actcard_types::AdditionalData::email(
                actcard_types::EmailData {
                    message_text: Some("<p>Добрый день!</p><p>Выписка во вложении.</p>".to_string()),
                    ..Default::default()
                },
            ))
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::Markup { .. })) {
            SectionViewModel::Markup { preview, hint } => {
                assert_eq!(preview, "Добрый день! Выписка во вложении.");
                assert_eq!(hint, "Открыть письмо");
            }
            other => panic!("expected markup section, got {:?}", other),
        }
    }

    #[test]
    fn test_created_caption_joins_name_and_date() {
        let activity = ActivityBuilder::new(ActivityType::Sms)
            .created_by("Петров Оператор Иванович")
            .create_date(date_mock())
            .build();

        let model = details_view_model(&activity, fixed_today(), &Config::default());
        match find_section(&model, |s| matches!(s, SectionViewModel::Created { .. })) {
            SectionViewModel::Created { line } => {
                assert_eq!(line, "Создана Петров Оператор Иванович 1 января 2018 в 00:00");
            }
            other => panic!("expected created caption, got {:?}", other),
        }
    }

    #[test]
    fn test_custom_route_template_is_honored() {
        let mut config = Config::default();
        config.routes.client_dashboard = "https://desk.example/c/{id}".to_string();

        let activity = ActivityBuilder::new(ActivityType::Email)
            .client("Иванова Анна")
            .client_id("42")
            .build();

        let model = details_view_model(&activity, fixed_today(), &config);
        match find_section(&model, |s| matches!(s, SectionViewModel::Client { .. })) {
            SectionViewModel::Client { profile_url, .. } => {
                assert_eq!(profile_url.as_deref(), Some("https://desk.example/c/42"));
            }
            other => panic!("expected client section, got {:?}", other),
        }
    }
}
