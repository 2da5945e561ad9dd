//! Russian message catalog.
//!
//! Keys mirror the desk backend's translation ids, so resolver output maps
//! onto this table without rewriting. Unknown keys fall back to the key
//! itself, the same way the web client surfaces a missing translation.

use once_cell::sync::Lazy;
use std::collections::HashMap;

static CATALOG: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Channel names, used as card titles when the subject is empty.
        ("enum.ActivityType.phoneCall", "Телефонный звонок"),
        ("enum.ActivityType.appointment", "Встреча"),
        ("enum.ActivityType.email", "Электронное письмо"),
        ("enum.ActivityType.sms", "SMS-сообщение"),
        ("enum.ActivityType.serviceMessage", "Сервисное сообщение"),
        ("enum.ActivityType.payoutTask", "Поручение на вывод средств"),
        ("enum.ActivityType.webportalNews", "Новость веб-портала"),
        // Lifecycle states.
        ("enum.ActivityStateType.Open", "Открыта"),
        ("enum.ActivityStateType.Completed", "Завершена"),
        ("enum.ActivityStateType.Canceled", "Отменена"),
        // Workflow tags.
        ("enum.ActivityTag.KVP", "КВП"),
        ("enum.ActivityTag.Alert", "Важное"),
        // Icon tooltips.
        ("App.ActivityCard.tooltip.email", "Электронное письмо"),
        ("App.ActivityCard.tooltip.payoutTask", "Поручение на вывод"),
        ("App.ActivityCard.tooltip.sms", "SMS"),
        ("App.ActivityCard.tooltip.serviceMessage", "Сервисное сообщение"),
        ("App.ActivityCard.tooltip.webportalNews", "Новость"),
        ("App.ActivityCard.tooltip.appointment_inner", "Встреча в офисе"),
        ("App.ActivityCard.tooltip.appointment_outer", "Выездная встреча"),
        ("App.ActivityCard.tooltip.phoneCall_incoming", "Входящий звонок"),
        ("App.ActivityCard.tooltip.phoneCall_outgoing", "Исходящий звонок"),
        // Service-message notification chip.
        ("App.ActivityCard.notified", "Клиент уведомлён"),
        ("App.ActivityCard.notNotified", "Клиент не уведомлён"),
        // Deadline badges, one key per Russian declension.
        ("App.ActivityCard.declination.overdue", "Просрочено"),
        ("App.ActivityCard.declination.zeroDays", "Осталось 0 дней"),
        ("App.ActivityCard.declination.oneDay", "Остался 1 день"),
        ("App.ActivityCard.declination.twoDays", "Осталось 2 дня"),
        ("App.ActivityCard.declination.threeDays", "Осталось 3 дня"),
        // Payout order vocabulary.
        ("App.ActivityCard.payoutType.money", "Денежные средства"),
        ("App.ActivityCard.payoutType.security", "Ценные бумаги"),
        ("enum.PayoutType.externalPayout", "Внешний вывод"),
        ("enum.PayoutType.internalPayout", "Внутренний перевод"),
        ("enum.PayoutStatus.completed", "Исполнено"),
        ("enum.PayoutStatus.inProgress", "В работе"),
        ("enum.PayoutStatus.canceled", "Отменено"),
        // Details pane.
        ("App.ActivityDetails.openEmail", "Открыть письмо"),
        ("App.ActivityDetails.openNews", "Открыть новость"),
        ("App.ActivityDetails.clientHasCome", "Клиент пришёл"),
        ("App.ActivityDetails.clientHasNotCome", "Клиент не пришёл"),
        ("App.ActivityDetails.payoutTypeMissing", "Тип выплаты не указан"),
        ("App.ActivityDetails.payoutReasonMissing", "Причина вывода не указана"),
        ("App.ActivityDetails.productMissing", "Продукт не указан"),
    ])
});

/// Resolve a translation key, falling back to the key itself.
pub fn message(key: &str) -> &str {
    CATALOG.get(key).copied().unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actcard_types::ActivityType;

    #[test]
    fn test_unknown_key_falls_back_to_itself() {
        assert_eq!(message("App.ActivityCard.noSuchKey"), "App.ActivityCard.noSuchKey");
    }

    #[test]
    fn test_every_channel_title_resolves() {
        let types = [
            ActivityType::PhoneCall,
            ActivityType::Appointment,
            ActivityType::Email,
            ActivityType::Sms,
            ActivityType::ServiceMessage,
            ActivityType::PayoutTask,
            ActivityType::WebportalNews,
        ];
        for activity_type in types {
            let key = format!("enum.ActivityType.{}", activity_type.as_str());
            assert_ne!(message(&key), key, "missing catalog entry for {key}");
        }
    }

    #[test]
    fn test_declension_badges_resolve() {
        for suffix in ["overdue", "zeroDays", "oneDay", "twoDays", "threeDays"] {
            let key = format!("App.ActivityCard.declination.{suffix}");
            assert_ne!(message(&key), key);
        }
    }
}
