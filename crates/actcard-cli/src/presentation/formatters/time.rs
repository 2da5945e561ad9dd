use chrono::{DateTime, Datelike, Timelike, Utc};

const MONTHS_GENITIVE: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Format a timestamp the way the desk writes dates: "1 января 2018 в 00:00"
pub fn format_date_time(timestamp: DateTime<Utc>) -> String {
    format!(
        "{} {} {} в {:02}:{:02}",
        timestamp.day(),
        MONTHS_GENITIVE[timestamp.month0() as usize],
        timestamp.year(),
        timestamp.hour(),
        timestamp.minute()
    )
}
