use regex::Regex;
use std::sync::LazyLock;

/// Anything that is not a digit, stripped before normalization
static NON_DIGIT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\D").unwrap());

/// Format a raw phone string as "+7 919 455-70-07".
///
/// Ten digits get the country code prepended; eleven digits starting with 8
/// are rewritten to 7. Anything else does not look like a Russian number and
/// passes through untouched.
pub fn format_phone_number(raw: &str) -> String {
    let digits = NON_DIGIT_REGEX.replace_all(raw, "");
    let normalized = match digits.len() {
        10 => format!("7{digits}"),
        11 if digits.starts_with('8') => format!("7{}", &digits[1..]),
        11 if digits.starts_with('7') => digits.into_owned(),
        _ => return raw.to_string(),
    };

    format!(
        "+{} {} {}-{}-{}",
        &normalized[..1],
        &normalized[1..4],
        &normalized[4..7],
        &normalized[7..9],
        &normalized[9..11]
    )
}
