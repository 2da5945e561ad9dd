use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Format a ruble amount with thin thousands groups: "2 150 000 ₽".
/// Kopecks appear only when nonzero: "1 234,50 ₽".
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let absolute = rounded.abs();
    let kopecks = (absolute.fract() * Decimal::from(100))
        .to_u32()
        .unwrap_or(0);

    let whole = absolute.trunc().to_i128().unwrap_or(0);
    let mut out = String::new();
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if kopecks != 0 {
        out.push_str(&format!(",{:02}", kopecks));
    }
    out.push_str(" ₽");
    out
}

fn group_thousands(value: i128) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_millions_are_grouped_by_thousands() {
        assert_eq!(format_money(Decimal::from(2_150_000)), "2 150 000 ₽");
    }

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_money(Decimal::from(999)), "999 ₽");
        assert_eq!(format_money(Decimal::from(1_000)), "1 000 ₽");
    }

    #[test]
    fn test_kopecks_render_only_when_nonzero() {
        assert_eq!(format_money(Decimal::new(123_450, 2)), "1 234,50 ₽");
        assert_eq!(format_money(Decimal::new(123_400, 2)), "1 234 ₽");
    }

    #[test]
    fn test_negative_amounts_keep_the_sign() {
        assert_eq!(format_money(Decimal::from(-500)), "-500 ₽");
    }

    #[test]
    fn test_zero() {
        assert_eq!(format_money(Decimal::ZERO), "0 ₽");
    }
}
