//! Brazilian-Portuguese display formatting for currency and dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::error::{Result, WheelError};

/// Currency symbol for Brazilian real.
pub const CURRENCY_SYMBOL: &str = "R$";

/// Output pattern of [`format_date`].
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Group an unsigned digit string in thousands using `.`.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// Round a non-negative value to cents, half away from zero.
///
/// Rounds the shortest decimal that reads back as `value`, so `1.005`
/// becomes `1.01` even though its binary value sits just below it.
/// Returns the integer digits and the two cent digits.
fn round_cents(value: f64) -> (String, String) {
    let shortest = value.to_string();
    let (int_part, frac) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac.bytes().chain(std::iter::repeat(b'0')).take(2))
        .collect();
    if frac.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
        }
    }

    let cents = digits.split_off(digits.len().saturating_sub(2));
    let text = |digits: &[u8]| digits.iter().copied().map(char::from).collect::<String>();
    (text(&digits), text(&cents))
}

/// Format a value as Brazilian reais, e.g. `R$ 1.234,56`.
///
/// The symbol is followed by a non-breaking space; negatives are written
/// `-R$ 1,00`.
pub fn format_currency(value: f64) -> String {
    if value.is_nan() {
        return format!("{CURRENCY_SYMBOL}\u{a0}NaN");
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}{CURRENCY_SYMBOL}\u{a0}∞");
    }
    let (int_part, cents) = round_cents(value.abs());
    let negative = value < 0.0 && int_part.bytes().chain(cents.bytes()).any(|b| b != b'0');
    format!(
        "{}{CURRENCY_SYMBOL}\u{a0}{},{cents}",
        if negative { "-" } else { "" },
        group_thousands(&int_part)
    )
}

/// Format a date or timestamp string as `DD/MM/YYYY`.
///
/// Accepts RFC 3339 timestamps, `YYYY-MM-DDTHH:MM:SS`,
/// `YYYY-MM-DD HH:MM:SS` and plain `YYYY-MM-DD`. The calendar date is taken
/// as written, without converting time zones.
pub fn format_date(input: &str) -> Result<String> {
    Ok(parse_date(input)?.format(DATE_FORMAT).to_string())
}

/// Parse the calendar date out of a date or timestamp string.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    let input = input.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(input) {
        return Ok(timestamp.date_naive());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(input, pattern) {
            return Ok(timestamp.date());
        }
    }
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| WheelError::Format(format!("Invalid Date: {input}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("999"), "999");
        assert_eq!(group_thousands("1000"), "1.000");
        assert_eq!(group_thousands("1234567"), "1.234.567");
    }

    #[test]
    fn test_round_cents_carries() {
        assert_eq!(round_cents(0.0), ("0".to_string(), "00".to_string()));
        assert_eq!(round_cents(0.995), ("1".to_string(), "00".to_string()));
        assert_eq!(round_cents(99.999), ("100".to_string(), "00".to_string()));
        assert_eq!(round_cents(0.5), ("0".to_string(), "50".to_string()));
        assert_eq!(round_cents(0.004), ("0".to_string(), "00".to_string()));
    }

    #[test]
    fn test_negative_zero_has_no_sign() {
        assert_eq!(format_currency(-0.001), "R$\u{a0}0,00");
    }
}
