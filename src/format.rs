//! Display formatting for timestamps, addresses and currency amounts

use chrono::{DateTime, TimeZone, Utc};

/// Placeholder for any payload field that is absent
pub const NOT_AVAILABLE: &str = "N/A";

/// Sentinel winner of an auction that closed without bids
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000000000000000000000000000";

/// Native amounts carry 9 decimal places (1 SUI = 10^9 MIST)
pub const MIST_PER_SUI: u128 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    NotANumber(String),
    OutOfRange(String),
}

impl std::fmt::Display for FormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatError::NotANumber(raw) => write!(f, "'{}' is not a number", raw),
            FormatError::OutOfRange(raw) => write!(f, "'{}' is out of range", raw),
        }
    }
}

impl std::error::Error for FormatError {}

/// Format epoch milliseconds as `M/D/YYYY, h:mm:ss AM` in the given zone
pub fn format_timestamp<Tz>(ms: &str, tz: &Tz) -> Result<String, FormatError>
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let millis = ms
        .trim()
        .parse::<i64>()
        .map_err(|_| FormatError::NotANumber(ms.to_string()))?;

    let utc = DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| FormatError::OutOfRange(ms.to_string()))?;

    Ok(utc
        .with_timezone(tz)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string())
}

/// Shorten an address to `0x1234...cdef`.
/// Inputs shorter than 10 characters are returned unchanged.
pub fn format_address(address: &str) -> String {
    let len = address.chars().count();
    if len < 10 {
        return address.to_string();
    }
    let head: String = address.chars().take(6).collect();
    let tail: String = address.chars().skip(len - 4).collect();
    format!("{}...{}", head, tail)
}

/// Convert a native amount to SUI with two decimals (half-up).
///
/// Integer strings are converted exactly so 64-bit amounts keep precision;
/// anything else numeric goes through `f64`.
pub fn format_price(amount: &str) -> Result<String, FormatError> {
    let trimmed = amount.trim();

    if let Ok(mist) = trimmed.parse::<u128>() {
        let cents = mist
            .checked_add(MIST_PER_SUI / 200)
            .ok_or_else(|| FormatError::OutOfRange(amount.to_string()))?
            / (MIST_PER_SUI / 100);
        return Ok(format!("{}.{:02}", cents / 100, cents % 100));
    }

    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(format!("{:.2}", value / MIST_PER_SUI as f64)),
        _ => Err(FormatError::NotANumber(amount.to_string())),
    }
}

/// First 8 characters of an identifier, followed by `...`
pub fn short_id(id: &str) -> String {
    let head: String = id.chars().take(8).collect();
    format!("{}...", head)
}

/// `...` followed by the last 8 characters of an identifier
pub fn short_tail(id: &str) -> String {
    let len = id.chars().count();
    let tail: String = id.chars().skip(len.saturating_sub(8)).collect();
    format!("...{}", tail)
}

pub fn is_zero_address(address: &str) -> bool {
    address.eq_ignore_ascii_case(ZERO_ADDRESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_price() {
        assert_eq!(format_price("1000000000").unwrap(), "1.00");
        assert_eq!(format_price("2500000000").unwrap(), "2.50");
        assert_eq!(format_price("0").unwrap(), "0.00");
        assert_eq!(format_price("1234567").unwrap(), "0.00");
        assert_eq!(format_price("5000000").unwrap(), "0.01");
        assert_eq!(format_price("18446744073709551615").unwrap(), "18446744073.71");
    }

    #[test]
    fn test_format_price_rejects_garbage() {
        assert_eq!(
            format_price("ten"),
            Err(FormatError::NotANumber("ten".to_string()))
        );
        assert!(format_price("").is_err());
    }

    #[test]
    fn test_format_address() {
        assert_eq!(format_address("0x1234567890abcdef"), "0x1234...cdef");
        assert_eq!(format_address("0x12345678"), "0x1234...5678");
        assert_eq!(format_address("0xabc"), "0xabc");
        assert_eq!(format_address(""), "");
    }

    #[test]
    fn test_format_timestamp_is_deterministic() {
        let first = format_timestamp("1700000000000", &Utc).unwrap();
        let second = format_timestamp("1700000000000", &Utc).unwrap();

        assert_eq!(first, "11/14/2023, 10:13:20 PM");
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_timestamp_respects_zone() {
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(
            format_timestamp("1700000000000", &tokyo).unwrap(),
            "11/15/2023, 7:13:20 AM"
        );
    }

    #[test]
    fn test_format_timestamp_rejects_garbage() {
        assert!(matches!(
            format_timestamp("soon", &Utc),
            Err(FormatError::NotANumber(_))
        ));
    }

    #[test]
    fn test_short_ids() {
        assert_eq!(short_id("0xabcdef123456"), "0xabcdef...");
        assert_eq!(short_id("0xab"), "0xab...");
        assert_eq!(short_tail("0x0123456789abcdef"), "...89abcdef");
    }

    #[test]
    fn test_zero_address() {
        assert!(is_zero_address(ZERO_ADDRESS));
        assert!(!is_zero_address("0x1"));
    }
}
