use crate::error::{Error, Result};

/// Parse the `-n` value into a positive number of available minutes.
///
/// Any integer is accepted, however long; budgets past `u32::MAX` saturate.
pub fn parse_minutes(raw: &str) -> Result<u32> {
    let raw = raw.trim();
    let (negative, digits) = match raw.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, raw.strip_prefix('+').unwrap_or(raw)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidMinutes);
    }

    let significant = digits.trim_start_matches('0');
    if negative || significant.is_empty() {
        return Err(Error::NoTime);
    }

    // Only overflow can fail here
    Ok(significant.parse().unwrap_or(u32::MAX))
}
