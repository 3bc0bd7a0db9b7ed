// Author: Dustin Pilgrim
// License: MIT

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    Empty,

    /// Input did not split into exactly `hours:minutes:seconds`.
    FieldCount(usize),

    InvalidField {
        field: &'static str,
        value: String,
    },

    Overflow,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Empty => write!(f, "empty time"),
            ParseError::FieldCount(n) => {
                write!(f, "expected 3 fields (hh:mm:ss), found {n}")
            }
            ParseError::InvalidField { field, value } => {
                write!(f, "invalid {field}: '{value}'")
            }
            ParseError::Overflow => write!(f, "time is too large"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Render a second count as `HH:MM:SS`.
///
/// Hours are not wrapped: 100 hours renders as `100:00:00`.
pub fn format_hms(seconds: u64) -> String {
    let hours = seconds / 3600;
    let mins = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("{hours:02}:{mins:02}:{secs:02}")
}

/// Parse `hh:mm:ss` back into seconds.
///
/// Minutes and seconds are not range-checked, so `00:90:00` is 5400.
pub fn parse_hms(s: &str) -> Result<u64, ParseError> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(ParseError::Empty);
    }

    let parts: Vec<&str> = trimmed.split(':').collect();
    if parts.len() != 3 {
        return Err(ParseError::FieldCount(parts.len()));
    }

    let hours = parse_field("hours", parts[0])?;
    let mins = parse_field("minutes", parts[1])?;
    let secs = parse_field("seconds", parts[2])?;

    hours
        .checked_mul(3600)
        .and_then(|h| mins.checked_mul(60).and_then(|m| h.checked_add(m)))
        .and_then(|hm| hm.checked_add(secs))
        .ok_or(ParseError::Overflow)
}

fn parse_field(field: &'static str, raw: &str) -> Result<u64, ParseError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
        return Err(ParseError::InvalidField {
            field,
            value: raw.to_string(),
        });
    }

    raw.parse::<u64>().map_err(|_| ParseError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero_padded_fields() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(59), "00:00:59");
        assert_eq!(format_hms(60), "00:01:00");
        assert_eq!(format_hms(3661), "01:01:01");
        assert_eq!(format_hms(359_999), "99:59:59");
    }

    #[test]
    fn hours_are_not_truncated_past_99() {
        assert_eq!(format_hms(360_000), "100:00:00");
        assert_eq!(parse_hms("100:00:00").unwrap(), 360_000);
    }

    #[test]
    fn parses_hms() {
        assert_eq!(parse_hms("01:02:03").unwrap(), 3723);
        assert_eq!(parse_hms("0:0:0").unwrap(), 0);
        assert_eq!(parse_hms(" 1:30:00 ").unwrap(), 5400);
        assert_eq!(parse_hms("00:90:00").unwrap(), 5400);
    }

    #[test]
    fn parse_inverts_format_below_100_hours() {
        for n in 0..=359_999u64 {
            assert_eq!(parse_hms(&format_hms(n)).unwrap(), n, "n = {n}");
        }
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_hms(""), Err(ParseError::Empty));
        assert_eq!(parse_hms("   "), Err(ParseError::Empty));
        assert_eq!(parse_hms("10:00"), Err(ParseError::FieldCount(2)));
        assert_eq!(parse_hms("1:2:3:4"), Err(ParseError::FieldCount(4)));
        assert_eq!(
            parse_hms("aa:00:00"),
            Err(ParseError::InvalidField {
                field: "hours",
                value: "aa".to_string()
            })
        );
        assert!(matches!(
            parse_hms("00:-1:00"),
            Err(ParseError::InvalidField { field: "minutes", .. })
        ));
        assert!(matches!(
            parse_hms("00:00:"),
            Err(ParseError::InvalidField { field: "seconds", .. })
        ));
        assert_eq!(
            parse_hms("99999999999999999999:00:00"),
            Err(ParseError::Overflow)
        );
    }
}
