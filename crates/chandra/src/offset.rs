//! Signed UTC offsets as typed by a user, e.g. `+05:30`, `-7`, `0`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Widest offset in civil use (Line Islands, UTC+14).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OffsetError {
    #[error("Malformed UTC offset {input:?}: {reason}")]
    Format { input: String, reason: &'static str },
    #[error("UTC offset {input:?} is outside the range -14:00..=+14:00")]
    Range { input: String },
}

/// Minutes east of UTC, always within ±14:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub struct UtcOffset(i32);

impl UtcOffset {
    pub const UTC: UtcOffset = UtcOffset(0);

    pub fn from_minutes(minutes: i32) -> Result<Self, OffsetError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&minutes) {
            return Err(OffsetError::Range {
                input: minutes.to_string(),
            });
        }
        Ok(Self(minutes))
    }

    pub fn minutes(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let total = self.0.abs();
        write!(f, "UTC{}{:02}:{:02}", sign, total / 60, total % 60)
    }
}

impl FromStr for UtcOffset {
    type Err = OffsetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_offset(s)
    }
}

impl TryFrom<i32> for UtcOffset {
    type Error = OffsetError;

    fn try_from(minutes: i32) -> Result<Self, Self::Error> {
        Self::from_minutes(minutes)
    }
}

impl From<UtcOffset> for i32 {
    fn from(offset: UtcOffset) -> i32 {
        offset.0
    }
}

/// Parse `[+|-]H[H][:MM]` into a signed minute count.
///
/// Hours may have any number of digits; minutes must be below 60 and default
/// to zero when the `:MM` part is missing. Surrounding whitespace is ignored.
pub fn parse_offset(text: &str) -> Result<UtcOffset, OffsetError> {
    let input = text.trim();
    let malformed = |reason| OffsetError::Format {
        input: input.to_string(),
        reason,
    };
    let out_of_range = || OffsetError::Range {
        input: input.to_string(),
    };

    let (sign, body) = match input.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, input.strip_prefix('+').unwrap_or(input)),
    };
    if body.is_empty() {
        return Err(malformed("missing hours"));
    }

    let mut fields = body.split(':');
    let hours_field = fields.next().unwrap_or_default();
    let minutes_field = fields.next();
    if fields.next().is_some() {
        return Err(malformed("expected at most one ':' separator"));
    }

    if !is_digits(hours_field) {
        return Err(malformed("hours must be a non-negative integer"));
    }
    // Any digit string too long for u32 is far beyond 14 hours.
    let hours: u32 = hours_field.parse().map_err(|_| out_of_range())?;

    let minutes: u32 = match minutes_field {
        None => 0,
        Some(field) if is_digits(field) => field
            .parse()
            .map_err(|_| malformed("minutes must be below 60"))?,
        Some(_) => return Err(malformed("minutes must be a non-negative integer")),
    };
    if minutes >= 60 {
        return Err(malformed("minutes must be below 60"));
    }

    let total = hours
        .checked_mul(60)
        .and_then(|h| h.checked_add(minutes))
        .ok_or_else(out_of_range)?;
    if total > MAX_OFFSET_MINUTES as u32 {
        return Err(out_of_range());
    }

    Ok(UtcOffset(sign * total as i32))
}

fn is_digits(field: &str) -> bool {
    !field.is_empty() && field.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_offset_examples() {
        assert_eq!(parse_offset("+05:30").unwrap().minutes(), 330);
        assert_eq!(parse_offset("-07").unwrap().minutes(), -420);
        assert_eq!(parse_offset("+00:00").unwrap().minutes(), 0);
        assert_eq!(parse_offset("5:45").unwrap().minutes(), 345);
        assert_eq!(parse_offset("-0:30").unwrap().minutes(), -30);
    }

    #[test]
    fn test_parse_offset_range_edges() {
        assert_eq!(parse_offset("+14:00").unwrap().minutes(), 840);
        assert_eq!(parse_offset("-14").unwrap().minutes(), -840);
        assert!(matches!(parse_offset("+14:01"), Err(OffsetError::Range { .. })));
        assert!(matches!(parse_offset("+15:00"), Err(OffsetError::Range { .. })));
        assert!(matches!(
            parse_offset("99999999999999999999"),
            Err(OffsetError::Range { .. })
        ));
    }

    #[test]
    fn test_parse_offset_format_errors() {
        for bad in ["", "+", "-", "abc", "+05:61", "1:2:3", "+-5", "5:-3", ":30", "5:", "5.5"] {
            assert!(
                matches!(parse_offset(bad), Err(OffsetError::Format { .. })),
                "{bad:?} should be a format error"
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(UtcOffset::from_minutes(330).unwrap().to_string(), "UTC+05:30");
        assert_eq!(UtcOffset::from_minutes(-30).unwrap().to_string(), "UTC-00:30");
        assert_eq!(UtcOffset::UTC.to_string(), "UTC+00:00");
    }

    #[test]
    fn test_from_minutes_rejects_out_of_range() {
        assert!(UtcOffset::from_minutes(841).is_err());
        assert!(UtcOffset::from_minutes(-841).is_err());
    }
}
