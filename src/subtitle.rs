use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::offset::Offset;
use crate::timestamp::Timestamp;

const TIME_RANGE_SEPARATOR: &str = " --> ";

/// One SRT block: index line, time range line, then free text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtitle {
    pub index: u32,
    pub start: Timestamp,
    pub end: Timestamp,
    /// Stored verbatim, internal newlines included.
    pub text: String,
}

/// Which ends of a subtitle were clamped to zero by a shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubtitleShift {
    pub start_clamped: bool,
    pub end_clamped: bool,
}

impl SubtitleShift {
    pub fn clamped(&self) -> bool {
        self.start_clamped || self.end_clamped
    }
}

impl Subtitle {
    pub fn new(index: u32, start: Timestamp, end: Timestamp, text: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            text: text.into(),
        }
    }

    /// Shift both timestamps by the same offset.
    pub fn shift(&mut self, offset: &Offset) -> SubtitleShift {
        let start = self.start.shift(offset);
        let end = self.end.shift(offset);
        self.start = start.timestamp;
        self.end = end.timestamp;

        SubtitleShift {
            start_clamped: start.underflow,
            end_clamped: end.underflow,
        }
    }
}

impl FromStr for Subtitle {
    type Err = ParseError;

    fn from_str(block: &str) -> Result<Self, Self::Err> {
        let mut parts = block.splitn(3, '\n');
        let (Some(index), Some(time_range), Some(text)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(ParseError::TooFewLines);
        };

        let index = parse_index(index)?;

        let time_range = time_range.trim();
        let (start, end) = time_range
            .split_once(TIME_RANGE_SEPARATOR)
            .ok_or_else(|| ParseError::TimeRange(time_range.to_string()))?;

        Ok(Self {
            index,
            start: start.parse()?,
            end: end.parse()?,
            text: text.to_string(),
        })
    }
}

/// Index labels are positive decimal integers without a sign.
fn parse_index(line: &str) -> Result<u32, ParseError> {
    let digits = line.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::Index(line.to_string()));
    }
    match digits.parse::<u32>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ParseError::Index(line.to_string())),
    }
}

impl fmt::Display for Subtitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}{}{}\n{}",
            self.index, self.start, TIME_RANGE_SEPARATOR, self.end, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLOCK: &str = "7\n00:01:04,566 --> 00:01:05,667\n<i>First line</i>\nSecond line";

    #[test]
    fn test_parse_block() {
        let sub: Subtitle = BLOCK.parse().unwrap();
        assert_eq!(sub.index, 7);
        assert_eq!(sub.start, Timestamp::new(0, 1, 4, 566));
        assert_eq!(sub.end, Timestamp::new(0, 1, 5, 667));
        assert_eq!(sub.text, "<i>First line</i>\nSecond line");
    }

    #[test]
    fn test_format_reproduces_block() {
        let sub: Subtitle = BLOCK.parse().unwrap();
        assert_eq!(sub.to_string(), BLOCK);
    }

    #[test]
    fn test_too_few_lines() {
        assert_eq!(
            "1\n00:00:01,000 --> 00:00:02,000".parse::<Subtitle>(),
            Err(ParseError::TooFewLines)
        );
        assert_eq!("1".parse::<Subtitle>(), Err(ParseError::TooFewLines));
    }

    #[test]
    fn test_non_numeric_index() {
        assert_eq!(
            "one\n00:00:01,000 --> 00:00:02,000\nHi".parse::<Subtitle>(),
            Err(ParseError::Index("one".to_string()))
        );
        assert!("-1\n00:00:01,000 --> 00:00:02,000\nHi".parse::<Subtitle>().is_err());
    }

    #[test]
    fn test_index_must_be_positive_and_unsigned() {
        for bad in ["0", "+5", "00", ""] {
            let block = format!("{bad}\n00:00:01,000 --> 00:00:02,000\nHi");
            assert_eq!(
                block.parse::<Subtitle>(),
                Err(ParseError::Index(bad.to_string())),
                "{bad:?}"
            );
        }
        let sub: Subtitle = "05\n00:00:01,000 --> 00:00:02,000\nHi".parse().unwrap();
        assert_eq!(sub.index, 5);
    }

    #[test]
    fn test_missing_separator() {
        assert_eq!(
            "1\n00:00:01,000 -> 00:00:02,000\nHi".parse::<Subtitle>(),
            Err(ParseError::TimeRange("00:00:01,000 -> 00:00:02,000".to_string()))
        );
    }

    #[test]
    fn test_bad_timestamp_propagates() {
        assert_eq!(
            "1\n00:00:01,000 --> 00:00:2,000\nHi".parse::<Subtitle>(),
            Err(ParseError::Timestamp("00:00:2,000".to_string()))
        );
    }

    #[test]
    fn test_trailing_spaces_on_time_range() {
        let sub: Subtitle = "1\n00:00:01,000 --> 00:00:02,000  \nHi".parse().unwrap();
        assert_eq!(sub.end, Timestamp::new(0, 0, 2, 0));
    }

    #[test]
    fn test_shift_moves_both_ends() {
        let mut sub: Subtitle = BLOCK.parse().unwrap();
        let report = sub.shift(&Offset::new(0, 0, 1, 500).unwrap());
        assert!(!report.clamped());
        assert_eq!(sub.start.to_string(), "00:01:06,066");
        assert_eq!(sub.end.to_string(), "00:01:07,167");
        assert_eq!(sub.index, 7);
        assert_eq!(sub.text, "<i>First line</i>\nSecond line");
    }

    #[test]
    fn test_shift_reports_clamped_start_only() {
        let mut sub = Subtitle::new(1, Timestamp::new(0, 0, 0, 200), Timestamp::new(0, 0, 3, 0), "Hi");
        let report = sub.shift(&Offset::new(0, 0, -1, 0).unwrap());
        assert!(report.start_clamped);
        assert!(!report.end_clamped);
        assert_eq!(sub.start, Timestamp::ZERO);
        assert_eq!(sub.end.to_string(), "00:00:02,000");
    }
}
