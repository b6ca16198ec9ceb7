use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::offset::Offset;

/// Width of the `HH:MM:SS,mmm` form in bytes.
const TIMESTAMP_LEN: usize = 12;

/// SRT timestamp (`HH:MM:SS,mmm`).
///
/// Parsing does not range-check the two-digit fields, so `00:75:00,000` is
/// accepted as-is. Hours widen past two digits when formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Timestamp {
    hours: u32,
    minutes: u8,
    seconds: u8,
    milliseconds: u16,
}

/// Result of shifting a timestamp.
///
/// `underflow` is set when the shift pushed the time before zero and the
/// value was clamped to `00:00:00,000`.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shifted {
    pub timestamp: Timestamp,
    pub underflow: bool,
}

impl Timestamp {
    pub const ZERO: Timestamp = Timestamp {
        hours: 0,
        minutes: 0,
        seconds: 0,
        milliseconds: 0,
    };

    pub fn new(hours: u32, minutes: u8, seconds: u8, milliseconds: u16) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        }
    }

    pub fn hours(&self) -> u32 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    pub fn milliseconds(&self) -> u16 {
        self.milliseconds
    }

    /// Add `offset` and renormalize with one carry step per field,
    /// milliseconds first, then seconds, then minutes.
    ///
    /// A negative hour count after carrying clamps the whole value to zero.
    pub fn shift(&self, offset: &Offset) -> Shifted {
        let mut hours = i64::from(self.hours).saturating_add(offset.hours());
        let mut minutes = i64::from(self.minutes) + offset.minutes();
        let mut seconds = i64::from(self.seconds) + offset.seconds();
        let mut milliseconds = i64::from(self.milliseconds) + offset.milliseconds();

        carry(&mut milliseconds, &mut seconds, 1000);
        carry(&mut seconds, &mut minutes, 60);
        carry(&mut minutes, &mut hours, 60);

        if hours < 0 {
            return Shifted {
                timestamp: Self::ZERO,
                underflow: true,
            };
        }

        // An Offset keeps every sub-hour delta below one unit of the next
        // field, so after one carry these fit their two- and three-digit widths.
        Shifted {
            timestamp: Self {
                hours: u32::try_from(hours).unwrap_or(u32::MAX),
                minutes: minutes as u8,
                seconds: seconds as u8,
                milliseconds: milliseconds as u16,
            },
            underflow: false,
        }
    }
}

fn carry(value: &mut i64, next: &mut i64, base: i64) {
    if *value >= base {
        *next = next.saturating_add(1);
        *value -= base;
    } else if *value < 0 {
        *next = next.saturating_sub(1);
        *value += base;
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::Timestamp(s.to_string());
        let b = s.as_bytes();
        if b.len() != TIMESTAMP_LEN || b[2] != b':' || b[5] != b':' || b[8] != b',' {
            return Err(invalid());
        }

        let hours = digits(&b[0..2]).ok_or_else(invalid)?;
        let minutes = digits(&b[3..5]).ok_or_else(invalid)?;
        let seconds = digits(&b[6..8]).ok_or_else(invalid)?;
        let milliseconds = digits(&b[9..12]).ok_or_else(invalid)?;

        Ok(Self {
            hours,
            minutes: minutes as u8,
            seconds: seconds as u8,
            milliseconds: milliseconds as u16,
        })
    }
}

fn digits(b: &[u8]) -> Option<u32> {
    b.iter().try_fold(0u32, |acc, &c| {
        c.is_ascii_digit().then(|| acc * 10 + u32::from(c - b'0'))
    })
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02},{:03}",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}
