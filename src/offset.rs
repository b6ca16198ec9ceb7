use crate::error::{Result, SrtShiftError};

const MAX_MINUTES: i64 = 60;
const MAX_SECONDS: i64 = 60;
const MAX_MILLISECONDS: i64 = 1000;

/// A validated time offset.
///
/// Every sub-hour component is strictly smaller in magnitude than one unit
/// of the next larger field, so a single carry step per field is enough to
/// renormalize a shifted [`Timestamp`](crate::timestamp::Timestamp). Hours
/// are unbounded. The only way to build an `Offset` is through
/// [`Offset::new`], which enforces those bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Offset {
    hours: i64,
    minutes: i64,
    seconds: i64,
    milliseconds: i64,
}

impl Offset {
    pub fn new(hours: i64, minutes: i64, seconds: i64, milliseconds: i64) -> Result<Self> {
        check("milliseconds", milliseconds, MAX_MILLISECONDS)?;
        check("seconds", seconds, MAX_SECONDS)?;
        check("minutes", minutes, MAX_MINUTES)?;

        Ok(Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    pub fn zero() -> Self {
        Self::default()
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    pub fn hours(&self) -> i64 {
        self.hours
    }

    pub fn minutes(&self) -> i64 {
        self.minutes
    }

    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    pub fn milliseconds(&self) -> i64 {
        self.milliseconds
    }
}

fn check(unit: &'static str, value: i64, limit: i64) -> Result<()> {
    // unsigned_abs keeps i64::MIN from overflowing
    if value.unsigned_abs() >= limit as u64 {
        return Err(SrtShiftError::ShiftTooLarge { unit, value, limit });
    }
    Ok(())
}

impl std::fmt::Display for Offset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}h {}m {}s {}ms",
            self.hours, self.minutes, self.seconds, self.milliseconds
        )
    }
}
