//! Display duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::InvalidArgumentError;

/// Default display duration (3 seconds)
pub const DEFAULT_DISPLAY_DURATION: DisplayDuration = DisplayDuration {
    amount: 3,
    unit: TimeUnit::Seconds,
};

/// Unit applied to a display duration amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    #[default]
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl TimeUnit {
    /// Convert an amount of this unit to a std duration, saturating on overflow
    pub fn to_std(self, amount: u64) -> StdDuration {
        match self {
            Self::Nanoseconds => StdDuration::from_nanos(amount),
            Self::Microseconds => StdDuration::from_micros(amount),
            Self::Milliseconds => StdDuration::from_millis(amount),
            Self::Seconds => StdDuration::from_secs(amount),
            Self::Minutes => StdDuration::from_secs(amount.saturating_mul(60)),
            Self::Hours => StdDuration::from_secs(amount.saturating_mul(3_600)),
            Self::Days => StdDuration::from_secs(amount.saturating_mul(86_400)),
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nanoseconds => "nanoseconds",
            Self::Microseconds => "microseconds",
            Self::Milliseconds => "milliseconds",
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::Hours => "hours",
            Self::Days => "days",
        };
        f.write_str(name)
    }
}

impl FromStr for TimeUnit {
    type Err = InvalidArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ns" | "nanoseconds" => Ok(Self::Nanoseconds),
            "us" | "microseconds" => Ok(Self::Microseconds),
            "ms" | "milliseconds" => Ok(Self::Milliseconds),
            "s" | "seconds" => Ok(Self::Seconds),
            "m" | "minutes" => Ok(Self::Minutes),
            "h" | "hours" => Ok(Self::Hours),
            "d" | "days" => Ok(Self::Days),
            _ => Err(InvalidArgumentError::new(
                "time unit",
                format!(
                    "\"{}\". Valid units are: nanoseconds, microseconds, milliseconds, seconds, minutes, hours, days",
                    s
                ),
            )),
        }
    }
}

/// How long the relay keeps a notification on screen.
/// The amount is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayDuration {
    amount: u64,
    unit: TimeUnit,
}

impl DisplayDuration {
    /// Validate an amount and unit
    pub fn new(amount: i64, unit: TimeUnit) -> Result<Self, InvalidArgumentError> {
        Ok(Self {
            amount: Self::validate_amount(amount)?,
            unit,
        })
    }

    /// Check that an amount is at least 1
    pub fn validate_amount(amount: i64) -> Result<u64, InvalidArgumentError> {
        if amount < 1 {
            return Err(InvalidArgumentError::new(
                "duration",
                "cannot be less than 1",
            ));
        }
        Ok(amount as u64)
    }

    pub const fn amount(&self) -> u64 {
        self.amount
    }

    pub const fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Same unit, new amount
    pub fn with_amount(self, amount: i64) -> Result<Self, InvalidArgumentError> {
        Self::new(amount, self.unit)
    }

    /// Same amount, new unit. An absent unit is rejected.
    pub fn with_unit(self, unit: Option<TimeUnit>) -> Result<Self, InvalidArgumentError> {
        let unit = unit.ok_or_else(|| InvalidArgumentError::new("time unit", "cannot be absent"))?;
        Ok(Self { unit, ..self })
    }

    /// Convert to std::time::Duration
    pub fn as_std(&self) -> StdDuration {
        self.unit.to_std(self.amount)
    }
}

impl Default for DisplayDuration {
    fn default() -> Self {
        DEFAULT_DISPLAY_DURATION
    }
}

impl fmt::Display for DisplayDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, self.unit)
    }
}
