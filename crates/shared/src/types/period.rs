//! Billing period type.
//!
//! A billing period is one calendar month (year + month). It is the natural
//! key component that makes recurring invoice generation idempotent.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from constructing or parsing a billing period.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    /// Month must be in 1..=12.
    #[error("Month must be between 1 and 12, got {0}")]
    MonthOutOfRange(u32),

    /// The period label could not be parsed.
    #[error("Invalid period label: {0}")]
    InvalidLabel(String),
}

/// One calendar month of billing (e.g. `2024-07`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BillingPeriod {
    /// Calendar year.
    pub year: i32,
    /// Calendar month (1-12).
    pub month: u32,
}

impl BillingPeriod {
    /// Creates a new billing period.
    ///
    /// # Errors
    ///
    /// Returns `PeriodError::MonthOutOfRange` if `month` is not in 1..=12.
    pub const fn new(year: i32, month: u32) -> Result<Self, PeriodError> {
        if month == 0 || month > 12 {
            return Err(PeriodError::MonthOutOfRange(month));
        }
        Ok(Self { year, month })
    }

    /// Returns the date of the given day within this period.
    ///
    /// Days past the end of the month clamp to the last day, so a due day of
    /// 31 lands on Feb 28/29 rather than failing.
    #[must_use]
    pub fn day(self, day: u32) -> NaiveDate {
        let last = Self::last_day_of_month(self.year, self.month);
        NaiveDate::from_ymd_opt(self.year, self.month, day.clamp(1, last))
            .unwrap_or_else(|| unreachable!("day clamped to a valid day of month"))
    }

    fn last_day_of_month(year: i32, month: u32) -> u32 {
        let (next_y, next_m) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        NaiveDate::from_ymd_opt(next_y, next_m, 1)
            .and_then(|d| d.pred_opt())
            .map_or(28, |d| {
                use chrono::Datelike;
                d.day()
            })
    }
}

impl std::fmt::Display for BillingPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::str::FromStr for BillingPeriod {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| PeriodError::InvalidLabel(s.to_string()))?;
        let year: i32 = year
            .parse()
            .map_err(|_| PeriodError::InvalidLabel(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| PeriodError::InvalidLabel(s.to_string()))?;
        Self::new(year, month)
    }
}
