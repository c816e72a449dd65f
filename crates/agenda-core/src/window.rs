//! Inclusive calendar-day windows that bound every expansion query.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::error::{EngineError, Result};

/// An inclusive `[start, end]` range of calendar days.
///
/// Construction enforces `start <= end`, so a held value is always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    start: NaiveDate,
    end: NaiveDate,
}

impl Window {
    /// The Sunday-through-Saturday week containing `anchor`.
    pub fn week(anchor: NaiveDate) -> Self {
        let start = dates::add_days(anchor, -i64::from(dates::weekday_index(anchor)));
        Self {
            start,
            end: dates::add_days(start, 6),
        }
    }

    /// The single-day window for `anchor`.
    pub fn day(anchor: NaiveDate) -> Self {
        Self {
            start: anchor,
            end: anchor,
        }
    }

    /// The calendar month containing `anchor`, first through last day.
    pub fn month(anchor: NaiveDate) -> Self {
        let start = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap_or(anchor);
        let first_of_next = if anchor.month() == 12 {
            NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
        };
        let end = first_of_next
            .map(|first| dates::add_days(first, -1))
            .unwrap_or(anchor);
        Self { start, end }
    }

    /// An explicit range.
    ///
    /// The `start <= end` contract belongs to the caller; violating it is a
    /// bug in the collaborator, not bad user data, so it fails loudly.
    pub fn range(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(EngineError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the window.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `day` falls inside the window.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Number of days covered, at least 1.
    pub fn len_days(&self) -> i64 {
        dates::days_between(self.start, self.end) + 1
    }

    /// Iterate every day in the window, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.len_days()).map(move |offset| dates::add_days(start, offset))
    }
}
