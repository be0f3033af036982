//! Lazy date range: bounds only, elements produced on demand.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A half-open range of days `[start, end)` that stores only its bounds.
///
/// Construction is O(1) and the range holds no materialized storage. Each
/// call to [`iter`](DateRange::iter) starts a fresh pass from `start`, so the
/// range can be traversed any number of times:
///
/// ```rust
/// use reprise_core::range::DateRange;
/// use chrono::NaiveDate;
///
/// let range = DateRange::new(
///     NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2019, 1, 5).unwrap(),
/// );
///
/// let first_pass: Vec<_> = range.iter().collect();
/// let second_pass: Vec<_> = range.iter().collect();
/// assert_eq!(first_pass, second_pass);
/// assert_eq!(first_pass.len(), 4); // the end bound is never produced
/// ```
///
/// The tradeoff against [`DateRangeSequence`](crate::range::DateRangeSequence)
/// is the classic memory/CPU one: this type costs O(1) memory but recomputes
/// every element on each pass and offers no indexed access or length query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range covering `[start, end)` at one-day granularity.
    ///
    /// An inverted pair (`start >= end`) is allowed and yields an empty
    /// range.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// The inclusive start bound.
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    /// The exclusive end bound.
    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether the range contains no days.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Whether `day` falls inside the half-open range.
    ///
    /// This is a bounds check, not a scan; the end bound itself is excluded.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day < self.end
    }

    /// Start a fresh pass over the days of the range.
    ///
    /// Every call returns an independent cursor positioned at `start`.
    pub fn iter(&self) -> DayCursor {
        DayCursor {
            current: self.start,
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = DayCursor;

    fn into_iter(self) -> DayCursor {
        self.iter()
    }
}

impl IntoIterator for &DateRange {
    type Item = NaiveDate;
    type IntoIter = DayCursor;

    fn into_iter(self) -> DayCursor {
        self.iter()
    }
}

/// Cursor over a day range, yielding one day per step in ascending order.
///
/// Obtained from [`DateRange::iter`]. Intentionally exposes no length: the
/// lazy range trades length queries and indexing away for O(1) memory.
#[derive(Debug, Clone)]
pub struct DayCursor {
    current: NaiveDate,
    end: NaiveDate,
}

impl Iterator for DayCursor {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.current >= self.end {
            return None;
        }
        let day = self.current;
        // day < end <= NaiveDate::MAX, so the successor always exists
        self.current = day.succ_opt().unwrap_or(self.end);
        Some(day)
    }
}

impl std::iter::FusedIterator for DayCursor {}
