//! Eager date range: all days materialized at construction.

use super::{DateRange, RangeError};
use chrono::NaiveDate;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// A half-open range of days `[start, end)` materialized into storage.
///
/// Construction walks the whole range once (O(n) time and memory); in
/// exchange, indexed lookup via [`get`](DateRangeSequence::get) and
/// [`len`](DateRangeSequence::len) are O(1). Negative indices count from the
/// end, so `get(-1)` is the last day:
///
/// ```rust
/// use reprise_core::range::DateRangeSequence;
/// use chrono::NaiveDate;
///
/// # fn example() -> Result<(), reprise_core::range::RangeError> {
/// let seq = DateRangeSequence::new(
///     NaiveDate::from_ymd_opt(2019, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2019, 1, 5).unwrap(),
/// );
///
/// assert_eq!(seq.len(), 4);
/// assert_eq!(seq.get(3)?, seq.get(-1)?);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSequence {
    bounds: DateRange,
    days: Vec<NaiveDate>,
}

impl DateRangeSequence {
    /// Materialize the range `[start, end)` at one-day granularity.
    ///
    /// An inverted pair (`start >= end`) yields an empty sequence.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        let bounds = DateRange::new(start, end);
        let days = bounds.iter().collect();
        Self { bounds, days }
    }

    /// Number of materialized days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the sequence contains no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The day at `index`.
    ///
    /// Negative indices resolve as `len + index`, so `get(-1)` returns the
    /// last day. A resolved index outside `[0, len)` fails with
    /// [`RangeError::OutOfBounds`]; in particular every call on an empty
    /// sequence fails.
    pub fn get(&self, index: i64) -> Result<NaiveDate, RangeError> {
        let len = self.days.len();
        let resolved = if index < 0 { index + len as i64 } else { index };
        if resolved < 0 || resolved as usize >= len {
            return Err(RangeError::OutOfBounds { index, len });
        }
        Ok(self.days[resolved as usize])
    }

    /// The first day, if any.
    pub fn first(&self) -> Option<NaiveDate> {
        self.days.first().copied()
    }

    /// The last day, if any.
    pub fn last(&self) -> Option<NaiveDate> {
        self.days.last().copied()
    }

    /// Whether `day` falls inside the half-open range.
    ///
    /// A bounds check against the original range, not a scan of storage.
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.bounds.contains(day)
    }

    /// Iterate over the materialized days in ascending order.
    ///
    /// Storage is immutable after construction, so every call yields the
    /// same sequence.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = NaiveDate> + '_ {
        self.days.iter().copied()
    }
}

impl<'a> IntoIterator for &'a DateRangeSequence {
    type Item = NaiveDate;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, NaiveDate>>;

    fn into_iter(self) -> Self::IntoIter {
        self.days.iter().copied()
    }
}

// The materialized days are fully determined by the bounds, so the sequence
// serializes as its bounds and rebuilds storage on deserialization.
impl Serialize for DateRangeSequence {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.bounds.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DateRangeSequence {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let bounds = DateRange::deserialize(deserializer)?;
        Ok(Self::new(bounds.start(), bounds.end()))
    }
}
