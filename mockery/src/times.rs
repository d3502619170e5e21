//! The [`times`](self) module contains the types that track how often an
//! expected call may and must happen.

use std::fmt::{Display, Formatter, Result as FmtResult};
use std::ops::{
    Bound, Range, RangeBounds, RangeFrom, RangeFull, RangeInclusive, RangeTo, RangeToInclusive,
};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Keeps track of the number of calls an expectation has received, against
/// the number of calls it allows and requires.
///
/// The count only ever grows; it is never reset during a test.
#[derive(Default, Debug)]
pub struct Times {
    /// Number of calls the expectation was already executed.
    pub count: AtomicUsize,

    /// Expected number of calls.
    pub range: TimesRange,
}

impl Times {
    /// Create a new [`Times`] instance from the passed `range`.
    pub fn new<R: Into<TimesRange>>(range: R) -> Self {
        Self {
            count: AtomicUsize::default(),
            range: range.into(),
        }
    }

    /// Get the current call count.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count.load(Ordering::Relaxed)
    }

    /// Record one more call.
    pub fn increment(&self) -> usize {
        self.count.fetch_add(1, Ordering::Relaxed)
    }

    /// Returns `true` if the lower bound of the range is fulfilled, so the
    /// expectation does not need more invocations.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.count() >= self.range.min()
    }

    /// Returns `true` if the upper bound of the range is exhausted, so the
    /// expectation may not accept another call.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.range.max().is_some_and(|max| self.count() >= max)
    }
}

/// The range of expected calls, with a lower and an upper limit.
///
/// Similar to [`RangeBounds`] from the standard library but as struct instead
/// of trait. Converting from a plain number gives an exact count.
#[derive(Debug, Clone, Copy)]
pub struct TimesRange {
    lower: Bound<usize>,
    upper: Bound<usize>,
}

impl TimesRange {
    /// Smallest call count that fulfills the range.
    #[must_use]
    pub fn min(&self) -> usize {
        match self.lower {
            Bound::Unbounded => 0,
            Bound::Included(x) => x,
            Bound::Excluded(x) => x + 1,
        }
    }

    /// Largest call count the range allows, if it is bounded above.
    #[must_use]
    pub fn max(&self) -> Option<usize> {
        match self.upper {
            Bound::Unbounded => None,
            Bound::Included(x) => Some(x),
            Bound::Excluded(x) => Some(x.saturating_sub(1)),
        }
    }
}

impl Default for TimesRange {
    fn default() -> Self {
        Self {
            lower: Bound::Unbounded,
            upper: Bound::Unbounded,
        }
    }
}

impl Display for TimesRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match (self.min(), self.max()) {
            (1, Some(1)) => write!(f, "once"),
            (min, Some(max)) if min == max => write!(f, "exactly {min} times"),
            (0, None) => write!(f, "any number of times"),
            (1, None) => write!(f, "at least once"),
            (min, None) => write!(f, "at least {min} times"),
            (0, Some(1)) => write!(f, "at most once"),
            (0, Some(max)) => write!(f, "at most {max} times"),
            (min, Some(max)) => write!(f, "between {min} and {max} times"),
        }
    }
}

impl From<usize> for TimesRange {
    fn from(value: usize) -> Self {
        Self {
            lower: Bound::Included(value),
            upper: Bound::Included(value),
        }
    }
}

macro_rules! impl_from_range_bounds {
    ($x:ty) => {
        impl From<$x> for TimesRange {
            fn from(value: $x) -> Self {
                Self {
                    lower: value.start_bound().cloned(),
                    upper: value.end_bound().cloned(),
                }
            }
        }
    };
}

impl_from_range_bounds!(Range<usize>);
impl_from_range_bounds!(RangeFrom<usize>);
impl_from_range_bounds!(RangeFull);
impl_from_range_bounds!(RangeInclusive<usize>);
impl_from_range_bounds!(RangeTo<usize>);
impl_from_range_bounds!(RangeToInclusive<usize>);
