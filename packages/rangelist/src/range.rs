use std::fmt::{self, Display};
use std::str::FromStr;

use crate::{Error, Item};

/// An inclusive range of indexes `[low, high]`, where `low <= high`.
///
/// A range covering a single index is written as just that index (e.g. `3`), any other range is
/// written as `low-high` (e.g. `3-5`).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IndexRange {
    low: Item,
    high: Item,
}

impl IndexRange {
    /// Creates a range covering `low..=high`.
    ///
    /// # Errors
    ///
    /// Returns an error if `low` is greater than `high`.
    pub fn new(low: Item, high: Item) -> crate::Result<Self> {
        if low > high {
            return Err(Error::new(
                format!("{low}-{high}"),
                "range start must be <= end",
            ));
        }

        Ok(Self { low, high })
    }

    /// Creates a range that covers exactly one index.
    #[must_use]
    pub fn single(index: Item) -> Self {
        Self {
            low: index,
            high: index,
        }
    }

    /// The first index covered by the range.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn low(&self) -> Item {
        self.low
    }

    /// The last index covered by the range.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn high(&self) -> Item {
        self.high
    }

    /// Whether `index` lies within the range, bounds included.
    #[inline]
    #[must_use]
    pub fn contains(&self, index: Item) -> bool {
        self.low <= index && index <= self.high
    }

    /// The number of indexes covered by the range. Never zero.
    #[must_use]
    pub fn len(&self) -> u64 {
        // Cannot overflow: the difference of two u32 values plus one always fits in u64.
        u64::from(self.high)
            .wrapping_sub(u64::from(self.low))
            .wrapping_add(1)
    }

    /// Always `false`, as a range covers at least one index.
    #[cfg_attr(test, mutants::skip)] // Constant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.low == self.high {
            write!(f, "{}", self.low)
        } else {
            write!(f, "{}-{}", self.low, self.high)
        }
    }
}

impl From<Item> for IndexRange {
    fn from(index: Item) -> Self {
        Self::single(index)
    }
}

impl FromStr for IndexRange {
    type Err = Error;

    /// Parses a single range item, either `n` or `low-high`.
    fn from_str(s: &str) -> crate::Result<Self> {
        crate::parse::parse_item(s)
    }
}
