use std::fmt::{self, Display};
use std::str::FromStr;

use rangelist::IndexRange;

use crate::{Error, PciNetDevice};

/// One configured entry of a [`PfNameSelector`][crate::PfNameSelector]: a physical function name,
/// optionally restricted to some of its virtual functions.
///
/// The textual form is `name` or `name#ranges`, where `ranges` is a [range list][rangelist] of
/// virtual function indexes, e.g. `ens2f1#0,3-5,7`.
///
/// A pattern without ranges matches by name alone and never looks at the virtual function index,
/// so it also matches physical functions, which have no such index.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PfNamePattern {
    name: String,

    // Empty if and only if the pattern was written without a `#` suffix.
    ranges: Vec<IndexRange>,
}

impl PfNamePattern {
    /// Parses a pattern in the `name[#ranges]` form.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, if `#` is followed by nothing, or if the text after
    /// `#` is not a valid [range list][rangelist].
    pub fn parse(pattern: &str) -> crate::Result<Self> {
        let Some((name, range_list)) = pattern.split_once('#') else {
            return Self::with_name(pattern, pattern, Vec::new());
        };

        if range_list.is_empty() {
            return Err(Error::invalid_pattern(
                pattern,
                "'#' must be followed by at least one VF index range",
            ));
        }

        let ranges = rangelist::parse(range_list)
            .map_err(|inner| Error::invalid_pattern_ranges(pattern, inner))?;

        Self::with_name(pattern, name, ranges)
    }

    fn with_name(pattern: &str, name: &str, ranges: Vec<IndexRange>) -> crate::Result<Self> {
        if name.is_empty() {
            return Err(Error::invalid_pattern(pattern, "PF name must not be empty"));
        }

        Ok(Self {
            name: name.to_string(),
            ranges,
        })
    }

    /// The physical function name that devices must have.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The virtual function index ranges, in configuration order.
    ///
    /// Empty if the pattern matches by name only.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn ranges(&self) -> &[IndexRange] {
        &self.ranges
    }

    /// Whether the device belongs to the named physical function and, if any ranges are
    /// configured, has a virtual function index within at least one of them.
    #[must_use]
    pub fn matches(&self, device: &dyn PciNetDevice) -> bool {
        if device.pf_name() != self.name {
            return false;
        }

        // Physical functions have no VF index, so it must only be requested when ranges exist.
        if self.ranges.is_empty() {
            return true;
        }

        rangelist::contains_any(&self.ranges, device.vf_index())
    }
}

impl FromStr for PfNamePattern {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::parse(s)
    }
}

impl Display for PfNamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ranges.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}#{}", self.name, rangelist::emit(&self.ranges))
        }
    }
}
