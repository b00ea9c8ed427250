use nonempty::NonEmpty;
use tracing::debug;

use crate::{Error, PciNetDevice, PfNamePattern, Selector, SelectorKind};

/// Selects devices by the name of their physical function, optionally restricted to specific
/// virtual function indexes.
///
/// Each configured value is a [`PfNamePattern`] such as `ens0` or `ens2f1#0,3-5,7`. A device is
/// selected if it matches any of the patterns.
///
/// # Example
///
/// ```
/// use netdev_selectors::fake::FakeNetDevice;
/// use netdev_selectors::{PfNameSelector, Selector};
///
/// let selector = PfNameSelector::new(["ens0", "ens2f1#0,3-5,7"]).unwrap();
///
/// // Physical functions are selected by name alone.
/// assert!(selector.matches(&FakeNetDevice::physical("ens0")));
///
/// // Virtual functions of ens2f1 only if their index is listed.
/// assert!(selector.matches(&FakeNetDevice::virtual_function("ens2f1", 4)));
/// assert!(!selector.matches(&FakeNetDevice::virtual_function("ens2f1", 6)));
/// ```
#[derive(Clone, Debug)]
pub struct PfNameSelector {
    patterns: NonEmpty<PfNamePattern>,
}

impl PfNameSelector {
    /// Creates a selector from patterns in the `name[#ranges]` form.
    ///
    /// All patterns are parsed up front, so a malformed pattern fails construction instead of
    /// being discovered (or ignored) while filtering.
    ///
    /// # Errors
    ///
    /// Returns an error if no patterns are given or if any pattern is malformed.
    pub fn new<I, S>(pf_names: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = pf_names
            .into_iter()
            .map(|pattern| {
                let pattern: String = pattern.into();
                PfNamePattern::parse(&pattern)
            })
            .collect::<crate::Result<Vec<_>>>()?;

        Self::from_patterns(patterns)
    }

    /// Creates a selector from already parsed patterns.
    ///
    /// # Errors
    ///
    /// Returns an error if no patterns are given.
    pub fn from_patterns(patterns: impl IntoIterator<Item = PfNamePattern>) -> crate::Result<Self> {
        let patterns = NonEmpty::from_vec(patterns.into_iter().collect()).ok_or(Error::NoValues {
            kind: SelectorKind::PfNames,
        })?;

        debug!(
            kind = %SelectorKind::PfNames,
            values = patterns.len(),
            with_ranges = patterns.iter().filter(|p| !p.ranges().is_empty()).count(),
            "selector constructed"
        );

        Ok(Self { patterns })
    }

    /// The configured patterns, in configuration order.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn patterns(&self) -> &NonEmpty<PfNamePattern> {
        &self.patterns
    }
}

impl Selector for PfNameSelector {
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.patterns.iter().any(|pattern| pattern.matches(device))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::ptr;

    use itertools::Itertools;
    use static_assertions::assert_impl_all;

    use super::*;
    use crate::MockPciNetDevice;

    assert_impl_all!(PfNameSelector: Send, Sync);

    fn pf(pf_name: &str) -> MockPciNetDevice {
        let mut device = MockPciNetDevice::new();
        device.expect_pf_name().return_const(pf_name.to_string());
        device.expect_vf_index().never();
        device
    }

    fn vf(pf_name: &str, vf_index: u32) -> MockPciNetDevice {
        let mut device = MockPciNetDevice::new();
        device.expect_pf_name().return_const(pf_name.to_string());
        device.expect_vf_index().return_const(vf_index);
        device
    }

    #[test]
    fn populates_patterns() {
        let selector = PfNameSelector::new(["ens0", "eth0"]).unwrap();

        assert_eq!(
            selector.patterns().iter().map(PfNamePattern::name).collect_vec(),
            vec!["ens0", "eth0"]
        );
    }

    #[test]
    fn returns_devices_matching_pf_name_and_vf_ranges() {
        let selector = PfNameSelector::new(["ens0", "ens2f0#1", "ens2f1#0,3-5,7"]).unwrap();

        let devices = [
            pf("ens0"),
            pf("eth0"),
            vf("ens2f0", 1),
            vf("ens2f1", 0),
            vf("ens2f1", 1),
            vf("ens2f1", 2),
            vf("ens2f1", 3),
            vf("ens2f1", 4),
            vf("ens2f1", 5),
            vf("ens2f1", 6),
            vf("ens2f1", 7),
        ];
        let candidates = devices.iter().collect_vec();

        let filtered = selector.filter(&candidates);

        let expected = [0, 2, 3, 6, 7, 8, 10];
        assert_eq!(filtered.len(), expected.len());

        for (selected, index) in filtered.iter().zip(expected) {
            assert!(
                ptr::eq(*selected, &devices[index]),
                "device {index} expected in output order"
            );
        }
    }

    #[test]
    fn filtering_is_idempotent() {
        let selector = PfNameSelector::new(["ens2f1#1-2"]).unwrap();

        let devices = [vf("ens2f1", 0), vf("ens2f1", 1), vf("ens2f1", 2), vf("ens2f1", 3)];
        let candidates = devices.iter().collect_vec();

        let once = selector.filter(&candidates);
        let twice = selector.filter(&once);

        assert_eq!(once.len(), 2);
        assert!(once.iter().zip(&twice).all(|(a, b)| ptr::eq(*a, *b)));
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn no_match_is_empty_not_error() {
        let selector = PfNameSelector::new(["ens9"]).unwrap();

        let devices = [pf("ens0"), pf("eth0")];
        let candidates = devices.iter().collect_vec();

        assert!(selector.filter(&candidates).is_empty());
    }

    #[test]
    fn malformed_pattern_fails_construction() {
        let error = PfNameSelector::new(["ens0", "ens2f1#abc"]).unwrap_err();
        assert!(matches!(error, Error::InvalidPfNamePattern { .. }));

        PfNameSelector::new(["ens2f1#5-2"]).unwrap_err();
    }

    #[test]
    fn no_patterns_is_error() {
        let error = PfNameSelector::new(Vec::<String>::new()).unwrap_err();

        assert!(matches!(
            error,
            Error::NoValues {
                kind: SelectorKind::PfNames
            }
        ));
    }
}
