use crate::exact_match::ExactMatchSet;
use crate::{PciNetDevice, Selector, SelectorKind};

/// Selects devices whose link type is one of the configured values.
///
/// Values are compared byte-for-byte with [`PciNetDevice::link_type()`]. No case folding,
/// prefix or wildcard matching is applied.
#[derive(Clone, Debug)]
pub struct LinkTypeSelector {
    link_types: ExactMatchSet,
}

impl LinkTypeSelector {
    /// Creates a selector that accepts any of the given link types.
    ///
    /// # Errors
    ///
    /// Returns an error if no values are given or if any of the values is an empty string.
    pub fn new<I, S>(link_types: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            link_types: ExactMatchSet::new(SelectorKind::LinkTypes, link_types)?,
        })
    }

    /// The configured link types, in configuration order and without duplicates.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    pub fn link_types(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.link_types.values()
    }
}

impl Selector for LinkTypeSelector {
    #[inline]
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.link_types.contains(device.link_type())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::ptr;

    use itertools::Itertools;

    use super::*;
    use crate::MockPciNetDevice;

    #[test]
    fn populates_link_types() {
        let selector = LinkTypeSelector::new(["ether"]).unwrap();

        assert_eq!(selector.link_types().collect_vec(), vec!["ether"]);
    }

    #[test]
    fn returns_devices_matching_link_type() {
        let selector = LinkTypeSelector::new(["ether"]).unwrap();

        let mut dev0 = MockPciNetDevice::new();
        dev0.expect_link_type().return_const("ether".to_string());
        let mut dev1 = MockPciNetDevice::new();
        dev1.expect_link_type().return_const("infiniband".to_string());

        let filtered = selector.filter(&[&dev0, &dev1]);

        assert_eq!(filtered.len(), 1);
        assert!(ptr::eq(filtered[0], &dev0));
    }

    #[test]
    fn link_type_is_case_sensitive() {
        let selector = LinkTypeSelector::new(["ether"]).unwrap();

        let mut device = MockPciNetDevice::new();
        device.expect_link_type().return_const("ETHER".to_string());

        assert!(!selector.matches(&device));
    }
}
