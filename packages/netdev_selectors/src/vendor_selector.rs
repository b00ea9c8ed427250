use crate::exact_match::ExactMatchSet;
use crate::{PciNetDevice, Selector, SelectorKind};

/// Selects devices whose PCI vendor ID is one of the configured values.
///
/// Values are compared byte-for-byte with [`PciNetDevice::vendor_id()`]. No case folding,
/// prefix or wildcard matching is applied.
#[derive(Clone, Debug)]
pub struct VendorSelector {
    vendors: ExactMatchSet,
}

impl VendorSelector {
    /// Creates a selector that accepts any of the given vendor IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if no values are given or if any of the values is an empty string.
    pub fn new<I, S>(vendors: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            vendors: ExactMatchSet::new(SelectorKind::Vendors, vendors)?,
        })
    }

    /// The configured vendor IDs, in configuration order and without duplicates.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    pub fn vendors(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.vendors.values()
    }
}

impl Selector for VendorSelector {
    #[inline]
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.vendors.contains(device.vendor_id())
    }
}
