use crate::exact_match::ExactMatchSet;
use crate::{PciNetDevice, Selector, SelectorKind};

/// Selects devices whose bound driver is one of the configured values.
///
/// Values are compared byte-for-byte with [`PciNetDevice::driver_name()`]. No case folding,
/// prefix or wildcard matching is applied.
#[derive(Clone, Debug)]
pub struct DriverSelector {
    drivers: ExactMatchSet,
}

impl DriverSelector {
    /// Creates a selector that accepts any of the given driver names.
    ///
    /// # Errors
    ///
    /// Returns an error if no values are given or if any of the values is an empty string.
    pub fn new<I, S>(drivers: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            drivers: ExactMatchSet::new(SelectorKind::Drivers, drivers)?,
        })
    }

    /// The configured driver names, in configuration order and without duplicates.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    pub fn drivers(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.drivers.values()
    }
}

impl Selector for DriverSelector {
    #[inline]
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.drivers.contains(device.driver_name())
    }
}
