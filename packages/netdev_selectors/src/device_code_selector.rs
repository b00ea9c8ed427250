use crate::exact_match::ExactMatchSet;
use crate::{PciNetDevice, Selector, SelectorKind};

/// Selects devices whose PCI device ID is one of the configured values.
///
/// Values are compared byte-for-byte with [`PciNetDevice::device_code()`]. No case folding,
/// prefix or wildcard matching is applied.
#[derive(Clone, Debug)]
pub struct DeviceCodeSelector {
    devices: ExactMatchSet,
}

impl DeviceCodeSelector {
    /// Creates a selector that accepts any of the given device IDs.
    ///
    /// # Errors
    ///
    /// Returns an error if no values are given or if any of the values is an empty string.
    pub fn new<I, S>(devices: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            devices: ExactMatchSet::new(SelectorKind::Devices, devices)?,
        })
    }

    /// The configured device IDs, in configuration order and without duplicates.
    #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
    pub fn devices(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.devices.values()
    }
}

impl Selector for DeviceCodeSelector {
    #[inline]
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.devices.contains(device.device_code())
    }
}
