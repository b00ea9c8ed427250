use std::fmt::Debug;

use crate::PciNetDevice;

/// An immutable predicate that narrows down a list of candidate devices to those matching
/// configured criteria.
///
/// Selectors are constructed once from configuration and then applied to any number of device
/// lists. They hold no mutable state, so a single instance can be shared between threads and used
/// concurrently without synchronization.
pub trait Selector: Debug + Send + Sync {
    /// Whether a single device satisfies this selector.
    fn matches(&self, device: &dyn PciNetDevice) -> bool;

    /// Returns the devices that satisfy this selector, in their original order.
    ///
    /// The input is left untouched and the output is a subsequence of it: devices are only ever
    /// removed, never reordered or duplicated. An empty result is a valid outcome, not an error.
    ///
    /// Devices are typically cheap handles such as `&D` or `Arc<D>`, so cloning the selected ones
    /// into the output does not copy the devices themselves.
    ///
    /// # Example
    ///
    /// ```
    /// use netdev_selectors::fake::FakeNetDevice;
    /// use netdev_selectors::{Selector, VendorSelector};
    ///
    /// let intel = FakeNetDevice::physical("ens0").with_vendor_id("8086");
    /// let mellanox = FakeNetDevice::physical("ens1").with_vendor_id("15b3");
    /// let candidates = [&intel, &mellanox];
    ///
    /// let selector = VendorSelector::new(["8086"]).unwrap();
    ///
    /// assert_eq!(selector.filter(&candidates), vec![&intel]);
    /// ```
    #[must_use]
    fn filter<D>(&self, devices: &[D]) -> Vec<D>
    where
        D: PciNetDevice + Clone,
        Self: Sized,
    {
        devices
            .iter()
            .filter(|device| self.matches(*device))
            .cloned()
            .collect()
    }
}
