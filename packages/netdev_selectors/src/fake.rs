//! Fake devices for testing code that filters devices.
//!
//! Only available when the `test-util` feature is enabled.
//!
//! # Example
//!
//! ```
//! use netdev_selectors::fake::FakeNetDevice;
//! use netdev_selectors::{PfNameSelector, Selector};
//!
//! let devices = vec![
//!     FakeNetDevice::physical("ens0"),
//!     FakeNetDevice::virtual_function("ens2f1", 3),
//!     FakeNetDevice::virtual_function("ens2f1", 6),
//! ];
//!
//! let selector = PfNameSelector::new(["ens0", "ens2f1#3-5"]).unwrap();
//! let selected = selector.filter(&devices);
//!
//! assert_eq!(selected.len(), 2);
//! ```

use std::sync::Arc;

use crate::{PciNetDevice, VfIndex};

/// An in-memory device with freely configurable attributes.
///
/// A fake created via [`physical()`][Self::physical] has no virtual function index and panics if
/// one is requested, which lets tests prove that a selector never asks for it.
///
/// Clones are cheap and share the same attribute values.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FakeNetDevice {
    inner: Arc<FakeNetDeviceInner>,
}

#[derive(Clone, Debug, Eq, PartialEq)]
struct FakeNetDeviceInner {
    vendor_id: String,
    device_code: String,
    driver_name: String,
    pf_name: String,
    vf_index: Option<VfIndex>,
    link_type: String,
}

impl FakeNetDevice {
    /// Creates a physical function with the given interface name.
    ///
    /// The other attributes default to an Intel E810 bound to the `ice` driver on an Ethernet link.
    #[must_use]
    pub fn physical(pf_name: impl Into<String>) -> Self {
        Self::from_inner(FakeNetDeviceInner {
            vendor_id: "8086".to_string(),
            device_code: "1593".to_string(),
            driver_name: "ice".to_string(),
            pf_name: pf_name.into(),
            vf_index: None,
            link_type: "ether".to_string(),
        })
    }

    /// Creates a virtual function of the named physical function.
    ///
    /// The other attributes default to an Intel E810 virtual function bound to the `iavf` driver
    /// on an Ethernet link.
    #[must_use]
    pub fn virtual_function(pf_name: impl Into<String>, vf_index: VfIndex) -> Self {
        Self::from_inner(FakeNetDeviceInner {
            vendor_id: "8086".to_string(),
            device_code: "1889".to_string(),
            driver_name: "iavf".to_string(),
            pf_name: pf_name.into(),
            vf_index: Some(vf_index),
            link_type: "ether".to_string(),
        })
    }

    fn from_inner(inner: FakeNetDeviceInner) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }

    fn with(mut self, change: impl FnOnce(&mut FakeNetDeviceInner)) -> Self {
        change(Arc::make_mut(&mut self.inner));
        self
    }

    /// Sets the PCI vendor ID.
    #[must_use]
    pub fn with_vendor_id(self, vendor_id: impl Into<String>) -> Self {
        let vendor_id = vendor_id.into();
        self.with(|inner| inner.vendor_id = vendor_id)
    }

    /// Sets the PCI device ID.
    #[must_use]
    pub fn with_device_code(self, device_code: impl Into<String>) -> Self {
        let device_code = device_code.into();
        self.with(|inner| inner.device_code = device_code)
    }

    /// Sets the bound driver name.
    #[must_use]
    pub fn with_driver_name(self, driver_name: impl Into<String>) -> Self {
        let driver_name = driver_name.into();
        self.with(|inner| inner.driver_name = driver_name)
    }

    /// Sets the link type.
    #[must_use]
    pub fn with_link_type(self, link_type: impl Into<String>) -> Self {
        let link_type = link_type.into();
        self.with(|inner| inner.link_type = link_type)
    }

    /// Whether the device is a virtual function, i.e. has a virtual function index.
    #[must_use]
    pub fn is_virtual_function(&self) -> bool {
        self.inner.vf_index.is_some()
    }
}

impl PciNetDevice for FakeNetDevice {
    fn vendor_id(&self) -> &str {
        &self.inner.vendor_id
    }

    fn device_code(&self) -> &str {
        &self.inner.device_code
    }

    fn driver_name(&self) -> &str {
        &self.inner.driver_name
    }

    fn pf_name(&self) -> &str {
        &self.inner.pf_name
    }

    fn vf_index(&self) -> VfIndex {
        match self.inner.vf_index {
            Some(index) => index,
            None => panic!(
                "VF index requested from physical function {}",
                self.inner.pf_name
            ),
        }
    }

    fn link_type(&self) -> &str {
        &self.inner.link_type
    }
}
