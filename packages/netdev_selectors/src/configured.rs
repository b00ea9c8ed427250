use tracing::trace;

use crate::{
    DeviceCodeSelector, DriverSelector, LinkTypeSelector, PciNetDevice, PfNameSelector, Selector,
    SelectorKind, VendorSelector,
};

/// A selector of any kind, as constructed from a configuration key and its values.
///
/// Use this when the kind of selector is only known at runtime, e.g. when it comes from a
/// configuration file.
///
/// # Example
///
/// ```
/// use netdev_selectors::fake::FakeNetDevice;
/// use netdev_selectors::{ConfiguredSelector, Selector, SelectorKind};
///
/// let kind: SelectorKind = "drivers".parse().unwrap();
/// let selector = ConfiguredSelector::new(kind, ["vfio-pci"]).unwrap();
///
/// let device = FakeNetDevice::virtual_function("ens2f0", 0).with_driver_name("vfio-pci");
/// assert!(selector.matches(&device));
/// ```
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum ConfiguredSelector {
    /// Selects by PCI vendor ID.
    Vendors(VendorSelector),

    /// Selects by PCI device ID.
    Devices(DeviceCodeSelector),

    /// Selects by bound driver.
    Drivers(DriverSelector),

    /// Selects by physical function name and virtual function index.
    PfNames(PfNameSelector),

    /// Selects by link type.
    LinkTypes(LinkTypeSelector),
}

impl ConfiguredSelector {
    /// Constructs the selector of the given kind from its configured values.
    ///
    /// # Errors
    ///
    /// Returns an error if the values are not acceptable for that kind of selector. See the
    /// constructors of the individual selector types for details.
    pub fn new<I, S>(kind: SelectorKind, values: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(match kind {
            SelectorKind::Vendors => Self::Vendors(VendorSelector::new(values)?),
            SelectorKind::Devices => Self::Devices(DeviceCodeSelector::new(values)?),
            SelectorKind::Drivers => Self::Drivers(DriverSelector::new(values)?),
            SelectorKind::PfNames => Self::PfNames(PfNameSelector::new(values)?),
            SelectorKind::LinkTypes => Self::LinkTypes(LinkTypeSelector::new(values)?),
        })
    }

    /// The kind of device attribute this selector matches on.
    #[must_use]
    pub fn kind(&self) -> SelectorKind {
        match self {
            Self::Vendors(_) => SelectorKind::Vendors,
            Self::Devices(_) => SelectorKind::Devices,
            Self::Drivers(_) => SelectorKind::Drivers,
            Self::PfNames(_) => SelectorKind::PfNames,
            Self::LinkTypes(_) => SelectorKind::LinkTypes,
        }
    }
}

impl Selector for ConfiguredSelector {
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        match self {
            Self::Vendors(selector) => selector.matches(device),
            Self::Devices(selector) => selector.matches(device),
            Self::Drivers(selector) => selector.matches(device),
            Self::PfNames(selector) => selector.matches(device),
            Self::LinkTypes(selector) => selector.matches(device),
        }
    }

    fn filter<D>(&self, devices: &[D]) -> Vec<D>
    where
        D: PciNetDevice + Clone,
        Self: Sized,
    {
        let selected = match self {
            Self::Vendors(selector) => selector.filter(devices),
            Self::Devices(selector) => selector.filter(devices),
            Self::Drivers(selector) => selector.filter(devices),
            Self::PfNames(selector) => selector.filter(devices),
            Self::LinkTypes(selector) => selector.filter(devices),
        };

        trace!(
            kind = %self.kind(),
            candidates = devices.len(),
            selected = selected.len(),
            "filtered devices"
        );

        selected
    }
}

impl From<VendorSelector> for ConfiguredSelector {
    fn from(selector: VendorSelector) -> Self {
        Self::Vendors(selector)
    }
}

impl From<DeviceCodeSelector> for ConfiguredSelector {
    fn from(selector: DeviceCodeSelector) -> Self {
        Self::Devices(selector)
    }
}

impl From<DriverSelector> for ConfiguredSelector {
    fn from(selector: DriverSelector) -> Self {
        Self::Drivers(selector)
    }
}

impl From<PfNameSelector> for ConfiguredSelector {
    fn from(selector: PfNameSelector) -> Self {
        Self::PfNames(selector)
    }
}

impl From<LinkTypeSelector> for ConfiguredSelector {
    fn from(selector: LinkTypeSelector) -> Self {
        Self::LinkTypes(selector)
    }
}
