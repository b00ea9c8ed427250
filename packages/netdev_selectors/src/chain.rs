use tracing::{debug, trace};

use crate::{ConfiguredSelector, Error, PciNetDevice, Selector, SelectorKind};

/// An ordered sequence of selectors of distinct kinds that a device must all satisfy.
///
/// Filtering applies each selector in turn to the output of the previous one, so devices are
/// selected if they match every selector in the chain (while each selector accepts a device if it
/// matches any of that selector's configured values). An empty chain selects every device.
///
/// # Example
///
/// ```
/// use netdev_selectors::fake::FakeNetDevice;
/// use netdev_selectors::{DriverSelector, PfNameSelector, Selector, SelectorChain};
///
/// let chain = SelectorChain::new()
///     .with(PfNameSelector::new(["ens2f1#0-3"]).unwrap())
///     .unwrap()
///     .with(DriverSelector::new(["vfio-pci"]).unwrap())
///     .unwrap();
///
/// let devices = vec![
///     FakeNetDevice::virtual_function("ens2f1", 0).with_driver_name("vfio-pci"),
///     FakeNetDevice::virtual_function("ens2f1", 1),
///     FakeNetDevice::virtual_function("ens2f1", 7).with_driver_name("vfio-pci"),
/// ];
///
/// assert_eq!(chain.filter(&devices), vec![devices[0].clone()]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectorChain {
    stages: Vec<ConfiguredSelector>,
}

impl SelectorChain {
    /// Creates an empty chain, which selects every device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a selector as the last stage of the chain.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain already contains a selector of the same kind. Multiple
    /// acceptable values for one attribute belong in a single selector.
    pub fn push(&mut self, selector: impl Into<ConfiguredSelector>) -> crate::Result<()> {
        let selector = selector.into();
        let kind = selector.kind();

        if self.contains_kind(kind) {
            return Err(Error::DuplicateKind { kind });
        }

        debug!(%kind, stage = self.stages.len(), "selector added to chain");

        self.stages.push(selector);
        Ok(())
    }

    /// Appends a selector as the last stage of the chain, builder style.
    ///
    /// # Errors
    ///
    /// Returns an error if the chain already contains a selector of the same kind.
    pub fn with(mut self, selector: impl Into<ConfiguredSelector>) -> crate::Result<Self> {
        self.push(selector)?;
        Ok(self)
    }

    /// The selectors in the order they are applied.
    #[cfg_attr(test, mutants::skip)] // Trivial accessor.
    #[must_use]
    pub fn stages(&self) -> &[ConfiguredSelector] {
        &self.stages
    }

    /// Whether the chain contains a selector of the given kind.
    #[must_use]
    pub fn contains_kind(&self, kind: SelectorKind) -> bool {
        self.stages.iter().any(|stage| stage.kind() == kind)
    }

    /// The number of selectors in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Whether the chain has no selectors and therefore selects every device.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl Selector for SelectorChain {
    fn matches(&self, device: &dyn PciNetDevice) -> bool {
        self.stages.iter().all(|stage| stage.matches(device))
    }

    fn filter<D>(&self, devices: &[D]) -> Vec<D>
    where
        D: PciNetDevice + Clone,
        Self: Sized,
    {
        let mut selected = devices.to_vec();

        for stage in &self.stages {
            if selected.is_empty() {
                break;
            }

            selected = stage.filter(&selected);
        }

        trace!(
            stages = self.stages.len(),
            candidates = devices.len(),
            selected = selected.len(),
            "filtered devices through chain"
        );

        selected
    }
}
