use std::fmt::Debug;
use std::sync::Arc;

/// Index of a virtual function, scoped to its parent physical function.
pub type VfIndex = u32;

/// Read-only view of a network-capable PCI device, as produced by device discovery.
///
/// Selectors only ever read these attributes. The identity of a device is opaque; two devices
/// are never compared with each other, only their attributes against configured values.
#[cfg_attr(test, mockall::automock)]
pub trait PciNetDevice: Debug + Send + Sync {
    /// PCI vendor ID as a lowercase hex string without prefix, e.g. `8086`.
    fn vendor_id(&self) -> &str;

    /// PCI device ID as a lowercase hex string without prefix, e.g. `154c`.
    fn device_code(&self) -> &str;

    /// Name of the kernel driver bound to the device, e.g. `vfio-pci`.
    fn driver_name(&self) -> &str;

    /// Network interface name of the physical function, e.g. `ens2f1`. For a physical function
    /// this is the name of the device itself.
    fn pf_name(&self) -> &str;

    /// Index of the device among the virtual functions of its physical function.
    ///
    /// Only meaningful if the device is a virtual function. Selectors never call this unless the
    /// configuration explicitly asks for specific virtual function indexes, so implementations for
    /// physical functions may return any value.
    fn vf_index(&self) -> VfIndex;

    /// Link layer type of the interface, e.g. `ether` or `infiniband`.
    fn link_type(&self) -> &str;
}

macro_rules! delegate_pci_net_device {
    ($($wrapper:ty),+) => {
        $(
            impl<T: PciNetDevice + ?Sized> PciNetDevice for $wrapper {
                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn vendor_id(&self) -> &str {
                    (**self).vendor_id()
                }

                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn device_code(&self) -> &str {
                    (**self).device_code()
                }

                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn driver_name(&self) -> &str {
                    (**self).driver_name()
                }

                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn pf_name(&self) -> &str {
                    (**self).pf_name()
                }

                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn vf_index(&self) -> VfIndex {
                    (**self).vf_index()
                }

                #[cfg_attr(test, mutants::skip)] // Trivial delegation, do not waste time on mutation.
                #[inline]
                fn link_type(&self) -> &str {
                    (**self).link_type()
                }
            }
        )+
    };
}

delegate_pci_net_device!(&T, Box<T>, Arc<T>);

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn wrappers_delegate_to_inner() {
        let mut mock = MockPciNetDevice::new();
        mock.expect_vendor_id().return_const("8086".to_string());
        mock.expect_pf_name().return_const("ens2f1".to_string());
        mock.expect_vf_index().return_const(3_u32);

        let shared: Arc<dyn PciNetDevice> = Arc::new(mock);
        let borrowed = &shared;

        assert_eq!(borrowed.vendor_id(), "8086");
        assert_eq!(borrowed.pf_name(), "ens2f1");
        assert_eq!(borrowed.vf_index(), 3);
    }
}
