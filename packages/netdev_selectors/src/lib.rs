#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Selects network-capable PCI devices from a pool of discovered candidates, based on
//! administrator-configured criteria.
//!
//! A device plugin discovers network devices, groups the ones matching a pool definition into a
//! named resource pool and advertises the pool to an orchestrator. This package implements the
//! matching: each pool definition lists acceptable values per device attribute and the selectors
//! here narrow down the discovered devices to those that qualify.
//!
//! # Selectors
//!
//! Every selector implements [`Selector`] and accepts a device if the relevant attribute matches
//! any of its configured values:
//!
//! | Selector               | Configuration key | Device attribute                          |
//! |------------------------|-------------------|-------------------------------------------|
//! | [`VendorSelector`]     | `vendors`         | [`PciNetDevice::vendor_id()`]             |
//! | [`DeviceCodeSelector`] | `devices`         | [`PciNetDevice::device_code()`]           |
//! | [`DriverSelector`]     | `drivers`         | [`PciNetDevice::driver_name()`]           |
//! | [`PfNameSelector`]     | `pfNames`         | [`PciNetDevice::pf_name()`], `vf_index()` |
//! | [`LinkTypeSelector`]   | `linkTypes`       | [`PciNetDevice::link_type()`]             |
//!
//! All values are compared exactly, except for physical function names, which may carry a list of
//! virtual function index ranges: `ens2f1#0,3-5,7` selects virtual functions 0, 3, 4, 5 and 7 of
//! `ens2f1`, whereas a bare `ens2f1` selects the physical function and all of its virtual functions.
//!
//! Selectors of different kinds are combined with [`SelectorChain`], which only selects devices
//! that every selector in the chain accepts.
//!
//! # Construction and filtering
//!
//! Selectors validate their entire configuration when constructed and are immutable afterwards.
//! Filtering never fails and never modifies the candidates; it returns the accepted devices in
//! their original order.
//!
//! ```
//! use netdev_selectors::fake::FakeNetDevice;
//! use netdev_selectors::{Selector, SelectorConfig};
//!
//! let config = SelectorConfig::from_toml_str(
//!     r#"
//!     vendors = ["8086"]
//!     pfNames = ["ens0", "ens2f0#1", "ens2f1#0,3-5,7"]
//!     "#,
//! )
//! .unwrap();
//!
//! let selectors = config.build().unwrap();
//!
//! let candidates = vec![
//!     FakeNetDevice::physical("ens0"),
//!     FakeNetDevice::physical("eth0"),
//!     FakeNetDevice::virtual_function("ens2f1", 4),
//!     FakeNetDevice::virtual_function("ens2f1", 6),
//!     FakeNetDevice::virtual_function("ens2f1", 7).with_vendor_id("15b3"),
//! ];
//!
//! let selected = selectors.filter(&candidates);
//! assert_eq!(selected, vec![candidates[0].clone(), candidates[2].clone()]);
//! ```
//!
//! Malformed configuration is rejected at construction time:
//!
//! ```
//! use netdev_selectors::PfNameSelector;
//!
//! assert!(PfNameSelector::new(["ens2f1#5-2"]).is_err());
//! ```

mod chain;
mod config;
mod configured;
mod device;
mod device_code_selector;
mod driver_selector;
mod error;
mod exact_match;
mod kind;
mod link_type_selector;
mod pf_name_pattern;
mod pf_name_selector;
mod selector;
mod vendor_selector;

#[cfg(any(test, feature = "test-util"))]
pub mod fake;

pub use chain::*;
pub use config::*;
pub use configured::*;
pub use device::*;
pub use device_code_selector::*;
pub use driver_selector::*;
pub use error::*;
pub use kind::*;
pub use link_type_selector::*;
pub use pf_name_pattern::*;
pub use pf_name_selector::*;
pub use selector::*;
pub use vendor_selector::*;

pub use rangelist::IndexRange;
