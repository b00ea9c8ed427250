//! Combining selectors of several kinds into a pool definition.

use netdev_selectors::fake::FakeNetDevice;
use netdev_selectors::{
    ConfiguredSelector, Error, PciNetDevice, Selector, SelectorChain, SelectorConfig, SelectorKind,
};

fn inventory() -> Vec<FakeNetDevice> {
    vec![
        FakeNetDevice::physical("ens1f0"),
        FakeNetDevice::virtual_function("ens1f0", 0),
        FakeNetDevice::virtual_function("ens1f0", 1).with_driver_name("vfio-pci"),
        FakeNetDevice::virtual_function("ens1f0", 2).with_driver_name("vfio-pci"),
        FakeNetDevice::physical("ens3f0")
            .with_vendor_id("15b3")
            .with_device_code("1017")
            .with_driver_name("mlx5_core"),
        FakeNetDevice::virtual_function("ens3f0", 0)
            .with_vendor_id("15b3")
            .with_device_code("1018")
            .with_driver_name("mlx5_core"),
        FakeNetDevice::virtual_function("ib0", 0)
            .with_vendor_id("15b3")
            .with_device_code("1018")
            .with_driver_name("mlx5_core")
            .with_link_type("infiniband"),
    ]
}

fn names(devices: &[FakeNetDevice]) -> Vec<String> {
    devices
        .iter()
        .map(|device| {
            if device.is_virtual_function() {
                format!("{}/{}", device.pf_name(), device.vf_index())
            } else {
                device.pf_name().to_string()
            }
        })
        .collect()
}

#[test]
fn dpdk_pool() {
    let config = SelectorConfig::from_toml_str(
        r#"
        vendors = ["8086"]
        devices = ["1889"]
        drivers = ["vfio-pci"]
        "#,
    )
    .unwrap();

    let selected = config.build().unwrap().filter(&inventory());

    assert_eq!(names(&selected), vec!["ens1f0/1", "ens1f0/2"]);
}

#[test]
fn mellanox_ethernet_pool() {
    let config = SelectorConfig::from_toml_str(
        r#"
        vendors = ["15b3"]
        devices = ["1018"]
        linkTypes = ["ether"]
        "#,
    )
    .unwrap();

    let selected = config.build().unwrap().filter(&inventory());

    assert_eq!(names(&selected), vec!["ens3f0/0"]);
}

#[test]
fn values_within_kind_combine_with_or() {
    let chain = SelectorChain::new()
        .with(ConfiguredSelector::new(SelectorKind::Drivers, ["ice", "mlx5_core"]).unwrap())
        .unwrap();

    let selected = chain.filter(&inventory());

    assert_eq!(names(&selected), vec!["ens1f0", "ens3f0", "ens3f0/0", "ib0/0"]);
}

#[test]
fn no_match_is_empty() {
    let config = SelectorConfig::from_toml_str(r#"vendors = ["14e4"]"#).unwrap();

    let selected = config.build().unwrap().filter(&inventory());

    assert!(selected.is_empty());
}

#[test]
fn stage_order_does_not_change_result() {
    let vendors_first = SelectorChain::new()
        .with(ConfiguredSelector::new(SelectorKind::Vendors, ["15b3"]).unwrap())
        .unwrap()
        .with(ConfiguredSelector::new(SelectorKind::PfNames, ["ens3f0", "ib0#0"]).unwrap())
        .unwrap();

    let pf_names_first = SelectorChain::new()
        .with(ConfiguredSelector::new(SelectorKind::PfNames, ["ens3f0", "ib0#0"]).unwrap())
        .unwrap()
        .with(ConfiguredSelector::new(SelectorKind::Vendors, ["15b3"]).unwrap())
        .unwrap();

    let devices = inventory();

    assert_eq!(vendors_first.filter(&devices), pf_names_first.filter(&devices));
}

#[test]
fn construction_errors_surface_from_config() {
    let error = SelectorConfig::from_toml_str(r#"pfNames = ["ens1f0#1,,2"]"#)
        .unwrap()
        .build()
        .unwrap_err();

    assert!(matches!(error, Error::InvalidPfNamePattern { .. }));
    assert!(error.to_string().contains("ens1f0#1,,2"));
}
