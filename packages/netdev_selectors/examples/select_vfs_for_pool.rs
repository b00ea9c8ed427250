//! Example that builds the selectors of a device pool from configuration and applies them to a
//! list of discovered devices.

use netdev_selectors::fake::FakeNetDevice;
use netdev_selectors::{PciNetDevice, Selector, SelectorConfig};

const POOL_CONFIG: &str = r#"
vendors = ["8086"]
drivers = ["iavf"]
pfNames = ["ens2f0#1", "ens2f1#0,3-5,7"]
"#;

fn main() {
    let config = SelectorConfig::from_toml_str(POOL_CONFIG).unwrap();
    let selectors = config.build().unwrap();

    let mut discovered = vec![
        FakeNetDevice::physical("ens0"),
        FakeNetDevice::physical("ens2f0"),
        FakeNetDevice::virtual_function("ens2f0", 1),
    ];
    discovered.extend((0..8).map(|index| FakeNetDevice::virtual_function("ens2f1", index)));

    println!("Discovered {} devices", discovered.len());

    for device in selectors.filter(&discovered) {
        println!(
            "Selected VF {} of {} ({}:{}, driver {})",
            device.vf_index(),
            device.pf_name(),
            device.vendor_id(),
            device.device_code(),
            device.driver_name()
        );
    }
}
