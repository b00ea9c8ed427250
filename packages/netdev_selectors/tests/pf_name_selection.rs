//! End-to-end selection of physical and virtual functions by physical function name.

use std::sync::Arc;
use std::thread;

use netdev_selectors::fake::FakeNetDevice;
use netdev_selectors::{PciNetDevice, PfNameSelector, Selector, SelectorConfig};

fn candidates() -> Vec<FakeNetDevice> {
    let mut devices = vec![
        FakeNetDevice::physical("ens0"),
        FakeNetDevice::physical("eth0"),
        FakeNetDevice::virtual_function("ens2f0", 1),
    ];

    devices.extend((0..=7).map(|index| FakeNetDevice::virtual_function("ens2f1", index)));

    devices
}

fn describe(device: &FakeNetDevice) -> String {
    if device.is_virtual_function() {
        format!("{}/{}", device.pf_name(), device.vf_index())
    } else {
        device.pf_name().to_string()
    }
}

#[test]
fn selects_expected_devices() {
    // Physical functions in the candidate list panic if asked for a VF index, so this also
    // verifies that bare names never query it.
    let selector = PfNameSelector::new(["ens0", "ens2f0#1", "ens2f1#0,3-5,7"]).unwrap();

    let selected = selector.filter(&candidates());

    let described: Vec<_> = selected.iter().map(describe).collect();
    assert_eq!(
        described,
        vec![
            "ens0", "ens2f0/1", "ens2f1/0", "ens2f1/3", "ens2f1/4", "ens2f1/5", "ens2f1/7"
        ]
    );
}

#[test]
fn output_is_subsequence_of_input() {
    let selector = PfNameSelector::new(["ens2f1#6-7,0-1", "eth0"]).unwrap();
    let devices = candidates();

    let selected = selector.filter(&devices);

    let mut remaining = devices.iter();
    for device in &selected {
        assert!(
            remaining.any(|candidate| candidate == device),
            "{} is out of order or not from the input",
            describe(device)
        );
    }

    let described: Vec<_> = selected.iter().map(describe).collect();
    assert_eq!(described, vec!["eth0", "ens2f1/0", "ens2f1/1", "ens2f1/6", "ens2f1/7"]);
}

#[test]
fn filtering_is_idempotent() {
    let selector = PfNameSelector::new(["ens0", "ens2f1#3-5"]).unwrap();

    let once = selector.filter(&candidates());
    let twice = selector.filter(&once);

    assert_eq!(once, twice);
}

#[test]
fn works_with_trait_objects() {
    let selector = PfNameSelector::new(["ens2f1#2"]).unwrap();

    let devices: Vec<Arc<dyn PciNetDevice>> = candidates()
        .into_iter()
        .map(|device| Arc::new(device) as Arc<dyn PciNetDevice>)
        .collect();

    let selected = selector.filter(&devices);

    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].pf_name(), "ens2f1");
    assert_eq!(selected[0].vf_index(), 2);
}

#[test]
fn shared_between_threads() {
    let selector = SelectorConfig::from_toml_str(r#"pfNames = ["ens2f1#0,3-5,7"]"#)
        .unwrap()
        .build()
        .unwrap();
    let devices = candidates();

    let counts: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| selector.filter(&devices).len()))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().unwrap())
            .collect()
    });

    assert_eq!(counts, vec![5; 4]);
}

#[test]
fn malformed_ranges_fail_construction() {
    for pattern in ["ens2f1#abc", "ens2f1#5-2", "ens2f1#", "#3"] {
        assert!(
            PfNameSelector::new(["ens0", pattern]).is_err(),
            "'{pattern}' should be rejected"
        );
    }
}
