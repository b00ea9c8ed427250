use std::fmt::{self, Display};
use std::str::FromStr;

use crate::Error;

/// The device attribute a selector matches on.
///
/// The textual form is the configuration key used for the selector's values, e.g. `pfNames`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum SelectorKind {
    /// Matches [`PciNetDevice::vendor_id()`][crate::PciNetDevice::vendor_id].
    Vendors,

    /// Matches [`PciNetDevice::device_code()`][crate::PciNetDevice::device_code].
    Devices,

    /// Matches [`PciNetDevice::driver_name()`][crate::PciNetDevice::driver_name].
    Drivers,

    /// Matches [`PciNetDevice::pf_name()`][crate::PciNetDevice::pf_name], optionally narrowed
    /// down by [`PciNetDevice::vf_index()`][crate::PciNetDevice::vf_index].
    PfNames,

    /// Matches [`PciNetDevice::link_type()`][crate::PciNetDevice::link_type].
    LinkTypes,
}

impl SelectorKind {
    /// Every selector kind, in the order a [`SelectorConfig`][crate::SelectorConfig] applies them.
    pub const ALL: [Self; 5] = [
        Self::Vendors,
        Self::Devices,
        Self::Drivers,
        Self::PfNames,
        Self::LinkTypes,
    ];

    /// The configuration key for this kind of selector.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Vendors => "vendors",
            Self::Devices => "devices",
            Self::Drivers => "drivers",
            Self::PfNames => "pfNames",
            Self::LinkTypes => "linkTypes",
        }
    }
}

impl Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SelectorKind {
    type Err = Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| Error::UnknownKind { key: s.to_string() })
    }
}
