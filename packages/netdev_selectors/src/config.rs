use serde::Deserialize;
use tracing::debug;

use crate::{ConfiguredSelector, SelectorChain, SelectorKind};

/// The selector part of a device pool definition: for each kind of selector, the list of
/// acceptable values, if any.
///
/// Keys match [`SelectorKind`]'s textual form. Absent keys impose no restriction.
///
/// ```toml
/// vendors = ["8086"]
/// drivers = ["iavf", "vfio-pci"]
/// pfNames = ["ens2f0#1", "ens2f1#0,3-5,7"]
/// ```
///
/// Reading the configuration from a file or any other source is left to the caller.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
#[non_exhaustive]
pub struct SelectorConfig {
    /// Acceptable PCI vendor IDs.
    #[serde(default)]
    pub vendors: Option<Vec<String>>,

    /// Acceptable PCI device IDs.
    #[serde(default)]
    pub devices: Option<Vec<String>>,

    /// Acceptable bound driver names.
    #[serde(default)]
    pub drivers: Option<Vec<String>>,

    /// Acceptable physical function name patterns in the `name[#ranges]` form.
    #[serde(default)]
    pub pf_names: Option<Vec<String>>,

    /// Acceptable link types.
    #[serde(default)]
    pub link_types: Option<Vec<String>>,
}

impl SelectorConfig {
    /// Parses the configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, contains unknown keys or has values of
    /// the wrong type.
    pub fn from_toml_str(text: &str) -> crate::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// The configured values for one kind of selector, or `None` if the key was absent.
    #[must_use]
    pub fn values(&self, kind: SelectorKind) -> Option<&[String]> {
        match kind {
            SelectorKind::Vendors => self.vendors.as_deref(),
            SelectorKind::Devices => self.devices.as_deref(),
            SelectorKind::Drivers => self.drivers.as_deref(),
            SelectorKind::PfNames => self.pf_names.as_deref(),
            SelectorKind::LinkTypes => self.link_types.as_deref(),
        }
    }

    /// Constructs the selectors for every configured kind, chained in the order of
    /// [`SelectorKind::ALL`].
    ///
    /// # Errors
    ///
    /// Returns the first construction error encountered. A key that is present with an empty
    /// list is an error, as it would otherwise silently select nothing.
    pub fn build(&self) -> crate::Result<SelectorChain> {
        let mut chain = SelectorChain::new();

        for kind in SelectorKind::ALL {
            if let Some(values) = self.values(kind) {
                chain.push(ConfiguredSelector::new(kind, values.iter().cloned())?)?;
            }
        }

        debug!(stages = chain.len(), "selector chain built from configuration");

        Ok(chain)
    }
}
