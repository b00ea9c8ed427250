use foldhash::HashSet;
use tracing::debug;

use crate::{Error, SelectorKind};

/// The configured values of a selector that accepts a device attribute if it is byte-for-byte
/// equal to any of the values.
#[derive(Clone, Debug)]
pub(crate) struct ExactMatchSet {
    // Configuration order, without duplicates. Only used for reporting.
    ordered: Vec<String>,

    lookup: HashSet<String>,
}

impl ExactMatchSet {
    pub(crate) fn new<I, S>(kind: SelectorKind, values: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ordered = Vec::new();
        let mut lookup = HashSet::default();

        for value in values {
            let value = value.into();

            if value.is_empty() {
                return Err(Error::EmptyValue { kind });
            }

            if lookup.insert(value.clone()) {
                ordered.push(value);
            }
        }

        if ordered.is_empty() {
            return Err(Error::NoValues { kind });
        }

        debug!(%kind, values = ordered.len(), "selector constructed");

        Ok(Self { ordered, lookup })
    }

    #[inline]
    pub(crate) fn contains(&self, value: &str) -> bool {
        self.lookup.contains(value)
    }

    pub(crate) fn values(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.ordered.iter().map(String::as_str)
    }
}
