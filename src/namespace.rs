//! Hash aliases and the annotation namespace map
//!
//! Annotations attach secondary facts to a semantic node, keyed by an
//! arbitrary namespace. Values under one namespace keep insertion order and
//! are deduplicated; namespaces iterate in sorted order so annotated markup is
//! deterministic.

use alloc::collections::BTreeMap;

use rapidhash::{RapidHashMap, RapidHashSet};

/// Make it easier to switch between different hash backends.
pub type KeyMap<K, V> = RapidHashMap<K, V>;
/// Alias for the default hash set.
pub type KeySet<K> = RapidHashSet<K>;

/// Ordered namespace → values mapping carried by every semantic node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Annotations {
    entries: BTreeMap<String, Vec<String>>,
}

impl Annotations {
    /// Adds `value` under `namespace` unless it is already present.
    pub fn add(&mut self, namespace: &str, value: &str) {
        let values = self.entries.entry(namespace.to_owned()).or_default();
        if !values.iter().any(|v| v == value) {
            values.push(value.to_owned());
        }
    }

    /// Values recorded under `namespace`, empty if none.
    #[must_use]
    pub fn get(&self, namespace: &str) -> &[String] {
        self.entries.get(namespace).map_or(&[], Vec::as_slice)
    }

    /// Whether `namespace` carries `value`.
    #[must_use]
    pub fn has(&self, namespace: &str, value: &str) -> bool {
        self.get(namespace).iter().any(|v| v == value)
    }

    /// Whether `namespace` carries any value.
    #[must_use]
    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    /// Drops the whole namespace, returning its values.
    pub fn remove(&mut self, namespace: &str) -> Option<Vec<String>> {
        self.entries.remove(namespace)
    }

    /// Whether no namespace is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Namespaces and their values in sorted namespace order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(ns, values)| (ns.as_str(), values.as_slice()))
    }
}
