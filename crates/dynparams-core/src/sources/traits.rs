//! Core trait for parameter sources
//!
//! A source owns a single key/value map. Implementations only have to expose
//! that map; every storage operation is provided on top of it, so the
//! in-memory and argument-backed sources behave identically once built.

use crate::value::ParamValue;
use regex::Regex;
use std::collections::HashMap;

/// Key/value map owned by a source
pub type ParamMap = HashMap<String, ParamValue>;

/// Callback type accepted by [`ParamsSource::iterate`]
pub type ParamsIteratorFn<'a> = dyn FnMut(&str, &mut ParamValue) + 'a;

/// Storage contract shared by all parameter sources
///
/// `get` never fails: a missing key is `None`, which is distinct from a key
/// holding an empty string. Turning absence into an error is the facade's
/// job.
pub trait ParamsSource {
    /// Registered name of this source
    fn name(&self) -> &str;

    /// Underlying map
    fn storage(&self) -> &ParamMap;

    /// Underlying map, mutably
    fn storage_mut(&mut self) -> &mut ParamMap;

    /// Store a value, replacing any previous value under the same key
    fn add(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self
    where
        Self: Sized,
    {
        self.storage_mut().insert(key.into(), value.into());
        self
    }

    /// Raw stored value, or `None` when the key is absent
    fn get(&self, key: &str) -> Option<&ParamValue> {
        self.storage().get(key)
    }

    /// Raw stored value for in-place mutation
    fn get_mut(&mut self, key: &str) -> Option<&mut ParamValue> {
        self.storage_mut().get_mut(key)
    }

    /// Check whether a key is present
    fn has(&self, key: &str) -> bool {
        self.storage().contains_key(key)
    }

    /// Number of stored entries
    fn count(&self) -> usize {
        self.storage().len()
    }

    /// Delete an entry, returning its value
    fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.storage_mut().remove(key)
    }

    /// Snapshot of stored keys, in no particular order
    fn keys(&self) -> Vec<String> {
        self.storage().keys().cloned().collect()
    }

    /// Entries whose key matches `pattern`
    ///
    /// Nothing is cached; every call walks the whole map.
    fn scan(&self, pattern: &Regex) -> ParamMap {
        self.storage()
            .iter()
            .filter(|(key, _)| pattern.is_match(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Visit every entry once, in unspecified order
    ///
    /// Values are handed out by mutable reference, so anything the callback
    /// writes through them is kept in the store.
    fn iterate(&mut self, f: &mut ParamsIteratorFn<'_>) {
        for (key, value) in self.storage_mut().iter_mut() {
            f(key, value);
        }
    }
}
