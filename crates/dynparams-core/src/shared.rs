//! Read/write-locked parameter facade
//!
//! [`SharedParams`] guards a [`Params`] with a `RwLock`. `add` and `remove`
//! take the write lock; lookups, typed getters, `scan` and `count` take the
//! read lock, so readers never see a write half-done and never block each
//! other.
//!
//! # Iteration
//!
//! [`SharedParams::iterate`] holds the write lock for the whole walk because
//! the callback may mutate values. The callback must not call back into the
//! same `SharedParams`: any such call waits on the lock the iteration holds
//! and deadlocks. Use [`SharedParams::iterate_snapshot`] when the callback
//! needs to re-enter the facade, or [`SharedParams::with_params_mut`] for
//! compound updates.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dynparams_core::{SharedParams, TypedParams};
//!
//! let params = Arc::new(SharedParams::internal());
//! let writer = Arc::clone(&params);
//! std::thread::spawn(move || writer.add("ready", true).map(|_| ())).join().unwrap()?;
//! assert!(params.get_as_bool("ready")?);
//! ```

use crate::error::{ParamsError, ParamsResult};
use crate::params::{Params, TypedParams};
use crate::sources::{ParamMap, ParamSource, ParamsSource, SourceKind};
use crate::value::ParamValue;
use regex::Regex;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Thread-safe parameter facade
#[derive(Debug, Default)]
pub struct SharedParams {
    inner: RwLock<Params>,
}

impl SharedParams {
    /// Create a locked facade over a source selected by registered name
    pub fn new(source_name: &str, args: Option<Vec<String>>) -> ParamsResult<Self> {
        Ok(Self::from_params(Params::new(source_name, args)?))
    }

    /// Create a locked facade over an empty in-memory source
    pub fn internal() -> Self {
        Self::from_params(Params::internal())
    }

    /// Create a locked facade over parsed `--key=value` tokens
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_params(Params::from_args(args))
    }

    /// Wrap an already-built source
    pub fn from_source(source: impl Into<ParamSource>) -> Self {
        Self::from_params(Params::from_source(source))
    }

    /// Put an existing facade behind a lock
    pub fn from_params(params: Params) -> Self {
        Self {
            inner: RwLock::new(params),
        }
    }

    fn read(&self) -> ParamsResult<RwLockReadGuard<'_, Params>> {
        self.inner.read().map_err(|e| {
            tracing::error!(error = %e, "Parameter lock poisoned on read");
            ParamsError::LockPoisoned(e.to_string())
        })
    }

    fn write(&self) -> ParamsResult<RwLockWriteGuard<'_, Params>> {
        self.inner.write().map_err(|e| {
            tracing::error!(error = %e, "Parameter lock poisoned on write");
            ParamsError::LockPoisoned(e.to_string())
        })
    }

    /// Store a value under the write lock
    pub fn add(&self, key: impl Into<String>, value: impl Into<ParamValue>) -> ParamsResult<&Self> {
        self.write()?.add(key, value);
        Ok(self)
    }

    /// Delete an entry under the write lock
    pub fn remove(&self, key: &str) -> ParamsResult<Option<ParamValue>> {
        Ok(self.write()?.remove(key))
    }

    /// Copy of the raw stored value, `Ok(None)` when the key is absent
    pub fn get(&self, key: &str) -> ParamsResult<Option<ParamValue>> {
        Ok(self.read()?.get(key).cloned())
    }

    /// Check whether a key is present
    pub fn has(&self, key: &str) -> ParamsResult<bool> {
        Ok(self.read()?.has(key))
    }

    /// Number of stored entries
    pub fn count(&self) -> ParamsResult<usize> {
        Ok(self.read()?.count())
    }

    /// Snapshot of stored keys, in no particular order
    pub fn keys(&self) -> ParamsResult<Vec<String>> {
        Ok(self.read()?.keys())
    }

    /// Entries whose key matches a regular expression
    pub fn scan(&self, pattern: &str) -> ParamsResult<ParamMap> {
        let regex = Regex::new(pattern)?;
        self.scan_regex(&regex)
    }

    /// Entries whose key matches a compiled regular expression
    pub fn scan_regex(&self, pattern: &Regex) -> ParamsResult<ParamMap> {
        Ok(self.read()?.scan_regex(pattern))
    }

    /// Visit every entry under the write lock
    ///
    /// The callback must not touch this `SharedParams`; see the module docs.
    pub fn iterate<F>(&self, f: F) -> ParamsResult<()>
    where
        F: FnMut(&str, &mut ParamValue),
    {
        self.write()?.iterate(f);
        Ok(())
    }

    /// Visit a snapshot of every entry with no lock held
    ///
    /// The entries are copied under the read lock, which is released before
    /// the first callback runs, so the callback may call back into this
    /// `SharedParams` (for example to `add`). Writes made meanwhile are not
    /// reflected in the snapshot, and changing the passed value does not
    /// change the store.
    pub fn iterate_snapshot<F>(&self, mut f: F) -> ParamsResult<()>
    where
        F: FnMut(&str, ParamValue),
    {
        let snapshot: Vec<(String, ParamValue)> = {
            let guard = self.read()?;
            guard
                .source()
                .storage()
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        };
        for (key, value) in snapshot {
            f(&key, value);
        }
        Ok(())
    }

    /// Run `f` with shared access to the whole store in one critical section
    pub fn with_params<R>(&self, f: impl FnOnce(&Params) -> R) -> ParamsResult<R> {
        let guard = self.read()?;
        Ok(f(&guard))
    }

    /// Run `f` with exclusive access to the whole store in one critical section
    pub fn with_params_mut<R>(&self, f: impl FnOnce(&mut Params) -> R) -> ParamsResult<R> {
        let mut guard = self.write()?;
        Ok(f(&mut guard))
    }

    /// Kind of the wrapped source
    pub fn source_kind(&self) -> ParamsResult<SourceKind> {
        Ok(self.read()?.source_kind())
    }

    /// Remove the lock, returning the inner facade
    pub fn into_params(self) -> ParamsResult<Params> {
        self.inner
            .into_inner()
            .map_err(|e| ParamsError::LockPoisoned(e.to_string()))
    }
}

impl From<Params> for SharedParams {
    fn from(params: Params) -> Self {
        Self::from_params(params)
    }
}

impl TypedParams for SharedParams {
    fn lookup<T, F>(&self, key: &str, f: F) -> ParamsResult<T>
    where
        F: FnOnce(&ParamValue) -> ParamsResult<T>,
    {
        let guard = self.read()?;
        let value = guard.get(key).ok_or_else(|| ParamsError::not_found(key))?;
        f(value)
    }
}
