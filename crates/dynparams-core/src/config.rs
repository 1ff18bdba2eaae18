//! Facade configuration
//!
//! [`ParamsConfig`] describes which source to use, its construction input, and
//! whether the facade must be safe for concurrent use. It deserializes from
//! any serde format, e.g.:
//!
//! ```json
//! { "source": "source.args", "args": ["--port=8080"], "concurrent": true }
//! ```
//!
//! [`ParamsConfig::build`] resolves `concurrent` once, at construction, into
//! either an unsynchronised [`Params`] or a locked [`SharedParams`].

use crate::error::ParamsResult;
use crate::params::{Params, TypedParams};
use crate::shared::SharedParams;
use crate::sources::{ParamMap, ParamSource, SourceKind};
use crate::value::ParamValue;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Construction settings for a parameter facade
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParamsConfig {
    /// Which backend to build
    pub source: SourceKind,
    /// Raw `--key=value` tokens; required for `source.args`
    pub args: Option<Vec<String>>,
    /// Guard the facade with a read/write lock
    pub concurrent: bool,
}

impl ParamsConfig {
    /// Config for an empty in-memory source
    pub fn internal() -> Self {
        Self::default()
    }

    /// Config for an argument source over `args`
    pub fn args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            source: SourceKind::Args,
            args: Some(args.into_iter().map(Into::into).collect()),
            concurrent: false,
        }
    }

    /// Set whether the facade should be lock-guarded
    pub fn concurrent(mut self, concurrent: bool) -> Self {
        self.concurrent = concurrent;
        self
    }

    /// Build the facade this config describes
    pub fn build(self) -> ParamsResult<ParamsHandle> {
        let source = ParamSource::from_kind(self.source, self.args)?;
        let params = Params::from_source(source);
        tracing::debug!(
            source = self.source.as_str(),
            concurrent = self.concurrent,
            "Built parameter facade"
        );
        Ok(if self.concurrent {
            ParamsHandle::Shared(Arc::new(SharedParams::from_params(params)))
        } else {
            ParamsHandle::Local(params)
        })
    }
}

/// A facade built from a [`ParamsConfig`]
#[derive(Debug, Clone)]
pub enum ParamsHandle {
    Local(Params),
    Shared(Arc<SharedParams>),
}

impl ParamsHandle {
    /// Check whether this handle is lock-guarded
    pub fn is_concurrent(&self) -> bool {
        matches!(self, ParamsHandle::Shared(_))
    }

    /// Locked facade, if this handle was built concurrent
    pub fn shared(&self) -> Option<Arc<SharedParams>> {
        match self {
            ParamsHandle::Shared(shared) => Some(Arc::clone(shared)),
            ParamsHandle::Local(_) => None,
        }
    }

    /// Store a value
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> ParamsResult<&mut Self> {
        match self {
            ParamsHandle::Local(params) => {
                params.add(key, value);
            }
            ParamsHandle::Shared(shared) => {
                shared.add(key, value)?;
            }
        }
        Ok(self)
    }

    /// Copy of the raw stored value
    pub fn get(&self, key: &str) -> ParamsResult<Option<ParamValue>> {
        match self {
            ParamsHandle::Local(params) => Ok(params.get(key).cloned()),
            ParamsHandle::Shared(shared) => shared.get(key),
        }
    }

    /// Check whether a key is present
    pub fn has(&self, key: &str) -> ParamsResult<bool> {
        match self {
            ParamsHandle::Local(params) => Ok(params.has(key)),
            ParamsHandle::Shared(shared) => shared.has(key),
        }
    }

    /// Number of stored entries
    pub fn count(&self) -> ParamsResult<usize> {
        match self {
            ParamsHandle::Local(params) => Ok(params.count()),
            ParamsHandle::Shared(shared) => shared.count(),
        }
    }

    /// Entries whose key matches a regular expression
    pub fn scan(&self, pattern: &str) -> ParamsResult<ParamMap> {
        match self {
            ParamsHandle::Local(params) => params.scan(pattern),
            ParamsHandle::Shared(shared) => shared.scan(pattern),
        }
    }

    /// Visit every entry; a shared handle holds its write lock meanwhile
    pub fn iterate<F>(&mut self, f: F) -> ParamsResult<()>
    where
        F: FnMut(&str, &mut ParamValue),
    {
        match self {
            ParamsHandle::Local(params) => {
                params.iterate(f);
                Ok(())
            }
            ParamsHandle::Shared(shared) => shared.iterate(f),
        }
    }
}

impl TypedParams for ParamsHandle {
    fn lookup<T, F>(&self, key: &str, f: F) -> ParamsResult<T>
    where
        F: FnOnce(&ParamValue) -> ParamsResult<T>,
    {
        match self {
            ParamsHandle::Local(params) => params.lookup(key, f),
            ParamsHandle::Shared(shared) => shared.lookup(key, f),
        }
    }
}
