//! Typed, pluggable key/value parameter access
//!
//! Callers store values under string keys in one of several interchangeable
//! sources and read them back through accessors that coerce to a requested
//! type or fail explicitly. This crate is an access layer; it does not parse
//! configuration files.
//!
//! # Layers
//!
//! - [`value`]: the [`ParamValue`] sum type every source stores
//! - [`coerce`]: strict conversions from a stored value to a scalar
//! - [`sources`]: the in-memory and `--key=value` argument backends
//! - [`Params`] / [`SharedParams`]: facades exposing typed getters through
//!   [`TypedParams`], the second one guarded by a read/write lock
//! - [`QuickParams`]: zero-value-on-error wrapper over either facade
//! - [`ParamsConfig`]: serde-friendly construction settings
//!
//! # Example
//!
//! ```rust,ignore
//! use dynparams_core::{Params, TypedParams};
//!
//! let mut params = Params::new("source.args", Some(vec![
//!     "--retries=3".to_string(),
//!     "--timeout=1m30s".to_string(),
//! ]))?;
//! params.add("verbose", true);
//!
//! let retries = params.get_string_as_int("retries")?;
//! let timeout = params.get_string_as_duration("timeout")?;
//! let verbose = params.get_as_bool("verbose")?;
//! ```

pub mod coerce;
pub mod config;
pub mod duration;
pub mod error;
pub mod params;
pub mod quick;
pub mod shared;
pub mod sources;
pub mod value;

pub use config::{ParamsConfig, ParamsHandle};
pub use duration::{parse_duration, DurationParseError};
pub use error::{ParamsError, ParamsResult};
pub use params::{Params, TypedParams};
pub use quick::QuickParams;
pub use shared::SharedParams;
pub use sources::{
    new_source, ArgsSource, InternalSource, ParamMap, ParamSource, ParamsSource, SourceKind,
    SRC_NAME_ARGS, SRC_NAME_INTERNAL,
};
pub use value::ParamValue;
