//! Parameter Sources
//!
//! Interchangeable key/value backends behind one storage contract.
//!
//! # Supported Sources
//!
//! - **Internal** (`source.internal`): an empty in-memory map
//! - **Args** (`source.args`): a map parsed from `--key=value` tokens
//!
//! # Architecture
//!
//! Both backends implement [`ParamsSource`]. [`ParamSource`] is the closed
//! set of backends a facade can hold, and [`new_source`] selects one by its
//! registered name.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynparams_core::sources::{new_source, ParamsSource};
//!
//! let mut source = new_source("source.args", Some(vec!["--port=8080".into()]))?;
//! source.add("debug", true);
//! assert_eq!(source.count(), 2);
//! ```

pub mod args;
pub mod factory;
pub mod internal;
pub mod traits;

pub use args::{ArgsSource, SRC_NAME_ARGS};
pub use factory::{new_source, ParamSource, SourceKind};
pub use internal::{InternalSource, SRC_NAME_INTERNAL};
pub use traits::{ParamMap, ParamsIteratorFn, ParamsSource};
