//! Source selection
//!
//! Maps a registered source name to a concrete backend. The set of backends
//! is closed: [`ParamSource`] has one variant per [`SourceKind`], and any
//! other name is rejected.

use super::args::{ArgsSource, SRC_NAME_ARGS};
use super::internal::{InternalSource, SRC_NAME_INTERNAL};
use super::traits::{ParamMap, ParamsSource};
use crate::error::{ParamsError, ParamsResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Registered source kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SourceKind {
    #[default]
    #[serde(rename = "source.internal")]
    Internal,
    #[serde(rename = "source.args")]
    Args,
}

impl SourceKind {
    /// Registered name
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Internal => SRC_NAME_INTERNAL,
            SourceKind::Args => SRC_NAME_ARGS,
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceKind {
    type Err = ParamsError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            SRC_NAME_INTERNAL => Ok(SourceKind::Internal),
            SRC_NAME_ARGS => Ok(SourceKind::Args),
            other => Err(ParamsError::UnknownSource(other.to_string())),
        }
    }
}

/// One of the registered backends
#[derive(Debug, Clone)]
pub enum ParamSource {
    Internal(InternalSource),
    Args(ArgsSource),
}

impl ParamSource {
    /// Build a backend of the given kind
    ///
    /// `SourceKind::Args` requires `args`; passing `None` is a programming
    /// error and is reported as [`ParamsError::MissingSourceArgs`].
    /// `SourceKind::Internal` ignores `args`.
    pub fn from_kind<I, S>(kind: SourceKind, args: Option<I>) -> ParamsResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let source = match kind {
            SourceKind::Internal => ParamSource::Internal(InternalSource::new()),
            SourceKind::Args => match args {
                Some(args) => ParamSource::Args(ArgsSource::new(args)),
                None => {
                    tracing::error!(
                        source = SRC_NAME_ARGS,
                        "Argument source constructed without an argument list"
                    );
                    return Err(ParamsError::MissingSourceArgs(SRC_NAME_ARGS));
                }
            },
        };

        tracing::debug!(source = kind.as_str(), entries = source.count(), "Created parameter source");
        Ok(source)
    }

    /// Kind of the wrapped backend
    pub fn kind(&self) -> SourceKind {
        match self {
            ParamSource::Internal(_) => SourceKind::Internal,
            ParamSource::Args(_) => SourceKind::Args,
        }
    }
}

impl From<InternalSource> for ParamSource {
    fn from(source: InternalSource) -> Self {
        ParamSource::Internal(source)
    }
}

impl From<ArgsSource> for ParamSource {
    fn from(source: ArgsSource) -> Self {
        ParamSource::Args(source)
    }
}

impl ParamsSource for ParamSource {
    fn name(&self) -> &str {
        match self {
            ParamSource::Internal(s) => s.name(),
            ParamSource::Args(s) => s.name(),
        }
    }

    fn storage(&self) -> &ParamMap {
        match self {
            ParamSource::Internal(s) => s.storage(),
            ParamSource::Args(s) => s.storage(),
        }
    }

    fn storage_mut(&mut self) -> &mut ParamMap {
        match self {
            ParamSource::Internal(s) => s.storage_mut(),
            ParamSource::Args(s) => s.storage_mut(),
        }
    }
}

/// Create a source by registered name
///
/// Unknown names fail with [`ParamsError::UnknownSource`] rather than
/// producing an unusable source.
pub fn new_source(name: &str, args: Option<Vec<String>>) -> ParamsResult<ParamSource> {
    let kind = name.parse::<SourceKind>().map_err(|e| {
        tracing::warn!(source = name, "Requested unknown parameter source");
        e
    })?;
    ParamSource::from_kind(kind, args)
}
