//! In-memory parameter source
//!
//! Starts empty and only changes through `add`, `remove`, or an `iterate`
//! callback. Values keep whatever variant they were added with.

use super::traits::{ParamMap, ParamsSource};

/// Registered name of [`InternalSource`]
pub const SRC_NAME_INTERNAL: &str = "source.internal";

/// Plain in-memory key/value source
#[derive(Debug, Clone, Default)]
pub struct InternalSource {
    storage: ParamMap,
}

impl InternalSource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }
}

impl ParamsSource for InternalSource {
    fn name(&self) -> &str {
        SRC_NAME_INTERNAL
    }

    fn storage(&self) -> &ParamMap {
        &self.storage
    }

    fn storage_mut(&mut self) -> &mut ParamMap {
        &mut self.storage
    }
}
