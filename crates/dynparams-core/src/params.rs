//! Parameter facade
//!
//! [`Params`] wraps one source for its whole lifetime and puts typed,
//! error-reporting accessors in front of it. The accessors themselves live on
//! the [`TypedParams`] trait so the locked facade in [`crate::shared`] gets
//! the same set without repeating it.
//!
//! `Params` does no locking. Writes need `&mut self`, so sharing it across
//! threads for concurrent writes requires [`crate::SharedParams`] or a lock of
//! the caller's own.

use crate::coerce;
use crate::error::{ParamsError, ParamsResult};
use crate::quick::QuickParams;
use crate::sources::{new_source, ArgsSource, InternalSource, ParamMap, ParamSource, ParamsSource, SourceKind};
use crate::value::ParamValue;
use regex::Regex;
use std::any::Any;
use std::sync::Arc;

/// Typed read access over a parameter store
///
/// Implementors supply [`TypedParams::lookup`]; every getter is built on it.
/// A getter fails with [`ParamsError::NotFound`] when the key is absent and
/// otherwise returns whatever the matching [`crate::coerce`] function
/// returns.
pub trait TypedParams {
    /// Resolve `key` and apply `f` to the stored value
    fn lookup<T, F>(&self, key: &str, f: F) -> ParamsResult<T>
    where
        F: FnOnce(&ParamValue) -> ParamsResult<T>;

    /// Stored string; byte values are not decoded
    fn get_as_string(&self, key: &str) -> ParamsResult<String> {
        self.lookup(key, coerce::as_string)
    }

    /// Stored byte sequence
    fn get_as_bytes(&self, key: &str) -> ParamsResult<Vec<u8>> {
        self.lookup(key, coerce::as_bytes)
    }

    /// Stored platform-sized integer
    fn get_as_int(&self, key: &str) -> ParamsResult<isize> {
        self.lookup(key, coerce::as_int)
    }

    /// Stored 8-bit integer
    fn get_as_int8(&self, key: &str) -> ParamsResult<i8> {
        self.lookup(key, coerce::as_int8)
    }

    /// Stored 16-bit integer
    fn get_as_int16(&self, key: &str) -> ParamsResult<i16> {
        self.lookup(key, coerce::as_int16)
    }

    /// Stored 32-bit integer
    fn get_as_int32(&self, key: &str) -> ParamsResult<i32> {
        self.lookup(key, coerce::as_int32)
    }

    /// Stored 64-bit integer
    fn get_as_int64(&self, key: &str) -> ParamsResult<i64> {
        self.lookup(key, coerce::as_int64)
    }

    /// Stored boolean
    fn get_as_bool(&self, key: &str) -> ParamsResult<bool> {
        self.lookup(key, coerce::as_bool)
    }

    /// Stored duration; a duration string needs [`TypedParams::get_string_as_duration`]
    fn get_as_duration(&self, key: &str) -> ParamsResult<chrono::Duration> {
        self.lookup(key, coerce::as_duration)
    }

    /// Stored string with surrounding quote characters removed
    fn get_as_quoted_string(&self, key: &str) -> ParamsResult<String> {
        self.lookup(key, coerce::quoted_string)
    }

    /// Stored digit-only string parsed as an integer
    ///
    /// Zero-padded strings are rejected, and so is `"0"` on its own.
    fn get_string_as_int(&self, key: &str) -> ParamsResult<i64> {
        self.lookup(key, coerce::numeric_str_to_int)
    }

    /// Stored `"0"`, `"1"`, `"false"` or `"true"` as a boolean
    fn get_string_as_bool(&self, key: &str) -> ParamsResult<bool> {
        self.lookup(key, coerce::numeric_str_to_bool)
    }

    /// Stored string such as `"2h45m"` parsed as a duration
    fn get_string_as_duration(&self, key: &str) -> ParamsResult<chrono::Duration> {
        self.lookup(key, coerce::str_to_duration)
    }

    /// Shared handle to a caller-defined value of type `T`
    fn get_as_opaque<T>(&self, key: &str) -> ParamsResult<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.lookup(key, |value| match value {
            ParamValue::Opaque(inner) => Arc::clone(inner)
                .downcast::<T>()
                .map_err(|_| ParamsError::conversion(std::any::type_name::<T>(), "opaque")),
            other => Err(ParamsError::conversion(
                std::any::type_name::<T>(),
                other.type_name(),
            )),
        })
    }

    /// Error-suppressing view over these accessors
    fn quick(&self) -> QuickParams<'_, Self>
    where
        Self: Sized,
    {
        QuickParams::new(self)
    }
}

/// Unsynchronised parameter facade over a single source
#[derive(Debug, Clone)]
pub struct Params {
    source: ParamSource,
}

impl Params {
    /// Create a facade over a source selected by registered name
    ///
    /// `"source.args"` needs `args`; `"source.internal"` ignores it.
    pub fn new(source_name: &str, args: Option<Vec<String>>) -> ParamsResult<Self> {
        Ok(Self {
            source: new_source(source_name, args)?,
        })
    }

    /// Create a facade over an empty in-memory source
    pub fn internal() -> Self {
        Self::from_source(InternalSource::new())
    }

    /// Create a facade over parsed `--key=value` tokens
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_source(ArgsSource::new(args))
    }

    /// Wrap an already-built source
    pub fn from_source(source: impl Into<ParamSource>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Store a value, replacing any previous value under the same key
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> &mut Self {
        self.source.add(key, value);
        self
    }

    /// Raw stored value; useful for caller-defined compound types
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.source.get(key)
    }

    /// Raw stored value for in-place mutation
    pub fn get_mut(&mut self, key: &str) -> Option<&mut ParamValue> {
        self.source.get_mut(key)
    }

    /// Check whether a key is present
    pub fn has(&self, key: &str) -> bool {
        self.source.has(key)
    }

    /// Number of stored entries
    pub fn count(&self) -> usize {
        self.source.count()
    }

    /// Delete an entry, returning its value
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        self.source.remove(key)
    }

    /// Stored keys, in no particular order
    pub fn keys(&self) -> Vec<String> {
        self.source.keys()
    }

    /// Entries whose key matches a regular expression
    ///
    /// The pattern is compiled on every call; use [`Params::scan_regex`] to
    /// reuse a compiled one.
    pub fn scan(&self, pattern: &str) -> ParamsResult<ParamMap> {
        let regex = Regex::new(pattern)?;
        Ok(self.source.scan(&regex))
    }

    /// Entries whose key matches a compiled regular expression
    pub fn scan_regex(&self, pattern: &Regex) -> ParamMap {
        self.source.scan(pattern)
    }

    /// Visit every entry once, in unspecified order
    ///
    /// Values are passed by mutable reference; changes made by the callback
    /// stay in the store.
    pub fn iterate<F>(&mut self, mut f: F)
    where
        F: FnMut(&str, &mut ParamValue),
    {
        self.source.iterate(&mut f);
    }

    /// Kind of the wrapped source
    pub fn source_kind(&self) -> SourceKind {
        self.source.kind()
    }

    /// Borrow the wrapped source
    pub fn source(&self) -> &ParamSource {
        &self.source
    }

    /// Unwrap the facade, returning its source
    pub fn into_source(self) -> ParamSource {
        self.source
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::internal()
    }
}

impl TypedParams for Params {
    fn lookup<T, F>(&self, key: &str, f: F) -> ParamsResult<T>
    where
        F: FnOnce(&ParamValue) -> ParamsResult<T>,
    {
        let value = self.source.get(key).ok_or_else(|| ParamsError::not_found(key))?;
        f(value)
    }
}
