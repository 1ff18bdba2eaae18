//! Error-suppressing accessors
//!
//! [`QuickParams`] borrows any facade and returns the type's zero value
//! instead of an error. This is lossy: a missing key, a value of the wrong
//! type, and a stored zero all read the same. Use the strict getters on
//! [`TypedParams`] whenever the difference matters.

use crate::params::TypedParams;

/// Zero-value-on-error view over a typed facade
#[derive(Debug)]
pub struct QuickParams<'a, P> {
    inner: &'a P,
}

impl<P> Clone for QuickParams<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for QuickParams<'_, P> {}

impl<'a, P: TypedParams> QuickParams<'a, P> {
    /// Wrap a facade
    pub fn new(inner: &'a P) -> Self {
        Self { inner }
    }

    /// [`TypedParams::get_as_string`], or `""`
    pub fn string(&self, key: &str) -> String {
        self.inner.get_as_string(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_bytes`], or an empty vector
    pub fn bytes(&self, key: &str) -> Vec<u8> {
        self.inner.get_as_bytes(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_int`], or `0`
    pub fn int(&self, key: &str) -> isize {
        self.inner.get_as_int(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_int8`], or `0`
    pub fn int8(&self, key: &str) -> i8 {
        self.inner.get_as_int8(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_int16`], or `0`
    pub fn int16(&self, key: &str) -> i16 {
        self.inner.get_as_int16(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_int32`], or `0`
    pub fn int32(&self, key: &str) -> i32 {
        self.inner.get_as_int32(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_int64`], or `0`
    pub fn int64(&self, key: &str) -> i64 {
        self.inner.get_as_int64(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_bool`], or `false`
    pub fn bool(&self, key: &str) -> bool {
        self.inner.get_as_bool(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_quoted_string`], or `""`
    pub fn quoted_string(&self, key: &str) -> String {
        self.inner.get_as_quoted_string(key).unwrap_or_default()
    }

    /// [`TypedParams::get_string_as_int`], or `0`
    pub fn string_as_int(&self, key: &str) -> i64 {
        self.inner.get_string_as_int(key).unwrap_or_default()
    }

    /// [`TypedParams::get_string_as_bool`], or `false`
    pub fn string_as_bool(&self, key: &str) -> bool {
        self.inner.get_string_as_bool(key).unwrap_or_default()
    }

    /// [`TypedParams::get_as_duration`], or a zero duration
    pub fn duration(&self, key: &str) -> chrono::Duration {
        self.inner
            .get_as_duration(key)
            .unwrap_or_else(|_| chrono::Duration::zero())
    }

    /// [`TypedParams::get_string_as_duration`], or a zero duration
    pub fn string_as_duration(&self, key: &str) -> chrono::Duration {
        self.inner
            .get_string_as_duration(key)
            .unwrap_or_else(|_| chrono::Duration::zero())
    }
}

#[cfg(test)]
mod tests {
    use crate::params::{Params, TypedParams};
    use chrono::Duration;

    #[test]
    fn test_quick_returns_values() {
        let mut params = Params::from_args(["--count=42", "--name='svc'", "--on=1", "--ttl=90s"]);
        params.add("bytes", vec![1u8, 2, 3]).add("level", 3i8).add("wait", Duration::seconds(4));

        let quick = params.quick();
        assert_eq!(quick.string_as_int("count"), 42);
        assert_eq!(quick.quoted_string("name"), "svc");
        assert_eq!(quick.string("name"), "'svc'");
        assert!(quick.string_as_bool("on"));
        assert_eq!(quick.string_as_duration("ttl"), Duration::seconds(90));
        assert_eq!(quick.bytes("bytes"), vec![1, 2, 3]);
        assert_eq!(quick.int8("level"), 3);
        assert_eq!(quick.duration("wait"), Duration::seconds(4));
    }

    #[test]
    fn test_quick_suppresses_errors_to_zero_values() {
        let params = Params::from_args(["--padded=0123456", "--word=maybe"]);
        let quick = params.quick();

        assert_eq!(quick.string_as_int("padded"), 0);
        assert!(!quick.string_as_bool("word"));
        assert_eq!(quick.string("missing"), "");
        assert!(quick.bytes("missing").is_empty());
        assert_eq!(quick.int("word"), 0);
        assert_eq!(quick.int16("missing"), 0);
        assert_eq!(quick.int32("missing"), 0);
        assert_eq!(quick.int64("missing"), 0);
        assert!(!quick.bool("word"));
        assert_eq!(quick.duration("word"), Duration::zero());
        assert_eq!(quick.string_as_duration("word"), Duration::zero());
    }
}
