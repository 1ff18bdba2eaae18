//! Stored parameter values
//!
//! A [`ParamValue`] is what a source keeps under each key. Values are stored
//! exactly as supplied; nothing is normalised at insert time, so coercion in
//! [`crate::coerce`] always sees the variant the caller chose.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A value held by a parameter source
///
/// Scalars get a dedicated variant each so the coercion engine can match
/// exhaustively. Anything else goes in `Opaque` and is only reachable through
/// [`ParamValue::downcast_ref`] or the raw `get` path.
///
/// Converting a [`std::time::Duration`] is lossy at the top end: spans longer
/// than `chrono::Duration::MAX` (about 292 billion years) are stored as
/// `chrono::Duration::MAX`. Use [`chrono::Duration::from_std`] first when an
/// out-of-range span must be rejected instead.
#[derive(Clone)]
pub enum ParamValue {
    String(String),
    Bytes(Vec<u8>),
    /// Platform-sized integer
    Int(isize),
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Bool(bool),
    /// Signed duration; negative spans are legal. Saturates when built from
    /// an out-of-range `std::time::Duration`
    Duration(chrono::Duration),
    /// Caller-defined compound value
    Opaque(Arc<dyn Any + Send + Sync>),
}

impl ParamValue {
    /// Wrap an arbitrary caller type
    pub fn opaque<T: Any + Send + Sync>(value: T) -> Self {
        ParamValue::Opaque(Arc::new(value))
    }

    /// Stable lowercase name of the stored variant
    pub fn type_name(&self) -> &'static str {
        match self {
            ParamValue::String(_) => "string",
            ParamValue::Bytes(_) => "bytes",
            ParamValue::Int(_) => "int",
            ParamValue::Int8(_) => "int8",
            ParamValue::Int16(_) => "int16",
            ParamValue::Int32(_) => "int32",
            ParamValue::Int64(_) => "int64",
            ParamValue::Bool(_) => "bool",
            ParamValue::Duration(_) => "duration",
            ParamValue::Opaque(_) => "opaque",
        }
    }

    /// Borrow the string payload, if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ParamValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow a caller-defined value back out of an `Opaque`
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            ParamValue::Opaque(inner) => inner.downcast_ref::<T>(),
            _ => None,
        }
    }

    /// Check if this holds a caller-defined value
    pub fn is_opaque(&self) -> bool {
        matches!(self, ParamValue::Opaque(_))
    }
}

impl fmt::Debug for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::String(v) => f.debug_tuple("String").field(v).finish(),
            ParamValue::Bytes(v) => f.debug_tuple("Bytes").field(v).finish(),
            ParamValue::Int(v) => f.debug_tuple("Int").field(v).finish(),
            ParamValue::Int8(v) => f.debug_tuple("Int8").field(v).finish(),
            ParamValue::Int16(v) => f.debug_tuple("Int16").field(v).finish(),
            ParamValue::Int32(v) => f.debug_tuple("Int32").field(v).finish(),
            ParamValue::Int64(v) => f.debug_tuple("Int64").field(v).finish(),
            ParamValue::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
            ParamValue::Duration(v) => f.debug_tuple("Duration").field(v).finish(),
            ParamValue::Opaque(_) => f.write_str("Opaque(..)"),
        }
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ParamValue::String(a), ParamValue::String(b)) => a == b,
            (ParamValue::Bytes(a), ParamValue::Bytes(b)) => a == b,
            (ParamValue::Int(a), ParamValue::Int(b)) => a == b,
            (ParamValue::Int8(a), ParamValue::Int8(b)) => a == b,
            (ParamValue::Int16(a), ParamValue::Int16(b)) => a == b,
            (ParamValue::Int32(a), ParamValue::Int32(b)) => a == b,
            (ParamValue::Int64(a), ParamValue::Int64(b)) => a == b,
            (ParamValue::Bool(a), ParamValue::Bool(b)) => a == b,
            (ParamValue::Duration(a), ParamValue::Duration(b)) => a == b,
            // Opaque values have no equality of their own
            (ParamValue::Opaque(a), ParamValue::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::$variant(value)
                }
            }
        )*
    };
}

impl_from_scalar! {
    String => String,
    Vec<u8> => Bytes,
    isize => Int,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    bool => Bool,
    chrono::Duration => Duration,
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::String(value.clone())
    }
}

impl From<&[u8]> for ParamValue {
    fn from(value: &[u8]) -> Self {
        ParamValue::Bytes(value.to_vec())
    }
}

impl From<std::time::Duration> for ParamValue {
    /// Spans beyond chrono's range saturate at `chrono::Duration::MAX`
    fn from(value: std::time::Duration) -> Self {
        ParamValue::Duration(chrono::Duration::from_std(value).unwrap_or(chrono::Duration::MAX))
    }
}
