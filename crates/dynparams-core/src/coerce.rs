//! Value coercion engine
//!
//! Pure conversions from a stored [`ParamValue`] to the scalar a caller asked
//! for. Two families exist:
//!
//! - **Direct** (`as_*`): succeed only when the stored variant is exactly the
//!   target type. No widening, narrowing, or string parsing.
//! - **From string** (`numeric_str_to_*`, `quoted_string`, `str_to_duration`):
//!   require a stored string, then apply a fixed text rule.
//!
//! Every function here is total; failures come back as [`ParamsError`].

use crate::duration::parse_duration;
use crate::error::{ParamsError, ParamsResult};
use crate::value::ParamValue;

macro_rules! direct_coercion {
    ($(#[$doc:meta])* $name:ident, $variant:ident, $ty:ty, $label:literal) => {
        $(#[$doc])*
        pub fn $name(value: &ParamValue) -> ParamsResult<$ty> {
            match value {
                ParamValue::$variant(v) => Ok(v.clone()),
                other => Err(ParamsError::conversion($label, other.type_name())),
            }
        }
    };
}

direct_coercion!(
    /// Stored string, unchanged
    as_string, String, String, "string"
);
direct_coercion!(as_bytes, Bytes, Vec<u8>, "bytes");
direct_coercion!(as_int, Int, isize, "int");
direct_coercion!(as_int8, Int8, i8, "int8");
direct_coercion!(as_int16, Int16, i16, "int16");
direct_coercion!(as_int32, Int32, i32, "int32");
direct_coercion!(as_int64, Int64, i64, "int64");
direct_coercion!(as_bool, Bool, bool, "bool");
direct_coercion!(
    /// Stored duration; a string is not parsed here, see [`str_to_duration`]
    as_duration, Duration, chrono::Duration, "duration"
);

fn stored_str(value: &ParamValue) -> ParamsResult<&str> {
    value
        .as_str()
        .ok_or_else(|| ParamsError::conversion("string", value.type_name()))
}

/// Parse a digit-only string as a base-10 integer
///
/// Any string beginning with `'0'` is rejected with
/// [`ParamsError::LeadingZero`], and that includes `"0"` itself. Callers that
/// need to accept a literal zero must check for it before calling.
pub fn numeric_str_to_int(value: &ParamValue) -> ParamsResult<i64> {
    let s = stored_str(value)?;
    if s.starts_with('0') {
        return Err(ParamsError::LeadingZero(s.to_string()));
    }
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParamsError::conversion("numeric string", "string"));
    }
    Ok(s.parse::<i64>()?)
}

/// Map `"0"`/`"false"` to false and `"1"`/`"true"` to true
pub fn numeric_str_to_bool(value: &ParamValue) -> ParamsResult<bool> {
    match stored_str(value)? {
        "0" | "false" => Ok(false),
        "1" | "true" => Ok(true),
        _ => Err(ParamsError::conversion("boolean string", "string")),
    }
}

/// Strip surrounding `'` and `"` characters from a stored string
///
/// Each end is trimmed on its own, so `'abc"` becomes `abc`. Interior quotes
/// are kept.
pub fn quoted_string(value: &ParamValue) -> ParamsResult<String> {
    let s = stored_str(value)?;
    Ok(s.trim_matches(|c| c == '\'' || c == '"').to_string())
}

/// Parse a stored string such as `"2h45m"` into a duration
pub fn str_to_duration(value: &ParamValue) -> ParamsResult<chrono::Duration> {
    let s = stored_str(value)?;
    parse_duration(s).map_err(|_| ParamsError::conversion("duration string", "string"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn s(v: &str) -> ParamValue {
        ParamValue::from(v)
    }

    #[test]
    fn test_direct_coercions_accept_exact_variant() {
        assert_eq!(as_string(&s("abc")).unwrap(), "abc");
        assert_eq!(as_bytes(&ParamValue::from(vec![1u8, 2])).unwrap(), vec![1, 2]);
        assert_eq!(as_int(&ParamValue::from(55isize)).unwrap(), 55);
        assert_eq!(as_int8(&ParamValue::from(-8i8)).unwrap(), -8);
        assert_eq!(as_int16(&ParamValue::from(16i16)).unwrap(), 16);
        assert_eq!(as_int32(&ParamValue::from(32i32)).unwrap(), 32);
        assert_eq!(as_int64(&ParamValue::from(64i64)).unwrap(), 64);
        assert!(as_bool(&ParamValue::from(true)).unwrap());
        assert_eq!(
            as_duration(&ParamValue::from(Duration::seconds(3))).unwrap(),
            Duration::seconds(3)
        );
    }

    #[test]
    fn test_direct_coercions_never_widen_or_parse() {
        assert!(matches!(
            as_int64(&ParamValue::from(1i32)),
            Err(ParamsError::ConversionFailed { expected: "int64", found: "int32" })
        ));
        assert!(as_int(&ParamValue::from(1i64)).is_err());
        assert!(as_int32(&s("12")).is_err());
        assert!(as_bool(&s("true")).is_err());
        assert!(as_duration(&s("5s")).is_err());
        assert!(as_string(&ParamValue::from(vec![b'a'])).is_err());
        assert!(as_bytes(&s("a")).is_err());
        assert!(as_string(&ParamValue::opaque(String::from("hidden"))).is_err());
    }

    #[test]
    fn test_numeric_str_to_int() {
        assert_eq!(numeric_str_to_int(&s("123456")).unwrap(), 123456);
        assert!(matches!(
            numeric_str_to_int(&s("0123456")),
            Err(ParamsError::LeadingZero(_))
        ));
        assert!(matches!(numeric_str_to_int(&s("0")), Err(ParamsError::LeadingZero(_))));
        assert!(matches!(
            numeric_str_to_int(&s("12a")),
            Err(ParamsError::ConversionFailed { .. })
        ));
        assert!(matches!(
            numeric_str_to_int(&s("-12")),
            Err(ParamsError::ConversionFailed { .. })
        ));
        assert!(matches!(
            numeric_str_to_int(&s("")),
            Err(ParamsError::ConversionFailed { .. })
        ));
        assert!(matches!(
            numeric_str_to_int(&s("99999999999999999999")),
            Err(ParamsError::ParseInt(_))
        ));
        assert!(matches!(
            numeric_str_to_int(&ParamValue::from(12i64)),
            Err(ParamsError::ConversionFailed { expected: "string", found: "int64" })
        ));
    }

    #[test]
    fn test_numeric_str_to_bool() {
        assert!(numeric_str_to_bool(&s("true")).unwrap());
        assert!(numeric_str_to_bool(&s("1")).unwrap());
        assert!(!numeric_str_to_bool(&s("false")).unwrap());
        assert!(!numeric_str_to_bool(&s("0")).unwrap());
        for bad in ["TRUE", "yes", "", " 1", "2"] {
            assert!(numeric_str_to_bool(&s(bad)).unwrap_err().is_conversion());
        }
        assert!(numeric_str_to_bool(&ParamValue::from(true)).is_err());
    }

    #[test]
    fn test_quoted_string() {
        assert_eq!(quoted_string(&s("'someValue'")).unwrap(), "someValue");
        assert_eq!(quoted_string(&s("\"someValue\"")).unwrap(), "someValue");
        assert_eq!(quoted_string(&s("'mixed\"")).unwrap(), "mixed");
        assert_eq!(quoted_string(&s("plain")).unwrap(), "plain");
        assert_eq!(quoted_string(&s("'it's'")).unwrap(), "it's");
        assert_eq!(quoted_string(&s("''")).unwrap(), "");
        assert!(quoted_string(&ParamValue::from(1i8)).is_err());
    }

    #[test]
    fn test_str_to_duration() {
        assert_eq!(str_to_duration(&s("5s")).unwrap(), Duration::seconds(5));
        assert_eq!(
            str_to_duration(&s("2h45m")).unwrap(),
            Duration::minutes(165)
        );
        assert!(str_to_duration(&s("five seconds")).unwrap_err().is_conversion());
        assert!(str_to_duration(&ParamValue::from(Duration::seconds(5))).is_err());
    }
}
