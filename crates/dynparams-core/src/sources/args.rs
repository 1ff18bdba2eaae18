//! Command-line argument parameter source
//!
//! Builds its map from a caller-supplied list of `--key=value` tokens. The
//! key may contain ASCII letters and hyphens (it must start with a letter);
//! the value is everything after the first `=` and must be non-empty.
//! Tokens in any other shape are skipped.
//!
//! # Example
//!
//! ```rust,ignore
//! use dynparams_core::sources::{ArgsSource, ParamsSource};
//!
//! let source = ArgsSource::new(["--mode=fast", "positional", "--retries=3"]);
//! assert_eq!(source.count(), 2);
//! ```

use super::traits::{ParamMap, ParamsSource};
use crate::error::{ParamsError, ParamsResult};
use crate::value::ParamValue;
use regex::Regex;
use std::sync::OnceLock;

/// Registered name of [`ArgsSource`]
pub const SRC_NAME_ARGS: &str = "source.args";

fn arg_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^--[A-Za-z][A-Za-z-]*=.+$").expect("argument pattern is a valid regex")
    })
}

/// Split one token into `(key, value)` if it has the accepted shape
fn parse_token(token: &str) -> Option<(&str, &str)> {
    if !arg_pattern().is_match(token) {
        return None;
    }
    let (key, value) = token.split_once('=')?;
    Some((key.strip_prefix("--")?, value))
}

/// Source populated from `--key=value` argument tokens
///
/// Parsed values are always strings. Later `add` calls may replace them with
/// values of any type.
#[derive(Debug, Clone, Default)]
pub struct ArgsSource {
    storage: ParamMap,
}

impl ArgsSource {
    /// Parse a list of raw tokens
    ///
    /// A key that appears more than once keeps its last value.
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut storage = ParamMap::new();
        let mut ignored = 0usize;

        for token in args {
            let token = token.as_ref();
            match parse_token(token) {
                Some((key, value)) => {
                    storage.insert(key.to_string(), ParamValue::String(value.to_string()));
                }
                None => {
                    ignored += 1;
                    tracing::trace!(token = token, "Skipping argument not in --key=value form");
                }
            }
        }

        tracing::debug!(
            source = SRC_NAME_ARGS,
            parsed = storage.len(),
            ignored = ignored,
            "Parsed argument source"
        );

        Self { storage }
    }

    /// Build from an untyped value holding a `Vec<String>` or
    /// `Vec<&'static str>`
    pub fn from_value(value: &ParamValue) -> ParamsResult<Self> {
        if let Some(args) = value.downcast_ref::<Vec<String>>() {
            return Ok(Self::new(args));
        }
        if let Some(args) = value.downcast_ref::<Vec<&'static str>>() {
            return Ok(Self::new(args));
        }
        tracing::warn!(
            found = value.type_name(),
            "Argument source input must be a sequence of strings"
        );
        Err(ParamsError::InvalidSourceInput(format!(
            "{} requires a sequence of strings, found {}",
            SRC_NAME_ARGS,
            value.type_name()
        )))
    }

    /// Parse the current process arguments, skipping the program name
    pub fn from_env() -> Self {
        Self::new(std::env::args().skip(1))
    }
}

impl ParamsSource for ArgsSource {
    fn name(&self) -> &str {
        SRC_NAME_ARGS
    }

    fn storage(&self) -> &ParamMap {
        &self.storage
    }

    fn storage_mut(&mut self) -> &mut ParamMap {
        &mut self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_args() -> Vec<&'static str> {
        vec![
            "--header-content-type='application/json'",
            "--header-origin='localhost'",
            "--header-content-length='456'",
            "--unrelated-content-length='456'",
        ]
    }

    #[test]
    fn test_parse_token_shapes() {
        assert_eq!(parse_token("--key=value"), Some(("key", "value")));
        assert_eq!(parse_token("--a-b=c=d"), Some(("a-b", "c=d")));
        assert_eq!(parse_token("--Key=x"), Some(("Key", "x")));
        assert_eq!(parse_token("--key="), None);
        assert_eq!(parse_token("-key=value"), None);
        assert_eq!(parse_token("--key value"), None);
        assert_eq!(parse_token("--ke_y=value"), None);
        assert_eq!(parse_token("--key1=value"), None);
        assert_eq!(parse_token("---key=value"), None);
        assert_eq!(parse_token("--=value"), None);
        assert_eq!(parse_token("positional"), None);
    }

    #[test]
    fn test_new_parses_matching_tokens() {
        let source = ArgsSource::new(header_args());
        assert_eq!(source.count(), 4);
        assert_eq!(
            source.get("header-origin"),
            Some(&ParamValue::String("'localhost'".into()))
        );
        assert_eq!(source.name(), "source.args");
    }

    #[test]
    fn test_ignores_other_tokens() {
        let source = ArgsSource::new(["/usr/bin/app", "--verbose", "--level=3", "-x=1"]);
        assert_eq!(source.count(), 1);
        assert!(source.has("level"));
        assert!(!source.has("verbose"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let source = ArgsSource::new(["--mode=slow", "--mode=fast"]);
        assert_eq!(source.get("mode").and_then(ParamValue::as_str), Some("fast"));
    }

    #[test]
    fn test_scan_counts() {
        let source = ArgsSource::new(header_args());
        let all_headers = source.scan(&Regex::new("^header.+$").unwrap());
        let content = source.scan(&Regex::new("^header-content.+$").unwrap());
        assert_eq!(all_headers.len(), 3);
        assert_eq!(content.len(), 2);
        assert!(content.contains_key("header-content-type"));
    }

    #[test]
    fn test_add_after_parse_overrides() {
        let mut source = ArgsSource::new(["--retries=3"]);
        source.add("retries", 5i32).add("extra", true);

        assert_eq!(source.get("retries"), Some(&ParamValue::Int32(5)));
        assert_eq!(source.count(), 2);
    }

    #[test]
    fn test_from_value() {
        let owned = ParamValue::opaque(vec!["--a=1".to_string(), "--b=2".to_string()]);
        assert_eq!(ArgsSource::from_value(&owned).unwrap().count(), 2);

        let borrowed = ParamValue::opaque(vec!["--a=1"]);
        assert_eq!(ArgsSource::from_value(&borrowed).unwrap().count(), 1);

        let err = ArgsSource::from_value(&ParamValue::from("--a=1")).unwrap_err();
        assert!(matches!(err, ParamsError::InvalidSourceInput(_)));
        assert!(ArgsSource::from_value(&ParamValue::opaque(vec![1u8])).is_err());
    }

    #[test]
    fn test_empty_input() {
        let source = ArgsSource::new(Vec::<String>::new());
        assert_eq!(source.count(), 0);
    }
}
