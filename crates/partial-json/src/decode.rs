//! The decoder façade: feeds completed text to a user-chosen
//! `serde::de::DeserializeOwned` type via `serde_json`, treating the
//! decoder itself as a black box.

use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::completer;
use crate::error::CompletionError;
use crate::options::{CompleterOptions, FloatPolicy};

/// A value decoded through the façade, along with whether the input needed
/// completion first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded<T> {
    pub value: T,
    /// `true` if `bytes` decoded as-is, with no completion necessary.
    /// `false` if completion was required before decoding succeeded.
    pub was_complete: bool,
}

/// Errors the façade can raise, layering UTF-8 and decoder failures on top
/// of [`CompletionError`].
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("input is not valid UTF-8")]
    InvalidUtf8Data(#[source] std::str::Utf8Error),

    #[error(transparent)]
    Completion(#[from] CompletionError),

    #[error("decoding failed after completion")]
    DecodingFailed(#[source] serde_json::Error),

    #[error("error reading from the underlying byte source")]
    Io(#[source] std::io::Error),
}

/// Decodes `bytes` as `T`, completing it first if a direct decode fails.
pub fn decode_bytes<T: DeserializeOwned>(
    bytes: &[u8],
    options: &CompleterOptions,
) -> Result<Decoded<T>, DecodeError> {
    if let Ok(value) = serde_json::from_slice::<T>(bytes) {
        #[cfg(feature = "logging")]
        tracing::trace!(was_complete = true, "decoded without completion");
        return Ok(Decoded {
            value,
            was_complete: true,
        });
    }

    let text = std::str::from_utf8(bytes).map_err(DecodeError::InvalidUtf8Data)?;
    let completed = completer::complete_with(text, options)?;
    let completed = substitute_non_conforming_floats(&completed, &options.non_conforming_float_policy);

    match serde_json::from_str::<T>(&completed) {
        Ok(value) => {
            #[cfg(feature = "logging")]
            tracing::trace!(was_complete = false, "decoded after completion");
            Ok(Decoded {
                value,
                was_complete: false,
            })
        }
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::warn!(error = %err, "decoding failed even after completion");
            Err(DecodeError::DecodingFailed(err))
        }
    }
}

/// Decodes `text` as `T`, completing it first if a direct decode fails.
pub fn decode_str<T: DeserializeOwned>(
    text: &str,
    options: &CompleterOptions,
) -> Result<Decoded<T>, DecodeError> {
    decode_bytes(text.as_bytes(), options)
}

/// `serde_json` has no concept of the bare identifiers `Infinity`,
/// `-Infinity`, and `NaN`; under [`FloatPolicy::Accept`] the completion
/// engine still recognises and completes them (using those exact
/// spellings), so this pass rewrites them — outside of string literals —
/// into whatever tokens the caller configured before the completed text is
/// handed to `serde_json`.
pub(crate) fn substitute_non_conforming_floats(text: &str, policy: &FloatPolicy) -> String {
    let FloatPolicy::Accept {
        pos_inf_token,
        neg_inf_token,
        nan_token,
    } = policy
    else {
        return text.to_string();
    };

    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut escaped = false;
    let mut rest = text;

    'outer: while !rest.is_empty() {
        if in_string {
            let ch = rest.chars().next().unwrap();
            out.push(ch);
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            rest = &rest[ch.len_utf8()..];
            continue;
        }

        if rest.starts_with('"') {
            in_string = true;
            out.push('"');
            rest = &rest[1..];
            continue;
        }

        for (literal, token) in [
            ("-Infinity", neg_inf_token.as_str()),
            ("Infinity", pos_inf_token.as_str()),
            ("NaN", nan_token.as_str()),
        ] {
            if let Some(tail) = rest.strip_prefix(literal) {
                let boundary_ok = tail.chars().next().is_none_or(|c| !c.is_alphanumeric());
                if boundary_ok {
                    out.push_str(token);
                    rest = tail;
                    continue 'outer;
                }
            }
        }

        let ch = rest.chars().next().unwrap();
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn already_complete_input_is_reported_as_such() {
        let decoded: Decoded<Point> =
            decode_str(r#"{"x": 1, "y": 2}"#, &CompleterOptions::default()).unwrap();
        assert_eq!(decoded.value, Point { x: 1, y: 2 });
        assert!(decoded.was_complete);
    }

    #[test]
    fn truncated_input_is_completed_then_decoded() {
        let decoded: Decoded<Point> =
            decode_str(r#"{"x": 1, "y": 2"#, &CompleterOptions::default()).unwrap();
        assert_eq!(decoded.value, Point { x: 1, y: 2 });
        assert!(!decoded.was_complete);
    }

    #[test]
    fn invalid_utf8_is_reported() {
        let bytes: &[u8] = &[b'"', 0xff, b'"'];
        let err = decode_bytes::<String>(bytes, &CompleterOptions::default()).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidUtf8Data(_)));
    }

    #[test]
    fn accept_policy_substitutes_non_conforming_floats() {
        let policy = FloatPolicy::Accept {
            pos_inf_token: "1e999".to_string(),
            neg_inf_token: "-1e999".to_string(),
            nan_token: "null".to_string(),
        };
        let rewritten = substitute_non_conforming_floats(r#"{"a": Infinity, "b": "Infinity"}"#, &policy);
        assert_eq!(rewritten, r#"{"a": 1e999, "b": "Infinity"}"#);
    }
}
