//! Integration tests for the decode façade against a realistic
//! `Deserialize` target.

use partial_json::{decode_str, CompleterOptions, DecodeError, FloatPolicy};
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Profile {
    name: String,
    tags: Vec<String>,
    age: Option<u32>,
}

const FULL_PROFILE: &str = r#"{"name": "Ada", "tags": ["math", "computing"], "age": 36}"#;

#[test]
fn decodes_a_complete_document_without_completion() {
    let decoded: partial_json::Decoded<Profile> =
        decode_str(FULL_PROFILE, &CompleterOptions::default()).unwrap();
    assert!(decoded.was_complete);
    assert_eq!(decoded.value.name, "Ada");
    assert_eq!(decoded.value.tags, vec!["math", "computing"]);
    assert_eq!(decoded.value.age, Some(36));
}

#[test]
fn decodes_a_truncated_document_via_completion() {
    let truncated = &FULL_PROFILE[..FULL_PROFILE.len() - 10];
    let decoded: partial_json::Decoded<Profile> =
        decode_str(truncated, &CompleterOptions::default()).unwrap();
    assert!(!decoded.was_complete);
    assert_eq!(decoded.value.name, "Ada");
}

#[test]
fn missing_required_field_fails_after_completion() {
    let input = r#"{"tags": ["x"]"#;
    let err = decode_str::<Profile>(input, &CompleterOptions::default()).unwrap_err();
    assert!(matches!(err, DecodeError::DecodingFailed(_)));
}

#[test]
fn invalid_utf8_bytes_are_reported() {
    let bytes: &[u8] = &[b'{', b'"', 0xff, b'"', b'}'];
    let err =
        partial_json::decode_bytes::<serde_json::Value>(bytes, &CompleterOptions::default())
            .unwrap_err();
    assert!(matches!(err, DecodeError::InvalidUtf8Data(_)));
}

#[test]
fn accept_policy_lets_truncated_non_conforming_floats_decode() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        value: f64,
    }

    let options = CompleterOptions {
        non_conforming_float_policy: FloatPolicy::Accept {
            pos_inf_token: "1.7976931348623157e308".to_string(),
            neg_inf_token: "-1.7976931348623157e308".to_string(),
            nan_token: "0".to_string(),
        },
        ..CompleterOptions::default()
    };

    let decoded: partial_json::Decoded<Reading> =
        decode_str(r#"{"value": Infin"#, &options).unwrap();
    assert!(!decoded.was_complete);
    assert_eq!(decoded.value.value, 1.797_693_134_862_315_7e308);
}

#[test]
fn accept_policy_lets_truncated_negative_infinity_decode() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        value: f64,
    }

    let options = CompleterOptions {
        non_conforming_float_policy: FloatPolicy::Accept {
            pos_inf_token: "1.7976931348623157e308".to_string(),
            neg_inf_token: "-1.7976931348623157e308".to_string(),
            nan_token: "0".to_string(),
        },
        ..CompleterOptions::default()
    };

    let decoded: partial_json::Decoded<Reading> =
        decode_str(r#"{"value": -Inf"#, &options).unwrap();
    assert!(!decoded.was_complete);
    assert_eq!(decoded.value.value, -1.797_693_134_862_315_7e308);
}
