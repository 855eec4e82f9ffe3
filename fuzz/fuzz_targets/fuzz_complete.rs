#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use partial_json::{complete, CompleterOptions};
use serde_json::{Map, Value};

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => return Err(arbitrary::Error::IncorrectFormat),
        };
        Ok(ArbitraryValue(value))
    }
}

/// Split a UTF-8 `&str` into boundary-safe chunks, truncating the final one
/// to simulate a stream cut off mid-value.
fn truncate_at_safe_boundary(serialized: &str, cut_seed: u64) -> &str {
    if serialized.is_empty() {
        return serialized;
    }
    let mut cut = (cut_seed as usize) % serialized.len();
    while cut < serialized.len() && !serialized.is_char_boundary(cut) {
        cut += 1;
    }
    &serialized[..cut]
}

fn run(data: &[u8]) {
    if data.len() < 8 {
        return;
    }
    let cut_seed = u64::from_le_bytes(data[..8].try_into().unwrap());
    let rest = &data[8..];

    let mut unstructured = arbitrary::Unstructured::new(rest);
    let Ok(value) = ArbitraryValue::arbitrary(&mut unstructured) else {
        return;
    };
    let Ok(serialized) = serde_json::to_string(&value.0) else {
        return;
    };

    let prefix = truncate_at_safe_boundary(&serialized, cut_seed);

    let Ok(completed) = complete(prefix) else {
        return;
    };

    // Anything the engine claims to have completed must parse cleanly under
    // the decoder it was built for.
    assert!(
        serde_json::from_str::<Value>(&completed).is_ok(),
        "completion of {prefix:?} produced invalid JSON: {completed:?}"
    );

    // Completing an already-complete document is a no-op, and never raises.
    let _ = complete(&completed);

    let _ = partial_json::complete_with(
        prefix,
        &CompleterOptions {
            maximum_depth: 8,
            ..CompleterOptions::default()
        },
    );
}

fuzz_target!(|data: &[u8]| run(data));
