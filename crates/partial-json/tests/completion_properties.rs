//! Property tests for the universal invariants, using
//! `quickcheck::QuickCheck::new().tests(n)` with a CI-scaled test count.

use partial_json::{complete, completion, CompleterOptions};
use quickcheck::{Arbitrary, Gen, QuickCheck};
use serde_json::Value;

fn test_count() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// A JSON value generated to a bounded depth, plus a cut point expressed as
/// a fraction of its serialised length, used to produce realistic
/// truncated prefixes.
#[derive(Debug, Clone)]
struct Truncated {
    full: String,
    cut_fraction: u8,
}

fn gen_value(g: &mut Gen, depth: u32) -> Value {
    if depth == 0 {
        return Value::Null;
    }
    match u32::arbitrary(g) % 6 {
        0 => Value::Null,
        1 => Value::Bool(bool::arbitrary(g)),
        2 => Value::Number(serde_json::Number::from(i32::arbitrary(g) as i64)),
        3 => Value::String(String::arbitrary(g).chars().filter(|c| *c != '"').collect()),
        4 => {
            let len = usize::arbitrary(g) % 4;
            Value::Array((0..len).map(|_| gen_value(g, depth - 1)).collect())
        }
        _ => {
            let len = usize::arbitrary(g) % 4;
            let mut map = serde_json::Map::new();
            for i in 0..len {
                map.insert(format!("k{i}"), gen_value(g, depth - 1));
            }
            Value::Object(map)
        }
    }
}

impl Arbitrary for Truncated {
    fn arbitrary(g: &mut Gen) -> Self {
        let value = gen_value(g, 4);
        let full = serde_json::to_string(&value).unwrap();
        Truncated {
            full,
            cut_fraction: u8::arbitrary(g),
        }
    }
}

impl Truncated {
    fn prefix(&self) -> &str {
        let cut = (self.full.len() as u64 * self.cut_fraction as u64 / 256) as usize;
        let mut cut = cut.min(self.full.len());
        while !self.full.is_char_boundary(cut) {
            cut -= 1;
        }
        &self.full[..cut]
    }
}

fn prop_completion_is_valid_json(t: Truncated) -> bool {
    let prefix = t.prefix();
    match complete(prefix) {
        Ok(completed) => serde_json::from_str::<Value>(&completed).is_ok(),
        Err(_) => true,
    }
}

fn prop_completion_preserves_prefix(t: Truncated) -> bool {
    let prefix = t.prefix();
    match completion(prefix, 0) {
        Ok(None) => true,
        Ok(Some(c)) => c.end_index <= prefix.len() && prefix.is_char_boundary(c.end_index),
        Err(_) => true,
    }
}

fn prop_completion_is_idempotent(t: Truncated) -> bool {
    let prefix = t.prefix();
    match complete(prefix) {
        Ok(completed) => match complete(&completed) {
            Ok(twice) => twice == completed,
            Err(_) => false,
        },
        Err(_) => true,
    }
}

fn prop_already_complete_json_is_reported_as_such(t: Truncated) -> bool {
    match completion(&t.full, 0) {
        Ok(result) => result.is_none(),
        Err(_) => true,
    }
}

fn prop_depth_bound_is_never_exceeded(depth_limit: u8) -> bool {
    let depth_limit = (depth_limit as usize % 12) + 1;
    let input = "[".repeat(depth_limit + 5);
    let options = CompleterOptions {
        maximum_depth: depth_limit,
        ..CompleterOptions::default()
    };
    matches!(
        partial_json::complete_with(&input, &options),
        Err(partial_json::CompletionError::DepthLimitExceeded { limit, .. }) if limit == depth_limit
    )
}

#[test]
fn completion_output_is_valid_json() {
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop_completion_is_valid_json as fn(Truncated) -> bool);
}

#[test]
fn completion_preserves_the_original_prefix() {
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop_completion_preserves_prefix as fn(Truncated) -> bool);
}

#[test]
fn completion_is_idempotent() {
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop_completion_is_idempotent as fn(Truncated) -> bool);
}

#[test]
fn already_complete_json_needs_no_suffix() {
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop_already_complete_json_is_reported_as_such as fn(Truncated) -> bool);
}

#[test]
fn depth_bound_is_always_respected() {
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop_depth_bound_is_never_exceeded as fn(u8) -> bool);
}
