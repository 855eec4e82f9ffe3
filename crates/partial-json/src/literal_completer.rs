//! Completes a bare-word literal (`true`, `false`, `null`, `Infinity`,
//! `-Infinity`, `NaN`) by matching it against its known spelling through a
//! bounded lookahead slice, the same one-shot-compare shape as
//! `jsonmodem`'s `ExpectedLiteralBuffer::step`.

use crate::error::CompletionError;
use crate::outcome::Outcome;
use crate::scanner::Scanner;

/// Matches `scanner`'s remaining input against `literal` via
/// [`Scanner::peek_str`], without stepping the cursor one `char` at a time.
///
/// - Full match: [`Outcome::AlreadyComplete`].
/// - Input exhausted partway through a match: [`Outcome::NeedsSuffix`] with
///   the unmatched tail of `literal` as the suffix.
/// - Mismatch before exhaustion: [`Outcome::AlreadyComplete`] — the
///   dispatcher only ever calls this once it has already confirmed the
///   first scalar matches, and the completer is not a validator; a
///   downstream mismatch is left for the decoder to reject.
pub(crate) fn complete(scanner: &mut Scanner, literal: &str) -> Result<Outcome, CompletionError> {
    let literal_len = literal.chars().count();
    let candidate = scanner.peek_str(literal_len);

    let matched_chars = literal
        .chars()
        .zip(candidate.chars())
        .take_while(|(expected, actual)| expected == actual)
        .count();
    let matched_bytes: usize = literal.chars().take(matched_chars).map(char::len_utf8).sum();
    scanner.set_pos(scanner.pos() + matched_bytes);

    if matched_chars == literal_len {
        return Ok(Outcome::AlreadyComplete);
    }

    if matched_chars == candidate.chars().count() {
        let suffix: String = literal.chars().skip(matched_chars).collect();
        return Ok(Outcome::NeedsSuffix {
            suffix,
            end_index: scanner.pos(),
        });
    }

    Ok(Outcome::AlreadyComplete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(input: &str, literal: &str) -> (Outcome, usize) {
        let mut scanner = Scanner::new(input);
        let outcome = complete(&mut scanner, literal).unwrap();
        (outcome, scanner.pos())
    }

    #[test]
    fn full_match_is_already_complete() {
        let (outcome, pos) = run("true", "true");
        assert_eq!(outcome, Outcome::AlreadyComplete);
        assert_eq!(pos, 4);
    }

    #[test]
    fn truncated_literal_needs_suffix() {
        let (outcome, _) = run("nu", "null");
        assert_eq!(
            outcome,
            Outcome::NeedsSuffix {
                suffix: "ll".to_string(),
                end_index: 2,
            }
        );
    }

    #[test]
    fn truncated_to_empty_prefix_needs_whole_literal() {
        let (outcome, _) = run("", "false");
        assert_eq!(
            outcome,
            Outcome::NeedsSuffix {
                suffix: "false".to_string(),
                end_index: 0,
            }
        );
    }

    #[test]
    fn mismatch_before_exhaustion_is_already_complete() {
        let (outcome, pos) = run("nowhere", "null");
        assert_eq!(outcome, Outcome::AlreadyComplete);
        assert_eq!(pos, 1);
    }
}
