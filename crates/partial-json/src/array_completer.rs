//! Element/comma state machine for JSON arrays.

use crate::dispatch;
use crate::end_of_value;
use crate::error::CompletionError;
use crate::options::CompleterOptions;
use crate::outcome::Outcome;
use crate::scanner::Scanner;

/// `scanner` must be positioned on the opening `[`. `depth` is this array's
/// own nesting depth; elements recurse at `depth + 1`.
pub(crate) fn complete(
    scanner: &mut Scanner,
    depth: usize,
    options: &CompleterOptions,
) -> Result<Outcome, CompletionError> {
    scanner.advance(); // '['
    scanner.skip_whitespace();

    if scanner.peek() == Some(']') {
        scanner.advance();
        return Ok(Outcome::AlreadyComplete);
    }
    if scanner.is_eof() {
        return Ok(Outcome::NeedsSuffix {
            suffix: "]".to_string(),
            end_index: scanner.pos(),
        });
    }

    // The position right after the last syntactically complete element.
    // Never advanced merely for consuming a comma: a trailing comma with
    // nothing valid after it is dropped rather than preserved.
    let mut last_valid_index = scanner.pos();

    loop {
        let value_start = scanner.pos();
        match dispatch::complete_value(scanner, depth + 1, options)? {
            Outcome::NeedsSuffix { suffix, end_index } => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: format!("{suffix}]"),
                    end_index,
                });
            }
            Outcome::AlreadyComplete => {
                scanner.set_pos(value_start);
                end_of_value::locate(scanner, depth + 1, options)?;
            }
        }
        last_valid_index = scanner.pos();

        scanner.skip_whitespace();
        match scanner.peek() {
            Some(']') => {
                scanner.advance();
                return Ok(Outcome::AlreadyComplete);
            }
            Some(',') => {
                scanner.advance();
                scanner.skip_whitespace();
                if scanner.is_eof() {
                    return Ok(Outcome::NeedsSuffix {
                        suffix: "]".to_string(),
                        end_index: last_valid_index,
                    });
                }
                if scanner.peek() == Some(']') {
                    scanner.advance();
                    return Ok(Outcome::AlreadyComplete);
                }
            }
            _ => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: "]".to_string(),
                    end_index: last_valid_index,
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::completer::complete;

    #[test]
    fn trailing_comma_is_dropped() {
        assert_eq!(complete("[1, 2,").unwrap(), "[1, 2]");
    }

    #[test]
    fn nested_truncated_array_closes_both_levels() {
        assert_eq!(complete("[[1, 2], [3,").unwrap(), "[[1, 2], [3]]");
    }

    #[test]
    fn empty_array_is_already_complete() {
        assert_eq!(complete("[]").unwrap(), "[]");
    }
}
