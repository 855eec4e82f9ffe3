//! Key/colon/value state machine for JSON objects.

use crate::dispatch;
use crate::end_of_value;
use crate::error::CompletionError;
use crate::options::CompleterOptions;
use crate::outcome::Outcome;
use crate::scanner::Scanner;
use crate::string_completer;

/// `scanner` must be positioned on the opening `{`. `depth` is this object's
/// own nesting depth; member values recurse at `depth + 1`.
pub(crate) fn complete(
    scanner: &mut Scanner,
    depth: usize,
    options: &CompleterOptions,
) -> Result<Outcome, CompletionError> {
    scanner.advance(); // '{'
    scanner.skip_whitespace();

    if scanner.peek() == Some('}') {
        scanner.advance();
        return Ok(Outcome::AlreadyComplete);
    }
    if scanner.is_eof() {
        return Ok(Outcome::NeedsSuffix {
            suffix: "}".to_string(),
            end_index: scanner.pos(),
        });
    }

    let mut last_valid_index = scanner.pos();

    loop {
        if scanner.peek() != Some('"') {
            return Ok(Outcome::NeedsSuffix {
                suffix: "}".to_string(),
                end_index: last_valid_index,
            });
        }

        let key_start = scanner.pos();
        match string_completer::complete(scanner)? {
            Outcome::NeedsSuffix { suffix, end_index } => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: format!("{suffix}: null}}"),
                    end_index,
                });
            }
            Outcome::AlreadyComplete => {
                scanner.set_pos(key_start);
                let end = end_of_value::locate(scanner, depth + 1, options)?;
                if end == key_start {
                    return Ok(Outcome::NeedsSuffix {
                        suffix: "}".to_string(),
                        end_index: last_valid_index,
                    });
                }
            }
        }
        last_valid_index = scanner.pos();

        scanner.skip_whitespace();
        if scanner.is_eof() || scanner.peek() != Some(':') {
            return Ok(Outcome::NeedsSuffix {
                suffix: ": null}".to_string(),
                end_index: last_valid_index,
            });
        }
        scanner.advance(); // ':'
        last_valid_index = scanner.pos();

        scanner.skip_whitespace();
        if scanner.is_eof() {
            return Ok(Outcome::NeedsSuffix {
                suffix: "null}".to_string(),
                end_index: last_valid_index,
            });
        }

        let value_start = scanner.pos();
        match dispatch::complete_value(scanner, depth + 1, options)? {
            Outcome::NeedsSuffix { suffix, end_index } => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: format!("{suffix}}}"),
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
            Some('}') => {
                scanner.advance();
                return Ok(Outcome::AlreadyComplete);
            }
            Some(',') => {
                scanner.advance();
                scanner.skip_whitespace();
                if scanner.is_eof() {
                    return Ok(Outcome::NeedsSuffix {
                        suffix: "}".to_string(),
                        end_index: last_valid_index,
                    });
                }
                if scanner.peek() == Some('}') {
                    scanner.advance();
                    return Ok(Outcome::AlreadyComplete);
                }
            }
            _ => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: "}".to_string(),
                    end_index: last_valid_index,
                });
            }
        }
    }
}
