//! Locates the cursor immediately after a value already known to be
//! complete, without re-deriving a suffix for it.
//!
//! Array and object completers call this once a nested value has come back
//! `AlreadyComplete`, rather than trusting wherever the value's own
//! completer happened to leave the cursor. It re-probes with
//! [`dispatch::complete_value`] first (cheap: the depth and grammar
//! validation were already paid for once, but re-confirming keeps this
//! function correct regardless of how the leaf completers manage their own
//! cursors), then advances by a fast, kind-specific walk for strings,
//! containers, literals, and numbers. The numeric walk is deliberately
//! permissive (it accepts lexically dubious runs like `1-2`) because the
//! region has already passed through the number completer, which performed
//! the authoritative grammar check.

use crate::dispatch;
use crate::error::CompletionError;
use crate::options::CompleterOptions;
use crate::outcome::Outcome;
use crate::scanner::Scanner;

pub(crate) fn locate(
    scanner: &mut Scanner,
    depth: usize,
    options: &CompleterOptions,
) -> Result<usize, CompletionError> {
    let mut probe = *scanner;
    match dispatch::complete_value(&mut probe, depth, options)? {
        Outcome::NeedsSuffix { end_index, .. } => {
            scanner.set_pos(end_index);
            Ok(end_index)
        }
        Outcome::AlreadyComplete => {
            scanner.skip_whitespace();
            let end = match scanner.peek() {
                Some('"') => skip_string(scanner),
                Some('{') | Some('[') => skip_container(scanner),
                Some('t') => skip_fixed(scanner, "true"),
                Some('f') => skip_fixed(scanner, "false"),
                Some('n') => skip_fixed(scanner, "null"),
                Some('N') => skip_fixed(scanner, "NaN"),
                Some('-') if scanner.starts_with("-Infinity") => skip_fixed(scanner, "-Infinity"),
                Some('I') => skip_fixed(scanner, "Infinity"),
                _ => skip_number(scanner),
            };
            Ok(end)
        }
    }
}

fn skip_string(scanner: &mut Scanner) -> usize {
    scanner.advance(); // opening quote
    let mut escaped = false;
    while let Some(ch) = scanner.advance() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == '"' {
            break;
        }
    }
    scanner.pos()
}

fn skip_container(scanner: &mut Scanner) -> usize {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    while let Some(ch) = scanner.advance() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' | '[' => depth += 1,
            '}' | ']' => {
                depth -= 1;
                if depth == 0 {
                    break;
                }
            }
            _ => {}
        }
    }
    scanner.pos()
}

fn skip_fixed(scanner: &mut Scanner, literal: &str) -> usize {
    if scanner.starts_with(literal) {
        for _ in literal.chars() {
            scanner.advance();
        }
    }
    scanner.pos()
}

fn skip_number(scanner: &mut Scanner) -> usize {
    while let Some(ch) = scanner.peek() {
        if ch.is_ascii_digit() || matches!(ch, '.' | '-' | '+' | 'e' | 'E') {
            scanner.advance();
        } else {
            break;
        }
    }
    scanner.pos()
}
