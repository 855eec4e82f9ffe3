//! Classifies the next value and delegates to the appropriate completer.

use crate::array_completer;
use crate::error::CompletionError;
use crate::literal_completer;
use crate::number_completer;
use crate::object_completer;
use crate::options::{CompleterOptions, FloatPolicy};
use crate::outcome::Outcome;
use crate::scanner::Scanner;
use crate::string_completer;

/// `depth` is the nesting depth of the value about to be classified. Only
/// entering a nested array or object checks it against
/// [`CompleterOptions::maximum_depth`] — scalars never recurse further and
/// so never trip the guard themselves.
pub(crate) fn complete_value(
    scanner: &mut Scanner,
    depth: usize,
    options: &CompleterOptions,
) -> Result<Outcome, CompletionError> {
    scanner.skip_whitespace();

    match scanner.peek() {
        Some('{') => {
            check_depth(depth, options)?;
            object_completer::complete(scanner, depth, options)
        }
        Some('[') => {
            check_depth(depth, options)?;
            array_completer::complete(scanner, depth, options)
        }
        Some('"') => string_completer::complete(scanner),
        // Routed on the first two scalars alone so a truncated `-Infinity`
        // (e.g. `-Inf` at EOF) still reaches the literal completer instead
        // of falling through to the number completer, which would silently
        // resolve a bare `-` followed by a non-digit into `-0`.
        Some('-') if scanner.rest().chars().nth(1) == Some('I') => {
            match &options.non_conforming_float_policy {
                FloatPolicy::Accept { .. } => literal_completer::complete(scanner, "-Infinity"),
                FloatPolicy::Reject => Err(CompletionError::InvalidValue("-Infinity".to_string())),
            }
        }
        Some('-') => number_completer::complete(scanner),
        Some(c) if c.is_ascii_digit() => number_completer::complete(scanner),
        Some('t') => literal_completer::complete(scanner, "true"),
        Some('f') => literal_completer::complete(scanner, "false"),
        Some('n') => literal_completer::complete(scanner, "null"),
        Some('I') => match &options.non_conforming_float_policy {
            FloatPolicy::Accept { .. } => literal_completer::complete(scanner, "Infinity"),
            FloatPolicy::Reject => Err(CompletionError::InvalidValue("Infinity".to_string())),
        },
        Some('N') => match &options.non_conforming_float_policy {
            FloatPolicy::Accept { .. } => literal_completer::complete(scanner, "NaN"),
            FloatPolicy::Reject => Err(CompletionError::InvalidValue("NaN".to_string())),
        },
        // Any other scalar, or end-of-input after whitespace: nothing this
        // dispatcher recognises as a value start. Not a validator, so this
        // is reported as already complete rather than rejected.
        _ => Ok(Outcome::AlreadyComplete),
    }
}

fn check_depth(depth: usize, options: &CompleterOptions) -> Result<(), CompletionError> {
    if depth >= options.maximum_depth {
        Err(CompletionError::DepthLimitExceeded {
            depth,
            limit: options.maximum_depth,
        })
    } else {
        Ok(())
    }
}
