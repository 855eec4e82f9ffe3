//! The public completion API.

use crate::dispatch;
use crate::error::CompletionError;
use crate::options::CompleterOptions;
use crate::outcome::{Completion, Outcome};
use crate::scanner::Scanner;

/// Completes `text` into syntactically valid JSON using
/// [`CompleterOptions::default`].
///
/// Returns `text` unchanged if it is already a complete JSON document from
/// its start.
pub fn complete(text: &str) -> Result<String, CompletionError> {
    complete_with(text, &CompleterOptions::default())
}

/// Completes `text` into syntactically valid JSON.
///
/// The output always starts with `text[..end_index]` for some
/// `end_index <= text.len()`: bytes already present are never edited, only
/// a suffix is appended, and a trailing byte run that cannot be part of any
/// valid completion (a dangling comma, stray whitespace) is dropped.
pub fn complete_with(text: &str, options: &CompleterOptions) -> Result<String, CompletionError> {
    #[cfg(feature = "logging")]
    let _span = tracing::debug_span!(
        "complete",
        input_len = text.len(),
        maximum_depth = options.maximum_depth
    )
    .entered();

    match completion_with(text, 0, options)? {
        None => Ok(text.to_string()),
        Some(completion) => {
            let mut out = String::with_capacity(completion.end_index + completion.suffix.len());
            out.push_str(&text[..completion.end_index]);
            out.push_str(&completion.suffix);
            Ok(out)
        }
    }
}

/// Checks whether the JSON value starting at the scalar-boundary cursor
/// `from` is already complete, using [`CompleterOptions::default`].
pub fn completion(text: &str, from: usize) -> Result<Option<Completion>, CompletionError> {
    completion_with(text, from, &CompleterOptions::default())
}

/// Checks whether the JSON value starting at the scalar-boundary cursor
/// `from` is already complete.
///
/// Returns `None` if it is; otherwise `Some(Completion)` describing the
/// suffix to append and where to append it.
pub fn completion_with(
    text: &str,
    from: usize,
    options: &CompleterOptions,
) -> Result<Option<Completion>, CompletionError> {
    let mut scanner = Scanner::at(text, from);
    match dispatch::complete_value(&mut scanner, 0, options)? {
        Outcome::AlreadyComplete => Ok(None),
        Outcome::NeedsSuffix { suffix, end_index } => Ok(Some(Completion { suffix, end_index })),
    }
}
