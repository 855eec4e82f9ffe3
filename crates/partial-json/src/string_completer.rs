//! Completes a quoted JSON string, honouring backslash-escape pairing.

use crate::error::CompletionError;
use crate::outcome::Outcome;
use crate::scanner::Scanner;

/// `scanner` must be positioned on the opening `"`.
///
/// Walks forward tracking whether the previous scalar was an unconsumed
/// escaping backslash. Input ending mid-escape (a dangling `\`) is folded
/// into the same "needs a closing quote" outcome: appending `"` alone turns
/// a trailing `\` into the valid escape `\"`, which is exactly what is
/// wanted.
pub(crate) fn complete(scanner: &mut Scanner) -> Result<Outcome, CompletionError> {
    debug_assert_eq!(scanner.peek(), Some('"'));
    scanner.advance();

    let mut escaped = false;
    loop {
        match scanner.advance() {
            None => {
                return Ok(Outcome::NeedsSuffix {
                    suffix: "\"".to_string(),
                    end_index: scanner.pos(),
                });
            }
            Some(ch) => {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    return Ok(Outcome::AlreadyComplete);
                }
            }
        }
    }
}
