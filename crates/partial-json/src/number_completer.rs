//! Completes a JSON number, detecting every dangling grammar state a
//! truncation can leave behind: a bare sign, a decimal point with no
//! fraction digit yet, or an exponent marker with no exponent digit yet.

use crate::error::CompletionError;
use crate::outcome::Outcome;
use crate::scanner::Scanner;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Consumed a leading `-`, no digit yet.
    Minus,
    /// Consumed the single digit `0` as the whole integer part. Terminal.
    Zero,
    /// Consumed one or more digits, the first non-zero. Terminal.
    IntDigits,
    /// Consumed `.` after an integer part already seen; no fraction digit
    /// yet.
    PointWithInt,
    /// Consumed `-` immediately followed by `.`, with no integer digit in
    /// between; no fraction digit yet. Only reachable via a leading `-`,
    /// since the dispatcher never routes a bare `.` here.
    PointNoInt,
    /// Consumed one or more fraction digits. Terminal.
    Frac,
    /// Consumed `e`/`E`, no sign or exponent digit yet.
    ExpMarker,
    /// Consumed an exponent sign, no exponent digit yet.
    ExpSign,
    /// Consumed one or more exponent digits. Terminal.
    Exp,
}

/// `scanner` must be positioned on the first scalar of a number: `-` or an
/// ASCII digit.
pub(crate) fn complete(scanner: &mut Scanner) -> Result<Outcome, CompletionError> {
    let mut minus_end: Option<usize> = None;

    let mut state = match scanner.peek() {
        Some('-') => {
            scanner.advance();
            minus_end = Some(scanner.pos());
            State::Minus
        }
        Some('0') => {
            scanner.advance();
            State::Zero
        }
        Some(c) if c.is_ascii_digit() => {
            scanner.advance();
            State::IntDigits
        }
        other => unreachable!("number completer invoked on a non-numeric start: {other:?}"),
    };

    loop {
        let Some(c) = scanner.peek() else {
            return Ok(resolve(state, scanner.pos(), minus_end));
        };

        let next = match (state, c) {
            (State::Minus, '0') => Some(State::Zero),
            (State::Minus, '1'..='9') => Some(State::IntDigits),
            (State::Minus, '.') => Some(State::PointNoInt),
            (State::Zero, '.') | (State::IntDigits, '.') => Some(State::PointWithInt),
            (State::IntDigits, '0'..='9') => Some(State::IntDigits),
            (State::PointWithInt, '0'..='9') | (State::PointNoInt, '0'..='9') => Some(State::Frac),
            (State::Frac, '0'..='9') => Some(State::Frac),
            (State::Zero, 'e' | 'E')
            | (State::IntDigits, 'e' | 'E')
            | (State::Frac, 'e' | 'E') => Some(State::ExpMarker),
            (State::ExpMarker, '+' | '-') => Some(State::ExpSign),
            (State::ExpMarker, '0'..='9') | (State::ExpSign, '0'..='9') => Some(State::Exp),
            (State::Exp, '0'..='9') => Some(State::Exp),
            _ => None,
        };

        match next {
            Some(next_state) => {
                scanner.advance();
                state = next_state;
            }
            None => return Ok(resolve(state, scanner.pos(), minus_end)),
        }
    }
}

fn resolve(state: State, pos: usize, minus_end: Option<usize>) -> Outcome {
    match state {
        State::Zero | State::IntDigits | State::Frac | State::Exp => Outcome::AlreadyComplete,
        State::Minus | State::PointWithInt | State::ExpMarker | State::ExpSign => {
            Outcome::NeedsSuffix {
                suffix: "0".to_string(),
                end_index: pos,
            }
        }
        State::PointNoInt => Outcome::NeedsSuffix {
            suffix: "0.0".to_string(),
            end_index: minus_end.expect("PointNoInt is only reachable after a leading '-'"),
        },
    }
}
