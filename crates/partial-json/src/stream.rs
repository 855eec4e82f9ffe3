//! A streaming adaptor that repeatedly decodes a growing buffer, emitting
//! newly-decoded values as bytes arrive from a pull-based byte source.

use std::io::{Bytes, Read};

use serde::de::DeserializeOwned;
use serde_json::error::Category;

use crate::decode::{self, DecodeError};
use crate::options::CompleterOptions;

/// One value observed while streaming, and whether the buffer it came from
/// was itself a complete document at the time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamedValue<T> {
    pub value: T,
    pub is_complete: bool,
}

/// Wraps a byte-at-a-time source, decoding the buffer accumulated so far on
/// every pull and yielding a [`StreamedValue`] whenever the decoded value
/// changes from the last one emitted.
///
/// Once the source is exhausted, a final decode attempt is made against
/// whatever remains in the buffer; decode errors classified by
/// `serde_json` as running out of input mid-value (for example a required
/// field that never arrived) are treated as a clean end of stream rather
/// than a fatal error, provided at least one value was already emitted.
pub struct PartialJsonStream<R, T> {
    source: Bytes<R>,
    buffer: Vec<u8>,
    last_value: Option<T>,
    /// Whether the last pair yielded (if any) carried `is_complete = true`.
    /// Lets the mid-stream path still emit when a value that was already
    /// reported with `is_complete = false` reaches a naturally-closed
    /// document with no further change in the value itself — otherwise the
    /// mandatory `is_complete = true` transition would be silently dropped
    /// by the "value unchanged" suppression.
    last_was_complete: bool,
    emitted_any: bool,
    source_exhausted: bool,
    finished: bool,
    options: CompleterOptions,
}

impl<R: Read, T> PartialJsonStream<R, T> {
    pub fn new(source: R) -> Self {
        Self::with_options(source, CompleterOptions::default())
    }

    pub fn with_options(source: R, options: CompleterOptions) -> Self {
        Self {
            source: source.bytes(),
            buffer: Vec::new(),
            last_value: None,
            last_was_complete: false,
            emitted_any: false,
            source_exhausted: false,
            finished: false,
            options,
        }
    }
}

impl<R: Read, T: DeserializeOwned + Clone + PartialEq> Iterator for PartialJsonStream<R, T> {
    type Item = Result<StreamedValue<T>, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            if self.source_exhausted {
                self.finished = true;
                return self.decode_final();
            }

            if !self.buffer.is_empty() {
                if let Ok(decoded) = decode::decode_bytes::<T>(&self.buffer, &self.options) {
                    if decoded.was_complete {
                        self.buffer.clear();
                    }
                    let changed = self.last_value.as_ref() != Some(&decoded.value);
                    let newly_complete = decoded.was_complete && !self.last_was_complete;
                    if changed || newly_complete {
                        #[cfg(feature = "logging")]
                        tracing::trace!(
                            is_complete = decoded.was_complete,
                            "yielding streamed value"
                        );
                        self.last_value = Some(decoded.value.clone());
                        self.last_was_complete = decoded.was_complete;
                        self.emitted_any = true;
                        return Some(Ok(StreamedValue {
                            value: decoded.value,
                            is_complete: decoded.was_complete,
                        }));
                    }
                }
                // An unchanged, already-reported-complete decode or a decode
                // failure is expected for a genuinely partial buffer; pull
                // more bytes and try again.
            }

            match self.source.next() {
                Some(Ok(byte)) => self.buffer.push(byte),
                Some(Err(io_err)) => {
                    self.finished = true;
                    return Some(Err(DecodeError::Io(io_err)));
                }
                None => self.source_exhausted = true,
            }
        }
    }
}

impl<R: Read, T: DeserializeOwned + Clone + PartialEq> PartialJsonStream<R, T> {
    /// The end-of-source step (spec: "attempt one last decode ... on
    /// success, yield `(value, is_complete = true)`"). Always attempts
    /// exactly one decode against whatever is left in the buffer and, on
    /// success, yields unconditionally — unlike the mid-stream path, this
    /// does not suppress the emission when the decoded value is unchanged
    /// from the last one yielded, since it is the mandatory final pair.
    fn decode_final(&mut self) -> Option<<Self as Iterator>::Item> {
        if self.buffer.is_empty() {
            return None;
        }

        let result = decode::decode_bytes::<T>(&self.buffer, &self.options);
        self.buffer.clear();

        match result {
            Ok(decoded) => {
                #[cfg(feature = "logging")]
                tracing::trace!(is_complete = true, "yielding final streamed value");
                self.last_value = Some(decoded.value.clone());
                self.last_was_complete = true;
                self.emitted_any = true;
                Some(Ok(StreamedValue {
                    value: decoded.value,
                    is_complete: true,
                }))
            }
            Err(err) => {
                if is_incomplete_at_eof(&err) || self.emitted_any {
                    None
                } else {
                    Some(Err(err))
                }
            }
        }
    }
}

/// A decode failure observed once the source is exhausted is treated as a
/// clean end of stream, not a fatal error, when it looks like the decoder
/// simply never received a value it needed: either `serde_json` ran out of
/// input mid-token (`Category::Eof`), or the JSON was syntactically
/// complete but missing a field the target type requires (`serde_json`
/// reports this as a `Category::Data` error with no structured way to
/// distinguish it other than its message).
fn is_incomplete_at_eof(err: &DecodeError) -> bool {
    match err {
        DecodeError::DecodingFailed(inner) => {
            inner.classify() == Category::Eof || inner.to_string().contains("missing field")
        }
        _ => false,
    }
}
