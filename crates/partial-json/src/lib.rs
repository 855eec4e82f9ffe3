//! Completes JSON text truncated at an arbitrary byte boundary into
//! syntactically valid JSON, decodes it through a user-chosen
//! `serde::de::DeserializeOwned` type, and streams decoded values out of a
//! growing byte source.
//!
//! ```
//! use partial_json::complete;
//!
//! let completed = complete(r#"{"name": "Ada", "tags": ["math""#).unwrap();
//! assert_eq!(completed, r#"{"name": "Ada", "tags": ["math"]}"#);
//! ```

mod array_completer;
mod completer;
mod decode;
mod dispatch;
mod end_of_value;
mod error;
mod literal_completer;
mod number_completer;
mod object_completer;
mod options;
mod outcome;
mod scanner;
mod stream;
mod string_completer;

pub use completer::{complete, complete_with, completion, completion_with};
pub use decode::{decode_bytes, decode_str, DecodeError, Decoded};
pub use error::CompletionError;
pub use options::{CompleterOptions, FloatPolicy};
pub use outcome::Completion;
pub use stream::{PartialJsonStream, StreamedValue};
