//! Configuration surface for the completion engine.

/// What the completer does with the non-standard numeric literals
/// `Infinity`, `-Infinity`, and `NaN`.
///
/// These three tokens are never part of standard JSON, but they are common
/// enough in the wild (they round-trip through many languages' native JSON
/// encoders) that a completion engine sitting in front of a truncation-prone
/// stream needs an explicit policy for them, rather than silently accepting
/// or silently rejecting.
#[derive(Debug, Clone, PartialEq)]
pub enum FloatPolicy {
    /// Treat `Infinity`, `-Infinity`, and `NaN` as invalid value starts. The
    /// completer raises [`crate::CompletionError::InvalidValue`] the moment
    /// it recognises one, whether or not it is fully typed.
    Reject,

    /// Recognise `Infinity`, `-Infinity`, and `NaN` as values.
    ///
    /// The three spellings the completer *recognises in the input* are
    /// always exactly `Infinity`, `-Infinity`, and `NaN` — this policy does
    /// not change that. The token strings below are instead what the
    /// decoding façade (`crate::decode`) substitutes into the completed text
    /// in their place before handing it to `serde_json`, which has no
    /// concept of these literals on its own.
    Accept {
        /// Substituted for a bare `Infinity`.
        pos_inf_token: String,
        /// Substituted for a bare `-Infinity`.
        neg_inf_token: String,
        /// Substituted for a bare `NaN`.
        nan_token: String,
    },
}

impl Default for FloatPolicy {
    /// Defaults to [`FloatPolicy::Reject`], matching strict JSON.
    fn default() -> Self {
        Self::Reject
    }
}

/// Configuration for [`crate::complete`], [`crate::completion`], and the
/// decode façade built on top of them.
#[derive(Debug, Clone, PartialEq)]
pub struct CompleterOptions {
    /// How non-conforming float literals are handled. Defaults to
    /// [`FloatPolicy::Reject`].
    pub non_conforming_float_policy: FloatPolicy,

    /// The deepest nesting of arrays and objects the completer will recurse
    /// into before raising [`crate::CompletionError::DepthLimitExceeded`].
    ///
    /// # Default
    ///
    /// `64`.
    pub maximum_depth: usize,
}

impl Default for CompleterOptions {
    fn default() -> Self {
        Self {
            non_conforming_float_policy: FloatPolicy::default(),
            maximum_depth: 64,
        }
    }
}
