//! Error taxonomy for regexgen.
//!
//! Only conditions spec.md classifies as ordinary (recoverable) errors live
//! here. Programmer errors — `min_unbounded_repeat_count > max_...` and
//! accessing the RNG before `initialize` — are fatal preconditions and are
//! realized as `panic!`, not as `Error` variants; see `args::Args::rng`.

use thiserror::Error;

/// Errors that can occur while building a [`crate::Generator`].
#[derive(Debug, Error)]
pub enum Error {
    /// The underlying parser rejected the pattern.
    #[error("invalid regex pattern: {0}")]
    Parse(#[from] regex_syntax::Error),

    /// A flag the engine does not support was requested.
    #[error("unsupported flag: {0}")]
    UnsupportedFlag(&'static str),

    /// An explicit repeat bound exceeds `MAX_SUPPORTED_REPEAT_COUNT`.
    #[error("repeat count {found} exceeds the supported maximum of {max}")]
    RepeatCountExceeded { found: u32, max: u32 },

    /// A character class had no ranges to sample from.
    #[error("empty character class")]
    EmptyClass,
}
