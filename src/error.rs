//! Error types for domain parameter handling and key agreement.

use {
    crate::dh::{ParameterCheck, PublicKeyCheck},
    thiserror::Error,
};

/// Result type alias for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// Domain parameters failed the structure check.
    #[error("invalid domain parameters: {0}")]
    InvalidParameters(ParameterCheck),

    /// Neither the supplied subgroup order nor `(p - 1) / 2` is prime.
    #[error("malformed group: no prime subgroup order")]
    MalformedGroup,

    /// The generator order is neither `q - 1` nor `p - 1`.
    #[error("unable to determine generator order")]
    UnableToDetermineOrder,

    /// A public value failed RFC 2631 validation.
    #[error("public key validation failed: {0}")]
    KeyValidationFailed(PublicKeyCheck),

    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// Input exceeds the fixed arithmetic capacity.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(&'static str),
}

impl Error {
    /// Whether retrying with fresh randomness can succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::KeyValidationFailed(_))
    }
}
