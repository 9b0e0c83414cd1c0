use crate::algorithm::PublicKeyAlgorithm;

/// Result type used by this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors used throughout this crate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested key size is not one of the sizes supported for the algorithm.
    ///
    /// Raised before any entropy is consumed.
    #[error("invalid {algorithm} key size {requested}: expected one of {allowed:?}")]
    InvalidParameter {
        /// Algorithm the size was requested for.
        algorithm: PublicKeyAlgorithm,
        /// The rejected bit size.
        requested: i64,
        /// Every bit size the algorithm accepts.
        allowed: &'static [u32],
    },

    /// The parameter search gave up, or produced values the key generator rejected.
    ///
    /// Entropy and CPU time were already spent; no retry is attempted.
    #[error("{algorithm} parameter generation failed for a {bits}-bit key: {reason}")]
    GenerationFailed {
        /// Algorithm whose parameters were being generated.
        algorithm: PublicKeyAlgorithm,
        /// Requested modulus size.
        bits: u32,
        /// Which limit was hit.
        reason: &'static str,
    },

    /// A preference list named an algorithm this crate does not know.
    #[error("unrecognized {kind} algorithm name {name:?}")]
    UnknownAlgorithm {
        /// Algorithm family (`"hash"`, `"symmetric"` or `"compression"`).
        kind: &'static str,
        /// The name as supplied.
        name: String,
    },
}
