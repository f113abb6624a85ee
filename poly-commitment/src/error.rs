use fiat_shamir::TranscriptError;
use thiserror::Error;

/// Errors that can arise when committing to, opening, or verifying openings
/// of polynomials
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommitmentError {
    #[error("the polynomial has {0} coefficients but the SRS only supports {1}")]
    PolynomialTooLarge(usize, usize),

    #[error("the number of polynomials or commitments ({0}) doesn't match the number of digests or evaluations ({1})")]
    LengthMismatch(usize, usize),

    #[error("cannot open an empty batch of polynomials")]
    EmptyBatch,

    #[error("the verifier SRS must contain both [1]G2 and [x]G2")]
    MissingVerifierKey,

    #[error("the opening proof failed to verify")]
    InvalidOpening,

    #[error("the multi-scalar multiplication received inputs of different lengths ({0})")]
    Msm(usize),

    #[error("a commitment could not be serialized")]
    Serialization,

    #[error("the batching challenge could not be derived: {0}")]
    Transcript(#[from] TranscriptError),
}
