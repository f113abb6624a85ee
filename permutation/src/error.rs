//! This module implements the [`PermutationError`] type.

use fiat_shamir::TranscriptError;
use poly_commitment::CommitmentError;
use thiserror::Error;

/// Errors that can arise when creating or verifying a permutation proof
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PermutationError {
    #[error("the two vectors should be of the same size (got {0} and {1})")]
    IncompatibleSize(usize, usize),

    #[error("the vectors should be of a size that is a power of 2 supported by the field (got {0})")]
    NonPowerOfTwoSize(usize),

    #[error("the commitment scheme failed: {0}")]
    Commitment(#[from] CommitmentError),

    #[error("the transcript was misused: {0}")]
    Transcript(#[from] TranscriptError),

    #[error("permutation proof verification failed")]
    PermutationProofFailed,
}

/// Errors that can arise when loading or storing the public parameters
#[derive(Error, Debug)]
pub enum EnvError {
    #[error("could not access the SRS cache: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not decode the SRS cache: {0}")]
    Decode(#[from] rmp_serde::decode::Error),

    #[error("could not encode the SRS: {0}")]
    Encode(#[from] rmp_serde::encode::Error),
}
