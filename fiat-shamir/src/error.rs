use thiserror::Error;

/// Errors raised by a misuse of the [crate::Transcript]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TranscriptError {
    #[error("the challenge {0} was not declared in the transcript")]
    ChallengeNotFound(String),

    #[error("the challenge {0} was already computed, no more data can be bound to it")]
    ChallengeAlreadyComputed(String),

    #[error("the challenge preceding {0} has not been computed yet")]
    PreviousChallengeNotComputed(String),
}
