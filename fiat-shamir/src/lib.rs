//! A transcript turning an interactive public-coin protocol into a
//! non-interactive one.
//!
//! The challenges of a protocol are declared up front, in the order in which
//! they are derived. Messages of the prover are bound to the challenge they
//! precede, and each challenge is computed as
//!
//! ```text
//! H(label || previous challenge || bindings...)
//! ```
//!
//! so that a challenge depends on everything that was sent before it. A
//! challenge can only be computed once its predecessor has been computed,
//! and no data can be bound to a challenge after it has been computed.

pub mod error;

pub use error::TranscriptError;

use ark_ff::PrimeField;
use perm_utils::FieldHelpers;
use sha2::{Digest, Sha256};
use std::marker::PhantomData;

#[derive(Debug, Clone)]
struct Challenge {
    label: String,
    bindings: Vec<Vec<u8>>,
    value: Option<Vec<u8>>,
}

/// A Fiat-Shamir transcript parametrised by its hash function.
#[derive(Debug, Clone)]
pub struct Transcript<H: Digest = Sha256> {
    challenges: Vec<Challenge>,
    hash: PhantomData<H>,
}

impl<H: Digest> Transcript<H> {
    /// Create a transcript for the challenges `labels`, which must be derived
    /// in the given order.
    pub fn new(labels: &[&str]) -> Self {
        let challenges = labels
            .iter()
            .map(|label| Challenge {
                label: label.to_string(),
                bindings: vec![],
                value: None,
            })
            .collect();
        Transcript {
            challenges,
            hash: PhantomData,
        }
    }

    fn position(&self, label: &str) -> Result<usize, TranscriptError> {
        self.challenges
            .iter()
            .position(|challenge| challenge.label == label)
            .ok_or_else(|| TranscriptError::ChallengeNotFound(label.to_string()))
    }

    /// Bind `bytes` to the challenge `label`.
    pub fn bind(&mut self, label: &str, bytes: &[u8]) -> Result<(), TranscriptError> {
        let i = self.position(label)?;
        let challenge = &mut self.challenges[i];
        if challenge.value.is_some() {
            return Err(TranscriptError::ChallengeAlreadyComputed(label.to_string()));
        }
        challenge.bindings.push(bytes.to_vec());
        Ok(())
    }

    /// Compute the challenge `label`, or return it if it was already computed.
    pub fn compute_challenge(&mut self, label: &str) -> Result<Vec<u8>, TranscriptError> {
        let i = self.position(label)?;
        if let Some(value) = &self.challenges[i].value {
            return Ok(value.clone());
        }

        let mut hasher = H::new();
        hasher.update(label.as_bytes());
        if i > 0 {
            let previous = self.challenges[i - 1].value.as_ref().ok_or_else(|| {
                TranscriptError::PreviousChallengeNotComputed(label.to_string())
            })?;
            hasher.update(previous);
        }
        for binding in &self.challenges[i].bindings {
            hasher.update(binding);
        }

        let value = hasher.finalize().to_vec();
        self.challenges[i].value = Some(value.clone());
        Ok(value)
    }

    /// Compute the challenge `label` and reduce it into the field `F`.
    pub fn challenge_field<F: PrimeField>(&mut self, label: &str) -> Result<F, TranscriptError> {
        let bytes = self.compute_challenge(label)?;
        Ok(F::from_be_bytes_reduced(&bytes))
    }
}
