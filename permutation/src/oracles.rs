//! This module implements the Fiat-Shamir challenges of the argument.
//!
//! The prover's commitments are bound to the transcript in a fixed order:
//! `t1` and `t2` before `epsilon`, `z` before `omega` and `q` before `eta`.

use crate::{error::PermutationError, proof::Proof};
use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use fiat_shamir::Transcript;
use poly_commitment::CommitmentError;

/// Challenge used to build the accumulator
pub const EPSILON: &str = "epsilon";
/// Challenge folding the transition and boundary constraints
pub const OMEGA: &str = "omega";
/// Evaluation point of the polynomial identity
pub const ETA: &str = "eta";

pub fn new_transcript() -> Transcript {
    Transcript::new(&[EPSILON, OMEGA, ETA])
}

/// Bind the commitments `points` to the challenge `label` and derive it.
pub fn derive_randomness<G: AffineRepr>(
    transcript: &mut Transcript,
    label: &str,
    points: &[&G],
) -> Result<G::ScalarField, PermutationError> {
    for point in points {
        let mut bytes = vec![];
        point
            .serialize_uncompressed(&mut bytes)
            .map_err(|_| CommitmentError::Serialization)?;
        transcript.bind(label, &bytes)?;
    }
    Ok(transcript.challenge_field(label)?)
}

/// The challenges of a proof, as derived by both the prover and the verifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenges<F: PrimeField> {
    pub epsilon: F,
    pub omega: F,
    pub eta: F,
}

impl<F: PrimeField> Challenges<F> {
    /// Replay the transcript of the prover from the commitments of `proof`.
    pub fn derive<G: AffineRepr<ScalarField = F>>(
        proof: &Proof<G>,
    ) -> Result<Self, PermutationError> {
        let mut transcript = new_transcript();
        let epsilon = derive_randomness(&mut transcript, EPSILON, &[&proof.t1, &proof.t2])?;
        let omega = derive_randomness(&mut transcript, OMEGA, &[&proof.z])?;
        let eta = derive_randomness(&mut transcript, ETA, &[&proof.q])?;
        Ok(Challenges {
            epsilon,
            omega,
            eta,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::{Fr, G1Affine};
    use ark_ec::CurveGroup;
    use fiat_shamir::TranscriptError;

    #[test]
    fn challenges_depend_on_every_commitment() {
        let g = G1Affine::generator();
        let points = [g, (g * Fr::from(2u64)).into_affine(), (g * Fr::from(3u64)).into_affine()];

        let derive = |t1: &G1Affine, t2: &G1Affine, z: &G1Affine| {
            let mut transcript = new_transcript();
            let epsilon: Fr = derive_randomness(&mut transcript, EPSILON, &[t1, t2]).unwrap();
            let omega: Fr = derive_randomness(&mut transcript, OMEGA, &[z]).unwrap();
            (epsilon, omega)
        };

        let (e0, o0) = derive(&points[0], &points[1], &points[2]);
        assert_eq!((e0, o0), derive(&points[0], &points[1], &points[2]));

        // binding order matters
        let (e1, o1) = derive(&points[1], &points[0], &points[2]);
        assert_ne!(e0, e1);
        assert_ne!(o0, o1);

        let (e2, o2) = derive(&points[0], &points[1], &points[0]);
        assert_eq!(e0, e2);
        assert_ne!(o0, o2);
    }

    #[test]
    fn challenges_are_derived_in_order() {
        let g = G1Affine::generator();
        let mut transcript = new_transcript();
        assert_eq!(
            derive_randomness::<G1Affine>(&mut transcript, OMEGA, &[&g]),
            Err(PermutationError::Transcript(
                TranscriptError::PreviousChallengeNotComputed(OMEGA.to_string())
            ))
        );
    }
}
