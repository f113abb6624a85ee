//! This module implements the data structure of a permutation proof.

use ark_ec::AffineRepr;
use ark_ff::PrimeField;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use perm_utils::serialization::SerdeAs;
use poly_commitment::{BatchOpeningProof, OpeningProof};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

/// A proof that the vectors committed in `t1` and `t2` are permutations of
/// each other.
///
/// The batched opening proves the evaluations of `t1`, `t2`, `z` and `q`, in
/// this order, at the challenge `eta`. The shifted opening proves the
/// evaluation of `z` at `eta·ω`.
#[serde_as]
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, CanonicalSerialize, CanonicalDeserialize,
)]
#[serde(bound = "")]
pub struct Proof<G: AffineRepr> {
    /// The number of elements of the vectors
    pub size: usize,
    #[serde_as(as = "SerdeAs")]
    pub t1: G,
    #[serde_as(as = "SerdeAs")]
    pub t2: G,
    /// Commitment to the accumulator
    #[serde_as(as = "SerdeAs")]
    pub z: G,
    /// Commitment to the quotient
    #[serde_as(as = "SerdeAs")]
    pub q: G,
    pub batched_proof: BatchOpeningProof<G>,
    pub shifted_proof: OpeningProof<G>,
}

/// The evaluations claimed by a proof
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClaimedEvaluations<F: PrimeField> {
    pub t1: F,
    pub t2: F,
    pub z: F,
    pub q: F,
    /// Evaluation of the accumulator at `eta·ω`
    pub z_shifted: F,
}

impl<G: AffineRepr> Proof<G> {
    /// The commitments opened by the batched proof, in order
    pub fn batched_digests(&self) -> [G; 4] {
        [self.t1, self.t2, self.z, self.q]
    }

    /// The claimed evaluations, or `None` if the batched proof does not
    /// carry exactly one value per commitment.
    pub fn evaluations(&self) -> Option<ClaimedEvaluations<G::ScalarField>> {
        match self.batched_proof.claimed_values.as_slice() {
            [t1, t2, z, q] => Some(ClaimedEvaluations {
                t1: *t1,
                t2: *t2,
                z: *z,
                q: *q,
                z_shifted: self.shifted_proof.claimed_value,
            }),
            _ => None,
        }
    }
}
