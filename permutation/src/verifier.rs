//! This module implements the verifier of the permutation argument.

use crate::{
    domain::PermutationDomain,
    error::PermutationError,
    oracles::Challenges,
    proof::{ClaimedEvaluations, Proof},
    quotient::first_lagrange_at,
};
use ark_ec::pairing::Pairing;
use ark_ff::PrimeField;
use poly_commitment::PairingSRS;
use tracing::{debug, instrument};

/// Check the folded constraint at `eta`:
///
/// ```text
/// (ε - t2)·z_shifted - (ε - t1)·z + ω·L0(η)·(z - 1) = (η^n - 1)·q
/// ```
///
/// # Errors
///
/// Fails with [PermutationError::PermutationProofFailed] if the identity
/// doesn't hold, or if `eta` belongs to the domain.
pub fn check_identity<F: PrimeField>(
    size: usize,
    challenges: &Challenges<F>,
    evals: &ClaimedEvaluations<F>,
) -> Result<(), PermutationError> {
    let Challenges {
        epsilon,
        omega,
        eta,
    } = *challenges;

    let l0 = first_lagrange_at(size, eta).ok_or(PermutationError::PermutationProofFailed)?;
    let vanishing = eta.pow([size as u64]) - F::one();

    let lhs = (epsilon - evals.t2) * evals.z_shifted - (epsilon - evals.t1) * evals.z
        + omega * l0 * (evals.z - F::one());
    let rhs = vanishing * evals.q;

    if lhs == rhs {
        Ok(())
    } else {
        Err(PermutationError::PermutationProofFailed)
    }
}

/// Verify that `proof` proves that its two committed vectors are
/// permutations of each other.
#[instrument(skip_all, level = "debug")]
pub fn verify<Pair: Pairing>(
    srs: &PairingSRS<Pair>,
    proof: &Proof<Pair::G1Affine>,
) -> Result<(), PermutationError> {
    let size = proof.size;
    let domain = PermutationDomain::<Pair::ScalarField>::new(size)?;

    let challenges = Challenges::derive(proof)?;
    let evals = proof.evaluations().ok_or_else(|| {
        debug!(
            claimed = proof.batched_proof.claimed_values.len(),
            "malformed batched opening"
        );
        PermutationError::PermutationProofFailed
    })?;

    check_identity(size, &challenges, &evals)
        .inspect_err(|_| debug!(size, "the polynomial identity doesn't hold"))?;

    srs.batch_verify_single_point(&proof.batched_digests(), challenges.eta, &proof.batched_proof)
        .inspect_err(|e| debug!(size, error = %e, "batched opening rejected"))?;
    srs.verify(
        &proof.z,
        challenges.eta * domain.generator(),
        &proof.shifted_proof,
    )
    .inspect_err(|e| debug!(size, error = %e, "shifted opening rejected"))?;

    Ok(())
}

/// Verify `proof` as [verify] does, additionally requiring it to be about
/// vectors of `expected_size` elements.
pub fn verify_with_size<Pair: Pairing>(
    srs: &PairingSRS<Pair>,
    proof: &Proof<Pair::G1Affine>,
    expected_size: usize,
) -> Result<(), PermutationError> {
    if proof.size != expected_size {
        return Err(PermutationError::IncompatibleSize(expected_size, proof.size));
    }
    verify(srs, proof)
}
