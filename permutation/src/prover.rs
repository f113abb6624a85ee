//! This module implements the prover of the permutation argument.

use crate::{
    accumulator::compute_accumulator,
    domain::PermutationDomain,
    error::PermutationError,
    oracles::{derive_randomness, new_transcript, EPSILON, ETA, OMEGA},
    proof::Proof,
    quotient::compute_quotient,
};
use ark_ec::pairing::Pairing;
use ark_poly::Polynomial;
use poly_commitment::PairingSRS;
use tracing::{debug, instrument};

/// Prove that `t2` is a permutation of `t1`.
///
/// Both vectors must have the same length, a power of two supported by the
/// scalar field, and the SRS must be able to commit to polynomials of that
/// many coefficients.
///
/// The prover does not check its claim: proving a false statement yields a
/// proof that is rejected by [crate::verifier::verify].
#[instrument(skip_all, level = "debug")]
pub fn prove<Pair: Pairing>(
    srs: &PairingSRS<Pair>,
    t1: &[Pair::ScalarField],
    t2: &[Pair::ScalarField],
) -> Result<Proof<Pair::G1Affine>, PermutationError> {
    //~ 1. Check the sizes of the inputs.
    if t1.len() != t2.len() {
        return Err(PermutationError::IncompatibleSize(t1.len(), t2.len()));
    }
    let size = t1.len();

    //~ 1. Set up the domain of exactly `size` elements.
    let domain = PermutationDomain::<Pair::ScalarField>::new(size)?;
    debug!(size, "domain set up");

    //~ 1. Interpolate and commit to `t1` and `t2`.
    let t1_poly = domain.interpolate(t1.to_vec());
    let t2_poly = domain.interpolate(t2.to_vec());
    let t1_comm = srs.commit(&t1_poly)?;
    let t2_comm = srs.commit(&t2_poly)?;
    debug!(size, "inputs committed");

    //~ 1. Derive `epsilon` from the commitments to the inputs.
    let mut transcript = new_transcript();
    let epsilon = derive_randomness(&mut transcript, EPSILON, &[&t1_comm, &t2_comm])?;

    //~ 1. Build the accumulator and commit to it.
    let z = compute_accumulator(t1, t2, epsilon);
    let z_poly = domain.interpolate(z);
    let z_comm = srs.commit(&z_poly)?;
    debug!(size, "accumulator committed");

    //~ 1. Derive `omega` from the commitment to the accumulator, evaluate
    //~    the constraints over the coset, fold them with `omega` and divide
    //~    them by the vanishing polynomial.
    let omega = derive_randomness(&mut transcript, OMEGA, &[&z_comm])?;
    let q_poly = compute_quotient(&domain, &t1_poly, &t2_poly, &z_poly, epsilon, omega);
    let q_comm = srs.commit(&q_poly)?;
    debug!(size, degree = q_poly.degree(), "quotient committed");

    //~ 1. Derive the evaluation point `eta` and open all the polynomials at
    //~    `eta`, and the accumulator at `eta·ω`.
    let eta = derive_randomness(&mut transcript, ETA, &[&q_comm])?;
    let batched_proof = srs.batch_open_single_point(
        &[&t1_poly, &t2_poly, &z_poly, &q_poly],
        &[t1_comm, t2_comm, z_comm, q_comm],
        eta,
    )?;
    let shifted_proof = srs.open(&z_poly, eta * domain.generator())?;
    debug!(size, "polynomials opened");

    Ok(Proof {
        size,
        t1: t1_comm,
        t2: t2_comm,
        z: z_comm,
        q: q_comm,
        batched_proof,
        shifted_proof,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::oracles::Challenges;
    use ark_bn254::{Bn254, Fr};
    use ark_ff::UniformRand;
    use perm_utils::tests::make_test_rng;

    #[test]
    fn quotient_commitment_matches_the_composer() {
        let mut rng = make_test_rng(None);
        let srs = unsafe { PairingSRS::<Bn254>::create(Fr::rand(&mut rng), 16) };
        let t1: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let mut t2 = t1.clone();
        t2.reverse();

        let proof = prove(&srs, &t1, &t2).unwrap();
        let challenges = Challenges::derive(&proof).unwrap();

        let domain = PermutationDomain::<Fr>::new(8).unwrap();
        let t1_poly = domain.interpolate(t1.clone());
        let t2_poly = domain.interpolate(t2.clone());
        let z_poly = domain.interpolate(compute_accumulator(&t1, &t2, challenges.epsilon));
        assert_eq!(srs.commit(&z_poly).unwrap(), proof.z);

        let q_poly = compute_quotient(
            &domain,
            &t1_poly,
            &t2_poly,
            &z_poly,
            challenges.epsilon,
            challenges.omega,
        );
        assert!(q_poly.degree() < 8);
        assert_eq!(srs.commit(&q_poly).unwrap(), proof.q);
        assert_eq!(proof.batched_proof.claimed_values[3], q_poly.evaluate(&challenges.eta));
    }
}
