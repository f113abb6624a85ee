//! This module implements the KZG protocol described in the paper
//! [Constant-Size Commitments to Polynomials and Their
//! Applications](https://www.iacr.org/archive/asiacrypt2010/6477178/6477178.pdf)
//! by Kate, Zaverucha and Goldberg, often referred to as the KZG10 paper.
//!
//! The protocol requires a structured reference string (SRS) that contains
//! powers of a generator of a group, and a pairing friendly curve.
//!
//! Openings of a single polynomial, and openings of several polynomials at a
//! single common point, are supported. In the latter case the polynomials
//! are folded with the powers of a challenge derived from the commitments,
//! the point and the claimed evaluations.

use crate::{srs::SRS, CommitmentError};
use ark_ec::{pairing::Pairing, AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{Field, One, Zero};
use ark_poly::{univariate::DensePolynomial, DenseUVPolynomial, Polynomial};
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use fiat_shamir::Transcript;
use perm_utils::FieldHelpers;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use sha2::Sha256;
use tracing::instrument;

/// The label of the challenge used to fold a batch of polynomials
const FOLDING_CHALLENGE: &str = "gamma";

/// Proof that a committed polynomial evaluates to `claimed_value` at some
/// point.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(CanonicalSerialize, CanonicalDeserialize)]
pub struct OpeningProof<G: AffineRepr> {
    /// Commitment to the quotient `(p(X) - p(z)) / (X - z)`
    #[serde_as(as = "perm_utils::serialization::SerdeAs")]
    pub quotient: G,
    #[serde_as(as = "perm_utils::serialization::SerdeAs")]
    pub claimed_value: G::ScalarField,
}

/// Proof that several committed polynomials evaluate to `claimed_values`
/// (in order) at a common point.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[derive(CanonicalSerialize, CanonicalDeserialize)]
pub struct BatchOpeningProof<G: AffineRepr> {
    /// Commitment to the quotient of the folded polynomial
    #[serde_as(as = "perm_utils::serialization::SerdeAs")]
    pub quotient: G,
    #[serde_as(as = "Vec<perm_utils::serialization::SerdeAs>")]
    pub claimed_values: Vec<G::ScalarField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "")]
/// Define a structured reference string (i.e. SRS) for the KZG protocol.
pub struct PairingSRS<Pair: Pairing> {
    /// The full SRS is the one used by the prover. Can be seen as the "proving
    /// key"/"secret key"
    pub full_srs: SRS<Pair::G1Affine>,
    /// SRS to be used by the verifier. Can be seen as the "verification
    /// key"/"public key".
    pub verifier_srs: SRS<Pair::G2Affine>,
}

/// Divide `p(X) - p(z)` by `X - z`, returning the quotient and `p(z)`.
fn divide_by_linear<F: Field>(coeffs: &[F], point: F) -> (DensePolynomial<F>, F) {
    if coeffs.is_empty() {
        return (DensePolynomial::zero(), F::zero());
    }
    // Horner's method: the intermediate accumulators are the coefficients of
    // the quotient, the last one is the evaluation.
    let mut quotient = vec![F::zero(); coeffs.len() - 1];
    let mut acc = F::zero();
    for (i, c) in coeffs.iter().enumerate().rev() {
        acc = acc * point + c;
        if i > 0 {
            quotient[i - 1] = acc;
        }
    }
    (DensePolynomial::from_coefficients_vec(quotient), acc)
}

/// Derive the challenge folding a batch of openings at `point`.
fn folding_challenge<G: AffineRepr>(
    point: G::ScalarField,
    digests: &[G],
    claimed_values: &[G::ScalarField],
) -> Result<G::ScalarField, CommitmentError> {
    let mut transcript = Transcript::<Sha256>::new(&[FOLDING_CHALLENGE]);
    transcript.bind(FOLDING_CHALLENGE, &point.to_bytes_be())?;
    for digest in digests {
        let mut bytes = Vec::with_capacity(digest.uncompressed_size());
        digest
            .serialize_uncompressed(&mut bytes)
            .map_err(|_| CommitmentError::Serialization)?;
        transcript.bind(FOLDING_CHALLENGE, &bytes)?;
    }
    for value in claimed_values {
        transcript.bind(FOLDING_CHALLENGE, &value.to_bytes_be())?;
    }
    Ok(transcript.challenge_field(FOLDING_CHALLENGE)?)
}

/// `[1, x, x^2, ..., x^{n-1}]`
fn powers<F: Field>(x: F, n: usize) -> Vec<F> {
    std::iter::successors(Some(F::one()), |acc| Some(*acc * x))
        .take(n)
        .collect()
}

/// `\sum_i scalars[i] * polys[i]`
fn fold_polynomials<F: Field>(
    polys: &[&DensePolynomial<F>],
    scalars: &[F],
) -> DensePolynomial<F> {
    let len = polys.iter().map(|p| p.coeffs.len()).max().unwrap_or(0);
    let mut coeffs = vec![F::zero(); len];
    for (p, s) in polys.iter().zip(scalars) {
        coeffs
            .par_iter_mut()
            .zip(p.coeffs.par_iter())
            .for_each(|(acc, c)| *acc += *s * c);
    }
    DensePolynomial::from_coefficients_vec(coeffs)
}

impl<Pair: Pairing> PairingSRS<Pair> {
    /// Create a new SRS for the KZG protocol, supporting polynomials with up
    /// to `n` coefficients.
    ///
    /// # Safety
    ///
    /// The method is annotated as unsafe because it does use a method
    /// generating the toxic waste. A safe method would be to load an existing
    /// SRS where it is broadly accepted that the trapdoor is not recoverable.
    pub unsafe fn create(x: Pair::ScalarField, n: usize) -> Self {
        PairingSRS {
            full_srs: unsafe { SRS::create_trusted_setup(x, n) },
            verifier_srs: unsafe { SRS::create_trusted_setup(x, 3) },
        }
    }

    /// The number of coefficients a committed polynomial can have
    pub fn max_poly_size(&self) -> usize {
        self.full_srs.max_poly_size()
    }

    /// Commit to a polynomial in coefficient form.
    #[instrument(skip_all, level = "debug")]
    pub fn commit(
        &self,
        plnm: &DensePolynomial<Pair::ScalarField>,
    ) -> Result<Pair::G1Affine, CommitmentError> {
        self.full_srs.commit_non_hiding(plnm)
    }

    /// Open `plnm` at `point`.
    #[instrument(skip_all, level = "debug")]
    pub fn open(
        &self,
        plnm: &DensePolynomial<Pair::ScalarField>,
        point: Pair::ScalarField,
    ) -> Result<OpeningProof<Pair::G1Affine>, CommitmentError> {
        let (quotient_poly, claimed_value) = divide_by_linear(&plnm.coeffs, point);
        let quotient = self.commit(&quotient_poly)?;
        Ok(OpeningProof {
            quotient,
            claimed_value,
        })
    }

    /// Open all of `plnms`, committed to as `digests`, at the single point
    /// `point`. The claimed values of the proof follow the order of `plnms`.
    #[instrument(skip_all, level = "debug")]
    pub fn batch_open_single_point(
        &self,
        plnms: &[&DensePolynomial<Pair::ScalarField>],
        digests: &[Pair::G1Affine],
        point: Pair::ScalarField,
    ) -> Result<BatchOpeningProof<Pair::G1Affine>, CommitmentError> {
        if plnms.len() != digests.len() {
            return Err(CommitmentError::LengthMismatch(plnms.len(), digests.len()));
        }
        if plnms.is_empty() {
            return Err(CommitmentError::EmptyBatch);
        }

        let claimed_values: Vec<_> = plnms.par_iter().map(|p| p.evaluate(&point)).collect();

        let gamma = folding_challenge(point, digests, &claimed_values)?;
        let folded = fold_polynomials(plnms, &powers(gamma, plnms.len()));

        let (quotient_poly, _) = divide_by_linear(&folded.coeffs, point);
        let quotient = self.commit(&quotient_poly)?;

        Ok(BatchOpeningProof {
            quotient,
            claimed_values,
        })
    }

    /// Check that `quotient` proves that the polynomial committed in
    /// `digest` evaluates to `value` at `point`, i.e. that
    /// `e(C - [v]G1 + [z]W, G2) = e(W, [x]G2)`.
    fn check_opening(
        &self,
        digest: Pair::G1Affine,
        point: Pair::ScalarField,
        value: Pair::ScalarField,
        quotient: Pair::G1Affine,
    ) -> Result<(), CommitmentError> {
        let (g2, x_g2) = match self.verifier_srs.g.as_slice() {
            [g2, x_g2, ..] => (*g2, *x_g2),
            _ => return Err(CommitmentError::MissingVerifierKey),
        };

        let numerator: Pair::G1 =
            digest.into_group() - Pair::G1Affine::generator() * value + quotient * point;
        // We compute the result of the multiplication of two miller loop,
        // to apply only one final exponentation
        let to_loop_left = [
            ark_ec::pairing::prepare_g1::<Pair>(numerator),
            // Note that we do a negation here, to put everything on the same side
            ark_ec::pairing::prepare_g1::<Pair>(-quotient.into_group()),
        ];
        let to_loop_right = [
            ark_ec::pairing::prepare_g2::<Pair>(g2),
            ark_ec::pairing::prepare_g2::<Pair>(x_g2),
        ];
        let res = Pair::final_exponentiation(Pair::multi_miller_loop(to_loop_left, to_loop_right))
            .ok_or(CommitmentError::InvalidOpening)?;

        if res.0 == Pair::TargetField::one() {
            Ok(())
        } else {
            Err(CommitmentError::InvalidOpening)
        }
    }

    /// Verify that the polynomial committed in `digest` evaluates to
    /// `proof.claimed_value` at `point`.
    #[instrument(skip_all, level = "debug")]
    pub fn verify(
        &self,
        digest: &Pair::G1Affine,
        point: Pair::ScalarField,
        proof: &OpeningProof<Pair::G1Affine>,
    ) -> Result<(), CommitmentError> {
        self.check_opening(*digest, point, proof.claimed_value, proof.quotient)
    }

    /// Verify that the polynomials committed in `digests` evaluate to
    /// `proof.claimed_values` (in order) at `point`.
    #[instrument(skip_all, level = "debug")]
    pub fn batch_verify_single_point(
        &self,
        digests: &[Pair::G1Affine],
        point: Pair::ScalarField,
        proof: &BatchOpeningProof<Pair::G1Affine>,
    ) -> Result<(), CommitmentError> {
        if digests.len() != proof.claimed_values.len() {
            return Err(CommitmentError::LengthMismatch(
                digests.len(),
                proof.claimed_values.len(),
            ));
        }
        if digests.is_empty() {
            return Err(CommitmentError::EmptyBatch);
        }

        let gamma = folding_challenge(point, digests, &proof.claimed_values)?;
        let gammas = powers(gamma, digests.len());

        let folded_digest = Pair::G1::msm(digests, &gammas)
            .map_err(CommitmentError::Msm)?
            .into_affine();
        let folded_value = proof
            .claimed_values
            .iter()
            .zip(gammas.iter())
            .fold(Pair::ScalarField::zero(), |acc, (v, g)| acc + *v * g);

        self.check_opening(folded_digest, point, folded_value, proof.quotient)
    }
}
