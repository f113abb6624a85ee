//! This module implements the structured reference string (SRS) of the KZG
//! commitment scheme: the powers `[1]G, [x]G, [x^2]G, ...` of a group
//! generator for some secret `x`.

use crate::CommitmentError;
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{One, Zero};
use ark_poly::univariate::DensePolynomial;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SRS<G: AffineRepr> {
    /// The vector of group elements for committing to polynomials in
    /// coefficient form
    #[serde_as(as = "Vec<perm_utils::serialization::SerdeAs>")]
    pub g: Vec<G>,
}

impl<G: AffineRepr> SRS<G> {
    /// Create an SRS of `depth` powers of the toxic waste `x`.
    ///
    /// # Safety
    ///
    /// Whoever knows `x` can open commitments to arbitrary values. This is
    /// only meant for tests and for setups where `x` is discarded right away.
    pub unsafe fn create_trusted_setup(x: G::ScalarField, depth: usize) -> Self {
        let mut x_pow = G::ScalarField::one();
        let g: Vec<G::Group> = (0..depth)
            .map(|_| {
                let res = G::generator() * x_pow;
                x_pow *= x;
                res
            })
            .collect();
        SRS {
            g: G::Group::normalize_batch(&g),
        }
    }

    /// The number of coefficients a committed polynomial can have
    pub fn max_poly_size(&self) -> usize {
        self.g.len()
    }

    /// Commit to a polynomial given in coefficient form.
    pub fn commit_non_hiding(
        &self,
        plnm: &DensePolynomial<G::ScalarField>,
    ) -> Result<G, CommitmentError> {
        if plnm.coeffs.len() > self.g.len() {
            return Err(CommitmentError::PolynomialTooLarge(
                plnm.coeffs.len(),
                self.g.len(),
            ));
        }
        if plnm.is_zero() {
            return Ok(G::zero());
        }
        let comm = G::Group::msm(&self.g[..plnm.coeffs.len()], &plnm.coeffs)
            .map_err(CommitmentError::Msm)?;
        Ok(comm.into_affine())
    }
}
