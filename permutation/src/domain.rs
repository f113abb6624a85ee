//! The evaluation domain of the argument.
//!
//! The vectors of size `n` are seen as the evaluations of polynomials over
//! the multiplicative subgroup `<ω>` of order `n`. Index `i` of a vector is
//! the evaluation at `ω^i` (see [PermutationDomain::index_to_domain_point]).
//! arkworks' radix-2 transforms take and return evaluations in this natural
//! order, so no bit-reversal is needed anywhere else.
//!
//! Rational expressions such as `(x^n - 1) / (x - 1)` cannot be evaluated
//! pointwise on `<ω>` itself, so quotients are computed over the coset
//! `g<ω>`, where `g` is a primitive `2n`-th root of unity. Index `i` of a
//! coset evaluation vector is the evaluation at `g ω^i`. On that coset the
//! vanishing polynomial `x^n - 1` is the constant `g^n - 1 = -2`.

use crate::error::PermutationError;
use ark_ff::{FftField, Field};
use ark_poly::{
    univariate::DensePolynomial, DenseUVPolynomial, EvaluationDomain, Evaluations,
    Radix2EvaluationDomain as D,
};
use rayon::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PermutationDomain<F: FftField> {
    /// The subgroup `<ω>` of order `n`
    pub d1: D<F>,
    /// A primitive `2n`-th root of unity, shifting `<ω>` to a disjoint coset
    coset_generator: F,
    /// `g^n - 1`, the value of the vanishing polynomial over the coset
    vanishing_on_coset: F,
    /// `1 / (g^n - 1)`
    vanishing_on_coset_inv: F,
}

impl<F: FftField> PermutationDomain<F> {
    /// Create the domain of exactly `size` elements.
    ///
    /// # Errors
    ///
    /// Fails with [PermutationError::NonPowerOfTwoSize] if `size` is not a
    /// power of two, or is too large for the two-adicity of the field.
    pub fn new(size: usize) -> Result<Self, PermutationError> {
        if !size.is_power_of_two() {
            return Err(PermutationError::NonPowerOfTwoSize(size));
        }
        let d1 = D::<F>::new(size)
            .filter(|d| d.size() == size)
            .ok_or(PermutationError::NonPowerOfTwoSize(size))?;

        let coset_generator = F::get_root_of_unity(2 * size as u64)
            .ok_or(PermutationError::NonPowerOfTwoSize(size))?;
        let vanishing_on_coset = coset_generator.pow([size as u64]) - F::one();
        let vanishing_on_coset_inv = vanishing_on_coset
            .inverse()
            .ok_or(PermutationError::NonPowerOfTwoSize(size))?;

        Ok(PermutationDomain {
            d1,
            coset_generator,
            vanishing_on_coset,
            vanishing_on_coset_inv,
        })
    }

    pub fn size(&self) -> usize {
        self.d1.size()
    }

    /// The generator `ω` of the domain
    pub fn generator(&self) -> F {
        self.d1.group_gen
    }

    /// The shift `g` of the coset used to compute quotients
    pub fn coset_generator(&self) -> F {
        self.coset_generator
    }

    /// The value of `x^n - 1` for all `x` in the coset
    pub fn vanishing_on_coset(&self) -> F {
        self.vanishing_on_coset
    }

    pub fn vanishing_on_coset_inv(&self) -> F {
        self.vanishing_on_coset_inv
    }

    /// The point `ω^i` whose evaluation sits at index `i`
    pub fn index_to_domain_point(&self, i: usize) -> F {
        self.d1.element(i)
    }

    /// The point `g ω^i` whose coset evaluation sits at index `i`
    pub fn index_to_coset_point(&self, i: usize) -> F {
        self.coset_generator * self.d1.element(i)
    }

    /// The index of `ω x`, where `x` is the point at index `i`. This holds
    /// for the domain and for the coset alike.
    pub fn next(&self, i: usize) -> usize {
        (i + 1) % self.size()
    }

    /// All the points of the coset, in index order
    pub fn coset_points(&self) -> Vec<F> {
        self.d1
            .elements()
            .map(|x| self.coset_generator * x)
            .collect()
    }

    /// Interpolate evaluations over the domain into coefficient form.
    pub fn interpolate(&self, evals: Vec<F>) -> DensePolynomial<F> {
        Evaluations::from_vec_and_domain(evals, self.d1).interpolate()
    }

    /// Evaluate a polynomial of degree less than `n` over the coset.
    pub fn coset_evaluations(&self, plnm: &DensePolynomial<F>) -> Vec<F> {
        // p(g x) has coefficients p_i g^i
        let mut coeffs = plnm.coeffs.clone();
        distribute_powers(&mut coeffs, self.coset_generator);
        self.d1.fft(&coeffs)
    }

    /// Interpolate evaluations over the coset into coefficient form.
    pub fn coset_interpolate(&self, evals: Vec<F>) -> DensePolynomial<F> {
        let mut coeffs = self.d1.ifft(&evals);
        // the inverse of the shift is g^{2n-1}
        let shift_inv = self.coset_generator.pow([2 * self.size() as u64 - 1]);
        distribute_powers(&mut coeffs, shift_inv);
        DensePolynomial::from_coefficients_vec(coeffs)
    }
}

/// Multiply `coeffs[i]` by `g^i`.
fn distribute_powers<F: Field>(coeffs: &mut [F], g: F) {
    let powers: Vec<F> = std::iter::successors(Some(F::one()), |acc| Some(*acc * g))
        .take(coeffs.len())
        .collect();
    coeffs
        .par_iter_mut()
        .zip(powers.par_iter())
        .for_each(|(c, p)| *c *= p);
}
