//! The constraints of the argument and their quotient by the vanishing
//! polynomial.
//!
//! All vectors handled here are evaluations over the coset of
//! [PermutationDomain], index `i` being the evaluation at `g ω^i`.

use crate::domain::PermutationDomain;
use ark_ff::{FftField, Field};
use ark_poly::univariate::DensePolynomial;
use perm_utils::batch_invert;
use rayon::prelude::*;

/// The transition constraint
/// `H(x) = Z(ωx)·(ε - t2(x)) - Z(x)·(ε - t1(x))`,
/// which vanishes over the domain iff the accumulator follows its recurrence
/// and wraps around.
pub fn transition_numerator<F: FftField>(
    domain: &PermutationDomain<F>,
    lt1: &[F],
    lt2: &[F],
    lz: &[F],
    epsilon: F,
) -> Vec<F> {
    (0..domain.size())
        .into_par_iter()
        .map(|i| lz[domain.next(i)] * (epsilon - lt2[i]) - lz[i] * (epsilon - lt1[i]))
        .collect()
}

/// The boundary constraint `H0(x) = L0(x)·(Z(x) - 1)`, with
/// `L0(x) = (x^n - 1) / (n·(x - 1))`. The coset avoids both the roots of
/// `x^n - 1` and the pole at `x = 1`.
pub fn boundary_numerator<F: FftField>(domain: &PermutationDomain<F>, lz: &[F]) -> Vec<F> {
    let n = F::from(domain.size() as u64);
    let denominators: Vec<F> = domain
        .coset_points()
        .par_iter()
        .map(|x| n * (*x - F::one()))
        .collect();
    let denominators_inv = batch_invert(&denominators);

    let vanishing = domain.vanishing_on_coset();
    lz.par_iter()
        .zip(denominators_inv.par_iter())
        .map(|(z, d)| vanishing * d * (*z - F::one()))
        .collect()
}

/// Fold the constraints with `omega` and divide them by the vanishing
/// polynomial, returning the quotient `Q = (H + ω·H0) / (x^n - 1)` in
/// coefficient form.
pub fn fold_and_divide<F: FftField>(
    domain: &PermutationDomain<F>,
    h: &[F],
    h0: &[F],
    omega: F,
) -> DensePolynomial<F> {
    let vanishing_inv = domain.vanishing_on_coset_inv();
    let evals: Vec<F> = h
        .par_iter()
        .zip(h0.par_iter())
        .map(|(h, h0)| (*h + omega * h0) * vanishing_inv)
        .collect();
    domain.coset_interpolate(evals)
}

/// Compute the quotient polynomial from the polynomials `t1`, `t2` and `Z`.
pub fn compute_quotient<F: FftField>(
    domain: &PermutationDomain<F>,
    t1: &DensePolynomial<F>,
    t2: &DensePolynomial<F>,
    z: &DensePolynomial<F>,
    epsilon: F,
    omega: F,
) -> DensePolynomial<F> {
    let lt1 = domain.coset_evaluations(t1);
    let lt2 = domain.coset_evaluations(t2);
    let lz = domain.coset_evaluations(z);

    let h = transition_numerator(domain, &lt1, &lt2, &lz, epsilon);
    let h0 = boundary_numerator(domain, &lz);
    fold_and_divide(domain, &h, &h0, omega)
}

/// Evaluate `L0` at a point outside of the domain, `None` if `x^n = 1`.
pub fn first_lagrange_at<F: Field>(size: usize, x: F) -> Option<F> {
    let vanishing = x.pow([size as u64]) - F::one();
    let denominator = F::from(size as u64) * (x - F::one());
    if vanishing.is_zero() {
        return None;
    }
    denominator.inverse().map(|d| vanishing * d)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accumulator::compute_accumulator;
    use ark_bn254::Fr;
    use ark_ff::{One, UniformRand, Zero};
    use ark_poly::Polynomial;
    use perm_utils::tests::make_test_rng;

    struct Setup {
        domain: PermutationDomain<Fr>,
        t1: DensePolynomial<Fr>,
        t2: DensePolynomial<Fr>,
        z: DensePolynomial<Fr>,
        epsilon: Fr,
    }

    fn setup(size: usize, permuted: bool) -> Setup {
        let mut rng = make_test_rng(None);
        let domain = PermutationDomain::<Fr>::new(size).unwrap();
        let t1: Vec<Fr> = (0..size).map(|_| Fr::rand(&mut rng)).collect();
        let mut t2 = t1.clone();
        t2.rotate_left(1);
        if !permuted {
            t2[0] = Fr::rand(&mut rng);
        }
        let epsilon = Fr::rand(&mut rng);
        let z = compute_accumulator(&t1, &t2, epsilon);
        Setup {
            domain,
            t1: domain.interpolate(t1),
            t2: domain.interpolate(t2),
            z: domain.interpolate(z),
            epsilon,
        }
    }

    #[test]
    fn constraints_vanish_on_the_domain() {
        let s = setup(8, true);
        let omega = s.domain.generator();
        for i in 0..8 {
            let x = s.domain.index_to_domain_point(i);
            let h = s.z.evaluate(&(omega * x)) * (s.epsilon - s.t2.evaluate(&x))
                - s.z.evaluate(&x) * (s.epsilon - s.t1.evaluate(&x));
            assert_eq!(h, Fr::zero());
        }
        assert_eq!(s.z.evaluate(&Fr::one()), Fr::one());
    }

    #[test]
    fn boundary_uses_the_first_lagrange_polynomial() {
        let s = setup(8, true);
        let lz = s.domain.coset_evaluations(&s.z);
        let h0 = boundary_numerator(&s.domain, &lz);
        for (i, x) in s.domain.coset_points().into_iter().enumerate() {
            let l0 = first_lagrange_at(8, x).unwrap();
            assert_eq!(h0[i], l0 * (s.z.evaluate(&x) - Fr::one()));
        }
        assert_eq!(first_lagrange_at(8, s.domain.generator()), None);
        assert_eq!(first_lagrange_at(8, Fr::one()), None);
    }

    #[test]
    fn quotient_of_a_permutation_is_exact() {
        let mut rng = make_test_rng(None);
        let s = setup(16, true);
        let omega = Fr::rand(&mut rng);
        let q = compute_quotient(&s.domain, &s.t1, &s.t2, &s.z, s.epsilon, omega);
        assert!(q.degree() < 16);

        // the folded constraint equals Q·(x^n - 1) everywhere
        let x = Fr::rand(&mut rng);
        let l0 = first_lagrange_at(16, x).unwrap();
        let h = s.z.evaluate(&(s.domain.generator() * x)) * (s.epsilon - s.t2.evaluate(&x))
            - s.z.evaluate(&x) * (s.epsilon - s.t1.evaluate(&x));
        let h0 = l0 * (s.z.evaluate(&x) - Fr::one());
        assert_eq!(h + omega * h0, q.evaluate(&x) * (x.pow([16]) - Fr::one()));
    }

    #[test]
    fn quotient_of_a_non_permutation_is_not() {
        let mut rng = make_test_rng(None);
        let s = setup(16, false);
        let omega = Fr::rand(&mut rng);
        let q = compute_quotient(&s.domain, &s.t1, &s.t2, &s.z, s.epsilon, omega);

        let x = Fr::rand(&mut rng);
        let l0 = first_lagrange_at(16, x).unwrap();
        let h = s.z.evaluate(&(s.domain.generator() * x)) * (s.epsilon - s.t2.evaluate(&x))
            - s.z.evaluate(&x) * (s.epsilon - s.t1.evaluate(&x));
        let h0 = l0 * (s.z.evaluate(&x) - Fr::one());
        assert_ne!(h + omega * h0, q.evaluate(&x) * (x.pow([16]) - Fr::one()));
    }

    #[test]
    fn zero_constraints_give_a_zero_quotient() {
        let domain = PermutationDomain::<Fr>::new(4).unwrap();
        let zeros = vec![Fr::zero(); 4];
        let q = fold_and_divide(&domain, &zeros, &zeros, Fr::from(5u64));
        assert!(q.is_zero());
    }
}
