//! The grand-product accumulator of the argument.

use ark_ff::Field;
use perm_utils::batch_invert;

/// Compute the evaluations of the accumulator `Z` over the domain, i.e.
///
/// ```text
/// Z[0]   = 1
/// Z[i+1] = Z[i] * (ε - t1[i]) / (ε - t2[i])
/// ```
///
/// All the denominators are inverted at once. When `t2` is a permutation of
/// `t1` the running product comes back to `1` after the last element, so
/// that `Z[n] = Z[0]` with indices taken modulo `n`.
///
/// `t1` and `t2` are expected to be of the same length.
pub fn compute_accumulator<F: Field>(t1: &[F], t2: &[F], epsilon: F) -> Vec<F> {
    let n = t1.len();
    if n == 0 {
        return vec![];
    }

    let denominators: Vec<F> = t2.iter().map(|x| epsilon - x).collect();
    let denominators_inv = batch_invert(&denominators);

    let mut z = Vec::with_capacity(n);
    z.push(F::one());
    for i in 0..n - 1 {
        z.push(z[i] * (epsilon - t1[i]) * denominators_inv[i]);
    }
    z
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::{One, UniformRand};
    use perm_utils::tests::make_test_rng;

    fn wraparound(t1: &[Fr], t2: &[Fr], epsilon: Fr, z: &[Fr]) -> Fr {
        let n = z.len();
        z[n - 1] * (epsilon - t1[n - 1]) / (epsilon - t2[n - 1])
    }

    #[test]
    fn accumulator_of_a_permutation_wraps_around() {
        let mut rng = make_test_rng(None);
        let t1: Vec<Fr> = (0..16).map(|_| Fr::rand(&mut rng)).collect();
        let mut t2 = t1.clone();
        t2.reverse();
        t2.swap(3, 11);
        let epsilon = Fr::rand(&mut rng);

        let z = compute_accumulator(&t1, &t2, epsilon);
        assert_eq!(z.len(), 16);
        assert_eq!(z[0], Fr::one());
        assert_eq!(wraparound(&t1, &t2, epsilon, &z), Fr::one());
    }

    #[test]
    fn accumulator_follows_the_recurrence() {
        let mut rng = make_test_rng(None);
        let t1: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let t2: Vec<Fr> = (0..8).map(|_| Fr::rand(&mut rng)).collect();
        let epsilon = Fr::rand(&mut rng);

        let z = compute_accumulator(&t1, &t2, epsilon);
        for i in 0..7 {
            assert_eq!(z[i + 1] * (epsilon - t2[i]), z[i] * (epsilon - t1[i]));
        }
        // not a permutation
        assert_ne!(wraparound(&t1, &t2, epsilon, &z), Fr::one());
    }

    #[test]
    fn single_element() {
        let x = Fr::from(42u64);
        assert_eq!(compute_accumulator(&[x], &[x], Fr::from(7u64)), vec![Fr::one()]);
        assert!(compute_accumulator::<Fr>(&[], &[], Fr::one()).is_empty());
    }
}
