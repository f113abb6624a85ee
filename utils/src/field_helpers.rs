//! Helpers for arkworks prime field elements: a fixed-width big-endian byte
//! encoding and batched inversion.

use ark_ff::{batch_inversion, BigInteger, Field, PrimeField};
use thiserror::Error;

// Field helpers error
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldHelpersError {
    #[error("failed to deserialize field bytes (expected {0} bytes, got {1})")]
    DeserializeBytes(usize, usize),
    #[error("the encoded integer is not smaller than the field modulus")]
    NonCanonical,
}

pub type Result<T> = std::result::Result<T, FieldHelpersError>;

/// Field element helpers
pub trait FieldHelpers<F> {
    /// Deserialize from a big-endian buffer of exactly [FieldHelpers::size_in_bytes] bytes.
    /// Integers that are not reduced modulo the field order are rejected.
    fn from_bytes_be(bytes: &[u8]) -> Result<F>;

    /// Interpret an arbitrary big-endian buffer as an integer and reduce it
    /// modulo the field order. Used to map hash digests to challenges.
    fn from_be_bytes_reduced(bytes: &[u8]) -> F;

    /// Serialize to a big-endian buffer of [FieldHelpers::size_in_bytes] bytes
    fn to_bytes_be(self) -> Vec<u8>;

    /// Field size in bytes
    fn size_in_bytes() -> usize;
}

impl<F: PrimeField> FieldHelpers<F> for F {
    fn from_bytes_be(bytes: &[u8]) -> Result<F> {
        let size = Self::size_in_bytes();
        if bytes.len() != size {
            return Err(FieldHelpersError::DeserializeBytes(size, bytes.len()));
        }
        let elm = F::from_be_bytes_mod_order(bytes);
        if elm.to_bytes_be() != bytes {
            return Err(FieldHelpersError::NonCanonical);
        }
        Ok(elm)
    }

    fn from_be_bytes_reduced(bytes: &[u8]) -> F {
        F::from_be_bytes_mod_order(bytes)
    }

    fn to_bytes_be(self) -> Vec<u8> {
        let mut bytes = self.into_bigint().to_bytes_be();
        // the bigint may carry more limbs than the modulus needs
        bytes.split_off(bytes.len() - Self::size_in_bytes())
    }

    fn size_in_bytes() -> usize {
        (F::MODULUS_BIT_SIZE as usize + 7) / 8
    }
}

/// Returns the vector of inverses of `v`, using a single field inversion and
/// `O(n)` multiplications (Montgomery's trick).
/// Zero entries have no inverse and are mapped to zero.
pub fn batch_invert<F: Field>(v: &[F]) -> Vec<F> {
    let mut res = v.to_vec();
    batch_inversion(&mut res);
    res
}
