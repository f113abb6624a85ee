//! A non-interactive argument that two vectors of field elements are
//! permutations of each other.
//!
//! The prover commits to both vectors with KZG, then to the grand product
//!
//! ```text
//! Z[i+1] = Z[i] * (ε - t1[i]) / (ε - t2[i]),   Z[0] = 1
//! ```
//!
//! which comes back to `1` iff `t2` is a permutation of `t1`, with
//! overwhelming probability over `ε`. The recurrence and the boundary
//! condition `Z[0] = 1` are folded into a single quotient by the vanishing
//! polynomial of the domain, which the verifier checks at a random point.
//!
//! ```ignore
//! let proof = permutation::prove(&srs, &t1, &t2)?;
//! permutation::verify(&srs, &proof)?;
//! ```

pub mod accumulator;
pub mod domain;
pub mod env;
pub mod error;
pub mod oracles;
pub mod proof;
pub mod prover;
pub mod quotient;
pub mod verifier;

pub use error::PermutationError;
pub use proof::Proof;
pub use prover::prove;
pub use verifier::{verify, verify_with_size};
