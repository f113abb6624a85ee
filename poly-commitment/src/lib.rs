pub mod error;
pub mod kzg;
pub mod srs;

pub use error::CommitmentError;
pub use kzg::{BatchOpeningProof, OpeningProof, PairingSRS};
pub use srs::SRS;
