//! Bridges between [arkworks](http://arkworks.rs/) serialization
//! ([CanonicalSerialize] and [CanonicalDeserialize]) and [serde].

use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};
use serde_with::{Bytes, DeserializeAs, SerializeAs};

/// Use [SerdeAs] with [serde_with] to (de)serialize any arkworks type, or a
/// container of arkworks types (`Vec`, arrays, ...), through its compressed
/// canonical encoding:
///
/// `#[serde_as(as = "perm_utils::serialization::SerdeAs")]`
/// `#[serde_as(as = "Vec<perm_utils::serialization::SerdeAs>")]`
pub struct SerdeAs;

impl<T> SerializeAs<T> for SerdeAs
where
    T: CanonicalSerialize,
{
    fn serialize_as<S>(val: &T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut bytes = Vec::with_capacity(val.compressed_size());
        val.serialize_compressed(&mut bytes)
            .map_err(serde::ser::Error::custom)?;
        Bytes::serialize_as(&bytes, serializer)
    }
}

impl<'de, T> DeserializeAs<'de, T> for SerdeAs
where
    T: CanonicalDeserialize,
{
    fn deserialize_as<D>(deserializer: D) -> Result<T, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: Vec<u8> = Bytes::deserialize_as(deserializer)?;
        T::deserialize_compressed(&mut bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}
