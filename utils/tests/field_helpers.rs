use ark_bn254::Fr;
use ark_ff::{Field, One, UniformRand, Zero};
use perm_utils::{
    batch_invert,
    field_helpers::{FieldHelpersError, Result},
    serialization::SerdeAs,
    tests::make_test_rng,
    FieldHelpers,
};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

#[test]
fn field_bytes_are_fixed_width_big_endian() {
    assert_eq!(Fr::size_in_bytes(), 32);

    let one = Fr::one().to_bytes_be();
    assert_eq!(one.len(), 32);
    assert_eq!(one[31], 1);
    assert!(one[..31].iter().all(|b| *b == 0));

    let x = Fr::from(0x0102u64).to_bytes_be();
    assert_eq!(&x[30..], &[0x01, 0x02]);
}

#[test]
fn field_bytes_decoding() {
    let mut rng = make_test_rng(None);
    let x = Fr::rand(&mut rng);
    assert_eq!(Fr::from_bytes_be(&x.to_bytes_be()), Ok(x));

    assert_eq!(
        Fr::from_bytes_be(&[1, 2, 3]),
        Err(FieldHelpersError::DeserializeBytes(32, 3))
    );

    // the modulus itself is not a canonical encoding
    assert_eq!(
        Fr::from_bytes_be(&[0xff; 32]),
        Err(FieldHelpersError::NonCanonical)
    );

    fn lifetime_test() -> Result<Fr> {
        let bytes = [0; 32];
        Fr::from_bytes_be(&bytes)
    }
    assert_eq!(lifetime_test(), Ok(Fr::zero()));
}

#[test]
fn reduced_decoding_accepts_any_digest() {
    let digest = [0xffu8; 32];
    let x = Fr::from_be_bytes_reduced(&digest);
    // 2^256 - 1 is larger than the modulus, so the result must be reduced
    assert!(Fr::from_bytes_be(&digest).is_err());
    assert_eq!(Fr::from_bytes_be(&x.to_bytes_be()), Ok(x));
}

#[test]
fn batch_invert_matches_single_inversions() {
    let mut rng = make_test_rng(None);
    let v: Vec<Fr> = (0..33).map(|_| Fr::rand(&mut rng)).collect();
    let inv = batch_invert(&v);
    assert_eq!(inv.len(), v.len());
    for (x, x_inv) in v.iter().zip(inv.iter()) {
        assert_eq!(x.inverse(), Some(*x_inv));
    }
}

#[test]
fn batch_invert_maps_zero_to_zero() {
    let v = vec![Fr::from(2u64), Fr::zero(), Fr::from(4u64)];
    let inv = batch_invert(&v);
    assert_eq!(inv[0] * v[0], Fr::one());
    assert_eq!(inv[1], Fr::zero());
    assert_eq!(inv[2] * v[2], Fr::one());
    assert!(batch_invert::<Fr>(&[]).is_empty());
}

#[serde_as]
#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Wrapper {
    #[serde_as(as = "SerdeAs")]
    single: Fr,
    #[serde_as(as = "Vec<SerdeAs>")]
    many: Vec<Fr>,
}

#[test]
fn serde_adapter() {
    let mut rng = make_test_rng(None);
    let value = Wrapper {
        single: Fr::rand(&mut rng),
        many: (0..4).map(|_| Fr::rand(&mut rng)).collect(),
    };
    let json = serde_json::to_string(&value).expect("serializes");
    let back: Wrapper = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, value);
}
