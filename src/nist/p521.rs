//! The `P521_XMD:SHA-512_SSWU_RO_` and `P521_XMD:SHA-512_SSWU_NU_` suites.

use crypto_bigint::U576;
use elliptic_curve::ops::Reduce;
use once_cell::sync::Lazy;
use p521::{FieldBytes, ProjectivePoint, Scalar};
use sha2::Sha512;

use crate::weierstrass::NistCurve;
use crate::Result;

/// Hash-to-curve ciphersuite identifier.
pub const HASH_TO_CURVE_ID: &str = "P521_XMD:SHA-512_SSWU_RO_";

/// Encode-to-curve ciphersuite identifier.
pub const ENCODE_TO_CURVE_ID: &str = "P521_XMD:SHA-512_SSWU_NU_";

static P521: Lazy<NistCurve<ProjectivePoint>> = Lazy::new(|| {
    NistCurve::new(
        // base field prime 2^521 - 1
        U576::from_be_hex("00000000000001ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff"),
        // group order
        U576::from_be_hex("0000000000000001fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffa51868783bf2f966b7fcc0148f709a5d03bb5c9b8899c47aebb6fb71e91386409"),
        // curve constant b
        U576::from_be_hex("0000000000000051953eb9618e1c9a1f929a21a0b68540eea2da725b99b315f3b8b489918ef109e156193951ec7e937b1652c0bd3bb1bf073573df883d2c34f1ef451fd46b503f00"),
        -4,
        98,
    )
});

/// Hash-to-curve (uniform) mapping of `input` with `dst` onto P-521.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P521.hash_xmd::<Sha512>(input, dst)
}

/// Encode-to-curve (nonuniform) mapping of `input` with `dst` onto P-521.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn encode_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P521.encode_xmd::<Sha512>(input, dst)
}

/// Hashes `input` with `dst` to a uniformly distributed P-521 scalar.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let bytes = P521.scalar_xmd::<Sha512>(input, dst)?;

    Ok(<Scalar as Reduce<U576>>::reduce_bytes(
        FieldBytes::from_slice(&bytes),
    ))
}
