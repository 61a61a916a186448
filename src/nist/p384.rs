//! The `P384_XMD:SHA-384_SSWU_RO_` and `P384_XMD:SHA-384_SSWU_NU_` suites.

use crypto_bigint::{U384, U576};
use elliptic_curve::ops::Reduce;
use once_cell::sync::Lazy;
use p384::{FieldBytes, ProjectivePoint, Scalar};
use sha2::Sha384;

use crate::weierstrass::NistCurve;
use crate::Result;

/// Hash-to-curve ciphersuite identifier.
pub const HASH_TO_CURVE_ID: &str = "P384_XMD:SHA-384_SSWU_RO_";

/// Encode-to-curve ciphersuite identifier.
pub const ENCODE_TO_CURVE_ID: &str = "P384_XMD:SHA-384_SSWU_NU_";

static P384: Lazy<NistCurve<ProjectivePoint>> = Lazy::new(|| {
    NistCurve::new(
        // base field prime 2^384 - 2^128 - 2^96 + 2^32 - 1
        U576::from_be_hex("000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffeffffffff0000000000000000ffffffff"),
        // group order
        U576::from_be_hex("000000000000000000000000000000000000000000000000ffffffffffffffffffffffffffffffffffffffffffffffffc7634d81f4372ddf581a0db248b0a77aecec196accc52973"),
        // curve constant b
        U576::from_be_hex("000000000000000000000000000000000000000000000000b3312fa7e23ee7e4988e056be3f82d19181d9c6efe8141120314088f5013875ac656398d8a2ed19d2a85c8edd3ec2aef"),
        -12,
        72,
    )
});

/// Hash-to-curve (uniform) mapping of `input` with `dst` onto P-384.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P384.hash_xmd::<Sha384>(input, dst)
}

/// Encode-to-curve (nonuniform) mapping of `input` with `dst` onto P-384.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn encode_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P384.encode_xmd::<Sha384>(input, dst)
}

/// Hashes `input` with `dst` to a uniformly distributed P-384 scalar.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let bytes = P384.scalar_xmd::<Sha384>(input, dst)?;

    Ok(<Scalar as Reduce<U384>>::reduce_bytes(
        FieldBytes::from_slice(&bytes),
    ))
}
