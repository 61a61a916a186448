//! The `P256_XMD:SHA-256_SSWU_RO_` and `P256_XMD:SHA-256_SSWU_NU_` suites.

use crypto_bigint::{U256, U576};
use elliptic_curve::ops::Reduce;
use once_cell::sync::Lazy;
use p256::{FieldBytes, ProjectivePoint, Scalar};
use sha2::Sha256;

use crate::weierstrass::NistCurve;
use crate::Result;

/// Hash-to-curve ciphersuite identifier.
pub const HASH_TO_CURVE_ID: &str = "P256_XMD:SHA-256_SSWU_RO_";

/// Encode-to-curve ciphersuite identifier.
pub const ENCODE_TO_CURVE_ID: &str = "P256_XMD:SHA-256_SSWU_NU_";

static P256: Lazy<NistCurve<ProjectivePoint>> = Lazy::new(|| {
    NistCurve::new(
        // base field prime 2^256 - 2^224 + 2^192 + 2^96 - 1
        U576::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000ffffffff00000001000000000000000000000000ffffffffffffffffffffffff"),
        // group order
        U576::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551"),
        // curve constant b
        U576::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000005ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b"),
        -10,
        48,
    )
});

/// Hash-to-curve (uniform) mapping of `input` with `dst` onto P-256.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P256.hash_xmd::<Sha256>(input, dst)
}

/// Encode-to-curve (nonuniform) mapping of `input` with `dst` onto P-256.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn encode_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    P256.encode_xmd::<Sha256>(input, dst)
}

/// Hashes `input` with `dst` to a uniformly distributed P-256 scalar.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let bytes = P256.scalar_xmd::<Sha256>(input, dst)?;

    Ok(<Scalar as Reduce<U256>>::reduce_bytes(
        FieldBytes::from_slice(&bytes),
    ))
}
