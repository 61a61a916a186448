//! Hashing to the ristretto255 group.
//!
//! ristretto255 ships its own map from uniform bytes to group elements, so
//! the suite reduces to `expand_message_xmd` with SHA-512 producing the 64
//! uniform bytes that feed it. There is no registered RFC 9380 suite
//! identifier for this group.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use sha2::Sha512;

use crate::expand::expand_message_xmd;
use crate::Result;

/// Bytes consumed by the group's one-way map and wide scalar reduction.
const UNIFORM_LENGTH: usize = 64;

/// Uniform mapping of `input` with `dst` into the ristretto255 group.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_group(input: &[u8], dst: &[u8]) -> Result<RistrettoPoint> {
    let uniform = expand_message_xmd::<Sha512>(input, dst, UNIFORM_LENGTH)?;
    let mut wide = [0u8; UNIFORM_LENGTH];
    wide.copy_from_slice(&uniform);

    Ok(RistrettoPoint::from_uniform_bytes(&wide))
}

/// Nonuniform encoding into the ristretto255 group. The underlying map is
/// already uniform, so this is the same operation as [`hash_to_group`].
pub fn encode_to_group(input: &[u8], dst: &[u8]) -> Result<RistrettoPoint> {
    hash_to_group(input, dst)
}

/// Hashes `input` with `dst` to a uniformly distributed ristretto255
/// scalar.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let uniform = expand_message_xmd::<Sha512>(input, dst, UNIFORM_LENGTH)?;
    let mut wide = [0u8; UNIFORM_LENGTH];
    wide.copy_from_slice(&uniform);

    Ok(Scalar::from_bytes_mod_order_wide(&wide))
}
