//! Hashing byte strings to field elements (RFC 9380, section 5.2).

use digest::core_api::BlockSizeUser;
use digest::{Digest, ExtendableOutput, Update};

use crate::expand::{expand_message_xmd, expand_message_xof};
use crate::field::{Field, FieldElement, REDUCE_BYTES};
use crate::{Error, Result};

/// Hashes `input` and `dst` to `count * ext` elements of `field`, expanding
/// through `expand_message_xmd` over the hash `H` and reducing each
/// `l`-byte slice modulo the field prime.
///
/// The bias of each element from uniform is at most `2^-k` when
/// `l >= ceil((ceil(log2(p)) + k) / 8)`; ciphersuites pass the RFC-mandated
/// value for their curve (48, 72 or 98).
///
/// # Errors
///
/// - [`Error::InvalidFieldByteLength`] when `l` is zero or exceeds the
///   reduction buffer.
/// - Any error of [`expand_message_xmd`].
pub fn hash_to_field_xmd<H>(
    input: &[u8],
    dst: &[u8],
    count: usize,
    ext: usize,
    l: usize,
    field: &Field,
) -> Result<Vec<FieldElement>>
where
    H: Digest + BlockSizeUser,
{
    if l == 0 || l > REDUCE_BYTES {
        return Err(Error::InvalidFieldByteLength);
    }

    let uniform = expand_message_xmd::<H>(input, dst, count * ext * l)?;

    uniform.chunks_exact(l).map(|okm| field.reduce(okm)).collect()
}

/// [`hash_to_field_xmd`] with `expand_message_xof` over the XOF `X` at the
/// given target security level in bits.
///
/// # Errors
///
/// - [`Error::InvalidFieldByteLength`] when `l` is zero or exceeds the
///   reduction buffer.
/// - Any error of [`expand_message_xof`].
pub fn hash_to_field_xof<X>(
    input: &[u8],
    dst: &[u8],
    count: usize,
    ext: usize,
    l: usize,
    security_level: usize,
    field: &Field,
) -> Result<Vec<FieldElement>>
where
    X: Default + ExtendableOutput + Update,
{
    if l == 0 || l > REDUCE_BYTES {
        return Err(Error::InvalidFieldByteLength);
    }

    let uniform = expand_message_xof::<X>(input, dst, count * ext * l, security_level)?;

    uniform.chunks_exact(l).map(|okm| field.reduce(okm)).collect()
}
