//! `expand_message_xof` (RFC 9380, section 5.3.2).

use digest::{ExtendableOutput, Update, XofReader};

use super::Domain;
use crate::i2osp::i2osp;
use crate::{Error, Result};

/// Expands `msg` and `dst` into `len_in_bytes` bytes of uniformly random
/// output, using the extendable-output function `X`.
///
/// `security_level` is the target security level in bits (128 for SHAKE128,
/// 256 for SHAKE256); it only participates in the oversize-DST rewrite.
/// `len_in_bytes == 0` yields an empty output.
///
/// # Errors
///
/// - [`Error::ZeroLengthDst`] on an empty `dst`.
/// - [`Error::RequestedLengthTooLarge`] if `len_in_bytes > 65535`.
/// - [`Error::SecurityLevelTooHigh`] if the oversize-DST rewrite would need
///   more than 255 bytes of XOF output.
pub fn expand_message_xof<X>(
    msg: &[u8],
    dst: &[u8],
    len_in_bytes: usize,
    security_level: usize,
) -> Result<Vec<u8>>
where
    X: Default + ExtendableOutput + Update,
{
    if len_in_bytes > u16::MAX as usize {
        return Err(Error::RequestedLengthTooLarge);
    }

    let domain = Domain::xof::<X>(dst, security_level)?;

    let mut xof = X::default();
    xof.update(msg);
    xof.update(&i2osp(len_in_bytes as u64, 2)?);
    xof.update(domain.data());
    xof.update(&[domain.len()]);

    let mut uniform = vec![0u8; len_in_bytes];
    xof.finalize_xof().read(&mut uniform);

    Ok(uniform)
}
