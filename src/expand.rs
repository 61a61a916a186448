//! `expand_message` variants and domain separation tag handling
//! (RFC 9380, section 5.3).

mod xmd;
mod xof;

use digest::{Digest, ExtendableOutput, Update, XofReader};

pub use xmd::expand_message_xmd;
pub use xof::expand_message_xof;

use crate::{Error, Result};

/// Salt prepended when an oversized DST is rewritten.
const OVERSIZE_DST_SALT: &[u8] = b"H2C-OVERSIZE-DST-";

/// Maximum domain separation tag length.
const MAX_DST_LEN: usize = 255;

/// A domain separation tag vetted per [section 5.3.3 of RFC 9380][dst].
///
/// Empty tags are rejected outright; tags longer than 255 bytes are replaced
/// by a digest of `"H2C-OVERSIZE-DST-" || DST`.
///
/// [dst]: https://www.rfc-editor.org/rfc/rfc9380.html#name-using-dsts-longer-than-255-
#[derive(Debug)]
pub(crate) enum Domain<'a> {
    /// Longer than 255 bytes, replaced by its salted hash.
    Hashed(Vec<u8>),
    /// Used as-is.
    Raw(&'a [u8]),
}

impl<'a> Domain<'a> {
    /// Vets `dst` for use with `expand_message_xmd` over the hash `H`.
    pub fn xmd<H: Digest>(dst: &'a [u8]) -> Result<Self> {
        if dst.is_empty() {
            return Err(Error::ZeroLengthDst);
        }

        if dst.len() > MAX_DST_LEN {
            if <H as Digest>::output_size() > MAX_DST_LEN {
                return Err(Error::HashTooLong);
            }

            let digest = H::new()
                .chain_update(OVERSIZE_DST_SALT)
                .chain_update(dst)
                .finalize();

            return Ok(Self::Hashed(digest.to_vec()));
        }

        Ok(Self::Raw(dst))
    }

    /// Vets `dst` for use with `expand_message_xof` over the XOF `X`, whose
    /// rewrite output length is `ceil(2k / 8)` for the target security level
    /// `k` in bits.
    pub fn xof<X>(dst: &'a [u8], security_level: usize) -> Result<Self>
    where
        X: Default + ExtendableOutput + Update,
    {
        if dst.is_empty() {
            return Err(Error::ZeroLengthDst);
        }

        if dst.len() > MAX_DST_LEN {
            let length = (2 * security_level).div_ceil(8);
            if length > MAX_DST_LEN {
                return Err(Error::SecurityLevelTooHigh);
            }

            let mut xof = X::default();
            xof.update(OVERSIZE_DST_SALT);
            xof.update(dst);

            let mut data = vec![0u8; length];
            xof.finalize_xof().read(&mut data);

            return Ok(Self::Hashed(data));
        }

        Ok(Self::Raw(dst))
    }

    /// The vetted tag bytes.
    pub fn data(&self) -> &[u8] {
        match self {
            Self::Hashed(data) => data,
            Self::Raw(data) => data,
        }
    }

    /// The length octet of the prime-encoded tag `DST || I2OSP(len(DST), 1)`.
    /// Both arms fit in a `u8` by construction.
    pub fn len(&self) -> u8 {
        self.data().len() as u8
    }
}
