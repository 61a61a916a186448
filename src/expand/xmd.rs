//! `expand_message_xmd` (RFC 9380, section 5.3.1).

use digest::core_api::BlockSizeUser;
use digest::Digest;

use super::Domain;
use crate::i2osp::i2osp;
use crate::{Error, Result};

/// Expands `msg` and `dst` into `len_in_bytes` bytes of uniformly random
/// output, using the fixed-output hash `H` in the Merkle-Damgard expander
/// construction.
///
/// A `dst` shorter than 16 bytes is accepted but gives weak domain
/// separation and should be avoided. `len_in_bytes == 0` yields an empty
/// output.
///
/// # Errors
///
/// - [`Error::ZeroLengthDst`] on an empty `dst`.
/// - [`Error::RequestedLengthTooLarge`] if `len_in_bytes > 65535` or the
///   expansion would need more than 255 hash blocks.
pub fn expand_message_xmd<H>(msg: &[u8], dst: &[u8], len_in_bytes: usize) -> Result<Vec<u8>>
where
    H: Digest + BlockSizeUser,
{
    let domain = Domain::xmd::<H>(dst)?;

    let b_len = <H as Digest>::output_size();
    let ell = len_in_bytes.div_ceil(b_len);
    if ell > 255 || len_in_bytes > u16::MAX as usize {
        return Err(Error::RequestedLengthTooLarge);
    }

    let z_pad = vec![0u8; <H as BlockSizeUser>::block_size()];
    let l_i_b = i2osp(len_in_bytes as u64, 2)?;

    let b_0 = H::new()
        .chain_update(z_pad)
        .chain_update(msg)
        .chain_update(&l_i_b)
        .chain_update([0u8])
        .chain_update(domain.data())
        .chain_update([domain.len()])
        .finalize();

    let mut b_i = H::new()
        .chain_update(&b_0)
        .chain_update([1u8])
        .chain_update(domain.data())
        .chain_update([domain.len()])
        .finalize();

    let mut uniform = Vec::with_capacity(ell.max(1) * b_len);
    uniform.extend_from_slice(&b_i);

    for i in 2..=ell {
        let mut prev = b_0.clone();
        for (acc, byte) in prev.iter_mut().zip(&b_i) {
            *acc ^= byte;
        }

        b_i = H::new()
            .chain_update(prev)
            .chain_update([i as u8])
            .chain_update(domain.data())
            .chain_update([domain.len()])
            .finalize();
        uniform.extend_from_slice(&b_i);
    }

    uniform.truncate(len_in_bytes);

    Ok(uniform)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;
    use sha2::{Sha256, Sha512};

    use super::expand_message_xmd;
    use crate::Error;

    const DST_SHA256: &[u8] = b"QUUX-V01-CS02-with-expander-SHA256-128";
    const DST_SHA512: &[u8] = b"QUUX-V01-CS02-with-expander-SHA512-256";

    struct TestVector {
        msg: &'static [u8],
        uniform_bytes: &'static [u8],
    }

    const MSG_Q128: &[u8] = b"q128_qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq";
    const MSG_A512: &[u8] = b"a512_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// RFC 9380, appendix K.1 (SHA-256, L = 32 and L = 128).
    #[test]
    fn rfc9380_k1_sha256() {
        const VECTORS_32: &[TestVector] = &[
            TestVector {
                msg: b"",
                uniform_bytes: &hex!(
                    "68a985b87eb6b46952128911f2a4412bbc302a9d759667f87f7a21d803f07235"
                ),
            },
            TestVector {
                msg: b"abc",
                uniform_bytes: &hex!(
                    "d8ccab23b5985ccea865c6c97b6e5b8350e794e603b4b97902f53a8a0d605615"
                ),
            },
            TestVector {
                msg: b"abcdef0123456789",
                uniform_bytes: &hex!(
                    "eff31487c770a893cfb36f912fbfcbff40d5661771ca4b2cb4eafe524333f5c1"
                ),
            },
            TestVector {
                msg: MSG_Q128,
                uniform_bytes: &hex!(
                    "b23a1d2b4d97b2ef7785562a7e8bac7eed54ed6e97e29aa51bfe3f12ddad1ff9"
                ),
            },
            TestVector {
                msg: MSG_A512,
                uniform_bytes: &hex!(
                    "4623227bcc01293b8c130bf771da8c298dede7383243dc0993d2d94823958c4c"
                ),
            },
        ];

        for vector in VECTORS_32 {
            assert_eq!(
                expand_message_xmd::<Sha256>(vector.msg, DST_SHA256, 32).unwrap(),
                vector.uniform_bytes
            );
        }

        assert_eq!(
            expand_message_xmd::<Sha256>(b"", DST_SHA256, 128).unwrap(),
            hex!(
                "af84c27ccfd45d41914fdff5df25293e221afc53d8ad2ac0
                 6d5e3e29485dadbee0d121587713a3e0dd4d5e69e93eb7cd4f5df4
                 cd103e188cf60cb02edc3edf18eda8576c412b18ffb658e3dd6ec8
                 49469b979d444cf7b26911a08e63cf31f9dcc541708d3491184472
                 c2c29bb749d4286b004ceb5ee6b9a7fa5b646c993f0ced"
            )
        );
    }

    /// RFC 9380, appendix K.2 (SHA-256 with a 256-byte DST).
    #[test]
    fn rfc9380_k2_sha256_long_dst() {
        let long_dst = {
            let mut dst = b"QUUX-V01-CS02-with-expander-SHA256-128-long-DST-".to_vec();
            dst.resize(256, b'1');
            dst
        };

        const VECTORS_32: &[TestVector] = &[
            TestVector {
                msg: b"",
                uniform_bytes: &hex!(
                    "e8dc0c8b686b7ef2074086fbdd2f30e3f8bfbd3bdf177f73f04b97ce618a3ed3"
                ),
            },
            TestVector {
                msg: b"abc",
                uniform_bytes: &hex!(
                    "52dbf4f36cf560fca57dedec2ad924ee9c266341d8f3d6afe5171733b16bbb12"
                ),
            },
            TestVector {
                msg: b"abcdef0123456789",
                uniform_bytes: &hex!(
                    "35387dcf22618f3728e6c686490f8b431f76550b0b2c61cbc1ce7001536f4521"
                ),
            },
        ];

        for vector in VECTORS_32 {
            assert_eq!(
                expand_message_xmd::<Sha256>(vector.msg, &long_dst, 32).unwrap(),
                vector.uniform_bytes
            );
        }

        assert_eq!(
            expand_message_xmd::<Sha256>(b"", &long_dst, 128).unwrap(),
            hex!(
                "14604d85432c68b757e485c8894db3117992fc57e0e136f7
                 1ad987f789a0abc287c47876978e2388a02af86b1e8d1342e5ce4f
                 7aaa07a87321e691f6fba7e0072eecc1218aebb89fb14a0662322d
                 5edbd873f0eb35260145cd4e64f748c5dfe60567e126604bcab1a3
                 ee2dc0778102ae8a5cfd1429ebc0fa6bf1a53c36f55dfc"
            )
        );
    }

    /// RFC 9380, appendix K.3 (SHA-512, L = 32).
    #[test]
    fn rfc9380_k3_sha512() {
        const VECTORS_32: &[TestVector] = &[
            TestVector {
                msg: b"",
                uniform_bytes: &hex!(
                    "6b9a7312411d92f921c6f68ca0b6380730a1a4d982c507211a90964c394179ba"
                ),
            },
            TestVector {
                msg: b"abc",
                uniform_bytes: &hex!(
                    "0da749f12fbe5483eb066a5f595055679b976e93abe9be6f0f6318bce7aca8dc"
                ),
            },
            TestVector {
                msg: b"abcdef0123456789",
                uniform_bytes: &hex!(
                    "087e45a86e2939ee8b91100af1583c4938e0f5fc6c9db4b107b83346bc967f58"
                ),
            },
            TestVector {
                msg: MSG_Q128,
                uniform_bytes: &hex!(
                    "7336234ee9983902440f6bc35b348352013becd88938d2afec44311caf8356b3"
                ),
            },
            TestVector {
                msg: MSG_A512,
                uniform_bytes: &hex!(
                    "57b5f7e766d5be68a6bfe1768e3c2b7f1228b3e4b3134956dd73a59b954c66f4"
                ),
            },
        ];

        for vector in VECTORS_32 {
            assert_eq!(
                expand_message_xmd::<Sha512>(vector.msg, DST_SHA512, 32).unwrap(),
                vector.uniform_bytes
            );
        }
    }

    #[test]
    fn output_length_is_exact() {
        for len in [0, 1, 31, 32, 33, 64, 255, 256, 1024] {
            assert_eq!(
                expand_message_xmd::<Sha256>(b"test", DST_SHA256, len)
                    .unwrap()
                    .len(),
                len
            );
        }
    }

    #[test]
    fn zero_length_output_is_empty() {
        assert!(expand_message_xmd::<Sha256>(b"test", DST_SHA256, 0)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn rejects_oversized_requests() {
        assert_eq!(
            expand_message_xmd::<Sha256>(b"test", DST_SHA256, 65536).unwrap_err(),
            Error::RequestedLengthTooLarge
        );
        // 256 SHA-256 blocks
        assert_eq!(
            expand_message_xmd::<Sha256>(b"test", DST_SHA256, 255 * 32 + 1).unwrap_err(),
            Error::RequestedLengthTooLarge
        );
    }

    #[test]
    fn rejects_empty_dst() {
        assert_eq!(
            expand_message_xmd::<Sha256>(b"test", b"", 32).unwrap_err(),
            Error::ZeroLengthDst
        );
    }
}
