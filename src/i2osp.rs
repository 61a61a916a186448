//! I2OSP and OS2IP octet string conversion primitives (RFC 8017, section 4).

use crate::{Error, Result};

/// Encodes `value` as exactly `length` big-endian octets.
///
/// # Errors
///
/// - [`Error::LengthInvalid`] if `length` is outside `1..=4`.
/// - [`Error::ValueOutOfRange`] if `value >= 2^(8 * length)`.
pub fn i2osp(value: u64, length: usize) -> Result<Vec<u8>> {
    if !(1..=4).contains(&length) {
        return Err(Error::LengthInvalid);
    }

    if value >= 1 << (8 * length) {
        return Err(Error::ValueOutOfRange);
    }

    Ok(value.to_be_bytes()[8 - length..].to_vec())
}

/// Decodes big-endian octets back into an unsigned integer, the inverse of
/// [`i2osp`].
///
/// # Errors
///
/// [`Error::LengthInvalid`] if `octets` is empty or longer than 4 bytes.
pub fn os2ip(octets: &[u8]) -> Result<u64> {
    if octets.is_empty() || octets.len() > 4 {
        return Err(Error::LengthInvalid);
    }

    Ok(octets.iter().fold(0, |acc, &b| acc << 8 | u64::from(b)))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::{i2osp, os2ip};
    use crate::Error;

    #[test]
    fn known_values() {
        assert_eq!(i2osp(0, 1).unwrap(), [0x00]);
        assert_eq!(i2osp(1, 1).unwrap(), [0x01]);
        assert_eq!(i2osp(255, 1).unwrap(), [0xff]);
        assert_eq!(i2osp(256, 2).unwrap(), [0x01, 0x00]);
        assert_eq!(i2osp(65535, 2).unwrap(), [0xff, 0xff]);
        assert_eq!(i2osp(16_770_000, 3).unwrap(), [0xff, 0xe3, 0xd0]);
        assert_eq!(i2osp(4_294_960_000, 4).unwrap(), [0xff, 0xff, 0xe3, 0x80]);
    }

    #[test]
    fn rejects_invalid_lengths() {
        assert_eq!(i2osp(1, 0), Err(Error::LengthInvalid));
        assert_eq!(i2osp(1, 5), Err(Error::LengthInvalid));
        assert_eq!(os2ip(&[]), Err(Error::LengthInvalid));
        assert_eq!(os2ip(&[0; 5]), Err(Error::LengthInvalid));
    }

    #[test]
    fn rejects_values_out_of_range() {
        assert_eq!(i2osp(256, 1), Err(Error::ValueOutOfRange));
        assert_eq!(i2osp(65536, 2), Err(Error::ValueOutOfRange));
        assert_eq!(i2osp(1 << 24, 3), Err(Error::ValueOutOfRange));
        assert_eq!(i2osp(1 << 32, 4), Err(Error::ValueOutOfRange));
        assert_eq!(i2osp(u64::MAX, 4), Err(Error::ValueOutOfRange));
    }

    proptest! {
        #[test]
        fn round_trip(value in 0u64..=u32::MAX as u64) {
            let length = match value {
                0..=0xff => 1,
                0x100..=0xffff => 2,
                0x1_0000..=0xff_ffff => 3,
                _ => 4,
            };
            let encoded = i2osp(value, length).unwrap();
            prop_assert_eq!(encoded.len(), length);
            prop_assert_eq!(os2ip(&encoded).unwrap(), value);
        }
    }
}
