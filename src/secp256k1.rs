//! The `secp256k1_XMD:SHA-256_SSWU_RO_` and `secp256k1_XMD:SHA-256_SSWU_NU_`
//! suites, returning points from the `k256` crate.
//!
//! secp256k1 has `a = 0`, which rules Simplified SWU out directly. The map
//! instead targets the 3-isogenous curve E' (RFC 9380, section 8.7) and the
//! result is carried back through a degree-3 isogeny.

use crypto_bigint::{U256, U576};
use elliptic_curve::ops::Reduce;
use k256::{FieldBytes, ProjectivePoint, Scalar};
use once_cell::sync::Lazy;
use sha2::Sha256;

use crate::field::{Field, FieldElement};
use crate::hash_to_field::hash_to_field_xmd;
use crate::sswu::map_to_curve_sswu;
use crate::weierstrass::CurvePoint;
use crate::Result;

/// Hash-to-curve ciphersuite identifier.
pub const HASH_TO_CURVE_ID: &str = "secp256k1_XMD:SHA-256_SSWU_RO_";

/// Encode-to-curve ciphersuite identifier.
pub const ENCODE_TO_CURVE_ID: &str = "secp256k1_XMD:SHA-256_SSWU_NU_";

const SECURITY_LENGTH: usize = 48;

/// Coefficients of the four isogeny polynomials, constant term first. The
/// leading coefficient of both denominators is 1 and is added directly in
/// the evaluation.
struct IsogenyConstants {
    x_num: [FieldElement; 4],
    x_den: [FieldElement; 2],
    y_num: [FieldElement; 4],
    y_den: [FieldElement; 3],
}

struct Secp256k1 {
    field: Field,
    scalar_field: Field,
    a_prime: FieldElement,
    b_prime: FieldElement,
    z: FieldElement,
    isogeny: IsogenyConstants,
}

static SECP256K1: Lazy<Secp256k1> = Lazy::new(|| {
    // base field prime 2^256 - 2^32 - 977
    let field = Field::new(U576::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f"));
    let fe = |hex| field.element(U576::from_be_hex(hex));

    Secp256k1 {
        scalar_field: Field::new(U576::from_be_hex("00000000000000000000000000000000000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffebaaedce6af48a03bbfd25e8cd0364141")),
        // E': y^2 = x^3 + A'x + B' with A', B' from RFC 9380 section 8.7
        a_prime: fe("000000000000000000000000000000000000000000000000000000000000000000000000000000003f8731abdd661adca08a5558f0f5d272e953d363cb6f0e5d405447c01a444533"),
        b_prime: field.from_i64(1771),
        z: field.from_i64(-11),
        isogeny: IsogenyConstants {
            x_num: [
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000008e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa8c7"),
                fe("0000000000000000000000000000000000000000000000000000000000000000000000000000000007d3d4c80bc321d5b9f315cea7fd44c5d595d2fc0bf63b92dfff1044f17c6581"),
                fe("00000000000000000000000000000000000000000000000000000000000000000000000000000000534c328d23f234e6e2a413deca25caece4506144037c40314ecbd0b53d9dd262"),
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000008e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38e38daaaaa88c"),
            ],
            x_den: [
                fe("00000000000000000000000000000000000000000000000000000000000000000000000000000000d35771193d94918a9ca34ccbb7b640dd86cd409542f8487d9fe6b745781eb49b"),
                fe("00000000000000000000000000000000000000000000000000000000000000000000000000000000edadc6f64383dc1df7c4b2d51b54225406d36b641f5e41bbc52a56612a8c6d14"),
            ],
            y_num: [
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000004bda12f684bda12f684bda12f684bda12f684bda12f684bda12f684b8e38e23c"),
                fe("00000000000000000000000000000000000000000000000000000000000000000000000000000000c75e0c32d5cb7c0fa9d0a54b12a0a6d5647ab046d686da6fdffc90fc201d71a3"),
                fe("0000000000000000000000000000000000000000000000000000000000000000000000000000000029a6194691f91a73715209ef6512e576722830a201be2018a765e85a9ecee931"),
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000002f684bda12f684bda12f684bda12f684bda12f684bda12f684bda12f38e38d84"),
            ],
            y_den: [
                fe("00000000000000000000000000000000000000000000000000000000000000000000000000000000fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffff93b"),
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000007a06534bb8bdb49fd5e9e6632722c2989467c1bfc8e8d978dfb425d2685c2573"),
                fe("000000000000000000000000000000000000000000000000000000000000000000000000000000006484aa716545ca2cf3a70c3fa8fe337e0a3d21162f0d6299a7bf8192bfd2a76f"),
            ],
        },
        field,
    }
});

impl Secp256k1 {
    /// Evaluates the degree-3 isogeny from E' back to secp256k1. Fermat
    /// inversion maps zero to zero, so a vanishing denominator shows up as a
    /// zero inverse and is reported as the identity.
    fn iso_map(&self, x: &FieldElement, y: &FieldElement) -> (FieldElement, FieldElement, bool) {
        let fp = &self.field;
        let k = &self.isogeny;
        let x2 = fp.square(x);
        let x3 = fp.mul(&x2, x);

        let mut x_num = fp.mul(&k.x_num[3], &x3);
        x_num = fp.add(&x_num, &fp.mul(&k.x_num[2], &x2));
        x_num = fp.add(&x_num, &fp.mul(&k.x_num[1], x));
        x_num = fp.add(&x_num, &k.x_num[0]);

        let mut x_den = fp.add(&x2, &fp.mul(&k.x_den[1], x));
        x_den = fp.add(&x_den, &k.x_den[0]);

        let mut y_num = fp.mul(&k.y_num[3], &x3);
        y_num = fp.add(&y_num, &fp.mul(&k.y_num[2], &x2));
        y_num = fp.add(&y_num, &fp.mul(&k.y_num[1], x));
        y_num = fp.add(&y_num, &k.y_num[0]);

        let mut y_den = fp.add(&x3, &fp.mul(&k.y_den[2], &x2));
        y_den = fp.add(&y_den, &fp.mul(&k.y_den[1], x));
        y_den = fp.add(&y_den, &k.y_den[0]);

        let x_den_inv = fp.invert(&x_den);
        let y_den_inv = fp.invert(&y_den);
        let is_identity = bool::from(fp.is_zero(&x_den_inv) | fp.is_zero(&y_den_inv));

        let px = fp.mul(&x_num, &x_den_inv);
        let py = fp.mul(y, &fp.mul(&y_num, &y_den_inv));

        (px, py, is_identity)
    }

    fn map_to_curve(&self, u: &FieldElement) -> ProjectivePoint {
        let (x, y) = map_to_curve_sswu(&self.field, &self.a_prime, &self.b_prime, &self.z, u);
        let (px, py, is_identity) = self.iso_map(&x, &y);

        if is_identity {
            return ProjectivePoint::IDENTITY;
        }

        ProjectivePoint::from_uncompressed(&self.field.to_bytes(&px), &self.field.to_bytes(&py))
    }
}

/// Hash-to-curve (uniform) mapping of `input` with `dst` onto secp256k1.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn hash_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    let suite = &*SECP256K1;
    let u = hash_to_field_xmd::<Sha256>(input, dst, 2, 1, SECURITY_LENGTH, &suite.field)?;
    let q0 = suite.map_to_curve(&u[0]);
    let q1 = suite.map_to_curve(&u[1]);

    // Cofactor clearing is skipped: h = 1.
    Ok(CurvePoint::add(&q0, &q1))
}

/// Encode-to-curve (nonuniform) mapping of `input` with `dst` onto
/// secp256k1.
///
/// The DST must not be empty, and is recommended to be at least 16 bytes.
pub fn encode_to_curve(input: &[u8], dst: &[u8]) -> Result<ProjectivePoint> {
    let suite = &*SECP256K1;
    let u = hash_to_field_xmd::<Sha256>(input, dst, 1, 1, SECURITY_LENGTH, &suite.field)?;

    Ok(suite.map_to_curve(&u[0]))
}

/// Hashes `input` with `dst` to a uniformly distributed secp256k1 scalar.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let suite = &*SECP256K1;
    let u = hash_to_field_xmd::<Sha256>(input, dst, 1, 1, SECURITY_LENGTH, &suite.scalar_field)?;
    let bytes = suite.scalar_field.to_bytes(&u[0]);

    Ok(<Scalar as Reduce<U256>>::reduce_bytes(
        FieldBytes::from_slice(&bytes),
    ))
}

#[cfg(test)]
mod tests {
    use elliptic_curve::sec1::ToEncodedPoint;
    use hex_literal::hex;

    use super::{encode_to_curve, hash_to_curve, hash_to_scalar};

    const DST_RO: &[u8] = b"QUUX-V01-CS02-with-secp256k1_XMD:SHA-256_SSWU_RO_";
    const DST_NU: &[u8] = b"QUUX-V01-CS02-with-secp256k1_XMD:SHA-256_SSWU_NU_";

    struct TestVector {
        msg: &'static [u8],
        p_x: [u8; 32],
        p_y: [u8; 32],
    }

    const MSG_Q128: &[u8] = b"q128_qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqq";
    const MSG_A512: &[u8] = b"a512_aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa";

    /// RFC 9380, appendix J.8.1 (`secp256k1_XMD:SHA-256_SSWU_RO_`).
    #[test]
    fn hash_to_curve_vectors() {
        const TEST_VECTORS: &[TestVector] = &[
            TestVector {
                msg: b"",
                p_x: hex!("c1cae290e291aee617ebaef1be6d73861479c48b841eaba9b7b5852ddfeb1346"),
                p_y: hex!("64fa678e07ae116126f08b022a94af6de15985c996c3a91b64c406a960e51067"),
            },
            TestVector {
                msg: b"abc",
                p_x: hex!("3377e01eab42db296b512293120c6cee72b6ecf9f9205760bd9ff11fb3cb2c4b"),
                p_y: hex!("7f95890f33efebd1044d382a01b1bee0900fb6116f94688d487c6c7b9c8371f6"),
            },
            TestVector {
                msg: b"abcdef0123456789",
                p_x: hex!("bac54083f293f1fe08e4a70137260aa90783a5cb84d3f35848b324d0674b0e3a"),
                p_y: hex!("4436476085d4c3c4508b60fcf4389c40176adce756b398bdee27bca19758d828"),
            },
            TestVector {
                msg: MSG_Q128,
                p_x: hex!("e2167bc785333a37aa562f021f1e881defb853839babf52a7f72b102e41890e9"),
                p_y: hex!("f2401dd95cc35867ffed4f367cd564763719fbc6a53e969fb8496a1e6685d873"),
            },
            TestVector {
                msg: MSG_A512,
                p_x: hex!("e3c8d35aaaf0b9b647e88a0a0a7ee5d5bed5ad38238152e4e6fd8c1f8cb7c998"),
                p_y: hex!("8446eeb6181bf12f56a9d24e262221cc2f0c4725c7e3803024b5888ee5823aa6"),
            },
        ];

        for vector in TEST_VECTORS {
            let point = hash_to_curve(vector.msg, DST_RO).unwrap();
            let affine = point.to_affine().to_encoded_point(false);
            assert_eq!(affine.x().unwrap().as_slice(), vector.p_x);
            assert_eq!(affine.y().unwrap().as_slice(), vector.p_y);
        }
    }

    /// RFC 9380, appendix J.8.2 (`secp256k1_XMD:SHA-256_SSWU_NU_`).
    #[test]
    fn encode_to_curve_vectors() {
        const TEST_VECTORS: &[TestVector] = &[
            TestVector {
                msg: b"",
                p_x: hex!("a4792346075feae77ac3b30026f99c1441b4ecf666ded19b7522cf65c4c55c5b"),
                p_y: hex!("62c59e2a6aeed1b23be5883e833912b08ba06be7f57c0e9cdc663f31639ff3a7"),
            },
            TestVector {
                msg: b"abc",
                p_x: hex!("3f3b5842033fff837d504bb4ce2a372bfeadbdbd84a1d2b678b6e1d7ee426b9d"),
                p_y: hex!("902910d1fef15d8ae2006fc84f2a5a7bda0e0407dc913062c3a493c4f5d876a5"),
            },
            TestVector {
                msg: b"abcdef0123456789",
                p_x: hex!("07644fa6281c694709f53bdd21bed94dab995671e4a8cd1904ec4aa50c59bfdf"),
                p_y: hex!("c79f8d1dad79b6540426922f7fbc9579c3018dafeffcd4552b1626b506c21e7b"),
            },
        ];

        for vector in TEST_VECTORS {
            let point = encode_to_curve(vector.msg, DST_NU).unwrap();
            let affine = point.to_affine().to_encoded_point(false);
            assert_eq!(affine.x().unwrap().as_slice(), vector.p_x);
            assert_eq!(affine.y().unwrap().as_slice(), vector.p_y);
        }
    }

    /// Compressed end-to-end output with an application DST.
    #[test]
    fn compressed_output() {
        let point = hash_to_curve(b"input data", b"domain separation tag").unwrap();
        assert_eq!(
            point.to_affine().to_encoded_point(true).as_bytes(),
            hex!("0210dca4244e263298000ff1e9f0dfbf1c28333e1f0a252024e8b20b9921cdf3b2")
        );
    }

    #[test]
    fn hash_to_scalar_vectors() {
        let scalar = hash_to_scalar(b"", DST_RO).unwrap();
        assert_eq!(
            scalar.to_bytes().as_slice(),
            hex!("e4f4d5a1b26c3392cd16cfc34330794c6cb6210e2713334f5edbe5c39274a858")
        );

        let scalar = hash_to_scalar(b"abc", DST_RO).unwrap();
        assert_eq!(
            scalar.to_bytes().as_slice(),
            hex!("0c58c538f86c981e737271dfd1870d084a8c59556c13c1c20cc62a73c50b965f")
        );

        let scalar = hash_to_scalar(b"abcdef0123456789", DST_RO).unwrap();
        assert_eq!(
            scalar.to_bytes().as_slice(),
            hex!("aa33f45a0505ca8d11870e9769082e16e257201f0bdbf7156d7c35192beac91c")
        );
    }
}
