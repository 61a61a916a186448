//! The `edwards25519_XMD:SHA-512_ELL2_RO_` and
//! `edwards25519_XMD:SHA-512_ELL2_NU_` suites, returning points and scalars
//! from `curve25519-dalek`.
//!
//! Field elements are mapped with Elligator 2 onto Curve25519 in Montgomery
//! form, lifted to edwards25519 through the birational map, and multiplied
//! by the cofactor 8 so the result lies in the prime-order subgroup.

use crypto_bigint::U576;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use once_cell::sync::Lazy;
use sha2::Sha512;
use subtle::ConditionallySelectable;

use crate::field::{Field, FieldElement};
use crate::hash_to_field::hash_to_field_xmd;
use crate::Result;

/// Hash-to-curve ciphersuite identifier.
pub const HASH_TO_CURVE_ID: &str = "edwards25519_XMD:SHA-512_ELL2_RO_";

/// Encode-to-curve ciphersuite identifier.
pub const ENCODE_TO_CURVE_ID: &str = "edwards25519_XMD:SHA-512_ELL2_NU_";

const SECURITY_LENGTH: usize = 48;

/// Canonical encoding length of both field elements and scalars.
const ENCODED_LENGTH: usize = 32;

struct Edwards25519 {
    field: Field,
    scalar_field: Field,
    /// The Montgomery curve constant A = 486662.
    mont_a: FieldElement,
    /// `sqrt(-1) = 2^((p - 1) / 4)`.
    sqrt_m1: FieldElement,
    /// `sqrt(-486664)`, the even root; scales `u / v` in the birational map.
    sqrt_neg_486664: FieldElement,
    /// Square-root exponent `(p + 3) / 8` for this `5 (mod 8)` prime.
    sqrt_exponent: U576,
}

static EDWARDS25519: Lazy<Edwards25519> = Lazy::new(|| {
    // base field prime 2^255 - 19
    let prime = U576::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000007fffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffed");
    let field = Field::new(prime);

    Edwards25519 {
        // group order 2^252 + 27742317777372353535851937790883648493
        scalar_field: Field::new(U576::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000001000000000000000000000000000000014def9dea2f79cd65812631a5cf5d3ed")),
        mont_a: field.from_i64(486_662),
        sqrt_m1: field.element(U576::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000002b8324804fc1df0b2b4d00993dfbd7a72f431806ad2fe478c4ee1b274a0ea0b0")),
        sqrt_neg_486664: field.element(U576::from_be_hex("000000000000000000000000000000000000000000000000000000000000000000000000000000000f26edf460a006bbd27b08dc03fc4f7ec5a1d3d14b7d1a82cc6e04aaff457e06")),
        sqrt_exponent: prime.shr_vartime(3).wrapping_add(&U576::ONE),
        field,
    }
});

impl Edwards25519 {
    /// Square root for `p = 5 (mod 8)`: the candidate `a^((p + 3) / 8)` is
    /// corrected by `sqrt(-1)` when its square misses, then normalized to
    /// the even root. Valid whenever `a` is a square.
    fn sqrt(&self, a: &FieldElement) -> FieldElement {
        let fp = &self.field;
        let candidate = fp.pow(a, &self.sqrt_exponent);
        let corrected = fp.mul(&candidate, &self.sqrt_m1);
        let root = fp.cond_mov(
            &corrected,
            &candidate,
            fp.are_equal(&fp.square(&candidate), a),
        );

        fp.cond_mov(&root, &fp.neg(&root), fp.sgn0(&root))
    }

    /// Elligator 2 onto Curve25519 in Montgomery form
    /// (RFC 9380, section 6.7.1, with Z = 2).
    fn elligator2(&self, u: &FieldElement) -> (FieldElement, FieldElement) {
        let fp = &self.field;
        let one = fp.one();
        let minus_a = fp.neg(&self.mont_a);

        let mut tv1 = fp.square(u);
        tv1 = fp.add(&tv1, &tv1); // Z * u^2
        // Z * u^2 == -1 would zero the denominator below; the map pins tv1
        // to 0 instead.
        tv1 = fp.cond_mov(&tv1, &fp.zero(), fp.are_equal(&tv1, &fp.neg(&one)));

        let x1 = fp.mul(&minus_a, &fp.invert(&fp.add(&tv1, &one))); // -A / (1 + Z * u^2)

        // gx1 = x1 * (x1 * (x1 + A) + 1) = x1^3 + A * x1^2 + x1
        let mut gx1 = fp.add(&x1, &self.mont_a);
        gx1 = fp.mul(&gx1, &x1);
        gx1 = fp.add(&gx1, &one);
        gx1 = fp.mul(&gx1, &x1);

        let x2 = fp.sub(&minus_a, &x1); // -x1 - A
        let gx2 = fp.mul(&tv1, &gx1);

        // (x1, -sqrt(gx1)) when gx1 is square, (x2, +sqrt(gx2)) otherwise
        let e = fp.is_square(&gx1);
        let x = fp.cond_mov(&x2, &x1, e);
        let gx = fp.cond_mov(&gx2, &gx1, e);
        let root = self.sqrt(&gx);
        let y = fp.cond_mov(&root, &fp.neg(&root), e);

        (x, y)
    }

    /// The birational map from Curve25519 `(u, v)` to edwards25519 `(x, y)`:
    /// `x = sqrt(-486664) * u / v`, `y = (u - 1) / (u + 1)`.
    fn montgomery_to_edwards(
        &self,
        u: &FieldElement,
        v: &FieldElement,
    ) -> (FieldElement, FieldElement) {
        let fp = &self.field;
        let one = fp.one();

        let x = fp.mul(&fp.mul(u, &fp.invert(v)), &self.sqrt_neg_486664);
        let y = fp.mul(&fp.sub(u, &one), &fp.invert(&fp.add(u, &one)));

        (x, y)
    }

    /// Builds the extended-coordinate dalek point from affine `(x, y)`
    /// through the canonical compressed encoding: little-endian `y` with the
    /// sign of `x` in the top bit.
    fn edwards_point(&self, x: &FieldElement, y: &FieldElement) -> EdwardsPoint {
        let fp = &self.field;

        let mut compressed = [0u8; ENCODED_LENGTH];
        for (out, byte) in compressed.iter_mut().zip(fp.to_bytes(y).iter().rev()) {
            *out = *byte;
        }
        compressed[ENCODED_LENGTH - 1] |= u8::conditional_select(&0, &0x80, fp.sgn0(x));

        CompressedEdwardsY(compressed)
            .decompress()
            .expect("mapped coordinates are on the curve")
    }

    fn map_to_curve(&self, u: &FieldElement) -> EdwardsPoint {
        let (mont_u, mont_v) = self.elligator2(u);
        let (x, y) = self.montgomery_to_edwards(&mont_u, &mont_v);

        self.edwards_point(&x, &y)
    }
}

/// Hash-to-curve (uniform) mapping of `input` with `dst` onto edwards25519.
///
/// The result lies in the prime-order subgroup. The DST must not be empty,
/// and is recommended to be at least 16 bytes.
pub fn hash_to_curve(input: &[u8], dst: &[u8]) -> Result<EdwardsPoint> {
    let suite = &*EDWARDS25519;
    let u = hash_to_field_xmd::<Sha512>(input, dst, 2, 1, SECURITY_LENGTH, &suite.field)?;
    let q0 = suite.map_to_curve(&u[0]);
    let q1 = suite.map_to_curve(&u[1]);

    Ok((q0 + q1).mul_by_cofactor())
}

/// Encode-to-curve (nonuniform) mapping of `input` with `dst` onto
/// edwards25519.
///
/// The result lies in the prime-order subgroup. The DST must not be empty,
/// and is recommended to be at least 16 bytes.
pub fn encode_to_curve(input: &[u8], dst: &[u8]) -> Result<EdwardsPoint> {
    let suite = &*EDWARDS25519;
    let u = hash_to_field_xmd::<Sha512>(input, dst, 1, 1, SECURITY_LENGTH, &suite.field)?;

    Ok(suite.map_to_curve(&u[0]).mul_by_cofactor())
}

/// Hashes `input` with `dst` to a uniformly distributed scalar of the
/// edwards25519 prime-order group.
pub fn hash_to_scalar(input: &[u8], dst: &[u8]) -> Result<Scalar> {
    let suite = &*EDWARDS25519;
    let u = hash_to_field_xmd::<Sha512>(input, dst, 1, 1, SECURITY_LENGTH, &suite.scalar_field)?;

    // hash_to_field emits big-endian bytes; the dalek scalar type encodes
    // little-endian.
    let bytes = suite.scalar_field.to_bytes(&u[0]);
    let mut little_endian = [0u8; ENCODED_LENGTH];
    for (out, byte) in little_endian.iter_mut().zip(bytes.iter().rev()) {
        *out = *byte;
    }

    Ok(Option::from(Scalar::from_canonical_bytes(little_endian))
        .expect("reduced scalar is canonical"))
}
