//! Shared plumbing for the short-Weierstrass ciphersuites.

use core::marker::PhantomData;

use crypto_bigint::U576;
use digest::core_api::BlockSizeUser;
use digest::Digest;

use crate::field::{Field, FieldElement};
use crate::hash_to_field::hash_to_field_xmd;
use crate::sswu::map_to_curve_sswu;
use crate::Result;

/// The capability set a ciphersuite needs from an external curve
/// implementation: point addition, canonical encoding, and construction
/// from affine coordinates through the uncompressed SEC1 encoding
/// `0x04 || X || Y`.
pub trait CurvePoint: Sized {
    /// Adds two group elements.
    fn add(&self, other: &Self) -> Self;

    /// The uncompressed SEC1 encoding of the point.
    fn to_bytes(&self) -> Vec<u8>;

    /// Builds the point from its affine coordinates, each encoded as
    /// canonical fixed-width big-endian bytes.
    ///
    /// # Panics
    ///
    /// If `(x, y)` does not satisfy the curve equation. The mappings in this
    /// crate only produce on-curve coordinates.
    fn from_uncompressed(x: &[u8], y: &[u8]) -> Self;
}

macro_rules! impl_curve_point {
    ($curve:ident) => {
        impl CurvePoint for $curve::ProjectivePoint {
            fn add(&self, other: &Self) -> Self {
                self + other
            }

            fn to_bytes(&self) -> Vec<u8> {
                use elliptic_curve::sec1::ToEncodedPoint;

                self.to_affine().to_encoded_point(false).as_bytes().to_vec()
            }

            fn from_uncompressed(x: &[u8], y: &[u8]) -> Self {
                use elliptic_curve::sec1::FromEncodedPoint;

                let encoded = $curve::EncodedPoint::from_affine_coordinates(
                    $curve::FieldBytes::from_slice(x),
                    $curve::FieldBytes::from_slice(y),
                    false,
                );

                Option::from(Self::from_encoded_point(&encoded))
                    .expect("mapped coordinates are on the curve")
            }
        }
    };
}

#[cfg(feature = "p256")]
impl_curve_point!(p256);
#[cfg(feature = "p384")]
impl_curve_point!(p384);
#[cfg(feature = "p521")]
impl_curve_point!(p521);
#[cfg(feature = "secp256k1")]
impl_curve_point!(k256);

/// Ciphersuite descriptor for a NIST curve with `a = -3` and cofactor 1:
/// base field, scalar field, curve constant `b`, map constant `Z` and the
/// RFC-mandated per-element expansion length `L`.
pub(crate) struct NistCurve<P> {
    field: Field,
    scalar_field: Field,
    a: FieldElement,
    b: FieldElement,
    z: FieldElement,
    security_length: usize,
    _point: PhantomData<fn() -> P>,
}

impl<P: CurvePoint> NistCurve<P> {
    pub fn new(prime: U576, order: U576, b: U576, z: i64, security_length: usize) -> Self {
        let field = Field::new(prime);
        let a = field.from_i64(-3);
        let b = field.element(b);
        let z = field.from_i64(z);

        Self {
            scalar_field: Field::new(order),
            field,
            a,
            b,
            z,
            security_length,
            _point: PhantomData,
        }
    }

    /// The hash-to-curve (RO) flow: two field elements, two mappings, one
    /// point addition. Cofactor clearing is skipped since `h = 1`.
    pub fn hash_xmd<H>(&self, input: &[u8], dst: &[u8]) -> Result<P>
    where
        H: Digest + BlockSizeUser,
    {
        let u = hash_to_field_xmd::<H>(input, dst, 2, 1, self.security_length, &self.field)?;
        let q0 = self.map_to_curve(&u[0]);
        let q1 = self.map_to_curve(&u[1]);

        Ok(q0.add(&q1))
    }

    /// The encode-to-curve (NU) flow: a single mapped element.
    pub fn encode_xmd<H>(&self, input: &[u8], dst: &[u8]) -> Result<P>
    where
        H: Digest + BlockSizeUser,
    {
        let u = hash_to_field_xmd::<H>(input, dst, 1, 1, self.security_length, &self.field)?;

        Ok(self.map_to_curve(&u[0]))
    }

    /// Canonical big-endian bytes of a scalar produced by `hash_to_field`
    /// over the group order.
    pub fn scalar_xmd<H>(&self, input: &[u8], dst: &[u8]) -> Result<Vec<u8>>
    where
        H: Digest + BlockSizeUser,
    {
        let u = hash_to_field_xmd::<H>(input, dst, 1, 1, self.security_length, &self.scalar_field)?;

        Ok(self.scalar_field.to_bytes(&u[0]))
    }

    fn map_to_curve(&self, u: &FieldElement) -> P {
        let (x, y) = map_to_curve_sswu(&self.field, &self.a, &self.b, &self.z, u);

        P::from_uncompressed(&self.field.to_bytes(&x), &self.field.to_bytes(&y))
    }
}
