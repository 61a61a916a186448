//! Modular arithmetic over runtime primes.
//!
//! One backing width ([`U576`]) serves every base field and group order used
//! by the ciphersuites, up to P-521. Multiplications go through Montgomery
//! form with runtime parameters; additive operations work directly on the
//! canonical representatives.

use crypto_bigint::modular::runtime_mod::{DynResidue, DynResidueParams};
use crypto_bigint::{Encoding, NonZero, U576, U896};
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq};

use crate::{Error, Result};

const LIMBS: usize = U576::LIMBS;

/// Canonical byte width of the backing integer.
const FE_BYTES: usize = 72;

/// Width of the reduction buffer fed by `hash_to_field`; bounds the
/// per-element length `L` a ciphersuite may request.
pub(crate) const REDUCE_BYTES: usize = 112;

/// An element of a [`Field`], held in canonical form (`0 <= value < p`).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FieldElement(U576);

impl ConditionallySelectable for FieldElement {
    fn conditional_select(a: &Self, b: &Self, choice: Choice) -> Self {
        Self(U576::conditional_select(&a.0, &b.0, choice))
    }
}

/// A prime field selected at runtime.
///
/// Carries the prime together with the precomputed exponents `(p - 1) / 2`
/// (Legendre symbol), `p - 2` (Fermat inversion) and `(p + 1) / 4` (square
/// roots when `p = 3 (mod 4)`).
#[derive(Clone, Debug)]
pub struct Field {
    modulus: NonZero<U576>,
    wide_modulus: NonZero<U896>,
    params: DynResidueParams<LIMBS>,
    p_minus_1_div_2: U576,
    p_minus_2: U576,
    p_plus_1_div_4: U576,
    byte_length: usize,
}

impl Field {
    /// Builds the field of integers modulo the odd prime `modulus`.
    pub fn new(modulus: U576) -> Self {
        let params = DynResidueParams::new(&modulus);
        let p_minus_1_div_2 = modulus.wrapping_sub(&U576::ONE).shr_vartime(1);
        let p_minus_2 = modulus.wrapping_sub(&U576::from_u64(2));
        let p_plus_1_div_4 = modulus.shr_vartime(2).wrapping_add(&U576::ONE);

        let bytes = modulus.to_be_bytes();
        let byte_length = FE_BYTES - bytes.iter().take_while(|&&b| b == 0).count();

        let mut wide = [0u8; REDUCE_BYTES];
        wide[REDUCE_BYTES - FE_BYTES..].copy_from_slice(&bytes);

        Self {
            modulus: Option::from(NonZero::new(modulus)).expect("modulus is nonzero"),
            wide_modulus: Option::from(NonZero::new(U896::from_be_slice(&wide)))
                .expect("modulus is nonzero"),
            params,
            p_minus_1_div_2,
            p_minus_2,
            p_plus_1_div_4,
            byte_length,
        }
    }

    /// The additive identity.
    pub fn zero(&self) -> FieldElement {
        FieldElement(U576::ZERO)
    }

    /// The multiplicative identity.
    pub fn one(&self) -> FieldElement {
        FieldElement(U576::ONE)
    }

    /// Length of the canonical big-endian encoding of an element,
    /// `ceil(log2(p) / 8)`.
    pub fn byte_length(&self) -> usize {
        self.byte_length
    }

    /// Builds an element from an unsigned integer, reducing it modulo `p`.
    pub fn element(&self, value: U576) -> FieldElement {
        FieldElement(value % self.modulus)
    }

    /// Builds an element from a signed constant; curve descriptors specify
    /// small parameters like `Z = -10`.
    pub fn from_i64(&self, value: i64) -> FieldElement {
        let magnitude = self.element(U576::from_u64(value.unsigned_abs()));
        if value < 0 {
            self.neg(&magnitude)
        } else {
            magnitude
        }
    }

    /// Interprets `bytes` as a big-endian unsigned integer and reduces it
    /// modulo `p`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidFieldByteLength`] if `bytes` is empty or longer than
    /// the 112-byte reduction buffer.
    pub fn reduce(&self, bytes: &[u8]) -> Result<FieldElement> {
        if bytes.is_empty() || bytes.len() > REDUCE_BYTES {
            return Err(Error::InvalidFieldByteLength);
        }

        let mut wide = [0u8; REDUCE_BYTES];
        wide[REDUCE_BYTES - bytes.len()..].copy_from_slice(bytes);

        let reduced = U896::from_be_slice(&wide) % self.wide_modulus;
        let bytes = reduced.to_be_bytes();

        Ok(FieldElement(U576::from_be_slice(
            &bytes[REDUCE_BYTES - FE_BYTES..],
        )))
    }

    /// Canonical big-endian encoding of `x`, [`Self::byte_length`] bytes.
    pub fn to_bytes(&self, x: &FieldElement) -> Vec<u8> {
        x.0.to_be_bytes()[FE_BYTES - self.byte_length..].to_vec()
    }

    /// `x + y mod p`.
    pub fn add(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement(x.0.add_mod(&y.0, &self.modulus))
    }

    /// `x - y mod p`.
    pub fn sub(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement(x.0.sub_mod(&y.0, &self.modulus))
    }

    /// `-x mod p`.
    pub fn neg(&self, x: &FieldElement) -> FieldElement {
        FieldElement(x.0.neg_mod(&self.modulus))
    }

    /// `x * y mod p`.
    pub fn mul(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement(self.residue(x).mul(&self.residue(y)).retrieve())
    }

    /// `x^2 mod p`.
    pub fn square(&self, x: &FieldElement) -> FieldElement {
        FieldElement(self.residue(x).square().retrieve())
    }

    /// `x^exponent mod p`.
    pub fn pow(&self, x: &FieldElement, exponent: &U576) -> FieldElement {
        FieldElement(self.residue(x).pow(exponent).retrieve())
    }

    /// `x^-1 mod p` by Fermat's little theorem; maps zero to zero, which the
    /// isogeny evaluation relies on to detect the identity.
    pub fn invert(&self, x: &FieldElement) -> FieldElement {
        self.pow(x, &self.p_minus_2)
    }

    /// The Legendre symbol `x^((p - 1) / 2) mod p`, one of `{0, 1, p - 1}`.
    pub fn legendre(&self, x: &FieldElement) -> FieldElement {
        self.pow(x, &self.p_minus_1_div_2)
    }

    /// Whether `x` is a nonzero quadratic residue.
    pub fn is_square(&self, x: &FieldElement) -> Choice {
        self.are_equal(&self.legendre(x), &self.one())
    }

    /// Whether `x` is zero.
    pub fn is_zero(&self, x: &FieldElement) -> Choice {
        x.0.ct_eq(&U576::ZERO)
    }

    /// Whether `x` and `y` are the same element.
    pub fn are_equal(&self, x: &FieldElement, y: &FieldElement) -> Choice {
        x.0.ct_eq(&y.0)
    }

    /// The sign of `x`: the least significant bit of its canonical
    /// representative.
    pub fn sgn0(&self, x: &FieldElement) -> Choice {
        Choice::from(x.0.to_be_bytes()[FE_BYTES - 1] & 1)
    }

    /// `y` if `choice` is set, `x` otherwise.
    pub fn cond_mov(&self, x: &FieldElement, y: &FieldElement, choice: Choice) -> FieldElement {
        FieldElement::conditional_select(x, y, choice)
    }

    /// A square root of `x`, valid for `p = 3 (mod 4)`: `x^((p + 1) / 4)`.
    ///
    /// The edwards25519 field is `5 (mod 8)` and supplies its own root
    /// routine on top of [`Self::pow`].
    pub fn sqrt(&self, x: &FieldElement) -> FieldElement {
        self.pow(x, &self.p_plus_1_div_4)
    }

    /// Computes `sqrt(u / v)`, reporting whether `u / v` was square; if not,
    /// the ratio is multiplied by the map constant `z` before taking the
    /// root.
    pub fn sqrt_ratio(
        &self,
        u: &FieldElement,
        v: &FieldElement,
        z: &FieldElement,
    ) -> (Choice, FieldElement) {
        let ratio = self.mul(u, &self.invert(v));
        let is_square = self.is_square(&ratio);
        let shifted = self.mul(&ratio, z);
        let root = self.sqrt(&FieldElement::conditional_select(&shifted, &ratio, is_square));

        (is_square, root)
    }

    fn residue(&self, x: &FieldElement) -> DynResidue<LIMBS> {
        DynResidue::new(&x.0, self.params)
    }
}
