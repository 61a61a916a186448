#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::unwrap_used,
    clippy::mod_module_files,
    missing_debug_implementations,
    missing_docs,
    trivial_casts,
    trivial_numeric_casts,
    unused,
    unused_attributes,
    unused_imports,
    unused_mut,
    unused_must_use
)]

mod error;
mod expand;
mod field;
mod hash_to_field;
mod i2osp;

#[cfg(any(
    feature = "p256",
    feature = "p384",
    feature = "p521",
    feature = "secp256k1"
))]
mod sswu;
#[cfg(any(
    feature = "p256",
    feature = "p384",
    feature = "p521",
    feature = "secp256k1"
))]
mod weierstrass;

#[cfg(feature = "edwards25519")]
pub mod edwards25519;
#[cfg(any(feature = "p256", feature = "p384", feature = "p521"))]
pub mod nist;
#[cfg(feature = "ristretto255")]
pub mod ristretto255;
#[cfg(feature = "secp256k1")]
pub mod secp256k1;

pub use error::{Error, Result};
pub use expand::{expand_message_xmd, expand_message_xof};
pub use field::{Field, FieldElement};
pub use hash_to_field::{hash_to_field_xmd, hash_to_field_xof};
pub use i2osp::{i2osp, os2ip};
#[cfg(any(
    feature = "p256",
    feature = "p384",
    feature = "p521",
    feature = "secp256k1"
))]
pub use weierstrass::CurvePoint;
