//! RFC 9380 ciphersuites for the NIST P-256, P-384 and P-521 groups,
//! returning points from the `p256`, `p384` and `p521` crates.
//!
//! All three curves share `a = -3`, cofactor 1 and the XMD expander; they
//! differ in hash, map constant `Z` and per-element length `L`:
//!
//! | Curve | Hash | `Z` | `L` |
//! |-------|------|-----|-----|
//! | P-256 | SHA-256 | -10 | 48 |
//! | P-384 | SHA-384 | -12 | 72 |
//! | P-521 | SHA-512 | -4 | 98 |

#[cfg(feature = "p256")]
pub mod p256;
#[cfg(feature = "p384")]
pub mod p384;
#[cfg(feature = "p521")]
pub mod p521;
