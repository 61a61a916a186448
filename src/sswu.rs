//! The Simplified Shallue-van de Woestijne-Ulas mapping
//! (RFC 9380, section 6.6.2).

use subtle::ConditionallySelectable;

use crate::field::{Field, FieldElement};

/// Maps a field element `u` to an affine point on the Weierstrass curve
/// `y^2 = x^3 + a*x + b` over `fp`, with the nonsquare map constant `z`.
///
/// Requires `a * b != 0` on the mapping curve (secp256k1 routes through its
/// 3-isogenous curve for this reason). Total: returns a point for every `u`.
pub(crate) fn map_to_curve_sswu(
    fp: &Field,
    a: &FieldElement,
    b: &FieldElement,
    z: &FieldElement,
    u: &FieldElement,
) -> (FieldElement, FieldElement) {
    let mut tv1 = fp.square(u); //           1.  tv1 = u^2
    tv1 = fp.mul(z, &tv1); //                2.  tv1 = Z * tv1
    let mut tv2 = fp.square(&tv1); //        3.  tv2 = tv1^2
    tv2 = fp.add(&tv2, &tv1); //             4.  tv2 = tv2 + tv1
    let mut tv3 = fp.add(&tv2, &fp.one()); //5.  tv3 = tv2 + 1
    tv3 = fp.mul(b, &tv3); //                6.  tv3 = B * tv3
    // 7.  tv4 = CMOV(Z, -tv2, tv2 != 0)
    let mut tv4 = fp.cond_mov(z, &fp.neg(&tv2), !fp.is_zero(&tv2));
    tv4 = fp.mul(a, &tv4); //                8.  tv4 = A * tv4
    tv2 = fp.square(&tv3); //                9.  tv2 = tv3^2
    let mut tv6 = fp.square(&tv4); //        10. tv6 = tv4^2
    let mut tv5 = fp.mul(a, &tv6); //        11. tv5 = A * tv6
    tv2 = fp.add(&tv2, &tv5); //             12. tv2 = tv2 + tv5
    tv2 = fp.mul(&tv2, &tv3); //             13. tv2 = tv2 * tv3
    tv6 = fp.mul(&tv6, &tv4); //             14. tv6 = tv6 * tv4
    tv5 = fp.mul(b, &tv6); //                15. tv5 = B * tv6
    tv2 = fp.add(&tv2, &tv5); //             16. tv2 = tv2 + tv5
    let mut x = fp.mul(&tv1, &tv3); //       17. x = tv1 * tv3
    let (is_gx1_square, y1) = fp.sqrt_ratio(&tv2, &tv6, z); // 18.
    let mut y = fp.mul(&tv1, u); //          19. y = tv1 * u
    y = fp.mul(&y, &y1); //                  20. y = y * y1
    x = fp.cond_mov(&x, &tv3, is_gx1_square); // 21. x = CMOV(x, tv3, isGx1Square)
    y = fp.cond_mov(&y, &y1, is_gx1_square); //  22. y = CMOV(y, y1, isGx1Square)
    let e1 = !(fp.sgn0(u) ^ fp.sgn0(&y)); // 23. e1 = sgn0(u) == sgn0(y)
    y = FieldElement::conditional_select(&fp.neg(&y), &y, e1); // 24. y = CMOV(-y, y, e1)
    x = fp.mul(&x, &fp.invert(&tv4)); //     25-26. x = x / tv4

    (x, y)
}
