//! Conversions targeting the semi-major axis (`a`).
//!
//! Scalar forms:
//! - [`a_from_bc`]: `a = √(b² + c²)`
//! - [`a_from_be`]: `a = b / √(1 − e²)`
//! - [`a_from_ce`]: `a = c / e`
//! - [`a_from_bl`]: `a = b² / l`
//! - [`a_from_cl`]: `a = (l + √(l² + 4c²)) / 2`
//! - [`a_from_el`]: `a = l / (1 − e²)`
//!
//! Squared forms:
//! - [`a2_from_b2c2`]: `a² = b² + c²`
//! - [`a2_from_b2e2`]: `a² = b² / (1 − e²)`
//! - [`a2_from_c2e2`]: `a² = c² / e²`
//! - [`a2_from_b2l2`]: `a² = b²·b² / l²`
//! - [`a2_from_c2l2`]: `a² = (l² + √(l²(l² + 4c²))) / 2 + c²`
//! - [`a2_from_e2l2`]: `a² = l² / (1 − e²)²`

/// Semi-major axis from the semi-minor axis and linear eccentricity.
///
/// `a = √(b² + c²)`
///
/// # Example
/// ```
/// use ellipse_algebra::conversions::a_from_bc;
///
/// assert_eq!(a_from_bc(4.0, 3.0), 5.0);
/// ```
#[inline]
#[must_use]
pub fn a_from_bc(b: f64, c: f64) -> f64 {
    (b * b + c * c).sqrt()
}

/// Semi-major axis from the semi-minor axis and eccentricity.
///
/// `a = b / √(1 − e²)`
#[inline]
#[must_use]
pub fn a_from_be(b: f64, e: f64) -> f64 {
    b / (1.0 - e * e).sqrt()
}

/// Semi-major axis from the linear eccentricity and eccentricity.
///
/// `a = c / e`
///
/// A circle (`e = 0`, `c = 0`) is unrecoverable from this pair: the
/// quotient is NaN.
#[inline]
#[must_use]
pub fn a_from_ce(c: f64, e: f64) -> f64 {
    c / e
}

/// Semi-major axis from the semi-minor axis and semi-latus rectum.
///
/// `a = b² / l`
#[inline]
#[must_use]
pub fn a_from_bl(b: f64, l: f64) -> f64 {
    b * b / l
}

/// Semi-major axis from the linear eccentricity and semi-latus rectum.
///
/// `a = (l + √(l² + 4c²)) / 2`
#[inline]
#[must_use]
pub fn a_from_cl(c: f64, l: f64) -> f64 {
    (l + (l * l + 4.0 * c * c).sqrt()) / 2.0
}

/// Semi-major axis from the eccentricity and semi-latus rectum.
///
/// `a = l / (1 − e²)`
///
/// # Example
/// ```
/// use ellipse_algebra::conversions::a_from_el;
///
/// assert_eq!(a_from_el(0.6, 3.2), 5.0);
/// ```
#[inline]
#[must_use]
pub fn a_from_el(e: f64, l: f64) -> f64 {
    l / (1.0 - e * e)
}

/// Squared semi-major axis from the squared semi-minor axis and squared
/// linear eccentricity.
///
/// `a² = b² + c²`
#[inline]
#[must_use]
pub fn a2_from_b2c2(b2: f64, c2: f64) -> f64 {
    b2 + c2
}

/// Squared semi-major axis from the squared semi-minor axis and squared
/// eccentricity.
///
/// `a² = b² / (1 − e²)`
#[inline]
#[must_use]
pub fn a2_from_b2e2(b2: f64, e2: f64) -> f64 {
    b2 / (1.0 - e2)
}

/// Squared semi-major axis from the squared linear eccentricity and
/// squared eccentricity.
///
/// `a² = c² / e²`
#[inline]
#[must_use]
pub fn a2_from_c2e2(c2: f64, e2: f64) -> f64 {
    c2 / e2
}

/// Squared semi-major axis from the squared semi-minor axis and squared
/// semi-latus rectum.
///
/// `a² = b²·b² / l²`
#[inline]
#[must_use]
pub fn a2_from_b2l2(b2: f64, l2: f64) -> f64 {
    b2 * b2 / l2
}

/// Squared semi-major axis from the squared linear eccentricity and
/// squared semi-latus rectum.
///
/// `a² = (l² + √(l²(l² + 4c²))) / 2 + c²`
///
/// This is the expanded square of [`a_from_cl`], folded through
/// `√(l²·x) = l·√x` so it needs only the squared inputs.
#[inline]
#[must_use]
pub fn a2_from_c2l2(c2: f64, l2: f64) -> f64 {
    (l2 + (l2 * (l2 + 4.0 * c2)).sqrt()) / 2.0 + c2
}

/// Squared semi-major axis from the squared eccentricity and squared
/// semi-latus rectum.
///
/// `a² = l² / (1 − e²)²`
#[inline]
#[must_use]
pub fn a2_from_e2l2(e2: f64, l2: f64) -> f64 {
    l2 / (1.0 - e2) / (1.0 - e2)
}
