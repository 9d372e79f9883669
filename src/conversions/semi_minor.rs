//! Conversions targeting the semi-minor axis (`b`).
//!
//! Scalar forms:
//! - [`b_from_ac`]: `b = √(a² − c²)`
//! - [`b_from_ae`]: `b = a·√(1 − e²)`
//! - [`b_from_ce`]: `b = (c/e)·√(1 − e²)`
//! - [`b_from_al`]: `b = √(a·l)`
//! - [`b_from_cl`]: `b = √(l(l + √(l² + 4c²)) / 2)`
//! - [`b_from_el`]: `b = l / √(1 − e²)`
//!
//! Squared forms:
//! - [`b2_from_a2c2`]: `b² = a² − c²`
//! - [`b2_from_a2e2`]: `b² = a²(1 − e²)`
//! - [`b2_from_c2e2`]: `b² = c²/e² − c²`
//! - [`b2_from_a2l2`]: `b² = √(a²·l²)`
//! - [`b2_from_c2l2`]: `b² = (l² + √(l²(l² + 4c²))) / 2`
//! - [`b2_from_e2l2`]: `b² = l² / (1 − e²)`

/// Semi-minor axis from the semi-major axis and linear eccentricity.
///
/// `b = √(a² − c²)`
#[inline]
#[must_use]
pub fn b_from_ac(a: f64, c: f64) -> f64 {
    (a * a - c * c).sqrt()
}

/// Semi-minor axis from the semi-major axis and eccentricity.
///
/// `b = a·√(1 − e²)`
///
/// # Example
/// ```
/// use ellipse_algebra::conversions::b_from_ae;
///
/// assert_eq!(b_from_ae(5.0, 0.6), 4.0);
/// ```
#[inline]
#[must_use]
pub fn b_from_ae(a: f64, e: f64) -> f64 {
    a * (1.0 - e * e).sqrt()
}

/// Semi-minor axis from the linear eccentricity and eccentricity.
///
/// `b = (c/e)·√(1 − e²)`
#[inline]
#[must_use]
pub fn b_from_ce(c: f64, e: f64) -> f64 {
    c / e * (1.0 - e * e).sqrt()
}

/// Semi-minor axis from the semi-major axis and semi-latus rectum.
///
/// `b = √(a·l)`: the semi-minor axis is the geometric mean of the
/// semi-major axis and the semi-latus rectum.
#[inline]
#[must_use]
pub fn b_from_al(a: f64, l: f64) -> f64 {
    (a * l).sqrt()
}

/// Semi-minor axis from the linear eccentricity and semi-latus rectum.
///
/// `b = √(l(l + √(l² + 4c²)) / 2)`
#[inline]
#[must_use]
pub fn b_from_cl(c: f64, l: f64) -> f64 {
    (l * (l + (l * l + 4.0 * c * c).sqrt()) / 2.0).sqrt()
}

/// Semi-minor axis from the eccentricity and semi-latus rectum.
///
/// `b = l / √(1 − e²)`
#[inline]
#[must_use]
pub fn b_from_el(e: f64, l: f64) -> f64 {
    l / (1.0 - e * e).sqrt()
}

/// Squared semi-minor axis from the squared semi-major axis and squared
/// linear eccentricity.
///
/// `b² = a² − c²`
#[inline]
#[must_use]
pub fn b2_from_a2c2(a2: f64, c2: f64) -> f64 {
    a2 - c2
}

/// Squared semi-minor axis from the squared semi-major axis and squared
/// eccentricity.
///
/// `b² = a²(1 − e²)`
#[inline]
#[must_use]
pub fn b2_from_a2e2(a2: f64, e2: f64) -> f64 {
    a2 * (1.0 - e2)
}

/// Squared semi-minor axis from the squared linear eccentricity and
/// squared eccentricity.
///
/// `b² = c²/e² − c²`
#[inline]
#[must_use]
pub fn b2_from_c2e2(c2: f64, e2: f64) -> f64 {
    (c2 / e2) - c2
}

/// Squared semi-minor axis from the squared semi-major axis and squared
/// semi-latus rectum.
///
/// `b² = √(a²·l²)`
///
/// Since `b² = a·l` (see [`b_from_al`]), the squared form is a single
/// square root of the product of the squared inputs.
#[inline]
#[must_use]
pub fn b2_from_a2l2(a2: f64, l2: f64) -> f64 {
    (a2 * l2).sqrt()
}

/// Squared semi-minor axis from the squared linear eccentricity and
/// squared semi-latus rectum.
///
/// `b² = (l² + √(l²(l² + 4c²))) / 2`
#[inline]
#[must_use]
pub fn b2_from_c2l2(c2: f64, l2: f64) -> f64 {
    (l2 + (l2 * (l2 + 4.0 * c2)).sqrt()) / 2.0
}

/// Squared semi-minor axis from the squared eccentricity and squared
/// semi-latus rectum.
///
/// `b² = l² / (1 − e²)`
#[inline]
#[must_use]
pub fn b2_from_e2l2(e2: f64, l2: f64) -> f64 {
    l2 / (1.0 - e2)
}
