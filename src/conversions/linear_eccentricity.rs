//! Conversions targeting the linear eccentricity (`c`).
//!
//! Scalar forms:
//! - [`c_from_ab`]: `c = √(a² − b²)`
//! - [`c_from_ae`]: `c = a·e`
//! - [`c_from_be`]: `c = b·e / √(1 − e²)`
//! - [`c_from_al`]: `c = √(a(a − l))`
//! - [`c_from_bl`]: `c = b·√(b²/l² − 1)`
//! - [`c_from_el`]: `c = l·e / (1 − e²)`
//!
//! Squared forms:
//! - [`c2_from_a2b2`]: `c² = a² − b²`
//! - [`c2_from_a2e2`]: `c² = a²·e²`
//! - [`c2_from_b2e2`]: `c² = b²·e² / (1 − e²)`
//! - [`c2_from_a2l2`]: `c² = a² − √(a²·l²)`
//! - [`c2_from_b2l2`]: `c² = b²·b²/l² − b²`
//! - [`c2_from_e2l2`]: `c² = e²·l² / (1 − e²)²`

/// Linear eccentricity from the semi-major and semi-minor axes.
///
/// `c = √(a² − b²)`
///
/// # Example
/// ```
/// use ellipse_algebra::conversions::c_from_ab;
///
/// assert_eq!(c_from_ab(5.0, 4.0), 3.0);
/// // A circle's foci coincide with its center.
/// assert_eq!(c_from_ab(2.0, 2.0), 0.0);
/// ```
#[inline]
#[must_use]
pub fn c_from_ab(a: f64, b: f64) -> f64 {
    (a * a - b * b).sqrt()
}

/// Linear eccentricity from the semi-major axis and eccentricity.
///
/// `c = a·e`
#[inline]
#[must_use]
pub fn c_from_ae(a: f64, e: f64) -> f64 {
    a * e
}

/// Linear eccentricity from the semi-minor axis and eccentricity.
///
/// `c = b·e / √(1 − e²)`
#[inline]
#[must_use]
pub fn c_from_be(b: f64, e: f64) -> f64 {
    b * e / (1.0 - e * e).sqrt()
}

/// Linear eccentricity from the semi-major axis and semi-latus rectum.
///
/// `c = √(a(a − l))`
#[inline]
#[must_use]
pub fn c_from_al(a: f64, l: f64) -> f64 {
    (a * (a - l)).sqrt()
}

/// Linear eccentricity from the semi-minor axis and semi-latus rectum.
///
/// `c = b·√(b²/l² − 1)`
#[inline]
#[must_use]
pub fn c_from_bl(b: f64, l: f64) -> f64 {
    b * (b * b / (l * l) - 1.0).sqrt()
}

/// Linear eccentricity from the eccentricity and semi-latus rectum.
///
/// `c = l·e / (1 − e²)`
#[inline]
#[must_use]
pub fn c_from_el(e: f64, l: f64) -> f64 {
    l * e / (1.0 - e * e)
}

/// Squared linear eccentricity from the squared semi-major and
/// semi-minor axes.
///
/// `c² = a² − b²`
#[inline]
#[must_use]
pub fn c2_from_a2b2(a2: f64, b2: f64) -> f64 {
    a2 - b2
}

/// Squared linear eccentricity from the squared semi-major axis and
/// squared eccentricity.
///
/// `c² = a²·e²`
#[inline]
#[must_use]
pub fn c2_from_a2e2(a2: f64, e2: f64) -> f64 {
    a2 * e2
}

/// Squared linear eccentricity from the squared semi-minor axis and
/// squared eccentricity.
///
/// `c² = b²·e² / (1 − e²)`
#[inline]
#[must_use]
pub fn c2_from_b2e2(b2: f64, e2: f64) -> f64 {
    b2 * e2 / (1.0 - e2)
}

/// Squared linear eccentricity from the squared semi-major axis and
/// squared semi-latus rectum.
///
/// `c² = a² − √(a²·l²)`
///
/// Uses `a·l = √(a²·l²)` to stay in squared inputs throughout.
#[inline]
#[must_use]
pub fn c2_from_a2l2(a2: f64, l2: f64) -> f64 {
    a2 - (a2 * l2).sqrt()
}

/// Squared linear eccentricity from the squared semi-minor axis and
/// squared semi-latus rectum.
///
/// `c² = b²·b²/l² − b²`
#[inline]
#[must_use]
pub fn c2_from_b2l2(b2: f64, l2: f64) -> f64 {
    (b2 * b2 / l2) - b2
}

/// Squared linear eccentricity from the squared eccentricity and
/// squared semi-latus rectum.
///
/// `c² = e²·l² / (1 − e²)²`
#[inline]
#[must_use]
pub fn c2_from_e2l2(e2: f64, l2: f64) -> f64 {
    e2 * l2 / (1.0 - e2) / (1.0 - e2)
}
