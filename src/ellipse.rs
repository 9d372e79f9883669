use core::cmp::Ordering;
use core::f64::consts::PI;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::error::Error;

use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::conversions;

/// A struct representing a single, internally consistent ellipse.
///
/// An ellipse is canonically defined by its semi-major axis `a` and
/// semi-minor axis `b`; the linear eccentricity `c`, eccentricity `e`,
/// and semi-latus rectum `l` are derived from the canonical pair once,
/// at construction, and cached for the lifetime of the value. The
/// struct is immutable: there are no setters, and a constructed value
/// can be shared freely across threads.
///
/// Construction is the single validated boundary of this crate: where
/// the [`conversions`] functions feed bad geometry through IEEE-754
/// arithmetic without complaint, [`Ellipse::new`] rejects it with an
/// [`EllipseError`].
///
/// Equality and ordering consider only the canonical pair: two
/// ellipses are equal iff their `(a, b)` pairs are IEEE-equal, and the
/// total order sorts by `a`, breaking ties by `b`.
///
/// # Example
/// ```
/// use ellipse_algebra::Ellipse;
///
/// let ellipse = Ellipse::new(5.0, 4.0).unwrap();
///
/// assert_eq!(ellipse.semi_major_axis(), 5.0);
/// assert_eq!(ellipse.semi_minor_axis(), 4.0);
/// assert_eq!(ellipse.linear_eccentricity(), 3.0);
/// assert_eq!(ellipse.eccentricity(), 0.6);
/// assert_eq!(ellipse.semi_latus_rectum(), 3.2);
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "EllipseRepr", into = "EllipseRepr")
)]
pub struct Ellipse {
    /// The semi-major axis, `a`.
    semi_major: f64,

    /// The semi-minor axis, `b`.
    semi_minor: f64,

    /// The linear eccentricity, `c`. Derived at construction.
    linear_eccentricity: f64,

    /// The eccentricity, `e`. Derived at construction.
    eccentricity: f64,

    /// The semi-latus rectum, `l`. Derived at construction.
    semi_latus_rectum: f64,
}

impl Ellipse {
    /// Creates an ellipse from its semi-major and semi-minor axes.
    ///
    /// The remaining parameters are derived here, once, via
    /// [`c_from_ab`][conversions::c_from_ab],
    /// [`e_from_ac`][conversions::e_from_ac], and
    /// [`l_from_ab`][conversions::l_from_ab].
    ///
    /// # Errors
    /// Fails with an [`EllipseError`] if `semi_minor > semi_major`, if
    /// `semi_major <= 0`, if `semi_minor < 0`, or if either axis is NaN
    /// or infinite. The degenerate cases at both ends of the range are
    /// accepted: `b == a` is a circle, and `b == 0` collapses to the
    /// major-axis segment (with `e == 1`).
    ///
    /// # Example
    /// ```
    /// use ellipse_algebra::{Ellipse, EllipseError};
    ///
    /// let ellipse = Ellipse::new(25.0, 15.0).unwrap();
    /// assert_eq!(ellipse.linear_eccentricity(), 20.0);
    ///
    /// assert!(matches!(
    ///     Ellipse::new(15.0, 25.0),
    ///     Err(EllipseError::SemiMinorGreaterThanSemiMajor { .. })
    /// ));
    /// ```
    pub fn new(semi_major: f64, semi_minor: f64) -> Result<Ellipse, EllipseError> {
        if !semi_major.is_finite() || !semi_minor.is_finite() {
            return Err(EllipseError::NonFinite {
                semi_major,
                semi_minor,
            });
        }
        if semi_major <= 0.0 {
            return Err(EllipseError::SemiMajorNotPositive { semi_major });
        }
        if semi_minor < 0.0 {
            return Err(EllipseError::SemiMinorNegative { semi_minor });
        }
        if semi_minor > semi_major {
            return Err(EllipseError::SemiMinorGreaterThanSemiMajor {
                semi_major,
                semi_minor,
            });
        }

        // Normalize -0.0 so Eq and Hash agree on the canonical pair.
        let semi_minor = if semi_minor == 0.0 { 0.0 } else { semi_minor };

        let linear_eccentricity = conversions::c_from_ab(semi_major, semi_minor);
        let eccentricity = conversions::e_from_ac(semi_major, linear_eccentricity);
        let semi_latus_rectum = conversions::l_from_ab(semi_major, semi_minor);

        Ok(Ellipse {
            semi_major,
            semi_minor,
            linear_eccentricity,
            eccentricity,
            semi_latus_rectum,
        })
    }

    /// Creates the degenerate circular ellipse of the given radius.
    ///
    /// The derived parameters of a circle are exact (`c = 0`, `e = 0`,
    /// `l = radius`), so they are stored directly instead of going
    /// through the general formulas.
    ///
    /// # Errors
    /// Fails if the radius is not a positive finite number.
    ///
    /// # Example
    /// ```
    /// use ellipse_algebra::Ellipse;
    ///
    /// let circle = Ellipse::circle(2.5).unwrap();
    ///
    /// assert_eq!(circle.eccentricity(), 0.0);
    /// assert_eq!(circle.linear_eccentricity(), 0.0);
    /// assert_eq!(circle.semi_latus_rectum(), 2.5);
    /// ```
    pub fn circle(radius: f64) -> Result<Ellipse, EllipseError> {
        if !radius.is_finite() {
            return Err(EllipseError::NonFinite {
                semi_major: radius,
                semi_minor: radius,
            });
        }
        if radius <= 0.0 {
            return Err(EllipseError::SemiMajorNotPositive { semi_major: radius });
        }

        debug_assert_eq!(conversions::c_from_ab(radius, radius), 0.0);
        debug_assert_eq!(conversions::e_from_ac(radius, 0.0), 0.0);

        Ok(Ellipse {
            semi_major: radius,
            semi_minor: radius,
            linear_eccentricity: 0.0,
            eccentricity: 0.0,
            semi_latus_rectum: radius,
        })
    }

    /// The semi-major axis: half the longest diameter.
    #[doc(alias = "a")]
    #[inline]
    #[must_use]
    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major
    }

    /// The semi-minor axis: half the shortest diameter.
    #[doc(alias = "b")]
    #[inline]
    #[must_use]
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_minor
    }

    /// The linear eccentricity: the distance from the center to either
    /// focus.
    #[doc(alias = "c")]
    #[inline]
    #[must_use]
    pub fn linear_eccentricity(&self) -> f64 {
        self.linear_eccentricity
    }

    /// The eccentricity: `c / a`. Zero for a circle, approaching one as
    /// the ellipse flattens.
    #[doc(alias = "e")]
    #[inline]
    #[must_use]
    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// The semi-latus rectum: half the chord through a focus
    /// perpendicular to the major axis.
    #[doc(alias = "l")]
    #[inline]
    #[must_use]
    pub fn semi_latus_rectum(&self) -> f64 {
        self.semi_latus_rectum
    }

    /// The distance from a focus to the curve, at the given angle from
    /// the direction of closest approach (the true anomaly, in
    /// radians).
    ///
    /// This is the focal chord form of the conic equation:
    /// `r(θ) = l / (1 + e·cos θ)`
    ///
    /// # Example
    /// ```
    /// use ellipse_algebra::Ellipse;
    ///
    /// use core::f64::consts::PI;
    ///
    /// let ellipse = Ellipse::new(5.0, 4.0).unwrap();
    ///
    /// // At θ = 0 the curve is closest to the focus; at θ = π,
    /// // farthest.
    /// assert_eq!(ellipse.focal_radius(0.0), ellipse.min_focal_distance());
    /// assert!((ellipse.focal_radius(PI) - ellipse.max_focal_distance()).abs() < 1e-12);
    /// ```
    #[inline]
    #[must_use]
    pub fn focal_radius(&self, true_anomaly: f64) -> f64 {
        self.semi_latus_rectum / (1.0 + self.eccentricity * true_anomaly.cos())
    }

    /// The smallest distance from a focus to the curve: `a − c`.
    ///
    /// For an orbital ellipse with the attractor at the focus, this is
    /// the periapsis distance.
    #[doc(alias = "periapsis")]
    #[inline]
    #[must_use]
    pub fn min_focal_distance(&self) -> f64 {
        self.semi_major - self.linear_eccentricity
    }

    /// The largest distance from a focus to the curve: `a + c`.
    ///
    /// For an orbital ellipse with the attractor at the focus, this is
    /// the apoapsis distance.
    #[doc(alias = "apoapsis")]
    #[inline]
    #[must_use]
    pub fn max_focal_distance(&self) -> f64 {
        self.semi_major + self.linear_eccentricity
    }

    /// The point on the curve at the given eccentric anomaly, in a
    /// frame centered on the ellipse's center with the major axis
    /// along +X.
    ///
    /// `(x, y) = (a·cos E, b·sin E)`
    #[inline]
    #[must_use]
    pub fn point_at_angle(&self, eccentric_anomaly: f64) -> DVec2 {
        let (sin, cos) = eccentric_anomaly.sin_cos();
        DVec2::new(self.semi_major * cos, self.semi_minor * sin)
    }

    /// The two foci, in a frame centered on the ellipse's center with
    /// the major axis along +X.
    ///
    /// A circle's foci coincide at the origin.
    #[inline]
    #[must_use]
    pub fn foci(&self) -> [DVec2; 2] {
        [
            DVec2::new(-self.linear_eccentricity, 0.0),
            DVec2::new(self.linear_eccentricity, 0.0),
        ]
    }

    /// The enclosed area, `π·a·b`.
    #[inline]
    #[must_use]
    pub fn area(&self) -> f64 {
        PI * self.semi_major * self.semi_minor
    }
}

impl Default for Ellipse {
    /// Creates the unit circle.
    fn default() -> Ellipse {
        Ellipse {
            semi_major: 1.0,
            semi_minor: 1.0,
            linear_eccentricity: 0.0,
            eccentricity: 0.0,
            semi_latus_rectum: 1.0,
        }
    }
}

// Equality, ordering, and hashing are defined solely on the canonical
// (a, b) pair. The derived fields are a pure function of it, and
// comparing them would only surface rounding noise between equal
// ellipses built along different paths.
impl PartialEq for Ellipse {
    fn eq(&self, other: &Self) -> bool {
        self.semi_major == other.semi_major && self.semi_minor == other.semi_minor
    }
}

// Construction rejects NaN and normalizes -0.0, so IEEE equality on the
// canonical pair is reflexive.
impl Eq for Ellipse {}

impl Hash for Ellipse {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semi_major.to_bits().hash(state);
        self.semi_minor.to_bits().hash(state);
    }
}

impl Ord for Ellipse {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semi_major
            .total_cmp(&other.semi_major)
            .then_with(|| self.semi_minor.total_cmp(&other.semi_minor))
    }
}

impl PartialOrd for Ellipse {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The serialized shape of an [`Ellipse`]: the canonical pair only.
///
/// The derived parameters are always re-derivable, so they are rebuilt
/// by going back through [`Ellipse::new`] on deserialization. A
/// hand-edited or corrupted payload that violates the construction
/// invariants therefore fails to deserialize instead of producing an
/// inconsistent value.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
pub(crate) struct EllipseRepr {
    pub(crate) a: f64,
    pub(crate) b: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<EllipseRepr> for Ellipse {
    type Error = EllipseError;

    fn try_from(repr: EllipseRepr) -> Result<Ellipse, EllipseError> {
        Ellipse::new(repr.a, repr.b)
    }
}

#[cfg(feature = "serde")]
impl From<Ellipse> for EllipseRepr {
    fn from(ellipse: Ellipse) -> EllipseRepr {
        EllipseRepr {
            a: ellipse.semi_major,
            b: ellipse.semi_minor,
        }
    }
}

/// An error to describe why constructing an [`Ellipse`] failed.
#[derive(PartialEq, Debug, Clone, Copy)]
pub enum EllipseError {
    /// ### Attempt to build an ellipse whose minor axis exceeds its major axis.
    /// By definition the semi-major axis is the longer one; a pair with
    /// `b > a` names the same ellipse with its axes swapped, and
    /// accepting it would silently flip every derived parameter.
    SemiMinorGreaterThanSemiMajor {
        /// The offending semi-major axis.
        semi_major: f64,
        /// The offending semi-minor axis.
        semi_minor: f64,
    },

    /// ### Attempt to build an ellipse with a non-positive semi-major axis.
    /// The semi-major axis is half of the ellipse's longest diameter,
    /// and an ellipse with no extent has no geometry to speak of.
    SemiMajorNotPositive {
        /// The offending semi-major axis.
        semi_major: f64,
    },

    /// ### Attempt to build an ellipse with a negative semi-minor axis.
    /// Axis lengths are magnitudes.
    SemiMinorNegative {
        /// The offending semi-minor axis.
        semi_minor: f64,
    },

    /// ### Attempt to build an ellipse from NaN or infinite axes.
    NonFinite {
        /// The supplied semi-major axis.
        semi_major: f64,
        /// The supplied semi-minor axis.
        semi_minor: f64,
    },
}

impl fmt::Display for EllipseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EllipseError::SemiMinorGreaterThanSemiMajor {
                semi_major,
                semi_minor,
            } => write!(
                f,
                "ellipse cannot have semi-minor axis (b={semi_minor}) \
                greater than semi-major axis (a={semi_major})"
            ),
            EllipseError::SemiMajorNotPositive { semi_major } => write!(
                f,
                "ellipse must have a positive semi-major axis (got a={semi_major})"
            ),
            EllipseError::SemiMinorNegative { semi_minor } => write!(
                f,
                "ellipse cannot have a negative semi-minor axis (got b={semi_minor})"
            ),
            EllipseError::NonFinite {
                semi_major,
                semi_minor,
            } => write!(
                f,
                "ellipse axes must be finite (got a={semi_major}, b={semi_minor})"
            ),
        }
    }
}

impl Error for EllipseError {}
