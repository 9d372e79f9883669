//! Observed orbital ellipses of a few solar-system planets.
//!
//! "The orbit of a planet is an ellipse with the Sun at one of the two
//! foci."
//!
//! \- Kepler's first law
//!
//! Each preset is built from the J2000 observed semi-major axis and
//! eccentricity published in the
//! [NASA planetary fact sheets](https://nssdc.gsfc.nasa.gov/planetary/factsheet/),
//! with the semi-minor axis derived through
//! [`b_from_ae`][crate::conversions::b_from_ae]. Semi-major axes are in
//! meters.

use crate::conversions;
use crate::Ellipse;

fn from_observed_elements(semi_major: f64, eccentricity: f64) -> Ellipse {
    let semi_minor = conversions::b_from_ae(semi_major, eccentricity);
    Ellipse::new(semi_major, semi_minor).expect("observed elements form a valid ellipse")
}

/// Returns the orbital ellipse of Mercury.
///
/// `a` = 57.909e9 m, `e` = 0.20563069 (the most eccentric planetary
/// orbit in the solar system).
#[must_use]
pub fn mercury() -> Ellipse {
    from_observed_elements(57.909e9, 0.20563069)
}

/// Returns the orbital ellipse of Venus.
///
/// `a` = 108.210e9 m, `e` = 0.00677323 (very nearly circular).
#[must_use]
pub fn venus() -> Ellipse {
    from_observed_elements(108.210e9, 0.00677323)
}

/// Returns the orbital ellipse of Earth.
///
/// `a` = 149.5980e9 m, `e` = 0.01671022.
#[must_use]
pub fn earth() -> Ellipse {
    from_observed_elements(149.5980e9, 0.01671022)
}
