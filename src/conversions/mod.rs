//! Closed-form conversions between ellipse parameters.
//!
//! Every function in this module computes one target parameter from a
//! specific pair of the other four, using the algebraic identity that
//! relates exactly those three. The functions are grouped into one
//! submodule per target parameter and re-exported here, so both
//! `conversions::a_from_bc` and `conversions::semi_major::a_from_bc`
//! name the same function.
//!
//! Two parallel families are provided:
//! - **Scalar**: `x_from_yz(y, z)` takes and returns plain magnitudes.
//! - **Squared**: `x2_from_y2z2(y2, z2)` takes and returns *squared*
//!   magnitudes. Use these when a call chain already holds squares
//!   (say, from a dot product) and would otherwise pay a redundant
//!   sqrt/square pair. Some of the squared formulas take a simplified
//!   algebraic path rather than literally squaring the scalar one, so
//!   the two families may differ in the last few ULPs.
//!
//! # No validation
//!
//! These functions are raw arithmetic transforms: they do not check
//! their inputs and never panic. The caller is responsible for supplying
//! geometrically valid values (`e ∈ [0, 1)`, `b ≤ a`, and so on).
//! Geometrically meaningless inputs produce IEEE-754 results rather
//! than errors: a negative value under a square root yields NaN, and a
//! zero divisor yields an infinity. Check [`f64::is_finite`] on the way
//! out if your inputs are not already trusted. The validated entry point
//! to this crate is [`Ellipse::new`][crate::Ellipse::new], not this
//! module.

pub mod eccentricity;
pub mod linear_eccentricity;
pub mod semi_latus_rectum;
pub mod semi_major;
pub mod semi_minor;

pub use eccentricity::*;
pub use linear_eccentricity::*;
pub use semi_latus_rectum::*;
pub use semi_major::*;
pub use semi_minor::*;
