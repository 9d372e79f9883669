//! # Ellipse Parameter Algebra
//! This library crate converts between the five defining parameters of
//! an ellipse:
//!
//! - `a`: the semi-major axis, half the longest diameter,
//! - `b`: the semi-minor axis, half the shortest diameter,
//! - `c`: the linear eccentricity, the distance from the center to
//!   either focus,
//! - `e`: the eccentricity, the dimensionless shape parameter `c / a`,
//! - `l`: the semi-latus rectum, half the chord through a focus
//!   perpendicular to the major axis.
//!
//! Any two of them pin down the other three, and closed-form identities
//! connect every pair to every target (`a² = b² + c²`, `e = c / a`,
//! `l = b² / a`, and friends). This crate provides the full closed
//! network of those identities so that callers holding *any* two
//! parameters can derive the rest without re-deriving algebra by hand.
//!
//! ## Getting started
//! This crate provides two main things:
//! - The [`conversions`] module: free functions, one per (target,
//!   source-pair) combination, like [`a_from_bc`][conversions::a_from_bc]
//!   or [`l_from_ae`][conversions::l_from_ae]. A parallel squared family
//!   ([`a2_from_b2c2`][conversions::a2_from_b2c2], ...) works on squared
//!   magnitudes for call chains that already hold squares and want to
//!   avoid sqrt/square round-trips. These functions are raw arithmetic:
//!   they never validate and never panic, and feed invalid geometry
//!   through IEEE-754 as NaN or infinity.
//! - The [`Ellipse`] struct: an immutable, validated value type built
//!   from the canonical `(a, b)` pair, with the other three parameters
//!   derived once at construction and cached forever.
//!
//! We also provide a [`presets`] module with the observed orbital
//! ellipses of a few solar-system planets, handy as realistic test
//! subjects.
//!
//! ## Example
//!
//! ```rust
//! use ellipse_algebra::{conversions, Ellipse};
//!
//! // An orbital-mechanics module typically knows (a, e)...
//! let a = 5.0;
//! let e = 0.6;
//!
//! // ...and wants the full geometric description.
//! let b = conversions::b_from_ae(a, e);
//! let ellipse = Ellipse::new(a, b)?;
//!
//! assert_eq!(ellipse.linear_eccentricity(), 3.0);
//! assert_eq!(ellipse.semi_latus_rectum(), 3.2);
//! # Ok::<(), ellipse_algebra::EllipseError>(())
//! ```

#![warn(missing_docs)]

pub mod conversions;
mod ellipse;
pub mod presets;

pub use ellipse::{Ellipse, EllipseError};
