//! Angle value type
//!
//! Angles are stored in radians and are never implicitly wrapped, so
//! `90° × 4` stays `360°` until [`Angle::wrapped_half`] is asked for.

use std::f64::consts::{PI, TAU};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A planar angle.
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self(0.0);

    /// Creates an angle from radians.
    pub const fn from_radians(radians: f64) -> Self {
        Self(radians)
    }

    /// Creates an angle from degrees.
    pub fn from_degrees(degrees: f64) -> Self {
        Self(degrees.to_radians())
    }

    /// Polar angle of the vector `(x, y)`, measured counter-clockwise from +X.
    pub fn atan2(y: f64, x: f64) -> Self {
        Self(y.atan2(x))
    }

    pub const fn as_radians(self) -> f64 {
        self.0
    }

    pub fn as_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    pub fn sin(self) -> f64 {
        self.0.sin()
    }

    pub fn cos(self) -> f64 {
        self.0.cos()
    }

    /// Equivalent angle in (-π, π].
    pub fn wrapped_half(self) -> Self {
        let wrapped = self.0.rem_euclid(TAU);
        if wrapped > PI {
            Self(wrapped - TAU)
        } else {
            Self(wrapped)
        }
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.as_degrees())
    }
}

impl Add for Angle {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Angle {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Angle {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul<f64> for Angle {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

/// Extension trait for creating [`Angle`]s from floating-point literals.
pub trait IntoAngle {
    /// Creates an [`Angle`] of `self` degrees.
    fn deg(self) -> Angle;
}

impl IntoAngle for f64 {
    fn deg(self) -> Angle {
        Angle::from_degrees(self)
    }
}
