//! Core spatial types for the agent policy.
//!
//! Defines 3D vectors, the agent's local frame, and the vector math used by
//! navigation (distances, signed heading angles about an axis).

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// A 3D vector in engine units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Creates a new vector.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Unit vector along the world up axis (+y).
    pub const fn unit_y() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    /// Unit vector along the conventional forward axis (+z).
    pub const fn unit_z() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Dot product.
    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product.
    pub fn cross(&self, other: &Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Signed angle in degrees from `from` to `to`, with the sign taken from
    /// the orientation of `from × to` relative to `axis`.
    ///
    /// Matches the engine convention: the unsigned angle between the two
    /// vectors, negated when the cross product points against `axis`.
    /// Returns 0.0 when either vector is degenerate.
    pub fn signed_angle_deg(from: &Vec3, to: &Vec3, axis: &Vec3) -> f64 {
        let lengths = from.length() * to.length();
        if lengths < 1e-12 {
            return 0.0;
        }
        let unsigned = (from.dot(to) / lengths).clamp(-1.0, 1.0).acos().to_degrees();
        if from.cross(to).dot(axis) < 0.0 {
            -unsigned
        } else {
            unsigned
        }
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;
    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2}, {:.2})", self.x, self.y, self.z)
    }
}

/// The agent's local reference frame as reported by the transform provider.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentPose {
    /// World position.
    pub position: Vec3,
    /// Forward axis of the agent body.
    pub forward: Vec3,
    /// Up axis of the agent body.
    pub up: Vec3,
}

impl AgentPose {
    /// Creates a pose from position and body axes.
    pub fn new(position: Vec3, forward: Vec3, up: Vec3) -> Self {
        Self {
            position,
            forward,
            up,
        }
    }

    /// A pose at a given position with the conventional axes (+z forward, +y up).
    pub fn at(position: Vec3) -> Self {
        Self::new(position, Vec3::unit_z(), Vec3::unit_y())
    }
}

impl Default for AgentPose {
    fn default() -> Self {
        Self::at(Vec3::zero())
    }
}
