//! 3D vector primitives for pitch kinematics.

use serde::{Deserialize, Serialize};

/// 3D vector with the operations the integrator and metrics code need.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
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

    /// Zero vector.
    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Magnitude (length) of the vector.
    #[inline(always)]
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Squared magnitude (avoids sqrt, cheaper for comparisons).
    #[inline(always)]
    pub fn magnitude_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Magnitude of the horizontal (x, y) component.
    #[inline(always)]
    pub fn magnitude_xy(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Dot product.
    #[inline(always)]
    pub fn dot(&self, other: &Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Element-wise addition.
    #[inline(always)]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Element-wise subtraction.
    #[inline(always)]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Scalar multiplication.
    #[inline(always)]
    pub fn mul(&self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }

    /// Fused `self + other * scalar`, the kernel of an Euler step.
    #[inline(always)]
    pub fn add_scaled(&self, other: &Self, scalar: f64) -> Self {
        Self::new(
            self.x + other.x * scalar,
            self.y + other.y * scalar,
            self.z + other.z * scalar,
        )
    }

    /// Distance to another vector.
    pub fn distance(&self, other: &Self) -> f64 {
        self.sub(other).magnitude()
    }

    /// True when every component is a finite number.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Convert to array for array-based consumers.
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Convert from array.
    pub fn from_array(arr: &[f64; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}
