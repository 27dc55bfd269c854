//! 4D Vector type

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

use crate::{RotationPlane, Vec3};

/// 4D Vector with x, y, z, w components
/// The w component represents the 4th spatial dimension (ana/kata)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0, w: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0, w: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0, w: 0.0 };
    pub const W: Self = Self { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    /// Create a new Vec4
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Dot product
    #[inline]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }

    /// Length squared (faster than length)
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Length (magnitude)
    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Drop the w component
    #[inline]
    pub fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Component by axis index (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// # Panics
    /// Panics if `axis > 3`.
    #[inline]
    pub fn axis(self, axis: usize) -> f32 {
        match axis {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.w,
            _ => panic!("Vec4 axis index {} out of range", axis),
        }
    }

    /// Mutable component by axis index (0=X, 1=Y, 2=Z, 3=W)
    ///
    /// # Panics
    /// Panics if `axis > 3`.
    #[inline]
    pub fn axis_mut(&mut self, axis: usize) -> &mut f32 {
        match axis {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("Vec4 axis index {} out of range", axis),
        }
    }

    /// Number of components that are not exactly zero
    ///
    /// Exact comparison: used on lattice differences where every value is
    /// built from the same two discrete coordinates.
    #[inline]
    pub fn nonzero_count(self) -> usize {
        [self.x, self.y, self.z, self.w]
            .iter()
            .filter(|c| **c != 0.0)
            .count()
    }

    /// Rotate within a single plane, leaving the other two components untouched
    ///
    /// For the plane (a, b) and angle θ in degrees:
    /// `a' = a·cos θ + b·sin θ`, `b' = −a·sin θ + b·cos θ`
    pub fn rotated_in_plane(self, plane: RotationPlane, degrees: f32) -> Self {
        let (sn, cs) = degrees.to_radians().sin_cos();
        let (p1, p2) = plane.axes();
        let a = self.axis(p1);
        let b = self.axis(p2);

        let mut out = self;
        *out.axis_mut(p1) = a * cs + b * sn;
        *out.axis_mut(p2) = -a * sn + b * cs;
        out
    }
}

// Operator overloads

impl std::ops::Sub for Vec4 {
    type Output = Self;
    #[inline]
    fn sub(self, other: Self) -> Self {
        Self::new(
            self.x - other.x,
            self.y - other.y,
            self.z - other.z,
            self.w - other.w,
        )
    }
}

impl std::ops::Mul<f32> for Vec4 {
    type Output = Self;
    #[inline]
    fn mul(self, scalar: f32) -> Self {
        Self::new(
            self.x * scalar,
            self.y * scalar,
            self.z * scalar,
            self.w * scalar,
        )
    }
}

impl std::ops::Neg for Vec4 {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, -self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_new() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn test_dot() {
        let a = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vec4::new(5.0, 6.0, 7.0, 8.0);
        // 1*5 + 2*6 + 3*7 + 4*8 = 5 + 12 + 21 + 32 = 70
        assert_eq!(a.dot(b), 70.0);
    }

    #[test]
    fn test_length() {
        let v2 = Vec4::new(1.0, 1.0, 1.0, 1.0);
        assert!((v2.length() - 2.0).abs() < EPSILON);
    }

    #[test]
    fn test_sub() {
        let a = Vec4::new(5.0, 6.0, 7.0, 8.0);
        let b = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(a - b, Vec4::new(4.0, 4.0, 4.0, 4.0));
    }

    #[test]
    fn test_xyz() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.xyz(), Vec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_axis_access() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v.axis(3), 4.0);
        *v.axis_mut(1) = 9.0;
        assert_eq!(v.y, 9.0);
    }

    #[test]
    #[should_panic]
    fn test_axis_out_of_range() {
        Vec4::ZERO.axis(4);
    }

    #[test]
    fn test_nonzero_count() {
        assert_eq!(Vec4::ZERO.nonzero_count(), 0);
        assert_eq!(Vec4::new(0.0, -1.0, 0.0, 0.0).nonzero_count(), 1);
        assert_eq!(Vec4::new(1.0, 1.0, 0.0, 1.0).nonzero_count(), 3);
    }

    #[test]
    fn test_xw_rotation_90() {
        // x' = x cos + w sin, w' = -x sin + w cos
        let rotated = Vec4::X.rotated_in_plane(RotationPlane::XW, 90.0);
        assert!(vec_approx_eq(rotated, -Vec4::W), "Expected -W, got {:?}", rotated);

        let rotated = Vec4::W.rotated_in_plane(RotationPlane::XW, 90.0);
        assert!(vec_approx_eq(rotated, Vec4::X), "Expected X, got {:?}", rotated);
    }

    #[test]
    fn test_yz_rotation_90() {
        let rotated = Vec4::Y.rotated_in_plane(RotationPlane::YZ, 90.0);
        assert!(vec_approx_eq(rotated, -Vec4::Z), "Expected -Z, got {:?}", rotated);
    }

    #[test]
    fn test_plane_rotation_leaves_other_axes() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let rotated = v.rotated_in_plane(RotationPlane::XW, 37.0);
        assert_eq!(rotated.y, 2.0);
        assert_eq!(rotated.z, 3.0);
    }

    #[test]
    fn test_rotation_preserves_length() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        for plane in RotationPlane::ALL {
            let rotated = v.rotated_in_plane(plane, 70.5);
            assert!((v.length() - rotated.length()).abs() < EPSILON);
        }
    }

    #[test]
    fn test_zero_angle_is_identity() {
        let v = Vec4::new(1.0, -2.0, 3.0, -4.0);
        assert_eq!(v.rotated_in_plane(RotationPlane::YZ, 0.0), v);
    }
}
