/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

use sys::{ffi_methods, GodotFfi};

use crate::builtin::{real, RVec2, RVec3};
use crate::sys;

/// Vector used for 2D math using floating point coordinates.
///
/// Layout-compatible with the engine's `Vector2` (two 32-bit floats), so it is passed to the engine by address.
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector2 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,
}

impl Vector2 {
    /// Vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);

    /// Vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector in +X direction.
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    /// Unit vector in +Y direction (down in 2D coordinate system).
    pub const DOWN: Self = Self::new(0.0, 1.0);

    /// Constructs a new `Vector2` from the given `x` and `y`.
    pub const fn new(x: real, y: real) -> Self {
        Self { x, y }
    }

    /// Constructs a new `Vector2` with both components set to `v`.
    pub const fn splat(v: real) -> Self {
        Self::new(v, v)
    }

    /// Converts the corresponding `glam` type to `Self`.
    pub fn from_glam(v: RVec2) -> Self {
        Self::new(v.x, v.y)
    }

    /// Converts `self` to the corresponding `glam` type.
    pub fn to_glam(self) -> RVec2 {
        RVec2::new(self.x, self.y)
    }

    pub fn length(self) -> real {
        self.to_glam().length()
    }

    pub fn dot(self, with: Self) -> real {
        self.to_glam().dot(with.to_glam())
    }

    /// Returns the vector scaled to unit length, or zero for the zero vector.
    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }

    /// Returns the vector rotated by `angle` radians.
    pub fn rotated(self, angle: real) -> Self {
        Self::from_glam(RVec2::from_angle(angle).rotate(self.to_glam()))
    }

    pub fn is_equal_approx(self, other: Self) -> bool {
        self.to_glam().abs_diff_eq(other.to_glam(), 1e-5)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// SAFETY: `#[repr(C)]` with two `f32`, identical to the engine type.
unsafe impl GodotFfi for Vector2 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector2
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

/// Vector used for 3D math using floating point coordinates.
///
/// Layout-compatible with the engine's `Vector3` (three 32-bit floats).
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vector3 {
    /// The vector's X component.
    pub x: real,

    /// The vector's Y component.
    pub y: real,

    /// The vector's Z component.
    pub z: real,
}

impl Vector3 {
    /// Vector with all components set to `0.0`.
    pub const ZERO: Self = Self::splat(0.0);

    /// Vector with all components set to `1.0`.
    pub const ONE: Self = Self::splat(1.0);

    /// Unit vector in +Y direction.
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);

    /// Constructs a new `Vector3` from the given `x`, `y` and `z`.
    pub const fn new(x: real, y: real, z: real) -> Self {
        Self { x, y, z }
    }

    /// Constructs a new `Vector3` with all components set to `v`.
    pub const fn splat(v: real) -> Self {
        Self::new(v, v, v)
    }

    /// Converts the corresponding `glam` type to `Self`.
    pub fn from_glam(v: RVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Converts `self` to the corresponding `glam` type.
    pub fn to_glam(self) -> RVec3 {
        RVec3::new(self.x, self.y, self.z)
    }

    pub fn length(self) -> real {
        self.to_glam().length()
    }

    pub fn dot(self, with: Self) -> real {
        self.to_glam().dot(with.to_glam())
    }

    pub fn cross(self, with: Self) -> Self {
        Self::from_glam(self.to_glam().cross(with.to_glam()))
    }

    pub fn normalized(self) -> Self {
        Self::from_glam(self.to_glam().normalize_or_zero())
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// SAFETY: `#[repr(C)]` with three `f32`, identical to the engine type.
unsafe impl GodotFfi for Vector3 {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Vector3
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

sys::static_assert_eq_size!(Vector2, [f32; 2]);
sys::static_assert_eq_size!(Vector3, [f32; 3]);

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Operators

macro_rules! impl_vector_operators {
    ($Vector:ty, $( $field:ident ),+) => {
        impl Add for $Vector {
            type Output = Self;

            fn add(self, rhs: Self) -> Self {
                Self { $( $field: self.$field + rhs.$field ),+ }
            }
        }

        impl AddAssign for $Vector {
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl Sub for $Vector {
            type Output = Self;

            fn sub(self, rhs: Self) -> Self {
                Self { $( $field: self.$field - rhs.$field ),+ }
            }
        }

        impl SubAssign for $Vector {
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl Mul<real> for $Vector {
            type Output = Self;

            fn mul(self, rhs: real) -> Self {
                Self { $( $field: self.$field * rhs ),+ }
            }
        }

        impl Neg for $Vector {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $( $field: -self.$field ),+ }
            }
        }
    };
}

impl_vector_operators!(Vector2, x, y);
impl_vector_operators!(Vector3, x, y, z);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glam_round_trip() {
        let v = Vector2::new(1.5, -2.0);
        assert_eq!(Vector2::from_glam(v.to_glam()), v);

        let w = Vector3::new(0.25, 8.0, -3.0);
        assert_eq!(Vector3::from_glam(w.to_glam()), w);
    }

    #[test]
    fn components_are_real() {
        let half: real = 0.5_f32;
        let v = Vector3::new(half, half, half);

        assert_eq!(v.x, half);
        assert_eq!(std::mem::size_of::<Vector2>(), 2 * std::mem::size_of::<real>());
        assert_eq!(std::mem::size_of::<Vector3>(), 3 * std::mem::size_of::<real>());
    }

    #[test]
    fn operators() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -1.0);
        assert_eq!(a + b, Vector2::new(4.0, 1.0));
        assert_eq!(a - b, Vector2::new(-2.0, 3.0));
        assert_eq!(-a * 2.0, Vector2::new(-2.0, -4.0));

        assert_eq!(Vector3::UP.cross(Vector3::new(1.0, 0.0, 0.0)), Vector3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn rotation() {
        let rotated = Vector2::RIGHT.rotated(std::f32::consts::FRAC_PI_2);
        assert!(rotated.is_equal_approx(Vector2::DOWN));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_round_trip() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let json = serde_json::to_string(&v).unwrap();
        assert_eq!(json, r#"{"x":1.0,"y":2.0,"z":3.0}"#);
        assert_eq!(serde_json::from_str::<Vector3>(&json).unwrap(), v);
    }
}
