/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::ops::Mul;

use sys::{ffi_methods, GodotFfi};

use crate::builtin::{real, RAffine2, RVec2, Vector2};
use crate::sys;

/// Affine 2D transform (2x3 matrix).
///
/// Two basis column vectors `a` and `b`, plus the origin:
/// ```text
/// [ a.x  b.x  origin.x ]
/// [ a.y  b.y  origin.y ]
/// ```
#[derive(Default, Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Transform2D {
    /// The first basis vector. This is the `x` field in the engine.
    pub a: Vector2,

    /// The second basis vector. This is the `y` field in the engine.
    pub b: Vector2,

    /// The origin of the transform.
    pub origin: Vector2,
}

impl Transform2D {
    /// The identity transform: no translation, rotation or scaling.
    pub const IDENTITY: Self = Self::from_cols(Vector2::new(1.0, 0.0), Vector2::new(0.0, 1.0), Vector2::ZERO);

    /// Create a new `Transform2D` with the given column vectors.
    pub const fn from_cols(a: Vector2, b: Vector2, origin: Vector2) -> Self {
        Self { a, b, origin }
    }

    /// Create a new `Transform2D` which rotates by `angle` radians and translates by `origin`.
    pub fn from_angle_origin(angle: real, origin: Vector2) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::from_cols(Vector2::new(cos, sin), Vector2::new(-sin, cos), origin)
    }

    /// Rotation angle in radians.
    pub fn rotation(&self) -> real {
        self.a.y.atan2(self.a.x)
    }

    /// Transforms a point: applies the basis, then the translation.
    pub fn xform(&self, point: Vector2) -> Vector2 {
        Vector2::from_glam(self.to_glam().transform_point2(point.to_glam()))
    }

    pub fn is_equal_approx(&self, other: &Self) -> bool {
        self.a.is_equal_approx(other.a) && self.b.is_equal_approx(other.b) && self.origin.is_equal_approx(other.origin)
    }

    pub fn from_glam(affine: RAffine2) -> Self {
        Self::from_cols(
            Vector2::from_glam(affine.matrix2.x_axis),
            Vector2::from_glam(affine.matrix2.y_axis),
            Vector2::from_glam(affine.translation),
        )
    }

    pub fn to_glam(self) -> RAffine2 {
        RAffine2::from_cols(self.a.to_glam(), self.b.to_glam(), RVec2::new(self.origin.x, self.origin.y))
    }
}

impl Mul for Transform2D {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self::from_glam(self.to_glam() * rhs.to_glam())
    }
}

impl fmt::Display for Transform2D {
    /// Same format as the engine: `[X: (a.x, a.y), Y: (b.x, b.y), O: (origin.x, origin.y)]`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Transform2D { a, b, origin } = self;
        write!(f, "[X: {a}, Y: {b}, O: {origin}]")
    }
}

// SAFETY: `#[repr(C)]` with six `f32` in engine order (x axis, y axis, origin).
unsafe impl GodotFfi for Transform2D {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Transform2D
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

sys::static_assert_eq_size!(Transform2D, [f32; 6]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_and_translation() {
        let t = Transform2D::from_angle_origin(std::f32::consts::FRAC_PI_2, Vector2::new(10.0, 0.0));
        let p = t.xform(Vector2::new(1.0, 0.0));

        assert!(p.is_equal_approx(Vector2::new(10.0, 1.0)));
        assert!((t.rotation() - std::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn identity_composition() {
        let t = Transform2D::from_angle_origin(0.3, Vector2::new(-2.0, 5.0));
        assert!((Transform2D::IDENTITY * t).is_equal_approx(&t));
        assert_eq!(Transform2D::from_glam(t.to_glam()), t);
    }

    #[test]
    fn display_matches_engine() {
        assert_eq!(Transform2D::IDENTITY.to_string(), "[X: (1, 0), Y: (0, 1), O: (0, 0)]");
    }
}
