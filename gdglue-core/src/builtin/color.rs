/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use sys::{ffi_methods, GodotFfi};

use crate::builtin::RVec4;
use crate::sys;

/// Color built from normalized RGBA components, as 32-bit floats.
///
/// Unlike vectors, colors are always single-precision, also in engines built with `precision=double`.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Color {
    /// The color's red component.
    pub r: f32,

    /// The color's green component.
    pub g: f32,

    /// The color's blue component.
    pub b: f32,

    /// The color's alpha component. 0 is fully transparent, 1 fully opaque.
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT_BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 0.0);

    /// Constructs a new `Color` with the given components.
    pub const fn from_rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Constructs a new opaque `Color` with the given components.
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self::from_rgba(r, g, b, 1.0)
    }

    /// Constructs a color from 8-bit components, e.g. `0xff` for full intensity.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        let norm = |c: u8| c as f32 / 255.0;
        Self::from_rgba(norm(r), norm(g), norm(b), norm(a))
    }

    /// Returns a copy with the alpha component replaced.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self::from_rgba(self.r, self.g, self.b, a)
    }

    /// Component-wise linear interpolation towards `to`.
    pub fn lerp(self, to: Self, weight: f32) -> Self {
        Self::from_glam(self.to_glam().lerp(to.to_glam(), weight))
    }

    pub fn from_glam(v: RVec4) -> Self {
        Self::from_rgba(v.x, v.y, v.z, v.w)
    }

    pub fn to_glam(self) -> RVec4 {
        RVec4::new(self.r, self.g, self.b, self.a)
    }
}

impl Default for Color {
    /// Opaque black, same as the engine's default-constructed color.
    fn default() -> Self {
        Self::BLACK
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

// SAFETY: `#[repr(C)]` with four `f32`, identical to the engine type.
unsafe impl GodotFfi for Color {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Color
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

sys::static_assert_eq_size!(Color, [f32; 4]);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        assert_eq!(Color::default(), Color::from_rgba(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::from_rgba8(255, 0, 255, 255), Color::from_rgb(1.0, 0.0, 1.0));
        assert_eq!(Color::WHITE.with_alpha(0.5).a, 0.5);
    }

    #[test]
    fn lerp_halfway() {
        let grey = Color::BLACK.lerp(Color::WHITE, 0.5);
        assert_eq!(grey, Color::from_rgb(0.5, 0.5, 0.5));
    }
}
