/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Floating-point type used by vectors, colors and transforms. This is the equivalent of `real_t` in the engine's C++ code.
///
/// Always `f32`; engines compiled with `precision=double` are not supported. Scalar `float` parameters of engine methods
/// are `f64` regardless.
#[allow(non_camel_case_types)]
pub type real = f32;

pub(crate) type RVec2 = glam::f32::Vec2;
pub(crate) type RVec3 = glam::f32::Vec3;
pub(crate) type RVec4 = glam::f32::Vec4;
pub(crate) type RAffine2 = glam::f32::Affine2;
