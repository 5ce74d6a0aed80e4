/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Sealed trait that can be used to restrict trait impls.

// To ensure the user does not implement `GodotType` for their own types.
use crate::builtin::*;
use crate::meta::traits::{GodotNullableFfi, GodotType};
use crate::meta::ObjectArg;
use crate::obj::{Gd, GodotClass};

pub trait Sealed {}
impl Sealed for Callable {}
impl Sealed for Vector2 {}
impl Sealed for Vector3 {}
impl Sealed for Color {}
impl Sealed for GString {}
impl Sealed for StringName {}
impl Sealed for Transform2D {}
impl Sealed for bool {}
impl Sealed for i64 {}
impl Sealed for i32 {}
impl Sealed for u32 {}
impl Sealed for f64 {}
impl Sealed for f32 {}
impl Sealed for () {}
impl Sealed for Variant {}
impl<T: GodotClass> Sealed for Gd<T> {}
impl<T: GodotClass> Sealed for ObjectArg<T> {}
impl<T> Sealed for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
}
