/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Built-in types like `Vector2`, `GString` and `Variant`.
//!
//! Value types (`Vector2`, `Vector3`, `Color`, `Transform2D`) are plain `#[repr(C)]` Rust structs laid out exactly like their
//! engine counterparts, so they cross the ABI by address without conversion. Engine-managed types (`GString`, `StringName`,
//! `Variant`, `Callable`) wrap opaque storage that only the engine reads and writes.

mod callable;
mod color;
mod real_inner;
mod string;
mod transform2d;
mod variant;
mod vectors;

pub use callable::*;
pub use color::*;
pub use real_inner::*;
pub use string::{GString, StringName};
pub use transform2d::*;
pub use variant::*;
pub use vectors::*;

pub use crate::sys::VariantType;
