/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

pub use super::builtin::{
    Callable, Color, GString, StringName, Transform2D, Variant, VariantType, Vector2, Vector3,
};
pub use super::classes::{
    CanvasItem, Control, ItemList, Node, Node2D, Node3D, Object, RefCounted, Resource, Timer,
};
pub use super::global::{godot_error, godot_script_error, godot_warn, Error};
pub use super::init::{ExtensionLibrary, InitLevel};
pub use super::meta::error::{CallError, ConvertError};
pub use super::meta::{AsObjectArg, FromGodot, GodotConvert, ToGodot};
pub use super::obj::{Base, Gd, GdMut, GdRef, GodotClass, Inherits, InstanceId, UserClass};
pub use super::registry::signal::{SignalHandler, TypedSignal};
pub use super::registry::ClassBuilder;

// Re-export macros.
pub use super::{gdextension_entry, godot_class};

// Make trait methods available.
#[rustfmt::skip] // One per line.
mod trait_reexports {
    pub use crate::meta::EngineEnum as _;
    pub use crate::obj::NewAlloc as _;
    pub use crate::obj::NewGd as _;
    pub use crate::obj::WithSignals as _; // Gd::signals()
}

pub use trait_reexports::*;
