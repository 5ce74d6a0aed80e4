/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdglue**](https://docs.rs/gdglue)
//!
//! Do not depend on this crate directly, instead use the `gdglue` crate.
//! No SemVer or other guarantees are provided.
//!
//! Contains the raw GDExtension ABI, the process-wide engine binding and the method bind cache.

#![deny(unsafe_op_in_unsafe_fn)]

mod binding;
mod builtin_lifecycle;
mod gdextension_interface;
mod global;
mod godot_ffi;
mod method_table;
mod opaque;
mod string_cache;
mod toolbox;
mod variant_type;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Public re-exports

pub use binding::{
    builtin_lifecycle_api, config, deinitialize, get_interface, get_library, initialize, is_initialized, BindingConfig,
};
pub use builtin_lifecycle::BuiltinLifecycleTable;
pub use gdextension_interface::*;
pub use global::{Global, GlobalGuard};
pub use godot_ffi::{GodotFfi, GodotNullableFfi};
pub use method_table::{ClassMethodBind, ClassMethodTable, LazyClassMethodTable, MethodKey};
pub use opaque::{Opaque, OpaqueCallable, OpaqueString, OpaqueStringName, OpaqueVariant};
pub use string_cache::StringCache;
pub use toolbox::*;
pub use variant_type::VariantType;
