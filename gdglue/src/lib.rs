/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Rust interop layer over GDExtension
//!
//! **gdglue** binds Rust code to a game engine through the GDExtension C interface. It covers the glue between a typed
//! Rust API and the engine's untyped, name-based ABI:
//!
//! * **Handles:** [`Gd<T>`][crate::obj::Gd] wraps an engine object, checks that it is still alive before every call and
//!   manages the reference count of ref-counted classes.
//! * **Method calls:** every engine class in [`classes`] resolves its method binds once, on first use, and forwards calls
//!   through one monomorphized thunk per signature. Default parameters are filled in on the Rust side.
//! * **Virtual dispatch:** user classes declared with [`godot_class!`] override engine virtual methods through
//!   [`ClassBuilder::virtual_method()`][crate::registry::ClassBuilder::virtual_method]. The engine's callbacks go through a
//!   flattened per-class table with strict argument count checks.
//! * **Signals:** typed handlers connect to engine signals and can be disconnected again; see
//!   [`registry::signal`].
//! * **Names:** property, method and signal names are interned once per class, see
//!   [`NameTable`][crate::registry::names::NameTable].
//!
//! # Example
//!
//! ```no_run
//! use gdglue::prelude::*;
//! use gdglue::classes::INode;
//!
//! struct Mover {
//!     base: Base<Node2D>,
//!     speed: f64,
//! }
//!
//! godot_class!(Mover: Node2D);
//!
//! impl UserClass for Mover {
//!     fn init(base: Base<Node2D>) -> Self {
//!         Self { base, speed: 100.0 }
//!     }
//!
//!     fn register(class: &mut ClassBuilder<Self>) {
//!         class.virtual_method::<INode::Process, _>(|this, (delta,)| {
//!             let distance = this.speed * delta;
//!             println!("{} moved by {distance}", this.base.get_name());
//!         });
//!     }
//! }
//!
//! struct MyExtension;
//!
//! unsafe impl ExtensionLibrary for MyExtension {
//!     fn on_level_init(level: InitLevel) {
//!         if level == InitLevel::Scene {
//!             gdglue::registry::register_class::<Mover>();
//!         }
//!     }
//! }
//!
//! gdextension_entry!(MyExtension);
//! ```
//!
//! # Cargo features
//!
//! * **`safeguards-strict`**: on top of the liveness check, verify the dynamic class of the receiver on every call.
//! * **`serde`**: `Serialize`/`Deserialize` for value types such as [`Vector2`][crate::builtin::Vector2].
//! * **`codegen-rustfmt`**: format the generated class files.

#[doc(inline)]
pub use gdglue_core::{builtin, classes, global, meta, obj, registry};

#[doc(hidden)]
pub use gdglue_core::sys;

#[doc(hidden)]
pub use gdglue_core::private;

/// Entry point and initialization levels.
pub mod init {
    pub use gdglue_core::gdextension_entry;
    pub use gdglue_core::init::*;
}

pub use gdglue_core::{gdextension_entry, godot_class};

pub mod prelude;
