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

#![deny(unsafe_op_in_unsafe_fn)]

mod storage;

pub mod builtin;
pub mod classes;
pub mod global;
pub mod init;
pub mod meta;
pub mod obj;
pub mod registry;

#[doc(hidden)]
pub mod private;

pub use gdglue_ffi as sys;

// Output of generated code. Mimics the file structure, symbols are re-exported.
#[rustfmt::skip]
#[allow(unused_imports, dead_code, non_upper_case_globals, non_snake_case)]
#[allow(clippy::too_many_arguments, clippy::let_and_return, clippy::new_ret_no_self)]
#[allow(clippy::wrong_self_convention, clippy::needless_lifetimes)]
mod gen;

/// Engine version the bindings were generated from, e.g. `"4.3.0"`.
pub use gen::central::{GODOT_VERSION, GODOT_VERSION_STRING};
