/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Meta-information about engine types, their conversions and the call convention.
//!
//! # Conversions between types
//!
//! Types passed to and from the engine implement [`GodotConvert`], plus [`ToGodot`] and/or [`FromGodot`]. Every such type
//! is represented in the engine through a [`GodotType`] ("via" type), which in turn has a fixed FFI representation.
//!
//! # Calls
//!
//! Outbound calls are monomorphizations of [`Signature`] over a parameter tuple ([`OutParamTuple`]) and a return type.
//! Inbound calls (virtual overrides, signal handlers) convert the engine's argument list through [`InParamTuple`].

mod class_name;
mod godot_convert;
mod object_arg;
mod param_tuple;
mod signature;
mod traits;

pub mod error;
pub(crate) mod sealed;

pub use class_name::ClassName;
pub use godot_convert::{FromGodot, GodotConvert, ToGodot};
pub use object_arg::{AsObjectArg, ObjectArg};
pub use param_tuple::{InParamTuple, OutParamTuple, ParamTuple};
pub use signature::{CallContext, Signature};
pub use traits::{EngineEnum, GodotFfi, GodotFfiVariant, GodotNullableFfi, GodotType};

#[cfg(feature = "trace")]
pub use signature::trace;

