/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::CallError;
use crate::meta::CallContext;
use crate::sys;

mod impls;

/// Represents a parameter list as Rust tuple where each tuple element is one parameter.
///
/// This trait only contains metadata for the parameter list, the actual functionality is contained in [`InParamTuple`] and
/// [`OutParamTuple`].
pub trait ParamTuple: Sized {
    /// The number of elements in this parameter list.
    const LEN: usize;

    /// Return a string representing the arguments.
    fn format_args(&self) -> String;
}

/// Represents a parameter list that is received from the engine.
///
/// Used for virtual method overrides and signal handlers, which the engine invokes with a packed `Variant` argument list.
/// This is _not_ used when calling an engine method from Rust.
pub trait InParamTuple: ParamTuple {
    /// Converts the engine's argument list to `Self`.
    ///
    /// The argument count must match [`LEN`](ParamTuple::LEN) exactly; extra or missing arguments are an error, not coerced.
    fn from_variant_array(args: &[&Variant], call_ctx: &CallContext) -> Result<Self, CallError>;
}

/// Represents a parameter list that is used to call engine methods.
///
/// This is _not_ used when the engine calls a Rust override.
pub trait OutParamTuple: ParamTuple {
    /// Call `f` on the tuple `self` by first converting `self` to an array of [`Variant`]s.
    fn with_variants<F, R>(self, f: F) -> R
    where
        F: FnOnce(&[Variant]) -> R;

    /// Call `f` on the tuple `self` by first converting `self` to an array of engine type pointers.
    #[doc(hidden)]
    fn with_type_pointers<F, R>(self, f: F) -> R
    where
        F: FnOnce(&[sys::GDExtensionConstTypePtr]) -> R;

    /// Converts `self` to a list of variants, calling [`to_variant`](crate::meta::ToGodot::to_variant) on each argument.
    fn to_variant_array(&self) -> Vec<Variant>;
}
