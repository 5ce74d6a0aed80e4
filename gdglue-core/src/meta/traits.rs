/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::ConvertError;
use crate::meta::{sealed, FromGodot, GodotConvert, ToGodot};
use crate::sys;

// Re-export sys traits in this module, so all are in one place.
pub use sys::{GodotFfi, GodotNullableFfi};

/// Conversion of [`GodotFfi`] types to/from [`Variant`].
#[doc(hidden)]
pub trait GodotFfiVariant: Sized + GodotFfi {
    fn ffi_to_variant(&self) -> Variant;
    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError>;
}

/// Type that is directly representable in the engine.
///
/// This trait cannot be implemented for custom user types; for those, [`GodotConvert`] exists instead.
/// A type implements `GodotType` when the engine can store it inside a `Variant` and pass it through method calls.
///
/// Unlike [`GodotFfi`], types implementing this trait don't need to fully represent their engine type. For instance,
/// `i32` cannot hold every value of the engine's `int`, but it is still a `GodotType`; conversion from `int` can fail.
pub trait GodotType: GodotConvert<Via = Self> + ToGodot + FromGodot + sealed::Sealed + 'static {
    #[doc(hidden)]
    type Ffi: GodotFfiVariant;

    #[doc(hidden)]
    fn to_ffi(&self) -> Self::Ffi;

    #[doc(hidden)]
    fn into_ffi(self) -> Self::Ffi;

    #[doc(hidden)]
    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError>;

    #[doc(hidden)]
    fn from_ffi(ffi: Self::Ffi) -> Self {
        Self::try_from_ffi(ffi).unwrap_or_else(|err| panic!("GodotType::from_ffi() failed: {err}"))
    }

    /// Name of the type as it appears in the engine API, e.g. `"int"` or `"Node"`.
    #[doc(hidden)]
    fn godot_type_name() -> String;
}

/// Auto-implemented for all engine-provided enums.
pub trait EngineEnum: Copy {
    fn try_from_ord(ord: i32) -> Option<Self>;

    /// Ordinal value of the enumerator, as specified by the engine.
    /// This is not necessarily unique.
    fn ord(self) -> i32;

    fn from_ord(ord: i32) -> Self {
        Self::try_from_ord(ord).unwrap_or_else(|| panic!("ordinal {ord} does not map to any enumerator"))
    }

    /// The name of the enumerator, as it appears in the engine API.
    ///
    /// In case of multiple constants with the same ordinal, returns the first one. Unknown values yield the empty string.
    fn as_str(&self) -> &'static str;
}
