/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::builtin::Variant;
use crate::meta::error::{ConvertError, FromFfiError};
use crate::meta::{FromGodot, GodotConvert, GodotNullableFfi, GodotType, ToGodot};

// ToGodot/FromGodot/GodotConvert impls of engine enums are generated, co-located with their definitions.

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Option<T>

impl<T> GodotType for Option<T>
where
    T: GodotType,
    T::Ffi: GodotNullableFfi,
{
    type Ffi = T::Ffi;

    fn to_ffi(&self) -> Self::Ffi {
        GodotNullableFfi::flatten_option(self.as_ref().map(|t| t.to_ffi()))
    }

    fn into_ffi(self) -> Self::Ffi {
        GodotNullableFfi::flatten_option(self.map(|t| t.into_ffi()))
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        if ffi.is_null() {
            return Ok(None);
        }

        T::try_from_ffi(ffi).map(Some)
    }

    fn godot_type_name() -> String {
        T::godot_type_name()
    }
}

impl<T> GodotConvert for Option<T>
where
    T: GodotConvert,
    Option<T::Via>: GodotType,
{
    type Via = Option<T::Via>;
}

impl<T> ToGodot for Option<T>
where
    T: ToGodot,
    Option<T::Via>: GodotType,
{
    fn to_godot(&self) -> Self::Via {
        self.as_ref().map(T::to_godot)
    }

    fn to_variant(&self) -> Variant {
        match self {
            Some(inner) => inner.to_variant(),
            None => Variant::nil(),
        }
    }
}

impl<T> FromGodot for Option<T>
where
    T: FromGodot,
    Option<T::Via>: GodotType,
{
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        match via {
            Some(via) => T::try_from_godot(via).map(Some),
            None => Ok(None),
        }
    }

    fn try_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        if variant.is_nil() {
            return Ok(None);
        }

        T::try_from_variant(variant).map(Some)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Scalars

macro_rules! impl_godot_scalar {
    ($T:ty as $Via:ty, $err:path) => {
        impl GodotType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                (*self).into()
            }

            fn into_ffi(self) -> Self::Ffi {
                self.into()
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                // The std error ("out of range integral type conversion attempted") adds nothing.
                Self::try_from(ffi).map_err(|_rust_err| $err.into_error(ffi))
            }

            fn godot_type_name() -> String {
                <$Via as GodotType>::godot_type_name()
            }
        }

        impl_godot_scalar!(@convert $T);
    };

    ($T:ty as $Via:ty; lossy) => {
        impl GodotType for $T {
            type Ffi = $Via;

            fn to_ffi(&self) -> Self::Ffi {
                *self as $Via
            }

            fn into_ffi(self) -> Self::Ffi {
                self as $Via
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Ok(ffi as $T)
            }

            fn godot_type_name() -> String {
                <$Via as GodotType>::godot_type_name()
            }
        }

        impl_godot_scalar!(@convert $T);
    };

    (@convert $T:ty) => {
        impl GodotConvert for $T {
            type Via = $T;
        }

        impl ToGodot for $T {
            fn to_godot(&self) -> Self::Via {
                *self
            }
        }

        impl FromGodot for $T {
            fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
                Ok(via)
            }
        }
    };
}

impl_godot_scalar!(i32 as i64, FromFfiError::I32);
impl_godot_scalar!(u32 as i64, FromFfiError::U32);
impl_godot_scalar!(f32 as f64; lossy);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_range() {
        assert_eq!(i32::try_from_ffi(-7).ok(), Some(-7));
        assert_eq!(u32::try_from_ffi(i64::from(u32::MAX)).ok(), Some(u32::MAX));
        assert_eq!(u32::into_ffi(3), 3i64);
        assert_eq!(f32::try_from_ffi(0.5).ok(), Some(0.5f32));
    }
}
