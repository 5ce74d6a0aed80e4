/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;
use crate::builtin::*;
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{GodotFfiVariant, GodotType};
use crate::sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macro definitions

macro_rules! impl_ffi_variant {
    ($T:ty, $variant_type:ident $(; $godot_type_name:ident)?) => {
        impl GodotFfiVariant for $T {
            fn ffi_to_variant(&self) -> Variant {
                let converter = sys::builtin_lifecycle_api().variant_from_type(VariantType::$variant_type);

                // SAFETY: the converter reads a value of this type and initializes the variant.
                unsafe {
                    Variant::new_with_var_uninit(|variant_ptr| {
                        converter(variant_ptr, sys::force_mut_ptr(self.sys()));
                    })
                }
            }

            fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
                // Type check -- at the moment, a strict match is required.
                let actual = variant.get_type();
                if actual != Self::variant_type() {
                    return Err(FromVariantError::BadType {
                        expected: Self::variant_type(),
                        actual,
                    }
                    .into_error(variant.clone()));
                }

                let converter = sys::builtin_lifecycle_api().variant_to_type(VariantType::$variant_type);

                // SAFETY: type checked above; the converter initializes the value from the variant's payload.
                let result = unsafe {
                    Self::new_from_sys_init(|self_ptr| {
                        converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
                    })
                };

                Ok(result)
            }
        }

        impl GodotType for $T {
            type Ffi = Self;

            fn to_ffi(&self) -> Self::Ffi {
                self.clone()
            }

            fn into_ffi(self) -> Self::Ffi {
                self
            }

            fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
                Ok(ffi)
            }

            impl_ffi_variant!(@godot_type_name $T $(, $godot_type_name)?);
        }

        crate::impl_godot_as_self!($T);
    };

    (@godot_type_name $T:ty) => {
        fn godot_type_name() -> String {
            stringify!($T).into()
        }
    };

    (@godot_type_name $T:ty, $godot_type_name:ident) => {
        fn godot_type_name() -> String {
            stringify!($godot_type_name).into()
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// General impls

#[rustfmt::skip]
#[allow(clippy::module_inception)]
mod impls {
    use super::*;

    impl_ffi_variant!(bool, Bool);
    impl_ffi_variant!(i64, Int; int);
    impl_ffi_variant!(f64, Float; float);
    impl_ffi_variant!(Vector2, Vector2);
    impl_ffi_variant!(Vector3, Vector3);
    impl_ffi_variant!(Transform2D, Transform2D);
    impl_ffi_variant!(Color, Color);
    impl_ffi_variant!(GString, String; String);
    impl_ffi_variant!(StringName, StringName);
    impl_ffi_variant!(Callable, Callable);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Explicit impls

// Unit
impl GodotFfiVariant for () {
    fn ffi_to_variant(&self) -> Variant {
        Variant::nil()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        if variant.is_nil() {
            return Ok(());
        }

        Err(FromVariantError::BadType {
            expected: VariantType::Nil,
            actual: variant.get_type(),
        }
        .into_error(variant.clone()))
    }
}

impl GodotType for () {
    type Ffi = ();

    fn to_ffi(&self) -> Self::Ffi {}

    fn into_ffi(self) -> Self::Ffi {}

    fn try_from_ffi(_: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(())
    }

    fn godot_type_name() -> String {
        "void".to_string()
    }
}

crate::impl_godot_as_self!(());

impl GodotFfiVariant for Variant {
    fn ffi_to_variant(&self) -> Variant {
        self.clone()
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        Ok(variant.clone())
    }
}

impl GodotType for Variant {
    type Ffi = Variant;

    fn to_ffi(&self) -> Self::Ffi {
        self.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self
    }

    fn try_from_ffi(ffi: Self::Ffi) -> Result<Self, ConvertError> {
        Ok(ffi)
    }

    fn godot_type_name() -> String {
        "Variant".to_string()
    }
}

crate::impl_godot_as_self!(Variant);
