/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::marker::PhantomData;
use std::{fmt, ptr};

use sys::{GodotFfi, GodotNullableFfi};

use crate::builtin::Variant;
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{FromGodot, GodotConvert, GodotFfiVariant, GodotType, ToGodot};
use crate::obj::{bounds, Bounds, Gd, GodotClass, Inherits};
use crate::sys;

/// Objects that can be passed as arguments to engine functions.
///
/// This trait is implemented for the following types:
/// - `&Gd<T>`, to pass objects. Subclasses of `T` are explicitly supported.
/// - `Option<&Gd<T>>`, to pass optional objects. `None` is mapped to a null argument.
/// - [`ObjectArg::null()`], to pass `null` arguments without using `Option`.
///
/// The engine API does not declare nullability of its parameters. It is up to the caller to pass null only where the
/// engine accepts it; doing this wrong is safe, but the call may fail.
pub trait AsObjectArg<T>
where
    T: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
{
    #[doc(hidden)]
    fn as_object_arg(&self) -> ObjectArg<T>;
}

impl<T, U> AsObjectArg<T> for &Gd<U>
where
    T: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        ObjectArg::from_gd(self)
    }
}

impl<T, U> AsObjectArg<T> for Option<&Gd<U>>
where
    T: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
    U: Inherits<T>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        self.map_or_else(ObjectArg::null, ObjectArg::from_gd)
    }
}

impl<T> AsObjectArg<T> for ObjectArg<T>
where
    T: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
{
    fn as_object_arg(&self) -> ObjectArg<T> {
        self.clone()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// View for object arguments passed to the engine. Never owning; must be null or backed by a `Gd<T>`.
///
/// Layout: a single object pointer, whose address is passed in pointer calls.
#[doc(hidden)]
#[repr(C)]
pub struct ObjectArg<T: GodotClass> {
    // Never dropped since it's just a view; see constructor.
    object_ptr: sys::GDExtensionObjectPtr,
    _marker: PhantomData<*mut T>,
}

impl<T: GodotClass> ObjectArg<T> {
    /// Borrows the object of `obj`, after checking that it is still alive.
    pub fn from_gd<Derived>(obj: &Gd<Derived>) -> Self
    where
        Derived: Inherits<T>,
    {
        obj.raw.check_rtti("as_object_arg");

        Self {
            object_ptr: obj.raw.obj_sys(),
            _marker: PhantomData,
        }
    }

    pub fn null() -> Self {
        Self {
            object_ptr: ptr::null_mut(),
            _marker: PhantomData,
        }
    }

    pub fn is_null(&self) -> bool {
        self.object_ptr.is_null()
    }
}

// #[derive(Clone)] doesn't get bounds right.
impl<T: GodotClass> Clone for ObjectArg<T> {
    fn clone(&self) -> Self {
        Self {
            object_ptr: self.object_ptr,
            _marker: PhantomData,
        }
    }
}

impl<T: GodotClass> fmt::Debug for ObjectArg<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "ObjectArg<{}>(null)", T::class_name())
        } else {
            write!(f, "ObjectArg<{}>({:p})", T::class_name(), self.object_ptr)
        }
    }
}

// SAFETY: `#[repr(C)]` with the object pointer as only field; the engine reads the pointer behind the address.
unsafe impl<T: GodotClass> GodotFfi for ObjectArg<T> {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Object
    }

    sys::ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
}

impl<T: GodotClass> GodotNullableFfi for ObjectArg<T> {
    fn null() -> Self {
        Self::null()
    }

    fn is_null(&self) -> bool {
        Self::is_null(self)
    }
}

impl<T: GodotClass> GodotFfiVariant for ObjectArg<T> {
    fn ffi_to_variant(&self) -> Variant {
        if self.is_null() {
            return Variant::nil();
        }

        let converter = sys::builtin_lifecycle_api().variant_from_type(sys::VariantType::Object);

        // SAFETY: the converter reads the object pointer behind `sys()` and takes its own reference.
        unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                converter(variant_ptr, sys::force_mut_ptr(self.sys()));
            })
        }
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        // Views are only passed *to* the engine; a view into a variant would outlive its object reference.
        Err(FromVariantError::BadType {
            expected: sys::VariantType::Object,
            actual: variant.get_type(),
        }
        .into_error(variant.clone()))
    }
}

impl<T: GodotClass> GodotConvert for ObjectArg<T> {
    type Via = Self;
}

impl<T: GodotClass> ToGodot for ObjectArg<T> {
    fn to_godot(&self) -> Self::Via {
        self.clone()
    }
}

impl<T: GodotClass> FromGodot for ObjectArg<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotType for ObjectArg<T> {
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

    fn godot_type_name() -> String {
        T::class_name().to_string()
    }
}
