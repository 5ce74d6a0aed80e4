/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Variant and builtin lifecycle functions of the interface table.

use gdglue_ffi as sys;

use crate::value::{self, Ty};
use crate::{callable, strings};

type FromTypeFn = unsafe extern "C" fn(sys::GDExtensionUninitializedVariantPtr, sys::GDExtensionTypePtr);
type ToTypeFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, sys::GDExtensionVariantPtr);
type CtorFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
type DtorFn = unsafe extern "C" fn(sys::GDExtensionTypePtr);

unsafe extern "C" fn variant_from_type<const T: sys::GDExtensionVariantType>(
    r_dest: sys::GDExtensionUninitializedVariantPtr,
    p_src: sys::GDExtensionTypePtr,
) {
    let Some(ty) = Ty::from_variant_type(T) else {
        return;
    };

    unsafe {
        let value = value::read_typed(ty, p_src);
        value::variant_write(r_dest, value);
    }
}

unsafe extern "C" fn variant_to_type<const T: sys::GDExtensionVariantType>(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_src: sys::GDExtensionVariantPtr,
) {
    let Some(ty) = Ty::from_variant_type(T) else {
        return;
    };

    unsafe {
        let value = value::variant_read(p_src).clone();
        value::write_typed(ty, value, r_dest);
    }
}

macro_rules! select_by_type {
    ($ty:expr, $func:ident as $Fn:ty; $($variant_type:ident),+ $(,)?) => {
        match $ty {
            $( sys::$variant_type => Some($func::<{ sys::$variant_type }> as $Fn), )+
            _ => None,
        }
    };
}

pub(crate) unsafe extern "C" fn get_variant_from_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionVariantFromTypeConstructorFunc {
    select_by_type!(p_type, variant_from_type as FromTypeFn;
        GDEXTENSION_VARIANT_TYPE_BOOL,
        GDEXTENSION_VARIANT_TYPE_INT,
        GDEXTENSION_VARIANT_TYPE_FLOAT,
        GDEXTENSION_VARIANT_TYPE_STRING,
        GDEXTENSION_VARIANT_TYPE_VECTOR2,
        GDEXTENSION_VARIANT_TYPE_VECTOR3,
        GDEXTENSION_VARIANT_TYPE_TRANSFORM2D,
        GDEXTENSION_VARIANT_TYPE_COLOR,
        GDEXTENSION_VARIANT_TYPE_STRING_NAME,
        GDEXTENSION_VARIANT_TYPE_OBJECT,
        GDEXTENSION_VARIANT_TYPE_CALLABLE,
    )
}

pub(crate) unsafe extern "C" fn get_variant_to_type_constructor(
    p_type: sys::GDExtensionVariantType,
) -> sys::GDExtensionTypeFromVariantConstructorFunc {
    select_by_type!(p_type, variant_to_type as ToTypeFn;
        GDEXTENSION_VARIANT_TYPE_BOOL,
        GDEXTENSION_VARIANT_TYPE_INT,
        GDEXTENSION_VARIANT_TYPE_FLOAT,
        GDEXTENSION_VARIANT_TYPE_STRING,
        GDEXTENSION_VARIANT_TYPE_VECTOR2,
        GDEXTENSION_VARIANT_TYPE_VECTOR3,
        GDEXTENSION_VARIANT_TYPE_TRANSFORM2D,
        GDEXTENSION_VARIANT_TYPE_COLOR,
        GDEXTENSION_VARIANT_TYPE_STRING_NAME,
        GDEXTENSION_VARIANT_TYPE_OBJECT,
        GDEXTENSION_VARIANT_TYPE_CALLABLE,
    )
}

/// Constructor 1 copies; constructor 2 converts between `String` and `StringName`.
pub(crate) unsafe extern "C" fn variant_get_ptr_constructor(
    p_type: sys::GDExtensionVariantType,
    p_constructor: i32,
) -> sys::GDExtensionPtrConstructor {
    let ctor: CtorFn = match (p_type, p_constructor) {
        (sys::GDEXTENSION_VARIANT_TYPE_STRING, 1) => strings::string_copy,
        (sys::GDEXTENSION_VARIANT_TYPE_STRING, 2) => strings::string_from_string_name,
        (sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME, 1) => strings::string_name_copy,
        (sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME, 2) => strings::string_name_from_string,
        (sys::GDEXTENSION_VARIANT_TYPE_CALLABLE, 1) => callable::callable_copy,
        _ => return None,
    };
    Some(ctor)
}

pub(crate) unsafe extern "C" fn variant_get_ptr_destructor(p_type: sys::GDExtensionVariantType) -> sys::GDExtensionPtrDestructor {
    let dtor: DtorFn = match p_type {
        sys::GDEXTENSION_VARIANT_TYPE_STRING => strings::string_destroy,
        sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME => strings::string_name_destroy,
        sys::GDEXTENSION_VARIANT_TYPE_CALLABLE => callable::callable_destroy,
        _ => return None,
    };
    Some(dtor)
}

pub(crate) unsafe extern "C" fn variant_new_copy(
    r_dest: sys::GDExtensionUninitializedVariantPtr,
    p_src: sys::GDExtensionConstVariantPtr,
) {
    unsafe {
        let value = value::variant_read(p_src).clone();
        value::variant_write(r_dest, value);
    }
}

pub(crate) unsafe extern "C" fn variant_new_nil(r_dest: sys::GDExtensionUninitializedVariantPtr) {
    unsafe { value::variant_write(r_dest, value::HostValue::Nil) };
}

pub(crate) unsafe extern "C" fn variant_destroy(p_self: sys::GDExtensionVariantPtr) {
    drop(unsafe { value::variant_take(p_self) });
}

pub(crate) unsafe extern "C" fn variant_get_type(p_self: sys::GDExtensionConstVariantPtr) -> sys::GDExtensionVariantType {
    unsafe { value::variant_read(p_self) }.ty().variant_type()
}

pub(crate) unsafe extern "C" fn variant_stringify(
    p_self: sys::GDExtensionConstVariantPtr,
    r_ret: sys::GDExtensionUninitializedStringPtr,
) {
    unsafe {
        let text = value::variant_read(p_self).stringify();
        strings::write_string(r_ret, text);
    }
}
