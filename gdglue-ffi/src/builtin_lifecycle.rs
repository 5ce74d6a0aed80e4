/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;
use crate::VariantType;

type VariantFromTypeFn = unsafe extern "C" fn(sys::GDExtensionUninitializedVariantPtr, sys::GDExtensionTypePtr);
type TypeFromVariantFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, sys::GDExtensionVariantPtr);
type PtrConstructorFn = unsafe extern "C" fn(sys::GDExtensionUninitializedTypePtr, *const sys::GDExtensionConstTypePtr);
type PtrDestructorFn = unsafe extern "C" fn(sys::GDExtensionTypePtr);

const TABLE_LEN: usize = VariantType::MARSHALLED.len() + 1;

// Constructor indices as registered by the engine for each builtin type.
const CTOR_COPY: i32 = 1;
const CTOR_FROM_OTHER_STRING: i32 = 2;

/// Function pointers for construction, conversion and destruction of the builtin types this layer marshals.
///
/// Loaded eagerly when the binding is initialized, since every `Variant` and string operation goes through it.
pub struct BuiltinLifecycleTable {
    variant_from_type: [Option<VariantFromTypeFn>; TABLE_LEN],
    variant_to_type: [Option<TypeFromVariantFn>; TABLE_LEN],

    pub string_copy: PtrConstructorFn,
    pub string_from_string_name: PtrConstructorFn,
    pub string_destroy: PtrDestructorFn,

    pub string_name_copy: PtrConstructorFn,
    pub string_name_from_string: PtrConstructorFn,
    pub string_name_destroy: PtrDestructorFn,

    pub callable_copy: PtrConstructorFn,
    pub callable_destroy: PtrDestructorFn,
}

impl BuiltinLifecycleTable {
    /// # Safety
    /// Every function in `interface` must be valid to call.
    ///
    /// # Panics
    /// If the engine lacks one of the required functions.
    pub(crate) unsafe fn load(interface: &sys::GDExtensionInterface) -> Self {
        let get_from = require(interface.get_variant_from_type_constructor, "get_variant_from_type_constructor");
        let get_to = require(interface.get_variant_to_type_constructor, "get_variant_to_type_constructor");
        let get_ctor = require(interface.variant_get_ptr_constructor, "variant_get_ptr_constructor");
        let get_dtor = require(interface.variant_get_ptr_destructor, "variant_get_ptr_destructor");

        let mut variant_from_type = [None; TABLE_LEN];
        let mut variant_to_type = [None; TABLE_LEN];
        for ty in VariantType::MARSHALLED {
            let index = ty.table_index();

            // SAFETY: interface functions are valid per precondition.
            variant_from_type[index] = Some(require(unsafe { get_from(ty.sys()) }, ty.godot_name()));
            variant_to_type[index] = Some(require(unsafe { get_to(ty.sys()) }, ty.godot_name()));
        }

        let ctor = |ty: VariantType, index: i32| {
            // SAFETY: see above.
            require(unsafe { get_ctor(ty.sys(), index) }, ty.godot_name())
        };
        let dtor = |ty: VariantType| {
            // SAFETY: see above.
            require(unsafe { get_dtor(ty.sys()) }, ty.godot_name())
        };

        sys::out!("Loaded builtin lifecycle table for {} types", VariantType::MARSHALLED.len());

        Self {
            variant_from_type,
            variant_to_type,
            string_copy: ctor(VariantType::String, CTOR_COPY),
            string_from_string_name: ctor(VariantType::String, CTOR_FROM_OTHER_STRING),
            string_destroy: dtor(VariantType::String),
            string_name_copy: ctor(VariantType::StringName, CTOR_COPY),
            string_name_from_string: ctor(VariantType::StringName, CTOR_FROM_OTHER_STRING),
            string_name_destroy: dtor(VariantType::StringName),
            callable_copy: ctor(VariantType::Callable, CTOR_COPY),
            callable_destroy: dtor(VariantType::Callable),
        }
    }

    /// Constructor writing a value of type `ty` into an uninitialized variant.
    ///
    /// # Panics
    /// For `VariantType::Nil`, which has no payload to convert.
    pub fn variant_from_type(&self, ty: VariantType) -> VariantFromTypeFn {
        self.variant_from_type[ty.table_index()]
            .unwrap_or_else(|| panic!("no variant constructor for type {}", ty.godot_name()))
    }

    /// Constructor writing the payload of a variant into an uninitialized value of type `ty`.
    ///
    /// # Panics
    /// For `VariantType::Nil`.
    pub fn variant_to_type(&self, ty: VariantType) -> TypeFromVariantFn {
        self.variant_to_type[ty.table_index()]
            .unwrap_or_else(|| panic!("no variant conversion for type {}", ty.godot_name()))
    }
}

fn require<F>(f: Option<F>, what: &str) -> F {
    f.unwrap_or_else(|| panic!("engine does not provide builtin function for `{what}`"))
}
