/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! C ABI of the GDExtension interface, restricted to the entry points the binding layer uses.
//!
//! Names and layouts follow `gdextension_interface.h`. The engine hands out one [`GDExtensionInterface`] table at load time;
//! every entry is optional so that a missing function is detected on use rather than at load.
//!
//! Virtual dispatch deviates from the header in one point: instead of `get_virtual_func` returning one function pointer per
//! method, the engine asks [`GDExtensionClassCreationInfo::has_virtual_func`] and invokes
//! [`GDExtensionClassCreationInfo::call_virtual_func`] with variant arguments and the method name.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_void};

pub type GDExtensionBool = u8;
pub type GDExtensionInt = i64;
pub type GDObjectInstanceID = u64;

pub type GDExtensionVariantPtr = *mut c_void;
pub type GDExtensionConstVariantPtr = *const c_void;
pub type GDExtensionUninitializedVariantPtr = *mut c_void;
pub type GDExtensionStringNamePtr = *mut c_void;
pub type GDExtensionConstStringNamePtr = *const c_void;
pub type GDExtensionUninitializedStringNamePtr = *mut c_void;
pub type GDExtensionStringPtr = *mut c_void;
pub type GDExtensionConstStringPtr = *const c_void;
pub type GDExtensionUninitializedStringPtr = *mut c_void;
pub type GDExtensionObjectPtr = *mut c_void;
pub type GDExtensionConstObjectPtr = *const c_void;
pub type GDExtensionTypePtr = *mut c_void;
pub type GDExtensionConstTypePtr = *const c_void;
pub type GDExtensionUninitializedTypePtr = *mut c_void;
pub type GDExtensionMethodBindPtr = *const c_void;
pub type GDExtensionClassInstancePtr = *mut c_void;
pub type GDExtensionClassLibraryPtr = *mut c_void;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variant types

pub type GDExtensionVariantType = u32;

pub const GDEXTENSION_VARIANT_TYPE_NIL: GDExtensionVariantType = 0;
pub const GDEXTENSION_VARIANT_TYPE_BOOL: GDExtensionVariantType = 1;
pub const GDEXTENSION_VARIANT_TYPE_INT: GDExtensionVariantType = 2;
pub const GDEXTENSION_VARIANT_TYPE_FLOAT: GDExtensionVariantType = 3;
pub const GDEXTENSION_VARIANT_TYPE_STRING: GDExtensionVariantType = 4;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR2: GDExtensionVariantType = 5;
pub const GDEXTENSION_VARIANT_TYPE_VECTOR3: GDExtensionVariantType = 9;
pub const GDEXTENSION_VARIANT_TYPE_TRANSFORM2D: GDExtensionVariantType = 11;
pub const GDEXTENSION_VARIANT_TYPE_COLOR: GDExtensionVariantType = 20;
pub const GDEXTENSION_VARIANT_TYPE_STRING_NAME: GDExtensionVariantType = 21;
pub const GDEXTENSION_VARIANT_TYPE_OBJECT: GDExtensionVariantType = 24;
pub const GDEXTENSION_VARIANT_TYPE_CALLABLE: GDExtensionVariantType = 25;
pub const GDEXTENSION_VARIANT_TYPE_VARIANT_MAX: GDExtensionVariantType = 38;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call errors

pub type GDExtensionCallErrorType = u32;

pub const GDEXTENSION_CALL_OK: GDExtensionCallErrorType = 0;
pub const GDEXTENSION_CALL_ERROR_INVALID_METHOD: GDExtensionCallErrorType = 1;
pub const GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT: GDExtensionCallErrorType = 2;
pub const GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS: GDExtensionCallErrorType = 3;
pub const GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS: GDExtensionCallErrorType = 4;
pub const GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL: GDExtensionCallErrorType = 5;
pub const GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST: GDExtensionCallErrorType = 6;

/// Not emitted by the engine. Marks a failed call into Rust whose `CallError` is stored on the Rust side.
pub const GDGLUE_CUSTOM_CALL_ERROR: GDExtensionCallErrorType = 40;

#[repr(C)]
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct GDExtensionCallError {
    pub error: GDExtensionCallErrorType,
    pub argument: i32,
    pub expected: i32,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Builtin type function pointers

pub type GDExtensionVariantFromTypeConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedVariantPtr, GDExtensionTypePtr)>;
pub type GDExtensionTypeFromVariantConstructorFunc =
    Option<unsafe extern "C" fn(GDExtensionUninitializedTypePtr, GDExtensionVariantPtr)>;
pub type GDExtensionPtrConstructor =
    Option<unsafe extern "C" fn(GDExtensionUninitializedTypePtr, *const GDExtensionConstTypePtr)>;
pub type GDExtensionPtrDestructor = Option<unsafe extern "C" fn(GDExtensionTypePtr)>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Custom callables

pub type GDExtensionCallableCustomCall = Option<
    unsafe extern "C" fn(
        callable_userdata: *mut c_void,
        p_args: *const GDExtensionConstVariantPtr,
        p_argument_count: GDExtensionInt,
        r_return: GDExtensionVariantPtr,
        r_error: *mut GDExtensionCallError,
    ),
>;
pub type GDExtensionCallableCustomFree = Option<unsafe extern "C" fn(callable_userdata: *mut c_void)>;
pub type GDExtensionCallableCustomHash = Option<unsafe extern "C" fn(callable_userdata: *mut c_void) -> u32>;
pub type GDExtensionCallableCustomEqual = Option<
    unsafe extern "C" fn(callable_userdata_a: *mut c_void, callable_userdata_b: *mut c_void) -> GDExtensionBool,
>;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionCallableCustomInfo {
    pub callable_userdata: *mut c_void,
    pub token: *mut c_void,
    pub object_id: GDObjectInstanceID,
    pub call_func: GDExtensionCallableCustomCall,
    pub free_func: GDExtensionCallableCustomFree,
    pub hash_func: GDExtensionCallableCustomHash,
    pub equal_func: GDExtensionCallableCustomEqual,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Extension classes

pub type GDExtensionClassCreateInstance =
    Option<unsafe extern "C" fn(p_class_userdata: *mut c_void) -> GDExtensionObjectPtr>;
pub type GDExtensionClassFreeInstance =
    Option<unsafe extern "C" fn(p_class_userdata: *mut c_void, p_instance: GDExtensionClassInstancePtr)>;
pub type GDExtensionClassHasVirtual = Option<
    unsafe extern "C" fn(p_class_userdata: *mut c_void, p_name: GDExtensionConstStringNamePtr) -> GDExtensionBool,
>;
pub type GDExtensionClassCallVirtual = Option<
    unsafe extern "C" fn(
        p_instance: GDExtensionClassInstancePtr,
        p_name: GDExtensionConstStringNamePtr,
        p_args: *const GDExtensionConstVariantPtr,
        p_argument_count: GDExtensionInt,
        r_return: GDExtensionVariantPtr,
        r_error: *mut GDExtensionCallError,
    ) -> GDExtensionBool,
>;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionClassCreationInfo {
    pub is_virtual: GDExtensionBool,
    pub is_abstract: GDExtensionBool,
    pub create_instance_func: GDExtensionClassCreateInstance,
    pub free_instance_func: GDExtensionClassFreeInstance,
    pub has_virtual_func: GDExtensionClassHasVirtual,
    pub call_virtual_func: GDExtensionClassCallVirtual,
    pub class_userdata: *mut c_void,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Initialization

pub type GDExtensionInitializationLevel = u32;

pub const GDEXTENSION_INITIALIZATION_CORE: GDExtensionInitializationLevel = 0;
pub const GDEXTENSION_INITIALIZATION_SERVERS: GDExtensionInitializationLevel = 1;
pub const GDEXTENSION_INITIALIZATION_SCENE: GDExtensionInitializationLevel = 2;
pub const GDEXTENSION_INITIALIZATION_EDITOR: GDExtensionInitializationLevel = 3;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct GDExtensionInitialization {
    pub minimum_initialization_level: GDExtensionInitializationLevel,
    pub userdata: *mut c_void,
    pub initialize: Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
    pub deinitialize: Option<unsafe extern "C" fn(userdata: *mut c_void, p_level: GDExtensionInitializationLevel)>,
}

pub type GDExtensionInitializationFunction = Option<
    unsafe extern "C" fn(
        p_interface: *const GDExtensionInterface,
        p_library: GDExtensionClassLibraryPtr,
        r_initialization: *mut GDExtensionInitialization,
    ) -> GDExtensionBool,
>;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface table

pub type GDExtensionPrintFn = Option<
    unsafe extern "C" fn(
        p_description: *const c_char,
        p_function: *const c_char,
        p_file: *const c_char,
        p_line: i32,
        p_editor_notify: GDExtensionBool,
    ),
>;

#[repr(C)]
#[derive(Copy, Clone)]
pub struct GDExtensionInterface {
    pub version_major: u32,
    pub version_minor: u32,
    pub version_patch: u32,
    pub version_string: *const c_char,

    pub print_error: GDExtensionPrintFn,
    pub print_warning: GDExtensionPrintFn,
    pub print_script_error: GDExtensionPrintFn,

    pub variant_new_copy:
        Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr, p_src: GDExtensionConstVariantPtr)>,
    pub variant_new_nil: Option<unsafe extern "C" fn(r_dest: GDExtensionUninitializedVariantPtr)>,
    pub variant_destroy: Option<unsafe extern "C" fn(p_self: GDExtensionVariantPtr)>,
    pub variant_get_type: Option<unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr) -> GDExtensionVariantType>,
    pub variant_stringify:
        Option<unsafe extern "C" fn(p_self: GDExtensionConstVariantPtr, r_ret: GDExtensionUninitializedStringPtr)>,
    pub get_variant_from_type_constructor:
        Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionVariantFromTypeConstructorFunc>,
    pub get_variant_to_type_constructor:
        Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionTypeFromVariantConstructorFunc>,
    pub variant_get_ptr_constructor: Option<
        unsafe extern "C" fn(p_type: GDExtensionVariantType, p_constructor: i32) -> GDExtensionPtrConstructor,
    >,
    pub variant_get_ptr_destructor:
        Option<unsafe extern "C" fn(p_type: GDExtensionVariantType) -> GDExtensionPtrDestructor>,

    pub string_new_with_utf8_chars_and_len: Option<
        unsafe extern "C" fn(r_dest: GDExtensionUninitializedStringPtr, p_contents: *const c_char, p_size: GDExtensionInt),
    >,
    pub string_to_utf8_chars: Option<
        unsafe extern "C" fn(
            p_self: GDExtensionConstStringPtr,
            r_text: *mut c_char,
            p_max_write_length: GDExtensionInt,
        ) -> GDExtensionInt,
    >,
    pub string_name_new_with_utf8_chars_and_len: Option<
        unsafe extern "C" fn(
            r_dest: GDExtensionUninitializedStringNamePtr,
            p_contents: *const c_char,
            p_size: GDExtensionInt,
        ),
    >,

    pub object_method_bind_call: Option<
        unsafe extern "C" fn(
            p_method_bind: GDExtensionMethodBindPtr,
            p_instance: GDExtensionObjectPtr,
            p_args: *const GDExtensionConstVariantPtr,
            p_arg_count: GDExtensionInt,
            r_ret: GDExtensionUninitializedVariantPtr,
            r_error: *mut GDExtensionCallError,
        ),
    >,
    pub object_method_bind_ptrcall: Option<
        unsafe extern "C" fn(
            p_method_bind: GDExtensionMethodBindPtr,
            p_instance: GDExtensionObjectPtr,
            p_args: *const GDExtensionConstTypePtr,
            r_ret: GDExtensionTypePtr,
        ),
    >,
    pub object_destroy: Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr)>,
    pub object_get_instance_from_id:
        Option<unsafe extern "C" fn(p_instance_id: GDObjectInstanceID) -> GDExtensionObjectPtr>,
    pub object_get_instance_id: Option<unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr) -> GDObjectInstanceID>,
    pub object_set_instance: Option<
        unsafe extern "C" fn(
            p_o: GDExtensionObjectPtr,
            p_classname: GDExtensionConstStringNamePtr,
            p_instance: GDExtensionClassInstancePtr,
        ),
    >,
    pub object_get_instance_binding:
        Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr, p_token: *mut c_void) -> *mut c_void>,
    pub object_set_instance_binding:
        Option<unsafe extern "C" fn(p_o: GDExtensionObjectPtr, p_token: *mut c_void, p_binding: *mut c_void)>,
    pub object_cast_to:
        Option<unsafe extern "C" fn(p_object: GDExtensionConstObjectPtr, p_class_tag: *mut c_void) -> GDExtensionObjectPtr>,

    pub callable_custom_create: Option<
        unsafe extern "C" fn(r_callable: GDExtensionUninitializedTypePtr, p_callable_custom_info: *mut GDExtensionCallableCustomInfo),
    >,

    pub classdb_construct_object:
        Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> GDExtensionObjectPtr>,
    pub classdb_get_method_bind: Option<
        unsafe extern "C" fn(
            p_classname: GDExtensionConstStringNamePtr,
            p_methodname: GDExtensionConstStringNamePtr,
            p_hash: GDExtensionInt,
        ) -> GDExtensionMethodBindPtr,
    >,
    pub classdb_get_class_tag: Option<unsafe extern "C" fn(p_classname: GDExtensionConstStringNamePtr) -> *mut c_void>,
    pub classdb_register_extension_class: Option<
        unsafe extern "C" fn(
            p_library: GDExtensionClassLibraryPtr,
            p_class_name: GDExtensionConstStringNamePtr,
            p_parent_class_name: GDExtensionConstStringNamePtr,
            p_extension_funcs: *const GDExtensionClassCreationInfo,
        ),
    >,
    pub classdb_unregister_extension_class: Option<
        unsafe extern "C" fn(p_library: GDExtensionClassLibraryPtr, p_class_name: GDExtensionConstStringNamePtr),
    >,
}

// Function pointers and the version string are immutable after the engine hands out the table.
unsafe impl Send for GDExtensionInterface {}
unsafe impl Sync for GDExtensionInterface {}
