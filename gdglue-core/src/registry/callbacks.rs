/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Callbacks that are passed as function pointers to the engine upon class registration.
//!
//! Re-exported to `crate::private`.
#![allow(clippy::missing_safety_doc)]

use std::ffi::c_void;

use sys::interface_fn;

use crate::builtin::{StringName, Variant};
use crate::godot_error;
use crate::obj::{Base, GodotClass, UserClass};
use crate::private::handle_panic;
use crate::registry::VirtualTable;
use crate::storage::{as_storage, destroy_storage, InstanceStorage};
use crate::sys;

/// Engine constructor of a user class.
///
/// If the base object cannot be constructed, or `init()` panics, null is returned.
pub unsafe extern "C" fn create<T: UserClass>(class_userdata: *mut c_void) -> sys::GDExtensionObjectPtr {
    // SAFETY: the userdata registered with the class is its virtual table.
    let virtuals = unsafe { virtual_table::<T>(class_userdata) };

    create_custom(virtuals).unwrap_or(std::ptr::null_mut())
}

fn create_custom<T: UserClass>(virtuals: &'static VirtualTable<T>) -> Result<sys::GDExtensionObjectPtr, String> {
    let class_name = T::class_name();
    let base_class_name = <T::Base as GodotClass>::class_name();

    // SAFETY: class names are interned for the whole process.
    let base_ptr = unsafe { interface_fn!(classdb_construct_object)(base_class_name.string_sys()) };
    if base_ptr.is_null() {
        let msg = format!("failed to construct base object {base_class_name} of {class_name}");
        godot_error!("{msg}");
        return Err(msg);
    }

    // User constructor init() can panic, which crashes the engine if unhandled.
    let context = || format!("panic during {class_name}::init() constructor");
    // SAFETY: base_ptr is live and owned by the instance about to be created.
    let code = || T::init(unsafe { Base::from_base_ptr(base_ptr) });

    let user_instance = match handle_panic(context, code) {
        Ok(instance) => instance,
        Err(msg) => {
            // Creation of the Rust part failed; destroy the base object to avoid a leak.
            // SAFETY: base_ptr was just created above and is not referenced elsewhere.
            unsafe { interface_fn!(object_destroy)(base_ptr) };
            return Err(msg);
        }
    };

    let storage = Box::new(InstanceStorage::construct(user_instance, virtuals));
    let instance_ptr = Box::into_raw(storage) as sys::GDExtensionClassInstancePtr;

    // SAFETY: base_ptr is live; ownership of the storage passes to the engine, which returns it in `free`.
    unsafe {
        interface_fn!(object_set_instance)(base_ptr, class_name.string_sys(), instance_ptr);
        interface_fn!(object_set_instance_binding)(base_ptr, sys::get_library(), instance_ptr);
    }

    Ok(base_ptr)
}

pub unsafe extern "C" fn free<T: UserClass>(_class_userdata: *mut c_void, instance: sys::GDExtensionClassInstancePtr) {
    // SAFETY: the engine calls this exactly once, with the instance returned from `create`.
    unsafe { destroy_storage::<T>(instance) };
}

/// Whether the class overrides the virtual method `name`.
pub unsafe extern "C" fn has_virtual<T: UserClass>(
    class_userdata: *mut c_void,
    name: sys::GDExtensionConstStringNamePtr,
) -> sys::GDExtensionBool {
    // SAFETY: the userdata registered with the class is its virtual table.
    let virtuals = unsafe { virtual_table::<T>(class_userdata) };

    // This string is not ours, so we cannot call the destructor on it.
    // SAFETY: the engine passes a live StringName.
    let name = unsafe { StringName::borrow_string_sys(name) };

    sys::conv_bool(virtuals.has(name))
}

/// Invokes the override `name` on an instance; see [`VirtualTable::call`].
pub unsafe extern "C" fn call_virtual<T: UserClass>(
    instance: sys::GDExtensionClassInstancePtr,
    name: sys::GDExtensionConstStringNamePtr,
    p_args: *const sys::GDExtensionConstVariantPtr,
    p_argument_count: sys::GDExtensionInt,
    r_return: sys::GDExtensionVariantPtr,
    r_error: *mut sys::GDExtensionCallError,
) -> sys::GDExtensionBool {
    // SAFETY: the engine passes the instance created in `create`, a live name, a valid argument array, return slot and
    // error pointer.
    let (storage, name, args, out_err) = unsafe {
        (
            as_storage::<T>(instance),
            StringName::borrow_string_sys(name),
            Variant::borrow_ref_slice(p_args, p_argument_count as usize),
            &mut *r_error,
        )
    };

    let handled = storage.virtuals().call(storage, name, args, r_return, out_err);
    sys::conv_bool(handled)
}

/// # Safety
/// `class_userdata` must be the pointer registered in [`register_class()`](crate::registry::register_class) for `T`.
unsafe fn virtual_table<T: UserClass>(class_userdata: *mut c_void) -> &'static VirtualTable<T> {
    // SAFETY: forwarded to caller; tables are leaked at registration.
    unsafe { &*(class_userdata as *const VirtualTable<T>) }
}
