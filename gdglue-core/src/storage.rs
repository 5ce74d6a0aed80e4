/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::any::type_name;
use std::cell;

use crate::godot_error;
use crate::obj::UserClass;
use crate::registry::VirtualTable;
use crate::sys;

/// Manages storage and lifecycle of user's extension class instances.
///
/// One storage is boxed per engine object of a user class, and attached to it as its instance binding. It is freed by the
/// engine's `free_instance` callback when the object is destroyed.
pub struct InstanceStorage<T: UserClass> {
    user_instance: cell::RefCell<T>,

    // Flattened virtual table of the class, shared by all instances.
    virtuals: &'static VirtualTable<T>,
}

impl<T: UserClass> InstanceStorage<T> {
    pub(crate) fn construct(user_instance: T, virtuals: &'static VirtualTable<T>) -> Self {
        sys::out!("    Storage::construct             <{}>", type_name::<T>());

        Self {
            user_instance: cell::RefCell::new(user_instance),
            virtuals,
        }
    }

    pub(crate) fn is_bound(&self) -> bool {
        // Needs to borrow mutably, otherwise it succeeds if shared borrows are alive.
        self.user_instance.try_borrow_mut().is_err()
    }

    pub(crate) fn virtuals(&self) -> &'static VirtualTable<T> {
        self.virtuals
    }

    pub(crate) fn get(&self) -> cell::Ref<'_, T> {
        self.user_instance.try_borrow().unwrap_or_else(|_e| {
            panic!(
                "Gd<T>::bind() failed, already bound; T = {}.\n  \
                 Make sure there is no &mut T live at the time.\n  \
                 This often occurs when the engine calls back into Rust code of the same object, e.g. through a signal.",
                type_name::<T>()
            )
        })
    }

    pub(crate) fn get_mut(&self) -> cell::RefMut<'_, T> {
        self.user_instance.try_borrow_mut().unwrap_or_else(|_e| {
            panic!(
                "Gd<T>::bind_mut() failed, already bound; T = {}.\n  \
                 Make sure there is no &T or &mut T live at the time.\n  \
                 This often occurs when the engine calls back into Rust code of the same object, e.g. through a signal.",
                type_name::<T>()
            )
        })
    }
}

impl<T: UserClass> Drop for InstanceStorage<T> {
    fn drop(&mut self) {
        sys::out!("    Storage::drop                  <{}>", type_name::<T>());
    }
}

/// Interprets an instance pointer as the storage of a `T` instance.
///
/// # Safety
/// `instance_ptr` is assumed to point to a valid `InstanceStorage<T>`.
/// The returned reference must not outlive the storage.
pub(crate) unsafe fn as_storage<'u, T: UserClass>(instance_ptr: sys::GDExtensionClassInstancePtr) -> &'u InstanceStorage<T> {
    // SAFETY: forwarded to caller.
    unsafe { &*(instance_ptr as *mut InstanceStorage<T>) }
}

/// # Safety
/// `instance_ptr` is assumed to point to a valid instance, created by boxing an `InstanceStorage<T>`.
/// This function must only be invoked once for a pointer.
pub(crate) unsafe fn destroy_storage<T: UserClass>(instance_ptr: sys::GDExtensionClassInstancePtr) {
    let raw = instance_ptr as *mut InstanceStorage<T>;

    // SAFETY: valid storage per precondition.
    if unsafe { (*raw).is_bound() } {
        // Dropping would free memory still referenced by a live &T or &mut T further up the stack. Leaking is the lesser evil.
        godot_error!(
            "Destroyed an object while its Rust instance is bound (T = {}); leaking the instance",
            type_name::<T>()
        );
        return;
    }

    // SAFETY: raw was created by Box::into_raw, and this is the only call for it.
    let _drop = unsafe { Box::from_raw(raw) };
}
