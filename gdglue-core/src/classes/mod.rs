/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine classes, generated from the API description.
//!
//! Every class is a thin handle type: methods look up their method bind in a lazily loaded per-class table, check that the
//! receiver is alive, and forward to the engine through a [`Signature`](crate::meta::Signature) thunk.

pub use crate::gen::classes::*;

use crate::meta::CallContext;
use crate::obj::{Gd, GodotClass, InstanceId};
use crate::sys;

/// Constructs a new engine object of class `T`. For ref-counted classes, the returned handle holds the first reference.
///
/// # Panics
/// If the engine cannot instantiate `T`, e.g. because a user class was not registered.
pub fn construct_engine_object<T: GodotClass>() -> Gd<T> {
    let class_name = T::class_name();

    // SAFETY: the class name is a valid StringName for the duration of the call.
    let object_ptr = unsafe { sys::interface_fn!(classdb_construct_object)(class_name.string_sys()) };
    assert!(
        !object_ptr.is_null(),
        "engine failed to construct object of class {class_name}; is it registered?"
    );

    // SAFETY: the engine returned a fresh, live object of class T.
    unsafe { Gd::from_obj_sys(object_ptr) }
}

/// Panics if the object behind `instance_id` was freed, or the ID points to another object than `old_object_ptr`.
pub(crate) fn ensure_object_alive(
    instance_id: InstanceId,
    old_object_ptr: sys::GDExtensionObjectPtr,
    call_ctx: &CallContext,
) {
    let new_object_ptr = object_ptr_from_id(instance_id);

    assert!(
        !new_object_ptr.is_null(),
        "{call_ctx}: access to instance with ID {instance_id} after it has been freed"
    );

    // The engine never reuses instance IDs; if it did, the handle would silently refer to a different object.
    assert_eq!(
        new_object_ptr, old_object_ptr,
        "{call_ctx}: instance ID {instance_id} points to a stale, reused object"
    );
}

/// Panics if the live object behind `instance_id` is not an instance of `base` or a subclass.
///
/// `derived` is the static class the handle was created with, used as a fast path and for the message.
#[cfg(feature = "safeguards-strict")]
pub(crate) fn ensure_object_inherits(derived: crate::meta::ClassName, base: crate::meta::ClassName, instance_id: InstanceId) {
    if derived == base || base == Object::class_name() {
        return;
    }

    let object_ptr = object_ptr_from_id(instance_id);
    if object_ptr.is_null() {
        // Liveness is reported separately, with a better message.
        return;
    }

    // SAFETY: object is alive; class tags of unknown names are null, which never matches.
    let cast_ptr = unsafe {
        let class_tag = sys::interface_fn!(classdb_get_class_tag)(base.string_sys());
        sys::interface_fn!(object_cast_to)(object_ptr, class_tag)
    };

    assert!(
        !cast_ptr.is_null(),
        "Instance of ID {instance_id} has type {derived} but is incorrectly stored in a Gd<{base}>"
    );
}

fn object_ptr_from_id(instance_id: InstanceId) -> sys::GDExtensionObjectPtr {
    // SAFETY: any ID may be passed; unknown IDs yield null.
    unsafe { sys::interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) }
}
