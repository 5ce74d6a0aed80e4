/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::obj::{GodotClass, InstanceId};

// This is private; despite `pub` here it is re-exported in `crate::private` module.

/// Object runtime type information, obtained at creation time.
///
/// Stores how an engine-managed object has been created, for debug info and runtime checks. This is persisted independently
/// of the static type system (`T` in `Gd<T>`) and is checked before every outbound call.
#[derive(Clone, Debug)]
pub struct ObjectRtti {
    /// Cached instance ID. May point to dead objects.
    instance_id: InstanceId,

    /// Only with strict safeguards: static class at creation time.
    #[cfg(feature = "safeguards-strict")]
    class_name: crate::meta::ClassName,
}

impl ObjectRtti {
    #[inline]
    pub fn of<T: GodotClass>(instance_id: InstanceId) -> Self {
        Self {
            instance_id,

            #[cfg(feature = "safeguards-strict")]
            class_name: T::class_name(),
        }
    }

    /// Checks that the object is of type `T` or derived, asking the engine for its dynamic class.
    ///
    /// # Panics
    /// If the object does not inherit `T`.
    #[cfg(feature = "safeguards-strict")]
    #[inline]
    pub fn check_type<T: GodotClass>(&self) -> InstanceId {
        crate::classes::ensure_object_inherits(self.class_name, T::class_name(), self.instance_id);
        self.instance_id
    }

    #[inline]
    pub fn instance_id(&self) -> InstanceId {
        // Do not add logic or validations here, this is passed in every FFI call.
        self.instance_id
    }
}
