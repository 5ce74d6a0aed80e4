/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::mem::ManuallyDrop;
use std::ops::{Deref, DerefMut};

use crate::obj::{Gd, GodotClass};
use crate::sys;

/// Restricted version of `Gd`, to hold the base instance inside a user's `GodotClass`.
///
/// Behaves similarly to [`Gd`][crate::obj::Gd], but is more constrained. Cannot be constructed by the user.
/// Dereferences to `Gd<T>`, so engine methods of the base class can be called directly: `self.base.get_name()`.
pub struct Base<T: GodotClass> {
    // Never dropped, so it acts like a weak pointer. Needed to break the reference cycle between the engine object and the user
    // instance owned by its InstanceStorage.
    obj: ManuallyDrop<Gd<T>>,
}

impl<T: GodotClass> Base<T> {
    /// # Safety
    /// `base_ptr` must be the live engine object that owns the user instance this `Base` is moved into.
    pub(crate) unsafe fn from_base_ptr(base_ptr: sys::GDExtensionObjectPtr) -> Self {
        assert!(!base_ptr.is_null(), "instance base is null pointer");

        // Weak: a strong reference held by the instance would keep its own owner alive forever.
        // SAFETY: forwarded to caller.
        let obj = unsafe { Gd::from_obj_sys_weak(base_ptr) };

        Self {
            obj: ManuallyDrop::new(obj),
        }
    }

    /// Returns a [`Gd`] referencing the same object as this reference.
    ///
    /// Unlike `Base` itself, the result is a strong reference (for ref-counted classes).
    pub fn to_gd(&self) -> Gd<T> {
        (*self.obj).clone()
    }
}

impl<T: GodotClass> Deref for Base<T> {
    type Target = Gd<T>;

    fn deref(&self) -> &Gd<T> {
        &self.obj
    }
}

impl<T: GodotClass> DerefMut for Base<T> {
    fn deref_mut(&mut self) -> &mut Gd<T> {
        &mut self.obj
    }
}

impl<T: GodotClass> Debug for Base<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Base {{ id: {}, class: {} }}", self.obj.instance_id_unchecked(), T::class_name())
    }
}
