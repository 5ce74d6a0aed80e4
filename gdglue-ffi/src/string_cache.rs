/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;
use std::mem::MaybeUninit;

use crate as sys;
use crate::OpaqueStringName;

/// Short-lived cache of engine `StringName`s, used while resolving method tables.
///
/// Each distinct key is converted once; all names are released when the cache is dropped.
pub struct StringCache<'a> {
    // Boxed so the addresses handed out stay stable while the map grows.
    instances_by_str: HashMap<&'static str, Box<OpaqueStringName>>,
    interface: &'a sys::GDExtensionInterface,
    builtin_lifecycle: &'a sys::BuiltinLifecycleTable,
}

impl<'a> StringCache<'a> {
    pub fn new(interface: &'a sys::GDExtensionInterface, builtin_lifecycle: &'a sys::BuiltinLifecycleTable) -> Self {
        Self {
            instances_by_str: HashMap::new(),
            interface,
            builtin_lifecycle,
        }
    }

    /// Returns a pointer to the `StringName` for `key`, valid until the cache is dropped.
    pub fn fetch(&mut self, key: &'static str) -> sys::GDExtensionConstStringNamePtr {
        if let Some(cached) = self.instances_by_str.get(key) {
            return sname_ptr(cached);
        }

        let string_name_new = self
            .interface
            .string_name_new_with_utf8_chars_and_len
            .unwrap_or_else(|| sys::missing_interface_fn("string_name_new_with_utf8_chars_and_len"));

        let mut uninit = Box::new(MaybeUninit::<OpaqueStringName>::uninit());

        // SAFETY: the engine placement-constructs a StringName into the uninitialized storage.
        let opaque = unsafe {
            string_name_new(
                uninit.as_mut_ptr() as sys::GDExtensionUninitializedStringNamePtr,
                key.as_ptr() as *const std::ffi::c_char,
                key.len() as sys::GDExtensionInt,
            );

            Box::from_raw(Box::into_raw(uninit) as *mut OpaqueStringName)
        };

        let ptr = sname_ptr(&opaque);
        self.instances_by_str.insert(key, opaque);
        ptr
    }

    pub fn len(&self) -> usize {
        self.instances_by_str.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances_by_str.is_empty()
    }
}

impl Drop for StringCache<'_> {
    fn drop(&mut self) {
        let string_name_destroy = self.builtin_lifecycle.string_name_destroy;

        for (_, mut opaque) in self.instances_by_str.drain() {
            // SAFETY: each entry was constructed by the engine and is destroyed exactly once.
            unsafe { string_name_destroy(&mut *opaque as *mut OpaqueStringName as sys::GDExtensionTypePtr) };
        }
    }
}

fn sname_ptr(opaque: &OpaqueStringName) -> sys::GDExtensionConstStringNamePtr {
    opaque as *const OpaqueStringName as sys::GDExtensionConstStringNamePtr
}
