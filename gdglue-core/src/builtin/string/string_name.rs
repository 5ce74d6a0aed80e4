/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use sys::{ffi_methods, GodotFfi};

use crate::builtin::GString;
use crate::sys;

/// A string optimized for unique names.
///
/// StringNames are immutable strings designed for representing unique names. The engine interns them, so two
/// `StringName`s with the same text refer to the same entry and compare equal in O(1).
///
/// Method names, signal names, property names and class names are passed to the engine as `StringName`.
// Currently we rely on `transparent` for `borrow_string_sys`.
#[repr(transparent)]
pub struct StringName {
    opaque: sys::OpaqueStringName,
}

impl StringName {
    fn from_opaque(opaque: sys::OpaqueStringName) -> Self {
        Self { opaque }
    }

    fn from_text(text: &str) -> Self {
        let string_name_new = sys::interface_fn!(string_name_new_with_utf8_chars_and_len);

        // SAFETY: the engine placement-constructs a StringName from `text.len()` UTF-8 bytes.
        unsafe {
            Self::new_from_sys_init(|ptr| {
                string_name_new(ptr, text.as_ptr() as *const std::ffi::c_char, text.len() as sys::GDExtensionInt)
            })
        }
    }

    /// Returns `true` if this is the empty string.
    pub fn is_empty(&self) -> bool {
        GString::from(self).is_empty()
    }

    pub(crate) fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.sys()
    }

    /// Convert a `StringName` sys pointer to a reference with unbounded lifetime.
    ///
    /// # Safety
    ///
    /// `ptr` must point to a live `StringName` for the duration of `'a`.
    pub(crate) unsafe fn borrow_string_sys<'a>(ptr: sys::GDExtensionConstStringNamePtr) -> &'a StringName {
        sys::static_assert_eq_size!(StringName, sys::OpaqueStringName);

        // SAFETY: `#[repr(transparent)]` over the opaque storage the engine points to.
        unsafe { &*(ptr as *const StringName) }
    }
}

// SAFETY: `StringName` is `#[repr(transparent)]` over the engine's opaque string name storage.
unsafe impl GodotFfi for StringName {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::StringName
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

// SAFETY: the engine interns string names in a thread-safe table with atomic refcounts; the handle itself is immutable.
unsafe impl Send for StringName {}
// SAFETY: see `Send` impl.
unsafe impl Sync for StringName {}

impl Default for StringName {
    fn default() -> Self {
        Self::from_text("")
    }
}

impl Clone for StringName {
    fn clone(&self) -> Self {
        let copy = sys::builtin_lifecycle_api().string_name_copy;
        let args = [self.sys()];

        // SAFETY: copy constructor reads the source from `args[0]`.
        unsafe { Self::new_from_sys_init(|ptr| copy(ptr, args.as_ptr())) }
    }
}

impl Drop for StringName {
    fn drop(&mut self) {
        let destroy = sys::builtin_lifecycle_api().string_name_destroy;

        // SAFETY: each `StringName` releases its reference exactly once.
        unsafe { destroy(self.sys_mut()) };
    }
}

// Interned: same text <=> same handle.
impl PartialEq for StringName {
    fn eq(&self, other: &Self) -> bool {
        self.opaque == other.opaque
    }
}

impl Eq for StringName {}

impl std::hash::Hash for StringName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.opaque.hash(state);
    }
}

impl fmt::Display for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = GString::from(self);
        <GString as fmt::Display>::fmt(&s, f)
    }
}

/// Uses literal syntax from GDScript: `&"string_name"`
impl fmt::Debug for StringName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let string = GString::from(self);
        write!(f, "&\"{string}\"")
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions

impl From<&StringName> for StringName {
    fn from(name: &StringName) -> Self {
        name.clone()
    }
}

impl From<&str> for StringName {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<&String> for StringName {
    fn from(s: &String) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for StringName {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<&GString> for StringName {
    fn from(string: &GString) -> Self {
        let from_string = sys::builtin_lifecycle_api().string_name_from_string;
        let args = [string.string_sys()];

        // SAFETY: constructor reads a String from `args[0]`.
        unsafe { Self::new_from_sys_init(|ptr| from_string(ptr, args.as_ptr())) }
    }
}

impl From<GString> for StringName {
    fn from(string: GString) -> Self {
        Self::from(&string)
    }
}
