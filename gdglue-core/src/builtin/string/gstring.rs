/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use sys::{ffi_methods, GodotFfi};

use crate::builtin::StringName;
use crate::sys;

/// Engine's reference-counted string type.
///
/// Named `GString` to avoid confusion with Rust's [`String`]. Conversions in both directions go through UTF-8.
///
/// Equality and hashing compare the text content.
#[repr(transparent)]
pub struct GString {
    opaque: sys::OpaqueString,
}

impl GString {
    /// Construct a new empty `GString`.
    pub fn new() -> Self {
        Self::from_text("")
    }

    fn from_opaque(opaque: sys::OpaqueString) -> Self {
        Self { opaque }
    }

    fn from_text(text: &str) -> Self {
        let string_new = sys::interface_fn!(string_new_with_utf8_chars_and_len);

        // SAFETY: the engine placement-constructs a String from `text.len()` UTF-8 bytes.
        unsafe {
            Self::new_from_sys_init(|ptr| {
                string_new(ptr, text.as_ptr() as *const std::ffi::c_char, text.len() as sys::GDExtensionInt)
            })
        }
    }

    /// Number of UTF-8 bytes in the string.
    pub fn len(&self) -> usize {
        let to_utf8 = sys::interface_fn!(string_to_utf8_chars);

        // SAFETY: a null buffer with length 0 only queries the length.
        let len = unsafe { to_utf8(self.string_sys(), std::ptr::null_mut(), 0) };
        len.max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn string_sys(&self) -> sys::GDExtensionConstStringPtr {
        self.sys()
    }

    fn to_rust_string(&self) -> String {
        let to_utf8 = sys::interface_fn!(string_to_utf8_chars);
        let len = self.len();

        let mut bytes = vec![0u8; len];
        // SAFETY: the engine writes at most `len` bytes into the buffer.
        unsafe {
            to_utf8(
                self.string_sys(),
                bytes.as_mut_ptr() as *mut std::ffi::c_char,
                len as sys::GDExtensionInt,
            )
        };

        String::from_utf8(bytes).unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
    }
}

// SAFETY: `GString` is `#[repr(transparent)]` over the engine's opaque string storage.
unsafe impl GodotFfi for GString {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::String
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for GString {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for GString {
    fn clone(&self) -> Self {
        let copy = sys::builtin_lifecycle_api().string_copy;
        let args = [self.sys()];

        // SAFETY: copy constructor reads the source from `args[0]` and placement-constructs the result.
        unsafe { Self::new_from_sys_init(|ptr| copy(ptr, args.as_ptr())) }
    }
}

impl Drop for GString {
    fn drop(&mut self) {
        let destroy = sys::builtin_lifecycle_api().string_destroy;

        // SAFETY: each `GString` owns its engine string exactly once.
        unsafe { destroy(self.sys_mut()) };
    }
}

impl PartialEq for GString {
    fn eq(&self, other: &Self) -> bool {
        self.to_rust_string() == other.to_rust_string()
    }
}

impl Eq for GString {}

impl std::hash::Hash for GString {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.to_rust_string().hash(state);
    }
}

impl fmt::Display for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rust_string())
    }
}

/// Uses literal syntax: `"text"`.
impl fmt::Debug for GString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_rust_string())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Conversions

impl From<&str> for GString {
    fn from(s: &str) -> Self {
        Self::from_text(s)
    }
}

impl From<&String> for GString {
    fn from(s: &String) -> Self {
        Self::from_text(s)
    }
}

impl From<String> for GString {
    fn from(s: String) -> Self {
        Self::from_text(&s)
    }
}

impl From<&GString> for String {
    fn from(string: &GString) -> Self {
        string.to_rust_string()
    }
}

impl From<GString> for String {
    fn from(string: GString) -> Self {
        string.to_rust_string()
    }
}

impl From<&StringName> for GString {
    fn from(name: &StringName) -> Self {
        let from_name = sys::builtin_lifecycle_api().string_from_string_name;
        let args = [name.string_sys()];

        // SAFETY: constructor reads a StringName from `args[0]`.
        unsafe { Self::new_from_sys_init(|ptr| from_name(ptr, args.as_ptr())) }
    }
}

impl From<StringName> for GString {
    fn from(name: StringName) -> Self {
        Self::from(&name)
    }
}
