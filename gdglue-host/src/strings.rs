/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine strings.
//!
//! A `String` slot holds one pointer to a heap `std::string::String`, copied on copy-construction.
//! A `StringName` slot holds one pointer to an interned entry; equal texts always share the entry, so the pointer is the
//! identity. Entries live for the whole process.

use std::collections::HashMap;
use std::ffi::{c_char, c_void};
use std::sync::atomic::{AtomicUsize, Ordering};

use gdglue_ffi as sys;

pub(crate) struct HostStringName {
    text: Box<str>,
    refcount: AtomicUsize,
}

impl HostStringName {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn refcount(&self) -> usize {
        self.refcount.load(Ordering::Relaxed)
    }

    fn retain(&self) {
        self.refcount.fetch_add(1, Ordering::Relaxed);
    }

    fn release(&self) {
        self.refcount.fetch_sub(1, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for HostStringName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "&{:?}", self.as_str())
    }
}

static INTERNED: sys::Global<HashMap<Box<str>, &'static HostStringName>> = sys::Global::default();

/// Returns the unique entry for `text`, creating it on first use.
pub(crate) fn intern(text: &str) -> &'static HostStringName {
    let mut interned = INTERNED.lock();
    if let Some(entry) = interned.get(text) {
        return entry;
    }

    let entry: &'static HostStringName = Box::leak(Box::new(HostStringName {
        text: text.into(),
        refcount: AtomicUsize::new(0),
    }));
    interned.insert(text.into(), entry);
    entry
}

pub(crate) fn interned_count() -> usize {
    INTERNED.lock().len()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Slot access

/// # Safety
/// `ptr` must point to an initialized `StringName` slot.
pub(crate) unsafe fn read_string_name(ptr: *const c_void) -> &'static HostStringName {
    unsafe { &**(ptr as *const *const HostStringName) }
}

/// Writes a new reference to `name` into an uninitialized slot.
///
/// # Safety
/// `dst` must be valid for writing one pointer.
pub(crate) unsafe fn write_string_name(dst: *mut c_void, name: &'static HostStringName) {
    name.retain();
    unsafe { std::ptr::write(dst as *mut *const HostStringName, name) };
}

/// # Safety
/// `ptr` must point to an initialized `String` slot.
pub(crate) unsafe fn read_string<'a>(ptr: *const c_void) -> &'a String {
    unsafe { &**(ptr as *const *const String) }
}

/// # Safety
/// `dst` must be valid for writing one pointer.
pub(crate) unsafe fn write_string(dst: *mut c_void, text: String) {
    unsafe { std::ptr::write(dst as *mut *mut String, Box::into_raw(Box::new(text))) };
}

/// # Safety
/// `contents` must be valid for reading `len` bytes.
unsafe fn text_from_raw(contents: *const c_char, len: sys::GDExtensionInt) -> String {
    if contents.is_null() || len <= 0 {
        return String::new();
    }

    let bytes = unsafe { std::slice::from_raw_parts(contents as *const u8, len as usize) };
    String::from_utf8_lossy(bytes).into_owned()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub(crate) unsafe extern "C" fn string_new_with_utf8_chars_and_len(
    r_dest: sys::GDExtensionUninitializedStringPtr,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    unsafe { write_string(r_dest, text_from_raw(p_contents, p_size)) };
}

/// Copies at most `p_max_write_length` bytes into `r_text`; returns the full length in bytes.
pub(crate) unsafe extern "C" fn string_to_utf8_chars(
    p_self: sys::GDExtensionConstStringPtr,
    r_text: *mut c_char,
    p_max_write_length: sys::GDExtensionInt,
) -> sys::GDExtensionInt {
    let text = unsafe { read_string(p_self) };

    if !r_text.is_null() && p_max_write_length > 0 {
        let count = text.len().min(p_max_write_length as usize);
        unsafe { std::ptr::copy_nonoverlapping(text.as_ptr(), r_text as *mut u8, count) };
    }

    text.len() as sys::GDExtensionInt
}

pub(crate) unsafe extern "C" fn string_name_new_with_utf8_chars_and_len(
    r_dest: sys::GDExtensionUninitializedStringNamePtr,
    p_contents: *const c_char,
    p_size: sys::GDExtensionInt,
) {
    let text = unsafe { text_from_raw(p_contents, p_size) };
    unsafe { write_string_name(r_dest, intern(&text)) };
}

pub(crate) unsafe extern "C" fn string_copy(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    unsafe {
        let source = read_string(*p_args);
        write_string(r_dest, source.clone());
    }
}

pub(crate) unsafe extern "C" fn string_from_string_name(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    unsafe {
        let source = read_string_name(*p_args);
        write_string(r_dest, source.as_str().to_string());
    }
}

pub(crate) unsafe extern "C" fn string_destroy(p_self: sys::GDExtensionTypePtr) {
    let boxed = unsafe { *(p_self as *mut *mut String) };
    if !boxed.is_null() {
        drop(unsafe { Box::from_raw(boxed) });
    }
}

pub(crate) unsafe extern "C" fn string_name_copy(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    unsafe {
        let source = read_string_name(*p_args);
        write_string_name(r_dest, source);
    }
}

pub(crate) unsafe extern "C" fn string_name_from_string(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    unsafe {
        let source = read_string(*p_args);
        write_string_name(r_dest, intern(source));
    }
}

pub(crate) unsafe extern "C" fn string_name_destroy(p_self: sys::GDExtensionTypePtr) {
    let entry = unsafe { *(p_self as *const *const HostStringName) };
    if !entry.is_null() {
        unsafe { (*entry).release() };
    }
}
