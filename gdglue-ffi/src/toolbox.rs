/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Functions and macros that are not very specific to the binding, but come in handy.

use crate as sys;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros

/// Verifies a condition at compile time.
#[macro_export]
macro_rules! static_assert {
    ($cond:expr) => {
        const _: () = assert!($cond);
    };
    ($cond:expr, $msg:literal) => {
        const _: () = assert!($cond, $msg);
    };
}

/// Verifies at compile time that two types `T` and `U` have the same size.
#[macro_export]
macro_rules! static_assert_eq_size {
    ($T:ty, $U:ty) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>());
    };
    ($T:ty, $U:ty, $msg:literal) => {
        $crate::static_assert!(std::mem::size_of::<$T>() == std::mem::size_of::<$U>(), $msg);
    };
}

/// Trace output.
#[cfg(feature = "trace")]
#[macro_export]
macro_rules! out {
    ()                          => (eprintln!());
    ($fmt:literal)              => (eprintln!($fmt));
    ($fmt:literal, $($arg:tt)*) => (eprintln!($fmt, $($arg)*));
}

/// Trace output.
#[cfg(not(feature = "trace"))]
#[macro_export]
macro_rules! out {
    ()                          => ({});
    ($fmt:literal)              => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt); });
    ($fmt:literal, $($arg:tt)*) => ({ use std::io::{sink, Write}; let _ = write!(sink(), $fmt, $($arg)*); });
}

/// Fetches one function of the engine interface.
///
/// Panics if the engine did not provide the function.
#[macro_export]
macro_rules! interface_fn {
    ($name:ident) => {{
        match $crate::get_interface().$name {
            Some(f) => f,
            None => $crate::missing_interface_fn(stringify!($name)),
        }
    }};
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Utility functions

#[doc(hidden)]
#[cold]
pub fn missing_interface_fn(name: &str) -> ! {
    panic!("engine interface does not provide `{name}`; engine and bindings are not version-matched")
}

/// Explicitly cast away `const` from a pointer, similar to C++ `const_cast`.
pub fn force_mut_ptr<T>(ptr: *const T) -> *mut T {
    ptr as *mut T
}

/// If `ptr` is not null, returns `Some(mapper(ptr))`; otherwise `None`.
#[inline]
pub fn ptr_then<T, R, F>(ptr: *mut T, mapper: F) -> Option<R>
where
    F: FnOnce(*mut T) -> R,
{
    if ptr.is_null() {
        None
    } else {
        Some(mapper(ptr))
    }
}

/// Converts a Rust `bool` to the engine's boolean.
#[inline]
pub const fn conv_bool(value: bool) -> sys::GDExtensionBool {
    value as sys::GDExtensionBool
}

/// Converts the engine's boolean to a Rust `bool`.
#[inline]
pub const fn to_bool(value: sys::GDExtensionBool) -> bool {
    value != 0
}

/// Hashes a value with the std hasher and truncates to the engine's 32-bit hash width.
pub fn hash_value<T: std::hash::Hash>(t: &T) -> u32 {
    use std::hash::Hasher;

    let mut hasher = std::collections::hash_map::DefaultHasher::new();
    t.hash(&mut hasher);
    hasher.finish() as u32
}

/// Joins the debug representation of each item with `", "`.
pub fn join_debug<T: std::fmt::Debug>(iter: impl IntoIterator<Item = T>) -> String {
    iter.into_iter()
        .map(|item| format!("{item:?}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds a call error with the given code and argument info.
pub fn call_error(error: sys::GDExtensionCallErrorType, argument: i32, expected: i32) -> sys::GDExtensionCallError {
    sys::GDExtensionCallError {
        error,
        argument,
        expected,
    }
}

pub fn default_call_error() -> sys::GDExtensionCallError {
    call_error(sys::GDEXTENSION_CALL_OK, -1, -1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_conversion() {
        assert_eq!(conv_bool(true), 1);
        assert!(to_bool(7));
        assert!(!to_bool(conv_bool(false)));
    }

    #[test]
    fn join_debug_formats() {
        assert_eq!(join_debug(["a", "b"]), r#""a", "b""#);
        assert_eq!(join_debug(Vec::<i32>::new()), "");
    }

    #[test]
    fn ptr_then_null() {
        let mut x = 3;
        assert_eq!(ptr_then(std::ptr::null_mut::<i32>(), |_| 1), None);
        assert_eq!(ptr_then(&mut x as *mut i32, |p| unsafe { *p }), Some(3));
    }
}
