/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::sync::OnceLock;

use sys::Global;

use crate::builtin::{GString, StringName};
use crate::sys;

/// Arena of all class names, indexed by [`ClassName::global_index`]. Entries are leaked and never removed.
static CLASS_NAMES: Global<Vec<&'static ClassNameEntry>> = Global::new(init_class_names);

fn init_class_names() -> Vec<&'static ClassNameEntry> {
    // Index 0 is "no class".
    vec![ClassNameEntry::leak("")]
}

/// Globally unique ID of a class known to the bindings.
///
/// `ClassName` is a small integer index into a process-wide arena and is therefore very cheap to copy and compare.
/// The engine-side `StringName` is created lazily on first use and cached in the arena as well.
///
/// Engine classes allocate their `ClassName` exactly once, on the first call to
/// [`GodotClass::class_name()`](crate::obj::GodotClass::class_name).
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ClassName {
    global_index: u16,
}

impl ClassName {
    /// Allocates a new entry for `class_name`; expected to be called once per class.
    #[doc(hidden)]
    pub fn alloc_next(class_name: &'static str) -> Self {
        let mut names = CLASS_NAMES.lock();

        let global_index = u16::try_from(names.len())
            .unwrap_or_else(|_| panic!("too many classes registered; cannot add `{class_name}`"));

        names.push(ClassNameEntry::leak(class_name));
        Self { global_index }
    }

    /// Returns a `ClassName` representing "no class" (empty class name).
    pub fn none() -> Self {
        Self { global_index: 0 }
    }

    pub fn is_none(&self) -> bool {
        self.global_index == 0
    }

    /// The class name as it is known to the engine, e.g. `"Node2D"`.
    pub fn to_str(&self) -> &'static str {
        self.entry().name
    }

    /// Returns the class name as a `GString`.
    pub fn to_gstring(&self) -> GString {
        GString::from(self.to_str())
    }

    /// Returns the class name as a `StringName`.
    pub fn to_string_name(&self) -> StringName {
        self.cached_string_name().clone()
    }

    /// Engine pointer to the cached `StringName`; valid for the rest of the process.
    #[doc(hidden)]
    pub fn string_sys(&self) -> sys::GDExtensionConstStringNamePtr {
        self.cached_string_name().string_sys()
    }

    fn cached_string_name(&self) -> &'static StringName {
        let entry = self.entry();
        entry.string_name.get_or_init(|| StringName::from(entry.name))
    }

    fn entry(&self) -> &'static ClassNameEntry {
        // Lock is released before the entry is used, entries are 'static.
        CLASS_NAMES.lock()[self.global_index as usize]
    }
}

impl fmt::Display for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl fmt::Debug for ClassName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "ClassName(none)")
        } else {
            write!(f, "ClassName({:?})", self.to_str())
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

struct ClassNameEntry {
    name: &'static str,

    /// Needs lazy initialization, because the engine binding may not be initialized when the class name is allocated.
    string_name: OnceLock<StringName>,
}

impl ClassNameEntry {
    fn leak(name: &'static str) -> &'static Self {
        Box::leak(Box::new(Self {
            name,
            string_name: OnceLock::new(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alloc_and_display() {
        let a = ClassName::alloc_next("TestClassA");
        let b = ClassName::alloc_next("TestClassB");

        assert_ne!(a, b);
        assert_eq!(a.to_str(), "TestClassA");
        assert_eq!(b.to_string(), "TestClassB");
        assert_eq!(format!("{a:?}"), "ClassName(\"TestClassA\")");
    }

    #[test]
    fn none_is_empty() {
        let none = ClassName::none();

        assert!(none.is_none());
        assert_eq!(none.to_str(), "");
        assert_eq!(format!("{none:?}"), "ClassName(none)");
    }
}
