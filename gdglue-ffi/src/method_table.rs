/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Method bind cache.
//!
//! Every generated engine class owns one `static` [`LazyClassMethodTable`], listing its methods by name and signature hash.
//! The first call into any method of the class resolves the whole table through `classdb_get_method_bind`; afterwards each
//! call is an array index. Resolution is guarded by a `OnceLock`, so concurrent first calls resolve exactly once.

use std::sync::OnceLock;

use crate as sys;
use crate::StringCache;

/// Identifies one overload of an engine method: name plus the engine-defined signature hash.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct MethodKey {
    pub name: &'static str,
    pub hash: i64,
}

impl MethodKey {
    pub const fn new(name: &'static str, hash: i64) -> Self {
        Self { name, hash }
    }
}

/// Resolved method bind token. Opaque to Rust, passed back to the engine on each call.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassMethodBind(pub sys::GDExtensionMethodBindPtr);

// SAFETY: method binds are immutable engine-side descriptors, valid for the whole engine lifetime.
unsafe impl Send for ClassMethodBind {}
// SAFETY: see `Send` impl.
unsafe impl Sync for ClassMethodBind {}

/// Resolved method binds of one class, in declaration order of its keys.
pub struct ClassMethodTable {
    class_name: &'static str,
    binds: Box<[ClassMethodBind]>,
}

impl ClassMethodTable {
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn bind(&self, index: usize) -> ClassMethodBind {
        self.binds[index]
    }

    pub fn len(&self) -> usize {
        self.binds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.binds.is_empty()
    }
}

/// Method table resolved on first use.
pub struct LazyClassMethodTable {
    class_name: &'static str,
    keys: &'static [MethodKey],
    table: OnceLock<ClassMethodTable>,
}

impl LazyClassMethodTable {
    pub const fn new(class_name: &'static str, keys: &'static [MethodKey]) -> Self {
        Self {
            class_name,
            keys,
            table: OnceLock::new(),
        }
    }

    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    pub fn keys(&self) -> &'static [MethodKey] {
        self.keys
    }

    pub fn is_loaded(&self) -> bool {
        self.table.get().is_some()
    }

    /// Returns the resolved table, resolving it first if needed.
    ///
    /// # Panics
    /// If the engine does not know one of the methods. The generated bindings and the engine are then not version-matched,
    /// which is not recoverable.
    pub fn get(&self) -> &ClassMethodTable {
        self.table.get_or_init(|| load_class_method_table(self.class_name, self.keys))
    }

    /// Method bind of the method at `index` in the key list.
    #[inline]
    pub fn bind(&self, index: usize) -> ClassMethodBind {
        self.get().bind(index)
    }
}

fn load_class_method_table(class_name: &'static str, keys: &'static [MethodKey]) -> ClassMethodTable {
    let interface = sys::get_interface();
    let get_method_bind = crate::interface_fn!(classdb_get_method_bind);

    let mut string_cache = StringCache::new(interface, sys::builtin_lifecycle_api());
    let class_sname = string_cache.fetch(class_name);

    let binds = keys
        .iter()
        .map(|key| {
            let method_sname = string_cache.fetch(key.name);

            // SAFETY: both names are live StringNames owned by the cache.
            let bind = unsafe { get_method_bind(class_sname, method_sname, key.hash) };
            if bind.is_null() {
                failed_to_load(class_name, key);
            }

            ClassMethodBind(bind)
        })
        .collect::<Box<[_]>>();

    sys::out!("Loaded method table for {class_name}: {} methods", binds.len());

    ClassMethodTable { class_name, binds }
}

#[cold]
fn failed_to_load(class_name: &str, key: &MethodKey) -> ! {
    panic!(
        "failed to load class method {class_name}::{} (hash {}).\n\
        Make sure the generated bindings and the engine binary are version-matched.",
        key.name, key.hash
    )
}
