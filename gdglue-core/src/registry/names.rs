/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Per-class tables of interned property, method and signal names.
//!
//! Each engine class carries a generated [`ClassMetadata`] static listing only its *own* names. The first request for a
//! class's [`NameTable`] walks the ancestor chain once and flattens all names into one table; entries are shared with the
//! base tables, so every name is interned at most once per declaring class.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use sys::Global;

use crate::builtin::StringName;
use crate::sys;

/// Own names of one engine class, as listed in the API description. Generated.
#[doc(hidden)]
pub struct ClassMetadata {
    pub name: &'static str,
    pub base: Option<&'static ClassMetadata>,
    pub is_refcounted: bool,
    pub properties: &'static [&'static str],
    pub methods: &'static [&'static str],
    pub signals: &'static [&'static str],
    pub virtuals: &'static [VirtualMethodInfo],
}

/// Overridable method declared by a class. Generated.
#[doc(hidden)]
pub struct VirtualMethodInfo {
    pub name: &'static str,
    pub arity: usize,
}

// Flattened tables of engine classes, keyed by the address of their metadata static.
static ENGINE_TABLES: Global<HashMap<usize, &'static NameTable>> = Global::default();

/// Returns the flattened table of an engine class, building it on first use.
#[doc(hidden)]
pub fn flattened(meta: &'static ClassMetadata) -> &'static NameTable {
    let key = meta as *const ClassMetadata as usize;
    if let Some(table) = ENGINE_TABLES.lock().get(&key) {
        return table;
    }

    // Built without holding the lock, since the base table is requested recursively.
    let base = meta.base.map(flattened);
    let table = NameTable::build(meta.name, base, meta);

    let mut tables = ENGINE_TABLES.lock();
    // Concurrent first uses may both build; the first insertion wins and the other table is dropped.
    let table: &'static NameTable = *tables.entry(key).or_insert_with(|| Box::leak(Box::new(table)));

    sys::out!("Flattened name table of {} ({} names)", meta.name, table.len());
    table
}

/// Returns the table of a user class: its base's names, and the class itself in the ancestry. Leaks; called once per class.
#[doc(hidden)]
pub fn derived(class_name: &'static str, base: &'static NameTable) -> &'static NameTable {
    let mut table = base.clone_shallow();
    table.class_name = class_name;
    table.ancestry.insert(0, class_name);

    Box::leak(Box::new(table))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// One name together with the class declaring it. Interned on first lookup.
struct NameEntry {
    owner: &'static str,
    name: &'static str,
    interned: OnceLock<StringName>,
}

impl NameEntry {
    fn leak(owner: &'static str, name: &'static str) -> &'static Self {
        Box::leak(Box::new(Self {
            owner,
            name,
            interned: OnceLock::new(),
        }))
    }

    fn string_name(&'static self) -> &'static StringName {
        self.interned.get_or_init(|| StringName::from(self.name))
    }
}

/// One overridable method in a flattened table.
#[derive(Copy, Clone)]
pub struct VirtualSlot {
    entry: &'static NameEntry,
    arity: usize,
}

impl VirtualSlot {
    /// Class declaring the method, e.g. `"Node"` for `_process`.
    pub fn owner(&self) -> &'static str {
        self.entry.owner
    }

    /// Engine name, e.g. `"_process"`.
    pub fn name(&self) -> &'static str {
        self.entry.name
    }

    /// Interned engine name, as the engine passes it to `has_virtual` and `call_virtual`.
    pub fn string_name(&self) -> &'static StringName {
        self.entry.string_name()
    }

    /// Number of parameters declared by the engine.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Flattened names of a class and all its ancestors.
///
/// Lookups by `&str` intern the name on first access and return the same `StringName` afterwards; equality and hashing
/// of the result are thus by identity.
pub struct NameTable {
    class_name: &'static str,
    ancestry: Vec<&'static str>,
    properties: HashMap<&'static str, &'static NameEntry>,
    methods: HashMap<&'static str, &'static NameEntry>,
    signals: HashMap<&'static str, &'static NameEntry>,
    virtuals: Vec<VirtualSlot>,
}

impl NameTable {
    fn build(class_name: &'static str, base: Option<&'static NameTable>, meta: &ClassMetadata) -> Self {
        let mut table = match base {
            Some(base) => base.clone_shallow(),
            None => Self::new_empty(),
        };

        table.class_name = class_name;
        table.ancestry.insert(0, class_name);

        // Own declarations replace inherited ones of the same name.
        for &name in meta.properties {
            table.properties.insert(name, NameEntry::leak(class_name, name));
        }
        for &name in meta.methods {
            table.methods.insert(name, NameEntry::leak(class_name, name));
        }
        for &name in meta.signals {
            table.signals.insert(name, NameEntry::leak(class_name, name));
        }
        for info in meta.virtuals {
            let slot = VirtualSlot {
                entry: NameEntry::leak(class_name, info.name),
                arity: info.arity,
            };

            match table.virtuals.iter_mut().find(|existing| existing.name() == info.name) {
                Some(existing) => *existing = slot,
                None => table.virtuals.push(slot),
            }
        }

        table
    }

    fn new_empty() -> Self {
        Self {
            class_name: "",
            ancestry: Vec::new(),
            properties: HashMap::new(),
            methods: HashMap::new(),
            signals: HashMap::new(),
            virtuals: Vec::new(),
        }
    }

    // Entries are 'static and shared, only the maps are copied.
    fn clone_shallow(&self) -> Self {
        Self {
            class_name: self.class_name,
            ancestry: self.ancestry.clone(),
            properties: self.properties.clone(),
            methods: self.methods.clone(),
            signals: self.signals.clone(),
            virtuals: self.virtuals.clone(),
        }
    }

    /// Table without any names, for the absent base class of `Object`.
    pub fn empty() -> &'static NameTable {
        static EMPTY: OnceLock<NameTable> = OnceLock::new();
        EMPTY.get_or_init(Self::new_empty)
    }

    /// Interned name of a property declared by the class or an ancestor.
    pub fn property(&self, name: &str) -> Option<&'static StringName> {
        self.properties.get(name).map(|entry| entry.string_name())
    }

    /// Interned name of a method declared by the class or an ancestor.
    pub fn method(&self, name: &str) -> Option<&'static StringName> {
        self.methods.get(name).map(|entry| entry.string_name())
    }

    /// Interned name of a signal declared by the class or an ancestor.
    pub fn signal(&self, name: &str) -> Option<&'static StringName> {
        self.signals.get(name).map(|entry| entry.string_name())
    }

    /// Class that declares the method `name`, if any.
    pub fn method_owner(&self, name: &str) -> Option<&'static str> {
        self.methods.get(name).map(|entry| entry.owner)
    }

    /// Class that declares the signal `name`, if any.
    pub fn signal_owner(&self, name: &str) -> Option<&'static str> {
        self.signals.get(name).map(|entry| entry.owner)
    }

    /// All overridable methods of the class and its ancestors, base classes first.
    pub fn virtuals(&self) -> &[VirtualSlot] {
        &self.virtuals
    }

    /// Engine name of the class.
    pub fn class_name(&self) -> &'static str {
        self.class_name
    }

    /// The class followed by all its ancestors, up to `Object`.
    pub fn ancestry(&self) -> &[&'static str] {
        &self.ancestry
    }

    /// Whether `class_name` is the class itself or one of its ancestors.
    pub fn inherits(&self, class_name: &str) -> bool {
        self.ancestry.contains(&class_name)
    }

    /// Total number of names in the table.
    pub fn len(&self) -> usize {
        self.properties.len() + self.methods.len() + self.signals.len() + self.virtuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn sorted(map: &HashMap<&'static str, &'static NameEntry>) -> Vec<&'static str> {
    let mut names: Vec<_> = map.keys().copied().collect();
    names.sort_unstable();
    names
}

impl fmt::Debug for NameTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameTable")
            .field("class", &self.class_name)
            .field("ancestry", &self.ancestry)
            .field("properties", &sorted(&self.properties))
            .field("methods", &sorted(&self.methods))
            .field("signals", &sorted(&self.signals))
            .field("virtuals", &self.virtuals.iter().map(VirtualSlot::name).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static BASE: ClassMetadata = ClassMetadata {
        name: "TestBase",
        base: None,
        is_refcounted: false,
        properties: &["name"],
        methods: &["get_name", "set_name"],
        signals: &["renamed"],
        virtuals: &[VirtualMethodInfo {
            name: "_ready",
            arity: 0,
        }],
    };

    static MIDDLE: ClassMetadata = ClassMetadata {
        name: "TestMiddle",
        base: Some(&BASE),
        is_refcounted: false,
        properties: &[],
        methods: &["redraw"],
        signals: &["draw"],
        virtuals: &[VirtualMethodInfo {
            name: "_draw",
            arity: 0,
        }],
    };

    static LEAF: ClassMetadata = ClassMetadata {
        name: "TestLeaf",
        base: Some(&MIDDLE),
        is_refcounted: false,
        properties: &["size"],
        methods: &["get_size"],
        signals: &[],
        virtuals: &[VirtualMethodInfo {
            name: "_has_point",
            arity: 1,
        }],
    };

    #[test]
    fn flattening_includes_all_ancestors() {
        let table = flattened(&LEAF);

        assert_eq!(table.class_name(), "TestLeaf");
        assert_eq!(table.ancestry(), ["TestLeaf", "TestMiddle", "TestBase"]);
        assert!(table.inherits("TestBase"));
        assert!(!table.inherits("Unrelated"));

        assert_eq!(table.method_owner("get_name"), Some("TestBase"));
        assert_eq!(table.method_owner("get_size"), Some("TestLeaf"));
        assert_eq!(table.signal_owner("draw"), Some("TestMiddle"));
        assert_eq!(table.method_owner("missing"), None);

        let virtuals: Vec<_> = table.virtuals().iter().map(|v| (v.owner(), v.name(), v.arity())).collect();
        assert_eq!(
            virtuals,
            [("TestBase", "_ready", 0), ("TestMiddle", "_draw", 0), ("TestLeaf", "_has_point", 1)]
        );
    }

    #[test]
    fn flattening_is_cached() {
        let first = flattened(&MIDDLE);
        let second = flattened(&MIDDLE);
        assert!(std::ptr::eq(first, second));

        // Built bottom-up: the leaf table reuses the entry of its base for inherited names.
        let leaf = flattened(&LEAF);
        let base_entry = first.methods["get_name"];
        assert!(std::ptr::eq(leaf.methods["get_name"], base_entry));
    }

    #[test]
    fn user_class_table() {
        let table = derived("TestUser", flattened(&MIDDLE));

        assert_eq!(table.ancestry(), ["TestUser", "TestMiddle", "TestBase"]);
        assert_eq!(table.len(), flattened(&MIDDLE).len());
        assert!(NameTable::empty().is_empty());
    }
}
