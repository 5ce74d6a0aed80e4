/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::conv;
use crate::models::domain::TyName;
use crate::models::json::{JsonClass, JsonEnum, JsonExtensionApi};

/// Cross-class knowledge needed while mapping a single class: the inheritance tree, refcounting and enum values.
#[derive(Default)]
pub struct Context<'a> {
    engine_classes: HashMap<TyName, &'a JsonClass>,
    inheritance_tree: InheritanceTree,

    /// `"Node.InternalMode"` or `"Error"` -> (Rust enumerator name, value).
    enumerators: HashMap<String, Vec<(String, i64)>>,
}

impl<'a> Context<'a> {
    pub fn build_from_api(api: &'a JsonExtensionApi) -> Self {
        let mut ctx = Self::default();

        for class in api.classes.iter() {
            let class_name = TyName::from_godot(&class.name);

            if let Some(base) = class.inherits.as_ref() {
                let base_name = TyName::from_godot(base);
                ctx.inheritance_tree.insert(class_name.clone(), base_name);
            }

            for enum_ in class.enums.iter().flatten() {
                ctx.add_enum(&format!("{}.{}", class.name, enum_.name), enum_);
            }

            ctx.engine_classes.insert(class_name, class);
        }

        for enum_ in api.global_enums.iter() {
            ctx.add_enum(&enum_.name, enum_);
        }

        // Every base must be known, otherwise generated `Deref` and `Inherits` impls would point into the void.
        for class in api.classes.iter() {
            if let Some(base) = class.inherits.as_ref() {
                assert!(
                    ctx.is_engine_class(base),
                    "class {} inherits unknown class {base}",
                    class.name
                );
            }
        }

        ctx
    }

    fn add_enum(&mut self, qualified_name: &str, enum_: &JsonEnum) {
        let godot_names = enum_.values.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        let rust_names = conv::make_enumerator_names(&godot_names);

        let enumerators = rust_names
            .into_iter()
            .zip(enum_.values.iter().map(|v| v.value))
            .collect();

        self.enumerators.insert(qualified_name.to_string(), enumerators);
    }

    pub fn is_engine_class(&self, class_name: &str) -> bool {
        self.engine_classes.contains_key(&TyName::from_godot(class_name))
    }

    pub fn get_engine_class(&self, class_name: &TyName) -> &JsonClass {
        self.engine_classes
            .get(class_name)
            .unwrap_or_else(|| panic!("no engine class {class_name}"))
    }

    pub fn inheritance_tree(&self) -> &InheritanceTree {
        &self.inheritance_tree
    }

    /// Whether the class or one of its ancestors declares signals.
    pub fn nearest_class_with_signals(&self, class_name: &TyName) -> Option<TyName> {
        std::iter::once(class_name.clone())
            .chain(self.inheritance_tree.collect_all_bases(class_name))
            .find(|name| {
                let class = self.get_engine_class(name);
                class.signals.as_ref().is_some_and(|s| !s.is_empty())
            })
    }

    /// Rust name of the enumerator with `value` in enum `qualified_name` (e.g. `Node.InternalMode`).
    ///
    /// `None` if no enumerator has this value, in which case the caller falls back to the ordinal.
    pub fn find_enumerator(&self, qualified_name: &str, value: i64) -> Option<&str> {
        self.enumerators
            .get(qualified_name)?
            .iter()
            .find(|(_, v)| *v == value)
            .map(|(name, _)| name.as_str())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Maps derived class -> base class.
#[derive(Default)]
pub struct InheritanceTree {
    derived_to_base: HashMap<TyName, TyName>,
}

impl InheritanceTree {
    pub fn insert(&mut self, rust_class_name: TyName, rust_base_class: TyName) {
        let existing = self.derived_to_base.insert(rust_class_name, rust_base_class);
        assert!(existing.is_none(), "Duplicate inheritance insert");
    }

    pub fn direct_base(&self, derived_name: &TyName) -> Option<TyName> {
        self.derived_to_base.get(derived_name).cloned()
    }

    /// Returns all base classes, from direct base up to `Object`.
    pub fn collect_all_bases(&self, derived_name: &TyName) -> Vec<TyName> {
        let mut upgoer = derived_name;
        let mut result = vec![];

        while let Some(base) = self.derived_to_base.get(upgoer) {
            result.push(base.clone());
            upgoer = base;
        }
        result
    }
}
