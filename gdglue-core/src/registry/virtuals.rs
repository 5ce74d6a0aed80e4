/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::collections::HashMap;

use crate::builtin::{StringName, Variant};
use crate::meta::error::CallError;
use crate::meta::{CallContext, Signature};
use crate::obj::UserClass;
use crate::private::handle_varcall_panic;
use crate::registry::names::NameTable;
use crate::registry::VirtualMethod;
use crate::storage::InstanceStorage;
use crate::sys;

/// Type-erased override: converts the arguments, runs the user function and writes the return value.
pub(super) type VirtualHandler<T> =
    Box<dyn Fn(&mut T, &[&Variant], sys::GDExtensionVariantPtr) -> Result<(), CallError> + Send + Sync>;

pub(super) fn make_handler<T, V, F>(f: F) -> VirtualHandler<T>
where
    T: UserClass,
    V: VirtualMethod,
    F: Fn(&mut T, V::Params) -> V::Ret + Send + Sync + 'static,
{
    Box::new(
        move |instance: &mut T, args: &[&Variant], ret: sys::GDExtensionVariantPtr| {
            let call_ctx = CallContext::func(T::class_name().to_str(), V::NAME);

            // SAFETY: `ret` is the return slot the engine passed to `call_virtual`.
            unsafe {
                Signature::<V::Params, V::Ret>::in_varcall(&call_ctx, args, ret, |params| f(instance, params))
            }
        },
    )
}

struct VirtualEntry<T> {
    owner: &'static str,
    name: &'static str,
    arity: usize,

    // None: declared by an ancestor, not overridden.
    handler: Option<VirtualHandler<T>>,
}

/// Flattened table of all overridable methods of a user class, keyed by interned engine name.
///
/// Built once at registration from the ancestor chain; answers the engine's `has_virtual` and `call_virtual` callbacks
/// with a single hash lookup each.
pub(crate) struct VirtualTable<T> {
    class_name: &'static str,
    entries: HashMap<StringName, VirtualEntry<T>>,
}

impl<T: UserClass> VirtualTable<T> {
    /// Records every virtual method of `names` and attaches the overrides.
    ///
    /// # Panics
    /// If an override names a method that none of the ancestors declares.
    pub(super) fn build(names: &'static NameTable, mut overrides: HashMap<&'static str, VirtualHandler<T>>) -> Self {
        let mut entries = HashMap::with_capacity(names.virtuals().len());

        for slot in names.virtuals() {
            let entry = VirtualEntry {
                owner: slot.owner(),
                name: slot.name(),
                arity: slot.arity(),
                handler: overrides.remove(slot.name()),
            };

            entries.insert(slot.string_name().clone(), entry);
        }

        if !overrides.is_empty() {
            let mut unknown: Vec<_> = overrides.into_keys().collect();
            unknown.sort_unstable();
            panic!(
                "class {} overrides methods not declared by any base class: {}",
                T::class_name(),
                unknown.join(", ")
            );
        }

        sys::out!(
            "Virtual table of {}: {} overridden of {}",
            T::class_name(),
            entries.values().filter(|e| e.handler.is_some()).count(),
            entries.len()
        );

        Self {
            class_name: T::class_name().to_str(),
            entries,
        }
    }

    fn lookup(&self, name: &StringName) -> Option<(&VirtualEntry<T>, &VirtualHandler<T>)> {
        let entry = self.entries.get(name)?;
        let handler = entry.handler.as_ref()?;
        Some((entry, handler))
    }

    /// Whether the class overrides the method `name`. Unknown names are not overridden.
    pub(crate) fn has(&self, name: &StringName) -> bool {
        self.lookup(name).is_some()
    }

    /// Invokes the override `name` on the instance in `storage`.
    ///
    /// The argument count must equal the declared arity. Failures (wrong count, conversion error, panic, instance already
    /// bound) are written to `out_err`. Returns whether the override ran and produced a result.
    pub(crate) fn call(
        &self,
        storage: &InstanceStorage<T>,
        name: &StringName,
        args: &[&Variant],
        ret: sys::GDExtensionVariantPtr,
        out_err: &mut sys::GDExtensionCallError,
    ) -> bool {
        let Some((entry, handler)) = self.lookup(name) else {
            return false;
        };

        sys::out!("call_virtual {}::{} (declared by {})", self.class_name, entry.name, entry.owner);

        let call_ctx = CallContext::func(self.class_name, entry.name);
        handle_varcall_panic(&call_ctx, out_err, || {
            CallError::check_arg_count(&call_ctx, args.len(), entry.arity)?;

            let mut instance = storage.get_mut();
            handler(&mut instance, args, ret)
        });

        out_err.error == sys::GDEXTENSION_CALL_OK
    }
}
