/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Different ways how bounds of a `GodotClass` can be checked.
//!
//! This module contains three traits that can be used to check the characteristics of a `GodotClass` type:
//!
//! 1. [`Declarer`] tells you whether the class is provided by the engine or user-defined.
//!    - [`DeclEngine`] is used for all classes provided by the engine (e.g. `Node3D`).
//!    - [`DeclUser`] is used for all classes defined by the user through `godot_class!`.<br><br>
//!
//! 2. [`Memory`] is used to check the memory strategy of the **static** type.
//!
//!    This is useful when you operate on associated functions of `Gd<T>` or `T`, e.g. for construction.
//!    - [`MemRefCounted`] is used for `RefCounted` classes and derived.
//!    - [`MemManual`] is used for `Object` and all inherited classes, which are not `RefCounted` (e.g. `Node`).<br><br>
//!
//! 3. [`DynMemory`] is used to check the memory strategy of the **dynamic** type.
//!
//!    - [`MemRefCounted`] is used for `RefCounted` classes and derived. These are **always** reference-counted.
//!    - [`MemManual`] is used for instances inheriting `Object`, which are not `RefCounted` (e.g. `Node`). Excludes `Object`
//!      itself. These are **always** manually managed.
//!    - [`MemDynamic`] is used for `Object` instances. `Gd<Object>` can point to objects of any class, so whether we are
//!      dealing with a ref-counted or manually-managed object is determined only at runtime, from the instance ID.

use crate::obj::{GodotClass, RawGd};
use crate::sys;
use private::Sealed;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Sealed trait

pub(super) mod private {
    use super::{Declarer, DynMemory, Memory};

    // Bounds trait declared here for code locality; re-exported in crate::obj.

    /// Library-implemented trait to check bounds on `GodotClass` types.
    ///
    /// See also [`bounds`](crate::obj::bounds) module documentation.
    ///
    /// # Safety
    ///
    /// Internal.
    /// You **must not** implement this trait yourself. Generated classes and `godot_class!` do it.
    pub unsafe trait Bounds {
        type Memory: Memory;

        /// Defines the memory strategy of the instance (at runtime).
        type DynMemory: DynMemory;

        /// Whether this class is provided by the engine, or declared by the user as a Rust struct.
        type Declarer: Declarer;
    }

    pub trait Sealed {}
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Memory bounds

/// Specifies the memory strategy of the static type.
pub trait Memory: Sealed {}

/// Specifies the memory strategy of the dynamic type.
///
/// For `Gd<Object>`, it is determined at runtime whether the instance is manually managed or ref-counted.
pub trait DynMemory: Sealed {
    /// Initialize reference counter.
    #[doc(hidden)]
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, then increment count.
    #[doc(hidden)]
    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>);

    /// If ref-counted, then decrement count. Returns `true` if the count hit 0 and the object can be safely freed.
    ///
    /// # Safety
    /// If `obj` is ref-counted, it must own one reference, which is released by this call.
    #[doc(hidden)]
    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool;

    /// Check if ref-counted, return `None` if information is not available (dynamic and obj null).
    #[doc(hidden)]
    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool>;
}

/// Memory managed through the engine's reference counter (always present).
/// This is used for `RefCounted` classes and derived.
pub struct MemRefCounted {}
impl Sealed for MemRefCounted {}
impl Memory for MemRefCounted {}
impl DynMemory for MemRefCounted {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        sys::out!("  Stat::init  <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.init_ref();
            assert!(success, "init_ref() failed");
        });
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        sys::out!("  Stat::inc   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return;
        }
        obj.with_ref_counted(|refc| {
            let success = refc.reference();
            assert!(success, "reference() failed");
        });
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        sys::out!("  Stat::dec   <{}>", std::any::type_name::<T>());
        if obj.is_null() {
            return false;
        }
        obj.with_ref_counted(|refc| {
            let is_last = refc.unreference();
            sys::out!("  +-- was last={is_last}");
            is_last
        })
    }

    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(true)
    }
}

/// Memory managed through the engine's reference counter, if present; otherwise manual.
/// This is used only for `Object` classes.
pub struct MemDynamic {}
impl MemDynamic {
    /// Whether the instance ID carries the ref-counted marker bit. Null objects are not ref-counted.
    fn inherits_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> bool {
        obj.instance_id_unchecked().is_some_and(|id| id.is_ref_counted())
    }
}
impl Sealed for MemDynamic {}
impl DynMemory for MemDynamic {
    fn maybe_init_ref<T: GodotClass>(obj: &RawGd<T>) {
        sys::out!("  Dyn::init  <{}>", std::any::type_name::<T>());
        if Self::inherits_ref_counted(obj) {
            // Will call `RefCounted::init_ref()` which checks for liveness.
            MemRefCounted::maybe_init_ref(obj)
        }
    }

    fn maybe_inc_ref<T: GodotClass>(obj: &RawGd<T>) {
        sys::out!("  Dyn::inc   <{}>", std::any::type_name::<T>());
        if Self::inherits_ref_counted(obj) {
            MemRefCounted::maybe_inc_ref(obj)
        }
    }

    unsafe fn maybe_dec_ref<T: GodotClass>(obj: &RawGd<T>) -> bool {
        sys::out!("  Dyn::dec   <{}>", std::any::type_name::<T>());
        if Self::inherits_ref_counted(obj) {
            // SAFETY: forwarded to caller.
            unsafe { MemRefCounted::maybe_dec_ref(obj) }
        } else {
            false
        }
    }

    fn is_ref_counted<T: GodotClass>(obj: &RawGd<T>) -> Option<bool> {
        obj.instance_id_unchecked().map(|id| id.is_ref_counted())
    }
}

/// No memory management, user responsible for not leaking.
/// This is used for all `Object` derivates, which are not `RefCounted`. `Object` itself is also excluded.
pub struct MemManual {}
impl Sealed for MemManual {}
impl Memory for MemManual {}
impl DynMemory for MemManual {
    fn maybe_init_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    fn maybe_inc_ref<T: GodotClass>(_obj: &RawGd<T>) {}
    unsafe fn maybe_dec_ref<T: GodotClass>(_obj: &RawGd<T>) -> bool {
        false
    }
    fn is_ref_counted<T: GodotClass>(_obj: &RawGd<T>) -> Option<bool> {
        Some(false)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Declarer bounds

/// Trait that specifies who declares a given `GodotClass`.
pub trait Declarer: Sealed {
    /// What `Gd<T>` dereferences to: `T` itself for engine classes, the engine base for user classes.
    type DerefTarget<T: GodotClass>: GodotClass;
}

/// Expresses that a class is declared by the engine.
pub enum DeclEngine {}
impl Sealed for DeclEngine {}
impl Declarer for DeclEngine {
    type DerefTarget<T: GodotClass> = T;
}

/// Expresses that a class is declared by the user.
pub enum DeclUser {}
impl Sealed for DeclUser {}
impl Declarer for DeclUser {
    type DerefTarget<T: GodotClass> = T::Base;
}
