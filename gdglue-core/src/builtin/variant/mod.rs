/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;

use sys::{ffi_methods, interface_fn, GodotFfi};

use crate::builtin::{GString, VariantType};
use crate::meta::error::ConvertError;
use crate::meta::{FromGodot, ToGodot};
use crate::sys;

mod impls;

/// Engine's dynamically typed value.
///
/// Used where the engine API is not statically typed: arguments of _varcall_ methods such as `Object::call()`, values
/// passed to signal handlers and custom callables, and arguments of virtual method callbacks.
///
/// Conversions go through [`ToGodot::to_variant()`] and [`FromGodot::try_from_variant()`], or the shorthands
/// [`Variant::from()`] and [`Variant::to()`]/[`Variant::try_to()`].
#[repr(transparent)]
pub struct Variant {
    opaque: sys::OpaqueVariant,
}

impl Variant {
    /// Create an empty variant (`null` value in GDScript).
    pub fn nil() -> Self {
        // SAFETY: the engine initializes a nil variant in place.
        unsafe {
            Self::new_with_var_uninit(|variant_ptr| {
                interface_fn!(variant_new_nil)(variant_ptr);
            })
        }
    }

    /// Create a variant holding a non-nil value.
    ///
    /// Equivalent to [`value.to_variant()`][ToGodot::to_variant], but consumes the argument.
    pub fn from<T: ToGodot>(value: T) -> Self {
        value.to_variant()
    }

    /// ⚠️ Convert to type `T`, panicking on failure.
    ///
    /// # Panics
    /// When this variant holds a different type.
    pub fn to<T: FromGodot>(&self) -> T {
        T::from_variant(self)
    }

    /// Convert to type `T`, returning `Err` on failure.
    pub fn try_to<T: FromGodot>(&self) -> Result<T, ConvertError> {
        T::try_from_variant(self)
    }

    /// Checks whether the variant is empty (`null` value in GDScript).
    pub fn is_nil(&self) -> bool {
        self.get_type() == VariantType::Nil
    }

    /// Returns the type that is currently held by this variant.
    ///
    /// Types the bindings do not marshal are reported as `Nil`.
    pub fn get_type(&self) -> VariantType {
        // SAFETY: `self` is a valid, initialized variant.
        let sys_type = unsafe { interface_fn!(variant_get_type)(self.var_sys()) };

        VariantType::try_from_sys(sys_type).unwrap_or_default()
    }

    /// Engine text representation, as `str()` in GDScript produces it.
    pub fn stringify(&self) -> GString {
        // SAFETY: the engine placement-constructs the string.
        unsafe {
            GString::new_from_sys_init(|string_ptr| {
                interface_fn!(variant_stringify)(self.var_sys(), string_ptr);
            })
        }
    }

    fn from_opaque(opaque: sys::OpaqueVariant) -> Self {
        Self { opaque }
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Conversions from/to engine `Variant*` pointers

    /// # Safety
    /// `init_fn` must fully initialize the variant behind the pointer.
    pub(crate) unsafe fn new_with_var_uninit(init_fn: impl FnOnce(sys::GDExtensionUninitializedVariantPtr)) -> Self {
        // SAFETY: forwarded to caller.
        unsafe { Self::new_from_sys_init(|ptr| init_fn(ptr as sys::GDExtensionUninitializedVariantPtr)) }
    }

    pub(crate) fn var_sys(&self) -> sys::GDExtensionConstVariantPtr {
        self.sys() as sys::GDExtensionConstVariantPtr
    }

    pub(crate) fn var_sys_mut(&mut self) -> sys::GDExtensionVariantPtr {
        self.sys_mut() as sys::GDExtensionVariantPtr
    }

    /// Moves this variant into an engine-owned slot, without destroying the previous content of the slot.
    ///
    /// # Safety
    /// `dst` must be valid for writes; a previous value must be nil or already destroyed.
    pub(crate) unsafe fn move_into_var_ptr(self, dst: sys::GDExtensionVariantPtr) {
        // SAFETY: layout of `Variant` is the opaque storage; ownership passes to `dst`.
        unsafe { std::ptr::write(dst as *mut Variant, self) };
    }

    /// Borrows the variant behind an engine pointer.
    ///
    /// # Safety
    /// `ptr` must point to a live variant for the duration of `'a`.
    pub(crate) unsafe fn borrow_var_sys<'a>(ptr: sys::GDExtensionConstVariantPtr) -> &'a Variant {
        sys::static_assert_eq_size!(Variant, sys::OpaqueVariant);

        // SAFETY: `#[repr(transparent)]` over the opaque storage the engine points to.
        unsafe { &*(ptr as *const Variant) }
    }

    /// Borrows the argument array of an engine callback.
    ///
    /// # Safety
    /// `args` must point to `arg_count` pointers to live variants, valid for `'a`. A null `args` is allowed for zero arguments.
    pub(crate) unsafe fn borrow_ref_slice<'a>(
        args: *const sys::GDExtensionConstVariantPtr,
        arg_count: usize,
    ) -> &'a [&'a Variant] {
        if args.is_null() || arg_count == 0 {
            return &[];
        }

        // SAFETY: `&Variant` has the layout of `*const Variant`, which the engine passes as `GDExtensionConstVariantPtr`.
        unsafe { std::slice::from_raw_parts(args as *const &Variant, arg_count) }
    }
}

// SAFETY: `Variant` is `#[repr(transparent)]` over the engine's opaque variant storage.
unsafe impl GodotFfi for Variant {
    fn variant_type() -> VariantType {
        VariantType::Nil
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Default for Variant {
    fn default() -> Self {
        Self::nil()
    }
}

impl Clone for Variant {
    fn clone(&self) -> Self {
        // SAFETY: copy constructor reads `self` and initializes the new variant.
        unsafe {
            Self::new_with_var_uninit(|variant_ptr| {
                interface_fn!(variant_new_copy)(variant_ptr, self.var_sys());
            })
        }
    }
}

impl Drop for Variant {
    fn drop(&mut self) {
        // SAFETY: each `Variant` owns its content exactly once.
        unsafe {
            interface_fn!(variant_destroy)(self.var_sys_mut());
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.stringify();
        write!(f, "{s}")
    }
}

impl fmt::Debug for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get_type() {
            // Quoted, to tell strings apart from the other types.
            VariantType::String => write!(f, "{:?}", self.stringify()),
            VariantType::StringName => write!(f, "&{:?}", self.stringify()),
            _ => write!(f, "{}", self.stringify()),
        }
    }
}
