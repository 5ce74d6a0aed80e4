/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::hash::Hash;
use std::{fmt, ptr};

use sys::{ffi_methods, GodotFfi};

use crate::builtin::{GString, Variant};
use crate::meta::error::CallError;
use crate::meta::{CallContext, ToGodot};
use crate::sys;

/// A `Callable` represents a function in the engine.
///
/// This layer creates callables from Rust closures ([`from_fn`](Self::from_fn)) or from types implementing
/// [`RustCallable`] ([`from_custom`](Self::from_custom)). Signal connections are expressed through the latter.
#[repr(transparent)]
pub struct Callable {
    opaque: sys::OpaqueCallable,
}

impl Callable {
    fn from_opaque(opaque: sys::OpaqueCallable) -> Self {
        Self { opaque }
    }

    /// Create a callable from a Rust function or closure.
    ///
    /// `name` is used for the string representation of the closure, which helps debugging.
    ///
    /// Callables created through multiple `from_fn()` calls are never equal, even if they refer to the same function. If you
    /// need equality, either clone an existing `Callable`, or define your own `PartialEq` impl with [`Callable::from_custom`].
    pub fn from_fn<F, S>(name: S, rust_function: F) -> Self
    where
        F: 'static + FnMut(&[&Variant]) -> Result<Variant, CallError>,
        S: Into<GString>,
    {
        let userdata = CallableUserdata {
            inner: FnWrapper {
                rust_function,
                name: name.into(),
            },
        };

        let info = sys::GDExtensionCallableCustomInfo {
            callable_userdata: Box::into_raw(Box::new(userdata)) as *mut std::ffi::c_void,
            token: sys::get_library(),
            object_id: 0,
            call_func: Some(rust_callable_call_fn::<F>),
            free_func: Some(rust_callable_destroy::<FnWrapper<F>>),
            hash_func: None,
            equal_func: None,
        };

        Self::from_custom_info(info)
    }

    /// Create a highly configurable callable from Rust.
    ///
    /// See [`RustCallable`] for requirements on the type.
    pub fn from_custom<C: RustCallable>(callable: C) -> Self {
        let userdata = CallableUserdata { inner: callable };

        let info = sys::GDExtensionCallableCustomInfo {
            callable_userdata: Box::into_raw(Box::new(userdata)) as *mut std::ffi::c_void,
            token: sys::get_library(),
            object_id: 0,
            call_func: Some(rust_callable_call_custom::<C>),
            free_func: Some(rust_callable_destroy::<C>),
            hash_func: Some(rust_callable_hash::<C>),
            equal_func: Some(rust_callable_equal::<C>),
        };

        Self::from_custom_info(info)
    }

    fn from_custom_info(mut info: sys::GDExtensionCallableCustomInfo) -> Callable {
        // SAFETY: callable_custom_create() is a valid way of creating callables; the engine takes ownership of the userdata.
        unsafe {
            Callable::new_from_sys_init(|type_ptr| {
                sys::interface_fn!(callable_custom_create)(type_ptr, ptr::addr_of_mut!(info))
            })
        }
    }
}

// SAFETY: `Callable` is `#[repr(transparent)]` over the engine's opaque callable storage.
unsafe impl GodotFfi for Callable {
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Callable
    }

    ffi_methods! { type sys::GDExtensionTypePtr = *mut Opaque; }
}

impl Clone for Callable {
    fn clone(&self) -> Self {
        let copy = sys::builtin_lifecycle_api().callable_copy;
        let args = [self.sys()];

        // SAFETY: copy constructor reads the source from `args[0]`.
        unsafe { Self::new_from_sys_init(|ptr| copy(ptr, args.as_ptr())) }
    }
}

impl Drop for Callable {
    fn drop(&mut self) {
        let destroy = sys::builtin_lifecycle_api().callable_destroy;

        // SAFETY: each `Callable` releases its reference exactly once.
        unsafe { destroy(self.sys_mut()) };
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_variant())
    }
}

impl fmt::Display for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_variant())
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Callbacks for custom implementations

use custom_callable::*;

pub use custom_callable::RustCallable;

mod custom_callable {
    use super::*;

    pub struct CallableUserdata<T> {
        pub inner: T,
    }

    impl<T> CallableUserdata<T> {
        /// # Safety
        /// Returns an unbounded reference. `void_ptr` must be a valid pointer to a `CallableUserdata`.
        unsafe fn inner_from_raw<'a>(void_ptr: *mut std::ffi::c_void) -> &'a mut T {
            let ptr = void_ptr as *mut CallableUserdata<T>;

            // SAFETY: forwarded to caller.
            unsafe { &mut (*ptr).inner }
        }
    }

    pub(crate) struct FnWrapper<F> {
        pub(crate) rust_function: F,
        pub(crate) name: GString,
    }

    /// Represents a custom callable object defined in Rust.
    ///
    /// This trait has a single method, `invoke`, which is called upon invocation.
    ///
    /// Callables must be self-contained (`'static`). They are invoked on the thread that emits the signal or calls the callable.
    /// `PartialEq` and `Hash` back the engine's equality checks, which are used to find a connection on disconnect.
    /// `Display` names the callable in error messages.
    pub trait RustCallable: 'static + PartialEq + Hash + fmt::Display {
        /// Invokes the callable with the given arguments as `Variant` references.
        ///
        /// Return `Ok(...)` if the call succeeded, and `Err(...)` otherwise. Errors are typically a mismatch of argument
        /// number or types.
        fn invoke(&mut self, args: &[&Variant]) -> Result<Variant, CallError>;
    }

    pub unsafe extern "C" fn rust_callable_call_custom<C: RustCallable>(
        callable_userdata: *mut std::ffi::c_void,
        p_args: *const sys::GDExtensionConstVariantPtr,
        p_argument_count: sys::GDExtensionInt,
        r_return: sys::GDExtensionVariantPtr,
        r_error: *mut sys::GDExtensionCallError,
    ) {
        // SAFETY: the engine passes the userdata it received on creation.
        let c: &mut C = unsafe { CallableUserdata::inner_from_raw(callable_userdata) };
        let name = c.to_string();
        let ctx = CallContext::custom_callable(&name);

        // SAFETY: engine guarantees valid argument array, return slot and error pointer.
        unsafe {
            crate::private::handle_varcall_panic(&ctx, &mut *r_error, move || {
                let arg_refs: &[&Variant] = Variant::borrow_ref_slice(p_args, p_argument_count as usize);
                let result = c.invoke(arg_refs)?;

                result.move_into_var_ptr(r_return);
                Ok(())
            })
        };
    }

    pub unsafe extern "C" fn rust_callable_call_fn<F>(
        callable_userdata: *mut std::ffi::c_void,
        p_args: *const sys::GDExtensionConstVariantPtr,
        p_argument_count: sys::GDExtensionInt,
        r_return: sys::GDExtensionVariantPtr,
        r_error: *mut sys::GDExtensionCallError,
    ) where
        F: FnMut(&[&Variant]) -> Result<Variant, CallError>,
    {
        // SAFETY: the engine passes the userdata it received on creation.
        let w: &mut FnWrapper<F> = unsafe { CallableUserdata::inner_from_raw(callable_userdata) };
        let name = w.name.to_string();
        let ctx = CallContext::custom_callable(&name);

        // SAFETY: engine guarantees valid argument array, return slot and error pointer.
        unsafe {
            crate::private::handle_varcall_panic(&ctx, &mut *r_error, move || {
                let arg_refs: &[&Variant] = Variant::borrow_ref_slice(p_args, p_argument_count as usize);
                let result = (w.rust_function)(arg_refs)?;

                result.move_into_var_ptr(r_return);
                Ok(())
            })
        };
    }

    pub unsafe extern "C" fn rust_callable_destroy<T>(callable_userdata: *mut std::ffi::c_void) {
        let rust_ptr = callable_userdata as *mut CallableUserdata<T>;

        // SAFETY: userdata was created by `Box::into_raw()` and is freed exactly once by the engine.
        let _drop = unsafe { Box::from_raw(rust_ptr) };
    }

    pub unsafe extern "C" fn rust_callable_hash<T: Hash>(callable_userdata: *mut std::ffi::c_void) -> u32 {
        // SAFETY: see above.
        let c: &T = unsafe { CallableUserdata::<T>::inner_from_raw(callable_userdata) };

        // Just cut off top bits, not best-possible hash.
        sys::hash_value(c)
    }

    pub unsafe extern "C" fn rust_callable_equal<T: PartialEq>(
        callable_userdata_a: *mut std::ffi::c_void,
        callable_userdata_b: *mut std::ffi::c_void,
    ) -> sys::GDExtensionBool {
        // SAFETY: the engine only compares callables with the same `equal_func`, hence the same `T`.
        let a: &T = unsafe { CallableUserdata::inner_from_raw(callable_userdata_a) };
        let b: &T = unsafe { CallableUserdata::inner_from_raw(callable_userdata_b) };

        sys::conv_bool(a == b)
    }
}
