/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Types that can directly and fully represent some engine type in a pointer call.
///
/// Arguments are passed to the engine as the address of the value ([`as_arg_ptr`](GodotFfi::as_arg_ptr)); return values are
/// placement-constructed by the engine ([`new_from_sys_init`](GodotFfi::new_from_sys_init)).
/// See [`ffi_methods!`](crate::ffi_methods) for implementations.
///
/// # Safety
/// The memory layout of `Self` behind [`sys`](GodotFfi::sys) must match what the engine reads and writes for
/// [`variant_type`](GodotFfi::variant_type), bit-for-bit.
#[doc(hidden)]
pub unsafe trait GodotFfi {
    fn variant_type() -> sys::VariantType;

    /// Construct from an engine type pointer, taking a bitwise copy.
    ///
    /// # Safety
    /// `ptr` must point to a valid, initialized value. No refcount is adjusted.
    unsafe fn from_sys(ptr: sys::GDExtensionConstTypePtr) -> Self;

    /// Construct uninitialized storage and let `init_fn` write the value.
    ///
    /// # Safety
    /// `init_fn` must fully initialize the pointee.
    unsafe fn new_from_sys_init(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self;

    /// Engine pointer for read-only use.
    fn sys(&self) -> sys::GDExtensionConstTypePtr;

    /// Engine pointer for mutating use.
    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr;

    fn as_arg_ptr(&self) -> sys::GDExtensionConstTypePtr {
        self.sys()
    }
}

/// Types that can represent null, used to implement conversions of `Option<T>`.
pub trait GodotNullableFfi: Sized + GodotFfi {
    fn null() -> Self;
    fn is_null(&self) -> bool;

    fn flatten_option(opt: Option<Self>) -> Self {
        opt.unwrap_or_else(Self::null)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Macros choosing an implementation of the `GodotFfi` pointer methods.

#[macro_export]
#[doc(hidden)]
macro_rules! ffi_methods_one {
    // Sys pointer = address of the `opaque` field.
    (OpaquePtr; from_sys) => {
        unsafe fn from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            let opaque = unsafe { std::ptr::read(ptr as *const _) };
            Self::from_opaque(opaque)
        }
    };
    (OpaquePtr; new_from_sys_init) => {
        unsafe fn new_from_sys_init(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            Self::from_opaque(unsafe { raw.assume_init() })
        }
    };
    (OpaquePtr; sys) => {
        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            std::ptr::addr_of!(self.opaque) as $crate::GDExtensionConstTypePtr
        }
    };
    (OpaquePtr; sys_mut) => {
        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            std::ptr::addr_of_mut!(self.opaque) as $crate::GDExtensionTypePtr
        }
    };

    // Sys pointer = address of `self`.
    (SelfPtr; from_sys) => {
        unsafe fn from_sys(ptr: $crate::GDExtensionConstTypePtr) -> Self {
            unsafe { std::ptr::read(ptr as *const Self) }
        }
    };
    (SelfPtr; new_from_sys_init) => {
        unsafe fn new_from_sys_init(init_fn: impl FnOnce($crate::GDExtensionUninitializedTypePtr)) -> Self {
            let mut raw = std::mem::MaybeUninit::<Self>::uninit();
            init_fn(raw.as_mut_ptr() as $crate::GDExtensionUninitializedTypePtr);

            unsafe { raw.assume_init() }
        }
    };
    (SelfPtr; sys) => {
        fn sys(&self) -> $crate::GDExtensionConstTypePtr {
            self as *const Self as $crate::GDExtensionConstTypePtr
        }
    };
    (SelfPtr; sys_mut) => {
        fn sys_mut(&mut self) -> $crate::GDExtensionTypePtr {
            self as *mut Self as $crate::GDExtensionTypePtr
        }
    };
}

/// Provides the pointer methods of [`GodotFfi`].
///
/// * `*mut Opaque`<br>
///   For types holding engine-managed data in an `opaque: Opaque<N>` field (strings, variants, callables).
///   The address of the field is the sys pointer. Expects a `from_opaque()` constructor.
///
/// * `*mut Self`<br>
///   For plain `#[repr(C)]` Rust types whose layout equals the engine's (scalars, vectors, colors, transforms).
///   The address of `self` is the sys pointer.
#[macro_export]
macro_rules! ffi_methods {
    (type $Ptr:ty = *mut Opaque;) => {
        $crate::ffi_methods_one!(OpaquePtr; from_sys);
        $crate::ffi_methods_one!(OpaquePtr; new_from_sys_init);
        $crate::ffi_methods_one!(OpaquePtr; sys);
        $crate::ffi_methods_one!(OpaquePtr; sys_mut);
    };
    (type $Ptr:ty = *mut Self;) => {
        $crate::ffi_methods_one!(SelfPtr; from_sys);
        $crate::ffi_methods_one!(SelfPtr; new_from_sys_init);
        $crate::ffi_methods_one!(SelfPtr; sys);
        $crate::ffi_methods_one!(SelfPtr; sys_mut);
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation for scalars (here due to orphan rule)

mod scalars {
    use super::GodotFfi;
    use crate as sys;

    macro_rules! impl_godot_ffi_scalar {
        ($T:ty => $variant_type:ident) => {
            // SAFETY: the engine passes bool, int and float by address in their native widths.
            unsafe impl GodotFfi for $T {
                fn variant_type() -> sys::VariantType {
                    sys::VariantType::$variant_type
                }

                $crate::ffi_methods! { type sys::GDExtensionTypePtr = *mut Self; }
            }
        };
    }

    impl_godot_ffi_scalar!(bool => Bool);
    impl_godot_ffi_scalar!(i64 => Int);
    impl_godot_ffi_scalar!(f64 => Float);

    // SAFETY: unit has no storage; the engine never writes to the return pointer of a void method.
    unsafe impl GodotFfi for () {
        fn variant_type() -> sys::VariantType {
            sys::VariantType::Nil
        }

        unsafe fn from_sys(_ptr: sys::GDExtensionConstTypePtr) -> Self {}

        unsafe fn new_from_sys_init(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
            init_fn(std::ptr::null_mut());
        }

        fn sys(&self) -> sys::GDExtensionConstTypePtr {
            std::ptr::null()
        }

        fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
            std::ptr::null_mut()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_through_sys_pointer() {
        let value = 0x1234_5678_9abc_i64;
        let copied = unsafe { i64::from_sys(value.sys()) };
        assert_eq!(copied, value);

        let written = unsafe { f64::new_from_sys_init(|ptr| *(ptr as *mut f64) = 2.5) };
        assert_eq!(written.to_bits(), 2.5f64.to_bits());
    }
}
