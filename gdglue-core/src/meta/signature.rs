/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;

use crate::builtin::Variant;
use crate::meta::error::{CallError, ConvertError};
use crate::meta::{FromGodot, GodotType, InParamTuple, OutParamTuple, ParamTuple, ToGodot};
use crate::obj::GodotClass;
use crate::sys;
use sys::GodotFfi;

/// A full signature for a function.
///
/// For in-calls (that is, calls from the engine to Rust code) `Params` will implement [`InParamTuple`] and `Ret`
/// will implement [`ToGodot`].
///
/// For out-calls (that is calls from Rust code to the engine) `Params` will implement [`OutParamTuple`] and `Ret`
/// will implement [`FromGodot`].
///
/// Every distinct `(Params, Ret)` pair monomorphizes into its own call thunk.
#[doc(hidden)]
pub struct Signature<Params, Ret> {
    _p: PhantomData<Params>,
    _r: PhantomData<fn() -> Ret>,
}

impl<Params: ParamTuple, Ret> Signature<Params, Ret> {
    /// Number of parameters of the signature.
    pub const fn arity() -> usize {
        Params::LEN
    }
}

/// In-calls:
///
/// Calls going from the engine into Rust code.
impl<Params, Ret> Signature<Params, Ret>
where
    Params: InParamTuple,
    Ret: ToGodot,
{
    /// Receives a varcall from the engine: converts the packed arguments, invokes `func` and writes the result to `ret`.
    ///
    /// Fails without invoking `func` if the argument count differs from the declared arity, or if an argument cannot be
    /// converted.
    ///
    /// # Safety
    /// `ret` must point to an initialized `Variant` that may be overwritten.
    pub(crate) unsafe fn in_varcall(
        call_ctx: &CallContext,
        args: &[&Variant],
        ret: sys::GDExtensionVariantPtr,
        func: impl FnOnce(Params) -> Ret,
    ) -> Result<(), CallError> {
        //sys::out!("in_varcall: {call_ctx}");

        #[cfg(feature = "trace")]
        trace::push(true, false, call_ctx);

        let params = Params::from_variant_array(args, call_ctx)?;
        let rust_result = func(params);

        // SAFETY: forwarded to caller.
        unsafe { rust_result.to_variant().move_into_var_ptr(ret) };
        Ok(())
    }
}

/// Out-calls:
///
/// Calls going from Rust code to the engine.
#[deny(unsafe_op_in_unsafe_fn)]
impl<Params: OutParamTuple, Ret: FromGodot> Signature<Params, Ret> {
    /// Make a varcall to the engine for a class method.
    ///
    /// # Safety
    /// - `method_bind` must expect explicit args `args`, varargs `varargs`, and return a value of type `Ret`.
    /// - `object_ptr` must be a live instance of the method's class, or null for static methods.
    #[inline]
    pub unsafe fn out_class_varcall(
        method_bind: sys::ClassMethodBind,
        call_ctx: &CallContext,
        object_ptr: sys::GDExtensionObjectPtr,
        args: Params,
        varargs: &[Variant],
    ) -> Result<Ret, CallError> {
        //sys::out!("out_class_varcall: {call_ctx}");

        #[cfg(feature = "trace")]
        trace::push(false, false, call_ctx);

        let class_fn = sys::interface_fn!(object_method_bind_call);

        let variant = args.with_variants(|explicit_args| {
            let mut variant_ptrs = Vec::with_capacity(explicit_args.len() + varargs.len());
            variant_ptrs.extend(explicit_args.iter().map(Variant::var_sys));
            variant_ptrs.extend(varargs.iter().map(Variant::var_sys));

            let mut err = sys::default_call_error();

            // SAFETY: the engine always initializes the return slot, with nil on failure.
            let variant = unsafe {
                Variant::new_with_var_uninit(|return_ptr| {
                    class_fn(
                        method_bind.0,
                        object_ptr,
                        variant_ptrs.as_ptr(),
                        variant_ptrs.len() as i64,
                        return_ptr,
                        std::ptr::addr_of_mut!(err),
                    );
                })
            };

            CallError::check_out_varcall(call_ctx, err, explicit_args, varargs).map(|()| variant)
        });

        variant.and_then(|v| {
            Ret::try_from_variant(&v).map_err(|e| CallError::failed_return_conversion::<Ret>(call_ctx, e))
        })
    }

    /// Make a ptrcall to the engine for a class method.
    ///
    /// # Safety
    /// - `method_bind` must expect explicit args `args`, and return a value of type `Ret`.
    /// - `object_ptr` must be a live instance of the method's class, or null for static methods.
    #[inline]
    pub unsafe fn out_class_ptrcall(
        method_bind: sys::ClassMethodBind,
        call_ctx: &CallContext,
        object_ptr: sys::GDExtensionObjectPtr,
        args: Params,
    ) -> Ret {
        //sys::out!("out_class_ptrcall: {call_ctx}");

        #[cfg(feature = "trace")]
        trace::push(false, true, call_ctx);

        let class_fn = sys::interface_fn!(object_method_bind_ptrcall);

        // SAFETY: forwarded to caller.
        unsafe {
            Self::raw_ptrcall(args, call_ctx, |explicit_args, return_ptr| {
                class_fn(method_bind.0, object_ptr, explicit_args.as_ptr(), return_ptr);
            })
        }
    }

    /// Performs a ptrcall and processes the return value to give nice error output.
    ///
    /// # Safety
    /// This calls [`GodotFfi::new_from_sys_init`] and passes the ptr as the second argument to `f`, see that function for
    /// safety docs.
    unsafe fn raw_ptrcall(
        args: Params,
        call_ctx: &CallContext,
        f: impl FnOnce(&[sys::GDExtensionConstTypePtr], sys::GDExtensionTypePtr),
    ) -> Ret {
        let ffi = args.with_type_pointers(|explicit_args| unsafe {
            <<Ret::Via as GodotType>::Ffi>::new_from_sys_init(|return_ptr| f(explicit_args, return_ptr as sys::GDExtensionTypePtr))
        });

        <Ret::Via as GodotType>::try_from_ffi(ffi)
            .and_then(Ret::try_from_godot)
            .unwrap_or_else(|err| return_error::<Ret>(call_ctx, err))
    }
}

fn return_error<R>(call_ctx: &CallContext, err: ConvertError) -> ! {
    let return_ty = std::any::type_name::<R>();
    panic!("in function `{call_ctx}` at return type {return_ty}: {err}");
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

// Lazy Display, so we don't create tens of thousands of extra string literals.
#[derive(Clone)]
#[doc(hidden)] // currently exposed in gdglue::meta
pub struct CallContext<'a> {
    pub(crate) class_name: Cow<'a, str>,
    pub(crate) function_name: &'a str,
}

impl<'a> CallContext<'a> {
    /// Call from the engine into a Rust override, e.g. a virtual method.
    pub const fn func(class_name: &'a str, function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name,
        }
    }

    /// Call from the engine into a custom `Callable`, e.g. a signal handler.
    ///
    /// There is no surrounding class, so [`CallError::class_name()`] is `None`.
    pub const fn custom_callable(function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(""),
            function_name,
        }
    }

    /// Outbound call from Rust into the engine, class APIs.
    pub const fn outbound(class_name: &'a str, function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Borrowed(class_name),
            function_name,
        }
    }

    /// Outbound call from Rust into the engine, via `Gd` methods.
    pub fn gd<T: GodotClass>(function_name: &'a str) -> Self {
        Self {
            class_name: Cow::Owned(T::class_name().to_string()),
            function_name,
        }
    }
}

impl fmt::Display for CallContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.class_name.is_empty() {
            write!(f, "<Callable>::{}", self.function_name)
        } else {
            write!(f, "{}::{}", self.class_name, self.function_name)
        }
    }
}

#[cfg(feature = "trace")]
pub mod trace {
    use std::cell::Cell;

    use crate::meta::CallContext;

    /// Stores information about the current call for diagnostic purposes.
    pub struct CallReport {
        pub class: String,
        pub method: String,
        pub is_inbound: bool,
        pub is_ptrcall: bool,
    }

    /// Takes the report of the most recent call on this thread.
    pub fn pop() -> Option<CallReport> {
        TRACE.take()
    }

    pub(crate) fn push(inbound: bool, ptrcall: bool, call_ctx: &CallContext) {
        let report = CallReport {
            class: call_ctx.class_name.to_string(),
            method: call_ctx.function_name.to_string(),
            is_inbound: inbound,
            is_ptrcall: ptrcall,
        };

        TRACE.set(Some(report));
    }

    thread_local! {
        static TRACE: Cell<Option<CallReport>> = Cell::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_context_display() {
        assert_eq!(CallContext::outbound("Node", "add_child").to_string(), "Node::add_child");
        assert_eq!(CallContext::func("MyNode", "_process").to_string(), "MyNode::_process");
        assert_eq!(CallContext::custom_callable("on_timeout").to_string(), "<Callable>::on_timeout");
    }

    #[test]
    fn arity() {
        assert_eq!(Signature::<(i64, bool), ()>::arity(), 2);
        assert_eq!(Signature::<(), f64>::arity(), 0);
    }
}
