/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Method calls: pointer calls and variant calls through method binds, dynamic calls by name, and virtual calls into
//! extension instances.

use gdglue_ffi as sys;

use crate::classdb::HostMethod;
use crate::object::{self, HostObject};
use crate::strings::{self, HostStringName};
use crate::value::{self, HostValue, OwnedVariant, Ty};
use crate::NativeCall;

type CallResult = Result<HostValue, sys::GDExtensionCallError>;

/// Checks argument count and types of a dynamic call, converting where the engine allows it.
fn check_args(method: &HostMethod, args: Vec<HostValue>) -> Result<Vec<HostValue>, sys::GDExtensionCallError> {
    let expected = method.args.len();
    if args.len() < expected {
        return Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS, -1, expected as i32));
    }
    if args.len() > expected && !method.vararg {
        return Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS, -1, expected as i32));
    }

    let mut checked = Vec::with_capacity(args.len());
    for (index, arg) in args.into_iter().enumerate() {
        let arg = match method.args.get(index) {
            Some(&ty) => {
                let actual = arg.ty();
                arg.coerce(ty).ok_or_else(|| {
                    crate::log::engine_error(&format!(
                        "{}: argument {index} has type {actual:?}, expected {ty:?}",
                        method.name
                    ));
                    sys::call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT, index as i32, ty.variant_type() as i32)
                })?
            }
            None => arg,
        };
        checked.push(arg);
    }

    Ok(checked)
}

/// Runs a native method and records the call on the receiver.
fn invoke_native(method: &HostMethod, obj: &HostObject, args: Vec<HostValue>) -> CallResult {
    let record = NativeCall {
        class: obj.class().name().to_string(),
        method: method.name.to_string(),
        args: args.iter().map(|arg| format!("{arg:?}")).collect(),
    };
    let previous = obj.state().last_call.replace(record);
    drop(previous);

    (method.imp)(obj, &args)
}

/// Calls a method by name: the extension's virtual override first, then the native method.
pub(crate) fn call_by_name(obj: &HostObject, name: &'static HostStringName, args: Vec<HostValue>) -> CallResult {
    if let Some(result) = call_virtual(obj, name, &args) {
        return result;
    }

    match obj.class().find_method(name.as_str()) {
        Some(method) => invoke_native(method, obj, check_args(method, args)?),
        None => Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD, -1, -1)),
    }
}

pub(crate) fn has_method(obj: &HostObject, name: &'static HostStringName) -> bool {
    has_virtual(obj, name) || obj.class().find_method(name.as_str()).is_some()
}

/// Whether the extension instance of `obj` overrides virtual method `name`.
pub(crate) fn has_virtual(obj: &HostObject, name: &'static HostStringName) -> bool {
    let Some(instance) = obj.extension_instance() else {
        return false;
    };
    let Some(info) = instance.class.extension_info() else {
        return false;
    };
    let Some(has_virtual_func) = info.has_virtual_func else {
        return false;
    };

    let name_slot = NameSlot::new(name);

    // SAFETY: userdata registered with the class; the name slot holds a live StringName.
    sys::to_bool(unsafe { has_virtual_func(info.class_userdata, name_slot.ptr()) })
}

/// Invokes virtual method `name` on the extension instance. `None` if not overridden.
pub(crate) fn call_virtual(obj: &HostObject, name: &'static HostStringName, args: &[HostValue]) -> Option<CallResult> {
    if !has_virtual(obj, name) {
        return None;
    }

    let instance = obj.extension_instance()?;
    let call_virtual_func = instance.class.extension_info()?.call_virtual_func?;

    let name_slot = NameSlot::new(name);
    let variants = args.iter().cloned().map(OwnedVariant::new).collect::<Vec<_>>();
    let arg_ptrs = variants.iter().map(OwnedVariant::ptr).collect::<Vec<_>>();
    let mut ret = OwnedVariant::nil();
    let mut err = sys::default_call_error();

    // SAFETY: the instance pointer stays valid until the object is destroyed; all slots are live for the call.
    let handled = unsafe {
        call_virtual_func(
            instance.instance as sys::GDExtensionClassInstancePtr,
            name_slot.ptr(),
            arg_ptrs.as_ptr(),
            arg_ptrs.len() as sys::GDExtensionInt,
            ret.ptr_mut(),
            &mut err,
        )
    };

    if !sys::to_bool(handled) {
        if err.error == sys::GDEXTENSION_CALL_OK {
            err.error = sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD;
        }
        return Some(Err(err));
    }

    Some(Ok(ret.into_value()))
}

/// StringName slot on the stack, for passing names into extension callbacks.
struct NameSlot {
    name: *const HostStringName,
}

impl NameSlot {
    fn new(name: &'static HostStringName) -> Self {
        Self { name }
    }

    fn ptr(&self) -> sys::GDExtensionConstStringNamePtr {
        &self.name as *const *const HostStringName as sys::GDExtensionConstStringNamePtr
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub(crate) unsafe extern "C" fn object_method_bind_ptrcall(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: sys::GDExtensionObjectPtr,
    p_args: *const sys::GDExtensionConstTypePtr,
    r_ret: sys::GDExtensionTypePtr,
) {
    let method = unsafe { &*(p_method_bind as *const HostMethod) };
    if p_instance.is_null() {
        crate::log::engine_error(&format!("ptrcall of {} on null instance", method.name));
        return;
    }
    if method.vararg {
        crate::log::engine_error(&format!("{} is vararg and cannot be ptrcalled", method.name));
        return;
    }

    let obj = unsafe { object::from_ptr(p_instance) };
    let args = method
        .args
        .iter()
        .enumerate()
        .map(|(i, &ty)| unsafe { value::read_typed(ty, *p_args.add(i)) })
        .collect::<Vec<_>>();

    match invoke_native(method, obj, args) {
        Ok(ret) => unsafe { value::write_typed(method.ret, ret, r_ret) },
        Err(err) => {
            crate::log::engine_error(&format!("ptrcall of {} failed with call error {}", method.name, err.error));
            unsafe { value::write_typed(method.ret, method.ret.default_value(), r_ret) };
        }
    }
}

pub(crate) unsafe extern "C" fn object_method_bind_call(
    p_method_bind: sys::GDExtensionMethodBindPtr,
    p_instance: sys::GDExtensionObjectPtr,
    p_args: *const sys::GDExtensionConstVariantPtr,
    p_arg_count: sys::GDExtensionInt,
    r_ret: sys::GDExtensionUninitializedVariantPtr,
    r_error: *mut sys::GDExtensionCallError,
) {
    let method = unsafe { &*(p_method_bind as *const HostMethod) };

    let result = if p_instance.is_null() {
        Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL, -1, -1))
    } else {
        let obj = unsafe { object::from_ptr(p_instance) };
        let args = (0..p_arg_count.max(0) as usize)
            .map(|i| unsafe { value::variant_read(*p_args.add(i)) }.clone())
            .collect::<Vec<_>>();

        check_args(method, args).and_then(|args| invoke_native(method, obj, args))
    };

    let (ret, err) = match result {
        Ok(ret) => (ret, sys::default_call_error()),
        Err(err) => (HostValue::Nil, err),
    };

    unsafe {
        value::variant_write(r_ret, ret);
        *r_error = err;
    }
}

/// Reads the method name of a dynamic call (`call`, `emit_signal`) from its first argument.
pub(crate) fn leading_name(args: &[HostValue]) -> Result<&'static HostStringName, sys::GDExtensionCallError> {
    match args.first() {
        Some(HostValue::StringName(name)) => Ok(*name),
        Some(HostValue::String(text)) => Ok(strings::intern(text)),
        Some(_) => Err(sys::call_error(
            sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT,
            0,
            Ty::StringName.variant_type() as i32,
        )),
        None => Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS, -1, 1)),
    }
}
