/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Custom callables and signal connections.

use std::sync::Arc;

use gdglue_ffi as sys;

use crate::object::{Connection, HostObject};
use crate::strings::HostStringName;
use crate::value::{self, HostValue, OwnedVariant};

/// Callable created by the extension through `callable_custom_create`. Frees its userdata when the last copy is dropped.
pub(crate) struct HostCallable {
    info: sys::GDExtensionCallableCustomInfo,
}

// SAFETY: the extension guarantees that custom callable userdata may be called and freed from any thread.
unsafe impl Send for HostCallable {}
// SAFETY: see `Send` impl.
unsafe impl Sync for HostCallable {}

impl HostCallable {
    pub fn call(&self, args: &[HostValue]) -> Result<HostValue, sys::GDExtensionCallError> {
        let Some(call_func) = self.info.call_func else {
            return Err(sys::call_error(sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD, -1, -1));
        };

        let variants = args.iter().cloned().map(OwnedVariant::new).collect::<Vec<_>>();
        let arg_ptrs = variants.iter().map(OwnedVariant::ptr).collect::<Vec<_>>();
        let mut ret = OwnedVariant::nil();
        let mut err = sys::default_call_error();

        // SAFETY: arguments and return slot are valid variants for the duration of the call.
        unsafe {
            call_func(
                self.info.callable_userdata,
                arg_ptrs.as_ptr(),
                arg_ptrs.len() as sys::GDExtensionInt,
                ret.ptr_mut(),
                &mut err,
            )
        };

        if err.error == sys::GDEXTENSION_CALL_OK {
            Ok(ret.into_value())
        } else {
            Err(err)
        }
    }

    /// Same callable: identical instance, or same call function with userdata the extension declares equal.
    pub fn equals(&self, other: &HostCallable) -> bool {
        if std::ptr::eq(self, other) || self.info.callable_userdata == other.info.callable_userdata {
            return true;
        }

        let same_kind = self.info.call_func.map(|f| f as usize) == other.info.call_func.map(|f| f as usize);
        match (same_kind, self.info.equal_func) {
            // SAFETY: both userdata pointers belong to callables of the same kind.
            (true, Some(equal)) => unsafe { equal(self.info.callable_userdata, other.info.callable_userdata) != 0 },
            _ => false,
        }
    }

    pub fn hash(&self) -> u32 {
        match self.info.hash_func {
            // SAFETY: userdata is alive while `self` is.
            Some(hash) => unsafe { hash(self.info.callable_userdata) },
            None => self.info.callable_userdata as usize as u32,
        }
    }

    pub fn object_id(&self) -> u64 {
        self.info.object_id
    }
}

impl Drop for HostCallable {
    fn drop(&mut self) {
        if let Some(free) = self.info.free_func {
            // SAFETY: last reference, userdata is freed exactly once.
            unsafe { free(self.info.callable_userdata) };
        }
    }
}

/// Takes a new counted reference from a raw callable pointer.
///
/// # Safety
/// `ptr` must be null or come from `Arc::into_raw` of a live callable.
pub(crate) unsafe fn clone_from_raw(ptr: *const HostCallable) -> Option<Arc<HostCallable>> {
    if ptr.is_null() {
        return None;
    }

    unsafe {
        Arc::increment_strong_count(ptr);
        Some(Arc::from_raw(ptr))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Connections

/// Error codes of the global `Error` enum, as returned by connect and emit.
pub(crate) mod error_code {
    pub const OK: i64 = 0;
    pub const ERR_UNAVAILABLE: i64 = 2;
    pub const ERR_INVALID_PARAMETER: i64 = 31;
}

fn connections_of(obj: &HostObject, signal: &'static HostStringName) -> Vec<Arc<HostCallable>> {
    obj.state()
        .connections
        .iter()
        .filter(|c| std::ptr::eq(c.signal, signal))
        .map(|c| c.callable.clone())
        .collect()
}

/// Position of a connection equal to `callable`. Equality is evaluated without holding the object lock.
fn find_connection(obj: &HostObject, signal: &'static HostStringName, callable: &HostCallable) -> Option<Arc<HostCallable>> {
    connections_of(obj, signal).into_iter().find(|existing| existing.equals(callable))
}

pub(crate) fn connect(obj: &HostObject, signal: &'static HostStringName, callable: Arc<HostCallable>) -> i64 {
    if !obj.class().has_signal(signal.as_str()) {
        crate::log::engine_error(&format!(
            "connect: signal `{}` does not exist on {}",
            signal.as_str(),
            obj.class().name()
        ));
        return error_code::ERR_INVALID_PARAMETER;
    }

    if find_connection(obj, signal, &callable).is_some() {
        crate::log::engine_error(&format!("connect: signal `{}` is already connected to the given callable", signal.as_str()));
        return error_code::ERR_INVALID_PARAMETER;
    }

    obj.state().connections.push(Connection { signal, callable });
    error_code::OK
}

/// Removes the connection equal to `callable`. Unknown callables are ignored.
pub(crate) fn disconnect(obj: &HostObject, signal: &'static HostStringName, callable: &HostCallable) {
    let Some(existing) = find_connection(obj, signal, callable) else {
        return;
    };

    let removed = {
        let mut state = obj.state();
        let position = state
            .connections
            .iter()
            .position(|c| std::ptr::eq(c.signal, signal) && Arc::ptr_eq(&c.callable, &existing));
        position.map(|index| state.connections.remove(index))
    };

    // Dropped after the lock, as the last reference may free extension userdata.
    drop(removed);
}

pub(crate) fn is_connected(obj: &HostObject, signal: &'static HostStringName, callable: &HostCallable) -> bool {
    find_connection(obj, signal, callable).is_some()
}

pub(crate) fn connection_count(obj: &HostObject, signal: &str) -> usize {
    obj.state()
        .connections
        .iter()
        .filter(|c| c.signal.as_str() == signal)
        .count()
}

/// Calls every callable connected to `signal` when emission starts.
pub(crate) fn emit(obj: &HostObject, signal: &'static HostStringName, args: &[HostValue]) -> i64 {
    if !obj.class().has_signal(signal.as_str()) {
        return error_code::ERR_UNAVAILABLE;
    }

    for callable in connections_of(obj, signal) {
        if let Err(err) = callable.call(args) {
            crate::log::engine_error(&format!(
                "error calling handler of signal `{}`: call error {} (argument {}, expected {})",
                signal.as_str(),
                err.error,
                err.argument,
                err.expected
            ));
        }
    }

    error_code::OK
}

/// Emits a signal from native code.
pub(crate) fn emit_by_name(obj: &HostObject, signal: &str, args: &[HostValue]) {
    emit(obj, crate::strings::intern(signal), args);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub(crate) unsafe extern "C" fn callable_custom_create(
    r_callable: sys::GDExtensionUninitializedTypePtr,
    p_callable_custom_info: *mut sys::GDExtensionCallableCustomInfo,
) {
    let info = unsafe { *p_callable_custom_info };
    unsafe { value::write_callable(r_callable, Arc::new(HostCallable { info })) };
}

pub(crate) unsafe extern "C" fn callable_copy(
    r_dest: sys::GDExtensionUninitializedTypePtr,
    p_args: *const sys::GDExtensionConstTypePtr,
) {
    let source = unsafe { value::callable_slot_ptr(*p_args) };
    let value = HostValue::Callable(unsafe { clone_from_raw(source) });
    unsafe { value::write_typed(value::Ty::Callable, value, r_dest) };
}

pub(crate) unsafe extern "C" fn callable_destroy(p_self: sys::GDExtensionTypePtr) {
    let ptr = unsafe { value::callable_slot_ptr(p_self) };
    if !ptr.is_null() {
        // SAFETY: the slot owns one reference.
        drop(unsafe { Arc::from_raw(ptr) });
    }
}
