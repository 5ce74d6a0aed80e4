/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Items used by generated code and macros. Not part of the public API.

use std::collections::{BTreeMap, VecDeque};
use std::panic::{catch_unwind, AssertUnwindSafe};

pub use crate::gen::classes::class_macros;
pub use crate::obj::rtti::ObjectRtti;
pub use crate::registry::callbacks;
pub use crate::storage::InstanceStorage;

use crate::godot_error;
use crate::meta::error::CallError;
use crate::meta::CallContext;
use crate::sys;
use sys::Global;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Global variables

static CALL_ERRORS: Global<CallErrors> = Global::default();

/// Upper bound of pending call errors; the oldest one is dropped beyond this.
const MAX_PENDING_CALL_ERRORS: usize = 64;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Call error handling

// Errors produced by Rust callbacks travel through the engine as an ID in `GDExtensionCallError::argument`, and are
// picked up again by the outbound varcall that triggered the callback. Errors nobody picks up are evicted.
#[derive(Default)]
struct CallErrors {
    map: BTreeMap<i32, CallError>,
    order: VecDeque<i32>,
    next_id: i32,
}

impl CallErrors {
    fn insert(&mut self, err: CallError) -> i32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);

        if self.order.len() >= MAX_PENDING_CALL_ERRORS {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }

        self.map.insert(id, err);
        self.order.push_back(id);
        id
    }

    fn remove(&mut self, id: i32) -> Option<CallError> {
        let err = self.map.remove(&id)?;
        self.order.retain(|&pending| pending != id);
        Some(err)
    }
}

fn call_error_insert(err: CallError, out_error: &mut sys::GDExtensionCallError) {
    let id = CALL_ERRORS.lock().insert(err);

    // Abuse field to store our ID.
    out_error.error = sys::GDGLUE_CUSTOM_CALL_ERROR;
    out_error.argument = id;
    out_error.expected = 0;
}

pub(crate) fn call_error_remove(in_error: &sys::GDExtensionCallError) -> Option<CallError> {
    // Error checks are just quality-of-life diagnostic; do not throw panics if they fail.
    if in_error.error != sys::GDGLUE_CUSTOM_CALL_ERROR {
        godot_error!("Tried to remove foreign call error {in_error:?}");
        return None;
    }

    let call_error = CALL_ERRORS.lock().remove(in_error.argument);
    if call_error.is_none() {
        godot_error!("Failed to remove call error {in_error:?}");
    }

    call_error
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Panic handling

pub fn extract_panic_message(err: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = err.downcast_ref::<&'static str>() {
        s.to_string()
    } else if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else {
        format!("(panic of type ID {:?})", err.type_id())
    }
}

fn format_panic_message(msg: String) -> String {
    // If the message contains newlines, print all of the lines after a line break, and indent them.
    let lbegin = "\n  ";
    let indented = msg.replace('\n', lbegin);

    if indented.len() != msg.len() {
        format!("[panic]{lbegin}{indented}")
    } else {
        format!("[panic]  {msg}")
    }
}

/// Executes `code`. If a panic is thrown, it is caught and an error message is printed to the engine.
///
/// Returns `Err(message)` if a panic occurred, and `Ok(result)` with the result of `code` otherwise.
///
/// Used by every `extern "C"` callback, so that panics never unwind into the engine.
pub fn handle_panic<E, F, R, S>(error_context: E, code: F) -> Result<R, String>
where
    E: FnOnce() -> S,
    F: FnOnce() -> R,
    S: std::fmt::Display,
{
    match catch_unwind(AssertUnwindSafe(code)) {
        Ok(result) => Ok(result),
        Err(err) => {
            let msg = format_panic_message(extract_panic_message(err));
            godot_error!("Rust function panicked.\n  Context: {}\n{msg}", error_context());

            Err(msg)
        }
    }
}

/// Executes the body of an inbound varcall, and reports failures (errors and panics) to the engine through `out_err`.
///
/// Argument count mismatches are reported with their standard engine codes. Every other failure is stored as a custom
/// error, which the outbound call on the Rust side turns back into the original `CallError`.
pub fn handle_varcall_panic<F, R>(call_ctx: &CallContext, out_err: &mut sys::GDExtensionCallError, code: F)
where
    F: FnOnce() -> Result<R, CallError>,
{
    let outcome = catch_unwind(AssertUnwindSafe(code));

    let call_error = match outcome {
        // All good.
        Ok(Ok(_result)) => {
            *out_err = sys::default_call_error();
            return;
        }

        // Call error signalled by argument validation or the callee.
        Ok(Err(err)) => err,

        // Panic occurred (typically through user): forward message.
        Err(panic) => {
            let msg = format_panic_message(extract_panic_message(panic));
            CallError::failed_by_user_panic(call_ctx, msg)
        }
    };

    godot_error!("{call_error}");

    match call_error.engine_error() {
        Some(engine_error) => *out_err = engine_error,
        None => call_error_insert(call_error, out_err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panic_messages() {
        assert_eq!(format_panic_message("boom".to_string()), "[panic]  boom");
        assert_eq!(format_panic_message("a\nb".to_string()), "[panic]\n  a\n  b");

        let payload: Box<dyn std::any::Any + Send> = Box::new(String::from("owned"));
        assert_eq!(extract_panic_message(payload), "owned");
    }

    #[test]
    fn call_errors_are_bounded() {
        let ctx = CallContext::func("MyClass", "method");
        let mut errors = CallErrors::default();

        let first = errors.insert(CallError::failed_by_user_panic(&ctx, "first".to_string()));
        for _ in 0..MAX_PENDING_CALL_ERRORS {
            errors.insert(CallError::failed_by_user_panic(&ctx, "later".to_string()));
        }

        assert!(errors.remove(first).is_none());
        assert_eq!(errors.map.len(), MAX_PENDING_CALL_ERRORS);
    }

    #[test]
    fn handle_panic_catches() {
        let result = handle_panic(|| "test context", || -> i32 { panic!("expected panic") });
        let msg = result.expect_err("panic must be caught");
        assert!(msg.contains("expected panic"));

        assert_eq!(handle_panic(|| "test context", || 5), Ok(5));
    }
}
