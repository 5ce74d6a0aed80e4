/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::ffi::{c_char, CStr};

use gdglue_ffi as sys;

/// Severity of a message printed through the engine.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum MessageKind {
    Error,
    Warning,
    ScriptError,
}

/// Message printed by the engine or by the extension through the engine's print functions.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EngineMessage {
    pub kind: MessageKind,
    pub text: String,
    pub function: String,
}

static MESSAGES: sys::Global<Vec<EngineMessage>> = sys::Global::default();

pub(crate) fn record(kind: MessageKind, text: String, function: String) {
    eprintln!("[engine {kind:?}] {text}");
    MESSAGES.lock().push(EngineMessage { kind, text, function });
}

pub(crate) fn engine_error(text: &str) {
    record(MessageKind::Error, text.to_string(), String::new());
}

pub(crate) fn messages() -> Vec<EngineMessage> {
    MESSAGES.lock().clone()
}

/// # Safety
/// `ptr` must be null or a valid NUL-terminated string.
unsafe fn lossy(ptr: *const c_char) -> String {
    if ptr.is_null() {
        String::new()
    } else {
        unsafe { CStr::from_ptr(ptr) }.to_string_lossy().into_owned()
    }
}

macro_rules! print_fn {
    ($name:ident => $kind:ident) => {
        pub(crate) unsafe extern "C" fn $name(
            p_description: *const c_char,
            p_function: *const c_char,
            _p_file: *const c_char,
            _p_line: i32,
            _p_editor_notify: sys::GDExtensionBool,
        ) {
            let (text, function) = unsafe { (lossy(p_description), lossy(p_function)) };
            record(MessageKind::$kind, text, function);
        }
    };
}

print_fn!(print_error => Error);
print_fn!(print_warning => Warning);
print_fn!(print_script_error => ScriptError);
