/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Minimal scene tree driver: tree entry, ready notifications and frame processing.

use crate::object::{self, HostObject};
use crate::value::HostValue;
use crate::{callable, dispatch, log, natives, strings};

fn children_of(obj: &HostObject) -> Vec<u64> {
    obj.state().children.clone()
}

fn call_notification(obj: &HostObject, method: &str, args: &[HostValue]) {
    if let Some(Err(err)) = dispatch::call_virtual(obj, strings::intern(method), args) {
        log::engine_error(&format!(
            "{method} on {} failed: call error {} (argument {}, expected {})",
            obj.class().name(),
            err.error,
            err.argument,
            err.expected
        ));
    }
}

/// Pre-order `_enter_tree` and `tree_entered`, then post-order `_ready` and `ready`.
pub(crate) fn enter_tree(id: u64) {
    enter_recursive(id);
    ready_recursive(id);
}

fn enter_recursive(id: u64) {
    let Some(children) = object::with_object(id, children_of) else {
        return;
    };

    object::with_object(id, |obj| call_notification(obj, "_enter_tree", &[]));
    object::with_object(id, |obj| callable::emit_by_name(obj, "tree_entered", &[]));

    for child in children {
        enter_recursive(child);
    }
}

fn ready_recursive(id: u64) {
    let Some(children) = object::with_object(id, children_of) else {
        return;
    };

    for child in children {
        ready_recursive(child);
    }

    object::with_object(id, |obj| call_notification(obj, "_ready", &[]));
    object::with_object(id, |obj| callable::emit_by_name(obj, "ready", &[]));
}

/// Runs one frame over the subtree at `id`: `_process(delta)` on processing nodes and timer updates.
pub(crate) fn process_frame(id: u64, delta: f64) {
    let Some(children) = object::with_object(id, children_of) else {
        return;
    };

    // Each step re-resolves the object, as extension code may free it.
    object::with_object(id, |obj| {
        if natives::node_is_processing_now(obj) {
            call_notification(obj, "_process", &[HostValue::Float(delta)]);
        }
    });

    for child in children {
        process_frame(child, delta);
    }

    object::with_object(id, |obj| {
        if obj.class().inherits(&natives::TIMER) {
            natives::timer_advance(obj, delta);
        }
    });
}

/// Point test of a control: the extension's `_has_point` override, else the control's own rectangle.
pub(crate) fn control_has_point(id: u64, point: [f32; 2]) -> Option<bool> {
    object::with_object(id, |obj| {
        if !obj.class().inherits(&natives::CONTROL) {
            return None;
        }

        match dispatch::call_virtual(obj, strings::intern("_has_point"), &[HostValue::Vector2(point)]) {
            Some(Ok(value)) => Some(value.as_bool()),
            Some(Err(err)) => {
                log::engine_error(&format!("_has_point failed: call error {}", err.error));
                None
            }
            None => {
                let [w, h] = match obj.prop("size") {
                    Some(HostValue::Vector2(size)) => size,
                    _ => [0.0; 2],
                };
                let [x, y] = point;
                Some(x >= 0.0 && y >= 0.0 && x < w && y < h)
            }
        }
    })
    .flatten()
}
