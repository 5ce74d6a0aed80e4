/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Engine-to-Rust calls: user class construction and virtual method dispatch.

mod common;

use common::{id_of, Knob, Mover, Plain, Tracker};
use gdglue::prelude::*;
use gdglue::sys;
use gdglue_host::{MessageKind, VirtualCall};

#[test]
fn user_class_instances() {
    common::init();

    let mover = Mover::new_alloc();
    let id = id_of(&mover);

    assert_eq!(gdglue_host::class_of(id).as_deref(), Some("Mover"));
    assert_eq!(mover.bind().speed, 100.0);
    assert_eq!(mover.get_class(), GString::from("Mover"));
    assert!(mover.is_class("Node2D"));

    mover.free();
    assert!(!gdglue_host::is_alive(id));
}

#[test]
fn process_override_runs_every_frame() {
    common::init();

    let mut root = Node::new_alloc();
    let mut mover = Mover::new_alloc();
    mover.bind_mut().speed = 40.0;
    root.add_child(&mover);

    gdglue_host::enter_tree(id_of(&root));
    gdglue_host::process_frame(id_of(&root), 0.5);
    gdglue_host::process_frame(id_of(&root), 0.25);

    assert_eq!(mover.bind().frames, 2);
    assert_eq!(mover.get_position(), Vector2::new(30.0, 0.0));

    // Processing can be switched off through the engine.
    mover.set_process(false);
    gdglue_host::process_frame(id_of(&root), 1.0);
    assert_eq!(mover.bind().frames, 2);

    root.free();
}

#[test]
fn overrides_are_reported_per_method() {
    common::init();

    let mover = Mover::new_alloc();
    let plain = Plain::new_alloc();

    // Declared by Node, but only Mover overrides it.
    assert_eq!(
        gdglue_host::call_virtual(id_of(&mover), "_process", &[0.0]),
        VirtualCall::Returned("<null>".to_string())
    );
    assert_eq!(gdglue_host::call_virtual(id_of(&plain), "_process", &[0.0]), VirtualCall::NotOverridden);

    // Declared by Node, not overridden by Mover.
    assert_eq!(gdglue_host::call_virtual(id_of(&mover), "_ready", &[]), VirtualCall::NotOverridden);

    // Not a virtual method of any base class.
    assert_eq!(gdglue_host::call_virtual(id_of(&mover), "_has_point", &[1.0]), VirtualCall::NotOverridden);
    assert_eq!(gdglue_host::call_virtual(id_of(&mover), "_unknown", &[]), VirtualCall::NotOverridden);

    mover.free();
    plain.free();
}

#[test]
fn argument_count_must_match_exactly() {
    common::init();

    let mover = Mover::new_alloc();
    let id = id_of(&mover);

    assert_eq!(
        gdglue_host::call_virtual(id, "_process", &[]),
        VirtualCall::Failed {
            error: sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS,
            argument: -1,
            expected: 1,
        }
    );
    assert_eq!(
        gdglue_host::call_virtual(id, "_process", &[0.1, 0.2]),
        VirtualCall::Failed {
            error: sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS,
            argument: -1,
            expected: 1,
        }
    );

    // Rejected calls do not reach the override.
    assert_eq!(mover.bind().frames, 0);
    mover.free();
}

#[test]
fn return_values_reach_engine() {
    common::init();

    let mut knob = Knob::new_alloc();
    let id = id_of(&knob);

    assert_eq!(gdglue_host::control_has_point(id, [3.0, 4.0]), Some(true));
    assert_eq!(gdglue_host::control_has_point(id, [4.0, 4.0]), Some(false));

    knob.bind_mut().radius = 10.0;
    assert_eq!(gdglue_host::control_has_point(id, [4.0, 4.0]), Some(true));

    // Without override, the engine uses the control's rectangle.
    let mut control = Control::new_alloc();
    control.set_size(Vector2::new(2.0, 2.0));
    assert_eq!(gdglue_host::control_has_point(id_of(&control), [1.0, 1.0]), Some(true));
    assert_eq!(gdglue_host::control_has_point(id_of(&control), [3.0, 4.0]), Some(false));

    knob.free();
    control.free();
}

#[test]
fn tree_notifications_in_engine_order() {
    common::init();

    let mut parent = Tracker::new_alloc();
    let mut child = Tracker::new_alloc();
    parent.set_name("parent");
    child.set_name("child");
    parent.add_child(&child);

    common::take_events();
    gdglue_host::enter_tree(id_of(&parent));

    assert_eq!(
        common::take_events(),
        ["parent:enter_tree", "child:enter_tree", "child:ready", "parent:ready"]
    );
    assert_eq!(child.bind().ready_count, 1);

    parent.free();
}

#[test]
fn panicking_override_reports_error() {
    common::init();

    let mut tracker = Tracker::new_alloc();
    tracker.set_name("grumpy");
    tracker.bind_mut().fail_ready = true;

    let id = id_of(&tracker);
    match gdglue_host::call_virtual(id, "_ready", &[]) {
        VirtualCall::Failed { error, .. } => assert_eq!(error, sys::GDGLUE_CUSTOM_CALL_ERROR),
        other => panic!("expected failure, got {other:?}"),
    }

    assert!(gdglue_host::has_message(MessageKind::Error, "tracker refused to get ready"));

    // The instance is usable after the panic.
    tracker.bind_mut().fail_ready = false;
    assert_eq!(gdglue_host::call_virtual(id, "_ready", &[]), VirtualCall::Returned("<null>".to_string()));
    assert_eq!(tracker.bind().ready_count, 1);

    tracker.free();
}

#[test]
fn virtual_table_lists_ancestor_methods() {
    common::init();

    let names = Knob::name_table();
    let virtuals = names
        .virtuals()
        .iter()
        .map(|slot| (slot.owner(), slot.name(), slot.arity()))
        .collect::<Vec<_>>();

    assert!(virtuals.contains(&("Node", "_process", 1)));
    assert!(virtuals.contains(&("CanvasItem", "_draw", 0)));
    assert!(virtuals.contains(&("Control", "_has_point", 1)));
    assert!(!virtuals.iter().any(|(_, name, _)| *name == "_setup_local_to_scene"));

    assert_eq!(names.class_name(), "Knob");
    assert!(names.inherits("Control"));
}
