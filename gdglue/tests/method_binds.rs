/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Method bind resolution and outbound calls through generated classes.

mod common;

use common::id_of;
use gdglue::prelude::*;
use gdglue_host::NativeCall;

#[test]
fn method_binds_resolved_once_per_class() {
    common::init();

    let mut first = Node3D::new_alloc();
    let mut second = Node3D::new_alloc();

    first.set_position(Vector3::new(1.0, 2.0, 3.0));
    second.set_position(Vector3::new(4.0, 5.0, 6.0));
    first.translate(Vector3::new(1.0, 1.0, 1.0));

    assert_eq!(first.get_position(), Vector3::new(2.0, 3.0, 4.0));
    assert_eq!(second.get_position(), Vector3::new(4.0, 5.0, 6.0));

    // The whole table of a class is loaded at first use, including methods never called.
    assert_eq!(gdglue_host::method_bind_lookups("Node3D", "set_position"), 1);
    assert_eq!(gdglue_host::method_bind_lookups("Node3D", "translate"), 1);
    assert!(Node3D::__method_table().is_loaded());

    first.free();
    second.free();
}

#[test]
fn inherited_methods_use_declaring_class_table() {
    common::init();

    let mut list = ItemList::new_alloc();
    list.set_visible(false);
    assert!(!list.is_visible());

    // set_visible is declared by CanvasItem, so its bind belongs to the CanvasItem table.
    assert_eq!(gdglue_host::method_bind_lookups("ItemList", "set_visible"), 0);
    assert_eq!(gdglue_host::method_bind_lookups("CanvasItem", "set_visible"), 1);

    list.free();
}

#[test]
fn engine_receives_typed_arguments() {
    common::init();

    let mut node = Node2D::new_alloc();
    node.set_rotation(0.25);

    let call = gdglue_host::last_native_call(id_of(&node)).expect("call recorded");
    assert_eq!(
        call,
        NativeCall {
            class: "Node2D".to_string(),
            method: "set_rotation".to_string(),
            args: vec!["Float(0.25)".to_string()],
        }
    );

    node.rotate(0.5);
    assert_eq!(node.get_rotation(), 0.75);

    node.free();
}

#[test]
fn string_arguments_accept_str_and_strings() {
    common::init();

    let mut node = Node::new_alloc();
    node.set_name("Player");
    assert_eq!(node.get_name(), StringName::from("Player"));

    node.set_name(String::from("Enemy"));
    assert_eq!(node.get_name().to_string(), "Enemy");

    let mut resource = Resource::new_gd();
    resource.set_name(GString::from("sprite"));
    assert_eq!(resource.get_name(), GString::from("sprite"));

    node.free();
}

#[test]
fn object_arguments_and_returns() {
    common::init();

    let mut parent = Node::new_alloc();
    let child = Node2D::new_alloc();

    parent.add_child(&child);
    assert_eq!(parent.get_child_count(), 1);

    let fetched = parent.get_child(0).expect("child exists");
    assert_eq!(fetched.instance_id(), child.instance_id());

    let back = child.get_parent().expect("parent set");
    assert_eq!(back.instance_id(), parent.instance_id());

    // Out-of-range index: the engine returns null.
    assert!(parent.get_child(5).is_none());

    let child_id = id_of(&child);
    parent.free();
    assert!(!gdglue_host::is_alive(child_id));
}

#[test]
fn dynamic_type_checks() {
    common::init();

    let node = Node2D::new_alloc();
    assert_eq!(node.get_class(), GString::from("Node2D"));
    assert!(node.is_class("CanvasItem"));
    assert!(!node.is_class("Control"));

    let as_node: Gd<Node> = node.upcast();
    let as_control = as_node.try_cast::<Control>();
    let as_node = as_control.expect_err("Node2D is not a Control");

    let back = as_node.cast::<Node2D>();
    back.free();
}

#[test]
#[should_panic(expected = "after it has been freed")]
fn call_on_freed_object_panics() {
    common::init();

    let node = Node::new_alloc();
    let stale = node.clone();
    node.free();

    stale.get_name();
}

#[test]
fn vararg_call_returns_variant() {
    common::init();

    let mut node = Node2D::new_alloc();
    let result = node.call("get_rotation", &[]);
    assert_eq!(result.to::<f64>(), 0.0);

    node.call("set_rotation", &[Variant::from(1.5)]);
    assert_eq!(node.get_rotation(), 1.5);

    // Wrong argument type: reported as error, no panic through try_call.
    let err = node
        .try_call("set_rotation", &[Variant::from("not a float")])
        .expect_err("engine rejects string argument");
    assert_eq!(err.method_name(), "call");

    node.free();
}
