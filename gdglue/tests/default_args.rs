/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Methods with default parameters: defaults are filled in on the Rust side, the engine receives every argument.

mod common;

use common::id_of;
use gdglue::classes::node::InternalMode;
use gdglue::prelude::*;

fn last_args<T: GodotClass>(obj: &Gd<T>) -> Vec<String> {
    gdglue_host::last_native_call(id_of(obj)).expect("call recorded").args
}

#[test]
fn omitted_float_default() {
    common::init();

    let mut timer = Timer::new_alloc();
    timer.set_wait_time(3.0);

    timer.start();
    assert_eq!(last_args(&timer), ["Float(-1.0)"]);
    assert_eq!(timer.get_time_left(), 3.0);
    assert_eq!(timer.get_wait_time(), 3.0);

    timer.start_ex().time_sec(2.5).done();
    assert_eq!(last_args(&timer), ["Float(2.5)"]);
    assert_eq!(timer.get_wait_time(), 2.5);

    timer.free();
}

#[test]
fn bool_and_enum_defaults() {
    common::init();

    let mut parent = Node::new_alloc();
    let first = Node::new_alloc();
    let second = Node::new_alloc();
    let first_id = id_of(&first);

    parent.add_child(&first);
    assert_eq!(last_args(&parent), [format!("Object(#{first_id})"), "Bool(false)".to_string(), "Int(0)".to_string()]);

    parent
        .add_child_ex(&second)
        .internal(InternalMode::BACK)
        .force_readable_name(true)
        .done();
    assert_eq!(last_args(&parent)[1..], ["Bool(true)", "Int(2)"]);
    assert_eq!(parent.get_child_count(), 2);

    parent.free();
}

#[test]
fn const_method_with_default() {
    common::init();

    let mut parent = Node::new_alloc();
    parent.add_child(&Node::new_alloc());

    // Receiver stays shared: get_child_count() and its builder take &self.
    let shared: &Gd<Node> = &parent;
    assert_eq!(shared.get_child_count(), 1);
    assert_eq!(shared.get_child_count_ex().include_internal(true).done(), 1);
    assert_eq!(last_args(shared), ["Bool(true)"]);

    parent.free();
}

#[test]
fn select_single_by_default() {
    common::init();

    let mut list = ItemList::new_alloc();
    list.set_item_count(3);

    list.select(0);
    list.select(1);
    assert!(!list.is_selected(0));
    assert!(list.is_selected(1));

    list.select_ex(2).single(false).done();
    assert!(list.is_selected(1));
    assert!(list.is_selected(2));

    list.free();
}

#[test]
fn resize_keeps_default_offsets() {
    common::init();

    let mut control = Control::new_alloc();
    control.set_size(Vector2::new(8.0, 6.0));
    assert_eq!(last_args(&control), ["Vector2((8.0, 6.0))", "Bool(false)"]);

    control.set_size_ex(Vector2::new(4.0, 4.0)).keep_offsets(true).done();
    assert_eq!(control.get_size(), Vector2::new(4.0, 4.0));

    control.free();
}
