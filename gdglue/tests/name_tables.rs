/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

mod common;

use common::Mover;
use gdglue::prelude::*;

#[test]
fn engine_table_includes_ancestors() {
    common::init();

    let names = ItemList::name_table();
    assert_eq!(names.class_name(), "ItemList");
    assert_eq!(names.ancestry(), ["ItemList", "Control", "CanvasItem", "Node", "Object"]);

    assert_eq!(names.method("set_visible"), Some(&StringName::from("set_visible")));
    assert_eq!(names.method_owner("set_visible"), Some("CanvasItem"));
    assert_eq!(names.method_owner("select"), Some("ItemList"));
    assert_eq!(names.signal_owner("ready"), Some("Node"));
    assert!(names.property("item_count").is_some());
    assert!(names.property("size").is_some());

    // Siblings do not leak into each other.
    assert!(names.property("position").is_none());
    assert!(names.method("start").is_none());
}

#[test]
fn user_table_extends_engine_base() {
    common::init();

    let names = Mover::name_table();
    assert_eq!(names.class_name(), "Mover");
    assert!(names.inherits("Node2D"));
    assert!(!names.inherits("Control"));

    assert_eq!(names.method_owner("translate"), Some("Node2D"));
    assert_eq!(names.signal_owner("visibility_changed"), Some("CanvasItem"));
    assert_eq!(names.len(), Node2D::name_table().len());
}

#[test]
fn tables_built_once() {
    common::init();

    let first = Timer::name_table();
    let second = Timer::name_table();
    assert!(std::ptr::eq(first, second));

    // Interned names are shared with the ancestor tables.
    let own = first.signal("timeout").expect("declared by Timer");
    let inherited = first.signal("ready").expect("declared by Node");
    assert!(std::ptr::eq(inherited, Node::name_table().signal("ready").expect("declared by Node")));
    assert_eq!(*own, StringName::from("timeout"));
}
