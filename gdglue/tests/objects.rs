/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Object handles: reference counting, manual memory, lookup by instance ID.

mod common;

use common::{id_of, Mover};
use gdglue::prelude::*;

#[test]
fn refcounted_handles_share_one_object() {
    common::init();

    let resource = Resource::new_gd();
    let id = id_of(&resource);
    assert_eq!(gdglue_host::reference_count(id), Some(1));

    let copy = resource.clone();
    assert_eq!(gdglue_host::reference_count(id), Some(2));
    assert_eq!(copy, resource);

    drop(resource);
    assert_eq!(gdglue_host::reference_count(id), Some(1));
    assert!(gdglue_host::is_alive(id));

    drop(copy);
    assert!(!gdglue_host::is_alive(id));
}

#[test]
fn manual_objects_live_until_freed() {
    common::init();

    let node = Node::new_alloc();
    let id = id_of(&node);
    assert_eq!(gdglue_host::reference_count(id), None);

    let copy = node.clone();
    drop(node);
    assert!(gdglue_host::is_alive(id));
    assert!(copy.is_instance_valid());

    copy.free();
    assert!(!gdglue_host::is_alive(id));
}

#[test]
fn stale_handle_reports_invalid() {
    common::init();

    let node = Node2D::new_alloc();
    let stale = node.clone();
    node.free();

    assert!(!stale.is_instance_valid());
}

#[test]
fn lookup_by_instance_id() {
    common::init();

    let mover = Mover::new_alloc();
    let id = mover.instance_id();

    let found = Gd::<Node>::try_from_instance_id(id).expect("live node");
    assert_eq!(found.get_class(), GString::from("Mover"));

    // Wrong static type: the object exists, but is not a Control.
    assert!(Gd::<Control>::try_from_instance_id(id).is_none());

    let typed = Gd::<Mover>::from_instance_id(id);
    assert_eq!(typed.bind().speed, 100.0);

    mover.free();
    assert!(Gd::<Node>::try_from_instance_id(id).is_none());
}

#[test]
fn upcast_keeps_user_instance() {
    common::init();

    let mut mover = Mover::new_alloc();
    mover.bind_mut().speed = 7.5;

    let as_node: Gd<Node> = mover.upcast();
    let mover = as_node.cast::<Mover>();
    assert_eq!(mover.bind().speed, 7.5);

    mover.free();
}
