/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Typed signals: connection, emission from both sides, disconnection.

mod common;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use common::{id_of, Mover};
use gdglue::prelude::*;
use gdglue_host::MessageKind;

fn counter() -> (Rc<Cell<u32>>, impl FnMut(()) + 'static) {
    let count = Rc::new(Cell::new(0));
    let handle = count.clone();

    (count, move |()| handle.set(handle.get() + 1))
}

#[test]
fn engine_emits_to_rust_handler() {
    common::init();

    let mut node = Node::new_alloc();
    let (count, on_renamed) = counter();
    node.signals().renamed().connect(on_renamed);

    node.set_name("first");
    node.set_name("second");
    // Same name again: the engine does not emit.
    node.set_name("second");

    assert_eq!(count.get(), 2);
    node.free();
}

#[test]
fn handler_receives_typed_arguments() {
    common::init();

    let mut list = ItemList::new_alloc();
    list.set_item_count(4);

    let selected = Rc::new(RefCell::new(Vec::new()));
    let multi = Rc::new(RefCell::new(Vec::new()));

    let seen = selected.clone();
    list.signals()
        .item_selected()
        .connect(move |(index,)| seen.borrow_mut().push(index));

    let seen = multi.clone();
    list.signals()
        .multi_selected()
        .connect(move |(index, is_selected)| seen.borrow_mut().push((index, is_selected)));

    list.select(2);
    list.select_ex(3).single(false).done();

    assert_eq!(*selected.borrow(), [2]);
    assert_eq!(*multi.borrow(), [(3, true)]);
    assert!(list.is_selected(2));
    assert!(list.is_selected(3));

    list.free();
}

#[test]
fn object_arguments_arrive_as_handles() {
    common::init();

    let mut parent = Node::new_alloc();
    let child = Node3D::new_alloc();

    let entered = Rc::new(RefCell::new(None));
    let slot = entered.clone();
    parent
        .signals()
        .child_entered_tree()
        .connect(move |(node,)| *slot.borrow_mut() = Some(node.instance_id()));

    parent.add_child(&child);
    assert_eq!(*entered.borrow(), Some(child.instance_id()));

    parent.free();
}

#[test]
fn rust_emits_to_rust_handler() {
    common::init();

    let list = ItemList::new_alloc();
    let received = Rc::new(Cell::new(-1));

    let slot = received.clone();
    let signal = list.signals().item_selected();
    signal.connect(move |(index,)| slot.set(index));

    signal.emit((7,));
    assert_eq!(received.get(), 7);

    list.free();
}

#[test]
fn inherited_signals_on_user_class() {
    common::init();

    let mut mover = Mover::new_alloc();
    let (count, on_visibility) = counter();

    // Declared by CanvasItem, reached through Mover -> Node2D -> CanvasItem.
    mover.signals().visibility_changed().connect(on_visibility);
    mover.set_visible(false);
    mover.set_visible(true);

    assert_eq!(count.get(), 2);
    assert_eq!(gdglue_host::connection_count(id_of(&mover), "visibility_changed"), 1);

    mover.free();
}

#[test]
fn disconnect_by_handler_identity() {
    common::init();

    let mut timer = Timer::new_alloc();
    let id = id_of(&timer);
    timer.set_wait_time(0.5);

    let (first_count, first) = counter();
    let (second_count, second) = counter();

    let timeout = timer.signals().timeout();
    let first = timeout.connect(first);
    let second = timeout.connect(second);
    assert_ne!(first, second);
    assert_eq!(gdglue_host::connection_count(id, "timeout"), 2);

    timer.start();
    gdglue_host::process_frame(id, 0.5);
    assert_eq!((first_count.get(), second_count.get()), (1, 1));

    // A clone is the same handler.
    timeout.disconnect(&first.clone());
    assert!(!timeout.is_connected(&first));
    assert!(timeout.is_connected(&second));
    assert_eq!(gdglue_host::connection_count(id, "timeout"), 1);

    gdglue_host::process_frame(id, 0.5);
    assert_eq!((first_count.get(), second_count.get()), (1, 2));

    // Disconnecting twice is a no-op.
    timeout.disconnect(&first);

    // Reconnecting the same handler works.
    assert_eq!(timeout.connect_handler(&first), Error::OK);
    gdglue_host::process_frame(id, 0.5);
    assert_eq!((first_count.get(), second_count.get()), (2, 3));

    timer.free();
}

#[test]
fn duplicate_connection_rejected() {
    common::init();

    let resource = Resource::new_gd();
    let (count, on_changed) = counter();

    let changed = resource.signals().changed();
    let handler = changed.connect(on_changed);
    assert_eq!(changed.connect_handler(&handler), Error::ERR_INVALID_PARAMETER);

    let mut resource = resource;
    resource.emit_changed();
    assert_eq!(count.get(), 1);
}

#[test]
fn unknown_signal_reports_error_code() {
    common::init();

    let mut node = Node::new_alloc();

    let err = node.emit_signal("no_such_signal", &[]);
    assert_eq!(err, Error::ERR_UNAVAILABLE);

    let callable = Callable::from_fn("noop", |_args: &[&Variant]| Ok(Variant::nil()));
    assert_eq!(node.connect("no_such_signal", &callable), Error::ERR_INVALID_PARAMETER);
    assert!(!node.is_connected("no_such_signal", &callable));

    node.free();
}

#[test]
fn mistyped_emission_skips_handler() {
    common::init();

    let mut list = ItemList::new_alloc();
    let received = Rc::new(Cell::new(0));

    let slot = received.clone();
    list.signals().item_selected().connect(move |(index,)| slot.set(index));

    // Bypasses the typed API: the handler cannot convert a string to an index.
    let err = list.emit_signal("item_selected", &[Variant::from("three")]);
    assert_eq!(err, Error::OK);
    assert_eq!(received.get(), 0);
    assert!(gdglue_host::has_message(MessageKind::Error, "item_selected"));

    list.free();
}

#[test]
fn wrong_argument_count_skips_handler() {
    common::init();

    let mut list = ItemList::new_alloc();
    let hits = Rc::new(Cell::new(0));

    let slot = hits.clone();
    list.signals().item_selected().connect(move |(_index,)| slot.set(slot.get() + 1));

    // Arguments are never padded or dropped to fit the handler.
    assert_eq!(list.emit_signal("item_selected", &[]), Error::OK);
    assert!(gdglue_host::has_message(
        MessageKind::Error,
        "signal `item_selected`: call error 4 (argument -1, expected 1)"
    ));

    let too_many = [Variant::from(1), Variant::from(2)];
    assert_eq!(list.emit_signal("item_selected", &too_many), Error::OK);
    assert!(gdglue_host::has_message(
        MessageKind::Error,
        "signal `item_selected`: call error 3 (argument -1, expected 1)"
    ));

    assert_eq!(hits.get(), 0);

    // The connection survives and works with the right arity.
    list.emit_signal("item_selected", &[Variant::from(1)]);
    assert_eq!(hits.get(), 1);

    list.free();
}

#[test]
fn disconnecting_all_handlers_leaves_no_connections() {
    common::init();

    let mut timer = Timer::new_alloc();
    let id = id_of(&timer);

    let (count, first) = counter();
    let (_, second) = counter();

    let timeout = timer.signals().timeout();
    let first = timeout.connect(first);
    let second = timeout.connect(second);
    assert_eq!(gdglue_host::connection_count(id, "timeout"), 2);

    timeout.disconnect(&second);
    timeout.disconnect(&first);
    assert_eq!(gdglue_host::connection_count(id, "timeout"), 0);
    assert!(!timeout.is_connected(&first));
    assert!(!timeout.is_connected(&second));

    timer.set_wait_time(0.5);
    timer.start();
    gdglue_host::process_frame(id, 1.0);
    assert_eq!(count.get(), 0);

    timer.free();
}

#[test]
fn handlers_released_with_object() {
    common::init();

    let node = Node::new_alloc();
    let witness = Rc::new(());

    let held = witness.clone();
    node.signals().ready().connect(move |()| {
        let _ = &held;
    });
    assert_eq!(Rc::strong_count(&witness), 2);

    node.free();
    assert_eq!(Rc::strong_count(&witness), 1);
}
