/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Random sequences of engine calls, checked against a plain Rust model of the same state.

mod common;

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::Rc;

use gdglue::prelude::*;
use proptest::collection::vec;
use proptest::prelude::*;

const ITEMS: i64 = 8;

#[derive(Copy, Clone, Debug)]
enum Selection {
    Select(i64),
    AddToSelection(i64),
    Deselect(i64),
}

prop_compose! {
    fn arbitrary_selection()(kind in 0..3, index in 0..ITEMS) -> Selection {
        match kind {
            0 => Selection::Select(index),
            1 => Selection::AddToSelection(index),
            _ => Selection::Deselect(index),
        }
    }
}

#[derive(Copy, Clone, Debug)]
enum Tree {
    Add,
    Remove(usize),
}

prop_compose! {
    fn arbitrary_tree_op()(add in any::<bool>(), pos in 0..16usize) -> Tree {
        if add { Tree::Add } else { Tree::Remove(pos) }
    }
}

proptest! {
    #[test]
    fn item_selection_follows_model(ops in vec(arbitrary_selection(), 0..40)) {
        common::init();

        let mut list = ItemList::new_alloc();
        list.set_item_count(ITEMS);

        let signalled = Rc::new(RefCell::new(Vec::new()));
        let log = signalled.clone();
        list.signals().item_selected().connect(move |(index,)| log.borrow_mut().push(index));
        let log = signalled.clone();
        list.signals().multi_selected().connect(move |(index, _)| log.borrow_mut().push(index));

        let mut model = BTreeSet::new();
        let mut expected_signals = Vec::new();

        for op in ops {
            match op {
                Selection::Select(index) => {
                    list.select(index);
                    model.clear();
                    model.insert(index);
                    expected_signals.push(index);
                }
                Selection::AddToSelection(index) => {
                    list.select_ex(index).single(false).done();
                    model.insert(index);
                    expected_signals.push(index);
                }
                Selection::Deselect(index) => {
                    list.deselect(index);
                    model.remove(&index);
                }
            }
        }

        let actual = (0..ITEMS).filter(|&i| list.is_selected(i)).collect::<BTreeSet<_>>();
        list.free();

        prop_assert_eq!(actual, model);
        prop_assert_eq!(signalled.borrow().clone(), expected_signals);
    }

    #[test]
    fn child_order_follows_model(ops in vec(arbitrary_tree_op(), 0..30)) {
        common::init();

        let mut parent = Node::new_alloc();
        let mut model: Vec<Gd<Node>> = Vec::new();

        for op in ops {
            match op {
                Tree::Add => {
                    let child = Node::new_alloc();
                    parent.add_child(&child);
                    model.push(child);
                }
                Tree::Remove(pos) if !model.is_empty() => {
                    let child = model.remove(pos % model.len());
                    parent.remove_child(&child);
                    child.free();
                }
                Tree::Remove(_) => {}
            }
        }

        let count = parent.get_child_count();
        let ids = (0..count)
            .map(|i| parent.get_child(i).map(|c| c.instance_id()))
            .collect::<Vec<_>>();
        let expected = model.iter().map(|c| Some(c.instance_id())).collect::<Vec<_>>();

        parent.free();

        prop_assert_eq!(count as usize, expected.len());
        prop_assert_eq!(ids, expected);
    }
}
