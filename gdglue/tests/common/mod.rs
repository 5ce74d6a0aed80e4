/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Shared by several test binaries; not every binary uses every item.
#![allow(dead_code)]

use std::cell::RefCell;
use std::sync::Once;

use gdglue::builtin::real;
use gdglue::classes::{IControl, INode};
use gdglue::prelude::*;
use gdglue::registry::register_class;

/// Loads the test extension into the in-process engine. Idempotent.
pub fn init() {
    static LOAD: Once = Once::new();

    LOAD.call_once(|| {
        // SAFETY: the entry point is declared by gdextension_entry! below.
        let loaded = unsafe { gdglue_host::load_extension(gdext_rust_init) };
        assert!(loaded, "test extension failed to load");
    });
}

pub fn id_of<T: GodotClass>(obj: &Gd<T>) -> u64 {
    obj.instance_id().to_u64()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Test classes

/// Moves right by `speed` units per second while processing.
pub struct Mover {
    base: Base<Node2D>,
    pub speed: f64,
    pub frames: u32,
}

godot_class!(Mover: Node2D);

impl UserClass for Mover {
    fn init(base: Base<Node2D>) -> Self {
        Self {
            base,
            speed: 100.0,
            frames: 0,
        }
    }

    fn register(class: &mut ClassBuilder<Self>) {
        class.virtual_method::<INode::Process, _>(|this, (delta,)| {
            this.frames += 1;

            let offset = Vector2::new((this.speed * delta) as real, 0.0);
            this.base.translate(offset);
        });
    }
}

/// Round control: contains the points within `radius` of its origin.
pub struct Knob {
    base: Base<Control>,
    pub radius: f32,
}

godot_class!(Knob: Control);

impl UserClass for Knob {
    fn init(base: Base<Control>) -> Self {
        Self { base, radius: 5.0 }
    }

    fn register(class: &mut ClassBuilder<Self>) {
        class.virtual_method::<IControl::HasPoint, _>(|this, (point,)| point.length() <= this.radius);
    }
}

thread_local! {
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Takes the lifecycle events recorded by [`Tracker`] instances on this thread.
pub fn take_events() -> Vec<String> {
    EVENTS.with(|events| events.take())
}

fn record(node: &Node, event: &str) {
    let entry = format!("{}:{event}", node.get_name());
    EVENTS.with(|events| events.borrow_mut().push(entry));
}

/// Records its tree notifications; `_ready` panics if `fail_ready` is set.
pub struct Tracker {
    base: Base<Node>,
    pub fail_ready: bool,
    pub ready_count: u32,
}

godot_class!(Tracker: Node);

impl UserClass for Tracker {
    fn init(base: Base<Node>) -> Self {
        Self {
            base,
            fail_ready: false,
            ready_count: 0,
        }
    }

    fn register(class: &mut ClassBuilder<Self>) {
        class
            .virtual_method::<INode::EnterTree, _>(|this, ()| record(&this.base, "enter_tree"))
            .virtual_method::<INode::Ready, _>(|this, ()| {
                assert!(!this.fail_ready, "tracker refused to get ready");

                this.ready_count += 1;
                record(&this.base, "ready");
            });
    }
}

/// Does not override anything.
pub struct Plain {
    base: Base<Node3D>,
}

godot_class!(Plain: Node3D);

impl UserClass for Plain {
    fn init(base: Base<Node3D>) -> Self {
        Self { base }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Extension

struct TestExtension;

unsafe impl ExtensionLibrary for TestExtension {
    fn on_level_init(level: InitLevel) {
        if level == InitLevel::Scene {
            register_class::<Mover>();
            register_class::<Knob>();
            register_class::<Tracker>();
            register_class::<Plain>();
        }
    }
}

gdextension_entry!(TestExtension);
