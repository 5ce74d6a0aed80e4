/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Value types stored in the engine and read back, through typed pointer calls and through variants.

mod common;

use gdglue::prelude::*;
use proptest::prelude::*;

fn component() -> impl Strategy<Value = f32> {
    prop_oneof![
        Just(0.0),
        Just(-0.0),
        Just(f32::MIN_POSITIVE),
        Just(f32::MAX),
        -1.0e6f32..1.0e6f32,
    ]
}

fn vector2() -> impl Strategy<Value = Vector2> {
    (component(), component()).prop_map(|(x, y)| Vector2::new(x, y))
}

fn bits2(v: Vector2) -> [u32; 2] {
    [v.x.to_bits(), v.y.to_bits()]
}

proptest! {
    #[test]
    fn vector3_stored_exactly(x in component(), y in component(), z in component()) {
        common::init();

        let mut node = Node3D::new_alloc();
        let sent = Vector3::new(x, y, z);
        node.set_position(sent);
        let back = node.get_position();
        node.free();

        prop_assert_eq!([back.x.to_bits(), back.y.to_bits(), back.z.to_bits()], [x.to_bits(), y.to_bits(), z.to_bits()]);
    }

    #[test]
    fn color_stored_exactly(r in component(), g in component(), b in component(), a in component()) {
        common::init();

        let mut item = Node2D::new_alloc();
        item.set_modulate(Color::from_rgba(r, g, b, a));
        let back = item.get_modulate();
        item.free();

        let bits = |c: Color| [c.r.to_bits(), c.g.to_bits(), c.b.to_bits(), c.a.to_bits()];
        prop_assert_eq!(bits(back), bits(Color::from_rgba(r, g, b, a)));
    }

    #[test]
    fn transform_columns_keep_order(a in vector2(), b in vector2(), origin in vector2()) {
        common::init();

        let mut node = Node2D::new_alloc();
        node.set_transform(Transform2D::from_cols(a, b, origin));
        let back = node.get_transform();
        node.free();

        prop_assert_eq!(bits2(back.a), bits2(a));
        prop_assert_eq!(bits2(back.b), bits2(b));
        prop_assert_eq!(bits2(back.origin), bits2(origin));
    }

    #[test]
    fn variant_path_matches_typed_path(pos in vector2()) {
        common::init();

        let mut node = Node2D::new_alloc();
        node.call("set_position", &[Variant::from(pos)]);
        let typed = node.get_position();
        let dynamic = node.call("get_position", &[]).to::<Vector2>();
        node.free();

        prop_assert_eq!(bits2(typed), bits2(pos));
        prop_assert_eq!(bits2(dynamic), bits2(pos));
    }
}

#[test]
fn strings_cross_unchanged() {
    common::init();

    let mut resource = Resource::new_gd();
    for name in ["", "ascii", "ünïcödé ✓", "with\nnewline", "emoji 🎮"] {
        resource.set_name(name);
        assert_eq!(resource.get_name().to_string(), name);
    }

    let mut node = Node::new_alloc();
    node.set_name("Ω node");
    assert_eq!(node.get_name(), StringName::from("Ω node"));
    node.free();
}

#[test]
fn primitives_cross_unchanged() {
    common::init();

    let mut node = Node2D::new_alloc();
    for angle in [0.0, -0.0, 1.0e-300, -3.5, f64::MAX] {
        node.set_rotation(angle);
        assert_eq!(node.get_rotation().to_bits(), angle.to_bits());
    }

    let mut list = ItemList::new_alloc();
    list.set_item_count(i64::from(i32::MAX) + 1);
    assert_eq!(list.get_item_count(), i64::from(i32::MAX) + 1);

    node.free();
    list.free();
}
