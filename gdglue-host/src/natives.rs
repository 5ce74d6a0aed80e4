/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Native classes and their methods.
//!
//! Method hashes must match the ones in the API description the bindings are generated from.

use gdglue_ffi as sys;

use crate::callable::{self, error_code};
use crate::classdb::{HostClass, HostMethod};
use crate::dispatch;
use crate::object::{self, HostObject};
use crate::strings;
use crate::value::{HostValue, Ty};

type CallResult = Result<HostValue, sys::GDExtensionCallError>;

static NIL: HostValue = HostValue::Nil;

fn arg(args: &[HostValue], index: usize) -> &HostValue {
    args.get(index).unwrap_or(&NIL)
}

fn void() -> CallResult {
    Ok(HostValue::Nil)
}

fn set(obj: &HostObject, prop: &'static str, value: HostValue) {
    drop(obj.set_prop(prop, value));
}

/// Getter and setter over a stored property with a default.
macro_rules! property {
    ($getter:ident, $setter:ident, $prop:literal, $default:expr) => {
        fn $getter(obj: &HostObject, _args: &[HostValue]) -> CallResult {
            Ok(obj.prop($prop).unwrap_or_else(|| $default))
        }

        fn $setter(obj: &HostObject, args: &[HostValue]) -> CallResult {
            set(obj, $prop, arg(args, 0).clone());
            void()
        }
    };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Object

fn object_get_class(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::String(obj.class().name().to_string()))
}

fn object_is_class(obj: &HostObject, args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(obj.class().inherits_name(&arg(args, 0).as_text())))
}

fn object_get_instance_id(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Int(obj.id() as i64))
}

fn object_has_method(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let name = strings::intern(&arg(args, 0).as_text());
    Ok(HostValue::Bool(dispatch::has_method(obj, name)))
}

fn object_has_signal(obj: &HostObject, args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(obj.class().has_signal(&arg(args, 0).as_text())))
}

fn object_call(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let name = dispatch::leading_name(args)?;
    dispatch::call_by_name(obj, name, args[1..].to_vec())
}

fn object_emit_signal(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let signal = dispatch::leading_name(args)?;
    Ok(HostValue::Int(callable::emit(obj, signal, &args[1..])))
}

fn object_connect(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let signal = strings::intern(&arg(args, 0).as_text());
    let code = match arg(args, 1) {
        HostValue::Callable(Some(callable)) => callable::connect(obj, signal, callable.clone()),
        _ => error_code::ERR_INVALID_PARAMETER,
    };
    Ok(HostValue::Int(code))
}

fn object_disconnect(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let signal = strings::intern(&arg(args, 0).as_text());
    if let HostValue::Callable(Some(callable)) = arg(args, 1) {
        callable::disconnect(obj, signal, callable);
    }
    void()
}

fn object_is_connected(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let signal = strings::intern(&arg(args, 0).as_text());
    let connected = match arg(args, 1) {
        HostValue::Callable(Some(callable)) => callable::is_connected(obj, signal, callable),
        _ => false,
    };
    Ok(HostValue::Bool(connected))
}

static OBJECT_METHODS: &[HostMethod] = &[
    HostMethod::new("get_class", 201670096, &[], Ty::String, object_get_class),
    HostMethod::new("is_class", 3927539163, &[Ty::String], Ty::Bool, object_is_class),
    HostMethod::new("get_instance_id", 3905245786, &[], Ty::Int, object_get_instance_id),
    HostMethod::new("has_method", 2619796661, &[Ty::StringName], Ty::Bool, object_has_method),
    HostMethod::new("has_signal", 2619796662, &[Ty::StringName], Ty::Bool, object_has_signal),
    HostMethod::vararg("call", 3400424181, &[Ty::StringName], Ty::Variant, object_call),
    HostMethod::vararg("emit_signal", 4047867050, &[Ty::StringName], Ty::Int, object_emit_signal),
    HostMethod::new("connect", 1518946055, &[Ty::StringName, Ty::Callable, Ty::Int], Ty::Int, object_connect),
    HostMethod::new("disconnect", 1874754934, &[Ty::StringName, Ty::Callable], Ty::Nil, object_disconnect),
    HostMethod::new("is_connected", 768136979, &[Ty::StringName, Ty::Callable], Ty::Bool, object_is_connected),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// RefCounted

fn ref_counted_init_ref(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    // First reference of a new object; later calls behave like `reference`.
    Ok(HostValue::Bool(obj.reference() > 0))
}

fn ref_counted_reference(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(obj.reference() > 0))
}

/// Returns true if this was the last reference; the caller then destroys the object.
fn ref_counted_unreference(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(obj.unreference() == 0))
}

fn ref_counted_get_reference_count(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Int(obj.refcount()))
}

static REF_COUNTED_METHODS: &[HostMethod] = &[
    HostMethod::new("init_ref", 2240911060, &[], Ty::Bool, ref_counted_init_ref),
    HostMethod::new("reference", 2240911061, &[], Ty::Bool, ref_counted_reference),
    HostMethod::new("unreference", 2240911062, &[], Ty::Bool, ref_counted_unreference),
    HostMethod::new("get_reference_count", 3905245786, &[], Ty::Int, ref_counted_get_reference_count),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Resource

property!(resource_get_name, resource_set_name, "resource_name", HostValue::String(String::new()));

fn resource_emit_changed(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    callable::emit_by_name(obj, "changed", &[]);
    void()
}

static RESOURCE_METHODS: &[HostMethod] = &[
    HostMethod::new("set_name", 83702148, &[Ty::String], Ty::Nil, resource_set_name),
    HostMethod::new("get_name", 201670096, &[], Ty::String, resource_get_name),
    HostMethod::new("emit_changed", 3218959716, &[], Ty::Nil, resource_emit_changed),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Node

fn node_set_name(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let name = strings::intern(&arg(args, 0).as_text());
    let previous = obj.set_prop("name", HostValue::StringName(name));

    let changed = !matches!(previous, Some(HostValue::StringName(old)) if std::ptr::eq(old, name));
    if changed {
        callable::emit_by_name(obj, "renamed", &[]);
    }
    void()
}

fn node_get_name(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(obj
        .prop("name")
        .unwrap_or_else(|| HostValue::StringName(strings::intern(""))))
}

fn node_add_child(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let Some(child_id) = arg(args, 0).as_object_id() else {
        crate::log::engine_error("add_child: child is null");
        return void();
    };

    if child_id == obj.id() {
        crate::log::engine_error("add_child: cannot add node as its own child");
        return void();
    }

    let attached = object::with_object(child_id, |child| {
        let mut state = child.state();
        if state.parent.is_some() {
            return false;
        }
        state.parent = Some(obj.id());
        true
    });

    if attached != Some(true) {
        crate::log::engine_error("add_child: child already has a parent");
        return void();
    }

    obj.state().children.push(child_id);
    callable::emit_by_name(obj, "child_entered_tree", &[HostValue::object(child_id)]);
    void()
}

fn node_remove_child(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let Some(child_id) = arg(args, 0).as_object_id() else {
        return void();
    };

    let removed = {
        let mut state = obj.state();
        let before = state.children.len();
        state.children.retain(|&id| id != child_id);
        before != state.children.len()
    };

    if removed {
        object::with_object(child_id, |child| child.state().parent = None);
    } else {
        crate::log::engine_error("remove_child: node is not a child");
    }
    void()
}

fn node_get_child_count(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Int(obj.state().children.len() as i64))
}

fn node_get_child(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let index = arg(args, 0).as_int();
    let children = obj.state().children.clone();

    let resolved = if index < 0 { children.len() as i64 + index } else { index };
    match children.get(resolved as usize) {
        Some(&id) if resolved >= 0 => Ok(HostValue::object(id)),
        _ => {
            crate::log::engine_error(&format!("get_child: index {index} out of bounds"));
            Ok(HostValue::Object(None))
        }
    }
}

fn node_get_parent(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    let parent = obj.state().parent;
    Ok(HostValue::Object(parent.and_then(crate::value::ObjectRef::new)))
}

fn node_set_process(obj: &HostObject, args: &[HostValue]) -> CallResult {
    set(obj, "processing", HostValue::Bool(arg(args, 0).as_bool()));
    void()
}

/// Processing is on by default when the extension overrides `_process`.
pub(crate) fn node_is_processing_now(obj: &HostObject) -> bool {
    match obj.prop("processing") {
        Some(value) => value.as_bool(),
        None => dispatch::has_virtual(obj, strings::intern("_process")),
    }
}

fn node_is_processing(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(node_is_processing_now(obj)))
}

static NODE_METHODS: &[HostMethod] = &[
    HostMethod::new("set_name", 83702148, &[Ty::String], Ty::Nil, node_set_name),
    HostMethod::new("get_name", 2002593661, &[], Ty::StringName, node_get_name),
    HostMethod::new("add_child", 3863233950, &[Ty::Object, Ty::Bool, Ty::Int], Ty::Nil, node_add_child),
    HostMethod::new("remove_child", 1078189570, &[Ty::Object], Ty::Nil, node_remove_child),
    HostMethod::new("get_child_count", 894402480, &[Ty::Bool], Ty::Int, node_get_child_count),
    HostMethod::new("get_child", 541253412, &[Ty::Int, Ty::Bool], Ty::Object, node_get_child),
    HostMethod::new("get_parent", 3160264692, &[], Ty::Object, node_get_parent),
    HostMethod::new("set_process", 2586408642, &[Ty::Bool], Ty::Nil, node_set_process),
    HostMethod::new("is_processing", 36873697, &[], Ty::Bool, node_is_processing),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// CanvasItem

fn canvas_item_set_visible(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let visible = arg(args, 0).as_bool();
    let previous = obj.set_prop("visible", HostValue::Bool(visible));

    if previous.map_or(true, |p| p.as_bool()) != visible {
        callable::emit_by_name(obj, "visibility_changed", &[]);
    }
    void()
}

fn canvas_item_is_visible(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(obj.prop("visible").unwrap_or(HostValue::Bool(true)))
}

property!(canvas_item_get_modulate, canvas_item_set_modulate, "modulate", HostValue::Color([1.0; 4]));

fn canvas_item_queue_redraw(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    if let Some(Err(err)) = dispatch::call_virtual(obj, strings::intern("_draw"), &[]) {
        crate::log::engine_error(&format!("_draw failed with call error {}", err.error));
    }
    callable::emit_by_name(obj, "draw", &[]);
    void()
}

static CANVAS_ITEM_METHODS: &[HostMethod] = &[
    HostMethod::new("set_visible", 2586408642, &[Ty::Bool], Ty::Nil, canvas_item_set_visible),
    HostMethod::new("is_visible", 36873697, &[], Ty::Bool, canvas_item_is_visible),
    HostMethod::new("set_modulate", 2920490490, &[Ty::Color], Ty::Nil, canvas_item_set_modulate),
    HostMethod::new("get_modulate", 3444240500, &[], Ty::Color, canvas_item_get_modulate),
    HostMethod::new("queue_redraw", 3218959716, &[], Ty::Nil, canvas_item_queue_redraw),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Node2D

property!(node2d_get_position, node2d_set_position, "position", HostValue::Vector2([0.0; 2]));
property!(node2d_get_rotation, node2d_set_rotation, "rotation", HostValue::Float(0.0));
property!(node2d_get_transform, node2d_set_transform, "transform", HostValue::Transform2D([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]));

fn node2d_rotate(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let current = obj.prop("rotation").map_or(0.0, |r| r.as_float());
    set(obj, "rotation", HostValue::Float(current + arg(args, 0).as_float()));
    void()
}

fn node2d_translate(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let [x, y] = match obj.prop("position") {
        Some(HostValue::Vector2(v)) => v,
        _ => [0.0; 2],
    };
    if let HostValue::Vector2([dx, dy]) = arg(args, 0) {
        set(obj, "position", HostValue::Vector2([x + dx, y + dy]));
    }
    void()
}

static NODE2D_METHODS: &[HostMethod] = &[
    HostMethod::new("set_position", 743155724, &[Ty::Vector2], Ty::Nil, node2d_set_position),
    HostMethod::new("get_position", 3341600327, &[], Ty::Vector2, node2d_get_position),
    HostMethod::new("set_rotation", 373806689, &[Ty::Float], Ty::Nil, node2d_set_rotation),
    HostMethod::new("get_rotation", 1740695150, &[], Ty::Float, node2d_get_rotation),
    HostMethod::new("rotate", 373806689, &[Ty::Float], Ty::Nil, node2d_rotate),
    HostMethod::new("translate", 743155724, &[Ty::Vector2], Ty::Nil, node2d_translate),
    HostMethod::new("set_transform", 2761652528, &[Ty::Transform2D], Ty::Nil, node2d_set_transform),
    HostMethod::new("get_transform", 3814499831, &[], Ty::Transform2D, node2d_get_transform),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Node3D

property!(node3d_get_position, node3d_set_position, "position", HostValue::Vector3([0.0; 3]));

fn node3d_translate(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let [x, y, z] = match obj.prop("position") {
        Some(HostValue::Vector3(v)) => v,
        _ => [0.0; 3],
    };
    if let HostValue::Vector3([dx, dy, dz]) = arg(args, 0) {
        set(obj, "position", HostValue::Vector3([x + dx, y + dy, z + dz]));
    }
    void()
}

static NODE3D_METHODS: &[HostMethod] = &[
    HostMethod::new("set_position", 3460891852, &[Ty::Vector3], Ty::Nil, node3d_set_position),
    HostMethod::new("get_position", 3360562783, &[], Ty::Vector3, node3d_get_position),
    HostMethod::new("translate", 3460891852, &[Ty::Vector3], Ty::Nil, node3d_translate),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Control

fn control_set_size(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let size = arg(args, 0).clone();
    let previous = obj.set_prop("size", size.clone());

    let changed = match (previous, &size) {
        (Some(HostValue::Vector2(old)), HostValue::Vector2(new)) => old != *new,
        _ => true,
    };
    if changed {
        callable::emit_by_name(obj, "resized", &[]);
    }
    void()
}

fn control_get_size(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(obj.prop("size").unwrap_or(HostValue::Vector2([0.0; 2])))
}

static CONTROL_METHODS: &[HostMethod] = &[
    HostMethod::new("set_size", 2436320129, &[Ty::Vector2, Ty::Bool], Ty::Nil, control_set_size),
    HostMethod::new("get_size", 3341600327, &[], Ty::Vector2, control_get_size),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// ItemList

property!(item_list_get_item_count, item_list_set_item_count_raw, "item_count", HostValue::Int(0));

fn item_list_set_item_count(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let count = arg(args, 0).as_int().max(0);
    item_list_set_item_count_raw(obj, &[HostValue::Int(count)])?;

    // Selections beyond the new count are dropped.
    let mask = selection_mask(obj) & low_bits(count);
    set(obj, "selected", HostValue::Int(mask as i64));
    void()
}

fn selection_mask(obj: &HostObject) -> u64 {
    obj.prop("selected").map_or(0, |m| m.as_int() as u64)
}

fn low_bits(count: i64) -> u64 {
    if count >= 64 {
        u64::MAX
    } else {
        (1u64 << count) - 1
    }
}

fn item_index(obj: &HostObject, args: &[HostValue]) -> Option<i64> {
    let index = arg(args, 0).as_int();
    let count = obj.prop("item_count").map_or(0, |c| c.as_int());

    if (0..count.min(64)).contains(&index) {
        Some(index)
    } else {
        crate::log::engine_error(&format!("ItemList: index {index} out of bounds (count {count})"));
        None
    }
}

fn item_list_select(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let Some(index) = item_index(obj, args) else {
        return void();
    };

    let single = arg(args, 1).as_bool();
    let bit = 1u64 << index;
    let mask = if single { bit } else { selection_mask(obj) | bit };
    set(obj, "selected", HostValue::Int(mask as i64));

    if single {
        callable::emit_by_name(obj, "item_selected", &[HostValue::Int(index)]);
    } else {
        callable::emit_by_name(obj, "multi_selected", &[HostValue::Int(index), HostValue::Bool(true)]);
    }
    void()
}

fn item_list_deselect(obj: &HostObject, args: &[HostValue]) -> CallResult {
    if let Some(index) = item_index(obj, args) {
        let mask = selection_mask(obj) & !(1u64 << index);
        set(obj, "selected", HostValue::Int(mask as i64));
    }
    void()
}

fn item_list_is_selected(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let selected = item_index(obj, args).is_some_and(|index| selection_mask(obj) & (1u64 << index) != 0);
    Ok(HostValue::Bool(selected))
}

static ITEM_LIST_METHODS: &[HostMethod] = &[
    HostMethod::new("set_item_count", 1286410249, &[Ty::Int], Ty::Nil, item_list_set_item_count),
    HostMethod::new("get_item_count", 3905245786, &[], Ty::Int, item_list_get_item_count),
    HostMethod::new("select", 972357352, &[Ty::Int, Ty::Bool], Ty::Nil, item_list_select),
    HostMethod::new("is_selected", 1116898809, &[Ty::Int], Ty::Bool, item_list_is_selected),
    HostMethod::new("deselect", 1286410249, &[Ty::Int], Ty::Nil, item_list_deselect),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Timer

property!(timer_get_wait_time, timer_set_wait_time, "wait_time", HostValue::Float(1.0));
property!(timer_is_one_shot, timer_set_one_shot, "one_shot", HostValue::Bool(false));

fn timer_start(obj: &HostObject, args: &[HostValue]) -> CallResult {
    let requested = arg(args, 0).as_float();
    if requested > 0.0 {
        set(obj, "wait_time", HostValue::Float(requested));
    }

    let wait_time = obj.prop("wait_time").map_or(1.0, |w| w.as_float());
    set(obj, "time_left", HostValue::Float(wait_time));
    void()
}

fn timer_stop(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    set(obj, "time_left", HostValue::Float(0.0));
    void()
}

fn timer_time_left(obj: &HostObject) -> f64 {
    obj.prop("time_left").map_or(0.0, |t| t.as_float())
}

fn timer_is_stopped(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Bool(timer_time_left(obj) <= 0.0))
}

fn timer_get_time_left(obj: &HostObject, _args: &[HostValue]) -> CallResult {
    Ok(HostValue::Float(timer_time_left(obj).max(0.0)))
}

/// Advances a running timer by `delta`, emitting `timeout` when it elapses.
pub(crate) fn timer_advance(obj: &HostObject, delta: f64) {
    let time_left = timer_time_left(obj);
    if time_left <= 0.0 {
        return;
    }

    let remaining = time_left - delta;
    if remaining > 0.0 {
        set(obj, "time_left", HostValue::Float(remaining));
        return;
    }

    let one_shot = obj.prop("one_shot").is_some_and(|o| o.as_bool());
    let wait_time = obj.prop("wait_time").map_or(1.0, |w| w.as_float());
    let next = if one_shot { 0.0 } else { (remaining + wait_time).max(f64::MIN_POSITIVE) };

    set(obj, "time_left", HostValue::Float(next));
    callable::emit_by_name(obj, "timeout", &[]);
}

static TIMER_METHODS: &[HostMethod] = &[
    HostMethod::new("set_wait_time", 373806689, &[Ty::Float], Ty::Nil, timer_set_wait_time),
    HostMethod::new("get_wait_time", 1740695150, &[], Ty::Float, timer_get_wait_time),
    HostMethod::new("set_one_shot", 2586408642, &[Ty::Bool], Ty::Nil, timer_set_one_shot),
    HostMethod::new("is_one_shot", 36873697, &[], Ty::Bool, timer_is_one_shot),
    HostMethod::new("start", 1392008558, &[Ty::Float], Ty::Nil, timer_start),
    HostMethod::new("stop", 3218959716, &[], Ty::Nil, timer_stop),
    HostMethod::new("is_stopped", 36873697, &[], Ty::Bool, timer_is_stopped),
    HostMethod::new("get_time_left", 1740695150, &[], Ty::Float, timer_get_time_left),
];

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Class list

pub(crate) static OBJECT: HostClass = HostClass::native(
    "Object",
    None,
    false,
    OBJECT_METHODS,
    &["script_changed", "property_list_changed"],
);
pub(crate) static REF_COUNTED: HostClass = HostClass::native("RefCounted", Some(&OBJECT), true, REF_COUNTED_METHODS, &[]);
pub(crate) static RESOURCE: HostClass = HostClass::native("Resource", Some(&REF_COUNTED), true, RESOURCE_METHODS, &["changed"]);
pub(crate) static NODE: HostClass = HostClass::native(
    "Node",
    Some(&OBJECT),
    false,
    NODE_METHODS,
    &["ready", "renamed", "tree_entered", "child_entered_tree"],
);
pub(crate) static CANVAS_ITEM: HostClass = HostClass::native(
    "CanvasItem",
    Some(&NODE),
    false,
    CANVAS_ITEM_METHODS,
    &["draw", "visibility_changed"],
);
pub(crate) static NODE2D: HostClass = HostClass::native("Node2D", Some(&CANVAS_ITEM), false, NODE2D_METHODS, &[]);
pub(crate) static NODE3D: HostClass = HostClass::native("Node3D", Some(&NODE), false, NODE3D_METHODS, &[]);
pub(crate) static CONTROL: HostClass = HostClass::native(
    "Control",
    Some(&CANVAS_ITEM),
    false,
    CONTROL_METHODS,
    &["resized", "focus_entered"],
);
pub(crate) static ITEM_LIST: HostClass = HostClass::native(
    "ItemList",
    Some(&CONTROL),
    false,
    ITEM_LIST_METHODS,
    &["item_selected", "multi_selected"],
);
pub(crate) static TIMER: HostClass = HostClass::native("Timer", Some(&NODE), false, TIMER_METHODS, &["timeout"]);

pub(crate) static CLASSES: &[&HostClass] = &[
    &OBJECT,
    &REF_COUNTED,
    &RESOURCE,
    &NODE,
    &CANVAS_ITEM,
    &NODE2D,
    &NODE3D,
    &CONTROL,
    &ITEM_LIST,
    &TIMER,
];
