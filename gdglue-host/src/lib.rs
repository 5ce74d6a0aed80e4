/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # In-process engine for testing [**gdglue**](https://docs.rs/gdglue)
//!
//! Implements the GDExtension interface subset that the bindings use, on top of plain Rust data structures: interned
//! string names, heap-boxed variants, an object arena with instance IDs and refcounts, a class database with the native
//! classes of the bundled API description, custom callables and signal connections.
//!
//! Tests load an extension through its entry point with [`load_extension`], then drive it through the bindings and
//! inspect engine-side state through the functions of this crate.

#![deny(unsafe_op_in_unsafe_fn)]

mod callable;
mod classdb;
mod dispatch;
mod log;
mod natives;
mod object;
mod scene;
mod strings;
mod value;
mod variant;

use std::ffi::c_void;

use gdglue_ffi as sys;

pub use log::{EngineMessage, MessageKind};

/// Native method call as observed by the engine: receiver class, method and arguments in debug form.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NativeCall {
    pub class: String,
    pub method: String,
    pub args: Vec<String>,
}

/// Outcome of an engine-initiated virtual call.
#[derive(Clone, PartialEq, Debug)]
pub enum VirtualCall {
    /// The extension class does not override the method.
    NotOverridden,
    /// Override ran; the return value in engine text form (`<null>` for void).
    Returned(String),
    /// Override rejected the call.
    Failed { error: u32, argument: i32, expected: i32 },
}

static INTERFACE: sys::GDExtensionInterface = sys::GDExtensionInterface {
    version_major: 4,
    version_minor: 3,
    version_patch: 0,
    version_string: c"gdglue-host 4.3.0 (in-process)".as_ptr(),

    print_error: Some(log::print_error),
    print_warning: Some(log::print_warning),
    print_script_error: Some(log::print_script_error),

    variant_new_copy: Some(variant::variant_new_copy),
    variant_new_nil: Some(variant::variant_new_nil),
    variant_destroy: Some(variant::variant_destroy),
    variant_get_type: Some(variant::variant_get_type),
    variant_stringify: Some(variant::variant_stringify),
    get_variant_from_type_constructor: Some(variant::get_variant_from_type_constructor),
    get_variant_to_type_constructor: Some(variant::get_variant_to_type_constructor),
    variant_get_ptr_constructor: Some(variant::variant_get_ptr_constructor),
    variant_get_ptr_destructor: Some(variant::variant_get_ptr_destructor),

    string_new_with_utf8_chars_and_len: Some(strings::string_new_with_utf8_chars_and_len),
    string_to_utf8_chars: Some(strings::string_to_utf8_chars),
    string_name_new_with_utf8_chars_and_len: Some(strings::string_name_new_with_utf8_chars_and_len),

    object_method_bind_call: Some(dispatch::object_method_bind_call),
    object_method_bind_ptrcall: Some(dispatch::object_method_bind_ptrcall),
    object_destroy: Some(object::object_destroy),
    object_get_instance_from_id: Some(object::object_get_instance_from_id),
    object_get_instance_id: Some(object::object_get_instance_id),
    object_set_instance: Some(object::object_set_instance),
    object_get_instance_binding: Some(object::object_get_instance_binding),
    object_set_instance_binding: Some(object::object_set_instance_binding),
    object_cast_to: Some(object::object_cast_to),

    callable_custom_create: Some(callable::callable_custom_create),

    classdb_construct_object: Some(classdb::classdb_construct_object),
    classdb_get_method_bind: Some(classdb::classdb_get_method_bind),
    classdb_get_class_tag: Some(classdb::classdb_get_class_tag),
    classdb_register_extension_class: Some(classdb::classdb_register_extension_class),
    classdb_unregister_extension_class: Some(classdb::classdb_unregister_extension_class),
};

static LIBRARY_TOKEN: u8 = 0;

/// Interface table handed to extensions.
pub fn interface() -> *const sys::GDExtensionInterface {
    &INTERFACE
}

/// Library handle handed to extensions.
pub fn library() -> sys::GDExtensionClassLibraryPtr {
    &LIBRARY_TOKEN as *const u8 as *mut c_void
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Extension loading

pub type EntryPoint = unsafe extern "C" fn(
    *const sys::GDExtensionInterface,
    sys::GDExtensionClassLibraryPtr,
    *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool;

struct LoadedExtension {
    init: sys::GDExtensionInitialization,
}

// SAFETY: the initialization userdata is owned by the extension, which accepts calls from any thread.
unsafe impl Send for LoadedExtension {}

static LOADED: sys::Global<Option<LoadedExtension>> = sys::Global::default();

const MAX_LEVEL: sys::GDExtensionInitializationLevel = sys::GDEXTENSION_INITIALIZATION_SCENE;

/// Loads an extension: calls its entry point, then initializes every level from its minimum up to scene level.
///
/// Returns false if the entry point reports failure or an extension is already loaded.
///
/// # Safety
/// `entry` must be a GDExtension entry point built against this interface.
pub unsafe fn load_extension(entry: EntryPoint) -> bool {
    if LOADED.lock().is_some() {
        return false;
    }

    let mut init = sys::GDExtensionInitialization {
        minimum_initialization_level: sys::GDEXTENSION_INITIALIZATION_CORE,
        userdata: std::ptr::null_mut(),
        initialize: None,
        deinitialize: None,
    };

    if !sys::to_bool(unsafe { entry(interface(), library(), &mut init) }) {
        return false;
    }

    let Some(initialize) = init.initialize else {
        return false;
    };

    for level in init.minimum_initialization_level..=MAX_LEVEL {
        // SAFETY: the extension handed out this callback for its own userdata.
        unsafe { initialize(init.userdata, level) };
    }

    *LOADED.lock() = Some(LoadedExtension { init });
    true
}

/// Deinitializes the loaded extension, in reverse level order. No-op if none is loaded.
pub fn unload_extension() {
    let Some(loaded) = LOADED.lock().take() else {
        return;
    };

    let init = loaded.init;
    if let Some(deinitialize) = init.deinitialize {
        for level in (init.minimum_initialization_level..=MAX_LEVEL).rev() {
            // SAFETY: see `load_extension`.
            unsafe { deinitialize(init.userdata, level) };
        }
    }
}

pub fn is_extension_loaded() -> bool {
    LOADED.lock().is_some()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Inspection

/// How often the extension asked for the method bind of `class_name::method_name`.
pub fn method_bind_lookups(class_name: &str, method_name: &str) -> usize {
    classdb::method_bind_lookups(class_name, method_name)
}

/// Number of callables connected to `signal` on the given object; 0 if the object is gone.
pub fn connection_count(instance_id: u64, signal: &str) -> usize {
    object::with_object(instance_id, |obj| callable::connection_count(obj, signal)).unwrap_or(0)
}

/// Most recent native method call received by the given object.
pub fn last_native_call(instance_id: u64) -> Option<NativeCall> {
    object::with_object(instance_id, |obj| obj.state().last_call.clone()).flatten()
}

pub fn is_alive(instance_id: u64) -> bool {
    object::is_alive(instance_id)
}

/// Reference count of a refcounted object; `None` if the object is gone or not refcounted.
pub fn reference_count(instance_id: u64) -> Option<i64> {
    object::with_object(instance_id, |obj| obj.is_refcounted().then(|| obj.refcount())).flatten()
}

pub fn live_object_count() -> usize {
    object::live_count()
}

pub fn interned_name_count() -> usize {
    strings::interned_count()
}

/// Engine class name of the object, as `get_class()` would report it.
pub fn class_of(instance_id: u64) -> Option<String> {
    object::class_name_of(instance_id)
}

/// All messages printed so far, in order.
pub fn messages() -> Vec<EngineMessage> {
    log::messages()
}

/// Whether a message of `kind` containing `needle` was printed.
pub fn has_message(kind: MessageKind, needle: &str) -> bool {
    log::messages()
        .iter()
        .any(|msg| msg.kind == kind && msg.text.contains(needle))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Driving

/// Adds the subtree at `root_id` to the scene: `_enter_tree` top-down, then `_ready` bottom-up, with their signals.
pub fn enter_tree(root_id: u64) {
    scene::enter_tree(root_id);
}

/// Runs one frame on the subtree at `root_id`.
pub fn process_frame(root_id: u64, delta: f64) {
    scene::process_frame(root_id, delta);
}

/// Asks a control whether it contains `point`. `None` if the object is not a live control or its override failed.
pub fn control_has_point(instance_id: u64, point: [f32; 2]) -> Option<bool> {
    scene::control_has_point(instance_id, point)
}

/// Calls virtual method `method` with float arguments, the way the engine calls notifications.
pub fn call_virtual(instance_id: u64, method: &str, args: &[f64]) -> VirtualCall {
    let args = args.iter().map(|&f| value::HostValue::Float(f)).collect::<Vec<_>>();
    let name = strings::intern(method);

    let outcome = object::with_object(instance_id, |obj| dispatch::call_virtual(obj, name, &args)).flatten();
    match outcome {
        None => VirtualCall::NotOverridden,
        Some(Ok(ret)) => VirtualCall::Returned(ret.stringify()),
        Some(Err(err)) => VirtualCall::Failed {
            error: err.error,
            argument: err.argument,
            expected: err.expected,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_names_are_interned() {
        let a = strings::intern("position");
        let b = strings::intern("position");
        let c = strings::intern("rotation");

        assert!(std::ptr::eq(a, b));
        assert!(!std::ptr::eq(a, c));
    }

    #[test]
    fn native_class_chain() {
        let item_list = classdb::find_class("ItemList").expect("ItemList registered");
        assert!(item_list.inherits(&natives::CANVAS_ITEM));
        assert!(item_list.inherits_name("Object"));
        assert!(!item_list.inherits(&natives::NODE2D));

        // Inherited lookup.
        assert!(item_list.find_method("set_visible").is_some());
        assert!(item_list.has_signal("child_entered_tree"));
    }

    #[test]
    fn refcounted_ids_carry_marker_bit() {
        let resource = object::construct_native(&natives::RESOURCE);
        let node = object::construct_native(&natives::NODE);

        let resource_id = unsafe { object::id_of_ptr(resource as *const c_void) }.unwrap();
        let node_id = unsafe { object::id_of_ptr(node as *const c_void) }.unwrap();
        assert_ne!(resource_id & object::REFCOUNTED_ID_BIT, 0);
        assert_eq!(node_id & object::REFCOUNTED_ID_BIT, 0);

        object::destroy(resource_id);
        object::destroy(node_id);
        assert!(!is_alive(resource_id));
        assert!(!is_alive(node_id));
    }

    #[test]
    fn destroying_parent_frees_children() {
        let parent = object::construct_native(&natives::NODE);
        let child = object::construct_native(&natives::NODE);
        let parent_id = unsafe { object::id_of_ptr(parent as *const c_void) }.unwrap();
        let child_id = unsafe { object::id_of_ptr(child as *const c_void) }.unwrap();

        let add_child = natives::NODE.find_method("add_child").unwrap();
        let obj = unsafe { object::from_ptr(parent as *const c_void) };
        (add_child.imp)(obj, &[value::HostValue::object(child_id)]).unwrap();

        assert_eq!(connection_count(parent_id, "child_entered_tree"), 0);
        object::destroy(parent_id);
        assert!(!is_alive(child_id));
    }
}
