/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Process-wide storage of the engine binding.
//!
//! Set once when the engine loads the extension, read by every call into the engine. Reads are a single atomic load, so
//! the binding can be used from any thread; whether the engine call itself is thread-safe is the engine's business.

use std::sync::atomic::{AtomicPtr, Ordering};

use crate as sys;
use crate::{BuiltinLifecycleTable, GDExtensionClassLibraryPtr, GDExtensionInterface};

/// Runtime configuration chosen by the extension at load time.
#[derive(Clone, Debug, Default)]
pub struct BindingConfig {
    /// Whether the engine runs the editor. Only informational for this layer.
    pub is_editor: bool,
}

pub(crate) struct GodotBinding {
    interface: GDExtensionInterface,
    library: ClassLibraryPtr,
    builtin_lifecycle: BuiltinLifecycleTable,
    config: BindingConfig,
}

/// Newtype so the library pointer can live in a `static`.
struct ClassLibraryPtr(GDExtensionClassLibraryPtr);

// SAFETY: the pointer is an opaque token handed back to the engine, never dereferenced on the Rust side.
unsafe impl Sync for ClassLibraryPtr {}
// SAFETY: see `Sync` impl.
unsafe impl Send for ClassLibraryPtr {}

static BINDING: AtomicPtr<GodotBinding> = AtomicPtr::new(std::ptr::null_mut());

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Lifecycle

/// Stores the engine interface and loads the builtin lifecycle table.
///
/// # Safety
/// `interface` must point to a valid interface table that outlives the binding.
///
/// # Panics
/// If the binding is already initialized, or the engine lacks a builtin constructor.
pub unsafe fn initialize(
    interface: *const GDExtensionInterface,
    library: GDExtensionClassLibraryPtr,
    config: BindingConfig,
) {
    assert!(!interface.is_null(), "engine passed null interface table");

    // SAFETY: non-null, validity guaranteed by caller.
    let interface = unsafe { *interface };
    let builtin_lifecycle = unsafe { BuiltinLifecycleTable::load(&interface) };

    let binding = Box::into_raw(Box::new(GodotBinding {
        interface,
        library: ClassLibraryPtr(library),
        builtin_lifecycle,
        config,
    }));

    if BINDING
        .compare_exchange(std::ptr::null_mut(), binding, Ordering::AcqRel, Ordering::Acquire)
        .is_err()
    {
        // SAFETY: `binding` was never published.
        drop(unsafe { Box::from_raw(binding) });
        panic!("engine binding must only be initialized once");
    }

    let version = unsafe { std::ffi::CStr::from_ptr(interface.version_string) };
    sys::out!(
        "Initialized engine binding: {} ({}.{}.{})",
        version.to_string_lossy(),
        interface.version_major,
        interface.version_minor,
        interface.version_patch
    );
}

/// Detaches the binding. Subsequent engine calls panic until [`initialize`] is called again.
///
/// The binding itself is leaked: `'static` references handed out earlier stay valid.
///
/// # Safety
/// No engine calls may be in flight on other threads.
pub unsafe fn deinitialize() {
    let previous = BINDING.swap(std::ptr::null_mut(), Ordering::AcqRel);
    if !previous.is_null() {
        sys::out!("Detached engine binding");
    }
}

pub fn is_initialized() -> bool {
    !BINDING.load(Ordering::Acquire).is_null()
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Access

#[inline]
fn get_binding() -> &'static GodotBinding {
    let ptr = BINDING.load(Ordering::Acquire);
    if ptr.is_null() {
        not_initialized();
    }

    // SAFETY: published bindings are never freed.
    unsafe { &*ptr }
}

#[cold]
fn not_initialized() -> ! {
    panic!("Godot engine not available; make sure you are not calling it from unit/doc tests")
}

#[inline]
pub fn get_interface() -> &'static GDExtensionInterface {
    &get_binding().interface
}

#[inline]
pub fn get_library() -> GDExtensionClassLibraryPtr {
    get_binding().library.0
}

#[inline]
pub fn builtin_lifecycle_api() -> &'static BuiltinLifecycleTable {
    &get_binding().builtin_lifecycle
}

pub fn config() -> &'static BindingConfig {
    &get_binding().config
}
