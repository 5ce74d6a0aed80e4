/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Object arena: construction, lookup by instance ID, refcounting, extension instances and destruction.
//!
//! No lock is held while calling back into the extension. Object state is only ever locked for short, non-reentrant
//! sections.

use std::collections::HashMap;
use std::ffi::c_void;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicPtr, AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gdglue_ffi as sys;

use crate::callable::HostCallable;
use crate::classdb::{self, HostClass};
use crate::strings::{self, HostStringName};
use crate::value::HostValue;

/// Bit set in the instance ID of every refcounted object.
pub(crate) const REFCOUNTED_ID_BIT: u64 = 1 << 63;

pub(crate) struct HostObject {
    id: u64,
    class: AtomicPtr<HostClass>,
    refcount: AtomicI64,
    destroying: AtomicBool,
    state: Mutex<ObjectState>,
}

#[derive(Default)]
pub(crate) struct ObjectState {
    pub props: HashMap<&'static str, HostValue>,
    pub instance: Option<ExtensionInstance>,
    pub bindings: Vec<(usize, usize)>,
    pub connections: Vec<Connection>,
    pub children: Vec<u64>,
    pub parent: Option<u64>,
    pub last_call: Option<crate::NativeCall>,
}

#[derive(Copy, Clone)]
pub(crate) struct ExtensionInstance {
    pub class: &'static HostClass,
    pub instance: usize,
}

#[derive(Clone)]
pub(crate) struct Connection {
    pub signal: &'static HostStringName,
    pub callable: Arc<HostCallable>,
}

impl HostObject {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn class(&self) -> &'static HostClass {
        // SAFETY: classes are leaked and never freed.
        unsafe { &*self.class.load(Ordering::Acquire) }
    }

    pub fn is_refcounted(&self) -> bool {
        self.id & REFCOUNTED_ID_BIT != 0
    }

    pub fn refcount(&self) -> i64 {
        self.refcount.load(Ordering::Acquire)
    }

    pub fn state(&self) -> MutexGuard<'_, ObjectState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn prop(&self, name: &'static str) -> Option<HostValue> {
        self.state().props.get(name).cloned()
    }

    pub fn set_prop(&self, name: &'static str, value: HostValue) -> Option<HostValue> {
        // Returned so that the previous value is dropped after the lock is released.
        self.state().props.insert(name, value)
    }

    pub fn extension_instance(&self) -> Option<ExtensionInstance> {
        self.state().instance
    }

    /// Adds one reference. Returns the new count.
    pub fn reference(&self) -> i64 {
        self.refcount.fetch_add(1, Ordering::AcqRel) + 1
    }

    /// Removes one reference. Returns the new count.
    pub fn unreference(&self) -> i64 {
        self.refcount.fetch_sub(1, Ordering::AcqRel) - 1
    }
}

static OBJECTS: sys::Global<HashMap<u64, usize>> = sys::Global::default();
static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Allocates an object of native class `class`. Refcounted objects start with zero references.
pub(crate) fn construct_native(class: &'static HostClass) -> *mut HostObject {
    let mut id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    if class.is_refcounted() {
        id |= REFCOUNTED_ID_BIT;
    }

    let object = Box::new(HostObject {
        id,
        class: AtomicPtr::new(class as *const HostClass as *mut HostClass),
        refcount: AtomicI64::new(0),
        destroying: AtomicBool::new(false),
        state: Mutex::new(ObjectState::default()),
    });

    let ptr = Box::into_raw(object);
    OBJECTS.lock().insert(id, ptr as usize);
    ptr
}

pub(crate) fn ptr_of(id: u64) -> Option<sys::GDExtensionObjectPtr> {
    OBJECTS.lock().get(&id).map(|&ptr| ptr as sys::GDExtensionObjectPtr)
}

pub(crate) fn is_alive(id: u64) -> bool {
    OBJECTS.lock().contains_key(&id)
}

pub(crate) fn live_count() -> usize {
    OBJECTS.lock().len()
}

/// # Safety
/// `ptr` must be null or point to a live object.
pub(crate) unsafe fn id_of_ptr(ptr: sys::GDExtensionConstObjectPtr) -> Option<u64> {
    if ptr.is_null() {
        None
    } else {
        Some(unsafe { (*(ptr as *const HostObject)).id })
    }
}

/// # Safety
/// `ptr` must point to a live object.
pub(crate) unsafe fn from_ptr<'a>(ptr: sys::GDExtensionConstObjectPtr) -> &'a HostObject {
    unsafe { &*(ptr as *const HostObject) }
}

/// Runs `f` on the object with instance ID `id`, if it is alive.
pub(crate) fn with_object<R>(id: u64, f: impl FnOnce(&HostObject) -> R) -> Option<R> {
    let ptr = ptr_of(id)?;

    // SAFETY: objects are only deallocated by `destroy`, which removes them from the arena first.
    Some(f(unsafe { from_ptr(ptr) }))
}

pub(crate) fn class_name_of(id: u64) -> Option<String> {
    with_object(id, |obj| obj.class().name().to_string())
}

/// Takes a reference if the object is refcounted. Returns false if the object is gone.
pub(crate) fn retain(id: u64) -> bool {
    with_object(id, |obj| {
        if obj.is_refcounted() {
            obj.reference();
        }
    })
    .is_some()
}

/// Drops a reference taken by [`retain`], destroying the object at zero.
pub(crate) fn release(id: u64) {
    let last = with_object(id, |obj| obj.is_refcounted() && obj.unreference() == 0).unwrap_or(false);
    if last {
        destroy(id);
    }
}

/// Frees an object: the extension instance first, then children, then engine-side state.
pub(crate) fn destroy(id: u64) {
    let Some(ptr) = ptr_of(id) else {
        return;
    };

    // SAFETY: alive in the arena.
    let obj = unsafe { from_ptr(ptr) };
    if obj.destroying.swap(true, Ordering::AcqRel) {
        return;
    }

    if let Some(instance) = obj.extension_instance() {
        let info = instance.class.extension_info();
        if let Some(free) = info.and_then(|info| info.free_instance_func) {
            let userdata = info.map_or(std::ptr::null_mut(), |info| info.class_userdata);

            // SAFETY: the instance was handed to us by `object_set_instance` and is freed exactly once.
            unsafe { free(userdata, instance.instance as sys::GDExtensionClassInstancePtr) };
        }
    }

    let (children, parent) = {
        let mut state = obj.state();
        state.instance = None;
        (std::mem::take(&mut state.children), state.parent.take())
    };

    if let Some(parent) = parent {
        with_object(parent, |parent| parent.state().children.retain(|&child| child != id));
    }

    for child in children {
        with_object(child, |child| child.state().parent = None);
        destroy(child);
    }

    OBJECTS.lock().remove(&id);

    // State holds values and callables that may call back into the extension when dropped.
    let state = std::mem::take(&mut *obj.state());
    drop(state);

    // SAFETY: removed from the arena, no new references can be created.
    drop(unsafe { Box::from_raw(ptr as *mut HostObject) });
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub(crate) unsafe extern "C" fn object_destroy(p_o: sys::GDExtensionObjectPtr) {
    if let Some(id) = unsafe { id_of_ptr(p_o) } {
        destroy(id);
    }
}

pub(crate) unsafe extern "C" fn object_get_instance_from_id(
    p_instance_id: sys::GDObjectInstanceID,
) -> sys::GDExtensionObjectPtr {
    ptr_of(p_instance_id).unwrap_or(std::ptr::null_mut())
}

pub(crate) unsafe extern "C" fn object_get_instance_id(p_object: sys::GDExtensionConstObjectPtr) -> sys::GDObjectInstanceID {
    unsafe { id_of_ptr(p_object) }.unwrap_or(0)
}

pub(crate) unsafe extern "C" fn object_set_instance(
    p_o: sys::GDExtensionObjectPtr,
    p_classname: sys::GDExtensionConstStringNamePtr,
    p_instance: sys::GDExtensionClassInstancePtr,
) {
    let obj = unsafe { from_ptr(p_o) };
    let class_name = unsafe { strings::read_string_name(p_classname) };

    let Some(class) = classdb::find_class(class_name.as_str()) else {
        crate::log::engine_error(&format!("object_set_instance: unknown class `{}`", class_name.as_str()));
        return;
    };

    obj.class.store(class as *const HostClass as *mut HostClass, Ordering::Release);
    obj.state().instance = Some(ExtensionInstance {
        class,
        instance: p_instance as usize,
    });
}

pub(crate) unsafe extern "C" fn object_get_instance_binding(p_o: sys::GDExtensionObjectPtr, p_token: *mut c_void) -> *mut c_void {
    let obj = unsafe { from_ptr(p_o) };
    let token = p_token as usize;

    let state = obj.state();
    state
        .bindings
        .iter()
        .find(|(t, _)| *t == token)
        .map_or(std::ptr::null_mut(), |(_, binding)| *binding as *mut c_void)
}

pub(crate) unsafe extern "C" fn object_set_instance_binding(
    p_o: sys::GDExtensionObjectPtr,
    p_token: *mut c_void,
    p_binding: *mut c_void,
) {
    let obj = unsafe { from_ptr(p_o) };
    let (token, binding) = (p_token as usize, p_binding as usize);

    let mut state = obj.state();
    match state.bindings.iter_mut().find(|(t, _)| *t == token) {
        Some(entry) => entry.1 = binding,
        None => state.bindings.push((token, binding)),
    }
}

pub(crate) unsafe extern "C" fn object_cast_to(
    p_object: sys::GDExtensionConstObjectPtr,
    p_class_tag: *mut c_void,
) -> sys::GDExtensionObjectPtr {
    if p_object.is_null() || p_class_tag.is_null() {
        return std::ptr::null_mut();
    }

    let obj = unsafe { from_ptr(p_object) };
    let target = unsafe { &*(p_class_tag as *const HostClass) };

    if obj.class().inherits(target) {
        sys::force_mut_ptr(p_object)
    } else {
        std::ptr::null_mut()
    }
}
