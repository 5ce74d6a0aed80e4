/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Class database: native classes with their method binds, extension class registration and object construction.

use std::collections::HashMap;
use std::ffi::c_void;

use gdglue_ffi as sys;

use crate::object::{self, HostObject};
use crate::strings;
use crate::value::{HostValue, Ty};
use crate::{log, natives};

pub(crate) type NativeFn = fn(&HostObject, &[HostValue]) -> Result<HostValue, sys::GDExtensionCallError>;

/// One native method. Its address is the method bind handed to the extension.
pub(crate) struct HostMethod {
    pub name: &'static str,
    pub hash: i64,
    pub args: &'static [Ty],
    pub ret: Ty,
    pub vararg: bool,
    pub imp: NativeFn,
}

impl HostMethod {
    pub const fn new(name: &'static str, hash: i64, args: &'static [Ty], ret: Ty, imp: NativeFn) -> Self {
        Self {
            name,
            hash,
            args,
            ret,
            vararg: false,
            imp,
        }
    }

    pub const fn vararg(name: &'static str, hash: i64, args: &'static [Ty], ret: Ty, imp: NativeFn) -> Self {
        Self {
            name,
            hash,
            args,
            ret,
            vararg: true,
            imp,
        }
    }
}

pub(crate) struct HostClass {
    name: &'static str,
    parent: Option<&'static HostClass>,
    refcounted: bool,
    methods: &'static [HostMethod],
    signals: &'static [&'static str],
    extension: Option<sys::GDExtensionClassCreationInfo>,
}

// SAFETY: classes are immutable after registration; the creation info only holds extension-owned function pointers and
// userdata that the extension declares thread-safe.
unsafe impl Send for HostClass {}
// SAFETY: see `Send` impl.
unsafe impl Sync for HostClass {}

impl HostClass {
    pub const fn native(
        name: &'static str,
        parent: Option<&'static HostClass>,
        refcounted: bool,
        methods: &'static [HostMethod],
        signals: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            parent,
            refcounted,
            methods,
            signals,
            extension: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn parent(&self) -> Option<&'static HostClass> {
        self.parent
    }

    pub fn is_refcounted(&self) -> bool {
        self.refcounted
    }

    pub fn extension_info(&self) -> Option<&sys::GDExtensionClassCreationInfo> {
        self.extension.as_ref()
    }

    /// This class followed by all its ancestors.
    pub fn chain(&'static self) -> impl Iterator<Item = &'static HostClass> {
        std::iter::successors(Some(self), |class| class.parent)
    }

    pub fn inherits(&'static self, ancestor: &HostClass) -> bool {
        self.chain().any(|class| std::ptr::eq(class, ancestor))
    }

    pub fn inherits_name(&'static self, ancestor: &str) -> bool {
        self.chain().any(|class| class.name == ancestor)
    }

    /// Nearest native class in the chain.
    pub fn native_base(&'static self) -> &'static HostClass {
        self.chain().find(|class| class.extension.is_none()).unwrap_or(self)
    }

    pub fn find_method(&'static self, name: &str) -> Option<&'static HostMethod> {
        self.chain().find_map(|class| class.methods.iter().find(|m| m.name == name))
    }

    pub fn has_signal(&'static self, name: &str) -> bool {
        self.chain().any(|class| class.signals.contains(&name))
    }
}

static EXTENSION_CLASSES: sys::Global<HashMap<String, &'static HostClass>> = sys::Global::default();
static METHOD_BIND_LOOKUPS: sys::Global<HashMap<(String, String), usize>> = sys::Global::default();

pub(crate) fn find_class(name: &str) -> Option<&'static HostClass> {
    natives::CLASSES
        .iter()
        .copied()
        .find(|class| class.name == name)
        .or_else(|| EXTENSION_CLASSES.lock().get(name).copied())
}

pub(crate) fn method_bind_lookups(class_name: &str, method_name: &str) -> usize {
    let key = (class_name.to_string(), method_name.to_string());
    METHOD_BIND_LOOKUPS.lock().get(&key).copied().unwrap_or(0)
}

/// Constructs an object of `class`, letting the extension create its instance for extension classes.
pub(crate) fn construct(class: &'static HostClass) -> sys::GDExtensionObjectPtr {
    match class.extension_info() {
        None => object::construct_native(class) as sys::GDExtensionObjectPtr,
        Some(info) => {
            if info.is_abstract != 0 || info.is_virtual != 0 {
                log::engine_error(&format!("cannot instantiate abstract class `{}`", class.name));
                return std::ptr::null_mut();
            }

            match info.create_instance_func {
                // SAFETY: registered by the extension together with this userdata.
                Some(create) => unsafe { create(info.class_userdata) },
                None => std::ptr::null_mut(),
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Interface functions

pub(crate) unsafe extern "C" fn classdb_construct_object(
    p_classname: sys::GDExtensionConstStringNamePtr,
) -> sys::GDExtensionObjectPtr {
    let name = unsafe { strings::read_string_name(p_classname) };

    match find_class(name.as_str()) {
        Some(class) => construct(class),
        None => {
            log::engine_error(&format!("classdb_construct_object: unknown class `{}`", name.as_str()));
            std::ptr::null_mut()
        }
    }
}

pub(crate) unsafe extern "C" fn classdb_get_method_bind(
    p_classname: sys::GDExtensionConstStringNamePtr,
    p_methodname: sys::GDExtensionConstStringNamePtr,
    p_hash: sys::GDExtensionInt,
) -> sys::GDExtensionMethodBindPtr {
    let class_name = unsafe { strings::read_string_name(p_classname) }.as_str();
    let method_name = unsafe { strings::read_string_name(p_methodname) }.as_str();

    *METHOD_BIND_LOOKUPS
        .lock()
        .entry((class_name.to_string(), method_name.to_string()))
        .or_insert(0) += 1;

    let Some(method) = find_class(class_name).and_then(|class| class.find_method(method_name)) else {
        log::engine_error(&format!("method bind not found: {class_name}::{method_name}"));
        return std::ptr::null();
    };

    if method.hash != p_hash {
        log::engine_error(&format!(
            "method bind hash mismatch for {class_name}::{method_name}: requested {p_hash}, engine has {}",
            method.hash
        ));
        return std::ptr::null();
    }

    method as *const HostMethod as sys::GDExtensionMethodBindPtr
}

pub(crate) unsafe extern "C" fn classdb_get_class_tag(p_classname: sys::GDExtensionConstStringNamePtr) -> *mut c_void {
    let name = unsafe { strings::read_string_name(p_classname) };

    find_class(name.as_str()).map_or(std::ptr::null_mut(), |class| class as *const HostClass as *mut c_void)
}

pub(crate) unsafe extern "C" fn classdb_register_extension_class(
    _p_library: sys::GDExtensionClassLibraryPtr,
    p_class_name: sys::GDExtensionConstStringNamePtr,
    p_parent_class_name: sys::GDExtensionConstStringNamePtr,
    p_extension_funcs: *const sys::GDExtensionClassCreationInfo,
) {
    let name = unsafe { strings::read_string_name(p_class_name) }.as_str();
    let parent_name = unsafe { strings::read_string_name(p_parent_class_name) }.as_str();

    let Some(parent) = find_class(parent_name) else {
        log::engine_error(&format!("cannot register `{name}`: unknown base class `{parent_name}`"));
        return;
    };

    let mut classes = EXTENSION_CLASSES.lock();
    if classes.contains_key(name) || natives::CLASSES.iter().any(|class| class.name == name) {
        log::engine_error(&format!("class `{name}` is already registered"));
        return;
    }

    let class: &'static HostClass = Box::leak(Box::new(HostClass {
        name: Box::leak(name.to_string().into_boxed_str()),
        parent: Some(parent),
        refcounted: parent.refcounted,
        methods: &[],
        signals: &[],
        extension: Some(unsafe { *p_extension_funcs }),
    }));

    classes.insert(name.to_string(), class);
}

pub(crate) unsafe extern "C" fn classdb_unregister_extension_class(
    _p_library: sys::GDExtensionClassLibraryPtr,
    p_class_name: sys::GDExtensionConstStringNamePtr,
) {
    let name = unsafe { strings::read_string_name(p_class_name) }.as_str();

    // Leaked class data stays valid for objects that outlive the registration.
    if EXTENSION_CLASSES.lock().remove(name).is_none() {
        log::engine_error(&format!("cannot unregister unknown class `{name}`"));
    }
}
