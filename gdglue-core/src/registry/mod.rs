/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Registration of user classes with the engine, and the tables that dispatch the engine's callbacks.

pub mod callbacks;
pub mod names;
pub mod signal;

mod declare;
mod virtuals;

pub(crate) use virtuals::VirtualTable;

use std::any::type_name;
use std::collections::HashMap;
use std::ptr;

use sys::Global;

use crate::meta::{ClassName, InParamTuple, ToGodot};
use crate::obj::{GodotClass, Inherits, UserClass};
use crate::sys;
use virtuals::VirtualHandler;

/// Marker type of one overridable engine method, e.g. `INode::Process` for `Node::_process`.
///
/// Generated for every virtual method in the API description. Pass it to [`ClassBuilder::virtual_method()`].
pub trait VirtualMethod {
    /// Engine class declaring the method.
    type Owner: GodotClass;

    /// Parameters as received from the engine.
    type Params: InParamTuple;

    /// Return type; `()` for methods without return value.
    type Ret: ToGodot;

    /// Engine name, including the leading underscore.
    const NAME: &'static str;
}

/// Collects the virtual method overrides of a user class, inside [`UserClass::register()`].
pub struct ClassBuilder<T: UserClass> {
    overrides: HashMap<&'static str, VirtualHandler<T>>,
}

impl<T: UserClass> ClassBuilder<T> {
    fn new() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Overrides the engine virtual method `V` with `f`.
    ///
    /// `V` must be declared by a base class of `T`; overriding a method of an unrelated class does not compile.
    ///
    /// # Panics
    /// If `V` has already been overridden for this class.
    pub fn virtual_method<V, F>(&mut self, f: F) -> &mut Self
    where
        V: VirtualMethod,
        T::Base: Inherits<V::Owner>,
        F: Fn(&mut T, V::Params) -> V::Ret + Send + Sync + 'static,
    {
        let handler = virtuals::make_handler::<T, V, F>(f);

        let previous = self.overrides.insert(V::NAME, handler);
        assert!(
            previous.is_none(),
            "virtual method {}::{} overridden twice in class {}",
            type_name::<V::Owner>(),
            V::NAME,
            T::class_name()
        );

        self
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Registration

static LOADED_CLASSES: Global<Vec<ClassName>> = Global::default();

/// Registers the user class `T` with the engine.
///
/// Runs [`UserClass::register()`] once, builds the flattened virtual table of `T` and hands the engine the callbacks for
/// creation, destruction and virtual dispatch. Usually called from [`ExtensionLibrary::on_level_init()`][crate::init::ExtensionLibrary::on_level_init].
///
/// # Panics
/// If an override does not name a virtual method of the base class chain.
pub fn register_class<T: UserClass>() {
    sys::out!("Register class {} <{}>", T::class_name(), type_name::<T>());

    let mut builder = ClassBuilder::<T>::new();
    T::register(&mut builder);

    // Shared by all instances, lives until the process ends.
    let table: &'static VirtualTable<T> = Box::leak(Box::new(VirtualTable::build(T::name_table(), builder.overrides)));

    let info = sys::GDExtensionClassCreationInfo {
        is_virtual: sys::conv_bool(false),
        is_abstract: sys::conv_bool(false),
        create_instance_func: Some(callbacks::create::<T>),
        free_instance_func: Some(callbacks::free::<T>),
        has_virtual_func: Some(callbacks::has_virtual::<T>),
        call_virtual_func: Some(callbacks::call_virtual::<T>),
        class_userdata: ptr::from_ref(table) as *mut std::ffi::c_void,
    };

    let class_name = T::class_name();
    let base_name = <T::Base as GodotClass>::class_name();

    // SAFETY: names are interned for the whole process; the engine copies the creation info.
    unsafe {
        sys::interface_fn!(classdb_register_extension_class)(
            sys::get_library(),
            class_name.string_sys(),
            base_name.string_sys(),
            &info,
        );
    }

    LOADED_CLASSES.lock().push(class_name);
}

/// Unregisters all classes registered through [`register_class()`], in reverse order.
pub fn unregister_classes() {
    let classes = std::mem::take(&mut *LOADED_CLASSES.lock());

    for class_name in classes.into_iter().rev() {
        sys::out!("Unregister class {class_name}");

        // SAFETY: class was registered by this library.
        unsafe {
            sys::interface_fn!(classdb_unregister_extension_class)(sys::get_library(), class_name.string_sys());
        }
    }
}
