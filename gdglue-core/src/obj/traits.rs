/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::meta::ClassName;
use crate::obj::{bounds, Base, Bounds, Gd};
use crate::registry::names::NameTable;
use crate::registry::ClassBuilder;
use crate::sys;

/// Makes `T` eligible to be managed by the engine and stored in [`Gd<T>`][crate::obj::Gd] pointers.
///
/// Implemented for every engine class by the generator, and for user classes by [`godot_class!`](crate::godot_class).
pub trait GodotClass: Bounds + 'static
where
    Self: Sized,
{
    /// The immediate superclass of `T`. This is always an engine class.
    type Base: GodotClass; // not EngineClass because it can be NoBase

    /// Globally unique class ID, linked to the name under which the class is registered in the engine.
    fn class_name() -> ClassName;

    /// Interned property, method and signal names of this class and all its ancestors.
    fn name_table() -> &'static NameTable;

    /// Returns whether `Self` inherits from `Base`.
    ///
    /// This is reflexive, i.e `Self` inherits from itself.
    ///
    /// See also [`Inherits`] for a trait bound.
    fn inherits<Base: GodotClass>() -> bool {
        if Self::class_name() == Base::class_name() {
            true
        } else if Self::Base::class_name() == <NoBase>::class_name() {
            false
        } else {
            Self::Base::inherits::<Base>()
        }
    }
}

/// Type representing the absence of a base class, at the root of the hierarchy.
///
/// `NoBase` is used as the base class for exactly one class: [`Object`][crate::classes::Object].
///
/// This is an enum without any variants, as we should never construct an instance of this class.
pub enum NoBase {}

impl GodotClass for NoBase {
    type Base = NoBase;

    fn class_name() -> ClassName {
        ClassName::none()
    }

    fn name_table() -> &'static NameTable {
        NameTable::empty()
    }
}

unsafe impl Bounds for NoBase {
    type Memory = bounds::MemManual;
    type DynMemory = bounds::MemManual;
    type Declarer = bounds::DeclEngine;
}

/// Non-strict inheritance relationship in the engine class hierarchy.
///
/// `Derived: Inherits<Base>` means that either `Derived` is a subclass of `Base`, or the class `Base` itself (hence "non-strict").
///
/// This trait is automatically implemented for all engine classes and user-defined classes declared with `godot_class!`.
/// Inheritance is transitive across indirect base classes: `Node3D` implements `Inherits<Node>` and `Inherits<Object>`.
///
/// # Safety
///
/// This trait must only be implemented for subclasses of `Base`.
///
/// Importantly, this means it is always safe to upcast a value of type `Gd<Self>` to `Gd<Base>`.
pub unsafe trait Inherits<Base: GodotClass>: GodotClass {}

// SAFETY: Every class is a subclass of itself.
unsafe impl<T: GodotClass> Inherits<T> for T {}

/// Implemented for all engine-provided classes.
pub trait EngineClass: GodotClass {
    fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr;
    fn as_type_ptr(&self) -> sys::GDExtensionTypePtr;
}

/// Implemented for all user-defined classes.
///
/// `init` constructs the Rust side of a new instance, once the engine has allocated its base object. `register` is run once
/// during [`register_class()`](crate::registry::register_class) and declares the overridden virtual methods.
pub trait UserClass: GodotClass + Bounds<Declarer = bounds::DeclUser> {
    /// Creates the Rust instance, given a handle to its engine base object.
    fn init(base: Base<Self::Base>) -> Self;

    /// Declares virtual method overrides. The default declares none.
    fn register(class: &mut ClassBuilder<Self>) {
        let _ = class;
    }
}

/// Classes that carry a collection of typed signals, accessible through [`Gd::signals()`].
///
/// Engine classes implement this in generated code. User classes reuse the collection of their base.
pub trait WithSignals: GodotClass + Inherits<crate::classes::Object> {
    /// The struct listing all signals of this class.
    type SignalCollection;

    #[doc(hidden)]
    fn __signals_from_object(object: Gd<crate::classes::Object>) -> Self::SignalCollection;
}

/// Extension trait for all reference-counted classes.
pub trait NewGd: GodotClass {
    /// Return a new, ref-counted `Gd` containing a default-constructed instance.
    ///
    /// `MyClass::new_gd()` is equivalent to `Gd::<MyClass>::default()`.
    fn new_gd() -> Gd<Self>;
}

impl<T> NewGd for T
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    fn new_gd() -> Gd<Self> {
        Gd::default()
    }
}

/// Extension trait for all manually managed classes.
pub trait NewAlloc: GodotClass {
    /// Return a new, manually-managed `Gd` containing a default-constructed instance.
    ///
    /// The result must be manually managed, e.g. by attaching it to the scene tree or calling `free()` after usage.
    /// Failure to do so will result in memory leaks.
    #[must_use]
    fn new_alloc() -> Gd<Self>;
}

impl<T> NewAlloc for T
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemManual>,
{
    fn new_alloc() -> Gd<Self> {
        T::__godot_default()
    }
}

/// Capability traits, providing dedicated functionalities for classes.
pub mod cap {
    use super::*;

    /// Trait for all classes that are default-constructible by the engine.
    ///
    /// Implemented for instantiable engine classes and for all user classes. You can use it as a bound, but typically you'd use
    /// it indirectly through [`NewGd`] or [`NewAlloc`].
    pub trait GodotDefault: GodotClass {
        /// Provides a default smart pointer instance.
        #[doc(hidden)]
        fn __godot_default() -> Gd<Self>;
    }
}
