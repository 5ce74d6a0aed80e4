/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::ops::{Deref, DerefMut};

use crate::meta::error::{ConvertError, ErrorKind, FromFfiError};
use crate::meta::{CallContext, FromGodot, GodotConvert, GodotType, ToGodot};
use crate::obj::bounds::{Declarer, DynMemory as _};
use crate::obj::{bounds, cap, Bounds, GdMut, GdRef, GodotClass, Inherits, InstanceId, RawGd, UserClass, WithSignals};
use crate::sys;

/// Smart pointer to objects owned by the engine.
///
/// This smart pointer can only hold _objects_ in the engine sense: instances of `Object` and all derived classes.
/// It does **not** hold builtin types (`Vector3`, `Color`, `i64`).
///
/// `Gd<T>` never holds null objects. If you need nullability, use `Option<Gd<T>>`.
///
/// # Memory management
///
/// This smart pointer behaves differently depending on `T`'s associated types, see [`GodotClass`] for their documentation.
/// In particular, the memory management strategy is fully dependent on `T`:
///
/// - **Reference-counted**<br>
///   Objects of type `RefCounted` or inherited from it are **reference-counted**. This means that every time a smart pointer is
///   shared using [`Clone::clone()`], the reference counter is incremented, and every time one is dropped, it is decremented.
///   This ensures that the last reference (either in Rust or the engine) will deallocate the object.
///
/// - **Manual**<br>
///   Objects inheriting from `Object` which are not `RefCounted` (or inherited) are **manually-managed**.
///   Their destructor is not automatically called (unless they are part of the scene tree). Creating a `Gd<T>` means that
///   you are responsible for explicitly deallocating such objects using [`free()`][Self::free].
///
/// - **Dynamic**<br>
///   For `T=Object`, the memory strategy is determined **dynamically**. Due to polymorphism, a `Gd<Object>` can point to either
///   reference-counted or manually-managed types at runtime. The behavior corresponds to one of the two previous points.
///   Note that if the dynamic type is also `Object`, the memory is manually-managed.
///
/// # Liveness
///
/// Every method call through a `Gd<T>` first looks up the cached instance ID in the engine. Calls on a freed object panic
/// with a descriptive message instead of reaching the engine. Use [`is_instance_valid()`][Self::is_instance_valid] to test.
#[repr(C)] // must be layout compatible with engine classes
pub struct Gd<T: GodotClass> {
    // The first field of RawGd is the object pointer; its address is the `Object**` type pointer the engine expects.
    pub(crate) raw: RawGd<T>,
}

/// Target type of `Deref`: the class itself for engine classes, the engine base for user classes.
pub type GdDerefTarget<T> = <<T as Bounds>::Declarer as Declarer>::DerefTarget<T>;

impl<T: GodotClass> Gd<T> {
    /// Looks up the given instance ID and returns the associated object, if possible.
    ///
    /// If no such instance ID is registered, or if the dynamic type of the object behind that instance ID
    /// is not compatible with `T`, then `None` is returned.
    pub fn try_from_instance_id(instance_id: InstanceId) -> Option<Self> {
        // SAFETY: any ID may be passed; unknown IDs yield null.
        let ptr = unsafe { sys::interface_fn!(object_get_instance_from_id)(instance_id.to_u64()) };
        if ptr.is_null() {
            return None;
        }

        // SAFETY: ptr is a live object, just handed out by the engine.
        let untyped = unsafe { Gd::<crate::classes::Object>::from_obj_sys(ptr) };
        untyped.owned_cast().ok()
    }

    /// ⚠️ Looks up the given instance ID and returns the associated object.
    ///
    /// # Panics
    /// If no such instance ID is registered, or if the dynamic type of the object behind that instance ID
    /// is not compatible with `T`.
    pub fn from_instance_id(instance_id: InstanceId) -> Self {
        Self::try_from_instance_id(instance_id).unwrap_or_else(|| {
            panic!(
                "Instance ID {} does not belong to a valid object of class '{}'",
                instance_id,
                T::class_name()
            )
        })
    }

    /// Returns the instance ID of this object, or panics if the object is dead.
    ///
    /// Equivalent to [`instance_id_unchecked()`][Self::instance_id_unchecked], but with validity check.
    pub fn instance_id(&self) -> InstanceId {
        self.raw.check_rtti("instance_id");
        self.instance_id_unchecked()
    }

    /// Returns the last known, possibly invalid instance ID of this object.
    ///
    /// This function does not check that the returned instance ID points to a valid instance!
    /// Unless performance is a problem, use [`instance_id()`][Self::instance_id] instead.
    pub fn instance_id_unchecked(&self) -> InstanceId {
        // SAFETY: a `Gd` can only be created from a non-null `RawGd`, meaning `raw.instance_id_unchecked()` is always `Some`.
        unsafe { self.raw.instance_id_unchecked().unwrap_unchecked() }
    }

    /// Checks if this smart pointer points to a live object (read description!).
    ///
    /// Using this method is often indicative of bad design -- you should dispose of your pointers once an object is
    /// destroyed. However, this method exists because sometimes the engine destroys objects you still hold, e.g. nodes
    /// removed from the tree.
    ///
    /// This method tells you whether the object is still alive. Note that it does not guarantee that the object stays alive
    /// until the next call.
    pub fn is_instance_valid(&self) -> bool {
        self.raw.is_instance_valid()
    }

    /// **Upcast:** convert into a smart pointer to a base class. Always succeeds.
    ///
    /// Moves out of this value. If you want to create _another_ smart pointer instance,
    /// use this idiom:
    /// ```no_run
    /// # use gdglue::prelude::*;
    /// let obj: Gd<Node2D> = Node2D::new_alloc();
    /// let base = obj.clone().upcast::<Node>();
    /// ```
    pub fn upcast<Base>(self) -> Gd<Base>
    where
        Base: GodotClass,
        T: Inherits<Base>,
    {
        Gd::from_raw(self.into_raw().upcast_owned())
    }

    /// Equivalent to [`upcast::<Object>()`][Self::upcast], but without bounds.
    pub(crate) fn upcast_object(self) -> Gd<crate::classes::Object> {
        Gd::from_raw(self.into_raw().upcast_owned())
    }

    /// **Upcast shared-ref:** access this object as a shared reference to a base class.
    ///
    /// This is semantically equivalent to multiple applications of [`Self::deref()`]. Not really useful on its own, but combined with
    /// generic programming:
    /// ```no_run
    /// # use gdglue::prelude::*;
    /// fn print_node_name<T>(node: &Gd<T>)
    /// where
    ///     T: Inherits<Node>,
    /// {
    ///     println!("Node name: {}", node.upcast_ref().get_name());
    /// }
    /// ```
    pub fn upcast_ref<Base>(&self) -> &Base
    where
        Base: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
        T: Inherits<Base>,
    {
        // SAFETY: `Base` is guaranteed to be an engine base class of `T` because of the generic bounds.
        unsafe { self.raw.as_upcast_ref::<Base>() }
    }

    /// **Upcast exclusive-ref:** access this object as an exclusive reference to a base class.
    ///
    /// This is semantically equivalent to multiple applications of [`Self::deref_mut()`].
    pub fn upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
        T: Inherits<Base>,
    {
        // SAFETY: `Base` is guaranteed to be an engine base class of `T` because of the generic bounds.
        unsafe { self.raw.as_upcast_mut::<Base>() }
    }

    /// **Downcast:** try to convert into a smart pointer to a derived class.
    ///
    /// If `T`'s dynamic type is not `Derived` or one of its subclasses, `Err(self)` is returned, meaning you can reuse the original
    /// object for further casts. Otherwise, `Ok` is returned and the ownership is moved to the returned value.
    pub fn try_cast<Derived>(self) -> Result<Gd<Derived>, Self>
    where
        Derived: Inherits<T>,
    {
        self.owned_cast()
    }

    /// ⚠️ **Downcast:** convert into a smart pointer to a derived class. Panics on error.
    ///
    /// # Panics
    /// If the class' dynamic type is not `Derived` or one of its subclasses. Use [`Self::try_cast()`] if you want to check the result.
    pub fn cast<Derived>(self) -> Gd<Derived>
    where
        Derived: Inherits<T>,
    {
        self.owned_cast().unwrap_or_else(|from_obj| {
            panic!(
                "downcast from {from} to {to} failed; instance {from_obj:?}",
                from = T::class_name(),
                to = Derived::class_name(),
            )
        })
    }

    /// Returns `Ok(cast_obj)` on success, `Err(self)` on error.
    fn owned_cast<U>(self) -> Result<Gd<U>, Self>
    where
        U: GodotClass,
    {
        self.into_raw().owned_cast().map(Gd::from_raw).map_err(Gd::from_raw)
    }

    /// Typed signals of this object, for connecting handlers and emitting.
    pub fn signals(&self) -> T::SignalCollection
    where
        T: WithSignals,
    {
        T::__signals_from_object(self.clone().upcast_object())
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Internal construction

    /// Wraps a non-null raw pointer. Panics if null.
    fn from_raw(raw: RawGd<T>) -> Self {
        assert!(!raw.is_null(), "Gd<{}> cannot be null", T::class_name());
        Self { raw }
    }

    fn into_raw(self) -> RawGd<T> {
        // Move the field out without running Gd's (field) destructor on it twice.
        let this = std::mem::ManuallyDrop::new(self);

        // SAFETY: `this` is never used again, and its destructor does not run.
        unsafe { std::ptr::read(&this.raw) }
    }

    /// Takes a reference to the object behind `ptr`, incrementing its reference count if applicable.
    ///
    /// # Safety
    /// `ptr` must be a live object pointer of class `T` or derived.
    ///
    /// # Panics
    /// If `ptr` is null.
    #[doc(hidden)]
    pub unsafe fn from_obj_sys(ptr: sys::GDExtensionObjectPtr) -> Self {
        // SAFETY: forwarded to caller.
        Self::from_raw(unsafe { RawGd::from_obj_sys(ptr) })
    }

    /// Wraps the object behind `ptr` without touching its reference count.
    ///
    /// # Safety
    /// `ptr` must be a live object pointer of class `T` or derived, and the returned value must not outlive its owner.
    #[doc(hidden)]
    pub unsafe fn from_obj_sys_weak(ptr: sys::GDExtensionObjectPtr) -> Self {
        // SAFETY: forwarded to caller.
        Self::from_raw(unsafe { RawGd::from_obj_sys_weak(ptr) })
    }

    #[doc(hidden)]
    pub fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.raw.obj_sys()
    }
}

impl<T> Gd<T>
where
    T: GodotClass + Bounds<Memory = bounds::MemManual>,
{
    /// Destroy the manually-managed object.
    ///
    /// This is only allowed for objects which are not reference-counted. Invoking this on a freed object is an error.
    ///
    /// # Panics
    /// When the referred-to object has already been destroyed, or when this is invoked on a `Gd<Object>` whose dynamic type
    /// is reference-counted.
    pub fn free(self) {
        // Runtime check in case of T=Object, no-op otherwise.
        let ref_counted = T::DynMemory::is_ref_counted(&self.raw);
        assert_ne!(
            ref_counted,
            Some(true),
            "called free() on Gd<Object> which points to a RefCounted dynamic type; free() only supported for manually managed types\n\
            object: {self:?}"
        );

        assert!(self.is_instance_valid(), "called free() on already destroyed object");

        let call_ctx = CallContext::gd::<T>("free");
        self.raw.check_dynamic_type(&call_ctx);

        // SAFETY: object alive as checked. This also frees the attached Rust instance, if any.
        unsafe {
            sys::interface_fn!(object_destroy)(self.raw.obj_sys());
        }

        std::mem::forget(self);
    }
}

impl<T> Gd<T>
where
    T: UserClass,
{
    /// Hands out a guard for a shared borrow, through which the user instance can be read.
    ///
    /// # Panics
    /// If another `Gd` smart pointer pointing to the same Rust instance has a live `GdMut` guard bound.
    pub fn bind(&self) -> GdRef<'_, T> {
        self.raw.bind()
    }

    /// Hands out a guard for an exclusive borrow, through which the user instance can be read and written.
    ///
    /// # Panics
    /// If another `Gd` smart pointer pointing to the same Rust instance has a live `GdRef` or `GdMut` guard bound.
    pub fn bind_mut(&mut self) -> GdMut<'_, T> {
        self.raw.bind_mut()
    }
}

/// Dereferences to the engine class itself, or to the engine base of a user class.
impl<T: GodotClass> Deref for Gd<T>
where
    GdDerefTarget<T>: Bounds<Declarer = bounds::DeclEngine>,
{
    type Target = GdDerefTarget<T>;

    fn deref(&self) -> &Self::Target {
        self.raw.as_target()
    }
}

impl<T: GodotClass> DerefMut for Gd<T>
where
    GdDerefTarget<T>: Bounds<Declarer = bounds::DeclEngine>,
{
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.raw.as_target_mut()
    }
}

impl<T> Default for Gd<T>
where
    T: cap::GodotDefault + Bounds<Memory = bounds::MemRefCounted>,
{
    /// Creates a default-constructed `T` inside a smart pointer.
    ///
    /// This is equivalent to the engine expression `T.new()`.
    fn default() -> Self {
        T::__godot_default()
    }
}

impl<T: GodotClass> Clone for Gd<T> {
    fn clone(&self) -> Self {
        Self { raw: self.raw.clone() }
    }
}

impl<T: GodotClass> Debug for Gd<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Gd {{ id: {}, class: {} }}", self.instance_id_unchecked(), T::class_name())
    }
}

/// Compares by identity: two handles are equal if they reference the same object.
impl<T: GodotClass> PartialEq for Gd<T> {
    fn eq(&self, other: &Self) -> bool {
        self.instance_id_unchecked() == other.instance_id_unchecked()
    }
}

impl<T: GodotClass> Eq for Gd<T> {}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Trait impls

impl<T: GodotClass> GodotConvert for Gd<T> {
    type Via = Gd<T>;
}

impl<T: GodotClass> ToGodot for Gd<T> {
    fn to_godot(&self) -> Self::Via {
        self.raw.check_rtti("to_godot");
        self.clone()
    }
}

impl<T: GodotClass> FromGodot for Gd<T> {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Ok(via)
    }
}

impl<T: GodotClass> GodotType for Gd<T> {
    type Ffi = RawGd<T>;

    fn to_ffi(&self) -> Self::Ffi {
        self.raw.clone()
    }

    fn into_ffi(self) -> Self::Ffi {
        self.into_raw()
    }

    fn try_from_ffi(raw: Self::Ffi) -> Result<Self, ConvertError> {
        if raw.is_null() {
            Err(ConvertError::with_kind(ErrorKind::FromFfi(FromFfiError::NullRawGd)))
        } else {
            Ok(Self { raw })
        }
    }

    fn godot_type_name() -> String {
        T::class_name().to_string()
    }
}
