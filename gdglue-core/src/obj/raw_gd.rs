/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::mem::ManuallyDrop;
use std::{fmt, ptr};

use sys::{interface_fn, GodotFfi, GodotNullableFfi};

use crate::builtin::{Variant, VariantType};
use crate::meta::error::{ConvertError, FromVariantError};
use crate::meta::{CallContext, GodotFfiVariant};
use crate::obj::bounds::DynMemory as _;
use crate::obj::rtti::ObjectRtti;
use crate::obj::{bounds, Bounds, Gd, GdDerefTarget, GdMut, GdRef, GodotClass, InstanceId, UserClass};
use crate::storage::InstanceStorage;
use crate::{classes, sys};

/// Low-level bindings for object pointers.
///
/// This should not be used directly, you should either use [`Gd<T>`](super::Gd) or [`Option<Gd<T>>`]
/// depending on whether you need a nullable object pointer or not.
#[repr(C)]
#[doc(hidden)]
pub struct RawGd<T: GodotClass> {
    pub(super) obj: *mut T,

    // Must not be changed after initialization.
    cached_rtti: Option<ObjectRtti>,
}

impl<T: GodotClass> RawGd<T> {
    /// Initializes this `RawGd<T>` from the object pointer as a **weak ref**, meaning it does not
    /// initialize/increment the reference counter.
    ///
    /// If `obj` is null, the returned `RawGd<T>` will have the null state.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(crate) unsafe fn from_obj_sys_weak(obj: sys::GDExtensionObjectPtr) -> Self {
        let rtti = if obj.is_null() {
            None
        } else {
            // SAFETY: non-null pointers are live objects per precondition.
            let raw_id = unsafe { interface_fn!(object_get_instance_id)(obj) };

            // A zero ID means the pointer is not an object the engine knows; continuing would dereference garbage.
            let instance_id = InstanceId::try_from_u64(raw_id)
                .unwrap_or_else(|| panic!("null instance ID when constructing object; pointer {obj:p} is not a live object"));

            Some(ObjectRtti::of::<T>(instance_id))
        };

        Self {
            obj: obj.cast::<T>(),
            cached_rtti: rtti,
        }
    }

    /// Initializes this `RawGd<T>` from the object pointer as a **strong ref**, meaning it initializes
    /// /increments the reference counter and keeps the object alive.
    ///
    /// # Safety
    /// `obj` must be a valid object pointer or a null pointer.
    pub(crate) unsafe fn from_obj_sys(obj: sys::GDExtensionObjectPtr) -> Self {
        // SAFETY: forwarded to caller.
        unsafe { Self::from_obj_sys_weak(obj) }.with_inc_refcount()
    }

    /// Returns `self` but with initialized ref-count.
    fn with_inc_refcount(self) -> Self {
        // init_ref and not reference: this might be the first reference, which the engine treats specially.
        T::DynMemory::maybe_init_ref(&self);
        self
    }

    /// Returns `true` if the object is null.
    ///
    /// This does not check if the object is dead. For that, use [`is_instance_valid()`](Self::is_instance_valid).
    pub(crate) fn is_null(&self) -> bool {
        self.obj.is_null() || self.cached_rtti.is_none()
    }

    pub(crate) fn instance_id_unchecked(&self) -> Option<InstanceId> {
        self.cached_rtti.as_ref().map(|rtti| rtti.instance_id())
    }

    /// Whether the object is alive, and the ID still resolves to the same object (IDs are not reused, but be strict).
    pub(crate) fn is_instance_valid(&self) -> bool {
        self.cached_rtti.as_ref().is_some_and(|rtti| {
            // SAFETY: any ID may be passed; unknown IDs yield null.
            let current = unsafe { interface_fn!(object_get_instance_from_id)(rtti.instance_id().to_u64()) };
            !current.is_null() && current == self.obj_sys()
        })
    }

    /// Returns `Ok(cast_obj)` on success, `Err(self)` on error.
    pub(super) fn owned_cast<U>(self) -> Result<RawGd<U>, Self>
    where
        U: GodotClass,
    {
        if self.is_null() {
            // Null can be cast to anything; dropping a null does nothing.
            std::mem::forget(self);
            return Ok(RawGd::null());
        }

        match self.ffi_cast::<U>() {
            Some(cast_ptr) => {
                // Ownership moves to the result, the reference count stays the same.
                // SAFETY: the engine returned a live pointer to the same object.
                let weak = unsafe { RawGd::<U>::from_obj_sys_weak(cast_ptr) };
                std::mem::forget(self);
                Ok(weak)
            }
            None => Err(self),
        }
    }

    /// Reinterprets the handle as one to a base class. No engine round-trip.
    ///
    /// Callers must ensure that `Base` is a base of `T`, usually through `T: Inherits<Base>`.
    pub(super) fn upcast_owned<Base>(self) -> RawGd<Base>
    where
        Base: GodotClass,
    {
        let this = ManuallyDrop::new(self);
        RawGd {
            obj: this.obj.cast::<Base>(),
            cached_rtti: this.cached_rtti.clone(),
        }
    }

    /// Asks the engine to cast the object to `U`. Returns the cast pointer, or `None` if the object does not inherit `U`.
    ///
    /// `self` must not be null.
    pub(super) fn ffi_cast<U>(&self) -> Option<sys::GDExtensionObjectPtr>
    where
        U: GodotClass,
    {
        // Every cast fails on a dead object; there is no way to recover from that except fixing the caller.
        self.check_rtti("ffi_cast");

        // SAFETY: object checked alive above; unknown class names yield a null tag, which casts to null.
        let cast_object_ptr = unsafe {
            let class_tag = interface_fn!(classdb_get_class_tag)(U::class_name().string_sys());
            interface_fn!(object_cast_to)(self.obj_sys(), class_tag)
        };

        (!cast_object_ptr.is_null()).then_some(cast_object_ptr)
    }

    /// Executes a function, assuming that `self` inherits `RefCounted`.
    ///
    /// # Panics
    /// If `self` does not inherit `RefCounted` or is null.
    pub fn with_ref_counted<R>(&self, apply: impl Fn(&mut classes::RefCounted) -> R) -> R {
        assert!(
            !self.is_null(),
            "RawGd::with_ref_counted(): expected to inherit RefCounted, encountered null pointer"
        );

        let Some(cast_ptr) = self.ffi_cast::<classes::RefCounted>() else {
            panic!(
                "Operation not permitted for object of class {}: class is not RefCounted",
                T::class_name()
            );
        };

        // Weak view that must not touch the reference count when going out of scope.
        // SAFETY: cast_ptr is the live object behind self.
        let mut ref_counted = ManuallyDrop::new(unsafe { RawGd::<classes::RefCounted>::from_obj_sys_weak(cast_ptr) });
        apply(ref_counted.as_target_mut())
    }

    /// Enables outer `Gd` APIs or bypasses additional null checks, in cases where `RawGd` is guaranteed non-null.
    ///
    /// # Safety
    /// `self` must not be null.
    pub(crate) unsafe fn as_non_null(&self) -> &Gd<T> {
        debug_assert!(!self.is_null(), "RawGd::as_non_null() called on null pointer; this is UB");

        // SAFETY: layout of Gd<T> is equivalent to RawGd<T>.
        unsafe { std::mem::transmute::<&RawGd<T>, &Gd<T>>(self) }
    }

    /// # Panics
    /// If this `RawGd` is null. In Debug mode, the upcast is also verified through the engine.
    ///
    /// # Safety
    /// - `Base` must actually be a base class of `T`.
    /// - `Base` must be an engine class.
    pub(super) unsafe fn as_upcast_ref<Base>(&self) -> &Base
    where
        Base: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
    {
        self.ensure_valid_upcast::<Base>();

        // SAFETY: every engine class is a `#[repr(C)]` struct of { object_ptr, rtti: Option<ObjectRtti> },
        // which is layout-compatible with RawGd { obj, cached_rtti }.
        unsafe { std::mem::transmute::<&Self, &Base>(self) }
    }

    /// # Panics
    /// If this `RawGd` is null. In Debug mode, the upcast is also verified through the engine.
    ///
    /// # Safety
    /// - `Base` must actually be a base class of `T`.
    /// - `Base` must be an engine class.
    pub(super) unsafe fn as_upcast_mut<Base>(&mut self) -> &mut Base
    where
        Base: GodotClass + Bounds<Declarer = bounds::DeclEngine>,
    {
        self.ensure_valid_upcast::<Base>();

        // SAFETY: see as_upcast_ref(). Exclusive access to self means exclusive access to the view.
        unsafe { std::mem::transmute::<&mut Self, &mut Base>(self) }
    }

    /// # Panics
    /// If this `RawGd` is null.
    pub(super) fn as_target(&self) -> &GdDerefTarget<T>
    where
        GdDerefTarget<T>: Bounds<Declarer = bounds::DeclEngine>,
    {
        // SAFETY: the deref target is T for engine classes and T::Base for user classes. Both are engine classes and bases of T.
        unsafe { self.as_upcast_ref::<GdDerefTarget<T>>() }
    }

    /// # Panics
    /// If this `RawGd` is null.
    pub(super) fn as_target_mut(&mut self) -> &mut GdDerefTarget<T>
    where
        GdDerefTarget<T>: Bounds<Declarer = bounds::DeclEngine>,
    {
        // SAFETY: see as_target().
        unsafe { self.as_upcast_mut::<GdDerefTarget<T>>() }
    }

    #[allow(clippy::extra_unused_type_parameters)]
    fn ensure_valid_upcast<Base>(&self)
    where
        Base: GodotClass,
    {
        assert!(!self.is_null(), "cannot upcast null object refs");
        self.check_rtti("upcast_ref");

        // In Debug builds, go the long path via FFI to verify the static relation holds at runtime.
        #[cfg(debug_assertions)]
        {
            let ffi_dest = self.ffi_cast::<Base>();
            assert_eq!(
                ffi_dest,
                Some(self.obj_sys()),
                "upcast_ref: {} is not an engine base of {}",
                Base::class_name(),
                T::class_name()
            );
        }
    }

    /// Verify that the object is non-null and alive. With strict safeguards, additionally verify that it is of type `T` or derived.
    pub(crate) fn check_rtti(&self, method_name: &'static str) {
        let call_ctx = CallContext::gd::<T>(method_name);

        let instance_id = self.check_dynamic_type(&call_ctx);
        classes::ensure_object_alive(instance_id, self.obj_sys(), &call_ctx);
    }

    /// Checks only type, not alive-ness. Used in `Gd<T>` in case of `free()`.
    pub(crate) fn check_dynamic_type(&self, call_ctx: &CallContext<'_>) -> InstanceId {
        let Some(rtti) = self.cached_rtti.as_ref() else {
            panic!("{call_ctx}: cannot call method on null object");
        };

        #[cfg(feature = "safeguards-strict")]
        rtti.check_type::<T>();

        rtti.instance_id()
    }

    pub(crate) fn obj_sys(&self) -> sys::GDExtensionObjectPtr {
        self.obj as sys::GDExtensionObjectPtr
    }
}

impl<T> RawGd<T>
where
    T: UserClass,
{
    /// Hands out a guard for a shared borrow, through which the user instance can be read.
    pub(crate) fn bind(&self) -> GdRef<'_, T> {
        self.check_rtti("bind");
        GdRef::from_guard(self.storage().get())
    }

    /// Hands out a guard for an exclusive borrow, through which the user instance can be read and written.
    pub(crate) fn bind_mut(&mut self) -> GdMut<'_, T> {
        self.check_rtti("bind_mut");
        GdMut::from_guard(self.storage().get_mut())
    }

    /// Storage object associated with the extension instance.
    ///
    /// # Panics
    /// If the object has no instance binding for this library, i.e. it was not created through the class's `create` callback.
    pub(crate) fn storage(&self) -> &InstanceStorage<T> {
        // SAFETY: self is non-null and alive (checked by callers); the library token is the key used at creation.
        let binding = unsafe { interface_fn!(object_get_instance_binding)(self.obj_sys(), sys::get_library()) };

        assert!(!binding.is_null(), "{}: object has no Rust instance attached", T::class_name());

        // SAFETY: the binding was set to a boxed InstanceStorage<T> in the create callback, and is freed only on
        // object destruction. We hold a reference to a live object, so it outlives &self.
        unsafe { crate::storage::as_storage::<T>(binding) }
    }
}

// SAFETY: the sys pointer is the address of the `obj` field, i.e. `Object**`, which is what the engine reads and writes.
unsafe impl<T> GodotFfi for RawGd<T>
where
    T: GodotClass,
{
    fn variant_type() -> sys::VariantType {
        sys::VariantType::Object
    }

    unsafe fn from_sys(ptr: sys::GDExtensionConstTypePtr) -> Self {
        // SAFETY: ptr holds an object pointer per precondition.
        unsafe { Self::from_obj_sys_weak(*(ptr as *const sys::GDExtensionObjectPtr)) }
    }

    unsafe fn new_from_sys_init(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> Self {
        // The engine writes a borrowed pointer; our handle takes its own reference.
        // SAFETY: init_fn writes a valid object pointer or null.
        unsafe { Self::from_obj_sys(raw_object_init(init_fn)) }
    }

    fn sys(&self) -> sys::GDExtensionConstTypePtr {
        ptr::addr_of!(self.obj) as sys::GDExtensionConstTypePtr
    }

    fn sys_mut(&mut self) -> sys::GDExtensionTypePtr {
        ptr::addr_of_mut!(self.obj) as sys::GDExtensionTypePtr
    }
}

impl<T: GodotClass> GodotNullableFfi for RawGd<T> {
    /// Create a new object representing a null.
    fn null() -> Self {
        Self {
            obj: ptr::null_mut(),
            cached_rtti: None,
        }
    }

    fn is_null(&self) -> bool {
        Self::is_null(self)
    }
}

impl<T: GodotClass> GodotFfiVariant for RawGd<T> {
    fn ffi_to_variant(&self) -> Variant {
        if self.is_null() {
            return Variant::nil();
        }

        self.check_rtti("to_variant");
        let converter = sys::builtin_lifecycle_api().variant_from_type(VariantType::Object);

        // SAFETY: the converter reads the object pointer behind `sys()` and takes its own reference.
        unsafe {
            Variant::new_with_var_uninit(|variant_ptr| {
                converter(variant_ptr, sys::force_mut_ptr(self.sys()));
            })
        }
    }

    fn ffi_from_variant(variant: &Variant) -> Result<Self, ConvertError> {
        let variant_type = variant.get_type();

        // Explicit type check before converting, for better error messages.
        if variant_type != VariantType::Object {
            return Err(FromVariantError::BadType {
                expected: VariantType::Object,
                actual: variant_type,
            }
            .into_error(variant.clone()));
        }

        let converter = sys::builtin_lifecycle_api().variant_to_type(VariantType::Object);

        // Goes through RawGd<Object>, the engine does not check the class. The cast below does.
        // SAFETY: the converter writes a borrowed object pointer (possibly null), for which we take a reference.
        let raw = unsafe {
            RawGd::<classes::Object>::new_from_sys_init(|self_ptr| {
                converter(self_ptr, sys::force_mut_ptr(variant.var_sys()));
            })
        };

        raw.owned_cast().map_err(|raw| {
            FromVariantError::WrongClass {
                expected: T::class_name(),
            }
            .into_error(Gd { raw })
        })
    }
}

/// Destructor with semantics depending on memory strategy.
///
/// * If this `RawGd` holds a reference-counted type, this will decrement the reference counter.
///   If this was the last remaining reference, the object is destroyed.
///
/// * If the held object is manually-managed, **nothing happens**.
///   To destroy manually-managed objects, you need to call [`Gd::free()`].
impl<T: GodotClass> Drop for RawGd<T> {
    fn drop(&mut self) {
        sys::out!("RawGd::drop:      {self:?}");

        // SAFETY: this handle owns one reference, released here and never again.
        let is_last = unsafe { T::DynMemory::maybe_dec_ref(self) };
        if is_last {
            // SAFETY: the count reached zero, nobody else references the object.
            unsafe { interface_fn!(object_destroy)(self.obj_sys()) };
        }
    }
}

impl<T: GodotClass> Clone for RawGd<T> {
    fn clone(&self) -> Self {
        if self.is_null() {
            return Self::null();
        }

        self.check_rtti("clone");

        let copy = Self {
            obj: self.obj,
            cached_rtti: self.cached_rtti.clone(),
        };
        T::DynMemory::maybe_inc_ref(&copy);

        sys::out!("RawGd::clone:     {self:?}");
        copy
    }
}

impl<T: GodotClass> fmt::Debug for RawGd<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // No engine calls: this is used while tracing refcount changes, where the object may be half-destroyed.
        match self.instance_id_unchecked() {
            Some(id) if !self.obj.is_null() => {
                write!(f, "RawGd {{ id: {id}, class: {} }}", T::class_name())
            }
            _ => write!(f, "RawGd {{ null }}"),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Reusable functions

/// Runs `init_fn` on the address of a pointer (initialized to null), then returns that pointer, possibly still null.
///
/// # Safety
/// `init_fn` must be a function that correctly handles a _type pointer_ pointing to an _object pointer_.
#[doc(hidden)]
pub unsafe fn raw_object_init(init_fn: impl FnOnce(sys::GDExtensionUninitializedTypePtr)) -> sys::GDExtensionObjectPtr {
    // The type pointer contains the _address_ of an object pointer.
    let mut object_ptr: sys::GDExtensionObjectPtr = ptr::null_mut();
    let return_ptr: *mut sys::GDExtensionObjectPtr = ptr::addr_of_mut!(object_ptr);

    init_fn(return_ptr as sys::GDExtensionUninitializedTypePtr);

    object_ptr
}
