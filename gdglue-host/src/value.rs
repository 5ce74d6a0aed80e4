/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine-side values and their binary representation in type slots and variants.

use std::ffi::c_void;
use std::fmt;
use std::sync::Arc;

use gdglue_ffi as sys;

use crate::callable::{self, HostCallable};
use crate::object;
use crate::strings::{self, HostStringName};

/// Static parameter or return type of a native method.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum Ty {
    Nil,
    Bool,
    Int,
    Float,
    String,
    StringName,
    Vector2,
    Vector3,
    Color,
    Transform2D,
    Object,
    Callable,
    /// Any value, passed as variant.
    Variant,
}

impl Ty {
    pub fn from_variant_type(ty: sys::GDExtensionVariantType) -> Option<Self> {
        let ty = match ty {
            sys::GDEXTENSION_VARIANT_TYPE_NIL => Self::Nil,
            sys::GDEXTENSION_VARIANT_TYPE_BOOL => Self::Bool,
            sys::GDEXTENSION_VARIANT_TYPE_INT => Self::Int,
            sys::GDEXTENSION_VARIANT_TYPE_FLOAT => Self::Float,
            sys::GDEXTENSION_VARIANT_TYPE_STRING => Self::String,
            sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME => Self::StringName,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR2 => Self::Vector2,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR3 => Self::Vector3,
            sys::GDEXTENSION_VARIANT_TYPE_COLOR => Self::Color,
            sys::GDEXTENSION_VARIANT_TYPE_TRANSFORM2D => Self::Transform2D,
            sys::GDEXTENSION_VARIANT_TYPE_OBJECT => Self::Object,
            sys::GDEXTENSION_VARIANT_TYPE_CALLABLE => Self::Callable,
            _ => return None,
        };
        Some(ty)
    }

    pub fn variant_type(self) -> sys::GDExtensionVariantType {
        match self {
            Self::Nil | Self::Variant => sys::GDEXTENSION_VARIANT_TYPE_NIL,
            Self::Bool => sys::GDEXTENSION_VARIANT_TYPE_BOOL,
            Self::Int => sys::GDEXTENSION_VARIANT_TYPE_INT,
            Self::Float => sys::GDEXTENSION_VARIANT_TYPE_FLOAT,
            Self::String => sys::GDEXTENSION_VARIANT_TYPE_STRING,
            Self::StringName => sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME,
            Self::Vector2 => sys::GDEXTENSION_VARIANT_TYPE_VECTOR2,
            Self::Vector3 => sys::GDEXTENSION_VARIANT_TYPE_VECTOR3,
            Self::Color => sys::GDEXTENSION_VARIANT_TYPE_COLOR,
            Self::Transform2D => sys::GDEXTENSION_VARIANT_TYPE_TRANSFORM2D,
            Self::Object => sys::GDEXTENSION_VARIANT_TYPE_OBJECT,
            Self::Callable => sys::GDEXTENSION_VARIANT_TYPE_CALLABLE,
        }
    }

    /// Zero value of the type, as written for a failed conversion.
    pub fn default_value(self) -> HostValue {
        match self {
            Self::Nil | Self::Variant => HostValue::Nil,
            Self::Bool => HostValue::Bool(false),
            Self::Int => HostValue::Int(0),
            Self::Float => HostValue::Float(0.0),
            Self::String => HostValue::String(String::new()),
            Self::StringName => HostValue::StringName(strings::intern("")),
            Self::Vector2 => HostValue::Vector2([0.0; 2]),
            Self::Vector3 => HostValue::Vector3([0.0; 3]),
            Self::Color => HostValue::Color([0.0; 4]),
            Self::Transform2D => HostValue::Transform2D([0.0; 6]),
            Self::Object => HostValue::Object(None),
            Self::Callable => HostValue::Callable(None),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Values

/// Counted reference to a live object. Refcounted objects stay alive while any `ObjectRef` exists.
pub(crate) struct ObjectRef {
    id: u64,
}

impl ObjectRef {
    /// Takes a new reference; `None` if the object is gone.
    pub fn new(id: u64) -> Option<Self> {
        object::retain(id).then_some(Self { id })
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

impl Clone for ObjectRef {
    fn clone(&self) -> Self {
        object::retain(self.id);
        Self { id: self.id }
    }
}

impl Drop for ObjectRef {
    fn drop(&mut self) {
        object::release(self.id);
    }
}

#[derive(Clone)]
pub(crate) enum HostValue {
    Nil,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    StringName(&'static HostStringName),
    Vector2([f32; 2]),
    Vector3([f32; 3]),
    Color([f32; 4]),
    Transform2D([f32; 6]),
    Object(Option<ObjectRef>),
    Callable(Option<Arc<HostCallable>>),
}

impl HostValue {
    pub fn ty(&self) -> Ty {
        match self {
            Self::Nil => Ty::Nil,
            Self::Bool(_) => Ty::Bool,
            Self::Int(_) => Ty::Int,
            Self::Float(_) => Ty::Float,
            Self::String(_) => Ty::String,
            Self::StringName(_) => Ty::StringName,
            Self::Vector2(_) => Ty::Vector2,
            Self::Vector3(_) => Ty::Vector3,
            Self::Color(_) => Ty::Color,
            Self::Transform2D(_) => Ty::Transform2D,
            Self::Object(_) => Ty::Object,
            Self::Callable(_) => Ty::Callable,
        }
    }

    pub fn object(id: u64) -> Self {
        Self::Object(ObjectRef::new(id))
    }

    pub fn as_bool(&self) -> bool {
        matches!(self, Self::Bool(true))
    }

    pub fn as_int(&self) -> i64 {
        match self {
            Self::Int(i) => *i,
            Self::Float(f) => *f as i64,
            Self::Bool(b) => *b as i64,
            _ => 0,
        }
    }

    pub fn as_float(&self) -> f64 {
        match self {
            Self::Float(f) => *f,
            Self::Int(i) => *i as f64,
            _ => 0.0,
        }
    }

    /// Text of strings and string names; empty for anything else.
    pub fn as_text(&self) -> String {
        match self {
            Self::String(s) => s.clone(),
            Self::StringName(s) => s.as_str().to_string(),
            _ => String::new(),
        }
    }

    pub fn as_object_id(&self) -> Option<u64> {
        match self {
            Self::Object(Some(obj)) => Some(obj.id()),
            _ => None,
        }
    }

    /// Accepts a value for a parameter of type `ty`, applying the implicit conversions the engine allows.
    pub fn coerce(self, ty: Ty) -> Option<Self> {
        match (ty, self) {
            (Ty::Variant, value) => Some(value),
            (Ty::Float, Self::Int(i)) => Some(Self::Float(i as f64)),
            (Ty::String, Self::StringName(s)) => Some(Self::String(s.as_str().to_string())),
            (Ty::StringName, Self::String(s)) => Some(Self::StringName(strings::intern(&s))),
            (Ty::Object, Self::Nil) => Some(Self::Object(None)),
            (ty, value) if value.ty() == ty => Some(value),
            _ => None,
        }
    }

    /// Engine-style text form, as produced by `variant_stringify`.
    pub fn stringify(&self) -> String {
        match self {
            Self::Nil => "<null>".to_string(),
            Self::Bool(b) => b.to_string(),
            Self::Int(i) => i.to_string(),
            Self::Float(f) => format!("{f:?}"),
            Self::String(s) => s.clone(),
            Self::StringName(s) => s.as_str().to_string(),
            Self::Vector2([x, y]) => format!("({x:?}, {y:?})"),
            Self::Vector3([x, y, z]) => format!("({x:?}, {y:?}, {z:?})"),
            Self::Color([r, g, b, a]) => format!("({r:?}, {g:?}, {b:?}, {a:?})"),
            Self::Transform2D([a, b, c, d, e, f]) => {
                format!("[X: ({a:?}, {b:?}), Y: ({c:?}, {d:?}), O: ({e:?}, {f:?})]")
            }
            Self::Object(None) => "<null>".to_string(),
            Self::Object(Some(obj)) => match object::class_name_of(obj.id()) {
                Some(class) => format!("<{class}#{}>", obj.id()),
                None => "<Freed Object>".to_string(),
            },
            Self::Callable(_) => "Callable".to_string(),
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "Nil"),
            Self::String(s) => write!(f, "String({s:?})"),
            Self::StringName(s) => write!(f, "StringName({:?})", s.as_str()),
            Self::Object(None) => write!(f, "Object(null)"),
            Self::Object(Some(obj)) => write!(f, "Object(#{})", obj.id()),
            Self::Callable(_) => write!(f, "Callable"),
            other => write!(f, "{}({})", other.ty_name(), other.stringify()),
        }
    }
}

impl HostValue {
    fn ty_name(&self) -> &'static str {
        match self.ty() {
            Ty::Bool => "Bool",
            Ty::Int => "Int",
            Ty::Float => "Float",
            Ty::Vector2 => "Vector2",
            Ty::Vector3 => "Vector3",
            Ty::Color => "Color",
            Ty::Transform2D => "Transform2D",
            _ => "Value",
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Type slots

#[repr(C)]
struct CallableSlot {
    callable: *const HostCallable,
    _unused: u64,
}

sys::static_assert_eq_size!(CallableSlot, sys::OpaqueCallable);

/// Reads a value of type `ty` from a type pointer, as passed in a pointer call.
///
/// # Safety
/// `ptr` must point to an initialized value of the engine representation of `ty`. For `Ty::Variant`, to a variant.
pub(crate) unsafe fn read_typed(ty: Ty, ptr: sys::GDExtensionConstTypePtr) -> HostValue {
    unsafe {
        match ty {
            Ty::Nil => HostValue::Nil,
            Ty::Bool => HostValue::Bool(*(ptr as *const u8) != 0),
            Ty::Int => HostValue::Int(*(ptr as *const i64)),
            Ty::Float => HostValue::Float(*(ptr as *const f64)),
            Ty::String => HostValue::String(strings::read_string(ptr).clone()),
            Ty::StringName => HostValue::StringName(strings::read_string_name(ptr)),
            Ty::Vector2 => HostValue::Vector2(*(ptr as *const [f32; 2])),
            Ty::Vector3 => HostValue::Vector3(*(ptr as *const [f32; 3])),
            Ty::Color => HostValue::Color(*(ptr as *const [f32; 4])),
            Ty::Transform2D => HostValue::Transform2D(*(ptr as *const [f32; 6])),
            Ty::Object => {
                // Object arguments are passed as pointer to the object pointer.
                let obj_ptr = *(ptr as *const sys::GDExtensionObjectPtr);
                HostValue::Object(object::id_of_ptr(obj_ptr).and_then(ObjectRef::new))
            }
            Ty::Callable => {
                let slot = &*(ptr as *const CallableSlot);
                HostValue::Callable(callable::clone_from_raw(slot.callable))
            }
            Ty::Variant => variant_read(ptr).clone(),
        }
    }
}

/// Writes `value` into uninitialized storage of type `ty`. Mismatched values write the zero value of `ty`.
///
/// Objects are written as borrowed pointer; the caller takes its own reference.
///
/// # Safety
/// `dst` must be valid for writing the engine representation of `ty`.
pub(crate) unsafe fn write_typed(ty: Ty, value: HostValue, dst: sys::GDExtensionUninitializedTypePtr) {
    if ty == Ty::Nil || dst.is_null() {
        return;
    }

    let value = match value.coerce(ty) {
        Some(v) => v,
        None => ty.default_value(),
    };

    unsafe {
        match value {
            HostValue::Nil => {
                if ty == Ty::Variant {
                    variant_write(dst, HostValue::Nil);
                }
            }
            value if ty == Ty::Variant => variant_write(dst, value),
            HostValue::Bool(b) => *(dst as *mut u8) = b as u8,
            HostValue::Int(i) => *(dst as *mut i64) = i,
            HostValue::Float(f) => *(dst as *mut f64) = f,
            HostValue::String(s) => strings::write_string(dst, s),
            HostValue::StringName(s) => strings::write_string_name(dst, s),
            HostValue::Vector2(v) => *(dst as *mut [f32; 2]) = v,
            HostValue::Vector3(v) => *(dst as *mut [f32; 3]) = v,
            HostValue::Color(v) => *(dst as *mut [f32; 4]) = v,
            HostValue::Transform2D(v) => *(dst as *mut [f32; 6]) = v,
            HostValue::Object(obj) => {
                let ptr = obj.and_then(|obj| object::ptr_of(obj.id())).unwrap_or(std::ptr::null_mut());
                *(dst as *mut sys::GDExtensionObjectPtr) = ptr;
            }
            HostValue::Callable(c) => {
                let slot = CallableSlot {
                    callable: c.map_or(std::ptr::null(), Arc::into_raw),
                    _unused: 0,
                };
                std::ptr::write(dst as *mut CallableSlot, slot);
            }
        }
    }
}

/// Writes a callable into an uninitialized callable slot, transferring the reference.
///
/// # Safety
/// `dst` must be valid for writing a callable slot.
pub(crate) unsafe fn write_callable(dst: *mut c_void, callable: Arc<HostCallable>) {
    let slot = CallableSlot {
        callable: Arc::into_raw(callable),
        _unused: 0,
    };
    unsafe { std::ptr::write(dst as *mut CallableSlot, slot) };
}

/// # Safety
/// `ptr` must point to an initialized callable slot.
pub(crate) unsafe fn callable_slot_ptr(ptr: *const c_void) -> *const HostCallable {
    unsafe { (*(ptr as *const CallableSlot)).callable }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Variants

#[repr(C)]
struct VariantRepr {
    ty: sys::GDExtensionVariantType,
    _pad: u32,
    value: *mut HostValue,
    _reserved: u64,
}

sys::static_assert_eq_size!(VariantRepr, sys::OpaqueVariant);

static NIL: HostValue = HostValue::Nil;

/// Value stored in a variant. An all-zero variant reads as nil.
///
/// # Safety
/// `ptr` must point to an initialized variant.
pub(crate) unsafe fn variant_read<'a>(ptr: sys::GDExtensionConstVariantPtr) -> &'a HostValue {
    let repr = unsafe { &*(ptr as *const VariantRepr) };
    if repr.value.is_null() {
        &NIL
    } else {
        unsafe { &*repr.value }
    }
}

/// # Safety
/// `dst` must be valid for writing a variant. Previous contents are not destroyed.
pub(crate) unsafe fn variant_write(dst: sys::GDExtensionUninitializedVariantPtr, value: HostValue) {
    let ty = value.ty().variant_type();
    let value = match value {
        HostValue::Nil => std::ptr::null_mut(),
        value => Box::into_raw(Box::new(value)),
    };

    let repr = VariantRepr {
        ty,
        _pad: 0,
        value,
        _reserved: 0,
    };
    unsafe { std::ptr::write(dst as *mut VariantRepr, repr) };
}

/// Moves the value out of a variant, leaving a nil variant behind.
///
/// # Safety
/// `ptr` must point to an initialized variant.
pub(crate) unsafe fn variant_take(ptr: sys::GDExtensionVariantPtr) -> HostValue {
    let repr = unsafe { &mut *(ptr as *mut VariantRepr) };
    let value = std::mem::replace(&mut repr.value, std::ptr::null_mut());
    repr.ty = sys::GDEXTENSION_VARIANT_TYPE_NIL;

    if value.is_null() {
        HostValue::Nil
    } else {
        unsafe { *Box::from_raw(value) }
    }
}

/// Owned variant built by the engine to pass arguments to extension callbacks.
pub(crate) struct OwnedVariant {
    repr: VariantRepr,
}

impl OwnedVariant {
    pub fn new(value: HostValue) -> Self {
        let mut raw = std::mem::MaybeUninit::<VariantRepr>::uninit();

        // SAFETY: `raw` is valid for writing a variant.
        unsafe { variant_write(raw.as_mut_ptr() as *mut c_void, value) };
        Self {
            repr: unsafe { raw.assume_init() },
        }
    }

    pub fn nil() -> Self {
        Self::new(HostValue::Nil)
    }

    pub fn ptr(&self) -> sys::GDExtensionConstVariantPtr {
        &self.repr as *const VariantRepr as sys::GDExtensionConstVariantPtr
    }

    pub fn ptr_mut(&mut self) -> sys::GDExtensionVariantPtr {
        &mut self.repr as *mut VariantRepr as sys::GDExtensionVariantPtr
    }

    pub fn into_value(mut self) -> HostValue {
        // SAFETY: the repr is initialized for the whole lifetime of `self`.
        unsafe { variant_take(self.ptr_mut()) }
    }
}

impl Drop for OwnedVariant {
    fn drop(&mut self) {
        // SAFETY: see `into_value`.
        drop(unsafe { variant_take(self.ptr_mut()) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_rules() {
        assert!(matches!(HostValue::Int(3).coerce(Ty::Float), Some(HostValue::Float(f)) if f == 3.0));
        assert!(HostValue::Float(1.5).coerce(Ty::Int).is_none());
        assert!(matches!(HostValue::Nil.coerce(Ty::Object), Some(HostValue::Object(None))));
        assert!(matches!(HostValue::Bool(true).coerce(Ty::Variant), Some(HostValue::Bool(true))));
    }

    #[test]
    fn variant_roundtrip_through_repr() {
        let owned = OwnedVariant::new(HostValue::Vector2([1.5, -0.25]));
        let read = unsafe { variant_read(owned.ptr()) };
        assert!(matches!(read, HostValue::Vector2([x, y]) if *x == 1.5 && *y == -0.25));
        assert!(matches!(owned.into_value(), HostValue::Vector2(_)));
    }

    #[test]
    fn zeroed_variant_is_nil() {
        let zeroed = sys::OpaqueVariant::zeroed();
        let read = unsafe { variant_read(&zeroed as *const _ as *const c_void) };
        assert!(matches!(read, HostValue::Nil));
    }
}
