/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate as sys;

/// Type tag of a `Variant`, restricted to the types the binding layer marshals.
///
/// Discriminants equal the engine's `GDExtensionVariantType` values.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
#[repr(u32)]
pub enum VariantType {
    #[default]
    Nil = sys::GDEXTENSION_VARIANT_TYPE_NIL,
    Bool = sys::GDEXTENSION_VARIANT_TYPE_BOOL,
    Int = sys::GDEXTENSION_VARIANT_TYPE_INT,
    Float = sys::GDEXTENSION_VARIANT_TYPE_FLOAT,
    String = sys::GDEXTENSION_VARIANT_TYPE_STRING,
    Vector2 = sys::GDEXTENSION_VARIANT_TYPE_VECTOR2,
    Vector3 = sys::GDEXTENSION_VARIANT_TYPE_VECTOR3,
    Transform2D = sys::GDEXTENSION_VARIANT_TYPE_TRANSFORM2D,
    Color = sys::GDEXTENSION_VARIANT_TYPE_COLOR,
    StringName = sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME,
    Object = sys::GDEXTENSION_VARIANT_TYPE_OBJECT,
    Callable = sys::GDEXTENSION_VARIANT_TYPE_CALLABLE,
}

impl VariantType {
    /// All types with a slot in the builtin lifecycle table, `Nil` excluded.
    pub const MARSHALLED: [VariantType; 11] = [
        Self::Bool,
        Self::Int,
        Self::Float,
        Self::String,
        Self::Vector2,
        Self::Vector3,
        Self::Transform2D,
        Self::Color,
        Self::StringName,
        Self::Object,
        Self::Callable,
    ];

    /// Converts an engine type tag. Tags outside the marshalled subset map to `None`.
    pub fn try_from_sys(sys: sys::GDExtensionVariantType) -> Option<Self> {
        let ty = match sys {
            sys::GDEXTENSION_VARIANT_TYPE_NIL => Self::Nil,
            sys::GDEXTENSION_VARIANT_TYPE_BOOL => Self::Bool,
            sys::GDEXTENSION_VARIANT_TYPE_INT => Self::Int,
            sys::GDEXTENSION_VARIANT_TYPE_FLOAT => Self::Float,
            sys::GDEXTENSION_VARIANT_TYPE_STRING => Self::String,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR2 => Self::Vector2,
            sys::GDEXTENSION_VARIANT_TYPE_VECTOR3 => Self::Vector3,
            sys::GDEXTENSION_VARIANT_TYPE_TRANSFORM2D => Self::Transform2D,
            sys::GDEXTENSION_VARIANT_TYPE_COLOR => Self::Color,
            sys::GDEXTENSION_VARIANT_TYPE_STRING_NAME => Self::StringName,
            sys::GDEXTENSION_VARIANT_TYPE_OBJECT => Self::Object,
            sys::GDEXTENSION_VARIANT_TYPE_CALLABLE => Self::Callable,
            _ => return None,
        };

        Some(ty)
    }

    pub fn sys(self) -> sys::GDExtensionVariantType {
        self as sys::GDExtensionVariantType
    }

    pub fn godot_name(self) -> &'static str {
        match self {
            Self::Nil => "Nil",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "String",
            Self::Vector2 => "Vector2",
            Self::Vector3 => "Vector3",
            Self::Transform2D => "Transform2D",
            Self::Color => "Color",
            Self::StringName => "StringName",
            Self::Object => "Object",
            Self::Callable => "Callable",
        }
    }

    /// Index into per-type tables, dense over [`Self::MARSHALLED`] with `Nil` at 0.
    pub(crate) fn table_index(self) -> usize {
        match self {
            Self::Nil => 0,
            Self::Bool => 1,
            Self::Int => 2,
            Self::Float => 3,
            Self::String => 4,
            Self::Vector2 => 5,
            Self::Vector3 => 6,
            Self::Transform2D => 7,
            Self::Color => 8,
            Self::StringName => 9,
            Self::Object => 10,
            Self::Callable => 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sys_round_trip() {
        for ty in VariantType::MARSHALLED {
            assert_eq!(VariantType::try_from_sys(ty.sys()), Some(ty));
        }

        assert_eq!(VariantType::try_from_sys(0), Some(VariantType::Nil));
        assert_eq!(VariantType::try_from_sys(sys::GDEXTENSION_VARIANT_TYPE_VARIANT_MAX), None);
    }

    #[test]
    fn table_indices_are_dense() {
        let mut indices: Vec<usize> = VariantType::MARSHALLED.iter().map(|ty| ty.table_index()).collect();
        indices.sort();

        assert_eq!(indices, (1..=VariantType::MARSHALLED.len()).collect::<Vec<_>>());
    }
}
