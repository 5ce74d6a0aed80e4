/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt::{Debug, Display, Formatter, Result as FmtResult};
use std::num::NonZeroU64;

use crate::meta::error::{ConvertError, FromGodotError};
use crate::meta::{FromGodot, GodotConvert, ToGodot};
use crate::sys;

/// Represents a non-zero instance ID.
///
/// This is its own type for type safety and to deal with the inconsistent representation in the engine as both `u64` (C++)
/// and `i64` (scripting). You can usually treat this as an opaque value; there are conversion methods however.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct InstanceId {
    // In the public API, signed i64 is the canonical representation. u64 is only used towards the engine.
    value: NonZeroU64,
}

impl InstanceId {
    /// Constructs an instance ID from an integer, or `None` if the integer is zero.
    ///
    /// This does *not* check if the instance is valid.
    pub fn try_from_i64(id: i64) -> Option<Self> {
        Self::try_from_u64(id as u64)
    }

    /// ⚠️ Constructs an instance ID from a non-zero integer, or panics.
    ///
    /// This does *not* check if the instance is valid.
    ///
    /// # Panics
    /// If `id` is zero.
    pub fn from_i64(id: i64) -> Self {
        Self::try_from_i64(id).unwrap_or_else(|| panic!("expected non-zero instance ID"))
    }

    pub(crate) fn try_from_u64(id: u64) -> Option<Self> {
        NonZeroU64::new(id).map(|value| Self { value })
    }

    pub fn to_i64(self) -> i64 {
        self.to_u64() as i64
    }

    /// Returns if the object being referred to inherits `RefCounted`.
    ///
    /// No engine round-trip: the information is encoded in the ID itself.
    pub fn is_ref_counted(self) -> bool {
        self.to_u64() & (1u64 << 63) != 0
    }

    /// Dynamically checks if the instance behind the ID exists.
    ///
    /// Rarely needed, since `Gd<T>` can be checked with [`is_instance_valid()`](crate::obj::Gd::is_instance_valid).
    pub fn lookup_validity(self) -> bool {
        // SAFETY: any ID may be passed; unknown IDs yield null.
        let ptr = unsafe { sys::interface_fn!(object_get_instance_from_id)(self.to_u64()) };
        !ptr.is_null()
    }

    pub fn to_u64(self) -> u64 {
        self.value.get()
    }
}

impl Display for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.to_i64())
    }
}

impl Debug for InstanceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "InstanceId({})", self.to_i64())
    }
}

impl GodotConvert for InstanceId {
    type Via = i64;
}

impl ToGodot for InstanceId {
    fn to_godot(&self) -> Self::Via {
        self.to_i64()
    }
}

impl FromGodot for InstanceId {
    fn try_from_godot(via: Self::Via) -> Result<Self, ConvertError> {
        Self::try_from_i64(via).ok_or_else(|| FromGodotError::ZeroInstanceId.into_error(via))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refcounted_bit() {
        let plain = InstanceId::from_i64(42);
        assert!(!plain.is_ref_counted());

        let refcounted = InstanceId::try_from_u64((1 << 63) | 42).expect("non-zero");
        assert!(refcounted.is_ref_counted());
        assert!(refcounted.to_i64() < 0);
        assert_eq!(refcounted.to_u64() & !(1 << 63), 42);
    }

    #[test]
    fn zero_is_rejected() {
        assert_eq!(InstanceId::try_from_i64(0), None);
        assert_eq!(InstanceId::from_i64(-7).to_string(), "-7");
        assert_eq!(format!("{:?}", InstanceId::from_i64(5)), "InstanceId(5)");
    }
}
