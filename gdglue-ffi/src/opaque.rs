/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Stores an opaque engine value of `N` bytes, with very restricted operations.
///
/// Only the engine reads and writes the bytes; Rust moves them around and hands out their address.
#[repr(C, align(8))]
#[derive(Copy, Clone)]
pub struct Opaque<const N: usize> {
    storage: [u8; N],
    marker: std::marker::PhantomData<*const u8>, // disable Send/Sync
}

impl<const N: usize> Opaque<N> {
    /// Zeroed storage, used as a placeholder before the engine initializes the value.
    pub const fn zeroed() -> Self {
        Self {
            storage: [0; N],
            marker: std::marker::PhantomData,
        }
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.storage
    }
}

impl<const N: usize> PartialEq for Opaque<N> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<const N: usize> Eq for Opaque<N> {}

impl<const N: usize> std::hash::Hash for Opaque<N> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<const N: usize> std::fmt::Debug for Opaque<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Opaque<{N}>(")?;
        for byte in &self.storage {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// `Variant` storage: type tag plus 16 bytes of payload.
pub type OpaqueVariant = Opaque<24>;

/// `String` storage: one pointer to the engine-side character buffer.
pub type OpaqueString = Opaque<8>;

/// `StringName` storage: one pointer to the interned engine-side entry.
pub type OpaqueStringName = Opaque<8>;

/// `Callable` storage.
pub type OpaqueCallable = Opaque<16>;

#[cfg(test)]
mod tests {
    use super::*;

    crate::static_assert!(std::mem::size_of::<OpaqueVariant>() == 24);
    crate::static_assert!(std::mem::size_of::<OpaqueString>() == 8);
    crate::static_assert!(std::mem::size_of::<OpaqueCallable>() == 16);

    #[test]
    fn zeroed_equality() {
        assert_eq!(OpaqueStringName::zeroed(), OpaqueStringName::zeroed());
        assert_eq!(format!("{:?}", Opaque::<2>::zeroed()), "Opaque<2>(0000)");
    }
}
