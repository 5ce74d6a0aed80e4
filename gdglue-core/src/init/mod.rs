/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Loading of the extension library by the engine.

use crate::sys;

#[doc(hidden)]
pub unsafe fn __gdext_load_library<E: ExtensionLibrary>(
    interface: *const sys::GDExtensionInterface,
    library: sys::GDExtensionClassLibraryPtr,
    init: *mut sys::GDExtensionInitialization,
) -> sys::GDExtensionBool {
    let init_code = || {
        // SAFETY: the engine passes its interface table, valid for the lifetime of the library.
        unsafe { sys::initialize(interface, library, sys::BindingConfig::default()) };

        let godot_init_params = sys::GDExtensionInitialization {
            minimum_initialization_level: E::min_level().to_sys(),
            userdata: std::ptr::null_mut(),
            initialize: Some(ffi_initialize_layer::<E>),
            deinitialize: Some(ffi_deinitialize_layer::<E>),
        };

        // SAFETY: the engine passes a writable initialization struct.
        unsafe { *init = godot_init_params };

        sys::conv_bool(true)
    };

    let ctx = || "error when loading GDExtension library";
    let is_success = crate::private::handle_panic(ctx, init_code);

    is_success.unwrap_or(sys::conv_bool(false))
}

unsafe extern "C" fn ffi_initialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let ctx = || format!("failed to initialize GDExtension level {init_level}");

    // Swallow panics; they are already reported.
    let _ = crate::private::handle_panic(ctx, || {
        let level = InitLevel::from_sys(init_level);
        sys::out!("Initialize level {level:?}");

        E::on_level_init(level);
    });
}

unsafe extern "C" fn ffi_deinitialize_layer<E: ExtensionLibrary>(
    _userdata: *mut std::ffi::c_void,
    init_level: sys::GDExtensionInitializationLevel,
) {
    let ctx = || format!("failed to deinitialize GDExtension level {init_level}");

    // Swallow panics.
    let _ = crate::private::handle_panic(ctx, || {
        let level = InitLevel::from_sys(init_level);
        sys::out!("Deinitialize level {level:?}");

        E::on_level_deinit(level);
        on_level_deinit_internal::<E>(level);
    });
}

/// Cleanup done after user code. Deinitialization runs in descending order, so the minimum level comes last.
fn on_level_deinit_internal<E: ExtensionLibrary>(level: InitLevel) {
    if level != E::min_level() {
        return;
    }

    crate::registry::unregister_classes();

    // SAFETY: last deinitialization callback; the engine makes no further calls into the library.
    unsafe { sys::deinitialize() };
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Defines the entry point for a GDExtension Rust library.
///
/// Every library should have exactly one implementation of this trait. It is always used in combination with the
/// [`gdextension_entry!`](crate::gdextension_entry) macro, which declares the C function the engine calls on load.
///
/// User classes are registered in [`on_level_init()`](Self::on_level_init):
///
/// ```no_run
/// use gdglue::prelude::*;
/// use gdglue::init::{ExtensionLibrary, InitLevel};
/// use gdglue::registry::register_class;
///
/// struct Player {
///     base: Base<Node2D>,
/// }
///
/// godot_class!(Player: Node2D);
///
/// impl UserClass for Player {
///     fn init(base: Base<Node2D>) -> Self {
///         Self { base }
///     }
/// }
///
/// struct MyExtension;
///
/// unsafe impl ExtensionLibrary for MyExtension {
///     fn on_level_init(level: InitLevel) {
///         if level == InitLevel::Scene {
///             register_class::<Player>();
///         }
///     }
/// }
///
/// gdextension_entry!(MyExtension);
/// ```
///
/// # Safety
/// The library cannot enforce any safety guarantees outside Rust code, which means that **you as a user** are
/// responsible to uphold them: namely in engine-side code or other extensions loaded by the engine.
/// Violating this may cause undefined behavior, even when invoking _safe_ functions.
pub unsafe trait ExtensionLibrary {
    /// Determines the initialization level at which the extension is loaded (`Scene` by default).
    fn min_level() -> InitLevel {
        InitLevel::Scene
    }

    /// Custom logic when a certain init-level of the engine is loaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in ascending order. Use `if` or `match` to hook to specific levels.
    #[allow(unused_variables)]
    fn on_level_init(level: InitLevel) {
        // Nothing by default.
    }

    /// Custom logic when a certain init-level of the engine is unloaded.
    ///
    /// This will only be invoked for levels >= [`Self::min_level()`], in descending order. Classes registered in
    /// [`on_level_init()`](Self::on_level_init) are unregistered automatically, after the minimum level.
    #[allow(unused_variables)]
    fn on_level_deinit(level: InitLevel) {
        // Nothing by default.
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Stage of the engine initialization process.
///
/// Initialization and deinitialization are split into multiple stages, like a stack. At each level, a different amount of
/// engine functionality is available. Deinitialization happens in reverse order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub enum InitLevel {
    /// First level, only core engine types are available.
    Core,

    /// Servers are available.
    Servers,

    /// Scene classes such as `Node` are available; the default level for extensions.
    Scene,

    /// Editor classes are available. Only loaded when running the editor.
    Editor,
}

impl InitLevel {
    /// # Panics
    /// If `level` is not a known engine level.
    #[doc(hidden)]
    pub fn from_sys(level: sys::GDExtensionInitializationLevel) -> Self {
        match level {
            sys::GDEXTENSION_INITIALIZATION_CORE => Self::Core,
            sys::GDEXTENSION_INITIALIZATION_SERVERS => Self::Servers,
            sys::GDEXTENSION_INITIALIZATION_SCENE => Self::Scene,
            sys::GDEXTENSION_INITIALIZATION_EDITOR => Self::Editor,
            _ => panic!("unknown initialization level {level}"),
        }
    }

    #[doc(hidden)]
    pub fn to_sys(self) -> sys::GDExtensionInitializationLevel {
        match self {
            Self::Core => sys::GDEXTENSION_INITIALIZATION_CORE,
            Self::Servers => sys::GDEXTENSION_INITIALIZATION_SERVERS,
            Self::Scene => sys::GDEXTENSION_INITIALIZATION_SCENE,
            Self::Editor => sys::GDEXTENSION_INITIALIZATION_EDITOR,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Declares the C entry point of the extension library, for the [`ExtensionLibrary`] implementation `$Library`.
///
/// The symbol is named `gdext_rust_init` unless a second argument is given; it must match the `entry_symbol` of the
/// `.gdextension` file.
#[macro_export]
macro_rules! gdextension_entry {
    ($Library:ty) => {
        $crate::gdextension_entry!($Library, gdext_rust_init);
    };

    ($Library:ty, $entry_point:ident) => {
        #[no_mangle]
        pub unsafe extern "C" fn $entry_point(
            interface: *const $crate::sys::GDExtensionInterface,
            library: $crate::sys::GDExtensionClassLibraryPtr,
            init: *mut $crate::sys::GDExtensionInitialization,
        ) -> $crate::sys::GDExtensionBool {
            // SAFETY: arguments are passed on unchanged from the engine.
            unsafe { $crate::init::__gdext_load_library::<$Library>(interface, library, init) }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_conversion() {
        for level in [InitLevel::Core, InitLevel::Servers, InitLevel::Scene, InitLevel::Editor] {
            assert_eq!(InitLevel::from_sys(level.to_sys()), level);
        }

        assert!(InitLevel::Core < InitLevel::Scene);
    }
}
