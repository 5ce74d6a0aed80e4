/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Declares a Rust struct as a user class deriving from an engine class.
///
/// `godot_class!(Player: Node2D)` implements [`GodotClass`](crate::obj::GodotClass) for `Player` with base `Node2D`, the
/// inheritance relations to `Node2D` and all its ancestors, default construction and access to the base's signals. The
/// struct must also implement [`UserClass`](crate::obj::UserClass), and be passed to
/// [`register_class()`](crate::registry::register_class) before its first instantiation.
///
/// The engine class name equals the Rust struct name.
#[macro_export]
macro_rules! godot_class {
    ($Class:ident : $Base:ident) => {
        impl $crate::obj::GodotClass for $Class {
            type Base = $crate::classes::$Base;

            fn class_name() -> $crate::meta::ClassName {
                static CLASS_NAME: ::std::sync::OnceLock<$crate::meta::ClassName> = ::std::sync::OnceLock::new();
                *CLASS_NAME.get_or_init(|| $crate::meta::ClassName::alloc_next(stringify!($Class)))
            }

            fn name_table() -> &'static $crate::registry::names::NameTable {
                static NAMES: ::std::sync::OnceLock<&'static $crate::registry::names::NameTable> =
                    ::std::sync::OnceLock::new();

                NAMES.get_or_init(|| {
                    let base = <$crate::classes::$Base as $crate::obj::GodotClass>::name_table();
                    $crate::registry::names::derived(stringify!($Class), base)
                })
            }
        }

        unsafe impl $crate::obj::Bounds for $Class {
            type Memory = <$crate::classes::$Base as $crate::obj::Bounds>::Memory;
            type DynMemory = <$crate::classes::$Base as $crate::obj::Bounds>::DynMemory;
            type Declarer = $crate::obj::bounds::DeclUser;
        }

        $crate::private::class_macros::$Base::inherits!($Class);

        impl $crate::obj::cap::GodotDefault for $Class {
            fn __godot_default() -> $crate::obj::Gd<Self> {
                $crate::classes::construct_engine_object::<Self>()
            }
        }

        impl $crate::obj::WithSignals for $Class {
            type SignalCollection = <$crate::classes::$Base as $crate::obj::WithSignals>::SignalCollection;

            #[doc(hidden)]
            fn __signals_from_object(object: $crate::obj::Gd<$crate::classes::Object>) -> Self::SignalCollection {
                <$crate::classes::$Base as $crate::obj::WithSignals>::__signals_from_object(object)
            }
        }
    };
}
