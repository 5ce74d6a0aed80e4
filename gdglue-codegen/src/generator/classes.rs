/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::context::Context;
use crate::generator::functions_common::{self, FnDefinitions};
use crate::generator::{enums, signals, virtual_traits};
use crate::models::domain::{Class, ExtensionApi, ModName, TyName};
use crate::util::{ident, strlit};
use crate::{util, SubmitFn};

pub fn generate_class_files(api: &ExtensionApi, ctx: &Context, gen_path: &Path, submit_fn: &mut SubmitFn<'_>) {
    let _ = std::fs::remove_dir_all(gen_path);
    std::fs::create_dir_all(gen_path).expect("create classes directory");

    let mut modules = vec![];
    for class in api.classes.iter() {
        let generated_class = make_class(class, ctx);
        let out_path = gen_path.join(format!("{}.rs", class.mod_name().rust_mod));

        submit_fn(out_path, generated_class.code);

        modules.push(GeneratedClassModule {
            class_name: class.name().clone(),
            module_name: class.mod_name().clone(),
            virtual_module_name: class.virtual_module_name(),
            inherits_macro_ident: generated_class.inherits_macro_ident,
        });
    }

    let out_path = gen_path.join("mod.rs");
    let mod_contents = make_class_module_file(modules);

    submit_fn(out_path, mod_contents);
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

struct GeneratedClass {
    code: TokenStream,
    inherits_macro_ident: Ident,
}

struct GeneratedClassModule {
    class_name: TyName,
    module_name: ModName,
    virtual_module_name: Ident,
    inherits_macro_ident: Ident,
}

fn make_class(class: &Class, ctx: &Context) -> GeneratedClass {
    let class_name = class.name();
    let godot_class_str = strlit(&class_name.godot_ty);

    let base_ty = match class.base_class.as_ref() {
        Some(base) => quote! { crate::classes::#base },
        None => quote! { crate::obj::NoBase },
    };

    let all_bases = ctx.inheritance_tree().collect_all_bases(class_name);

    let FnDefinitions {
        functions: methods,
        builders,
    } = FnDefinitions::expand(
        class
            .methods
            .iter()
            .map(|method| functions_common::make_method_definition(class, method)),
    );

    let enums = enums::make_enums(&class.enums);
    let virtual_module = virtual_traits::make_virtual_markers_module(class);
    let signals = signals::make_class_signals(class, ctx);
    let method_table = make_method_table(class);
    let class_metadata = make_class_metadata(class);

    let inherits_macro = format_ident!("__gdglue_inherits_{}", class_name.rust_ty);
    let deref_impl = make_deref_impl(class_name, &base_ty);
    let godot_default_impl = make_godot_default_impl(class);
    let (assoc_memory, assoc_dyn_memory) = make_bounds(class);

    let class_doc = format!(
        "Engine class `{}`.\n\nInherits from {}.",
        class_name.godot_ty,
        match class.base_class.as_ref() {
            Some(base) => format!("[`{base}`][crate::classes::{base}]"),
            None => "no other class".to_string(),
        }
    );
    let module_doc = format!(
        "Sidecar module of class [`{class_name}`][crate::classes::{class_name}]: enums, default-parameter builders and signals."
    );

    let internal_methods = quote! {
        /// Native handle of this object, after checking that the object is still alive.
        #[allow(dead_code)]
        fn __checked_object_ptr(&self, call_ctx: &CallContext) -> sys::GDExtensionObjectPtr {
            // SAFETY: only Option due to layout-compatibility with RawGd<T>; it is always Some because stored in Gd<T> which is non-null.
            let rtti = unsafe { self.rtti.as_ref().unwrap_unchecked() };
            ensure_object_alive(rtti.instance_id(), self.object_ptr, call_ctx);

            #[cfg(feature = "safeguards-strict")]
            rtti.check_type::<Self>();

            self.object_ptr
        }

        #[doc(hidden)]
        pub fn __method_table() -> &'static sys::LazyClassMethodTable {
            &METHOD_TABLE
        }
    };

    let imports = util::make_imports();

    // mod re_export needed, because class should not appear inside the file module, and we can't re-export private struct as pub.
    let tokens = quote! {
        #![doc = #module_doc]

        #imports

        pub(super) mod re_export {
            use super::*;

            #[doc = #class_doc]
            #[derive(Debug)]
            #[repr(C)]
            pub struct #class_name {
                object_ptr: sys::GDExtensionObjectPtr,

                // This field should never be None. Type Option<T> is chosen to be layout-compatible with Gd<T>, which uses RawGd<T> inside.
                // The RawGd<T>'s identity field can be None because of generality (it can represent null pointers, as opposed to Gd<T>).
                rtti: Option<ObjectRtti>,
            }

            impl #class_name {
                #methods
                #internal_methods
            }

            impl crate::obj::GodotClass for #class_name {
                type Base = #base_ty;

                fn class_name() -> ClassName {
                    static CLASS_NAME: std::sync::OnceLock<ClassName> = std::sync::OnceLock::new();
                    *CLASS_NAME.get_or_init(|| ClassName::alloc_next(#godot_class_str))
                }

                fn name_table() -> &'static NameTable {
                    crate::registry::names::flattened(&CLASS_METADATA)
                }
            }

            unsafe impl crate::obj::Bounds for #class_name {
                type Memory = crate::obj::bounds::#assoc_memory;
                type DynMemory = crate::obj::bounds::#assoc_dyn_memory;
                type Declarer = crate::obj::bounds::DeclEngine;
            }

            impl crate::obj::EngineClass for #class_name {
                fn as_object_ptr(&self) -> sys::GDExtensionObjectPtr {
                    self.object_ptr
                }

                fn as_type_ptr(&self) -> sys::GDExtensionTypePtr {
                   std::ptr::addr_of!(self.object_ptr) as sys::GDExtensionTypePtr
                }
            }

            #(
                unsafe impl crate::obj::Inherits<crate::classes::#all_bases> for #class_name {}
            )*

            #godot_default_impl
            #deref_impl

            #[macro_export]
            #[doc(hidden)]
            #[allow(non_snake_case)]
            macro_rules! #inherits_macro {
                ($Class:ident) => {
                    unsafe impl $crate::obj::Inherits<$crate::classes::#class_name> for $Class {}
                    #(
                        unsafe impl $crate::obj::Inherits<$crate::classes::#all_bases> for $Class {}
                    )*
                }
            }
        }

        #method_table
        #class_metadata
        #builders
        #enums
        #virtual_module
        #signals
    };

    GeneratedClass {
        code: tokens,
        inherits_macro_ident: inherits_macro,
    }
}

fn make_class_module_file(classes_and_modules: Vec<GeneratedClassModule>) -> TokenStream {
    let class_decls = classes_and_modules.iter().map(|m| {
        let GeneratedClassModule {
            class_name,
            module_name,
            virtual_module_name,
            ..
        } = m;

        quote! {
            pub mod #module_name;
            pub use #module_name::re_export::#class_name;
            pub use #module_name::#virtual_module_name;
        }
    });

    let macros = classes_and_modules.iter().map(|m| {
        let GeneratedClassModule {
            class_name,
            inherits_macro_ident,
            ..
        } = m;

        // The macro lives in the crate root (#[macro_export]); it is reached through the glob import of `class_macros`,
        // not through a `crate::` path.
        quote! {
            pub mod #class_name {
                pub use super::#inherits_macro_ident as inherits;
            }
        }
    });

    quote! {
        #( #class_decls )*

        /// Per-class helper macros, used by `godot_class!` to declare the inheritance chain of a user class.
        #[doc(hidden)]
        #[allow(non_snake_case)]
        pub mod class_macros {
            pub use crate::*;
            #( #macros )*
        }
    }
}

/// `static METHOD_TABLE`: name and hash of every non-virtual method, in table index order.
fn make_method_table(class: &Class) -> TokenStream {
    let godot_class_str = strlit(&class.name.godot_ty);

    let keys = class.methods.iter().map(|method| {
        debug_assert_eq!(
            class.methods[method.table_index].godot_name, method.godot_name,
            "table index out of sync"
        );

        let name = strlit(&method.godot_name);
        let hash = method.hash;
        quote! {
            sys::MethodKey::new(#name, #hash)
        }
    });

    quote! {
        static METHOD_TABLE: sys::LazyClassMethodTable = sys::LazyClassMethodTable::new(
            #godot_class_str,
            &[ #( #keys, )* ],
        );
    }
}

/// `static CLASS_METADATA`: own names of the class, linked to the base class metadata.
fn make_class_metadata(class: &Class) -> TokenStream {
    let name = strlit(&class.name.godot_ty);
    let is_refcounted = class.is_refcounted;

    let base = match class.base_class.as_ref() {
        Some(base) => {
            let base_mod = ModName::from_godot(&base.godot_ty);
            quote! { Some(&super::#base_mod::CLASS_METADATA) }
        }
        None => quote! { None },
    };

    let properties = class.property_names.iter().map(|p| strlit(p));
    let methods = class.methods.iter().map(|m| strlit(&m.godot_name));
    let signals = class.signals.iter().map(|s| strlit(&s.name));
    let virtuals = virtual_traits::make_virtual_infos(class);

    quote! {
        pub(crate) static CLASS_METADATA: ClassMetadata = ClassMetadata {
            name: #name,
            base: #base,
            is_refcounted: #is_refcounted,
            properties: &[ #( #properties ),* ],
            methods: &[ #( #methods ),* ],
            signals: &[ #( #signals ),* ],
            virtuals: &[ #( #virtuals ),* ],
        };
    }
}

fn make_godot_default_impl(class: &Class) -> TokenStream {
    if !class.is_instantiable {
        return TokenStream::new();
    }

    let class_name = &class.name;
    quote! {
        impl crate::obj::cap::GodotDefault for #class_name {
            fn __godot_default() -> crate::obj::Gd<Self> {
                crate::classes::construct_engine_object::<Self>()
            }
        }
    }
}

fn make_deref_impl(class_name: &TyName, base_ty: &TokenStream) -> TokenStream {
    // The base_ty of `Object` is `NoBase`, and we dont want every engine class to deref to `NoBase`.
    if class_name.rust_ty == "Object" {
        return TokenStream::new();
    }

    quote! {
        impl std::ops::Deref for #class_name {
            type Target = #base_ty;

            fn deref(&self) -> &Self::Target {
                // SAFETY: same assumptions as `impl Deref for Gd<T>`, see there for comments
                unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
            }
        }

        impl std::ops::DerefMut for #class_name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                // SAFETY: see above
                unsafe { std::mem::transmute::<&mut Self, &mut Self::Target>(self) }
            }
        }
    }
}

fn make_bounds(class: &Class) -> (Ident, Ident) {
    let assoc_dyn_memory = if class.name().rust_ty == "Object" {
        ident("MemDynamic")
    } else if class.is_refcounted {
        ident("MemRefCounted")
    } else {
        ident("MemManual")
    };

    let assoc_memory = if class.is_refcounted {
        ident("MemRefCounted")
    } else {
        ident("MemManual")
    };

    (assoc_memory, assoc_dyn_memory)
}
