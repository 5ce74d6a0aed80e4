/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// Classes with their own signals get a `SignalsOfX` collection, dereferencing to the collection of the nearest base with
// signals. Classes without own signals reuse the nearest base's collection.

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::context::Context;
use crate::models::domain::{Class, ClassSignal, ModName, TyName};
use crate::util::{ident, safe_ident, strlit};

pub fn make_class_signals(class: &Class, ctx: &Context) -> TokenStream {
    let class_name = class.name();

    let (own_collection, collection_path) = if class.signals.is_empty() {
        let nearest = ctx
            .nearest_class_with_signals(class_name)
            .unwrap_or_else(|| panic!("class {class_name} has no ancestor with signals"));

        (TokenStream::new(), make_collection_path(&nearest))
    } else {
        (make_signal_collection(class, ctx), make_collection_path(class_name))
    };

    quote! {
        #own_collection

        impl crate::obj::WithSignals for re_export::#class_name {
            type SignalCollection = #collection_path;

            #[doc(hidden)]
            fn __signals_from_object(object: Gd<crate::classes::Object>) -> Self::SignalCollection {
                #collection_path::__new(object)
            }
        }
    }
}

fn make_collection_name(class_name: &TyName) -> Ident {
    ident(&format!("SignalsOf{}", class_name.rust_ty))
}

fn make_collection_path(class_name: &TyName) -> TokenStream {
    let module = ModName::from_godot(&class_name.godot_ty);
    let collection = make_collection_name(class_name);

    quote! { crate::classes::#module::#collection }
}

fn make_signal_collection(class: &Class, ctx: &Context) -> TokenStream {
    let class_name = class.name();
    let collection_name = class.signal_collection_name();
    let doc = format!(
        "Signals declared by [`{class_name}`][crate::classes::{class_name}], and through `Deref` those of its base classes."
    );

    let methods = class.signals.iter().map(|s| make_signal_method(class_name, s));

    // Deref to the nearest base collection, so inherited signals are reachable.
    let base_collection = ctx
        .inheritance_tree()
        .direct_base(class_name)
        .and_then(|base| ctx.nearest_class_with_signals(&base));

    let deref_impl = base_collection.map(|base| {
        let base_path = make_collection_path(&base);
        quote! {
            impl std::ops::Deref for #collection_name {
                type Target = #base_path;

                fn deref(&self) -> &Self::Target {
                    // SAFETY: all collections are #[repr(transparent)] over Gd<Object>.
                    unsafe { std::mem::transmute::<&Self, &Self::Target>(self) }
                }
            }
        }
    });

    quote! {
        #[doc = #doc]
        #[repr(transparent)]
        pub struct #collection_name {
            object: Gd<crate::classes::Object>,
        }

        impl #collection_name {
            #[doc(hidden)]
            pub fn __new(object: Gd<crate::classes::Object>) -> Self {
                Self { object }
            }

            #( #methods )*
        }

        #deref_impl
    }
}

fn make_signal_method(class_name: &TyName, signal: &ClassSignal) -> TokenStream {
    let method_name = safe_ident(&signal.name);
    let signal_str = strlit(&signal.name);
    let doc = format!("Signal `{}::{}`.", class_name.godot_ty, signal.name);
    let rust_class = &class_name.rust_ty;

    let param_types = signal.params.iter().map(|p| p.type_.received_type());

    quote! {
        #[doc = #doc]
        pub fn #method_name(&self) -> crate::registry::signal::TypedSignal<(#( #param_types, )*)> {
            crate::registry::signal::TypedSignal::new(
                self.object.clone(),
                <re_export::#rust_class as GodotClass>::name_table(),
                #signal_str,
            )
        }
    }
}
