/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Marker types for the overridable (virtual) methods of each class.
//!
//! `INode::Process` names `Node::_process`: its owner, engine name, parameter tuple and return type. User classes pass
//! markers to `ClassBuilder::virtual_method()`, which only accepts markers of ancestor classes.

use proc_macro2::TokenStream;
use quote::quote;

use crate::models::domain::{Class, VirtualMethod};
use crate::util::strlit;

pub fn make_virtual_markers_module(class: &Class) -> TokenStream {
    let module_name = class.virtual_module_name();
    let class_name = &class.name.rust_ty;
    let module_doc = format!(
        "Overridable methods declared by [`{class_name}`][super::re_export::{class_name}]; \
        see `ClassBuilder::virtual_method()`."
    );

    let markers = class
        .virtual_methods
        .iter()
        .map(|method| make_virtual_marker(class, method));

    quote! {
        #[doc = #module_doc]
        #[allow(non_snake_case)]
        pub mod #module_name {
            use super::*;

            #( #markers )*
        }
    }
}

fn make_virtual_marker(class: &Class, method: &VirtualMethod) -> TokenStream {
    let class_name = &class.name.rust_ty;
    let marker = &method.marker_name;
    let godot_name = strlit(&method.godot_name);
    let param_docs = method
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.type_.doc_name()))
        .collect::<Vec<_>>()
        .join(", ");
    let doc = format!(
        "Marker for `{}::{}({param_docs})`.",
        class.name.godot_ty, method.godot_name
    );

    let param_types = method.params.iter().map(|p| p.type_.received_type());
    let ret = method.return_value.call_ret_type();

    quote! {
        #[doc = #doc]
        pub struct #marker;

        impl crate::registry::VirtualMethod for #marker {
            type Owner = super::re_export::#class_name;
            type Params = (#( #param_types, )*);
            type Ret = #ret;

            const NAME: &'static str = #godot_name;
        }
    }
}

/// Entries of the `virtuals` list in the class metadata.
pub fn make_virtual_infos(class: &Class) -> Vec<TokenStream> {
    class
        .virtual_methods
        .iter()
        .map(|method| {
            let name = strlit(&method.godot_name);
            let arity = method.params.len();

            quote! {
                VirtualMethodInfo { name: #name, arity: #arity }
            }
        })
        .collect()
}
