/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::conv;
use crate::generator::functions_common::{self, FnKind, FnParamTokens, FnReceiver};
use crate::models::domain::{Class, ClassMethod, FnParam};
use crate::util::ident;

/// Generates `method()` and `method_ex()` plus the `ExMethod` builder, all forwarding to `full_fn_name`.
///
/// Default values are evaluated on the Rust side when the builder is created; the engine always receives every argument.
pub fn make_function_definition_with_defaults(
    class: &Class,
    method: &ClassMethod,
    receiver: &FnReceiver,
    full_fn_name: &Ident,
) -> (TokenStream, TokenStream) {
    let simple_fn_name = &method.name;
    let extended_fn_name = format_ident!("{}_ex", simple_fn_name);
    let builder_ty = format_ident!("Ex{}", conv::to_pascal_case(&method.godot_name));
    let class_name = &class.name.rust_ty;

    let builder_doc = format!(
        "Default-param extender for [`{class_name}::{extended_fn_name}`][super::{class_name}::{extended_fn_name}]."
    );

    let FnParamTokens {
        param_decls: required_param_decls,
        arg_exprs: required_args_converted,
        ..
    } = functions_common::make_params_exprs(method.required_params().iter(), FnKind::Regular);

    let required_names = functions_common::param_names(method.required_params());
    let required_types = method.required_params().iter().map(|p| p.type_.param_type());

    // Receiver, as first field of the builder.
    let surround = (!receiver.is_static).then(|| {
        let maybe_mut = (!receiver.is_const).then(|| quote! { mut });
        quote! { surround_object: &'a #maybe_mut re_export::#class_name }
    });
    let surround_decl = surround.iter();
    let surround_param = surround.iter();
    let surround_init = surround.iter().map(|_| quote! { surround_object });
    let surround_forward = surround.iter().map(|_| quote! { self.surround_object });
    let surround_arg = surround.iter().map(|_| quote! { self });
    let lifetime = surround.as_ref().map(|_| quote! { <'a> });

    let fields = method.params.iter().map(|p| {
        let FnParam { name, type_, .. } = p;
        let ty = type_.param_type();
        quote! { #name: #ty }
    });

    let inits = method.params.iter().map(|p| {
        let FnParam {
            name, default_value, ..
        } = p;
        match default_value {
            Some(value) => quote! { #name: #value },
            None => quote! { #name },
        }
    });

    let setters = method.default_params().iter().map(|p| {
        let FnParam { name, type_, .. } = p;
        let param_decl = type_.param_decl();
        let conversion = type_.param_conversion(&ident("value"));

        quote! {
            #[inline]
            pub fn #name(self, value: #param_decl) -> Self {
                Self {
                    #name: #conversion,
                    ..self
                }
            }
        }
    });

    let all_names = functions_common::param_names(&method.params);
    let return_decl = &method.return_value.decl;
    let receiver_param = &receiver.param;
    let receiver_param_a = &receiver.param_lifetime_a;
    let receiver_self = &receiver.self_prefix;
    let fn_lifetime = (!receiver.is_static).then(|| quote! { <'a> });

    // #[allow] exceptions:
    // - redundant_field_names:     'value: value' is a possible initialization pattern
    // - needless_update:           Remainder expression '..self' has nothing left to change
    let builders = quote! {
        #[doc = #builder_doc]
        #[must_use]
        pub struct #builder_ty #lifetime {
            #( #surround_decl, )*
            #( #fields, )*
        }

        #[allow(clippy::redundant_field_names, clippy::needless_update)]
        impl #lifetime #builder_ty #lifetime {
            fn new(
                #( #surround_param, )*
                #( #required_names: #required_types, )*
            ) -> Self {
                Self {
                    #( #surround_init, )*
                    #( #inits, )*
                }
            }

            #( #setters )*

            #[inline]
            pub fn done(self) #return_decl {
                re_export::#class_name::#full_fn_name(
                    #( #surround_forward, )*
                    #( self.#all_names, )*
                )
            }
        }
    };

    let functions = quote! {
        #[inline]
        pub fn #simple_fn_name(
            #receiver_param
            #( #required_param_decls, )*
        ) #return_decl {
            #receiver_self #extended_fn_name(
                #( #required_names, )*
            ).done()
        }

        #[inline]
        pub fn #extended_fn_name #fn_lifetime(
            #receiver_param_a
            #( #required_param_decls, )*
        ) -> super::#builder_ty #lifetime {
            super::#builder_ty::new(
                #( #surround_arg, )*
                #( #required_args_converted, )*
            )
        }
    };

    (functions, builders)
}
