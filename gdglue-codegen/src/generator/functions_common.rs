/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, TokenStream};
use quote::{format_ident, quote};

use crate::generator::default_parameters;
use crate::models::domain::{Class, ClassMethod, FnParam};
use crate::util::strlit;

pub struct FnReceiver {
    /// `&self`, `&mut self`, (none)
    pub param: TokenStream,

    /// `&'a self`, `&'a mut self`, (none)
    pub param_lifetime_a: TokenStream,

    /// `self.__checked_object_ptr(&call_ctx)`, `std::ptr::null_mut()`
    pub ffi_arg: TokenStream,

    /// `Self::`, `self.`
    pub self_prefix: TokenStream,

    /// Whether the receiver is `&self`.
    pub is_const: bool,
    pub is_static: bool,
}

pub struct FnDefinition {
    pub functions: TokenStream,
    pub builders: TokenStream,
}

pub struct FnDefinitions {
    pub functions: TokenStream,
    pub builders: TokenStream,
}

impl FnDefinitions {
    /// Combines separate code from multiple function definitions into one, split by functions and builders.
    pub fn expand(definitions: impl Iterator<Item = FnDefinition>) -> FnDefinitions {
        // Collect needed because borrowed by 2 closures
        let definitions: Vec<_> = definitions.collect();
        let functions = definitions.iter().map(|def| &def.functions);
        let builder_structs = definitions.iter().map(|def| &def.builders);

        FnDefinitions {
            functions: quote! { #( #functions )* },
            builders: quote! { #( #builder_structs )* },
        }
    }
}

/// How parameters appear in a generated function.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum FnKind {
    /// Public signature: `impl Into<GString>`, `&Callable`, `impl AsObjectArg<Node>`; converted into the call tuple.
    Regular,

    /// `*_full()` behind a default-param builder: already in call tuple types.
    DefaultFull,

    /// `call()` forwarding to `try_call()`: public signature, passed on unconverted.
    DelegateTry,
}

// Gathers multiple token vectors related to function parameters.
#[derive(Default)]
pub struct FnParamTokens {
    pub param_decls: Vec<TokenStream>,
    pub callsig_param_types: Vec<TokenStream>,
    pub arg_exprs: Vec<TokenStream>,
}

pub fn make_params_exprs<'a>(params: impl Iterator<Item = &'a FnParam>, kind: FnKind) -> FnParamTokens {
    let mut ret = FnParamTokens::default();

    for param in params {
        let FnParam { name, type_, .. } = param;
        let param_type = type_.param_type();

        match kind {
            FnKind::Regular => {
                let decl = type_.param_decl();
                ret.param_decls.push(quote! { #name: #decl });
                ret.arg_exprs.push(type_.param_conversion(name));
            }
            FnKind::DefaultFull => {
                ret.param_decls.push(quote! { #name: #param_type });
                ret.arg_exprs.push(quote! { #name });
            }
            FnKind::DelegateTry => {
                let decl = type_.param_decl();
                ret.param_decls.push(quote! { #name: #decl });
                ret.arg_exprs.push(quote! { #name });
            }
        }

        ret.callsig_param_types.push(param_type);
    }

    ret
}

pub fn make_receiver(method: &ClassMethod) -> FnReceiver {
    if method.is_static {
        return FnReceiver {
            param: TokenStream::new(),
            param_lifetime_a: TokenStream::new(),
            ffi_arg: quote! { std::ptr::null_mut() },
            self_prefix: quote! { Self:: },
            is_const: false,
            is_static: true,
        };
    }

    let (param, param_lifetime_a) = if method.is_const {
        (quote! { &self, }, quote! { &'a self, })
    } else {
        (quote! { &mut self, }, quote! { &'a mut self, })
    };

    FnReceiver {
        param,
        param_lifetime_a,
        ffi_arg: quote! { self.__checked_object_ptr(&call_ctx) },
        self_prefix: quote! { self. },
        is_const: method.is_const,
        is_static: false,
    }
}

/// Generates an outbound engine method: the public function, plus `_ex`/`_full` functions and the builder struct if the
/// method has default parameters, plus a `try_` variant for varargs methods.
pub fn make_method_definition(class: &Class, method: &ClassMethod) -> FnDefinition {
    let receiver = make_receiver(method);
    let has_default_params = method.has_default_params();

    let rust_method_name = &method.name;
    let primary_fn_name = if has_default_params {
        format_ident!("{}_full", rust_method_name)
    } else {
        rust_method_name.clone()
    };

    let vis = if has_default_params {
        // Public API mapped by separate function. Crate-visible because the builder lives outside `re_export`.
        quote! { pub(crate) }
    } else {
        quote! { pub }
    };

    let kind = if has_default_params {
        FnKind::DefaultFull
    } else {
        FnKind::Regular
    };

    let FnParamTokens {
        param_decls,
        callsig_param_types,
        arg_exprs,
    } = make_params_exprs(method.params.iter(), kind);

    let return_decl = &method.return_value.decl;
    let call_ret = method.return_value.call_ret_type();
    let receiver_param = &receiver.param;

    let call_sig_decl = quote! {
        type CallRet = #call_ret;
        type CallParams = (#( #callsig_param_types, )*);
    };

    let invocation_prelude = make_invocation_prelude(class, method, &receiver);

    let primary_function = if method.is_vararg {
        let try_fn_name = format_ident!("try_{}", rust_method_name);
        let self_arg = (!receiver.is_static).then(|| quote! { self, });

        // A function() calls try_function(), so its arguments are forwarded without conversion.
        let FnParamTokens {
            arg_exprs: arg_names_unconverted,
            ..
        } = make_params_exprs(method.params.iter(), FnKind::DelegateTry);

        quote! {
            /// # Panics
            /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
            /// It can detect call failures and will panic in such a case.
            #vis fn #primary_fn_name(
                #receiver_param
                #( #param_decls, )*
                varargs: &[Variant]
            ) #return_decl {
                Self::#try_fn_name(#self_arg #( #arg_names_unconverted, )* varargs)
                    .unwrap_or_else(|e| panic!("{e}"))
            }

            /// # Return type
            /// This is a _varcall_ method, meaning parameters and return values are passed as `Variant`.
            /// It can detect call failures and will return `Err` in such a case.
            #vis fn #try_fn_name(
                #receiver_param
                #( #param_decls, )*
                varargs: &[Variant]
            ) -> Result<#call_ret, CallError> {
                #call_sig_decl

                let args = (#( #arg_exprs, )*);

                unsafe {
                    #invocation_prelude
                    Signature::<CallParams, CallRet>::out_class_varcall(method_bind, &call_ctx, object_ptr, args, varargs)
                }
            }
        }
    } else {
        quote! {
            #vis fn #primary_fn_name(
                #receiver_param
                #( #param_decls, )*
            ) #return_decl {
                #call_sig_decl

                let args = (#( #arg_exprs, )*);

                unsafe {
                    #invocation_prelude
                    Signature::<CallParams, CallRet>::out_class_ptrcall(method_bind, &call_ctx, object_ptr, args)
                }
            }
        }
    };

    let (default_fn_code, builders) = if has_default_params {
        default_parameters::make_function_definition_with_defaults(class, method, &receiver, &primary_fn_name)
    } else {
        (TokenStream::new(), TokenStream::new())
    };

    FnDefinition {
        functions: quote! {
            #default_fn_code
            #primary_function
        },
        builders,
    }
}

/// Statements binding `method_bind`, `call_ctx` and `object_ptr` for the call.
fn make_invocation_prelude(class: &Class, method: &ClassMethod, receiver: &FnReceiver) -> TokenStream {
    let table_index = method.table_index;
    let class_str = strlit(&class.name.godot_ty);
    let method_str = strlit(&method.godot_name);
    let object_ptr = &receiver.ffi_arg;

    quote! {
        let method_bind = METHOD_TABLE.bind(#table_index);
        let call_ctx = CallContext::outbound(#class_str, #method_str);
        let object_ptr = #object_ptr;
    }
}

/// Identifiers of the given parameters, e.g. for forwarding.
pub fn param_names(params: &[FnParam]) -> Vec<&Ident> {
    params.iter().map(|p| &p.name).collect()
}
