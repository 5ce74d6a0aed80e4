/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Mapping of engine types and default values to Rust.

use std::sync::OnceLock;

use proc_macro2::{Literal, TokenStream};
use quote::quote;
use regex::Regex;

use crate::context::Context;
use crate::conv;
use crate::models::domain::{ArgPassing, ModName, RustTy};
use crate::util::ident;

/// Maps an engine type of the API description to its Rust type.
///
/// Every `int` is `i64` and every `float` is `f64`, as the call ABI passes them at full width irrespective of `meta`.
pub fn to_rust_type(godot_ty: &str, ctx: &Context) -> RustTy {
    let builtin = |name: &str, arg_passing| RustTy::BuiltinIdent {
        ty: ident(name),
        arg_passing,
    };

    match godot_ty {
        "bool" => builtin("bool", ArgPassing::ByValue),
        "int" => builtin("i64", ArgPassing::ByValue),
        "float" => builtin("f64", ArgPassing::ByValue),
        "String" => builtin("GString", ArgPassing::ImplInto),
        "StringName" => builtin("StringName", ArgPassing::ImplInto),
        "Vector2" | "Vector3" | "Color" | "Transform2D" => builtin(godot_ty, ArgPassing::ByValue),
        "Callable" | "Variant" => builtin(godot_ty, ArgPassing::ByRef),
        _ => {
            if let Some(qualified) = godot_ty.strip_prefix("enum::") {
                return to_enum_type(qualified);
            }

            if ctx.is_engine_class(godot_ty) {
                return RustTy::EngineClass {
                    inner_class: ident(&conv::to_pascal_case(godot_ty)),
                };
            }

            panic!("unsupported engine type `{godot_ty}`")
        }
    }
}

/// `Node.InternalMode` -> `crate::classes::node::InternalMode`; `Error` -> `crate::global::Error`.
fn to_enum_type(qualified: &str) -> RustTy {
    match qualified.split_once('.') {
        Some((class, enum_name)) => {
            let module = ModName::from_godot(class);
            let enum_ident = conv::make_enum_name(enum_name);

            RustTy::EngineEnum {
                tokens: quote! { crate::classes::#module::#enum_ident },
                surrounding_class: Some(class.to_string()),
            }
        }
        None => {
            let enum_ident = conv::make_enum_name(qualified);

            RustTy::EngineEnum {
                tokens: quote! { crate::global::#enum_ident },
                surrounding_class: None,
            }
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Default values

/// Converts the textual default value of a parameter to a Rust expression of the call tuple type.
///
/// # Panics
/// If the value cannot be represented; the API description and the generator are then out of sync.
pub fn to_rust_expr(default_value: &str, ty: &RustTy, ctx: &Context) -> TokenStream {
    match ty {
        RustTy::BuiltinIdent { ty, .. } => match ty.to_string().as_str() {
            "bool" => match default_value {
                "true" => quote! { true },
                "false" => quote! { false },
                _ => invalid_default(default_value, "bool"),
            },
            "i64" => {
                let lit = Literal::i64_unsuffixed(parse_int(default_value));
                quote! { #lit }
            }
            "f64" => {
                let lit = Literal::f64_suffixed(parse_float(default_value));
                quote! { #lit }
            }
            "GString" => {
                let text = unquote(default_value);
                quote! { GString::from(#text) }
            }
            "StringName" => {
                let text = unquote(default_value.trim_start_matches('&'));
                quote! { StringName::from(#text) }
            }
            "Vector2" | "Vector3" | "Color" => {
                let components = parse_constructor(default_value, &ty.to_string())
                    .into_iter()
                    .map(|c| Literal::f32_suffixed(c as f32));

                match ty.to_string().as_str() {
                    "Color" => quote! { Color::from_rgba(#(#components),*) },
                    _ => quote! { #ty::new(#(#components),*) },
                }
            }
            "Variant" if default_value == "null" => quote! { Variant::nil() },
            other => invalid_default(default_value, other),
        },

        RustTy::EngineEnum { tokens, surrounding_class } => {
            let value = parse_int(default_value);
            let qualified = match surrounding_class {
                Some(class) => format!("{class}.{}", enum_name_of(tokens)),
                None => enum_name_of(tokens),
            };

            match ctx.find_enumerator(&qualified, value) {
                Some(enumerator) => {
                    let enumerator = ident(enumerator);
                    quote! { #tokens::#enumerator }
                }
                None => {
                    let lit = Literal::i32_unsuffixed(value as i32);
                    quote! { #tokens::from_ord(#lit) }
                }
            }
        }

        RustTy::EngineClass { .. } => match default_value {
            "null" => quote! { ObjectArg::null() },
            _ => invalid_default(default_value, "object"),
        },
    }
}

fn enum_name_of(tokens: &TokenStream) -> String {
    let path = tokens.to_string();
    path.rsplit("::").next().unwrap_or(&path).trim().to_string()
}

fn parse_int(text: &str) -> i64 {
    text.parse()
        .unwrap_or_else(|_| invalid_default(text, "int"))
}

fn parse_float(text: &str) -> f64 {
    text.parse()
        .unwrap_or_else(|_| invalid_default(text, "float"))
}

fn unquote(text: &str) -> String {
    text.trim_matches('"').to_string()
}

/// Parses `Vector2(1, 2.5)` into its components.
fn parse_constructor(text: &str, expected_type: &str) -> Vec<f64> {
    static CONSTRUCTOR: OnceLock<Regex> = OnceLock::new();
    let regex = CONSTRUCTOR.get_or_init(|| {
        Regex::new(r"^(?P<ty>\w+)\((?P<args>[^)]*)\)$").expect("constructor regex is valid")
    });

    let Some(captures) = regex.captures(text.trim()) else {
        invalid_default(text, expected_type)
    };
    if &captures["ty"] != expected_type {
        invalid_default(text, expected_type)
    }

    captures["args"]
        .split(',')
        .map(|arg| parse_float(arg.trim()))
        .collect()
}

#[cold]
fn invalid_default(text: &str, ty: &str) -> ! {
    panic!("default value `{text}` not supported for type {ty}")
}
