/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Domain models of the engine API, after mapping from JSON.
//!
//! Names are already converted to Rust conventions and types resolved to [`RustTy`]; generators only assemble tokens.

use std::fmt;

use proc_macro2::{Ident, TokenStream};
use quote::{quote, ToTokens};

use crate::conv;
use crate::util::ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// API and classes

pub struct ExtensionApi {
    pub godot_version: GodotApiVersion,
    pub classes: Vec<Class>,
    pub global_enums: Vec<Enum>,
}

pub struct GodotApiVersion {
    pub major: u8,
    pub minor: u8,
    pub patch: u8,
    pub version_string: String,
}

pub struct Class {
    pub name: TyName,
    pub mod_name: ModName,
    pub base_class: Option<TyName>,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub enums: Vec<Enum>,
    pub methods: Vec<ClassMethod>,
    pub virtual_methods: Vec<VirtualMethod>,
    pub signals: Vec<ClassSignal>,
    pub property_names: Vec<String>,
}

impl Class {
    pub fn name(&self) -> &TyName {
        &self.name
    }

    pub fn mod_name(&self) -> &ModName {
        &self.mod_name
    }

    /// Name of the module with the virtual method markers, e.g. `INode`.
    pub fn virtual_module_name(&self) -> Ident {
        ident(&format!("I{}", self.name.rust_ty))
    }

    /// Name of the signal collection, e.g. `SignalsOfNode`.
    pub fn signal_collection_name(&self) -> Ident {
        ident(&format!("SignalsOf{}", self.name.rust_ty))
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Functions

/// Engine method callable from Rust (ptrcall or varcall).
pub struct ClassMethod {
    pub godot_name: String,
    pub name: Ident,
    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
    pub hash: i64,
    pub is_vararg: bool,
    pub is_const: bool,
    pub is_static: bool,

    /// Position in the method table of the class.
    pub table_index: usize,
}

impl ClassMethod {
    /// Parameters without default value, which stay in the short-hand signature.
    pub fn required_params(&self) -> &[FnParam] {
        let first_default = self.first_default_index().unwrap_or(self.params.len());
        &self.params[..first_default]
    }

    /// Trailing parameters with default values; set through the `_ex` builder.
    pub fn default_params(&self) -> &[FnParam] {
        let first_default = self.first_default_index().unwrap_or(self.params.len());
        &self.params[first_default..]
    }

    pub fn has_default_params(&self) -> bool {
        !self.is_vararg && !self.default_params().is_empty()
    }

    fn first_default_index(&self) -> Option<usize> {
        // Only a trailing run of defaults can be omitted.
        let trailing = self
            .params
            .iter()
            .rev()
            .take_while(|p| p.default_value.is_some())
            .count();

        (trailing > 0).then(|| self.params.len() - trailing)
    }
}

/// Engine method overridable by extension classes.
pub struct VirtualMethod {
    pub godot_name: String,
    /// Marker type name, e.g. `Process` for `_process`.
    pub marker_name: Ident,
    pub params: Vec<FnParam>,
    pub return_value: FnReturn,
}

pub struct ClassSignal {
    pub name: String,
    pub params: Vec<FnParam>,
}

pub struct FnParam {
    pub name: Ident,
    pub type_: RustTy,
    /// Rust expression producing the default value, already in the type stored in the call tuple.
    pub default_value: Option<TokenStream>,
}

pub struct FnReturn {
    /// `-> T` or nothing.
    pub decl: TokenStream,
    pub type_: Option<RustTy>,
}

impl FnReturn {
    pub fn new(type_: Option<RustTy>) -> Self {
        let decl = match &type_ {
            Some(ty) => {
                let ret = ty.return_decl();
                quote! { -> #ret }
            }
            None => TokenStream::new(),
        };

        Self { decl, type_ }
    }

    /// Type used as `Ret` in `Signature<Params, Ret>`.
    pub fn call_ret_type(&self) -> TokenStream {
        match &self.type_ {
            Some(ty) => ty.return_decl(),
            None => quote! { () },
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

pub struct Enum {
    pub name: Ident,
    pub godot_name: String,
    pub is_bitfield: bool,
    pub enumerators: Vec<Enumerator>,
}

pub struct Enumerator {
    pub name: Ident,
    pub godot_name: String,
    pub value: i32,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Types

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TyName {
    pub godot_ty: String,
    pub rust_ty: Ident,
}

impl TyName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            godot_ty: godot_ty.to_owned(),
            rust_ty: ident(&conv::to_pascal_case(godot_ty)),
        }
    }
}

impl ToTokens for TyName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_ty.to_tokens(tokens)
    }
}

impl fmt::Display for TyName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.rust_ty.fmt(f)
    }
}

/// Contains naming conventions for modules.
#[derive(Clone, Debug)]
pub struct ModName {
    pub rust_mod: Ident,
}

impl ModName {
    pub fn from_godot(godot_ty: &str) -> Self {
        Self {
            rust_mod: ident(&conv::to_snake_case(godot_ty)),
        }
    }
}

impl ToTokens for ModName {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        self.rust_mod.to_tokens(tokens)
    }
}

/// How a parameter appears in the public signature.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ArgPassing {
    /// `x: Vector2`
    ByValue,
    /// `x: impl Into<GString>`
    ImplInto,
    /// `x: &Callable`, cloned into the call.
    ByRef,
}

#[derive(Clone, Debug)]
pub enum RustTy {
    /// `bool`, `i64`, `Vector2`, `GString`, `Callable`
    BuiltinIdent { ty: Ident, arg_passing: ArgPassing },

    /// `crate::classes::node::InternalMode` or `crate::global::Error`
    EngineEnum {
        tokens: TokenStream,

        /// `None` for globals.
        #[allow(dead_code)]
        surrounding_class: Option<String>,
    },

    /// Object of class `inner_class`. Parameters take `impl AsObjectArg<T>`, returns are `Option<Gd<T>>`.
    EngineClass { inner_class: Ident },
}

impl RustTy {
    /// Type in the parameter tuple of the call.
    pub fn param_type(&self) -> TokenStream {
        match self {
            Self::BuiltinIdent { ty, .. } => quote! { #ty },
            Self::EngineEnum { tokens, .. } => tokens.clone(),
            Self::EngineClass { inner_class } => quote! { ObjectArg<crate::classes::#inner_class> },
        }
    }

    /// Type of a signal parameter or virtual method parameter, as received by Rust handlers.
    pub fn received_type(&self) -> TokenStream {
        match self {
            Self::EngineClass { inner_class } => quote! { Gd<crate::classes::#inner_class> },
            _ => self.param_type(),
        }
    }

    /// Type in the public signature of an outbound method.
    pub fn param_decl(&self) -> TokenStream {
        match self {
            Self::BuiltinIdent {
                ty,
                arg_passing: ArgPassing::ImplInto,
            } => quote! { impl Into<#ty> },
            Self::BuiltinIdent {
                ty,
                arg_passing: ArgPassing::ByRef,
            } => quote! { &#ty },
            Self::EngineClass { inner_class } => quote! { impl AsObjectArg<crate::classes::#inner_class> },
            _ => self.param_type(),
        }
    }

    /// Converts parameter `name` from its declared form to the call tuple type.
    pub fn param_conversion(&self, name: &Ident) -> TokenStream {
        match self {
            Self::BuiltinIdent {
                arg_passing: ArgPassing::ImplInto,
                ..
            } => quote! { #name.into() },
            Self::BuiltinIdent {
                arg_passing: ArgPassing::ByRef,
                ..
            } => quote! { #name.clone() },
            Self::EngineClass { .. } => quote! { #name.as_object_arg() },
            _ => quote! { #name },
        }
    }

    pub fn return_decl(&self) -> TokenStream {
        match self {
            Self::EngineClass { inner_class } => quote! { Option<Gd<crate::classes::#inner_class>> },
            _ => self.param_type(),
        }
    }

    /// Signature as shown in docs, e.g. `Gd<Node>` or `i64`.
    pub fn doc_name(&self) -> String {
        match self {
            Self::BuiltinIdent { ty, .. } => ty.to_string(),
            Self::EngineEnum { tokens, .. } => tokens.to_string().replace(' ', ""),
            Self::EngineClass { inner_class } => format!("Gd<{inner_class}>"),
        }
    }
}
