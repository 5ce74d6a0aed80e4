/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use proc_macro2::{Ident, Literal, TokenStream};
use quote::{format_ident, quote};

pub fn ident(s: &str) -> Ident {
    format_ident!("{}", s)
}

/// Appends `_` to Rust keywords, so that parameters like `class` or `type` stay usable as identifiers.
#[rustfmt::skip]
pub fn safe_ident(s: &str) -> Ident {
    // See also: https://doc.rust-lang.org/reference/keywords.html
    match s {
        // Lexer
        | "as" | "break" | "const" | "continue" | "crate" | "else" | "enum" | "extern" | "false" | "fn" | "for" | "if"
        | "impl" | "in" | "let" | "loop" | "match" | "mod" | "move" | "mut" | "pub" | "ref" | "return" | "self" | "Self"
        | "static" | "struct" | "super" | "trait" | "true" | "type" | "unsafe" | "use" | "where" | "while"

        // Lexer 2018+
        | "async" | "await" | "dyn"

        // Reserved
        | "abstract" | "become" | "box" | "do" | "final" | "macro" | "override" | "priv" | "typeof" | "unsized" | "virtual" | "yield"

        // Reserved 2018+
        | "try" | "gen"

        // Used by the generated method bodies; parameters must not shadow them.
        | "args" | "method_bind" | "call_ctx" | "object_ptr" | "varargs"
           => format_ident!("{}_", s),

         _ => ident(s)
    }
}

pub fn strlit(s: &str) -> Literal {
    Literal::string(s)
}

/// Imports shared by every generated class file.
pub fn make_imports() -> TokenStream {
    quote! {
        use gdglue_ffi as sys;
        use crate::builtin::*;
        use crate::classes::ensure_object_alive;
        use crate::meta::{AsObjectArg, CallContext, ClassName, EngineEnum, ObjectArg, Signature};
        use crate::meta::error::CallError;
        use crate::obj::{Gd, GodotClass};
        use crate::private::ObjectRtti;
        use crate::registry::names::{ClassMetadata, NameTable, VirtualMethodInfo};
    }
}
