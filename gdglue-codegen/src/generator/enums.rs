/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Engine enums, declared as newtype structs with associated constants.
//!
//! Newtypes instead of Rust enums: the engine may return ordinals unknown at generation time, and several enumerators can
//! share one value.

use proc_macro2::TokenStream;
use quote::quote;

use crate::models::domain::{Enum, Enumerator};

pub fn make_enums(enums: &[Enum]) -> TokenStream {
    let definitions = enums.iter().map(make_enum_definition);

    quote! {
        #( #definitions )*
    }
}

pub fn make_enum_definition(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;
    let godot_name = &enum_.godot_name;
    let doc = format!("Engine enum `{godot_name}`.");

    let enumerators = enum_.enumerators.iter().map(|e| {
        let Enumerator {
            name: enumerator,
            godot_name,
            value,
        } = e;
        let doc = format!("`{godot_name}` = {value}");

        quote! {
            #[doc = #doc]
            pub const #enumerator: #name = #name { ord: #value };
        }
    });

    let debug_impl = make_enum_debug_impl(enum_);
    let engine_trait_impl = make_enum_engine_trait_impl(enum_);
    let bitwise_impls = make_enum_bitwise_operators(enum_);

    quote! {
        #[doc = #doc]
        #[repr(transparent)]
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        pub struct #name {
            ord: i32
        }

        impl #name {
            #( #enumerators )*
        }

        #debug_impl
        #engine_trait_impl
        #bitwise_impls

        impl crate::meta::GodotConvert for #name {
            type Via = i64;
        }

        impl crate::meta::ToGodot for #name {
            fn to_godot(&self) -> Self::Via {
                <Self as crate::meta::EngineEnum>::ord(*self) as i64
            }
        }

        impl crate::meta::FromGodot for #name {
            fn try_from_godot(via: Self::Via) -> std::result::Result<Self, crate::meta::error::ConvertError> {
                i32::try_from(via)
                    .ok()
                    .and_then(<Self as crate::meta::EngineEnum>::try_from_ord)
                    .ok_or_else(|| crate::meta::error::FromGodotError::InvalidEnum.into_error(via))
            }
        }
    }
}

/// Prints the enumerator name for known values and the ordinal otherwise.
fn make_enum_debug_impl(enum_: &Enum) -> TokenStream {
    let enum_name = &enum_.name;
    let enum_name_str = enum_name.to_string();

    let enumerators = enum_.enumerators.iter().map(|enumerator| {
        let Enumerator { name, .. } = enumerator;
        let name_str = name.to_string();
        quote! {
            Self::#name => #name_str,
        }
    });

    quote! {
        impl std::fmt::Debug for #enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                // Duplicate values make later arms unreachable.
                #[allow(unreachable_patterns)]
                let enumerator = match *self {
                    #( #enumerators )*
                    _ => {
                        return f.debug_struct(#enum_name_str)
                            .field("ord", &self.ord)
                            .finish();
                    }
                };

                f.write_str(enumerator)
            }
        }
    }
}

fn make_enum_engine_trait_impl(enum_: &Enum) -> TokenStream {
    let name = &enum_.name;

    let try_from_body = if enum_.is_bitfield {
        // Any combination of flags is valid.
        quote! { Some(Self { ord }) }
    } else {
        let ords = enum_.enumerators.iter().map(|e| e.value);
        quote! {
            match ord {
                #( #ords )|* => Some(Self { ord }),
                _ => None,
            }
        }
    };

    let str_arms = enum_.enumerators.iter().map(|e| {
        let Enumerator { name, .. } = e;
        let name_str = name.to_string();
        quote! { Self::#name => #name_str, }
    });

    quote! {
        impl crate::meta::EngineEnum for #name {
            fn try_from_ord(ord: i32) -> Option<Self> {
                #try_from_body
            }

            fn ord(self) -> i32 {
                self.ord
            }

            fn as_str(&self) -> &'static str {
                #[allow(unreachable_patterns)]
                match *self {
                    #( #str_arms )*
                    _ => "",
                }
            }
        }
    }
}

fn make_enum_bitwise_operators(enum_: &Enum) -> TokenStream {
    if !enum_.is_bitfield {
        return TokenStream::new();
    }

    let name = &enum_.name;
    quote! {
        impl std::ops::BitOr for #name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self::Output {
                Self { ord: self.ord | rhs.ord }
            }
        }

        impl std::ops::BitOrAssign for #name {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = *self | rhs;
            }
        }
    }
}
