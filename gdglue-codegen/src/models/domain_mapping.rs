/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::context::Context;
use crate::conv;
use crate::models::domain::{
    Class, ClassMethod, ClassSignal, Enum, Enumerator, ExtensionApi, FnParam, FnReturn, GodotApiVersion, ModName,
    TyName, VirtualMethod,
};
use crate::models::json::{
    JsonClass, JsonClassMethod, JsonEnum, JsonExtensionApi, JsonHeader, JsonMethodArg, JsonMethodReturn, JsonSignal,
};
use crate::util::{ident, safe_ident};

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Top-level

impl ExtensionApi {
    pub fn from_json(json: &JsonExtensionApi, ctx: &Context) -> Self {
        Self {
            godot_version: GodotApiVersion::from_json(&json.header),
            classes: json
                .classes
                .iter()
                .map(|class| Class::from_json(class, ctx))
                .collect(),
            global_enums: json.global_enums.iter().map(Enum::from_json).collect(),
        }
    }
}

impl GodotApiVersion {
    pub fn from_json(json: &JsonHeader) -> Self {
        Self {
            major: json.version_major,
            minor: json.version_minor,
            patch: json.version_patch,
            version_string: json.version_full_name.clone(),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Classes

impl Class {
    pub fn from_json(json: &JsonClass, ctx: &Context) -> Self {
        let ty_name = TyName::from_godot(&json.name);
        let mod_name = ModName::from_godot(&json.name);

        let enums = option_as_slice(&json.enums).iter().map(Enum::from_json).collect();

        let mut methods = vec![];
        let mut virtual_methods = vec![];
        for method in option_as_slice(&json.methods) {
            if method.is_virtual {
                virtual_methods.push(VirtualMethod::from_json(method, ctx));
            } else {
                // Index into the method table; only non-virtual methods have a bind.
                let table_index = methods.len();
                methods.push(ClassMethod::from_json(method, &ty_name, table_index, ctx));
            }
        }

        let signals = option_as_slice(&json.signals)
            .iter()
            .map(|s| ClassSignal::from_json(s, ctx))
            .collect();

        let property_names = option_as_slice(&json.properties)
            .iter()
            .map(|p| p.name.clone())
            .collect();

        Self {
            name: ty_name,
            mod_name,
            base_class: json.inherits.as_deref().map(TyName::from_godot),
            is_refcounted: json.is_refcounted,
            is_instantiable: json.is_instantiable,
            enums,
            methods,
            virtual_methods,
            signals,
            property_names,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Functions

impl ClassMethod {
    pub fn from_json(json: &JsonClassMethod, class_name: &TyName, table_index: usize, ctx: &Context) -> Self {
        let hash = json.hash.unwrap_or_else(|| {
            panic!(
                "class method {}::{} has no hash; only virtual methods may omit it",
                class_name.godot_ty, json.name
            )
        });

        let params = FnParam::new_range(&json.arguments, ctx);

        // Varargs methods may have defaults in the description, but they are not addressable by position.
        if json.is_vararg {
            assert!(
                params.iter().all(|p| p.default_value.is_none()),
                "varargs method {}::{} must not have default parameters",
                class_name.godot_ty,
                json.name
            );
        }

        Self {
            godot_name: json.name.clone(),
            name: safe_ident(&json.name),
            params,
            return_value: FnReturn::from_json(&json.return_value, ctx),
            hash,
            is_vararg: json.is_vararg,
            is_const: json.is_const,
            is_static: json.is_static,
            table_index,
        }
    }
}

impl VirtualMethod {
    pub fn from_json(json: &JsonClassMethod, ctx: &Context) -> Self {
        Self {
            godot_name: json.name.clone(),
            marker_name: conv::to_virtual_marker_name(&json.name),
            params: FnParam::new_range(&json.arguments, ctx),
            return_value: FnReturn::from_json(&json.return_value, ctx),
        }
    }
}

impl ClassSignal {
    pub fn from_json(json: &JsonSignal, ctx: &Context) -> Self {
        Self {
            name: json.name.clone(),
            params: FnParam::new_range(&json.arguments, ctx),
        }
    }
}

impl FnParam {
    pub fn new_range(json_args: &Option<Vec<JsonMethodArg>>, ctx: &Context) -> Vec<FnParam> {
        option_as_slice(json_args)
            .iter()
            .map(|arg| Self::from_json(arg, ctx))
            .collect()
    }

    fn from_json(json: &JsonMethodArg, ctx: &Context) -> Self {
        let type_ = conv::to_rust_type(&json.type_, ctx);
        let default_value = json
            .default_value
            .as_deref()
            .map(|value| conv::to_rust_expr(value, &type_, ctx));

        Self {
            name: safe_ident(&json.name),
            type_,
            default_value,
        }
    }
}

impl FnReturn {
    pub fn from_json(json: &Option<JsonMethodReturn>, ctx: &Context) -> Self {
        let type_ = json.as_ref().map(|ret| conv::to_rust_type(&ret.type_, ctx));
        Self::new(type_)
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enums

impl Enum {
    pub fn from_json(json: &JsonEnum) -> Self {
        let godot_names = json.values.iter().map(|v| v.name.as_str()).collect::<Vec<_>>();
        let rust_names = conv::make_enumerator_names(&godot_names);

        let enumerators = json
            .values
            .iter()
            .zip(rust_names)
            .map(|(value, rust_name)| Enumerator {
                name: ident(&rust_name),
                godot_name: value.name.clone(),
                value: value.to_enum_ord(),
            })
            .collect();

        Self {
            name: conv::make_enum_name(&json.name),
            godot_name: json.name.clone(),
            is_bitfield: json.is_bitfield,
            enumerators,
        }
    }
}

fn option_as_slice<T>(option: &Option<Vec<T>>) -> &[T] {
    option.as_ref().map_or(&[], Vec::as_slice)
}
