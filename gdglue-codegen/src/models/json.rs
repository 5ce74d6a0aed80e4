/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

// In #[derive(DeJson)]: "this block may be rewritten with the `?` operator"
#![allow(clippy::question_mark)]

// This file acts as deserialization check of the JSON file. Even if some fields are unused, having them declared makes sure they're
// deserializable and conform to our expectations.

use nanoserde::DeJson;

/// Environment variable pointing the generator at an API description other than the bundled one.
pub const API_JSON_ENV: &str = "GDGLUE_API_JSON";

const BUNDLED_API_JSON: &str = include_str!("../../res/extension_api.json");

// ----------------------------------------------------------------------------------------------------------------------------------------------
// JSON models

#[derive(DeJson)]
pub struct JsonExtensionApi {
    pub header: JsonHeader,
    pub classes: Vec<JsonClass>,
    pub global_enums: Vec<JsonEnum>,
}

#[derive(DeJson, Clone, Debug)]
pub struct JsonHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub version_patch: u8,
    #[allow(dead_code)]
    pub version_status: String,
    #[allow(dead_code)]
    pub version_build: String,
    pub version_full_name: String,
}

#[derive(DeJson)]
pub struct JsonClass {
    pub name: String,
    pub is_refcounted: bool,
    pub is_instantiable: bool,
    pub inherits: Option<String>,
    #[allow(dead_code)]
    pub api_type: String,
    pub enums: Option<Vec<JsonEnum>>,
    pub methods: Option<Vec<JsonClassMethod>>,
    pub signals: Option<Vec<JsonSignal>>,
    pub properties: Option<Vec<JsonProperty>>,
}

#[derive(DeJson)]
pub struct JsonEnum {
    pub name: String,
    pub is_bitfield: bool,
    pub values: Vec<JsonEnumConstant>,
}

#[derive(DeJson, Clone)]
pub struct JsonEnumConstant {
    pub name: String,

    // i64 is common denominator for enum and bitfield values.
    pub value: i64,
}

impl JsonEnumConstant {
    pub fn to_enum_ord(&self) -> i32 {
        self.value.try_into().unwrap_or_else(|_| {
            panic!(
                "enum value {} = {} is out of range for i32",
                self.name, self.value
            )
        })
    }
}

#[derive(DeJson)]
pub struct JsonProperty {
    #[allow(dead_code)]
    #[nserde(rename = "type")]
    pub type_: String,
    pub name: String,
    #[allow(dead_code)]
    pub setter: Option<String>,
    #[allow(dead_code)]
    pub getter: Option<String>,
}

#[derive(DeJson)]
pub struct JsonSignal {
    pub name: String,
    pub arguments: Option<Vec<JsonMethodArg>>,
}

#[derive(DeJson, Clone)]
pub struct JsonClassMethod {
    pub name: String,
    pub is_const: bool,
    pub is_vararg: bool,
    pub is_static: bool,
    pub is_virtual: bool,
    pub hash: Option<i64>,
    pub return_value: Option<JsonMethodReturn>,
    pub arguments: Option<Vec<JsonMethodArg>>,
}

// Example: select ->
// [ {name: "idx", type: "int", meta: "int32"},
//   {name: "single", type: "bool", default_value: "true"} ]
#[derive(DeJson, Clone)]
pub struct JsonMethodArg {
    pub name: String,
    #[nserde(rename = "type")]
    pub type_: String,
    /// Width of the value in the engine's storage. The call ABI always passes `int` as 64-bit and `float` as double.
    #[allow(dead_code)]
    pub meta: Option<String>,
    pub default_value: Option<String>,
}

// Example: get_item_count -> {type: "int", meta: "int32"}
#[derive(DeJson, Clone)]
pub struct JsonMethodReturn {
    #[nserde(rename = "type")]
    pub type_: String,
    #[allow(dead_code)]
    pub meta: Option<String>,
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

/// Loads the API description: the file named by `GDGLUE_API_JSON` if set, the bundled one otherwise.
pub fn load_extension_api() -> JsonExtensionApi {
    println!("cargo:rerun-if-env-changed={API_JSON_ENV}");

    let json = match std::env::var(API_JSON_ENV) {
        Ok(path) => {
            println!("cargo:rerun-if-changed={path}");
            std::fs::read_to_string(&path)
                .unwrap_or_else(|e| panic!("failed to read {API_JSON_ENV}={path}: {e}"))
        }
        Err(_) => BUNDLED_API_JSON.to_string(),
    };

    let model = parse_extension_api(&json);
    println!("Parsed extension_api.json for version {:?}", model.header);
    model
}

pub fn parse_extension_api(json: &str) -> JsonExtensionApi {
    DeJson::deserialize_json(json).unwrap_or_else(|e| panic!("failed to deserialize JSON: {e:?}"))
}

#[cfg(test)]
pub fn bundled_api_json() -> &'static str {
    BUNDLED_API_JSON
}
