/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Identifier renamings (Godot -> Rust)

use proc_macro2::Ident;

use crate::util::ident;

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Case conversions

/// Class name to module name: `Node2D` -> `node_2d`, `ItemList` -> `item_list`.
pub fn to_snake_case(class_name: &str) -> String {
    use heck::ToSnakeCase;

    class_name
        .replace("1D", "_1d")
        .replace("2D", "_2d")
        .replace("3D", "_3d")
        .to_snake_case()
}

/// Class names are kept as-is (`Node2D` stays); snake_case names become PascalCase (`has_point` -> `HasPoint`).
pub fn to_pascal_case(name: &str) -> String {
    use heck::ToPascalCase;

    let is_already_pascal = name.starts_with(|c: char| c.is_ascii_uppercase()) && !name.contains('_');
    if is_already_pascal {
        return name.to_string();
    }

    name.to_pascal_case()
}

/// Marker type of a virtual method: `_has_point` -> `HasPoint`.
pub fn to_virtual_marker_name(godot_method_name: &str) -> Ident {
    ident(&to_pascal_case(godot_method_name.trim_start_matches('_')))
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Enum conversions

pub fn make_enum_name(enum_name: &str) -> Ident {
    ident(&to_pascal_case(enum_name))
}

/// Shortens enumerator names by the underscore-separated prefix they all share.
///
/// `INTERNAL_MODE_DISABLED`, `INTERNAL_MODE_FRONT` -> `DISABLED`, `FRONT`. Names stay unchanged when stripping would leave
/// an empty name or one starting with a digit, or when there is only one enumerator.
pub fn make_enumerator_names(enumerator_names: &[&str]) -> Vec<String> {
    let prefix = common_shout_prefix(enumerator_names);

    enumerator_names
        .iter()
        .map(|name| {
            let stripped = &name[prefix.len()..];
            let is_valid = !stripped.is_empty() && !stripped.starts_with(|c: char| c.is_ascii_digit());

            if is_valid {
                stripped.to_string()
            } else {
                name.to_string()
            }
        })
        .collect()
}

/// Longest prefix ending in `_` shared by all names.
fn common_shout_prefix<'a>(names: &[&'a str]) -> &'a str {
    let [first, rest @ ..] = names else {
        return "";
    };
    if rest.is_empty() {
        return "";
    }

    let mut prefix_len = 0;
    for (i, _) in first.match_indices('_') {
        let candidate = &first[..=i];
        if rest.iter().all(|name| name.starts_with(candidate)) {
            prefix_len = i + 1;
        } else {
            break;
        }
    }

    &first[..prefix_len]
}
