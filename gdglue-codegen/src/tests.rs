/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::PathBuf;

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::conv;
use crate::generator::{central_files, classes};
use crate::models::domain::{ExtensionApi, TyName};
use crate::models::json::{bundled_api_json, parse_extension_api, JsonExtensionApi};

fn bundled_api() -> JsonExtensionApi {
    parse_extension_api(bundled_api_json())
}

/// Token streams render with spaces between tokens; compare without whitespace.
fn squash(tokens: &TokenStream) -> String {
    tokens.to_string().replace(' ', "")
}

#[test]
fn test_pascal_conversion() {
    #[rustfmt::skip]
    let mappings = [
                 ("Node2D", "Node2D"),
             ("CanvasItem", "CanvasItem"),
             ("RefCounted", "RefCounted"),
              ("has_point", "HasPoint"),
                ("process", "Process"),
      ("physics_process", "PhysicsProcess"),
  ("setup_local_to_scene", "SetupLocalToScene"),
    ];

    for (name, expected) in mappings {
        let actual = conv::to_pascal_case(name);
        assert_eq!(actual, expected, "PascalCase: ident `{name}`");
    }
}

#[test]
fn test_snake_conversion() {
    #[rustfmt::skip]
    let mappings = [
                 ("Object", "object"),
                 ("Node2D", "node_2d"),
                 ("Node3D", "node_3d"),
             ("CanvasItem", "canvas_item"),
               ("ItemList", "item_list"),
             ("RefCounted", "ref_counted"),
    ];

    for (class_name, expected) in mappings {
        let actual = conv::to_snake_case(class_name);
        assert_eq!(actual, expected, "snake_case: ident `{class_name}`");
    }
}

#[test]
fn test_virtual_marker_names() {
    assert_eq!(conv::to_virtual_marker_name("_process").to_string(), "Process");
    assert_eq!(conv::to_virtual_marker_name("_has_point").to_string(), "HasPoint");
    assert_eq!(conv::to_virtual_marker_name("_enter_tree").to_string(), "EnterTree");
}

#[test]
fn test_enumerator_names() {
    let stripped = conv::make_enumerator_names(&[
        "INTERNAL_MODE_DISABLED",
        "INTERNAL_MODE_FRONT",
        "INTERNAL_MODE_BACK",
    ]);
    assert_eq!(stripped, ["DISABLED", "FRONT", "BACK"]);

    // No common prefix.
    let unchanged = conv::make_enumerator_names(&["OK", "FAILED", "ERR_UNAVAILABLE"]);
    assert_eq!(unchanged, ["OK", "FAILED", "ERR_UNAVAILABLE"]);

    // Stripping would leave identifiers starting with a digit.
    let digits = conv::make_enumerator_names(&["SIZE_1", "SIZE_2"]);
    assert_eq!(digits, ["SIZE_1", "SIZE_2"]);

    // Single enumerator keeps its name.
    let single = conv::make_enumerator_names(&["MODE_ONLY"]);
    assert_eq!(single, ["MODE_ONLY"]);
}

#[test]
fn test_bundled_api_loads() {
    let api = bundled_api();

    assert_eq!(api.header.version_major, 4);
    assert!(api.classes.iter().any(|c| c.name == "Node2D"));
    assert!(api.global_enums.iter().any(|e| e.name == "Error"));

    let object = api.classes.iter().find(|c| c.name == "Object").unwrap();
    assert_eq!(object.inherits, None);
}

#[test]
fn test_context_inheritance() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    let node_2d = TyName::from_godot("Node2D");
    let bases = ctx.inheritance_tree().collect_all_bases(&node_2d);
    let base_names: Vec<_> = bases.iter().map(|b| b.godot_ty.as_str()).collect();
    assert_eq!(base_names, ["CanvasItem", "Node", "Object"]);

    let direct = ctx.inheritance_tree().direct_base(&node_2d).unwrap();
    assert_eq!(direct.godot_ty, "CanvasItem");

    let object = TyName::from_godot("Object");
    assert!(ctx.inheritance_tree().collect_all_bases(&object).is_empty());

    // Node2D declares no signals itself.
    let nearest = ctx.nearest_class_with_signals(&node_2d).unwrap();
    assert_eq!(nearest.godot_ty, "CanvasItem");

    let ref_counted = TyName::from_godot("RefCounted");
    let nearest = ctx.nearest_class_with_signals(&ref_counted).unwrap();
    assert_eq!(nearest.godot_ty, "Object");
}

#[test]
fn test_context_enumerators() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    assert_eq!(ctx.find_enumerator("Node.InternalMode", 0), Some("DISABLED"));
    assert_eq!(ctx.find_enumerator("Node.InternalMode", 2), Some("BACK"));
    assert_eq!(ctx.find_enumerator("Node.InternalMode", 7), None);
    assert_eq!(ctx.find_enumerator("Error", 31), Some("ERR_INVALID_PARAMETER"));
    assert_eq!(ctx.find_enumerator("Unknown", 0), None);
}

#[test]
fn test_type_mapping() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    #[rustfmt::skip]
    let mappings = [
                         ("int", "i64"),
                       ("float", "f64"),
                      ("String", "GString"),
                     ("Vector2", "Vector2"),
                    ("Callable", "Callable"),
                        ("Node", "Gd<Node>"),
     ("enum::Node.InternalMode", "crate::classes::node::InternalMode"),
                 ("enum::Error", "crate::global::Error"),
    ];

    for (godot_ty, expected) in mappings {
        let actual = conv::to_rust_type(godot_ty, &ctx).doc_name();
        assert_eq!(actual, expected, "type mapping of `{godot_ty}`");
    }
}

#[test]
#[should_panic(expected = "unsupported engine type")]
fn test_type_mapping_unknown() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    conv::to_rust_type("PackedScene", &ctx);
}

#[test]
fn test_default_value_expressions() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    let bool_ty = conv::to_rust_type("bool", &ctx);
    assert_eq!(squash(&conv::to_rust_expr("true", &bool_ty, &ctx)), "true");

    let int_ty = conv::to_rust_type("int", &ctx);
    assert_eq!(squash(&conv::to_rust_expr("0", &int_ty, &ctx)), "0");

    let string_ty = conv::to_rust_type("String", &ctx);
    assert_eq!(
        squash(&conv::to_rust_expr("\"hello\"", &string_ty, &ctx)),
        "GString::from(\"hello\")"
    );

    let enum_ty = conv::to_rust_type("enum::Node.InternalMode", &ctx);
    assert_eq!(
        squash(&conv::to_rust_expr("1", &enum_ty, &ctx)),
        "crate::classes::node::InternalMode::FRONT"
    );

    // Unknown ordinals are kept as such.
    assert_eq!(
        squash(&conv::to_rust_expr("9", &enum_ty, &ctx)),
        "crate::classes::node::InternalMode::from_ord(9)"
    );

    let object_ty = conv::to_rust_type("Node", &ctx);
    assert_eq!(squash(&conv::to_rust_expr("null", &object_ty, &ctx)), "ObjectArg::null()");

    let vector_ty = conv::to_rust_type("Vector2", &ctx);
    assert!(squash(&conv::to_rust_expr("Vector2(1, 2.5)", &vector_ty, &ctx)).starts_with("Vector2::new("));
}

#[test]
#[should_panic(expected = "not supported for type")]
fn test_default_value_invalid() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);

    let vector_ty = conv::to_rust_type("Vector2", &ctx);
    conv::to_rust_expr("Vector3(1, 2, 3)", &vector_ty, &ctx);
}

#[test]
fn test_domain_mapping() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let node = api.classes.iter().find(|c| c.name.godot_ty == "Node").unwrap();

    // Virtual methods are not part of the method table.
    let virtual_names: Vec<_> = node.virtual_methods.iter().map(|m| m.godot_name.as_str()).collect();
    assert_eq!(
        virtual_names,
        ["_process", "_physics_process", "_enter_tree", "_exit_tree", "_ready"]
    );
    for (index, method) in node.methods.iter().enumerate() {
        assert_eq!(method.table_index, index, "table index of {}", method.godot_name);
    }

    let add_child = node.methods.iter().find(|m| m.godot_name == "add_child").unwrap();
    assert_eq!(add_child.hash, 3863233950);
    assert_eq!(add_child.required_params().len(), 1);
    assert_eq!(add_child.default_params().len(), 2);
    assert!(add_child.has_default_params());

    let object = api.classes.iter().find(|c| c.name.godot_ty == "Object").unwrap();
    let call = object.methods.iter().find(|m| m.godot_name == "call").unwrap();
    assert!(call.is_vararg);
    assert!(!call.has_default_params());

    // Keyword parameter names are escaped.
    let is_class = object.methods.iter().find(|m| m.godot_name == "is_class").unwrap();
    assert_eq!(is_class.params[0].name.to_string(), "class_");

    let node_enum = &node.enums[0];
    assert_eq!(node_enum.name.to_string(), "InternalMode");
    assert_eq!(node_enum.enumerators[1].name.to_string(), "FRONT");
    assert_eq!(node_enum.enumerators[1].value, 1);
}

#[test]
fn test_generated_files() {
    let json = bundled_api();
    let ctx = Context::build_from_api(&json);
    let api = ExtensionApi::from_json(&json, &ctx);

    let gen_path = std::env::temp_dir().join(format!("gdglue-codegen-test-{}", std::process::id()));
    let mut files: Vec<(PathBuf, TokenStream)> = vec![];

    classes::generate_class_files(&api, &ctx, &gen_path, &mut |path, tokens| files.push((path, tokens)));
    central_files::generate_core_central_file(&api, &gen_path, &mut |path, tokens| files.push((path, tokens)));
    let _ = std::fs::remove_dir_all(&gen_path);

    let file = |name: &str| {
        let (_, tokens) = files
            .iter()
            .find(|(path, _)| path.file_name().is_some_and(|f| f == name))
            .unwrap_or_else(|| panic!("file {name} not generated"));
        squash(tokens)
    };

    // One file per class, plus mod.rs.
    assert_eq!(files.len(), api.classes.len() + 2);

    let node = file("node.rs");
    assert!(node.contains("pubfnadd_child_ex<'a>(&'amutself,node:implAsObjectArg<crate::classes::Node>,)"));
    assert!(node.contains("pubstructExAddChild<'a>"));
    assert!(node.contains("sys::MethodKey::new(\"add_child\",3863233950i64)"));
    assert!(node.contains("pubstructProcess;"));
    assert!(node.contains("pubstructSignalsOfNode"));
    assert!(node.contains("base:Some(&super::object::CLASS_METADATA)"));
    assert!(node.contains("macro_rules!__gdglue_inherits_Node"));

    // Classes without own signals reuse the nearest collection.
    let node_2d = file("node_2d.rs");
    assert!(node_2d.contains("typeSignalCollection=crate::classes::canvas_item::SignalsOfCanvasItem;"));
    assert!(!node_2d.contains("pubstructSignalsOfNode2D"));

    let object = file("object.rs");
    assert!(object.contains("pubfntry_call(&mutself,method:implInto<StringName>,varargs:&[Variant])"));
    assert!(object.contains("typeBase=crate::obj::NoBase;"));
    assert!(!object.contains("implstd::ops::DerefforObject"));

    let mod_file = file("mod.rs");
    assert!(mod_file.contains("pubusenode_2d::re_export::Node2D;"));
    assert!(mod_file.contains("pubmodclass_macros{pubusecrate::*;"));
    assert!(mod_file.contains("pubusesuper::__gdglue_inherits_Node2Dasinherits;"));
    assert!(!mod_file.contains("crate::__gdglue_inherits"));

    let central = file("central.rs");
    assert!(central.contains("pubconstERR_INVALID_PARAMETER:Error=Error{ord:31i32};"));
}
