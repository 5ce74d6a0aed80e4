/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! # Internal crate of [**gdglue**](https://docs.rs/gdglue)
//!
//! Do not depend on this crate directly, instead use the `gdglue` crate.
//! No SemVer or other guarantees are provided.
//!
//! Reads the engine API description (`extension_api.json`) and emits the engine class bindings of `gdglue-core`.

mod context;
mod conv;
mod generator;
mod models;
mod util;

#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};

use proc_macro2::TokenStream;

use crate::context::Context;
use crate::generator::{central_files, classes};
use crate::models::domain::ExtensionApi;
use crate::models::json::load_extension_api;

pub type SubmitFn<'a> = dyn FnMut(PathBuf, TokenStream) + 'a;

fn write_file(path: &Path, contents: String) {
    if let Some(dir) = path.parent() {
        let _ = std::fs::create_dir_all(dir);
    }

    std::fs::write(path, contents)
        .unwrap_or_else(|e| panic!("failed to write code file to {};\n\t{}", path.display(), e));
}

#[cfg(feature = "codegen-rustfmt")]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());

    let status = std::process::Command::new("rustfmt")
        .arg("--edition=2021")
        .arg(&path)
        .status();

    match status {
        Ok(status) if status.success() => {}
        Ok(status) => println!("cargo:warning=rustfmt failed on {} ({status})", path.display()),
        Err(e) => println!("cargo:warning=rustfmt not available: {e}"),
    }
}

#[cfg(not(feature = "codegen-rustfmt"))]
fn submit_fn(path: PathBuf, tokens: TokenStream) {
    write_file(&path, tokens.to_string());
}

/// Generates all files of `gdglue-core/src/gen` into `core_gen_path`.
///
/// Existing contents of the directory are replaced.
pub fn generate_core_files(core_gen_path: &Path) {
    let json_api = load_extension_api();

    let ctx = Context::build_from_api(&json_api);
    let api = ExtensionApi::from_json(&json_api, &ctx);

    generator::generate_core_mod_file(core_gen_path, &mut submit_fn);
    central_files::generate_core_central_file(&api, core_gen_path, &mut submit_fn);
    classes::generate_class_files(&api, &ctx, &core_gen_path.join("classes"), &mut submit_fn);

    println!(
        "Generated bindings for {} classes, {} global enums ({})",
        api.classes.len(),
        api.global_enums.len(),
        api.godot_version.version_string
    );
}
