/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use quote::quote;

use crate::SubmitFn;

pub mod central_files;
pub mod classes;
pub mod default_parameters;
pub mod enums;
pub mod functions_common;
pub mod signals;
pub mod virtual_traits;

// ----------------------------------------------------------------------------------------------------------------------------------------------

// File generation functions are in specific modules:
// - central_files (global enums)
// - classes (one file per class, plus the classes module file)

pub fn generate_core_mod_file(gen_path: &Path, submit_fn: &mut SubmitFn<'_>) {
    let code = quote! {
        pub mod central;
        pub mod classes;
    };

    submit_fn(gen_path.join("mod.rs"), code);
}
