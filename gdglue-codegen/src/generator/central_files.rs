/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::path::Path;

use proc_macro2::TokenStream;
use quote::quote;

use crate::generator::enums;
use crate::models::domain::ExtensionApi;
use crate::SubmitFn;

pub fn generate_core_central_file(api: &ExtensionApi, gen_path: &Path, submit_fn: &mut SubmitFn<'_>) {
    let core_code = make_core_central_code(api);

    submit_fn(gen_path.join("central.rs"), core_code);
}

pub fn make_core_central_code(api: &ExtensionApi) -> TokenStream {
    let global_enum_defs = enums::make_enums(&api.global_enums);

    let version_string = &api.godot_version.version_string;
    let major = api.godot_version.major;
    let minor = api.godot_version.minor;
    let patch = api.godot_version.patch;

    quote! {
        /// Engine version the bindings were generated from.
        pub const GODOT_VERSION_STRING: &str = #version_string;
        pub const GODOT_VERSION: (u8, u8, u8) = (#major, #minor, #patch);

        pub mod global_enums {
            #global_enum_defs
        }
    }
}
