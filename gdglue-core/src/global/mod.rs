/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Global enums of the engine, and the logging macros.
//!
//! Engine methods that can fail report an [`Error`] code, e.g. `Object::connect()`.

mod print;

pub use crate::{godot_error, godot_script_error, godot_warn};

pub use crate::gen::central::global_enums::*;
