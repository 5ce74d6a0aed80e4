/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Typed access to engine signals.
//!
//! Every class with signals has a generated collection, reached through [`Gd::signals()`]. Each of its methods returns a
//! [`TypedSignal`] bound to one object and one interned signal name:
//!
//! ```no_run
//! use gdglue::prelude::*;
//!
//! let mut node = Node::new_alloc();
//! let handler = node.signals().renamed().connect(|()| println!("renamed"));
//!
//! node.set_name("Player");
//! node.signals().renamed().disconnect(&handler);
//! node.free();
//! ```

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::rc::Rc;

use crate::builtin::{Callable, RustCallable, StringName, Variant};
use crate::classes::Object;
use crate::global::Error;
use crate::meta::error::CallError;
use crate::meta::{CallContext, InParamTuple, OutParamTuple};
use crate::obj::Gd;
use crate::registry::names::NameTable;
use crate::{godot_error, sys};

/// One signal of one object, with parameters `Ps` as a tuple.
///
/// Handlers connected through [`connect()`](Self::connect) receive the arguments converted to `Ps`; the engine's argument
/// count must match the tuple length exactly.
pub struct TypedSignal<Ps> {
    object: Gd<Object>,
    signal: &'static str,
    name: &'static StringName,
    _params: PhantomData<fn(Ps)>,
}

impl<Ps> TypedSignal<Ps> {
    /// Binds the signal `signal` of `object`, resolving its interned name in `names`.
    ///
    /// # Panics
    /// If the class of `names` has no signal named `signal`.
    #[doc(hidden)]
    pub fn new(object: Gd<Object>, names: &'static NameTable, signal: &'static str) -> Self {
        let name = names
            .signal(signal)
            .unwrap_or_else(|| panic!("class {} has no signal `{signal}`", names.class_name()));

        Self {
            object,
            signal,
            name,
            _params: PhantomData,
        }
    }

    /// Engine name of the signal.
    pub fn name(&self) -> &'static StringName {
        self.name
    }

    /// Object emitting the signal.
    pub fn object(&self) -> Gd<Object> {
        self.object.clone()
    }
}

impl<Ps: InParamTuple + 'static> TypedSignal<Ps> {
    /// Connects `function` and returns the handler, which can later be passed to [`disconnect()`](Self::disconnect).
    ///
    /// Connecting the same handler twice is rejected by the engine, and reported as an error.
    pub fn connect<F>(&self, function: F) -> SignalHandler<Ps>
    where
        F: FnMut(Ps) + 'static,
    {
        let handler = SignalHandler::new(self.signal, function);

        let err = self.connect_handler(&handler);
        if err != Error::OK {
            godot_error!("failed to connect handler to signal `{}`: {err:?}", self.signal);
        }

        handler
    }

    /// Connects an existing handler, e.g. one that was disconnected before. Returns the engine's result code.
    pub fn connect_handler(&self, handler: &SignalHandler<Ps>) -> Error {
        let callable = Callable::from_custom(handler.clone());

        sys::out!("connect {} -> {handler}", self.signal);
        let mut object = self.object.clone();
        object.connect(self.name, &callable)
    }

    /// Removes the connection of `handler`. No-op if it is not connected.
    pub fn disconnect(&self, handler: &SignalHandler<Ps>) {
        // The engine finds the connection by callable equality, i.e. by handler identity.
        let callable = Callable::from_custom(handler.clone());

        let mut object = self.object.clone();
        if object.is_connected(self.name, &callable) {
            sys::out!("disconnect {} -> {handler}", self.signal);
            object.disconnect(self.name, &callable);
        }
    }

    /// Whether `handler` is connected to this signal.
    pub fn is_connected(&self, handler: &SignalHandler<Ps>) -> bool {
        let callable = Callable::from_custom(handler.clone());
        self.object.is_connected(self.name, &callable)
    }
}

impl<Ps: OutParamTuple> TypedSignal<Ps> {
    /// Emits the signal: the engine calls every connected handler with `args`.
    pub fn emit(&self, args: Ps) {
        let mut object = self.object.clone();
        let err = object.emit_signal(self.name, &args.to_variant_array());

        if err != Error::OK {
            godot_error!("failed to emit signal `{}`: {err:?}", self.signal);
        }
    }
}

impl<Ps> fmt::Debug for TypedSignal<Ps> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypedSignal")
            .field("object", &self.object)
            .field("signal", &self.signal)
            .finish()
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------

/// Rust function connected to a signal.
///
/// Clones share the function; two handlers are equal iff they are clones of each other. This identity is what the engine
/// compares when disconnecting, so the same handler can be connected, disconnected and connected again.
pub struct SignalHandler<Ps> {
    signal: &'static str,
    function: Rc<RefCell<dyn FnMut(Ps)>>,
}

impl<Ps: 'static> SignalHandler<Ps> {
    fn new<F>(signal: &'static str, function: F) -> Self
    where
        F: FnMut(Ps) + 'static,
    {
        Self {
            signal,
            function: Rc::new(RefCell::new(function)),
        }
    }

    fn address(&self) -> *const () {
        Rc::as_ptr(&self.function) as *const ()
    }
}

impl<Ps: InParamTuple + 'static> RustCallable for SignalHandler<Ps> {
    fn invoke(&mut self, args: &[&Variant]) -> Result<Variant, CallError> {
        let call_ctx = CallContext::custom_callable(self.signal);
        let params = Ps::from_variant_array(args, &call_ctx)?;

        let mut function = self.function.try_borrow_mut().unwrap_or_else(|_| {
            panic!(
                "handler of signal `{}` called while already running; emitting a signal from its own handler is not supported",
                self.signal
            )
        });

        (*function)(params);
        Ok(Variant::nil())
    }
}

impl<Ps> Clone for SignalHandler<Ps> {
    fn clone(&self) -> Self {
        Self {
            signal: self.signal,
            function: Rc::clone(&self.function),
        }
    }
}

impl<Ps: 'static> PartialEq for SignalHandler<Ps> {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(self.address(), other.address())
    }
}

impl<Ps: 'static> Eq for SignalHandler<Ps> {}

impl<Ps: 'static> Hash for SignalHandler<Ps> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.address() as usize).hash(state);
    }
}

impl<Ps> fmt::Display for SignalHandler<Ps> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler of signal `{}`", self.signal)
    }
}

impl<Ps> fmt::Debug for SignalHandler<Ps> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalHandler")
            .field("signal", &self.signal)
            .field("address", &Rc::as_ptr(&self.function))
            .finish()
    }
}
