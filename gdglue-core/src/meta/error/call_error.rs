/*
 * Copyright (c) godot-rust; Bromeon and contributors.
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::error::Error;
use std::fmt;

use crate::builtin::{Variant, VariantType};
use crate::meta::error::{ConvertError, ErasedConvertError};
use crate::meta::CallContext;
use crate::sys;

/// Error capable of representing failed function calls.
///
/// Returned from _varcall_ functions of the engine API that begin with `try_`, e.g.
/// [`Object::try_call()`](crate::classes::Object::try_call). Also produced when the engine calls into Rust (virtual
/// method overrides, signal handlers) and the call cannot be completed.
///
/// # Possible error causes
/// - **Invalid method**: the method does not exist on the object.
/// - **Failed argument conversion**: the arguments cannot be converted to the declared parameter types.
/// - **Failed return value conversion**: the returned `Variant` cannot be converted to the expected return type.
/// - **Too many or too few arguments**: the number of arguments does not match the number of parameters.
/// - **User panic**: a Rust function panicked.
///
/// # Chained errors
/// When `Object::try_call()` invokes a Rust override which fails, the returned error refers to `Object::call`, and its
/// [`source()`](Error::source) is the `CallError` of the override.
pub struct CallError {
    // Boxed to keep Result<..., CallError> small.
    b: Box<InnerCallError>,
}

#[derive(Debug)]
struct InnerCallError {
    class_name: String,
    function_name: String,
    call_expr: String,
    reason: String,
    source: Option<SourceError>,

    /// `(arg_count, param_count)` if the call failed on its argument count.
    arg_count_mismatch: Option<(usize, usize)>,
}

impl CallError {
    // Naming:
    // - check_* means possible failure -- Result<(), Self> is returned.
    // - failed_* means definitive failure -- Self is returned.

    /// Name of the class whose method failed. **Not** the dynamic type.
    ///
    /// Returns `None` if there is no surrounding class, e.g. for custom callables.
    pub fn class_name(&self) -> Option<&str> {
        if self.b.class_name.is_empty() {
            None
        } else {
            Some(&self.b.class_name)
        }
    }

    /// Name of the function or method that failed.
    pub fn method_name(&self) -> &str {
        &self.b.function_name
    }

    /// Whether the call failed because of too many or too few arguments.
    pub fn is_arg_count_mismatch(&self) -> bool {
        self.b.arg_count_mismatch.is_some()
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Result<(), Self>; possible failure

    /// Checks whether number of arguments matches the number of parameters.
    pub(crate) fn check_arg_count(call_ctx: &CallContext, arg_count: usize, param_count: usize) -> Result<(), Self> {
        if arg_count == param_count {
            return Ok(());
        }

        Err(Self::failed_param_count(call_ctx, arg_count, param_count))
    }

    /// Checks the engine side of a varcall (low-level `sys::GDExtensionCallError`).
    pub(crate) fn check_out_varcall(
        call_ctx: &CallContext,
        err: sys::GDExtensionCallError,
        explicit_args: &[Variant],
        varargs: &[Variant],
    ) -> Result<(), Self> {
        if err.error == sys::GDEXTENSION_CALL_OK {
            return Ok(());
        }

        let mut arg_types = Vec::with_capacity(explicit_args.len() + varargs.len());
        arg_types.extend(explicit_args.iter().map(Variant::get_type));
        arg_types.extend(varargs.iter().map(Variant::get_type));

        let explicit_args_str = sys::join_debug(explicit_args);
        let vararg_str = if varargs.is_empty() {
            String::new()
        } else {
            format!(", [va] {}", sys::join_debug(varargs))
        };

        let call_expr = format!("{call_ctx}({explicit_args_str}{vararg_str})");

        // If the call error encodes an error generated by us, decode it.
        let mut source_error = None;
        if err.error == sys::GDGLUE_CUSTOM_CALL_ERROR {
            source_error = crate::private::call_error_remove(&err).map(SourceError::Call);
        }

        Err(Self::failed_varcall_inner(
            call_ctx,
            call_expr,
            err,
            &arg_types,
            explicit_args.len(),
            source_error,
        ))
    }

    // ------------------------------------------------------------------------------------------------------------------------------------------
    // Constructors returning Self; guaranteed failure

    /// Returns an error for a failed parameter conversion.
    pub(crate) fn failed_param_conversion<P>(
        call_ctx: &CallContext,
        param_index: usize,
        convert_error: ConvertError,
    ) -> Self {
        let param_ty = std::any::type_name::<P>();

        Self::new(
            call_ctx,
            format!("parameter #{param_index} ({param_ty}) conversion"),
            Some(convert_error),
        )
    }

    fn failed_param_conversion_engine(
        call_ctx: &CallContext,
        param_index: i32,
        actual: Option<VariantType>,
        expected: Option<VariantType>,
    ) -> Self {
        let name = |ty: Option<VariantType>| ty.map_or("<unknown>", VariantType::godot_name);

        // Same wording as in FromVariantError's Display impl.
        let reason = format!(
            "parameter #{param_index} -- cannot convert from {} to {}",
            name(actual),
            name(expected)
        );

        Self::new(call_ctx, reason, None)
    }

    /// Returns an error for a failed return type conversion.
    ///
    /// Outbound engine calls have statically typed returns, so this only occurs if bindings and engine disagree.
    pub(crate) fn failed_return_conversion<R>(call_ctx: &CallContext, convert_error: ConvertError) -> Self {
        let return_ty = std::any::type_name::<R>();

        Self::new(
            call_ctx,
            format!("return value {return_ty} conversion"),
            Some(convert_error),
        )
    }

    fn failed_param_count(call_ctx: &CallContext, arg_count: usize, param_count: usize) -> CallError {
        let param_plural = plural(param_count);
        let arg_plural = plural(arg_count);

        let mut call_error = Self::new(
            call_ctx,
            format!("function has {param_count} parameter{param_plural}, but received {arg_count} argument{arg_plural}"),
            None,
        );

        call_error.b.arg_count_mismatch = Some((arg_count, param_count));
        call_error
    }

    fn failed_varcall_inner(
        call_ctx: &CallContext,
        call_expr: String,
        err: sys::GDExtensionCallError,
        arg_types: &[VariantType],
        vararg_offset: usize,
        source: Option<SourceError>,
    ) -> Self {
        // This specializes on reflection-style calls, e.g. call() or emit_signal().
        // In these cases, varargs are the _actual_ arguments, with required args being metadata such as method name.

        debug_assert_ne!(err.error, sys::GDEXTENSION_CALL_OK); // already checked outside

        let sys::GDExtensionCallError {
            error,
            argument,
            expected,
        } = err;

        let mut call_error = match error {
            sys::GDEXTENSION_CALL_ERROR_INVALID_METHOD => Self::new(call_ctx, "method not found", None),
            sys::GDEXTENSION_CALL_ERROR_INVALID_ARGUMENT => {
                // Index calculation relies on patterns like call("...", varargs).
                let from = usize::try_from(argument)
                    .ok()
                    .and_then(|index| arg_types.get(vararg_offset + index))
                    .copied();
                let to = VariantType::try_from_sys(expected as sys::GDExtensionVariantType);
                let i = argument + 1;

                Self::failed_param_conversion_engine(call_ctx, i, from, to)
            }
            sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS | sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS => {
                let arg_count = arg_types.len().saturating_sub(vararg_offset);
                let param_count = expected.max(0) as usize;
                Self::failed_param_count(call_ctx, arg_count, param_count)
            }
            sys::GDEXTENSION_CALL_ERROR_INSTANCE_IS_NULL => Self::new(call_ctx, "instance is null", None),
            sys::GDEXTENSION_CALL_ERROR_METHOD_NOT_CONST => Self::new(call_ctx, "method is not const", None),
            sys::GDGLUE_CUSTOM_CALL_ERROR => {
                // Not emitted by the engine; details are in the source error.
                Self::new(call_ctx, String::new(), None)
            }
            _ => Self::new(call_ctx, format!("unknown reason (error code {error})"), None),
        };

        call_error.b.source = source;
        call_error.b.call_expr = call_expr;
        call_error
    }

    #[doc(hidden)]
    pub fn failed_by_user_panic(call_ctx: &CallContext, panic_message: String) -> Self {
        Self::new(call_ctx, format!("function panicked: {panic_message}"), None)
    }

    fn new(call_ctx: &CallContext, reason: impl Into<String>, source: Option<ConvertError>) -> Self {
        let inner = InnerCallError {
            class_name: call_ctx.class_name.to_string(),
            function_name: call_ctx.function_name.to_string(),
            call_expr: format!("{call_ctx}()"),
            reason: reason.into(),
            source: source.map(|e| SourceError::Convert {
                value: e.value().map_or_else(String::new, |v| format!("{v:?}")),
                erased_error: e.into(),
            }),
            arg_count_mismatch: None,
        };

        Self { b: Box::new(inner) }
    }

    /// Standard engine error for this failure, if one exists.
    ///
    /// Argument count mismatches map to `TOO_MANY_ARGUMENTS` / `TOO_FEW_ARGUMENTS` with the parameter count as `expected`.
    /// All other failures have no engine equivalent and are reported as a custom error.
    pub(crate) fn engine_error(&self) -> Option<sys::GDExtensionCallError> {
        let (arg_count, param_count) = self.b.arg_count_mismatch?;

        let error = if arg_count > param_count {
            sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS
        } else {
            sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS
        };

        Some(sys::call_error(error, -1, param_count as i32))
    }

    /// Describes the error.
    ///
    /// This is the same as the `Display`/`ToString` repr, but without the prefix mentioning that this is a function call error,
    /// and optionally without any source error information.
    pub fn message(&self, with_source: bool) -> String {
        let InnerCallError {
            call_expr,
            reason,
            source,
            ..
        } = &*self.b;

        let reason_str = if reason.is_empty() {
            String::new()
        } else {
            format!("\n    Reason: {reason}")
        };

        let source_str = match source {
            Some(SourceError::Convert { erased_error, value }) if with_source => {
                format!(
                    "\n  Source: {erased_error}{}{value}",
                    if value.is_empty() { "" } else { ": " },
                )
            }
            Some(SourceError::Call(e)) if with_source => {
                let message = e.message(true);
                format!("\n  Source: {message}")
            }
            _ => String::new(),
        };

        format!("{call_expr}{reason_str}{source_str}")
    }
}

impl fmt::Display for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = self.message(true);
        write!(f, "function call failed: {message}")
    }
}

impl fmt::Debug for CallError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.b)
    }
}

impl Error for CallError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self.b.source.as_ref() {
            Some(SourceError::Convert { erased_error: e, .. }) => deref_to::<ErasedConvertError>(e),
            Some(SourceError::Call(e)) => deref_to::<CallError>(e),
            None => None,
        }
    }
}

// ----------------------------------------------------------------------------------------------------------------------------------------------
// Implementation

#[derive(Debug)]
enum SourceError {
    Convert {
        erased_error: ErasedConvertError,
        value: String,
    },

    // If the top-level Box on CallError is ever removed, this would need to store Box<CallError> again.
    Call(CallError),
}

/// Explicit dereferencing to a certain type. Avoids accidentally returning `&Box<T>` or so.
fn deref_to<T>(t: &T) -> Option<&(dyn Error + 'static)>
where
    T: Error + 'static,
{
    Some(t)
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_count_mismatch() {
        let ctx = CallContext::func("MyNode", "_process");

        assert!(CallError::check_arg_count(&ctx, 1, 1).is_ok());

        let err = CallError::check_arg_count(&ctx, 0, 1).unwrap_err();
        assert!(err.is_arg_count_mismatch());
        assert_eq!(err.class_name(), Some("MyNode"));
        assert_eq!(err.method_name(), "_process");
        assert_eq!(
            err.to_string(),
            "function call failed: MyNode::_process()\n    Reason: function has 1 parameter, but received 0 arguments"
        );

        let engine = err.engine_error().unwrap();
        assert_eq!(engine.error, sys::GDEXTENSION_CALL_ERROR_TOO_FEW_ARGUMENTS);
        assert_eq!(engine.expected, 1);

        let too_many = CallError::check_arg_count(&ctx, 3, 1).unwrap_err();
        assert_eq!(too_many.engine_error().unwrap().error, sys::GDEXTENSION_CALL_ERROR_TOO_MANY_ARGUMENTS);
    }

    #[test]
    fn panic_has_no_engine_equivalent() {
        let ctx = CallContext::func("", "handler");
        let err = CallError::failed_by_user_panic(&ctx, "boom".to_string());

        assert_eq!(err.class_name(), None);
        assert!(err.engine_error().is_none());
        assert!(err.message(false).ends_with("Reason: function panicked: boom"));
    }

    #[test]
    fn conversion_source() {
        let ctx = CallContext::func("MyNode", "_has_point");
        let err = CallError::failed_param_conversion::<i64>(&ctx, 0, ConvertError::new("bad input"));

        let source = err.source().expect("source error");
        assert_eq!(source.to_string(), "bad input");
        assert!(err.message(true).ends_with("Source: bad input"));
        assert!(!err.message(false).contains("Source"));
    }
}
