// File: src/error.rs
// Purpose: Hard failures of the binding engine (programming and catalog defects)

use thiserror::Error;

/// Errors that abort a request instead of being collected.
///
/// User input never produces one of these; rejected input is recorded as a
/// `FieldError` or `ObjectError` inside a `BindingResult`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No candidate code is in the catalog and there is no default message
    #[error("no message found under codes {codes:?}")]
    NoSuchMessage { codes: Vec<String> },

    /// An error record was built with neither codes nor a default message
    #[error("error on '{object_name}' has neither codes nor a default message")]
    Unresolvable { object_name: String },

    /// A validator was invoked on a type it does not support
    #[error("no validator supports target type '{type_name}'")]
    UnsupportedTarget { type_name: String },

    /// A field path does not exist on the target
    #[error("field '{field}' is not readable on '{object_name}'")]
    NotReadableField { object_name: String, field: String },
}
