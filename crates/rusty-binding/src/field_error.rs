// File: src/field_error.rs
// Purpose: Error records collected during binding and validation

use crate::error::BindingError;
use crate::value::Value;
use serde::Serialize;
use std::fmt;

/// Resolvable parts shared by field and object errors
#[derive(Debug, Clone, PartialEq, Serialize)]
struct Resolvable {
    codes: Vec<String>,
    arguments: Vec<Value>,
    default_message: Option<String>,
}

impl Resolvable {
    fn new(
        object_name: &str,
        codes: Vec<String>,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Result<Self, BindingError> {
        let default_message = default_message.filter(|m| !m.is_empty());
        if codes.is_empty() && default_message.is_none() {
            return Err(BindingError::Unresolvable {
                object_name: object_name.to_string(),
            });
        }
        Ok(Self {
            codes,
            arguments,
            default_message,
        })
    }
}

/// A validation failure spanning the whole object rather than one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectError {
    object_name: String,
    #[serde(flatten)]
    resolvable: Resolvable,
}

impl ObjectError {
    /// Create an object error. Fails if both `codes` and `default_message` are empty.
    pub fn new(
        object_name: impl Into<String>,
        codes: Vec<String>,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Result<Self, BindingError> {
        let object_name = object_name.into();
        let resolvable = Resolvable::new(&object_name, codes, arguments, default_message)?;
        Ok(Self {
            object_name,
            resolvable,
        })
    }

    /// Built by the collector from a non-empty code chain
    pub(crate) fn from_codes(
        object_name: String,
        codes: Vec<String>,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Self {
        Self {
            object_name,
            resolvable: Resolvable {
                codes,
                arguments,
                default_message: default_message.filter(|m| !m.is_empty()),
            },
        }
    }

    /// Object error carrying only a literal message
    pub fn with_message(
        object_name: impl Into<String>,
        message: impl Into<String>,
    ) -> Result<Self, BindingError> {
        Self::new(object_name, Vec::new(), Vec::new(), Some(message.into()))
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn codes(&self) -> &[String] {
        &self.resolvable.codes
    }

    /// The least specific code, i.e. the bare error code
    pub fn code(&self) -> Option<&str> {
        self.resolvable.codes.last().map(String::as_str)
    }

    pub fn arguments(&self) -> &[Value] {
        &self.resolvable.arguments
    }

    pub fn default_message(&self) -> Option<&str> {
        self.resolvable.default_message.as_deref()
    }
}

impl fmt::Display for ObjectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error in object '{}': ", self.object_name)?;
        write_resolvable(f, &self.resolvable)
    }
}

/// A validation failure attributable to one field of the target
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    object_name: String,
    field: String,
    rejected_value: Value,
    binding_failure: bool,
    #[serde(flatten)]
    resolvable: Resolvable,
}

impl FieldError {
    /// Create a field error. Fails if both `codes` and `default_message` are empty.
    pub fn new(
        object_name: impl Into<String>,
        field: impl Into<String>,
        rejected_value: Value,
        binding_failure: bool,
        codes: Vec<String>,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Result<Self, BindingError> {
        let object_name = object_name.into();
        let resolvable = Resolvable::new(&object_name, codes, arguments, default_message)?;
        Ok(Self {
            object_name,
            field: field.into(),
            rejected_value,
            binding_failure,
            resolvable,
        })
    }

    /// Built by the collector from a non-empty code chain
    pub(crate) fn from_codes(
        object_name: String,
        field: String,
        rejected_value: Value,
        binding_failure: bool,
        codes: Vec<String>,
        arguments: Vec<Value>,
        default_message: Option<String>,
    ) -> Self {
        Self {
            object_name,
            field,
            rejected_value,
            binding_failure,
            resolvable: Resolvable {
                codes,
                arguments,
                default_message: default_message.filter(|m| !m.is_empty()),
            },
        }
    }

    /// Field error carrying only a literal message
    pub fn with_message(
        object_name: impl Into<String>,
        field: impl Into<String>,
        rejected_value: Value,
        message: impl Into<String>,
    ) -> Result<Self, BindingError> {
        Self::new(
            object_name,
            field,
            rejected_value,
            false,
            Vec::new(),
            Vec::new(),
            Some(message.into()),
        )
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn rejected_value(&self) -> &Value {
        &self.rejected_value
    }

    /// True when the raw input could not be converted to the field's type
    pub fn is_binding_failure(&self) -> bool {
        self.binding_failure
    }

    pub fn codes(&self) -> &[String] {
        &self.resolvable.codes
    }

    /// The least specific code, i.e. the bare error code
    pub fn code(&self) -> Option<&str> {
        self.resolvable.codes.last().map(String::as_str)
    }

    pub fn arguments(&self) -> &[Value] {
        &self.resolvable.arguments
    }

    pub fn default_message(&self) -> Option<&str> {
        self.resolvable.default_message.as_deref()
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Field error in object '{}' on field '{}': rejected value [{}]; ",
            self.object_name, self.field, self.rejected_value
        )?;
        write_resolvable(f, &self.resolvable)
    }
}

fn write_resolvable(f: &mut fmt::Formatter<'_>, r: &Resolvable) -> fmt::Result {
    let args: Vec<String> = r.arguments.iter().map(|a| a.to_string()).collect();
    write!(
        f,
        "codes [{}]; arguments [{}]; default message [{}]",
        r.codes.join(","),
        args.join(","),
        r.default_message.as_deref().unwrap_or("")
    )
}

/// Either kind of error, as yielded when walking all errors in order
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ErrorRecord<'a> {
    Field(&'a FieldError),
    Object(&'a ObjectError),
}

impl<'a> ErrorRecord<'a> {
    pub fn object_name(&self) -> &'a str {
        match self {
            ErrorRecord::Field(e) => e.object_name(),
            ErrorRecord::Object(e) => e.object_name(),
        }
    }

    /// Field name for field errors, `None` for object errors
    pub fn field(&self) -> Option<&'a str> {
        match self {
            ErrorRecord::Field(e) => Some(e.field()),
            ErrorRecord::Object(_) => None,
        }
    }

    pub fn codes(&self) -> &'a [String] {
        match self {
            ErrorRecord::Field(e) => e.codes(),
            ErrorRecord::Object(e) => e.codes(),
        }
    }

    pub fn code(&self) -> Option<&'a str> {
        match self {
            ErrorRecord::Field(e) => e.code(),
            ErrorRecord::Object(e) => e.code(),
        }
    }

    pub fn arguments(&self) -> &'a [Value] {
        match self {
            ErrorRecord::Field(e) => e.arguments(),
            ErrorRecord::Object(e) => e.arguments(),
        }
    }

    pub fn default_message(&self) -> Option<&'a str> {
        match self {
            ErrorRecord::Field(e) => e.default_message(),
            ErrorRecord::Object(e) => e.default_message(),
        }
    }
}

impl<'a> From<&'a FieldError> for ErrorRecord<'a> {
    fn from(e: &'a FieldError) -> Self {
        ErrorRecord::Field(e)
    }
}

impl<'a> From<&'a ObjectError> for ErrorRecord<'a> {
    fn from(e: &'a ObjectError) -> Self {
        ErrorRecord::Object(e)
    }
}
