// File: src/binding_result.rs
// Purpose: Collects field and object errors for one bound target

use crate::codes::{MessageCodesResolver, TYPE_MISMATCH};
use crate::error::BindingError;
use crate::field_error::{ErrorRecord, FieldError, ObjectError};
use crate::target::Bindable;
use crate::value::Value;
use std::fmt;

#[derive(Debug, Clone, Copy)]
enum Slot {
    Field(usize),
    Global(usize),
}

/// Errors collected against one target object during a single request.
///
/// Errors are only ever appended. Several errors on the same field are all
/// kept for message display, but `field_value` redisplays the rejected
/// value of the most recent one.
pub struct BindingResult<'a> {
    object_name: String,
    target: &'a dyn Bindable,
    codes_resolver: MessageCodesResolver,
    field_errors: Vec<FieldError>,
    global_errors: Vec<ObjectError>,
    order: Vec<Slot>,
}

impl fmt::Debug for BindingResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindingResult")
            .field("object_name", &self.object_name)
            .field("target", &self.target.type_name())
            .field("field_errors", &self.field_errors)
            .field("global_errors", &self.global_errors)
            .finish()
    }
}

impl<'a> BindingResult<'a> {
    /// Create an empty result for `target`, addressed as `object_name`
    pub fn new(object_name: impl Into<String>, target: &'a dyn Bindable) -> Self {
        Self {
            object_name: object_name.into(),
            target,
            codes_resolver: MessageCodesResolver::default(),
            field_errors: Vec::new(),
            global_errors: Vec::new(),
            order: Vec::new(),
        }
    }

    /// Use a custom code resolver for `reject` / `reject_value`
    pub fn with_codes_resolver(mut self, resolver: MessageCodesResolver) -> Self {
        self.codes_resolver = resolver;
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    pub fn target(&self) -> &'a dyn Bindable {
        self.target
    }

    // --- mutation ---

    pub fn add_field_error(&mut self, error: FieldError) {
        self.order.push(Slot::Field(self.field_errors.len()));
        self.field_errors.push(error);
    }

    pub fn add_object_error(&mut self, error: ObjectError) {
        self.order.push(Slot::Global(self.global_errors.len()));
        self.global_errors.push(error);
    }

    /// Register an object-level error under the full code chain for `error_code`
    pub fn reject(&mut self, error_code: &str, args: Vec<Value>, default_message: Option<&str>) {
        let codes = self
            .codes_resolver
            .resolve_object_codes(error_code, &self.object_name);
        let error = ObjectError::from_codes(
            self.object_name.clone(),
            codes,
            args,
            default_message.map(str::to_string),
        );
        self.add_object_error(error);
    }

    /// Register a field error, recording the field's current value as rejected.
    ///
    /// An empty `field` registers an object-level error instead.
    pub fn reject_value(
        &mut self,
        field: &str,
        error_code: &str,
        args: Vec<Value>,
        default_message: Option<&str>,
    ) -> Result<(), BindingError> {
        if field.is_empty() {
            self.reject(error_code, args, default_message);
            return Ok(());
        }

        let rejected = self.read_target(field)?;
        let codes = self.codes_resolver.resolve_field_codes(
            error_code,
            &self.object_name,
            field,
            self.target.field_type(field),
        );
        let error = FieldError::from_codes(
            self.object_name.clone(),
            field.to_string(),
            rejected,
            false,
            codes,
            args,
            default_message.map(str::to_string),
        );
        self.add_field_error(error);
        Ok(())
    }

    /// Register a conversion failure, keeping the raw input as rejected value
    pub fn reject_binding_failure(&mut self, field: &str, raw: &str) {
        let codes = self.codes_resolver.resolve_field_codes(
            TYPE_MISMATCH,
            &self.object_name,
            field,
            self.target.field_type(field),
        );
        tracing::debug!(object = %self.object_name, field, raw, "type mismatch while binding");
        let error = FieldError::from_codes(
            self.object_name.clone(),
            field.to_string(),
            Value::from(raw),
            true,
            codes,
            vec![Value::from(field)],
            None,
        );
        self.add_field_error(error);
    }

    // --- queries ---

    pub fn has_errors(&self) -> bool {
        !self.order.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.order.len()
    }

    pub fn has_global_errors(&self) -> bool {
        !self.global_errors.is_empty()
    }

    pub fn global_errors(&self) -> &[ObjectError] {
        &self.global_errors
    }

    /// First object-level error, if any
    pub fn global_error(&self) -> Option<&ObjectError> {
        self.global_errors.first()
    }

    pub fn has_field_errors(&self, field: &str) -> bool {
        self.field_errors.iter().any(|e| e.field() == field)
    }

    /// All field errors, in insertion order
    pub fn all_field_errors(&self) -> &[FieldError] {
        &self.field_errors
    }

    /// Errors for one field, in insertion order
    pub fn field_errors(&self, field: &str) -> Vec<&FieldError> {
        self.field_errors
            .iter()
            .filter(|e| e.field() == field)
            .collect()
    }

    /// First error registered for `field`
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors.iter().find(|e| e.field() == field)
    }

    /// True if `field` already failed type conversion
    pub fn has_binding_failure(&self, field: &str) -> bool {
        self.field_errors
            .iter()
            .any(|e| e.field() == field && e.is_binding_failure())
    }

    /// Every error, field and object, in the order they were registered
    pub fn all_errors(&self) -> Vec<ErrorRecord<'_>> {
        self.order
            .iter()
            .map(|slot| match *slot {
                Slot::Field(i) => ErrorRecord::Field(&self.field_errors[i]),
                Slot::Global(i) => ErrorRecord::Object(&self.global_errors[i]),
            })
            .collect()
    }

    /// Value to redisplay for `field`: the most recently rejected value if the
    /// field has errors, otherwise the target's live value.
    pub fn field_value(&self, field: &str) -> Result<Value, BindingError> {
        match self.field_errors.iter().rev().find(|e| e.field() == field) {
            Some(error) => Ok(error.rejected_value().clone()),
            None => self.read_target(field),
        }
    }

    fn read_target(&self, field: &str) -> Result<Value, BindingError> {
        self.target
            .field_value(field)
            .ok_or_else(|| BindingError::NotReadableField {
                object_name: self.object_name.clone(),
                field: field.to_string(),
            })
    }
}

impl fmt::Display for BindingResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BindingResult for '{}': {} errors",
            self.object_name,
            self.error_count()
        )?;
        for record in self.all_errors() {
            match record {
                ErrorRecord::Field(e) => write!(f, "\n{}", e)?,
                ErrorRecord::Object(e) => write!(f, "\n{}", e)?,
            }
        }
        Ok(())
    }
}
