// File: src/binder.rs
// Purpose: Bind raw form fields onto a typed target, recording conversion failures

use crate::binding_result::BindingResult;
use crate::codes::MessageCodesResolver;
use crate::form_data::FormData;
use crate::target::FormBindable;

/// Copies submitted values onto a target object.
///
/// Values that cannot be converted leave the field untouched and are kept
/// as binding failures so the raw text can be shown again.
#[derive(Debug, Clone)]
pub struct DataBinder {
    object_name: String,
    disallowed_fields: Vec<String>,
    codes_resolver: MessageCodesResolver,
}

/// Outcome of binding: the populated target plus any type mismatches
#[derive(Debug, Clone)]
pub struct Bound<T> {
    object_name: String,
    target: T,
    mismatches: Vec<(String, String)>,
    codes_resolver: MessageCodesResolver,
}

impl DataBinder {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            disallowed_fields: Vec::new(),
            codes_resolver: MessageCodesResolver::default(),
        }
    }

    /// Never bind `field` from request data (e.g. an `id` taken from the path)
    pub fn disallow(mut self, field: impl Into<String>) -> Self {
        self.disallowed_fields.push(field.into());
        self
    }

    pub fn with_codes_resolver(mut self, resolver: MessageCodesResolver) -> Self {
        self.codes_resolver = resolver;
        self
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Bind onto a fresh `T::default()`
    pub fn bind<T: FormBindable>(&self, form: &FormData) -> Bound<T> {
        self.bind_onto(T::default(), form)
    }

    /// Bind onto an existing target; fields absent from the form keep their value
    pub fn bind_onto<T: FormBindable>(&self, mut target: T, form: &FormData) -> Bound<T> {
        let mut mismatches = Vec::new();

        for &field in T::field_names() {
            if self.disallowed_fields.iter().any(|f| f == field) {
                continue;
            }
            let Some(raw) = form.get(field) else {
                continue;
            };
            if let Err(e) = target.bind_field(field, raw) {
                tracing::debug!(object = %self.object_name, field, error = %e, "binding failure");
                mismatches.push((field.to_string(), raw.to_string()));
            }
        }

        Bound {
            object_name: self.object_name.clone(),
            target,
            mismatches,
            codes_resolver: self.codes_resolver.clone(),
        }
    }
}

impl<T: FormBindable> Bound<T> {
    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn into_target(self) -> T {
        self.target
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Fields whose raw input could not be converted, with that input
    pub fn mismatches(&self) -> &[(String, String)] {
        &self.mismatches
    }

    /// A fresh collector over the bound target, seeded with the binding failures
    pub fn binding_result(&self) -> BindingResult<'_> {
        let mut result = BindingResult::new(self.object_name.clone(), &self.target)
            .with_codes_resolver(self.codes_resolver.clone());
        for (field, raw) in &self.mismatches {
            result.reject_binding_failure(field, raw);
        }
        result
    }
}
