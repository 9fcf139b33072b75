// File: src/pipeline.rs
// Purpose: Pipeline for binding, validating, and handling form submissions

use crate::binder::{Bound, DataBinder};
use crate::error::BindingError;
use crate::form_context::FormContext;
use crate::form_data::FormData;
use crate::message::MessageSource;
use crate::target::FormBindable;
use crate::validator::ValidatorRegistry;

/// Result of the validation pipeline
#[derive(Debug, Clone)]
pub enum PipelineResult<T> {
    /// Validation passed, data is ready for processing
    Valid(T),
    /// Validation failed, contains resolved messages and the values to redisplay
    Invalid(FormContext),
}

impl<T> PipelineResult<T> {
    /// Check if validation passed
    pub fn is_valid(&self) -> bool {
        matches!(self, PipelineResult::Valid(_))
    }

    /// Check if validation failed
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Extract the valid value if validation passed
    pub fn ok(self) -> Option<T> {
        match self {
            PipelineResult::Valid(data) => Some(data),
            PipelineResult::Invalid(_) => None,
        }
    }

    /// Extract the form context if validation failed
    pub fn err(self) -> Option<FormContext> {
        match self {
            PipelineResult::Valid(_) => None,
            PipelineResult::Invalid(context) => Some(context),
        }
    }
}

/// Execute the validation pipeline
///
/// This function:
/// 1. Binds form data onto a fresh `T`, recording type mismatches
/// 2. Runs every validator registered for `T`
/// 3. Returns either the valid target or a form context to re-render
///
/// `Err` means a programming or catalog defect, never bad user input.
pub fn validate_form<T: FormBindable>(
    form: &FormData,
    binder: &DataBinder,
    validators: &ValidatorRegistry,
    messages: &MessageSource,
) -> Result<PipelineResult<T>, BindingError> {
    validate_bound(binder.bind::<T>(form), validators, messages)
}

/// Validate an already bound target (e.g. one seeded with a path id)
pub fn validate_bound<T: FormBindable>(
    bound: Bound<T>,
    validators: &ValidatorRegistry,
    messages: &MessageSource,
) -> Result<PipelineResult<T>, BindingError> {
    let context = {
        let mut result = bound.binding_result();
        validators.validate(bound.target(), &mut result)?;

        if result.has_errors() {
            tracing::info!(
                object = result.object_name(),
                errors = result.error_count(),
                "form rejected"
            );
            tracing::debug!("{}", result);
            Some(FormContext::from_binding_result(
                &result,
                T::field_names(),
                messages,
            )?)
        } else {
            None
        }
    };

    Ok(match context {
        Some(context) => PipelineResult::Invalid(context),
        None => PipelineResult::Valid(bound.into_target()),
    })
}
