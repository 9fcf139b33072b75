// File: src/validator.rs
// Purpose: Validator trait and the registry that dispatches targets to validators

use crate::binding_result::BindingResult;
use crate::error::BindingError;
use crate::target::Bindable;
use std::any::TypeId;
use std::collections::HashMap;
use std::sync::Arc;

/// Checks a target and records every rule violation in `errors`.
///
/// Rule violations never produce `Err`; it is reserved for programming
/// errors such as an unsupported target type or an unreadable field.
pub trait Validator: Send + Sync {
    /// Can this validator check values of `target_type`?
    fn supports(&self, target_type: TypeId) -> bool;

    fn validate(
        &self,
        target: &dyn Bindable,
        errors: &mut BindingResult<'_>,
    ) -> Result<(), BindingError>;
}

/// Downcast a target to the concrete type a validator works on
pub fn downcast_target<T: 'static>(target: &dyn Bindable) -> Result<&T, BindingError> {
    target
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| BindingError::UnsupportedTarget {
            type_name: target.type_name().to_string(),
        })
}

/// Maps target types to the validators that apply to them
#[derive(Default, Clone)]
pub struct ValidatorRegistry {
    validators: HashMap<TypeId, Vec<Arc<dyn Validator>>>,
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("types", &self.validators.len())
            .finish()
    }
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `validator` for targets of type `T`.
    ///
    /// Fails if the validator does not support `T`.
    pub fn register<T: Bindable>(
        &mut self,
        validator: impl Validator + 'static,
    ) -> Result<&mut Self, BindingError> {
        let type_id = TypeId::of::<T>();
        if !validator.supports(type_id) {
            return Err(BindingError::UnsupportedTarget {
                type_name: std::any::type_name::<T>().to_string(),
            });
        }
        self.validators
            .entry(type_id)
            .or_default()
            .push(Arc::new(validator));
        Ok(self)
    }

    /// Builder-style `register`
    pub fn with<T: Bindable>(
        mut self,
        validator: impl Validator + 'static,
    ) -> Result<Self, BindingError> {
        self.register::<T>(validator)?;
        Ok(self)
    }

    pub fn supports(&self, target_type: TypeId) -> bool {
        self.validators
            .get(&target_type)
            .map(|v| !v.is_empty())
            .unwrap_or(false)
    }

    /// Run every validator registered for the target's type, in registration order
    pub fn validate(
        &self,
        target: &dyn Bindable,
        errors: &mut BindingResult<'_>,
    ) -> Result<(), BindingError> {
        let type_id = target.as_any().type_id();
        let validators = self
            .validators
            .get(&type_id)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BindingError::UnsupportedTarget {
                type_name: target.type_name().to_string(),
            })?;

        for validator in validators {
            validator.validate(target, errors)?;
        }

        tracing::debug!(
            object = errors.object_name(),
            errors = errors.error_count(),
            "validation finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::any::Any;

    struct Note {
        text: String,
    }

    impl Bindable for Note {
        fn type_name(&self) -> &'static str {
            "Note"
        }

        fn field_value(&self, field: &str) -> Option<Value> {
            (field == "text").then(|| Value::from(self.text.as_str()))
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct Other;

    impl Bindable for Other {
        fn type_name(&self) -> &'static str {
            "Other"
        }

        fn field_value(&self, _field: &str) -> Option<Value> {
            None
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    struct NoteValidator;

    impl Validator for NoteValidator {
        fn supports(&self, target_type: TypeId) -> bool {
            target_type == TypeId::of::<Note>()
        }

        fn validate(
            &self,
            target: &dyn Bindable,
            errors: &mut BindingResult<'_>,
        ) -> Result<(), BindingError> {
            let note = downcast_target::<Note>(target)?;
            if note.text.is_empty() {
                errors.reject_value("text", "required", vec![], None)?;
            }
            Ok(())
        }
    }

    #[test]
    fn test_registry_dispatches_by_type() {
        let registry = ValidatorRegistry::new().with::<Note>(NoteValidator).unwrap();
        assert!(registry.supports(TypeId::of::<Note>()));
        assert!(!registry.supports(TypeId::of::<Other>()));

        let note = Note {
            text: String::new(),
        };
        let mut errors = BindingResult::new("note", &note);
        registry.validate(&note, &mut errors).unwrap();
        assert!(errors.has_field_errors("text"));
    }

    #[test]
    fn test_unsupported_target_is_error() {
        let registry = ValidatorRegistry::new().with::<Note>(NoteValidator).unwrap();
        let other = Other;
        let mut errors = BindingResult::new("other", &other);
        assert_eq!(
            registry.validate(&other, &mut errors),
            Err(BindingError::UnsupportedTarget {
                type_name: "Other".to_string()
            })
        );
    }

    #[test]
    fn test_register_rejects_mismatched_validator() {
        let mut registry = ValidatorRegistry::new();
        assert!(registry.register::<Other>(NoteValidator).is_err());
    }

    #[test]
    fn test_direct_call_with_wrong_type() {
        let other = Other;
        let mut errors = BindingResult::new("other", &other);
        assert!(NoteValidator.validate(&other, &mut errors).is_err());
    }
}
