// File: src/form_context.rs
// Purpose: Form context for templates to display validation errors and preserve values

use crate::binding_result::BindingResult;
use crate::error::BindingError;
use crate::message::MessageSource;
use crate::target::Bindable;
use serde::Serialize;
use std::collections::HashMap;

/// Everything a template needs to (re)render a form: the value to show in
/// each field and the resolved error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormContext {
    pub object_name: String,
    /// Field names to display values (rejected input wins over live values)
    pub values: HashMap<String, String>,
    /// Field names to resolved error messages, in registration order
    pub errors: HashMap<String, Vec<String>>,
    /// Resolved object-level messages
    pub global_errors: Vec<String>,
}

impl FormContext {
    /// Create empty form context
    pub fn empty(object_name: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            ..Self::default()
        }
    }

    /// Context for a form showing `target` without any errors
    pub fn from_target(
        object_name: impl Into<String>,
        target: &dyn Bindable,
        fields: &[&str],
    ) -> Self {
        let values = fields
            .iter()
            .filter_map(|&f| target.field_value(f).map(|v| (f.to_string(), v.to_string())))
            .collect();

        Self {
            object_name: object_name.into(),
            values,
            ..Self::default()
        }
    }

    /// Resolve every error in `result` and capture display values for `fields`.
    ///
    /// Fails on the first message that cannot be resolved.
    pub fn from_binding_result(
        result: &BindingResult<'_>,
        fields: &[&str],
        messages: &MessageSource,
    ) -> Result<Self, BindingError> {
        let mut values = HashMap::with_capacity(fields.len());
        for &field in fields {
            values.insert(field.to_string(), result.field_value(field)?.to_string());
        }

        let mut errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in result.all_field_errors() {
            errors
                .entry(error.field().to_string())
                .or_default()
                .push(messages.resolve(error)?);
        }

        let global_errors = result
            .global_errors()
            .iter()
            .map(|e| messages.resolve(e))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            object_name: result.object_name().to_string(),
            values,
            errors,
            global_errors,
        })
    }

    /// Check if field has an error
    pub fn has_error(&self, field: &str) -> bool {
        self.errors.get(field).map(|e| !e.is_empty()).unwrap_or(false)
    }

    /// First error message for a field
    pub fn get_error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)?.first().map(String::as_str)
    }

    /// All error messages for a field
    pub fn get_errors(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Check if there are any errors
    pub fn has_errors(&self) -> bool {
        self.errors.values().any(|e| !e.is_empty()) || !self.global_errors.is_empty()
    }

    pub fn has_global_errors(&self) -> bool {
        !self.global_errors.is_empty()
    }

    /// Value to show in a field's input
    pub fn get_value(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{Item, ItemValidator, ITEM_OBJECT_NAME};
    use crate::target::FormBindable;
    use crate::validator::Validator;
    use pretty_assertions::assert_eq;

    fn messages() -> MessageSource {
        MessageSource::default()
            .with_message("required.item.itemName", "Item name is required")
            .with_message("range", "Must be between {0} and {1}")
            .with_message("max", "At most {0}")
            .with_message("totalPriceMin", "Total must be at least {0} (now {1})")
    }

    #[test]
    fn test_empty_form_context() {
        let context = FormContext::empty("item");
        assert!(!context.has_errors());
        assert!(context.get_error("any").is_none());
        assert!(context.get_value("any").is_none());
        assert!(context.get_errors("any").is_empty());
    }

    #[test]
    fn test_from_target() {
        let item = Item::new("pen", 1500, 10);
        let context = FormContext::from_target(ITEM_OBJECT_NAME, &item, Item::field_names());
        assert_eq!(context.get_value("itemName"), Some("pen"));
        assert_eq!(context.get_value("price"), Some("1500"));
        assert_eq!(context.get_value("id"), Some(""));
        assert!(!context.has_errors());
    }

    #[test]
    fn test_from_binding_result() {
        let item = Item {
            id: None,
            item_name: Some(String::new()),
            price: Some(100),
            quantity: Some(1),
        };
        let mut result = BindingResult::new(ITEM_OBJECT_NAME, &item);
        ItemValidator::default().validate(&item, &mut result).unwrap();

        let context =
            FormContext::from_binding_result(&result, Item::field_names(), &messages()).unwrap();

        assert_eq!(context.get_error("itemName"), Some("Item name is required"));
        assert_eq!(context.get_error("price"), Some("Must be between 1000 and 1000000"));
        assert!(!context.has_error("quantity"));
        assert_eq!(
            context.global_errors,
            vec!["Total must be at least 10000 (now 100)".to_string()]
        );
        assert_eq!(context.get_value("price"), Some("100"));
        assert!(context.has_global_errors());
    }

    #[test]
    fn test_unresolvable_message_aborts() {
        let item = Item::default();
        let mut result = BindingResult::new(ITEM_OBJECT_NAME, &item);
        result.reject("unknownCode", vec![], None);

        let err = FormContext::from_binding_result(&result, &[], &messages()).unwrap_err();
        assert!(matches!(err, BindingError::NoSuchMessage { .. }));
    }
}
