// File: src/message.rs
// Purpose: Resolve error records to display text through the code fallback chain

use crate::error::BindingError;
use crate::field_error::{ErrorRecord, FieldError, ObjectError};
use crate::value::Value;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::collections::HashMap;

// Positional placeholder: {0}, {1}, ...
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern is valid"));

/// Substitute `{N}` with `args[N]`.
///
/// A placeholder without a matching argument is left untouched, and
/// surplus arguments are ignored.
pub fn format_template(template: &str, args: &[Value]) -> String {
    if args.is_empty() {
        return template.to_string();
    }

    PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map(|arg| arg.to_string())
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// Code -> template catalog used to render error records.
///
/// Lookups walk an error's codes most specific first; the first code present
/// in the catalog wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageSource {
    messages: HashMap<String, String>,
    use_code_as_default_message: bool,
}

impl MessageSource {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self {
            messages,
            use_code_as_default_message: false,
        }
    }

    /// Builder-style insert
    pub fn with_message(mut self, code: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(code, template);
        self
    }

    /// Fall back to the first code instead of failing when nothing resolves
    pub fn use_code_as_default_message(mut self, enabled: bool) -> Self {
        self.use_code_as_default_message = enabled;
        self
    }

    pub fn insert(&mut self, code: impl Into<String>, template: impl Into<String>) {
        self.messages.insert(code.into(), template.into());
    }

    pub fn remove(&mut self, code: &str) -> Option<String> {
        self.messages.remove(code)
    }

    /// Merge another catalog over this one; entries in `other` win
    pub fn merge(&mut self, other: MessageSource) {
        self.messages.extend(other.messages);
        self.use_code_as_default_message |= other.use_code_as_default_message;
    }

    pub fn get(&self, code: &str) -> Option<&str> {
        self.messages.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Walk `codes` in order, then the default message.
    pub fn resolve_codes(
        &self,
        codes: &[String],
        args: &[Value],
        default_message: Option<&str>,
    ) -> Result<String, BindingError> {
        if let Some(template) = codes.iter().find_map(|code| self.get(code)) {
            return Ok(format_template(template, args));
        }

        if let Some(default) = default_message.filter(|m| !m.is_empty()) {
            return Ok(format_template(default, args));
        }

        if self.use_code_as_default_message {
            if let Some(code) = codes.first() {
                return Ok(code.clone());
            }
        }

        tracing::warn!(?codes, "no message resolvable for error codes");
        Err(BindingError::NoSuchMessage {
            codes: codes.to_vec(),
        })
    }

    /// Resolve any error record to display text
    pub fn resolve<'r>(&self, record: impl Into<ErrorRecord<'r>>) -> Result<String, BindingError> {
        let record = record.into();
        self.resolve_codes(record.codes(), record.arguments(), record.default_message())
    }

    pub fn resolve_field(&self, error: &FieldError) -> Result<String, BindingError> {
        self.resolve(error)
    }

    pub fn resolve_object(&self, error: &ObjectError) -> Result<String, BindingError> {
        self.resolve(error)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for MessageSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::new(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<HashMap<String, String>> for MessageSource {
    fn from(messages: HashMap<String, String>) -> Self {
        Self::new(messages)
    }
}
