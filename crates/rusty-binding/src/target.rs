// File: src/target.rs
// Purpose: Traits implemented by record types that can be bound and validated

use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::str::FromStr;

/// Read access to a validation target.
///
/// Implementations expose their fields by name so the collector can read
/// live values for redisplay and for `reject_value`.
pub trait Bindable: Any {
    /// Short type name, used in error messages and registry lookups
    fn type_name(&self) -> &'static str;

    /// Current value of `field`, or `None` if the field does not exist
    fn field_value(&self, field: &str) -> Option<Value>;

    /// Declared type of `field`, used for the `{code}.{type}` message code
    fn field_type(&self, _field: &str) -> Option<&'static str> {
        None
    }

    fn as_any(&self) -> &dyn Any;
}

/// Write access used by the `DataBinder`
pub trait FormBindable: Bindable + Default {
    /// Fields the binder will try to populate, in form order
    fn field_names() -> &'static [&'static str];

    /// Convert `raw` and store it in `field`. Unknown fields are ignored.
    fn bind_field(&mut self, field: &str, raw: &str) -> Result<(), TypeMismatch>;
}

/// Raw input could not be converted to the field's declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeMismatch {
    pub required_type: &'static str,
}

impl fmt::Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "value is not a valid {}", self.required_type)
    }
}

impl std::error::Error for TypeMismatch {}

/// Parse optional input: blank text binds to `None`.
pub fn parse_optional<T: FromStr>(
    raw: &str,
    required_type: &'static str,
) -> Result<Option<T>, TypeMismatch> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<T>()
        .map(Some)
        .map_err(|_| TypeMismatch { required_type })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_optional() {
        assert_eq!(parse_optional::<i32>("  ", "Integer"), Ok(None));
        assert_eq!(parse_optional::<i32>(" 42 ", "Integer"), Ok(Some(42)));
        assert_eq!(
            parse_optional::<i32>("abc", "Integer"),
            Err(TypeMismatch {
                required_type: "Integer"
            })
        );
    }
}
