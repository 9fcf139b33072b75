// File: src/codes.rs
// Purpose: Build the ordered candidate message codes for an error

/// Error code used for values that could not be converted to the field type
pub const TYPE_MISMATCH: &str = "typeMismatch";

const SEPARATOR: &str = ".";

/// Ordering of the parts inside one candidate code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeFormat {
    /// `errorCode.objectName.field`
    #[default]
    PrefixErrorCode,
    /// `objectName.field.errorCode`
    PostfixErrorCode,
}

/// Turns an error code into the list of message codes tried during resolution.
///
/// For a field error on `item.price` with code `range` and type `Integer`:
///
/// ```text
/// range.item.price
/// range.price
/// range.Integer
/// range
/// ```
///
/// For an object error on `item` with code `totalPriceMin`:
///
/// ```text
/// totalPriceMin.item
/// totalPriceMin
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageCodesResolver {
    prefix: String,
    format: CodeFormat,
}

impl MessageCodesResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend `prefix` to every generated code (e.g. `"validation."`)
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_format(mut self, format: CodeFormat) -> Self {
        self.format = format;
        self
    }

    /// Candidate codes for an object-level error
    pub fn resolve_object_codes(&self, error_code: &str, object_name: &str) -> Vec<String> {
        let mut codes = Vec::with_capacity(2);
        push_unique(&mut codes, self.code(error_code, &[object_name]));
        push_unique(&mut codes, self.code(error_code, &[]));
        codes
    }

    /// Candidate codes for a field-level error, most specific first
    pub fn resolve_field_codes(
        &self,
        error_code: &str,
        object_name: &str,
        field: &str,
        field_type: Option<&str>,
    ) -> Vec<String> {
        let fields = expand_field_path(field);
        let mut codes = Vec::with_capacity(fields.len() * 2 + 2);

        for f in &fields {
            push_unique(&mut codes, self.code(error_code, &[object_name, f.as_str()]));
        }
        for f in &fields {
            push_unique(&mut codes, self.code(error_code, &[f.as_str()]));
        }
        if let Some(ty) = field_type.filter(|t| !t.is_empty()) {
            push_unique(&mut codes, self.code(error_code, &[ty]));
        }
        push_unique(&mut codes, self.code(error_code, &[]));

        codes
    }

    fn code(&self, error_code: &str, parts: &[&str]) -> String {
        let mut segments: Vec<&str> = Vec::with_capacity(parts.len() + 1);
        match self.format {
            CodeFormat::PrefixErrorCode => {
                segments.push(error_code);
                segments.extend(parts.iter().copied());
            }
            CodeFormat::PostfixErrorCode => {
                segments.extend(parts.iter().copied());
                segments.push(error_code);
            }
        }

        let joined = segments
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(SEPARATOR);

        format!("{}{}", self.prefix, joined)
    }
}

/// Candidate codes with the default resolver (no prefix, error code first).
///
/// `field` is `None` for object errors, in which case `field_type` is ignored.
pub fn build_candidate_codes(
    error_code: &str,
    object_name: &str,
    field: Option<&str>,
    field_type: Option<&str>,
) -> Vec<String> {
    let resolver = MessageCodesResolver::new();
    match field {
        Some(field) if !field.is_empty() => {
            resolver.resolve_field_codes(error_code, object_name, field, field_type)
        }
        _ => resolver.resolve_object_codes(error_code, object_name),
    }
}

/// `items[0].name` -> `["items[0].name", "items.name"]`
///
/// Keys are stripped one at a time from the right.
fn expand_field_path(field: &str) -> Vec<String> {
    let mut fields = vec![field.to_string()];
    let mut plain = field.to_string();

    while let Some(open) = plain.rfind('[') {
        let Some(close) = plain[open..].find(']').map(|i| open + i) else {
            break;
        };
        plain = format!("{}{}", &plain[..open], &plain[close + 1..]);
        fields.push(plain.clone());
    }

    fields
}

fn push_unique(codes: &mut Vec<String>, code: String) {
    if !codes.contains(&code) {
        codes.push(code);
    }
}
