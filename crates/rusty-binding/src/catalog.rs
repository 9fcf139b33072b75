// File: src/catalog.rs
// Purpose: Load message catalogs from TOML files

use crate::message::MessageSource;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

impl MessageSource {
    /// Parse a catalog from TOML.
    ///
    /// Nested tables are flattened into dotted codes, so these are equivalent:
    ///
    /// ```toml
    /// "required.item.itemName" = "Item name is required"
    ///
    /// [required.item]
    /// itemName = "Item name is required"
    /// ```
    ///
    /// A code that is both a message and a prefix of longer codes (like
    /// `range` and `range.item.price`) must use quoted keys.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let table: toml::Table =
            toml::from_str(content).context("Failed to parse message catalog")?;

        let mut messages = HashMap::new();
        flatten_table("", &table, &mut messages)?;

        Ok(Self::new(messages))
    }

    /// Load a catalog file. A missing or empty file yields an empty catalog.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(?path, "message catalog not found, using empty catalog");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read message catalog: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let source = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to load message catalog: {:?}", path))?;
        tracing::debug!(?path, messages = source.len(), "loaded message catalog");
        Ok(source)
    }
}

fn flatten_table(
    prefix: &str,
    table: &toml::Table,
    out: &mut HashMap<String, String>,
) -> Result<()> {
    for (key, value) in table {
        let code = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match value {
            toml::Value::String(template) => {
                out.insert(code, template.clone());
            }
            toml::Value::Table(nested) => flatten_table(&code, nested, out)?,
            other => bail!(
                "message '{}' must be a string, found {}",
                code,
                other.type_str()
            ),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_and_nested_keys() {
        let catalog = r#"
            "required.item.itemName" = "Item name is required"
            "range" = "{0} ~ {1} allowed"
            "range.item.price" = "Price must be {0} ~ {1}"

            [max.item]
            quantity = "At most {0}"
        "#;
        let source = MessageSource::from_toml_str(catalog).unwrap();
        assert_eq!(source.get("required.item.itemName"), Some("Item name is required"));
        assert_eq!(source.get("range"), Some("{0} ~ {1} allowed"));
        assert_eq!(source.get("range.item.price"), Some("Price must be {0} ~ {1}"));
        assert_eq!(source.get("max.item.quantity"), Some("At most {0}"));
        assert_eq!(source.len(), 4);
    }

    #[test]
    fn test_non_string_message_is_rejected() {
        let err = MessageSource::from_toml_str("max = 9999").unwrap_err();
        assert!(err.to_string().contains("must be a string"));
    }

    #[test]
    fn test_invalid_toml() {
        assert!(MessageSource::from_toml_str("not = [valid").is_err());
    }

    #[test]
    fn test_missing_file_is_empty() {
        let source = MessageSource::load("does/not/exist/errors.toml").unwrap();
        assert!(source.is_empty());
    }
}
