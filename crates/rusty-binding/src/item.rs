// File: src/item.rs
// Purpose: Item record and its validation rules

use crate::binding_result::BindingResult;
use crate::error::BindingError;
use crate::rules::{below, has_text, in_range, product};
use crate::target::{parse_optional, Bindable, FormBindable, TypeMismatch};
use crate::validator::{downcast_target, Validator};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::any::{Any, TypeId};

/// Name under which items are bound and addressed in message codes
pub const ITEM_OBJECT_NAME: &str = "item";

/// A catalog item as submitted through the add/edit forms
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Item {
    pub id: Option<u64>,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl Item {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            id: None,
            item_name: Some(item_name.into()),
            price: Some(price),
            quantity: Some(quantity),
        }
    }

    /// `price * quantity`, when both are present
    pub fn total_price(&self) -> Option<i64> {
        product(self.price, self.quantity)
    }
}

impl Bindable for Item {
    fn type_name(&self) -> &'static str {
        "Item"
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(Value::from(self.id)),
            "itemName" => Some(Value::from(self.item_name.clone())),
            "price" => Some(Value::from(self.price)),
            "quantity" => Some(Value::from(self.quantity)),
            _ => None,
        }
    }

    fn field_type(&self, field: &str) -> Option<&'static str> {
        match field {
            "id" => Some("Long"),
            "itemName" => Some("String"),
            "price" | "quantity" => Some("Integer"),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl FormBindable for Item {
    fn field_names() -> &'static [&'static str] {
        &["id", "itemName", "price", "quantity"]
    }

    fn bind_field(&mut self, field: &str, raw: &str) -> Result<(), TypeMismatch> {
        match field {
            "id" => self.id = parse_optional(raw, "Long")?,
            "itemName" => self.item_name = Some(raw.to_string()),
            "price" => self.price = parse_optional(raw, "Integer")?,
            "quantity" => self.quantity = parse_optional(raw, "Integer")?,
            _ => {}
        }
        Ok(())
    }
}

/// Configurable bounds for the item rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRules {
    #[serde(default = "default_price_min")]
    pub price_min: i32,

    #[serde(default = "default_price_max")]
    pub price_max: i32,

    /// Quantity must stay strictly below this on save
    #[serde(default = "default_quantity_max")]
    pub quantity_max: i32,

    /// Lower bound for `price * quantity`
    #[serde(default = "default_total_price_min")]
    pub total_price_min: i64,
}

fn default_price_min() -> i32 {
    1000
}

fn default_price_max() -> i32 {
    1_000_000
}

fn default_quantity_max() -> i32 {
    9999
}

fn default_total_price_min() -> i64 {
    10000
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            price_min: default_price_min(),
            price_max: default_price_max(),
            quantity_max: default_quantity_max(),
            total_price_min: default_total_price_min(),
        }
    }
}

/// Which rule set applies to a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckGroup {
    /// New item: no id, quantity capped
    #[default]
    Save,
    /// Existing item: id required, quantity only required
    Update,
}

/// Field and cross-field rules for `Item`.
///
/// Every rule runs on every pass; a single call can record several field
/// errors plus the total price object error. Fields that already failed
/// type conversion are not checked again.
#[derive(Debug, Clone, Default)]
pub struct ItemValidator {
    rules: ItemRules,
    group: CheckGroup,
}

impl ItemValidator {
    pub fn new(rules: ItemRules) -> Self {
        Self {
            rules,
            group: CheckGroup::Save,
        }
    }

    pub fn for_group(mut self, group: CheckGroup) -> Self {
        self.group = group;
        self
    }

    pub fn rules(&self) -> &ItemRules {
        &self.rules
    }

    pub fn group(&self) -> CheckGroup {
        self.group
    }

    fn check_item(&self, item: &Item, errors: &mut BindingResult<'_>) -> Result<(), BindingError> {
        let rules = &self.rules;

        if self.group == CheckGroup::Update
            && item.id.is_none()
            && !errors.has_binding_failure("id")
        {
            errors.reject_value("id", "required", vec![], None)?;
        }

        if !has_text(item.item_name.as_deref()) {
            errors.reject_value("itemName", "required", vec![], None)?;
        }

        if !errors.has_binding_failure("price")
            && !in_range(item.price, rules.price_min, rules.price_max)
        {
            errors.reject_value(
                "price",
                "range",
                vec![rules.price_min.into(), rules.price_max.into()],
                None,
            )?;
        }

        if !errors.has_binding_failure("quantity") {
            match self.group {
                CheckGroup::Save if !below(item.quantity, rules.quantity_max) => {
                    errors.reject_value("quantity", "max", vec![rules.quantity_max.into()], None)?;
                }
                CheckGroup::Update if item.quantity.is_none() => {
                    errors.reject_value("quantity", "required", vec![], None)?;
                }
                _ => {}
            }
        }

        // Not attributable to a single field
        if let Some(total) = item.total_price() {
            if total < rules.total_price_min {
                errors.reject(
                    "totalPriceMin",
                    vec![rules.total_price_min.into(), total.into()],
                    None,
                );
            }
        }

        Ok(())
    }
}

impl Validator for ItemValidator {
    fn supports(&self, target_type: TypeId) -> bool {
        target_type == TypeId::of::<Item>()
    }

    fn validate(
        &self,
        target: &dyn Bindable,
        errors: &mut BindingResult<'_>,
    ) -> Result<(), BindingError> {
        let item = downcast_target::<Item>(target)?;
        self.check_item(item, errors)
    }
}
