//! # rusty-binding
//!
//! Form binding and validation that collects errors instead of failing, and
//! resolves them to messages through a fallback chain of codes.
//!
//! ## Quick Start
//!
//! ```rust
//! use rusty_binding::{BindingResult, Item, ItemValidator, MessageSource, Validator};
//!
//! let item = Item::new("", 500, 10000);
//! let mut errors = BindingResult::new("item", &item);
//! ItemValidator::default().validate(&item, &mut errors).unwrap();
//! assert!(errors.has_errors());
//!
//! let messages = MessageSource::default()
//!     .with_message("required.itemName", "Item name is required")
//!     .with_message("required", "Required")
//!     .with_message("range", "{0} ~ {1} allowed")
//!     .with_message("max", "At most {0}");
//!
//! let error = errors.field_error("itemName").unwrap();
//! assert_eq!(messages.resolve(error).unwrap(), "Item name is required");
//! ```
//!
//! ## Message codes
//!
//! A field error with code `range` on `item.price` tries, in order:
//! `range.item.price`, `range.price`, `range.Integer`, `range`.
//! An object error with code `totalPriceMin` on `item` tries
//! `totalPriceMin.item`, then `totalPriceMin`.

pub mod binder;
pub mod binding_result;
pub mod catalog;
pub mod codes;
pub mod error;
pub mod field_error;
pub mod form_context;
pub mod form_data;
pub mod item;
pub mod message;
pub mod pipeline;
pub mod rules;
pub mod target;
pub mod validator;
pub mod value;

pub use binder::{Bound, DataBinder};
pub use binding_result::BindingResult;
pub use codes::{build_candidate_codes, CodeFormat, MessageCodesResolver, TYPE_MISMATCH};
pub use error::BindingError;
pub use field_error::{ErrorRecord, FieldError, ObjectError};
pub use form_context::FormContext;
pub use form_data::FormData;
pub use item::{CheckGroup, Item, ItemRules, ItemValidator, ITEM_OBJECT_NAME};
pub use message::{format_template, MessageSource};
pub use pipeline::{validate_bound, validate_form, PipelineResult};
pub use target::{Bindable, FormBindable, TypeMismatch};
pub use validator::{downcast_target, Validator, ValidatorRegistry};
pub use value::Value;
