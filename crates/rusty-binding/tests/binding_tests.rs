//! Integration tests for rusty-binding
//!
//! Covers the full bind -> validate -> resolve flow on `Item`:
//! - field rules (required, range, max)
//! - the cross-field total price rule
//! - message code precedence
//! - redisplay of rejected input
//! - repeatability of a validation pass

use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_binding::*;

fn validate(item: &Item) -> BindingResult<'_> {
    let mut errors = BindingResult::new(ITEM_OBJECT_NAME, item);
    ItemValidator::default()
        .validate(item, &mut errors)
        .expect("item is supported");
    errors
}

/// (field, code, arguments) for every error, in registration order
fn summary(errors: &BindingResult<'_>) -> Vec<(Option<String>, Vec<String>, Vec<Value>)> {
    errors
        .all_errors()
        .iter()
        .map(|r| {
            (
                r.field().map(str::to_string),
                r.codes().to_vec(),
                r.arguments().to_vec(),
            )
        })
        .collect()
}

#[test]
fn test_end_to_end_three_field_errors() {
    let item = Item {
        id: None,
        item_name: Some(String::new()),
        price: Some(500),
        quantity: Some(10000),
    };
    let errors = validate(&item);

    assert!(errors.has_errors());
    assert_eq!(errors.all_field_errors().len(), 3);
    assert!(!errors.has_global_errors());

    let name = errors.field_error("itemName").unwrap();
    assert_eq!(name.code(), Some("required"));
    assert!(name.arguments().is_empty());

    let price = errors.field_error("price").unwrap();
    assert_eq!(price.code(), Some("range"));
    assert_eq!(price.arguments(), [Value::Int(1000), Value::Int(1_000_000)]);

    let quantity = errors.field_error("quantity").unwrap();
    assert_eq!(quantity.code(), Some("max"));
    assert_eq!(quantity.arguments(), [Value::Int(9999)]);
}

#[rstest]
#[case(1, 1)]
#[case(1000, 9)]
#[case(999, 10)]
#[case(5000, 1)]
#[case(2000, 4)]
fn test_total_price_min_fires_once(#[case] price: i32, #[case] quantity: i32) {
    let item = Item::new("pen", price, quantity);
    let errors = validate(&item);

    let total = i64::from(price) * i64::from(quantity);
    assert!(total < 10000);
    assert_eq!(errors.global_errors().len(), 1);
    let error = errors.global_error().unwrap();
    assert_eq!(error.codes(), ["totalPriceMin.item", "totalPriceMin"]);
    assert_eq!(error.arguments(), [Value::Int(10000), Value::Int(total)]);
}

#[rstest]
#[case(10000, 1)]
#[case(1000, 10)]
#[case(5000, 2)]
fn test_total_price_at_threshold_passes(#[case] price: i32, #[case] quantity: i32) {
    let item = Item::new("pen", price, quantity);
    assert!(!validate(&item).has_global_errors());
}

#[test]
fn test_price_range_property() {
    let prices = [
        None,
        Some(-1),
        Some(0),
        Some(999),
        Some(1000),
        Some(500_000),
        Some(1_000_000),
        Some(1_000_001),
    ];
    for price in prices {
        let item = Item {
            id: None,
            item_name: Some("pen".into()),
            price,
            quantity: Some(100),
        };
        let errors = validate(&item);
        let expected = match price {
            None => true,
            Some(p) => !(1000..=1_000_000).contains(&p),
        };
        assert_eq!(errors.has_field_errors("price"), expected, "price {:?}", price);
    }
}

#[test]
fn test_validation_is_repeatable() {
    let item = Item {
        id: None,
        item_name: Some("  ".into()),
        price: Some(10),
        quantity: Some(99999),
    };
    let first = validate(&item);
    let second = validate(&item);

    assert_eq!(first.error_count(), second.error_count());
    assert_eq!(summary(&first), summary(&second));
}

#[test]
fn test_specific_code_beats_generic() {
    let item = Item::new("", 10000, 10);
    let errors = validate(&item);
    let error = errors.field_error("itemName").unwrap();

    let mut messages = MessageSource::default()
        .with_message("required.itemName", "Please name the item")
        .with_message("required", "This field is required");
    assert_eq!(messages.resolve(error).unwrap(), "Please name the item");

    messages.remove("required.itemName");
    assert_eq!(messages.resolve(error).unwrap(), "This field is required");
}

#[test]
fn test_rejected_input_is_redisplayed() {
    let form: FormData = [("itemName", "pen"), ("price", "abc"), ("quantity", "10")]
        .into_iter()
        .collect();
    let bound = DataBinder::new(ITEM_OBJECT_NAME).bind::<Item>(&form);
    assert_eq!(bound.target().price, None);

    let mut errors = bound.binding_result();
    ItemValidator::default()
        .validate(bound.target(), &mut errors)
        .unwrap();

    assert_eq!(errors.field_value("price").unwrap(), Value::from("abc"));
    assert_eq!(errors.field_value("quantity").unwrap(), Value::Int(10));

    let price_errors = errors.field_errors("price");
    assert_eq!(price_errors.len(), 1);
    assert!(price_errors[0].is_binding_failure());
    assert_eq!(
        price_errors[0].codes(),
        [
            "typeMismatch.item.price",
            "typeMismatch.price",
            "typeMismatch.Integer",
            "typeMismatch"
        ]
    );
}

#[test]
fn test_rejected_input_keeps_surrounding_whitespace() {
    let form: FormData = [("itemName", "pen"), ("price", " 12a "), ("quantity", " 10 ")]
        .into_iter()
        .collect();
    let bound = DataBinder::new(ITEM_OBJECT_NAME).bind::<Item>(&form);
    assert_eq!(bound.target().quantity, Some(10));

    let errors = bound.binding_result();
    assert_eq!(errors.field_value("price").unwrap(), Value::from(" 12a "));
    assert_eq!(
        errors.field_error("price").unwrap().rejected_value(),
        &Value::from(" 12a ")
    );
}

#[test]
fn test_catalog_file_round_trip_through_resolver() {
    let messages = MessageSource::from_toml_str(
        r#"
        "required.item.itemName" = "상품 이름은 필수입니다."
        "range" = "{0} ~ {1} 허용"
        "max" = "최대 {0} 까지 허용합니다."
        "totalPriceMin" = "가격 * 수량의 합은 {0}원 이상이어야 합니다. 현재 값 = {1}"
        "#,
    )
    .unwrap();

    let item = Item::new("", 100, 1);
    let errors = validate(&item);
    let resolved: Vec<String> = errors
        .all_errors()
        .into_iter()
        .map(|r| messages.resolve(r).unwrap())
        .collect();

    assert_eq!(
        resolved,
        vec![
            "상품 이름은 필수입니다.".to_string(),
            "1000 ~ 1000000 허용".to_string(),
            "가격 * 수량의 합은 10000원 이상이어야 합니다. 현재 값 = 100".to_string(),
        ]
    );
}

#[test]
fn test_update_flow_with_path_id() {
    let registry = ValidatorRegistry::new()
        .with::<Item>(ItemValidator::default().for_group(CheckGroup::Update))
        .unwrap();
    let messages = MessageSource::default().use_code_as_default_message(true);
    let form: FormData = [
        ("id", "999"),
        ("itemName", "pen"),
        ("price", "2000"),
        ("quantity", "50000"),
    ]
    .into_iter()
    .collect();

    let seed = Item {
        id: Some(3),
        ..Item::default()
    };
    let bound = DataBinder::new(ITEM_OBJECT_NAME)
        .disallow("id")
        .bind_onto(seed, &form);
    let item = validate_bound(bound, &registry, &messages)
        .unwrap()
        .ok()
        .expect("update rules allow large quantities");

    assert_eq!(item.id, Some(3));
    assert_eq!(item.quantity, Some(50000));
}
