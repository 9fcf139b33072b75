// File: src/views.rs
// Purpose: Maud templates for the item pages

use maud::{html, Markup, DOCTYPE};
use rusty_binding::{FormContext, Item};

pub const ITEMS_PATH: &str = "/validation/items";

fn layout(title: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
                style {
                    ".field-error { border-color: #bd2130; color: #dc3545; }"
                }
            }
            body {
                div class="container" { (body) }
            }
        }
    }
}

fn display(value: &Option<impl ToString>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

pub fn items_page(items: &[Item]) -> Markup {
    layout(
        "Items",
        html! {
            h2 { "Items" }
            a href={ (ITEMS_PATH) "/add" } { "Add item" }
            table {
                thead {
                    tr { th { "ID" } th { "Name" } th { "Price" } th { "Quantity" } }
                }
                tbody {
                    @for item in items {
                        tr {
                            td {
                                a href={ (ITEMS_PATH) "/" (display(&item.id)) } {
                                    (display(&item.id))
                                }
                            }
                            td { (display(&item.item_name)) }
                            td { (display(&item.price)) }
                            td { (display(&item.quantity)) }
                        }
                    }
                }
            }
        },
    )
}

pub fn item_page(item: &Item, saved: bool) -> Markup {
    let id = display(&item.id);
    layout(
        "Item",
        html! {
            h2 { "Item" }
            @if saved {
                p class="status" { "Saved." }
            }
            dl {
                dt { "ID" } dd { (id) }
                dt { "Name" } dd { (display(&item.item_name)) }
                dt { "Price" } dd { (display(&item.price)) }
                dt { "Quantity" } dd { (display(&item.quantity)) }
            }
            a href={ (ITEMS_PATH) "/" (id) "/edit" } { "Edit" }
            " "
            a href=(ITEMS_PATH) { "Back to list" }
        },
    )
}

fn input(context: &FormContext, name: &str, label: &str) -> Markup {
    let has_error = context.has_error(name);
    html! {
        div {
            label for=(name) { (label) }
            input type="text" id=(name) name=(name)
                class=[has_error.then_some("field-error")]
                value=(context.get_value(name).unwrap_or(""));
            @for message in context.get_errors(name) {
                div class="field-error" { (message) }
            }
        }
    }
}

fn global_errors(context: &FormContext) -> Markup {
    html! {
        @if context.has_global_errors() {
            div class="global-errors" {
                @for message in &context.global_errors {
                    p class="field-error" { (message) }
                }
            }
        }
    }
}

pub fn add_form(context: &FormContext) -> Markup {
    layout(
        "Add item",
        html! {
            h2 { "Add item" }
            form action={ (ITEMS_PATH) "/add" } method="post" {
                (global_errors(context))
                (input(context, "itemName", "Name"))
                (input(context, "price", "Price"))
                (input(context, "quantity", "Quantity"))
                button type="submit" { "Save" }
            }
        },
    )
}

pub fn edit_form(id: u64, context: &FormContext) -> Markup {
    layout(
        "Edit item",
        html! {
            h2 { "Edit item" }
            form action={ (ITEMS_PATH) "/" (id) "/edit" } method="post" {
                (global_errors(context))
                div {
                    label for="id" { "ID" }
                    input type="text" id="id" name="id" value=(id) readonly;
                }
                (input(context, "itemName", "Name"))
                (input(context, "price", "Price"))
                (input(context, "quantity", "Quantity"))
                button type="submit" { "Save" }
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_form_shows_errors_and_values() {
        let context = FormContext {
            object_name: "item".into(),
            values: HashMap::from([("price".to_string(), "abc".to_string())]),
            errors: HashMap::from([(
                "price".to_string(),
                vec!["Please enter a number.".to_string()],
            )]),
            global_errors: vec!["Total too low".to_string()],
        };
        let page = add_form(&context).into_string();
        assert!(page.contains(r#"value="abc""#));
        assert!(page.contains("Please enter a number."));
        assert!(page.contains("Total too low"));
        assert!(page.contains(r#"class="field-error""#));
    }

    #[test]
    fn test_item_page() {
        let mut item = Item::new("pen", 1500, 10);
        item.id = Some(4);
        let page = item_page(&item, true).into_string();
        assert!(page.contains("Saved."));
        assert!(page.contains("/validation/items/4/edit"));
    }
}
