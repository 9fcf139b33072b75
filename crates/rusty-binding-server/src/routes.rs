// File: src/routes.rs
// Purpose: Item routes: list, detail, add and edit with validation

use crate::config::Config;
use crate::error::ErrorResponse;
use crate::store::ItemRepository;
use crate::views::{self, ITEMS_PATH};
use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Json, Redirect, Response},
    routing::get,
    Form, Router,
};
use rusty_binding::{
    validate_bound, validate_form, CheckGroup, DataBinder, FormBindable, FormContext, FormData,
    Item, ItemValidator, MessageSource, PipelineResult, ValidatorRegistry, ITEM_OBJECT_NAME,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Built-in message catalog
const DEFAULT_CATALOG: &str = include_str!("../errors.toml");

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    repository: Arc<ItemRepository>,
    save_validators: ValidatorRegistry,
    update_validators: ValidatorRegistry,
    messages: Arc<MessageSource>,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let mut messages = MessageSource::from_toml_str(DEFAULT_CATALOG)
            .context("Failed to load built-in message catalog")?;
        if let Some(path) = &config.messages.path {
            messages.merge(MessageSource::load(path)?);
        }
        let messages =
            messages.use_code_as_default_message(config.messages.use_code_as_default_message);

        let save_validators = ValidatorRegistry::new()
            .with::<Item>(ItemValidator::new(config.rules).for_group(CheckGroup::Save))?;
        let update_validators = ValidatorRegistry::new()
            .with::<Item>(ItemValidator::new(config.rules).for_group(CheckGroup::Update))?;

        Ok(Self {
            repository: Arc::new(ItemRepository::new()),
            save_validators,
            update_validators,
            messages: Arc::new(messages),
        })
    }

    pub fn repository(&self) -> &ItemRepository {
        &self.repository
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(ITEMS_PATH) }))
        .route(ITEMS_PATH, get(items))
        .route(&format!("{}/add", ITEMS_PATH), get(add_form).post(add_item))
        .route(&format!("{}/:id", ITEMS_PATH), get(item))
        .route(&format!("{}/:id/edit", ITEMS_PATH), get(edit_form).post(edit_item))
        .with_state(state)
}

/// Check if request accepts JSON
fn accepts_json(headers: &HeaderMap) -> bool {
    headers
        .get("accept")
        .and_then(|v| v.to_str().ok())
        .map(|accept| accept.contains("application/json"))
        .unwrap_or(false)
}

/// Re-render a rejected form, or send the context as JSON
fn rejected(
    headers: &HeaderMap,
    context: FormContext,
    page: impl FnOnce(&FormContext) -> maud::Markup,
) -> Response {
    if accepts_json(headers) {
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(context)).into_response();
    }
    Html(page(&context).into_string()).into_response()
}

async fn items(State(state): State<AppState>) -> Response {
    let items = state.repository.find_all().await;
    Html(views::items_page(&items).into_string()).into_response()
}

async fn item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Response, ErrorResponse> {
    let item = state
        .repository
        .find_by_id(id)
        .await
        .ok_or_else(|| ErrorResponse::not_found(format!("Item {} not found", id)))?;
    let saved = query.get("status").map(|s| s == "true").unwrap_or(false);
    Ok(Html(views::item_page(&item, saved).into_string()).into_response())
}

async fn add_form() -> Response {
    let item = Item::default();
    let context = FormContext::from_target(ITEM_OBJECT_NAME, &item, Item::field_names());
    Html(views::add_form(&context).into_string()).into_response()
}

async fn add_item(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ErrorResponse> {
    let form = FormData::from_fields(fields);
    let binder = DataBinder::new(ITEM_OBJECT_NAME).disallow("id");

    match validate_form::<Item>(&form, &binder, &state.save_validators, &state.messages)? {
        PipelineResult::Invalid(context) => Ok(rejected(&headers, context, views::add_form)),
        PipelineResult::Valid(item) => {
            let saved = state.repository.save(item).await;
            let id = saved.id.unwrap_or_default();
            tracing::info!(id, "item saved");
            Ok(Redirect::to(&format!("{}/{}?status=true", ITEMS_PATH, id)).into_response())
        }
    }
}

async fn edit_form(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Response, ErrorResponse> {
    let item = state
        .repository
        .find_by_id(id)
        .await
        .ok_or_else(|| ErrorResponse::not_found(format!("Item {} not found", id)))?;
    let context = FormContext::from_target(ITEM_OBJECT_NAME, &item, Item::field_names());
    Ok(Html(views::edit_form(id, &context).into_string()).into_response())
}

async fn edit_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    headers: HeaderMap,
    Form(fields): Form<HashMap<String, String>>,
) -> Result<Response, ErrorResponse> {
    if state.repository.find_by_id(id).await.is_none() {
        return Err(ErrorResponse::not_found(format!("Item {} not found", id)));
    }

    let form = FormData::from_fields(fields);
    // The id always comes from the path
    let seed = Item {
        id: Some(id),
        ..Item::default()
    };
    let bound = DataBinder::new(ITEM_OBJECT_NAME)
        .disallow("id")
        .bind_onto(seed, &form);

    match validate_bound(bound, &state.update_validators, &state.messages)? {
        PipelineResult::Invalid(context) => {
            Ok(rejected(&headers, context, |c| views::edit_form(id, c)))
        }
        PipelineResult::Valid(item) => {
            if !state.repository.update(id, item).await {
                return Err(ErrorResponse::not_found(format!("Item {} not found", id)));
            }
            tracing::info!(id, "item updated");
            Ok(Redirect::to(&format!("{}/{}", ITEMS_PATH, id)).into_response())
        }
    }
}
