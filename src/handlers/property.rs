//! Property CRUD handlers: create, read, update, delete, list.

use crate::draft::PropertyDraft;
use crate::error::AppError;
use crate::form::PropertyForm;
use crate::notify::TracingSink;
use crate::response::{success_many, success_one};
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;
use uuid::Uuid;

/// Columns the list endpoint may filter on.
const FILTER_COLUMNS: &[&str] = &["city", "property_type", "locality", "published", "verified"];

fn parse_id(id_str: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id_str).map_err(|_| AppError::BadRequest("invalid property id".into()))
}

fn filter_value(column: &str, raw: &str) -> Value {
    match column {
        "published" | "verified" => {
            if raw.eq_ignore_ascii_case("true") {
                Value::Bool(true)
            } else if raw.eq_ignore_ascii_case("false") {
                Value::Bool(false)
            } else {
                Value::String(raw.to_string())
            }
        }
        _ => Value::String(raw.to_string()),
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut limit: Option<u32> = None;
    let mut offset: Option<u32> = None;
    let mut filters: Vec<(String, Value)> = Vec::new();

    for (k, v) in params {
        match k.as_str() {
            "limit" => {
                limit = v.parse().ok();
            }
            "offset" => {
                offset = v.parse().ok();
            }
            _ => {
                if FILTER_COLUMNS.contains(&k.as_str()) {
                    let value = filter_value(&k, &v);
                    filters.push((k, value));
                }
            }
        }
    }

    let rows = state.store.list(&filters, limit, offset).await?;
    Ok(success_many(rows))
}

pub async fn create(
    State(state): State<AppState>,
    Json(draft): Json<PropertyDraft>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let mut form = PropertyForm::from_draft(draft);
    form.draft_mut().id = None;
    let outcome = form.submit(state.store.as_ref(), &TracingSink).await?;
    Ok(success_one(StatusCode::CREATED, outcome.property().clone()))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let property = state
        .store
        .fetch(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(success_one(StatusCode::OK, property))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(draft): Json<PropertyDraft>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if state.store.fetch(id).await?.is_none() {
        return Err(AppError::NotFound(id_str));
    }
    let mut form = PropertyForm::from_draft(draft);
    form.draft_mut().id = Some(id);
    let outcome = form.submit(state.store.as_ref(), &TracingSink).await?;
    Ok(success_one(StatusCode::OK, outcome.property().clone()))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl axum::response::IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| AppError::NotFound(id_str))?;
    Ok(StatusCode::NO_CONTENT)
}
