//! # Legacy Endpoints
//!
//! The endpoint names the first roster front end was written against. Ids
//! travel in the JSON body instead of the path, and may arrive as either a
//! number or a numeric string. Behavior matches `/api/employees`, including
//! server-side validation, except that a create answers `200`.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::debug;

use roster_core::{Employee, EmployeeInput};

use crate::error::{ApiError, ApiResult};
use crate::routes::employees::{create, fetch, remove, update, DeleteResponse};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/getEmployees", get(get_employees))
        .route("/api/getOneEmployee", post(get_one_employee))
        .route("/api/postEmployee", post(post_employee))
        .route("/api/updateEmployee", put(update_employee))
        .route("/api/deleteEmployee", delete(delete_employee))
}

/// An id sent as `7` or `"7"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum LegacyId {
    Number(i64),
    Text(String),
}

impl LegacyId {
    fn value(&self) -> ApiResult<i64> {
        match self {
            LegacyId::Number(id) => Ok(*id),
            LegacyId::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| ApiError::bad_request(format!("Invalid employee id: {}", text))),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdBody {
    pub id: LegacyId,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBody {
    pub id: LegacyId,

    #[serde(flatten)]
    pub employee: EmployeeInput,
}

async fn get_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    Ok(Json(state.db.employees().list_all().await?))
}

async fn get_one_employee(
    State(state): State<AppState>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(body) = payload?;
    Ok(Json(fetch(&state, body.id.value()?).await?))
}

async fn post_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(input) = payload?;
    Ok(Json(create(&state, &input).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    payload: Result<Json<UpdateBody>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Json(body) = payload?;
    Ok(Json(update(&state, body.id.value()?, &body.employee).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    payload: Result<Json<IdBody>, JsonRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Json(body) = payload?;
    let id = body.id.value()?;
    debug!(id, "Legacy delete requested");

    remove(&state, id).await?;
    Ok(Json(DeleteResponse::deleted()))
}
