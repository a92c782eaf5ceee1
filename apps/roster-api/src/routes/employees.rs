//! # Employee Routes
//!
//! CRUD endpoints under `/api/employees`.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /api/employees      { first_name, last_name, birthday, age? }     │
//! │  PUT  /api/employees/:id  { first_name, last_name, birthday, age? }     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EmployeeDraft::prepare(input, today)                                  │
//! │       ├── any field rule fails → 422, store untouched                  │
//! │       └── ok → age derived from birthday, client age dropped           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert → 201 + Employee        update → 200 + Employee / 404          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The `create`, `fetch`, `update` and `remove` helpers are shared with the
//! legacy endpoint names in [`super::legacy`].

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use roster_core::{Employee, EmployeeDraft, EmployeeInput};

use crate::error::{ApiError, ApiResult};
use crate::routes::preview::validate_employee;
use crate::AppState;

/// Message returned after a successful delete.
pub const DELETED_MESSAGE: &str = "Employee was deleted successfully!";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/employees", get(list_employees).post(create_employee))
        .route("/api/employees/validate", post(validate_employee))
        .route(
            "/api/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
}

// =============================================================================
// DTOs
// =============================================================================

/// Body of a successful delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        DeleteResponse {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

async fn list_employees(State(state): State<AppState>) -> ApiResult<Json<Vec<Employee>>> {
    debug!("Listing employees");
    let employees = state.db.employees().list_all().await?;
    Ok(Json(employees))
}

async fn create_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Employee>)> {
    let Json(input) = payload?;
    let employee = create(&state, &input).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

async fn get_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    Ok(Json(fetch(&state, id).await?))
}

async fn update_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<Json<Employee>> {
    let Path(id) = id?;
    let Json(input) = payload?;
    Ok(Json(update(&state, id, &input).await?))
}

async fn delete_employee(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> ApiResult<Json<DeleteResponse>> {
    let Path(id) = id?;
    remove(&state, id).await?;
    Ok(Json(DeleteResponse::deleted()))
}

// =============================================================================
// Shared Operations
// =============================================================================

/// Validates, derives age and inserts.
pub(crate) async fn create(state: &AppState, input: &EmployeeInput) -> ApiResult<Employee> {
    let draft = EmployeeDraft::prepare(input, state.today())?;
    let employee = state.db.employees().insert(&draft).await?;

    info!(id = employee.id, name = %employee.full_name(), "Employee created");
    Ok(employee)
}

pub(crate) async fn fetch(state: &AppState, id: i64) -> ApiResult<Employee> {
    debug!(id, "Fetching employee");
    state
        .db
        .employees()
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("Employee", &id.to_string()))
}

/// Validates, recomputes age and replaces the stored record.
pub(crate) async fn update(
    state: &AppState,
    id: i64,
    input: &EmployeeInput,
) -> ApiResult<Employee> {
    let draft = EmployeeDraft::prepare(input, state.today())?;
    let employee = state.db.employees().update(id, &draft).await?;

    info!(id, name = %employee.full_name(), "Employee updated");
    Ok(employee)
}

pub(crate) async fn remove(state: &AppState, id: i64) -> ApiResult<()> {
    state.db.employees().delete(id).await?;
    info!(id, "Employee deleted");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
