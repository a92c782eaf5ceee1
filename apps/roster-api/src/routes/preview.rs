//! # Preview Routes
//!
//! Read-only helpers the edit form calls before submitting:
//! per-field validation and a live age for the typed birthday.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use roster_core::{age_on, validate_employee as check_employee, EmployeeInput};

use crate::error::{ApiError, ApiResult};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/api/age", get(preview_age))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResponse {
    pub valid: bool,
}

#[derive(Debug, Deserialize)]
pub struct AgeQuery {
    pub birthday: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgeResponse {
    pub birthday: String,
    pub age: i32,
}

/// Runs every field rule without touching the database.
///
/// `200 {"valid": true}` or `422` with the same `fields` map a failed
/// save would return.
pub(crate) async fn validate_employee(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ValidationResponse>)> {
    let Json(input) = payload?;

    match check_employee(&input, state.today()) {
        Ok(_) => Ok((StatusCode::OK, Json(ValidationResponse { valid: true }))),
        Err(fields) => {
            debug!(failed = fields.len(), "Employee input failed validation");
            Err(ApiError::from(fields))
        }
    }
}

/// Age in whole years as of today. Future dates give a negative age.
async fn preview_age(
    State(state): State<AppState>,
    query: Result<Query<AgeQuery>, QueryRejection>,
) -> ApiResult<Json<AgeResponse>> {
    let Query(query) = query?;
    let age = age_on(&query.birthday, state.today())?;

    Ok(Json(AgeResponse {
        birthday: query.birthday,
        age,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{send, test_state};
    use serde_json::json;

    #[tokio::test]
    async fn test_validate_ok() {
        let state = test_state().await;
        let body = json!({"first_name": "Jo", "last_name": "Doe", "birthday": "2000-01-01"});

        let (status, result) = send(&state, "POST", "/api/employees/validate", Some(body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(result, json!({"valid": true}));
    }

    #[tokio::test]
    async fn test_validate_reports_fields() {
        let state = test_state().await;
        let body = json!({"first_name": "", "last_name": "Doe", "birthday": "2000-01-01"});

        let (status, error) = send(&state, "POST", "/api/employees/validate", Some(body)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error["fields"], json!({"first_name": "First name is required"}));
    }

    #[tokio::test]
    async fn test_validate_does_not_store() {
        let state = test_state().await;
        let body = json!({"first_name": "Jo", "last_name": "Doe", "birthday": "2000-01-01"});

        send(&state, "POST", "/api/employees/validate", Some(body)).await;
        assert_eq!(state.db.employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_age_preview() {
        let state = test_state().await;

        let (status, body) = send(&state, "GET", "/api/age?birthday=2000-06-15", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["age"], 24);

        let (_, body) = send(&state, "GET", "/api/age?birthday=2000-06-16", None).await;
        assert_eq!(body["age"], 23);
    }

    #[tokio::test]
    async fn test_age_preview_malformed_date() {
        let state = test_state().await;

        let (status, error) = send(&state, "GET", "/api/age?birthday=yesterday", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "INVALID_DATE");

        let (status, error) = send(&state, "GET", "/api/age", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(error["code"], "BAD_REQUEST");
    }
}
