//! # Roster API
//!
//! HTTP server for the employee roster.
//!
//! ## Module Organization
//! ```text
//! roster_api/
//! ├── lib.rs            ◄─── You are here (state, router, tracing)
//! ├── main.rs           ◄─── Binary entry point
//! ├── config.rs         ◄─── Environment configuration
//! ├── error.rs          ◄─── ApiError → HTTP response
//! └── routes/
//!     ├── employees.rs  ◄─── CRUD under /api/employees
//!     ├── preview.rs    ◄─── Validation and live age preview
//!     ├── legacy.rs     ◄─── Endpoint names of the first front end
//!     └── health.rs     ◄─── /health
//! ```
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       POST /api/employees                               │
//! │                                                                         │
//! │  TraceLayer ──► CorsLayer ──► Json<EmployeeInput>                       │
//! │                                    │                                    │
//! │                                    ▼                                    │
//! │                  EmployeeDraft::prepare(input, clock.today())           │
//! │                                    │                                    │
//! │                   ┌────────────────┴───────────────┐                    │
//! │                   ▼                                ▼                    │
//! │            FieldErrors → 422              db.employees().insert()       │
//! │                                                    │                    │
//! │                                                    ▼                    │
//! │                                             201 + Employee              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use chrono::NaiveDate;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use roster_core::Clock;
use roster_db::Database;

use crate::config::{ApiConfig, ConfigError};

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        AppState { db, clock }
    }

    /// The date ages and "not in the future" checks are measured against.
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the full router with request tracing.
///
/// CORS is applied separately by [`cors_layer`] so tests can drive the
/// router without an origin.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::health::router())
        .merge(routes::employees::router())
        .merge(routes::preview::router())
        .merge(routes::legacy::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// CORS policy for the configured origin.
///
/// With no origin configured any origin is allowed, which suits a front end
/// served from a separate dev server.
pub fn cors_layer(config: &ApiConfig) -> Result<CorsLayer, ConfigError> {
    let Some(origin) = config.cors_origin.as_deref() else {
        return Ok(CorsLayer::permissive());
    };

    let origin: HeaderValue = origin
        .parse()
        .map_err(|_| ConfigError::InvalidValue("ROSTER_CORS_ORIGIN".to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

// =============================================================================
// Logging
// =============================================================================

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=roster=trace` - Show trace for roster crates only
/// - Default: `info,roster=debug,sqlx=warn,tower_http=debug`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,roster=debug,sqlx=warn,tower_http=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

// =============================================================================
// Test Support
// =============================================================================

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use roster_core::FixedClock;
    use roster_db::DbConfig;
    use serde_json::Value;
    use tower::ServiceExt;

    /// 2024-06-15, the date every router test runs on.
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    pub async fn test_state() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        AppState::new(db, Arc::new(FixedClock(today())))
    }

    /// Sends one request through a fresh router and decodes the JSON body.
    pub async fn send(
        state: &AppState,
        method: &str,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = build_router(state.clone()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn config_with_origin(origin: Option<&str>) -> ApiConfig {
        ApiConfig {
            bind_addr: "127.0.0.1".parse().unwrap(),
            http_port: 3000,
            database_path: PathBuf::from("/tmp/roster.db"),
            db_max_connections: 5,
            cors_origin: origin.map(str::to_string),
        }
    }

    #[test]
    fn test_cors_layer() {
        assert!(cors_layer(&config_with_origin(None)).is_ok());
        assert!(cors_layer(&config_with_origin(Some("http://localhost:5173"))).is_ok());
        assert!(cors_layer(&config_with_origin(Some("bad\norigin"))).is_err());
    }
}
