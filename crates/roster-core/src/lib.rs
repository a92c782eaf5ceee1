//! # roster-core: Pure Business Logic for the Employee Roster
//!
//! This crate holds the two pieces of real logic in the roster: deriving an
//! employee's age from a birthdate, and validating a candidate record. Both
//! are pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Roster Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (forms, list, detail)              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    roster-api (axum handlers)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ roster-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │    age    │  │ validation│  │   clock   │  │   │
//! │  │   │ Employee  │  │ calculate │  │  rules    │  │  today()  │  │   │
//! │  │   │  Draft    │  │  parse    │  │  FieldErr │  │  Fixed    │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    roster-db (Database Layer)                   │   │
//! │  │              SQLite queries, migrations, repositories           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Employee, EmployeeInput, EmployeeDraft)
//! - [`age`] - Age calculation and birthday parsing
//! - [`validation`] - Field rules for employee records
//! - [`clock`] - Source of "today" for callers
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use roster_core::age::calculate_age;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let birthday = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
//!
//! // The birthday falls on today, so it counts as already reached
//! assert_eq!(calculate_age(birthday, today), 24);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod age;
pub mod clock;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use age::{age_on, calculate_age, parse_birthday};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{CoreError, CoreResult, Field, FieldErrors, ValidationError};
pub use types::*;
pub use validation::validate_employee;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Minimum number of characters in a first or last name.
pub const MIN_NAME_LENGTH: usize = 2;
