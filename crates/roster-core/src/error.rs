//! # Error Types
//!
//! Domain-specific error types for roster-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  roster-core errors (this file)                                        │
//! │  ├── CoreError        - General domain errors                          │
//! │  ├── ValidationError  - One violated field rule                        │
//! │  └── FieldErrors      - Every violation of a record, one per field     │
//! │                                                                         │
//! │  roster-db errors (separate crate)                                     │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  HTTP errors (in roster-api)                                           │
//! │  └── ApiError         - What the client sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationError → FieldErrors → CoreError → ApiError → Client   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A birthday string could not be read as a calendar date.
    ///
    /// ## When This Occurs
    /// - Age preview requested for text like "yesterday" or "2000-13-01"
    /// - A date picker sent a format other than `YYYY-MM-DD` or RFC 3339
    #[error("Invalid date '{input}': {reason}")]
    MalformedDate { input: String, reason: String },

    /// The candidate record broke one or more field rules.
    #[error("Validation failed: {0}")]
    Validation(#[from] FieldErrors),
}

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Field
// =============================================================================

/// A user-editable field of an employee record.
///
/// Serializes as the wire name (`first_name`), displays as the label used in
/// messages (`First name`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FirstName,
    LastName,
    Birthday,
}

impl Field {
    /// Returns the wire name of the field.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::FirstName => "first_name",
            Field::LastName => "last_name",
            Field::Birthday => "birthday",
        }
    }

    /// Returns the human-readable label used in messages.
    pub const fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First name",
            Field::LastName => "Last name",
            Field::Birthday => "Birthday",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single violated field rule.
///
/// The `Display` output of each variant is the exact message shown next to
/// the form field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: Field },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: Field, min: usize },

    /// Field value contains something other than ASCII letters.
    #[error("Only letters allowed")]
    LettersOnly { field: Field },

    /// Invalid format (e.g., a birthday that is not a date).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: Field, reason: String },

    /// Date lies after the evaluation date.
    #[error("{field} must be in the past")]
    NotInPast { field: Field },
}

impl ValidationError {
    /// Returns the field this violation belongs to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::LettersOnly { field }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::NotInPast { field } => *field,
        }
    }
}

// =============================================================================
// Field Errors
// =============================================================================

/// Every violation found in one record, keyed by field.
///
/// Holds at most one message per field. Recording a second violation for a
/// field replaces the first, so the last rule applied wins.
///
/// ## Serialization
/// ```json
/// {
///   "first_name": "Only letters allowed",
///   "birthday": "Birthday must be in the past"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    /// Creates an empty set of field errors.
    pub fn new() -> Self {
        FieldErrors::default()
    }

    /// Records a violation, replacing any earlier message for the same field.
    pub fn record(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error.to_string());
    }

    /// Returns the message for a field, if it was violated.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Checks whether a field was violated.
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Returns true when no rule was violated.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of violated fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over `(field, message)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.as_str(), message)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}

// =============================================================================
// Unit Tests
// =============================================================================
