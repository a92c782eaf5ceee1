//! # Domain Types
//!
//! Core domain types used throughout the roster.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       From Form to Row                                  │
//! │                                                                         │
//! │  EmployeeInput        raw strings from the client                       │
//! │       │                                                                 │
//! │       ▼  validate_employee(input, today)                                │
//! │  ValidEmployee        names checked, birthday parsed and not future     │
//! │       │                                                                 │
//! │       ▼  into_draft(today)                                              │
//! │  EmployeeDraft        + age derived from birthday                       │
//! │       │                                                                 │
//! │       ▼  repository insert / update                                     │
//! │  Employee             + id assigned by the database                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Age
//! `age` is a snapshot taken at write time. It is never accepted from a
//! client and is not refreshed between writes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::age::calculate_age;
use crate::error::CoreResult;
use crate::validation::validate_employee;

// =============================================================================
// Employee
// =============================================================================

/// An employee as stored in the `employees` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[ts(export)]
pub struct Employee {
    /// Identifier assigned by the database (auto-increment).
    pub id: i64,

    pub first_name: String,

    pub last_name: String,

    /// Birthdate, serialized as `YYYY-MM-DD`.
    #[ts(as = "String")]
    pub birthday: NaiveDate,

    /// Age in whole years as of the last write.
    pub age: i32,
}

impl Employee {
    /// Returns "First Last" for display and logging.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Employee Input
// =============================================================================

/// A candidate record as submitted from the create or edit form.
///
/// Missing or `null` name fields deserialize as empty strings so the
/// validator can report them as required. Any `id` or `age` in the payload
/// is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EmployeeInput {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,

    /// Birthday as typed or picked, e.g. `2000-01-31`.
    #[serde(default)]
    pub birthday: Option<String>,
}

impl EmployeeInput {
    /// Creates an input from its three form fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birthday: impl Into<String>,
    ) -> Self {
        EmployeeInput {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birthday: Some(birthday.into()),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// =============================================================================
// Valid Employee
// =============================================================================

/// A record that passed every field rule.
///
/// Only [`validate_employee`] creates one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidEmployee {
    first_name: String,
    last_name: String,
    birthday: NaiveDate,
}

impl ValidEmployee {
    pub(crate) fn new(first_name: String, last_name: String, birthday: NaiveDate) -> Self {
        ValidEmployee {
            first_name,
            last_name,
            birthday,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    /// Derives the age as of `today` and produces a writable draft.
    pub fn into_draft(self, today: NaiveDate) -> EmployeeDraft {
        let age = calculate_age(self.birthday, today);
        EmployeeDraft {
            first_name: self.first_name,
            last_name: self.last_name,
            birthday: self.birthday,
            age,
        }
    }
}

// =============================================================================
// Employee Draft
// =============================================================================

/// A validated record plus its derived age, ready to insert or update.
///
/// The repository only writes drafts, so every stored age was computed from
/// the stored birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    first_name: String,
    last_name: String,
    birthday: NaiveDate,
    age: i32,
}

impl EmployeeDraft {
    /// Validates `input` and derives its age as of `today`.
    ///
    /// ## Errors
    /// `CoreError::Validation` carrying every violated field.
    pub fn prepare(input: &EmployeeInput, today: NaiveDate) -> CoreResult<Self> {
        let valid = validate_employee(input, today)?;
        Ok(valid.into_draft(today))
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn birthday(&self) -> NaiveDate {
        self.birthday
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    /// Attaches the database-assigned id.
    pub fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birthday: self.birthday,
            age: self.age,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, Field};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_prepare_derives_age() {
        let input = EmployeeInput::new("Ada", "Lovelace", "1990-12-10");
        let draft = EmployeeDraft::prepare(&input, date(2024, 6, 15)).unwrap();

        assert_eq!(draft.first_name(), "Ada");
        assert_eq!(draft.birthday(), date(1990, 12, 10));
        assert_eq!(draft.age(), 33);
    }

    #[test]
    fn test_prepare_rejects_invalid_input() {
        let input = EmployeeInput::new("", "Lovelace", "1990-12-10");
        let err = EmployeeDraft::prepare(&input, date(2024, 6, 15)).unwrap_err();

        match err {
            CoreError::Validation(fields) => assert!(fields.contains(Field::FirstName)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_input_ignores_client_age() {
        let input: EmployeeInput = serde_json::from_str(
            r#"{"first_name": "Ada", "last_name": "Lovelace", "birthday": "1990-12-10", "age": 99}"#,
        )
        .unwrap();
        let draft = EmployeeDraft::prepare(&input, date(2024, 6, 15)).unwrap();
        assert_eq!(draft.age(), 33);
    }

    #[test]
    fn test_input_missing_fields_default_to_empty() {
        let input: EmployeeInput = serde_json::from_str("{}").unwrap();
        assert_eq!(input, EmployeeInput::default());
    }

    #[test]
    fn test_input_null_names_become_empty() {
        let input: EmployeeInput = serde_json::from_str(
            r#"{"first_name": null, "last_name": null, "birthday": null}"#,
        )
        .unwrap();
        assert_eq!(input, EmployeeInput::default());

        let err = EmployeeDraft::prepare(&input, date(2024, 6, 15)).unwrap_err();
        match err {
            CoreError::Validation(fields) => {
                assert_eq!(fields.get(Field::FirstName), Some("First name is required"));
                assert_eq!(fields.get(Field::LastName), Some("Last name is required"));
                assert_eq!(fields.get(Field::Birthday), Some("Birthday is required"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_employee_serializes_birthday_as_date() {
        let employee = EmployeeInput::new("Grace", "Hopper", "1906-12-09");
        let employee = EmployeeDraft::prepare(&employee, date(2024, 6, 15))
            .unwrap()
            .into_employee(7);

        let json = serde_json::to_value(&employee).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["birthday"], "1906-12-09");
        assert_eq!(json["age"], 117);
        assert_eq!(employee.full_name(), "Grace Hopper");
    }
}
