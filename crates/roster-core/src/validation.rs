//! # Validation Module
//!
//! Field rules for employee records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  ├── POST /api/employees/validate (THIS MODULE, advisory)              │
//! │  └── Immediate per-field feedback                                      │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Write boundary (POST/PUT /api/employees)                     │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE again, authoritative                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  └── NOT NULL constraints                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//! | Field        | Rules (in order)                                        |
//! |--------------|---------------------------------------------------------|
//! | `first_name` | required, at least 2 characters, letters only           |
//! | `last_name`  | required, at least 2 characters, letters only           |
//! | `birthday`   | required, a calendar date, not after today              |
//!
//! Every field is checked; one bad field never hides another. When a field
//! breaks several rules, the last one in the order above is reported. A
//! missing value stops the remaining rules for that field.

use chrono::NaiveDate;

use crate::age::{read_date, MALFORMED_DATE_REASON};
use crate::error::{Field, FieldErrors, ValidationError};
use crate::types::{EmployeeInput, ValidEmployee};
use crate::MIN_NAME_LENGTH;

/// Result type for single-field validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a whole employee record as of `today`.
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Edit Employee form: Save                                               │
/// │                                                                         │
/// │  { first_name: "A1", last_name: "", birthday: "2999-01-01" }           │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_employee(input, today) ← THIS FUNCTION                       │
/// │       │                                                                 │
/// │       ├── first_name → "Only letters allowed"                          │
/// │       ├── last_name  → "Last name is required"                         │
/// │       └── birthday   → "Birthday must be in the past"                  │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  Err(FieldErrors) - all three shown at once next to their inputs       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use roster_core::{validate_employee, EmployeeInput, Field};
///
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
///
/// let ok = EmployeeInput::new("Jo", "Doe", "2000-01-01");
/// assert!(validate_employee(&ok, today).is_ok());
///
/// let bad = EmployeeInput::new("", "Doe", "2000-01-01");
/// let errors = validate_employee(&bad, today).unwrap_err();
/// assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
/// assert_eq!(errors.len(), 1);
/// ```
pub fn validate_employee(
    input: &EmployeeInput,
    today: NaiveDate,
) -> Result<ValidEmployee, FieldErrors> {
    let mut errors = FieldErrors::new();

    for violation in validate_name(Field::FirstName, &input.first_name) {
        errors.record(violation);
    }

    for violation in validate_name(Field::LastName, &input.last_name) {
        errors.record(violation);
    }

    let birthday = match validate_birthday(input.birthday.as_deref(), today) {
        Ok(date) => Some(date),
        Err(violation) => {
            errors.record(violation);
            None
        }
    };

    match birthday {
        Some(birthday) if errors.is_empty() => Ok(ValidEmployee::new(
            input.first_name.clone(),
            input.last_name.clone(),
            birthday,
        )),
        _ => Err(errors),
    }
}

// =============================================================================
// Field Validators
// =============================================================================

/// Checks a first or last name, returning every violated rule in order.
///
/// ## Rules
/// - Must not be empty (when empty, no other rule applies)
/// - Must be at least 2 characters
/// - Must contain only ASCII letters (`^[A-Za-z]+$`): no spaces, hyphens,
///   apostrophes, digits or accented letters
///
/// ## Example
/// ```rust
/// use roster_core::validation::validate_name;
/// use roster_core::Field;
///
/// assert!(validate_name(Field::FirstName, "Jo").is_empty());
/// assert_eq!(validate_name(Field::FirstName, "1").len(), 2);
/// ```
pub fn validate_name(field: Field, value: &str) -> Vec<ValidationError> {
    if value.is_empty() {
        return vec![ValidationError::Required { field }];
    }

    let mut violations = Vec::new();

    if value.chars().count() < MIN_NAME_LENGTH {
        violations.push(ValidationError::TooShort {
            field,
            min: MIN_NAME_LENGTH,
        });
    }

    if !value.chars().all(|c| c.is_ascii_alphabetic()) {
        violations.push(ValidationError::LettersOnly { field });
    }

    violations
}

/// Checks a birthday and returns the parsed date.
///
/// ## Rules
/// - Must be present and non-blank
/// - Must parse as a calendar date (see [`crate::age::parse_birthday`])
/// - Must not be after `today`; a birthday of today is accepted
pub fn validate_birthday(value: Option<&str>, today: NaiveDate) -> ValidationResult<NaiveDate> {
    let field = Field::Birthday;

    let value = match value {
        Some(value) if !value.trim().is_empty() => value,
        _ => return Err(ValidationError::Required { field }),
    };

    let birthday = read_date(value).ok_or_else(|| ValidationError::InvalidFormat {
        field,
        reason: MALFORMED_DATE_REASON.to_string(),
    })?;

    if birthday > today {
        return Err(ValidationError::NotInPast { field });
    }

    Ok(birthday)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn errors_for(first: &str, last: &str, birthday: &str) -> FieldErrors {
        validate_employee(&EmployeeInput::new(first, last, birthday), today()).unwrap_err()
    }

    #[test]
    fn test_valid_record() {
        let valid = validate_employee(&EmployeeInput::new("Jo", "Doe", "2000-01-01"), today())
            .unwrap();
        assert_eq!(valid.first_name(), "Jo");
        assert_eq!(valid.last_name(), "Doe");
        assert_eq!(valid.birthday(), NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());
    }

    #[test]
    fn test_empty_first_name_is_required_only() {
        let errors = errors_for("", "Doe", "2000-01-01");
        assert_eq!(errors.get(Field::FirstName), Some("First name is required"));
        assert!(!errors.contains(Field::LastName));
        assert!(!errors.contains(Field::Birthday));
    }

    #[test]
    fn test_letters_only() {
        let errors = errors_for("A1", "Doe", "2000-01-01");
        assert_eq!(errors.get(Field::FirstName), Some("Only letters allowed"));
        assert_eq!(errors.len(), 1);

        for name in ["Mary Ann", "Jean-Luc", "O'Neil", "José"] {
            let errors = errors_for("Jo", name, "2000-01-01");
            assert_eq!(errors.get(Field::LastName), Some("Only letters allowed"), "{name}");
        }
    }

    #[test]
    fn test_too_short() {
        let errors = errors_for("J", "D", "2000-01-01");
        assert_eq!(
            errors.get(Field::FirstName),
            Some("First name must be at least 2 characters")
        );
        assert_eq!(
            errors.get(Field::LastName),
            Some("Last name must be at least 2 characters")
        );
    }

    #[test]
    fn test_last_violated_rule_wins() {
        // "1" is both too short and not a letter
        assert_eq!(validate_name(Field::FirstName, "1").len(), 2);

        let errors = errors_for("1", "Doe", "2000-01-01");
        assert_eq!(errors.get(Field::FirstName), Some("Only letters allowed"));
    }

    #[test]
    fn test_future_birthday() {
        let errors = errors_for("Jo", "Doe", "2999-01-01");
        assert_eq!(errors.get(Field::Birthday), Some("Birthday must be in the past"));
        assert_eq!(errors.len(), 1);

        let errors = errors_for("Jo", "Doe", "2024-06-16");
        assert_eq!(errors.get(Field::Birthday), Some("Birthday must be in the past"));
    }

    #[test]
    fn test_birthday_today_is_accepted() {
        let input = EmployeeInput::new("Jo", "Doe", "2024-06-15");
        assert!(validate_employee(&input, today()).is_ok());
    }

    #[test]
    fn test_missing_birthday() {
        let input = EmployeeInput {
            first_name: "Jo".to_string(),
            last_name: "Doe".to_string(),
            birthday: None,
        };
        let errors = validate_employee(&input, today()).unwrap_err();
        assert_eq!(errors.get(Field::Birthday), Some("Birthday is required"));

        let errors = errors_for("Jo", "Doe", "   ");
        assert_eq!(errors.get(Field::Birthday), Some("Birthday is required"));
    }

    #[test]
    fn test_malformed_birthday() {
        let errors = errors_for("Jo", "Doe", "31/12/1999");
        assert_eq!(
            errors.get(Field::Birthday),
            Some("Birthday has invalid format: expected a YYYY-MM-DD date")
        );
    }

    #[test]
    fn test_birthday_rule_matches_parser() {
        for input in ["2000-01-01", "2000-01-01T00:00:00.000Z", "2000-13-01", "yesterday"] {
            let parsed = crate::age::parse_birthday(input);
            let checked = validate_birthday(Some(input), today());

            match (parsed, checked) {
                (Ok(a), Ok(b)) => assert_eq!(a, b),
                (Err(CoreError::MalformedDate { reason, .. }), Err(violation)) => {
                    assert_eq!(
                        violation,
                        ValidationError::InvalidFormat {
                            field: Field::Birthday,
                            reason,
                        }
                    );
                }
                (parsed, checked) => panic!("{input}: {parsed:?} vs {checked:?}"),
            }
        }
    }

    #[test]
    fn test_all_fields_reported_together() {
        let errors = errors_for("A1", "", "2999-01-01");
        assert_eq!(errors.len(), 3);
        assert_eq!(errors.get(Field::FirstName), Some("Only letters allowed"));
        assert_eq!(errors.get(Field::LastName), Some("Last name is required"));
        assert_eq!(errors.get(Field::Birthday), Some("Birthday must be in the past"));
    }

    #[test]
    fn test_validation_is_idempotent() {
        let input = EmployeeInput::new("A1", "x", "2999-01-01");
        let first = validate_employee(&input, today()).unwrap_err();
        let second = validate_employee(&input, today()).unwrap_err();
        assert_eq!(first, second);
    }
}
