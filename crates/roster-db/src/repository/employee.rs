//! # Employee Repository
//!
//! Database operations for the `employees` table.
//!
//! ## Write Path
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Saving an Employee                                   │
//! │                                                                         │
//! │  EmployeeDraft { "Ada", "Lovelace", 1990-12-10, age: 33 }              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  insert(&draft)                                                        │
//! │       │  INSERT INTO employees (first_name, last_name, birthday, age)  │
//! │       ▼                                                                 │
//! │  last_insert_rowid() → 12                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Employee { id: 12, "Ada", "Lovelace", 1990-12-10, age: 33 }           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Birthdays are stored as `YYYY-MM-DD` text. Rows are always returned in
//! ascending id order.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use roster_core::{Employee, EmployeeDraft};

const SELECT_EMPLOYEE: &str = "SELECT id, first_name, last_name, birthday, age FROM employees";

/// Repository for employee database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = EmployeeRepository::new(pool);
///
/// let created = repo.insert(&draft).await?;
/// let fetched = repo.get_by_id(created.id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: SqlitePool,
}

impl EmployeeRepository {
    /// Creates a new EmployeeRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EmployeeRepository { pool }
    }

    /// Lists every employee, ordered by id.
    pub async fn list_all(&self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;

        debug!(count = employees.len(), "Listed employees");
        Ok(employees)
    }

    /// Gets an employee by id.
    ///
    /// ## Returns
    /// * `Ok(Some(Employee))` - Employee found
    /// * `Ok(None)` - No row with that id
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_EMPLOYEE} WHERE id = ?1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(employee)
    }

    /// Inserts a new employee and returns it with its assigned id.
    pub async fn insert(&self, draft: &EmployeeDraft) -> DbResult<Employee> {
        debug!(
            first_name = %draft.first_name(),
            last_name = %draft.last_name(),
            "Inserting employee"
        );

        let result = sqlx::query(
            r#"
            INSERT INTO employees (first_name, last_name, birthday, age)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(draft.first_name())
        .bind(draft.last_name())
        .bind(draft.birthday())
        .bind(draft.age())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Employee inserted");

        Ok(draft.clone().into_employee(id))
    }

    /// Replaces every field of an existing employee.
    ///
    /// ## Returns
    /// * `Ok(Employee)` - The stored record after the update
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn update(&self, id: i64, draft: &EmployeeDraft) -> DbResult<Employee> {
        debug!(id, "Updating employee");

        let result = sqlx::query(
            r#"
            UPDATE employees SET
                first_name = ?2,
                last_name = ?3,
                birthday = ?4,
                age = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(draft.first_name())
        .bind(draft.last_name())
        .bind(draft.birthday())
        .bind(draft.age())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(draft.clone().into_employee(id))
    }

    /// Permanently removes an employee.
    ///
    /// ## Returns
    /// * `Ok(())` - Row deleted
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting employee");

        let result = sqlx::query("DELETE FROM employees WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(())
    }

    /// Counts stored employees.
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};
    use chrono::NaiveDate;
    use roster_core::EmployeeInput;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn draft(first: &str, last: &str, birthday: &str) -> EmployeeDraft {
        EmployeeDraft::prepare(&EmployeeInput::new(first, last, birthday), today()).unwrap()
    }

    async fn test_db() -> Database {
        Database::new(DbConfig::in_memory()).await.unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let db = test_db().await;
        let repo = db.employees();

        let created = repo.insert(&draft("Ada", "Lovelace", "1990-12-10")).await.unwrap();
        assert!(created.id > 0);
        assert_eq!(created.age, 33);

        let fetched = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.birthday, NaiveDate::from_ymd_opt(1990, 12, 10).unwrap());
    }

    #[tokio::test]
    async fn test_get_missing_returns_none() {
        let db = test_db().await;
        assert!(db.employees().get_by_id(999).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_all_orders_by_id() {
        let db = test_db().await;
        let repo = db.employees();

        let first = repo.insert(&draft("Zed", "Zulu", "1980-01-01")).await.unwrap();
        let second = repo.insert(&draft("Amy", "Alpha", "1985-05-05")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();
        assert_eq!(ids, vec![first.id, second.id]);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_replaces_fields_and_age() {
        let db = test_db().await;
        let repo = db.employees();

        let created = repo.insert(&draft("Ada", "Lovelace", "1990-12-10")).await.unwrap();
        let updated = repo
            .update(created.id, &draft("Ada", "King", "2000-01-01"))
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.last_name, "King");
        assert_eq!(updated.age, 24);

        let stored = repo.get_by_id(created.id).await.unwrap().unwrap();
        assert_eq!(stored, updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let db = test_db().await;
        let err = db
            .employees()
            .update(42, &draft("Ada", "Lovelace", "1990-12-10"))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::NotFound { .. }));
        assert_eq!(db.employees().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = test_db().await;
        let repo = db.employees();

        let created = repo.insert(&draft("Ada", "Lovelace", "1990-12-10")).await.unwrap();
        repo.delete(created.id).await.unwrap();

        assert!(repo.get_by_id(created.id).await.unwrap().is_none());

        let err = repo.delete(created.id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ids_are_not_reused() {
        let db = test_db().await;
        let repo = db.employees();

        let first = repo.insert(&draft("Ada", "Lovelace", "1990-12-10")).await.unwrap();
        repo.delete(first.id).await.unwrap();
        let second = repo.insert(&draft("Alan", "Turing", "1912-06-23")).await.unwrap();

        assert!(second.id > first.id);
    }
}
