//! # Repository Module
//!
//! Repository implementations for database access.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Repository Pattern                                 │
//! │                                                                         │
//! │  HTTP handler                                                           │
//! │       │                                                                 │
//! │       │ db.employees().insert(&draft)                                  │
//! │       ▼                                                                 │
//! │  EmployeeRepository                                                    │
//! │  ├── list_all()      → Vec<Employee>                                   │
//! │  ├── get_by_id(id)   → Option<Employee>                                │
//! │  ├── insert(draft)   → Employee                                        │
//! │  ├── update(id, ..)  → Employee                                        │
//! │  ├── delete(id)      → ()                                              │
//! │  └── count()         → i64                                             │
//! │       │                                                                 │
//! │       │ SQL queries                                                     │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Repositories only accept [`roster_core::EmployeeDraft`] for writes, so
//! nothing unvalidated reaches the table.

pub mod employee;
