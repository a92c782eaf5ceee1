//! # HTTP Routes
//!
//! ```text
//! GET    /health
//! GET    /api/employees
//! POST   /api/employees
//! POST   /api/employees/validate
//! GET    /api/employees/:id
//! PUT    /api/employees/:id
//! DELETE /api/employees/:id
//! GET    /api/age?birthday=YYYY-MM-DD
//!
//! Legacy names:
//! GET    /api/getEmployees
//! POST   /api/getOneEmployee      { id }
//! POST   /api/postEmployee        { first_name, last_name, birthday }
//! PUT    /api/updateEmployee      { id, first_name, last_name, birthday }
//! DELETE /api/deleteEmployee      { id }
//! ```

pub mod employees;
pub mod health;
pub mod legacy;
pub mod preview;
