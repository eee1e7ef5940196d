// handlers/mod.rs - Route handlers grouped by audience
//
// Public (/, /health, /auth/*) → Customer (/customer/*) → Employee (/employee/*)
// plus the user directory lookups under /users.
//
// No handler checks the bearer token issued at login.

pub mod auth;
pub mod customer;
pub mod employee;
pub mod system;
pub mod users;

use serde::Deserialize;

/// `?start=YYYY-MM-DD&end=YYYY-MM-DD` on the calendar endpoints
#[derive(Debug, Deserialize)]
pub struct DateSpanQuery {
    pub start: chrono::NaiveDate,
    pub end: chrono::NaiveDate,
}
