//! Request handlers.
//!
//! Handlers delegate to the repositories in `fleetpulse_db` and map errors
//! via [`AppError`](crate::error::AppError).

pub mod dashboard;
