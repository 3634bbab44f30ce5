//! # Roster Database Crate
//!
//! This crate is the persistence gateway for the student roster service. It
//! owns the PostgreSQL connection pool and encapsulates every SQL statement
//! the service issues, exposing a clean API to the handler layer.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** All database-specific logic lives here, behind the
//!   [`StudentStore`] trait. The web server never sees SQL or `sqlx` types.
//! - **Injected, not ambient:** The pool is built once at startup and handed
//!   to the handler layer explicitly, so tests can substitute an in-memory
//!   store for the real repository.
//! - **Asynchronous & Pooled:** All operations are asynchronous and go
//!   through a shared `PgPool`.
//!
//! ## Public API
//!
//! - `connect`: The async function to establish the database connection pool.
//! - `StudentStore`: The storage contract the handler layer depends on.
//! - `StudentRepository`: The PostgreSQL-backed implementation.
//! - `DbError`: The specific error types that can be returned from this crate.

// Declare the modules that constitute this crate.
pub mod connection;
pub mod error;
pub mod repository;

// Re-export the key components to create a clean, public-facing API.
pub use connection::connect;
pub use error::DbError;
pub use repository::{Student, StudentRepository, StudentStore};
