//! # Database module: SQLite connection pool management
//!
//! Every model operation takes a `&SqlitePool`. The pool is built once by the binary (or
//! once per test) through [`connect`], which also brings the schema up to date by running
//! the embedded migrations in `packages/api/migrations`.
//!
//! ## Re-exports
//!
//! - [`connect`]: opens a pool for a `sqlite://` URL and migrates it.
//! - [`migrate`]: runs the embedded migrations against an existing pool.

mod pool;

pub use pool::{connect, migrate};
