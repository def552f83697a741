//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed repositories using Diesel ORM
//! - **memory**: process-local repositories used by tests and database-less
//!   runs
//!
//! Adapters are thin translators between domain records and storage
//! representations. They contain no business logic.

pub mod memory;
pub mod persistence;
