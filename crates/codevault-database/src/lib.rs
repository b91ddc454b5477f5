//! # codevault-database
//!
//! The [`FileRegistry`] abstraction and its implementations: PostgreSQL
//! (with connection management and embedded migrations) and an in-memory
//! registry for tests and throwaway deployments.

pub mod connection;
pub mod migration;
pub mod registry;
pub mod repositories;

pub use connection::DatabasePool;
pub use registry::FileRegistry;
pub use repositories::{MemoryFileRegistry, PgFileRegistry};
