//! File registry implementations.

pub mod file;
pub mod memory;

pub use file::PgFileRegistry;
pub use memory::MemoryFileRegistry;
