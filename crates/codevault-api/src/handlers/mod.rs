//! Route handlers organized by domain.

pub mod blob;
pub mod files;
pub mod health;
pub mod upload;
