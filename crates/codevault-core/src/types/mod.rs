//! Core type definitions used across the CodeVault workspace.

pub mod access_code;
pub mod id;

pub use access_code::AccessCode;
pub use id::FileId;
