//! # codevault-entity
//!
//! Domain entity models for CodeVault. Every struct in this crate represents
//! a registry row or a value object used to create one. Registry entities
//! derive `sqlx::FromRow` in addition to the serde traits.

pub mod file;
