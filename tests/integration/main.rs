//! End-to-end tests driving the full router with an in-memory registry and a
//! temporary blob root.

mod blob_test;
mod files_test;
mod health_test;
mod helpers;
mod upload_test;
