//! Core traits defined in `codevault-core` and implemented by other crates.

pub mod blob;

pub use blob::{BlobMeta, BlobStore, ByteStream};
