//! Core types and traits for the snip URL shortener.
//!
//! This crate provides the types shared by the storage engine and the
//! HTTP gateway: the identifier newtype, the repository trait, and the
//! storage error taxonomy.

pub mod error;
pub mod repository;
pub mod short_id;

pub use error::{Result, StorageError};
pub use repository::Repository;
pub use short_id::ShortId;
