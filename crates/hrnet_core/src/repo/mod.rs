//! Persistence contracts and implementations.
//!
//! # Responsibility
//! - Define the key/value storage contract the record store persists into.
//! - Isolate SQLite query details from store orchestration.
//!
//! # Invariants
//! - Keys are non-blank; values are opaque text.
//! - Writing an existing key replaces its value.

pub mod kv_repo;
