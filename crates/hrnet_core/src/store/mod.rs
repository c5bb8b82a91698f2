//! Authoritative in-memory record store with a persisted mirror.
//!
//! # Responsibility
//! - Own the employee collection for the lifetime of a session.
//! - Rehydrate once at construction and write back after every append.
//!
//! # Invariants
//! - Insertion order is display order before any sort.
//! - Storage failures never reach callers; memory stays the source of truth.

pub mod employee_store;
