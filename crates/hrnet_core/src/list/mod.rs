//! Employee list view state and derivation.
//!
//! # Responsibility
//! - Hold the transient table controls (search, sort, page size, page).
//! - Derive the visible page of rows as a pure function of the collection
//!   and those controls.
//!
//! # Invariants
//! - Derivation never mutates the source collection.
//! - Sorting is stable; equal keys keep their filtered order.

pub mod controls;
pub mod pipeline;
