//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical employee record and its creation draft.
//! - Name the displayable columns and the fixed option sets (departments,
//!   US states) the create flow chooses from.
//!
//! # Invariants
//! - Every stored record is identified by a stable `EmployeeId`.
//! - Records are immutable once created; append is the only mutation.

pub mod employee;
pub mod us_state;
