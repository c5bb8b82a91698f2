//! View-level use-case services.
//!
//! # Responsibility
//! - Turn form input into stored records (create flow).
//! - Keep list controls and the derived page together for the list view.
//! - Keep presentation layers decoupled from store and storage details.

pub mod create_employee;
pub mod employee_list;
