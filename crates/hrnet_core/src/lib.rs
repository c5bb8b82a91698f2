//! Core domain logic for HRnet employee records.
//! This crate is the single source of truth for record, storage and list
//! derivation behavior; presentation layers only call into it.

pub mod db;
pub mod list;
pub mod locale;
pub mod logging;
pub mod model;
pub mod repo;
pub mod routes;
pub mod service;
pub mod store;

pub use list::controls::{
    ListControls, SortConfig, SortDirection, DEFAULT_ENTRIES_PER_PAGE, ENTRIES_PER_PAGE_OPTIONS,
};
pub use list::pipeline::{derive_page, EmployeePage, EmployeeRow};
pub use locale::DateLocale;
pub use logging::{default_log_level, init_logging, logging_status, LogLevel, LoggingError};
pub use model::employee::{
    Department, EmployeeDraft, EmployeeField, EmployeeId, EmployeeRecord,
    EmployeeValidationError, ParseFieldError,
};
pub use model::us_state::{find_state, UsState, US_STATES};
pub use repo::kv_repo::{KvRepository, RepoError, RepoResult, SqliteKvRepository};
pub use routes::View;
pub use service::create_employee::{CreateEmployeeForm, FormError};
pub use service::employee_list::EmployeeListView;
pub use store::employee_store::{EmployeeStore, LoadStatus, STORAGE_KEY, STORAGE_VERSION};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
