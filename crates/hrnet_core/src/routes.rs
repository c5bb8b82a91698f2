//! Addressable views.
//!
//! # Invariants
//! - `/` is the create view and the default.
//! - Any path that is not a known route resolves to `NotFound`.

/// Top-level views reachable by path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    CreateEmployee,
    EmployeeList,
    NotFound,
}

impl View {
    /// Resolves a request path, ignoring a query string, fragment or trailing slash.
    pub fn resolve(path: &str) -> Self {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();
        let normalized = path.trim_end_matches('/');

        match normalized {
            "" => Self::CreateEmployee,
            "/employee-list" => Self::EmployeeList,
            _ => Self::NotFound,
        }
    }

    /// Canonical path, `None` for the catch-all view.
    pub fn path(self) -> Option<&'static str> {
        match self {
            Self::CreateEmployee => Some("/"),
            Self::EmployeeList => Some("/employee-list"),
            Self::NotFound => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::CreateEmployee => "HRnet - Create Employee",
            Self::EmployeeList => "HRnet - Employee List",
            Self::NotFound => "404 - Page Not Found",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::CreateEmployee => "Create a new employee. Enter employee details.",
            Self::EmployeeList => "View and manage your employees",
            Self::NotFound => "Sorry, the page you are looking for does not exist.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::View;

    #[test]
    fn resolves_known_and_unknown_paths() {
        assert_eq!(View::resolve("/"), View::CreateEmployee);
        assert_eq!(View::resolve(""), View::CreateEmployee);
        assert_eq!(View::resolve("/employee-list"), View::EmployeeList);
        assert_eq!(View::resolve("/employee-list/?page=2"), View::EmployeeList);
        assert_eq!(View::resolve("/employees"), View::NotFound);
        assert_eq!(View::resolve("employee-list"), View::NotFound);
    }

    #[test]
    fn known_views_roundtrip_through_path() {
        for view in [View::CreateEmployee, View::EmployeeList] {
            let path = view.path().unwrap();
            assert_eq!(View::resolve(path), view);
        }
        assert_eq!(View::NotFound.path(), None);
    }
}
