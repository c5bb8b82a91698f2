//! Table controls for the employee list.
//!
//! # Invariants
//! - Clicking the active sort column flips its direction; any other column
//!   starts ascending.
//! - Page navigation never moves below page 1 or past the last page.

use crate::model::employee::EmployeeField;

/// Page sizes offered by the "Show N entries" selector.
pub const ENTRIES_PER_PAGE_OPTIONS: [usize; 4] = [10, 25, 50, 100];
pub const DEFAULT_ENTRIES_PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Header arrow for the active column.
    pub fn indicator(self) -> &'static str {
        match self {
            Self::Asc => "▲",
            Self::Desc => "▼",
        }
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortConfig {
    pub field: EmployeeField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(field: EmployeeField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn descending(field: EmployeeField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }
}

/// Transient list view state fed into [`crate::list::pipeline::derive_page`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListControls {
    pub search_term: String,
    pub sort: Option<SortConfig>,
    pub entries_per_page: usize,
    /// 1-based; not clamped to the page count.
    pub current_page: usize,
}

impl Default for ListControls {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            sort: None,
            entries_per_page: DEFAULT_ENTRIES_PER_PAGE,
            current_page: 1,
        }
    }
}

impl ListControls {
    /// Header click on `field`.
    pub fn toggle_sort(&mut self, field: EmployeeField) {
        self.sort = Some(match self.sort {
            Some(active) if active.field == field && active.direction == SortDirection::Asc => {
                SortConfig::descending(field)
            }
            _ => SortConfig::ascending(field),
        });
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Sets the page size; zero is coerced to one.
    pub fn set_entries_per_page(&mut self, entries: usize) {
        self.entries_per_page = entries.max(1);
    }

    pub fn previous_page(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.current_page = (self.current_page + 1).min(total_pages).max(1);
    }

    /// Pulls `current_page` back into `1..=total_pages` (or 1 when empty).
    pub fn clamp_page(&mut self, total_pages: usize) {
        self.current_page = self.current_page.min(total_pages).max(1);
    }

    /// Arrow to render next to `field`'s header, if it is the sort column.
    pub fn sort_indicator(&self, field: EmployeeField) -> Option<&'static str> {
        self.sort
            .filter(|sort| sort.field == field)
            .map(|sort| sort.direction.indicator())
    }
}
