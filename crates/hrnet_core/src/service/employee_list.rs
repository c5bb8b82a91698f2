//! Employee list view service.
//!
//! # Responsibility
//! - Own the list controls and the display locale for one list view.
//! - Re-derive the visible page only when its inputs change.
//!
//! # Invariants
//! - The cached page is keyed on the controls and the ordered record ids;
//!   records are immutable once created, so their ids identify the contents.

use crate::list::controls::ListControls;
use crate::list::pipeline::{derive_page, EmployeePage};
use crate::locale::DateLocale;
use crate::model::employee::{EmployeeField, EmployeeId, EmployeeRecord};

#[derive(Debug, Clone)]
struct CachedPage {
    controls: ListControls,
    record_ids: Vec<EmployeeId>,
    page: EmployeePage,
}

/// List view state with a memoized derived page.
#[derive(Debug, Clone)]
pub struct EmployeeListView {
    controls: ListControls,
    locale: DateLocale,
    cache: Option<CachedPage>,
}

impl EmployeeListView {
    pub fn new(locale: DateLocale) -> Self {
        Self::with_controls(ListControls::default(), locale)
    }

    pub fn with_controls(controls: ListControls, locale: DateLocale) -> Self {
        Self {
            controls,
            locale,
            cache: None,
        }
    }

    pub fn controls(&self) -> &ListControls {
        &self.controls
    }

    pub fn locale(&self) -> DateLocale {
        self.locale
    }

    /// Returns the page for the current controls, deriving it if stale.
    pub fn page(&mut self, employees: &[EmployeeRecord]) -> &EmployeePage {
        let cached = match self.cache.take() {
            Some(cached)
                if cached.controls == self.controls
                    && same_records(&cached.record_ids, employees) =>
            {
                cached
            }
            _ => CachedPage {
                controls: self.controls.clone(),
                record_ids: employees.iter().map(|record| record.id).collect(),
                page: derive_page(employees, &self.controls, self.locale),
            },
        };

        &self.cache.insert(cached).page
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.controls.set_search_term(term);
    }

    pub fn toggle_sort(&mut self, field: EmployeeField) {
        self.controls.toggle_sort(field);
    }

    pub fn set_entries_per_page(&mut self, entries: usize) {
        self.controls.set_entries_per_page(entries);
    }

    pub fn previous_page(&mut self) {
        self.controls.previous_page();
    }

    /// Advances one page, bounded by the page count of the current result.
    pub fn next_page(&mut self, employees: &[EmployeeRecord]) {
        let total_pages = self.page(employees).total_pages;
        self.controls.next_page(total_pages);
    }
}

fn same_records(ids: &[EmployeeId], employees: &[EmployeeRecord]) -> bool {
    ids.len() == employees.len()
        && ids
            .iter()
            .zip(employees)
            .all(|(id, record)| *id == record.id)
}

#[cfg(test)]
mod tests {
    use super::EmployeeListView;
    use crate::locale::DateLocale;
    use crate::model::employee::{EmployeeDraft, EmployeeField, EmployeeRecord};

    fn records(count: usize) -> Vec<EmployeeRecord> {
        (0..count)
            .map(|index| {
                EmployeeRecord::new(EmployeeDraft {
                    first_name: format!("Name{index:02}"),
                    ..EmployeeDraft::default()
                })
            })
            .collect()
    }

    #[test]
    fn page_refreshes_when_collection_grows() {
        let mut employees = records(3);
        let mut view = EmployeeListView::new(DateLocale::Iso);
        assert_eq!(view.page(&employees).total, 3);

        employees.extend(records(1));
        assert_eq!(view.page(&employees).total, 4);
    }

    #[test]
    fn next_page_stops_at_last_page() {
        let employees = records(12);
        let mut view = EmployeeListView::new(DateLocale::Iso);

        view.next_page(&employees);
        view.next_page(&employees);
        assert_eq!(view.controls().current_page, 2);
        assert_eq!(view.page(&employees).rows.len(), 2);
        assert!(!view.page(&employees).has_next());

        view.previous_page();
        view.previous_page();
        assert_eq!(view.controls().current_page, 1);
    }

    #[test]
    fn control_changes_invalidate_cached_page() {
        let employees = records(3);
        let mut view = EmployeeListView::new(DateLocale::Iso);
        assert_eq!(view.page(&employees).rows[0].first_name, "Name00");

        view.toggle_sort(EmployeeField::FirstName);
        view.toggle_sort(EmployeeField::FirstName);
        assert_eq!(view.page(&employees).rows[0].first_name, "Name02");

        view.set_search_term("name01");
        assert_eq!(view.page(&employees).total, 1);
    }

    #[test]
    fn page_refreshes_for_other_collection_of_same_length() {
        let mut view = EmployeeListView::new(DateLocale::Iso);
        let first = records(2);
        let second = vec![
            EmployeeRecord::new(EmployeeDraft {
                first_name: "Cy".to_string(),
                ..EmployeeDraft::default()
            }),
            EmployeeRecord::new(EmployeeDraft {
                first_name: "Dee".to_string(),
                ..EmployeeDraft::default()
            }),
        ];

        assert_eq!(view.page(&first).rows[0].first_name, "Name00");
        let names = view
            .page(&second)
            .rows
            .iter()
            .map(|row| row.first_name.clone())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Cy", "Dee"]);
    }
}
