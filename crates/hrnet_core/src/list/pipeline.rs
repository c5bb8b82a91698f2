//! Normalize → filter → sort → paginate derivation for the employee table.
//!
//! # Responsibility
//! - Turn stored records into display rows (dates formatted per locale).
//! - Apply the search term, the sort column and the page window.
//!
//! # Invariants
//! - Every stage is pure; the source slice is only read.
//! - Search is a case-insensitive substring match over every attribute,
//!   including the id.
//! - Sort compares display strings lexicographically and is stable.
//! - `total_pages` is `ceil(total / entries_per_page)`, zero when empty.

use crate::list::controls::{ListControls, SortConfig, SortDirection};
use crate::locale::DateLocale;
use crate::model::employee::{EmployeeField, EmployeeId, EmployeeRecord};

/// One table row: every attribute as its display text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
    pub start_date: String,
    pub department: String,
    pub date_of_birth: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl EmployeeRow {
    /// Builds a display row, formatting both dates with `locale`.
    pub fn from_record(record: &EmployeeRecord, locale: DateLocale) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            start_date: locale.format_opt(record.start_date),
            department: record.department.label().to_string(),
            date_of_birth: locale.format_opt(record.date_of_birth),
            street: record.street.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            zip_code: record.zip_code.clone(),
        }
    }

    /// Display value of one column.
    pub fn value(&self, field: EmployeeField) -> &str {
        match field {
            EmployeeField::FirstName => &self.first_name,
            EmployeeField::LastName => &self.last_name,
            EmployeeField::StartDate => &self.start_date,
            EmployeeField::Department => &self.department,
            EmployeeField::DateOfBirth => &self.date_of_birth,
            EmployeeField::Street => &self.street,
            EmployeeField::City => &self.city,
            EmployeeField::State => &self.state,
            EmployeeField::ZipCode => &self.zip_code,
        }
    }

    fn matches(&self, needle_lower: &str) -> bool {
        EmployeeField::ALL
            .into_iter()
            .any(|field| self.value(field).to_lowercase().contains(needle_lower))
            || self.id.to_string().contains(needle_lower)
    }
}

/// One rendered page plus the counts the pagination controls need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeePage {
    pub rows: Vec<EmployeeRow>,
    /// Row count after filtering, before paging.
    pub total: usize,
    pub total_pages: usize,
    pub current_page: usize,
    pub entries_per_page: usize,
}

impl EmployeePage {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based index of the first row shown, or 0 when the page is empty.
    pub fn first_entry(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        page_offset(self.current_page, self.entries_per_page) + 1
    }

    /// 1-based index of the last row shown, or 0 when the page is empty.
    pub fn last_entry(&self) -> usize {
        if self.rows.is_empty() {
            return 0;
        }
        page_offset(self.current_page, self.entries_per_page) + self.rows.len()
    }

    /// `Showing X to Y of Z entries`.
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} entries",
            self.first_entry(),
            self.last_entry(),
            self.total
        )
    }
}

/// Runs the full derivation for the current controls.
pub fn derive_page(
    employees: &[EmployeeRecord],
    controls: &ListControls,
    locale: DateLocale,
) -> EmployeePage {
    let rows = normalize(employees, locale);
    let mut rows = filter_rows(rows, &controls.search_term);
    sort_rows(&mut rows, controls.sort);
    paginate(rows, controls.entries_per_page, controls.current_page)
}

/// Working copy of the collection as display rows.
pub fn normalize(employees: &[EmployeeRecord], locale: DateLocale) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|record| EmployeeRow::from_record(record, locale))
        .collect()
}

/// Keeps rows where any attribute contains `term`, ignoring case.
///
/// An empty term returns `rows` unchanged.
pub fn filter_rows(rows: Vec<EmployeeRow>, term: &str) -> Vec<EmployeeRow> {
    if term.is_empty() {
        return rows;
    }

    let needle = term.to_lowercase();
    rows.into_iter().filter(|row| row.matches(&needle)).collect()
}

/// Stable sort on one column's display value. `None` keeps the order.
pub fn sort_rows(rows: &mut [EmployeeRow], sort: Option<SortConfig>) {
    let Some(sort) = sort else {
        return;
    };

    rows.sort_by(|a, b| {
        let ordering = a.value(sort.field).cmp(b.value(sort.field));
        match sort.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// `ceil(total / entries_per_page)`; zero entries per page counts as one.
pub fn total_pages(total: usize, entries_per_page: usize) -> usize {
    total.div_ceil(entries_per_page.max(1))
}

/// Cuts the 1-based `current_page` window out of `rows`.
///
/// Pages outside `1..=total_pages` yield an empty slice.
pub fn paginate(rows: Vec<EmployeeRow>, entries_per_page: usize, current_page: usize) -> EmployeePage {
    let entries_per_page = entries_per_page.max(1);
    let total = rows.len();
    let start = if current_page == 0 {
        total
    } else {
        page_offset(current_page, entries_per_page).min(total)
    };
    let end = current_page
        .saturating_mul(entries_per_page)
        .min(total)
        .max(start);

    let rows = rows.into_iter().skip(start).take(end - start).collect();

    EmployeePage {
        rows,
        total,
        total_pages: total_pages(total, entries_per_page),
        current_page,
        entries_per_page,
    }
}

fn page_offset(current_page: usize, entries_per_page: usize) -> usize {
    current_page.saturating_sub(1).saturating_mul(entries_per_page)
}

#[cfg(test)]
mod tests {
    use super::{filter_rows, normalize, paginate, sort_rows, total_pages, EmployeeRow};
    use crate::list::controls::SortConfig;
    use crate::locale::DateLocale;
    use crate::model::employee::{Department, EmployeeDraft, EmployeeField, EmployeeRecord};
    use chrono::NaiveDate;

    fn record(first_name: &str) -> EmployeeRecord {
        EmployeeRecord::new(EmployeeDraft {
            first_name: first_name.to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 7, 4),
            start_date: None,
            street: "5th Ave".to_string(),
            city: "Denver".to_string(),
            state: "CO".to_string(),
            zip_code: "80202".to_string(),
            department: Department::Legal,
        })
    }

    fn rows(names: &[&str]) -> Vec<EmployeeRow> {
        let records = names.iter().map(|name| record(name)).collect::<Vec<_>>();
        normalize(&records, DateLocale::Us)
    }

    fn names(rows: &[EmployeeRow]) -> Vec<&str> {
        rows.iter().map(|row| row.first_name.as_str()).collect()
    }

    #[test]
    fn normalize_formats_dates_and_keeps_other_fields() {
        let source = vec![record("Ann")];
        let rows = normalize(&source, DateLocale::Us);

        assert_eq!(rows[0].date_of_birth, "7/4/1985");
        assert_eq!(rows[0].start_date, "");
        assert_eq!(rows[0].department, "Legal");
        assert_eq!(rows[0].id, source[0].id);
        assert_eq!(source[0].date_of_birth, NaiveDate::from_ymd_opt(1985, 7, 4));
    }

    #[test]
    fn filter_matches_any_column_ignoring_case() {
        let all = rows(&["Ann", "Bob"]);
        assert_eq!(names(&filter_rows(all.clone(), "bO")), vec!["Bob"]);
        assert_eq!(filter_rows(all.clone(), "DENVER").len(), 2);
        assert_eq!(filter_rows(all.clone(), "1985").len(), 2);
        assert!(filter_rows(all.clone(), "zzz").is_empty());
        assert_eq!(filter_rows(all.clone(), ""), all);
    }

    #[test]
    fn filter_matches_id_text() {
        let all = rows(&["Ann", "Bob"]);
        let id_text = all[1].id.to_string();
        let hits = filter_rows(all, &id_text[..8]);
        assert_eq!(names(&hits), vec!["Bob"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut all = rows(&["Cy", "Al", "Cy", "Al"]);
        let ids_before = all.iter().map(|row| row.id).collect::<Vec<_>>();

        sort_rows(&mut all, Some(SortConfig::ascending(EmployeeField::FirstName)));
        let ids_after = all.iter().map(|row| row.id).collect::<Vec<_>>();
        assert_eq!(
            ids_after,
            vec![ids_before[1], ids_before[3], ids_before[0], ids_before[2]]
        );

        sort_rows(&mut all, Some(SortConfig::ascending(EmployeeField::LastName)));
        assert_eq!(all.iter().map(|row| row.id).collect::<Vec<_>>(), ids_after);
    }

    #[test]
    fn sort_none_keeps_order() {
        let mut all = rows(&["Zed", "Amy"]);
        sort_rows(&mut all, None);
        assert_eq!(names(&all), vec!["Zed", "Amy"]);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn paginate_handles_out_of_range_pages() {
        let all = rows(&["A", "B", "C"]);

        let past_end = paginate(all.clone(), 2, 5);
        assert!(past_end.rows.is_empty());
        assert_eq!(past_end.total_pages, 2);
        assert_eq!(past_end.first_entry(), 0);

        let page_zero = paginate(all.clone(), 2, 0);
        assert!(page_zero.rows.is_empty());

        let last = paginate(all, 2, 2);
        assert_eq!(names(&last.rows), vec!["C"]);
        assert_eq!(last.summary(), "Showing 3 to 3 of 3 entries");
        assert!(last.has_previous());
        assert!(!last.has_next());
    }
}
