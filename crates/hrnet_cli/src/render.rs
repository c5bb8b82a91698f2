//! Plain-text rendering of the views.

use hrnet_core::{
    DateLocale, Department, EmployeeDraft, EmployeeField, EmployeeId, EmployeePage, ListControls,
    View, ENTRIES_PER_PAGE_OPTIONS, US_STATES,
};
use std::fmt::Write;

/// Renders the list view: controls line, table, summary and navigation.
pub fn employee_table(page: &EmployeePage, controls: &ListControls) -> String {
    let headers = EmployeeField::ALL
        .iter()
        .map(|field| match controls.sort_indicator(*field) {
            Some(arrow) => format!("{} {arrow}", field.label()),
            None => field.label().to_string(),
        })
        .collect::<Vec<_>>();

    let cells = page
        .rows
        .iter()
        .map(|row| {
            EmployeeField::ALL
                .iter()
                .map(|field| row.value(*field).to_string())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let widths = headers
        .iter()
        .enumerate()
        .map(|(column, header)| {
            cells
                .iter()
                .map(|row| row[column].chars().count())
                .chain(std::iter::once(header.chars().count()))
                .max()
                .unwrap_or_default()
        })
        .collect::<Vec<_>>();

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}\n\nShow {} entries (options: {})    Search: {}",
        View::EmployeeList.title(),
        controls.entries_per_page,
        ENTRIES_PER_PAGE_OPTIONS
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("/"),
        controls.search_term
    );
    push_line(&mut out, &headers, &widths);
    let rule = widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>();
    push_line(&mut out, &rule, &widths);
    if cells.is_empty() {
        out.push_str("No data available in table\n");
    }
    for row in &cells {
        push_line(&mut out, row, &widths);
    }

    let _ = writeln!(out, "\n{}", page.summary());
    let _ = writeln!(
        out,
        "{} [{}] {}",
        if page.has_previous() { "< Previous" } else { "  (Previous)" },
        page.current_page,
        if page.has_next() { "Next >" } else { "(Next)" }
    );
    out
}

/// Renders the create view: the field list and the dropdown options.
pub fn create_form() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}\n{}\n", View::CreateEmployee.title(), View::CreateEmployee.description());
    for field in EmployeeField::ALL {
        let kind = if field.is_date() { "date, YYYY-MM-DD" } else { "required" };
        let _ = writeln!(out, "  --{:<16} {} ({kind})", kebab(field.key()), field.label());
    }
    let _ = writeln!(
        out,
        "\nDepartments: {}",
        Department::ALL
            .iter()
            .map(|d| d.label())
            .collect::<Vec<_>>()
            .join(", ")
    );
    let _ = writeln!(out, "States: {} options (see `hrnet states`)", US_STATES.len());
    out
}

/// Renders the "Employee Created!" confirmation with the submitted details.
pub fn confirmation(id: EmployeeId, draft: &EmployeeDraft, locale: DateLocale) -> String {
    format!(
        "Employee Created!\n\nEmployee Details\n  Name: {} {}\n  Department: {}\n  Start Date: {}\n  id: {id}\n",
        draft.first_name,
        draft.last_name,
        draft.department,
        locale.format_opt(draft.start_date)
    )
}

pub fn not_found(path: &str) -> String {
    format!(
        "{}\n{}\nRequested: {path}\nReturn to Home Page: /\n",
        View::NotFound.title(),
        View::NotFound.description()
    )
}

pub fn states() -> String {
    US_STATES
        .iter()
        .map(|state| format!("{}  {}\n", state.abbreviation, state.name))
        .collect()
}

pub fn departments() -> String {
    Department::ALL
        .iter()
        .map(|department| format!("{department}\n"))
        .collect()
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    out.push_str(line.trim_end());
    out.push('\n');
}

fn kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}
