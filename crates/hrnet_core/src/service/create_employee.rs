//! Create-employee form flow.
//!
//! # Responsibility
//! - Hold the in-progress draft and apply field edits.
//! - Validate on submit, append through the store, then reset the draft.
//!
//! # Invariants
//! - A submit that fails validation appends nothing and keeps the draft.
//! - `state` is stored as the canonical upper-case abbreviation.

use crate::model::employee::{
    Department, EmployeeDraft, EmployeeField, EmployeeId, EmployeeValidationError,
};
use crate::model::us_state::find_state;
use crate::repo::kv_repo::KvRepository;
use crate::store::employee_store::EmployeeStore;
use chrono::NaiveDate;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Form flow error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Edit targeted a field of another input kind.
    WrongFieldKind {
        field: EmployeeField,
        expected: &'static str,
    },
    Validation(EmployeeValidationError),
}

impl Display for FormError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WrongFieldKind { field, expected } => {
                write!(f, "field `{field}` is not a {expected} input")
            }
            Self::Validation(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FormError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::WrongFieldKind { .. } => None,
        }
    }
}

impl From<EmployeeValidationError> for FormError {
    fn from(value: EmployeeValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Create view state: the draft being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CreateEmployeeForm {
    draft: EmployeeDraft,
}

impl CreateEmployeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &EmployeeDraft {
        &self.draft
    }

    /// Sets one of the free-text inputs.
    pub fn set_text(&mut self, field: EmployeeField, value: impl Into<String>) -> Result<(), FormError> {
        let slot = match field {
            EmployeeField::FirstName => &mut self.draft.first_name,
            EmployeeField::LastName => &mut self.draft.last_name,
            EmployeeField::Street => &mut self.draft.street,
            EmployeeField::City => &mut self.draft.city,
            EmployeeField::ZipCode => &mut self.draft.zip_code,
            _ => {
                return Err(FormError::WrongFieldKind {
                    field,
                    expected: "text",
                })
            }
        };
        *slot = value.into();
        Ok(())
    }

    /// Sets or clears one of the date pickers.
    pub fn set_date(&mut self, field: EmployeeField, value: Option<NaiveDate>) -> Result<(), FormError> {
        match field {
            EmployeeField::DateOfBirth => self.draft.date_of_birth = value,
            EmployeeField::StartDate => self.draft.start_date = value,
            _ => {
                return Err(FormError::WrongFieldKind {
                    field,
                    expected: "date",
                })
            }
        }
        Ok(())
    }

    /// Picks a state from the dropdown by abbreviation.
    pub fn select_state(&mut self, abbreviation: &str) -> Result<(), FormError> {
        let state = find_state(abbreviation).ok_or_else(|| {
            EmployeeValidationError::UnknownState(abbreviation.trim().to_string())
        })?;
        self.draft.state = state.abbreviation.to_string();
        Ok(())
    }

    pub fn select_department(&mut self, department: Department) {
        self.draft.department = department;
    }

    /// Clears every input back to the initial draft.
    pub fn reset(&mut self) {
        self.draft = EmployeeDraft::default();
    }

    /// Validates and appends the draft; resets the form on success.
    ///
    /// Returns the new record id, which drives the confirmation dialog.
    ///
    /// # Errors
    /// - `Validation` when a required field is empty or the state is unknown.
    pub fn submit<S: KvRepository>(&mut self, store: &mut EmployeeStore<S>) -> Result<EmployeeId, FormError> {
        if let Err(err) = self.draft.validate() {
            warn!("event=employee_submit module=service status=rejected reason={err}");
            return Err(err.into());
        }

        let draft = std::mem::take(&mut self.draft);
        let id = store.add_employee(draft);
        info!("event=employee_submit module=service status=ok id={id}");
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{CreateEmployeeForm, FormError};
    use crate::model::employee::{Department, EmployeeField, EmployeeValidationError};
    use chrono::NaiveDate;

    #[test]
    fn text_and_date_setters_reject_other_kinds() {
        let mut form = CreateEmployeeForm::new();

        form.set_text(EmployeeField::City, "Austin").unwrap();
        assert_eq!(form.draft().city, "Austin");

        let err = form.set_text(EmployeeField::StartDate, "x").unwrap_err();
        assert_eq!(
            err,
            FormError::WrongFieldKind {
                field: EmployeeField::StartDate,
                expected: "text",
            }
        );

        let err = form
            .set_date(EmployeeField::City, NaiveDate::from_ymd_opt(2020, 1, 1))
            .unwrap_err();
        assert!(matches!(err, FormError::WrongFieldKind { expected: "date", .. }));
    }

    #[test]
    fn select_state_stores_canonical_code() {
        let mut form = CreateEmployeeForm::new();
        form.select_state("tx").unwrap();
        assert_eq!(form.draft().state, "TX");

        let err = form.select_state("QQ").unwrap_err();
        assert_eq!(
            err,
            FormError::Validation(EmployeeValidationError::UnknownState("QQ".to_string()))
        );
        assert_eq!(form.draft().state, "TX");
    }

    #[test]
    fn reset_restores_default_department() {
        let mut form = CreateEmployeeForm::new();
        form.select_department(Department::Legal);
        form.reset();
        assert_eq!(form.draft().department, Department::Sales);
    }
}
