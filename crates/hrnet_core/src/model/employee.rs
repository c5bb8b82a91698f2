//! Employee record model.
//!
//! # Responsibility
//! - Define the persisted `EmployeeRecord` and the id-less `EmployeeDraft`.
//! - Define the enumerated `Department` set and the `EmployeeField` columns.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - Date fields hold raw calendar dates; display formatting happens only in
//!   the list pipeline.
//! - Serialized field names are camelCase to keep the persisted layout stable.

use crate::model::us_state::find_state;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier for a stored employee record.
pub type EmployeeId = Uuid;

/// Fixed set of departments an employee can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Department {
    #[default]
    Sales,
    Marketing,
    Engineering,
    #[serde(rename = "Human Resources")]
    HumanResources,
    Legal,
}

impl Department {
    /// All departments in dropdown order.
    pub const ALL: [Department; 5] = [
        Department::Sales,
        Department::Marketing,
        Department::Engineering,
        Department::HumanResources,
        Department::Legal,
    ];

    /// Display label, identical to the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            Self::Sales => "Sales",
            Self::Marketing => "Marketing",
            Self::Engineering => "Engineering",
            Self::HumanResources => "Human Resources",
            Self::Legal => "Legal",
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Department {
    type Err = EmployeeValidationError;

    /// Parses a department label case-insensitively.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|department| department.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| EmployeeValidationError::UnknownDepartment(trimmed.to_string()))
    }
}

/// Displayable record attributes, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    FirstName,
    LastName,
    StartDate,
    Department,
    DateOfBirth,
    Street,
    City,
    State,
    ZipCode,
}

impl EmployeeField {
    /// All columns in table order.
    pub const ALL: [EmployeeField; 9] = [
        EmployeeField::FirstName,
        EmployeeField::LastName,
        EmployeeField::StartDate,
        EmployeeField::Department,
        EmployeeField::DateOfBirth,
        EmployeeField::Street,
        EmployeeField::City,
        EmployeeField::State,
        EmployeeField::ZipCode,
    ];

    /// Stable machine key, matching the serialized attribute name.
    pub fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::StartDate => "startDate",
            Self::Department => "department",
            Self::DateOfBirth => "dateOfBirth",
            Self::Street => "street",
            Self::City => "city",
            Self::State => "state",
            Self::ZipCode => "zipCode",
        }
    }

    /// Human-readable column header.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::StartDate => "Start Date",
            Self::Department => "Department",
            Self::DateOfBirth => "Date of Birth",
            Self::Street => "Street",
            Self::City => "City",
            Self::State => "State",
            Self::ZipCode => "Zip Code",
        }
    }

    /// Whether the attribute holds a calendar date.
    pub fn is_date(self) -> bool {
        matches!(self, Self::StartDate | Self::DateOfBirth)
    }
}

impl Display for EmployeeField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when a column key cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFieldError(pub String);

impl Display for ParseFieldError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown employee field `{}`", self.0)
    }
}

impl Error for ParseFieldError {}

impl FromStr for EmployeeField {
    type Err = ParseFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|field| field.key() == trimmed)
            .ok_or_else(|| ParseFieldError(trimmed.to_string()))
    }
}

/// Validation errors for employee drafts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeValidationError {
    /// Required fields left empty, in column order.
    MissingFields(Vec<EmployeeField>),
    /// `state` is not a known two-letter code.
    UnknownState(String),
    /// Department label is not part of the fixed set.
    UnknownDepartment(String),
}

impl Display for EmployeeValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingFields(fields) => {
                let keys = fields
                    .iter()
                    .map(|field| field.key())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "required fields are empty: {keys}")
            }
            Self::UnknownState(code) => write!(f, "unknown state code `{code}`"),
            Self::UnknownDepartment(label) => write!(f, "unknown department `{label}`"),
        }
    }
}

impl Error for EmployeeValidationError {}

/// Form payload for a not-yet-stored employee.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub street: String,
    pub city: String,
    /// Two-letter region code.
    pub state: String,
    pub zip_code: String,
    pub department: Department,
}

impl EmployeeDraft {
    /// Checks that every field is filled in and the state code is known.
    ///
    /// # Errors
    /// - `MissingFields` lists every empty field at once.
    /// - `UnknownState` when `state` is filled but not a known code.
    pub fn validate(&self) -> Result<(), EmployeeValidationError> {
        let missing = EmployeeField::ALL
            .into_iter()
            .filter(|field| self.is_blank(*field))
            .collect::<Vec<_>>();
        if !missing.is_empty() {
            return Err(EmployeeValidationError::MissingFields(missing));
        }

        if find_state(&self.state).is_none() {
            return Err(EmployeeValidationError::UnknownState(self.state.clone()));
        }

        Ok(())
    }

    fn is_blank(&self, field: EmployeeField) -> bool {
        match field {
            EmployeeField::FirstName => self.first_name.trim().is_empty(),
            EmployeeField::LastName => self.last_name.trim().is_empty(),
            EmployeeField::StartDate => self.start_date.is_none(),
            EmployeeField::Department => false,
            EmployeeField::DateOfBirth => self.date_of_birth.is_none(),
            EmployeeField::Street => self.street.trim().is_empty(),
            EmployeeField::City => self.city.trim().is_empty(),
            EmployeeField::State => self.state.trim().is_empty(),
            EmployeeField::ZipCode => self.zip_code.trim().is_empty(),
        }
    }
}

/// Canonical stored employee record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRecord {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub start_date: Option<NaiveDate>,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub department: Department,
    /// Assigned by the store at append time.
    pub id: EmployeeId,
}

impl EmployeeRecord {
    /// Builds a record from a draft with a freshly generated id.
    pub fn new(draft: EmployeeDraft) -> Self {
        Self {
            first_name: draft.first_name,
            last_name: draft.last_name,
            date_of_birth: draft.date_of_birth,
            start_date: draft.start_date,
            street: draft.street,
            city: draft.city,
            state: draft.state,
            zip_code: draft.zip_code,
            department: draft.department,
            id: Uuid::new_v4(),
        }
    }

    /// Returns the record's attributes without its id.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth,
            start_date: self.start_date,
            street: self.street.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip_code.clone(),
            department: self.department,
        }
    }
}
