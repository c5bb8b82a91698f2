//! Employee store.
//!
//! # Responsibility
//! - Append new records with generated ids.
//! - Serialize the whole collection into one storage entry on every append.
//!
//! # Invariants
//! - The persisted value is `{"state":{"employees":[...]},"version":0}`.
//! - Missing, unreadable, corrupt or future-version entries load as empty.

use crate::model::employee::{EmployeeDraft, EmployeeId, EmployeeRecord};
use crate::repo::kv_repo::KvRepository;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Storage key holding the serialized collection.
pub const STORAGE_KEY: &str = "employee-storage";
/// Envelope version written by this build.
pub const STORAGE_VERSION: u32 = 0;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope<S> {
    state: S,
    version: u32,
}

#[derive(Debug, Deserialize)]
struct OwnedState {
    employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Serialize)]
struct BorrowedState<'a> {
    employees: &'a [EmployeeRecord],
}

/// How the collection was obtained at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    /// Entry found and decoded; carries the restored record count.
    Restored(usize),
    /// No entry under [`STORAGE_KEY`].
    Missing,
    /// Entry present but undecodable, or written by an unknown version.
    Corrupt,
    /// Storage read itself failed.
    Unavailable,
}

/// Exclusive owner of the employee collection.
pub struct EmployeeStore<S: KvRepository> {
    storage: S,
    employees: Vec<EmployeeRecord>,
    load_status: LoadStatus,
}

impl<S: KvRepository> EmployeeStore<S> {
    /// Builds a store and rehydrates the collection from `storage`.
    ///
    /// Never fails: every load problem degrades to an empty collection.
    pub fn load(storage: S) -> Self {
        let (employees, load_status) = match storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => match decode(&raw) {
                Some(employees) => {
                    let count = employees.len();
                    (employees, LoadStatus::Restored(count))
                }
                None => (Vec::new(), LoadStatus::Corrupt),
            },
            Ok(None) => (Vec::new(), LoadStatus::Missing),
            Err(err) => {
                warn!(
                    "event=store_load module=store status=error error_code=storage_read_failed error={err}"
                );
                (Vec::new(), LoadStatus::Unavailable)
            }
        };

        info!(
            "event=store_load module=store status=ok outcome={:?} count={}",
            load_status,
            employees.len()
        );

        Self {
            storage,
            employees,
            load_status,
        }
    }

    /// Appends a new record built from `draft` and persists the collection.
    ///
    /// Returns the generated id. Persistence is best-effort: a failed write
    /// is logged and the record stays in memory.
    pub fn add_employee(&mut self, draft: EmployeeDraft) -> EmployeeId {
        let record = EmployeeRecord::new(draft);
        let id = record.id;
        self.employees.push(record);
        debug!(
            "event=employee_add module=store status=ok id={id} count={}",
            self.employees.len()
        );
        self.persist();
        id
    }

    /// Returns the collection in insertion order.
    pub fn list_employees(&self) -> &[EmployeeRecord] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// Outcome of the construction-time rehydration.
    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    fn persist(&self) {
        let started_at = Instant::now();
        let envelope = Envelope {
            state: BorrowedState {
                employees: &self.employees,
            },
            version: STORAGE_VERSION,
        };

        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(
                    "event=store_persist module=store status=error error_code=encode_failed error={err}"
                );
                return;
            }
        };

        match self.storage.set_item(STORAGE_KEY, &raw) {
            Ok(()) => debug!(
                "event=store_persist module=store status=ok count={} bytes={} duration_ms={}",
                self.employees.len(),
                raw.len(),
                started_at.elapsed().as_millis()
            ),
            Err(err) => warn!(
                "event=store_persist module=store status=error error_code=storage_write_failed duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            ),
        }
    }
}

fn decode(raw: &str) -> Option<Vec<EmployeeRecord>> {
    let envelope = match serde_json::from_str::<Envelope<OwnedState>>(raw) {
        Ok(envelope) => envelope,
        Err(err) => {
            warn!(
                "event=store_load module=store status=error error_code=decode_failed bytes={} error={err}",
                raw.len()
            );
            return None;
        }
    };

    if envelope.version != STORAGE_VERSION {
        warn!(
            "event=store_load module=store status=error error_code=unsupported_version version={} supported={STORAGE_VERSION}",
            envelope.version
        );
        return None;
    }

    Some(envelope.state.employees)
}
