//! The in-memory employee registry.
//!
//! This module owns the two pieces of process state: the append-only list of
//! employees and the set of IDs issued so far. The registry is an explicit
//! value threaded through the console session rather than a process-wide
//! global, so the core stays testable without console I/O.

use std::collections::HashSet;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Employee, EmployeeId};

/// Holds every employee added during a run and every ID issued so far.
///
/// The list is append-only for the duration of a run: entries are never
/// mutated or removed, and an issued ID is never reused, regardless of
/// employee type.
#[derive(Debug, Default)]
pub struct EmployeeRegistry {
    employees: Vec<Employee>,
    issued_ids: HashSet<EmployeeId>,
}

impl EmployeeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `candidate` as issued and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DuplicateId`] if the ID was issued earlier in
    /// this session.
    pub fn issue_id(&mut self, candidate: EmployeeId) -> TrackerResult<EmployeeId> {
        if self.issued_ids.contains(&candidate) {
            return Err(TrackerError::DuplicateId {
                id: candidate.as_str().to_string(),
            });
        }
        self.issued_ids.insert(candidate.clone());
        Ok(candidate)
    }

    /// Returns true if `id` has already been issued.
    pub fn is_id_issued(&self, id: &EmployeeId) -> bool {
        self.issued_ids.contains(id)
    }

    /// Appends an employee whose ID was issued by [`EmployeeRegistry::issue_id`].
    pub fn push(&mut self, employee: Employee) {
        debug_assert!(
            self.issued_ids.contains(&employee.id),
            "employee ID must be issued before push"
        );
        self.employees.push(employee);
    }

    /// Issues the employee's ID and appends the record in one step.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError::DuplicateId`] if the employee's ID was issued
    /// earlier in this session; the employee is not added in that case.
    pub fn register(&mut self, employee: Employee) -> TrackerResult<()> {
        self.issue_id(employee.id.clone())?;
        self.push(employee);
        Ok(())
    }

    /// The registered employees, in registration order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Number of registered employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if no employees have been registered.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
