//! Per-employee parameter drafts and the reload-merge state machine.
//!
//! Each draft is either clean (mirrors last known server truth) or dirty
//! (has unsaved local edits). A reload merge may only replace clean drafts;
//! dirty ones survive untouched until an explicit successful save.

use std::collections::HashMap;

use rosterline_domain::{Employee, EmployeeDraft, EmployeeId, Result, RosterError};
use tracing::debug;

/// The draft map, owned exclusively by its session service.
#[derive(Debug, Clone, Default)]
pub struct DraftBook {
    drafts: HashMap<EmployeeId, EmployeeDraft>,
}

impl DraftBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: EmployeeId) -> Option<&EmployeeDraft> {
        self.drafts.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmployeeId, &EmployeeDraft)> {
        self.drafts.iter().map(|(id, draft)| (*id, draft))
    }

    pub fn len(&self) -> usize {
        self.drafts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drafts.is_empty()
    }

    /// Apply a field edit to the employee's draft and mark it dirty.
    ///
    /// The night-only invariant is re-imposed after the edit: night-only
    /// drafts are always night-eligible.
    pub fn edit(
        &mut self,
        id: EmployeeId,
        apply: impl FnOnce(&mut EmployeeDraft),
    ) -> Result<&EmployeeDraft> {
        let draft = self
            .drafts
            .get_mut(&id)
            .ok_or_else(|| RosterError::NotFound(format!("no draft for employee {id}")))?;
        apply(draft);
        if draft.night_only {
            draft.can_work_night = true;
        }
        draft.dirty = true;
        Ok(draft)
    }

    /// Transition the draft to clean after a successful remote save.
    ///
    /// Called optimistically, before the confirmation reload completes, so an
    /// in-flight reload cannot re-mark the draft dirty from a stale compare.
    pub fn mark_saved(&mut self, id: EmployeeId) {
        if let Some(draft) = self.drafts.get_mut(&id) {
            draft.dirty = false;
        }
    }

    /// Merge a fresh server roster into the draft map.
    ///
    /// Rebuilds the map from the authoritative employee list: dirty drafts
    /// are carried forward verbatim (the server version is discarded for
    /// those employees only), clean or absent ones are recreated from server
    /// values, and employees gone from the roster drop out.
    pub fn merge(&mut self, employees: &[Employee]) {
        let mut next = HashMap::with_capacity(employees.len());
        let mut kept_dirty = 0usize;
        for employee in employees {
            match self.drafts.remove(&employee.id) {
                Some(draft) if draft.dirty => {
                    kept_dirty += 1;
                    next.insert(employee.id, draft);
                }
                _ => {
                    next.insert(employee.id, EmployeeDraft::from_server(employee));
                }
            }
        }
        debug!(drafts = next.len(), kept_dirty, "merged server roster into draft book");
        self.drafts = next;
    }
}
