//! In-memory assignment matrix keyed by (employee, day).
//!
//! The store is an optimistic cache of remote truth: direct edits land here
//! only after the authoritative write succeeded, and every reload replaces
//! the whole snapshot.

use std::collections::HashMap;

use chrono::NaiveDate;
use rosterline_domain::{Assignment, AssignmentKey, EmployeeId, ShiftType, ShiftTypeId};
use tracing::debug;

/// Shift-type reference table indexed by id.
#[derive(Debug, Clone, Default)]
pub struct ShiftTypeIndex {
    by_id: HashMap<ShiftTypeId, ShiftType>,
}

impl ShiftTypeIndex {
    pub fn from_list(shift_types: Vec<ShiftType>) -> Self {
        Self { by_id: shift_types.into_iter().map(|s| (s.id, s)).collect() }
    }

    pub fn get(&self, id: ShiftTypeId) -> Option<&ShiftType> {
        self.by_id.get(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShiftType> {
        self.by_id.values()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Sparse assignment matrix: at most one entry per (employee, day).
#[derive(Debug, Clone, Default)]
pub struct AssignmentStore {
    cells: HashMap<AssignmentKey, Assignment>,
}

impl AssignmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current entries and load the server snapshot.
    ///
    /// Afterwards exactly the snapshot's (employee, day) pairs are present;
    /// duplicate keys in the snapshot resolve to the last occurrence.
    pub fn replace_all(&mut self, snapshot: Vec<Assignment>) {
        self.cells = snapshot.into_iter().map(|a| (a.key(), a)).collect();
        debug!(cells = self.cells.len(), "assignment store replaced from snapshot");
    }

    /// Apply one authoritative cell write to the local cache.
    ///
    /// `None` removes the key (idempotent). An unknown shift-type id leaves
    /// the store unchanged; the authoritative write already succeeded
    /// remotely and the next reload corrects the client view.
    pub fn upsert(
        &mut self,
        employee_id: EmployeeId,
        day: NaiveDate,
        shift_type_id: Option<ShiftTypeId>,
        shift_types: &ShiftTypeIndex,
    ) {
        let key = (employee_id, day);
        let Some(shift_type_id) = shift_type_id else {
            self.cells.remove(&key);
            return;
        };
        let Some(shift) = shift_types.get(shift_type_id) else {
            debug!(employee_id, %day, shift_type_id, "unknown shift type, leaving cell as-is");
            return;
        };
        self.cells.insert(
            key,
            Assignment {
                employee_id,
                day,
                shift_type_id,
                shift_code: shift.code.clone(),
                shift_name: shift.name.clone(),
                note: None,
            },
        );
    }

    /// Current entry for the cell, if any; O(1).
    pub fn get(&self, employee_id: EmployeeId, day: NaiveDate) -> Option<&Assignment> {
        self.cells.get(&(employee_id, day))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Assignment> {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn shift(id: ShiftTypeId, code: &str, name: &str) -> ShiftType {
        ShiftType {
            id,
            code: code.into(),
            name: name.into(),
            start_time: None,
            end_time: None,
            is_work: true,
        }
    }

    fn index() -> ShiftTypeIndex {
        ShiftTypeIndex::from_list(vec![shift(1, "M", "Morning"), shift(2, "N", "Night")])
    }

    fn cell(employee_id: EmployeeId, day: &str, shift_type_id: ShiftTypeId) -> Assignment {
        Assignment {
            employee_id,
            day: date(day),
            shift_type_id,
            shift_code: "M".into(),
            shift_name: "Morning".into(),
            note: None,
        }
    }

    #[test]
    fn upsert_then_get_returns_the_written_value() {
        let mut store = AssignmentStore::new();
        store.upsert(7, date("2026-02-03"), Some(2), &index());
        let entry = store.get(7, date("2026-02-03")).unwrap();
        assert_eq!(entry.shift_type_id, 2);
        assert_eq!(entry.shift_code, "N");
        assert_eq!(entry.shift_name, "Night");
    }

    #[test]
    fn upsert_overwrites_the_existing_cell() {
        let mut store = AssignmentStore::new();
        store.upsert(7, date("2026-02-03"), Some(1), &index());
        store.upsert(7, date("2026-02-03"), Some(2), &index());
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(7, date("2026-02-03")).unwrap().shift_code, "N");
    }

    #[test]
    fn clearing_an_absent_cell_is_an_idempotent_no_op() {
        let mut store = AssignmentStore::new();
        store.upsert(7, date("2026-02-03"), None, &index());
        assert!(store.is_empty());
        store.upsert(7, date("2026-02-03"), Some(1), &index());
        store.upsert(7, date("2026-02-03"), None, &index());
        store.upsert(7, date("2026-02-03"), None, &index());
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_shift_type_leaves_the_store_unchanged() {
        let mut store = AssignmentStore::new();
        store.upsert(7, date("2026-02-03"), Some(1), &index());
        store.upsert(7, date("2026-02-03"), Some(99), &index());
        assert_eq!(store.get(7, date("2026-02-03")).unwrap().shift_type_id, 1);
    }

    #[test]
    fn replace_all_drops_absent_pairs_and_keeps_exactly_the_snapshot() {
        let mut store = AssignmentStore::new();
        store.upsert(1, date("2026-02-01"), Some(1), &index());
        store.replace_all(vec![cell(2, "2026-02-02", 1), cell(3, "2026-02-03", 2)]);
        assert_eq!(store.len(), 2);
        assert!(store.get(1, date("2026-02-01")).is_none());
        assert!(store.get(2, date("2026-02-02")).is_some());
        assert!(store.get(3, date("2026-02-03")).is_some());
    }
}
