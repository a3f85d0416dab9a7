use std::sync::RwLock;

use tracing::debug;

use crate::{
    error::{Result, poisoned},
    model::{daily_attendance::DailyAttendanceEntry, leave_record::LeaveRecord, profile::Profile},
    store::fixtures,
};

/// In-memory source of truth for every screen. Nothing here outlives the
/// process.
pub struct RecordStore {
    leave: RwLock<Vec<LeaveRecord>>,
    attendance: RwLock<Vec<DailyAttendanceEntry>>,
    profile: RwLock<Profile>,
}

impl RecordStore {
    pub fn new(
        leave: Vec<LeaveRecord>,
        attendance: Vec<DailyAttendanceEntry>,
        profile: Profile,
    ) -> Self {
        Self {
            leave: RwLock::new(leave),
            attendance: RwLock::new(attendance),
            profile: RwLock::new(profile),
        }
    }

    /// Store filled with the demo fixtures.
    pub fn seeded() -> Self {
        Self::new(
            fixtures::LEAVE_RECORDS.clone(),
            fixtures::attendance_history(),
            fixtures::profile(),
        )
    }

    pub fn leave_records(&self) -> Result<Vec<LeaveRecord>> {
        Ok(self.leave.read().map_err(poisoned)?.clone())
    }

    pub fn find_leave(&self, id: u64) -> Result<Option<LeaveRecord>> {
        let records = self.leave.read().map_err(poisoned)?;
        Ok(records.iter().find(|r| r.id == id).cloned())
    }

    /// The leave list is only ever swapped out whole.
    pub fn replace_leave_records(&self, records: Vec<LeaveRecord>) -> Result<()> {
        let mut guard = self.leave.write().map_err(poisoned)?;
        debug!(old = guard.len(), new = records.len(), "Replacing leave records");
        *guard = records;
        Ok(())
    }

    pub fn attendance_history(&self) -> Result<Vec<DailyAttendanceEntry>> {
        Ok(self.attendance.read().map_err(poisoned)?.clone())
    }

    /// Runs `f` against the current history and stores what it returns.
    /// The history is untouched when `f` fails.
    pub fn update_attendance<F>(&self, f: F) -> Result<Vec<DailyAttendanceEntry>>
    where
        F: FnOnce(&[DailyAttendanceEntry]) -> Result<Vec<DailyAttendanceEntry>>,
    {
        let mut guard = self.attendance.write().map_err(poisoned)?;
        let next = f(guard.as_slice())?;
        *guard = next.clone();
        Ok(next)
    }

    pub fn profile(&self) -> Result<Profile> {
        Ok(self.profile.read().map_err(poisoned)?.clone())
    }

    pub fn replace_profile(&self, profile: Profile) -> Result<()> {
        *self.profile.write().map_err(poisoned)? = profile;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn seeded_store_has_fixtures() {
        let store = RecordStore::seeded();
        assert_eq!(store.leave_records().unwrap().len(), 6);
        assert_eq!(store.find_leave(3).unwrap().unwrap().name, "Meera Iyer");
        assert!(store.find_leave(99).unwrap().is_none());
    }

    #[test]
    fn replace_swaps_whole_list() {
        let store = RecordStore::seeded();
        let keep: Vec<_> = store.leave_records().unwrap().into_iter().take(2).collect();
        store.replace_leave_records(keep).unwrap();
        assert_eq!(store.leave_records().unwrap().len(), 2);
    }

    #[test]
    fn failed_update_leaves_history_alone() {
        let store = RecordStore::seeded();
        let before = store.attendance_history().unwrap();
        let result = store.update_attendance(|_| Err(AppError::Conflict("nope".into())));
        assert!(result.is_err());
        assert_eq!(store.attendance_history().unwrap(), before);
    }
}
