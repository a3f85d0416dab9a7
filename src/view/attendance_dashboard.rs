use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use utoipa::ToSchema;

use crate::derivation::{AttendanceSummary, attendance_summary, to_12_hour_format};
use crate::error::{AppError, Result};
use crate::model::daily_attendance::{AttendanceStatus, DailyAttendanceEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceEvent {
    CheckIn { date: NaiveDate, at: NaiveTime },
}

/// Applies `event` to a newest-first history.
pub fn update(
    history: &[DailyAttendanceEntry],
    event: AttendanceEvent,
) -> Result<Vec<DailyAttendanceEntry>> {
    match event {
        AttendanceEvent::CheckIn { date, at } => {
            if history.iter().any(|e| e.date == date) {
                return Err(AppError::Conflict("Already checked in today".to_string()));
            }
            let entry = DailyAttendanceEntry::checked_in(date, at.format("%H:%M").to_string());
            let mut next = Vec::with_capacity(history.len() + 1);
            next.push(entry);
            next.extend_from_slice(history);
            Ok(next)
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRow {
    #[schema(example = "2026-10-18", format = "date", value_type = String)]
    pub date: NaiveDate,
    #[schema(example = "8:55 AM")]
    pub in_time: String,
    #[schema(example = "-")]
    pub out_time: String,
    pub working_hours: String,
    pub status: AttendanceStatus,
}

impl TryFrom<&DailyAttendanceEntry> for AttendanceRow {
    type Error = AppError;

    fn try_from(entry: &DailyAttendanceEntry) -> Result<Self> {
        Ok(Self {
            date: entry.date,
            in_time: to_12_hour_format(&entry.in_time)?,
            out_time: to_12_hour_format(&entry.out_time)?,
            working_hours: entry.working_hours.clone(),
            status: entry.status,
        })
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceDashboard {
    /// Set once today's check-in exists.
    pub today: Option<AttendanceRow>,
    pub history: Vec<AttendanceRow>,
    pub summary: AttendanceSummary,
}

pub fn render(history: &[DailyAttendanceEntry], today: NaiveDate) -> Result<AttendanceDashboard> {
    let rows = history
        .iter()
        .map(AttendanceRow::try_from)
        .collect::<Result<Vec<_>>>()?;

    Ok(AttendanceDashboard {
        today: rows.iter().find(|r| r.date == today).cloned(),
        history: rows,
        summary: attendance_summary(history),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::daily_attendance::NOT_SET;
    use crate::store::fixtures;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn check_in(h: u32, m: u32) -> AttendanceEvent {
        AttendanceEvent::CheckIn {
            date: today(),
            at: NaiveTime::from_hms_opt(h, m, 0).unwrap(),
        }
    }

    #[test]
    fn check_in_prepends() {
        let history = fixtures::attendance_history();
        let next = update(&history, check_in(8, 55)).unwrap();
        assert_eq!(next.len(), history.len() + 1);
        assert_eq!(next[0].date, today());
        assert_eq!(next[0].in_time, "08:55");
        assert_eq!(next[0].out_time, NOT_SET);
        assert_eq!(next[0].status, AttendanceStatus::Present);
        assert_eq!(&next[1..], &history[..]);
    }

    #[test]
    fn second_check_in_same_day_conflicts() {
        let once = update(&[], check_in(8, 0)).unwrap();
        let err = update(&once, check_in(9, 0)).unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[test]
    fn rows_use_twelve_hour_times() {
        let history = update(&fixtures::attendance_history(), check_in(13, 5)).unwrap();
        let view = render(&history, today()).unwrap();
        let todays = view.today.unwrap();
        assert_eq!(todays.in_time, "1:05 PM");
        assert_eq!(todays.out_time, "-");
        // holiday row keeps its placeholders
        assert!(view.history.iter().any(|r| r.status == AttendanceStatus::Holiday && r.in_time == "-"));
        assert_eq!(view.summary.present, 4);
    }

    #[test]
    fn no_today_row_before_check_in() {
        let view = render(&fixtures::attendance_history(), today()).unwrap();
        assert!(view.today.is_none());
    }
}
