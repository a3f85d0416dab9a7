//! Pure display values computed from stored records.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;
use strum_macros::Display;
use thiserror::Error;
use utoipa::ToSchema;

use crate::model::daily_attendance::{AttendanceStatus, DailyAttendanceEntry, NOT_SET};
use crate::model::leave_record::{LeaveRecord, LeaveStatus, LeaveType};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    #[error("Invalid time '{0}', expected HH:MM")]
    InvalidTime(String),
}

/// Badge category a renderer maps to its own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BadgeColor {
    Danger,
    Info,
    Primary,
    Success,
    Warning,
}

/// Inclusive number of days between two dates, in either order.
pub fn calculate_duration(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days().abs() + 1
}

/// Unknown labels never get this far: `LeaveType` parsing rejects them.
pub fn leave_type_color(leave_type: LeaveType) -> BadgeColor {
    match leave_type {
        LeaveType::Medical => BadgeColor::Danger,
        LeaveType::Vacation => BadgeColor::Info,
        LeaveType::Conference => BadgeColor::Primary,
        LeaveType::Sabbatical => BadgeColor::Success,
        LeaveType::Personal => BadgeColor::Warning,
    }
}

pub fn status_color(status: LeaveStatus) -> BadgeColor {
    match status {
        LeaveStatus::Approved => BadgeColor::Success,
        LeaveStatus::Pending => BadgeColor::Warning,
    }
}

/// Approved records whose range covers `now`, in store order.
pub fn currently_on_leave(records: &[LeaveRecord], now: NaiveDate) -> Vec<&LeaveRecord> {
    records
        .iter()
        .filter(|r| r.status == LeaveStatus::Approved)
        .filter(|r| r.start_date <= now && now <= r.end_date)
        .collect()
}

/// `"13:05"` -> `"1:05 PM"`. The not-set placeholder is returned as is.
pub fn to_12_hour_format(hhmm: &str) -> Result<String, DeriveError> {
    if hhmm == NOT_SET {
        return Ok(hhmm.to_string());
    }

    let time = NaiveTime::parse_from_str(hhmm.trim(), "%H:%M")
        .map_err(|_| DeriveError::InvalidTime(hhmm.to_string()))?;

    Ok(time.format("%-I:%M %p").to_string())
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSummary {
    pub total: usize,
    pub approved: usize,
    pub pending: usize,
    pub on_leave_today: usize,
    /// Sum of durations over approved records.
    pub approved_days: i64,
}

pub fn leave_summary(records: &[LeaveRecord], now: NaiveDate) -> LeaveSummary {
    let mut summary = LeaveSummary {
        total: records.len(),
        on_leave_today: currently_on_leave(records, now).len(),
        ..Default::default()
    };

    for record in records {
        match record.status {
            LeaveStatus::Approved => {
                summary.approved += 1;
                summary.approved_days += calculate_duration(record.start_date, record.end_date);
            }
            LeaveStatus::Pending => summary.pending += 1,
        }
    }

    summary
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSummary {
    pub present: usize,
    pub half_day: usize,
    pub holiday: usize,
    /// Half days count as half. Holidays are not working days.
    pub attendance_percentage: f64,
}

pub fn attendance_summary(history: &[DailyAttendanceEntry]) -> AttendanceSummary {
    let mut summary = AttendanceSummary::default();

    for entry in history {
        match entry.status {
            AttendanceStatus::Present => summary.present += 1,
            AttendanceStatus::HalfDay => summary.half_day += 1,
            AttendanceStatus::Holiday => summary.holiday += 1,
        }
    }

    let working_days = summary.present + summary.half_day;
    if working_days > 0 {
        let attended = summary.present as f64 + summary.half_day as f64 * 0.5;
        summary.attendance_percentage = attended / working_days as f64 * 100.0;
    }

    summary
}
