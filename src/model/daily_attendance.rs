use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;

/// Placeholder for a time or duration that has not been recorded.
pub const NOT_SET: &str = "-";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    Present,
    #[strum(to_string = "HalfDay", serialize = "Half Day")]
    HalfDay,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyAttendanceEntry {
    pub id: Uuid,
    #[schema(example = "2026-10-18", format = "date", value_type = String)]
    pub date: NaiveDate,
    /// 24-hour `HH:MM`
    #[schema(example = "08:55")]
    pub in_time: String,
    #[schema(example = "-")]
    pub out_time: String,
    #[schema(example = "-")]
    pub working_hours: String,
    pub status: AttendanceStatus,
}

impl DailyAttendanceEntry {
    /// Entry created by a check-in: out time and hours stay unset.
    pub fn checked_in(date: NaiveDate, in_time: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            in_time,
            out_time: NOT_SET.to_string(),
            working_hours: NOT_SET.to_string(),
            status: AttendanceStatus::Present,
        }
    }
}
