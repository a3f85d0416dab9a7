use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum LeaveType {
    Medical,
    Vacation,
    Conference,
    Sabbatical,
    Personal,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum LeaveStatus {
    Approved,
    Pending,
}

/// One leave entry shown on the leave dashboard.
///
/// `start_date <= end_date` is expected but not enforced; derived values
/// tolerate reversed ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(
    example = json!({
        "id": 1,
        "name": "Anita Sharma",
        "designation": "Senior Teacher",
        "department": "Mathematics",
        "leaveType": "Medical",
        "status": "Approved",
        "startDate": "2026-10-12",
        "endDate": "2026-10-20",
        "description": "Post-surgery recovery",
        "contact": "+91 98765 43210"
    })
)]
pub struct LeaveRecord {
    #[schema(example = 1)]
    pub id: u64,
    #[schema(example = "Anita Sharma")]
    pub name: String,
    #[schema(example = "Senior Teacher")]
    pub designation: String,
    #[schema(example = "Mathematics")]
    pub department: String,
    pub leave_type: LeaveType,
    pub status: LeaveStatus,
    #[schema(example = "2026-10-12", format = "date", value_type = String)]
    pub start_date: NaiveDate,
    #[schema(example = "2026-10-20", format = "date", value_type = String)]
    pub end_date: NaiveDate,
    pub description: String,
    pub contact: String,
}
