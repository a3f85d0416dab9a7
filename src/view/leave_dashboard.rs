use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::derivation::{
    BadgeColor, LeaveSummary, calculate_duration, currently_on_leave, leave_summary,
    leave_type_color, status_color,
};
use crate::model::leave_record::{LeaveRecord, LeaveStatus, LeaveType};

#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct LeaveFilter {
    /// Filter by leave status
    #[param(value_type = Option<String>, example = "Approved")]
    pub status: Option<LeaveStatus>,
    /// Filter by leave type
    #[param(value_type = Option<String>, example = "Medical")]
    pub leave_type: Option<LeaveType>,
    /// Case-insensitive match on name, department or designation
    #[param(example = "math")]
    pub search: Option<String>,
}

impl LeaveFilter {
    fn matches(&self, record: &LeaveRecord) -> bool {
        if self.status.is_some_and(|s| s != record.status) {
            return false;
        }
        if self.leave_type.is_some_and(|t| t != record.leave_type) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(needle) if !needle.is_empty() => {
                let needle = needle.to_lowercase();
                [&record.name, &record.department, &record.designation]
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRow {
    #[serde(flatten)]
    pub record: LeaveRecord,
    #[schema(example = 9)]
    pub duration_days: i64,
    pub leave_type_color: BadgeColor,
    pub status_color: BadgeColor,
}

impl From<&LeaveRecord> for LeaveRow {
    fn from(record: &LeaveRecord) -> Self {
        Self {
            duration_days: calculate_duration(record.start_date, record.end_date),
            leave_type_color: leave_type_color(record.leave_type),
            status_color: status_color(record.status),
            record: record.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDashboard {
    #[schema(example = "2026-10-18", format = "date", value_type = String)]
    pub today: NaiveDate,
    pub rows: Vec<LeaveRow>,
    pub currently_on_leave: Vec<LeaveRow>,
    /// Computed over the unfiltered list.
    pub summary: LeaveSummary,
}

pub fn render(records: &[LeaveRecord], filter: &LeaveFilter, today: NaiveDate) -> LeaveDashboard {
    LeaveDashboard {
        today,
        rows: records
            .iter()
            .filter(|r| filter.matches(r))
            .map(LeaveRow::from)
            .collect(),
        currently_on_leave: currently_on_leave(records, today)
            .into_iter()
            .map(LeaveRow::from)
            .collect(),
        summary: leave_summary(records, today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::fixtures::LEAVE_RECORDS;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn no_filter_shows_everything() {
        let view = render(&LEAVE_RECORDS, &LeaveFilter::default(), today());
        assert_eq!(view.rows.len(), LEAVE_RECORDS.len());
        assert_eq!(view.summary.total, LEAVE_RECORDS.len());
    }

    #[test]
    fn filters_combine() {
        let filter = LeaveFilter {
            status: Some(LeaveStatus::Approved),
            leave_type: Some(LeaveType::Medical),
            search: None,
        };
        let view = render(&LEAVE_RECORDS, &filter, today());
        assert!(view.rows.iter().all(|r| r.record.status == LeaveStatus::Approved
            && r.record.leave_type == LeaveType::Medical));
        assert_eq!(view.rows.len(), 2);
    }

    #[test]
    fn search_is_case_insensitive() {
        let filter = LeaveFilter {
            search: Some("  MATHEMATICS ".into()),
            ..Default::default()
        };
        let view = render(&LEAVE_RECORDS, &filter, today());
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].record.name, "Anita Sharma");
    }

    #[test]
    fn on_leave_panel_ignores_pending() {
        let view = render(&LEAVE_RECORDS, &LeaveFilter::default(), today());
        let ids: Vec<u64> = view.currently_on_leave.iter().map(|r| r.record.id).collect();
        // Meera Iyer (3) overlaps today but is still pending
        assert_eq!(ids, vec![1, 2, 4]);
    }

    #[test]
    fn row_carries_derived_values() {
        let row = LeaveRow::from(&LEAVE_RECORDS[0]);
        assert_eq!(row.duration_days, 13);
        assert_eq!(row.leave_type_color, BadgeColor::Danger);
        assert_eq!(row.status_color, BadgeColor::Success);
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["name"], "Anita Sharma");
        assert_eq!(json["durationDays"], 13);
    }
}
