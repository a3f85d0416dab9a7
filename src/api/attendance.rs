use actix_web::{HttpResponse, web};
use chrono::Local;
use tracing::info;

use crate::{
    error::Result,
    state::AppState,
    view::attendance_dashboard::{self, AttendanceDashboard, AttendanceEvent},
};

/// Attendance dashboard
#[utoipa::path(
    get,
    path = "/api/attendance",
    responses(
        (status = 200, description = "History newest first, today's row and totals", body = AttendanceDashboard)
    ),
    tag = "Attendance"
)]
pub async fn attendance_dashboard(state: web::Data<AppState>) -> Result<HttpResponse> {
    let history = state.store.attendance_history()?;
    let today = Local::now().date_naive();
    Ok(HttpResponse::Ok().json(attendance_dashboard::render(&history, today)?))
}

/// Check-in endpoint
#[utoipa::path(
    post,
    path = "/api/attendance/check-in",
    responses(
        (status = 200, description = "Checked in successfully", body = AttendanceDashboard),
        (status = 409, description = "Already checked in today", body = Object, example = json!({
            "message": "Already checked in today"
        }))
    ),
    tag = "Attendance"
)]
pub async fn check_in(state: web::Data<AppState>) -> Result<HttpResponse> {
    let now = Local::now().naive_local();
    let event = AttendanceEvent::CheckIn {
        date: now.date(),
        at: now.time(),
    };

    let history = state
        .store
        .update_attendance(|history| attendance_dashboard::update(history, event))?;
    info!(date = %now.date(), "Checked in");

    Ok(HttpResponse::Ok().json(attendance_dashboard::render(&history, now.date())?))
}
