use actix_web::{HttpResponse, web};
use chrono::Local;
use serde_json::json;
use tracing::info;

use crate::{
    error::{AppError, Result},
    model::leave_record::LeaveRecord,
    state::AppState,
    view::leave_dashboard::{self, LeaveDashboard, LeaveFilter, LeaveRow},
};

/// Leave dashboard
#[utoipa::path(
    get,
    path = "/api/leave",
    params(LeaveFilter),
    responses(
        (status = 200, description = "Filtered leave rows, who is out today and totals", body = LeaveDashboard),
        (status = 400, description = "Unknown status or leave type")
    ),
    tag = "Leave"
)]
pub async fn leave_dashboard(
    state: web::Data<AppState>,
    query: web::Query<LeaveFilter>,
) -> Result<HttpResponse> {
    let records = state.store.leave_records()?;
    let today = Local::now().date_naive();
    Ok(HttpResponse::Ok().json(leave_dashboard::render(&records, &query, today)))
}

/// Staff currently on approved leave
#[utoipa::path(
    get,
    path = "/api/leave/current",
    responses((status = 200, description = "Approved leave covering today", body = [LeaveRow])),
    tag = "Leave"
)]
pub async fn currently_on_leave(state: web::Data<AppState>) -> Result<HttpResponse> {
    let records = state.store.leave_records()?;
    let today = Local::now().date_naive();
    let view = leave_dashboard::render(&records, &LeaveFilter::default(), today);
    Ok(HttpResponse::Ok().json(view.currently_on_leave))
}

/// Single leave entry
#[utoipa::path(
    get,
    path = "/api/leave/{leave_id}",
    params(
        ("leave_id" = u64, Path, description = "ID of the leave entry")
    ),
    responses(
        (status = 200, description = "Leave entry found", body = LeaveRow),
        (status = 404, description = "Leave entry not found", body = Object, example = json!({
            "message": "Leave record not found"
        }))
    ),
    tag = "Leave"
)]
pub async fn get_leave(
    state: web::Data<AppState>,
    path: web::Path<u64>,
) -> Result<HttpResponse> {
    let leave_id = path.into_inner();
    match state.store.find_leave(leave_id)? {
        Some(record) => Ok(HttpResponse::Ok().json(LeaveRow::from(&record))),
        None => Err(AppError::NotFound("Leave record not found".to_string())),
    }
}

/// Replace the whole leave list
#[utoipa::path(
    put,
    path = "/api/leave",
    request_body(
        content = Vec<LeaveRecord>,
        description = "New leave list, in display order",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "List replaced", body = Object, example = json!({
            "message": "Leave records replaced",
            "count": 6
        })),
        (status = 400, description = "Duplicate ids")
    ),
    tag = "Leave"
)]
pub async fn replace_leave(
    state: web::Data<AppState>,
    payload: web::Json<Vec<LeaveRecord>>,
) -> Result<HttpResponse> {
    let records = payload.into_inner();

    let mut ids: Vec<u64> = records.iter().map(|r| r.id).collect();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != records.len() {
        return Err(AppError::BadRequest("Leave record ids must be unique".to_string()));
    }

    let count = records.len();
    state.store.replace_leave_records(records)?;
    info!(count, "Leave records replaced");

    Ok(HttpResponse::Ok().json(json!({
        "message": "Leave records replaced",
        "count": count
    })))
}
