use actix_web::{HttpResponse, web};
use tracing::debug;

use crate::{
    error::Result,
    model::profile::ProfilePatch,
    state::AppState,
    view::profile_editor::{ProfileEditor, ProfileEvent},
};

fn respond(editor: ProfileEditor) -> HttpResponse {
    debug!(editing = editor.editing(), "Profile editor state");
    HttpResponse::Ok().json(editor)
}

/// Profile editor state
#[utoipa::path(
    get,
    path = "/api/profile",
    responses((status = 200, description = "Saved profile and draft, if editing", body = ProfileEditor)),
    tag = "Profile"
)]
pub async fn get_profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(respond(state.profile_editor()?))
}

/// Enter edit mode
#[utoipa::path(
    post,
    path = "/api/profile/edit",
    responses((status = 200, description = "Draft opened", body = ProfileEditor)),
    tag = "Profile"
)]
pub async fn edit_profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(respond(state.apply_profile_event(ProfileEvent::Edit)?))
}

/// Change draft fields
#[utoipa::path(
    patch,
    path = "/api/profile/draft",
    request_body = ProfilePatch,
    responses((status = 200, description = "Draft updated; ignored outside edit mode", body = ProfileEditor)),
    tag = "Profile"
)]
pub async fn change_profile(
    state: web::Data<AppState>,
    payload: web::Json<ProfilePatch>,
) -> Result<HttpResponse> {
    let event = ProfileEvent::Change(payload.into_inner());
    Ok(respond(state.apply_profile_event(event)?))
}

/// Commit the draft
#[utoipa::path(
    post,
    path = "/api/profile/save",
    responses((status = 200, description = "Draft saved", body = ProfileEditor)),
    tag = "Profile"
)]
pub async fn save_profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(respond(state.apply_profile_event(ProfileEvent::Save)?))
}

/// Discard the draft
#[utoipa::path(
    post,
    path = "/api/profile/cancel",
    responses((status = 200, description = "Draft discarded", body = ProfileEditor)),
    tag = "Profile"
)]
pub async fn cancel_profile(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(respond(state.apply_profile_event(ProfileEvent::Cancel)?))
}
