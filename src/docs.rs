use crate::auth::session::SessionSnapshot;
use crate::derivation::{AttendanceSummary, BadgeColor, LeaveSummary};
use crate::model::{
    daily_attendance::AttendanceStatus,
    leave_record::{LeaveRecord, LeaveStatus, LeaveType},
    profile::{Profile, ProfilePatch},
    role::Role,
};
use crate::view::{
    FormPhase,
    attendance_dashboard::{AttendanceDashboard, AttendanceRow},
    leave_dashboard::{LeaveDashboard, LeaveRow},
    login_form::LoginForm,
    profile_editor::ProfileEditor,
    signup_form::SignupForm,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Staff Portal API",
        version = "0.1.0",
        description = r#"
## School Staff Portal

Screen state for a school staff portal, served as JSON.

### Screens
- **Login / Signup**
  - Credentials are forwarded to the external authentication service
  - The returned token is stored opaquely, optionally remembered
- **Leave dashboard**
  - Filtered leave list with durations and badge colours
  - Who is on approved leave today
- **Attendance dashboard**
  - Daily check-in, history with 12-hour times, attendance percentage
- **Profile editor**
  - Edit / save / cancel over an in-memory profile

### Response Format
- JSON bodies; errors are `{"message": "..."}`
- Form submissions return the form phase (`idle`, `submitting`, `failed`, `succeeded`)

---
Built with **Rust**, **Actix Web** and **Utoipa**.
"#,
    ),
    paths(
        crate::auth::handlers::login,
        crate::auth::handlers::register,
        crate::auth::handlers::logout,
        crate::auth::handlers::current_session,

        crate::api::leave::leave_dashboard,
        crate::api::leave::currently_on_leave,
        crate::api::leave::get_leave,
        crate::api::leave::replace_leave,

        crate::api::attendance::attendance_dashboard,
        crate::api::attendance::check_in,

        crate::api::profile::get_profile,
        crate::api::profile::edit_profile,
        crate::api::profile::change_profile,
        crate::api::profile::save_profile,
        crate::api::profile::cancel_profile
    ),
    components(
        schemas(
            LoginForm,
            SignupForm,
            FormPhase,
            SessionSnapshot,
            Role,
            LeaveRecord,
            LeaveType,
            LeaveStatus,
            LeaveRow,
            LeaveDashboard,
            LeaveSummary,
            BadgeColor,
            AttendanceStatus,
            AttendanceRow,
            AttendanceDashboard,
            AttendanceSummary,
            Profile,
            ProfilePatch,
            ProfileEditor
        )
    ),
    tags(
        (name = "Auth", description = "Login, signup and session"),
        (name = "Leave", description = "Leave dashboard APIs"),
        (name = "Attendance", description = "Attendance dashboard APIs"),
        (name = "Profile", description = "Profile editor APIs"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_is_documented() {
        let doc = ApiDoc::openapi();
        for path in ["/auth/login", "/api/leave", "/api/attendance/check-in", "/api/profile/draft"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
