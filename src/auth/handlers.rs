use std::sync::Mutex;

use actix_web::{HttpResponse, http::StatusCode, web};
use tracing::{info, instrument};

use crate::{
    auth::{
        client::AuthApi,
        session::{AuthError, Session, SessionSnapshot},
    },
    error::{AppError, Result, poisoned},
    state::AppState,
    view::{
        FormEvent, FormPhase, login_form::LoginForm, signup_form::SignupForm, update_form,
    },
};

fn auth_error_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::Validation(_) => StatusCode::BAD_REQUEST,
        AuthError::Server { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        AuthError::Network(_) | AuthError::MissingToken => StatusCode::BAD_GATEWAY,
        AuthError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Holds a form in `Submitting` until the outcome is recorded. Dropped
/// without an outcome (client went away mid-request) the form returns to
/// `Idle`.
struct Submission<'a> {
    phase: &'a Mutex<FormPhase>,
    finished: bool,
}

impl<'a> Submission<'a> {
    fn begin(phase: &'a Mutex<FormPhase>) -> Result<Self> {
        let mut current = phase.lock().map_err(poisoned)?;
        if !current.can_submit() {
            return Err(AppError::Conflict(
                "A request is already in progress".to_string(),
            ));
        }
        *current = update_form(current.clone(), FormEvent::Submit);
        Ok(Self {
            phase,
            finished: false,
        })
    }

    fn finish(mut self, event: FormEvent) -> Result<FormPhase> {
        self.finished = true;
        let mut current = self.phase.lock().map_err(poisoned)?;
        *current = update_form(current.clone(), event);
        Ok(current.clone())
    }
}

impl Drop for Submission<'_> {
    fn drop(&mut self) {
        if !self.finished {
            if let Ok(mut current) = self.phase.lock() {
                *current = FormPhase::Idle;
            }
        }
    }
}

/// Login form submission
#[utoipa::path(
    post,
    path = "/auth/login",
    request_body = LoginForm,
    responses(
        (status = 200, description = "Logged in", body = FormPhase, example = json!({
            "phase": "succeeded",
            "redirect": "/dashboard/teacher"
        })),
        (status = 400, description = "Missing email or password", body = FormPhase),
        (status = 401, description = "Rejected by the auth service, message passed through", body = FormPhase, example = json!({
            "phase": "failed",
            "message": "Invalid credentials"
        })),
        (status = 409, description = "Login already in progress"),
        (status = 502, description = "Auth service unreachable", body = FormPhase, example = json!({
            "phase": "failed",
            "message": "Unable to connect to the server. Please try again later."
        }))
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_login", skip(form, state, session), fields(email = %form.email))]
pub async fn login<A: AuthApi + 'static>(
    form: web::Json<LoginForm>,
    state: web::Data<AppState>,
    session: web::Data<Session<A>>,
) -> Result<HttpResponse> {
    info!("Login request received");
    let submission = Submission::begin(&state.login_phase)?;

    let (status, event) = match session.login(&form).await {
        Ok(outcome) => {
            info!(remembered = outcome.remembered, "Login accepted");
            (
                StatusCode::OK,
                FormEvent::Accepted {
                    redirect: outcome.redirect,
                    message: None,
                },
            )
        }
        Err(e) => {
            info!(error = %e, "Login failed");
            (auth_error_status(&e), FormEvent::Rejected(e.to_string()))
        }
    };

    let phase = submission.finish(event)?;
    Ok(HttpResponse::build(status).json(phase))
}

/// Signup form submission
#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = SignupForm,
    responses(
        (status = 201, description = "Registered, go to login", body = FormPhase, example = json!({
            "phase": "succeeded",
            "redirect": "/login",
            "message": "User registered successfully"
        })),
        (status = 400, description = "Passwords do not match or fields missing", body = FormPhase, example = json!({
            "phase": "failed",
            "message": "Passwords do not match"
        })),
        (status = 409, description = "Rejected by the auth service or already in progress", body = FormPhase),
        (status = 502, description = "Auth service unreachable", body = FormPhase)
    ),
    tag = "Auth"
)]
#[instrument(name = "auth_register", skip(form, state, session), fields(username = %form.username))]
pub async fn register<A: AuthApi + 'static>(
    form: web::Json<SignupForm>,
    state: web::Data<AppState>,
    session: web::Data<Session<A>>,
) -> Result<HttpResponse> {
    info!("Register request received");
    let submission = Submission::begin(&state.signup_phase)?;

    let (status, event) = match session.register(&form).await {
        Ok(outcome) => (
            StatusCode::CREATED,
            FormEvent::Accepted {
                redirect: outcome.redirect,
                message: outcome.message,
            },
        ),
        Err(e) => {
            info!(error = %e, "Registration failed");
            (auth_error_status(&e), FormEvent::Rejected(e.to_string()))
        }
    };

    let phase = submission.finish(event)?;
    Ok(HttpResponse::build(status).json(phase))
}

/// Forget the token and any remembered credentials
#[utoipa::path(
    post,
    path = "/auth/logout",
    responses((status = 204, description = "Session cleared")),
    tag = "Auth"
)]
pub async fn logout<A: AuthApi + 'static>(
    state: web::Data<AppState>,
    session: web::Data<Session<A>>,
) -> Result<HttpResponse> {
    session
        .logout()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    *state.login_phase.lock().map_err(poisoned)? = FormPhase::Idle;
    Ok(HttpResponse::NoContent().finish())
}

/// Current session and remembered login details
#[utoipa::path(
    get,
    path = "/auth/session",
    responses((status = 200, description = "Session snapshot", body = SessionSnapshot)),
    tag = "Auth"
)]
pub async fn current_session<A: AuthApi + 'static>(session: web::Data<Session<A>>) -> HttpResponse {
    HttpResponse::Ok().json(session.snapshot())
}
