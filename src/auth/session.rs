use std::io;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;

use crate::auth::client::{AuthApi, LoginRequest, RegisterRequest};
use crate::auth::storage::{
    AUTH_TOKEN_KEY, ClientStorage, SESSION_KEYS, USER_EMAIL_KEY, USER_ROLE_KEY,
};
use crate::model::role::Role;
use crate::view::{login_form::LoginForm, signup_form::SignupForm};

pub const NETWORK_ERROR_MESSAGE: &str = "Unable to connect to the server. Please try again later.";
pub const LOGIN_REDIRECT: &str = "/login";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Caught before anything was sent.
    #[error("{0}")]
    Validation(String),

    /// The service answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network(String),

    #[error("Login succeeded but no token was returned")]
    MissingToken,

    #[error("Could not save session: {0}")]
    Storage(#[from] io::Error),
}

/// Opaque credential from the auth service. Never inspected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub struct AuthToken(String);

impl AuthToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    pub token: AuthToken,
    pub redirect: String,
    pub remembered: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterOutcome {
    pub message: Option<String>,
    pub redirect: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub authenticated: bool,
    pub remembered_email: Option<String>,
    pub remembered_role: Option<Role>,
}

/// Talks to the auth service and keeps the resulting token.
///
/// `persistent` holds remembered sessions across restarts, `session` holds
/// the token for logins without "remember me".
pub struct Session<A> {
    api: A,
    persistent: Box<dyn ClientStorage>,
    session: Box<dyn ClientStorage>,
}

impl<A: AuthApi> Session<A> {
    pub fn new(api: A, persistent: Box<dyn ClientStorage>, session: Box<dyn ClientStorage>) -> Self {
        Self {
            api,
            persistent,
            session,
        }
    }

    #[instrument(
        name = "session_login",
        skip(self, form),
        fields(email = %form.email, role = %form.role, remember_me = form.remember_me)
    )]
    pub async fn login(&self, form: &LoginForm) -> Result<LoginOutcome, AuthError> {
        form.validate()?;

        let request = LoginRequest {
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            role: form.role,
        };

        let response = self.api.login(&request).await.map_err(|e| {
            warn!(error = %e, "Login request failed");
            AuthError::Network(e.0)
        })?;

        if !response.is_success() {
            info!(status = response.status, "Login rejected");
            return Err(AuthError::Server {
                status: response.status,
                message: response
                    .body
                    .message
                    .unwrap_or_else(|| "Login failed".to_string()),
            });
        }

        let token = response
            .body
            .token
            .filter(|t| !t.is_empty())
            .map(AuthToken)
            .ok_or(AuthError::MissingToken)?;

        if let Err(e) = self.store_token(&token, &request, form.remember_me) {
            warn!(error = %e, "Could not save session");
            self.discard_token();
            return Err(e.into());
        }

        info!("Login successful");
        Ok(LoginOutcome {
            token,
            redirect: request.role.dashboard_path(),
            remembered: form.remember_me,
        })
    }

    #[instrument(
        name = "session_register",
        skip(self, form),
        fields(username = %form.username, role = %form.role)
    )]
    pub async fn register(&self, form: &SignupForm) -> Result<RegisterOutcome, AuthError> {
        form.validate()?;

        let request = RegisterRequest {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            role: form.role,
        };

        let response = self.api.register(&request).await.map_err(|e| {
            warn!(error = %e, "Register request failed");
            AuthError::Network(e.0)
        })?;

        if !response.is_success() {
            info!(status = response.status, "Registration rejected");
            return Err(AuthError::Server {
                status: response.status,
                message: response
                    .body
                    .message
                    .unwrap_or_else(|| "Registration failed".to_string()),
            });
        }

        info!("Registration successful");
        Ok(RegisterOutcome {
            message: response.body.message,
            redirect: LOGIN_REDIRECT.to_string(),
        })
    }

    pub fn logout(&self) -> Result<(), AuthError> {
        for key in SESSION_KEYS {
            self.session.remove(key)?;
            self.persistent.remove(key)?;
        }
        debug!("Session cleared");
        Ok(())
    }

    /// The session token goes in last, so a failed write never leaves a
    /// live session behind.
    fn store_token(
        &self,
        token: &AuthToken,
        request: &LoginRequest,
        remember_me: bool,
    ) -> io::Result<()> {
        if remember_me {
            self.persistent.set(AUTH_TOKEN_KEY, token.as_str())?;
            self.persistent.set(USER_EMAIL_KEY, &request.email)?;
            self.persistent.set(USER_ROLE_KEY, &request.role.to_string())?;
        } else {
            // an unticked box forgets whatever was remembered before
            for key in SESSION_KEYS {
                self.persistent.remove(key)?;
            }
        }
        self.session.set(AUTH_TOKEN_KEY, token.as_str())
    }

    /// Best effort; the original write error is what gets reported.
    fn discard_token(&self) {
        for key in SESSION_KEYS {
            let _ = self.persistent.remove(key);
            let _ = self.session.remove(key);
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let token = self
            .session
            .get(AUTH_TOKEN_KEY)
            .or_else(|| self.persistent.get(AUTH_TOKEN_KEY));

        SessionSnapshot {
            authenticated: token.is_some(),
            remembered_email: self.persistent.get(USER_EMAIL_KEY),
            remembered_role: self
                .persistent
                .get(USER_ROLE_KEY)
                .and_then(|r| r.parse().ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::fake::FakeApi;
    use crate::auth::storage::SessionStorage;
    use std::time::Duration;

    /// Works until asked to store `failing_key`.
    struct FullDisk {
        inner: SessionStorage,
        failing_key: &'static str,
    }

    impl ClientStorage for FullDisk {
        fn get(&self, key: &str) -> Option<String> {
            self.inner.get(key)
        }

        fn set(&self, key: &str, value: &str) -> io::Result<()> {
            if key == self.failing_key {
                return Err(io::Error::other("disk full"));
            }
            self.inner.set(key, value)
        }

        fn remove(&self, key: &str) -> io::Result<()> {
            self.inner.remove(key)
        }
    }

    fn session(api: FakeApi) -> Session<FakeApi> {
        Session::new(
            api,
            Box::new(SessionStorage::new(Duration::from_secs(60))),
            Box::new(SessionStorage::new(Duration::from_secs(60))),
        )
    }

    fn login_form(remember_me: bool) -> LoginForm {
        LoginForm {
            email: "rahul.verma@school.edu".into(),
            password: "secret".into(),
            role: Role::Teacher,
            remember_me,
        }
    }

    fn signup_form(confirm: &str) -> SignupForm {
        SignupForm {
            username: "rverma".into(),
            email: "rahul.verma@school.edu".into(),
            password: "secret".into(),
            confirm_password: confirm.into(),
            role: Role::Teacher,
        }
    }

    #[actix_web::test]
    async fn rejected_login_surfaces_server_message() {
        let api = FakeApi::replying(401, None, Some("Invalid email or password for role"));
        let session = session(api.clone());

        let err = session.login(&login_form(false)).await.unwrap_err();
        match err {
            AuthError::Server { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Invalid email or password for role");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(api.calls(), 1);
        assert!(!session.snapshot().authenticated);
    }

    #[actix_web::test]
    async fn rejected_login_without_message_uses_fallback() {
        let session = session(FakeApi::replying(500, None, None));
        let err = session.login(&login_form(false)).await.unwrap_err();
        assert_eq!(err.to_string(), "Login failed");
    }

    #[actix_web::test]
    async fn remembered_login_writes_all_keys() {
        let session = session(FakeApi::replying(200, Some("opaque-token"), None));
        let outcome = session.login(&login_form(true)).await.unwrap();

        assert_eq!(outcome.token.as_str(), "opaque-token");
        assert_eq!(outcome.redirect, "/dashboard/teacher");
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                authenticated: true,
                remembered_email: Some("rahul.verma@school.edu".into()),
                remembered_role: Some(Role::Teacher),
            }
        );
        assert_eq!(
            session.persistent.get(AUTH_TOKEN_KEY).as_deref(),
            Some("opaque-token")
        );
    }

    #[actix_web::test]
    async fn plain_login_keeps_token_in_session_only() {
        let session = session(FakeApi::replying(200, Some("tok"), None));
        session.login(&login_form(true)).await.unwrap();
        session.login(&login_form(false)).await.unwrap();

        assert_eq!(session.session.get(AUTH_TOKEN_KEY).as_deref(), Some("tok"));
        for key in SESSION_KEYS {
            assert_eq!(session.persistent.get(key), None);
        }
    }

    #[actix_web::test]
    async fn failed_save_leaves_no_session() {
        for failing_key in [AUTH_TOKEN_KEY, USER_EMAIL_KEY] {
            let session = Session::new(
                FakeApi::replying(200, Some("tok"), None),
                Box::new(FullDisk {
                    inner: SessionStorage::new(Duration::from_secs(60)),
                    failing_key,
                }),
                Box::new(SessionStorage::new(Duration::from_secs(60))),
            );

            let err = session.login(&login_form(true)).await.unwrap_err();
            assert!(matches!(err, AuthError::Storage(_)));
            assert_eq!(
                session.snapshot(),
                SessionSnapshot {
                    authenticated: false,
                    remembered_email: None,
                    remembered_role: None,
                }
            );
        }
    }

    #[actix_web::test]
    async fn success_without_token_is_an_error() {
        let session = session(FakeApi::replying(200, None, Some("ok")));
        let err = session.login(&login_form(false)).await.unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[actix_web::test]
    async fn transport_failure_is_generic() {
        let session = session(FakeApi::unreachable());
        let err = session.login(&login_form(false)).await.unwrap_err();
        assert!(matches!(err, AuthError::Network(_)));
        assert_eq!(err.to_string(), NETWORK_ERROR_MESSAGE);
    }

    #[actix_web::test]
    async fn signup_mismatch_sends_nothing() {
        let api = FakeApi::replying(201, None, None);
        let session = session(api.clone());

        let err = session.register(&signup_form("different")).await.unwrap_err();
        assert!(matches!(err, AuthError::Validation(_)));
        assert_eq!(api.calls(), 0);
    }

    #[actix_web::test]
    async fn signup_success_redirects_to_login() {
        let api = FakeApi::replying(201, None, Some("User registered successfully"));
        let session = session(api.clone());

        let outcome = session.register(&signup_form("secret")).await.unwrap();
        assert_eq!(outcome.redirect, LOGIN_REDIRECT);
        assert_eq!(outcome.message.as_deref(), Some("User registered successfully"));
        assert_eq!(api.calls(), 1);
    }

    #[actix_web::test]
    async fn signup_conflict_surfaces_message() {
        let session = session(FakeApi::replying(409, None, Some("Email already registered")));
        let err = session.register(&signup_form("secret")).await.unwrap_err();
        assert_eq!(err.to_string(), "Email already registered");
    }

    #[actix_web::test]
    async fn logout_clears_everything() {
        let session = session(FakeApi::replying(200, Some("tok"), None));
        session.login(&login_form(true)).await.unwrap();
        session.logout().unwrap();
        assert_eq!(
            session.snapshot(),
            SessionSnapshot {
                authenticated: false,
                remembered_email: None,
                remembered_role: None,
            }
        );
    }
}
