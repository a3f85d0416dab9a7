//! Outbound calls to the external authentication service.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::role::Role;

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Body returned by both endpoints. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthResponseBody {
    pub token: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: AuthResponseBody,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("transport failure: {0}")]
pub struct TransportError(pub String);

/// One request, one response. No retries.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, TransportError>;
    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError>;
}

pub struct HttpAuthApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpAuthApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<ApiResponse, TransportError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Posting to auth service");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, %url, "Auth service unreachable");
                TransportError(e.to_string())
            })?;

        let status = response.status().as_u16();
        // A non-JSON body still carries a usable status.
        let body = match response.json::<AuthResponseBody>().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, status, "Auth service returned a non-JSON body");
                AuthResponseBody::default()
            }
        };

        Ok(ApiResponse { status, body })
    }
}

impl AuthApi for HttpAuthApi {
    async fn login(&self, request: &LoginRequest) -> Result<ApiResponse, TransportError> {
        self.post("/login", request).await
    }

    async fn register(&self, request: &RegisterRequest) -> Result<ApiResponse, TransportError> {
        self.post("/register", request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_bodies_match_wire_format() {
        let login = serde_json::to_value(LoginRequest {
            email: "a@school.edu".into(),
            password: "pw".into(),
            role: Role::Teacher,
        })
        .unwrap();
        assert_eq!(
            login,
            serde_json::json!({ "email": "a@school.edu", "password": "pw", "role": "teacher" })
        );
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let body: AuthResponseBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body, AuthResponseBody::default());
    }

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let api = HttpAuthApi::new("http://localhost:5000/api/auth/");
        assert_eq!(api.base_url, "http://localhost:5000/api/auth");
    }

    #[actix_web::test]
    async fn unreachable_service_is_a_transport_error() {
        // nothing listens on the discard port
        let api = HttpAuthApi::new("http://127.0.0.1:9");
        let result = api
            .login(&LoginRequest {
                email: "a@b.c".into(),
                password: "x".into(),
                role: Role::Admin,
            })
            .await;
        assert!(result.is_err());
    }
}
