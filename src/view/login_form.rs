use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::session::AuthError;
use crate::model::role::Role;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "email": "rahul.verma@school.edu",
    "password": "secret",
    "role": "teacher",
    "rememberMe": true
}))]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub role: Role,
    #[serde(default)]
    pub remember_me: bool,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.email.trim().is_empty() || self.password.is_empty() {
            return Err(AuthError::Validation(
                "Email and password are required".to_string(),
            ));
        }
        Ok(())
    }
}
