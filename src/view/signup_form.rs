use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::session::AuthError;
use crate::model::role::Role;

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "username": "rverma",
    "email": "rahul.verma@school.edu",
    "password": "secret",
    "confirmPassword": "secret",
    "role": "teacher"
}))]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
}

impl SignupForm {
    /// Checks that must pass before anything is sent.
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.username.trim().is_empty()
            || self.email.trim().is_empty()
            || self.password.is_empty()
        {
            return Err(AuthError::Validation("All fields are required".to_string()));
        }
        if self.password != self.confirm_password {
            return Err(AuthError::Validation("Passwords do not match".to_string()));
        }
        Ok(())
    }
}
