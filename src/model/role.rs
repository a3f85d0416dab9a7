use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Admin,
    Teacher,
    Staff,
    Student,
}

impl Role {
    /// Landing page after a successful login.
    pub fn dashboard_path(&self) -> String {
        format!("/dashboard/{}", self)
    }
}
