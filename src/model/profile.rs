use serde::{Deserialize, Serialize, Serializer};
use utoipa::ToSchema;

use crate::model::role::Role;

/// Staff profile held in session memory. The password is kept as typed and
/// never written back out in responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[schema(example = "Rahul Verma")]
    pub name: String,
    #[schema(example = "rahul.verma@school.edu", format = "email")]
    pub email: String,
    #[schema(example = "+91 90000 11111")]
    pub phone: String,
    pub role: Role,
    #[schema(example = "TCH-1042")]
    pub teacher_id: String,
    #[serde(serialize_with = "mask_password")]
    #[schema(example = "********")]
    pub password: String,
    #[schema(example = "/images/avatars/rahul.png")]
    pub profile_pic: String,
}

fn mask_password<S: Serializer>(password: &str, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&"*".repeat(password.chars().count()))
}

/// Partial update coming from the editor form.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<Role>,
    pub teacher_id: Option<String>,
    pub password: Option<String>,
    pub profile_pic: Option<String>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(v) = patch.name {
            self.name = v;
        }
        if let Some(v) = patch.email {
            self.email = v;
        }
        if let Some(v) = patch.phone {
            self.phone = v;
        }
        if let Some(v) = patch.role {
            self.role = v;
        }
        if let Some(v) = patch.teacher_id {
            self.teacher_id = v;
        }
        if let Some(v) = patch.password {
            self.password = v;
        }
        if let Some(v) = patch.profile_pic {
            self.profile_pic = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile {
            name: "Rahul Verma".into(),
            email: "rahul@school.edu".into(),
            phone: "123".into(),
            role: Role::Teacher,
            teacher_id: "TCH-1".into(),
            password: "secret".into(),
            profile_pic: String::new(),
        }
    }

    #[test]
    fn password_is_masked_when_serialized() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["password"], "******");
        assert_eq!(json["teacherId"], "TCH-1");
        assert_eq!(json["role"], "teacher");
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut p = profile();
        p.apply(ProfilePatch {
            phone: Some("555".into()),
            ..Default::default()
        });
        assert_eq!(p.phone, "555");
        assert_eq!(p.name, "Rahul Verma");
    }
}
