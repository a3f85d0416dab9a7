//! Per-screen view state. Each screen is a value plus the events that move
//! it; handlers feed events in and write the result back.

pub mod attendance_dashboard;
pub mod leave_dashboard;
pub mod login_form;
pub mod profile_editor;
pub mod signup_form;

use serde::Serialize;
use utoipa::ToSchema;

/// Lifecycle shared by the login and signup forms.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Failed {
        message: String,
    },
    Succeeded {
        redirect: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Submit,
    Rejected(String),
    Accepted {
        redirect: String,
        message: Option<String>,
    },
}

impl FormPhase {
    /// Failed forms can be submitted again; only an in-flight one cannot.
    pub fn can_submit(&self) -> bool {
        !matches!(self, FormPhase::Submitting)
    }
}

pub fn update_form(phase: FormPhase, event: FormEvent) -> FormPhase {
    match (phase, event) {
        (_, FormEvent::Submit) => FormPhase::Submitting,
        (_, FormEvent::Rejected(message)) => FormPhase::Failed { message },
        (_, FormEvent::Accepted { redirect, message }) => {
            FormPhase::Succeeded { redirect, message }
        }
    }
}
