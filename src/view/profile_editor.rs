use serde::Serialize;
use utoipa::ToSchema;

use crate::model::profile::{Profile, ProfilePatch};

/// Saved profile plus the in-progress draft. A draft exists only while
/// editing.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileEditor {
    pub profile: Profile,
    pub draft: Option<Profile>,
}

#[derive(Debug, Clone)]
pub enum ProfileEvent {
    Edit,
    Change(ProfilePatch),
    Save,
    Cancel,
}

impl ProfileEditor {
    pub fn editing(&self) -> bool {
        self.draft.is_some()
    }
}

pub fn update(state: ProfileEditor, event: ProfileEvent) -> ProfileEditor {
    let ProfileEditor { profile, draft } = state;
    match (event, draft) {
        // re-entering edit mode keeps the current draft
        (ProfileEvent::Edit, Some(draft)) => ProfileEditor {
            profile,
            draft: Some(draft),
        },
        (ProfileEvent::Edit, None) => ProfileEditor {
            draft: Some(profile.clone()),
            profile,
        },
        (ProfileEvent::Change(patch), Some(mut draft)) => {
            draft.apply(patch);
            ProfileEditor {
                profile,
                draft: Some(draft),
            }
        }
        (ProfileEvent::Save, Some(draft)) => ProfileEditor {
            profile: draft,
            draft: None,
        },
        (ProfileEvent::Cancel, _) => ProfileEditor {
            profile,
            draft: None,
        },
        // changes and saves outside edit mode are ignored
        (ProfileEvent::Change(_) | ProfileEvent::Save, None) => ProfileEditor {
            profile,
            draft: None,
        },
    }
}
