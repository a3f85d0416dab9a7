use std::sync::Mutex;

use crate::error::{Result, poisoned};
use crate::model::profile::Profile;
use crate::store::RecordStore;
use crate::view::FormPhase;
use crate::view::profile_editor::{self, ProfileEditor, ProfileEvent};

/// Everything the screens share, handed to handlers through `web::Data`.
///
/// The service backs a single user's frontend. Form phases, the profile
/// draft and the session token are process-wide, so a second client sees
/// the same state and gets 409 while the first one's submission is in
/// flight.
pub struct AppState {
    pub store: RecordStore,
    profile_draft: Mutex<Option<Profile>>,
    pub login_phase: Mutex<FormPhase>,
    pub signup_phase: Mutex<FormPhase>,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        Self {
            store,
            profile_draft: Mutex::new(None),
            login_phase: Mutex::new(FormPhase::Idle),
            signup_phase: Mutex::new(FormPhase::Idle),
        }
    }

    pub fn profile_editor(&self) -> Result<ProfileEditor> {
        Ok(ProfileEditor {
            profile: self.store.profile()?,
            draft: self.profile_draft.lock().map_err(poisoned)?.clone(),
        })
    }

    /// Feeds one event through the editor and keeps the result.
    pub fn apply_profile_event(&self, event: ProfileEvent) -> Result<ProfileEditor> {
        let mut draft = self.profile_draft.lock().map_err(poisoned)?;
        let current = ProfileEditor {
            profile: self.store.profile()?,
            draft: draft.take(),
        };
        let next = profile_editor::update(current, event);
        self.store.replace_profile(next.profile.clone())?;
        *draft = next.draft.clone();
        Ok(next)
    }
}
