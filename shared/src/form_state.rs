//! State of the profile settings form and the transitions the page drives.
//!
//! Each load attempt carries a generation number. Only the outcome of the
//! latest attempt is applied, so a slow response for a wallet the user
//! already switched away from cannot overwrite newer state.

use log::debug;
use crate::models::profile::{ProfileField, ProfileRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileFormState {
    pub form: ProfileRecord,
    pub is_loading: bool,
    /// Generation of the latest load attempt
    pub generation: u64,
}

impl Default for ProfileFormState {
    fn default() -> Self {
        Self {
            form: ProfileRecord::default(),
            is_loading: true,
            generation: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileFormAction {
    /// The identity went away (or never arrived) for this generation
    NoIdentity { generation: u64 },
    LoadStarted { generation: u64 },
    Loaded { generation: u64, record: Option<ProfileRecord> },
    LoadFailed { generation: u64 },
    FieldChanged { field: ProfileField, value: String },
}

impl ProfileFormState {
    /// Applies an action and returns the resulting state
    pub fn apply(&self, action: ProfileFormAction) -> Self {
        match action {
            ProfileFormAction::NoIdentity { generation } => Self {
                is_loading: false,
                generation: generation.max(self.generation),
                ..self.clone()
            },
            ProfileFormAction::LoadStarted { generation } => Self {
                generation: generation.max(self.generation),
                ..self.clone()
            },
            ProfileFormAction::Loaded { generation, record } => {
                if !self.is_current(generation) {
                    debug!("Discarding stale profile load (generation {} < {})", generation, self.generation);
                    return self.clone();
                }
                Self {
                    form: record.unwrap_or_default(),
                    is_loading: false,
                    generation,
                }
            }
            ProfileFormAction::LoadFailed { generation } => {
                if !self.is_current(generation) {
                    debug!("Ignoring failure of stale profile load (generation {})", generation);
                    return self.clone();
                }
                Self {
                    is_loading: false,
                    ..self.clone()
                }
            }
            ProfileFormAction::FieldChanged { field, value } => {
                let mut form = self.form.clone();
                form.set(field, value);
                Self { form, ..self.clone() }
            }
        }
    }

    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}
