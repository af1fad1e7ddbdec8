pub mod models {
    pub mod identity;
    pub mod profile;
}

pub mod dto {
    pub mod common;
    pub mod profile;
}

pub mod birth_date;
pub mod error;
pub mod form_state;
pub mod session;

// Re-export commonly used items
pub use error::{SharedError, Result};

// Re-export models
pub use models::{
    identity::{ConnectedWallet, IdentityContext, short_address},
    profile::{ProfileField, ProfileRecord},
};

// Re-export DTOs
pub use dto::{
    common::ErrorResponse,
    profile::{ProfileDto, SaveProfileRequest},
};

pub use form_state::{ProfileFormAction, ProfileFormState};
pub use session::{Notifier, ProfileApi, ProfileSession, SaveOutcome};
