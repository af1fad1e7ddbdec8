//! The profile load/save round trip, independent of how requests are sent
//! or how the user is notified.

use std::rc::Rc;
use async_trait::async_trait;
use log::{debug, error, info};
use crate::dto::profile::SaveProfileRequest;
use crate::error::{Result, SharedError};
use crate::form_state::ProfileFormAction;
use crate::models::profile::ProfileRecord;

pub const SAVE_SUCCESS_MESSAGE: &str = "Profile saved successfully!";
pub const SAVE_FAILURE_MESSAGE: &str = "Error saving profile";

/// Access to the external profile service
#[cfg_attr(test, mockall::automock)]
#[async_trait(?Send)]
pub trait ProfileApi {
    /// Fetches the profile stored for `wallet`, `None` if there is none yet
    async fn fetch_profile(&self, wallet: &str) -> Result<Option<ProfileRecord>>;

    /// Creates or replaces the profile described by `request`
    async fn save_profile(&self, request: &SaveProfileRequest) -> Result<()>;
}

/// User-facing notifications
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn success(&self, message: &str);
    /// Must block or otherwise make sure the user sees it
    fn failure(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// No wallet connected, nothing was sent
    Skipped,
    Saved,
    Failed(SharedError),
}

#[derive(Clone)]
pub struct ProfileSession {
    api: Rc<dyn ProfileApi>,
    notifier: Rc<dyn Notifier>,
}

impl ProfileSession {
    pub fn new(api: Rc<dyn ProfileApi>, notifier: Rc<dyn Notifier>) -> Self {
        Self { api, notifier }
    }

    /// Loads the profile for `wallet` as load attempt `generation` and
    /// returns the action that completes the attempt. Failures are logged
    /// and never surfaced to the user.
    pub async fn load(&self, wallet: Option<&str>, generation: u64) -> ProfileFormAction {
        let Some(wallet) = wallet else {
            debug!("No wallet connected, skipping profile load");
            return ProfileFormAction::NoIdentity { generation };
        };

        debug!("Loading profile for wallet {} (generation {})", wallet, generation);
        match self.api.fetch_profile(wallet).await {
            Ok(record) => {
                debug!("Profile load finished, record present: {}", record.is_some());
                ProfileFormAction::Loaded { generation, record }
            }
            Err(e) => {
                error!("Error fetching user data: {}", e);
                ProfileFormAction::LoadFailed { generation }
            }
        }
    }

    /// Sends the whole form for `wallet`. The form itself is never
    /// modified, so a failed save leaves the user's edits in place.
    pub async fn save(&self, wallet: Option<&str>, form: &ProfileRecord) -> SaveOutcome {
        let Some(wallet) = wallet else {
            return SaveOutcome::Skipped;
        };

        match self.try_save(wallet, form).await {
            Ok(()) => {
                info!("Profile saved for wallet {}", wallet);
                self.notifier.success(SAVE_SUCCESS_MESSAGE);
                SaveOutcome::Saved
            }
            Err(e) => {
                error!("Error saving profile: {}", e);
                self.notifier.failure(SAVE_FAILURE_MESSAGE);
                SaveOutcome::Failed(e)
            }
        }
    }

    async fn try_save(&self, wallet: &str, form: &ProfileRecord) -> Result<()> {
        let request = SaveProfileRequest::from_form(form, wallet)?;
        self.api.save_profile(&request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form_state::ProfileFormState;
    use crate::models::profile::ProfileField;
    use pretty_assertions::assert_eq;

    fn session(api: MockProfileApi, notifier: MockNotifier) -> ProfileSession {
        ProfileSession::new(Rc::new(api), Rc::new(notifier))
    }

    fn loaded_form() -> ProfileRecord {
        ProfileRecord {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            residence: "London".to_string(),
            birth_date: "1990-05-14".to_string(),
        }
    }

    #[tokio::test]
    async fn test_load_without_wallet_issues_no_request() {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile().times(0);
        let session = session(api, MockNotifier::new());

        let action = session.load(None, 1).await;
        let state = ProfileFormState::default().apply(action);

        assert!(!state.is_loading);
        assert!(state.form.is_empty());
    }

    #[tokio::test]
    async fn test_load_populates_form_with_display_date() {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile()
            .withf(|wallet| wallet.to_string() == "0xABC123")
            .times(1)
            .returning(|_| {
                crate::dto::profile::ProfileDto::parse_body(
                    r#"{"nombre":"Ada","apellido":"Lovelace","email":"ada@example.com","fechaNacimiento":"1990-05-14T00:00:00.000Z"}"#,
                )
            });
        let session = session(api, MockNotifier::new());

        let action = session.load(Some("0xABC123"), 1).await;
        let state = ProfileFormState::default()
            .apply(ProfileFormAction::LoadStarted { generation: 1 })
            .apply(action);

        assert!(!state.is_loading);
        assert_eq!(state.form.birth_date, "1990-05-14");
        assert_eq!(state.form.first_name, "Ada");
    }

    #[tokio::test]
    async fn test_load_without_record_leaves_fields_empty() {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile().times(1).returning(|_| Ok(None));
        let session = session(api, MockNotifier::new());

        let action = session.load(Some("0xABC123"), 1).await;
        let state = ProfileFormState::default()
            .apply(ProfileFormAction::LoadStarted { generation: 1 })
            .apply(action);

        assert!(!state.is_loading);
        for field in ProfileField::ALL {
            assert_eq!(state.form.get(field), "");
        }
    }

    #[tokio::test]
    async fn test_failed_load_still_finishes_loading() {
        let mut api = MockProfileApi::new();
        api.expect_fetch_profile()
            .times(1)
            .returning(|_| Err(SharedError::Network("connection refused".to_string())));
        let mut notifier = MockNotifier::new();
        notifier.expect_failure().times(0);
        let session = session(api, notifier);

        let action = session.load(Some("0xABC123"), 1).await;
        assert_eq!(action, ProfileFormAction::LoadFailed { generation: 1 });

        let state = ProfileFormState::default()
            .apply(ProfileFormAction::LoadStarted { generation: 1 })
            .apply(action);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_save_sends_exactly_one_request_tagged_with_wallet() {
        let mut api = MockProfileApi::new();
        api.expect_save_profile()
            .withf(|request| {
                request.email == "a@b.com"
                    && request.wallet == "0xABC123"
                    && request.owner == "0xABC123"
                    && request.birth_date == "1990-05-14T00:00:00.000Z"
            })
            .times(1)
            .returning(|_| Ok(()));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .withf(|message| message.to_string() == SAVE_SUCCESS_MESSAGE)
            .times(1)
            .return_const(());
        notifier.expect_failure().times(0);
        let session = session(api, notifier);

        let state = ProfileFormState::default()
            .apply(ProfileFormAction::Loaded { generation: 0, record: Some(loaded_form()) })
            .apply(ProfileFormAction::FieldChanged {
                field: ProfileField::Email,
                value: "a@b.com".to_string(),
            });

        let outcome = session.save(Some("0xABC123"), &state.form).await;
        assert_eq!(outcome, SaveOutcome::Saved);
    }

    #[tokio::test]
    async fn test_rejected_save_notifies_failure() {
        let mut api = MockProfileApi::new();
        api.expect_save_profile()
            .times(1)
            .returning(|_| Err(SharedError::Http { status: 500 }));
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(0);
        notifier
            .expect_failure()
            .withf(|message| message.to_string() == SAVE_FAILURE_MESSAGE)
            .times(1)
            .return_const(());
        let session = session(api, notifier);

        let outcome = session.save(Some("0xABC123"), &loaded_form()).await;

        assert_eq!(outcome, SaveOutcome::Failed(SharedError::Http { status: 500 }));
    }

    #[tokio::test]
    async fn test_save_without_wallet_does_nothing() {
        let mut api = MockProfileApi::new();
        api.expect_save_profile().times(0);
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(0);
        notifier.expect_failure().times(0);
        let session = session(api, notifier);

        assert_eq!(session.save(None, &loaded_form()).await, SaveOutcome::Skipped);
    }

    #[tokio::test]
    async fn test_invalid_form_fails_without_request() {
        let mut api = MockProfileApi::new();
        api.expect_save_profile().times(0);
        let mut notifier = MockNotifier::new();
        notifier.expect_failure().times(1).return_const(());
        let session = session(api, notifier);

        let mut form = loaded_form();
        form.birth_date.clear();

        let outcome = session.save(Some("0xABC123"), &form).await;
        assert!(matches!(outcome, SaveOutcome::Failed(SharedError::InvalidDate(_))));
    }
}
