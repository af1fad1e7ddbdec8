use std::rc::Rc;
use pretty_assertions::assert_eq;
use shared::{ConnectedWallet, ProfileField, ProfileFormAction, ProfileRecord};
use yew::Reducible;
use crate::api::api_url;
use crate::api::users::{user_profile_url, HttpProfileApi};
use crate::components::profile_form::{NotifierHandle, ProfileClient, ProfileFormStore};
use crate::notifier::BrowserNotifier;
use crate::components::toast::{Toast, ToastAction, ToastQueue, ToastType, DEFAULT_TOAST_DURATION_MS};
use crate::config::Config;
use crate::identity::{IdentityAction, IdentityState};
use crate::wallet::wallets_from_accounts;

#[test]
fn test_api_url_is_relative_by_default() {
    assert_eq!(Config::api_base_url(), "");
    assert_eq!(api_url("/api/users"), "/api/users");
}

#[test]
fn test_user_profile_url_encodes_wallet() {
    assert_eq!(user_profile_url("0xABC123"), "/api/users?wallet=0xABC123");
    assert_eq!(user_profile_url("a b&c"), "/api/users?wallet=a%20b%26c");
}

#[test]
fn test_log_level_follows_build_profile() {
    let expected = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    assert_eq!(Config::log_level(), expected);
}

#[test]
fn test_wallets_from_accounts_skips_blank_and_non_string_entries() {
    let wallets = wallets_from_accounts(vec![
        Some("0xABC123".to_string()),
        None,
        Some("   ".to_string()),
        Some(" 0xDEF456 ".to_string()),
    ]);

    assert_eq!(
        wallets,
        vec![ConnectedWallet::new("0xABC123"), ConnectedWallet::new("0xDEF456")]
    );
}

#[test]
fn test_toast_defaults() {
    let toast = Toast::new("Profile saved successfully!", ToastType::Success);
    assert_eq!(toast.duration, Some(DEFAULT_TOAST_DURATION_MS));
    assert_eq!(toast.message, "Profile saved successfully!");

    assert_eq!(toast.clone().with_duration(8000).duration, Some(8000));
    assert_eq!(toast.persistent().duration, None);
}

#[test]
fn test_toasts_get_distinct_ids() {
    let a = Toast::new("a", ToastType::Info);
    let b = Toast::new("a", ToastType::Info);
    assert_ne!(a.id, b.id);
}

#[test]
fn test_expiring_toast_keeps_later_toasts() {
    let saved = Toast::new("Profile saved successfully!", ToastType::Success);
    let failed = Toast::new("Error saving profile", ToastType::Error).with_duration(8000);
    let saved_id = saved.id;

    let queue = Rc::new(ToastQueue::default())
        .reduce(ToastAction::Add(saved))
        .reduce(ToastAction::Add(failed.clone()));
    let queue = queue.reduce(ToastAction::Remove(saved_id));

    assert_eq!(queue.0, vec![failed]);
}

#[test]
fn test_dismissed_toast_stays_dismissed() {
    let persistent = Toast::new("Wallet error", ToastType::Error).persistent();
    let timed = Toast::new("Disconnected", ToastType::Info);
    let (persistent_id, timed_id) = (persistent.id, timed.id);

    let queue = Rc::new(ToastQueue::default())
        .reduce(ToastAction::Add(persistent))
        .reduce(ToastAction::Add(timed))
        .reduce(ToastAction::Remove(persistent_id))
        .reduce(ToastAction::Remove(timed_id));

    assert!(queue.0.is_empty());
}

#[test]
fn test_removing_unknown_toast_is_a_no_op() {
    let queue = Rc::new(ToastQueue::default()).reduce(ToastAction::Add(Toast::new("a", ToastType::Info)));
    let after = queue.clone().reduce(ToastAction::Remove(uuid::Uuid::new_v4()));

    assert!(Rc::ptr_eq(&queue, &after));
}

#[test]
fn test_profile_form_store_applies_actions() {
    let store = Rc::new(ProfileFormStore::default());
    assert!(store.is_loading);

    let store = store.reduce(ProfileFormAction::LoadStarted { generation: 1 });
    let store = store.reduce(ProfileFormAction::Loaded {
        generation: 1,
        record: Some(ProfileRecord {
            first_name: "Ada".to_string(),
            ..Default::default()
        }),
    });
    let store = store.reduce(ProfileFormAction::FieldChanged {
        field: ProfileField::Email,
        value: "a@b.com".to_string(),
    });

    assert!(!store.is_loading);
    assert_eq!(store.form.first_name, "Ada");
    assert_eq!(store.form.email, "a@b.com");
}

#[test]
fn test_profile_client_equality_is_by_handle() {
    let client = ProfileClient::new(HttpProfileApi);
    let same = client.clone();
    let other = ProfileClient::new(HttpProfileApi);

    assert!(client == same);
    assert!(client != other);
}

#[test]
fn test_notifier_handle_equality_is_by_handle() {
    let handle = NotifierHandle(Rc::new(BrowserNotifier::default()));
    let other = NotifierHandle(Rc::new(BrowserNotifier::default()));

    assert!(handle == handle.clone());
    assert!(handle != other);
}

#[test]
fn test_identity_connect_flow_without_storage() {
    let state = Rc::new(IdentityState::default());
    assert!(!state.context().authenticated);

    let state = state.reduce(IdentityAction::Connect);
    assert!(state.connecting);

    let state = state.reduce(IdentityAction::ConnectFailed("No browser wallet found".to_string()));
    assert!(!state.connecting);
    assert_eq!(state.error.as_deref(), Some("No browser wallet found"));
    assert_eq!(state.context().active_wallet(), None);
}

#[test]
fn test_identity_context_uses_first_wallet() {
    let state = IdentityState {
        wallets: vec![ConnectedWallet::new("0xABC123"), ConnectedWallet::new("0xDEF456")],
        ..Default::default()
    };
    let identity = state.context();
    assert!(identity.authenticated);
    assert_eq!(identity.active_wallet(), Some("0xABC123"));
}
