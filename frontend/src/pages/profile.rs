use yew::prelude::*;
use crate::components::profile_form::{ProfileClient, ProfileForm};
use crate::identity::WalletSession;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let wallet_session = use_context::<WalletSession>().expect("Wallet session not found");
    // One client for the lifetime of the page so the form is not re-rendered for a new handle
    let client = use_memo((), |_| ProfileClient::default());

    html! {
        <ProfileForm identity={wallet_session.identity()} client={(*client).clone()} />
    }
}
