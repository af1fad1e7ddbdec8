use shared::{ConnectedWallet, IdentityContext};
use log::{error, info};
use yew::prelude::*;
use yew::functional::use_reducer_eq;
use gloo_storage::{LocalStorage, Storage};
use wasm_bindgen_futures::spawn_local;
use crate::wallet;
use std::rc::Rc;

pub const WALLETS_KEY: &str = "wallets";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct IdentityState {
    pub wallets: Vec<ConnectedWallet>,
    pub connecting: bool,
    pub error: Option<String>,
}

impl IdentityState {
    /// State restored from the wallets saved by the last connection
    pub fn restored() -> Self {
        Self {
            wallets: LocalStorage::get(WALLETS_KEY).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// The identity value handed to pages that need the wallet
    pub fn context(&self) -> IdentityContext {
        IdentityContext::connected(self.wallets.clone())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum IdentityAction {
    Connect,
    Connected(Vec<ConnectedWallet>),
    ConnectFailed(String),
    Disconnect,
}

impl Reducible for IdentityState {
    type Action = IdentityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            IdentityAction::Connect => {
                Rc::new(Self {
                    connecting: true,
                    error: None,
                    ..(*self).clone()
                })
            }
            IdentityAction::Connected(wallets) => {
                if let Err(e) = LocalStorage::set(WALLETS_KEY, &wallets) {
                    error!("Failed to store wallets in local storage: {}", e);
                }
                Rc::new(Self {
                    wallets,
                    connecting: false,
                    error: None,
                })
            }
            IdentityAction::ConnectFailed(error) => {
                Rc::new(Self {
                    connecting: false,
                    error: Some(error),
                    ..(*self).clone()
                })
            }
            IdentityAction::Disconnect => {
                LocalStorage::delete(WALLETS_KEY);
                Rc::new(Self::default())
            }
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct IdentityProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Wallet session shared through the component tree
#[derive(Clone, Debug, PartialEq)]
pub struct WalletSession {
    pub state: IdentityState,
    pub connect: Callback<()>,
    pub disconnect: Callback<()>,
}

impl WalletSession {
    pub fn identity(&self) -> IdentityContext {
        self.state.context()
    }
}

#[function_component(IdentityProvider)]
pub fn identity_provider(props: &IdentityProviderProps) -> Html {
    // Storage is only read when the provider first mounts
    let identity = use_reducer_eq(IdentityState::restored);

    let connect = {
        let identity = identity.clone();
        Callback::from(move |_: ()| {
            let identity = identity.clone();
            identity.dispatch(IdentityAction::Connect);
            spawn_local(async move {
                match wallet::request_accounts().await {
                    Ok(wallets) if !wallets.is_empty() => {
                        info!("Connected {} wallet(s)", wallets.len());
                        identity.dispatch(IdentityAction::Connected(wallets));
                    }
                    Ok(_) => {
                        identity.dispatch(IdentityAction::ConnectFailed("No accounts available".to_string()));
                    }
                    Err(e) => {
                        error!("Failed to connect wallet: {}", e);
                        identity.dispatch(IdentityAction::ConnectFailed(e));
                    }
                }
            });
        })
    };

    let disconnect = {
        let identity = identity.clone();
        Callback::from(move |_: ()| {
            identity.dispatch(IdentityAction::Disconnect);
        })
    };

    let context = WalletSession {
        state: (*identity).clone(),
        connect,
        disconnect,
    };

    html! {
        <ContextProvider<WalletSession> context={context}>
            {props.children.clone()}
        </ContextProvider<WalletSession>>
    }
}
