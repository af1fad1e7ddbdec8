use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::config::Config;
use crate::identity::IdentityProvider;
use crate::components::nav::Nav;
use crate::components::toast::ToastProvider;

pub mod api;
pub mod components;
pub mod config;
pub mod identity;
pub mod notifier;
pub mod wallet;
pub mod pages {
    pub mod not_found;
    pub mod profile;
}

use pages::{not_found::NotFound, profile::ProfilePage};

// Unit test modules only
#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <IdentityProvider>
                <BrowserRouter>
                    <div class="app-container min-h-screen bg-gradient-to-br from-[#f7f7f8] to-[#e0c3fc]">
                        <Nav />
                        <main class="flex-1">
                            <Switch<Route> render={switch} />
                        </main>
                    </div>
                </BrowserRouter>
            </IdentityProvider>
        </ToastProvider>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Profile} /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(Config::log_level()));
    console_error_panic_hook::set_once();
    info!("Logger and panic hook initialized");

    info!("Mounting application");
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Entry point Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
