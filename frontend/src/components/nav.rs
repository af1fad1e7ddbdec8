use yew::prelude::*;
use yew_router::prelude::*;
use shared::short_address;
use crate::components::toast::{Toast, ToastContext, ToastType};
use crate::identity::WalletSession;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let wallet_session = use_context::<WalletSession>().expect("Wallet session not found");
    let toast_context = use_context::<ToastContext>();
    let current_route = use_route::<Route>().unwrap_or(Route::Profile);

    // Surface connection failures once per error
    {
        let toast_context = toast_context.clone();
        use_effect_with(wallet_session.state.error.clone(), move |error| {
            if let (Some(message), Some(toasts)) = (error, toast_context) {
                toasts.add_toast.emit(Toast::new(message.clone(), ToastType::Error).persistent());
            }
            || ()
        });
    }

    let on_connect_click = {
        let connect = wallet_session.connect.clone();
        Callback::from(move |_: MouseEvent| connect.emit(()))
    };

    let on_disconnect_click = {
        let disconnect = wallet_session.disconnect.clone();
        Callback::from(move |_: MouseEvent| {
            disconnect.emit(());
            if let Some(toasts) = &toast_context {
                toasts.add_toast.emit(Toast::new("Wallet disconnected", ToastType::Info));
            }
        })
    };

    let identity = wallet_session.identity();

    html! {
        <nav class={classes!(
            "sticky", "top-0", "z-50", "bg-gradient-to-r", "from-slate-800", "to-[#635BFF]",
            "text-white", "shadow-lg"
        )}>
            <div class={classes!("max-w-7xl", "mx-auto", "px-4", "sm:px-6", "lg:px-8")}>
                <div class={classes!("flex", "justify-between", "h-16", "items-center")}>
                    <div class={classes!("flex", "items-center", "space-x-6")}>
                        <Link<Route>
                            to={Route::Profile}
                            classes={classes!(
                                "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                "transition-colors", "duration-200", "min-h-[44px]", "flex", "items-center",
                                if current_route == Route::Profile {
                                    classes!("bg-white/20", "text-white")
                                } else {
                                    classes!("text-white/90", "hover:bg-white/10", "hover:text-white")
                                }
                            )}
                        >
                            {"Profile"}
                        </Link<Route>>
                    </div>

                    <div class={classes!("flex", "items-center", "space-x-4")}>
                        if let Some(address) = identity.active_wallet() {
                            <span class={classes!("text-sm", "text-white/90", "font-mono")}>{short_address(address)}</span>
                            <button
                                onclick={on_disconnect_click}
                                class={classes!("px-3", "py-2", "rounded-md", "text-sm", "font-medium", "bg-white/10", "hover:bg-white/20")}
                            >
                                {"Disconnect"}
                            </button>
                        } else {
                            <button
                                onclick={on_connect_click}
                                disabled={wallet_session.state.connecting}
                                class={classes!(
                                    "px-3", "py-2", "rounded-md", "text-sm", "font-medium",
                                    "bg-white", "text-[#635BFF]", "hover:brightness-105", "disabled:opacity-50"
                                )}
                            >
                                {if wallet_session.state.connecting { "Connecting..." } else { "Connect Wallet" }}
                            </button>
                        }
                    </div>
                </div>
            </div>
        </nav>
    }
}
