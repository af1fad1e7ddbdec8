use std::ops::Deref;
use std::rc::Rc;
use log::debug;
use shared::{
    short_address, IdentityContext, Notifier, ProfileApi, ProfileField, ProfileFormAction,
    ProfileFormState, ProfileSession,
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use crate::api::users::HttpProfileApi;
use crate::components::toast::ToastContext;
use crate::notifier::BrowserNotifier;

/// Profile service handle passed to [`ProfileForm`].
///
/// Two handles are equal when they point at the same client.
#[derive(Clone)]
pub struct ProfileClient(pub Rc<dyn ProfileApi>);

impl ProfileClient {
    pub fn new(api: impl ProfileApi + 'static) -> Self {
        Self(Rc::new(api))
    }
}

impl Default for ProfileClient {
    fn default() -> Self {
        Self::new(HttpProfileApi)
    }
}

impl PartialEq for ProfileClient {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Notification sink passed to [`ProfileForm`], compared by handle like
/// [`ProfileClient`]
#[derive(Clone)]
pub struct NotifierHandle(pub Rc<dyn Notifier>);

impl PartialEq for NotifierHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Yew store around the form state machine
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileFormStore(pub ProfileFormState);

impl Deref for ProfileFormStore {
    type Target = ProfileFormState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for ProfileFormStore {
    type Action = ProfileFormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new(Self(self.0.apply(action)))
    }
}

#[derive(Properties, PartialEq)]
pub struct ProfileFormProps {
    pub identity: IdentityContext,
    #[prop_or_default]
    pub client: ProfileClient,
    /// Defaults to toasts from the surrounding `ToastProvider` plus `alert`
    #[prop_or_default]
    pub notifier: Option<NotifierHandle>,
}

const INPUT_CLASSES: &str = "w-full px-3 py-2 bg-[#F7F7F8] border border-gray-200 rounded-lg text-black focus:border-[#635BFF]";

#[function_component(ProfileForm)]
pub fn profile_form(props: &ProfileFormProps) -> Html {
    let toast_context = use_context::<ToastContext>();
    let state = use_reducer(ProfileFormStore::default);
    let load_generation = use_mut_ref(|| 0u64);
    let saving = use_state(|| false);

    let wallet = props.identity.active_wallet().map(str::to_string);
    let notifier: Rc<dyn Notifier> = match &props.notifier {
        Some(handle) => handle.0.clone(),
        None => Rc::new(BrowserNotifier::new(toast_context.map(|context| context.add_toast))),
    };
    let session = ProfileSession::new(props.client.0.clone(), notifier);

    // Reload whenever the active wallet changes
    {
        let state = state.clone();
        let session = session.clone();
        let load_generation = load_generation.clone();
        use_effect_with(wallet.clone(), move |wallet| {
            let generation = {
                let mut current = load_generation.borrow_mut();
                *current += 1;
                *current
            };
            state.dispatch(ProfileFormAction::LoadStarted { generation });

            let wallet = wallet.clone();
            spawn_local(async move {
                let action = session.load(wallet.as_deref(), generation).await;
                state.dispatch(action);
            });
            || ()
        });
    }

    let on_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let Some(input) = e.target_dyn_into::<HtmlInputElement>() else {
                return;
            };
            match ProfileField::from_wire_name(&input.name()) {
                Some(field) => state.dispatch(ProfileFormAction::FieldChanged {
                    field,
                    value: input.value(),
                }),
                None => debug!("Ignoring input from unknown field {}", input.name()),
            }
        })
    };

    let on_submit = {
        let form = state.form.clone();
        let wallet = wallet.clone();
        let session = session.clone();
        let saving = saving.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if wallet.is_none() {
                return;
            }

            let form = form.clone();
            let wallet = wallet.clone();
            let session = session.clone();
            let saving = saving.clone();
            saving.set(true);
            spawn_local(async move {
                session.save(wallet.as_deref(), &form).await;
                saving.set(false);
            });
        })
    };

    if !props.identity.authenticated {
        return html! {
            <div class="flex items-center justify-center h-64">
                <p class="text-gray-400">{"Please connect your wallet to view and edit your profile"}</p>
            </div>
        };
    }

    if state.is_loading {
        return html! {
            <div class="flex items-center justify-center h-64">
                <p class="text-gray-400">{"Loading profile data..."}</p>
            </div>
        };
    }

    let header_address = wallet.as_deref().map(short_address).unwrap_or_default();

    html! {
        <div class="space-y-8 px-4 py-8 profile-settings">
            <h1 class="text-center text-base font-medium mb-10">{"Profile Settings"}</h1>
            <div class="max-w-2xl mx-auto">
                <form onsubmit={on_submit}>
                    <div class="rounded-2xl shadow-lg p-8 bg-white">
                        <div class="flex items-center mb-8">
                            <div class="w-16 h-16 bg-[#635BFF] rounded-full flex items-center justify-center text-white text-2xl font-bold mr-4">
                                {"👤"}
                            </div>
                            <div>
                                <h2 class="text-2xl font-bold">{"Your Profile"}</h2>
                                <p class="text-[#635BFF] font-medium">{header_address}</p>
                            </div>
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {for ProfileField::ALL.iter().map(|field| html! {
                                <div key={field.wire_name()}>
                                    <label for={field.wire_name()} class="block text-gray-400 text-sm font-medium mb-2">
                                        {field.label()}
                                    </label>
                                    <input
                                        id={field.wire_name()}
                                        type={field.input_type()}
                                        name={field.wire_name()}
                                        value={state.form.get(*field).to_string()}
                                        oninput={on_input.clone()}
                                        placeholder={field.placeholder().map(AttrValue::from)}
                                        required={field.is_required()}
                                        class={INPUT_CLASSES}
                                    />
                                </div>
                            })}
                        </div>

                        <button
                            type="submit"
                            disabled={*saving}
                            class="mt-8 w-full rounded-full bg-[#635BFF] hover:bg-[#7d4875] disabled:opacity-50 text-white py-3 px-4 font-bold flex items-center justify-center space-x-2 transition"
                        >
                            <span>{if *saving { "Saving..." } else { "Save Changes" }}</span>
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
