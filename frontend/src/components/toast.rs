use std::rc::Rc;
use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

pub const DEFAULT_TOAST_DURATION_MS: u32 = 5000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-green-500 border-green-600",
            ToastType::Error => "bg-red-500 border-red-600",
            ToastType::Info => "bg-[#635BFF] border-[#4b44d6]",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    pub duration: Option<u32>, // milliseconds, None for manual dismiss
}

impl Toast {
    pub fn new(message: impl Into<String>, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            toast_type,
            duration: Some(DEFAULT_TOAST_DURATION_MS),
        }
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn persistent(mut self) -> Self {
        self.duration = None;
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

/// Toasts currently on screen, oldest first
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastQueue(pub Vec<Toast>);

pub enum ToastAction {
    Add(Toast),
    Remove(Uuid),
}

impl Reducible for ToastQueue {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            ToastAction::Add(toast) => {
                let mut toasts = self.0.clone();
                toasts.push(toast);
                Rc::new(Self(toasts))
            }
            ToastAction::Remove(id) => {
                if !self.0.iter().any(|t| t.id == id) {
                    return self;
                }
                Rc::new(Self(self.0.iter().filter(|t| t.id != id).cloned().collect()))
            }
        }
    }
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_reducer(ToastQueue::default);

    let add_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;
            dispatcher.dispatch(ToastAction::Add(toast));

            // Removal goes through the reducer so it sees toasts added after this one
            if let Some(duration_ms) = duration {
                let dispatcher = dispatcher.clone();
                Timeout::new(duration_ms, move || {
                    dispatcher.dispatch(ToastAction::Remove(toast_id));
                })
                .forget();
            }
        })
    };

    let remove_toast = {
        let dispatcher = queue.dispatcher();
        Callback::from(move |id: Uuid| dispatcher.dispatch(ToastAction::Remove(id)))
    };

    let context = ToastContext {
        toasts: queue.0.clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            <div class="toast-container">
                {props.children.clone()}
                <ToastList />
            </div>
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let Some(toast_context) = use_context::<ToastContext>() else {
        return html! {};
    };

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>();

    let on_close = {
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            if let Some(context) = &toast_context {
                context.remove_toast.emit(toast_id);
            }
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4", "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <div class="flex-shrink-0 mr-3">
                <span class="text-lg font-bold">{props.toast.toast_type.icon()}</span>
            </div>
            <div class="flex-1">
                <p class="text-sm font-medium">{&props.toast.message}</p>
            </div>
            <div class="flex-shrink-0 ml-3">
                <button
                    onclick={on_close}
                    class="text-white hover:text-gray-200 focus:outline-none transition-colors duration-200"
                >
                    <span class="text-lg">{"×"}</span>
                </button>
            </div>
        </div>
    }
}
