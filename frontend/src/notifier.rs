use log::warn;
use shared::Notifier;
use yew::Callback;
use crate::components::toast::{Toast, ToastType};

/// Shows successes as toasts and failures as a blocking `alert`.
///
/// Without a toast sink (no `ToastProvider` above the page) successes fall
/// back to an alert too.
#[derive(Clone, Default)]
pub struct BrowserNotifier {
    add_toast: Option<Callback<Toast>>,
}

impl BrowserNotifier {
    pub fn new(add_toast: Option<Callback<Toast>>) -> Self {
        Self { add_toast }
    }

    fn alert(message: &str) {
        if web_sys::window().is_some() {
            gloo::dialogs::alert(message);
        } else {
            warn!("No window to show alert: {}", message);
        }
    }
}

impl Notifier for BrowserNotifier {
    fn success(&self, message: &str) {
        match &self.add_toast {
            Some(add_toast) => add_toast.emit(Toast::new(message, ToastType::Success)),
            None => Self::alert(message),
        }
    }

    fn failure(&self, message: &str) {
        Self::alert(message);
        if let Some(add_toast) = &self.add_toast {
            add_toast.emit(Toast::new(message, ToastType::Error).with_duration(8000));
        }
    }
}
