//! Bridge to the browser wallet injected as `window.ethereum`.

use js_sys::{Array, Function, Object, Promise, Reflect};
use shared::ConnectedWallet;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            Reflect::get(&value, &JsValue::from_str("message"))
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// Asks the browser wallet for its accounts, prompting the user if needed
pub async fn request_accounts() -> Result<Vec<ConnectedWallet>, String> {
    let window = web_sys::window().ok_or_else(|| "No window available".to_string())?;
    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).map_err(js_error)?;
    if ethereum.is_undefined() || ethereum.is_null() {
        return Err("No browser wallet found".to_string());
    }

    let request = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(js_error)?
        .dyn_into::<Function>()
        .map_err(|_| "Browser wallet does not support requests".to_string())?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str("eth_requestAccounts"))
        .map_err(js_error)?;

    let promise = request
        .call1(&ethereum, &args)
        .map_err(js_error)?
        .dyn_into::<Promise>()
        .map_err(|_| "Browser wallet returned no promise".to_string())?;
    let accounts = JsFuture::from(promise).await.map_err(js_error)?;

    Ok(wallets_from_accounts(
        Array::from(&accounts).iter().map(|account| account.as_string()),
    ))
}

/// Keeps non-empty string accounts, in the order the wallet reported them
pub fn wallets_from_accounts(accounts: impl IntoIterator<Item = Option<String>>) -> Vec<ConnectedWallet> {
    accounts
        .into_iter()
        .flatten()
        .map(|address| address.trim().to_string())
        .filter(|address| !address.is_empty())
        .map(ConnectedWallet::new)
        .collect()
}
