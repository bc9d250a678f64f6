use wasm_bindgen::prelude::*;

// Bindings to the identity provider shim installed on `window.taskBoardAuth`
// by index.html. Every call is `catch` so a missing shim surfaces as Err
// instead of a trap.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "taskBoardAuth"], js_name = onAuthStateChanged, catch)]
    pub fn on_auth_state_changed(callback: &Closure<dyn FnMut(JsValue)>) -> Result<js_sys::Function, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "taskBoardAuth"], js_name = signOut, catch)]
    pub async fn sign_out_raw() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "taskBoardAuth"], js_name = signIn, catch)]
    pub async fn sign_in_raw() -> Result<JsValue, JsValue>;
}

pub fn provider_installed() -> bool {
    js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("taskBoardAuth"))
        .map(|value| !value.is_undefined() && !value.is_null())
        .unwrap_or(false)
}

// Rejections are usually Error-like objects; fall back to strings and then
// to the debug rendering of whatever came back
pub fn error_message(error: &JsValue) -> String {
    if let Some(message) = error.as_string() {
        return message;
    }
    js_sys::Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}
