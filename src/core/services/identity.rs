use wasm_bindgen::prelude::*;

use crate::auth_bridge::{self, error_message, provider_installed};
use crate::core::error::AuthError;
use crate::core::models::User;

/// A live sign-in state subscription. Dropping it unsubscribes from the
/// provider and then frees the JS callback.
pub struct AuthSubscription {
    unsubscribe: js_sys::Function,
    _callback: Closure<dyn FnMut(JsValue)>,
}

impl Drop for AuthSubscription {
    fn drop(&mut self) {
        if let Err(e) = self.unsubscribe.call0(&JsValue::NULL) {
            log::warn!("Failed to unsubscribe from auth state: {}", error_message(&e));
        } else {
            log::debug!("Auth state subscription released");
        }
    }
}

pub fn subscribe(on_change: impl Fn(Option<User>) + 'static) -> Result<AuthSubscription, AuthError> {
    if !provider_installed() {
        return Err(AuthError::Unavailable);
    }

    let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
        on_change(User::from_js(value));
    });

    let unsubscribe = auth_bridge::on_auth_state_changed(&callback)
        .map_err(|e| AuthError::Provider(error_message(&e)))?;

    Ok(AuthSubscription {
        unsubscribe,
        _callback: callback,
    })
}

pub async fn sign_out() -> Result<(), AuthError> {
    if !provider_installed() {
        return Err(AuthError::Unavailable);
    }
    auth_bridge::sign_out_raw()
        .await
        .map(|_| ())
        .map_err(|e| AuthError::Provider(error_message(&e)))
}

pub async fn sign_in() -> Result<(), AuthError> {
    if !provider_installed() {
        return Err(AuthError::Unavailable);
    }
    auth_bridge::sign_in_raw()
        .await
        .map(|_| ())
        .map_err(|e| AuthError::Provider(error_message(&e)))
}
