use leptos::prelude::*;
use send_wrapper::SendWrapper;

use crate::core::services::subscribe;
use crate::features::auth::state::AuthState;

/// Subscribes to the identity provider for the lifetime of the calling
/// component and shares the resulting state through context.
pub fn provide_auth() -> ReadSignal<AuthState> {
    let (auth, set_auth) = signal(AuthState::new());

    match subscribe(move |user| set_auth.update(|state| state.observe(user))) {
        Ok(subscription) => {
            // cleanup runs on the same thread that subscribed
            let subscription = SendWrapper::new(subscription);
            on_cleanup(move || drop(subscription));
        }
        Err(e) => {
            // Without a provider nobody can sign in; show the public page
            // rather than loading forever
            log::error!("Could not subscribe to auth state: {}", e);
            set_auth.update(|state| state.observe(None));
        }
    }

    provide_context(auth);
    auth
}

pub fn use_auth() -> ReadSignal<AuthState> {
    use_context::<ReadSignal<AuthState>>().expect("auth context")
}
