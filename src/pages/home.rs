use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::core::config::AppConfig;
use crate::core::services::{notify, sign_in};
use crate::features::auth::use_auth;

#[component]
pub fn Home() -> impl IntoView {
    let auth = use_auth();
    let config = use_context::<AppConfig>().unwrap_or_default();
    let navigate = use_navigate();

    // Set while a sign-in started here is waiting for the provider to report
    // the new user; the board is only reachable once that report arrives
    let (awaiting_user, set_awaiting_user) = signal(false);

    Effect::new(move |_| {
        if awaiting_user.get() && auth.with(|state| state.is_signed_in()) {
            set_awaiting_user.set(false);
            navigate("/private", Default::default());
        }
    });

    let handle_signin = move |_| {
        spawn_local(async move {
            match sign_in().await {
                Ok(()) => set_awaiting_user.set(true),
                Err(e) => {
                    log::error!("Sign in failed: {}", e);
                    notify(&e.to_string());
                }
            }
        });
    };

    view! {
        <div class="home-container">
            <h1>{config.title}</h1>
            <Show
                when=move || auth.with(|state| state.is_signed_in())
                fallback=move || view! {
                    <button class="signin-button" on:click=handle_signin>"Sign in"</button>
                }
            >
                <p class="signed-in-as">
                    "Signed in as "
                    {move || auth.with(|state| state.user().map(|u| u.label().to_string()).unwrap_or_default())}
                </p>
                <A href="/private">"Open board"</A>
            </Show>
        </div>
    }
}
