use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::features::auth::hooks::use_auth;

// Renders its children only while someone is signed in, otherwise sends the
// visitor back to the landing page
#[component]
pub fn RequireUser(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || auth.with(|state| state.is_signed_in())
            fallback=|| view! { <Redirect path="/" /> }
        >
            {children()}
        </Show>
    }
}
