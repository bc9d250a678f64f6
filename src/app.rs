use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::AppConfig;
use crate::features::auth::{provide_auth, RequireUser};
use crate::pages::{Home, NotFound, Private};

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_context(config);

    // The subscription belongs to this component and is released with it
    let auth = provide_auth();

    view! {
        <Show
            when=move || !auth.with(|state| state.is_fetching())
            fallback=|| view! { <h2>"Loading......"</h2> }
        >
            <Router>
                <main class="app">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=Home />
                        <Route
                            path=path!("/private")
                            view=|| view! {
                                <RequireUser>
                                    <Private />
                                </RequireUser>
                            }
                        />
                    </Routes>
                </main>
            </Router>
        </Show>
    }
}
