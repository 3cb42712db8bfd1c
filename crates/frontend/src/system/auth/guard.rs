use leptos::prelude::*;

use super::context::use_auth;
use super::login_page::LoginPage;

/// Component that requires authentication.
/// Shows the login page until a session exists.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().access_token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            {children()}
        </Show>
    }
}
