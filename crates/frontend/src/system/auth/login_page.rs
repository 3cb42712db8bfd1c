use leptos::prelude::*;
use leptos::task::spawn_local;

use super::context::{do_login, do_register, use_auth};

/// Sign-in / sign-up page shown to unauthenticated visitors.
#[component]
pub fn LoginPage() -> impl IntoView {
    let (_, set_auth_state) = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (is_register, set_is_register) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (busy, set_busy) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get().trim().to_string();
        let password_value = password.get();
        if email_value.is_empty() || password_value.is_empty() {
            set_error.set(Some("Email and password are required".to_string()));
            return;
        }

        set_busy.set(true);
        set_error.set(None);
        let register = is_register.get();

        spawn_local(async move {
            let result = if register {
                do_register(set_auth_state, email_value, password_value).await
            } else {
                do_login(set_auth_state, email_value, password_value).await
            };

            if let Err(e) = result {
                set_error.set(Some(e));
            }
            set_busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <form class="login-card" on:submit=on_submit>
                <h1>"Synthetic Data Studio"</h1>
                <h2>{move || if is_register.get() { "Create account" } else { "Sign in" }}</h2>

                {move || {
                    error
                        .get()
                        .map(|msg| view! { <div class="form-error">{msg}</div> })
                }}

                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" disabled=busy>
                    {move || {
                        if busy.get() {
                            "Please wait..."
                        } else if is_register.get() {
                            "Create account"
                        } else {
                            "Sign in"
                        }
                    }}
                </button>

                <button
                    type="button"
                    class="btn-link"
                    on:click=move |_| {
                        set_is_register.update(|v| *v = !*v);
                        set_error.set(None);
                    }
                >
                    {move || {
                        if is_register.get() {
                            "Already have an account? Sign in"
                        } else {
                            "No account yet? Create one"
                        }
                    }}
                </button>
            </form>
        </div>
    }
}
