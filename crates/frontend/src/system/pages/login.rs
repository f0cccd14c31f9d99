use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::context::{do_signin, use_auth};

#[component]
pub fn LoginPage(
    /// Switch to the registration screen
    on_show_signup: Callback<()>,
) -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get();
        let password_val = password.get();

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match do_signin(set_auth_state, email_val, password_val).await {
                Ok(()) => {
                    // Auth state flips; the shell takes over from here.
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Sign in failed: {e}")));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Farm Dashboard"</h1>
                <h2>"Sign In"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@example.com"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="login-switch">
                    "No account? "
                    <a href="#" on:click=move |ev| {
                        ev.prevent_default();
                        on_show_signup.run(());
                    }>
                        "Create one"
                    </a>
                </p>
            </div>
        </div>
    }
}
