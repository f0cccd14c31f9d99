use leptos::prelude::*;
use std::sync::Arc;

use super::{api, storage};
use crate::shared::resource::client::TokenProvider;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: Option<String>,
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the previous session before the first render; no token means
    // the login screen.
    let (auth_state, set_auth_state) = signal(AuthState {
        token: storage::get_token(),
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Token source for API clients built under this provider. Reads the signal
/// untracked: issuing a request must not subscribe the caller to auth
/// changes.
pub fn token_provider() -> TokenProvider {
    let (auth_state, _) = use_auth();
    Arc::new(move || auth_state.get_untracked().token)
}

/// Helper: Perform sign-in
pub async fn do_signin(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::signin(email, password).await?;

    storage::save_token(&response.token);
    set_auth_state.set(AuthState {
        token: Some(response.token),
    });

    Ok(())
}

/// Helper: Perform logout
pub fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_token();
    set_auth_state.set(AuthState::default());
}
