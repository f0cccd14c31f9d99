use leptos::prelude::*;

use super::Screen;
use crate::system::auth::context::{do_logout, use_auth};

/// Top navigation: one button per record screen plus logout.
#[component]
pub fn Navbar() -> impl IntoView {
    let active = use_context::<RwSignal<Screen>>().expect("Screen context not found");
    let (_, set_auth_state) = use_auth();

    view! {
        <nav class="navbar">
            <span class="navbar__brand">"Farm Dashboard"</span>
            <div class="navbar__links">
                {Screen::ALL
                    .into_iter()
                    .map(|screen| {
                        view! {
                            <button
                                class="navbar__link"
                                class:navbar__link--active=move || active.get() == screen
                                on:click=move |_| active.set(screen)
                            >
                                {screen.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button class="navbar__logout" on:click=move |_| do_logout(set_auth_state)>
                "Logout"
            </button>
        </nav>
    }
}
