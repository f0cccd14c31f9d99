//! Root components: auth gate plus the screen switcher.

use leptos::prelude::*;

use crate::domain::egg_production::ui::EggProductionScreen;
use crate::domain::egg_sale::ui::EggSalesScreen;
use crate::domain::expense::ui::ExpensesScreen;
use crate::domain::feed_purchase::ui::FeedPurchasesScreen;
use crate::layout::navbar::Navbar;
use crate::layout::Screen;
use crate::system::auth::context::{use_auth, AuthProvider};
use crate::system::pages::login::LoginPage;
use crate::system::pages::signup::SignupPage;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AuthProvider>
            <AppShell />
        </AuthProvider>
    }
}

/// Auth gate: the record screens only exist behind a session token.
#[component]
fn AppShell() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <AuthPages /> }
        >
            <MainLayout />
        </Show>
    }
}

/// Login/signup switcher shown while signed out.
#[component]
fn AuthPages() -> impl IntoView {
    let (show_signup, set_show_signup) = signal(false);

    view! {
        <Show
            when=move || show_signup.get()
            fallback=move || {
                view! {
                    <LoginPage on_show_signup=Callback::new(move |_| set_show_signup.set(true)) />
                }
            }
        >
            <SignupPage on_show_login=Callback::new(move |_| set_show_signup.set(false)) />
        </Show>
    }
}

#[component]
fn MainLayout() -> impl IntoView {
    let active = RwSignal::new(Screen::Expenses);
    provide_context(active);

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="app-content">
                {move || match active.get() {
                    Screen::Expenses => view! { <ExpensesScreen /> }.into_any(),
                    Screen::FeedPurchases => view! { <FeedPurchasesScreen /> }.into_any(),
                    Screen::EggProduction => view! { <EggProductionScreen /> }.into_any(),
                    Screen::EggSales => view! { <EggSalesScreen /> }.into_any(),
                }}
            </main>
        </div>
    }
}
