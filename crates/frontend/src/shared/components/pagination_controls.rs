use leptos::prelude::*;

/// PaginationControls component - prev/next paging for a record list
///
/// Pages are 1-indexed. The buttons only relay intent; the list controller
/// decides whether a step is actually taken, so the disabled states here are
/// cosmetic mirrors of the controller's own bounds.
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    page: Signal<u32>,

    /// Total number of pages; 0 while unknown
    #[prop(into)]
    total_pages: Signal<u32>,

    #[prop(into)] can_prev: Signal<bool>,

    #[prop(into)] can_next: Signal<bool>,

    on_prev: Callback<()>,

    on_next: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| on_prev.run(())
                disabled=move || !can_prev.get()
                title="Previous page"
            >
                {"< Prev"}
            </button>
            <span class="pagination-info">
                {move || {
                    let total = total_pages.get();
                    if total == 0 {
                        format!("Page {}", page.get())
                    } else {
                        format!("Page {} of {}", page.get(), total)
                    }
                }}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_next.run(())
                disabled=move || !can_next.get()
                title="Next page"
            >
                {"Next >"}
            </button>
        </div>
    }
}
