use contracts::domain::common::Farm;
use leptos::prelude::*;

/// FilterBar component - farm select plus a start/end date pair
///
/// Emits raw input values; range validation lives in the list controller
/// (an inverted pair simply means "no date filter").
#[component]
pub fn FilterBar(
    /// Sites offered in the select, in display order
    farms: Vec<Farm>,

    #[prop(into)] farm: Signal<Option<Farm>>,

    #[prop(into)] start_date: Signal<String>,

    #[prop(into)] end_date: Signal<String>,

    /// Disable the inputs while a refresh is pending
    #[prop(into)]
    disabled: Signal<bool>,

    on_farm: Callback<Option<Farm>>,

    on_start_date: Callback<String>,

    on_end_date: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <div class="filter-bar__field">
                <label for="startDate">"Start"</label>
                <input
                    type="date"
                    id="startDate"
                    prop:value=move || start_date.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| on_start_date.run(event_target_value(&ev))
                />
            </div>
            <div class="filter-bar__field">
                <label for="endDate">"End"</label>
                <input
                    type="date"
                    id="endDate"
                    prop:value=move || end_date.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| on_end_date.run(event_target_value(&ev))
                />
            </div>
            <div class="filter-bar__field">
                <label for="farmFilter">"Farm"</label>
                <select
                    id="farmFilter"
                    prop:value=move || farm.get().map(|f| f.as_str().to_string()).unwrap_or_default()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        on_farm.run(value.parse::<Farm>().ok());
                    }
                >
                    <option value="">"All Farms"</option>
                    {farms
                        .into_iter()
                        .map(|f| {
                            view! {
                                <option value=f.as_str()>{f.as_str()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}
