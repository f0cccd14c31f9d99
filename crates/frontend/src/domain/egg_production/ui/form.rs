use chrono::NaiveDate;
use contracts::domain::common::Farm;
use contracts::domain::egg_production::{CreateEggProduction, EggProduction};
use leptos::prelude::*;

#[component]
pub fn EggProductionForm(
    initial: Option<EggProduction>,

    #[prop(into)] busy: Signal<bool>,

    on_submit: Callback<CreateEggProduction>,

    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let (date, set_date) = signal(
        initial
            .as_ref()
            .map(|r| r.date.to_string())
            .unwrap_or_default(),
    );
    let (farm, set_farm) = signal(initial.as_ref().map(|r| r.farm).unwrap_or(Farm::Kaasi19));
    let (chicken_eggs, set_chicken_eggs) = signal(
        initial
            .as_ref()
            .map(|r| r.chicken_eggs.to_string())
            .unwrap_or_default(),
    );
    let (total_eggs, set_total_eggs) = signal(
        initial
            .as_ref()
            .map(|r| r.total_eggs.to_string())
            .unwrap_or_default(),
    );
    let (notes, set_notes) = signal(
        initial
            .as_ref()
            .and_then(|r| r.notes.clone())
            .unwrap_or_default(),
    );
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(entry_date) = date.get().parse::<NaiveDate>() else {
            set_form_error.set(Some("Enter a valid date".to_string()));
            return;
        };
        let Ok(chicken_val) = chicken_eggs.get().trim().parse::<i64>() else {
            set_form_error.set(Some("Enter a valid chicken egg count".to_string()));
            return;
        };
        let Ok(total_val) = total_eggs.get().trim().parse::<i64>() else {
            set_form_error.set(Some("Enter a valid total egg count".to_string()));
            return;
        };
        if total_val < chicken_val {
            set_form_error.set(Some("Total eggs cannot be below chicken eggs".to_string()));
            return;
        }
        set_form_error.set(None);

        let notes_val = notes.get().trim().to_string();
        on_submit.run(CreateEggProduction {
            date: entry_date,
            farm: farm.get(),
            chicken_eggs: chicken_val,
            total_eggs: total_val,
            notes: (!notes_val.is_empty()).then_some(notes_val),
        });
    };

    view! {
        <form class="record-form" on:submit=on_form_submit>
            <h2>{if is_edit { "Edit Production" } else { "New Production" }}</h2>

            <Show when=move || form_error.get().is_some()>
                <div class="error-message">{move || form_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label for="productionDate">"Date"</label>
                <input
                    type="date"
                    id="productionDate"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="productionFarm">"Farm"</label>
                <select
                    id="productionFarm"
                    prop:value=move || farm.get().as_str()
                    on:change=move |ev| {
                        if let Ok(f) = event_target_value(&ev).parse::<Farm>() {
                            set_farm.set(f);
                        }
                    }
                    disabled=move || busy.get()
                >
                    {Farm::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="chickenEggs">"Chicken Eggs"</label>
                <input
                    type="number"
                    id="chickenEggs"
                    min="0"
                    prop:value=move || chicken_eggs.get()
                    on:input=move |ev| set_chicken_eggs.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="totalEggs">"Total Eggs"</label>
                <input
                    type="number"
                    id="totalEggs"
                    min="0"
                    prop:value=move || total_eggs.get()
                    on:input=move |ev| set_total_eggs.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="productionNotes">"Notes"</label>
                <textarea
                    id="productionNotes"
                    prop:value=move || notes.get()
                    on:input=move |ev| set_notes.set(event_target_value(&ev))
                    disabled=move || busy.get()
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Add Production"
                        }
                    }}
                </button>
                <button
                    type="button"
                    class="button button--secondary"
                    on:click=move |_| on_cancel.run(())
                    disabled=move || busy.get()
                >
                    "Cancel"
                </button>
            </div>
        </form>
    }
}
