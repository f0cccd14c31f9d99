use chrono::NaiveDate;
use contracts::domain::common::Farm;
use contracts::domain::expense::{CreateExpense, Expense};
use leptos::prelude::*;

use crate::shared::date_utils::month_name;

/// Create/edit form for one expense. Emits a fully validated payload; the
/// screen decides whether it becomes a create or an update.
#[component]
pub fn ExpenseForm(
    /// Record being edited; `None` for a new entry
    initial: Option<Expense>,

    #[prop(into)] busy: Signal<bool>,

    on_submit: Callback<CreateExpense>,

    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let (date, set_date) = signal(
        initial
            .as_ref()
            .map(|e| e.expense_date.to_string())
            .unwrap_or_default(),
    );
    let (farm, set_farm) = signal(initial.as_ref().map(|e| e.farm).unwrap_or(Farm::Kaasi19));
    let (head, set_head) = signal(initial.as_ref().map(|e| e.head.clone()).unwrap_or_default());
    let (cost, set_cost) = signal(
        initial
            .as_ref()
            .map(|e| e.expense_cost.to_string())
            .unwrap_or_default(),
    );
    let (notes, set_notes) = signal(
        initial
            .as_ref()
            .and_then(|e| e.notes.clone())
            .unwrap_or_default(),
    );
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let date_val = date.get();
        let Ok(expense_date) = date_val.parse::<NaiveDate>() else {
            set_form_error.set(Some("Enter a valid date".to_string()));
            return;
        };
        let Ok(expense_cost) = cost.get().trim().parse::<f64>() else {
            set_form_error.set(Some("Enter a valid cost".to_string()));
            return;
        };
        let head_val = head.get().trim().to_uppercase();
        if head_val.is_empty() {
            set_form_error.set(Some("Head is required".to_string()));
            return;
        }
        set_form_error.set(None);

        let notes_val = notes.get().trim().to_string();
        on_submit.run(CreateExpense {
            expense_date,
            month: month_name(&date_val),
            farm: farm.get(),
            expense_cost,
            head: head_val,
            notes: (!notes_val.is_empty()).then_some(notes_val),
        });
    };

    view! {
        <form class="record-form" on:submit=on_form_submit>
            <h2>{if is_edit { "Edit Expense" } else { "New Expense" }}</h2>

            <Show when=move || form_error.get().is_some()>
                <div class="error-message">{move || form_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label for="expenseDate">"Date"</label>
                <input
                    type="date"
                    id="expenseDate"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="expenseFarm">"Farm"</label>
                <select
                    id="expenseFarm"
                    prop:value=move || farm.get().as_str()
                    on:change=move |ev| {
                        if let Ok(f) = event_target_value(&ev).parse::<Farm>() {
                            set_farm.set(f);
                        }
                    }
                    disabled=move || busy.get()
                >
                    {Farm::SINGLE
                        .into_iter()
                        .map(|f| view! { <option value=f.as_str()>{f.as_str()}</option> })
                        .collect_view()}
                </select>
            </div>

            <div class="form-group">
                <label for="expenseHead">"Head"</label>
                <input
                    type="text"
                    id="expenseHead"
                    placeholder="FEED, MEDICINE, SALARIES..."
                    prop:value=move || head.get()
                    on:input=move |ev| set_head.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="expenseCost">"Cost"</label>
                <input
                    type="number"
                    id="expenseCost"
                    step="0.01"
                    min="0"
                    prop:value=move || cost.get()
                    on:input=move |ev| set_cost.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="expenseNotes">"Notes"</label>
                <textarea
                    id="expenseNotes"
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
                            "Add Expense"
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
