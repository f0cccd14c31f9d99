use chrono::NaiveDate;
use contracts::domain::common::Farm;
use contracts::domain::egg_sale::{CreateEggSale, EggSale};
use leptos::prelude::*;

#[component]
pub fn EggSaleForm(
    initial: Option<EggSale>,

    #[prop(into)] busy: Signal<bool>,

    on_submit: Callback<CreateEggSale>,

    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let (sale_date, set_sale_date) = signal(
        initial
            .as_ref()
            .map(|r| r.sale_date.to_string())
            .unwrap_or_default(),
    );
    let (challan, set_challan) = signal(
        initial
            .as_ref()
            .and_then(|r| r.challan_number.clone())
            .unwrap_or_default(),
    );
    let (farm, set_farm) = signal(initial.as_ref().map(|r| r.farm).unwrap_or(Farm::Kaasi19));
    let (eggs_sold, set_eggs_sold) = signal(
        initial
            .as_ref()
            .map(|r| r.eggs_sold.to_string())
            .unwrap_or_default(),
    );
    let (price, set_price) = signal(
        initial
            .as_ref()
            .map(|r| r.price_per_egg.to_string())
            .unwrap_or_default(),
    );
    let (received, set_received) = signal(
        initial
            .as_ref()
            .map(|r| r.amount_received.to_string())
            .unwrap_or_default(),
    );
    let (sale_type, set_sale_type) = signal(
        initial
            .as_ref()
            .map(|r| r.sale_type.clone())
            .unwrap_or_else(|| "CASH".to_string()),
    );
    let (notes, set_notes) = signal(
        initial
            .as_ref()
            .and_then(|r| r.notes.clone())
            .unwrap_or_default(),
    );
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // Live total so the user sees what will be booked.
    let computed_total = Signal::derive(move || {
        let count = eggs_sold.get().trim().parse::<i64>().unwrap_or(0);
        let per_egg = price.get().trim().parse::<f64>().unwrap_or(0.0);
        count as f64 * per_egg
    });

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(date_val) = sale_date.get().parse::<NaiveDate>() else {
            set_form_error.set(Some("Enter a valid date".to_string()));
            return;
        };
        let Ok(count) = eggs_sold.get().trim().parse::<i64>() else {
            set_form_error.set(Some("Enter a valid egg count".to_string()));
            return;
        };
        let Ok(per_egg) = price.get().trim().parse::<f64>() else {
            set_form_error.set(Some("Enter a valid price".to_string()));
            return;
        };
        let Ok(received_val) = received.get().trim().parse::<f64>() else {
            set_form_error.set(Some("Enter a valid received amount".to_string()));
            return;
        };
        let total = count as f64 * per_egg;
        if received_val > total {
            set_form_error.set(Some("Received amount exceeds the sale total".to_string()));
            return;
        }
        set_form_error.set(None);

        let challan_val = challan.get().trim().to_string();
        on_submit.run(CreateEggSale {
            sale_date: date_val,
            challan_number: (!challan_val.is_empty()).then_some(challan_val),
            farm: farm.get(),
            eggs_sold: count,
            price_per_egg: per_egg,
            total_amount: total,
            amount_received: received_val,
            payment_due: total - received_val,
            sale_type: Some(sale_type.get()),
            description: notes.get().trim().to_string(),
        });
    };

    view! {
        <form class="record-form" on:submit=on_form_submit>
            <h2>{if is_edit { "Edit Sale" } else { "New Sale" }}</h2>

            <Show when=move || form_error.get().is_some()>
                <div class="error-message">{move || form_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label for="saleDate">"Date"</label>
                <input
                    type="date"
                    id="saleDate"
                    prop:value=move || sale_date.get()
                    on:input=move |ev| set_sale_date.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="saleChallan">"Challan No."</label>
                <input
                    type="text"
                    id="saleChallan"
                    prop:value=move || challan.get()
                    on:input=move |ev| set_challan.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="saleFarm">"Farm"</label>
                <select
                    id="saleFarm"
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
                <label for="saleEggs">"Eggs Sold"</label>
                <input
                    type="number"
                    id="saleEggs"
                    min="0"
                    prop:value=move || eggs_sold.get()
                    on:input=move |ev| set_eggs_sold.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="salePrice">"Price / Egg"</label>
                <input
                    type="number"
                    id="salePrice"
                    step="0.01"
                    min="0"
                    prop:value=move || price.get()
                    on:input=move |ev| set_price.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label>"Total"</label>
                <span class="form-computed">{move || format!("{:.2}", computed_total.get())}</span>
            </div>

            <div class="form-group">
                <label for="saleReceived">"Amount Received"</label>
                <input
                    type="number"
                    id="saleReceived"
                    step="0.01"
                    min="0"
                    prop:value=move || received.get()
                    on:input=move |ev| set_received.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="saleType">"Type"</label>
                <select
                    id="saleType"
                    prop:value=move || sale_type.get()
                    on:change=move |ev| set_sale_type.set(event_target_value(&ev))
                    disabled=move || busy.get()
                >
                    <option value="CASH">"CASH"</option>
                    <option value="CREDIT">"CREDIT"</option>
                </select>
            </div>

            <div class="form-group">
                <label for="saleNotes">"Notes"</label>
                <textarea
                    id="saleNotes"
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
                            "Add Sale"
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
