use chrono::NaiveDate;
use contracts::domain::common::Farm;
use contracts::domain::feed_purchase::{CreateFeedPurchase, FeedPurchase};
use leptos::prelude::*;

use crate::shared::date_utils::month_name;

/// Parse an optional amount field: empty means absent, garbage is an error.
fn parse_optional_amount(raw: &str) -> Result<Option<f64>, ()> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse::<f64>().map(Some).map_err(|_| ())
}

#[component]
pub fn FeedPurchaseForm(
    initial: Option<FeedPurchase>,

    #[prop(into)] busy: Signal<bool>,

    on_submit: Callback<CreateFeedPurchase>,

    on_cancel: Callback<()>,
) -> impl IntoView {
    let is_edit = initial.is_some();
    let (date, set_date) = signal(
        initial
            .as_ref()
            .map(|r| r.date.to_string())
            .unwrap_or_default(),
    );
    let (voucher_type, set_voucher_type) = signal(
        initial
            .as_ref()
            .map(|r| r.voucher_type.clone())
            .unwrap_or_else(|| "IN".to_string()),
    );
    let (feed_type, set_feed_type) = signal(
        initial
            .as_ref()
            .map(|r| r.feed_type.clone())
            .unwrap_or_default(),
    );
    let (farm, set_farm) = signal(initial.as_ref().map(|r| r.farm).unwrap_or(Farm::Combined));
    let (bags, set_bags) = signal(
        initial
            .as_ref()
            .map(|r| r.bags.to_string())
            .unwrap_or_default(),
    );
    let (debit, set_debit) = signal(
        initial
            .as_ref()
            .and_then(|r| r.debit)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (credit, set_credit) = signal(
        initial
            .as_ref()
            .and_then(|r| r.credit)
            .map(|v| v.to_string())
            .unwrap_or_default(),
    );
    let (description, set_description) = signal(
        initial
            .as_ref()
            .and_then(|r| r.description.clone())
            .unwrap_or_default(),
    );
    let (reconciled, set_reconciled) = signal(initial.as_ref().map(|r| r.reconciled).unwrap_or(false));
    let (form_error, set_form_error) = signal(Option::<String>::None);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let date_val = date.get();
        let Ok(entry_date) = date_val.parse::<NaiveDate>() else {
            set_form_error.set(Some("Enter a valid date".to_string()));
            return;
        };
        let Ok(bags_val) = bags.get().trim().parse::<f64>() else {
            set_form_error.set(Some("Enter a valid bag count".to_string()));
            return;
        };
        let Ok(debit_val) = parse_optional_amount(&debit.get()) else {
            set_form_error.set(Some("Enter a valid debit amount".to_string()));
            return;
        };
        let Ok(credit_val) = parse_optional_amount(&credit.get()) else {
            set_form_error.set(Some("Enter a valid credit amount".to_string()));
            return;
        };
        let feed_val = feed_type.get().trim().to_uppercase();
        if feed_val.is_empty() {
            set_form_error.set(Some("Feed type is required".to_string()));
            return;
        }
        set_form_error.set(None);

        let description_val = description.get().trim().to_string();
        on_submit.run(CreateFeedPurchase {
            date: entry_date,
            month: month_name(&date_val),
            voucher_type: voucher_type.get(),
            feed_type: feed_val,
            farm: farm.get(),
            bags: bags_val,
            description: (!description_val.is_empty()).then_some(description_val),
            debit: debit_val,
            credit: credit_val,
            reconciled: reconciled.get(),
        });
    };

    view! {
        <form class="record-form" on:submit=on_form_submit>
            <h2>{if is_edit { "Edit Feed Entry" } else { "New Feed Entry" }}</h2>

            <Show when=move || form_error.get().is_some()>
                <div class="error-message">{move || form_error.get().unwrap_or_default()}</div>
            </Show>

            <div class="form-group">
                <label for="feedDate">"Date"</label>
                <input
                    type="date"
                    id="feedDate"
                    prop:value=move || date.get()
                    on:input=move |ev| set_date.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="feedVoucher">"Voucher"</label>
                <select
                    id="feedVoucher"
                    prop:value=move || voucher_type.get()
                    on:change=move |ev| set_voucher_type.set(event_target_value(&ev))
                    disabled=move || busy.get()
                >
                    <option value="IN">"IN (purchase)"</option>
                    <option value="OUT">"OUT (payment)"</option>
                </select>
            </div>

            <div class="form-group">
                <label for="feedType">"Feed Type"</label>
                <input
                    type="text"
                    id="feedType"
                    placeholder="LAYER_MASH..."
                    prop:value=move || feed_type.get()
                    on:input=move |ev| set_feed_type.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="feedFarm">"Farm"</label>
                <select
                    id="feedFarm"
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
                <label for="feedBags">"Bags"</label>
                <input
                    type="number"
                    id="feedBags"
                    step="0.5"
                    min="0"
                    prop:value=move || bags.get()
                    on:input=move |ev| set_bags.set(event_target_value(&ev))
                    required
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="feedDebit">"Debit"</label>
                <input
                    type="number"
                    id="feedDebit"
                    step="0.01"
                    min="0"
                    prop:value=move || debit.get()
                    on:input=move |ev| set_debit.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="feedCredit">"Credit"</label>
                <input
                    type="number"
                    id="feedCredit"
                    step="0.01"
                    min="0"
                    prop:value=move || credit.get()
                    on:input=move |ev| set_credit.set(event_target_value(&ev))
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-group">
                <label for="feedDescription">"Description"</label>
                <textarea
                    id="feedDescription"
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                    disabled=move || busy.get()
                ></textarea>
            </div>

            <div class="form-group form-group--inline">
                <label for="feedReconciled">"Reconciled"</label>
                <input
                    type="checkbox"
                    id="feedReconciled"
                    prop:checked=move || reconciled.get()
                    on:change=move |ev| set_reconciled.set(event_target_checked(&ev))
                    disabled=move || busy.get()
                />
            </div>

            <div class="form-actions">
                <button type="submit" class="button button--primary" disabled=move || busy.get()>
                    {move || {
                        if busy.get() {
                            "Saving..."
                        } else if is_edit {
                            "Save Changes"
                        } else {
                            "Add Entry"
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

#[cfg(test)]
mod tests {
    use super::parse_optional_amount;

    #[test]
    fn empty_amount_is_absent() {
        assert_eq!(parse_optional_amount(""), Ok(None));
        assert_eq!(parse_optional_amount("   "), Ok(None));
    }

    #[test]
    fn amounts_parse_or_reject() {
        assert_eq!(parse_optional_amount("1500.50"), Ok(Some(1500.5)));
        assert_eq!(parse_optional_amount("abc"), Err(()));
    }
}
