use contracts::domain::common::Farm;
use contracts::domain::egg_sale::{CreateEggSale, EggSale, UpdateEggSale};
use leptos::prelude::*;

use super::form::EggSaleForm;
use crate::domain::egg_sale::api::EggSaleClient;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{format_amount, format_count, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::resource::{ListFilter, ResourceListHandle};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn EggSalesScreen() -> impl IntoView {
    let list = ResourceListHandle::new(EggSaleClient::from_context(), PAGE_SIZE);
    list.load();
    let state = list.state;

    let (farm, set_farm) = signal(Option::<Farm>::None);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<EggSale>::None);

    let refilter = {
        let list = list.clone();
        move || {
            list.set_filter(ListFilter {
                farm: farm.get_untracked(),
                start_date: start_date.get_untracked(),
                end_date: end_date.get_untracked(),
            });
        }
    };
    let on_farm = Callback::new({
        let refilter = refilter.clone();
        move |value| {
            set_farm.set(value);
            refilter();
        }
    });
    let on_start_date = Callback::new({
        let refilter = refilter.clone();
        move |value| {
            set_start_date.set(value);
            refilter();
        }
    });
    let on_end_date = Callback::new({
        let refilter = refilter.clone();
        move |value| {
            set_end_date.set(value);
            refilter();
        }
    });

    let on_prev = Callback::new({
        let list = list.clone();
        move |_| list.prev_page()
    });
    let on_next = Callback::new({
        let list = list.clone();
        move |_| list.next_page()
    });

    let on_submit = Callback::new({
        let list = list.clone();
        move |body: CreateEggSale| {
            match editing.get_untracked() {
                Some(record) => {
                    let patch = UpdateEggSale {
                        sale_date: Some(body.sale_date),
                        challan_number: body.challan_number,
                        farm: Some(body.farm),
                        eggs_sold: Some(body.eggs_sold),
                        price_per_egg: Some(body.price_per_egg),
                        total_amount: Some(body.total_amount),
                        amount_received: Some(body.amount_received),
                        payment_due: Some(body.payment_due),
                        sale_type: body.sale_type,
                        description: (!body.description.is_empty()).then_some(body.description),
                    };
                    list.update(record.id, patch);
                }
                None => list.create(body),
            }
            set_show_form.set(false);
            set_editing.set(None);
        }
    });
    let on_cancel = Callback::new(move |_| {
        set_show_form.set(false);
        set_editing.set(None);
    });
    let on_delete = Callback::new({
        let list = list.clone();
        move |id: i64| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Delete this sale?").unwrap_or(false))
                .unwrap_or(false);
            if confirmed {
                list.remove(id);
            }
        }
    });

    let eggs_sold = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_count(sum.total_eggs_sold)))
    });
    let revenue = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total_revenue)))
    });
    let received = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total_received)))
    });
    let due = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total_due)))
    });
    let busy = Signal::derive(move || state.with(|s| s.is_mutating()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Egg Sales"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "New Sale"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <StatCard label="Eggs Sold" value=eggs_sold />
                <StatCard label="Revenue" value=revenue />
                <StatCard label="Received" value=received />
                <StatCard label="Payment Due" value=due />
            </div>

            {move || state.with(|s| s.summary.clone()).map(|sum| view! {
                <div class="summary-breakdown">
                    {sum.by_farm.into_iter().map(|f| {
                        let line = format!(
                            "{}: {} eggs, {} due",
                            f.farm,
                            format_count(f.sum.eggs_sold.unwrap_or(0)),
                            format_amount(f.sum.payment_due.unwrap_or(0.0)),
                        );
                        view! { <span class="summary-breakdown__item">{line}</span> }
                    }).collect_view()}
                </div>
            })}

            <FilterBar
                farms=Farm::SINGLE.to_vec()
                farm=farm
                start_date=start_date
                end_date=end_date
                disabled=Signal::derive(move || state.with(|s| s.is_loading() || s.summary_loading))
                on_farm=on_farm
                on_start_date=on_start_date
                on_end_date=on_end_date
            />

            {move || state.with(|s| s.list_error.clone()).map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || state.with(|s| s.mutation_error.clone()).map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}
            {move || state.with(|s| s.summary_error.clone()).map(|e| view! {
                <div class="warning-box warning-box--muted">
                    <span class="warning-box__text">{format!("Summary unavailable: {e}")}</span>
                </div>
            })}

            <Show when=move || show_form.get()>
                {move || {
                    view! {
                        <EggSaleForm
                            initial=editing.get()
                            busy=busy
                            on_submit=on_submit
                            on_cancel=on_cancel
                        />
                    }
                }}
            </Show>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Challan"</th>
                            <th class="table__header-cell">"Farm"</th>
                            <th class="table__header-cell table__header-cell--number">"Eggs"</th>
                            <th class="table__header-cell table__header-cell--number">"Price"</th>
                            <th class="table__header-cell table__header-cell--number">"Total"</th>
                            <th class="table__header-cell table__header-cell--number">"Received"</th>
                            <th class="table__header-cell table__header-cell--number">"Due"</th>
                            <th class="table__header-cell">"Type"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.to_vec()).into_iter().map(|row| {
                            let id = row.id;
                            let date = format_date(&row.sale_date.to_string());
                            let challan = row.challan_number.clone().unwrap_or_default();
                            let farm_name = row.farm.as_str();
                            let eggs = format_count(row.eggs_sold);
                            let price = format!("{:.2}", row.price_per_egg);
                            let total = format_amount(row.total_amount);
                            let received = format_amount(row.amount_received);
                            let due = format_amount(row.payment_due);
                            let sale_type = row.sale_type.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date}</td>
                                    <td class="table__cell">{challan}</td>
                                    <td class="table__cell">{farm_name}</td>
                                    <td class="table__cell table__cell--number">{eggs}</td>
                                    <td class="table__cell table__cell--number">{price}</td>
                                    <td class="table__cell table__cell--number">{total}</td>
                                    <td class="table__cell table__cell--number">{received}</td>
                                    <td class="table__cell table__cell--number">{due}</td>
                                    <td class="table__cell">{sale_type}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--small"
                                            on:click=move |_| {
                                                set_editing.set(Some(row.clone()));
                                                set_show_form.set(true);
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="button button--small button--danger"
                                            on:click=move |_| on_delete.run(id)
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
                <Show when=move || state.with(|s| s.items.is_empty() && !s.is_loading())>
                    <div class="table__empty">"No sales found"</div>
                </Show>
                <Show when=move || state.with(|s| s.is_loading())>
                    <div class="table__loading">"Loading..."</div>
                </Show>
            </div>

            <PaginationControls
                page=Signal::derive(move || state.with(|s| s.cursor.page))
                total_pages=Signal::derive(move || state.with(|s| s.cursor.total_pages))
                can_prev=Signal::derive(move || {
                    state.with(|s| s.cursor.can_go_back() && !s.is_loading())
                })
                can_next=Signal::derive(move || {
                    state.with(|s| s.cursor.can_advance() && !s.is_loading())
                })
                on_prev=on_prev
                on_next=on_next
            />
        </div>
    }
}
