use contracts::domain::common::Farm;
use contracts::domain::feed_purchase::{CreateFeedPurchase, FeedPurchase, UpdateFeedPurchase};
use leptos::prelude::*;

use super::form::FeedPurchaseForm;
use crate::domain::feed_purchase::api::FeedPurchaseClient;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{format_amount, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::resource::{ListFilter, ResourceListHandle};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn FeedPurchasesScreen() -> impl IntoView {
    let list = ResourceListHandle::new(FeedPurchaseClient::from_context(), PAGE_SIZE);
    list.load();
    let state = list.state;

    let (farm, set_farm) = signal(Option::<Farm>::None);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<FeedPurchase>::None);

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
        move |body: CreateFeedPurchase| {
            match editing.get_untracked() {
                Some(record) => {
                    // month is server-derived on update; the ledger endpoint
                    // does not accept it there.
                    let patch = UpdateFeedPurchase {
                        date: Some(body.date),
                        voucher_type: Some(body.voucher_type),
                        feed_type: Some(body.feed_type),
                        farm: Some(body.farm),
                        bags: Some(body.bags),
                        description: body.description,
                        debit: body.debit,
                        credit: body.credit,
                        reconciled: Some(body.reconciled),
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
                .map(|w| {
                    w.confirm_with_message("Delete this feed entry?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                list.remove(id);
            }
        }
    });

    let total_debit = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total_debit)))
    });
    let total_credit = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total_credit)))
    });
    let total_bags = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format!("{:.1}", sum.total_bags)))
    });
    let balance = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.current_balance)))
    });
    let busy = Signal::derive(move || state.with(|s| s.is_mutating()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Feed Ledger"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "New Entry"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <StatCard label="Total Debit" value=total_debit />
                <StatCard label="Total Credit" value=total_credit />
                <StatCard label="Total Bags" value=total_bags />
                <StatCard label="Current Balance" value=balance />
            </div>

            <FilterBar
                farms=Farm::ALL.to_vec()
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
                        <FeedPurchaseForm
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
                            <th class="table__header-cell">"Voucher"</th>
                            <th class="table__header-cell">"Feed"</th>
                            <th class="table__header-cell">"Farm"</th>
                            <th class="table__header-cell table__header-cell--number">"Bags"</th>
                            <th class="table__header-cell table__header-cell--number">"Debit"</th>
                            <th class="table__header-cell table__header-cell--number">"Credit"</th>
                            <th class="table__header-cell table__header-cell--number">"Balance"</th>
                            <th class="table__header-cell">"Reconciled"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.to_vec()).into_iter().map(|row| {
                            let id = row.id;
                            let date = format_date(&row.date.to_string());
                            let voucher = row.voucher_type.clone();
                            let feed = row.feed_type.clone();
                            let farm_name = row.farm.as_str();
                            let bags = format!("{:.1}", row.bags);
                            let debit = row.debit.map(format_amount).unwrap_or_default();
                            let credit = row.credit.map(format_amount).unwrap_or_default();
                            let balance = format_amount(row.running_balance);
                            let reconciled = if row.reconciled { "Yes" } else { "No" };
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date}</td>
                                    <td class="table__cell">{voucher}</td>
                                    <td class="table__cell">{feed}</td>
                                    <td class="table__cell">{farm_name}</td>
                                    <td class="table__cell table__cell--number">{bags}</td>
                                    <td class="table__cell table__cell--number">{debit}</td>
                                    <td class="table__cell table__cell--number">{credit}</td>
                                    <td class="table__cell table__cell--number">{balance}</td>
                                    <td class="table__cell">{reconciled}</td>
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
                    <div class="table__empty">"No feed entries found"</div>
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
