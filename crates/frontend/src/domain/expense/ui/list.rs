use contracts::domain::common::Farm;
use contracts::domain::expense::{CreateExpense, Expense, UpdateExpense};
use leptos::prelude::*;

use super::form::ExpenseForm;
use crate::domain::expense::api::ExpenseClient;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{format_amount, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::resource::{ListFilter, ResourceListHandle};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn ExpensesScreen() -> impl IntoView {
    let list = ResourceListHandle::new(ExpenseClient::from_context(), PAGE_SIZE);
    list.load();
    let state = list.state;

    let (farm, set_farm) = signal(Option::<Farm>::None);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<Expense>::None);

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
        move |body: CreateExpense| {
            match editing.get_untracked() {
                Some(record) => {
                    let patch = UpdateExpense {
                        expense_date: Some(body.expense_date),
                        month: Some(body.month),
                        farm: Some(body.farm),
                        expense_cost: Some(body.expense_cost),
                        head: Some(body.head),
                        notes: body.notes,
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
                .map(|w| w.confirm_with_message("Delete this expense?").unwrap_or(false))
                .unwrap_or(false);
            if confirmed {
                list.remove(id);
            }
        }
    });

    let total = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_amount(sum.total)))
    });
    let head_count = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| sum.by_head.len().to_string()))
    });
    let busy = Signal::derive(move || state.with(|s| s.is_mutating()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Expenses"</h1>
                    <span class="header__badge">
                        {move || {
                            let n = state.with(|s| s.filter.active_count());
                            if n > 0 { format!("{n} filter(s) active") } else { String::new() }
                        }}
                    </span>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "New Expense"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <StatCard label="Total Expense" value=total />
                <StatCard label="Expense Heads" value=head_count />
            </div>

            {move || state.with(|s| s.summary.clone()).map(|sum| view! {
                <div class="summary-breakdown">
                    {sum.by_head.into_iter().map(|h| {
                        let line = format!(
                            "{}: {}",
                            h.head,
                            format_amount(h.sum.expense_cost.unwrap_or(0.0)),
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
                        <ExpenseForm
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
                            <th class="table__header-cell">"Month"</th>
                            <th class="table__header-cell">"Farm"</th>
                            <th class="table__header-cell">"Head"</th>
                            <th class="table__header-cell table__header-cell--number">"Cost"</th>
                            <th class="table__header-cell">"Notes"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.to_vec()).into_iter().map(|row| {
                            let id = row.id;
                            let date = format_date(&row.expense_date.to_string());
                            let month = row.month.clone();
                            let farm_name = row.farm.as_str();
                            let head = row.head.clone();
                            let cost = format_amount(row.expense_cost);
                            let notes = row.notes.clone().unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date}</td>
                                    <td class="table__cell">{month}</td>
                                    <td class="table__cell">{farm_name}</td>
                                    <td class="table__cell">{head}</td>
                                    <td class="table__cell table__cell--number">{cost}</td>
                                    <td class="table__cell">{notes}</td>
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
                    <div class="table__empty">"No expenses found"</div>
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
