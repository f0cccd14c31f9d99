use contracts::domain::common::Farm;
use contracts::domain::egg_production::{CreateEggProduction, EggProduction, UpdateEggProduction};
use leptos::prelude::*;

use super::form::EggProductionForm;
use crate::domain::egg_production::api::EggProductionClient;
use crate::shared::components::filter_bar::FilterBar;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::stat_card::{format_count, StatCard};
use crate::shared::date_utils::format_date;
use crate::shared::resource::{ListFilter, ResourceListHandle};

const PAGE_SIZE: u32 = 10;

#[component]
pub fn EggProductionScreen() -> impl IntoView {
    let list = ResourceListHandle::new(EggProductionClient::from_context(), PAGE_SIZE);
    list.load();
    let state = list.state;

    let (farm, set_farm) = signal(Option::<Farm>::None);
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (show_form, set_show_form) = signal(false);
    let (editing, set_editing) = signal(Option::<EggProduction>::None);

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
        move |body: CreateEggProduction| {
            match editing.get_untracked() {
                Some(record) => {
                    let patch = UpdateEggProduction {
                        date: Some(body.date),
                        farm: Some(body.farm),
                        chicken_eggs: Some(body.chicken_eggs),
                        total_eggs: Some(body.total_eggs),
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
                .map(|w| {
                    w.confirm_with_message("Delete this production record?")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if confirmed {
                list.remove(id);
            }
        }
    });

    let total_eggs = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| format_count(sum.total_eggs)))
    });
    let farms_reporting = Signal::derive(move || {
        state.with(|s| s.summary.as_ref().map(|sum| sum.by_farm.len().to_string()))
    });
    let busy = Signal::derive(move || state.with(|s| s.is_mutating()));

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Egg Production"</h1>
                </div>
                <div class="header__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| {
                            set_editing.set(None);
                            set_show_form.set(true);
                        }
                    >
                        "New Production"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <StatCard label="Total Eggs" value=total_eggs />
                <StatCard label="Farms Reporting" value=farms_reporting />
            </div>

            {move || state.with(|s| s.summary.clone()).map(|sum| view! {
                <div class="summary-breakdown">
                    {sum.by_farm.into_iter().map(|f| {
                        let line = format!(
                            "{}: {} eggs ({} chicken)",
                            f.farm,
                            format_count(f.sum.total_eggs.unwrap_or(0)),
                            format_count(f.sum.chicken_eggs.unwrap_or(0)),
                        );
                        view! { <span class="summary-breakdown__item">{line}</span> }
                    }).collect_view()}
                </div>
            })}

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
                        <EggProductionForm
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
                            <th class="table__header-cell">"Farm"</th>
                            <th class="table__header-cell table__header-cell--number">"Chicken Eggs"</th>
                            <th class="table__header-cell table__header-cell--number">"Total Eggs"</th>
                            <th class="table__header-cell">"Notes"</th>
                            <th class="table__header-cell">"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || state.with(|s| s.items.to_vec()).into_iter().map(|row| {
                            let id = row.id;
                            let date = format_date(&row.date.to_string());
                            let farm_name = row.farm.as_str();
                            let chicken = format_count(row.chicken_eggs);
                            let total = format_count(row.total_eggs);
                            let notes = row.notes.clone().unwrap_or_default();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{date}</td>
                                    <td class="table__cell">{farm_name}</td>
                                    <td class="table__cell table__cell--number">{chicken}</td>
                                    <td class="table__cell table__cell--number">{total}</td>
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
                    <div class="table__empty">"No production records found"</div>
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
