use contracts::domain::a001_division::Division;
use leptos::prelude::*;

use super::add_modal::AddDivisionModal;
use crate::domain::a001_division::api;
use crate::shared::components::loading::{ErrorView, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;

#[component]
#[allow(non_snake_case)]
pub fn DivisionList() -> impl IntoView {
    let (items, set_items) = signal::<Option<Vec<Division>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = signal(false);

    let fetch = move || {
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_divisions().await {
                Ok(v) => {
                    set_items.set(Some(v));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    let on_created = Callback::new(move |_: ()| {
        set_show_modal.set(false);
        fetch();
    });
    let on_close = Callback::new(move |_: ()| set_show_modal.set(false));

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Divisions">
                <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                    {icon("plus")}
                    "Add Division"
                </button>
            </PageHeader>

            {move || {
                if error.get().is_some() {
                    return view! {
                        <ErrorView message="Failed to load divisions. Please check your connection." />
                    }.into_any();
                }
                let Some(rows) = items.get() else {
                    return view! { <Loading /> }.into_any();
                };
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Image"</th>
                                    <th class="table__header-cell">"Name"</th>
                                    <th class="table__header-cell">"Description"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="3">
                                                "No divisions found. Start by adding a new one!"
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    rows.into_iter().map(|d| {
                                        let description = d.short_description(75);
                                        let avatar = match d.thumbnail.clone() {
                                            Some(src) => view! {
                                                <img class="avatar" src=src alt=d.name.clone() />
                                            }.into_any(),
                                            None => view! {
                                                <span class="avatar avatar--fallback">{d.initial()}</span>
                                            }.into_any(),
                                        };
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{avatar}</td>
                                                <td class="table__cell table__cell--strong">{d.name}</td>
                                                <td class="table__cell table__cell--muted">{description}</td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <Show when=move || show_modal.get()>
                <AddDivisionModal on_close=on_close on_created=on_created />
            </Show>
        </div>
    }
}
