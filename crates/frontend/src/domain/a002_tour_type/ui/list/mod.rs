use contracts::domain::a002_tour_type::TourType;
use contracts::shared::Page;
use leptos::prelude::*;

use super::add_modal::AddTourTypeModal;
use crate::domain::a002_tour_type::api;
use crate::shared::components::loading::{ErrorView, Loading};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::modal::ConfirmDialog;
use crate::shared::toast::{use_toast, ToastKind};

#[component]
#[allow(non_snake_case)]
pub fn TourTypeList() -> impl IntoView {
    let (page, set_page) = signal::<Option<Page<TourType>>>(None);
    let (error, set_error) = signal::<Option<String>>(None);
    let (current_page, set_current_page) = signal(1u32);
    let (show_modal, set_show_modal) = signal(false);
    let (pending_delete, set_pending_delete) = signal::<Option<TourType>>(None);
    let toast = use_toast();

    let fetch = move || {
        let requested = current_page.get_untracked();
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_tour_types(Some(requested)).await {
                Ok(p) => {
                    set_page.set(Some(p));
                    set_error.set(None);
                }
                Err(e) => {
                    log::error!("{}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    // Refetch whenever the page changes
    Effect::new(move |_| {
        current_page.track();
        fetch();
    });

    let total_pages = Signal::derive(move || {
        page.with(|p| p.as_ref().map(|p| p.meta.total_page).unwrap_or(1))
    });

    let on_page_change = Callback::new(move |p: u32| set_current_page.set(p));

    let on_created = Callback::new(move |_: ()| {
        set_show_modal.set(false);
        fetch();
    });
    let on_close = Callback::new(move |_: ()| set_show_modal.set(false));

    let on_cancel_delete = Callback::new(move |_: ()| set_pending_delete.set(None));
    let on_confirm_delete = Callback::new(move |_: ()| {
        let Some(target) = pending_delete.get_untracked() else {
            return;
        };
        set_pending_delete.set(None);
        let toast_id = toast.loading("Removing...");
        wasm_bindgen_futures::spawn_local(async move {
            match api::delete_tour_type(&target.id).await {
                Ok(_) => {
                    toast.resolve(toast_id, ToastKind::Success, "Removed");
                    fetch();
                }
                Err(e) => {
                    log::error!("failed to remove tour type {}: {}", target.id, e);
                    toast.resolve(toast_id, ToastKind::Error, e);
                }
            }
        });
    });

    view! {
        <div class="page">
            <PageHeader title="Tour Types">
                <button class="button button--primary" on:click=move |_| set_show_modal.set(true)>
                    {icon("plus")}
                    "Add Tour Type"
                </button>
            </PageHeader>

            {move || {
                if error.get().is_some() {
                    return view! {
                        <ErrorView message="Failed to load tour types. Please check your connection." />
                    }.into_any();
                }
                let Some(p) = page.get() else {
                    return view! { <Loading /> }.into_any();
                };
                view! {
                    <div class="table">
                        <table class="table__data table--striped">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Tour Type"</th>
                                    <th class="table__header-cell table__header-cell--right">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if p.items.is_empty() {
                                    view! {
                                        <tr>
                                            <td class="table__cell table__cell--empty" colspan="2">
                                                "No tour types found. Start by adding a new one!"
                                            </td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    p.items.into_iter().map(|t| {
                                        let name = t.name.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--strong">{name.clone()}</td>
                                                <td class="table__cell table__cell--right">
                                                    <button
                                                        class="button button--icon button--danger-ghost"
                                                        title=format!("Delete {}", name)
                                                        on:click=move |_| set_pending_delete.set(Some(t.clone()))
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <PaginationControls
                current_page=current_page
                total_pages=total_pages
                on_page_change=on_page_change
            />

            <Show when=move || show_modal.get()>
                <AddTourTypeModal on_close=on_close on_created=on_created />
            </Show>

            {move || pending_delete.get().map(|t| view! {
                <ConfirmDialog
                    title="Are you absolutely sure?"
                    message=format!("This will permanently delete the tour type \"{}\".", t.name)
                    on_confirm=on_confirm_delete
                    on_cancel=on_cancel_delete
                />
            })}
        </div>
    }
}
