use leptos::prelude::*;

use super::view_model::{AddTourViewModel, ListField};
use crate::shared::icons::icon;

/// Rows of one list field with add and remove buttons
#[component]
pub fn DynamicListInput(vm: AddTourViewModel, field: ListField) -> impl IntoView {
    let rows = move || vm.form.with(|f| field.list(f).rows().to_vec());

    view! {
        <div class="dynamic-list">
            <div class="dynamic-list__header">
                <p class="dynamic-list__label">{field.label()}</p>
                <button type="button" class="button button--icon button--outline" on:click=move |_| vm.add_row(field)>
                    {icon("plus")}
                </button>
            </div>
            <div class="dynamic-list__rows">
                <For
                    each=rows
                    key=|row| row.key
                    children=move |row| {
                        let key = row.key;
                        view! {
                            <div class="dynamic-list__row">
                                <input
                                    type="text"
                                    prop:value=row.value
                                    on:input=move |ev| vm.set_row(field, key, event_target_value(&ev))
                                />
                                <button
                                    type="button"
                                    class="button button--icon button--danger"
                                    on:click=move |_| vm.remove_row(field, key)
                                >
                                    {icon("trash")}
                                </button>
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
