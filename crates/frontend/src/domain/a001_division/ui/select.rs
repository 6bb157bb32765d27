use contracts::domain::a001_division::Division;
use leptos::prelude::*;

/// `<select>` of divisions; the empty option means "none selected"
#[component]
pub fn DivisionSelect(
    #[prop(into)] divisions: Signal<Vec<Division>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| "Select a division".to_string());

    view! {
        <select
            class="select"
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">{placeholder}</option>
            {move || {
                divisions
                    .get()
                    .into_iter()
                    .map(|d| {
                        let id = d.id.clone();
                        let selected = value.get() == id;
                        view! { <option value=id selected=selected>{d.name}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
