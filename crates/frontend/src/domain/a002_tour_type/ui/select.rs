use contracts::domain::a002_tour_type::TourType;
use leptos::prelude::*;

#[component]
pub fn TourTypeSelect(
    #[prop(into)] tour_types: Signal<Vec<TourType>>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <select
            class="select"
            prop:value=move || value.get()
            disabled=move || disabled.get()
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            <option value="">"Select a tour type"</option>
            {move || {
                tour_types
                    .get()
                    .into_iter()
                    .map(|t| {
                        let selected = value.get() == t.id;
                        view! { <option value=t.id selected=selected>{t.name}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}
