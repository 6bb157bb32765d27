use crate::shared::icons::icon;
use leptos::prelude::*;

/// Pages are numbered from 1, the way the backend's `meta.page` counts them.
/// Renders nothing when everything fits on one page.
#[component]
pub fn PaginationControls(
    #[prop(into)]
    current_page: Signal<u32>,

    #[prop(into)]
    total_pages: Signal<u32>,

    on_page_change: Callback<u32>,
) -> impl IntoView {
    let page_numbers = move || (1..=total_pages.get()).collect::<Vec<_>>();

    view! {
        <Show when=move || { total_pages.get() > 1 }>
            <nav class="pagination-controls">
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get().saturating_sub(1).max(1))
                    disabled=move || current_page.get() <= 1
                    title="Previous page"
                >
                    {icon("chevron-left")}
                </button>
                <For
                    each=page_numbers
                    key=|page| *page
                    children=move |page| {
                        view! {
                            <button
                                class=move || {
                                    if current_page.get() == page {
                                        "pagination-btn pagination-btn--active"
                                    } else {
                                        "pagination-btn"
                                    }
                                }
                                on:click=move |_| on_page_change.run(page)
                            >
                                {page.to_string()}
                            </button>
                        }
                    }
                />
                <button
                    class="pagination-btn"
                    on:click=move |_| on_page_change.run(current_page.get() + 1)
                    disabled=move || current_page.get() >= total_pages.get()
                    title="Next page"
                >
                    {icon("chevron-right")}
                </button>
            </nav>
        </Show>
    }
}
