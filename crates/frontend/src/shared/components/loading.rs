use leptos::prelude::*;

/// Placeholder rows shown while a page waits for its first response
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <div class="skeleton skeleton--title"></div>
            <div class="skeleton skeleton--subtitle"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
            <div class="skeleton skeleton--row"></div>
        </div>
    }
}

#[component]
pub fn ErrorView(
    /// Falls back to a generic text when empty
    #[prop(optional, into)]
    message: Option<String>,
) -> impl IntoView {
    let message = message
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| {
            "We could not load the data you requested. Please try again later.".to_string()
        });

    view! {
        <div class="error-view" role="alert">
            <h3 class="error-view__title">"Oops! Something went wrong."</h3>
            <p class="error-view__message">{message}</p>
        </div>
    }
}
