//! Client-side navigation on top of the History API.
//!
//! The current path and query string live in signals; pages read them and
//! call [`Navigator::navigate`] or [`Navigator::set_query`] instead of
//! touching `window.location` directly.

use contracts::system::navigation::AppRoute;
use leptos::ev;
use leptos::prelude::*;
use std::collections::BTreeMap;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Parse `?a=1&b=2` into a map; malformed input yields an empty map
pub fn parse_query(search: &str) -> BTreeMap<String, String> {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// `path` followed by the encoded `params`, without a dangling `?`
pub fn build_url(path: &str, params: &BTreeMap<String, String>) -> String {
    let qs = serde_qs::to_string(params).unwrap_or_default();
    if qs.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, qs)
    }
}

fn current_location() -> (String, String) {
    let location = window().map(|w| w.location());
    let path = location
        .as_ref()
        .and_then(|l| l.pathname().ok())
        .unwrap_or_else(|| "/".to_string());
    let search = location.and_then(|l| l.search().ok()).unwrap_or_default();
    (path, search)
}

#[derive(Clone, Copy)]
pub struct Navigator {
    pub path: RwSignal<String>,
    pub search: RwSignal<String>,
}

impl Navigator {
    pub fn new() -> Self {
        let (path, search) = current_location();
        Self {
            path: RwSignal::new(path),
            search: RwSignal::new(search),
        }
    }

    /// Follow back/forward buttons. Call once from the root component.
    pub fn init_history_integration(&self) {
        let this = *self;
        let handle = window_event_listener(ev::popstate, move |_| {
            let (path, search) = current_location();
            this.path.set(path);
            this.search.set(search);
        });
        on_cleanup(move || handle.remove());
    }

    pub fn route(&self) -> AppRoute {
        AppRoute::parse(&self.path.get())
    }

    pub fn query(&self) -> BTreeMap<String, String> {
        parse_query(&self.search.get())
    }

    pub fn navigate(&self, route: &AppRoute) {
        self.navigate_to(&route.path());
    }

    /// Push `url` (path with optional query) onto the history stack
    pub fn navigate_to(&self, url: &str) {
        let (path, search) = match url.split_once('?') {
            Some((p, q)) => (p.to_string(), format!("?{}", q)),
            None => (url.to_string(), String::new()),
        };

        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(url)) {
                    log::error!("pushState failed for {}: {:?}", url, e);
                }
            }
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }

        self.path.set(path);
        self.search.set(search);
    }

    /// Replace the query string of the current path
    pub fn set_query(&self, params: &BTreeMap<String, String>) {
        let url = build_url(&self.path.get_untracked(), params);
        if let Some(w) = window() {
            if let Ok(history) = w.history() {
                let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(&url));
            }
        }
        let search = url.split_once('?').map(|(_, q)| format!("?{}", q)).unwrap_or_default();
        self.search.set(search);
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_navigator() -> Navigator {
    use_context::<Navigator>().expect("Navigator not found in context")
}

/// Anchor that navigates through [`Navigator`] instead of reloading the page
#[component]
pub fn AppLink(
    route: AppRoute,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let nav = use_navigator();
    let href = route.path();
    view! {
        <a
            href=href
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                nav.navigate(&route);
            }
        >
            {children()}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let q = parse_query("?division=d1&tourType=t1");
        assert_eq!(q.get("division").map(String::as_str), Some("d1"));
        assert_eq!(q.get("tourType").map(String::as_str), Some("t1"));
        assert!(parse_query("").is_empty());
    }

    #[test]
    fn test_build_url() {
        let mut params = BTreeMap::new();
        assert_eq!(build_url("/tours", &params), "/tours");

        params.insert("division".to_string(), "d1".to_string());
        assert_eq!(build_url("/tours", &params), "/tours?division=d1");
    }
}
