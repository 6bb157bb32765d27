//! Transient notifications in the bottom corner of the page.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const AUTO_DISMISS_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToastKind {
    Info,
    Success,
    Error,
    Loading,
}

impl ToastKind {
    fn class(self) -> &'static str {
        match self {
            ToastKind::Info => "toast toast--info",
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
            ToastKind::Loading => "toast toast--loading",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

impl Toast {
    /// Changes when a loading toast is resolved, so the row is re-rendered
    fn render_key(&self) -> (u64, ToastKind, String) {
        (self.id, self.kind, self.message.clone())
    }
}

#[derive(Clone, Copy)]
pub struct ToastService {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u64>,
}

impl ToastService {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Info, message.into())
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Success, message.into())
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Error, message.into())
    }

    /// Sticky toast, finished later with [`ToastService::resolve`]
    pub fn loading(&self, message: impl Into<String>) -> u64 {
        self.push(ToastKind::Loading, message.into())
    }

    /// Turn a loading toast into a final one in place
    pub fn resolve(&self, id: u64, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.toasts.update(|list| {
            if let Some(t) = list.iter_mut().find(|t| t.id == id) {
                t.kind = kind;
                t.message = message;
            }
        });
        self.schedule_dismiss(id);
    }

    pub fn dismiss(&self, id: u64) {
        self.toasts.update(|list| list.retain(|t| t.id != id));
    }

    fn push(&self, kind: ToastKind, message: String) -> u64 {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.toasts.update(|list| list.push(Toast { id, kind, message }));
        if kind != ToastKind::Loading {
            self.schedule_dismiss(id);
        }
        id
    }

    fn schedule_dismiss(&self, id: u64) {
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            this.dismiss(id);
        });
    }
}

impl Default for ToastService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_toast() -> ToastService {
    use_context::<ToastService>().expect("ToastService not found in context")
}

#[component]
pub fn Toaster() -> impl IntoView {
    let service = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || service.toasts.get()
                key=Toast::render_key
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() on:click=move |_| service.dismiss(id)>
                            {t.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolved_toast_gets_a_new_key() {
        let loading = Toast {
            id: 7,
            kind: ToastKind::Loading,
            message: "Removing...".to_string(),
        };
        let resolved = Toast {
            kind: ToastKind::Success,
            message: "Removed".to_string(),
            ..loading.clone()
        };

        let keys: HashSet<_> = [&loading, &resolved, &loading]
            .into_iter()
            .map(Toast::render_key)
            .collect();
        assert_eq!(keys.len(), 2);
    }
}
