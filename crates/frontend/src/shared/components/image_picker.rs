//! File input with thumbnail previews.
//!
//! `web_sys::File` is not `Send`, so the selection lives in a
//! thread-local signal created with [`RwSignal::new_local`].

use crate::shared::icons::icon;
use leptos::prelude::*;
use web_sys::{File, HtmlInputElement, Url};

pub type FileSelection = RwSignal<Vec<File>, LocalStorage>;

/// Object URLs handed out for the previews currently on screen
#[derive(Debug, Default)]
struct PreviewUrls {
    issued: Vec<String>,
}

impl PreviewUrls {
    /// Record the URLs of a new render and return the ones it replaces
    fn replace(&mut self, urls: Vec<String>) -> Vec<String> {
        std::mem::replace(&mut self.issued, urls)
    }

    fn take_all(&mut self) -> Vec<String> {
        std::mem::take(&mut self.issued)
    }
}

fn revoke(urls: Vec<String>) {
    for url in urls {
        if let Err(e) = Url::revoke_object_url(&url) {
            log::debug!("failed to revoke {}: {:?}", url, e);
        }
    }
}

fn files_from_input(input: &HtmlInputElement) -> Vec<File> {
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

#[component]
pub fn ImagePicker(
    files: FileSelection,
    /// Allow several images (tours) or exactly one (division thumbnail)
    #[prop(optional)]
    multiple: bool,
) -> impl IntoView {
    let on_change = move |ev: leptos::ev::Event| {
        let input = event_target::<HtmlInputElement>(&ev);
        let picked = files_from_input(&input);
        if multiple {
            files.update(|current| current.extend(picked));
        } else {
            files.set(picked.into_iter().take(1).collect());
        }
        // Allow picking the same file again after removing it
        input.set_value("");
    };

    let previews = StoredValue::new(PreviewUrls::default());
    on_cleanup(move || {
        if let Some(stale) = previews.try_update_value(PreviewUrls::take_all) {
            revoke(stale);
        }
    });

    let remove = move |index: usize| {
        files.update(|current| {
            if index < current.len() {
                current.remove(index);
            }
        });
    };

    view! {
        <div class="image-picker">
            <label class="image-picker__drop">
                <input
                    type="file"
                    accept="image/*"
                    multiple=multiple
                    class="image-picker__input"
                    on:change=on_change
                />
                <span>{if multiple { "Choose images" } else { "Choose an image" }}</span>
            </label>
            <div class="image-picker__previews">
                {move || {
                    let picked = files.get();
                    let urls: Vec<String> = picked
                        .iter()
                        .map(|file| Url::create_object_url_with_blob(file).unwrap_or_default())
                        .collect();
                    if let Some(stale) = previews.try_update_value(|p| p.replace(urls.clone())) {
                        revoke(stale);
                    }

                    picked
                        .into_iter()
                        .zip(urls)
                        .enumerate()
                        .map(|(index, (file, src))| {
                            let name = file.name();
                            view! {
                                <div class="image-picker__preview">
                                    <img src=src alt=name.clone() />
                                    <span class="image-picker__name">{name}</span>
                                    <button
                                        type="button"
                                        class="button button--icon"
                                        on:click=move |_| remove(index)
                                    >
                                        {icon("x")}
                                    </button>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_render_hands_back_the_previous_urls() {
        let mut previews = PreviewUrls::default();
        assert!(previews.replace(vec!["blob:a".to_string()]).is_empty());

        let stale = previews.replace(vec!["blob:b".to_string(), "blob:c".to_string()]);
        assert_eq!(stale, vec!["blob:a".to_string()]);

        assert_eq!(previews.take_all(), vec!["blob:b".to_string(), "blob:c".to_string()]);
        assert!(previews.take_all().is_empty());
    }
}
