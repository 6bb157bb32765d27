use contracts::domain::a001_division::DivisionDto;
use contracts::shared::FormErrors;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_division::api;
use crate::shared::components::image_picker::{FileSelection, ImagePicker};
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

#[component]
pub fn AddDivisionModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let form = RwSignal::new(DivisionDto::default());
    let errors = RwSignal::new(FormErrors::new());
    let image: FileSelection = RwSignal::new_local(Vec::new());
    let (is_saving, set_is_saving) = signal(false);
    let toast = use_toast();

    let field_error = move |field: &'static str| {
        move || {
            errors.with(|e| {
                e.message_for(field)
                    .map(|m| view! { <p class="field-error">{m.to_string()}</p> })
            })
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = form.get();
        if let Err(e) = dto.validate() {
            errors.set(e);
            return;
        }
        errors.set(FormErrors::new());

        let Some(file) = image.with(|files| files.first().cloned()) else {
            toast.error("Please upload an image for the division.");
            return;
        };

        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_division(&dto, &file).await {
                Ok(division) => {
                    log::info!("division {} created", division.id);
                    toast.success("Division added successfully!");
                    on_created.run(());
                }
                Err(e) => {
                    log::error!("{}", e);
                    toast.error("Failed to add division. Please try again.");
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <Modal title="Add a New Division" on_close=on_close>
            <form class="form" on:submit=on_submit>
                <div class="form-group">
                    <label for="division-name">"Division Name"</label>
                    <input
                        id="division-name"
                        type="text"
                        placeholder="e.g., Dhaka, Chittagong"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                    {field_error("name")}
                </div>
                <div class="form-group">
                    <label for="division-description">"Description"</label>
                    <textarea
                        id="division-description"
                        placeholder="Write a short description..."
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                    {field_error("description")}
                </div>
                <div class="form-group">
                    <label>"Division Image"</label>
                    <ImagePicker files=image />
                </div>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_saving.get() || image.with(|f| f.is_empty())
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save changes" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
