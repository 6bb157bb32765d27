use contracts::domain::a002_tour_type::TourTypeDto;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_tour_type::api;
use crate::shared::modal::Modal;
use crate::shared::toast::use_toast;

#[component]
pub fn AddTourTypeModal(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (name_error, set_name_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);
    let toast = use_toast();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let dto = TourTypeDto { name: name.get() };
        if let Err(e) = dto.validate() {
            set_name_error.set(e.message_for("name").map(str::to_string));
            return;
        }
        set_name_error.set(None);

        set_is_saving.set(true);
        spawn_local(async move {
            match api::create_tour_type(&dto).await {
                Ok(_) => {
                    toast.success("Tour type added successfully!");
                    on_created.run(());
                }
                Err(e) => {
                    log::error!("{}", e);
                    toast.error("Failed to add tour type. Please try again.");
                }
            }
            set_is_saving.set(false);
        });
    };

    view! {
        <Modal title="Add Tour Type" on_close=on_close>
            <form class="form" on:submit=on_submit>
                <div class="form-group">
                    <label for="tour-type-name">"Tour Type Name"</label>
                    <input
                        id="tour-type-name"
                        type="text"
                        placeholder="e.g., Adventure, Beach"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    {move || name_error.get().map(|m| view! { <p class="field-error">{m}</p> })}
                </div>
                <div class="modal-actions">
                    <button type="button" class="button button--secondary" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="button button--primary" disabled=move || is_saving.get()>
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </Modal>
    }
}
