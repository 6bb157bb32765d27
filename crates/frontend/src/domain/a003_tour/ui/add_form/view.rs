use contracts::domain::a003_tour::TourForm;
use leptos::prelude::*;

use super::dynamic_list::DynamicListInput;
use super::view_model::{AddTourViewModel, ListField};
use crate::domain::a001_division::ui::select::DivisionSelect;
use crate::domain::a002_tour_type::ui::select::TourTypeSelect;
use crate::shared::components::image_picker::ImagePicker;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::{from_input_value, to_input_value};
use crate::shared::toast::use_toast;

type Getter = fn(&TourForm) -> String;
type Setter = fn(&mut TourForm, String);

fn error_line(vm: AddTourViewModel, field: &'static str) -> impl IntoView {
    move || vm.field_error(field).map(|m| view! { <p class="field-error">{m}</p> })
}

fn text_field(
    vm: AddTourViewModel,
    label: &'static str,
    field: &'static str,
    input_type: &'static str,
    get: Getter,
    set: Setter,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                id=field
                type=input_type
                prop:value=move || vm.form.with(get)
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    vm.form.update(|f| set(f, value));
                }
            />
            {error_line(vm, field)}
        </div>
    }
}

fn date_field(
    vm: AddTourViewModel,
    label: &'static str,
    field: &'static str,
    get: fn(&TourForm) -> Option<chrono::NaiveDate>,
    set: fn(&mut TourForm, Option<chrono::NaiveDate>),
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=field>{label}</label>
            <input
                id=field
                type="date"
                prop:value=move || to_input_value(vm.form.with(get))
                on:change=move |ev| {
                    let value = from_input_value(&event_target_value(&ev));
                    vm.form.update(|f| set(f, value));
                }
            />
            {error_line(vm, field)}
        </div>
    }
}

#[component]
pub fn AddTourForm() -> impl IntoView {
    let vm = AddTourViewModel::new();
    vm.load_options();
    let toast = use_toast();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command(toast);
    };

    view! {
        <div class="page page--form">
            <PageHeader title="Add New Tour" subtitle={"Provide the main information about the tour.".to_string()} />

            <form class="form form--wide" on:submit=on_submit>
                <section class="card">
                    <h2 class="card__title">"Tour Details"</h2>

                    {text_field(vm, "Tour Title", "title", "text", |f| f.title.clone(), |f, v| f.title = v)}

                    <div class="form-row">
                        {text_field(vm, "Location", "location", "text", |f| f.location.clone(), |f, v| f.location = v)}
                        {text_field(vm, "Cost (Per Person)", "costFrom", "number", |f| f.cost_from.clone(), |f, v| f.cost_from = v)}
                    </div>

                    <div class="form-row">
                        {text_field(vm, "Departure Location", "departureLocation", "text", |f| f.departure_location.clone(), |f, v| f.departure_location = v)}
                        {text_field(vm, "Arrival Location", "arrivalLocation", "text", |f| f.arrival_location.clone(), |f, v| f.arrival_location = v)}
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label>"Division"</label>
                            <DivisionSelect
                                divisions=vm.divisions
                                value=Signal::derive(move || vm.form.with(|f| f.division.clone()))
                                on_change=Callback::new(move |v: String| vm.form.update(|f| f.division = v))
                            />
                            {error_line(vm, "division")}
                        </div>
                        <div class="form-group">
                            <label>"Tour Type"</label>
                            <TourTypeSelect
                                tour_types=vm.tour_types
                                value=Signal::derive(move || vm.form.with(|f| f.tour_type.clone()))
                                on_change=Callback::new(move |v: String| vm.form.update(|f| f.tour_type = v))
                            />
                            {error_line(vm, "tourType")}
                        </div>
                    </div>

                    <div class="form-row">
                        {text_field(vm, "Max Guest", "maxGuests", "number", |f| f.max_guests.clone(), |f, v| f.max_guests = v)}
                        {text_field(vm, "Minimum Age", "minAge", "number", |f| f.min_age.clone(), |f, v| f.min_age = v)}
                    </div>

                    <div class="form-row">
                        {date_field(vm, "Start Date", "startDate", |f| f.start_date, |f, v| f.start_date = v)}
                        {date_field(vm, "End Date", "endDate", |f| f.end_date, |f, v| f.end_date = v)}
                    </div>

                    <div class="form-group">
                        <label for="description">"Description"</label>
                        <textarea
                            id="description"
                            rows="5"
                            prop:value=move || vm.form.with(|f| f.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|f| f.description = value);
                            }
                        ></textarea>
                        {error_line(vm, "description")}
                    </div>

                    <div class="form-group">
                        <label>"Tour Images"</label>
                        <ImagePicker files=vm.images multiple=true />
                    </div>
                </section>

                <section class="card">
                    <div class="form-row">
                        <DynamicListInput vm=vm field=ListField::Included />
                        <DynamicListInput vm=vm field=ListField::Excluded />
                    </div>
                    <div class="form-row">
                        <DynamicListInput vm=vm field=ListField::Amenities />
                        <DynamicListInput vm=vm field=ListField::TourPlan />
                    </div>
                </section>

                <div class="form-actions">
                    <button type="submit" class="button button--primary" disabled=move || vm.is_saving.get()>
                        {move || if vm.is_saving.get() { "Creating..." } else { "Create Tour" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
