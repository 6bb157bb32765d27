use contracts::domain::a001_division::Division;
use contracts::domain::a002_tour_type::TourType;
use contracts::domain::a003_tour::form::{DYNAMIC_FIELDS, IMAGES};
use contracts::domain::a003_tour::{DynamicList, TourForm};
use contracts::shared::FormErrors;
use leptos::prelude::*;
use uuid::Uuid;

use crate::domain::a001_division::api as division_api;
use crate::domain::a002_tour_type::api as tour_type_api;
use crate::domain::a003_tour::api;
use crate::shared::components::image_picker::FileSelection;
use crate::shared::date_utils::today;
use crate::shared::toast::{ToastKind, ToastService};

/// The four row-by-row inputs of the form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListField {
    Included,
    Excluded,
    Amenities,
    TourPlan,
}

impl ListField {
    pub fn label(self) -> &'static str {
        match self {
            ListField::Included => "Included",
            ListField::Excluded => "Excluded",
            ListField::Amenities => "Amenities",
            ListField::TourPlan => "Tour Plan",
        }
    }

    pub fn list(self, form: &TourForm) -> &DynamicList {
        match self {
            ListField::Included => &form.included,
            ListField::Excluded => &form.excluded,
            ListField::Amenities => &form.amenities,
            ListField::TourPlan => &form.tour_plan,
        }
    }

    pub fn list_mut(self, form: &mut TourForm) -> &mut DynamicList {
        match self {
            ListField::Included => &mut form.included,
            ListField::Excluded => &mut form.excluded,
            ListField::Amenities => &mut form.amenities,
            ListField::TourPlan => &mut form.tour_plan,
        }
    }
}

fn fresh_form() -> TourForm {
    today().map(TourForm::prefilled).unwrap_or_default()
}

/// ViewModel for the add-tour form
#[derive(Clone, Copy)]
pub struct AddTourViewModel {
    pub form: RwSignal<TourForm>,
    pub errors: RwSignal<FormErrors>,
    pub images: FileSelection,
    pub divisions: RwSignal<Vec<Division>>,
    pub tour_types: RwSignal<Vec<TourType>>,
    pub is_saving: RwSignal<bool>,
}

impl AddTourViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(fresh_form()),
            errors: RwSignal::new(FormErrors::new()),
            images: RwSignal::new_local(Vec::new()),
            divisions: RwSignal::new(Vec::new()),
            tour_types: RwSignal::new(Vec::new()),
            is_saving: RwSignal::new(false),
        }
    }

    /// Fill the division and tour type selects
    pub fn load_options(&self) {
        let divisions = self.divisions;
        let tour_types = self.tour_types;
        wasm_bindgen_futures::spawn_local(async move {
            match division_api::fetch_divisions().await {
                Ok(v) => divisions.set(v),
                Err(e) => log::error!("{}", e),
            }
            match tour_type_api::fetch_tour_type_options().await {
                Ok(v) => tour_types.set(v),
                Err(e) => log::error!("{}", e),
            }
        });
    }

    pub fn field_error(&self, field: &'static str) -> Option<String> {
        self.errors.with(|e| e.message_for(field).map(str::to_string))
    }

    pub fn add_row(&self, field: ListField) {
        self.form.update(|f| {
            field.list_mut(f).append("");
        });
    }

    pub fn remove_row(&self, field: ListField, key: Uuid) {
        self.form.update(|f| {
            field.list_mut(f).remove(key);
        });
    }

    pub fn set_row(&self, field: ListField, key: Uuid, value: String) {
        self.form.update(|f| {
            field.list_mut(f).set(key, value);
        });
    }

    fn reset(&self) {
        self.form.set(fresh_form());
        self.errors.set(FormErrors::new());
        self.images.set(Vec::new());
    }

    /// Validate, then post the tour with its images
    pub fn submit_command(&self, toast: ToastService) {
        let toast_id = toast.loading("Creating tour....");
        let image_count = self.images.with(|files| files.len());

        let dto = match self.form.with(|f| f.validate(image_count)) {
            Ok(dto) => dto,
            Err(errors) => {
                let message = errors
                    .message_for(IMAGES)
                    .or_else(|| errors.message_for(DYNAMIC_FIELDS))
                    .unwrap_or("Please correct the highlighted fields.")
                    .to_string();
                self.errors.set(errors);
                toast.resolve(toast_id, ToastKind::Error, message);
                return;
            }
        };
        self.errors.set(FormErrors::new());

        let files = self.images.get_untracked();
        let this = *self;
        this.is_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match api::create_tour(&dto, &files).await {
                Ok(tour) => {
                    log::info!("tour {} created", tour.id);
                    toast.resolve(toast_id, ToastKind::Success, "Tour created");
                    this.reset();
                }
                Err(e) => {
                    log::error!("failed to create tour: {}", e);
                    let message = if e.trim().is_empty() {
                        "Something went wrong".to_string()
                    } else {
                        e
                    };
                    toast.resolve(toast_id, ToastKind::Error, message);
                }
            }
            this.is_saving.set(false);
        });
    }
}

impl Default for AddTourViewModel {
    fn default() -> Self {
        Self::new()
    }
}
