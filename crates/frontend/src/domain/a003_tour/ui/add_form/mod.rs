mod dynamic_list;
mod view;
mod view_model;

pub use view::AddTourForm;
