pub mod add_form;
pub mod card;
pub mod details;
pub mod filters;
pub mod list;
