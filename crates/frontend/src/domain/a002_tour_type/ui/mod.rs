pub mod add_modal;
pub mod list;
pub mod select;
