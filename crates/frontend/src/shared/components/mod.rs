pub mod badge;
pub mod image_picker;
pub mod loading;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
