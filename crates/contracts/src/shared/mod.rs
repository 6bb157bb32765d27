pub mod api_response;
pub mod form_errors;
pub mod quantity_selector;

pub use api_response::{ApiError, ApiResponse, Meta, Page};
pub use form_errors::{FieldError, FormErrors};
pub use quantity_selector::{QuantitySelector, SelectionError, SelectionSnapshot};
