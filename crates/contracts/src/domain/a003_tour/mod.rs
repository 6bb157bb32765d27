pub mod aggregate;
pub mod form;
pub mod query;

pub use aggregate::{CreateTourDto, Tour, TourPricing};
pub use form::{DynamicList, ListRow, TourForm};
pub use query::{TourFilters, TourQuery};
