pub mod about;
pub mod analytics;
pub mod home;
pub mod not_found;
pub mod unauthorized;
