pub mod auth;
pub mod dashboard;
pub mod index;
pub mod not_found;
