pub mod handlers;
pub mod mapping;
pub mod models;
