pub mod api;
pub mod api_error;
pub mod app;
pub mod catalog;
pub mod conditions;
pub mod config;
pub mod services;
pub mod utils;
