pub mod generator;
pub mod models;

pub use generator::{generate_current_conditions, generate_forecast, FORECAST_DAYS};
pub use models::*;
