pub mod models;
pub mod spot_repository;

pub use models::*;
pub use spot_repository::SpotRepository;
