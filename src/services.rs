pub mod conditions_service;
pub mod developer_service;
pub mod spot_service;

pub use conditions_service::ConditionsService;
pub use developer_service::DeveloperService;
pub use spot_service::SpotService;
