use chrono::Utc;

use crate::catalog::SurfSpot;
use crate::conditions::{
    generate_current_conditions, generate_forecast, SimulatedCondition, SpotForecast,
    FORECAST_DAYS,
};

/// Produces simulated conditions using the thread-local RNG and the system clock
#[derive(Clone, Default)]
pub struct ConditionsService;

impl ConditionsService {
    pub fn new() -> Self {
        Self
    }

    pub fn current_conditions(&self, spot: &SurfSpot) -> SimulatedCondition {
        generate_current_conditions(&mut rand::rng(), spot, Utc::now())
    }

    /// Seven-day forecast starting today (UTC)
    pub fn forecast(&self, spot: &SurfSpot) -> SpotForecast {
        let today = Utc::now().date_naive();
        generate_forecast(&mut rand::rng(), spot, today, FORECAST_DAYS)
    }
}
