use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Serialize, Serializer};
use utoipa::ToSchema;

/// 8-point compass wind direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum WindDirection {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl WindDirection {
    pub const ALL: [Self; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];
}

/// Qualitative wave rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum WaveQuality {
    #[serde(rename = "Excelente")]
    Excellent,
    #[serde(rename = "Buena")]
    Good,
    #[serde(rename = "Regular")]
    Fair,
    #[serde(rename = "Mala")]
    Poor,
}

impl WaveQuality {
    pub const ALL: [Self; 4] = [Self::Excellent, Self::Good, Self::Fair, Self::Poor];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum TidePhase {
    #[serde(rename = "Bajamar")]
    Low,
    #[serde(rename = "Subiendo")]
    Rising,
    #[serde(rename = "Pleamar")]
    High,
    #[serde(rename = "Bajando")]
    Falling,
}

impl TidePhase {
    pub const ALL: [Self; 4] = [Self::Low, Self::Rising, Self::High, Self::Falling];
}

/// Go/no-go advice attached to current conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum SessionAdvice {
    #[serde(rename = "¡Buen día para surfear!")]
    GoSurf,
    #[serde(rename = "Mejor esperar a mañana")]
    WaitForTomorrow,
}

/// Day rating attached to each forecast entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub enum DayOutlook {
    #[serde(rename = "¡Día perfecto!")]
    Perfect,
    #[serde(rename = "Día bueno")]
    Good,
    #[serde(rename = "Mejor otro día")]
    AnotherDay,
}

/// Simulated "right now" conditions for a spot. Built per request, never stored.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatedCondition {
    pub spot_id: i64,
    #[serde(rename = "spotNombre")]
    pub spot_name: &'static str,
    #[serde(serialize_with = "serialize_timestamp")]
    #[schema(value_type = String, example = "2025-06-01T08:30:00.000Z")]
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "alturaOlas", serialize_with = "serialize_meters")]
    #[schema(value_type = String, example = "2.3m")]
    pub wave_height_m: f64,
    #[serde(rename = "direccionViento")]
    pub wind_direction: WindDirection,
    #[serde(rename = "velocidadViento", serialize_with = "serialize_kmh")]
    #[schema(value_type = String, example = "15 km/h")]
    pub wind_speed_kmh: u32,
    #[serde(rename = "temperatura", serialize_with = "serialize_celsius")]
    #[schema(value_type = String, example = "22°C")]
    pub temperature_c: i32,
    #[serde(rename = "calidadOlas")]
    pub wave_quality: WaveQuality,
    #[serde(rename = "marea")]
    pub tide: TidePhase,
    #[serde(rename = "recomendacion")]
    pub advice: SessionAdvice,
}

/// One day of a simulated forecast
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ForecastDay {
    #[serde(rename = "fecha")]
    #[schema(value_type = String, format = Date, example = "2025-06-01")]
    pub date: NaiveDate,
    #[serde(rename = "alturaOlas", serialize_with = "serialize_meters")]
    #[schema(value_type = String, example = "1.7m")]
    pub wave_height_m: f64,
    #[serde(rename = "direccionViento")]
    pub wind_direction: WindDirection,
    #[serde(rename = "velocidadViento", serialize_with = "serialize_kmh")]
    #[schema(value_type = String, example = "12 km/h")]
    pub wind_speed_kmh: u32,
    #[serde(rename = "temperatura", serialize_with = "serialize_celsius")]
    #[schema(value_type = String, example = "20°C")]
    pub temperature_c: i32,
    #[serde(rename = "calidadOlas")]
    pub wave_quality: WaveQuality,
    #[serde(rename = "recomendacion")]
    pub outlook: DayOutlook,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SpotForecast {
    #[serde(rename = "spotId")]
    pub spot_id: i64,
    #[serde(rename = "spotNombre")]
    pub spot_name: &'static str,
    #[serde(rename = "pronostico")]
    pub days: Vec<ForecastDay>,
}

// Display formatting for the numeric fields ("2.3m", "15 km/h", "22°C")

fn serialize_timestamp<S: Serializer>(value: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn serialize_meters<S: Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{:.1}m", value))
}

fn serialize_kmh<S: Serializer>(value: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{} km/h", value))
}

fn serialize_celsius<S: Serializer>(value: &i32, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{}°C", value))
}
