use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, HeaderName, Method},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;
use tower_http::cors::{Any, CorsLayer};
use tracing::{debug, info, instrument, warn};
use utoipa::{OpenApi, ToSchema};

use crate::api_error::{ApiError, ErrorResponse};
use crate::catalog::{Coordinates, SurfSpot};
use crate::conditions::{
    DayOutlook, ForecastDay, SessionAdvice, SimulatedCondition, SpotForecast, TidePhase,
    WaveQuality, WindDirection,
};
use crate::services::developer_service::{BestSession, DeveloperStatistics, Tip};
use crate::services::{ConditionsService, DeveloperService, SpotService};

pub const GREETING: &str = "¡Hola, mundo! 🌊 API de Surf para Desarrolladores!";

#[derive(Clone, Default)]
pub struct AppState {
    pub spot_service: SpotService,
    pub conditions_service: ConditionsService,
    pub developer_service: DeveloperService,
}

// Success envelopes. Every `/api` endpoint answers `{ success: true, data, .. }`.

#[derive(Debug, Serialize, ToSchema)]
pub struct SpotListResponse {
    pub success: bool,
    #[schema(value_type = Vec<SurfSpot>)]
    pub data: &'static [SurfSpot],
    pub total: usize,
}

impl SpotListResponse {
    pub fn new(spots: &'static [SurfSpot]) -> Self {
        Self {
            success: true,
            data: spots,
            total: spots.len(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SpotResponse {
    pub success: bool,
    #[schema(value_type = SurfSpot)]
    pub data: &'static SurfSpot,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ConditionsResponse {
    pub success: bool,
    pub data: SimulatedCondition,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ForecastResponse {
    pub success: bool,
    pub data: SpotForecast,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct StatisticsResponse {
    pub success: bool,
    pub data: DeveloperStatistics,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TipsResponse {
    pub success: bool,
    #[schema(value_type = Vec<Tip>)]
    pub data: &'static [Tip],
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EchoResponse {
    #[schema(value_type = Object)]
    pub recibido: Value,
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Surf Spots API",
        description = "Surf spot catalog with simulated conditions and forecasts"
    ),
    paths(
        root,
        echo,
        list_spots,
        get_spot,
        get_current_conditions,
        get_forecast,
        get_developer_statistics,
        get_surf_code_tips,
    ),
    components(schemas(
        SurfSpot,
        Coordinates,
        SimulatedCondition,
        ForecastDay,
        SpotForecast,
        WindDirection,
        WaveQuality,
        TidePhase,
        SessionAdvice,
        DayOutlook,
        DeveloperStatistics,
        BestSession,
        Tip,
        SpotListResponse,
        SpotResponse,
        ConditionsResponse,
        ForecastResponse,
        StatisticsResponse,
        TipsResponse,
        EchoResponse,
        ErrorResponse,
    )),
    tags(
        (name = "spots", description = "Surf spot catalog"),
        (name = "conditions", description = "Simulated conditions and forecasts"),
        (name = "developer", description = "Developer statistics and tips"),
        (name = "misc", description = "Greeting and echo")
    )
)]
pub struct ApiDoc;

pub fn generate_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([
            header::ORIGIN,
            HeaderName::from_static("x-requested-with"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]);

    let api_routes = Router::new()
        .route("/surf-spots", get(list_spots))
        .route("/surf-spots/{id}", get(get_spot))
        .route("/condiciones-actuales/{spot_id}", get(get_current_conditions))
        .route("/pronostico/{spot_id}", get(get_forecast))
        .route("/estadisticas-desarrollador", get(get_developer_statistics))
        .route("/consejos-surf-codigo", get(get_surf_code_tips));

    Router::new()
        .route("/", get(root))
        .route("/echo", post(echo))
        .nest("/api", api_routes)
        .layer(cors)
        .with_state(state)
}

/// Endpoint listing logged at startup
pub fn endpoint_summary() -> &'static [(&'static str, &'static str, &'static str)] {
    &[
        ("GET", "/api/surf-spots", "Lista de spots de surf"),
        ("GET", "/api/surf-spots/:id", "Detalles de un spot específico"),
        ("GET", "/api/condiciones-actuales/:spotId", "Condiciones actuales"),
        ("GET", "/api/pronostico/:spotId", "Pronóstico de 7 días"),
        ("GET", "/api/estadisticas-desarrollador", "Estadísticas del dev surfista"),
        ("GET", "/api/consejos-surf-codigo", "Consejos para surfistas programadores"),
    ]
}

#[utoipa::path(
    get,
    path = "/",
    tag = "misc",
    responses((status = 200, description = "Plain text greeting", body = String, content_type = "text/plain"))
)]
async fn root() -> &'static str {
    debug!("Greeting requested");
    GREETING
}

/// Echo the JSON body back under `recibido`
///
/// Only `application/json` bodies are parsed, and the top-level value must be
/// an object or an array. Other media types and empty bodies echo `{}`.
#[utoipa::path(
    post,
    path = "/echo",
    tag = "misc",
    responses(
        (status = 200, description = "The received body", body = EchoResponse),
        (status = 400, description = "JSON body does not parse or is not an object/array", body = ErrorResponse)
    )
)]
#[instrument(skip(headers, body), fields(body_size = body.len()))]
async fn echo(headers: HeaderMap, body: Bytes) -> Result<Json<EchoResponse>, ApiError> {
    let recibido = if is_json_request(&headers) && !body.is_empty() {
        parse_json_body(&body).map_err(|e| {
            warn!("Rejecting echo body: {}", e);
            e
        })?
    } else {
        debug!("Echo body is empty or not JSON, echoing empty object");
        Value::Object(serde_json::Map::new())
    };

    Ok(Json(EchoResponse { recibido }))
}

#[utoipa::path(
    get,
    path = "/api/surf-spots",
    tag = "spots",
    responses((status = 200, description = "Every spot in catalog order", body = SpotListResponse))
)]
#[instrument(skip(state))]
async fn list_spots(State(state): State<AppState>) -> Json<SpotListResponse> {
    let spots = state.spot_service.list_spots();
    info!("Listing {} surf spots", spots.len());
    Json(SpotListResponse::new(spots))
}

#[utoipa::path(
    get,
    path = "/api/surf-spots/{id}",
    tag = "spots",
    params(("id" = String, Path, description = "Spot id")),
    responses(
        (status = 200, description = "The requested spot", body = SpotResponse),
        (status = 404, description = "No spot with that id", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(id = %id))]
async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SpotResponse>, ApiError> {
    let spot = find_spot(&state, &id)?;
    info!("Retrieved surf spot {} ({})", spot.id, spot.name);
    Ok(Json(SpotResponse {
        success: true,
        data: spot,
    }))
}

#[utoipa::path(
    get,
    path = "/api/condiciones-actuales/{spot_id}",
    tag = "conditions",
    params(("spot_id" = String, Path, description = "Spot id")),
    responses(
        (status = 200, description = "Simulated current conditions", body = ConditionsResponse),
        (status = 404, description = "No spot with that id", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(spot_id = %spot_id))]
async fn get_current_conditions(
    State(state): State<AppState>,
    Path(spot_id): Path<String>,
) -> Result<Json<ConditionsResponse>, ApiError> {
    let spot = find_spot(&state, &spot_id)?;
    let condition = state.conditions_service.current_conditions(spot);

    info!(
        "Simulated conditions for {}: {:.1}m, wind {} km/h",
        spot.name, condition.wave_height_m, condition.wind_speed_kmh
    );

    Ok(Json(ConditionsResponse {
        success: true,
        data: condition,
    }))
}

#[utoipa::path(
    get,
    path = "/api/pronostico/{spot_id}",
    tag = "conditions",
    params(("spot_id" = String, Path, description = "Spot id")),
    responses(
        (status = 200, description = "Simulated 7-day forecast", body = ForecastResponse),
        (status = 404, description = "No spot with that id", body = ErrorResponse)
    )
)]
#[instrument(skip(state), fields(spot_id = %spot_id))]
async fn get_forecast(
    State(state): State<AppState>,
    Path(spot_id): Path<String>,
) -> Result<Json<ForecastResponse>, ApiError> {
    let spot = find_spot(&state, &spot_id)?;
    let forecast = state.conditions_service.forecast(spot);

    info!("Simulated {}-day forecast for {}", forecast.days.len(), spot.name);

    Ok(Json(ForecastResponse {
        success: true,
        data: forecast,
    }))
}

#[utoipa::path(
    get,
    path = "/api/estadisticas-desarrollador",
    tag = "developer",
    responses((status = 200, description = "Simulated developer statistics", body = StatisticsResponse))
)]
#[instrument(skip(state))]
async fn get_developer_statistics(
    State(state): State<AppState>,
) -> Json<StatisticsResponse> {
    debug!("Generating developer statistics");
    Json(StatisticsResponse {
        success: true,
        data: state.developer_service.statistics(),
    })
}

#[utoipa::path(
    get,
    path = "/api/consejos-surf-codigo",
    tag = "developer",
    responses((status = 200, description = "Surf and coding tips", body = TipsResponse))
)]
#[instrument(skip(state))]
async fn get_surf_code_tips(State(state): State<AppState>) -> Json<TipsResponse> {
    let tips = state.developer_service.tips();
    debug!("Returning {} tips", tips.len());
    Json(TipsResponse {
        success: true,
        data: tips,
    })
}

fn find_spot(state: &AppState, raw_id: &str) -> Result<&'static SurfSpot, ApiError> {
    state.spot_service.resolve_spot(raw_id).ok_or_else(|| {
        warn!("Surf spot {} not found", raw_id);
        ApiError::SpotNotFound(raw_id.to_string())
    })
}

fn is_json_request(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
        })
        .unwrap_or(false)
}

/// Parse a request body as a JSON object or array
fn parse_json_body(body: &[u8]) -> Result<Value, ApiError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| ApiError::InvalidBody(e.to_string()))?;

    match value {
        Value::Object(_) | Value::Array(_) => Ok(value),
        other => Err(ApiError::InvalidBody(format!(
            "top-level JSON must be an object or array, got {}",
            other
        ))),
    }
}
