// API integration tests that verify HTTP endpoints
// Drives the real Axum router with in-process requests

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use chrono::{Days, NaiveDate, Utc};
use http_body_util::BodyExt; // For `.collect()`
use serde_json::{json, Value};
use surf_spots_service::api::{create_router, AppState, GREETING};
use surf_spots_service::catalog::SURF_SPOTS;
use tower::ServiceExt; // For `oneshot`

const NOT_FOUND_MESSAGE: &str = "Spot de surf no encontrado";

fn create_test_app() -> axum::Router {
    create_router(AppState::default())
}

async fn send(request: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = create_test_app().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await;
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn post_echo(content_type: Option<&str>, body: &str) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(Method::POST).uri("/echo");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let (status, _, body) = send(builder.body(Body::from(body.to_string())).unwrap()).await;
    (status, serde_json::from_slice(&body).unwrap())
}

fn assert_not_found(status: StatusCode, json: &Value) {
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, &json!({ "success": false, "message": NOT_FOUND_MESSAGE }));
}

fn parse_number_with_suffix(value: &Value, suffix: &str) -> f64 {
    value
        .as_str()
        .unwrap()
        .strip_suffix(suffix)
        .unwrap()
        .parse()
        .unwrap()
}

#[tokio::test]
async fn test_root_greeting() {
    let (status, headers, body) =
        send(Request::builder().uri("/").body(Body::empty()).unwrap()).await;

    assert_eq!(status, StatusCode::OK);
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/plain"));
    assert_eq!(String::from_utf8(body).unwrap(), GREETING);
}

#[tokio::test]
async fn test_list_spots() {
    let (status, json) = get_json("/api/surf-spots").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["total"], 5);

    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    let ids: Vec<i64> = data.iter().map(|s| s["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(json["data"], serde_json::to_value(&SURF_SPOTS).unwrap());
}

#[tokio::test]
async fn test_get_spot_returns_stored_record() {
    for spot in SURF_SPOTS.iter() {
        let (status, json) = get_json(&format!("/api/surf-spots/{}", spot.id)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::to_value(spot).unwrap());
        assert!(json.get("total").is_none());
    }
}

#[tokio::test]
async fn test_get_pipeline() {
    let (status, json) = get_json("/api/surf-spots/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["nombre"], "Pipeline");
    assert_eq!(json["data"]["ubicacion"], "North Shore, Hawaii");
    assert_eq!(json["data"]["tipo"], "Reef Break");
    assert_eq!(json["data"]["mejorEpoca"], "Noviembre - Marzo");
    assert_eq!(json["data"]["coordenadas"]["lat"], 21.6649);
    assert_eq!(json["data"]["coordenadas"]["lng"], -158.0534);
}

#[tokio::test]
async fn test_get_spot_hex_id() {
    let (status, json) = get_json("/api/surf-spots/0x1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["nombre"], "Pipeline");
}

#[tokio::test]
async fn test_get_spot_trailing_text_id() {
    let (status, json) = get_json("/api/pronostico/4abc").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["spotNombre"], "Jeffreys Bay");
}

#[tokio::test]
async fn test_get_spot_not_found() {
    let (status, json) = get_json("/api/surf-spots/999").await;
    assert_not_found(status, &json);
}

#[tokio::test]
async fn test_unknown_ids_are_not_found_everywhere() {
    for id in ["0", "9999", "-1", "abc"] {
        for prefix in [
            "/api/surf-spots",
            "/api/condiciones-actuales",
            "/api/pronostico",
        ] {
            let (status, json) = get_json(&format!("{prefix}/{id}")).await;
            assert_not_found(status, &json);
        }
    }
}

#[tokio::test]
async fn test_current_conditions() {
    let (status, json) = get_json("/api/condiciones-actuales/2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    assert_eq!(data["spotId"], 2);
    assert_eq!(data["spotNombre"], "Teahupoo");
    assert!(data["timestamp"].as_str().unwrap().ends_with('Z'));

    let wave = parse_number_with_suffix(&data["alturaOlas"], "m");
    assert!((1.0..=4.0).contains(&wave));
    let wind = parse_number_with_suffix(&data["velocidadViento"], " km/h");
    assert!((5.0..=25.0).contains(&wind));
    let temperature = parse_number_with_suffix(&data["temperatura"], "°C");
    assert!((18.0..=28.0).contains(&temperature));

    let direction = data["direccionViento"].as_str().unwrap();
    assert!(["N", "NE", "E", "SE", "S", "SW", "W", "NW"].contains(&direction));
    let quality = data["calidadOlas"].as_str().unwrap();
    assert!(["Excelente", "Buena", "Regular", "Mala"].contains(&quality));
    let tide = data["marea"].as_str().unwrap();
    assert!(["Bajamar", "Subiendo", "Pleamar", "Bajando"].contains(&tide));
    let advice = data["recomendacion"].as_str().unwrap();
    assert!(["¡Buen día para surfear!", "Mejor esperar a mañana"].contains(&advice));
}

#[tokio::test]
async fn test_forecast_has_seven_consecutive_days() {
    let today = Utc::now().date_naive();
    let (status, json) = get_json("/api/pronostico/3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(json["data"]["spotId"], 3);
    assert_eq!(json["data"]["spotNombre"], "Mundaka");

    let days = json["data"]["pronostico"].as_array().unwrap();
    assert_eq!(days.len(), 7);

    let dates: Vec<NaiveDate> = days
        .iter()
        .map(|d| NaiveDate::parse_from_str(d["fecha"].as_str().unwrap(), "%Y-%m-%d").unwrap())
        .collect();
    // Tolerate the request straddling midnight UTC
    assert!(dates[0] == today || Some(dates[0]) == today.checked_add_days(Days::new(1)));
    for pair in dates.windows(2) {
        assert!(pair[1] > pair[0]);
        assert_eq!(Some(pair[1]), pair[0].succ_opt());
    }

    for day in days {
        let wave = parse_number_with_suffix(&day["alturaOlas"], "m");
        assert!((0.5..=4.5).contains(&wave));
        let wind = parse_number_with_suffix(&day["velocidadViento"], " km/h");
        assert!((5.0..=30.0).contains(&wind));
        let temperature = parse_number_with_suffix(&day["temperatura"], "°C");
        assert!((16.0..=28.0).contains(&temperature));
        let advice = day["recomendacion"].as_str().unwrap();
        assert!(["¡Día perfecto!", "Día bueno", "Mejor otro día"].contains(&advice));
        assert!(day.get("marea").is_none());
    }
}

#[tokio::test]
async fn test_developer_statistics() {
    let (status, json) = get_json("/api/estadisticas-desarrollador").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let data = &json["data"];
    let hours = parse_number_with_suffix(&data["tiempoSurfeando"], " horas");
    assert!((500.0..1500.0).contains(&hours));
    let spots = data["spotsVisitados"].as_u64().unwrap();
    assert!((20..70).contains(&spots));
    let waves = data["olasAtrapadas"].as_u64().unwrap();
    assert!((2000..7000).contains(&waves));
    let lines = parse_number_with_suffix(&data["codigoEscritoEnPlaya"], " líneas");
    assert!((50.0..150.0).contains(&lines));
    let projects = data["proyectosCompletados"].as_u64().unwrap();
    assert!((10..30).contains(&projects));
    assert_eq!(
        data["mejorSesion"],
        json!({
            "fecha": "2024-01-15",
            "spot": "Pipeline",
            "duracion": "4 horas",
            "olasAtrapadas": 25,
            "alturaMaxima": "3.5m"
        })
    );
    assert_eq!(data["balanceVida"], "Surf + Code = Felicidad 🏄‍♂️💻");
}

#[tokio::test]
async fn test_surf_code_tips() {
    let (status, json) = get_json("/api/consejos-surf-codigo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);

    let tips = json["data"].as_array().unwrap();
    assert_eq!(tips.len(), 5);
    assert_eq!(tips[0]["categoria"], "Productividad");
    assert_eq!(
        tips[2]["relacion"],
        "El desarrollo es iterativo, igual que mejorar en surf"
    );
    for tip in tips {
        assert!(tip["consejo"].as_str().is_some());
    }
}

#[tokio::test]
async fn test_echo_round_trip() {
    let (status, _, body) = send(
        Request::builder()
            .method(Method::POST)
            .uri("/echo")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(r#"{"a":1}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(String::from_utf8(body).unwrap(), r#"{"recibido":{"a":1}}"#);
}

#[tokio::test]
async fn test_echo_nested_body() {
    let body = r#"{"ola":{"altura":2.5,"tags":["tubo","izquierda"]},"ok":true}"#;
    let (status, json) = post_echo(Some("application/json; charset=utf-8"), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json,
        json!({ "recibido": serde_json::from_str::<Value>(body).unwrap() })
    );
}

#[tokio::test]
async fn test_echo_without_json_body() {
    let (status, json) = post_echo(None, "hola").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "recibido": {} }));

    let (status, json) = post_echo(Some("application/json"), "").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "recibido": {} }));
}

#[tokio::test]
async fn test_echo_array_body() {
    let (status, json) = post_echo(Some("application/json"), "[1,\"dos\"]").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "recibido": [1, "dos"] }));
}

#[tokio::test]
async fn test_echo_rejects_top_level_scalars() {
    for body in ["1", "\"x\"", "true", "null"] {
        let (status, json) = post_echo(Some("application/json"), body).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(json["success"], false);
    }
}

#[tokio::test]
async fn test_echo_ignores_json_suffix_media_types() {
    let (status, json) = post_echo(Some("application/vnd.api+json"), r#"{"a":1}"#).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "recibido": {} }));
}

#[tokio::test]
async fn test_echo_malformed_json() {
    let (status, json) = post_echo(Some("application/json"), "{\"a\":").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert!(json["message"].as_str().is_some());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let (status, headers, _) = send(
        Request::builder()
            .uri("/api/surf-spots")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_cors_preflight() {
    let (status, headers, _) = send(
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/echo")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("content-type"));
    assert!(allowed.contains("x-requested-with"));
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let (status, _, _) = send(
        Request::builder()
            .uri("/api/olas")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
