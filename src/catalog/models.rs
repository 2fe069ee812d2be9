use serde::Serialize;
use utoipa::ToSchema;

/// Latitude/longitude pair in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// A surf spot from the fixed catalog
///
/// Field names on the wire follow the public API contract (Spanish camelCase).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct SurfSpot {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: &'static str,
    #[serde(rename = "ubicacion")]
    pub location: &'static str,
    #[serde(rename = "tipo")]
    pub break_type: &'static str,
    #[serde(rename = "dificultad")]
    pub difficulty: &'static str,
    #[serde(rename = "mejorEpoca")]
    pub best_season: &'static str,
    #[serde(rename = "alturaPromedio")]
    pub average_height: &'static str,
    #[serde(rename = "descripcion")]
    pub description: &'static str,
    #[serde(rename = "coordenadas")]
    pub coordinates: Coordinates,
}

/// The surf spot catalog, in display order. Never mutated.
pub static SURF_SPOTS: [SurfSpot; 5] = [
    SurfSpot {
        id: 1,
        name: "Pipeline",
        location: "North Shore, Hawaii",
        break_type: "Reef Break",
        difficulty: "Experto",
        best_season: "Noviembre - Marzo",
        average_height: "3-6 metros",
        description: "Una de las olas más famosas del mundo, conocida por sus tubos perfectos",
        coordinates: Coordinates {
            lat: 21.6649,
            lng: -158.0534,
        },
    },
    SurfSpot {
        id: 2,
        name: "Teahupoo",
        location: "Tahití",
        break_type: "Reef Break",
        difficulty: "Experto",
        best_season: "Mayo - Octubre",
        average_height: "2-4 metros",
        description: "Ola pesada y tubular, famosa por su ferocidad",
        coordinates: Coordinates {
            lat: -17.8419,
            lng: -149.2674,
        },
    },
    SurfSpot {
        id: 3,
        name: "Mundaka",
        location: "País Vasco, España",
        break_type: "River Mouth",
        difficulty: "Intermedio-Experto",
        best_season: "Septiembre - Marzo",
        average_height: "2-4 metros",
        description: "Ola izquierda perfecta en la desembocadura del río",
        coordinates: Coordinates {
            lat: 43.4073,
            lng: -2.6987,
        },
    },
    SurfSpot {
        id: 4,
        name: "Jeffreys Bay",
        location: "Sudáfrica",
        break_type: "Point Break",
        difficulty: "Intermedio-Experto",
        best_season: "Junio - Agosto",
        average_height: "2-5 metros",
        description: "Ola derecha larga y perfecta, conocida como 'J-Bay'",
        coordinates: Coordinates {
            lat: -34.0333,
            lng: 24.9167,
        },
    },
    SurfSpot {
        id: 5,
        name: "Uluwatu",
        location: "Bali, Indonesia",
        break_type: "Reef Break",
        difficulty: "Experto",
        best_season: "Mayo - Septiembre",
        average_height: "2-4 metros",
        description: "Ola izquierda poderosa en un templo sagrado",
        coordinates: Coordinates {
            lat: -8.8167,
            lng: 115.0833,
        },
    },
];
