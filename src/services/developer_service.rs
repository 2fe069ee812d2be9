use rand::Rng;
use serde::Serialize;
use utoipa::ToSchema;

/// Fixed "best session" record included in every statistics payload
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BestSession {
    #[serde(rename = "fecha")]
    pub date: &'static str,
    pub spot: &'static str,
    #[serde(rename = "duracion")]
    pub duration: &'static str,
    #[serde(rename = "olasAtrapadas")]
    pub waves_caught: u32,
    #[serde(rename = "alturaMaxima")]
    pub max_height: &'static str,
}

pub const BEST_SESSION: BestSession = BestSession {
    date: "2024-01-15",
    spot: "Pipeline",
    duration: "4 horas",
    waves_caught: 25,
    max_height: "3.5m",
};

pub const LIFE_BALANCE: &str = "Surf + Code = Felicidad 🏄‍♂️💻";

/// Synthetic surfing/coding statistics for a developer
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeveloperStatistics {
    #[serde(rename = "tiempoSurfeando", serialize_with = "serialize_hours")]
    #[schema(value_type = String, example = "812 horas")]
    pub hours_surfing: u32,
    #[serde(rename = "spotsVisitados")]
    pub spots_visited: u32,
    #[serde(rename = "olasAtrapadas")]
    pub waves_caught: u32,
    #[serde(rename = "mejorSesion")]
    pub best_session: BestSession,
    #[serde(rename = "codigoEscritoEnPlaya", serialize_with = "serialize_lines")]
    #[schema(value_type = String, example = "97 líneas")]
    pub lines_written_on_beach: u32,
    #[serde(rename = "proyectosCompletados")]
    pub projects_completed: u32,
    #[serde(rename = "balanceVida")]
    pub life_balance: &'static str,
}

/// A surf-meets-code tip
#[derive(Debug, Clone, Copy, PartialEq, Serialize, ToSchema)]
pub struct Tip {
    #[serde(rename = "categoria")]
    pub category: &'static str,
    #[serde(rename = "consejo")]
    pub advice: &'static str,
    #[serde(rename = "relacion")]
    pub relation: &'static str,
}

pub static SURF_CODE_TIPS: [Tip; 5] = [
    Tip {
        category: "Productividad",
        advice: "Surfea temprano en la mañana antes de empezar a programar. La claridad mental que obtienes es invaluable.",
        relation: "Como el debugging, necesitas paciencia y observación",
    },
    Tip {
        category: "Técnica",
        advice: "Aprende a leer las olas como lees el código - busca patrones y anticipa el flujo.",
        relation: "Similar a entender la arquitectura de un sistema",
    },
    Tip {
        category: "Mentalidad",
        advice: "No te frustres si no atrapas todas las olas. Cada sesión es aprendizaje, como cada línea de código.",
        relation: "El desarrollo es iterativo, igual que mejorar en surf",
    },
    Tip {
        category: "Equilibrio",
        advice: "Programa remoto cerca de la playa. La flexibilidad del freelancing te permite surfear cuando las condiciones son perfectas.",
        relation: "Optimiza tu entorno de trabajo como optimizas tu código",
    },
    Tip {
        category: "Comunidad",
        advice: "Conecta con otros surfistas programadores. La comunidad es tan importante en el agua como en GitHub.",
        relation: "Networking y colaboración en ambos mundos",
    },
];

/// Draw a fresh set of statistics
pub fn generate_statistics<R: Rng + ?Sized>(rng: &mut R) -> DeveloperStatistics {
    DeveloperStatistics {
        hours_surfing: rng.random_range(500..1500),
        spots_visited: rng.random_range(20..70),
        waves_caught: rng.random_range(2000..7000),
        best_session: BEST_SESSION,
        lines_written_on_beach: rng.random_range(50..150),
        projects_completed: rng.random_range(10..30),
        life_balance: LIFE_BALANCE,
    }
}

#[derive(Clone, Default)]
pub struct DeveloperService;

impl DeveloperService {
    pub fn new() -> Self {
        Self
    }

    pub fn statistics(&self) -> DeveloperStatistics {
        generate_statistics(&mut rand::rng())
    }

    pub fn tips(&self) -> &'static [Tip] {
        &SURF_CODE_TIPS
    }
}

fn serialize_hours<S: serde::Serializer>(value: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{} horas", value))
}

fn serialize_lines<S: serde::Serializer>(value: &u32, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&format_args!("{} líneas", value))
}
