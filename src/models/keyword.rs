// ============================================================================
// KEYWORD - Palabra clave con métricas de tendencia
// ============================================================================

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Keyword analizada por el backend. `id` es el identificador estable
/// que usa la tabla para el toggle de detalle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    pub id: String,
    pub text: String,
    /// Videos detectados con esta keyword.
    pub video_count: u64,
    /// Score de tendencia calculado por el backend (0.0 - 100.0).
    pub trend_score: f64,
    /// Crecimiento relativo respecto a la ventana anterior. Puede faltar
    /// cuando la keyword es nueva.
    pub growth_rate: Option<f64>,
    pub category: Option<String>,
    pub last_seen: Option<DateTime<Utc>>,
}
