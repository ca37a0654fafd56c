// ============================================================================
// TOPICS - Topics de búsqueda y de explore devueltos por el backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Topic de búsqueda (pestaña "search" de TikTok).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchTopic {
    pub id: String,
    pub title: String,
    /// Posición en el ranking de búsquedas.
    pub rank: u32,
    pub search_volume: u64,
    pub region: Option<String>,
}

/// Topic de la pestaña "explore".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExploreTopic {
    pub id: String,
    pub title: String,
    pub post_count: u64,
    pub view_count: u64,
    pub hashtag: Option<String>,
}
