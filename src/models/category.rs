// ============================================================================
// CATEGORY - Categorías para clasificar keywords
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    /// Keywords asignadas a esta categoría.
    pub keyword_count: u64,
    pub active: bool,
}
