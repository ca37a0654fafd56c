// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP contra la API de
// analítica. Los list-services comparten el contrato ListParams/PageResponse;
// el backend devuelve cada página ya ordenada y filtrada.
// ============================================================================

use crate::models::{
    AdminUser, Category, Credentials, ExploreTopic, Keyword, ListParams, LoginResponse,
    PageResponse, Role, SearchTopic,
};
use crate::config::CONFIG;
use crate::utils::{load_raw_from_storage, STORAGE_KEY_AUTH_TOKEN};
use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url().to_string(),
            token: load_raw_from_storage(STORAGE_KEY_AUTH_TOKEN),
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
            None => builder,
        }
    }

    /// Login contra el backend.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, String> {
        let url = format!("{}/v1/auth/login", self.base_url);

        log::info!("🔐 Login de usuario: {}", credentials.username);

        let response = Request::post(&url)
            .json(credentials)
            .map_err(|e| format!("Request build error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Listado genérico paginado. El servidor aplica sort/filtro/paginación.
    async fn list<T: DeserializeOwned>(
        &self,
        resource: &str,
        params: &ListParams,
    ) -> Result<PageResponse<T>, String> {
        let url = format!("{}/v1/{}", self.base_url, resource);

        log::info!("📋 Listando {}: página {}", resource, params.page);

        let response = self
            .authorized(Request::get(&url).query(params.query_pairs()))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<PageResponse<T>>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    pub async fn list_keywords(
        &self,
        params: &ListParams,
    ) -> Result<PageResponse<Keyword>, String> {
        self.list("keywords", params).await
    }

    pub async fn list_search_topics(
        &self,
        params: &ListParams,
    ) -> Result<PageResponse<SearchTopic>, String> {
        self.list("search-topics", params).await
    }

    pub async fn list_explore_topics(
        &self,
        params: &ListParams,
    ) -> Result<PageResponse<ExploreTopic>, String> {
        self.list("explore-topics", params).await
    }

    pub async fn list_categories(
        &self,
        params: &ListParams,
    ) -> Result<PageResponse<Category>, String> {
        self.list("categories", params).await
    }

    pub async fn list_users(
        &self,
        params: &ListParams,
    ) -> Result<PageResponse<AdminUser>, String> {
        self.list("users", params).await
    }

    /// Borrar una keyword.
    pub async fn delete_keyword(&self, keyword_id: &str) -> Result<(), String> {
        let url = format!("{}/v1/keywords/{}", self.base_url, keyword_id);

        log::info!("🗑️ Borrando keyword: {}", keyword_id);

        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }
        Ok(())
    }

    /// Activar/desactivar una categoría.
    pub async fn set_category_active(
        &self,
        category_id: &str,
        active: bool,
    ) -> Result<Category, String> {
        let url = format!("{}/v1/categories/{}", self.base_url, category_id);
        let request = UpdateCategoryRequest { active };

        log::info!("📝 Categoría {} → active={}", category_id, active);

        let response = self
            .authorized(Request::put(&url))
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        response
            .json::<Category>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Cambiar el rol de un usuario (solo super_admin).
    pub async fn update_user_role(
        &self,
        user_id: &str,
        role: &Role,
    ) -> Result<AdminUser, String> {
        let url = format!("{}/v1/users/{}/role", self.base_url, user_id);
        let request = UpdateRoleRequest { role: role.clone() };

        log::info!("👤 Cambiando rol de {} a {}", user_id, role);

        let response = self
            .authorized(Request::put(&url))
            .json(&request)
            .map_err(|e| format!("Serialization error: {}", e))?
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(format!("HTTP error {}: {}", status, error_text));
        }

        response
            .json::<AdminUser>()
            .await
            .map_err(|e| format!("Parse error: {}", e))
    }

    /// Resumen de analítica para el dashboard.
    pub async fn fetch_dashboard_summary(&self) -> Result<DashboardSummary, String> {
        let url = format!("{}/v1/analytics/summary", self.base_url);

        log::info!("📊 Obteniendo resumen de analítica");

        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.ok() {
            return Err(format!(
                "HTTP {}: {}",
                response.status(),
                response.status_text()
            ));
        }

        let summary = response
            .json::<DashboardSummary>()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        log::info!(
            "✅ Resumen: {} keywords, {} topics",
            summary.total_keywords,
            summary.total_topics
        );

        Ok(summary)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct UpdateCategoryRequest {
    active: bool,
}

#[derive(serde::Serialize)]
struct UpdateRoleRequest {
    role: Role,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct DashboardSummary {
    pub total_keywords: u64,
    pub total_topics: u64,
    pub active_categories: u64,
    pub total_users: u64,
    /// Keywords con mayor trend_score, para el gráfico de barras.
    pub top_keywords: Vec<Keyword>,
}
