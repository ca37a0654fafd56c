// ============================================================================
// DASHBOARD VIEW - Resumen de analítica con tarjetas y gráfico de barras
// ============================================================================

use crate::services::{ApiClient, DashboardSummary};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let summary = use_state(|| None::<DashboardSummary>);
    let error = use_state(|| None::<String>);

    {
        let summary = summary.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let api = ApiClient::new();
                match api.fetch_dashboard_summary().await {
                    Ok(data) => summary.set(Some(data)),
                    Err(e) => {
                        log::error!("❌ Error cargando resumen: {}", e);
                        error.set(Some(e));
                    }
                }
            });
            || ()
        });
    }

    if let Some(error) = error.as_ref() {
        return html! {
            <div class="view-error">
                <p>{format!("No se pudo cargar el resumen: {}", error)}</p>
            </div>
        };
    }

    let Some(data) = summary.as_ref() else {
        return html! {
            <div class="view-loading">
                <div class="spinner"></div>
                <p>{"Cargando resumen..."}</p>
            </div>
        };
    };

    // Las barras escalan contra el mayor trend_score de la lista.
    let max_score = data
        .top_keywords
        .iter()
        .map(|k| k.trend_score)
        .fold(0.0f64, f64::max)
        .max(1.0);

    html! {
        <div class="dashboard">
            <h2>{"Resumen"}</h2>
            <div class="stat-cards">
                <StatCard label="Keywords" value={data.total_keywords} icon="🔑" />
                <StatCard label="Topics" value={data.total_topics} icon="🔍" />
                <StatCard label="Categorías activas" value={data.active_categories} icon="🗂️" />
                <StatCard label="Usuarios" value={data.total_users} icon="👥" />
            </div>

            <div class="trend-chart">
                <h3>{"Keywords con mayor tendencia"}</h3>
                if data.top_keywords.is_empty() {
                    <p class="chart-empty">{"Sin datos todavía"}</p>
                } else {
                    <div class="chart-bars">
                        { for data.top_keywords.iter().map(|kw| {
                            let percent = (kw.trend_score / max_score * 100.0).clamp(0.0, 100.0);
                            html! {
                                <div class="chart-row" key={kw.id.clone()}>
                                    <span class="chart-label">{kw.text.clone()}</span>
                                    <div class="chart-track">
                                        <div
                                            class="chart-fill"
                                            style={format!("width: {:.1}%", percent)}
                                        ></div>
                                    </div>
                                    <span class="chart-value">{format!("{:.1}", kw.trend_score)}</span>
                                </div>
                            }
                        }) }
                    </div>
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatCardProps {
    label: &'static str,
    value: u64,
    icon: &'static str,
}

#[function_component(StatCard)]
fn stat_card(props: &StatCardProps) -> Html {
    html! {
        <div class="stat-card">
            <span class="stat-icon">{props.icon}</span>
            <span class="stat-value">{props.value}</span>
            <span class="stat-label">{props.label}</span>
        </div>
    }
}
