//! Painel de Tancagem e Localização de Postos na Paraíba
//!
//! Fuel-storage dashboard for the state of Paraíba: headline totals, a
//! municipality selector driving a highlight map and a detail block, a
//! clustered map of every tank, and capacity bar charts.
//!
//! Data flow:
//! 1. `build.rs` copies the "Folha1" sheet export (`fixtures/base1.csv`)
//!    into `OUT_DIR`.
//! 2. `include_str!` embeds it into the WASM binary.
//! 3. On mount the CSV is loaded into an in-memory SQLite database. A
//!    missing column aborts the load and only the error is shown.
//! 4. Every figure, map and chart is a query against that database; the
//!    selected municipality re-runs the highlight map and detail queries.
//!
//! The host page must load D3.js, Leaflet and Leaflet.markercluster.

use dioxus::prelude::*;
use tank_chart_ui::components::{
    ChartContainer, ErrorDisplay, LoadingSpinner, RegionSelector, SectionHeader, StatCard,
};
use tank_chart_ui::state::AppState;
use tank_chart_ui::{format, js_bridge, series};
use tank_db::models::CapacitySummary;
use tank_db::Database;

/// The "Folha1" sheet export, embedded at compile time.
const BASE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/base1.csv"));
const BASE_CSV_DELIMITER: u8 = b',';

/// DOM ids the chart and map scripts render into.
const HIGHLIGHT_MAP_ID: &str = "tank-highlight-map";
const CLUSTER_MAP_ID: &str = "tank-cluster-map";
const REGION_CHART_ID: &str = "tank-region-product-chart";
const PRODUCT_CHART_ID: &str = "tank-product-chart";
const REGION_PRODUCT_CHART_ID: &str = "tank-region-by-product-chart";

const Y_AXIS_LABEL: &str = "Tancagem (m³)";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("tankage-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);
    let mut overall = use_signal(|| None::<CapacitySummary>);
    let mut detail = use_signal(|| None::<CapacitySummary>);

    // ─── Effect 1: Load the dataset once on mount ───
    use_effect(move || {
        match Database::from_csv(BASE_CSV, BASE_CSV_DELIMITER) {
            Ok(db) => {
                match db.query_regions() {
                    Ok(regions) => state.regions.set(regions),
                    Err(e) => log::warn!("Failed to list municipalities: {}", e),
                }
                state.db.set(Some(db));
                js_bridge::init_charts();
            }
            Err(e) => {
                log::error!("Failed to load tankage data: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    // ─── Effect 2: State-wide cluster map and charts ───
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match render_overview(&db) {
            Ok(summary) => overall.set(Some(summary)),
            Err(e) => {
                log::error!("Failed to render overview: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    // ─── Effect 3: Highlight map and municipality chart ───
    // Re-runs whenever the selected municipality changes.
    use_effect(move || {
        let selected = state.selection();
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let db = match &*state.db.read() {
            Some(db) => db.clone(),
            None => return,
        };
        match render_selection(&db, selected.as_deref()) {
            Ok(summary) => detail.set(summary),
            Err(e) => {
                log::error!("Failed to render selection: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
    });

    // ─── Render ───
    let error = state.error_msg.read().clone();
    let overall = overall.read().clone();
    let detail = detail.read().clone();

    rsx! {
        div {
            style: "max-width: 1200px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            PageHeader {}

            if let Some(err) = error {
                ErrorDisplay { message: err }
            } else if *state.loading.read() {
                LoadingSpinner {}
            } else if let Some(overall) = overall {
                div {
                    style: "display: flex; gap: 16px;",
                    StatCard {
                        label: "Total de Postos".to_string(),
                        value: overall.facility_count.to_string(),
                    }
                    StatCard {
                        label: "Tancagem Total (m³)".to_string(),
                        value: format::headline(overall.total_capacity),
                    }
                }

                RegionSelector {}

                SectionHeader { title: "Mapa de Postos com Destaque".to_string() }
                ChartContainer { id: HIGHLIGHT_MAP_ID.to_string(), height: 500 }

                if let Some(summary) = detail {
                    RegionDetails { summary }
                }

                SectionHeader { title: "Mapa de Cluster de Tanques".to_string() }
                ChartContainer { id: CLUSTER_MAP_ID.to_string(), height: 500 }

                SectionHeader { title: "Gráficos Gerais".to_string() }
                ChartContainer { id: PRODUCT_CHART_ID.to_string(), height: 400 }
                ChartContainer { id: REGION_PRODUCT_CHART_ID.to_string(), height: 520 }
            } else {
                LoadingSpinner {}
            }
        }
    }
}

/// Cluster map, capacity by product and capacity by municipality/product.
///
/// Returns the state-wide summary for the headline cards.
fn render_overview(db: &Database) -> anyhow::Result<CapacitySummary> {
    let summary = db.query_summary(None)?;

    let cluster = db.query_cluster_map()?;
    js_bridge::render_cluster_map(
        CLUSTER_MAP_ID,
        &series::map_view_json(&cluster),
        &serde_json::json!({ "color": "blue", "opacity": 0.6 }).to_string(),
    );

    let by_product = db.query_capacity_by_product(None)?;
    js_bridge::render_bar_chart(
        PRODUCT_CHART_ID,
        &series::product_series_json(&by_product),
        &serde_json::json!({
            "title": "Tancagem por Produto",
            "yAxisLabel": Y_AXIS_LABEL,
            "color": "#2196F3",
        })
        .to_string(),
    );

    let by_region_product = db.query_capacity_by_region_and_product()?;
    js_bridge::render_stacked_bar_chart(
        REGION_PRODUCT_CHART_ID,
        &series::region_product_series_json(&by_region_product),
        &serde_json::json!({
            "title": "Tancagem por Produto e Município",
            "yAxisLabel": Y_AXIS_LABEL,
            "height": 520,
        })
        .to_string(),
    );
    Ok(summary)
}

/// Summary for the detail block, `None` when nothing is selected.
fn selection_summary(
    db: &Database,
    selected: Option<&str>,
) -> anyhow::Result<Option<CapacitySummary>> {
    selected.map(|region| db.query_summary(Some(region))).transpose()
}

/// Highlight map for the current selection, plus the municipality chart.
fn render_selection(
    db: &Database,
    selected: Option<&str>,
) -> anyhow::Result<Option<CapacitySummary>> {
    let summary = selection_summary(db, selected)?;
    let view = db.query_highlight_map(selected)?;
    js_bridge::render_highlight_map(
        HIGHLIGHT_MAP_ID,
        &series::map_view_json(&view),
        &serde_json::json!({
            "highlightColor": "green",
            "mutedColor": "gray",
            "opacity": 0.8,
        })
        .to_string(),
    );

    if let Some(region) = selected {
        let by_product = db.query_capacity_by_product(Some(region))?;
        js_bridge::render_bar_chart(
            REGION_CHART_ID,
            &series::product_series_json(&by_product),
            &serde_json::json!({
                "title": format!("Tancagem por Produto no Município de {}", region),
                "yAxisLabel": Y_AXIS_LABEL,
                "color": "#28a745",
                "height": 300,
            })
            .to_string(),
        );
    }
    Ok(summary)
}

#[component]
fn PageHeader() -> Element {
    rsx! {
        div {
            style: "background-color: #e0f2e9; padding: 20px;",
            h1 {
                style: "text-align: center; color: #004d40; font-weight: bold; font-size: 36px; margin: 0;",
                "Painel de Tancagem e Localização de Postos na Paraíba"
            }
        }
        p {
            style: "text-align: center; font-size: 18px;",
            "Mapeamento interativo da distribuição dos tanques de combustível e postos do estado da Paraíba, "
            "incluindo estatísticas por produto e por município, bem como a localização dos estabelecimentos."
        }
    }
}

/// Detail block for the selected municipality.
#[component]
fn RegionDetails(summary: CapacitySummary) -> Element {
    let region = summary.region.clone().unwrap_or_default();
    let total = format::detail(summary.total_capacity);
    let products: Vec<(String, String)> = summary
        .by_product
        .iter()
        .map(|p| (p.product.clone(), format::detail(p.capacity)))
        .collect();

    rsx! {
        SectionHeader { title: format!("Detalhes do Município: {}", region) }
        p { strong { "Total de Postos: " } "{summary.facility_count}" }
        p { strong { "Tancagem Total: " } "{total}" }
        ul {
            for (product, capacity) in products {
                li { "{product}: {capacity}" }
            }
        }
        ChartContainer { id: REGION_CHART_ID.to_string(), height: 300 }
    }
}
