//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! D3.js bar charts and Leaflet maps are defined in `assets/js/*.js` and
//! evaluated as globals (no ES modules) once both libraries are present on
//! the host page. This module serializes data and calls those globals.

// Embed all chart and map JS files at compile time
static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");
static STACKED_BAR_CHART_JS: &str = include_str!("../assets/js/stacked-bar-chart.js");
static FACILITY_MAP_JS: &str = include_str!("../assets/js/facility-map.js");

/// Global render functions promoted to `window.*` by [`init_charts`].
const GLOBALS: [&str; 4] = [
    "renderBarChart",
    "renderStackedBarChart",
    "renderClusterMap",
    "renderHighlightMap",
];

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Tankage JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart and map scripts with a wait-for-libraries polling loop.
///
/// The scripts define functions like `renderBarChart(...)` via `function`
/// declarations. They are evaluated at global scope via indirect eval once
/// D3, Leaflet and the marker-cluster plugin are loaded, and then each
/// function is promoted to `window.*`.
pub fn init_charts() {
    let all_js = [BAR_CHART_JS, STACKED_BAR_CHART_JS, FACILITY_MAP_JS].join("\n");

    let store_js = format!(
        "window.__tankChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let promote: String = GLOBALS
        .iter()
        .map(|name| format!("if (typeof {name} !== 'undefined') window.{name} = {name};\n"))
        .collect();

    let init_js = format!(
        r#"
        (function() {{
            var waitForLibs = setInterval(function() {{
                if (typeof d3 !== 'undefined' && typeof L !== 'undefined' &&
                    typeof L.markerClusterGroup !== 'undefined') {{
                    clearInterval(waitForLibs);
                    if (!window.__tankChartScripts) return;
                    (0, eval)(window.__tankChartScripts);
                    delete window.__tankChartScripts;
                    {promote}
                    window.__tankChartsReady = true;
                    console.log('Tankage charts initialized');
                }}
            }}, 100);
        }})();
        "#
    );
    let _ = js_sys::eval(&init_js);
}

/// Quote a JSON payload as a single-quoted JS string literal.
fn js_string(json: &str) -> String {
    json.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "")
}

/// Poll until scripts are initialized and the container exists, then call
/// `window.<function>(container_id, data_json, config_json)`.
fn render_when_ready(function: &str, container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = js_string(data_json);
    let escaped_config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__tankChartsReady &&
                    typeof window.{function} !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.{function}('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[Tankage] {function} error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Render a (category, value) bar chart.
///
/// `data_json` is an array of `{ "category": .., "value": .. }`.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("js_bridge: bar chart into #{}", container_id);
    render_when_ready("renderBarChart", container_id, data_json, config_json);
}

/// Render a (category, subcategory, value) stacked bar chart.
///
/// `data_json` is an array of `{ "category": .., "subcategory": .., "value": .. }`.
pub fn render_stacked_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    log::debug!("js_bridge: stacked bar chart into #{}", container_id);
    render_when_ready("renderStackedBarChart", container_id, data_json, config_json);
}

/// Render a clustered marker map from a serialized `MapView`.
pub fn render_cluster_map(container_id: &str, view_json: &str, config_json: &str) {
    log::debug!("js_bridge: cluster map into #{}", container_id);
    render_when_ready("renderClusterMap", container_id, view_json, config_json);
}

/// Render a map with highlighted markers from a serialized `MapView`.
pub fn render_highlight_map(container_id: &str, view_json: &str, config_json: &str) {
    log::debug!("js_bridge: highlight map into #{}", container_id);
    render_when_ready("renderHighlightMap", container_id, view_json, config_json);
}
