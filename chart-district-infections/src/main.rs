//! Infection accumulation by healthcare district
//!
//! Displays one sparkline-sized bubble strip per Finnish healthcare
//! district covering the last 30 days of infection counts, with a toggle
//! between the daily and cumulative encodings.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/districts.json` into `OUT_DIR` at
//!    compile time.
//! 2. `include_str!` embeds the document into the WASM binary.
//! 3. On mount, the document is parsed into `GroupedData` (`fci-data`);
//!    a parse failure surfaces through `ErrorDisplay`.
//! 4. One strip per district is rendered via the D3.js bridge in
//!    `fci-chart-ui`, and redrawn when the scale toggle changes.

use dioxus::prelude::*;
use fci_chart_ui::components::{
    ChartHeader, DistrictStrips, ErrorDisplay, LoadingSpinner, ScaleToggle,
};
use fci_chart_ui::js_bridge;
use fci_chart_ui::state::AppState;

/// Pre-aggregated per-district document.
const DISTRICTS_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/districts.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Parse the embedded document on mount
    use_effect(move || {
        js_bridge::init_charts();
        js_bridge::install_tooltip_formatter((state.translator)());

        match fci_data::load_grouped_data(DISTRICTS_JSON) {
            Ok(data) => {
                log::info!("loaded {} district entries", data.len());
                state.data.set(Some(data));
                state.loading.set(false);
            }
            Err(e) => {
                log::error!("Failed to load district data: {}", e);
                let translator = (state.translator)();
                state.error_msg.set(Some(format!(
                    "{}: {}",
                    translator.t("data could not be loaded"),
                    e
                )));
                state.loading.set(false);
            }
        }
    });

    let translator = (state.translator)();

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            ChartHeader {
                title: translator.t("accumulation by healthcare district").to_string(),
            }

            if let Some(err) = (state.error_msg)() {
                ErrorDisplay { message: err }
            } else if (state.loading)() {
                LoadingSpinner {}
            } else {
                ScaleToggle {}
                DistrictStrips {}
            }
        }
    }
}
