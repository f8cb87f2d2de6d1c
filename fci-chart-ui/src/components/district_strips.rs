//! Per-district strip chart list.

use crate::components::ChartContainer;
use crate::js_bridge;
use crate::state::AppState;
use crate::strips::{self, STRIP_HEIGHT_PX};
use dioxus::prelude::*;

/// One compact bubble strip per document entry, in document order.
///
/// The container divs are laid out by Dioxus; the circles are drawn into
/// them by the D3 bridge from an effect, and redrawn whenever the data or
/// the selected scale changes.
#[component]
pub fn DistrictStrips() -> Element {
    let state = use_context::<AppState>();

    // Redraw every strip on data or scale change.
    use_effect(move || {
        let scale = (state.chart_scale)();
        let translator = (state.translator)();
        let data = state.data.read();
        let Some(data) = data.as_ref() else { return };

        let specs = strips::build_strip_specs(data, &translator);
        log::info!("rendering {} district strips ({:?})", specs.len(), scale);
        for spec in &specs {
            js_bridge::render_bubble_strip(
                &spec.container_id,
                &strips::strip_data_json(spec),
                &strips::strip_config_json(spec, scale),
            );
        }
    });

    let entry_count = state.data.read().as_ref().map_or(0, |data| data.len());

    rsx! {
        div {
            style: "padding: 8px 16px;",
            for index in 0..entry_count {
                ChartContainer {
                    id: strips::strip_container_id(index),
                    height: STRIP_HEIGHT_PX,
                }
            }
        }
    }
}
