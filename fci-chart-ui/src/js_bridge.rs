//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js strip renderer and tooltip live in `assets/js/*.js` and are
//! loaded at runtime. They are evaluated as globals (no ES modules) and
//! exposed via `window.*`. This module provides safe Rust wrappers that
//! serialize data and call those globals, plus the one JS->Rust hook: the
//! tooltip formatter the JS layer invokes on hover.

use wasm_bindgen::prelude::*;

use crate::i18n::Translator;
use crate::tooltip::{self, HoverPayload};

// Embed the D3 chart JS files at compile time
static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static BUBBLE_STRIP_JS: &str = include_str!("../assets/js/bubble-strip.js");

/// Window property the JS tooltip calls to obtain localized content.
const TOOLTIP_FORMATTER_PROP: &str = "__fciFormatTooltip";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('FCI JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The chart JS files define functions like `renderBubbleStrip(...)` via
/// `function` declarations. To ensure they become globally accessible
/// (not block-scoped inside the setInterval callback), we evaluate them
/// at global scope via a separate `eval()` call once D3 is ready,
/// and then explicitly promote each function to `window.*`.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, BUBBLE_STRIP_JS].join("\n");

    // Store the scripts on window so the polling callback can eval them
    // at global scope (not block-scoped inside setInterval).
    let store_js = format!(
        "window.__fciChartScripts = {};",
        serde_json::to_string(&all_js).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    // Eval at global scope via indirect eval
                    (0, eval)(window.__fciChartScripts);
                    delete window.__fciChartScripts;
                    // Promote function declarations to window explicitly
                    if (typeof renderBubbleStrip !== 'undefined') window.renderBubbleStrip = renderBubbleStrip;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    window.__fciChartsReady = true;
                    console.log('FCI charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render one district's bubble strip.
///
/// Uses a polling loop to wait for D3.js to load, chart scripts to
/// initialize, and the container DOM element to exist before rendering.
pub fn render_bubble_strip(container_id: &str, data_json: &str, config_json: &str) {
    let escaped_data = data_json.replace('\'', "\\'").replace('\n', "");
    let escaped_config = config_json.replace('\'', "\\'").replace('\n', "");
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__fciChartsReady &&
                    typeof window.renderBubbleStrip !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderBubbleStrip('{container_id}', '{escaped_data}', '{escaped_config}');
                    }} catch(e) {{ console.error('[FCI] renderBubbleStrip error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Install the window-level tooltip formatter the JS layer calls on hover.
///
/// The raw hover values cross the boundary as two loose JS numbers and are
/// assembled here, once, into a named [`HoverPayload`]. The closure returns
/// tooltip content as a JSON string, or `null` when nothing should show.
pub fn install_tooltip_formatter(translator: Translator) {
    let formatter = Closure::<dyn Fn(JsValue, JsValue) -> JsValue>::new(
        move |date: JsValue, magnitude: JsValue| {
            let payload = HoverPayload {
                date_value: date.as_f64().map(|v| v as i64),
                magnitude_value: magnitude.as_f64().map(|v| v as u64),
            };
            match tooltip::render_tooltip(&payload, &translator) {
                Some(content) => serde_json::to_string(&content)
                    .map(|json| JsValue::from_str(&json))
                    .unwrap_or(JsValue::NULL),
                None => JsValue::NULL,
            }
        },
    );

    if let Some(window) = web_sys::window() {
        let _ = js_sys::Reflect::set(
            &window,
            &JsValue::from_str(TOOLTIP_FORMATTER_PROP),
            formatter.as_ref(),
        );
    }

    // Leak the closure; the formatter lives for the page lifetime.
    formatter.forget();
}
