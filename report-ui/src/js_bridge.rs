//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js chart function lives in `assets/js/dual-axis-bar-chart.js` and is
//! embedded at compile time. It is evaluated at global scope once D3 has
//! loaded and exposed as `window.renderDualAxisBarChart`.

static DUAL_AXIS_BAR_CHART_JS: &str = include_str!("../assets/js/dual-axis-bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Report JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote `text` as a JS string literal.
fn js_string(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| "''".to_string())
}

/// Initialize the chart script with a wait-for-D3 polling loop.
///
/// The script defines `renderDualAxisBarChart` with a `function`
/// declaration. It is evaluated at global scope via indirect eval once D3
/// is ready, then promoted to `window.*` explicitly. Safe to call more
/// than once.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__reportChartsReady) {{ window.__reportChartScripts = {}; }}",
        js_string(DUAL_AXIS_BAR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__reportChartsReady || window.__reportChartsPolling) return;
            window.__reportChartsPolling = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__reportChartScripts);
                    delete window.__reportChartScripts;
                    if (typeof renderDualAxisBarChart !== 'undefined') window.renderDualAxisBarChart = renderDualAxisBarChart;
                    window.__reportChartsReady = true;
                    console.log('Report charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render the credit score / tenure bar chart into `container_id`.
///
/// Polls until the chart script is initialized and the container exists.
/// A new call replaces any poll still pending, so at most one is live.
pub fn render_dual_axis_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            if (window.__reportChartPoll) clearInterval(window.__reportChartPoll);
            var poll = window.__reportChartPoll = setInterval(function() {{
                if (window.__reportChartsReady &&
                    typeof window.renderDualAxisBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    window.__reportChartPoll = null;
                    try {{
                        window.renderDualAxisBarChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Report] renderDualAxisBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
pub fn destroy_chart(container_id: &str) {
    call_js(&format!(
        "if (window.__reportChartPoll) {{ clearInterval(window.__reportChartPoll); window.__reportChartPoll = null; }} var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_are_drawn_from_the_zero_baseline() {
        assert!(DUAL_AXIS_BAR_CHART_JS.contains("Math.min(d3.min(values) || 0, 0)"));
        assert!(DUAL_AXIS_BAR_CHART_JS.contains("Math.min(scale(v), scale(0))"));
        assert!(DUAL_AXIS_BAR_CHART_JS.contains("Math.abs(scale(0) - scale(v))"));
    }

    #[test]
    fn strings_are_quoted_as_js_literals() {
        assert_eq!(js_string("report-chart"), "\"report-chart\"");
        assert_eq!(js_string("it's \"x\""), "\"it's \\\"x\\\"\"");
    }
}
