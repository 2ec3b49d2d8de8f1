use compute::ChartSeries;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    pub fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

const CHART_ID: &str = "chart-medicine-usage";
const BAR_COLOR: &str = "rgba(54, 162, 235, 0.6)";

/// Plotly traces for the usage bar chart.
fn traces(chart: &ChartSeries) -> serde_json::Value {
    serde_json::json!([{
        "x": chart.labels,
        "y": chart.values,
        "type": "bar",
        "name": chart.dataset_label,
        "marker": {"color": BAR_COLOR},
    }])
}

fn layout() -> serde_json::Value {
    serde_json::json!({
        "height": 400,
        "margin": {"t": 10, "r": 10, "l": 50, "b": 80},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"showgrid": false, "type": "category"},
        "yaxis": {"showgrid": true, "gridcolor": "#eee", "rangemode": "tozero"},
        "showlegend": true,
        "legend": {"orientation": "h", "y": 1.1},
    })
}

/// Plotly expects plain objects, not JS `Map`s.
fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub chart: ChartSeries,
}

#[function_component(ForecastChart)]
pub fn forecast_chart(props: &Props) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.chart.clone()), move |(chart_ref, chart)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            log::debug!("Drawing usage chart with {} bars", chart.len());
            let config = serde_json::json!({"responsive": true, "displayModeBar": false});

            match (to_js(&traces(chart)), to_js(&layout()), to_js(&config)) {
                (Ok(data), Ok(layout), Ok(config)) => newPlot(&element.id(), data, layout, config),
                _ => log::error!("Failed to convert chart data for Plotly"),
            }
        }
        || ()
    });

    html! {
        <div ref={chart_ref} id={CHART_ID} class="chart-container" style="height: 400px;"></div>
    }
}
