//! Plotly-backed renderings of the chart specifications in `common::charts`.

use common::charts::{
    cost_comparison_chart, demographics_chart, investment_pie_chart, market_growth_chart,
    revenue_projection_chart, ChartSpec,
};
use common::{CostComparison, Demographic, GrowthPoint, InvestmentItem, RevenuePoint};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use yew::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly)]
    fn newPlot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue);
}

fn to_js(value: &serde_json::Value) -> Result<JsValue, serde_wasm_bindgen::Error> {
    value.serialize(&serde_wasm_bindgen::Serializer::json_compatible())
}

fn plot(div_id: &str, spec: &ChartSpec) {
    let converted = to_js(&spec.traces)
        .and_then(|traces| Ok((traces, to_js(&spec.layout)?, to_js(&ChartSpec::config())?)));
    match converted {
        Ok((traces, layout, config)) => newPlot(div_id, traces, layout, config),
        Err(e) => log::error!("Failed to convert chart '{}' for Plotly: {}", div_id, e),
    }
}

#[derive(Properties, PartialEq)]
pub struct PlotlyChartProps {
    pub id: AttrValue,
    pub spec: ChartSpec,
}

/// Draws `spec` into its container once mounted, and again when it changes.
#[function_component(PlotlyChart)]
pub fn plotly_chart(props: &PlotlyChartProps) -> Html {
    let chart_ref = use_node_ref();

    use_effect_with((chart_ref.clone(), props.spec.clone()), move |(chart_ref, spec)| {
        if let Some(element) = chart_ref.cast::<Element>() {
            let div_id = element.id();
            if !div_id.is_empty() {
                log::trace!("Plotting chart {}", div_id);
                plot(&div_id, spec);
            }
        }
        || ()
    });

    html! {
        <div
            ref={chart_ref}
            id={props.id.clone()}
            class="chart-container w-full"
            style={format!("height: {}px;", props.spec.height)}
        ></div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MarketGrowthChartProps {
    pub data: Vec<GrowthPoint>,
}

#[function_component(MarketGrowthChart)]
pub fn market_growth(props: &MarketGrowthChartProps) -> Html {
    html! { <PlotlyChart id="chart-market-growth" spec={market_growth_chart(&props.data)} /> }
}

#[derive(Properties, PartialEq)]
pub struct CostComparisonChartProps {
    pub data: Vec<CostComparison>,
}

#[function_component(CostComparisonChart)]
pub fn cost_comparison(props: &CostComparisonChartProps) -> Html {
    html! { <PlotlyChart id="chart-cost-comparison" spec={cost_comparison_chart(&props.data)} /> }
}

#[derive(Properties, PartialEq)]
pub struct InvestmentPieChartProps {
    pub data: Vec<InvestmentItem>,
}

#[function_component(InvestmentPieChart)]
pub fn investment_pie(props: &InvestmentPieChartProps) -> Html {
    html! { <PlotlyChart id="chart-investment-pie" spec={investment_pie_chart(&props.data)} /> }
}

#[derive(Properties, PartialEq)]
pub struct RevenueProjectionChartProps {
    pub data: Vec<RevenuePoint>,
}

#[function_component(RevenueProjectionChart)]
pub fn revenue_projection(props: &RevenueProjectionChartProps) -> Html {
    html! { <PlotlyChart id="chart-revenue-projection" spec={revenue_projection_chart(&props.data)} /> }
}

#[derive(Properties, PartialEq)]
pub struct DemographicsChartProps {
    pub data: Vec<Demographic>,
}

#[function_component(DemographicsChart)]
pub fn demographics(props: &DemographicsChartProps) -> Html {
    html! { <PlotlyChart id="chart-demographics" spec={demographics_chart(&props.data)} /> }
}
