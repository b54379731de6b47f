//! Plotly chart specifications for the five business-plan charts.
//!
//! Each builder is a pure function from records to traces and layout; an
//! empty slice produces traces with empty data arrays.

use serde::Serialize;
use serde_json::{Value, json};

use crate::plan::{CostComparison, Demographic, GrowthPoint, InvestmentItem, RevenuePoint};
use crate::presentation::format_thousands;

pub const PRIMARY: &str = "#DC2626";
pub const SECONDARY: &str = "#1E3A8A";
pub const ACCENT: &str = "#EF4444";

const GRID: &str = "#E5E7EB";
const AXIS: &str = "#6B7280";

/// Slice colours of the investment pie, cycled.
pub const PIE_PALETTE: [&str; 7] = [PRIMARY, SECONDARY, ACCENT, "#F59E0B", "#10B981", "#8B5CF6", "#F97316"];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub traces: Value,
    pub layout: Value,
    pub height: u32,
}

impl ChartSpec {
    pub fn config() -> Value {
        json!({"responsive": true, "displayModeBar": false})
    }
}

fn cartesian_layout(extra: Value) -> Value {
    let mut layout = json!({
        "margin": {"t": 20, "r": 30, "l": 50, "b": 40},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "plot_bgcolor": "rgba(0,0,0,0)",
        "xaxis": {"color": AXIS, "showgrid": false},
        "yaxis": {"color": AXIS, "showgrid": true, "gridcolor": GRID, "griddash": "dash"},
        "showlegend": true,
        "legend": {"orientation": "h", "y": -0.2}
    });
    if let (Some(base), Value::Object(overrides)) = (layout.as_object_mut(), extra) {
        for (key, value) in overrides {
            base.insert(key, value);
        }
    }
    layout
}

fn pie_layout() -> Value {
    json!({
        "margin": {"t": 10, "r": 10, "l": 10, "b": 10},
        "paper_bgcolor": "rgba(0,0,0,0)",
        "showlegend": false
    })
}

/// Lines: x = `year`, y = `traditional` and `cloud_kitchen`.
pub fn market_growth_chart(points: &[GrowthPoint]) -> ChartSpec {
    let years: Vec<u32> = points.iter().map(|p| p.year).collect();
    let line = |name: &str, color: &str, values: Vec<u32>| {
        json!({
            "x": years,
            "y": values,
            "type": "scatter",
            "mode": "lines+markers",
            "name": name,
            "line": {"color": color, "width": 3, "shape": "spline"},
            "marker": {"color": color, "size": 8}
        })
    };

    ChartSpec {
        traces: json!([
            line("Geleneksel Restoran (%)", SECONDARY, points.iter().map(|p| p.traditional).collect()),
            line("Cloud Kitchen (%)", PRIMARY, points.iter().map(|p| p.cloud_kitchen).collect()),
        ]),
        layout: cartesian_layout(json!({})),
        height: 300,
    }
}

/// Grouped bars: x = `category`, y = `traditional` and `cloud_kitchen`.
pub fn cost_comparison_chart(rows: &[CostComparison]) -> ChartSpec {
    let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let bars = |name: &str, color: &str, values: Vec<u32>| {
        json!({
            "x": categories,
            "y": values,
            "type": "bar",
            "name": name,
            "marker": {"color": color}
        })
    };

    ChartSpec {
        traces: json!([
            bars("Geleneksel Restoran", SECONDARY, rows.iter().map(|r| r.traditional).collect()),
            bars("Cloud Kitchen", PRIMARY, rows.iter().map(|r| r.cloud_kitchen).collect()),
        ]),
        layout: cartesian_layout(json!({
            "barmode": "group",
            "xaxis": {"color": AXIS, "tickangle": -45, "tickfont": {"size": 12}},
            "margin": {"t": 20, "r": 30, "l": 20, "b": 80}
        })),
        height: 300,
    }
}

/// Pie: values = `amount`, labels = `category (percentage%)`.
pub fn investment_pie_chart(items: &[InvestmentItem]) -> ChartSpec {
    let labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} ({}%)", item.category, item.percentage))
        .collect();
    let values: Vec<u64> = items.iter().map(|item| item.amount).collect();
    let hover: Vec<String> = items
        .iter()
        .map(|item| format!("{} RMB", format_thousands(item.amount)))
        .collect();
    let colors: Vec<&str> = (0..items.len()).map(|i| PIE_PALETTE[i % PIE_PALETTE.len()]).collect();

    ChartSpec {
        traces: json!([{
            "labels": labels,
            "values": values,
            "type": "pie",
            "textinfo": "label",
            "hovertext": hover,
            "hoverinfo": "text",
            "marker": {"colors": colors}
        }]),
        layout: pie_layout(),
        height: 300,
    }
}

/// Bars: x = `month`, y = `revenue`.
pub fn revenue_projection_chart(points: &[RevenuePoint]) -> ChartSpec {
    let months: Vec<&str> = points.iter().map(|p| p.month.as_str()).collect();
    let revenue: Vec<u64> = points.iter().map(|p| p.revenue).collect();
    let hover: Vec<String> = points
        .iter()
        .map(|p| format!("Gelir: {} RMB", format_thousands(p.revenue)))
        .collect();

    ChartSpec {
        traces: json!([{
            "x": months,
            "y": revenue,
            "type": "bar",
            "name": "Aylık Gelir",
            "hovertext": hover,
            "hoverinfo": "text",
            "marker": {"color": PRIMARY}
        }]),
        layout: cartesian_layout(json!({"showlegend": false})),
        height: 300,
    }
}

/// Pie: values = `percentage`, labels = `age: percentage%`.
pub fn demographics_chart(groups: &[Demographic]) -> ChartSpec {
    let palette = [PRIMARY, SECONDARY, ACCENT];
    let labels: Vec<String> = groups
        .iter()
        .map(|g| format!("{}: {}%", g.age, g.percentage))
        .collect();
    let values: Vec<u32> = groups.iter().map(|g| g.percentage).collect();
    let colors: Vec<&str> = (0..groups.len()).map(|i| palette[i % palette.len()]).collect();

    ChartSpec {
        traces: json!([{
            "labels": labels,
            "values": values,
            "type": "pie",
            "textinfo": "label",
            "hovertemplate": "Yüzde: %{value}%<extra></extra>",
            "marker": {"colors": colors}
        }]),
        layout: pie_layout(),
        height: 250,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::static_plan::static_plan;

    #[test]
    fn test_growth_chart_maps_year_and_both_series() {
        let spec = market_growth_chart(&static_plan().market_data.cloud_kitchen_growth);
        let traces = spec.traces.as_array().unwrap();

        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0]["x"][0], 2020);
        assert_eq!(traces[0]["y"][0], 5);
        assert_eq!(traces[1]["y"][7], 60);
        assert_eq!(traces[1]["line"]["color"], PRIMARY);
    }

    #[test]
    fn test_cost_chart_groups_bars_by_category() {
        let spec = cost_comparison_chart(&static_plan().market_data.cost_comparison);
        assert_eq!(spec.layout["barmode"], "group");
        assert_eq!(spec.traces[0]["x"][0], "Kira Maliyeti");
        assert_eq!(spec.traces[1]["y"][2], 12);
        // overrides keep the shared settings
        assert_eq!(spec.layout["showlegend"], true);
    }

    #[test]
    fn test_investment_pie_cycles_palette() {
        let mut items = static_plan().financial_data.initial_investment.clone();
        items.push(InvestmentItem { category: "Extra".into(), amount: 1, percentage: 0 });
        let spec = investment_pie_chart(&items);

        assert_eq!(spec.traces[0]["labels"][0], "Mutfak Ekipmanları (30%)");
        assert_eq!(spec.traces[0]["values"][0], 300_000);
        assert_eq!(spec.traces[0]["hovertext"][0], "300,000 RMB");
        assert_eq!(spec.traces[0]["marker"]["colors"][7], PRIMARY);
    }

    #[test]
    fn test_revenue_and_demographics_fields() {
        let plan = static_plan();
        let revenue = revenue_projection_chart(&plan.financial_data.revenue_projection);
        assert_eq!(revenue.traces[0]["x"][3], "Ay 10-12");
        assert_eq!(revenue.traces[0]["y"][3], 870_000);

        let demographics = demographics_chart(plan.target_demographics());
        assert_eq!(demographics.traces[0]["labels"][0], "25-35 yaş: 45%");
        assert_eq!(demographics.height, 250);
    }

    #[test]
    fn test_empty_records_render_empty_charts() {
        let specs = [
            market_growth_chart(&[]),
            cost_comparison_chart(&[]),
            revenue_projection_chart(&[]),
        ];
        for spec in specs {
            for trace in spec.traces.as_array().unwrap() {
                assert_eq!(trace["x"], json!([]));
                assert_eq!(trace["y"], json!([]));
            }
        }

        for spec in [investment_pie_chart(&[]), demographics_chart(&[])] {
            assert_eq!(spec.traces[0]["values"], json!([]));
            assert_eq!(spec.traces[0]["labels"], json!([]));
        }
    }
}
