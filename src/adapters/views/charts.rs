use serde_json::{json, Value};

use crate::domain::models::{audit::AuditSplit, chart::ChartSeries};

pub const CHART_LIBRARY_URL: &str = "https://cdn.jsdelivr.net/npm/apexcharts";

/// Horizontal bar chart of XP per task; values are KB.
pub fn xp_bar_options(series: &ChartSeries) -> Value {
    let categories: Vec<&str> = series.data.iter().map(|p| p.label.as_str()).collect();
    let values: Vec<f64> = series.data.iter().map(|p| p.value).collect();

    json!({
        "series": [{ "name": series.name, "data": values }],
        "chart": { "height": 800, "type": "bar" },
        "plotOptions": {
            "bar": {
                "borderRadius": 4,
                "horizontal": true,
                "dataLabels": { "position": "top" }
            }
        },
        "dataLabels": {
            "enabled": true,
            "offsetY": 0,
            "style": { "fontSize": "10px", "colors": ["#304758"] }
        },
        "theme": { "palette": "palette3" },
        "xaxis": {
            "categories": categories,
            "position": "bottom",
            "axisTicks": { "show": false }
        },
        "title": { "text": "XP earned by task" }
    })
}

pub fn skills_radar_options(series: &ChartSeries) -> Value {
    let points: Vec<Value> = series
        .data
        .iter()
        .map(|p| json!({ "x": p.label, "y": p.value }))
        .collect();

    json!({
        "chart": { "height": 450, "width": 450, "foreColor": "#333", "type": "radar" },
        "series": [{ "name": series.name, "data": points }],
        "legend": { "show": true },
        "title": { "text": "Your skills" }
    })
}

pub fn audits_pie_options(audits: &AuditSplit) -> Value {
    json!({
        "chart": { "width": 540, "type": "pie" },
        "labels": ["given", "received"],
        "theme": {
            "monochrome": {
                "enabled": true,
                "color": "#166fe5",
                "shadeTo": "light",
                "shadeIntensity": 0.65
            }
        },
        "plotOptions": { "pie": { "dataLabels": { "offset": -15 } } },
        "title": { "text": "Your audits rating" },
        "legend": { "show": false },
        "series": [audits.given, audits.received]
    })
}
