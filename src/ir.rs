use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One chart panel request. The wire shape is an internally tagged object,
/// `{"type": "kpi-row", "x": 40, "y": 60, "width": 300, "items": [...]}`,
/// matching what the orchestration layer emits. Adding a panel type means
/// adding one variant here and one builder in `panel/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ChartPanelInput {
    KpiRow(KpiRowInput),
    BarChart(BarChartInput),
    TopList(TopListInput),
    Pipeline(PipelineInput),
    StackedBar(StackedBarInput),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KpiRowInput {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<KpiItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KpiItem {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarChartInput {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub data: BarSeries,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BarSeries {
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub values: Vec<f32>,
    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopListInput {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub items: Vec<TopListItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopListItem {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: f32,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineInput {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackedBarInput {
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub y: f32,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: Option<f32>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub segments: Vec<StackedSegment>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StackedSegment {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub value: f32,
    #[serde(default)]
    pub color: Option<String>,
}

/// Non-finite values never reach geometry; they render as zero.
pub(crate) fn clamp_number(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

#[derive(Debug, Error)]
pub enum InputError {
    #[error("chart panel request is not valid JSON: {0}")]
    Syntax(json5::Error),
    #[error("chart panel request has an unexpected shape: {0}")]
    Shape(#[from] serde_json::Error),
}

/// Decode a panel request: either a single tagged object or an array of them.
/// Strict JSON is tried first; JSON5 covers hand-written and model-produced
/// requests with trailing commas or unquoted keys.
pub fn parse_panel_inputs(input: &str) -> Result<Vec<ChartPanelInput>, InputError> {
    let value: serde_json::Value = match serde_json::from_str(input) {
        Ok(value) => value,
        Err(_) => json5::from_str(input).map_err(InputError::Syntax)?,
    };

    if value.is_array() {
        Ok(serde_json::from_value(value)?)
    } else {
        Ok(vec![serde_json::from_value(value)?])
    }
}
