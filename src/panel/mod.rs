mod bar;
mod kpi;
mod pipeline;
mod stacked;
mod top_list;

use bar::*;
use kpi::*;
use pipeline::*;
use stacked::*;
use top_list::*;

use crate::cell::{Cell, CellBuilder, Geometry};
use crate::config::PanelConfig;
use crate::ir::{ChartPanelInput, clamp_number};
use crate::render::render_fragment;
use crate::theme::Theme;

/// Build one chart panel as a shape-graph fragment ready for embedding.
///
/// Malformed numeric input degrades instead of erroring: non-finite values
/// render as zero and oversized collections are truncated to the per-type cap.
pub fn build_chart_panel(input: &ChartPanelInput, theme: &Theme, config: &PanelConfig) -> String {
    render_fragment(&panel_cells(input, theme, config))
}

/// Same as [`build_chart_panel`] but returning the cell records, for callers
/// composing several panels into one document.
pub fn panel_cells(input: &ChartPanelInput, theme: &Theme, config: &PanelConfig) -> Vec<Cell> {
    match input {
        ChartPanelInput::KpiRow(kpi) => build_kpi_row(kpi, theme, config),
        ChartPanelInput::BarChart(bar) => build_bar_chart(bar, theme, config),
        ChartPanelInput::TopList(list) => build_top_list(list, theme, config),
        ChartPanelInput::Pipeline(pipeline) => build_pipeline(pipeline, theme, config),
        ChartPanelInput::StackedBar(stacked) => build_stacked_bar(stacked, theme, config),
    }
}

/// Vertical space reserved by an optional title row.
pub(super) fn title_offset(title: Option<&String>, config: &PanelConfig) -> f32 {
    if title.is_some() { config.title_height } else { 0.0 }
}

/// The rounded card every panel draws first.
pub(super) fn panel_base(
    builder: &mut CellBuilder,
    theme: &Theme,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Cell {
    builder.cell(
        "",
        format!(
            "rounded=1;arcSize=16;fillColor={};strokeColor={};strokeWidth=1;shadow=1;whiteSpace=wrap;html=1;",
            theme.panel_fill, theme.panel_stroke
        ),
        Geometry::new(x, y, width, height),
    )
}

pub(super) fn panel_title(
    builder: &mut CellBuilder,
    theme: &Theme,
    text: &str,
    x: f32,
    y: f32,
    width: f32,
) -> Cell {
    builder.cell(
        text,
        format!(
            "rounded=0;fillColor=none;strokeColor=none;fontColor={};fontSize=14;fontStyle=1;whiteSpace=wrap;html=1;",
            theme.title_color
        ),
        Geometry::new(x + 15.0, y + 10.0, width, 20.0),
    )
}

/// Small muted caption under bars and cards.
pub(super) fn caption_style(theme: &Theme, align: &str, valign: &str) -> String {
    format!(
        "rounded=0;fillColor=none;strokeColor=none;fontColor={};fontSize=11;whiteSpace=wrap;html=1;align={};verticalAlign={};",
        theme.label_color, align, valign
    )
}
