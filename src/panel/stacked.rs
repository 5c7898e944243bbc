use super::*;
use crate::ir::StackedBarInput;
use crate::render::fmt_num;

pub(super) fn build_stacked_bar(
    input: &StackedBarInput,
    theme: &Theme,
    config: &PanelConfig,
) -> Vec<Cell> {
    let cfg = &config.stacked;
    let mut builder = CellBuilder::new();

    let x = clamp_number(input.x);
    let y = clamp_number(input.y);
    let width = clamp_number(input.width);
    let height = input.height.map(clamp_number).unwrap_or(cfg.default_height);
    let title_height = title_offset(input.title.as_ref(), config);

    let bar_x = x + cfg.padding;
    let bar_y = y + cfg.padding + title_height + cfg.bar_offset;
    let bar_width = width - cfg.padding * 2.0;
    let segments = &input.segments[..input.segments.len().min(cfg.max_segments)];
    let total = segments
        .iter()
        .map(|segment| clamp_number(segment.value))
        .sum::<f32>()
        .max(1.0);

    let mut cells = Vec::new();
    cells.push(panel_base(&mut builder, theme, x, y, width, height));
    if let Some(title) = input.title.as_deref() {
        cells.push(panel_title(&mut builder, theme, title, x, y, cfg.title_width));
    }

    let mut current_x = bar_x;
    for (index, segment) in segments.iter().enumerate() {
        let segment_width = (clamp_number(segment.value) / total) * bar_width;
        let color = theme.item_color(segment.color.as_deref(), index);
        cells.push(builder.cell(
            "",
            format!(
                "rounded=1;arcSize=6;fillColor={};strokeColor=none;whiteSpace=wrap;html=1;",
                color
            ),
            Geometry::new(current_x, bar_y, segment_width, cfg.bar_height),
        ));
        current_x += segment_width;
    }

    for (index, segment) in segments.iter().enumerate() {
        let legend_y = bar_y + cfg.bar_height + 10.0 + index as f32 * cfg.legend_pitch;
        let color = theme.item_color(segment.color.as_deref(), index);
        cells.push(builder.cell(
            "",
            format!(
                "rounded=1;arcSize=4;fillColor={};strokeColor=none;whiteSpace=wrap;html=1;",
                color
            ),
            Geometry::new(bar_x, legend_y + 3.0, cfg.swatch_size, cfg.swatch_size),
        ));
        cells.push(builder.cell(
            format!("{} {}", segment.label, fmt_num(segment.value)),
            caption_style(theme, "left", "middle"),
            Geometry::new(
                bar_x + cfg.swatch_size + 4.0,
                legend_y,
                bar_width - (cfg.swatch_size + 4.0),
                14.0,
            ),
        ));
    }

    cells
}
