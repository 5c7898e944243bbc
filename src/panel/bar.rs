use super::*;
use crate::ir::BarChartInput;

pub(super) fn build_bar_chart(
    input: &BarChartInput,
    theme: &Theme,
    config: &PanelConfig,
) -> Vec<Cell> {
    let cfg = &config.bar;
    let mut builder = CellBuilder::new();

    let x = clamp_number(input.x);
    let y = clamp_number(input.y);
    let width = clamp_number(input.width);
    let height = input.height.map(clamp_number).unwrap_or(cfg.default_height);
    let title_height = title_offset(input.title.as_ref(), config);

    let plot_x = x + cfg.padding;
    let plot_y = y + cfg.padding + title_height;
    let plot_width = width - cfg.padding * 2.0;
    let plot_height = height - cfg.padding * 2.0 - title_height - cfg.axis_label_height;

    let mut cells = Vec::new();
    cells.push(panel_base(&mut builder, theme, x, y, width, height));
    if let Some(title) = input.title.as_deref() {
        cells.push(panel_title(&mut builder, theme, title, x, y, cfg.title_width));
    }

    cells.push(builder.cell(
        "",
        format!(
            "rounded=0;fillColor=none;strokeColor={};strokeWidth=1;whiteSpace=wrap;html=1;",
            theme.plot_stroke
        ),
        Geometry::new(plot_x, plot_y, plot_width, plot_height),
    ));

    for line in 1..=cfg.grid_lines {
        let line_y = plot_y + (plot_height / (cfg.grid_lines as f32 + 1.0)) * line as f32;
        cells.push(builder.cell(
            "",
            format!(
                "rounded=0;fillColor=none;strokeColor={};strokeWidth=1;dashed=1;dashPattern=3 3;whiteSpace=wrap;html=1;",
                theme.grid_color
            ),
            Geometry::new(plot_x, line_y, plot_width, 1.0),
        ));
    }

    let categories = &input.data.categories[..input.data.categories.len().min(cfg.max_categories)];
    let values: Vec<f32> = categories
        .iter()
        .enumerate()
        .map(|(index, _)| {
            input
                .data
                .values
                .get(index)
                .copied()
                .map(clamp_number)
                .unwrap_or(0.0)
        })
        .collect();
    let max = values.iter().copied().fold(1.0_f32, f32::max);
    let bar_width = (plot_width - cfg.bar_gap * (categories.len() as f32 - 1.0))
        / categories.len().max(1) as f32;

    for (index, category) in categories.iter().enumerate() {
        let value = values[index];
        let bar_height = (value / max) * (plot_height - 20.0);
        let bar_x = plot_x + index as f32 * (bar_width + cfg.bar_gap);
        let bar_y = plot_y + plot_height - bar_height;
        let explicit = input
            .data
            .colors
            .as_ref()
            .and_then(|colors| colors.get(index))
            .map(String::as_str);
        let color = theme.item_color(explicit, index);

        cells.push(builder.cell(
            "",
            format!(
                "rounded=1;arcSize=6;fillColor={};strokeColor=none;whiteSpace=wrap;html=1;",
                color
            ),
            Geometry::new(bar_x, bar_y, bar_width, bar_height),
        ));
        cells.push(builder.cell(
            category.as_str(),
            caption_style(theme, "center", "top"),
            Geometry::new(bar_x, plot_y + plot_height + 2.0, bar_width, 16.0),
        ));
    }

    cells
}
