use super::*;
use crate::ir::TopListInput;
use crate::render::fmt_num;

pub(super) fn build_top_list(
    input: &TopListInput,
    theme: &Theme,
    config: &PanelConfig,
) -> Vec<Cell> {
    let cfg = &config.top_list;
    let mut builder = CellBuilder::new();

    let x = clamp_number(input.x);
    let y = clamp_number(input.y);
    let width = clamp_number(input.width);
    let height = input.height.map(clamp_number).unwrap_or(cfg.default_height);
    let title_height = title_offset(input.title.as_ref(), config);

    let items = &input.items[..input.items.len().min(cfg.max_items)];
    let max = items
        .iter()
        .map(|item| clamp_number(item.value))
        .fold(1.0_f32, f32::max);
    let bar_max_width = width - cfg.padding * 2.0 - cfg.bar_reserve;

    let mut cells = Vec::new();
    cells.push(panel_base(&mut builder, theme, x, y, width, height));
    if let Some(title) = input.title.as_deref() {
        cells.push(panel_title(&mut builder, theme, title, x, y, cfg.title_width));
    }

    for (index, item) in items.iter().enumerate() {
        let row_y = y + cfg.padding + title_height + index as f32 * cfg.row_height;
        let bar_width = (clamp_number(item.value) / max) * bar_max_width;
        let color = theme.item_color(item.color.as_deref(), index);

        cells.push(builder.cell(
            item.label.as_str(),
            format!(
                "rounded=0;fillColor=none;strokeColor=none;fontColor={};fontSize=12;whiteSpace=wrap;html=1;align=left;verticalAlign=middle;",
                theme.title_color
            ),
            Geometry::new(x + cfg.padding, row_y, cfg.label_width, cfg.row_height),
        ));
        cells.push(builder.cell(
            "",
            format!(
                "rounded=1;arcSize=8;fillColor={};strokeColor=none;whiteSpace=wrap;html=1;",
                color
            ),
            Geometry::new(
                x + cfg.padding + cfg.label_width,
                row_y + 4.0,
                bar_width.max(cfg.min_bar_width),
                14.0,
            ),
        ));
        cells.push(builder.cell(
            fmt_num(item.value),
            caption_style(theme, "right", "middle"),
            Geometry::new(
                x + width - cfg.padding - cfg.value_width,
                row_y,
                cfg.value_width,
                cfg.row_height,
            ),
        ));
    }

    cells
}
