use super::*;
use crate::ir::KpiRowInput;

pub(super) fn build_kpi_row(input: &KpiRowInput, theme: &Theme, config: &PanelConfig) -> Vec<Cell> {
    let cfg = &config.kpi;
    let mut builder = CellBuilder::new();

    let x = clamp_number(input.x);
    let y = clamp_number(input.y);
    let width = clamp_number(input.width);
    let height = input.height.map(clamp_number).unwrap_or(cfg.default_height);
    let title_height = title_offset(input.title.as_ref(), config);

    let available_height = height - title_height - cfg.padding;
    let card_height = (available_height - 10.0).max(cfg.min_card_height);
    let items = &input.items[..input.items.len().min(cfg.max_items)];
    let card_width = (width - cfg.padding * 2.0 - cfg.gap * (items.len() as f32 - 1.0))
        / items.len().max(1) as f32;

    let mut cells = Vec::new();
    cells.push(panel_base(&mut builder, theme, x, y, width, height));
    if let Some(title) = input.title.as_deref() {
        cells.push(panel_title(&mut builder, theme, title, x, y, cfg.title_width));
    }

    for (index, item) in items.iter().enumerate() {
        let color = theme.item_color(item.color.as_deref(), index);
        let card_x = x + cfg.padding + index as f32 * (card_width + cfg.gap);
        let card_y = y + title_height + cfg.padding;

        let value = match item.value.as_deref() {
            Some(value) if !value.is_empty() => value,
            _ => "\u{2014}",
        };
        cells.push(builder.cell(
            value,
            format!(
                "rounded=1;arcSize=10;fillColor={};strokeColor=none;fontColor={};fontSize=18;fontStyle=1;whiteSpace=wrap;html=1;align=center;verticalAlign=middle;",
                color, theme.value_text_color
            ),
            Geometry::new(card_x, card_y, card_width, card_height),
        ));
        cells.push(builder.cell(
            item.label.as_deref().unwrap_or(""),
            caption_style(theme, "center", "top"),
            Geometry::new(
                card_x,
                card_y + card_height - (cfg.label_strip_height + 2.0),
                card_width,
                cfg.label_strip_height,
            ),
        ));
    }

    cells
}
