use super::*;
use crate::ir::PipelineInput;

/// Long step names are cut to a prefix plus an ellipsis so pills stay legible.
fn truncate_step(step: &str, max_chars: usize, keep: usize) -> String {
    if step.chars().count() > max_chars {
        let prefix: String = step.chars().take(keep).collect();
        format!("{}\u{2026}", prefix.trim())
    } else {
        step.to_string()
    }
}

pub(super) fn build_pipeline(
    input: &PipelineInput,
    theme: &Theme,
    config: &PanelConfig,
) -> Vec<Cell> {
    let cfg = &config.pipeline;
    let mut builder = CellBuilder::new();

    let x = clamp_number(input.x);
    let y = clamp_number(input.y);
    let width = clamp_number(input.width);
    let height = input.height.map(clamp_number).unwrap_or(cfg.default_height);
    let title_height = title_offset(input.title.as_ref(), config);

    let steps = &input.steps[..input.steps.len().min(cfg.max_steps)];
    let count = steps.len() as f32;

    // Two-pass width: pills get a comfortable minimum first; if that spills
    // past the panel edge, retry with the narrow gap and no minimum.
    let mut gap = cfg.gap;
    let mut pill_width =
        (width - cfg.padding * 2.0 - gap * (count - 1.0)) / steps.len().max(1) as f32;
    pill_width = pill_width.max(cfg.min_pill_width);
    let total_width = cfg.padding * 2.0 + count * pill_width + (count - 1.0) * gap;
    if total_width > width {
        gap = cfg.narrow_gap;
        pill_width = (width - cfg.padding * 2.0 - gap * (count - 1.0)) / steps.len().max(1) as f32;
    }
    let pill_height = (height - cfg.padding * 2.0 - title_height).max(cfg.min_pill_height);

    let mut cells = Vec::new();
    cells.push(panel_base(&mut builder, theme, x, y, width, height));
    if let Some(title) = input.title.as_deref() {
        cells.push(panel_title(&mut builder, theme, title, x, y, cfg.title_width));
    }

    for (index, step) in steps.iter().enumerate() {
        let label = truncate_step(step, cfg.max_label_chars, cfg.truncate_to);
        let pill_x = x + cfg.padding + index as f32 * (pill_width + gap);
        let pill_y = y + cfg.padding + title_height;

        cells.push(builder.cell(
            label,
            format!(
                "rounded=1;arcSize=18;fillColor={};strokeColor={};strokeWidth=1;fontColor={};fontSize=12;whiteSpace=wrap;html=1;align=center;verticalAlign=middle;",
                theme.pill_fill, theme.pill_stroke, theme.title_color
            ),
            Geometry::new(pill_x, pill_y, pill_width, pill_height),
        ));
        if index + 1 < steps.len() {
            cells.push(builder.cell(
                "\u{203a}",
                format!(
                    "rounded=0;fillColor=none;strokeColor=none;fontColor={};fontSize=18;whiteSpace=wrap;html=1;align=center;verticalAlign=middle;",
                    theme.chevron_color
                ),
                Geometry::new(pill_x + pill_width + 2.0, pill_y, gap, pill_height),
            ));
        }
    }

    cells
}
