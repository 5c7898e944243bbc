use crate::cell::Cell;

/// Format a coordinate the way the diagram tooling expects: whole numbers
/// without a trailing fraction, everything else in shortest round-trip form.
pub(crate) fn fmt_num(value: f32) -> String {
    format!("{}", value)
}

pub(crate) fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

fn write_cell(out: &mut String, cell: &Cell) {
    out.push_str(&format!(
        "<mxCell id=\"{}\" value=\"{}\" style=\"{}\"{} parent=\"{}\">",
        cell.id,
        escape_xml(&cell.value),
        escape_xml(&cell.style),
        if cell.vertex { " vertex=\"1\"" } else { "" },
        cell.parent,
    ));
    out.push_str(&format!(
        "\n  <mxGeometry x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" as=\"geometry\"/>\n",
        fmt_num(cell.geometry.x),
        fmt_num(cell.geometry.y),
        fmt_num(cell.geometry.width),
        fmt_num(cell.geometry.height),
    ));
    out.push_str("</mxCell>");
}

/// Serialize panel cells into a shape-graph fragment: one cell node per line
/// group, in build order, with no document wrapper.
pub fn render_fragment(cells: &[Cell]) -> String {
    let mut out = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            out.push('\n');
        }
        write_cell(&mut out, cell);
    }
    out
}
