use super::parser::ParsedCell;
use crate::config::ReflowConfig;

// Style signals, kept verbatim from the observed panel/decoration drawing
// conventions. Classification reads the parsed attribute map, not the raw
// string, but matches these exact names and values.
pub(super) const GRADIENT_KEY: &str = "gradientColor";
pub(super) const PALE_BACKGROUND_FILL: &str = "#EAF6FF";
pub(super) const NO_STROKE: &str = "none";
pub(super) const ELLIPSE_SIGNAL: &str = "ellipse";
pub(super) const OPACITY_SIGNAL: &str = "opacity";

/// Page backdrop: a huge vertex drawn with a gradient, the pale panel fill,
/// or no stroke at all. Excluded from grouping, grown after reflow.
pub(super) fn is_background(cell: &ParsedCell, config: &ReflowConfig) -> bool {
    if !cell.vertex {
        return false;
    }
    if cell.geometry.width < config.background_min_width
        || cell.geometry.height < config.background_min_height
    {
        return false;
    }
    cell.style.has_key(GRADIENT_KEY)
        || cell.style.get("fillColor") == Some(PALE_BACKGROUND_FILL)
        || cell.style.get("strokeColor") == Some(NO_STROKE)
}

/// Ornamental shapes (ellipses, translucent accents) ride along with whatever
/// panel contains them but never seed a group.
pub(super) fn is_decoration(cell: &ParsedCell) -> bool {
    if !cell.vertex {
        return false;
    }
    if cell.style.is_empty() {
        return false;
    }
    cell.style.any_key_contains(ELLIPSE_SIGNAL)
        || cell.style.any_value_contains(ELLIPSE_SIGNAL)
        || cell.style.any_key_contains(OPACITY_SIGNAL)
}

pub(super) fn is_panel_candidate(cell: &ParsedCell, config: &ReflowConfig) -> bool {
    if !cell.vertex || is_background(cell, config) || is_decoration(cell) {
        return false;
    }
    cell.geometry.width >= config.panel_min_width && cell.geometry.height >= config.panel_min_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflow::parser::collect_cells;
    use roxmltree::Document;

    fn parse_one(attrs: &str, geometry: &str) -> String {
        format!("<root><mxCell id=\"x\" {attrs}><mxGeometry {geometry} as=\"geometry\"/></mxCell></root>")
    }

    #[test]
    fn huge_pale_vertex_is_background() {
        let source = parse_one(
            "vertex=\"1\" style=\"strokeColor=none;fillColor=#FAFDFF;\"",
            "x=\"0\" y=\"0\" width=\"700\" height=\"980\"",
        );
        let doc = Document::parse(&source).unwrap();
        let cells = collect_cells(&doc);
        let config = ReflowConfig::default();
        assert!(is_background(&cells[0], &config));
        assert!(!is_panel_candidate(&cells[0], &config));
    }

    #[test]
    fn size_alone_does_not_make_a_background() {
        let source = parse_one(
            "vertex=\"1\" style=\"fillColor=#FFFFFF;strokeColor=#CFE6FA;\"",
            "x=\"0\" y=\"0\" width=\"700\" height=\"980\"",
        );
        let doc = Document::parse(&source).unwrap();
        let cells = collect_cells(&doc);
        let config = ReflowConfig::default();
        assert!(!is_background(&cells[0], &config));
        assert!(is_panel_candidate(&cells[0], &config));
    }

    #[test]
    fn ellipse_and_opacity_mark_decorations() {
        let config = ReflowConfig::default();
        for style in [
            "ellipse;whiteSpace=wrap;",
            "shape=ellipse;fillColor=#EAF6FF;",
            "rounded=1;opacity=40;",
        ] {
            let source = parse_one(
                &format!("vertex=\"1\" style=\"{style}\""),
                "x=\"0\" y=\"0\" width=\"400\" height=\"100\"",
            );
            let doc = Document::parse(&source).unwrap();
            let cells = collect_cells(&doc);
            assert!(is_decoration(&cells[0]), "style {style:?}");
            assert!(!is_panel_candidate(&cells[0], &config), "style {style:?}");
        }
    }

    #[test]
    fn panel_candidate_needs_both_minimums() {
        let config = ReflowConfig::default();
        for (geometry, expected) in [
            ("x=\"0\" y=\"0\" width=\"300\" height=\"80\"", true),
            ("x=\"0\" y=\"0\" width=\"299\" height=\"200\"", false),
            ("x=\"0\" y=\"0\" width=\"400\" height=\"79\"", false),
        ] {
            let source = parse_one(
                "vertex=\"1\" style=\"rounded=1;fillColor=#FFFFFF;strokeColor=#CFE6FA;\"",
                geometry,
            );
            let doc = Document::parse(&source).unwrap();
            let cells = collect_cells(&doc);
            assert_eq!(
                is_panel_candidate(&cells[0], &config),
                expected,
                "geometry {geometry:?}"
            );
        }
    }

    #[test]
    fn edges_are_never_classified() {
        let source = parse_one(
            "edge=\"1\" style=\"strokeColor=none;\"",
            "x=\"0\" y=\"0\" width=\"700\" height=\"980\"",
        );
        let doc = Document::parse(&source).unwrap();
        let cells = collect_cells(&doc);
        let config = ReflowConfig::default();
        assert!(!is_background(&cells[0], &config));
        assert!(!is_decoration(&cells[0]));
        assert!(!is_panel_candidate(&cells[0], &config));
    }
}
