use std::collections::{HashMap, HashSet};

use roxmltree::{Document, Node};

use crate::cell::Geometry;
use crate::render::{escape_xml, fmt_num};
use crate::style::StyleMap;

/// One diagram cell admitted to layout analysis. Only elements with a
/// positive-area geometry block get a record; everything else stays in the
/// document and is re-emitted verbatim.
pub(super) struct ParsedCell<'a> {
    pub id: &'a str,
    pub node: Node<'a, 'a>,
    pub geometry_node: Node<'a, 'a>,
    pub geometry: Geometry,
    pub style: StyleMap,
    pub vertex: bool,
    pub edge: bool,
    pub source: Option<&'a str>,
    pub target: Option<&'a str>,
}

pub(super) fn parse_number(value: Option<&str>, fallback: f32) -> f32 {
    value
        .and_then(|raw| raw.trim().parse::<f32>().ok())
        .filter(|parsed| parsed.is_finite())
        .unwrap_or(fallback)
}

fn geometry_of<'a>(cell: Node<'a, 'a>) -> Option<(Node<'a, 'a>, Geometry)> {
    let node = cell
        .children()
        .find(|child| child.has_tag_name("mxGeometry"))?;
    let width = parse_number(node.attribute("width"), 0.0);
    let height = parse_number(node.attribute("height"), 0.0);
    if width <= 0.0 || height <= 0.0 {
        return None;
    }
    let x = parse_number(node.attribute("x"), 0.0);
    let y = parse_number(node.attribute("y"), 0.0);
    Some((node, Geometry::new(x, y, width, height)))
}

pub(super) fn collect_cells<'a>(doc: &'a Document<'a>) -> Vec<ParsedCell<'a>> {
    doc.root_element()
        .descendants()
        .filter(|node| node.has_tag_name("mxCell"))
        .filter_map(|node| {
            let (geometry_node, geometry) = geometry_of(node)?;
            Some(ParsedCell {
                id: node.attribute("id").unwrap_or(""),
                node,
                geometry_node,
                geometry,
                style: StyleMap::parse(node.attribute("style").unwrap_or("")),
                vertex: node.attribute("vertex") == Some("1"),
                edge: node.attribute("edge") == Some("1"),
                source: node.attribute("source"),
                target: node.attribute("target"),
            })
        })
        .collect()
}

/// Intermediate waypoints of a connector: `<Array as="points">` children of
/// its geometry block.
pub(super) fn waypoint_nodes<'a>(cell: &ParsedCell<'a>) -> Vec<Node<'a, 'a>> {
    cell.geometry_node
        .children()
        .filter(|child| child.has_tag_name("Array") && child.attribute("as") == Some("points"))
        .flat_map(|array| {
            array
                .children()
                .filter(|point| point.has_tag_name("mxPoint"))
        })
        .collect()
}

/// Attribute rewrites accumulated by the reflow pass, keyed by document node.
/// Cells with no rewrite anywhere in their subtree are emitted as their
/// original byte slice, which is what keeps layout-excluded cells untouched.
#[derive(Debug, Default)]
pub(super) struct Overrides {
    values: HashMap<u32, Vec<(&'static str, f32)>>,
    dirty: HashSet<u32>,
}

impl Overrides {
    pub(super) fn set(&mut self, cell: Node, target: Node, attr: &'static str, value: f32) {
        let entry = self.values.entry(target.id().get()).or_default();
        match entry.iter_mut().find(|(name, _)| *name == attr) {
            Some(slot) => slot.1 = value,
            None => entry.push((attr, value)),
        }
        self.dirty.insert(cell.id().get());
    }

    fn lookup(&self, node: Node, attr: &str) -> Option<f32> {
        self.values
            .get(&node.id().get())?
            .iter()
            .find(|(name, _)| *name == attr)
            .map(|(_, value)| *value)
    }

    fn subtree_dirty(&self, node: Node) -> bool {
        node.descendants()
            .any(|descendant| self.dirty.contains(&descendant.id().get()))
    }
}

/// Re-serialize the fragment in original node order. `source` is the wrapped
/// document text the parser ran over.
pub(super) fn write_fragment(doc: &Document, source: &str, overrides: &Overrides) -> String {
    let mut parts: Vec<String> = Vec::new();
    for child in doc.root_element().children() {
        if child.is_element() {
            if overrides.subtree_dirty(child) {
                let mut out = String::new();
                write_node(child, overrides, &mut out);
                parts.push(out);
            } else {
                parts.push(source[child.range()].to_string());
            }
        } else if child.is_comment() || child.is_pi() {
            parts.push(source[child.range()].to_string());
        } else if child.is_text() {
            let text = child.text().unwrap_or("").trim();
            if !text.is_empty() {
                parts.push(escape_xml(text));
            }
        }
    }
    parts.join("\n")
}

fn write_node(node: Node, overrides: &Overrides, out: &mut String) {
    if node.is_text() {
        out.push_str(&escape_xml(node.text().unwrap_or("")));
        return;
    }
    if !node.is_element() {
        return;
    }

    out.push('<');
    out.push_str(node.tag_name().name());
    for attr in node.attributes() {
        let value = match overrides.lookup(node, attr.name()) {
            Some(value) => fmt_num(value),
            None => escape_xml(attr.value()),
        };
        out.push(' ');
        out.push_str(attr.name());
        out.push_str("=\"");
        out.push_str(&value);
        out.push('"');
    }

    if node.children().next().is_none() {
        out.push_str("/>");
        return;
    }
    out.push('>');
    for child in node.children() {
        write_node(child, overrides, out);
    }
    out.push_str("</");
    out.push_str(node.tag_name().name());
    out.push('>');
}
