use mxpanel_rs::{ReflowConfig, reflow_fragment};

const PANEL_STYLE: &str = "rounded=1;arcSize=16;fillColor=#FFFFFF;strokeColor=#CFE6FA;strokeWidth=1;shadow=1;";
const CHILD_STYLE: &str = "rounded=0;fillColor=none;strokeColor=none;fontColor=#335A74;fontSize=11;";
const BACKGROUND_STYLE: &str = "rounded=0;fillColor=#F7FBFF;strokeColor=none;";

fn vertex(id: &str, style: &str, x: f32, y: f32, width: f32, height: f32) -> String {
    format!(
        "<mxCell id=\"{id}\" value=\"\" style=\"{style}\" vertex=\"1\" parent=\"1\">\n  <mxGeometry x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" as=\"geometry\"/>\n</mxCell>"
    )
}

fn reflow(fragment: &str) -> String {
    reflow_fragment(fragment, &ReflowConfig::default())
}

fn geometry_of(fragment: &str, id: &str) -> (f32, f32, f32, f32) {
    let wrapped = format!("<root>{fragment}</root>");
    let doc = roxmltree::Document::parse(&wrapped).expect("reflowed fragment parses");
    let cell = doc
        .descendants()
        .find(|node| node.has_tag_name("mxCell") && node.attribute("id") == Some(id))
        .unwrap_or_else(|| panic!("cell {id} missing from output"));
    let geometry = cell
        .children()
        .find(|child| child.has_tag_name("mxGeometry"))
        .expect("geometry present");
    let number = |name: &str| {
        geometry
            .attribute(name)
            .unwrap_or("0")
            .parse::<f32>()
            .expect("numeric attribute")
    };
    (
        number("x"),
        number("y"),
        number("width"),
        number("height"),
    )
}

#[test]
fn overlapping_panels_end_up_separated_by_the_gap() {
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
    ]
    .join("\n");
    let output = reflow(&input);

    let (_, a_y, _, a_h) = geometry_of(&output, "a");
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(a_y, 0.0);
    assert_eq!(b_y, 218.0);
    assert_eq!(b_y - (a_y + a_h), 18.0);
}

#[test]
fn panels_already_clear_of_each_other_stay_put() {
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 240.0, 400.0, 150.0),
    ]
    .join("\n");
    let output = reflow(&input);
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(b_y, 240.0);
}

#[test]
fn contained_cells_move_with_their_panel() {
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
        vertex("b_label", CHILD_STYLE, 20.0, 110.0, 100.0, 30.0),
        // an ellipse accent inside b rides along despite never seeding a group
        vertex("b_dot", "ellipse;fillColor=#EAF6FF;", 350.0, 120.0, 24.0, 24.0),
    ]
    .join("\n");
    let output = reflow(&input);

    let (_, label_y, _, _) = geometry_of(&output, "b_label");
    let (_, dot_y, _, _) = geometry_of(&output, "b_dot");
    assert_eq!(label_y, 110.0 + 118.0);
    assert_eq!(dot_y, 120.0 + 118.0);
}

#[test]
fn cell_outside_any_panel_forms_its_own_group() {
    // badge bottom 240 pokes past a's box, so containment fails and the
    // badge becomes a singleton group stacked after a
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("a_badge", CHILD_STYLE, 10.0, 150.0, 80.0, 90.0),
        vertex("b", PANEL_STYLE, 0.0, 400.0, 400.0, 150.0),
    ]
    .join("\n");
    let output = reflow(&input);
    let (_, badge_y, _, _) = geometry_of(&output, "a_badge");
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(badge_y, 218.0);
    // b already clears the badge band [218, 308]
    assert_eq!(b_y, 400.0);
}

#[test]
fn tolerated_overflow_widens_the_group_band() {
    // the child bottom sits 1 unit past its panel; containment tolerates it
    // and the group's band grows to 201, pushing the next panel one further
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("a_tag", CHILD_STYLE, 10.0, 150.0, 80.0, 51.0),
        vertex("b", PANEL_STYLE, 0.0, 210.0, 400.0, 150.0),
    ]
    .join("\n");
    let output = reflow(&input);
    let (_, tag_y, _, _) = geometry_of(&output, "a_tag");
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(tag_y, 150.0);
    assert_eq!(b_y, 201.0 + 18.0);
}

#[test]
fn nested_panels_group_with_the_tightest_container() {
    // inner sits inside both outer panels; the smaller area wins
    let input = [
        vertex("outer", PANEL_STYLE, 0.0, 0.0, 600.0, 400.0),
        vertex("mid", PANEL_STYLE, 10.0, 10.0, 400.0, 300.0),
        vertex("inner", CHILD_STYLE, 20.0, 20.0, 100.0, 40.0),
        vertex("below", PANEL_STYLE, 0.0, 200.0, 400.0, 100.0),
    ]
    .join("\n");
    let output = reflow(&input);
    // outer [0,400], mid [10,310], below [200,300] sorted by top; mid starts
    // inside outer's band so it shifts to 418, dragging inner with it
    let (_, inner_y, _, _) = geometry_of(&output, "inner");
    let (_, mid_y, _, _) = geometry_of(&output, "mid");
    assert_eq!(mid_y, 418.0);
    assert_eq!(inner_y, 20.0 + 408.0);
}

#[test]
fn reflow_is_idempotent() {
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
        vertex("c", PANEL_STYLE, 0.0, 180.0, 400.0, 120.0),
    ]
    .join("\n");
    let first = reflow(&input);
    let second = reflow(&first);
    assert_eq!(first, second);
}

#[test]
fn malformed_markup_passes_through_verbatim() {
    for input in [
        "<mxCell id=\"a\" value=\"unterminated",
        "<mxCell id=\"a\"><mxGeometry width=\"10\" height=\"10\"/>",
        "plain text, no markup",
        "<mxCell id=\"a\" value=\"a & b\"/>",
    ] {
        assert_eq!(reflow(input), input);
    }
}

#[test]
fn layout_excluded_cells_round_trip_untouched() {
    let zero_area = "<mxCell id=\"zero\" value=\"keep  me\" style=\"fillColor=#FFF;\" vertex=\"1\" parent=\"1\"><mxGeometry x=\"5\" y=\"5\" width=\"0\" height=\"0\" as=\"geometry\"/></mxCell>";
    let no_geometry = "<mxCell id=\"meta\" style=\"edgeStyle=none;\" parent=\"1\"/>";
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        zero_area.to_string(),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
        no_geometry.to_string(),
    ]
    .join("\n");
    let output = reflow(&input);

    // the overlap was fixed...
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(b_y, 218.0);
    // ...but cells outside layout analysis kept their exact original bytes
    assert!(output.contains(zero_area));
    assert!(output.contains(no_geometry));
}

#[test]
fn output_preserves_document_order() {
    let input = [
        vertex("late", PANEL_STYLE, 0.0, 300.0, 400.0, 150.0),
        vertex("early", PANEL_STYLE, 0.0, 0.0, 400.0, 350.0),
    ]
    .join("\n");
    let output = reflow(&input);
    let late_at = output.find("id=\"late\"").unwrap();
    let early_at = output.find("id=\"early\"").unwrap();
    assert!(late_at < early_at);
    // late overlapped early's band and moved below it
    let (_, late_y, _, _) = geometry_of(&output, "late");
    assert_eq!(late_y, 368.0);
}

#[test]
fn connector_follows_when_both_endpoints_shift_together() {
    let edge = "<mxCell id=\"e\" style=\"edgeStyle=orthogonalEdgeStyle;\" edge=\"1\" parent=\"1\" source=\"b_one\" target=\"b_two\"><mxGeometry x=\"0\" y=\"0\" width=\"1\" height=\"1\" as=\"geometry\"><Array as=\"points\"><mxPoint x=\"150\" y=\"140\"/></Array></mxGeometry></mxCell>";
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
        vertex("b_one", CHILD_STYLE, 20.0, 110.0, 50.0, 30.0),
        vertex("b_two", CHILD_STYLE, 200.0, 110.0, 50.0, 30.0),
        edge.to_string(),
    ]
    .join("\n");
    let output = reflow(&input);

    // both endpoints shifted by 118, so the waypoint moved with them
    assert!(output.contains("<mxPoint x=\"150\" y=\"258\"/>"));
    // the connector's own geometry stays where it was
    let (_, e_y, _, _) = geometry_of(&output, "e");
    assert_eq!(e_y, 0.0);
}

#[test]
fn connector_with_uneven_shifts_is_left_alone() {
    let edge = "<mxCell id=\"e\" style=\"edgeStyle=orthogonalEdgeStyle;\" edge=\"1\" parent=\"1\" source=\"a_item\" target=\"b_item\"><mxGeometry x=\"0\" y=\"0\" width=\"1\" height=\"1\" as=\"geometry\"><Array as=\"points\"><mxPoint x=\"150\" y=\"90\"/></Array></mxGeometry></mxCell>";
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("a_item", CHILD_STYLE, 20.0, 10.0, 50.0, 30.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 150.0),
        vertex("b_item", CHILD_STYLE, 20.0, 110.0, 50.0, 30.0),
        edge.to_string(),
    ]
    .join("\n");
    let output = reflow(&input);

    // source stayed, target moved: the waypoint keeps its original position
    assert!(output.contains("<mxPoint x=\"150\" y=\"90\"/>"));
}

#[test]
fn background_grows_to_cover_shifted_content() {
    let input = [
        vertex("bg", BACKGROUND_STYLE, 0.0, 0.0, 680.0, 900.0),
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 600.0),
        vertex("b", PANEL_STYLE, 0.0, 100.0, 400.0, 500.0),
    ]
    .join("\n");
    let output = reflow(&input);

    // b shifts to [618, 1118]; content bottom 1118 + 40 margin
    let (_, b_y, _, _) = geometry_of(&output, "b");
    assert_eq!(b_y, 618.0);
    let (_, _, _, bg_h) = geometry_of(&output, "bg");
    assert_eq!(bg_h, 1158.0);
}

#[test]
fn background_margin_applies_even_without_shifts() {
    // the backdrop's own bottom dominates the extent, so the 40-unit margin
    // rule still grows it
    let input = [
        vertex("bg", BACKGROUND_STYLE, 0.0, 0.0, 680.0, 2000.0),
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
    ]
    .join("\n");
    let output = reflow(&input);
    let (_, _, _, bg_h) = geometry_of(&output, "bg");
    assert_eq!(bg_h, 2040.0);
}

#[test]
fn fragment_without_changes_round_trips_byte_identical() {
    let input = [
        vertex("a", PANEL_STYLE, 0.0, 0.0, 400.0, 200.0),
        vertex("b", PANEL_STYLE, 0.0, 240.0, 400.0, 150.0),
    ]
    .join("\n");
    assert_eq!(reflow(&input), input);
}

#[test]
fn empty_fragment_stays_empty() {
    assert_eq!(reflow(""), "");
}
