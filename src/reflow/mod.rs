mod classify;
mod normalize;
mod parser;

pub use normalize::normalize_fragment;

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::cell::Geometry;
use crate::config::ReflowConfig;
use classify::{is_background, is_panel_candidate};
use parser::{Overrides, ParsedCell, collect_cells, parse_number, waypoint_nodes, write_fragment};

/// The unit of movement: one panel candidate plus everything it spatially
/// contains, or a lone ungrouped vertex. Bounds span ALL members, so a child
/// overflowing its panel widens the band the group occupies.
struct Group {
    members: Vec<usize>,
    top: f32,
    bottom: f32,
}

impl Group {
    fn singleton(index: usize, geometry: &Geometry) -> Self {
        Self {
            members: vec![index],
            top: geometry.y,
            bottom: geometry.y + geometry.height,
        }
    }

    fn recompute_bounds(&mut self, cells: &[ParsedCell]) {
        let mut top = f32::INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for &member in &self.members {
            let geometry = &cells[member].geometry;
            top = top.min(geometry.y);
            bottom = bottom.max(geometry.y + geometry.height);
        }
        self.top = top;
        self.bottom = bottom;
    }
}

fn contains(panel: &Geometry, cell: &Geometry, tolerance: f32) -> bool {
    cell.x >= panel.x - tolerance
        && cell.y >= panel.y - tolerance
        && cell.x + cell.width <= panel.x + panel.width + tolerance
        && cell.y + cell.height <= panel.y + panel.height + tolerance
}

/// Stack panel groups vertically so no two adjacent groups overlap, repair
/// connectors whose endpoints moved together, and grow page backgrounds to
/// cover the new extent.
///
/// This is a single forward pass over groups sorted by top coordinate, not an
/// iterative solver: only overlaps between neighbors in that order are
/// corrected. Malformed markup returns the input unchanged.
pub fn reflow_fragment(fragment: &str, config: &ReflowConfig) -> String {
    let wrapped = format!("<root>{fragment}</root>");
    let doc = match roxmltree::Document::parse(&wrapped) {
        Ok(doc) => doc,
        Err(_) => return fragment.to_string(),
    };

    let mut cells = collect_cells(&doc);

    let vertex_indices: Vec<usize> = (0..cells.len()).filter(|&i| cells[i].vertex).collect();
    let candidate_indices: Vec<usize> = vertex_indices
        .iter()
        .copied()
        .filter(|&i| is_panel_candidate(&cells[i], config))
        .collect();
    let candidate_set: HashSet<usize> = candidate_indices.iter().copied().collect();

    let mut groups: Vec<Group> = candidate_indices
        .iter()
        .map(|&i| Group::singleton(i, &cells[i].geometry))
        .collect();

    for &index in &vertex_indices {
        if candidate_set.contains(&index) || is_background(&cells[index], config) {
            continue;
        }
        let mut tightest: Option<(usize, f32)> = None;
        for (group_index, &candidate) in candidate_indices.iter().enumerate() {
            let panel = &cells[candidate].geometry;
            if !contains(panel, &cells[index].geometry, config.containment_tolerance) {
                continue;
            }
            let area = panel.width * panel.height;
            if tightest.map_or(true, |(_, best)| area < best) {
                tightest = Some((group_index, area));
            }
        }
        match tightest {
            Some((group_index, _)) => groups[group_index].members.push(index),
            None => groups.push(Group::singleton(index, &cells[index].geometry)),
        }
    }

    for group in &mut groups {
        group.recompute_bounds(&cells);
    }
    groups.sort_by(|a, b| a.top.partial_cmp(&b.top).unwrap_or(Ordering::Equal));

    let mut overrides = Overrides::default();
    let mut shifts: HashMap<&str, f32> = HashMap::new();
    let mut cursor = 0.0_f32;
    for (index, group) in groups.iter_mut().enumerate() {
        if index == 0 {
            cursor = group.bottom;
            continue;
        }
        if group.top < cursor + config.gap {
            let delta = cursor + config.gap - group.top;
            for &member in &group.members {
                let cell = &mut cells[member];
                cell.geometry.y += delta;
                overrides.set(cell.node, cell.geometry_node, "y", cell.geometry.y);
                shifts.insert(cell.id, delta);
            }
            group.top += delta;
            group.bottom += delta;
        }
        cursor = group.bottom;
    }

    // Connectors only follow when both endpoints moved by the same amount;
    // uneven shifts leave the waypoints where they were.
    for cell in cells.iter().filter(|cell| cell.edge) {
        let source_shift = cell.source.and_then(|id| shifts.get(id)).copied();
        let target_shift = cell.target.and_then(|id| shifts.get(id)).copied();
        let (Some(source_shift), Some(target_shift)) = (source_shift, target_shift) else {
            continue;
        };
        if source_shift != target_shift || source_shift == 0.0 {
            continue;
        }
        for point in waypoint_nodes(cell) {
            let y = parse_number(point.attribute("y"), f32::NAN);
            if !y.is_finite() {
                continue;
            }
            overrides.set(cell.node, point, "y", y + source_shift);
        }
    }

    let backgrounds: Vec<usize> = vertex_indices
        .iter()
        .copied()
        .filter(|&i| is_background(&cells[i], config))
        .collect();
    if !backgrounds.is_empty() {
        let max_bottom = vertex_indices
            .iter()
            .map(|&i| cells[i].geometry.y + cells[i].geometry.height)
            .fold(f32::NEG_INFINITY, f32::max);
        for &index in &backgrounds {
            let cell = &cells[index];
            let needed = max_bottom + config.background_margin - cell.geometry.y;
            if needed > cell.geometry.height {
                overrides.set(cell.node, cell.geometry_node, "height", needed);
            }
        }
    }

    write_fragment(&doc, &wrapped, &overrides)
}
