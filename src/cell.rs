use std::collections::HashSet;

use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Geometry {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// One shape record destined for a diagram fragment. Panels only ever emit
/// vertices parented to the default layer; the fields stay public so an
/// embedding layer can re-parent cells when composing a full document.
#[derive(Debug, Clone)]
pub struct Cell {
    pub id: String,
    pub value: String,
    pub style: String,
    pub geometry: Geometry,
    pub vertex: bool,
    pub parent: String,
}

/// Allocates cells with ids unique within one panel build. Each build owns
/// its own builder, so concurrent builds never contend on shared state.
#[derive(Debug, Default)]
pub struct CellBuilder {
    seen: HashSet<String>,
}

impl CellBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> String {
        loop {
            let raw = Uuid::new_v4().simple().to_string();
            let id = format!("ct_{}", &raw[..8]);
            if self.seen.insert(id.clone()) {
                return id;
            }
        }
    }

    pub fn cell(&mut self, value: impl Into<String>, style: String, geometry: Geometry) -> Cell {
        Cell {
            id: self.next_id(),
            value: value.into(),
            style,
            geometry,
            vertex: true,
            parent: "1".to_string(),
        }
    }
}
