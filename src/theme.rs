use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub palette: Vec<String>,
    pub panel_fill: String,
    pub panel_stroke: String,
    pub title_color: String,
    pub label_color: String,
    pub value_text_color: String,
    pub plot_stroke: String,
    pub grid_color: String,
    pub pill_fill: String,
    pub pill_stroke: String,
    pub chevron_color: String,
}

impl Theme {
    pub fn infographic() -> Self {
        Self {
            palette: vec![
                "#2A8FEA".to_string(),
                "#2FB67D".to_string(),
                "#F2994A".to_string(),
                "#9B51E0".to_string(),
                "#EB5757".to_string(),
            ],
            panel_fill: "#FFFFFF".to_string(),
            panel_stroke: "#CFE6FA".to_string(),
            title_color: "#0B2A3C".to_string(),
            label_color: "#335A74".to_string(),
            value_text_color: "#FFFFFF".to_string(),
            plot_stroke: "#CFE6FA".to_string(),
            grid_color: "#E3F1FF".to_string(),
            pill_fill: "#EAF6FF".to_string(),
            pill_stroke: "#8CBEE8".to_string(),
            chevron_color: "#2A8FEA".to_string(),
        }
    }

    /// Color for the item at `index`, falling back to the cyclic palette when
    /// the caller supplied none.
    pub fn item_color<'a>(&'a self, explicit: Option<&'a str>, index: usize) -> &'a str {
        match explicit {
            Some(color) if !color.is_empty() => color,
            _ => &self.palette[index % self.palette.len()],
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::infographic()
    }
}
