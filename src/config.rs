use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KpiConfig {
    pub default_height: f32,
    pub padding: f32,
    pub gap: f32,
    pub max_items: usize,
    pub min_card_height: f32,
    pub label_strip_height: f32,
    pub title_width: f32,
}

impl Default for KpiConfig {
    fn default() -> Self {
        Self {
            default_height: 110.0,
            padding: 15.0,
            gap: 12.0,
            max_items: 5,
            min_card_height: 48.0,
            label_strip_height: 16.0,
            title_width: 240.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub default_height: f32,
    pub padding: f32,
    pub max_categories: usize,
    pub grid_lines: usize,
    pub bar_gap: f32,
    pub axis_label_height: f32,
    pub title_width: f32,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            default_height: 180.0,
            padding: 16.0,
            max_categories: 8,
            grid_lines: 4,
            bar_gap: 10.0,
            axis_label_height: 20.0,
            title_width: 280.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TopListConfig {
    pub default_height: f32,
    pub padding: f32,
    pub row_height: f32,
    pub max_items: usize,
    pub label_width: f32,
    pub value_width: f32,
    pub bar_reserve: f32,
    pub min_bar_width: f32,
    pub title_width: f32,
}

impl Default for TopListConfig {
    fn default() -> Self {
        Self {
            default_height: 180.0,
            padding: 16.0,
            row_height: 24.0,
            max_items: 6,
            label_width: 120.0,
            value_width: 40.0,
            bar_reserve: 80.0,
            min_bar_width: 8.0,
            title_width: 220.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub default_height: f32,
    pub padding: f32,
    pub max_steps: usize,
    pub gap: f32,
    pub narrow_gap: f32,
    pub min_pill_width: f32,
    pub min_pill_height: f32,
    pub max_label_chars: usize,
    pub truncate_to: usize,
    pub title_width: f32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            default_height: 100.0,
            padding: 16.0,
            max_steps: 6,
            gap: 10.0,
            narrow_gap: 6.0,
            min_pill_width: 100.0,
            min_pill_height: 34.0,
            max_label_chars: 18,
            truncate_to: 15,
            title_width: 220.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StackedBarConfig {
    pub default_height: f32,
    pub padding: f32,
    pub max_segments: usize,
    pub bar_height: f32,
    pub bar_offset: f32,
    pub legend_pitch: f32,
    pub swatch_size: f32,
    pub title_width: f32,
}

impl Default for StackedBarConfig {
    fn default() -> Self {
        Self {
            default_height: 140.0,
            padding: 16.0,
            max_segments: 6,
            bar_height: 26.0,
            bar_offset: 10.0,
            legend_pitch: 16.0,
            swatch_size: 10.0,
            title_width: 220.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    pub title_height: f32,
    pub kpi: KpiConfig,
    pub bar: BarChartConfig,
    pub top_list: TopListConfig,
    pub pipeline: PipelineConfig,
    pub stacked: StackedBarConfig,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            title_height: 24.0,
            kpi: KpiConfig::default(),
            bar: BarChartConfig::default(),
            top_list: TopListConfig::default(),
            pipeline: PipelineConfig::default(),
            stacked: StackedBarConfig::default(),
        }
    }
}

/// Thresholds driving the reflow pass. These are tuned heuristics matched to
/// the panel and decoration visual conventions, not structural metadata; the
/// defaults are observed behavior and should not be retuned casually.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReflowConfig {
    pub gap: f32,
    pub background_min_width: f32,
    pub background_min_height: f32,
    pub panel_min_width: f32,
    pub panel_min_height: f32,
    pub containment_tolerance: f32,
    pub background_margin: f32,
}

impl Default for ReflowConfig {
    fn default() -> Self {
        Self {
            gap: 18.0,
            background_min_width: 680.0,
            background_min_height: 900.0,
            panel_min_width: 300.0,
            panel_min_height: 80.0,
            containment_tolerance: 1.0,
            background_margin: 40.0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    pub panel: PanelConfig,
    pub reflow: ReflowConfig,
}

/// Load a config file, falling back to defaults when no path is given.
/// Accepts strict JSON first, then JSON5 for hand-written files.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let contents = std::fs::read_to_string(path)?;
    let config = match serde_json::from_str::<Config>(&contents) {
        Ok(config) => config,
        Err(_) => json5::from_str::<Config>(&contents)?,
    };
    Ok(config)
}
