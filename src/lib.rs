pub mod cell;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod panel;
pub mod reflow;
pub mod render;
pub mod style;
pub mod theme;

pub use cell::{Cell, CellBuilder, Geometry};
pub use config::{Config, PanelConfig, ReflowConfig, load_config};
pub use ir::{ChartPanelInput, InputError, parse_panel_inputs};
pub use panel::{build_chart_panel, panel_cells};
pub use reflow::{normalize_fragment, reflow_fragment};
pub use render::render_fragment;
pub use style::StyleMap;
pub use theme::Theme;

#[cfg(feature = "cli")]
pub use cli::run;
