//! YAML configuration for the spending widget.

mod config;
mod error;

pub use config::{
    ChartConfig, NavigationConfig, QuickActionConfig, RowConfig, SnapshotDefaults, WidgetConfig,
    MAX_CHART_EDGE_PX,
};
pub use error::ConfigError;
