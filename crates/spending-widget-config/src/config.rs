//! Widget configuration types.
//!
//! Every field has a default, so an empty document (or no document at all)
//! yields the stock widget appearance.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use spending_widget_core::Color;
use std::path::Path;

/// Root configuration for one spending widget.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WidgetConfig {
    /// Pie chart geometry and palette
    pub chart: ChartConfig,
    /// Category row styling
    pub rows: RowConfig,
    /// Quick-action strip styling and copy
    pub quick_actions: QuickActionConfig,
    /// Fallback values for absent snapshot keys
    pub snapshot: SnapshotDefaults,
    /// Deep-link destinations
    pub navigation: NavigationConfig,
}

/// Pie chart configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    /// Logical edge of the square chart image, scaled by device density
    pub size_dp: u32,
    /// Gap between the image edge and the outer radius, in pixels
    pub padding_px: f32,
    /// Width of the gradient rim drawn over each segment
    pub rim_width_px: f32,
    /// Inner (hole) radius as a fraction of the outer radius
    pub donut_ratio: f32,
    /// Fill of the donut hole
    #[serde(with = "hex_color")]
    pub inner_color: Color,
    /// Ring stroked at the outer radius
    #[serde(with = "hex_color")]
    pub border_color: Color,
    /// Width of the outer ring
    pub border_width_px: f32,
    /// Fixed text shown in the donut hole
    pub label: String,
    /// Center label color
    #[serde(with = "hex_color")]
    pub label_color: Color,
    /// Label text size as a fraction of the inner radius
    pub label_scale: f32,
    /// Label layout width as a fraction of the inner radius
    pub label_width_scale: f32,
    /// Flattening resolution for a full circle
    pub arc_segments: usize,
    /// Color used when a segment has no assigned color
    #[serde(with = "hex_color")]
    pub fallback_segment_color: Color,
    /// Most segments drawn
    pub max_segments: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            size_dp: 104,
            padding_px: 10.0,
            rim_width_px: 6.0,
            donut_ratio: 0.58,
            inner_color: Color::from_argb(0xFF07_182A),
            border_color: Color::from_argb(0x3327_C9E8),
            border_width_px: 4.0,
            label: "TOP\nSPEND".to_string(),
            label_color: Color::WHITE,
            label_scale: 0.4,
            label_width_scale: 1.4,
            arc_segments: 64,
            fallback_segment_color: Color::from_argb(0xFFFF_6B6B),
            max_segments: 3,
        }
    }
}

/// Largest chart edge, in pixels, that [`ChartConfig::pixel_size`] returns.
pub const MAX_CHART_EDGE_PX: u32 = 2048;

impl ChartConfig {
    /// Pixel edge of the chart image at the given density.
    ///
    /// Returns 0 for a non-positive or non-finite result and for anything
    /// above [`MAX_CHART_EDGE_PX`], so rendering fails instead of allocating.
    #[must_use]
    pub fn pixel_size(&self, density: f32) -> u32 {
        let px = (self.size_dp as f32 * density).trunc();
        if px.is_finite() && px > 0.0 && px <= MAX_CHART_EDGE_PX as f32 {
            px as u32
        } else {
            0
        }
    }
}

/// Category row configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RowConfig {
    /// Alpha multiplier applied to the category color for the color bar
    pub color_bar_alpha: f32,
}

impl Default for RowConfig {
    fn default() -> Self {
        Self {
            color_bar_alpha: 0.7,
        }
    }
}

/// Quick-action strip configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct QuickActionConfig {
    /// Label color of a quick-add action
    #[serde(with = "hex_color")]
    pub quick_add_color: Color,
    /// Label color of a regular action
    #[serde(with = "hex_color")]
    pub label_color: Color,
    /// Label of an empty slot
    pub placeholder_label: String,
    /// Label color of an empty slot
    #[serde(with = "hex_color")]
    pub placeholder_color: Color,
    /// Hint shown when no action is configured
    pub hint_empty: String,
    /// Hint shown when at least one action is configured
    pub hint_configured: String,
}

impl Default for QuickActionConfig {
    fn default() -> Self {
        Self {
            quick_add_color: Color::from_argb(0xFFFF_D54F),
            label_color: Color::WHITE,
            placeholder_label: "Thêm".to_string(),
            placeholder_color: Color::from_argb(0xFF9F_B3FF),
            hint_empty: "Chạm để thêm tác vụ".to_string(),
            hint_configured: "Nhấn giữ widget để chỉnh".to_string(),
        }
    }
}

/// Values used when a snapshot key is absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SnapshotDefaults {
    /// `month_year`
    pub month: String,
    /// `total_expense_formatted`
    pub total_display: String,
    /// `total_expense_label`
    pub total_label: String,
    /// Quick action `label`
    pub action_label: String,
}

impl Default for SnapshotDefaults {
    fn default() -> Self {
        Self {
            month: "--/----".to_string(),
            total_display: "₫0".to_string(),
            total_label: "Chi tiêu tháng này".to_string(),
            action_label: "Tác vụ".to_string(),
        }
    }
}

/// Deep-link destinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NavigationConfig {
    /// Tab opened by a tap on the widget body
    pub statistics_tab: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self { statistics_tab: 3 }
    }
}

impl WidgetConfig {
    /// Parse from a YAML string without validating.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse from a YAML string and validate.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or a value is out of range.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config = Self::from_yaml(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Serialize to a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns the first out-of-range field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let chart = &self.chart;
        if chart.size_dp == 0 {
            return Err(ConfigError::invalid("chart.size_dp", "must be positive"));
        }
        if !(chart.donut_ratio > 0.0 && chart.donut_ratio < 1.0) {
            return Err(ConfigError::invalid(
                "chart.donut_ratio",
                "must be between 0 and 1",
            ));
        }
        for (field, value) in [
            ("chart.padding_px", chart.padding_px),
            ("chart.rim_width_px", chart.rim_width_px),
            ("chart.border_width_px", chart.border_width_px),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::invalid(field, "must be a non-negative number"));
            }
        }
        if !(chart.label_scale > 0.0 && chart.label_width_scale > 0.0) {
            return Err(ConfigError::invalid("chart.label_scale", "must be positive"));
        }
        if chart.arc_segments < 4 {
            return Err(ConfigError::invalid("chart.arc_segments", "must be at least 4"));
        }
        if !(1..=3).contains(&chart.max_segments) {
            return Err(ConfigError::invalid(
                "chart.max_segments",
                "must be between 1 and 3",
            ));
        }
        if !(0.0..=1.0).contains(&self.rows.color_bar_alpha) {
            return Err(ConfigError::invalid(
                "rows.color_bar_alpha",
                "must be between 0 and 1",
            ));
        }
        Ok(())
    }
}

/// `#RRGGBB` / `#RRGGBBAA` strings for [`Color`] fields.
mod hex_color {
    use serde::{Deserialize, Deserializer, Serializer};
    use spending_widget_core::Color;

    pub(super) fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&color.to_hex_with_alpha())
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Color::from_hex(&hex).map_err(|e| serde::de::Error::custom(format!("{hex}: {e}")))
    }
}
