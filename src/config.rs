//! @ai:module:intent Configuration structs for table and chart comparison
//! @ai:module:layer infrastructure
//! @ai:module:public_api CompareConfig, ChartConfig
//! @ai:module:stateless true

use crate::chart::palette::LEGACY_COLOR_PALETTE;
use crate::chart::LabelSelection;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// @ai:intent Main configuration for the comparison tool
/// @ai:effects pure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareConfig {
    #[serde(default)]
    pub include_object_sizes: bool,
    #[serde(default)]
    pub chart: ChartConfig,
}

/// @ai:intent Geometry and styling of the grouped bar chart
/// @ai:effects pure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    /// Installed as the renderer font family while a chart is drawn.
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default = "default_value_label_offset")]
    pub value_label_offset: f64,
    #[serde(default = "default_tick_label_rotation")]
    pub tick_label_rotation: f64,
    #[serde(default = "default_palette")]
    pub palette: Vec<String>,
    #[serde(default)]
    pub label_selection: LabelSelection,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            font_family: default_font_family(),
            value_label_offset: default_value_label_offset(),
            tick_label_rotation: default_tick_label_rotation(),
            palette: default_palette(),
            label_selection: LabelSelection::default(),
        }
    }
}

fn default_width() -> u32 {
    1000
}

fn default_height() -> u32 {
    600
}

fn default_font_family() -> String {
    "monospace".to_string()
}

fn default_value_label_offset() -> f64 {
    0.02
}

fn default_tick_label_rotation() -> f64 {
    45.0
}

fn default_palette() -> Vec<String> {
    LEGACY_COLOR_PALETTE.iter().map(|c| c.to_string()).collect()
}

impl CompareConfig {
    /// @ai:intent Load configuration from a TOML file
    /// @ai:pre path exists and is readable
    /// @ai:effects fs:read
    pub fn load(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// @ai:intent Save configuration to a TOML file
    /// @ai:effects fs:write
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_legacy_chart() {
        let config = ChartConfig::default();
        assert_eq!(config.font_family, "monospace");
        assert_eq!(config.label_selection, LabelSelection::Leading { count: 3 });
        assert_eq!(config.palette.len(), 17);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: CompareConfig = toml::from_str(
            r##"
            include_object_sizes = true

            [chart]
            width = 1280
            palette = ["#112233", "#445566"]

            [chart.label_selection]
            mode = "by_name"
            "##,
        )
        .unwrap();

        assert!(config.include_object_sizes);
        assert_eq!(config.chart.width, 1280);
        assert_eq!(config.chart.height, 600);
        assert_eq!(config.chart.palette, vec!["#112233", "#445566"]);
        assert_eq!(config.chart.label_selection, LabelSelection::ByName);
    }

    #[test]
    fn test_axis_keys_are_ignored() {
        let config: CompareConfig = toml::from_str(
            r#"
            [chart]
            cluster_width = 0.5
            y_max = 5.0
            "#,
        )
        .unwrap();

        assert_eq!(config.chart, ChartConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("compare.toml");

        let mut config = CompareConfig::default();
        config.chart.tick_label_rotation = 90.0;
        config.save(&path).unwrap();

        let loaded = CompareConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = TempDir::new().unwrap();
        let err = CompareConfig::load(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
