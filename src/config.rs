//! Fixed layout constants, loadable from a JSON config file.
//!
//! Every pixel reservation the core needs is collected here so the grid
//! logic never hardcodes geometry. A missing or malformed config file
//! degrades to the defaults rather than failing startup.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Layout constants consumed by the viewport and hit-testing core.
///
/// All values are logical pixels.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of a column with no override.
    pub default_col_width: f32,
    /// Height of a row with no override.
    pub default_row_height: f32,
    /// Width of the row-header band on the left.
    pub header_width: f32,
    /// Height of the column-header band.
    pub header_height: f32,
    /// Height of the input line strip at the top of the window.
    pub input_line_height: f32,
    /// Rendered width of the leading icon glyph on the input line; the
    /// editable region starts after it.
    pub input_icon_width: f32,
    /// Pixel radius around an axis boundary that counts as a resize handle.
    pub handle_tolerance: f32,
    /// Smallest extent a resize may shrink an axis index to.
    pub min_axis_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            default_col_width: 100.0,
            default_row_height: 30.0,
            header_width: 40.0,
            header_height: 30.0,
            input_line_height: 30.0,
            input_icon_width: 20.0,
            handle_tolerance: 4.0,
            min_axis_size: 5.0,
        }
    }
}

impl LayoutConfig {
    /// Read a config from a JSON file, surfacing read and parse failures.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load a config from a JSON file.
    ///
    /// Any failure (missing file, bad JSON) logs a warning and falls back
    /// to [`LayoutConfig::default`]; the grid always starts.
    pub fn load(path: &Path) -> Self {
        match Self::from_json_file(path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "no usable layout config, using defaults");
                Self::default()
            }
        }
    }

    /// Vertical pixels reserved above the grid body (input line + column headers).
    pub fn reserved_height(&self) -> f32 {
        self.input_line_height + self.header_height
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_observed_policy() {
        let config = LayoutConfig::default();
        assert_eq!(config.default_col_width, 100.0);
        assert_eq!(config.default_row_height, 30.0);
        assert_eq!(config.header_width, 40.0);
        assert_eq!(config.min_axis_size, 5.0);
        assert_eq!(config.handle_tolerance, 4.0);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: LayoutConfig = serde_json::from_str(r#"{"default_col_width": 80.0}"#).unwrap();
        assert_eq!(config.default_col_width, 80.0);
        assert_eq!(config.default_row_height, 30.0);
    }

    #[test]
    fn missing_file_degrades_to_defaults() {
        assert!(LayoutConfig::from_json_file(Path::new("/nonexistent/powercells.json")).is_err());
        let config = LayoutConfig::load(Path::new("/nonexistent/powercells.json"));
        assert_eq!(config.header_width, 40.0);
    }

    #[test]
    fn malformed_json_errors_then_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(LayoutConfig::from_json_file(&path).is_err());
        let config = LayoutConfig::load(&path);
        assert_eq!(config.default_col_width, 100.0);
    }

    #[test]
    fn valid_file_loads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("layout.json");
        std::fs::write(&path, r#"{"header_width": 50.0}"#).unwrap();

        let config = LayoutConfig::load(&path);
        assert_eq!(config.header_width, 50.0);
        assert_eq!(config.header_height, 30.0);
    }
}
