//! Window configuration
//!
//! The window ships with the reference layout baked in. An optional
//! `window.toml` under the user config directory, next to the executable, or
//! in the current directory overrides individual fields; every key is
//! optional, so a missing file and an empty file are equivalent.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

/// Directory name under the per-user config root
const CONFIG_DIR: &str = "animation-creator";
/// Config file name searched in each candidate location
const CONFIG_FILE: &str = "window.toml";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid geometry: {0}")]
    Geometry(String),
}

/// Window geometry in the `<width>x<height>` form, e.g. `800x600`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
}

impl FromStr for Geometry {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((width, height)) = s.split_once('x') else {
            return Err(ConfigError::Geometry(s.to_string()));
        };
        let width: u32 = width
            .parse()
            .map_err(|_| ConfigError::Geometry(s.to_string()))?;
        let height: u32 = height
            .parse()
            .map_err(|_| ConfigError::Geometry(s.to_string()))?;
        if width == 0 || height == 0 {
            return Err(ConfigError::Geometry(s.to_string()));
        }
        Ok(Geometry { width, height })
    }
}

impl fmt::Display for Geometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Resolved window configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub window_width: u32,
    /// Window height in pixels
    pub window_height: u32,
    /// Title-card label text
    pub label_text: String,
    /// Font family for the label
    pub font_family: String,
    /// Font size in points
    pub font_size: u32,
    /// Vertical padding above and below the label, in pixels
    pub label_padding: u32,
    /// Button caption
    pub button_label: String,
    /// Vertical padding above and below the button, in pixels
    pub button_padding: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Sample Window".to_string(),
            window_width: 800,
            window_height: 600,
            label_text: "Animation Creator".to_string(),
            font_family: "Arial".to_string(),
            font_size: 16,
            label_padding: 40,
            button_label: "Close".to_string(),
            button_padding: 20,
        }
    }
}

/// On-disk form of [`Config`]. A `geometry` string wins over explicit
/// `window_width`/`window_height` keys.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    title: Option<String>,
    geometry: Option<String>,
    window_width: Option<u32>,
    window_height: Option<u32>,
    label_text: Option<String>,
    font_family: Option<String>,
    font_size: Option<u32>,
    label_padding: Option<u32>,
    button_label: Option<String>,
    button_padding: Option<u32>,
}

impl Config {
    /// Find `window.toml` in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(CONFIG_DIR).join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)?;
        Self::from_file(file)
    }

    /// Load configuration from the first known location, falling back to the
    /// built-in layout when none exists or the file is unusable.
    pub fn resolve() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };
        match Self::load_from_path(&path) {
            Ok(config) => {
                tracing::info!(path = %path.display(), "loaded window config");
                config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to load window config, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Pango font string for the label, e.g. `"Arial 16"`.
    pub fn font_description(&self) -> String {
        format!("{} {}", self.font_family, self.font_size)
    }

    fn from_file(file: ConfigFile) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let (window_width, window_height) = match file.geometry {
            Some(ref raw) => {
                let geometry: Geometry = raw.parse()?;
                (geometry.width, geometry.height)
            }
            None => (
                file.window_width.unwrap_or(defaults.window_width),
                file.window_height.unwrap_or(defaults.window_height),
            ),
        };
        Ok(Self {
            title: file.title.unwrap_or(defaults.title),
            window_width,
            window_height,
            label_text: file.label_text.unwrap_or(defaults.label_text),
            font_family: file.font_family.unwrap_or(defaults.font_family),
            font_size: file.font_size.unwrap_or(defaults.font_size),
            label_padding: file.label_padding.unwrap_or(defaults.label_padding),
            button_label: file.button_label.unwrap_or(defaults.button_label),
            button_padding: file.button_padding.unwrap_or(defaults.button_padding),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let config = Config::default();
        assert_eq!(config.title, "Sample Window");
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.label_text, "Animation Creator");
        assert_eq!(config.font_family, "Arial");
        assert_eq!(config.font_size, 16);
        assert_eq!(config.label_padding, 40);
        assert_eq!(config.button_label, "Close");
        assert_eq!(config.button_padding, 20);
    }

    #[test]
    fn test_geometry_parse() {
        let geometry: Geometry = "800x600".parse().unwrap();
        assert_eq!(
            geometry,
            Geometry {
                width: 800,
                height: 600
            }
        );

        let geometry: Geometry = "1x1".parse().unwrap();
        assert_eq!(
            geometry,
            Geometry {
                width: 1,
                height: 1
            }
        );
    }

    #[test]
    fn test_geometry_parse_rejects_malformed() {
        for bad in [
            "",
            "800",
            "800x",
            "x600",
            "800X600",
            "800 x 600",
            "0x600",
            "800x0",
            "800x600x200",
            "-800x600",
        ] {
            let result: Result<Geometry, _> = bad.parse();
            assert!(
                matches!(result, Err(ConfigError::Geometry(_))),
                "expected {:?} to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_geometry_display() {
        let geometry = Geometry {
            width: 800,
            height: 600,
        };
        assert_eq!(geometry.to_string(), "800x600");
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(
            &path,
            r#"
title = "Editor"
window_width = 1024
window_height = 768
label_text = "Frame Editor"
font_family = "Helvetica"
font_size = 12
label_padding = 8
button_label = "Quit"
button_padding = 4
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.title, "Editor");
        assert_eq!(config.window_width, 1024);
        assert_eq!(config.window_height, 768);
        assert_eq!(config.label_text, "Frame Editor");
        assert_eq!(config.font_family, "Helvetica");
        assert_eq!(config.font_size, 12);
        assert_eq!(config.label_padding, 8);
        assert_eq!(config.button_label, "Quit");
        assert_eq!(config.button_padding, 4);
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(&path, "title = \"Editor\"\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.title, "Editor");
        assert_eq!(config.window_width, 800);
        assert_eq!(config.window_height, 600);
        assert_eq!(config.label_text, "Animation Creator");
    }

    #[test]
    fn test_load_empty_file_is_default() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(&path, "title = \n").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");

        let result = Config::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_geometry_overrides_dimensions() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(
            &path,
            r#"
geometry = "640x480"
window_width = 1024
window_height = 768
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert_eq!(config.window_width, 640);
        assert_eq!(config.window_height, 480);
    }

    #[test]
    fn test_bad_geometry_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("window.toml");
        fs::write(&path, "geometry = \"wide\"\n").unwrap();

        let result = Config::load_from_path(&path);
        assert!(matches!(result, Err(ConfigError::Geometry(_))));
    }

    #[test]
    fn test_font_description() {
        let config = Config::default();
        assert_eq!(config.font_description(), "Arial 16");
    }
}
