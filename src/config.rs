use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::ConfigError;
use crate::view::Color;

static DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub fonts: FontsConfig,
    pub colors: ColorsConfig,
    pub labels: LabelsConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FontsConfig {
    pub body_size: f32,
    pub code_size: f32,
    pub table_size: f32,
    pub paragraph_family: String,
    pub monospace_family: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            body_size: 14.0,
            code_size: 13.0,
            table_size: 13.0,
            paragraph_family: "Times New Roman".to_string(),
            monospace_family: "Consolas, Monaco, monospace".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub code_background: Color,
    pub quote_border: Color,
    pub quote_background: Color,
    pub quote_text: Color,
    pub table_border: Color,
    pub header_background: Color,
    pub cell_background: Color,
    pub rule: Color,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        let gray = Color::rgb(0x80, 0x80, 0x80);
        let light_gray = Color::rgb(0xd3, 0xd3, 0xd3);
        Self {
            text: Color::BLACK,
            muted: gray,
            accent: Color::rgb(0x00, 0x00, 0xff),
            code_background: light_gray,
            quote_border: gray,
            quote_background: Color::rgb(0xf8, 0xf8, 0xf8),
            quote_text: Color::rgb(0xa9, 0xa9, 0xa9),
            table_border: gray,
            header_background: light_gray,
            cell_background: Color::WHITE,
            rule: gray,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub bullet: String,
    pub image_prefix: String,
    /// Used when an image has no alt text.
    pub image_placeholder: String,
}

impl Default for LabelsConfig {
    fn default() -> Self {
        Self {
            bullet: "• ".to_string(),
            image_prefix: "Image".to_string(),
            image_placeholder: "Изображение".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub max_depth: usize,
    /// Fall back to plain text when the HTML parser reports any error.
    pub strict: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 128,
            strict: true,
        }
    }
}

impl Config {
    /// The built-in theme shipped in `default_config.toml`.
    pub fn compiled_default() -> Self {
        // build.rs has already checked the file parses
        toml::from_str(DEFAULT_CONFIG).unwrap_or_default()
    }

    /// Parse config from TOML text. Missing keys keep their defaults.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load config from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Load config from a TOML file, or return defaults if it is missing or invalid.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::compiled_default()
            }
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", path.display(), e);
                Self::compiled_default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn compiled_default_matches_builtin_defaults() {
        let compiled = Config::compiled_default();
        let builtin = Config::default();
        assert_eq!(compiled.fonts.body_size, builtin.fonts.body_size);
        assert_eq!(compiled.fonts.monospace_family, builtin.fonts.monospace_family);
        assert_eq!(compiled.colors.quote_text, builtin.colors.quote_text);
        assert_eq!(compiled.colors.header_background, builtin.colors.header_background);
        assert_eq!(compiled.labels.image_placeholder, "Изображение");
        assert_eq!(compiled.render.max_depth, 128);
        assert!(compiled.render.strict);
    }

    #[test]
    fn partial_config_keeps_other_defaults() {
        let config = Config::from_toml("[colors]\naccent = \"#1a4f8b\"\n[labels]\nbullet = \"- \"").unwrap();
        assert_eq!(config.colors.accent, Color::rgb(0x1a, 0x4f, 0x8b));
        assert_eq!(config.colors.text, Color::BLACK);
        assert_eq!(config.labels.bullet, "- ");
        assert_eq!(config.labels.image_placeholder, "Изображение");
    }

    #[test]
    fn unknown_color_keys_are_ignored() {
        let config = Config::from_toml("[colors]\npage_background = \"#eeeeee\"\nrule = \"#101010\"").unwrap();
        assert_eq!(config.colors.rule, Color::rgb(0x10, 0x10, 0x10));
        assert_eq!(config.colors.cell_background, Color::WHITE);
    }

    #[test]
    fn invalid_color_is_an_error() {
        let err = Config::from_toml("[colors]\ntext = \"black\"").unwrap_err();
        assert!(err.to_string().contains("black"), "{err}");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nmax_depth = 16\nstrict = false").unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.render.max_depth, 16);
        assert!(!config.render.strict);
    }

    #[test]
    fn load_or_default_tolerates_missing_and_broken_files() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("config.toml");
        assert_eq!(Config::load_or_default(&missing).fonts.body_size, 14.0);

        fs::write(&missing, "[fonts\nbody_size = 9").unwrap();
        assert!(Config::load(&missing).is_err());
        assert_eq!(Config::load_or_default(&missing).fonts.body_size, 14.0);
    }
}
