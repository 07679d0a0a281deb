//! Level settings
//!
//! Loaded from an optional JSON file; command line flags override them.

use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_SIZE, DEFAULT_GRID_WIDTH};
use crate::error::{MazeError, Result};
use crate::level::{Level, build_level};
use crate::maze::{ConnectionSet, GeneratorParams, Grid, generate_with, seeded_rng};

/// Maze and level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cells per row
    pub grid_width: usize,
    /// Rows
    pub grid_height: usize,
    /// World units per cell
    pub grid_size: f32,
    /// Fixed seed for a reproducible maze (random when absent)
    pub seed: Option<u64>,
    pub generator: GeneratorParams,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            grid_size: DEFAULT_GRID_SIZE,
            seed: None,
            generator: GeneratorParams::default(),
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let settings = serde_json::from_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Read settings, falling back to defaults when the file is missing or bad
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}): {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }

    /// Check dimensions, cell size and generator chances
    pub fn validate(&self) -> Result<()> {
        Grid::new(self.grid_width, self.grid_height)?;
        if !(self.grid_size.is_finite() && self.grid_size > 0.0) {
            return Err(MazeError::InvalidGridSize(self.grid_size));
        }
        self.generator.validate()
    }

    /// The configured seed, or a fresh one from thread entropy
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| rand::rng().random())
    }

    /// Generate the maze for these settings with an explicit seed
    pub fn generate(&self, seed: u64) -> Result<ConnectionSet> {
        self.validate()?;
        let mut rng = seeded_rng(seed);
        generate_with(self.grid_width, self.grid_height, &self.generator, &mut rng)
    }

    /// Generate a maze and lay out its level
    pub fn build_level(&self, seed: u64) -> Result<(ConnectionSet, Level)> {
        let maze = self.generate(seed)?;
        let level = build_level(&maze, self.grid_size);
        Ok((maze, level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::LabelMerge;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.generator.horizontal_chance, 0.5);
        assert_eq!(settings.generator.label_merge, LabelMerge::Class);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"grid_width": 4, "generator": {"vertical_chance": 0.25}}"#).unwrap();
        assert_eq!(settings.grid_width, 4);
        assert_eq!(settings.grid_height, DEFAULT_GRID_HEIGHT);
        assert_eq!(settings.generator.vertical_chance, 0.25);
        assert_eq!(settings.generator.horizontal_chance, 0.5);
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_label_merge_from_json() {
        let settings: Settings =
            serde_json::from_str(r#"{"generator": {"label_merge": "AdjacentOnly"}}"#).unwrap();
        assert_eq!(settings.generator.label_merge, LabelMerge::AdjacentOnly);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let settings = Settings {
            grid_height: 0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(MazeError::InvalidDimensions { .. })));

        let settings = Settings {
            grid_size: -1.0,
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(MazeError::InvalidGridSize(_))));
    }

    #[test]
    fn test_seed_resolution() {
        let fixed = Settings {
            seed: Some(77),
            ..Default::default()
        };
        assert_eq!(fixed.resolve_seed(), 77);
        assert_eq!(fixed.generate(77).unwrap(), fixed.generate(77).unwrap());
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("rotworld-settings-{}.json", std::process::id()));
        let settings = Settings {
            grid_width: 6,
            seed: Some(3),
            ..Default::default()
        };
        settings.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_falls_back() {
        let settings = Settings::load_or_default(Path::new("/nonexistent/rotworld.json"));
        assert_eq!(settings, Settings::default());
    }
}
