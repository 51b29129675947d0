use crate::input::VelocityInput;
use crate::state::{GridLayout, Rect};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::Path};

/// Sizes and speeds shared by the host loop and the collision core. Missing
/// keys fall back to the defaults.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub level_width: i32,
    pub level_height: i32,
    pub tile_width: i32,
    pub tile_height: i32,
    pub dot_width: i32,
    pub dot_height: i32,
    /// Velocity change per key press, in pixels per tick.
    pub dot_velocity: i32,
    /// Pixels per second for frame independent movement.
    pub dot_velocity_per_second: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        WorldConfig {
            screen_width: 640,
            screen_height: 480,
            level_width: 1280,
            level_height: 960,
            tile_width: 80,
            tile_height: 80,
            dot_width: 20,
            dot_height: 20,
            dot_velocity: 10,
            dot_velocity_per_second: 640.0,
        }
    }
}

impl WorldConfig {
    pub fn load_json(path: impl AsRef<Path>) -> io::Result<Self> {
        let s = fs::read_to_string(path)?;
        let config: WorldConfig =
            serde_json::from_str(&s).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config
            .validate()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(config)
    }

    /// All sizes must be positive and a level must hold at least one tile.
    pub fn validate(&self) -> Result<(), String> {
        let sizes = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("level_width", self.level_width),
            ("level_height", self.level_height),
            ("tile_width", self.tile_width),
            ("tile_height", self.tile_height),
            ("dot_width", self.dot_width),
            ("dot_height", self.dot_height),
        ];
        if let Some((name, value)) = sizes.iter().find(|(_, value)| *value <= 0) {
            return Err(format!("{} must be positive, got {}", name, value));
        }
        if self.tile_width > self.level_width || self.tile_height > self.level_height {
            return Err(format!(
                "tile {}x{} does not fit in level {}x{}",
                self.tile_width, self.tile_height, self.level_width, self.level_height
            ));
        }
        Ok(())
    }

    pub fn save_json(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let s = serde_json::to_string_pretty(self)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(path, s)
    }

    pub fn screen_bounds(&self) -> Rect {
        Rect::new(0, 0, self.screen_width, self.screen_height)
    }

    pub fn level_bounds(&self) -> Rect {
        Rect::new(0, 0, self.level_width, self.level_height)
    }

    /// Partial tiles at the level edge are dropped.
    pub fn grid_layout(&self) -> GridLayout {
        GridLayout {
            tile_width: self.tile_width,
            tile_height: self.tile_height,
            tiles_per_row: (self.level_width / self.tile_width) as usize,
            rows: (self.level_height / self.tile_height) as usize,
        }
    }

    pub fn velocity_input(&self) -> VelocityInput {
        VelocityInput::new(self.dot_velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_matches_level() {
        let config = WorldConfig::default();
        let layout = config.grid_layout();
        assert_eq!(layout, GridLayout::default());
        assert_eq!(layout.total_tiles(), 192);
        assert_eq!(layout.level_bounds(), config.level_bounds());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        fs::write(&path, r#"{ "screen_width": 800, "dot_velocity": 4 }"#).unwrap();

        let config = WorldConfig::load_json(&path).unwrap();
        assert_eq!(config.screen_bounds(), Rect::new(0, 0, 800, 480));
        assert_eq!(config.velocity_input().step, 4);
        assert_eq!(config.level_width, 1280);
    }

    #[test]
    fn test_round_trip_and_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        let mut config = WorldConfig::default();
        config.tile_width = 40;
        config.save_json(&path).unwrap();
        assert_eq!(WorldConfig::load_json(&path).unwrap(), config);

        fs::write(&path, "not json").unwrap();
        let err = WorldConfig::load_json(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_non_positive_sizes_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        let bad = [
            r#"{ "tile_width": 0 }"#,
            r#"{ "tile_height": -80 }"#,
            r#"{ "level_width": -1280 }"#,
            r#"{ "tile_width": 2000 }"#,
        ];
        for json in bad {
            fs::write(&path, json).unwrap();
            let err = WorldConfig::load_json(&path).unwrap_err();
            assert_eq!(err.kind(), io::ErrorKind::InvalidData, "{}", json);
        }
        assert!(WorldConfig::default().validate().is_ok());
    }
}
