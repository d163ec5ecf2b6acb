//! Game configuration resource.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! target_fps = 120
//!
//! [level]
//! path = ./levels/level.bin
//! respawn_keeps_edits = false
//!
//! [editor]
//! start_editing = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_LEVEL_PATH: &str = "./levels/level.bin";
const DEFAULT_RESPAWN_KEEPS_EDITS: bool = false;
const DEFAULT_START_EDITING: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Level file loaded at boot, on respawn and by the editor save hotkey.
    pub level_path: PathBuf,
    /// When true, dying keeps the in-memory level instead of reloading the file.
    pub respawn_keeps_edits: bool,
    /// Start in editor mode.
    pub start_editing: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            level_path: PathBuf::from(DEFAULT_LEVEL_PATH),
            respawn_keeps_edits: DEFAULT_RESPAWN_KEEPS_EDITS,
            start_editing: DEFAULT_START_EDITING,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [level] section
        if let Some(path) = config.get("level", "path") {
            self.level_path = PathBuf::from(path);
        }
        if let Some(keep) = config.getbool("level", "respawn_keeps_edits").ok().flatten() {
            self.respawn_keeps_edits = keep;
        }

        // [editor] section
        if let Some(editing) = config.getbool("editor", "start_editing").ok().flatten() {
            self.start_editing = editing;
        }

        info!(
            "Loaded config: {}x{} window, fps={}, level={:?}, respawn_keeps_edits={}, start_editing={}",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.level_path,
            self.respawn_keeps_edits,
            self.start_editing
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [level] section
        config.set(
            "level",
            "path",
            Some(self.level_path.to_string_lossy().into_owned()),
        );
        config.set(
            "level",
            "respawn_keeps_edits",
            Some(self.respawn_keeps_edits.to_string()),
        );

        // [editor] section
        config.set("editor", "start_editing", Some(self.start_editing.to_string()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
