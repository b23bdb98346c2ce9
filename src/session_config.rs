use log::{debug, error, info, warn};
use std::fs;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Position, extents and height of the cube, in render-surface pixels
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CubePose {
    pub x: f32,
    pub y: f32,
    pub wx: f32,
    pub wy: f32,
    pub h: f32,
}

impl CubePose {
    pub fn new(x: f32, y: f32, wx: f32, wy: f32, h: f32) -> Self {
        CubePose { x, y, wx, wy, h }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct HandStyle {
    pub landmark_colour: String,
    pub landmark_radius: f32,
    pub landmark_line_width: f32,
    pub connector_colour: String,
    pub connector_line_width: f32,
}

impl Default for HandStyle {
    fn default() -> Self {
        HandStyle {
            landmark_colour: String::from("#0cf5a3"),
            landmark_radius: 5.,
            landmark_line_width: 1.,
            connector_colour: String::from("#008f9e"),
            connector_line_width: 5.,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(default)]
pub struct SessionConfig {
    /// Render surface size (pixels), used when a frame does not carry its own
    pub surface_width: f32,
    pub surface_height: f32,

    /// Whether the renderer should flip the surface horizontally ("selfie" view)
    pub mirror_horizontal: bool,

    // -------- CUBE SETTINGS
    /// Pose of the cube when a session starts
    pub start_pose: CubePose,

    /// Pose restored by the "reset" command
    pub reset_pose: CubePose,

    pub cube_colour: String,
    pub cube_stroke_colour: String,

    // -------- HIT REGION OUTLINE
    /// Outline colour while nobody is grabbing the cube
    pub idle_highlight_colour: String,

    /// Outline colour while the cube is grabbed
    pub grab_highlight_colour: String,

    pub highlight_line_width: f32,

    // -------- HAND OVERLAY
    /// Draw the detected hand skeletons on top of the video
    pub draw_hands: bool,
    pub hand_style: HandStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            surface_width: 1280.,
            surface_height: 720.,
            mirror_horizontal: true,
            start_pose: CubePose::new(300., 300., 50., 50., 50.),
            reset_pose: CubePose::new(320., 280., 50., 50., 50.),
            cube_colour: String::from("#ff8200"),
            cube_stroke_colour: String::from("#ff6000"),
            idle_highlight_colour: String::from("#6100cf"),
            grab_highlight_colour: String::from("#22ed07"),
            highlight_line_width: 5.,
            draw_hands: true,
            hand_style: HandStyle::default(),
        }
    }
}

impl SessionConfig {
    pub fn write_config_to_file(&self, config_file_path: &str) -> Result<()> {
        debug!("Current state of config: {:?}", self);
        let text = serde_json::to_string_pretty(self)?;
        match fs::write(config_file_path, text) {
            Ok(()) => {
                info!("Wrote config to file: {:?}", config_file_path);
                Ok(())
            }
            Err(e) => {
                error!("Error writing config to file: {:?}", e);
                Err(anyhow!("failed to write config to {}: {}", config_file_path, e))
            }
        }
    }
}

pub fn load_config_from_file(config_file_path: &str) -> Result<SessionConfig> {
    match fs::read_to_string(config_file_path) {
        Err(e) => {
            if e.kind() == std::io::ErrorKind::NotFound {
                warn!(
                    "Session config file not found at {}, using defaults",
                    &config_file_path
                );
                Ok(SessionConfig::default())
            } else {
                Err(e).with_context(|| format!("Failed to load config from {}", config_file_path))
            }
        }
        Ok(s) => {
            info!("Loaded session config OK from \"{}\"", config_file_path);
            match serde_json::from_str::<SessionConfig>(&s) {
                Ok(loaded_config) => {
                    debug!("Config parsed data from file: {:?}", &loaded_config);
                    Ok(loaded_config)
                }
                Err(e) => Err(anyhow!("Failed to parse config data: {}", e)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: SessionConfig =
            serde_json::from_str(r##"{"surfaceWidth": 640, "cubeColour": "#123456"}"##).unwrap();
        assert_eq!(config.surface_width, 640.);
        assert_eq!(config.surface_height, 720.);
        assert_eq!(config.cube_colour, "#123456");
        assert_eq!(config.reset_pose, CubePose::new(320., 280., 50., 50., 50.));
        assert!(config.draw_hands);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("hand-cube-grab-does-not-exist.json");
        let config = load_config_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_write_then_load() {
        let path = std::env::temp_dir().join(format!(
            "hand-cube-grab-config-{}.json",
            std::process::id()
        ));
        let path = path.to_str().unwrap();
        let config = SessionConfig {
            mirror_horizontal: false,
            ..Default::default()
        };
        config.write_config_to_file(path).unwrap();
        let loaded = load_config_from_file(path).unwrap();
        assert_eq!(loaded, config);
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_garbage_file_is_an_error() {
        let path = std::env::temp_dir().join(format!(
            "hand-cube-grab-garbage-{}.json",
            std::process::id()
        ));
        let path = path.to_str().unwrap();
        fs::write(path, "not json").unwrap();
        assert!(load_config_from_file(path).is_err());
        let _ = fs::remove_file(path);
    }
}
