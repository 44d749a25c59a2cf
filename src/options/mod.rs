//! Centralized camera options with TOML preset support.
//!
//! Sensitivities, behavior modes, board limits, and key bindings are
//! consolidated here. Options serialize to/from TOML for presets stored in
//! `presets/`.

mod bounds;
mod camera;
mod keybindings;

use std::path::Path;

pub use bounds::BoundsOptions;
pub use camera::{
    CameraOptions, OrbitPivot, PanMode, SingleTouchAction, ZoomMode,
};
pub use keybindings::KeybindingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::BoardcamError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[bounds]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Sensitivities, modes, and projection parameters.
    pub camera: CameraOptions,
    /// Board rectangle and camera limits.
    pub bounds: BoundsOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardcamError::OptionsParse`] for malformed TOML.
    pub fn from_toml(content: &str) -> Result<Self, BoardcamError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| BoardcamError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`BoardcamError::Io`] if the file cannot be read, or
    /// [`BoardcamError::OptionsParse`] if it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, BoardcamError> {
        let content = std::fs::read_to_string(path).map_err(BoardcamError::Io)?;
        Self::from_toml(&content)
    }

    /// Load the preset `<dir>/<name>.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`Options::load`].
    pub fn load_preset(dir: &Path, name: &str) -> Result<Self, BoardcamError> {
        let opts = Self::load(&dir.join(format!("{name}.toml")))?;
        log::info!("Loaded camera preset '{name}'");
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`BoardcamError::Io`] if the file or its parent directory
    /// cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), BoardcamError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| BoardcamError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(BoardcamError::Io)?;
        }
        std::fs::write(path, content).map_err(BoardcamError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml(&toml_str).unwrap();
        assert_eq!(opts, parsed);
        assert_eq!(
            parsed.keybindings.lookup("KeyW"),
            Some(KeyAction::MoveForward)
        );
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[bounds]
min_pitch = 10.0
max_pitch = 85.0

[camera]
orbit_pivot = 'board_center'
";
        let opts = Options::from_toml(toml_str).unwrap();
        assert_eq!(opts.bounds.min_pitch, Some(10.0));
        assert_eq!(opts.bounds.max_pitch, Some(85.0));
        assert_eq!(opts.camera.orbit_pivot, OrbitPivot::BoardCenter);
        // Everything else should be default
        assert_eq!(opts.bounds.min_yaw, None);
        assert_eq!(opts.bounds.min_distance_to_board, 5.0);
        assert_eq!(opts.camera.pan_mode, PanMode::FocalPoint);
        assert_eq!(opts.keybindings, KeybindingOptions::default());
    }

    #[test]
    fn bad_toml_is_an_options_error() {
        let err = Options::from_toml("[camera]\npan_speed = 'fast'").unwrap_err();
        assert!(matches!(err, BoardcamError::OptionsParse(_)));
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyQ"),
            Some(KeyAction::RotateLeft)
        );
        assert_eq!(
            opts.keybindings.lookup("ArrowLeft"),
            Some(KeyAction::MoveLeft)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn custom_binding_is_found() {
        let mut opts = Options::default();
        opts.keybindings.bind(KeyAction::RotateRight, "KeyR");
        assert_eq!(
            opts.keybindings.lookup("KeyR"),
            Some(KeyAction::RotateRight)
        );
        assert_eq!(
            opts.keybindings.lookup("KeyE"),
            Some(KeyAction::RotateRight)
        );
    }

    #[test]
    fn save_then_load_and_list_presets() {
        let dir = std::env::temp_dir()
            .join(format!("boardcam-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.bounds.max_yaw = Some(80.0);
        opts.save(&dir.join("inspect.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["inspect".to_owned()]);
        let loaded = Options::load_preset(&dir, "inspect").unwrap();
        assert_eq!(loaded, opts);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn shipped_presets_parse() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("presets");
        let names = Options::list_presets(&dir);
        assert!(names.contains(&"board_inspect".to_owned()));
        assert!(names.contains(&"free_fly".to_owned()));
        for name in names {
            let _ = Options::load_preset(&dir, &name).unwrap();
        }
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("bounds"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("rotation_speed").is_some());
        assert!(camera.get("pan_mode").is_some());
        assert!(camera.get("znear").is_none());

        let bounds = &props["bounds"]["properties"];
        assert!(bounds.get("min_distance_to_board").is_some());
        assert!(bounds.get("board").is_none());
    }
}
