//! # Application Configuration
//!
//! Settings shared by every demo: window and GL context, camera behavior,
//! shader source overrides and asset locations. Every section has defaults
//! matching the classic 800x600 demo setup, and every field may be omitted
//! from a config file.

use serde::{Serialize, Deserialize};
use std::path::{Path, PathBuf};

use super::{Config, ConfigError};

/// # Window Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in screen coordinates
    pub width: u32,
    /// Window height in screen coordinates
    pub height: u32,
    /// Synchronize buffer swaps with the display refresh
    pub vsync: bool,
    /// Requested OpenGL core profile version (major, minor)
    pub gl_version: (u32, u32),
    /// Hide and capture the cursor for mouse-look
    pub capture_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Lighting Demo".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            gl_version: (4, 3),
            capture_cursor: false,
        }
    }
}

/// # Camera Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Initial vertical field of view in degrees
    pub fov_degrees: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    /// Movement speed in units per second
    pub movement_speed: f32,
    /// Degrees of rotation per pixel of mouse movement
    pub mouse_sensitivity: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 45.0,
            near: 0.1,
            far: 100.0,
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
        }
    }
}

/// # Shader Configuration
///
/// The GLSL sources are compiled into the binary. When `directory` is set,
/// a file with the same name in that directory replaces the built-in source,
/// which allows editing shaders without rebuilding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShaderConfig {
    /// Optional directory with GLSL source overrides
    pub directory: Option<String>,
}

impl ShaderConfig {
    /// Create a shader configuration reading overrides from `directory`
    pub fn with_directory(directory: impl Into<String>) -> Self {
        Self {
            directory: Some(directory.into()),
        }
    }

    /// Path of an override file, if an override directory is configured and
    /// the file exists there
    pub fn override_path(&self, file_name: &str) -> Option<PathBuf> {
        let directory = self.directory.as_ref()?;
        let path = Path::new(directory).join(file_name);
        path.exists().then_some(path)
    }
}

/// # Asset Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetConfig {
    /// Base directory that relative texture paths are resolved against
    pub textures_dir: String,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            textures_dir: "resources/textures".to_string(),
        }
    }
}

impl AssetConfig {
    /// Resolve a texture path relative to the texture directory
    ///
    /// Absolute paths are returned unchanged.
    pub fn resolve_texture(&self, path: &str) -> PathBuf {
        let candidate = Path::new(path);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            Path::new(&self.textures_dir).join(candidate)
        }
    }
}

/// # Complete Application Configuration
///
/// Top-level configuration that encompasses all engine subsystems.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationConfig {
    /// Default log filter (overridden by `RUST_LOG`)
    pub log_level: String,
    /// Window and GL context settings
    pub window: WindowConfig,
    /// Camera settings
    pub camera: CameraConfig,
    /// Shader source settings
    pub shaders: ShaderConfig,
    /// Asset locations
    pub assets: AssetConfig,
}

impl ApplicationConfig {
    /// Create a new application configuration with the given window title
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            window: WindowConfig {
                title: title.into(),
                ..WindowConfig::default()
            },
            ..Self::default()
        }
    }

    /// Load a configuration file if a path is given, otherwise use defaults
    /// with the given title
    ///
    /// A title set in the file wins; a file that leaves the title at its
    /// default gets `title`.
    pub fn load_or_default(path: Option<&str>, title: &str) -> Result<Self, ConfigError> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path);
                let mut config = Self::load_from_file(path)?;
                if config.window.title == WindowConfig::default().title {
                    config.window.title = title.to_string();
                }
                Ok(config)
            }
            None => Ok(Self::new(title)),
        }
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        if window.title.trim().is_empty() {
            return Err(ConfigError::Invalid("window title cannot be empty".to_string()));
        }
        if window.width == 0 || window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                window.width, window.height
            )));
        }
        if window.gl_version.0 < 3 || (window.gl_version.0 == 3 && window.gl_version.1 < 3) {
            return Err(ConfigError::Invalid(format!(
                "OpenGL {}.{} is below the 3.3 core profile the shaders need",
                window.gl_version.0, window.gl_version.1
            )));
        }

        let camera = &self.camera;
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::Invalid(format!(
                "field of view must be between 0 and 180 degrees, got {}",
                camera.fov_degrees
            )));
        }
        if camera.near <= 0.0 {
            return Err(ConfigError::Invalid("near plane must be positive".to_string()));
        }
        if camera.far <= camera.near {
            return Err(ConfigError::Invalid("far plane must lie beyond the near plane".to_string()));
        }
        if camera.movement_speed <= 0.0 || camera.mouse_sensitivity <= 0.0 {
            return Err(ConfigError::Invalid(
                "movement speed and mouse sensitivity must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            shaders: ShaderConfig::default(),
            assets: AssetConfig::default(),
        }
    }
}

impl Config for ApplicationConfig {}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::Builder;

    #[test]
    fn test_defaults_are_valid() {
        let config = ApplicationConfig::new("Materials");
        assert!(config.validate().is_ok());
        assert_eq!(config.window.title, "Materials");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.camera.fov_degrees, 45.0);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ApplicationConfig::default();
        config.window.width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = ApplicationConfig::default();
        config.camera.far = config.camera.near;
        assert!(config.validate().is_err());

        let mut config = ApplicationConfig::default();
        config.camera.fov_degrees = 180.0;
        assert!(config.validate().is_err());

        let mut config = ApplicationConfig::default();
        config.window.gl_version = (3, 2);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(
            &mut file,
            b"log_level = \"debug\"\n[window]\ntitle = \"Desert\"\n[camera]\nmovement_speed = 5.0\n",
        )
        .unwrap();

        let config = ApplicationConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.window.title, "Desert");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.camera.movement_speed, 5.0);
        assert_eq!(config.camera.mouse_sensitivity, 0.1);
    }

    #[test]
    fn test_load_or_default_titles() {
        let config = ApplicationConfig::load_or_default(None, "Materials").unwrap();
        assert_eq!(config.window.title, "Materials");

        let mut untitled = Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(&mut untitled, b"[camera]\nmovement_speed = 4.0\n").unwrap();
        let path = untitled.path().to_string_lossy().to_string();
        let config = ApplicationConfig::load_or_default(Some(&path), "Light Casters").unwrap();
        assert_eq!(config.window.title, "Light Casters");
        assert_eq!(config.camera.movement_speed, 4.0);

        let mut titled = Builder::new().suffix(".toml").tempfile().unwrap();
        std::io::Write::write_all(&mut titled, b"[window]\ntitle = \"Desert\"\n").unwrap();
        let path = titled.path().to_string_lossy().to_string();
        let config = ApplicationConfig::load_or_default(Some(&path), "Light Casters").unwrap();
        assert_eq!(config.window.title, "Desert");
    }

    #[test]
    fn test_save_and_load_ron() {
        let file = Builder::new().suffix(".ron").tempfile().unwrap();

        let mut config = ApplicationConfig::new("Round trip");
        config.shaders = ShaderConfig::with_directory("shaders");
        config.save_to_file(file.path()).unwrap();

        let loaded = ApplicationConfig::load_from_file(file.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_unsupported_extension() {
        let file = Builder::new().suffix(".json").tempfile().unwrap();
        let result = ApplicationConfig::load_from_file(file.path());
        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_texture_resolution() {
        let assets = AssetConfig::default();
        assert_eq!(
            assets.resolve_texture("container2.png"),
            Path::new("resources/textures").join("container2.png")
        );
    }

    #[test]
    fn test_shader_override_requires_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("lit.vert"), "#version 330 core\n").unwrap();

        let config = ShaderConfig::with_directory(dir.path().to_string_lossy());
        assert!(config.override_path("lit.vert").is_some());
        assert!(config.override_path("light_cube.frag").is_none());
        assert!(ShaderConfig::default().override_path("lit.vert").is_none());
    }
}
