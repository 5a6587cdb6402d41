//! Configuration loading for the slide viewer.
//!
//! All user-tunable settings are centralized here and loaded from
//! `conf/config.toml` if present. Any missing or invalid entries fall back to
//! sensible defaults so the viewer can still launch.

mod defaults;
mod models;

pub use models::{AnimationConfig, AppConfig, GestureConfig, LogLevel, ThemeMode};

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Load configuration from the given path, falling back to defaults on error.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match toml::from_str::<AppConfig>(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err}");
            AppConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let cfg = load_config(Path::new("/nonexistent/config.toml"));
        assert_eq!(
            cfg.animation.duration,
            AppConfig::default().animation.duration
        );
    }

    #[test]
    fn partial_config_keeps_defaults_for_missing_keys() {
        let cfg: AppConfig = toml::from_str(
            r#"
            theme = "day"
            [gestures]
            swipe_threshold = 80.0
            "#,
        )
        .unwrap();
        assert_eq!(cfg.theme, ThemeMode::Day);
        assert_eq!(cfg.gestures.swipe_threshold, 80.0);
        assert_eq!(cfg.gestures.wheel_cooldown_ms, 800);
        assert_eq!(cfg.animation.stagger, 0.1);
    }
}
