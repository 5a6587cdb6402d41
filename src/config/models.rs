use serde::Deserialize;

use super::defaults;

/// High-level app configuration; deserializable from TOML.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: ThemeMode,
    #[serde(default = "defaults::default_window_width")]
    pub window_width: f32,
    #[serde(default = "defaults::default_window_height")]
    pub window_height: f32,
    #[serde(default = "defaults::default_title_font_size")]
    pub title_font_size: u32,
    #[serde(default = "defaults::default_body_font_size")]
    pub body_font_size: u32,
    /// Optional icon font for navigation buttons; absence is tolerated.
    #[serde(default)]
    pub icon_font_path: Option<String>,
    #[serde(default = "defaults::default_log_level")]
    pub log_level: LogLevel,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default)]
    pub gestures: GestureConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            theme: ThemeMode::default(),
            window_width: defaults::default_window_width(),
            window_height: defaults::default_window_height(),
            title_font_size: defaults::default_title_font_size(),
            body_font_size: defaults::default_body_font_size(),
            icon_font_path: None,
            log_level: defaults::default_log_level(),
            animation: AnimationConfig::default(),
            gestures: GestureConfig::default(),
        }
    }
}

/// Entrance animation timing, in seconds.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AnimationConfig {
    #[serde(default = "defaults::default_animation_duration")]
    pub duration: f32,
    #[serde(default = "defaults::default_animation_stagger")]
    pub stagger: f32,
    #[serde(default = "defaults::default_animation_initial_delay")]
    pub initial_delay: f32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        AnimationConfig {
            duration: defaults::default_animation_duration(),
            stagger: defaults::default_animation_stagger(),
            initial_delay: defaults::default_animation_initial_delay(),
        }
    }
}

/// Thresholds and windows for touch and wheel navigation.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct GestureConfig {
    #[serde(default = "defaults::default_swipe_threshold")]
    pub swipe_threshold: f32,
    #[serde(default = "defaults::default_wheel_min_delta")]
    pub wheel_min_delta: f32,
    #[serde(default = "defaults::default_wheel_settle_ms")]
    pub wheel_settle_ms: u64,
    #[serde(default = "defaults::default_wheel_cooldown_ms")]
    pub wheel_cooldown_ms: u64,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            swipe_threshold: defaults::default_swipe_threshold(),
            wheel_min_delta: defaults::default_wheel_min_delta(),
            wheel_settle_ms: defaults::default_wheel_settle_ms(),
            wheel_cooldown_ms: defaults::default_wheel_cooldown_ms(),
        }
    }
}

/// Theme mode.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Day,
    Night,
}

impl Default for ThemeMode {
    fn default() -> Self {
        ThemeMode::Night
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ThemeMode::Day => "Day",
            ThemeMode::Night => "Night",
        };
        write!(f, "{}", label)
    }
}

/// Supported logging verbosity levels.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

impl LogLevel {
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}
