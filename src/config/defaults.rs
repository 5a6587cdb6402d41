use super::models::LogLevel;

pub(super) fn default_window_width() -> f32 {
    1280.0
}

pub(super) fn default_window_height() -> f32 {
    800.0
}

pub(super) fn default_title_font_size() -> u32 {
    40
}

pub(super) fn default_body_font_size() -> u32 {
    24
}

pub(super) fn default_log_level() -> LogLevel {
    LogLevel::Info
}

pub(super) fn default_animation_duration() -> f32 {
    0.8
}

pub(super) fn default_animation_stagger() -> f32 {
    0.1
}

pub(super) fn default_animation_initial_delay() -> f32 {
    0.2
}

pub(super) fn default_swipe_threshold() -> f32 {
    50.0
}

pub(super) fn default_wheel_min_delta() -> f32 {
    10.0
}

pub(super) fn default_wheel_settle_ms() -> u64 {
    100
}

pub(super) fn default_wheel_cooldown_ms() -> u64 {
    800
}
