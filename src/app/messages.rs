use iced::keyboard::{Key, Modifiers};
use std::time::Instant;

/// Messages emitted by the UI and runtime subscriptions.
#[derive(Debug, Clone)]
pub enum Message {
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
    GoToSlide(usize),
    PageInputChanged(String),
    PageInputSubmitted,
    KeyPressed {
        key: Key,
        modifiers: Modifiers,
    },
    FingerPressed {
        finger: u64,
        x: f32,
        y: f32,
    },
    FingerLifted {
        finger: u64,
        x: f32,
        y: f32,
    },
    FingerLost {
        finger: u64,
    },
    WheelScrolled {
        delta_y: f32,
    },
    IconFontLoaded(Result<(), String>),
    /// Dispatched once when initialization finishes.
    Ready,
    Tick(Instant),
}
