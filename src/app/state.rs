use crate::anim::Stage;
use crate::announcer::Announcer;
use crate::config::AppConfig;
use crate::deck::Deck;
use crate::gesture::{SwipeTracker, WheelGate};
use crate::navigator::{EntranceTiming, Navigator};
use anyhow::{Result, bail};
use iced::Task;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use super::messages::Message;

/// Core application state: the deck, the navigator, and gesture transients.
pub struct App {
    pub(super) deck: Deck,
    pub(super) navigator: Navigator,
    pub(super) stage: Stage,
    pub(super) wheel: WheelGate,
    pub(super) swipe: SwipeTracker,
    pub(super) announcer: Announcer,
    pub(super) config: AppConfig,
    pub(super) page_input: String,
    pub(super) last_tick: Option<Instant>,
    pub(super) icons_loaded: bool,
    pub(super) ready_emitted: bool,
    /// Set when initialization failed and the recovery path engaged.
    pub(super) degraded: bool,
}

impl App {
    pub(super) fn bootstrap(deck: Deck, mut config: AppConfig) -> (App, Task<Message>) {
        clamp_config(&mut config);
        match Self::try_new(deck.clone(), config.clone()) {
            Ok(pair) => pair,
            Err(err) => {
                error!("Failed to initialize presentation: {err:?}");
                (Self::recovered(deck, config), Task::none())
            }
        }
    }

    /// Normal initialization: validate timing, activate slide 0 with its
    /// entrance animation, then surface the ready notification and kick off
    /// the optional icon font load.
    fn try_new(deck: Deck, config: AppConfig) -> Result<(App, Task<Message>)> {
        let timing = EntranceTiming::from_config(&config.animation)?;
        let mut navigator = Navigator::new(deck.len(), timing);
        let mut stage = Stage::new();

        if deck.is_empty() {
            warn!("No slides found in deck; navigation controls stay hidden");
        } else if !navigator.navigate(0, &deck, &mut stage) {
            bail!("initial slide activation was rejected");
        }

        let mut tasks = vec![Task::done(Message::Ready)];
        if let Some(path) = config.icon_font_path.clone() {
            match std::fs::read(&path) {
                Ok(bytes) => tasks.push(iced::font::load(bytes).map(|result| {
                    Message::IconFontLoaded(result.map_err(|err| format!("{err:?}")))
                })),
                Err(err) => warn!(path, "Icon font unavailable: {err}"),
            }
        }

        info!(
            slides = deck.len(),
            theme = %config.theme,
            "Initialized presentation state"
        );

        let app = App {
            page_input: String::from("1"),
            navigator,
            stage,
            wheel: wheel_gate(&config),
            swipe: SwipeTracker::new(config.gestures.swipe_threshold),
            announcer: Announcer::default(),
            deck,
            config,
            last_tick: Some(Instant::now()),
            icons_loaded: false,
            ready_emitted: false,
            degraded: false,
        };
        Ok((app, Task::batch(tasks)))
    }

    /// Recovery path: whatever went wrong during setup, force slide 0
    /// visible so the presentation is never left fully blank. Navigation
    /// stays functional with default timing.
    fn recovered(deck: Deck, config: AppConfig) -> App {
        let mut navigator = Navigator::new(deck.len(), EntranceTiming::default());
        navigator.force_first_visible();
        App {
            page_input: String::from("1"),
            navigator,
            stage: Stage::new(),
            wheel: wheel_gate(&config),
            swipe: SwipeTracker::new(config.gestures.swipe_threshold),
            announcer: Announcer::default(),
            deck,
            config,
            last_tick: None,
            icons_loaded: false,
            ready_emitted: false,
            degraded: true,
        }
    }

    /// The navigation row is hidden entirely for decks of one slide or none.
    pub(super) fn nav_visible(&self) -> bool {
        self.deck.len() > 1
    }

    pub(super) fn page_label(&self) -> String {
        format!("{} / {}", self.navigator.current() + 1, self.deck.len())
    }
}

fn wheel_gate(config: &AppConfig) -> WheelGate {
    WheelGate::new(
        Duration::from_millis(config.gestures.wheel_settle_ms),
        Duration::from_millis(config.gestures.wheel_cooldown_ms),
        config.gestures.wheel_min_delta,
    )
}

fn clamp_config(config: &mut AppConfig) {
    config.window_width = config.window_width.clamp(320.0, 7680.0);
    config.window_height = config.window_height.clamp(240.0, 4320.0);
    config.title_font_size = config.title_font_size.clamp(12, 160);
    config.body_font_size = config.body_font_size.clamp(8, 120);
    config.animation.duration = config.animation.duration.clamp(0.05, 10.0);
    config.animation.stagger = config.animation.stagger.clamp(0.0, 2.0);
    config.animation.initial_delay = config.animation.initial_delay.clamp(0.0, 5.0);
    config.gestures.swipe_threshold = config.gestures.swipe_threshold.clamp(1.0, 10_000.0);
    config.gestures.wheel_min_delta = config.gestures.wheel_min_delta.clamp(0.0, 10_000.0);
    config.gestures.wheel_settle_ms = config.gestures.wheel_settle_ms.min(10_000);
    config.gestures.wheel_cooldown_ms = config.gestures.wheel_cooldown_ms.min(60_000);
}
