use iced::time;
use iced::window;
use iced::{Event, Subscription, Task, event};
use iced::{keyboard, mouse, touch};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

use super::messages::Message;
use super::state::App;
use crate::gesture;
use crate::navigator::NavCommand;

/// Pixels ascribed to one wheel "line" when the platform reports line deltas.
const WHEEL_LINE_PX: f32 = 20.0;

const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Describes work that must be performed outside the pure reducer.
pub(super) enum Effect {
    Announce { index: usize, total: usize },
    EmitReady { slide_count: usize, current_slide: usize },
}

impl App {
    pub fn subscription(app: &App) -> Subscription<Message> {
        let mut subscriptions: Vec<Subscription<Message>> =
            vec![event::listen_with(runtime_event_to_message)];

        // Ticks are only needed while tweens run or a wheel settle window is
        // open; an idle presentation schedules nothing.
        if app.stage.is_animating() || app.wheel.is_pending() {
            subscriptions.push(time::every(TICK_INTERVAL).map(Message::Tick));
        }

        Subscription::batch(subscriptions)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let effects = self.reduce(message);
        if effects.is_empty() {
            Task::none()
        } else {
            Task::batch(effects.into_iter().map(|effect| self.run_effect(effect)))
        }
    }

    fn reduce(&mut self, message: Message) -> Vec<Effect> {
        let mut effects = Vec::new();

        match message {
            Message::NextSlide => self.handle_nav(NavCommand::Next, &mut effects),
            Message::PreviousSlide => self.handle_nav(NavCommand::Previous, &mut effects),
            Message::FirstSlide => self.handle_nav(NavCommand::First, &mut effects),
            Message::LastSlide => self.handle_nav(NavCommand::Last, &mut effects),
            Message::GoToSlide(index) => self.handle_nav(NavCommand::Go(index), &mut effects),
            Message::PageInputChanged(input) => self.page_input = input,
            Message::PageInputSubmitted => self.handle_page_input_submitted(&mut effects),
            Message::KeyPressed { key, modifiers: _ } => {
                if let Some(command) = gesture::command_for_key(&key) {
                    self.handle_nav(command, &mut effects);
                }
            }
            Message::FingerPressed { finger, x, y } => self.swipe.press(finger, x, y),
            Message::FingerLifted { finger, x, y } => {
                if let Some(command) = self.swipe.release(finger, x, y) {
                    self.handle_nav(command, &mut effects);
                }
            }
            Message::FingerLost { finger } => self.swipe.cancel(finger),
            Message::WheelScrolled { delta_y } => {
                self.wheel.on_scroll(delta_y, Instant::now());
            }
            Message::IconFontLoaded(result) => match result {
                Ok(()) => {
                    self.icons_loaded = true;
                    debug!("Icon font loaded");
                }
                Err(err) => warn!("Icon font failed to load: {err}"),
            },
            Message::Ready => {
                if !self.ready_emitted {
                    self.ready_emitted = true;
                    effects.push(Effect::EmitReady {
                        slide_count: self.deck.len(),
                        current_slide: self.navigator.current(),
                    });
                }
            }
            Message::Tick(now) => self.handle_tick(now, &mut effects),
        }

        effects
    }

    fn run_effect(&mut self, effect: Effect) -> Task<Message> {
        match effect {
            Effect::Announce { index, total } => {
                self.announcer.announce(index, total);
                Task::none()
            }
            Effect::EmitReady {
                slide_count,
                current_slide,
            } => {
                info!(
                    slide_count,
                    current_slide,
                    degraded = self.degraded,
                    "Presentation ready"
                );
                Task::none()
            }
        }
    }

    fn handle_nav(&mut self, command: NavCommand, effects: &mut Vec<Effect>) {
        let moved = self.navigator.apply(command, &self.deck, &mut self.stage);
        if moved {
            self.last_tick = Some(Instant::now());
            self.page_input = (self.navigator.current() + 1).to_string();
            effects.push(Effect::Announce {
                index: self.navigator.current(),
                total: self.deck.len(),
            });
            debug!(slide = self.navigator.current() + 1, "Navigated to slide");
        } else {
            debug!(?command, "Navigation request ignored");
        }
    }

    fn handle_page_input_submitted(&mut self, effects: &mut Vec<Effect>) {
        match self.page_input.trim().parse::<usize>() {
            Ok(page) if page >= 1 && page <= self.deck.len() => {
                self.handle_nav(NavCommand::Go(page - 1), effects);
            }
            _ => {
                // Reset the field to the slide actually shown.
                self.page_input = (self.navigator.current() + 1).to_string();
            }
        }
    }

    fn handle_tick(&mut self, now: Instant, effects: &mut Vec<Effect>) {
        let dt = match self.last_tick.replace(now) {
            Some(last) => now.saturating_duration_since(last).as_secs_f32(),
            None => 0.0,
        };
        self.stage.advance(dt);

        if let Some(command) = self.wheel.poll(now) {
            self.handle_nav(command, effects);
        }
    }
}

fn runtime_event_to_message(
    event: Event,
    status: event::Status,
    _window_id: window::Id,
) -> Option<Message> {
    // Events captured by a focused widget (e.g. the page input) never reach
    // the navigator, so typing is not hijacked.
    if status == event::Status::Captured {
        return None;
    }
    match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            Some(Message::KeyPressed { key, modifiers })
        }
        Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            // iced reports scrolling down as a negative y; flip so a downward
            // scroll advances, matching the wheel-forward convention.
            let delta_y = match delta {
                mouse::ScrollDelta::Lines { y, .. } => -y * WHEEL_LINE_PX,
                mouse::ScrollDelta::Pixels { y, .. } => -y,
            };
            Some(Message::WheelScrolled { delta_y })
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => Some(Message::FingerPressed {
            finger: id.0,
            x: position.x,
            y: position.y,
        }),
        Event::Touch(touch::Event::FingerLifted { id, position }) => Some(Message::FingerLifted {
            finger: id.0,
            x: position.x,
            y: position.y,
        }),
        Event::Touch(touch::Event::FingerLost { id, .. }) => {
            Some(Message::FingerLost { finger: id.0 })
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::deck::Deck;
    use iced::keyboard::key::Named;
    use iced::keyboard::{Key, Modifiers};

    fn sample_deck(slides: usize) -> Deck {
        let toml = (0..slides)
            .map(|i| {
                format!(
                    "[[slides]]\ntitle = \"Slide {i}\"\n\
                     [[slides.elements]]\ntext = \"content {i}\"\nanimate = true\n"
                )
            })
            .collect::<String>();
        toml::from_str(&toml).unwrap()
    }

    fn build_test_app(slides: usize) -> App {
        let (app, _task) = App::bootstrap(sample_deck(slides), AppConfig::default());
        app
    }

    fn press(app: &mut App, named: Named) {
        let effects = app.reduce(Message::KeyPressed {
            key: Key::Named(named),
            modifiers: Modifiers::empty(),
        });
        for effect in effects {
            let _ = app.run_effect(effect);
        }
    }

    #[test]
    fn four_right_arrows_reach_the_last_of_five_slides() {
        let mut app = build_test_app(5);
        for _ in 0..4 {
            press(&mut app, Named::ArrowRight);
        }
        assert_eq!(app.navigator.current(), 4);
        assert!(!app.navigator.can_go_next());
        assert!(app.navigator.can_go_previous());
        assert_eq!(app.announcer.latest(), Some("Slide 5 of 5"));

        // A fifth press is a boundary no-op.
        press(&mut app, Named::ArrowRight);
        assert_eq!(app.navigator.current(), 4);
    }

    #[test]
    fn counter_tracks_every_successful_navigation() {
        let mut app = build_test_app(3);
        assert_eq!(app.page_label(), "1 / 3");
        press(&mut app, Named::End);
        assert_eq!(app.page_label(), "3 / 3");
        assert_eq!(app.page_input, "3");
        press(&mut app, Named::Home);
        assert_eq!(app.page_label(), "1 / 3");
    }

    #[test]
    fn page_input_submission_navigates_or_resets() {
        let mut app = build_test_app(4);

        let _ = app.reduce(Message::PageInputChanged("3".into()));
        let effects = app.reduce(Message::PageInputSubmitted);
        for effect in effects {
            let _ = app.run_effect(effect);
        }
        assert_eq!(app.navigator.current(), 2);

        let _ = app.reduce(Message::PageInputChanged("99".into()));
        let _ = app.reduce(Message::PageInputSubmitted);
        assert_eq!(app.navigator.current(), 2);
        assert_eq!(app.page_input, "3");
    }

    #[test]
    fn swipe_messages_drive_navigation() {
        let mut app = build_test_app(3);

        let _ = app.reduce(Message::FingerPressed {
            finger: 1,
            x: 300.0,
            y: 100.0,
        });
        let effects = app.reduce(Message::FingerLifted {
            finger: 1,
            x: 220.0,
            y: 105.0,
        });
        assert!(!effects.is_empty());
        for effect in effects {
            let _ = app.run_effect(effect);
        }
        assert_eq!(app.navigator.current(), 1);

        // Below the 50 px threshold: no navigation.
        let _ = app.reduce(Message::FingerPressed {
            finger: 1,
            x: 300.0,
            y: 100.0,
        });
        let effects = app.reduce(Message::FingerLifted {
            finger: 1,
            x: 270.0,
            y: 100.0,
        });
        assert!(effects.is_empty());
        assert_eq!(app.navigator.current(), 1);
    }

    #[test]
    fn wheel_scroll_navigates_once_then_respects_cooldown() {
        let mut app = build_test_app(3);
        let start = Instant::now();

        app.wheel.on_scroll(15.0, start);
        let effects = app.reduce(Message::Tick(start + Duration::from_millis(120)));
        for effect in effects {
            let _ = app.run_effect(effect);
        }
        assert_eq!(app.navigator.current(), 1);

        // 200 ms later: inside the 800 ms cooldown, suppressed.
        app.wheel.on_scroll(15.0, start + Duration::from_millis(320));
        let _ = app.reduce(Message::Tick(start + Duration::from_millis(450)));
        assert_eq!(app.navigator.current(), 1);
    }

    #[test]
    fn single_slide_deck_hides_navigation_and_ignores_input() {
        let mut app = build_test_app(1);
        assert!(!app.nav_visible());

        press(&mut app, Named::ArrowRight);
        press(&mut app, Named::ArrowLeft);
        press(&mut app, Named::End);
        assert_eq!(app.navigator.current(), 0);
        assert!(app.navigator.is_active(0));
    }

    #[test]
    fn init_failure_forces_first_slide_visible() {
        let mut config = AppConfig::default();
        // A non-finite duration survives clamping and fails validation,
        // standing in for a broken animation setup.
        config.animation.duration = f32::NAN;

        let (app, _task) = App::bootstrap(sample_deck(3), config);
        assert!(app.degraded);
        assert_eq!(app.navigator.current(), 0);
        assert!(app.navigator.is_active(0));
        assert!(!app.stage.is_animating());
    }

    #[test]
    fn ready_notification_is_emitted_once() {
        let mut app = build_test_app(2);
        assert!(!app.ready_emitted);
        let first = app.reduce(Message::Ready);
        assert_eq!(first.len(), 1);
        assert!(app.ready_emitted);
        let second = app.reduce(Message::Ready);
        assert!(second.is_empty());
    }

    #[test]
    fn unmapped_keys_do_nothing() {
        let mut app = build_test_app(3);
        press(&mut app, Named::ArrowDown);
        assert_eq!(app.navigator.current(), 0);
    }
}
