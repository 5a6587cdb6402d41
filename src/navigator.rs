//! Slide-transition state machine.
//!
//! The navigator owns the single source of truth for which slide is visible:
//! an index into the deck's fixed slide sequence. Exactly one slide is active
//! at any time; all others are hidden and non-interactive. Transitions run
//! through an injected [`Animate`] capability so the sequencing logic can be
//! tested without a real animation engine.

use crate::anim::{Animate, Ease, ElementId, ElementStyle, TweenSpec};
use crate::config::AnimationConfig;
use crate::deck::Deck;
use anyhow::{Result, ensure};

/// A navigation request, as produced by gesture interpretation or the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Previous,
    First,
    Last,
    Go(usize),
}

/// Entrance tween timing, validated once at startup.
#[derive(Debug, Clone, Copy)]
pub struct EntranceTiming {
    pub duration: f32,
    pub stagger: f32,
    /// Extra delay applied on the first activation only.
    pub initial_delay: f32,
}

impl Default for EntranceTiming {
    fn default() -> Self {
        EntranceTiming {
            duration: 0.8,
            stagger: 0.1,
            initial_delay: 0.2,
        }
    }
}

impl EntranceTiming {
    pub fn from_config(config: &AnimationConfig) -> Result<EntranceTiming> {
        ensure!(
            config.duration.is_finite() && config.duration > 0.0,
            "animation duration must be a positive number, got {}",
            config.duration
        );
        ensure!(
            config.stagger.is_finite() && config.stagger >= 0.0,
            "animation stagger must be a non-negative number, got {}",
            config.stagger
        );
        ensure!(
            config.initial_delay.is_finite() && config.initial_delay >= 0.0,
            "animation initial delay must be a non-negative number, got {}",
            config.initial_delay
        );
        Ok(EntranceTiming {
            duration: config.duration,
            stagger: config.stagger,
            initial_delay: config.initial_delay,
        })
    }
}

/// Presentation state of one slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisibility {
    pub opacity: f32,
    pub visible: bool,
    pub interactive: bool,
    /// Stacking order; the active slide sits above its neighbors.
    pub layer: u8,
}

impl SlideVisibility {
    fn active() -> Self {
        SlideVisibility {
            opacity: 1.0,
            visible: true,
            interactive: true,
            layer: 2,
        }
    }

    fn inactive() -> Self {
        SlideVisibility {
            opacity: 0.0,
            visible: false,
            interactive: false,
            layer: 1,
        }
    }
}

pub struct Navigator {
    slide_count: usize,
    current: usize,
    /// Permits the one self-transition that animates slide 0 in on load.
    first_activation: bool,
    visibility: Vec<SlideVisibility>,
    /// Per-slide memo of which elements animate; populated lazily and never
    /// invalidated since deck content is static.
    animated: Vec<Option<Vec<ElementId>>>,
    timing: EntranceTiming,
}

impl Navigator {
    pub fn new(slide_count: usize, timing: EntranceTiming) -> Self {
        Navigator {
            slide_count,
            current: 0,
            first_activation: true,
            visibility: vec![SlideVisibility::inactive(); slide_count],
            animated: vec![None; slide_count],
            timing,
        }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    pub fn visibility(&self, index: usize) -> Option<SlideVisibility> {
        self.visibility.get(index).copied()
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.visibility
            .get(index)
            .is_some_and(|v| v.visible && v.interactive)
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.slide_count
    }

    /// Apply a navigation command. Returns whether a transition occurred.
    pub fn apply(&mut self, command: NavCommand, deck: &Deck, stage: &mut dyn Animate) -> bool {
        match command {
            NavCommand::Next => self.navigate(self.current.saturating_add(1), deck, stage),
            NavCommand::Previous => match self.current.checked_sub(1) {
                Some(target) => self.navigate(target, deck, stage),
                None => false,
            },
            NavCommand::First => self.navigate(0, deck, stage),
            NavCommand::Last => match self.slide_count.checked_sub(1) {
                Some(target) => self.navigate(target, deck, stage),
                None => false,
            },
            NavCommand::Go(target) => self.navigate(target, deck, stage),
        }
    }

    /// Transition to `target`. Out-of-range and redundant requests are
    /// silently ignored; a request for the current slide is permitted only as
    /// the initial activation so slide 0 can animate in on load.
    pub fn navigate(&mut self, target: usize, deck: &Deck, stage: &mut dyn Animate) -> bool {
        if target >= self.slide_count {
            return false;
        }
        if target == self.current && !self.first_activation {
            return false;
        }

        let initial = self.first_activation;
        let old = self.current;
        self.memoize(deck, old);
        self.memoize(deck, target);

        // Kill in-flight tweens on the outgoing slide before anything else,
        // otherwise animations can leak onto a slide no longer displayed.
        let old_targets = self.animated[old].as_deref().unwrap_or_default();
        stage.kill_tweens_of(old_targets);
        stage.set_immediate(old_targets, ElementStyle::HIDDEN);

        if old != target {
            self.visibility[old] = SlideVisibility::inactive();
        }
        self.visibility[target] = SlideVisibility::active();
        self.current = target;

        let new_targets = self.animated[target].as_deref().unwrap_or_default();
        if !new_targets.is_empty() {
            stage.tween_from_to(
                new_targets,
                ElementStyle::HIDDEN,
                ElementStyle::VISIBLE,
                TweenSpec {
                    duration: self.timing.duration,
                    stagger: self.timing.stagger,
                    delay: if initial { self.timing.initial_delay } else { 0.0 },
                    ease: Ease::OutCubic,
                },
            );
        }

        self.first_activation = false;
        true
    }

    /// Recovery path: make slide 0 visible without animating, so the
    /// presentation is never left fully blank.
    pub fn force_first_visible(&mut self) {
        if self.slide_count == 0 {
            return;
        }
        for visibility in &mut self.visibility {
            *visibility = SlideVisibility::inactive();
        }
        self.visibility[0] = SlideVisibility::active();
        self.current = 0;
        self.first_activation = false;
    }

    fn memoize(&mut self, deck: &Deck, slide: usize) {
        if self.animated[slide].is_some() {
            return;
        }
        let ids = deck
            .slide(slide)
            .map(|s| {
                s.elements
                    .iter()
                    .enumerate()
                    .filter(|(_, element)| element.animate)
                    .map(|(element, _)| ElementId { slide, element })
                    .collect()
            })
            .unwrap_or_default();
        self.animated[slide] = Some(ids);
    }
}
