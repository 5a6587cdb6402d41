//! Tween engine for slide entrance animation.
//!
//! The `Stage` owns the animated style of every slide element: an opacity and
//! a vertical offset from the element's rest position. Tweens are advanced by
//! an explicit `advance(dt)` clock so animation progress is deterministic
//! under test; the application drives it from timer ticks.

use std::collections::{HashMap, HashSet};

/// Identifies one element on one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub slide: usize,
    pub element: usize,
}

/// Animated style of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementStyle {
    pub opacity: f32,
    pub offset_y: f32,
}

impl ElementStyle {
    /// Rest style: fully visible, in place.
    pub const VISIBLE: ElementStyle = ElementStyle {
        opacity: 1.0,
        offset_y: 0.0,
    };

    /// Pre-entrance style: invisible, shifted 20 px below rest.
    pub const HIDDEN: ElementStyle = ElementStyle {
        opacity: 0.0,
        offset_y: 20.0,
    };
}

/// How to map normalized tween time into a progress parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ease {
    Linear,
    OutQuad,
    OutCubic,
}

impl Ease {
    pub fn sample(self, x: f32) -> f32 {
        let t = x.clamp(0.0, 1.0);
        match self {
            Ease::Linear => t,
            Ease::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Ease::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Parameters for one `tween_from_to` call covering a group of elements.
#[derive(Debug, Clone, Copy)]
pub struct TweenSpec {
    pub duration: f32,
    /// Per-element start delay increment within the group.
    pub stagger: f32,
    /// Delay before the first element starts.
    pub delay: f32,
    pub ease: Ease,
}

/// The animation capability the navigator needs. Modeled as a trait so the
/// transition logic is testable against a recording or no-op implementation.
pub trait Animate {
    /// Set the style of each target immediately, without animating.
    fn set_immediate(&mut self, targets: &[ElementId], style: ElementStyle);

    /// Animate each target from `from` to `to`, staggering starts per element.
    fn tween_from_to(
        &mut self,
        targets: &[ElementId],
        from: ElementStyle,
        to: ElementStyle,
        spec: TweenSpec,
    );

    /// Cancel any in-flight tweens targeting the given elements.
    fn kill_tweens_of(&mut self, targets: &[ElementId]);
}

#[derive(Debug, Clone)]
struct Tween {
    target: ElementId,
    from: ElementStyle,
    to: ElementStyle,
    start: f32,
    duration: f32,
    ease: Ease,
}

/// Concrete tween engine backing the viewer.
#[derive(Debug, Default)]
pub struct Stage {
    clock: f32,
    styles: HashMap<ElementId, ElementStyle>,
    tweens: Vec<Tween>,
    hinted: HashSet<ElementId>,
}

impl Stage {
    pub fn new() -> Self {
        Stage::default()
    }

    /// Advance the animation clock. Completed tweens snap to their end style,
    /// are dropped, and their per-element animation hints are cleared.
    pub fn advance(&mut self, dt: f32) {
        if !dt.is_finite() || dt < 0.0 {
            return;
        }
        self.clock += dt;
        let clock = self.clock;

        let mut finished: Vec<ElementId> = Vec::new();
        for tween in &mut self.tweens {
            let local = clock - tween.start;
            if local < 0.0 {
                self.styles.insert(tween.target, tween.from);
                continue;
            }
            let t = (local / tween.duration).min(1.0);
            let k = tween.ease.sample(t);
            let style = ElementStyle {
                opacity: lerp(tween.from.opacity, tween.to.opacity, k),
                offset_y: lerp(tween.from.offset_y, tween.to.offset_y, k),
            };
            self.styles.insert(tween.target, style);
            if t >= 1.0 {
                finished.push(tween.target);
            }
        }

        self.tweens.retain(|tween| clock - tween.start < tween.duration);
        for id in finished {
            if !self.tweens.iter().any(|tween| tween.target == id) {
                self.hinted.remove(&id);
            }
        }
    }

    /// Current style of an element; untouched elements are at rest.
    pub fn style_of(&self, id: ElementId) -> ElementStyle {
        self.styles.get(&id).copied().unwrap_or(ElementStyle::VISIBLE)
    }

    pub fn is_animating(&self) -> bool {
        !self.tweens.is_empty()
    }

    #[cfg(test)]
    fn is_hinted(&self, id: ElementId) -> bool {
        self.hinted.contains(&id)
    }
}

impl Animate for Stage {
    fn set_immediate(&mut self, targets: &[ElementId], style: ElementStyle) {
        for &id in targets {
            self.styles.insert(id, style);
        }
    }

    fn tween_from_to(
        &mut self,
        targets: &[ElementId],
        from: ElementStyle,
        to: ElementStyle,
        spec: TweenSpec,
    ) {
        for (ordinal, &id) in targets.iter().enumerate() {
            self.styles.insert(id, from);
            self.hinted.insert(id);
            self.tweens.push(Tween {
                target: id,
                from,
                to,
                start: self.clock + spec.delay + spec.stagger * ordinal as f32,
                duration: spec.duration.max(f32::EPSILON),
                ease: spec.ease,
            });
        }
    }

    fn kill_tweens_of(&mut self, targets: &[ElementId]) {
        self.tweens.retain(|tween| !targets.contains(&tween.target));
        for id in targets {
            self.hinted.remove(id);
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(element: usize) -> ElementId {
        ElementId { slide: 0, element }
    }

    const SPEC: TweenSpec = TweenSpec {
        duration: 0.8,
        stagger: 0.1,
        delay: 0.0,
        ease: Ease::Linear,
    };

    #[test]
    fn ease_endpoints_and_clamping() {
        for ease in [Ease::Linear, Ease::OutQuad, Ease::OutCubic] {
            assert_eq!(ease.sample(0.0), 0.0);
            assert_eq!(ease.sample(1.0), 1.0);
            assert_eq!(ease.sample(-1.0), 0.0);
            assert_eq!(ease.sample(2.0), 1.0);
        }
        // Ease-out rises faster than linear early on.
        assert!(Ease::OutCubic.sample(0.25) > 0.25);
    }

    #[test]
    fn set_immediate_applies_without_clock() {
        let mut stage = Stage::new();
        stage.set_immediate(&[id(0)], ElementStyle::HIDDEN);
        assert_eq!(stage.style_of(id(0)), ElementStyle::HIDDEN);
        assert!(!stage.is_animating());
    }

    #[test]
    fn untouched_elements_are_at_rest() {
        let stage = Stage::new();
        assert_eq!(stage.style_of(id(7)), ElementStyle::VISIBLE);
    }

    #[test]
    fn tween_interpolates_and_completes() {
        let mut stage = Stage::new();
        stage.tween_from_to(&[id(0)], ElementStyle::HIDDEN, ElementStyle::VISIBLE, SPEC);
        assert!(stage.is_animating());
        assert_eq!(stage.style_of(id(0)), ElementStyle::HIDDEN);

        stage.advance(0.4);
        let mid = stage.style_of(id(0));
        assert!((mid.opacity - 0.5).abs() < 1e-4);
        assert!((mid.offset_y - 10.0).abs() < 1e-3);

        stage.advance(0.4);
        assert_eq!(stage.style_of(id(0)), ElementStyle::VISIBLE);
        assert!(!stage.is_animating());
    }

    #[test]
    fn stagger_offsets_each_element_start() {
        let mut stage = Stage::new();
        stage.tween_from_to(
            &[id(0), id(1), id(2)],
            ElementStyle::HIDDEN,
            ElementStyle::VISIBLE,
            SPEC,
        );

        // At t = 0.1 the second element is exactly starting, the third has not.
        stage.advance(0.1);
        assert_eq!(stage.style_of(id(1)), ElementStyle::HIDDEN);
        assert_eq!(stage.style_of(id(2)), ElementStyle::HIDDEN);
        assert!(stage.style_of(id(0)).opacity > 0.0);

        // Past the last stagger plus the duration, everything is at rest.
        stage.advance(1.0);
        for element in 0..3 {
            assert_eq!(stage.style_of(id(element)), ElementStyle::VISIBLE);
        }
        assert!(!stage.is_animating());
    }

    #[test]
    fn delay_holds_the_from_style() {
        let mut stage = Stage::new();
        stage.tween_from_to(
            &[id(0)],
            ElementStyle::HIDDEN,
            ElementStyle::VISIBLE,
            TweenSpec { delay: 0.2, ..SPEC },
        );
        stage.advance(0.1);
        assert_eq!(stage.style_of(id(0)), ElementStyle::HIDDEN);
        stage.advance(0.2);
        assert!(stage.style_of(id(0)).opacity > 0.0);
    }

    #[test]
    fn kill_drops_tweens_and_hints() {
        let mut stage = Stage::new();
        stage.tween_from_to(
            &[id(0), id(1)],
            ElementStyle::HIDDEN,
            ElementStyle::VISIBLE,
            SPEC,
        );
        assert!(stage.is_hinted(id(0)));

        stage.kill_tweens_of(&[id(0)]);
        assert!(!stage.is_hinted(id(0)));
        assert!(stage.is_animating());

        stage.advance(0.2);
        // The killed element holds whatever style it last had.
        assert_eq!(stage.style_of(id(0)), ElementStyle::HIDDEN);
        assert!(stage.style_of(id(1)).opacity > 0.0);
    }

    #[test]
    fn hints_clear_on_completion() {
        let mut stage = Stage::new();
        stage.tween_from_to(&[id(0)], ElementStyle::HIDDEN, ElementStyle::VISIBLE, SPEC);
        assert!(stage.is_hinted(id(0)));
        stage.advance(1.0);
        assert!(!stage.is_hinted(id(0)));
    }

    #[test]
    fn negative_or_non_finite_dt_is_ignored() {
        let mut stage = Stage::new();
        stage.tween_from_to(&[id(0)], ElementStyle::HIDDEN, ElementStyle::VISIBLE, SPEC);
        stage.advance(-1.0);
        stage.advance(f32::NAN);
        assert_eq!(stage.style_of(id(0)), ElementStyle::HIDDEN);
    }
}
