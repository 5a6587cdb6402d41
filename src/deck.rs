//! Slide deck loading.
//!
//! A deck is the ordered, fixed-size slide sequence shown by the viewer. It
//! is read once at startup from a TOML file and never changes afterwards;
//! slides are not added or removed at runtime.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// An ordered, immutable-length sequence of slides.
#[derive(Debug, Clone, Deserialize)]
pub struct Deck {
    #[serde(default)]
    slides: Vec<Slide>,
}

/// One slide: a title plus the ordered elements rendered on it.
#[derive(Debug, Clone, Deserialize)]
pub struct Slide {
    pub title: String,
    #[serde(default)]
    pub elements: Vec<SlideElement>,
}

/// A single content block on a slide.
#[derive(Debug, Clone, Deserialize)]
pub struct SlideElement {
    #[serde(default)]
    pub kind: ElementKind,
    pub text: String,
    /// Whether this element takes part in the slide's entrance animation.
    #[serde(default)]
    pub animate: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    Heading,
    Body,
    Bullet,
}

impl Default for ElementKind {
    fn default() -> Self {
        ElementKind::Body
    }
}

impl Deck {
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }
}

/// Load a deck from the given path. An empty deck is not an error here; the
/// application layer decides how to degrade.
pub fn load_deck(path: &Path) -> Result<Deck> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read deck file {}", path.display()))?;
    let deck: Deck = toml::from_str(&contents)
        .with_context(|| format!("Invalid deck TOML in {}", path.display()))?;
    info!(path = %path.display(), slides = deck.len(), "Loaded deck");
    debug!(
        elements = deck.slides.iter().map(|s| s.elements.len()).sum::<usize>(),
        "Deck element count"
    );
    Ok(deck)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_slides_and_elements() {
        let deck: Deck = toml::from_str(
            r#"
            [[slides]]
            title = "One"

            [[slides.elements]]
            kind = "heading"
            text = "Hello"
            animate = true

            [[slides.elements]]
            text = "Plain body"
            "#,
        )
        .unwrap();

        assert_eq!(deck.len(), 1);
        let slide = deck.slide(0).unwrap();
        assert_eq!(slide.title, "One");
        assert_eq!(slide.elements.len(), 2);
        assert_eq!(slide.elements[0].kind, ElementKind::Heading);
        assert!(slide.elements[0].animate);
        assert_eq!(slide.elements[1].kind, ElementKind::Body);
        assert!(!slide.elements[1].animate);
    }

    #[test]
    fn empty_file_yields_empty_deck() {
        let deck: Deck = toml::from_str("").unwrap();
        assert!(deck.is_empty());
        assert!(deck.slide(0).is_none());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_deck(Path::new("/nonexistent/deck.toml")).is_err());
    }
}
