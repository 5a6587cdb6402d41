//! Assistive-technology announcements.
//!
//! Mirrors a live region: created on the first announcement and reused for
//! every one after that. The view renders the latest message in a visually
//! subdued status line that screen readers pick up.

/// Announces slide changes as "Slide X of N".
#[derive(Debug, Default)]
pub struct Announcer {
    region: Option<String>,
}

impl Announcer {
    pub fn announce(&mut self, index: usize, total: usize) {
        let message = format!("Slide {} of {}", index + 1, total);
        match &mut self.region {
            Some(region) => *region = message,
            None => self.region = Some(message),
        }
    }

    pub fn latest(&self) -> Option<&str> {
        self.region.as_deref()
    }
}
