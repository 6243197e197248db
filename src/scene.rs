//! Top-level scene progression for the letter.

use std::time::Instant;

/// The one real state machine in the app: the letter starts closed, opens on
/// the first click, and reveals its title after a fixed delay.
///
/// A `close` transition exists so the machine stays reversible, but nothing
/// in the UI triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Closed,
    Opened { opened_at: Instant },
    Revealed { opened_at: Instant, revealed_at: Instant },
}

impl Default for Scene {
    fn default() -> Self {
        Scene::Closed
    }
}

impl Scene {
    /// Opens the letter. Returns true only on the Closed -> Opened edge, so
    /// a duplicate click never schedules a second title reveal.
    pub fn open(&mut self, now: Instant) -> bool {
        match self {
            Scene::Closed => {
                *self = Scene::Opened { opened_at: now };
                true
            }
            _ => false,
        }
    }

    /// Shows the title. Only valid once opened; a stray reveal against a
    /// closed scene is ignored.
    pub fn reveal(&mut self, now: Instant) -> bool {
        match *self {
            Scene::Opened { opened_at } => {
                *self = Scene::Revealed {
                    opened_at,
                    revealed_at: now,
                };
                true
            }
            _ => false,
        }
    }

    /// Returns the scene to Closed. No UI path calls this today.
    pub fn close(&mut self) {
        *self = Scene::Closed;
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Scene::Closed)
    }

    pub fn title_shown(&self) -> bool {
        matches!(self, Scene::Revealed { .. })
    }

    pub fn opened_at(&self) -> Option<Instant> {
        match *self {
            Scene::Closed => None,
            Scene::Opened { opened_at } | Scene::Revealed { opened_at, .. } => Some(opened_at),
        }
    }

    pub fn revealed_at(&self) -> Option<Instant> {
        match *self {
            Scene::Revealed { revealed_at, .. } => Some(revealed_at),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_exactly_once() {
        let mut scene = Scene::default();
        let now = Instant::now();
        assert!(scene.open(now));
        assert!(!scene.open(now));
        assert!(scene.is_open());
        assert!(!scene.title_shown());
    }

    #[test]
    fn reveal_requires_open() {
        let mut scene = Scene::default();
        let now = Instant::now();
        assert!(!scene.reveal(now));
        scene.open(now);
        assert!(scene.reveal(now));
        assert!(scene.title_shown());
        // Revealing twice is a no-op.
        assert!(!scene.reveal(now));
    }

    #[test]
    fn close_returns_to_start() {
        let mut scene = Scene::default();
        let now = Instant::now();
        scene.open(now);
        scene.reveal(now);
        scene.close();
        assert_eq!(scene, Scene::Closed);
        assert!(scene.opened_at().is_none());
    }

    #[test]
    fn timestamps_survive_transitions() {
        let mut scene = Scene::default();
        let t0 = Instant::now();
        scene.open(t0);
        let t1 = Instant::now();
        scene.reveal(t1);
        assert_eq!(scene.opened_at(), Some(t0));
        assert_eq!(scene.revealed_at(), Some(t1));
    }
}
