//! Interval-driven probabilistic firework spawner.
//!
//! A spawn tick fires every two seconds while the letter is open. Each tick
//! rolls a Bernoulli trial; on success a firework is synthesized at a random
//! spot in the upper sky and the live set is replaced in one step with the
//! pruned set plus the newcomer. Ages are measured against a monotonic clock
//! and identity is a monotonic counter, never a wall-clock timestamp.

use std::time::{Duration, Instant};

use iced::Color;
use rand::Rng;
use tracing::debug;

use crate::constants::{
    FIREWORK_LIFETIME_MS, FIREWORK_SKY_FRACTION, FIREWORK_SPAWN_PROBABILITY,
};
use crate::theme;
use crate::viewport::Viewport;

/// A single burst, alive for [`FIREWORK_LIFETIME_MS`] after spawning.
#[derive(Debug, Clone, Copy)]
pub struct Firework {
    pub id: u64,
    pub spawned_at: Instant,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

impl Firework {
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.spawned_at)
    }
}

/// Owns the live firework set and the spawn/prune cycle.
#[derive(Debug, Default)]
pub struct FireworkSpawner {
    live: Vec<Firework>,
    next_id: u64,
    active: bool,
}

impl FireworkSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gates spawning on the scene being open. While inactive, ticks are
    /// ignored entirely.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn live(&self) -> &[Firework] {
        &self.live
    }

    /// One spawn-interval tick: rolls the Bernoulli trial, then delegates.
    /// Returns true if a firework was added.
    pub fn tick(&mut self, now: Instant, viewport: Viewport, rng: &mut impl Rng) -> bool {
        let roll = rng.gen::<f32>();
        self.advance(now, viewport, roll, rng)
    }

    /// The tick body with the Bernoulli draw split out, so the decision can
    /// be pinned from the outside.
    pub fn advance(
        &mut self,
        now: Instant,
        viewport: Viewport,
        roll: f32,
        rng: &mut impl Rng,
    ) -> bool {
        if !self.active {
            return false;
        }

        if roll >= FIREWORK_SPAWN_PROBABILITY {
            return false;
        }

        let palette = theme::firework_palette();
        let firework = Firework {
            id: self.next_id,
            spawned_at: now,
            x: uniform(rng, viewport.width),
            y: uniform(rng, viewport.height * FIREWORK_SKY_FRACTION),
            color: palette[rng.gen_range(0..palette.len())],
        };
        self.next_id += 1;

        debug!(id = firework.id, x = firework.x, y = firework.y, "firework spawned");

        // Prune and append as one atomic replacement of the live set.
        let lifetime = Duration::from_millis(FIREWORK_LIFETIME_MS);
        let mut next: Vec<Firework> = self
            .live
            .iter()
            .copied()
            .filter(|fw| fw.age(now) < lifetime)
            .collect();
        next.push(firework);
        self.live = next;

        true
    }

    /// Drops every firework past its lifetime. Called from the animation
    /// tick so bursts disappear even when no new spawn happens.
    pub fn prune(&mut self, now: Instant) {
        let lifetime = Duration::from_millis(FIREWORK_LIFETIME_MS);
        self.live.retain(|fw| fw.age(now) < lifetime);
    }

    /// Clears all live fireworks. Used when the scene tears down.
    pub fn clear(&mut self) {
        self.live.clear();
    }
}

fn uniform(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}
