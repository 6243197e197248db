use iced::widget::canvas;

use crate::animation::Spring;
use crate::constants::TICK_SECONDS;

/// State for the night-sky canvas. `elapsed` runs from app start and drives
/// the star twinkle; the cache is cleared every tick because the twinkle
/// never stops.
#[derive(Debug, Default)]
pub struct SkyState {
    pub elapsed: f32,
    pub cache: canvas::Cache,
}

impl SkyState {
    pub fn update(&mut self) {
        self.elapsed += TICK_SECONDS;
        self.cache.clear();
    }
}

/// State for the garden canvas. `elapsed` counts from the moment the letter
/// opened and feeds every grow/sway/pulse timeline.
#[derive(Debug, Default)]
pub struct GardenState {
    pub elapsed: f32,
    pub cache: canvas::Cache,
}

impl GardenState {
    pub fn update(&mut self) {
        self.elapsed += TICK_SECONDS;
        self.cache.clear();
    }

    /// Restarts the growth clock. Called on the Closed -> Opened edge.
    pub fn restart(&mut self) {
        self.elapsed = 0.0;
        self.cache.clear();
    }
}

/// Animation state for the letter card: a spring for the hover scale-up.
#[derive(Debug, Default)]
pub struct LetterState {
    pub hover: Spring,
}

impl LetterState {
    /// Advances the hover spring. Returns true while still animating.
    pub fn update(&mut self) -> bool {
        self.hover.update()
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hover.set_target(if hovered { 1.0 } else { 0.0 });
    }

    /// Hover progress, 0.0 at rest and 1.0 fully hovered.
    pub fn hover_progress(&self) -> f32 {
        self.hover.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garden_restart_resets_clock() {
        let mut garden = GardenState::default();
        for _ in 0..10 {
            garden.update();
        }
        assert!(garden.elapsed > 0.0);
        garden.restart();
        assert_eq!(garden.elapsed, 0.0);
    }

    #[test]
    fn hover_spring_moves_toward_target() {
        let mut letter = LetterState::default();
        letter.set_hovered(true);
        letter.update();
        assert!(letter.hover_progress() > 0.0);
        letter.set_hovered(false);
        for _ in 0..2000 {
            if !letter.update() {
                break;
            }
        }
        assert_eq!(letter.hover_progress(), 0.0);
    }
}
