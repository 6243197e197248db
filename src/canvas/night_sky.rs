use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::SkyState;
use crate::layout::Star;
use crate::theme::ScenePalette;

/// Canvas program for the night sky: a vertical gradient with twinkling
/// stars.
pub struct NightSky<'a, Message> {
    pub state: &'a SkyState,
    pub stars: &'a [Star],
    pub palette: ScenePalette,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> NightSky<'a, Message> {
    pub fn new(state: &'a SkyState, stars: &'a [Star], palette: ScenePalette) -> Self {
        Self {
            state,
            stars,
            palette,
            _marker: PhantomData,
        }
    }
}

/// Star opacity cycling 0.3 -> 0.8 -> 0.3 with a 2 s period, flat before the
/// star's own delay.
fn twinkle(elapsed: f32, delay: f32) -> f32 {
    if elapsed <= delay {
        return 0.3;
    }
    let t = (elapsed - delay) / 2.0;
    0.3 + 0.25 * (1.0 - (std::f32::consts::TAU * t).cos())
}

impl<'a, Message> canvas::Program<Message> for NightSky<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let sky = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let backdrop = Path::rectangle(Point::ORIGIN, bounds.size());
            let night = gradient::Linear::new(
                Point::new(0.0, 0.0),
                Point::new(0.0, bounds.height),
            )
            .add_stop(0.0, self.palette.sky_top)
            .add_stop(1.0, self.palette.sky_bottom);
            frame.fill(&backdrop, night);

            for star in self.stars {
                let center = Point::new(
                    star.x_pct / 100.0 * bounds.width,
                    star.y_pct / 100.0 * bounds.height,
                );
                let alpha = twinkle(self.state.elapsed, star.twinkle_delay);
                frame.fill(
                    &Path::circle(center, star.size * 0.5),
                    Color {
                        a: alpha,
                        ..self.palette.star
                    },
                );
            }
        });
        vec![sky]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twinkle_rests_at_base_opacity() {
        assert_eq!(twinkle(0.0, 1.0), 0.3);
        assert_eq!(twinkle(1.0, 1.0), 0.3);
    }

    #[test]
    fn twinkle_peaks_mid_cycle() {
        // Half the 2 s period after the delay is the brightest point.
        let peak = twinkle(2.0, 1.0);
        assert!((peak - 0.8).abs() < 1e-5);
    }
}
