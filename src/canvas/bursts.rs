//! Canvas program for the firework overlay.
//!
//! Each live firework plays through three phases: the core dot rising from
//! the bottom edge (Entering), the radial particle burst (Steady), and a
//! fade-out (Exiting) that finishes before the spawner prunes the entry, so
//! removal never pops.

use std::marker::PhantomData;
use std::time::Instant;

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::{Easing, Phase, Timeline};
use crate::constants::{
    FIREWORK_BURST_SECONDS, FIREWORK_LIFETIME_MS, FIREWORK_PARTICLE_COUNT,
    FIREWORK_PARTICLE_REACH, FIREWORK_RISE_SECONDS,
};
use crate::fireworks::Firework;

const EXIT_SECONDS: f32 = 0.2;

pub struct Bursts<'a, Message> {
    pub cache: &'a canvas::Cache,
    pub fireworks: &'a [Firework],
    pub now: Instant,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> Bursts<'a, Message> {
    pub fn new(cache: &'a canvas::Cache, fireworks: &'a [Firework], now: Instant) -> Self {
        Self {
            cache,
            fireworks,
            now,
            _marker: PhantomData,
        }
    }

    fn draw_firework(&self, frame: &mut Frame, firework: &Firework, bounds: Rectangle) {
        let age = firework.age(self.now).as_secs_f32();
        let lifetime = FIREWORK_LIFETIME_MS as f32 / 1000.0;

        let phase = Phase::at(age, FIREWORK_RISE_SECONDS, lifetime, EXIT_SECONDS);
        let fade = match phase {
            Phase::Exiting => {
                1.0 - Timeline::new(lifetime - EXIT_SECONDS, EXIT_SECONDS, Easing::Linear)
                    .progress(age)
            }
            _ => 1.0,
        };
        if fade <= 0.0 {
            return;
        }

        // Core dot rising from the bottom edge to its target height.
        let rise = Timeline::new(0.0, FIREWORK_RISE_SECONDS, Easing::EaseOut).progress(age);
        let core_y = bounds.height + (firework.y - bounds.height) * rise;
        frame.fill(
            &Path::circle(Point::new(firework.x, core_y), 2.0),
            Color {
                a: rise * fade,
                ..Color::WHITE
            },
        );

        // Radial burst, shortly after the core arrives.
        let burst =
            Timeline::new(FIREWORK_RISE_SECONDS, FIREWORK_BURST_SECONDS, Easing::EaseOut)
                .progress(age);
        if burst > 0.0 {
            let reach = FIREWORK_PARTICLE_REACH * burst;
            let radius = 1.5 * (3.0 * burst).max(0.1);
            let alpha = (1.0 - burst) * fade;

            for i in 0..FIREWORK_PARTICLE_COUNT {
                let angle = (i as f32 * 45.0).to_radians();
                let center = Point::new(
                    firework.x + angle.cos() * reach,
                    firework.y + angle.sin() * reach,
                );
                frame.fill(
                    &Path::circle(center, radius),
                    Color {
                        a: alpha,
                        ..firework.color
                    },
                );
            }
        }
    }
}

impl<'a, Message> canvas::Program<Message> for Bursts<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let overlay = self.cache.draw(renderer, bounds.size(), |frame| {
            for firework in self.fireworks {
                self.draw_firework(frame, firework, bounds);
            }
        });
        vec![overlay]
    }
}
