//! Canvas program for the garden: grass blades, companion flowers and
//! primary flowers, all anchored at the bottom edge and driven by the
//! elapsed time since the letter opened.

use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Theme, Vector};

use crate::animation::{oscillate, Easing, GardenState, Timeline};
use crate::constants::*;
use crate::layout::{Flower, GardenLayout, GrassBlade, SmallFlower};
use crate::theme::{brighten, ScenePalette};

// Head geometry. Primary flowers use the full size, companions half of it.
const PETAL_ORBIT: f32 = 25.0;
const PETAL_RADIUS: f32 = 18.0;
const CENTER_RADIUS: f32 = 17.5;

pub struct Garden<'a, Message> {
    pub state: &'a GardenState,
    pub layout: &'a GardenLayout,
    pub palette: ScenePalette,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> Garden<'a, Message> {
    pub fn new(state: &'a GardenState, layout: &'a GardenLayout, palette: ScenePalette) -> Self {
        Self {
            state,
            layout,
            palette,
            _marker: PhantomData,
        }
    }

    fn draw_grass(&self, frame: &mut Frame, blade: &GrassBlade, ground: f32) {
        let elapsed = self.state.elapsed;
        let grow = Timeline::new(blade.grow_delay, 1.0, Easing::EaseOut).progress(elapsed);
        if grow <= 0.0 {
            return;
        }

        let angle = blade.rotation_jitter + 2.0 * oscillate(elapsed, 4.0, blade.sway_delay);

        frame.with_save(|frame| {
            frame.translate(Vector::new(blade.x, ground));
            frame.rotate(angle.to_radians());
            let tip = Point::new(0.0, -blade.height * grow);
            frame.stroke(
                &Path::line(Point::ORIGIN, tip),
                Stroke::default()
                    .with_color(Color {
                        a: 0.9,
                        ..self.palette.stem
                    })
                    .with_width(3.0),
            );
        });
    }

    /// Draws one flower head at the local origin. `scale` halves everything
    /// for companion flowers; petal pop-in and pulse timing follow the
    /// flower's grow delay.
    #[allow(clippy::too_many_arguments)]
    fn draw_head(
        &self,
        frame: &mut Frame,
        grow_delay: f32,
        scale: f32,
        petal_color: Color,
        center_color: Color,
        pulse_period: f32,
        center_pulse_period: f32,
        center_pop: Timeline,
    ) {
        let elapsed = self.state.elapsed;

        for i in 0..PETAL_COUNT {
            let lead_in = PETAL_PULSE_LEAD_IN + grow_delay + 0.1 * i as f32;
            let pop = Timeline::new(lead_in, 0.3, Easing::EaseOut).progress(elapsed);
            if pop <= 0.0 {
                continue;
            }

            let wave = oscillate(elapsed, pulse_period, lead_in).max(0.0);
            let radius = PETAL_RADIUS * scale * pop * (1.0 + 0.05 * wave);
            let angle = (i as f32 * 45.0).to_radians();
            let center = Point::new(
                angle.cos() * PETAL_ORBIT * scale,
                angle.sin() * PETAL_ORBIT * scale,
            );
            frame.fill(
                &Path::circle(center, radius),
                brighten(petal_color, 0.2 * wave),
            );
        }

        let pop = center_pop.progress(elapsed);
        if pop > 0.0 {
            let wave = oscillate(elapsed, center_pulse_period, center_pop.delay).max(0.0);
            frame.fill(
                &Path::circle(Point::ORIGIN, CENTER_RADIUS * scale * pop),
                brighten(center_color, 0.3 * wave),
            );
        }
    }

    fn draw_small_flower(&self, frame: &mut Frame, flower: &SmallFlower, ground: f32) {
        let elapsed = self.state.elapsed;
        let grow = Timeline::new(flower.grow_delay, 1.5, Easing::EaseOut).progress(elapsed);
        if grow <= 0.0 {
            return;
        }

        let stem_height =
            SMALL_STEM_HEIGHT * Timeline::new(flower.grow_delay, 1.0, Easing::EaseOut).progress(elapsed);
        let angle = flower.rotation_jitter + 3.0 * oscillate(elapsed, 5.0, flower.sway_delay);

        frame.with_save(|frame| {
            frame.translate(Vector::new(flower.x, ground));
            frame.rotate(angle.to_radians());

            frame.stroke(
                &Path::line(Point::ORIGIN, Point::new(0.0, -stem_height)),
                Stroke::default()
                    .with_color(self.palette.stem)
                    .with_width(3.0),
            );

            frame.with_save(|frame| {
                frame.translate(Vector::new(0.0, -stem_height));
                self.draw_head(
                    frame,
                    flower.grow_delay,
                    0.5 * grow,
                    self.palette.small_petal(flower.variant),
                    self.palette.small_center(flower.variant),
                    3.0,
                    2.0,
                    Timeline::new(CENTER_POP_LEAD_IN + flower.grow_delay, 0.3, Easing::EaseOut),
                );
            });
        });
    }

    fn draw_flower(&self, frame: &mut Frame, flower: &Flower, ground: f32) {
        let elapsed = self.state.elapsed;
        let grow = Timeline::new(flower.grow_delay, 2.0, Easing::EaseOut).progress(elapsed);
        if grow <= 0.0 {
            return;
        }

        let stem_height =
            STEM_HEIGHT * Timeline::new(flower.grow_delay, 1.2, Easing::EaseOut).progress(elapsed);
        let angle = flower.rotation_jitter + 3.0 * oscillate(elapsed, 6.0, flower.sway_delay);

        frame.with_save(|frame| {
            frame.translate(Vector::new(flower.x, ground));
            frame.rotate(angle.to_radians());

            frame.stroke(
                &Path::line(Point::ORIGIN, Point::new(0.0, -stem_height)),
                Stroke::default()
                    .with_color(self.palette.stem)
                    .with_width(6.0),
            );

            // A pair of leaves partway up the stem.
            if stem_height > STEM_HEIGHT * 0.4 {
                let leaf_y = -stem_height * 0.45;
                for side in [-1.0, 1.0] {
                    frame.fill(
                        &Path::circle(Point::new(side * 12.0, leaf_y), 8.0),
                        Color {
                            a: 0.9,
                            ..self.palette.stem
                        },
                    );
                }
            }

            frame.with_save(|frame| {
                frame.translate(Vector::new(0.0, -stem_height));
                self.draw_head(
                    frame,
                    flower.grow_delay,
                    grow,
                    self.palette.petal(flower.variant),
                    self.palette.center(flower.variant),
                    4.0,
                    3.0,
                    Timeline::new(CENTER_POP_LEAD_IN + flower.grow_delay, 0.4, Easing::EaseOut),
                );
            });
        });
    }
}

impl<'a, Message> canvas::Program<Message> for Garden<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let garden = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let ground = bounds.height;

            // Grass behind companion flowers behind primary flowers.
            for blade in &self.layout.grass {
                self.draw_grass(frame, blade, ground);
            }
            for flower in &self.layout.small_flowers {
                self.draw_small_flower(frame, flower, ground);
            }
            for flower in &self.layout.flowers {
                self.draw_flower(frame, flower, ground);
            }
        });
        vec![garden]
    }
}
