//! Procedural layout for the night garden.
//!
//! Spacing is deterministic arithmetic over the viewport; everything else
//! (rotation jitter, sway/grow delay offsets) comes from the injected RNG so
//! callers can seed it for reproducible layouts.

use rand::Rng;

use crate::constants::*;
use crate::viewport::Viewport;

/// A twinkling background star, positioned in percent of the sky.
#[derive(Debug, Clone, Copy)]
pub struct Star {
    pub x_pct: f32,
    pub y_pct: f32,
    pub size: f32,
    pub twinkle_delay: f32,
}

/// Which of the two color schemes a flower uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowerVariant {
    Teal,
    Violet,
}

/// A primary flower, anchored at the ground line.
#[derive(Debug, Clone, Copy)]
pub struct Flower {
    pub id: usize,
    pub x: f32,
    pub rotation_jitter: f32,
    pub sway_delay: f32,
    pub grow_delay: f32,
    pub variant: FlowerVariant,
}

/// A companion flower flanking a primary flower.
#[derive(Debug, Clone, Copy)]
pub struct SmallFlower {
    pub id: usize,
    pub x: f32,
    pub rotation_jitter: f32,
    pub sway_delay: f32,
    pub grow_delay: f32,
    pub variant: FlowerVariant,
}

/// A single grass blade.
#[derive(Debug, Clone, Copy)]
pub struct GrassBlade {
    pub x: f32,
    pub height: f32,
    pub rotation_jitter: f32,
    pub grow_delay: f32,
    pub sway_delay: f32,
}

/// Every generated entity of the garden scene.
#[derive(Debug, Clone, Default)]
pub struct GardenLayout {
    pub stars: Vec<Star>,
    pub flowers: Vec<Flower>,
    pub small_flowers: Vec<SmallFlower>,
    pub grass: Vec<GrassBlade>,
}

/// Uniform draw over `[0, max)` that tolerates a degenerate range.
fn uniform(rng: &mut impl Rng, max: f32) -> f32 {
    if max > 0.0 {
        rng.gen_range(0.0..max)
    } else {
        0.0
    }
}

impl GardenLayout {
    /// Generates the full layout for a viewport.
    ///
    /// Primary flowers are generated before small flowers: a small flower's
    /// x is derived from its parent's resolved x, so the ordering matters.
    pub fn generate(viewport: Viewport, rng: &mut impl Rng) -> Self {
        let stars = Self::generate_stars(rng);
        let flowers = Self::generate_flowers(viewport, rng);
        let small_flowers = Self::generate_small_flowers(&flowers, rng);
        let grass = Self::generate_grass(viewport, rng);

        Self {
            stars,
            flowers,
            small_flowers,
            grass,
        }
    }

    fn generate_stars(rng: &mut impl Rng) -> Vec<Star> {
        (0..STAR_COUNT)
            .map(|_| Star {
                x_pct: rng.gen_range(0.0..100.0),
                y_pct: rng.gen_range(0.0..100.0),
                size: 1.0 + rng.gen_range(0.0..2.0),
                twinkle_delay: rng.gen_range(0.0..SWAY_DELAY_RANGE),
            })
            .collect()
    }

    fn generate_flowers(viewport: Viewport, rng: &mut impl Rng) -> Vec<Flower> {
        // A viewport narrower than twice the padding degenerates to every
        // flower sitting at the padding edge.
        let usable = (viewport.width - FLOWER_PADDING * 2.0).max(0.0);
        let last = (FLOWER_COUNT - 1) as f32;

        (0..FLOWER_COUNT)
            .map(|i| Flower {
                id: i,
                x: FLOWER_PADDING + usable * (i as f32 / last),
                rotation_jitter: rng.gen_range(-5.0..5.0),
                sway_delay: rng.gen_range(0.0..SWAY_DELAY_RANGE),
                grow_delay: i as f32 * FLOWER_GROW_STAGGER,
                variant: if i % 2 == 0 {
                    FlowerVariant::Teal
                } else {
                    FlowerVariant::Violet
                },
            })
            .collect()
    }

    fn generate_small_flowers(flowers: &[Flower], rng: &mut impl Rng) -> Vec<SmallFlower> {
        (0..FLOWER_COUNT * SMALL_FLOWERS_PER_FLOWER)
            .map(|i| {
                let parent = &flowers[(i / SMALL_FLOWERS_PER_FLOWER) % flowers.len()];
                let offset = if i % 2 == 0 {
                    -SMALL_FLOWER_OFFSET
                } else {
                    SMALL_FLOWER_OFFSET
                };

                SmallFlower {
                    id: i,
                    x: parent.x
                        + offset
                        + rng.gen_range(-SMALL_FLOWER_JITTER..SMALL_FLOWER_JITTER),
                    rotation_jitter: rng.gen_range(-5.0..5.0),
                    sway_delay: rng.gen_range(0.0..SWAY_DELAY_RANGE),
                    grow_delay: parent.grow_delay + 0.2 + rng.gen_range(0.0..0.3),
                    variant: if rng.gen_bool(0.5) {
                        FlowerVariant::Violet
                    } else {
                        FlowerVariant::Teal
                    },
                }
            })
            .collect()
    }

    fn generate_grass(viewport: Viewport, rng: &mut impl Rng) -> Vec<GrassBlade> {
        (0..GRASS_COUNT)
            .map(|i| GrassBlade {
                x: uniform(rng, viewport.width),
                height: GRASS_MIN_HEIGHT + rng.gen_range(0.0..GRASS_HEIGHT_RANGE),
                rotation_jitter: rng.gen_range(-10.0..10.0),
                grow_delay: (i as f32 / GRASS_COUNT as f32) * GRASS_GROW_SPAN,
                sway_delay: rng.gen_range(0.0..SWAY_DELAY_RANGE),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn counts_are_fixed() {
        let layout = GardenLayout::generate(Viewport::default(), &mut rng());
        assert_eq!(layout.stars.len(), STAR_COUNT);
        assert_eq!(layout.flowers.len(), FLOWER_COUNT);
        assert_eq!(
            layout.small_flowers.len(),
            FLOWER_COUNT * SMALL_FLOWERS_PER_FLOWER
        );
        assert_eq!(layout.grass.len(), GRASS_COUNT);
    }

    #[test]
    fn zero_width_viewport_collapses_flowers_to_padding() {
        let layout = GardenLayout::generate(Viewport::new(0.0, 1080.0), &mut rng());
        for flower in &layout.flowers {
            assert_eq!(flower.x, FLOWER_PADDING);
        }
        for blade in &layout.grass {
            assert_eq!(blade.x, 0.0);
        }
    }

    #[test]
    fn variants_alternate_by_parity() {
        let layout = GardenLayout::generate(Viewport::default(), &mut rng());
        for flower in &layout.flowers {
            let expected = if flower.id % 2 == 0 {
                FlowerVariant::Teal
            } else {
                FlowerVariant::Violet
            };
            assert_eq!(flower.variant, expected);
        }
    }

    #[test]
    fn grow_delays_stagger_by_index() {
        let layout = GardenLayout::generate(Viewport::default(), &mut rng());
        for flower in &layout.flowers {
            assert!((flower.grow_delay - flower.id as f32 * FLOWER_GROW_STAGGER).abs() < 1e-6);
        }
    }

    #[test]
    fn grass_heights_stay_in_range() {
        let layout = GardenLayout::generate(Viewport::default(), &mut rng());
        for blade in &layout.grass {
            assert!(blade.height >= GRASS_MIN_HEIGHT);
            assert!(blade.height <= GRASS_MIN_HEIGHT + GRASS_HEIGHT_RANGE);
        }
    }
}
