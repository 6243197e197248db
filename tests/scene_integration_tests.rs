//! Integration tests for the garden scene: layout generation, the letter
//! state machine and the firework spawn cycle working together.

use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use bloom_letter::{
    FireworkSpawner, FlowerVariant, GardenLayout, Scene, Viewport, FIREWORK_LIFETIME_MS,
    FIREWORK_SKY_FRACTION, FLOWER_COUNT, FLOWER_PADDING, GRASS_COUNT, GRASS_GROW_SPAN,
    MAX_VIEWPORT_WIDTH, SMALL_FLOWERS_PER_FLOWER, SMALL_FLOWER_JITTER, SMALL_FLOWER_OFFSET,
    STAR_COUNT,
};

fn rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

#[test]
fn test_layout_population_counts() {
    let layout = GardenLayout::generate(Viewport::new(1920.0, 1080.0), &mut rng());

    assert_eq!(layout.stars.len(), STAR_COUNT);
    assert_eq!(layout.flowers.len(), FLOWER_COUNT);
    assert_eq!(
        layout.small_flowers.len(),
        FLOWER_COUNT * SMALL_FLOWERS_PER_FLOWER
    );
    assert_eq!(layout.grass.len(), GRASS_COUNT);
}

#[test]
fn test_flowers_span_padded_width() {
    let viewport = Viewport::new(1400.0, 900.0);
    let layout = GardenLayout::generate(viewport, &mut rng());

    let first = layout.flowers.first().unwrap();
    let last = layout.flowers.last().unwrap();
    assert_eq!(first.x, FLOWER_PADDING);
    assert_eq!(last.x, viewport.width - FLOWER_PADDING);

    // Even spacing in between.
    let step = (viewport.width - 2.0 * FLOWER_PADDING) / (FLOWER_COUNT - 1) as f32;
    for pair in layout.flowers.windows(2) {
        assert!((pair[1].x - pair[0].x - step).abs() < 1e-3);
    }
}

#[test]
fn test_reference_positions_at_full_width() {
    let layout = GardenLayout::generate(Viewport::new(1920.0, 1080.0), &mut rng());

    assert_eq!(layout.flowers[0].x, 100.0);
    assert_eq!(layout.flowers[11].x, 1820.0);
    assert!((layout.flowers[5].x - 881.818).abs() < 0.01);
}

#[test]
fn test_small_flowers_flank_their_parent() {
    let layout = GardenLayout::generate(Viewport::new(1920.0, 1080.0), &mut rng());

    for (i, small) in layout.small_flowers.iter().enumerate() {
        let parent = &layout.flowers[i / SMALL_FLOWERS_PER_FLOWER];
        let offset = (small.x - parent.x).abs();
        assert!(offset >= SMALL_FLOWER_OFFSET - SMALL_FLOWER_JITTER);
        assert!(offset <= SMALL_FLOWER_OFFSET + SMALL_FLOWER_JITTER);
        assert!(small.grow_delay > parent.grow_delay);
    }
}

#[test]
fn test_grass_grow_delays_span_the_window() {
    let layout = GardenLayout::generate(Viewport::new(1920.0, 1080.0), &mut rng());

    let mut previous = -1.0;
    for blade in &layout.grass {
        assert!(blade.grow_delay >= previous);
        assert!(blade.grow_delay < GRASS_GROW_SPAN);
        previous = blade.grow_delay;
    }
    assert_eq!(layout.grass[0].grow_delay, 0.0);
}

#[test]
fn test_variants_alternate() {
    let layout = GardenLayout::generate(Viewport::new(1920.0, 1080.0), &mut rng());

    assert_eq!(layout.flowers[0].variant, FlowerVariant::Teal);
    assert_eq!(layout.flowers[1].variant, FlowerVariant::Violet);
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
fn test_viewport_width_is_clamped() {
    let viewport = Viewport::new(5000.0, 1080.0);
    assert_eq!(viewport.width, MAX_VIEWPORT_WIDTH);

    let layout = GardenLayout::generate(viewport, &mut rng());
    let last = layout.flowers.last().unwrap();
    assert_eq!(last.x, MAX_VIEWPORT_WIDTH - FLOWER_PADDING);
}

#[test]
fn test_scene_progression_order() {
    let mut scene = Scene::default();
    assert!(!scene.is_open());

    // Reveal before open is rejected.
    assert!(!scene.reveal(Instant::now()));

    let opened = Instant::now();
    assert!(scene.open(opened));
    assert!(scene.is_open());
    assert!(!scene.title_shown());

    // A second click is a no-op and must not be treated as a fresh open.
    assert!(!scene.open(Instant::now()));
    assert_eq!(scene.opened_at(), Some(opened));

    let revealed = opened + Duration::from_millis(2000);
    assert!(scene.reveal(revealed));
    assert!(scene.title_shown());
    assert_eq!(scene.revealed_at(), Some(revealed));
}

#[test]
fn test_firework_cycle_spawns_and_expires() {
    let mut spawner = FireworkSpawner::new();
    let viewport = Viewport::new(1920.0, 1080.0);
    let mut rng = rng();

    // Closed scene: the spawner reports inactive and ticks do nothing.
    let t0 = Instant::now();
    assert!(!spawner.is_active());
    spawner.advance(t0, viewport, 0.0, &mut rng);
    assert!(spawner.live().is_empty());

    spawner.set_active(true);
    assert!(spawner.is_active());

    // A 0.3 roll is below the 0.4 threshold and spawns in the upper sky.
    assert!(spawner.advance(t0, viewport, 0.3, &mut rng));
    assert_eq!(spawner.live().len(), 1);
    let firework = spawner.live()[0];
    assert!(firework.x >= 0.0 && firework.x <= viewport.width);
    assert!(firework.y >= 0.0 && firework.y <= viewport.height * FIREWORK_SKY_FRACTION);

    // A 0.4 roll does not.
    assert!(!spawner.advance(t0, viewport, 0.4, &mut rng));
    assert_eq!(spawner.live().len(), 1);

    // Past the lifetime the old burst is pruned as the next one lands.
    let t1 = t0 + Duration::from_millis(FIREWORK_LIFETIME_MS + 1);
    assert!(spawner.advance(t1, viewport, 0.0, &mut rng));
    let ids: Vec<u64> = spawner.live().iter().map(|fw| fw.id).collect();
    assert_eq!(ids, vec![1]);

    spawner.prune(t1 + Duration::from_millis(FIREWORK_LIFETIME_MS + 1));
    assert!(spawner.live().is_empty());
}

#[test]
fn test_firework_ids_survive_clear() {
    let mut spawner = FireworkSpawner::new();
    spawner.set_active(true);
    let viewport = Viewport::new(1920.0, 1080.0);
    let mut rng = rng();

    let now = Instant::now();
    spawner.advance(now, viewport, 0.0, &mut rng);
    spawner.advance(now, viewport, 0.0, &mut rng);
    spawner.clear();
    spawner.advance(now, viewport, 0.0, &mut rng);

    // The counter never resets, so ids stay unique across the session.
    assert_eq!(spawner.live()[0].id, 2);
}

#[test]
fn test_seeded_layouts_are_reproducible() {
    let viewport = Viewport::new(1920.0, 1080.0);
    let a = GardenLayout::generate(viewport, &mut StdRng::seed_from_u64(7));
    let b = GardenLayout::generate(viewport, &mut StdRng::seed_from_u64(7));

    for (left, right) in a.stars.iter().zip(&b.stars) {
        assert_eq!(left.x_pct, right.x_pct);
        assert_eq!(left.y_pct, right.y_pct);
    }
    for (left, right) in a.flowers.iter().zip(&b.flowers) {
        assert_eq!(left.x, right.x);
        assert_eq!(left.rotation_jitter, right.rotation_jitter);
    }
}
