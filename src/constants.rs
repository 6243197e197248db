// Animation timing
pub const TICK_INTERVAL_MS: u64 = 16;
pub const TICK_SECONDS: f32 = 0.016;

// Scene timing
pub const TITLE_REVEAL_DELAY_MS: u64 = 2000;

// Viewport
pub const MAX_VIEWPORT_WIDTH: f32 = 1920.0;
pub const DEFAULT_VIEWPORT_WIDTH: f32 = 1920.0;
pub const DEFAULT_VIEWPORT_HEIGHT: f32 = 1080.0;

// Entity counts
pub const STAR_COUNT: usize = 50;
pub const FLOWER_COUNT: usize = 12;
pub const SMALL_FLOWERS_PER_FLOWER: usize = 2;
pub const GRASS_COUNT: usize = 400;
pub const PETAL_COUNT: usize = 8;

// Garden geometry
pub const FLOWER_PADDING: f32 = 100.0;
pub const SMALL_FLOWER_OFFSET: f32 = 70.0;
pub const SMALL_FLOWER_JITTER: f32 = 10.0;
pub const GRASS_MIN_HEIGHT: f32 = 20.0;
pub const GRASS_HEIGHT_RANGE: f32 = 60.0;
pub const STEM_HEIGHT: f32 = 220.0;
pub const SMALL_STEM_HEIGHT: f32 = 120.0;

// Growth and sway timing (seconds)
pub const FLOWER_GROW_STAGGER: f32 = 0.1;
pub const GRASS_GROW_SPAN: f32 = 1.5;
pub const SWAY_DELAY_RANGE: f32 = 2.0;
pub const PETAL_PULSE_LEAD_IN: f32 = 1.5;
pub const CENTER_POP_LEAD_IN: f32 = 2.3;

// Fireworks
pub const FIREWORK_INTERVAL_MS: u64 = 2000;
pub const FIREWORK_LIFETIME_MS: u64 = 1500;
pub const FIREWORK_SPAWN_PROBABILITY: f32 = 0.4;
pub const FIREWORK_SKY_FRACTION: f32 = 0.6;
pub const FIREWORK_PARTICLE_COUNT: usize = 8;
pub const FIREWORK_PARTICLE_REACH: f32 = 50.0;
pub const FIREWORK_RISE_SECONDS: f32 = 0.5;
pub const FIREWORK_BURST_SECONDS: f32 = 0.8;

// Spring physics defaults
pub const SPRING_STIFFNESS: f32 = 0.08;
pub const SPRING_DAMPING: f32 = 0.75;
pub const SPRING_THRESHOLD: f32 = 0.001;

// Letter card
pub const LETTER_WIDTH: f32 = 300.0;
pub const LETTER_PADDING: f32 = 40.0;
pub const LETTER_HOVER_SCALE: f32 = 0.05;
pub const LETTER_BORDER_RADIUS: f32 = 10.0;
pub const OPEN_BUTTON_BORDER_RADIUS: f32 = 20.0;
