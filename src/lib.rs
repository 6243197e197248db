//! Bloom Letter - an animated night-garden greeting card built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod fireworks;
pub mod layout;
pub mod scene;
pub mod styles;
pub mod theme;
pub mod viewport;

pub use animation::{GardenState, LetterState, SkyState, Spring};
pub use constants::*;
pub use fireworks::{Firework, FireworkSpawner};
pub use layout::{Flower, FlowerVariant, GardenLayout, GrassBlade, SmallFlower, Star};
pub use scene::Scene;
pub use styles::*;
pub use theme::{firework_palette, palette, ScenePalette};
pub use viewport::Viewport;
