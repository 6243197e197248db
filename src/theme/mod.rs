mod palette;

pub use palette::{brighten, firework_palette, palette, ScenePalette};
