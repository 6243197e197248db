mod spring;
mod states;
mod timeline;

pub use spring::Spring;
pub use states::{GardenState, LetterState, SkyState};
pub use timeline::{oscillate, Easing, Phase, Timeline};
