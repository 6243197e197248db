mod bursts;
mod garden;
mod night_sky;

pub use bursts::Bursts;
pub use garden::Garden;
pub use night_sky::NightSky;
