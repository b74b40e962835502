//! Rising steam as density-shaded block glyphs.
//!
//! A [`ParticleSystem`] owns a fixed pool of particles and an [`Effect`]
//! that decides how they spawn, move and look. [`Steam`] is the stock
//! effect; [`driver::run`] ticks a system at a fixed interval until stopped.

pub mod clock;
pub mod config;
pub mod density;
pub mod driver;
pub mod effect;
pub mod error;
pub mod particle;
pub mod steam;
pub mod system;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::Params;
pub use density::DensityGrid;
pub use driver::{LoopOptions, StopToken};
pub use effect::Effect;
pub use error::ConfigError;
pub use particle::Particle;
pub use steam::Steam;
pub use system::ParticleSystem;
