use crate::clock::Clock;
use crate::config::Params;
use crate::density::DensityGrid;
use crate::effect::Effect;
use crate::error::ConfigError;
use crate::particle::Particle;
use crate::system::ParticleSystem;
use rand::{Rng, RngCore};
use rand_distr::{Distribution, StandardNormal};

pub const MAX_LIFETIME_MS: i64 = 7000;
pub const MAX_SPEED: f64 = 1.5;
pub const PARTICLE_COUNT: usize = 60;

/// Speed is measured in cells per this many milliseconds.
const SPEED_PERIOD_MS: f64 = 2000.0;

pub const BLANK: char = ' ';
pub const LIGHT: char = '░';
pub const MEDIUM: char = '▒';
pub const DARK: char = '▓';
pub const SOLID: char = '█';

/// Steam rising off a cup: particles leave the source row at a fixed column,
/// bunched around the center, and climb straight up.
#[derive(Clone, Copy, Debug, Default)]
pub struct Steam {
    pub declump: Option<u32>,
}

impl Steam {
    pub fn params(width: usize, height: usize, scale: f64) -> Params {
        Params {
            max_lifetime_ms: MAX_LIFETIME_MS,
            max_speed: MAX_SPEED,
            particle_count: PARTICLE_COUNT,
            width,
            height,
            scale,
        }
    }

    /// A steam system with the stock lifetime, speed and particle count.
    pub fn system(
        width: usize,
        height: usize,
        scale: f64,
        rng: Box<dyn RngCore>,
        clock: Box<dyn Clock>,
    ) -> Result<ParticleSystem<Steam>, ConfigError> {
        ParticleSystem::new(Self::params(width, height, scale), Steam::default(), rng, clock)
    }
}

impl Effect for Steam {
    fn respawn(&self, p: &mut Particle, params: &Params, rng: &mut dyn RngCore) {
        p.lifetime = (params.max_lifetime_ms as f64 * rng.gen::<f64>()).floor() as i64;
        p.speed = params.max_speed * rng.gen::<f64>();

        let center = params.center() as f64;
        let z: f64 = StandardNormal.sample(rng);
        let offset = (z * params.scale).clamp(-center, center);
        p.x = center + offset;
        p.y = 0.0;
    }

    fn advance(&self, p: &mut Particle, delta_ms: i64) {
        p.lifetime -= delta_ms;
        if p.lifetime <= 0 {
            return;
        }
        p.y += p.speed * (delta_ms as f64 / SPEED_PERIOD_MS);
    }

    fn glyph(&self, grid: &DensityGrid, row: usize, col: usize) -> char {
        density_glyph(grid.count(row, col))
    }

    fn declump_threshold(&self) -> Option<u32> {
        self.declump
    }
}

pub fn density_glyph(count: u32) -> char {
    match count {
        0 => BLANK,
        1..=3 => LIGHT,
        4..=5 => MEDIUM,
        6..=8 => DARK,
        _ => SOLID,
    }
}
