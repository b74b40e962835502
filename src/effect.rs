use crate::config::Params;
use crate::density::DensityGrid;
use crate::particle::Particle;
use rand::RngCore;

/// The policies that make a particle system look like something.
pub trait Effect {
    /// Give `p` fresh starting state. The only place randomness enters.
    fn respawn(&self, p: &mut Particle, params: &Params, rng: &mut dyn RngCore);

    /// Move `p` forward by `delta_ms`.
    fn advance(&self, p: &mut Particle, delta_ms: i64);

    /// Character for the cell at (`row`, `col`).
    fn glyph(&self, grid: &DensityGrid, row: usize, col: usize) -> char;

    /// When set, cells whose densest neighbor exceeds this count are cleared
    /// before glyph selection.
    fn declump_threshold(&self) -> Option<u32> {
        None
    }
}
