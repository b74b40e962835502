use crate::clock::Clock;
use crate::config::Params;
use crate::density::DensityGrid;
use crate::effect::Effect;
use crate::error::ConfigError;
use crate::particle::Particle;
use rand::RngCore;

/// A fixed pool of particles driven by an [`Effect`].
///
/// Call [`start`](Self::start) once, then [`update`](Self::update) and
/// [`display`](Self::display) once per tick.
pub struct ParticleSystem<E> {
    params: Params,
    effect: E,
    particles: Vec<Particle>,
    rng: Box<dyn RngCore>,
    clock: Box<dyn Clock>,
    last_ms: i64,
}

impl<E: Effect> ParticleSystem<E> {
    pub fn new(
        params: Params,
        effect: E,
        rng: Box<dyn RngCore>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        let particles = vec![Particle::default(); params.particle_count];
        let last_ms = clock.now_ms();
        log::info!(
            "particle system: {} particles on a {}x{} grid, scale {}",
            params.particle_count,
            params.width,
            params.height,
            params.scale
        );
        Ok(Self {
            params,
            effect,
            particles,
            rng,
            clock,
            last_ms,
        })
    }

    pub fn start(&mut self) {
        for p in &mut self.particles {
            self.effect.respawn(p, &self.params, self.rng.as_mut());
        }
    }

    /// Advance by the time elapsed since the previous update (or since
    /// construction). Returns how many particles respawned. A clock that
    /// steps backwards counts as no time passing.
    pub fn update(&mut self) -> usize {
        let now = self.clock.now_ms();
        let delta = (now - self.last_ms).max(0);
        self.last_ms = now;
        self.advance(delta)
    }

    /// Advance every particle by `delta_ms` and respawn the ones that expired
    /// or left the grid.
    pub fn advance(&mut self, delta_ms: i64) -> usize {
        let (width, height) = (self.params.width, self.params.height);
        let mut respawned = 0;
        for p in &mut self.particles {
            self.effect.advance(p, delta_ms);
            if p.expired() || p.out_of_bounds(width, height) {
                self.effect.respawn(p, &self.params, self.rng.as_mut());
                respawned += 1;
            }
        }
        log::trace!("tick {delta_ms}ms, {respawned} respawned");
        respawned
    }

    pub fn density(&self) -> DensityGrid {
        let mut grid =
            DensityGrid::from_particles(&self.particles, self.params.width, self.params.height);
        if let Some(threshold) = self.effect.declump_threshold() {
            grid.declump(threshold);
        }
        grid
    }

    /// `height` lines of `width` glyphs, source row last.
    pub fn display(&self) -> String {
        self.density()
            .render(|grid, row, col| self.effect.glyph(grid, row, col))
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
