use crate::error::ConfigError;

/// Largest grid, in cells, a system will render.
pub const MAX_CELLS: usize = 1 << 20;

/// Parameters of one particle system.
#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub max_lifetime_ms: i64,
    pub max_speed: f64,
    pub particle_count: usize,
    /// Grid columns. Must be odd.
    pub width: usize,
    /// Grid rows. Row 0 is the source row.
    pub height: usize,
    /// Horizontal spread of spawn positions around the center column.
    pub scale: f64,
}

impl Params {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width % 2 == 0 {
            return Err(ConfigError::EvenWidth(self.width));
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        if !self
            .width
            .checked_mul(self.height)
            .is_some_and(|cells| cells <= MAX_CELLS)
        {
            return Err(ConfigError::GridTooLarge {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_lifetime_ms < 1 {
            return Err(ConfigError::NonPositiveLifetime(self.max_lifetime_ms));
        }
        if !self.max_speed.is_finite() || self.max_speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.max_speed));
        }
        if !self.scale.is_finite() || self.scale < 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        Ok(())
    }

    pub fn center(&self) -> usize {
        self.width / 2
    }
}
