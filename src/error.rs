use thiserror::Error;

/// Rejected particle system parameters. Raised before any particle exists.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The grid needs a true center column.
    #[error("width must be an odd number, got {0}")]
    EvenWidth(usize),

    #[error("height must be at least 1")]
    ZeroHeight,

    #[error("a {width}x{height} grid is too large")]
    GridTooLarge { width: usize, height: usize },

    #[error("max lifetime must be at least 1ms, got {0}")]
    NonPositiveLifetime(i64),

    #[error("max speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f64),

    #[error("scale must be finite and non-negative, got {0}")]
    InvalidScale(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            ConfigError::EvenWidth(70).to_string(),
            "width must be an odd number, got 70"
        );
        assert_eq!(
            ConfigError::InvalidScale(-1.5).to_string(),
            "scale must be finite and non-negative, got -1.5"
        );
    }
}
