/// One fleck of the effect. `y` grows as the particle rises away from the
/// source row.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Particle {
    /// Remaining time-to-live in milliseconds.
    pub lifetime: i64,
    pub speed: f64,
    pub x: f64,
    pub y: f64,
}

impl Particle {
    pub fn expired(&self) -> bool {
        self.lifetime <= 0
    }

    /// True when the particle has left a `width` x `height` grid.
    pub fn out_of_bounds(&self, width: usize, height: usize) -> bool {
        self.y >= height as f64 || self.x >= width as f64 || self.x < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_zeroed() {
        let p = Particle::default();
        assert_eq!(p.lifetime, 0);
        assert_eq!(p.speed, 0.0);
        assert_eq!((p.x, p.y), (0.0, 0.0));
        assert!(p.expired());
    }

    #[test]
    fn bounds_are_exclusive_at_the_far_edges() {
        let mut p = Particle {
            lifetime: 10,
            speed: 1.0,
            x: 4.0,
            y: 2.9,
        };
        assert!(!p.out_of_bounds(5, 3));
        p.y = 3.0;
        assert!(p.out_of_bounds(5, 3));
        p.y = 0.0;
        p.x = 5.0;
        assert!(p.out_of_bounds(5, 3));
        p.x = -0.5;
        assert!(p.out_of_bounds(5, 3));
    }
}
