use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "steam", about = "Steam rising off a cup of coffee")]
pub(crate) struct Args {
    /// grid columns (must be odd)
    #[arg(long, default_value_t = 71)]
    pub(crate) width: usize,

    /// grid rows above the cup
    #[arg(long, default_value_t = 8)]
    pub(crate) height: usize,

    /// horizontal spread of the steam
    #[arg(long, default_value_t = 4.5)]
    pub(crate) scale: f64,

    /// number of particles
    #[arg(long, default_value_t = steam::steam::PARTICLE_COUNT)]
    pub(crate) particles: usize,

    /// longest particle lifetime in ms
    #[arg(long, default_value_t = steam::steam::MAX_LIFETIME_MS)]
    pub(crate) max_life: i64,

    /// fastest particle, in rows per 2 seconds
    #[arg(long, default_value_t = steam::steam::MAX_SPEED)]
    pub(crate) max_speed: f64,

    /// ms per frame
    #[arg(long, default_value_t = 100)]
    pub(crate) tick_ms: u64,

    /// rng seed (random when omitted)
    #[arg(long)]
    pub(crate) seed: Option<u64>,

    /// quit after N frames
    #[arg(long)]
    pub(crate) frames: Option<u64>,

    /// clear cells next to a cell denser than N
    #[arg(long)]
    pub(crate) declump: Option<u32>,

    /// don't draw the cup
    #[arg(long)]
    pub(crate) no_cup: bool,

    /// print frames to stdout without taking over the terminal
    #[arg(long)]
    pub(crate) plain: bool,

    /// more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub(crate) verbose: u8,

    /// only log errors
    #[arg(short, long)]
    pub(crate) quiet: bool,
}

impl Args {
    pub(crate) fn params(&self) -> steam::Params {
        steam::Params {
            max_lifetime_ms: self.max_life,
            max_speed: self.max_speed,
            particle_count: self.particles,
            width: self.width,
            height: self.height,
            scale: self.scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_stock_steam() {
        let args = Args::parse_from(["steam"]);
        assert_eq!(args.params(), steam::Steam::params(71, 8, 4.5));
        assert_eq!(args.tick_ms, 100);
        assert!(args.seed.is_none() && args.frames.is_none());
        assert!(!args.plain && !args.no_cup);
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::parse_from([
            "steam", "--width", "31", "--height", "5", "--seed", "9", "--frames", "20",
            "--declump", "4", "--plain", "-vv",
        ]);
        assert_eq!(args.width, 31);
        assert_eq!(args.height, 5);
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.frames, Some(20));
        assert_eq!(args.declump, Some(4));
        assert!(args.plain);
        assert_eq!(args.verbose, 2);
    }
}
