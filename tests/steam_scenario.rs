use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use steam::steam::{density_glyph, BLANK, LIGHT};
use steam::{ConfigError, ManualClock, Params, ParticleSystem, Steam};

/// Every uniform draw comes out as exactly 0.5.
fn half_rng() -> Box<StepRng> {
    Box::new(StepRng::new(1 << 63, 0))
}

#[test]
fn single_particle_rises_one_row() {
    let clock = ManualClock::new(10_000);
    let params = Params {
        particle_count: 1,
        ..Steam::params(5, 3, 0.0)
    };
    let mut sys =
        ParticleSystem::new(params, Steam::default(), half_rng(), Box::new(clock.clone())).unwrap();
    sys.start();

    let p = sys.particles()[0];
    assert_eq!((p.x, p.y), (2.0, 0.0));
    assert_eq!(p.lifetime, 3_500);
    assert_eq!(p.speed, 0.75);
    assert_eq!(sys.display(), "     \n     \n  ░  ");

    // 0.75 rows per 2s: 3s lifts it to 1.125 with 500ms left to live
    clock.advance(3_000);
    assert_eq!(sys.update(), 0);

    let p = sys.particles()[0];
    assert_eq!(p.lifetime, 500);
    assert!((p.y - 1.125).abs() < 1e-12);

    let out = sys.display();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines, vec!["     ", "  ░  ", "     "]);
    assert_eq!(lines[1].chars().nth(2), Some(LIGHT));
}

#[test]
fn expiry_freezes_for_a_tick_then_respawns() {
    let clock = ManualClock::new(0);
    let params = Params {
        particle_count: 1,
        ..Steam::params(5, 3, 0.0)
    };
    let mut sys =
        ParticleSystem::new(params, Steam::default(), half_rng(), Box::new(clock.clone())).unwrap();
    sys.start();

    clock.advance(3_500);
    assert_eq!(sys.update(), 1);
    let p = sys.particles()[0];
    assert_eq!((p.lifetime, p.y), (3_500, 0.0));
}

#[test]
fn even_width_fails_before_anything_exists() {
    let res = ParticleSystem::new(
        Steam::params(4, 3, 1.0),
        Steam::default(),
        Box::new(StdRng::seed_from_u64(0)),
        Box::new(ManualClock::new(0)),
    );
    assert_eq!(res.err(), Some(ConfigError::EvenWidth(4)));
}

#[test]
fn stock_steam_keeps_its_shape_over_a_long_run() {
    let clock = ManualClock::new(0);
    let mut sys = Steam::system(
        71,
        8,
        4.5,
        Box::new(StdRng::seed_from_u64(2024)),
        Box::new(clock.clone()),
    )
    .unwrap();
    sys.start();

    for _ in 0..600 {
        clock.advance(100);
        sys.update();
        for p in sys.particles() {
            assert!(p.x >= 0.0 && p.x < 71.0);
            assert!(p.y >= 0.0 && p.y < 8.0);
            assert!(p.lifetime < 7_000);
        }
        let out = sys.display();
        assert_eq!(out.lines().count(), 8);
        assert!(out.lines().all(|l| l.chars().count() == 71));
        assert!(out
            .chars()
            .all(|c| c == '\n' || c == BLANK || "░▒▓█".contains(c)));
    }
    assert_eq!(sys.density().total(), 60);
    assert_eq!(density_glyph(0), BLANK);
}
