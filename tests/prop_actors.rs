use delve::player::MAX_PITCH;
use delve::{FrameClock, Player, PlayerConfig};
use delve_geom::Vec3;
use proptest::prelude::*;

proptest! {
    #[test]
    fn look_stays_unit_and_pitch_clamped(moves in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 1..40)) {
        let mut player = Player::new(Vec3::ZERO, PlayerConfig::default());
        for (dx, dy) in moves {
            player.apply_mouse(dx, dy);
            prop_assert!(player.pitch.abs() <= MAX_PITCH);
            prop_assert!((player.look_dir().length() - 1.0).abs() < 1e-4);
            let f = player.forward();
            let r = player.right();
            prop_assert!(f.dot(r).abs() < 1e-5);
            prop_assert_eq!(f.y, 0.0);
        }
    }

    #[test]
    fn clock_only_passes_sane_steps(raw in prop::collection::vec(prop::num::f32::ANY, 1..64)) {
        let mut clock = FrameClock::new(0.1);
        for dt in raw {
            if let Some(step) = clock.accept(dt, true) {
                prop_assert!(step.is_finite());
                prop_assert!((0.0..=0.1).contains(&step));
            }
        }
        prop_assert!(clock.total().is_finite());
    }
}
