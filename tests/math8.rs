mod tests {
    use embassy_time::Instant;
    use ring_light_composer::math8::{
        beat8, beatsin8, beatsin16, blend8, ease_in_out_quad, noise8, scale8, sin8, sin16,
    };
    use ring_light_composer::random::Random8;

    #[test]
    fn test_scale8() {
        assert_eq!(scale8(255, 128), 128);
        assert_eq!(scale8(0, 128), 0);
        assert_eq!(scale8(128, 128), 64);
        assert_eq!(scale8(128, 255), 128);
        assert_eq!(scale8(128, 0), 0);
    }

    #[test]
    fn test_blend8() {
        assert_eq!(blend8(255, 128, 128), 191);
        assert_eq!(blend8(0, 128, 255), 128);
        assert_eq!(blend8(255, 0, 128), 127);
        assert_eq!(blend8(255, 128, 0), 255);
    }

    #[test]
    fn test_ease_in_out_quad_endpoints() {
        assert_eq!(ease_in_out_quad(0), 0);
        assert_eq!(ease_in_out_quad(255), 255);
        assert!(ease_in_out_quad(64) < 64);
        assert!(ease_in_out_quad(192) > 192);
    }

    #[test]
    fn test_sin8() {
        assert_eq!(sin8(0), 128);
        assert_eq!(sin8(64), 255);
        assert_eq!(sin8(128), 128);
        assert_eq!(sin8(192), 1);
    }

    #[test]
    fn test_sin16() {
        assert_eq!(sin16(0), 0);
        assert_eq!(sin16(16384), 32767);
        assert_eq!(sin16(49152), -32767);
    }

    #[test]
    fn test_beat8_starts_at_zero() {
        assert_eq!(beat8(60, Instant::from_millis(0)), 0);
        assert!(beat8(60, Instant::from_millis(500)) > 100);
    }

    #[test]
    fn test_beatsin_stays_in_range() {
        for ms in (0..20_000).step_by(7) {
            let now = Instant::from_millis(ms);
            let position = beatsin8(10, 0, 47, now, 0);
            assert!(position <= 47, "beatsin8 out of range at {ms}ms");

            let low = beatsin8(30, 220, 255, now, 0);
            assert!(low >= 220);

            for dot in 0..4u16 {
                let position = beatsin16(7 + dot, 0, 47, now, dot * 1000);
                assert!(position <= 47, "beatsin16 out of range at {ms}ms");
            }
        }
    }

    #[test]
    fn test_noise8_is_smooth() {
        let mut previous = noise8(0);
        for x in 1..=u16::MAX {
            let value = noise8(x);
            assert!(
                previous.abs_diff(value) <= 8,
                "noise jumps at {x}: {previous} -> {value}"
            );
            previous = value;
        }
    }

    #[test]
    fn test_random_is_deterministic() {
        let mut a = Random8::new(42);
        let mut b = Random8::new(42);
        for _ in 0..100 {
            assert_eq!(a.random8(), b.random8());
        }
    }

    #[test]
    fn test_random_ranges() {
        let mut rng = Random8::default();
        for _ in 0..1000 {
            assert!(rng.below(96) < 96);
            let height = rng.between(1, 17);
            assert!((1..17).contains(&height));
        }
        assert_eq!(rng.below(0), 0);
        assert_eq!(rng.between(5, 5), 5);
    }
}
