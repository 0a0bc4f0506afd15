mod tests {
    use ring_light_composer::color::{
        BLACK, BLUE, RED, Rgb, WHITE, add_colors, blend_colors, exact_rainbow_hue,
        fade_to_black_by, fill_exact_rainbow, hsv,
    };
    use ring_light_composer::gamma::gamma8;

    #[test]
    fn test_blend_colors() {
        assert_eq!(blend_colors(RED, BLUE, 0), RED);
        assert_eq!(blend_colors(RED, BLUE, 255), BLUE);
        assert_eq!(
            blend_colors(RED, BLUE, 128),
            Rgb {
                r: 127,
                g: 0,
                b: 128
            }
        );
        assert_eq!(blend_colors(WHITE, BLACK, 255), BLACK);
    }

    #[test]
    fn test_add_colors_saturates() {
        let grey = Rgb {
            r: 200,
            g: 100,
            b: 0,
        };
        assert_eq!(
            add_colors(grey, grey),
            Rgb {
                r: 255,
                g: 200,
                b: 0
            }
        );
    }

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [WHITE; 4];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds, [WHITE; 4]);

        fade_to_black_by(&mut leds, 128);
        assert!(leds.iter().all(|led| led.r < 255 && led.r > 0));

        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK; 4]);
    }

    #[test]
    fn test_exact_rainbow_hue_for_48_pixels() {
        // floor(256 * i / 48)
        assert_eq!(exact_rainbow_hue(0, 0, 48), 0);
        assert_eq!(exact_rainbow_hue(0, 1, 48), 5);
        assert_eq!(exact_rainbow_hue(0, 3, 48), 16);
        assert_eq!(exact_rainbow_hue(0, 47, 48), 250);
        assert_eq!(exact_rainbow_hue(10, 47, 48), 4);
    }

    #[test]
    fn test_fill_exact_rainbow_matches_closed_form() {
        for len in [1, 7, 48, 96, 300] {
            for start in [0u8, 1, 200] {
                let mut ring = vec![BLACK; len];
                fill_exact_rainbow(&mut ring, start);
                for (i, led) in ring.iter().enumerate() {
                    assert_eq!(
                        *led,
                        hsv(exact_rainbow_hue(start, i, len), 255, 255),
                        "len {len}, start {start}, pixel {i}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_rainbow_spans_the_wheel_once() {
        // Successive hue steps over a 48 ring add up to exactly one turn
        let total: usize = (0..48)
            .map(|i| {
                let next = exact_rainbow_hue(0, i + 1, 48);
                usize::from(next.wrapping_sub(exact_rainbow_hue(0, i, 48)))
            })
            .sum();
        assert_eq!(total, 256);
    }

    #[test]
    fn test_gamma8() {
        assert_eq!(gamma8(0), 0);
        assert_eq!(gamma8(255), 255);
        assert!(gamma8(128) < 64);
        let mut previous = 0;
        for value in 0..=255 {
            let corrected = gamma8(value);
            assert!(corrected >= previous);
            previous = corrected;
        }
    }
}
