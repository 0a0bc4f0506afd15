mod tests {
    use ring_light_composer::color::{BLACK, Rgb, WHITE};
    use ring_light_composer::{OutputDriver, SmartLedsOutput};
    use smart_leds::{RGB8, SmartLedsWrite};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for Recorder {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    struct Broken;

    impl SmartLedsWrite for Broken {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            Err(())
        }
    }

    #[test]
    fn test_full_brightness_passes_colors_through() {
        let mut output = SmartLedsOutput::new(Recorder::default());
        let colors: [Rgb; 3] = [WHITE, BLACK, Rgb { r: 10, g: 20, b: 30 }];
        output.set_brightness(255);
        output.write(&colors);

        let recorder = output.into_inner();
        assert_eq!(recorder.frames, vec![colors.to_vec()]);
    }

    #[test]
    fn test_brightness_is_applied_at_write_time() {
        let mut output = SmartLedsOutput::new(Recorder::default());
        output.set_brightness(0);
        output.write(&[WHITE; 4]);
        output.set_brightness(128);
        output.write(&[WHITE; 4]);
        assert_eq!(output.brightness(), 128);

        let recorder = output.into_inner();
        assert_eq!(recorder.frames[0], vec![BLACK; 4]);
        assert!(
            recorder.frames[1]
                .iter()
                .all(|led| led.r > 0 && led.r < 255 && led.r == led.b)
        );
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let mut output = SmartLedsOutput::new(Broken);
        output.write(&[WHITE; 4]);
        output.write(&[WHITE; 4]);
    }
}
