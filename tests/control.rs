mod tests {
    use ring_light_composer::{ControlError, ControlState, DEFAULT_BRIGHTNESS, DEFAULT_MODE};

    #[test]
    fn test_cold_boot_defaults() {
        let control = ControlState::new();
        assert_eq!(control.mode(), DEFAULT_MODE);
        assert_eq!(control.brightness(), DEFAULT_BRIGHTNESS);
        assert_eq!((control.mode(), control.brightness()), (0, 50));
    }

    #[test]
    fn test_mode_out_of_range_is_rejected() {
        let control = ControlState::new();
        control.set_mode(7).unwrap();

        assert_eq!(control.set_mode(27), Err(ControlError::ModeOutOfRange(27)));
        assert_eq!(
            control.set_mode_raw(-1),
            Err(ControlError::ModeOutOfRange(-1))
        );
        assert_eq!(
            control.set_mode_raw(1000),
            Err(ControlError::ModeOutOfRange(1000))
        );
        assert_eq!(control.mode(), 7);

        assert_eq!(control.set_mode_raw(26), Ok(26));
        assert_eq!(control.mode(), 26);
    }

    #[test]
    fn test_brightness_out_of_range_is_rejected() {
        let control = ControlState::new();
        assert_eq!(
            control.set_brightness_raw(256),
            Err(ControlError::BrightnessOutOfRange(256))
        );
        assert_eq!(
            control.set_brightness_raw(-5),
            Err(ControlError::BrightnessOutOfRange(-5))
        );
        assert_eq!(control.brightness(), 50);

        assert_eq!(control.set_brightness_raw(0), Ok(0));
        assert_eq!(control.set_brightness_raw(255), Ok(255));
        assert_eq!(control.brightness(), 255);
    }

    #[test]
    fn test_mode_stepping_wraps() {
        let control = ControlState::new();
        control.set_mode(26).unwrap();
        assert_eq!(control.next_mode(), 0);
        assert_eq!(control.mode(), 0);

        assert_eq!(control.previous_mode(), 26);
        assert_eq!(control.previous_mode(), 25);
    }

    #[test]
    fn test_brightness_stepping_clamps() {
        let control = ControlState::new();
        control.set_brightness(250);
        assert_eq!(control.raise_brightness(10), 255);
        assert_eq!(control.raise_brightness(10), 255);

        control.set_brightness(5);
        assert_eq!(control.lower_brightness(10), 0);
        assert_eq!(control.brightness(), 0);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            ControlError::ModeOutOfRange(30).to_string(),
            "mode 30 is out of range 0..27"
        );
        assert_eq!(
            ControlError::InvalidNumber.to_string(),
            "value is not an integer"
        );
    }
}
