mod tests {
    use embassy_time::{Duration, Instant};
    use ring_light_composer::color::{BLACK, BLUE, Rgb, exact_rainbow_hue, hsv};
    use ring_light_composer::ring::{NUM_LEDS, RING_LEDS};
    use ring_light_composer::{
        CommandEndpoint, ControlState, FrameScheduler, ModeId, OutputDriver, Renderer,
        RendererConfig,
    };

    #[derive(Default)]
    struct FakeOutput {
        frames: Vec<Vec<Rgb>>,
        brightness_updates: Vec<u8>,
    }

    impl OutputDriver for FakeOutput {
        fn write(&mut self, colors: &[Rgb]) {
            self.frames.push(colors.to_vec());
        }

        fn set_brightness(&mut self, brightness: u8) {
            self.brightness_updates.push(brightness);
        }
    }

    #[test]
    fn test_cold_boot_renders_rainbow_at_default_brightness() {
        let control = ControlState::new();
        let mut renderer = Renderer::new(&control, &RendererConfig::default());

        let frame = renderer.render(Instant::from_millis(0));
        assert_eq!(frame.mode, 0);
        assert_eq!(frame.brightness, 50);
        assert_eq!(frame.delay, Duration::from_millis(10));
        assert_eq!(frame.pixels.len(), NUM_LEDS);
        for i in 0..RING_LEDS {
            let expected = hsv(exact_rainbow_hue(0, i, RING_LEDS), 255, 255);
            assert_eq!(frame.pixels[i], expected);
        }
        assert_eq!(renderer.current_mode(), Some(ModeId::RainbowCycle));
    }

    #[test]
    fn test_endpoint_write_shows_on_next_frame() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);
        let mut renderer = Renderer::new(&control, &RendererConfig::default());
        renderer.render(Instant::from_millis(0));

        endpoint.handle("/set", "mode=1&brightness=80");

        let frame = renderer.render(Instant::from_millis(10));
        assert_eq!(frame.mode, 1);
        assert_eq!(frame.brightness, 80);
        assert!(frame.pixels.iter().all(|led| *led == BLUE));
    }

    #[test]
    fn test_switching_to_side_wipe_clears_the_rings() {
        let control = ControlState::new();
        let mut renderer = Renderer::new(&control, &RendererConfig::default());
        control.set_mode(7).unwrap();
        for frame in 0..50 {
            renderer.render(Instant::from_millis(frame * 20));
        }
        assert!(renderer.pixels().iter().any(|led| *led != BLACK));

        control.set_mode(4).unwrap();
        let frame = renderer.render(Instant::from_millis(1000));
        for (i, led) in frame.pixels.iter().enumerate() {
            let position = i % RING_LEDS;
            if position == 0 || position == RING_LEDS - 1 {
                assert_eq!(*led, BLUE);
            } else {
                assert_eq!(*led, BLACK, "pixel {i} not cleared");
            }
        }
    }

    #[test]
    fn test_scheduler_flushes_and_pushes_brightness_changes() {
        let control = ControlState::new();
        let renderer = Renderer::new(&control, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, FakeOutput::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(10));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));

        scheduler.tick(Instant::from_millis(10));
        control.set_brightness(200);
        scheduler.tick(Instant::from_millis(20));

        let output = scheduler.output();
        assert_eq!(output.frames.len(), 3);
        assert!(output.frames.iter().all(|frame| frame.len() == NUM_LEDS));
        assert_eq!(output.brightness_updates, vec![50, 200]);
    }

    #[test]
    fn test_scheduler_follows_mode_delay() {
        let control = ControlState::new();
        control.set_mode(ModeId::BassDrop.as_u8()).unwrap();
        let renderer = Renderer::new(&control, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, FakeOutput::default());

        let result = scheduler.tick(Instant::from_millis(0));
        assert_eq!(result.next_deadline, Instant::from_millis(100));
        assert_eq!(result.mode, ModeId::BassDrop.as_u8());
    }

    #[test]
    fn test_scheduler_drift_correction() {
        let control = ControlState::new();
        let renderer = Renderer::new(&control, &RendererConfig::default());
        let mut scheduler = FrameScheduler::new(renderer, FakeOutput::default());

        scheduler.tick(Instant::from_millis(0));
        // Slightly late: keep the cadence
        let result = scheduler.tick(Instant::from_millis(15));
        assert_eq!(result.next_deadline, Instant::from_millis(20));
        assert_eq!(result.sleep_duration, Duration::from_millis(5));

        // Long stall: restart from now instead of bursting
        let result = scheduler.tick(Instant::from_millis(1000));
        assert_eq!(result.next_deadline, Instant::from_millis(1010));
        assert_eq!(result.sleep_duration, Duration::from_millis(10));
    }
}
