mod tests {
    use ring_light_composer::{
        CommandEndpoint, ControlError, ControlState, Response, SetOutcome, SetRequest,
    };

    #[test]
    fn test_parse_query() {
        let request = SetRequest::parse("mode=3&brightness=100");
        assert_eq!(request.mode, Some("3"));
        assert_eq!(request.brightness, Some("100"));

        let request = SetRequest::parse("brightness=7&foo=bar");
        assert_eq!(request.mode, None);
        assert_eq!(request.brightness, Some("7"));

        assert_eq!(SetRequest::parse(""), SetRequest::default());
    }

    #[test]
    fn test_set_always_redirects() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);
        assert_eq!(endpoint.handle("/set", "mode=5"), Response::Redirect("/"));
        assert_eq!(endpoint.handle("/set", "mode=99"), Response::Redirect("/"));
        assert_eq!(endpoint.handle("/set", ""), Response::Redirect("/"));
        assert_eq!(control.mode(), 5);
    }

    #[test]
    fn test_mode_rejection_leaves_state_unchanged() {
        let control = ControlState::new();
        control.set_mode(7).unwrap();
        let endpoint = CommandEndpoint::new(&control);

        let outcome = endpoint.apply_set(&SetRequest::parse("mode=27"));
        assert_eq!(outcome.mode, Some(Err(ControlError::ModeOutOfRange(27))));
        let outcome = endpoint.apply_set(&SetRequest::parse("mode=-1"));
        assert_eq!(outcome.mode, Some(Err(ControlError::ModeOutOfRange(-1))));
        let outcome = endpoint.apply_set(&SetRequest::parse("mode=abc"));
        assert_eq!(outcome.mode, Some(Err(ControlError::InvalidNumber)));
        assert_eq!(control.mode(), 7);
    }

    #[test]
    fn test_brightness_rejection() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);

        for query in ["brightness=256", "brightness=-5", "brightness="] {
            let outcome = endpoint.apply_set(&SetRequest::parse(query));
            assert!(matches!(outcome.brightness, Some(Err(_))), "{query}");
        }
        assert_eq!(control.brightness(), 50);

        let outcome = endpoint.apply_set(&SetRequest::parse("brightness=255"));
        assert_eq!(outcome.brightness, Some(Ok(255)));
        assert_eq!(control.brightness(), 255);
    }

    #[test]
    fn test_parameters_are_independent() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);

        let outcome = endpoint.apply_set(&SetRequest::parse("mode=99&brightness=80"));
        assert_eq!(
            outcome,
            SetOutcome {
                mode: Some(Err(ControlError::ModeOutOfRange(99))),
                brightness: Some(Ok(80)),
            }
        );
        assert_eq!((control.mode(), control.brightness()), (0, 80));

        let outcome = endpoint.apply_set(&SetRequest::parse("mode=12&brightness=300"));
        assert_eq!(outcome.mode, Some(Ok(12)));
        assert_eq!((control.mode(), control.brightness()), (12, 80));
    }

    #[test]
    fn test_root_banner() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);
        match endpoint.handle("/", "") {
            Response::Text(body) => {
                assert_eq!(body.as_str(), "mode 0 (rainbow_cycle), brightness 50");
            }
            other => panic!("unexpected response {other:?}"),
        }

        control.set_mode(19).unwrap();
        control.set_brightness(255);
        assert_eq!(
            endpoint.banner().as_str(),
            "mode 19 (full_throttle_pulse), brightness 255"
        );
    }

    #[test]
    fn test_unknown_path() {
        let control = ControlState::new();
        let endpoint = CommandEndpoint::new(&control);
        assert_eq!(endpoint.handle("/favicon.ico", ""), Response::NotFound);
        assert_eq!(endpoint.handle("/set/", "mode=3"), Response::NotFound);
        assert_eq!(control.mode(), 0);
    }
}
