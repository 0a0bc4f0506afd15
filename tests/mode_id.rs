mod tests {
    use ring_light_composer::mode::{MODE_COUNT, ModeId};

    #[test]
    fn test_ids_follow_catalogue_order() {
        assert_eq!(ModeId::ALL.len(), usize::from(MODE_COUNT));
        for (index, id) in ModeId::ALL.iter().enumerate() {
            assert_eq!(usize::from(id.as_u8()), index);
            assert_eq!(ModeId::from_raw(id.as_u8()), Some(*id));
        }
        assert_eq!(ModeId::from_raw(MODE_COUNT), None);
        assert_eq!(ModeId::from_raw(255), None);
    }

    #[test]
    fn test_names() {
        assert_eq!(ModeId::RainbowCycle.as_str(), "rainbow_cycle");
        assert_eq!(ModeId::SideWipe.as_str(), "side_wipe");
        assert_eq!(ModeId::RadialSurge.as_str(), "radial_surge");

        assert_eq!(ModeId::parse_from_str("juggle"), Some(ModeId::Juggle));
        assert_eq!(ModeId::parse_from_str("Juggle"), None);
        assert_eq!(ModeId::parse_from_str("blank"), None);
    }

    #[test]
    fn test_names_are_unique() {
        for a in ModeId::ALL {
            for b in ModeId::ALL {
                if a != b {
                    assert_ne!(a.as_str(), b.as_str());
                }
            }
        }
    }
}
