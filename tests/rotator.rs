mod tests {
    use facet_light_composer::{
        ConfigurationError, Direction, Duration, Instant, PatternTable, RegionPainter, Rgb,
        RotationState, Rotator,
        color::BLACK,
        fixture::deltohedron::{LAYOUT, LED_COUNT, THIRD_LEVEL_PETALS},
    };

    const INTERVAL: Duration = Duration::from_millis(100);

    fn lit(leds: &[Rgb]) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_rotate_paints_one_subsection() {
        let painter = RegionPainter::new(LAYOUT);
        let mut rotator = Rotator::new(THIRD_LEVEL_PETALS, INTERVAL, Direction::Forward).unwrap();
        let mut leds = [BLACK; LED_COUNT];

        let fired = rotator
            .rotate(Instant::from_millis(0), &painter, &mut leds, 0, 0)
            .unwrap();
        assert!(fired);
        assert_eq!(lit(&leds), [6, 7, 26]);
        assert_eq!(leds[26], painter.color(0));
    }

    #[test]
    fn test_rotate_leaves_other_pixels_untouched() {
        let painter = RegionPainter::new(LAYOUT);
        let mut rotator = Rotator::new(THIRD_LEVEL_PETALS, INTERVAL, Direction::Forward).unwrap();
        let mut leds = [BLACK; LED_COUNT];
        for (i, led) in leds.iter_mut().enumerate() {
            let i = u8::try_from(i).unwrap();
            *led = Rgb {
                r: i,
                g: i.wrapping_mul(3),
                b: 255 - i,
            };
        }
        let before = leds;

        rotator
            .rotate(Instant::from_millis(0), &painter, &mut leds, 4, 0)
            .unwrap();
        let changed: Vec<usize> = (0..LED_COUNT).filter(|&i| leds[i] != before[i]).collect();
        let origin = 4 * 27;
        assert_eq!(changed, [origin + 6, origin + 7, origin + 26]);
    }

    #[test]
    fn test_rotate_is_gated() {
        let painter = RegionPainter::new(LAYOUT);
        let mut rotator = Rotator::new(THIRD_LEVEL_PETALS, INTERVAL, Direction::Forward).unwrap();
        let mut leds = [BLACK; LED_COUNT];

        assert!(rotator
            .rotate(Instant::from_millis(1000), &painter, &mut leds, 1, 0)
            .unwrap());
        let state = rotator.state();
        let before = leds;

        assert!(!rotator
            .rotate(Instant::from_millis(1001), &painter, &mut leds, 1, 100)
            .unwrap());
        assert_eq!(rotator.state(), state);
        assert_eq!(leds, before);
        assert_eq!(state.next_update(), Instant::from_millis(1100));
    }

    #[test]
    fn test_backward_wraps_to_last_segment() {
        let mut state = RotationState::new();
        let mut active = vec![state.active_segment(9)];
        for ms in [0, 100, 200] {
            active.push(
                state
                    .step(Instant::from_millis(ms), INTERVAL, Direction::Backward, 9)
                    .unwrap(),
            );
        }
        assert_eq!(active, [0, 8, 7, 6]);
        assert_eq!(state.segment_offset(), 6);
    }

    #[test]
    fn test_forward_wraps_to_first_segment() {
        let mut state = RotationState::new();
        let mut last = 0;
        for step in 0..8u64 {
            last = state
                .step(Instant::from_millis(step * 100), INTERVAL, Direction::Forward, 8)
                .unwrap();
        }
        assert_eq!(last, 0);
    }

    #[test]
    fn test_lock_step_panels() {
        let painter = RegionPainter::new(LAYOUT);
        let mut rotator = Rotator::new(THIRD_LEVEL_PETALS, INTERVAL, Direction::Forward).unwrap();
        let mut leds = [BLACK; LED_COUNT];

        rotator
            .rotate_panels(Instant::from_millis(0), &painter, &mut leds, 0..8, 10)
            .unwrap();
        let lit = lit(&leds);
        assert_eq!(lit.len(), 24);
        for panel in 0..8 {
            let origin = panel * 27;
            for offset in [6, 7, 26] {
                assert!(lit.contains(&(origin + offset)));
            }
        }
    }

    #[test]
    fn test_rejects_uneven_table() {
        let table = PatternTable::new(&[0; 26]).with_subsection_size(3);
        assert_eq!(
            Rotator::new(table, INTERVAL, Direction::Forward).err(),
            Some(ConfigurationError::UnevenSubsections {
                len: 26,
                subsection_size: 3
            })
        );
        assert_eq!(
            Rotator::new(PatternTable::new(&[]), INTERVAL, Direction::Forward).err(),
            Some(ConfigurationError::EmptyTable)
        );
    }
}
