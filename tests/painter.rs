mod tests {
    use facet_light_composer::{
        BufferBoundsError, PanelLayout, PatternTable, RegionPainter, Rgb,
        color::{BLACK, hsv},
        fixture::deltohedron::{FIRST_LEVEL_PETALS, LAYOUT, LED_COUNT},
    };

    fn lit(leds: &[Rgb]) -> Vec<usize> {
        leds.iter()
            .enumerate()
            .filter(|(_, led)| **led != BLACK)
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn test_paint_panel() {
        let painter = RegionPainter::new(LAYOUT);
        let mut leds = [BLACK; LED_COUNT];
        painter
            .paint(&mut leds, 2, &FIRST_LEVEL_PETALS, 42)
            .unwrap();

        assert_eq!(lit(&leds), [61, 62, 63, 65, 68, 75, 76, 77]);
        assert_eq!(leds[61], hsv(42, 200, 255));
    }

    #[test]
    fn test_out_of_range_leaves_buffer_untouched() {
        let painter = RegionPainter::new(LAYOUT);
        let mut leds = [BLACK; LED_COUNT];
        assert_eq!(
            painter.paint_offsets(&mut leds, 7, &[0, 27], 0),
            Err(BufferBoundsError {
                index: 216,
                len: 216
            })
        );
        assert!(lit(&leds).is_empty());
    }

    #[test]
    fn test_offset_past_panel_rejected() {
        let painter = RegionPainter::new(LAYOUT);
        let mut leds = [BLACK; LED_COUNT];

        // Offset 30 would land on pixel 3 of panel 1
        assert_eq!(
            painter.paint(&mut leds, 0, &PatternTable::new(&[30]), 0),
            Err(BufferBoundsError { index: 30, len: 216 })
        );
        assert_eq!(
            painter.paint_offsets(&mut leds, 3, &[1, 27], 0),
            Err(BufferBoundsError { index: 108, len: 216 })
        );
        assert!(lit(&leds).is_empty());
    }

    #[test]
    fn test_panel_past_layout_rejected() {
        let painter = RegionPainter::new(PanelLayout::new(2, 10));
        let mut leds = [BLACK; 30];
        assert!(painter.paint_offsets(&mut leds, 2, &[0], 0).is_err());
        assert!(lit(&leds).is_empty());
    }

    #[test]
    fn test_short_buffer_rejected() {
        let painter = RegionPainter::new(PanelLayout::new(2, 10));
        let mut leds = [BLACK; 12];
        assert_eq!(
            painter.paint_offsets(&mut leds, 1, &[1, 5], 0),
            Err(BufferBoundsError { index: 15, len: 12 })
        );
        assert!(lit(&leds).is_empty());
    }

    #[test]
    fn test_pixel_index() {
        assert_eq!(LAYOUT.pixel_index(0, 0), Ok(0));
        assert_eq!(LAYOUT.pixel_index(7, 26), Ok(215));
        assert!(LAYOUT.pixel_index(8, 0).is_err());
        assert!(LAYOUT.pixel_index(0, 27).is_err());
        assert_eq!(LAYOUT.pixel_index(1, 0), Ok(27));
        assert_eq!(PanelLayout::single(100).led_count(), 100);
    }
}
