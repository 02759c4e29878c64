mod tests {
    use facet_light_composer::color::{
        PARTY_COLORS, Rgb, add_saturating, color_from_palette, fade_to_black_by, fill_rainbow,
        hsv, max_channels, rgb_from_u32,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    #[test]
    fn test_fade_to_black_by() {
        let mut leds = [Rgb { r: 200, g: 100, b: 0 }; 3];
        fade_to_black_by(&mut leds, 0);
        assert_eq!(leds[0], Rgb { r: 200, g: 100, b: 0 });

        fade_to_black_by(&mut leds, 128);
        assert_eq!(leds[1], Rgb { r: 100, g: 50, b: 0 });

        fade_to_black_by(&mut leds, 255);
        assert_eq!(leds, [BLACK; 3]);
    }

    #[test]
    fn test_add_saturating() {
        let a = Rgb { r: 200, g: 10, b: 0 };
        let b = Rgb { r: 100, g: 20, b: 255 };
        assert_eq!(add_saturating(a, b), Rgb { r: 255, g: 30, b: 255 });
    }

    #[test]
    fn test_max_channels() {
        let a = Rgb { r: 200, g: 10, b: 0 };
        let b = Rgb { r: 100, g: 20, b: 5 };
        assert_eq!(max_channels(a, b), Rgb { r: 200, g: 20, b: 5 });
        assert_eq!(max_channels(RED, BLACK), RED);
    }

    #[test]
    fn test_fill_rainbow() {
        let mut leds = [BLACK; 40];
        fill_rainbow(&mut leds, 250, 7);
        assert_eq!(leds[0], hsv(250, 240, 255));
        assert_eq!(leds[1], hsv(1, 240, 255));
        assert_eq!(leds[39], hsv(11, 240, 255));
    }

    #[test]
    fn test_color_from_palette() {
        assert_eq!(color_from_palette(&PARTY_COLORS, 0, 255), rgb_from_u32(0x5500AB));
        assert_eq!(color_from_palette(&PARTY_COLORS, 16, 255), rgb_from_u32(0x84007C));
        assert_eq!(
            color_from_palette(&PARTY_COLORS, 8, 255),
            Rgb { r: 108, g: 0, b: 147 }
        );
        assert_eq!(color_from_palette(&PARTY_COLORS, 100, 0), BLACK);
        // Last entry blends back into the first
        let wrapped = color_from_palette(&PARTY_COLORS, 255, 255);
        assert!(wrapped.b > wrapped.r);
    }

    #[test]
    fn test_rgb_from_u32() {
        assert_eq!(rgb_from_u32(0x123456), Rgb { r: 0x12, g: 0x34, b: 0x56 });
    }
}
