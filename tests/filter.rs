mod tests {
    use facet_light_composer::{
        ColorOrder, FilterProcessorConfig, Rgb,
        color::BLACK,
        filter::{FilterProcessor, TYPICAL_LED_STRIP, UNCORRECTED},
    };

    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    fn processor(brightness: u8, color_correction: Rgb, color_order: ColorOrder) -> FilterProcessor {
        FilterProcessor::new(&FilterProcessorConfig {
            brightness,
            color_correction,
            color_order,
        })
    }

    #[test]
    fn test_passthrough() {
        let pixels = [Rgb { r: 10, g: 20, b: 30 }; 4];
        let mut output = [BLACK; 4];
        processor(255, UNCORRECTED, ColorOrder::Rgb).process(&pixels, &mut output);
        assert_eq!(output, pixels);
    }

    #[test]
    fn test_color_correction() {
        let mut output = [BLACK; 1];
        processor(255, TYPICAL_LED_STRIP, ColorOrder::Rgb).process(&[WHITE], &mut output);
        assert_eq!(output[0], Rgb { r: 255, g: 176, b: 240 });
    }

    #[test]
    fn test_brightness() {
        let mut output = [BLACK; 1];
        processor(96, UNCORRECTED, ColorOrder::Rgb).process(&[WHITE], &mut output);
        assert_eq!(output[0], Rgb { r: 96, g: 96, b: 96 });

        processor(0, UNCORRECTED, ColorOrder::Rgb).process(&[WHITE], &mut output);
        assert_eq!(output[0], BLACK);
    }

    #[test]
    fn test_color_order() {
        let pixel = Rgb { r: 1, g: 2, b: 3 };
        assert_eq!(ColorOrder::Grb.reorder(pixel), Rgb { r: 2, g: 1, b: 3 });
        assert_eq!(ColorOrder::Bgr.reorder(pixel), Rgb { r: 3, g: 2, b: 1 });

        let mut output = [BLACK; 1];
        processor(255, UNCORRECTED, ColorOrder::Grb).process(&[pixel], &mut output);
        assert_eq!(output[0], Rgb { r: 2, g: 1, b: 3 });
    }
}
