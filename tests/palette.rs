mod tests {
    use tideline::color::{
        Palette16, PaletteBlend, Rgb, color_from_palette, fill_from_palette,
    };

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Stops with r = stop * 16, for easy index math
    fn ramp() -> Palette16 {
        let mut stops = [BLACK; 16];
        for (i, stop) in stops.iter_mut().enumerate() {
            stop.r = (i * 16) as u8;
        }
        Palette16::new(stops)
    }

    #[test]
    fn test_solid_palette() {
        let palette = Palette16::solid(RED);
        for index in [0u8, 17, 100, 255] {
            assert_eq!(
                color_from_palette(&palette, index, 255, PaletteBlend::Linear),
                RED
            );
        }
    }

    #[test]
    fn test_gradient_endpoints() {
        let palette = Palette16::from_gradient(&[RED, BLUE]);
        assert_eq!(palette.stops()[0], RED);
        assert_eq!(palette.stops()[15], BLUE);
    }

    #[test]
    fn test_nearest_lookup_snaps_to_stop() {
        let palette = ramp();
        // Index 0x23: high nibble 2, low nibble ignored without blending
        assert_eq!(
            color_from_palette(&palette, 0x23, 255, PaletteBlend::None),
            Rgb { r: 32, g: 0, b: 0 }
        );
    }

    #[test]
    fn test_linear_lookup_interpolates() {
        let palette = ramp();
        // Index 0x08: halfway between stop 0 (r=0) and stop 1 (r=16)
        let color = color_from_palette(&palette, 0x08, 255, PaletteBlend::Linear);
        assert_eq!(color.r, 8);
    }

    #[test]
    fn test_linear_lookup_wraps_to_first_stop() {
        let mut stops = [BLACK; 16];
        stops[15] = Rgb { r: 200, g: 0, b: 0 };
        stops[0] = Rgb { r: 0, g: 0, b: 0 };
        let palette = Palette16::new(stops);

        // Index 0xF8: halfway between stop 15 and (wrapped) stop 0
        let color = color_from_palette(&palette, 0xF8, 255, PaletteBlend::Linear);
        assert_eq!(color.r, 100);
    }

    #[test]
    fn test_brightness_scales_lookup() {
        let palette = Palette16::solid(Rgb {
            r: 255,
            g: 255,
            b: 255,
        });
        let color = color_from_palette(&palette, 0, 128, PaletteBlend::Linear);
        assert_eq!(
            color,
            Rgb {
                r: 128,
                g: 128,
                b: 128
            }
        );
    }

    #[test]
    fn test_fill_walks_the_index() {
        let palette = ramp();
        let mut leds = [BLACK; 4];
        fill_from_palette(&mut leds, 0, 16, &palette, 255, PaletteBlend::Linear);

        assert_eq!(leds[0].r, 0);
        assert_eq!(leds[1].r, 16);
        assert_eq!(leds[2].r, 32);
        assert_eq!(leds[3].r, 48);
    }
}
