mod tests {
    use tideline::color::Rgb;
    use tideline::telemetry::{
        FpsTracker, estimate_power_mw, max_brightness_for_power,
    };

    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    #[test]
    fn test_fps_weighted_average() {
        let mut tracker = FpsTracker::new();
        assert_eq!(tracker.fps(), 0.0);

        // 100 ms frames: each sample pulls 10% toward 10 FPS
        assert!((tracker.record(0.1) - 1.0).abs() < 1e-9);
        assert!((tracker.record(0.1) - 1.9).abs() < 1e-9);
    }

    #[test]
    fn test_fps_ignores_stalled_clock() {
        let mut tracker = FpsTracker::new();
        tracker.record(0.1);
        let before = tracker.fps();
        tracker.record(0.0);
        tracker.record(-1.0);
        assert_eq!(tracker.fps(), before);
    }

    #[test]
    fn test_power_of_dark_strip_is_idle_draw() {
        let leds = [BLACK; 10];
        assert_eq!(estimate_power_mw(&leds), 50);
    }

    #[test]
    fn test_power_of_white_led() {
        let leds = [WHITE; 1];
        // (255*80 + 255*55 + 255*75) >> 8 per channel, plus 5 mW idle
        assert_eq!(estimate_power_mw(&leds), 79 + 54 + 74 + 5);
    }

    #[test]
    fn test_brightness_cap_passthrough() {
        // No draw or within budget: the request is untouched
        assert_eq!(max_brightness_for_power(0, 200, 100), 200);
        assert_eq!(max_brightness_for_power(1000, 128, 1000), 128);
    }

    #[test]
    fn test_brightness_cap_limits_over_budget() {
        // 4000 mW frame at full brightness against a 1000 mW budget
        assert_eq!(max_brightness_for_power(4000, 255, 1000), 64);
        // Never brighter than requested
        assert!(max_brightness_for_power(4000, 32, 1000) <= 32);
    }
}
