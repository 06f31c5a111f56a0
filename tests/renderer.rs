mod tests {
    use embassy_time::{Duration, Instant};
    use tideline::{
        Command, CommandQueue, EffectId, EffectPresets, Palette16, Renderer,
        RenderingBounds, Rgb, StripConfig,
        wave::{StepShape, WaveShape},
    };

    const MAX_LEDS: usize = 64;
    const QUEUE_SIZE: usize = 8;
    const LED_COUNT: u16 = 60;

    const RED: Rgb = Rgb { r: 255, g: 0, b: 0 };
    const BLUE: Rgb = Rgb { r: 0, g: 0, b: 255 };
    const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    fn presets() -> EffectPresets {
        EffectPresets {
            water: Palette16::solid(BLUE),
            sand: Palette16::solid(RED),
            water_color: BLUE,
            sand_color: RED,
            flow_hue: 160,
            ebb_hue: 32,
            wave_shape: WaveShape::new(7.0, 10.0, 0.5).unwrap(),
            step_shape: StepShape::new(7, 2).unwrap(),
        }
    }

    fn config(brightness_fade: Duration, power_limit_mw: Option<u32>) -> StripConfig {
        StripConfig {
            effect: EffectId::Tide,
            presets: presets(),
            bounds: RenderingBounds::strip(LED_COUNT),
            brightness: 255,
            brightness_fade,
            power_limit_mw,
        }
    }

    #[test]
    fn test_frame_covers_bounds() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), None),
        );

        let frame = renderer.render(Instant::from_millis(0));
        assert_eq!(frame.len(), LED_COUNT as usize);
    }

    #[test]
    fn test_tide_starts_on_sand() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), None),
        );

        // At t=0 the wave sits at position 0: the whole strip is sand
        let frame = renderer.render(Instant::from_millis(0));
        assert!(frame.iter().all(|led| *led == RED));
    }

    #[test]
    fn test_switch_effect_command() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), None),
        );
        assert_eq!(renderer.effect_id(), EffectId::Tide);

        queue
            .sender()
            .try_send(Command::SwitchEffect(EffectId::Shore))
            .unwrap();
        renderer.render(Instant::from_millis(0));
        assert_eq!(renderer.effect_id(), EffectId::Shore);
    }

    #[test]
    fn test_set_brightness_scales_frame() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), None),
        );

        queue.sender().try_send(Command::SetBrightness(128)).unwrap();
        let frame = renderer.render(Instant::from_millis(0));
        assert!(frame.iter().all(|led| led.r == 128 && led.g == 0 && led.b == 0));
    }

    #[test]
    fn test_power_off_fades_to_black() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(100), None),
        );

        let frame = renderer.render(Instant::from_millis(0));
        assert!(frame.iter().any(|led| *led != BLACK));

        queue.sender().try_send(Command::PowerOff).unwrap();
        renderer.render(Instant::from_millis(10));
        let frame = renderer.render(Instant::from_millis(110));
        assert!(frame.iter().all(|led| *led == BLACK));

        // Power back on restores the stored target brightness
        queue.sender().try_send(Command::PowerOn).unwrap();
        renderer.render(Instant::from_millis(120));
        let frame = renderer.render(Instant::from_millis(220));
        assert!(frame.iter().any(|led| *led != BLACK));
    }

    #[test]
    fn test_set_bounds_command() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), None),
        );

        queue
            .sender()
            .try_send(Command::SetBounds(RenderingBounds { start: 0, end: 20 }))
            .unwrap();
        let frame = renderer.render(Instant::from_millis(0));
        assert_eq!(frame.len(), 20);
    }

    #[test]
    fn test_power_limit_caps_brightness() {
        let queue = CommandQueue::<QUEUE_SIZE>::new();
        let mut renderer = Renderer::<MAX_LEDS, QUEUE_SIZE>::new(
            queue.receiver(),
            &config(Duration::from_millis(0), Some(100)),
        );

        // A 60 LED red frame draws far more than 100 mW at full
        // brightness, so the cap dims the output hard.
        let frame = renderer.render(Instant::from_millis(0));
        assert!(frame.iter().all(|led| led.r < 16 && led.r > 0));
    }
}
