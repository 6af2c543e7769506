mod common;

mod tests {
    use embassy_time::Duration;
    use myrtio_cube_composer::refresh::{DEFAULT_TICK_PERIOD, MAX_TICK_PERIOD};
    use myrtio_cube_composer::{
        ALL_ON, Framebuffer, Latch, LayerCursor, RefreshEngine, RefreshTiming, RefreshTooSlow,
    };

    use super::common::{DisplayCall, DisplayFault, RecordingDisplay};

    #[test]
    fn test_layer_cursor_wraps() {
        let mut cursor = LayerCursor::new();
        let mut seen = Vec::new();
        for _ in 0..9 {
            seen.push(cursor.current());
            cursor.advance();
        }
        assert_eq!(seen, [0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }

    #[test]
    fn test_tick_scans_layers_in_order() {
        let cube = Framebuffer::new();
        let mut engine = RefreshEngine::new(
            RecordingDisplay::default(),
            &cube,
            RefreshTiming::default(),
        );

        let layers: Vec<u8> = (0..12).map(|_| engine.tick().unwrap()).collect();
        assert_eq!(layers, [0, 1, 2, 3, 0, 1, 2, 3, 0, 1, 2, 3]);
        assert_eq!(engine.next_layer(), 0);
    }

    #[test]
    fn test_tick_call_order() {
        let cube = Framebuffer::new();
        cube.set_row(0, 0, 0x1).unwrap();
        cube.set_row(0, 1, 0x2).unwrap();
        cube.set_row(0, 2, 0x4).unwrap();
        cube.set_row(0, 3, 0x8).unwrap();
        cube.fill_layer(1, ALL_ON).unwrap();

        let mut engine = RefreshEngine::new(
            RecordingDisplay::default(),
            &cube,
            RefreshTiming::default(),
        );
        engine.tick().unwrap();
        engine.tick().unwrap();

        assert_eq!(
            engine.display().calls,
            [
                DisplayCall::OutputEnable(false),
                DisplayCall::SelectLayer(0),
                DisplayCall::WriteRows(Latch::First, 0x21),
                DisplayCall::WriteRows(Latch::Second, 0x84),
                DisplayCall::OutputEnable(true),
                DisplayCall::OutputEnable(false),
                DisplayCall::SelectLayer(1),
                DisplayCall::WriteRows(Latch::First, 0xFF),
                DisplayCall::WriteRows(Latch::Second, 0xFF),
                DisplayCall::OutputEnable(true),
            ]
        );
    }

    #[test]
    fn test_tick_sees_framebuffer_updates() {
        let cube = Framebuffer::new();
        let mut engine = RefreshEngine::new(
            RecordingDisplay::default(),
            &cube,
            RefreshTiming::default(),
        );

        engine.tick().unwrap();
        cube.set_voxel(1, 3, 2).unwrap();
        engine.tick().unwrap();

        let calls = &engine.display().calls;
        assert_eq!(calls[8], DisplayCall::WriteRows(Latch::Second, 0x40));
    }

    #[test]
    fn test_display_error_keeps_cursor() {
        let cube = Framebuffer::new();
        let display = RecordingDisplay {
            fail_select: true,
            ..RecordingDisplay::default()
        };
        let mut engine = RefreshEngine::new(display, &cube, RefreshTiming::default());

        assert_eq!(engine.tick(), Err(DisplayFault));
        assert_eq!(engine.next_layer(), 0);

        engine.display_mut().fail_select = false;
        assert_eq!(engine.tick(), Ok(0));
        assert_eq!(engine.next_layer(), 1);
    }

    #[test]
    fn test_engine_carries_timing() {
        let cube = Framebuffer::new();
        let timing = RefreshTiming::new(Duration::from_micros(1000)).unwrap();
        let mut engine = RefreshEngine::new(RecordingDisplay::default(), &cube, timing);

        assert_eq!(engine.timing(), timing);
        assert_eq!(engine.timing().tick_period(), Duration::from_micros(1000));
        assert_eq!(engine.timing().cube_refresh_hz(), 250);

        engine.tick().unwrap();
        assert_eq!(engine.timing(), timing);
    }

    #[test]
    fn test_refresh_timing_limits() {
        let timing = RefreshTiming::default();
        assert_eq!(timing.tick_period(), DEFAULT_TICK_PERIOD);
        assert_eq!(timing.cube_refresh_hz(), 1420);

        assert_eq!(MAX_TICK_PERIOD, Duration::from_micros(4166));
        assert!(RefreshTiming::new(MAX_TICK_PERIOD).is_ok());
        assert!(RefreshTiming::new(MAX_TICK_PERIOD).unwrap().cube_refresh_hz() >= 60);

        let too_slow = Duration::from_micros(4167);
        assert_eq!(
            RefreshTiming::new(too_slow),
            Err(RefreshTooSlow {
                tick_period: too_slow
            })
        );
        assert!(RefreshTiming::new(Duration::from_micros(0)).is_err());
    }
}
