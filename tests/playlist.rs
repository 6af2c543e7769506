mod common;

mod tests {
    use myrtio_cube_composer::effect::{Blinking, LayerDemo, LayerStepping};
    use myrtio_cube_composer::playlist::{DEFAULT_ROTATION, DEFAULT_ROTATION_LEN};
    use myrtio_cube_composer::{
        CancelToken, EffectContext, EffectId, EffectSlot, Framebuffer, Playlist, PlaylistOutcome,
    };

    use super::common::{RecordingDelay, ScriptedRng};

    #[test]
    fn test_default_rotation_order() {
        let playlist = Playlist::default_rotation();
        let ids: Vec<EffectId> = playlist.effects().iter().map(EffectSlot::id).collect();

        assert_eq!(playlist.len(), DEFAULT_ROTATION_LEN);
        assert_eq!(
            ids,
            [
                EffectId::LayerStepping,
                EffectId::Blinking,
                EffectId::Pulsing,
                EffectId::RandomVoxel,
                EffectId::Rain,
                EffectId::CubeInCube,
            ]
        );
        assert_eq!(ids, DEFAULT_ROTATION);
        assert!(playlist.effects().iter().all(|e| !e.runs_until_cancelled()));
    }

    #[test]
    fn test_push_reports_full_playlist() {
        let mut playlist: Playlist<1> = Playlist::new();
        assert!(playlist.push_id(EffectId::Rain).is_ok());

        let extra = EffectSlot::Blinking(Blinking::new(1, 1));
        assert_eq!(playlist.push(extra), Err(extra));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_run_once_plays_effects_in_order() {
        let cube = Framebuffer::new();
        let cancel = CancelToken::new();
        let mut cx = EffectContext::new(
            &cube,
            RecordingDelay::new(&cube),
            ScriptedRng::new(&[0]),
            &cancel,
        );
        let mut playlist: Playlist<2> = Playlist::new();
        playlist
            .push(EffectSlot::LayerStepping(LayerStepping::new(3, 1)))
            .unwrap();
        playlist
            .push(EffectSlot::Blinking(Blinking::new(9, 1)))
            .unwrap();

        assert_eq!(playlist.run_once(&mut cx), PlaylistOutcome::Completed);
        assert_eq!(cx.delay.pauses, [3, 3, 3, 3, 9, 9]);
        assert_eq!(cube.lit_count(), 64);
    }

    #[test]
    fn test_run_once_skips_when_cancelled() {
        let cube = Framebuffer::new();
        let cancel = CancelToken::new();
        cancel.cancel();
        let mut cx = EffectContext::new(
            &cube,
            RecordingDelay::new(&cube),
            ScriptedRng::new(&[0]),
            &cancel,
        );

        let playlist = Playlist::default_rotation();
        assert_eq!(playlist.run_once(&mut cx), PlaylistOutcome::Cancelled);
        assert!(cx.delay.pauses.is_empty());

        cancel.reset();
        assert!(!cancel.is_cancelled());
    }

    #[test]
    fn test_run_until_cancelled_counts_passes() {
        let cube = Framebuffer::new();
        let cancel = CancelToken::new();
        let mut cx = EffectContext::new(
            &cube,
            RecordingDelay::new(&cube).cancel_after(&cancel, 5),
            ScriptedRng::new(&[0]),
            &cancel,
        );
        let mut playlist: Playlist<1> = Playlist::new();
        playlist
            .push(EffectSlot::Blinking(Blinking::new(1, 1)))
            .unwrap();

        assert_eq!(playlist.run_until_cancelled(&mut cx), 2);
        assert_eq!(cx.delay.pauses.len(), 6);
    }

    #[test]
    fn test_layer_demo_in_playlist_ends_pass() {
        let cube = Framebuffer::new();
        let cancel = CancelToken::new();
        let mut cx = EffectContext::new(
            &cube,
            RecordingDelay::new(&cube).cancel_after(&cancel, 3),
            ScriptedRng::new(&[0]),
            &cancel,
        );
        let mut playlist: Playlist<2> = Playlist::new();
        playlist
            .push(EffectSlot::LayerDemo(LayerDemo::new(50, 1)))
            .unwrap();
        playlist.push_id(EffectId::Blinking).unwrap();

        assert_eq!(playlist.run_once(&mut cx), PlaylistOutcome::Cancelled);
        assert_eq!(cx.delay.pauses, [50, 49, 48]);
    }

    #[test]
    fn test_empty_playlist_returns_immediately() {
        let cube = Framebuffer::new();
        let cancel = CancelToken::new();
        let mut cx = EffectContext::new(
            &cube,
            RecordingDelay::new(&cube),
            ScriptedRng::new(&[0]),
            &cancel,
        );
        let playlist: Playlist<4> = Playlist::new();

        assert!(playlist.is_empty());
        assert_eq!(playlist.run_until_cancelled(&mut cx), 0);
    }
}
