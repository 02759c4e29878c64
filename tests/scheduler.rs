mod tests {
    use facet_light_composer::{
        ConfigurationError, EffectSlot, PatternScheduler,
        effect::{BpmEffect, ConfettiEffect, JuggleEffect, RainbowEffect, SinelonEffect},
        scheduler::MAX_PATTERNS,
    };

    fn five() -> [EffectSlot; 5] {
        [
            EffectSlot::Confetti(ConfettiEffect::default()),
            EffectSlot::Sinelon(SinelonEffect::default()),
            EffectSlot::Bpm(BpmEffect::default()),
            EffectSlot::Juggle(JuggleEffect::default()),
            EffectSlot::Rainbow(RainbowEffect::default()),
        ]
    }

    #[test]
    fn test_advance_wraps() {
        let mut scheduler = PatternScheduler::new(five()).unwrap();
        assert_eq!(scheduler.index(), 0);
        let visited: Vec<usize> = (0..5).map(|_| scheduler.advance()).collect();
        assert_eq!(visited, [1, 2, 3, 4, 0]);
        assert_eq!(scheduler.len(), 5);
    }

    #[test]
    fn test_empty_playlist_rejected() {
        assert_eq!(
            PatternScheduler::new([]).err(),
            Some(ConfigurationError::EmptyPlaylist)
        );
    }

    #[test]
    fn test_full_playlist_rejected() {
        let effects = (0..=MAX_PATTERNS).map(|_| EffectSlot::Confetti(ConfettiEffect::default()));
        assert_eq!(
            PatternScheduler::new(effects).err(),
            Some(ConfigurationError::PlaylistFull(MAX_PATTERNS))
        );

        let effects = (0..MAX_PATTERNS).map(|_| EffectSlot::Confetti(ConfettiEffect::default()));
        assert_eq!(PatternScheduler::new(effects).unwrap().len(), MAX_PATTERNS);
    }

    #[test]
    fn test_hue_wraps() {
        let mut scheduler = PatternScheduler::new(five()).unwrap();
        for _ in 0..255 {
            scheduler.shift_hue();
        }
        assert_eq!(scheduler.hue(), 255);
        scheduler.shift_hue();
        assert_eq!(scheduler.hue(), 0);
    }
}
