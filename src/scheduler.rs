//! Pattern scheduler
//!
//! Round-robin playlist of effects plus the rotating base hue they share.
//! The scheduler has no timer of its own; the frame driver decides when to
//! advance the playlist and when to shift the hue.

use heapless::Vec;

use crate::{effect::EffectSlot, error::ConfigurationError, geometry::PanelLayout};

/// Maximum number of effects in a playlist
pub const MAX_PATTERNS: usize = 16;

#[derive(Debug, Clone)]
pub struct PatternScheduler {
    effects: Vec<EffectSlot, MAX_PATTERNS>,
    index: usize,
    hue: u8,
}

impl PatternScheduler {
    /// Build a playlist, starting at its first effect
    pub fn new(effects: impl IntoIterator<Item = EffectSlot>) -> Result<Self, ConfigurationError> {
        let mut playlist = Vec::new();
        for effect in effects {
            playlist
                .push(effect)
                .map_err(|_| ConfigurationError::PlaylistFull(MAX_PATTERNS))?;
        }
        if playlist.is_empty() {
            return Err(ConfigurationError::EmptyPlaylist);
        }
        Ok(Self {
            effects: playlist,
            index: 0,
            hue: 0,
        })
    }

    /// Check every effect of the playlist against the fixture layout
    pub fn validate(&self, layout: PanelLayout) -> Result<(), ConfigurationError> {
        for effect in &self.effects {
            effect.validate(layout)?;
        }
        Ok(())
    }

    pub fn current_effect(&self) -> &EffectSlot {
        &self.effects[self.index]
    }

    pub fn current_effect_mut(&mut self) -> &mut EffectSlot {
        &mut self.effects[self.index]
    }

    /// Move to the next effect, wrapping at the end of the playlist
    ///
    /// Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.effects.len();
        self.index
    }

    pub const fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Always false, construction rejects empty playlists
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    pub const fn hue(&self) -> u8 {
        self.hue
    }

    /// Rotate the base hue one step around the color wheel
    pub fn shift_hue(&mut self) {
        self.hue = self.hue.wrapping_add(1);
    }
}
