//! Effect rotation
//!
//! Runs configured effects one after another. Each effect blocks until it is
//! done; the cancel token is checked between effects.

use embedded_hal::delay::DelayNs;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use heapless::Vec;

use crate::effect::{EffectContext, EffectId, EffectSlot};
use crate::random::CubeRng;

/// Number of effects in the stock rotation
pub const DEFAULT_ROTATION_LEN: usize = 6;

/// Stock rotation of the reference firmware, in play order
///
/// `layer_demo` is left out because it never finishes on its own.
pub const DEFAULT_ROTATION: [EffectId; DEFAULT_ROTATION_LEN] = [
    EffectId::LayerStepping,
    EffectId::Blinking,
    EffectId::Pulsing,
    EffectId::RandomVoxel,
    EffectId::Rain,
    EffectId::CubeInCube,
];

/// How a pass over the playlist ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaylistOutcome {
    /// Every effect ran to the end
    Completed,
    /// The cancel token was set before the pass finished
    Cancelled,
}

/// Fixed-capacity list of effects played in order
///
/// N is the maximum number of effects
#[derive(Debug, Clone, Default)]
pub struct Playlist<const N: usize> {
    effects: Vec<EffectSlot, N>,
}

impl<const N: usize> Playlist<N> {
    pub const fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Append an effect
    ///
    /// Returns the effect if the playlist is full
    pub fn push(&mut self, effect: EffectSlot) -> Result<(), EffectSlot> {
        self.effects.push(effect)
    }

    /// Append an effect with its stock parameters
    pub fn push_id(&mut self, id: EffectId) -> Result<(), EffectSlot> {
        self.push(id.default_slot())
    }

    pub fn effects(&self) -> &[EffectSlot] {
        &self.effects
    }

    pub fn len(&self) -> usize {
        self.effects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Play every effect once
    pub fn run_once<D: DelayNs, R: CubeRng>(
        &self,
        cx: &mut EffectContext<'_, D, R>,
    ) -> PlaylistOutcome {
        for effect in &self.effects {
            if cx.cancel.is_cancelled() {
                return PlaylistOutcome::Cancelled;
            }

            #[cfg(feature = "esp32-log")]
            println!("cube: running effect {}", effect.id().as_str());

            effect.run(cx);
        }

        if cx.cancel.is_cancelled() {
            return PlaylistOutcome::Cancelled;
        }
        PlaylistOutcome::Completed
    }

    /// Repeat the playlist until the cancel token is set
    ///
    /// Returns the number of completed passes. An empty playlist returns
    /// immediately.
    pub fn run_until_cancelled<D: DelayNs, R: CubeRng>(
        &self,
        cx: &mut EffectContext<'_, D, R>,
    ) -> u32 {
        let mut passes = 0;
        if self.is_empty() {
            return passes;
        }

        while self.run_once(cx) == PlaylistOutcome::Completed {
            passes += 1;
        }

        #[cfg(feature = "esp32-log")]
        println!("cube: playlist cancelled after {} passes", passes);

        passes
    }
}

impl Playlist<DEFAULT_ROTATION_LEN> {
    /// Playlist holding [`DEFAULT_ROTATION`] with stock parameters
    pub fn default_rotation() -> Self {
        let mut playlist = Self::new();
        for id in DEFAULT_ROTATION {
            let pushed = playlist.push_id(id);
            debug_assert!(pushed.is_ok(), "default rotation exceeds its capacity");
        }
        playlist
    }
}
