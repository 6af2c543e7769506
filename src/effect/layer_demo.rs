//! Layer sweep that keeps speeding up
//!
//! Lights one layer at a time, bottom to top, shortening the pause after
//! every layer. Once the pause reaches zero the whole cube stays lit. The
//! effect has no natural end: it returns only when the context's
//! [`CancelToken`](crate::cancel::CancelToken) is cancelled.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::CUBE_SIZE;
use crate::framebuffer::{ALL_OFF, ALL_ON};
use crate::random::CubeRng;

/// Pause between cancellation checks once the cube is flooded
pub const FLOOD_POLL_MS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerDemo {
    /// Pause after the first layer
    pub start_ms: u32,
    /// How much shorter each following pause is
    pub step_ms: u32,
}

impl LayerDemo {
    pub const fn new(start_ms: u32, step_ms: u32) -> Self {
        Self { start_ms, step_ms }
    }
}

impl Effect for LayerDemo {
    const ID: EffectId = EffectId::LayerDemo;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        let mut speed_ms = self.start_ms;
        cx.cube.set_all_voxels(ALL_OFF);

        while !cx.cancel.is_cancelled() {
            if speed_ms == 0 {
                cx.cube.set_all_voxels(ALL_ON);
                cx.pause(FLOOD_POLL_MS);
                continue;
            }

            for z in 0..CUBE_SIZE {
                cx.cube.set_all_voxels(ALL_OFF);
                cx.cube.store_layer(z, ALL_ON);
                cx.pause(speed_ms);
                speed_ms = speed_ms.saturating_sub(self.step_ms);
                if cx.cancel.is_cancelled() {
                    return;
                }
            }
        }
    }
}
