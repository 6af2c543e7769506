use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::framebuffer::{ALL_OFF, ALL_ON};
use crate::random::CubeRng;

/// Whole cube blinking; leaves every voxel on when done
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blinking {
    pub speed_ms: u32,
    pub iterations: u32,
}

impl Blinking {
    pub const fn new(speed_ms: u32, iterations: u32) -> Self {
        Self {
            speed_ms,
            iterations,
        }
    }
}

impl Effect for Blinking {
    const ID: EffectId = EffectId::Blinking;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        for _ in 0..self.iterations {
            cx.cube.set_all_voxels(ALL_OFF);
            cx.pause(self.speed_ms);
            cx.cube.set_all_voxels(ALL_ON);
            cx.pause(self.speed_ms);
        }

        cx.cube.set_all_voxels(ALL_ON);
    }
}
