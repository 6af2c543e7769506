//! Layer ladder: each layer lights up alone, bottom to top.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::CUBE_SIZE;
use crate::framebuffer::{ALL_OFF, ALL_ON};
use crate::random::CubeRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerStepping {
    /// How long each layer stays lit
    pub speed_ms: u32,
    /// Number of full sweeps
    pub iterations: u32,
}

impl LayerStepping {
    pub const fn new(speed_ms: u32, iterations: u32) -> Self {
        Self {
            speed_ms,
            iterations,
        }
    }
}

impl Effect for LayerStepping {
    const ID: EffectId = EffectId::LayerStepping;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        for _ in 0..self.iterations {
            cx.cube.set_all_voxels(ALL_OFF);

            for z in 0..CUBE_SIZE {
                cx.cube.store_layer(z, ALL_ON);
                cx.pause(self.speed_ms);
                cx.cube.set_all_voxels(ALL_OFF);
            }
        }
    }
}
