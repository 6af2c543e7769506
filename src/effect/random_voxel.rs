//! Random flicker
//!
//! Every iteration starts from a blank cube and toggles `voxel_count`
//! randomly drawn voxels. Draws are independent, so a voxel hit twice ends
//! up off again.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::Coord;
use crate::framebuffer::ALL_OFF;
use crate::random::CubeRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomVoxel {
    pub speed_ms: u32,
    pub iterations: u32,
    /// Toggles per iteration
    pub voxel_count: u32,
}

impl RandomVoxel {
    pub const fn new(speed_ms: u32, iterations: u32, voxel_count: u32) -> Self {
        Self {
            speed_ms,
            iterations,
            voxel_count,
        }
    }
}

impl Effect for RandomVoxel {
    const ID: EffectId = EffectId::RandomVoxel;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        for _ in 0..self.iterations {
            cx.cube.set_all_voxels(ALL_OFF);
            for _ in 0..self.voxel_count {
                let coord = Coord::random(&mut cx.rng);
                cx.cube.invert(coord);
            }
            cx.pause(self.speed_ms);
        }
    }
}
