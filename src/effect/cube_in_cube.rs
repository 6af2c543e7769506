//! A 2x2x2 block wandering inside the cube
//!
//! The block moves one voxel along Z, then Y, then X per iteration, in a
//! direction drawn at random for each axis. A move that would push the block
//! out of the cube is turned around.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::{ANCHOR_MAX, Anchor};
use crate::framebuffer::{ALL_OFF, Framebuffer};
use crate::random::CubeRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CubeInCube {
    pub speed_ms: u32,
    pub iterations: u32,
}

impl CubeInCube {
    pub const fn new(speed_ms: u32, iterations: u32) -> Self {
        Self {
            speed_ms,
            iterations,
        }
    }
}

impl Effect for CubeInCube {
    const ID: EffectId = EffectId::CubeInCube;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        let mut anchor = Anchor::random(&mut cx.rng);

        for _ in 0..self.iterations {
            let up_z = cx.rng.below(2) == 1;
            let up_y = cx.rng.below(2) == 1;
            let up_x = cx.rng.below(2) == 1;

            show(cx.cube, anchor);
            cx.pause(self.speed_ms);

            anchor = Anchor::new_unchecked(reflect(anchor.z(), up_z), anchor.y(), anchor.x());
            show(cx.cube, anchor);
            cx.pause(self.speed_ms);

            anchor = Anchor::new_unchecked(anchor.z(), reflect(anchor.y(), up_y), anchor.x());
            show(cx.cube, anchor);
            cx.pause(self.speed_ms);

            anchor = Anchor::new_unchecked(anchor.z(), anchor.y(), reflect(anchor.x(), up_x));
        }
    }
}

/// Move an anchor coordinate one step, bouncing off the ends of `0..=2`
pub const fn reflect(position: u8, up: bool) -> u8 {
    if up {
        if position < ANCHOR_MAX {
            position + 1
        } else {
            position - 1
        }
    } else if position > 0 {
        position - 1
    } else {
        position + 1
    }
}

fn show(cube: &Framebuffer, anchor: Anchor) {
    cube.set_all_voxels(ALL_OFF);
    cube.fill_small_cube(anchor);
}
