//! Pulse from the center outwards
//!
//! Each iteration runs four phases: blank, center block, full cube, center
//! block again. Blank and full phases last twice as long as the others.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::Anchor;
use crate::framebuffer::{ALL_OFF, ALL_ON};
use crate::random::CubeRng;

const INNER_ANCHOR: Anchor = Anchor::new_unchecked(1, 1, 1);

/// Row value of the center block (voxels 1 and 2)
pub const INNER_ROWS: u8 = INNER_ANCHOR.row_bits();

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pulsing {
    pub speed_ms: u32,
    pub iterations: u32,
}

impl Pulsing {
    pub const fn new(speed_ms: u32, iterations: u32) -> Self {
        Self {
            speed_ms,
            iterations,
        }
    }
}

impl Effect for Pulsing {
    const ID: EffectId = EffectId::Pulsing;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        let long_ms = self.speed_ms.saturating_mul(2);
        cx.cube.set_all_voxels(ALL_OFF);

        for _ in 0..self.iterations {
            cx.cube.set_all_voxels(ALL_OFF);
            cx.pause(long_ms);

            show_inner(cx);
            cx.pause(self.speed_ms);

            cx.cube.set_all_voxels(ALL_ON);
            cx.pause(long_ms);

            show_inner(cx);
            cx.pause(self.speed_ms);
        }
    }
}

fn show_inner<D, R>(cx: &EffectContext<'_, D, R>) {
    cx.cube.set_all_voxels(ALL_OFF);
    cx.cube.fill_small_cube(INNER_ANCHOR);
}
