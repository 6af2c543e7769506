//! Falling drops
//!
//! The cube works as a vertical shift register: every step moves all layers
//! one down, clears the top layer and may start a new drop at the top. A
//! drop only starts above a column that is empty in the three lower layers
//! both before and after the shift, so drops never stack on each other.
//! Pauses get shorter as a drop falls, which looks like acceleration.

use embedded_hal::delay::DelayNs;

use super::{Effect, EffectContext, EffectId};
use crate::coord::{CUBE_SIZE, Coord};
use crate::framebuffer::{ALL_OFF, Framebuffer};
use crate::random::CubeRng;

const TOP: u8 = CUBE_SIZE - 1;

/// Shift steps per iteration, one per layer a drop falls through
pub const FALL_STEPS: u32 = TOP as u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rain {
    pub speed_ms: u32,
    pub iterations: u32,
}

impl Rain {
    pub const fn new(speed_ms: u32, iterations: u32) -> Self {
        Self {
            speed_ms,
            iterations,
        }
    }

    /// Pause after shift step `step` (1-based)
    ///
    /// Step 0 has no acceleration term and pauses for `speed_ms`.
    pub const fn step_delay_ms(&self, step: u32) -> u32 {
        let boost = match self.speed_ms.checked_div(step) {
            Some(boost) => boost,
            None => 0,
        };
        self.speed_ms.saturating_add(boost)
    }
}

impl Effect for Rain {
    const ID: EffectId = EffectId::Rain;

    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        cx.cube.set_all_voxels(ALL_OFF);

        for _ in 0..self.iterations {
            spawn_drop(cx.cube, &mut cx.rng);

            for fall in 1..=FALL_STEPS {
                step(cx.cube, &mut cx.rng);
                cx.pause(self.step_delay_ms(fall));
            }
        }
    }
}

/// Move every layer one down and clear the top layer
pub fn shift_down(cube: &Framebuffer) {
    for z in 0..TOP {
        for y in 0..CUBE_SIZE {
            cube.store_row(z, y, cube.load_row(z + 1, y));
        }
    }
    cube.store_layer(TOP, ALL_OFF);
}

/// One shift step with a chance of a new drop
///
/// Returns the position of the drop placed at the top, if any.
pub fn step<R: CubeRng>(cube: &Framebuffer, rng: &mut R) -> Option<Coord> {
    let y = rng.below(CUBE_SIZE);
    let x = rng.below(CUBE_SIZE);

    let clear_before = column_clear(cube, y, x);
    shift_down(cube);

    if clear_before && column_clear(cube, y, x) {
        let drop = Coord::new_unchecked(TOP, y, x);
        cube.set(drop);
        return Some(drop);
    }
    None
}

/// Start a drop at the top without shifting
fn spawn_drop<R: CubeRng>(cube: &Framebuffer, rng: &mut R) -> Option<Coord> {
    let y = rng.below(CUBE_SIZE);
    let x = rng.below(CUBE_SIZE);

    if !column_clear(cube, y, x) {
        return None;
    }
    let drop = Coord::new_unchecked(TOP, y, x);
    cube.set(drop);
    Some(drop)
}

/// Returns `true` if no voxel below the top layer is lit at column `(y, x)`
fn column_clear(cube: &Framebuffer, y: u8, x: u8) -> bool {
    (0..TOP).all(|z| !cube.get(Coord::new_unchecked(z, y, x)))
}
