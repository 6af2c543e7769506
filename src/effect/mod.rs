//! Effect system with compile-time known effect variants
//!
//! Every effect is a blocking procedure over the shared [`Framebuffer`]: it
//! mutates the buffer, pauses through the context's delay and returns once
//! its iterations are done. The refresh interrupt keeps scanning the buffer
//! while an effect is paused.

mod blinking;
mod cube_in_cube;
mod layer_demo;
mod layer_stepping;
mod pulsing;
pub mod rain;
mod random_voxel;

pub use blinking::Blinking;
pub use cube_in_cube::{CubeInCube, reflect};
pub use layer_demo::{FLOOD_POLL_MS, LayerDemo};
pub use layer_stepping::LayerStepping;
pub use pulsing::{INNER_ROWS, Pulsing};
pub use rain::Rain;
pub use random_voxel::RandomVoxel;

use embedded_hal::delay::DelayNs;

use crate::cancel::CancelToken;
use crate::framebuffer::Framebuffer;
use crate::random::CubeRng;

const EFFECT_NAME_LAYER_DEMO: &str = "layer_demo";
const EFFECT_NAME_LAYER_STEPPING: &str = "layer_stepping";
const EFFECT_NAME_BLINKING: &str = "blinking";
const EFFECT_NAME_PULSING: &str = "pulsing";
const EFFECT_NAME_RANDOM_VOXEL: &str = "random_voxel";
const EFFECT_NAME_RAIN: &str = "rain";
const EFFECT_NAME_CUBE_IN_CUBE: &str = "cube_in_cube";

const EFFECT_ID_LAYER_DEMO: u8 = 0;
const EFFECT_ID_LAYER_STEPPING: u8 = 1;
const EFFECT_ID_BLINKING: u8 = 2;
const EFFECT_ID_PULSING: u8 = 3;
const EFFECT_ID_RANDOM_VOXEL: u8 = 4;
const EFFECT_ID_RAIN: u8 = 5;
const EFFECT_ID_CUBE_IN_CUBE: u8 = 6;

/// Everything an effect needs while it runs
pub struct EffectContext<'a, D, R> {
    /// Shared framebuffer, also read by the refresh interrupt
    pub cube: &'a Framebuffer,
    /// Blocking delay used between animation steps
    pub delay: D,
    /// Random source for effects with random draws
    pub rng: R,
    /// Stops effects that would otherwise never return
    pub cancel: &'a CancelToken,
}

impl<'a, D: DelayNs, R: CubeRng> EffectContext<'a, D, R> {
    pub const fn new(cube: &'a Framebuffer, delay: D, rng: R, cancel: &'a CancelToken) -> Self {
        Self {
            cube,
            delay,
            rng,
            cancel,
        }
    }

    /// Block for `ms` milliseconds
    pub fn pause(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}

pub trait Effect {
    /// Identifier of the effect
    const ID: EffectId;

    /// Run the effect to completion
    fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    /// Layer sweep that speeds up until the cube floods; never finishes by itself
    LayerDemo(LayerDemo),
    /// Bottom-to-top layer ladder
    LayerStepping(LayerStepping),
    /// Whole cube off/on
    Blinking(Blinking),
    /// Center block growing to the full cube and back
    Pulsing(Pulsing),
    /// Random voxel flicker
    RandomVoxel(RandomVoxel),
    /// Falling drops
    Rain(Rain),
    /// 2x2x2 block wandering inside the cube
    CubeInCube(CubeInCube),
}

/// Known effect ids that can be requested.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum EffectId {
    LayerDemo = EFFECT_ID_LAYER_DEMO,
    LayerStepping = EFFECT_ID_LAYER_STEPPING,
    Blinking = EFFECT_ID_BLINKING,
    Pulsing = EFFECT_ID_PULSING,
    RandomVoxel = EFFECT_ID_RANDOM_VOXEL,
    Rain = EFFECT_ID_RAIN,
    CubeInCube = EFFECT_ID_CUBE_IN_CUBE,
}

impl EffectId {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            EFFECT_ID_LAYER_DEMO => Self::LayerDemo,
            EFFECT_ID_LAYER_STEPPING => Self::LayerStepping,
            EFFECT_ID_BLINKING => Self::Blinking,
            EFFECT_ID_PULSING => Self::Pulsing,
            EFFECT_ID_RANDOM_VOXEL => Self::RandomVoxel,
            EFFECT_ID_RAIN => Self::Rain,
            EFFECT_ID_CUBE_IN_CUBE => Self::CubeInCube,
            _ => return None,
        })
    }

    /// Effect with the stock parameters of the reference firmware
    pub const fn default_slot(self) -> EffectSlot {
        match self {
            Self::LayerDemo => EffectSlot::LayerDemo(LayerDemo::new(200, 2)),
            Self::LayerStepping => EffectSlot::LayerStepping(LayerStepping::new(300, 30)),
            Self::Blinking => EffectSlot::Blinking(Blinking::new(500, 10)),
            Self::Pulsing => EffectSlot::Pulsing(Pulsing::new(150, 10)),
            Self::RandomVoxel => EffectSlot::RandomVoxel(RandomVoxel::new(200, 30, 50)),
            Self::Rain => EffectSlot::Rain(Rain::new(75, 200)),
            Self::CubeInCube => EffectSlot::CubeInCube(CubeInCube::new(250, 30)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LayerDemo => EFFECT_NAME_LAYER_DEMO,
            Self::LayerStepping => EFFECT_NAME_LAYER_STEPPING,
            Self::Blinking => EFFECT_NAME_BLINKING,
            Self::Pulsing => EFFECT_NAME_PULSING,
            Self::RandomVoxel => EFFECT_NAME_RANDOM_VOXEL,
            Self::Rain => EFFECT_NAME_RAIN,
            Self::CubeInCube => EFFECT_NAME_CUBE_IN_CUBE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            EFFECT_NAME_LAYER_DEMO => Some(Self::LayerDemo),
            EFFECT_NAME_LAYER_STEPPING => Some(Self::LayerStepping),
            EFFECT_NAME_BLINKING => Some(Self::Blinking),
            EFFECT_NAME_PULSING => Some(Self::Pulsing),
            EFFECT_NAME_RANDOM_VOXEL => Some(Self::RandomVoxel),
            EFFECT_NAME_RAIN => Some(Self::Rain),
            EFFECT_NAME_CUBE_IN_CUBE => Some(Self::CubeInCube),
            _ => None,
        }
    }
}

impl EffectSlot {
    /// Get the effect ID for external observation
    pub fn id(&self) -> EffectId {
        match self {
            Self::LayerDemo(_) => LayerDemo::ID,
            Self::LayerStepping(_) => LayerStepping::ID,
            Self::Blinking(_) => Blinking::ID,
            Self::Pulsing(_) => Pulsing::ID,
            Self::RandomVoxel(_) => RandomVoxel::ID,
            Self::Rain(_) => Rain::ID,
            Self::CubeInCube(_) => CubeInCube::ID,
        }
    }

    /// Returns `true` if the effect only stops when cancelled
    pub fn runs_until_cancelled(&self) -> bool {
        matches!(self, Self::LayerDemo(_))
    }

    /// Run the effect
    pub fn run<D: DelayNs, R: CubeRng>(&self, cx: &mut EffectContext<'_, D, R>) {
        match self {
            Self::LayerDemo(effect) => effect.run(cx),
            Self::LayerStepping(effect) => effect.run(cx),
            Self::Blinking(effect) => effect.run(cx),
            Self::Pulsing(effect) => effect.run(cx),
            Self::RandomVoxel(effect) => effect.run(cx),
            Self::Rain(effect) => effect.run(cx),
            Self::CubeInCube(effect) => effect.run(cx),
        }
    }
}
