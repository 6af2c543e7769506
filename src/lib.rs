#![no_std]

pub mod cancel;
pub mod coord;
pub mod effect;
pub mod framebuffer;
pub mod pins;
pub mod playlist;
pub mod random;
pub mod refresh;

pub use cancel::CancelToken;
pub use coord::{Anchor, Coord, CoordinateOutOfRange};
pub use effect::{Effect, EffectContext, EffectId, EffectSlot};
pub use framebuffer::{ALL_OFF, ALL_ON, Frame, Framebuffer};
pub use pins::{CubePins, PinDisplay};
pub use playlist::{Playlist, PlaylistOutcome};
pub use random::{CubeRng, XorShiftRng};
pub use refresh::{LayerCursor, RefreshEngine, RefreshTiming, RefreshTooSlow};
pub use embassy_time::Duration;

/// Latch receiving one packed pair of rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latch {
    /// Rows 0 and 1 of the scanned layer
    First,
    /// Rows 2 and 3 of the scanned layer
    Second,
}

impl Latch {
    pub const fn index(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }
}

/// Abstract cube hardware
///
/// Implement this trait to support different boards. The refresh engine is
/// generic over it, so tests can record calls instead of toggling pins.
pub trait PhysicalDisplay {
    type Error;

    /// Put `layer` on the layer address lines
    fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error>;

    /// Latch a packed row pair (low nibble = first row, high nibble = second)
    fn write_rows(&mut self, latch: Latch, byte: u8) -> Result<(), Self::Error>;

    /// Switch layer and latch outputs on or off
    fn set_output_enable(&mut self, enabled: bool) -> Result<(), Self::Error>;
}
