//! Layer multiplexing driven by a periodic timer.
//!
//! Only one layer of the cube is lit at a time. Each timer tick blanks the
//! outputs, selects the next layer, latches its two row pairs and switches
//! the outputs back on. The caller owns the timer and calls
//! [`RefreshEngine::tick`] from its interrupt handler.
//!
//! # Usage
//!
//! ```ignore
//! static CUBE: Framebuffer = Framebuffer::new();
//! static ENGINE: Mutex<RefCell<Option<RefreshEngine<'static, Display>>>> =
//!     Mutex::new(RefCell::new(None));
//!
//! let engine = RefreshEngine::new(display, &CUBE, RefreshTiming::default());
//! start_timer(engine.timing().tick_period());
//! critical_section::with(|cs| ENGINE.borrow_ref_mut(cs).replace(engine));
//!
//! #[interrupt]
//! fn TIMER2_COMPA() {
//!     critical_section::with(|cs| {
//!         if let Some(engine) = ENGINE.borrow_ref_mut(cs).as_mut() {
//!             engine.tick().ok();
//!         }
//!     });
//! }
//! ```

use core::fmt;

use embassy_time::Duration;

use crate::coord::CUBE_SIZE;
use crate::framebuffer::Framebuffer;
use crate::{Latch, PhysicalDisplay};

/// Lowest full-cube refresh rate that still looks steady
pub const MIN_CUBE_REFRESH_HZ: u64 = 60;

/// Longest tick period that keeps the cube above [`MIN_CUBE_REFRESH_HZ`].
pub const MAX_TICK_PERIOD: Duration =
    Duration::from_micros(1_000_000 / (MIN_CUBE_REFRESH_HZ * CUBE_SIZE as u64));

/// Tick period of the stock board (16 MHz, /256 prescaler, compare value 10).
pub const DEFAULT_TICK_PERIOD: Duration = Duration::from_micros(176);

/// Error returned when a tick period cannot keep the cube flicker free
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTooSlow {
    pub tick_period: Duration,
}

impl fmt::Display for RefreshTooSlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "tick period of {} us is above the {} us limit",
            self.tick_period.as_micros(),
            MAX_TICK_PERIOD.as_micros()
        )
    }
}

/// Validated timer period for the refresh interrupt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshTiming {
    tick_period: Duration,
}

impl Default for RefreshTiming {
    fn default() -> Self {
        Self {
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }
}

impl RefreshTiming {
    /// Accept a tick period if all four layers are refreshed at least
    /// [`MIN_CUBE_REFRESH_HZ`] times per second.
    pub fn new(tick_period: Duration) -> Result<Self, RefreshTooSlow> {
        if tick_period.as_micros() == 0 || tick_period > MAX_TICK_PERIOD {
            return Err(RefreshTooSlow { tick_period });
        }
        Ok(Self { tick_period })
    }

    pub const fn tick_period(self) -> Duration {
        self.tick_period
    }

    /// Full-cube refresh rate in Hz
    pub const fn cube_refresh_hz(self) -> u64 {
        1_000_000 / (self.tick_period.as_micros() * CUBE_SIZE as u64)
    }
}

/// Layer the refresh engine scans next
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayerCursor(u8);

impl LayerCursor {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn current(self) -> u8 {
        self.0
    }

    /// Move to the next layer, wrapping after the top one
    pub fn advance(&mut self) {
        self.0 = (self.0 + 1) % CUBE_SIZE;
    }
}

/// Scans the framebuffer onto a [`PhysicalDisplay`] one layer per tick
///
/// The engine carries the [`RefreshTiming`] its timer must be programmed
/// with, so only flicker-free tick periods can reach it.
pub struct RefreshEngine<'a, D: PhysicalDisplay> {
    display: D,
    cube: &'a Framebuffer,
    cursor: LayerCursor,
    timing: RefreshTiming,
}

impl<'a, D: PhysicalDisplay> RefreshEngine<'a, D> {
    pub const fn new(display: D, cube: &'a Framebuffer, timing: RefreshTiming) -> Self {
        Self {
            display,
            cube,
            cursor: LayerCursor::new(),
            timing,
        }
    }

    /// Tick period the driving timer has to use
    pub const fn timing(&self) -> RefreshTiming {
        self.timing
    }

    /// Scan the current layer and advance the cursor.
    ///
    /// Returns the layer that was shown. On a display error the cursor is
    /// left in place and the outputs may stay blanked.
    pub fn tick(&mut self) -> Result<u8, D::Error> {
        let layer = self.cursor.current();
        debug_assert!(layer < CUBE_SIZE);

        self.display.set_output_enable(false)?;
        self.display.select_layer(layer)?;
        self.display
            .write_rows(Latch::First, self.cube.packed_pair(layer, 0))?;
        self.display
            .write_rows(Latch::Second, self.cube.packed_pair(layer, 1))?;
        self.display.set_output_enable(true)?;

        self.cursor.advance();
        Ok(layer)
    }

    /// Layer that the next tick will scan
    pub fn next_layer(&self) -> u8 {
        self.cursor.current()
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    /// Give the display back, e.g. to power it down
    pub fn release(self) -> D {
        self.display
    }
}
