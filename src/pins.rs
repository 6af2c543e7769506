//! GPIO backed cube display
//!
//! Wiring of the reference board:
//! - an 8-bit data bus shared by both latches (low nibble = first row of a
//!   pair, high nibble = second row)
//! - two layer address lines and an active-low layer enable
//! - two latch clock lines (data is taken on the rising edge) and an
//!   active-low latch output enable shared by both latches

use embedded_hal::digital::OutputPin;

use crate::{Latch, PhysicalDisplay};

/// Output pins driving the cube
///
/// All pins share one type; HALs usually offer a type-erased output for this.
pub struct CubePins<P> {
    /// Data bus, bit 0 first
    pub data: [P; 8],
    /// Layer address, bit 0 first
    pub layer_select: [P; 2],
    /// Layer decoder enable (active low)
    pub layer_enable: P,
    /// Clock line of each latch
    pub latch_clock: [P; 2],
    /// Output enable of both latches (active low)
    pub latch_enable: P,
}

/// [`PhysicalDisplay`] driving the cube through GPIO pins
pub struct PinDisplay<P> {
    pins: CubePins<P>,
}

impl<P: OutputPin> PinDisplay<P> {
    /// Take the pins and blank the cube
    pub fn new(pins: CubePins<P>) -> Result<Self, P::Error> {
        let mut display = Self { pins };
        display.set_output_enable(false)?;
        for clock in &mut display.pins.latch_clock {
            clock.set_low()?;
        }
        Ok(display)
    }

    pub fn release(self) -> CubePins<P> {
        self.pins
    }

    fn write_bus(&mut self, byte: u8) -> Result<(), P::Error> {
        for (bit, pin) in self.pins.data.iter_mut().enumerate() {
            pin.set_state(((byte >> bit) & 1 == 1).into())?;
        }
        Ok(())
    }
}

impl<P: OutputPin> PhysicalDisplay for PinDisplay<P> {
    type Error = P::Error;

    fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error> {
        for (bit, pin) in self.pins.layer_select.iter_mut().enumerate() {
            pin.set_state(((layer >> bit) & 1 == 1).into())?;
        }
        Ok(())
    }

    fn write_rows(&mut self, latch: Latch, byte: u8) -> Result<(), Self::Error> {
        self.write_bus(byte)?;
        for clock in &mut self.pins.latch_clock {
            clock.set_low()?;
        }
        self.pins.latch_clock[latch.index()].set_high()
    }

    fn set_output_enable(&mut self, enabled: bool) -> Result<(), Self::Error> {
        if enabled {
            self.pins.layer_enable.set_low()?;
            self.pins.latch_enable.set_low()
        } else {
            self.pins.latch_enable.set_high()?;
            self.pins.layer_enable.set_high()
        }
    }
}
