#![allow(dead_code)]

use core::cell::RefCell;
use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use myrtio_cube_composer::{CancelToken, CubeRng, Frame, Framebuffer, Latch, PhysicalDisplay};

/// Delay that returns immediately and snapshots the cube at every pause
pub struct RecordingDelay<'a> {
    cube: &'a Framebuffer,
    pub pauses: Vec<u32>,
    pub frames: Vec<Frame>,
    cancel_at: Option<(&'a CancelToken, usize)>,
}

impl<'a> RecordingDelay<'a> {
    pub fn new(cube: &'a Framebuffer) -> Self {
        Self {
            cube,
            pauses: Vec::new(),
            frames: Vec::new(),
            cancel_at: None,
        }
    }

    /// Cancel `token` once `pauses` pauses have been recorded
    pub fn cancel_after(mut self, token: &'a CancelToken, pauses: usize) -> Self {
        self.cancel_at = Some((token, pauses));
        self
    }

    fn record(&mut self, ms: u32) {
        self.pauses.push(ms);
        self.frames.push(self.cube.snapshot());
        if let Some((token, after)) = self.cancel_at {
            if self.pauses.len() >= after {
                token.cancel();
            }
        }
    }
}

impl DelayNs for RecordingDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.record(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(ms);
    }
}

/// Random source replaying a fixed list of values
pub struct ScriptedRng {
    values: Vec<u32>,
    position: usize,
}

impl ScriptedRng {
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.to_vec(),
            position: 0,
        }
    }
}

impl CubeRng for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayCall {
    OutputEnable(bool),
    SelectLayer(u8),
    WriteRows(Latch, u8),
}

/// Display recording every call made by the refresh engine
#[derive(Default)]
pub struct RecordingDisplay {
    pub calls: Vec<DisplayCall>,
    /// Fail every layer selection when set
    pub fail_select: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayFault;

impl PhysicalDisplay for RecordingDisplay {
    type Error = DisplayFault;

    fn select_layer(&mut self, layer: u8) -> Result<(), Self::Error> {
        if self.fail_select {
            return Err(DisplayFault);
        }
        self.calls.push(DisplayCall::SelectLayer(layer));
        Ok(())
    }

    fn write_rows(&mut self, latch: Latch, byte: u8) -> Result<(), Self::Error> {
        self.calls.push(DisplayCall::WriteRows(latch, byte));
        Ok(())
    }

    fn set_output_enable(&mut self, enabled: bool) -> Result<(), Self::Error> {
        self.calls.push(DisplayCall::OutputEnable(enabled));
        Ok(())
    }
}

/// Pin levels and their change history, indexed by pin id
#[derive(Default)]
pub struct PinBoard {
    pub levels: RefCell<[bool; 16]>,
    pub history: RefCell<Vec<(usize, bool)>>,
}

pub struct TestPin<'a> {
    id: usize,
    board: &'a PinBoard,
}

impl<'a> TestPin<'a> {
    pub fn new(id: usize, board: &'a PinBoard) -> Self {
        Self { id, board }
    }

    fn set(&mut self, level: bool) {
        self.board.levels.borrow_mut()[self.id] = level;
        self.board.history.borrow_mut().push((self.id, level));
    }
}

impl ErrorType for TestPin<'_> {
    type Error = Infallible;
}

impl OutputPin for TestPin<'_> {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true);
        Ok(())
    }
}
