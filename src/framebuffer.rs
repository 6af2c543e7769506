//! Shared voxel framebuffer
//!
//! Sixteen 4-bit rows (4 layers x 4 rows), one bit per voxel. The buffer is
//! written by effects running in the foreground and read by the refresh
//! interrupt, so rows are stored as atomics and every read-modify-write runs
//! inside a critical section.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::coord::{Anchor, CUBE_SIZE, Coord, CoordinateOutOfRange};

/// Bits of a row that map to voxels
pub const ROW_MASK: u8 = 0x0F;

/// Row value with every voxel off
pub const ALL_OFF: u8 = 0x00;

/// Row value with every voxel on
pub const ALL_ON: u8 = 0x0F;

const LAYERS: usize = CUBE_SIZE as usize;
const ROWS: usize = CUBE_SIZE as usize;

/// Plain copy of the framebuffer contents, indexed `[z][y]`
pub type Frame = [[u8; ROWS]; LAYERS];

/// On/off state of all 64 voxels
#[derive(Debug)]
pub struct Framebuffer {
    rows: [[AtomicU8; ROWS]; LAYERS],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Framebuffer {
    /// Create a cleared framebuffer
    pub const fn new() -> Self {
        Self {
            rows: [const { [const { AtomicU8::new(ALL_OFF) }; ROWS] }; LAYERS],
        }
    }

    /// Write `mask` into every row
    ///
    /// Usually [`ALL_OFF`] or [`ALL_ON`]; bits above the low nibble are dropped.
    pub fn set_all_voxels(&self, mask: u8) {
        for layer in &self.rows {
            for row in layer {
                row.store(mask & ROW_MASK, Ordering::Relaxed);
            }
        }
    }

    pub fn set_voxel(&self, z: u8, y: u8, x: u8) -> Result<(), CoordinateOutOfRange> {
        self.set(Coord::new(z, y, x)?);
        Ok(())
    }

    pub fn clear_voxel(&self, z: u8, y: u8, x: u8) -> Result<(), CoordinateOutOfRange> {
        self.clear(Coord::new(z, y, x)?);
        Ok(())
    }

    pub fn get_voxel(&self, z: u8, y: u8, x: u8) -> Result<bool, CoordinateOutOfRange> {
        Ok(self.get(Coord::new(z, y, x)?))
    }

    pub fn invert_voxel(&self, z: u8, y: u8, x: u8) -> Result<(), CoordinateOutOfRange> {
        self.invert(Coord::new(z, y, x)?);
        Ok(())
    }

    /// Light a 2x2x2 block anchored at `(z, y, x)`
    ///
    /// The four rows touched by the block are overwritten, so other voxels in
    /// those rows are switched off.
    pub fn set_small_cube(&self, z: u8, y: u8, x: u8) -> Result<(), CoordinateOutOfRange> {
        self.fill_small_cube(Anchor::new(z, y, x)?);
        Ok(())
    }

    /// Switch a voxel on
    pub fn set(&self, coord: Coord) {
        self.update_row(coord.z(), coord.y(), |row| row | coord.bit());
    }

    /// Switch a voxel off
    pub fn clear(&self, coord: Coord) {
        self.update_row(coord.z(), coord.y(), |row| row & !coord.bit());
    }

    pub fn get(&self, coord: Coord) -> bool {
        self.load_row(coord.z(), coord.y()) & coord.bit() != 0
    }

    /// Toggle a voxel
    pub fn invert(&self, coord: Coord) {
        self.update_row(coord.z(), coord.y(), |row| row ^ coord.bit());
    }

    /// Overwrite the four rows of a 2x2x2 block with the block's bit pair
    pub fn fill_small_cube(&self, anchor: Anchor) {
        let bits = anchor.row_bits();
        let (z, y) = (anchor.z(), anchor.y());
        self.store_row(z, y, bits);
        self.store_row(z, y + 1, bits);
        self.store_row(z + 1, y, bits);
        self.store_row(z + 1, y + 1, bits);
    }

    /// Read one row, masked to its voxel bits
    pub fn row(&self, z: u8, y: u8) -> Result<u8, CoordinateOutOfRange> {
        check_row(z, y)?;
        Ok(self.load_row(z, y))
    }

    /// Overwrite one row
    pub fn set_row(&self, z: u8, y: u8, bits: u8) -> Result<(), CoordinateOutOfRange> {
        check_row(z, y)?;
        self.store_row(z, y, bits);
        Ok(())
    }

    /// Overwrite every row of layer `z` with `mask`
    pub fn fill_layer(&self, z: u8, mask: u8) -> Result<(), CoordinateOutOfRange> {
        check_row(z, 0)?;
        self.store_layer(z, mask);
        Ok(())
    }

    /// Pack two rows of layer `z` into one latch byte
    ///
    /// `pair` 0 packs rows 0 (low nibble) and 1 (high nibble), `pair` 1 packs
    /// rows 2 and 3. A `pair` above 1 is reported with the first row it
    /// would read.
    pub fn row_pair(&self, z: u8, pair: u8) -> Result<u8, CoordinateOutOfRange> {
        check_row(z, pair.saturating_mul(2))?;
        Ok(self.packed_pair(z, pair))
    }

    /// Copy the whole buffer
    pub fn snapshot(&self) -> Frame {
        let mut frame = [[ALL_OFF; ROWS]; LAYERS];
        for (z, layer) in (0..CUBE_SIZE).zip(frame.iter_mut()) {
            for (y, row) in (0..CUBE_SIZE).zip(layer.iter_mut()) {
                *row = self.load_row(z, y);
            }
        }
        frame
    }

    /// Overwrite the whole buffer
    pub fn load(&self, frame: &Frame) {
        for (z, layer) in (0..CUBE_SIZE).zip(frame.iter()) {
            for (y, row) in (0..CUBE_SIZE).zip(layer.iter()) {
                self.store_row(z, y, *row);
            }
        }
    }

    /// Number of voxels currently on
    pub fn lit_count(&self) -> u32 {
        self.snapshot()
            .iter()
            .flatten()
            .map(|row| row.count_ones())
            .sum()
    }

    pub(crate) fn load_row(&self, z: u8, y: u8) -> u8 {
        self.cell(z, y).load(Ordering::Relaxed) & ROW_MASK
    }

    pub(crate) fn store_row(&self, z: u8, y: u8, bits: u8) {
        self.cell(z, y).store(bits & ROW_MASK, Ordering::Relaxed);
    }

    pub(crate) fn store_layer(&self, z: u8, mask: u8) {
        for y in 0..CUBE_SIZE {
            self.store_row(z, y, mask);
        }
    }

    /// Latch byte for a layer the caller knows is valid
    pub(crate) fn packed_pair(&self, z: u8, pair: u8) -> u8 {
        debug_assert!(pair < 2);
        let low = self.load_row(z, pair * 2);
        let high = self.load_row(z, pair * 2 + 1);
        low | (high << 4)
    }

    fn cell(&self, z: u8, y: u8) -> &AtomicU8 {
        debug_assert!(z < CUBE_SIZE && y < CUBE_SIZE);
        &self.rows[z as usize][y as usize]
    }

    /// Read-modify-write a row without racing the refresh interrupt
    fn update_row(&self, z: u8, y: u8, update: impl FnOnce(u8) -> u8) {
        let cell = self.cell(z, y);
        critical_section::with(|_| {
            let current = cell.load(Ordering::Relaxed) & ROW_MASK;
            cell.store(update(current) & ROW_MASK, Ordering::Relaxed);
        });
    }
}

fn check_row(z: u8, y: u8) -> Result<(), CoordinateOutOfRange> {
    Coord::new(z, y, 0).map(|_| ())
}
