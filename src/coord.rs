use core::fmt;

use crate::random::CubeRng;

/// Number of voxels along each axis
pub const CUBE_SIZE: u8 = 4;

/// Highest valid anchor of a 2x2x2 block on any axis
pub const ANCHOR_MAX: u8 = CUBE_SIZE - 2;

/// Error returned when a voxel or block coordinate falls outside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateOutOfRange {
    pub z: u8,
    pub y: u8,
    pub x: u8,
}

impl fmt::Display for CoordinateOutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "coordinate ({}, {}, {}) is outside the cube",
            self.z, self.y, self.x
        )
    }
}

/// Position of a single voxel
///
/// `z` is the layer (bottom to top), `y` the row within a layer and `x` the
/// bit within a row. Every axis is in `0..=3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    z: u8,
    y: u8,
    x: u8,
}

impl Coord {
    /// Validate a voxel position
    pub const fn new(z: u8, y: u8, x: u8) -> Result<Self, CoordinateOutOfRange> {
        if z >= CUBE_SIZE || y >= CUBE_SIZE || x >= CUBE_SIZE {
            return Err(CoordinateOutOfRange { z, y, x });
        }
        Ok(Self { z, y, x })
    }

    /// Build a position that is known to be inside the cube
    pub(crate) const fn new_unchecked(z: u8, y: u8, x: u8) -> Self {
        debug_assert!(z < CUBE_SIZE && y < CUBE_SIZE && x < CUBE_SIZE);
        Self { z, y, x }
    }

    /// Draw a uniformly random position
    pub fn random<R: CubeRng>(rng: &mut R) -> Self {
        let z = rng.below(CUBE_SIZE);
        let y = rng.below(CUBE_SIZE);
        let x = rng.below(CUBE_SIZE);
        Self::new_unchecked(z, y, x)
    }

    pub const fn z(self) -> u8 {
        self.z
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    /// Bit of this voxel within its row
    pub(crate) const fn bit(self) -> u8 {
        1 << self.x
    }
}

/// Lowest corner of a 2x2x2 block
///
/// Every axis is in `0..=2` so the whole block fits inside the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    z: u8,
    y: u8,
    x: u8,
}

impl Anchor {
    /// Validate a block anchor
    pub const fn new(z: u8, y: u8, x: u8) -> Result<Self, CoordinateOutOfRange> {
        if z > ANCHOR_MAX || y > ANCHOR_MAX || x > ANCHOR_MAX {
            return Err(CoordinateOutOfRange { z, y, x });
        }
        Ok(Self { z, y, x })
    }

    pub(crate) const fn new_unchecked(z: u8, y: u8, x: u8) -> Self {
        debug_assert!(z <= ANCHOR_MAX && y <= ANCHOR_MAX && x <= ANCHOR_MAX);
        Self { z, y, x }
    }

    /// Draw a uniformly random anchor
    pub fn random<R: CubeRng>(rng: &mut R) -> Self {
        let z = rng.below(ANCHOR_MAX + 1);
        let y = rng.below(ANCHOR_MAX + 1);
        let x = rng.below(ANCHOR_MAX + 1);
        Self::new_unchecked(z, y, x)
    }

    pub const fn z(self) -> u8 {
        self.z
    }

    pub const fn y(self) -> u8 {
        self.y
    }

    pub const fn x(self) -> u8 {
        self.x
    }

    /// Row bits covered by the block: `{x, x + 1}`
    pub(crate) const fn row_bits(self) -> u8 {
        (1 << self.x) | (1 << (self.x + 1))
    }
}
