/// Pixels carried by a single strip update.
pub const STRIP_WIDTH: usize = 16;

/// The device lays its registers out 32 to a row.
pub const REGISTERS_PER_ROW: usize = 32;

/// Two 4K register banks.
pub const REGISTER_COUNT: usize = 8192;

pub const SCREEN_WIDTH: usize = REGISTERS_PER_ROW * STRIP_WIDTH; // 512
pub const SCREEN_HEIGHT: usize = REGISTER_COUNT / REGISTERS_PER_ROW; // 256

/// Where the device places a register when it emits an update for it.
///
/// `x` counts registers within the row, not pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripAddress {
    pub x: usize,
    pub y: usize,
}

impl StripAddress {
    pub fn from_register_index(register_index: usize) -> Self {
        Self {
            x: register_index % REGISTERS_PER_ROW,
            y: register_index / REGISTERS_PER_ROW,
        }
    }

    pub fn register_index(&self) -> usize {
        self.y * REGISTERS_PER_ROW + self.x
    }

    /// Left-most pixel column covered by this register.
    pub fn pixel_column(&self) -> usize {
        self.x * STRIP_WIDTH
    }
}
