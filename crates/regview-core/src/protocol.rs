use crate::display::{STRIP_WIDTH, StripAddress};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("Malformed display update: {0}")]
    Malformed(serde_json::Error),

    #[error("Unable to encode message: {0}")]
    Encode(serde_json::Error),

    #[error("Unexpected binary frame ({0} bytes)")]
    BinaryFrame(usize),
}

/// Inbound: one 16x1 strip of the register display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayUpdate {
    pub register_index: u32,
    pub x: i32,
    pub y: i32,
    pub input: String,
}

impl DisplayUpdate {
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let update: Self = serde_json::from_str(text).map_err(ProtocolError::Malformed)?;
        let len = update.input.encode_utf16().count();
        if len != STRIP_WIDTH {
            debug!(
                "register {} sent {len} positions, expected {STRIP_WIDTH}",
                update.register_index
            );
        }
        Ok(update)
    }

    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    /// Builds the update for a register holding `word`. Bit 15 is the left-most pixel
    /// and `x` is expressed in pixels.
    pub fn for_register(register_index: usize, word: u16) -> Self {
        let addr = StripAddress::from_register_index(register_index);
        Self {
            register_index: register_index as u32,
            x: addr.pixel_column() as i32,
            y: addr.y as i32,
            input: format!("{word:016b}"),
        }
    }

    /// Set/clear state of the strip, left to right. Positions are UTF-16 code
    /// units of `input`. Positions missing from a short `input` are clear,
    /// anything past the 16th is ignored.
    pub fn pixels(&self) -> [bool; STRIP_WIDTH] {
        let mut pixels = [false; STRIP_WIDTH];
        for (pixel, unit) in pixels.iter_mut().zip(self.input.encode_utf16()) {
            *pixel = unit == u16::from(b'1');
        }
        pixels
    }
}

/// Outbound: a key press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: u32,
    pub down: bool,
}

impl KeyEvent {
    pub fn encode(&self) -> Result<String, ProtocolError> {
        serde_json::to_string(self).map_err(ProtocolError::Encode)
    }

    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        serde_json::from_str(text).map_err(ProtocolError::Malformed)
    }
}
