//! Convenient imports for consumers of regview-core
//!
//! Pull in everything commonly needed in one line:
//! ```rust
//! use regview_core::prelude::*;
//! ```

// Wire messages
pub use crate::protocol::{DisplayUpdate, KeyEvent, ProtocolError};

// Rendering
pub use crate::render::render_strip;
pub use crate::surface::{BLACK, RasterTarget, Rgba, Surface, TRANSPARENT};

// Keyboard
pub use crate::keys::{KeyCode, NamedKey, encode_key};

// Constants
pub use crate::display::{
    REGISTER_COUNT, REGISTERS_PER_ROW, SCREEN_HEIGHT, SCREEN_WIDTH, STRIP_WIDTH, StripAddress,
};
