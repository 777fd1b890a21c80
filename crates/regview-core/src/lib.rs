// Register display protocol: strip decoding, raster surface and key encoding
pub mod display;
pub mod keys;
pub mod prelude;
pub mod protocol;
pub mod render;
pub mod surface;

// Re-exports
pub use keys::{KeyCode, NamedKey, encode_key};
pub use protocol::{DisplayUpdate, KeyEvent, ProtocolError};
pub use render::render_strip;
pub use surface::{RasterTarget, Surface};

#[cfg(test)]
mod keys_test;
