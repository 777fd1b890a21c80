use regview_core::display::{SCREEN_HEIGHT, SCREEN_WIDTH};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 9001;

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    /// WebSocket endpoint of the device
    pub url: String,
    pub width: usize,
    pub height: usize,
    /// Initial window scale factor (native only)
    pub scale: f32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            url: Self::endpoint(DEFAULT_HOST, DEFAULT_PORT),
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            scale: 2.0,
        }
    }
}

impl ViewerConfig {
    pub fn endpoint(host: &str, port: u16) -> String {
        format!("ws://{host}:{port}")
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Room for the scaled display plus the status bar.
    pub fn window_size(&self) -> [f32; 2] {
        [
            self.width as f32 * self.scale,
            self.height as f32 * self.scale + 28.0,
        ]
    }
}
