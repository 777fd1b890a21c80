/// Lifecycle and payload signals coming off the device link, in delivery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    Opened,
    Message(String),
    /// A binary frame arrived; only its size is kept.
    Binary(usize),
    Error(String),
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    Connecting,
    Open,
    Closed,
}

impl LinkState {
    pub fn label(self) -> &'static str {
        match self {
            LinkState::Connecting => "connecting",
            LinkState::Open => "open",
            LinkState::Closed => "closed",
        }
    }
}

/// A bidirectional text channel to the device.
///
/// Implementations queue inbound events until the UI polls them; `send` never waits for
/// an acknowledgment.
pub trait Link {
    fn poll_event(&mut self) -> Option<LinkEvent>;
    fn send(&mut self, text: String) -> anyhow::Result<()>;
}
