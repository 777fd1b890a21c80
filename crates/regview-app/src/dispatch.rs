use crate::link::{Link, LinkEvent, LinkState};
use anyhow::Context;
use log::{debug, info, warn};
use regview_core::prelude::*;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DispatchStats {
    pub strips_rendered: u64,
    pub messages_dropped: u64,
    pub keys_sent: u64,
}

/// Owns the link handle and the surface, and routes every event to the
/// decode/render or encode/send path.
///
/// All surface writes happen through `&mut self`, so whoever owns the
/// dispatcher is the single writer.
pub struct Dispatcher<L: Link> {
    link: L,
    surface: Surface,
    state: LinkState,
    stats: DispatchStats,
    last_diagnostic: Option<String>,
    last_key: Option<KeyEvent>,
}

impl<L: Link> Dispatcher<L> {
    pub fn new(link: L, surface: Surface) -> Self {
        Self {
            link,
            surface,
            state: LinkState::Connecting,
            stats: DispatchStats::default(),
            last_diagnostic: None,
            last_key: None,
        }
    }

    /// Handles every event the link has queued. Returns how many were handled.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(event) = self.link.poll_event() {
            self.handle_link_event(event);
            handled += 1;
        }
        handled
    }

    pub fn handle_link_event(&mut self, event: LinkEvent) {
        match event {
            LinkEvent::Opened => {
                info!("link open");
                self.state = LinkState::Open;
            }
            LinkEvent::Message(text) => {
                if let Err(e) = self.handle_message(&text) {
                    self.drop_message(e);
                }
            }
            LinkEvent::Binary(len) => {
                self.drop_message(ProtocolError::BinaryFrame(len));
            }
            LinkEvent::Error(msg) => {
                warn!("link error: {msg}");
                self.last_diagnostic = Some(format!("link error: {msg}"));
            }
            LinkEvent::Closed => {
                info!("link closed");
                self.state = LinkState::Closed;
                self.last_diagnostic = Some("link closed".into());
            }
        }
    }

    fn handle_message(&mut self, text: &str) -> Result<(), ProtocolError> {
        let update = DisplayUpdate::decode(text)?;
        debug!(
            "strip register={} at ({}, {})",
            update.register_index, update.x, update.y
        );
        render_strip(&update, &mut self.surface);
        self.stats.strips_rendered += 1;
        Ok(())
    }

    fn drop_message(&mut self, err: ProtocolError) {
        warn!("dropping message: {err}");
        self.stats.messages_dropped += 1;
        self.last_diagnostic = Some(err.to_string());
    }

    /// Encodes a key press/release and sends it. Unknown keys go out as code 0.
    pub fn handle_key(&mut self, identifier: &str, down: bool) {
        if self.state == LinkState::Closed {
            debug!("link closed, not sending key {identifier:?}");
            return;
        }
        let event = encode_key(identifier, down);
        match self.send_key(event) {
            Ok(()) => {
                debug!("sent key {identifier:?} as {} (down={down})", event.key);
                self.stats.keys_sent += 1;
                self.last_key = Some(event);
            }
            Err(e) => {
                warn!("{e:#}");
                self.last_diagnostic = Some(format!("{e:#}"));
            }
        }
    }

    fn send_key(&mut self, event: KeyEvent) -> anyhow::Result<()> {
        let text = event.encode()?;
        self.link
            .send(text)
            .with_context(|| format!("Failed to send key code {}", event.key))
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn state(&self) -> LinkState {
        self.state
    }

    pub fn stats(&self) -> DispatchStats {
        self.stats
    }

    pub fn last_diagnostic(&self) -> Option<&str> {
        self.last_diagnostic.as_deref()
    }

    pub fn last_key(&self) -> Option<KeyEvent> {
        self.last_key
    }

    pub fn link(&self) -> &L {
        &self.link
    }
}
