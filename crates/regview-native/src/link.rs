use anyhow::{Context, anyhow};
use crossbeam_channel::{Receiver, Sender};
use futures_util::{SinkExt, StreamExt};
use log::{debug, info, warn};
use regview_app::{Link, LinkEvent};
use std::thread::JoinHandle;
use tokio::sync::mpsc;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;

/// WebSocket link running on its own thread.
///
/// The worker only moves owned strings across the channels; the surface stays
/// with whoever polls this link.
pub struct WsLink {
    event_rx: Receiver<LinkEvent>,
    outbound_tx: mpsc::UnboundedSender<String>,

    // keep-alive
    _worker: JoinHandle<()>,
}

impl WsLink {
    pub fn connect(url: &str) -> anyhow::Result<Self> {
        let (event_tx, event_rx) = crossbeam_channel::unbounded();
        let (outbound_tx, outbound_rx) = mpsc::unbounded_channel();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .context("Failed to build link runtime")?;

        let url = url.to_owned();
        let worker = std::thread::Builder::new()
            .name("regview-link".into())
            .spawn(move || runtime.block_on(run_link(url, event_tx, outbound_rx)))
            .context("Failed to spawn link thread")?;

        Ok(Self {
            event_rx,
            outbound_tx,
            _worker: worker,
        })
    }
}

impl Link for WsLink {
    fn poll_event(&mut self) -> Option<LinkEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&mut self, text: String) -> anyhow::Result<()> {
        self.outbound_tx
            .send(text)
            .map_err(|_| anyhow!("link thread has stopped"))
    }
}

/// Connects once and shuttles frames until either side goes away. There is no
/// reconnection: a closed link stays closed.
async fn run_link(
    url: String,
    event_tx: Sender<LinkEvent>,
    mut outbound_rx: mpsc::UnboundedReceiver<String>,
) {
    info!("connecting to {url}");
    let (socket, _response) = match connect_async(url.as_str()).await {
        Ok(connected) => connected,
        Err(e) => {
            event_tx.send(LinkEvent::Error(e.to_string())).ok();
            event_tx.send(LinkEvent::Closed).ok();
            return;
        }
    };
    event_tx.send(LinkEvent::Opened).ok();

    let (mut sink, mut stream) = socket.split();
    loop {
        tokio::select! {
            inbound = stream.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    if event_tx.send(LinkEvent::Message(text)).is_err() {
                        // UI is gone
                        break;
                    }
                }
                Some(Ok(Message::Binary(bytes))) => {
                    event_tx.send(LinkEvent::Binary(bytes.len())).ok();
                }
                Some(Ok(Message::Close(frame))) => {
                    debug!("close frame: {frame:?}");
                    break;
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    warn!("link read failed: {e}");
                    event_tx.send(LinkEvent::Error(e.to_string())).ok();
                    break;
                }
                None => break,
            },
            outbound = outbound_rx.recv() => match outbound {
                Some(text) => {
                    if let Err(e) = sink.send(Message::Text(text)).await {
                        warn!("link write failed: {e}");
                        event_tx.send(LinkEvent::Error(e.to_string())).ok();
                        break;
                    }
                }
                None => {
                    sink.close().await.ok();
                    break;
                }
            },
        }
    }

    event_tx.send(LinkEvent::Closed).ok();
}
