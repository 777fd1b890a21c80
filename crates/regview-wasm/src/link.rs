use anyhow::anyhow;
use regview_app::{Link, LinkEvent};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{BinaryType, CloseEvent, Event, MessageEvent, WebSocket};

type EventQueue = Rc<RefCell<VecDeque<LinkEvent>>>;

/// Browser WebSocket whose callbacks queue `LinkEvent`s for the app to poll.
pub struct WebLink {
    socket: WebSocket,
    queue: EventQueue,
}

impl WebLink {
    pub fn connect(url: &str) -> Result<Self, JsValue> {
        let socket = WebSocket::new(url)?;
        socket.set_binary_type(BinaryType::Arraybuffer);
        let queue: EventQueue = Rc::new(RefCell::new(VecDeque::new()));

        let q = queue.clone();
        let on_open = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            q.borrow_mut().push_back(LinkEvent::Opened);
        });
        socket.set_onopen(Some(on_open.as_ref().unchecked_ref()));
        on_open.forget();

        let q = queue.clone();
        let on_message = Closure::<dyn FnMut(MessageEvent)>::new(move |event: MessageEvent| {
            let data = event.data();
            let link_event = match data.as_string() {
                Some(text) => LinkEvent::Message(text),
                None => {
                    let len = data
                        .dyn_ref::<js_sys::ArrayBuffer>()
                        .map_or(0, |buf| buf.byte_length() as usize);
                    LinkEvent::Binary(len)
                }
            };
            q.borrow_mut().push_back(link_event);
        });
        socket.set_onmessage(Some(on_message.as_ref().unchecked_ref()));
        on_message.forget();

        let q = queue.clone();
        let on_error = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            q.borrow_mut()
                .push_back(LinkEvent::Error(format!("WebSocket {}", event.type_())));
        });
        socket.set_onerror(Some(on_error.as_ref().unchecked_ref()));
        on_error.forget();

        let q = queue.clone();
        let on_close = Closure::<dyn FnMut(CloseEvent)>::new(move |event: CloseEvent| {
            log::debug!("close code={} reason={:?}", event.code(), event.reason());
            q.borrow_mut().push_back(LinkEvent::Closed);
        });
        socket.set_onclose(Some(on_close.as_ref().unchecked_ref()));
        on_close.forget();

        Ok(Self { socket, queue })
    }
}

impl Link for WebLink {
    fn poll_event(&mut self) -> Option<LinkEvent> {
        self.queue.borrow_mut().pop_front()
    }

    fn send(&mut self, text: String) -> anyhow::Result<()> {
        self.socket
            .send_with_str(&text)
            .map_err(|e| anyhow!("WebSocket send failed: {e:?}"))
    }
}
