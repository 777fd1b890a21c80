#[cfg(test)]
mod test {
    use crate::dispatch::Dispatcher;
    use crate::link::{Link, LinkEvent, LinkState};
    use anyhow::anyhow;
    use regview_core::prelude::*;
    use std::collections::VecDeque;

    #[derive(Default)]
    struct MockLink {
        inbound: VecDeque<LinkEvent>,
        sent: Vec<String>,
        fail_sends: bool,
    }

    impl MockLink {
        fn with_events(events: impl IntoIterator<Item = LinkEvent>) -> Self {
            Self {
                inbound: events.into_iter().collect(),
                ..Default::default()
            }
        }
    }

    impl Link for MockLink {
        fn poll_event(&mut self) -> Option<LinkEvent> {
            self.inbound.pop_front()
        }

        fn send(&mut self, text: String) -> anyhow::Result<()> {
            if self.fail_sends {
                return Err(anyhow!("socket is gone"));
            }
            self.sent.push(text);
            Ok(())
        }
    }

    fn dispatcher(link: MockLink) -> Dispatcher<MockLink> {
        Dispatcher::new(link, Surface::new(SCREEN_WIDTH, SCREEN_HEIGHT))
    }

    #[test]
    fn test_open_then_strip_renders() {
        let mut d = dispatcher(MockLink::with_events([
            LinkEvent::Opened,
            LinkEvent::Message(
                r#"{"register_index":0,"x":0,"y":0,"input":"1000000000000000"}"#.into(),
            ),
        ]));
        assert_eq!(d.state(), LinkState::Connecting);

        assert_eq!(d.pump(), 2);
        assert_eq!(d.state(), LinkState::Open);
        assert_eq!(d.surface().pixel(0, 0), Some(BLACK));
        for x in 1..16 {
            assert_eq!(d.surface().pixel(x, 0), Some(TRANSPARENT));
        }
        assert_eq!(d.stats().strips_rendered, 1);
    }

    #[test]
    fn test_messages_apply_in_delivery_order() {
        let mut d = dispatcher(MockLink::with_events([
            LinkEvent::Message(
                r#"{"register_index":1,"x":16,"y":4,"input":"1111111111111111"}"#.into(),
            ),
            LinkEvent::Message(
                r#"{"register_index":1,"x":16,"y":4,"input":"0000000000000001"}"#.into(),
            ),
        ]));
        d.pump();

        assert!((16..31).all(|x| d.surface().pixel(x, 4) == Some(TRANSPARENT)));
        assert_eq!(d.surface().pixel(31, 4), Some(BLACK));
    }

    #[test]
    fn test_malformed_message_is_dropped() {
        let mut d = dispatcher(MockLink::with_events([
            LinkEvent::Opened,
            LinkEvent::Message("this is not json".into()),
            LinkEvent::Binary(12),
        ]));
        let before = d.surface().generation();

        d.pump();

        assert_eq!(d.surface().generation(), before);
        assert!(d.surface().as_rgba().iter().all(|b| *b == 0));
        assert_eq!(d.stats().messages_dropped, 2);
        assert_eq!(d.state(), LinkState::Open);
        assert!(d.last_diagnostic().is_some());
    }

    #[test]
    fn test_arrow_up_press_is_sent() {
        let mut d = dispatcher(MockLink::with_events([LinkEvent::Opened]));
        d.pump();

        d.handle_key("ArrowUp", true);

        assert_eq!(d.link().sent, vec![r#"{"key":131,"down":true}"#.to_string()]);
        assert_eq!(d.stats().keys_sent, 1);
        assert_eq!(
            d.last_key(),
            Some(KeyEvent {
                key: 131,
                down: true
            })
        );
    }

    #[test]
    fn test_unknown_key_release_sends_zero() {
        let mut d = dispatcher(MockLink::default());

        d.handle_key("F5", false);
        d.handle_key("a", true);

        assert_eq!(
            d.link().sent,
            vec![
                r#"{"key":0,"down":false}"#.to_string(),
                r#"{"key":97,"down":true}"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_send_failure_is_reported_not_raised() {
        let mut d = dispatcher(MockLink {
            fail_sends: true,
            ..Default::default()
        });

        d.handle_key("Enter", true);

        assert_eq!(d.stats().keys_sent, 0);
        let diagnostic = d.last_diagnostic().unwrap();
        assert!(diagnostic.contains("128"), "{diagnostic}");
        assert!(diagnostic.contains("socket is gone"), "{diagnostic}");
    }

    #[test]
    fn test_close_is_terminal() {
        let mut d = dispatcher(MockLink::with_events([
            LinkEvent::Opened,
            LinkEvent::Error("connection reset".into()),
            LinkEvent::Closed,
        ]));
        d.pump();

        assert_eq!(d.state(), LinkState::Closed);

        d.handle_key("Escape", true);
        assert!(d.link().sent.is_empty());
    }
}
