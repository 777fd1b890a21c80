#[cfg(test)]
mod test {
    use crate::keys::{KeyCode, NamedKey, encode_key, key_code};
    use crate::protocol::KeyEvent;

    #[test]
    fn test_single_character_uses_code_point() {
        assert_eq!(key_code("a"), 97);
        assert_eq!(key_code("A"), 65);
        assert_eq!(key_code("0"), 48);
        assert_eq!(key_code(" "), 32);
        assert_eq!(key_code("~"), 126);
    }

    #[test]
    fn test_characters_count_in_utf16_units() {
        assert_eq!(key_code("\u{e9}"), 233);
        assert_eq!(key_code("\u{20ac}"), 0x20ac);
        // Two surrogate units, so not a single character
        assert_eq!(key_code("\u{1f600}"), 0);
        assert_eq!(encode_key("\u{1f600}", true).key, 0);
    }

    #[test]
    fn test_character_round_trip() {
        for c in ['a', 'z', 'Q', '5', '/', ' '] {
            let event = encode_key(&c.to_string(), true);
            assert_eq!(KeyCode::from(event.key), KeyCode::Char(c), "char {c:?}");
        }
    }

    #[test]
    fn test_named_key_table() {
        let expected = [
            ("Enter", 128),
            ("Backspace", 129),
            ("ArrowLeft", 130),
            ("ArrowUp", 131),
            ("ArrowRight", 132),
            ("ArrowDown", 133),
            ("Escape", 140),
        ];
        for (name, code) in expected {
            assert_eq!(key_code(name), code, "{name}");
            let named = NamedKey::from_name(name).unwrap();
            assert_eq!(KeyCode::from(code), KeyCode::Named(named));
        }
    }

    #[test]
    fn test_unmapped_keys_encode_to_zero() {
        for name in ["F5", "Shift", "Tab", "ab", "enter", ""] {
            assert_eq!(key_code(name), 0, "{name:?}");
        }
        assert_eq!(KeyCode::from(0), KeyCode::Unmapped);
    }

    #[test]
    fn test_arrow_up_key_down_message() {
        let event = encode_key("ArrowUp", true);
        assert_eq!(
            event,
            KeyEvent {
                key: 131,
                down: true
            }
        );
        assert_eq!(event.encode().unwrap(), r#"{"key":131,"down":true}"#);
    }

    #[test]
    fn test_unknown_key_up_message() {
        let event = encode_key("F5", false);
        assert_eq!(event.encode().unwrap(), r#"{"key":0,"down":false}"#);
    }

    #[test]
    fn test_escape_reserved_code() {
        assert_eq!(encode_key("Escape", true).key, 140);
        assert_eq!(NamedKey::Escape.code(), 140);
        assert_eq!(NamedKey::from_code(134), None);
    }
}
