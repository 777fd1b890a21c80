use crate::protocol::KeyEvent;

/// Control keys that have no single-character form. Codes 128..=140 are reserved for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedKey {
    Enter,
    Backspace,
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Escape,
}

impl NamedKey {
    pub const ALL: [NamedKey; 7] = [
        NamedKey::Enter,
        NamedKey::Backspace,
        NamedKey::ArrowLeft,
        NamedKey::ArrowUp,
        NamedKey::ArrowRight,
        NamedKey::ArrowDown,
        NamedKey::Escape,
    ];

    pub const fn code(self) -> u32 {
        match self {
            NamedKey::Enter => 128,
            NamedKey::Backspace => 129,
            NamedKey::ArrowLeft => 130,
            NamedKey::ArrowUp => 131,
            NamedKey::ArrowRight => 132,
            NamedKey::ArrowDown => 133,
            NamedKey::Escape => 140,
        }
    }

    /// Key identifier as reported by the browser (`KeyboardEvent.key`).
    pub const fn name(self) -> &'static str {
        match self {
            NamedKey::Enter => "Enter",
            NamedKey::Backspace => "Backspace",
            NamedKey::ArrowLeft => "ArrowLeft",
            NamedKey::ArrowUp => "ArrowUp",
            NamedKey::ArrowRight => "ArrowRight",
            NamedKey::ArrowDown => "ArrowDown",
            NamedKey::Escape => "Escape",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

/// A numeric key code read back into what it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    Char(char),
    Named(NamedKey),
    Unmapped,
}

impl From<u32> for KeyCode {
    fn from(code: u32) -> Self {
        if code == 0 {
            return KeyCode::Unmapped;
        }
        if let Some(named) = NamedKey::from_code(code) {
            return KeyCode::Named(named);
        }
        match char::from_u32(code) {
            Some(c) => KeyCode::Char(c),
            None => KeyCode::Unmapped,
        }
    }
}

/// Numeric code for a key identifier.
///
/// A single UTF-16 code unit maps to its value, a known control key to its
/// reserved code, anything else to 0. Characters outside the BMP take two
/// units and so count as unmapped, the same as a browser's `key.length`.
pub fn key_code(identifier: &str) -> u32 {
    let mut units = identifier.encode_utf16();
    if let (Some(unit), None) = (units.next(), units.next()) {
        return unit as u32;
    }
    NamedKey::from_name(identifier).map_or(0, NamedKey::code)
}

pub fn encode_key(identifier: &str, down: bool) -> KeyEvent {
    KeyEvent {
        key: key_code(identifier),
        down,
    }
}
