use egui::{Event, Key, Modifiers};
use regview_core::NamedKey;

/// Browser-style key identifier (`KeyboardEvent.key`) for an egui key.
///
/// Printable keys become their character, with shift applied the way a US
/// layout does. Keys with no single-character form and no reserved code keep
/// their egui name, which encodes to 0.
pub fn key_identifier(key: Key, modifiers: Modifiers) -> String {
    if let Some(named) = named_key(key) {
        return named.name().to_owned();
    }
    match printable_char(key) {
        Some(c) if modifiers.shift => shifted(c).to_string(),
        Some(c) => c.to_string(),
        None => key.name().to_owned(),
    }
}

fn named_key(key: Key) -> Option<NamedKey> {
    match key {
        Key::Enter => Some(NamedKey::Enter),
        Key::Backspace => Some(NamedKey::Backspace),
        Key::ArrowLeft => Some(NamedKey::ArrowLeft),
        Key::ArrowUp => Some(NamedKey::ArrowUp),
        Key::ArrowRight => Some(NamedKey::ArrowRight),
        Key::ArrowDown => Some(NamedKey::ArrowDown),
        Key::Escape => Some(NamedKey::Escape),
        _ => None,
    }
}

/// Unshifted character produced by `key`, if it produces one.
fn printable_char(key: Key) -> Option<char> {
    let c = match key {
        Key::Space => ' ',
        Key::Minus => '-',
        Key::Plus => '+',
        Key::Equals => '=',
        Key::Comma => ',',
        Key::Period => '.',
        Key::Slash => '/',
        Key::Backslash => '\\',
        Key::Semicolon => ';',
        Key::Backtick => '`',
        Key::OpenBracket => '[',
        Key::CloseBracket => ']',
        _ => {
            // Letters, digits and any other key drawn as a single ASCII symbol
            let symbol = key.symbol_or_name();
            let mut chars = symbol.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if c.is_ascii_graphic() => c.to_ascii_lowercase(),
                _ => return None,
            }
        }
    };
    Some(c)
}

fn shifted(c: char) -> char {
    match c {
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        c => c.to_ascii_uppercase(),
    }
}

/// Key presses and releases seen this frame, in the order egui received them.
pub fn collect_key_events(ctx: &egui::Context) -> Vec<(String, bool)> {
    ctx.input(|i| {
        i.events
            .iter()
            .filter_map(|event| match event {
                Event::Key {
                    key,
                    pressed,
                    modifiers,
                    ..
                } => Some((key_identifier(*key, *modifiers), *pressed)),
                _ => None,
            })
            .collect()
    })
}
