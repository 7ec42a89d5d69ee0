//! HID keyboard usage codes and the character table used by `type_letter`.

pub const KEY_A: u8 = 0x04;
pub const KEY_B: u8 = 0x05;
pub const KEY_C: u8 = 0x06;
pub const KEY_D: u8 = 0x07;
pub const KEY_E: u8 = 0x08;
pub const KEY_H: u8 = 0x0B;
pub const KEY_I: u8 = 0x0C;
pub const KEY_Z: u8 = 0x1D;
pub const KEY_1: u8 = 0x1E;
pub const KEY_0: u8 = 0x27;
pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACE: u8 = 0x2C;
pub const KEY_MINUS: u8 = 0x2D;
pub const KEY_EQUAL: u8 = 0x2E;
pub const KEY_LEFT_BRACKET: u8 = 0x2F;
pub const KEY_RIGHT_BRACKET: u8 = 0x30;
pub const KEY_BACKSLASH: u8 = 0x31;
pub const KEY_SEMICOLON: u8 = 0x33;
pub const KEY_APOSTROPHE: u8 = 0x34;
pub const KEY_GRAVE: u8 = 0x35;
pub const KEY_COMMA: u8 = 0x36;
pub const KEY_DOT: u8 = 0x37;
pub const KEY_SLASH: u8 = 0x38;

/// Modifier bits (byte 0 of the boot report).
pub mod modifier {
    pub const LEFT_CTRL: u8 = 1 << 0;
    pub const LEFT_SHIFT: u8 = 1 << 1;
    pub const LEFT_ALT: u8 = 1 << 2;
    pub const LEFT_GUI: u8 = 1 << 3;
    pub const RIGHT_CTRL: u8 = 1 << 4;
    pub const RIGHT_SHIFT: u8 = 1 << 5;
    pub const RIGHT_ALT: u8 = 1 << 6;
    pub const RIGHT_GUI: u8 = 1 << 7;
}

/// A printable character resolved to the key that produces it on a US
/// layout, plus the modifier bits that must be held with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyStroke {
    pub scancode: u8,
    pub modifiers: u8,
}

impl KeyStroke {
    const fn plain(scancode: u8) -> Self {
        Self {
            scancode,
            modifiers: 0,
        }
    }

    const fn shifted(scancode: u8) -> Self {
        Self {
            scancode,
            modifiers: modifier::LEFT_SHIFT,
        }
    }
}

/// Scancode for a character that needs no modifier, `None` otherwise.
#[cfg(test)]
pub fn simple_code(c: char) -> Option<u8> {
    match keystroke(c) {
        Some(KeyStroke {
            scancode,
            modifiers: 0,
        }) => Some(scancode),
        _ => None,
    }
}

/// Look up the key (and Shift, if needed) for a character.
pub fn keystroke(c: char) -> Option<KeyStroke> {
    let stroke = match c {
        'a'..='z' => KeyStroke::plain(KEY_A + (c as u8 - b'a')),
        'A'..='Z' => KeyStroke::shifted(KEY_A + (c as u8 - b'A')),
        '1'..='9' => KeyStroke::plain(KEY_1 + (c as u8 - b'1')),
        '0' => KeyStroke::plain(KEY_0),
        '\n' => KeyStroke::plain(KEY_ENTER),
        '\u{1b}' => KeyStroke::plain(KEY_ESCAPE),
        '\u{8}' => KeyStroke::plain(KEY_BACKSPACE),
        '\t' => KeyStroke::plain(KEY_TAB),
        ' ' => KeyStroke::plain(KEY_SPACE),
        '-' => KeyStroke::plain(KEY_MINUS),
        '=' => KeyStroke::plain(KEY_EQUAL),
        '[' => KeyStroke::plain(KEY_LEFT_BRACKET),
        ']' => KeyStroke::plain(KEY_RIGHT_BRACKET),
        '\\' => KeyStroke::plain(KEY_BACKSLASH),
        ';' => KeyStroke::plain(KEY_SEMICOLON),
        '\'' => KeyStroke::plain(KEY_APOSTROPHE),
        '`' => KeyStroke::plain(KEY_GRAVE),
        ',' => KeyStroke::plain(KEY_COMMA),
        '.' => KeyStroke::plain(KEY_DOT),
        '/' => KeyStroke::plain(KEY_SLASH),
        // Shifted characters
        '!' => KeyStroke::shifted(KEY_1),
        '@' => KeyStroke::shifted(KEY_1 + 1),
        '#' => KeyStroke::shifted(KEY_1 + 2),
        '$' => KeyStroke::shifted(KEY_1 + 3),
        '%' => KeyStroke::shifted(KEY_1 + 4),
        '^' => KeyStroke::shifted(KEY_1 + 5),
        '&' => KeyStroke::shifted(KEY_1 + 6),
        '*' => KeyStroke::shifted(KEY_1 + 7),
        '(' => KeyStroke::shifted(KEY_1 + 8),
        ')' => KeyStroke::shifted(KEY_0),
        '_' => KeyStroke::shifted(KEY_MINUS),
        '+' => KeyStroke::shifted(KEY_EQUAL),
        '{' => KeyStroke::shifted(KEY_LEFT_BRACKET),
        '}' => KeyStroke::shifted(KEY_RIGHT_BRACKET),
        '|' => KeyStroke::shifted(KEY_BACKSLASH),
        ':' => KeyStroke::shifted(KEY_SEMICOLON),
        '"' => KeyStroke::shifted(KEY_APOSTROPHE),
        '~' => KeyStroke::shifted(KEY_GRAVE),
        '<' => KeyStroke::shifted(KEY_COMMA),
        '>' => KeyStroke::shifted(KEY_DOT),
        '?' => KeyStroke::shifted(KEY_SLASH),
        _ => return None,
    };
    Some(stroke)
}
