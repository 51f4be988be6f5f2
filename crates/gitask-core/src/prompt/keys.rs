//! Keystroke decoding for raw terminal input.

/// A keystroke the prompt reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Backspace,
    Enter,
    /// Ctrl-C or Ctrl-D; raw mode delivers these as bytes instead of signals.
    Interrupt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Escape {
    #[default]
    None,
    /// ESC seen.
    Start,
    /// `ESC [` seen; waiting for the final byte.
    Csi,
    /// `ESC O` seen; next byte ends the sequence.
    Ss3,
}

/// Turns raw input bytes into [`Key`]s, one byte at a time.
///
/// Only printable ASCII becomes [`Key::Char`]. Escape sequences (arrow keys,
/// function keys), other control bytes and non-ASCII bytes are dropped.
/// A CR immediately followed by LF is a single Enter.
#[derive(Debug, Default)]
pub struct KeyDecoder {
    escape: Escape,
    last_was_cr: bool,
}

impl KeyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn feed(&mut self, byte: u8) -> Option<Key> {
        let after_cr = std::mem::take(&mut self.last_was_cr);

        match self.escape {
            Escape::None => {}
            Escape::Start => {
                self.escape = match byte {
                    b'[' => Escape::Csi,
                    b'O' => Escape::Ss3,
                    _ => Escape::None,
                };
                // Alt+printable is dropped; control bytes after a bare ESC still count.
                if self.escape != Escape::None || (0x20..=0x7e).contains(&byte) {
                    return None;
                }
            }
            Escape::Csi => {
                if (0x40..=0x7e).contains(&byte) {
                    self.escape = Escape::None;
                }
                return None;
            }
            Escape::Ss3 => {
                self.escape = Escape::None;
                return None;
            }
        }

        match byte {
            b'\r' => {
                self.last_was_cr = true;
                Some(Key::Enter)
            }
            b'\n' if after_cr => None,
            b'\n' => Some(Key::Enter),
            0x08 | 0x7f => Some(Key::Backspace),
            0x03 | 0x04 => Some(Key::Interrupt),
            0x1b => {
                self.escape = Escape::Start;
                None
            }
            0x20..=0x7e => Some(Key::Char(byte as char)),
            _ => None,
        }
    }
}
