//! Per-question prompt state.

/// Line being typed, capped at a fixed number of characters.
#[derive(Debug, Clone)]
pub struct LineBuffer {
    text: String,
    max_len: usize,
}

impl LineBuffer {
    pub fn new(max_len: usize) -> Self {
        Self {
            text: String::new(),
            max_len,
        }
    }

    /// Appends `c` unless the buffer is full. Returns whether it was added.
    pub fn push(&mut self, c: char) -> bool {
        if self.text.chars().count() >= self.max_len {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Removes the last character. Returns false on an empty buffer.
    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    /// Empties the buffer, returning its contents.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// What the next submitted line means.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// The line is a candidate URL.
    #[default]
    Normal,
    /// The line answers "use `suggestion` instead?".
    AwaitingConfirmation { suggestion: String },
}

/// State owned by a single `ask` call.
#[derive(Debug, Clone)]
pub struct PromptState {
    pub question: String,
    pub buffer: LineBuffer,
    pub mode: Mode,
}

impl PromptState {
    pub fn new(question: &str, max_input_len: usize) -> Self {
        Self {
            question: question.to_string(),
            buffer: LineBuffer::new(max_input_len),
            mode: Mode::Normal,
        }
    }

    pub fn pending_suggestion(&self) -> Option<&str> {
        match &self.mode {
            Mode::Normal => None,
            Mode::AwaitingConfirmation { suggestion } => Some(suggestion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pop_on_empty_is_noop() {
        let mut b = LineBuffer::new(8);
        assert!(!b.pop());
        assert!(b.is_empty());
    }

    #[test]
    fn push_respects_limit() {
        let mut b = LineBuffer::new(3);
        assert!(b.push('a'));
        assert!(b.push('b'));
        assert!(b.push('c'));
        assert!(!b.push('d'));
        assert_eq!(b.as_str(), "abc");
        assert!(b.pop());
        assert!(b.push('z'));
        assert_eq!(b.take(), "abz");
        assert!(b.is_empty());
    }

    #[test]
    fn suggestion_only_while_awaiting() {
        let mut s = PromptState::new("Q?", 16);
        assert_eq!(s.pending_suggestion(), None);
        s.mode = Mode::AwaitingConfirmation {
            suggestion: "https://github.com/x/y.git".to_string(),
        };
        assert_eq!(s.pending_suggestion(), Some("https://github.com/x/y.git"));
        s.mode = Mode::Normal;
        assert_eq!(s.pending_suggestion(), None);
    }
}
