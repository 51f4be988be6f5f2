//! Interactive repository URL prompt.
//!
//! Reads raw keystrokes, echoes them, and submits each line to a
//! [`Validator`]. Rejected URLs are explained and asked for again; a URL with
//! an unsupported transport but an HTTPS equivalent is offered as a yes/no
//! suggestion. Validation failures never end the loop: `ask` returns only an
//! accepted URL or a terminal I/O condition.

mod keys;
mod messages;
mod state;
mod suggestion;

use std::collections::VecDeque;

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::validator::{ErrorKind, Validator};

pub use keys::{Key, KeyDecoder};
pub use messages::{
    message_for, CHECK_FAILED, INVALID_URL, NOT_FOUND, UNSUPPORTED_TRANSPORT,
};
pub use state::{LineBuffer, Mode, PromptState};
pub use suggestion::{format_suggestion_prompt, is_affirmative};

const NEWLINE: &str = "\r\n";
const ERASE_CHAR: &str = "\x08 \x08";
const READ_CHUNK: usize = 256;

/// Tunables for the prompt loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PromptOptions {
    /// Keystrokes past this many characters are ignored.
    pub max_input_len: usize,
    /// Validate a translated URL before offering it.
    pub verify_suggestion: bool,
    /// Put a rejected line back in the buffer for editing instead of clearing it.
    pub keep_rejected_input: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            max_input_len: 2048,
            verify_suggestion: false,
            keep_rejected_input: false,
        }
    }
}

/// Terminal conditions that end a prompt without an answer.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("input closed before a repository URL was accepted")]
    InputClosed,
    #[error("prompt interrupted")]
    Interrupted,
}

/// Prompt bound to a validator, an input stream and an output stream.
///
/// Bytes read past an accepted answer are kept for the next `ask`.
pub struct Prompt<V, R, W> {
    validator: V,
    input: R,
    output: W,
    options: PromptOptions,
    decoder: KeyDecoder,
    pending: VecDeque<u8>,
}

impl<V, R, W> Prompt<V, R, W>
where
    V: Validator,
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(validator: V, input: R, output: W) -> Self {
        Self {
            validator,
            input,
            output,
            options: PromptOptions::default(),
            decoder: KeyDecoder::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn with_options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Asks `question` until a URL is accepted.
    pub async fn ask(&mut self, question: &str) -> Result<String, PromptError> {
        let mut state = PromptState::new(question, self.options.max_input_len);
        self.emit(&format!("{} ", question)).await?;

        loop {
            let byte = match self.pending.pop_front() {
                Some(b) => b,
                None => {
                    self.fill().await?;
                    continue;
                }
            };
            let Some(key) = self.decoder.feed(byte) else {
                continue;
            };
            if let Some(answer) = self.handle_key(&mut state, key).await? {
                tracing::info!("accepted repository URL {}", answer);
                return Ok(answer);
            }
        }
    }

    async fn fill(&mut self) -> Result<(), PromptError> {
        let mut chunk = [0u8; READ_CHUNK];
        let n = self.input.read(&mut chunk).await?;
        if n == 0 {
            return Err(PromptError::InputClosed);
        }
        self.pending.extend(&chunk[..n]);
        Ok(())
    }

    async fn handle_key(
        &mut self,
        state: &mut PromptState,
        key: Key,
    ) -> Result<Option<String>, PromptError> {
        match key {
            Key::Char(c) => {
                if state.buffer.push(c) {
                    let mut utf8 = [0u8; 4];
                    self.emit(c.encode_utf8(&mut utf8)).await?;
                }
                Ok(None)
            }
            Key::Backspace => {
                if state.buffer.pop() {
                    self.emit(ERASE_CHAR).await?;
                }
                Ok(None)
            }
            Key::Interrupt => {
                self.emit(NEWLINE).await?;
                Err(PromptError::Interrupted)
            }
            Key::Enter => {
                self.emit(NEWLINE).await?;
                let line = state.buffer.take();
                match std::mem::take(&mut state.mode) {
                    Mode::Normal => self.submit(state, line).await,
                    Mode::AwaitingConfirmation { suggestion } => {
                        if is_affirmative(&line) {
                            return Ok(Some(suggestion));
                        }
                        tracing::debug!("suggestion {} declined", suggestion);
                        self.reprompt(state).await?;
                        Ok(None)
                    }
                }
            }
        }
    }

    async fn submit(
        &mut self,
        state: &mut PromptState,
        line: String,
    ) -> Result<Option<String>, PromptError> {
        tracing::debug!("validating {:?}", line);
        let err = match self.validator.validate(&line).await {
            Ok(()) => return Ok(Some(line)),
            Err(err) => err,
        };
        tracing::debug!("rejected: {}", err);

        let rejected = match err.suggestion() {
            Some(translated) => self.offer(state, translated.to_string()).await?,
            None => Some(err.kind()),
        };
        if let Some(kind) = rejected {
            self.reject(state, kind).await?;
            if self.options.keep_rejected_input {
                self.restore(state, &line).await?;
            }
        }
        Ok(None)
    }

    /// Offers `translated` for confirmation. Returns the error kind to report
    /// instead when the translation itself fails verification.
    async fn offer(
        &mut self,
        state: &mut PromptState,
        translated: String,
    ) -> Result<Option<ErrorKind>, PromptError> {
        if self.options.verify_suggestion {
            if let Err(err) = self.validator.validate(&translated).await {
                tracing::debug!("suggestion rejected: {}", err);
                return Ok(Some(err.kind()));
            }
        }
        self.emit(&format_suggestion_prompt(&translated)).await?;
        state.mode = Mode::AwaitingConfirmation {
            suggestion: translated,
        };
        Ok(None)
    }

    async fn reject(&mut self, state: &PromptState, kind: ErrorKind) -> Result<(), PromptError> {
        self.emit(message_for(kind)).await?;
        self.emit(NEWLINE).await?;
        self.reprompt(state).await
    }

    async fn restore(&mut self, state: &mut PromptState, line: &str) -> Result<(), PromptError> {
        for c in line.chars() {
            state.buffer.push(c);
        }
        self.emit(state.buffer.as_str()).await
    }

    async fn reprompt(&mut self, state: &PromptState) -> Result<(), PromptError> {
        self.emit(&format!("{} ", state.question)).await
    }

    async fn emit(&mut self, text: &str) -> Result<(), PromptError> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await?;
        Ok(())
    }
}
