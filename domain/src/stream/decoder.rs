//! Byte chunk → line framing with carry-over across chunk boundaries

/// One logical line of decoded text.
///
/// The terminating `\n` (and a `\r` immediately before it) is consumed by the
/// decoder and is not part of the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame(String);

impl Frame {
    fn from_line(line: &str) -> Self {
        Frame(line.strip_suffix('\r').unwrap_or(line).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl From<&str> for Frame {
    fn from(line: &str) -> Self {
        Frame::from_line(line)
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Incremental UTF-8 decoder and line splitter.
///
/// State survives between [`feed`](Self::feed) calls:
///
/// - `pending_bytes`: the tail of a chunk that ends inside a multi-byte
///   character; prefixed onto the next chunk before decoding.
/// - `pending_line`: decoded text after the last line break; prefixed onto the
///   next decoded text before splitting.
///
/// Invalid byte sequences decode to U+FFFD rather than failing the stream.
/// One decoder belongs to one session; build a fresh one per request.
#[derive(Debug, Default)]
pub struct FrameDecoder {
    pending_bytes: Vec<u8>,
    pending_line: String,
}

impl FrameDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `chunk` and return every line it completes, in order.
    pub fn feed(&mut self, chunk: &[u8]) -> Vec<Frame> {
        let text = self.decode(chunk);
        if text.is_empty() {
            return Vec::new();
        }

        // Only the newly decoded text can contain a new line break.
        let search_from = self.pending_line.len();
        self.pending_line.push_str(&text);

        let Some(offset) = self.pending_line[search_from..].rfind('\n') else {
            return Vec::new();
        };
        let last_break = search_from + offset;

        let rest = self.pending_line.split_off(last_break + 1);
        let complete = std::mem::replace(&mut self.pending_line, rest);
        complete[..last_break].split('\n').map(Frame::from_line).collect()
    }

    /// End of stream: return the trailing partial line, if any, and clear all state.
    ///
    /// Bytes still waiting for the rest of a character can no longer be
    /// completed and decode to U+FFFD.
    pub fn flush(&mut self) -> Option<Frame> {
        if !self.pending_bytes.is_empty() {
            self.pending_bytes.clear();
            self.pending_line.push(char::REPLACEMENT_CHARACTER);
        }
        let line = std::mem::take(&mut self.pending_line);
        if line.is_empty() {
            None
        } else {
            Some(Frame::from_line(&line))
        }
    }

    /// Bytes held back because they end in an incomplete character.
    pub fn pending_bytes(&self) -> &[u8] {
        &self.pending_bytes
    }

    /// Decoded text waiting for its line break.
    pub fn pending_line(&self) -> &str {
        &self.pending_line
    }

    fn decode(&mut self, chunk: &[u8]) -> String {
        let mut bytes = std::mem::take(&mut self.pending_bytes);
        bytes.extend_from_slice(chunk);

        let mut out = String::with_capacity(bytes.len());
        let mut rest = bytes.as_slice();
        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    break;
                }
                Err(e) => {
                    let (valid, tail) = rest.split_at(e.valid_up_to());
                    if let Ok(valid) = std::str::from_utf8(valid) {
                        out.push_str(valid);
                    }
                    match e.error_len() {
                        Some(len) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &tail[len..];
                        }
                        None => {
                            // Incomplete sequence at the end of the input
                            self.pending_bytes = tail.to_vec();
                            break;
                        }
                    }
                }
            }
        }
        out
    }
}
