//! Incremental decoding of the advisory event stream.
//!
//! The advisory endpoint answers with a chunked body of newline-terminated
//! frames. Chunks carry no alignment guarantees: a chunk may end in the middle
//! of a line, or even in the middle of a multi-byte UTF-8 character. Decoding
//! therefore happens in two stages:
//!
//! 1. [`decoder::FrameDecoder`]: bytes → complete lines ([`decoder::Frame`]),
//!    carrying split characters and split lines over to the next chunk.
//! 2. [`delta::DeltaAssembler`]: one frame → zero or more [`delta::DeltaEvent`]s
//!    under the `data: ` framing convention.
//!
//! # Wire format
//!
//! ```text
//! data: [{"type":"text-delta","textDelta":"Buy "}]
//!
//! data: [{"type":"text-delta","textDelta":"TCS"}]
//!
//! data: [DONE]
//! ```

pub mod decoder;
pub mod delta;
