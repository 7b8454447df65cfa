//! Frame → text fragment interpretation

use super::decoder::Frame;
use thiserror::Error;

/// Prefix that marks a frame as carrying a payload.
pub const DATA_PREFIX: &str = "data: ";

/// Payload that terminates the stream (case-sensitive, exact match).
pub const DONE_SENTINEL: &str = "[DONE]";

/// `type` value of elements that contribute text.
pub const TEXT_DELTA_TYPE: &str = "text-delta";

/// A unit extracted from a frame payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeltaEvent {
    /// A fragment to append to the result.
    Text(String),
    /// The terminal sentinel. Informational: the stream ended successfully.
    Done,
}

impl DeltaEvent {
    pub fn text(&self) -> Option<&str> {
        match self {
            DeltaEvent::Text(s) => Some(s),
            DeltaEvent::Done => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DeltaEvent::Done)
    }
}

/// A `data: ` payload that could not be understood.
///
/// Never fatal: the caller drops the frame and keeps streaming.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Malformed stream payload: {0}")]
pub struct MalformedPayload(pub String);

/// Interprets frames under the `data: ` framing convention.
///
/// - Frames without the `data: ` prefix (blank lines, `event:`/`id:` lines,
///   comments) yield nothing.
/// - `data: [DONE]` yields [`DeltaEvent::Done`].
/// - Otherwise the payload must be a JSON array; every element with
///   `"type": "text-delta"` and a non-empty string `textDelta` yields one
///   [`DeltaEvent::Text`], in array order. Other elements are skipped.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeltaAssembler;

impl DeltaAssembler {
    pub fn new() -> Self {
        Self
    }

    pub fn interpret(&self, frame: &Frame) -> Result<Vec<DeltaEvent>, MalformedPayload> {
        let Some(payload) = frame.as_str().strip_prefix(DATA_PREFIX) else {
            return Ok(Vec::new());
        };

        if payload == DONE_SENTINEL {
            return Ok(vec![DeltaEvent::Done]);
        }

        let elements: Vec<serde_json::Value> =
            serde_json::from_str(payload).map_err(|e| MalformedPayload(e.to_string()))?;

        Ok(elements
            .iter()
            .filter(|element| {
                element.get("type").and_then(|t| t.as_str()) == Some(TEXT_DELTA_TYPE)
            })
            .filter_map(|element| element.get("textDelta").and_then(|t| t.as_str()))
            .filter(|text| !text.is_empty())
            .map(|text| DeltaEvent::Text(text.to_string()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::decoder::FrameDecoder;

    fn interpret(line: &str) -> Result<Vec<DeltaEvent>, MalformedPayload> {
        DeltaAssembler::new().interpret(&Frame::from(line))
    }

    fn text(s: &str) -> DeltaEvent {
        DeltaEvent::Text(s.to_string())
    }

    #[test]
    fn test_single_text_delta() {
        let events = interpret(r#"data: [{"type":"text-delta","textDelta":"Buy "}]"#).unwrap();
        assert_eq!(events, vec![text("Buy ")]);
        assert_eq!(events[0].text(), Some("Buy "));
        assert!(!events[0].is_terminal());
    }

    #[test]
    fn test_multiple_deltas_keep_payload_order() {
        let events = interpret(
            r#"data: [{"type":"text-delta","textDelta":"a"},{"type":"text-delta","textDelta":"b"},{"type":"text-delta","textDelta":"c"}]"#,
        )
        .unwrap();
        assert_eq!(events, vec![text("a"), text("b"), text("c")]);
    }

    #[test]
    fn test_done_sentinel() {
        let events = interpret("data: [DONE]").unwrap();
        assert_eq!(events, vec![DeltaEvent::Done]);
        assert!(events[0].is_terminal());
        assert_eq!(events[0].text(), None);
    }

    #[test]
    fn test_done_sentinel_is_case_sensitive_and_exact() {
        // Neither variant is JSON, so both are malformed rather than terminal
        assert!(interpret("data: [done]").is_err());
        assert!(interpret("data: [DONE] ").is_err());
    }

    #[test]
    fn test_non_data_lines_are_ignored() {
        for line in ["", "event: message", "id: 7", ": keep-alive", "data:[DONE]", "Data: [DONE]"] {
            assert_eq!(interpret(line).unwrap(), vec![], "line {line:?}");
        }
    }

    #[test]
    fn test_unknown_element_shapes_are_skipped() {
        let events = interpret(
            r#"data: [{"type":"finish","reason":"stop"},{"type":"text-delta"},{"type":"text-delta","textDelta":42},{"type":"text-delta","textDelta":""},7,"x",{"type":"text-delta","textDelta":"ok"}]"#,
        )
        .unwrap();
        assert_eq!(events, vec![text("ok")]);
    }

    #[test]
    fn test_truncated_json_is_malformed() {
        let err = interpret(r#"data: [{"type":"text-delta","textDelta":"Bu"#).unwrap_err();
        assert!(err.to_string().starts_with("Malformed stream payload"));
    }

    #[test]
    fn test_json_object_payload_is_malformed() {
        assert!(interpret(r#"data: {"type":"text-delta","textDelta":"x"}"#).is_err());
    }

    #[test]
    fn test_escaped_text_is_unescaped() {
        let events =
            interpret(r#"data: [{"type":"text-delta","textDelta":"| A |\n| - |₹"}]"#).unwrap();
        assert_eq!(events, vec![text("| A |\n| - |₹")]);
    }

    #[test]
    fn test_decoder_and_assembler_end_to_end() {
        let body = "data: [{\"type\":\"text-delta\",\"textDelta\":\"Buy \"}]\n\n\
                    data: [{\"type\":\"text-delta\",\"textDelta\":\"TCS\"}]\n\n\
                    data: [DONE]\n\n";
        let assembler = DeltaAssembler::new();
        let mut decoder = FrameDecoder::new();

        let mut result = String::new();
        let mut done = false;
        for frame in decoder.feed(body.as_bytes()) {
            for event in assembler.interpret(&frame).unwrap_or_default() {
                match event {
                    DeltaEvent::Text(t) => result.push_str(&t),
                    DeltaEvent::Done => done = true,
                }
            }
        }
        assert_eq!(result, "Buy TCS");
        assert!(done);
    }
}
