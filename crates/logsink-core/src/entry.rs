//! Log entry model.
//!
//! An entry is decided once, at decode time, to be either a structured JSON
//! value or opaque text. Nothing downstream re-inspects the payload shape.

use serde_json::Value;

/// One unit of telemetry received from an upstream client.
#[derive(Debug, Clone, PartialEq)]
pub enum LogEntry {
    /// A JSON value, rendered pretty-printed with 2-space indentation.
    Structured(Value),
    /// Opaque text, rendered unchanged.
    Text(String),
}

/// Detected payload format of a stream message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryFormat {
    Structured,
    Plain,
}

impl EntryFormat {
    /// Console label shown in the stream block header.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Structured => "Structured (JSON)",
            Self::Plain => "Plain Text",
        }
    }
}

impl LogEntry {
    /// Classify one element of a batch array.
    ///
    /// JSON strings are treated as text so they print without quotes; every
    /// other value is kept structured.
    pub fn from_batch_element(value: Value) -> Self {
        match value {
            Value::String(text) => Self::Text(text),
            other => Self::Structured(other),
        }
    }

    /// Classify a text frame received on a stream connection.
    ///
    /// Falls back to plain text when the message is not valid JSON. This
    /// never fails.
    pub fn from_stream_message(message: &str) -> Self {
        serde_json::from_str::<Value>(message)
            .map_or_else(|_| Self::Text(message.to_owned()), Self::Structured)
    }

    /// Classify a binary frame. Invalid UTF-8 is replaced rather than rejected.
    pub fn from_stream_bytes(bytes: &[u8]) -> Self {
        Self::from_stream_message(&String::from_utf8_lossy(bytes))
    }

    pub const fn format(&self) -> EntryFormat {
        match self {
            Self::Structured(_) => EntryFormat::Structured,
            Self::Text(_) => EntryFormat::Plain,
        }
    }

    /// Textual form of the entry: pretty JSON or the raw text.
    pub fn content(&self) -> String {
        match self {
            Self::Structured(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }

    /// Content split into display lines.
    ///
    /// Any line terminator ends a line, including a lone `\r` and the
    /// Unicode separators, so no control character survives inside a line.
    /// Empty content yields no lines.
    pub fn content_lines(&self) -> Vec<String> {
        split_lines(&self.content())
    }
}

const fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{1c}'..='\u{1e}' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn split_lines(content: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        let Some(at) = rest.find(is_line_break) else {
            lines.push(rest.to_owned());
            break;
        };
        lines.push(rest[..at].to_owned());
        let tail = &rest[at..];
        let width = if tail.starts_with("\r\n") {
            2
        } else {
            tail.chars().next().map_or(1, char::len_utf8)
        };
        rest = &tail[width..];
    }
    lines
}

impl From<Value> for LogEntry {
    fn from(value: Value) -> Self {
        Self::from_batch_element(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn batch_strings_become_text() {
        assert_eq!(
            LogEntry::from_batch_element(json!("a")),
            LogEntry::Text("a".to_string())
        );
    }

    #[test]
    fn batch_scalars_stay_structured() {
        let entry = LogEntry::from_batch_element(json!(42));
        assert_eq!(entry.format(), EntryFormat::Structured);
        assert_eq!(entry.content(), "42");
    }

    #[test]
    fn stream_json_is_structured() {
        let entry = LogEntry::from_stream_message(r#"{"a":1}"#);
        assert_eq!(entry.format(), EntryFormat::Structured);
        assert_eq!(entry.content_lines(), vec!["{", "  \"a\": 1", "}"]);
    }

    #[test]
    fn stream_non_json_falls_back_to_plain() {
        let entry = LogEntry::from_stream_message("hello");
        assert_eq!(entry, LogEntry::Text("hello".to_string()));
        assert_eq!(entry.format().label(), "Plain Text");
    }

    #[test]
    fn stream_quoted_string_is_structured() {
        let entry = LogEntry::from_stream_message("\"hello\"");
        assert_eq!(entry.format(), EntryFormat::Structured);
        assert_eq!(entry.content(), "\"hello\"");
    }

    #[test]
    fn binary_frames_are_decoded_lossily() {
        let entry = LogEntry::from_stream_bytes(&[0x66, 0x6f, 0xff]);
        assert_eq!(entry.format(), EntryFormat::Plain);
        assert!(entry.content().starts_with("fo"));
    }

    #[test]
    fn keys_keep_insertion_order() {
        let entry = LogEntry::from_stream_message(r#"{"zeta":1,"alpha":2,"mid":3}"#);
        assert_eq!(
            entry.content_lines(),
            vec!["{", "  \"zeta\": 1,", "  \"alpha\": 2,", "  \"mid\": 3", "}"]
        );
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(LogEntry::Text(String::new()).content_lines().is_empty());
    }

    #[test]
    fn trailing_newline_does_not_add_a_line() {
        let entry = LogEntry::Text("a\n\nb\n".to_string());
        assert_eq!(entry.content_lines(), vec!["a", "", "b"]);
    }

    #[test]
    fn lone_carriage_returns_and_separators_break_lines() {
        let entry = LogEntry::Text("one\rtwo\u{2028}three\u{85}four".to_string());
        assert_eq!(entry.content_lines(), vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn multiline_text_splits_on_line_breaks() {
        let entry = LogEntry::Text("first\r\nsecond\nthird".to_string());
        assert_eq!(entry.content_lines(), vec!["first", "second", "third"]);
    }
}
