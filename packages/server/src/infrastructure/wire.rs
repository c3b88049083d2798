//! Wire codec for the request/response text protocol.
//!
//! Requests are UTF-8 text, space-separated: the first token is a numeric
//! command code, the rest is the command payload. Responses are raw text
//! with no framing; the datagram boundary is the sole message boundary.
//!
//! The tokenizer splits on every single space and the payload is re-joined
//! with single spaces, so payload text round-trips verbatim, including
//! empty tokens from consecutive spaces. Payloads are otherwise accepted
//! unvalidated; a payload colliding with the delimiter convention is an
//! inherent weakness of the text protocol, kept for compatibility.

use thiserror::Error;

use crate::domain::DisplayName;

/// Literal error reply for every rejected request.
pub const ILLEGAL_REQUEST: &str = "Illegal request";

/// A decoded request: command code plus merged payload.
///
/// Command codes: `1=Join, 2=Send, 3=Rename, 4=Leave, 5=Poll`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Join the group under the payload as display name
    Join(String),
    /// Send the payload as a message to every other member
    Send(String),
    /// Change the sender's display name to the payload
    Rename(String),
    /// Leave the group (payload ignored)
    Leave,
    /// Drain the sender's mailbox (payload ignored)
    Poll,
}

/// Errors raised while decoding a request line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WireError {
    /// The request carried no text at all
    #[error("empty request")]
    EmptyRequest,

    /// The first token is not one of the five recognized command codes
    #[error("unrecognized command code: {0:?}")]
    UnrecognizedCode(String),
}

/// Decode one raw request line into a [`Command`].
///
/// An empty line is reported as [`WireError::EmptyRequest`] rather than
/// treated as a code; both decode errors are answered on the wire with
/// [`ILLEGAL_REQUEST`].
pub fn decode(raw: &str) -> Result<Command, WireError> {
    if raw.is_empty() {
        return Err(WireError::EmptyRequest);
    }

    let mut tokens = raw.split(' ');
    // split() always yields at least one token for non-empty input
    let code = tokens.next().unwrap_or_default();
    let payload = tokens.collect::<Vec<_>>().join(" ");

    match code {
        "1" => Ok(Command::Join(payload)),
        "2" => Ok(Command::Send(payload)),
        "3" => Ok(Command::Rename(payload)),
        "4" => Ok(Command::Leave),
        "5" => Ok(Command::Poll),
        other => Err(WireError::UnrecognizedCode(other.to_string())),
    }
}

/// Encode the Join reply: other members' names in registry order, joined
/// with `", "`. Empty when the joiner is the sole member.
pub fn encode_roster(names: &[DisplayName]) -> String {
    names
        .iter()
        .map(DisplayName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Encode a drained mailbox: every line followed by a newline, including a
/// trailing newline after the final entry. An empty mailbox encodes as the
/// empty string.
pub fn encode_mailbox(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_join_with_payload() {
        // when:
        let command = decode("1 Alice").unwrap();

        // then:
        assert_eq!(command, Command::Join("Alice".to_string()));
    }

    #[test]
    fn test_decode_send_merges_payload_tokens() {
        // given: a payload spanning several tokens
        let raw = "2 hello there world";

        // when:
        let command = decode(raw).unwrap();

        // then: tokens are re-joined with single spaces
        assert_eq!(command, Command::Send("hello there world".to_string()));
    }

    #[test]
    fn test_decode_preserves_empty_tokens_in_payload() {
        // given: consecutive spaces produce empty tokens
        let raw = "2  leading";

        // when:
        let command = decode(raw).unwrap();

        // then: the empty token survives the merge
        assert_eq!(command, Command::Send(" leading".to_string()));
    }

    #[test]
    fn test_decode_leave_and_poll_ignore_payload() {
        // then:
        assert_eq!(decode("4").unwrap(), Command::Leave);
        assert_eq!(decode("4 trailing junk").unwrap(), Command::Leave);
        assert_eq!(decode("5").unwrap(), Command::Poll);
    }

    #[test]
    fn test_decode_join_with_no_payload_yields_empty_name() {
        // when:
        let command = decode("1").unwrap();

        // then: zero payload tokens merge to the empty string
        assert_eq!(command, Command::Join(String::new()));
    }

    #[test]
    fn test_decode_empty_input_fails() {
        // when:
        let result = decode("");

        // then:
        assert_eq!(result, Err(WireError::EmptyRequest));
    }

    #[test]
    fn test_decode_unrecognized_code_fails() {
        // then:
        assert_eq!(
            decode("6 whatever"),
            Err(WireError::UnrecognizedCode("6".to_string()))
        );
        assert_eq!(
            decode("join Alice"),
            Err(WireError::UnrecognizedCode("join".to_string()))
        );
    }

    #[test]
    fn test_encode_roster_joins_with_comma_space() {
        // given:
        let names = vec![
            DisplayName::new("Alice".to_string()),
            DisplayName::new("Bob".to_string()),
        ];

        // then:
        assert_eq!(encode_roster(&names), "Alice, Bob");
        assert_eq!(encode_roster(&[]), "");
    }

    #[test]
    fn test_encode_mailbox_has_trailing_newline() {
        // given:
        let lines = vec!["Alice: hi".to_string(), "Bob has joined".to_string()];

        // then: one newline after every entry, including the last
        assert_eq!(encode_mailbox(&lines), "Alice: hi\nBob has joined\n");
    }

    #[test]
    fn test_encode_mailbox_empty_is_empty_string() {
        // then:
        assert_eq!(encode_mailbox(&[]), "");
    }
}
