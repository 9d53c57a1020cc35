use serde::{Deserialize, Serialize};

/// One rally message.
///
/// The vocabulary is closed: every message is a ping or a pong, and each tag
/// has exactly one counterpart. Endpoints that keep a rally going answer a
/// delivery with [`Message::counterpart`] of what they received.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    Ping,
    Pong,
}

impl Message {
    /// The reply this message calls for.
    pub fn counterpart(self) -> Message {
        match self {
            Message::Ping => Message::Pong,
            Message::Pong => Message::Ping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counterpart_is_the_opposite_tag() {
        assert_eq!(Message::Ping.counterpart(), Message::Pong);
        assert_eq!(Message::Pong.counterpart(), Message::Ping);
    }
}
