//! crates/study_spots_core/src/assistant.rs
//!
//! The assistant conversation: an append-only transcript with at most one
//! outstanding recommendation request at a time.

/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

/// One transcript entry. Entries are appended and never rewritten.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

/// Greeting shown before the user has asked anything.
pub const GREETING: &str = "Hi! I'm your Campus Study Buddy. Tell me what kind of \
environment you're looking for (e.g., \"quiet place with outlets\" or \"busy cafe\").";

/// The conversation state for the assistant view.
///
/// While a request is pending, further submissions are refused rather than
/// queued; the flag is cleared on both the success and the degraded path.
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    pending: bool,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
            }],
            pending: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// True while a recommendation request is outstanding.
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Records the user's query and marks the conversation pending.
    ///
    /// Returns false, recording nothing, when a request is already
    /// outstanding or the query is blank.
    pub fn begin(&mut self, query: &str) -> bool {
        let query = query.trim();
        if self.pending || query.is_empty() {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: query.to_string(),
        });
        self.pending = true;
        true
    }

    /// Appends the assistant's reply and clears the pending flag.
    pub fn resolve(&mut self, reply: impl Into<String>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply.into(),
        });
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_with_the_greeting() {
        let conversation = Conversation::new();
        assert_eq!(conversation.messages().len(), 1);
        assert_eq!(conversation.messages()[0].role, ChatRole::Assistant);
        assert!(!conversation.is_pending());
    }

    #[test]
    fn begin_records_the_query_and_blocks_a_second_submission() {
        let mut conversation = Conversation::new();
        assert!(conversation.begin("quiet place with outlets"));
        assert!(conversation.is_pending());
        assert_eq!(conversation.messages().len(), 2);

        // Second submission while pending is refused, not queued.
        assert!(!conversation.begin("busy cafe"));
        assert_eq!(conversation.messages().len(), 2);
    }

    #[test]
    fn blank_queries_are_refused() {
        let mut conversation = Conversation::new();
        assert!(!conversation.begin("   "));
        assert!(!conversation.is_pending());
        assert_eq!(conversation.messages().len(), 1);
    }

    #[test]
    fn resolve_appends_the_reply_and_clears_pending() {
        let mut conversation = Conversation::new();
        conversation.begin("somewhere to read");
        conversation.resolve("Try the Central Library.");

        assert!(!conversation.is_pending());
        let last = conversation.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.text, "Try the Central Library.");

        // A new submission is accepted again.
        assert!(conversation.begin("ok, and with coffee?"));
    }
}
