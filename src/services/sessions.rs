use crate::prompts::DATING_ADVISOR_PROMPT;
use crate::services::openai::ChatMessage;
use moka::future::Cache;
use std::time::Duration;

/// Topics worth tracking for conversational context
const TRACKED_TOPICS: &[&str] = &["date", "match", "profile", "advice", "relationship"];

/// Maximum number of recent topics kept per session
const MAX_RECENT_TOPICS: usize = 5;

/// One user's conversation with the advisor
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub messages: Vec<ChatMessage>,
    pub recent_topics: Vec<String>,
}

impl ChatSession {
    fn new() -> Self {
        Self {
            messages: vec![ChatMessage::system(DATING_ADVISOR_PROMPT)],
            recent_topics: Vec::new(),
        }
    }

    /// Record any tracked topic keywords found in the user's message
    pub fn note_topics(&mut self, message: &str) {
        let lowered = message.to_lowercase();
        for topic in TRACKED_TOPICS {
            if self.recent_topics.len() >= MAX_RECENT_TOPICS {
                break;
            }
            if lowered.contains(topic) && !self.recent_topics.iter().any(|t| t == topic) {
                self.recent_topics.push((*topic).to_string());
            }
        }
    }
}

/// In-memory session store
///
/// Sessions are bounded in count and expire after the configured idle
/// TTL; there is no persistence, an expired session simply restarts
/// from the system prompt.
pub struct SessionStore {
    sessions: Cache<String, ChatSession>,
}

impl SessionStore {
    pub fn new(capacity: u64, ttl_secs: u64) -> Self {
        let sessions = Cache::builder()
            .max_capacity(capacity)
            .time_to_idle(Duration::from_secs(ttl_secs))
            .build();

        Self { sessions }
    }

    /// Fetch the user's session, creating a fresh one if absent
    pub async fn get_or_create(&self, user_id: &str) -> ChatSession {
        match self.sessions.get(user_id).await {
            Some(session) => session,
            None => ChatSession::new(),
        }
    }

    /// Store the updated session back
    pub async fn put(&self, user_id: &str, session: ChatSession) {
        self.sessions.insert(user_id.to_string(), session).await;
    }
}
