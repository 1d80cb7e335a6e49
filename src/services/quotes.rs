use crate::models::Quote;
use crate::prompts::{QUOTE_PROMPTS, QUOTE_SYSTEM_PROMPT};
use crate::services::openai::{ChatClient, ChatError, ChatMessage, ChatParams};
use chrono::{Datelike, Duration as ChronoDuration, Utc};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

/// Maximum number of quotes retained in history
pub const QUOTE_HISTORY_LIMIT: usize = 30;

/// Generates date-idea quotes and keeps a bounded history
///
/// Quotes come from the chat API; the history lives in memory only and
/// drops its oldest entry past the limit.
pub struct QuoteBoard {
    chat: Arc<ChatClient>,
    history: RwLock<VecDeque<Quote>>,
}

impl QuoteBoard {
    pub fn new(chat: Arc<ChatClient>) -> Self {
        Self {
            chat,
            history: RwLock::new(VecDeque::new()),
        }
    }

    /// Generate a fresh date-idea quote in French
    ///
    /// The user prompt rotates daily through the prompt list so
    /// consecutive days ask for different kinds of ideas.
    pub async fn generate_quote(&self) -> Result<String, ChatError> {
        let prompt = QUOTE_PROMPTS[Utc::now().ordinal0() as usize % QUOTE_PROMPTS.len()];

        let messages = [
            ChatMessage::system(QUOTE_SYSTEM_PROMPT),
            ChatMessage::user(prompt),
        ];

        self.chat.chat(&messages, ChatParams::quote()).await
    }

    /// Generate a quote and append it to the history
    pub async fn store_daily_quote(&self) -> Result<Quote, ChatError> {
        let text = self.generate_quote().await?;
        let quote = Quote {
            quote: text,
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        };

        let mut history = self.history.write().await;
        history.push_back(quote.clone());
        if history.len() > QUOTE_HISTORY_LIMIT {
            history.pop_front();
        }

        Ok(quote)
    }

    /// Snapshot of the stored quotes, oldest first
    pub async fn history(&self) -> Vec<Quote> {
        self.history.read().await.iter().cloned().collect()
    }
}

/// Spawn the background task that stores a quote once a day at the
/// given UTC time
pub fn spawn_daily_quote_task(board: Arc<QuoteBoard>, hour: u32, minute: u32) {
    let hour = hour.min(23);
    let minute = minute.min(59);
    tokio::spawn(async move {
        loop {
            let now = Utc::now();
            let today_fire = now
                .date_naive()
                .and_hms_opt(hour, minute, 0)
                .expect("valid schedule time")
                .and_utc();

            let next_fire = if today_fire > now {
                today_fire
            } else {
                today_fire + ChronoDuration::days(1)
            };

            let wait = (next_fire - now)
                .to_std()
                .unwrap_or(std::time::Duration::from_secs(60));

            tokio::time::sleep(wait).await;

            match board.store_daily_quote().await {
                Ok(quote) => info!("Stored daily quote: {}", quote.quote),
                Err(e) => error!("Failed to generate daily quote: {}", e),
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_history_starts_empty() {
        let chat = Arc::new(ChatClient::new(
            "https://api.test/v1/chat/completions".to_string(),
            "test_key".to_string(),
            "gpt-3.5-turbo".to_string(),
        ));
        let board = QuoteBoard::new(chat);

        assert!(board.history().await.is_empty());
    }

    #[test]
    fn test_prompt_rotation_stays_in_bounds() {
        for ordinal in 0..400usize {
            let idx = ordinal % QUOTE_PROMPTS.len();
            assert!(idx < QUOTE_PROMPTS.len());
        }
    }
}
