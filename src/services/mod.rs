// Service exports
pub mod cache;
pub mod openai;
pub mod quotes;
pub mod sessions;
pub mod userdata;

pub use cache::{CacheKey, ResponseCache};
pub use openai::{ChatClient, ChatError, ChatMessage, ChatParams};
pub use quotes::{spawn_daily_quote_task, QuoteBoard, QUOTE_HISTORY_LIMIT};
pub use sessions::{ChatSession, SessionStore};
pub use userdata::{UserBundle, UserDataClient, UserDataError};
