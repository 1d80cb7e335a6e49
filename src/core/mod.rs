// Core algorithm exports
pub mod compatibility;
pub mod prioritizer;
pub mod scoring;
pub mod selector;

pub use compatibility::is_compatible;
pub use prioritizer::prioritize;
pub use scoring::{match_score, preference_bonus};
pub use selector::{MatchSelector, SelectError, DEFAULT_PROCESSING_CAP};
