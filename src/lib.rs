//! Date Mate backend: match recommendations, dating-advisor chat, and
//! daily date-idea quotes.
//!
//! The matching core (compatibility, scoring, prioritization and
//! selection) is pure and synchronous; the HTTP layer and the external
//! user-data/chat clients wrap around it.

pub mod config;
pub mod core;
pub mod models;
pub mod prompts;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{is_compatible, match_score, prioritize, MatchSelector, SelectError};
pub use models::{Gender, Interest, Quote, ScoredCandidate, UserProfile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let requester = UserProfile::new("u1")
            .with_gender(Gender::Male)
            .with_interest(Interest::Girls);
        let candidate = UserProfile::new("u2")
            .with_gender(Gender::Female)
            .with_interest(Interest::Boys);

        assert!(is_compatible(&requester, &candidate, true));
    }
}
