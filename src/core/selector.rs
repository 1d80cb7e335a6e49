use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::core::{prioritizer::prioritize, scoring::match_score};
use crate::models::{ScoredCandidate, UserProfile};

/// Default cap on how many prioritized candidates are evaluated per
/// selection call. Candidates beyond the cap are never scored; this
/// bounds worst-case latency on large pools.
pub const DEFAULT_PROCESSING_CAP: usize = 50;

/// Errors from the match selector
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("invalid limit: must be greater than zero")]
    InvalidLimit,

    #[error("requester profile has an empty id")]
    MissingRequesterId,

    #[error("candidate pool contains a profile with an empty id")]
    MissingCandidateId,
}

/// Match selection orchestrator
///
/// Runs a strict pass over the prioritized, capped pool, tops the
/// results up from a relaxed pass when the strict pass falls short of
/// the limit, and returns the combined list ranked by score.
#[derive(Debug, Clone)]
pub struct MatchSelector {
    processing_cap: usize,
}

impl MatchSelector {
    pub fn new(processing_cap: usize) -> Self {
        Self { processing_cap }
    }

    /// Select up to `limit` compatible candidates for the requester
    ///
    /// The result is deduplicated by id, never contains the requester,
    /// and is sorted descending by score. Ties keep the order the
    /// passes produced them in (stable sort), so preference-aligned
    /// candidates surface first among equals.
    pub fn select_matches(
        &self,
        requester: &UserProfile,
        pool: Vec<UserProfile>,
        limit: usize,
    ) -> Result<Vec<ScoredCandidate>, SelectError> {
        if limit == 0 {
            return Err(SelectError::InvalidLimit);
        }
        if requester.id.is_empty() {
            return Err(SelectError::MissingRequesterId);
        }
        if pool.iter().any(|candidate| candidate.id.is_empty()) {
            return Err(SelectError::MissingCandidateId);
        }

        let candidates: Vec<UserProfile> = prioritize(requester, pool)
            .into_iter()
            .take(self.processing_cap)
            .collect();

        let mut seen: HashSet<String> = HashSet::new();
        let mut matches: Vec<ScoredCandidate> = Vec::new();

        for candidate in scan(requester, &candidates, true) {
            if seen.insert(candidate.profile.id.clone()) {
                matches.push(candidate);
            }
        }
        debug!(
            "strict pass produced {} matches from {} candidates",
            matches.len(),
            candidates.len()
        );

        if matches.len() < limit {
            let remaining = limit - matches.len();
            let mut added = 0;
            for candidate in scan(requester, &candidates, false) {
                if added == remaining {
                    break;
                }
                if seen.insert(candidate.profile.id.clone()) {
                    matches.push(candidate);
                    added += 1;
                }
            }
            debug!("relaxed pass added {} matches", added);
        }

        // Stable sort: equal scores keep the order built above
        matches.sort_by(|a, b| {
            b.match_score
                .partial_cmp(&a.match_score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        matches.truncate(limit);

        Ok(matches)
    }
}

impl Default for MatchSelector {
    fn default() -> Self {
        Self::new(DEFAULT_PROCESSING_CAP)
    }
}

/// One scoring pass over the capped candidate set
fn scan(requester: &UserProfile, candidates: &[UserProfile], strict: bool) -> Vec<ScoredCandidate> {
    candidates
        .iter()
        .filter_map(|candidate| {
            match_score(requester, candidate, strict).map(|score| ScoredCandidate {
                profile: candidate.clone(),
                match_score: score,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Interest};

    fn profile(id: &str, gender: Gender, interest: Interest) -> UserProfile {
        UserProfile::new(id).with_gender(gender).with_interest(interest)
    }

    fn requester() -> UserProfile {
        profile("u1", Gender::Male, Interest::Girls)
    }

    #[test]
    fn test_mutual_match_selected_one_sided_excluded() {
        let selector = MatchSelector::default();
        let pool = vec![
            profile("u2", Gender::Female, Interest::Boys),
            profile("u3", Gender::Male, Interest::Girls),
        ];

        let matches = selector.select_matches(&requester(), pool, 5).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].profile.id, "u2");
        assert_eq!(matches[0].match_score, 200.0);
    }

    #[test]
    fn test_relaxed_pass_tops_up_without_duplicates() {
        let selector = MatchSelector::default();
        let pool = vec![
            // Strict match
            profile("u2", Gender::Female, Interest::Boys),
            // Relaxed only: wants girls, requester is male
            profile("u3", Gender::Female, Interest::Girls),
        ];

        let matches = selector.select_matches(&requester(), pool, 5).unwrap();

        assert_eq!(matches.len(), 2);
        let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["u2", "u3"]);
        // The relaxed-only candidate still earns the exact-match bonus
        assert_eq!(matches[1].match_score, 200.0);
    }

    #[test]
    fn test_relaxed_top_up_respects_remaining_slots() {
        let selector = MatchSelector::default();
        let mut pool = vec![profile("s1", Gender::Female, Interest::Boys)];
        // Relaxed-only candidates
        for i in 0..5 {
            pool.push(profile(&format!("r{}", i), Gender::Female, Interest::Girls));
        }

        let matches = selector.select_matches(&requester(), pool, 3).unwrap();

        assert_eq!(matches.len(), 3);
        assert!(matches.iter().any(|m| m.profile.id == "s1"));
    }

    #[test]
    fn test_skips_relaxed_pass_when_strict_fills_limit() {
        let selector = MatchSelector::default();
        let pool = vec![
            profile("s1", Gender::Female, Interest::Boys),
            profile("s2", Gender::Female, Interest::Boys),
            // Would only qualify under relaxed rules
            profile("r1", Gender::Female, Interest::Girls),
        ];

        let matches = selector.select_matches(&requester(), pool, 2).unwrap();

        let ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
        assert_eq!(ids, vec!["s1", "s2"]);
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let selector = MatchSelector::default();
        let me = profile("u1", Gender::Male, Interest::Both);
        let pool = vec![
            // Scores 50 under the open preference
            profile("u2", Gender::Female, Interest::Boys),
            profile("u3", Gender::Male, Interest::Both),
        ];

        let matches = selector.select_matches(&me, pool, 5).unwrap();

        for window in matches.windows(2) {
            assert!(window[0].match_score >= window[1].match_score);
        }
    }

    #[test]
    fn test_processing_cap_bounds_evaluation() {
        let selector = MatchSelector::new(50);
        // 60 strict-compatible candidates; only the first 50 post-
        // prioritization may appear, even with a generous limit.
        let pool: Vec<UserProfile> = (0..60)
            .map(|i| profile(&format!("c{}", i), Gender::Female, Interest::Boys))
            .collect();

        let matches = selector.select_matches(&requester(), pool, 60).unwrap();

        assert_eq!(matches.len(), 50);
        let ids: HashSet<String> = matches.iter().map(|m| m.profile.id.clone()).collect();
        for i in 50..60 {
            assert!(!ids.contains(&format!("c{}", i)));
        }
    }

    #[test]
    fn test_requester_never_in_results() {
        let selector = MatchSelector::default();
        let me = requester();
        let pool = vec![me.clone(), profile("u2", Gender::Female, Interest::Boys)];

        let matches = selector.select_matches(&me, pool, 5).unwrap();

        assert!(matches.iter().all(|m| m.profile.id != me.id));
    }

    #[test]
    fn test_zero_limit_rejected() {
        let selector = MatchSelector::default();
        let result = selector.select_matches(&requester(), vec![], 0);
        assert_eq!(result.unwrap_err(), SelectError::InvalidLimit);
    }

    #[test]
    fn test_empty_ids_rejected() {
        let selector = MatchSelector::default();

        let anonymous = UserProfile::new("");
        assert_eq!(
            selector.select_matches(&anonymous, vec![], 5).unwrap_err(),
            SelectError::MissingRequesterId
        );

        let pool = vec![UserProfile::new("")];
        assert_eq!(
            selector.select_matches(&requester(), pool, 5).unwrap_err(),
            SelectError::MissingCandidateId
        );
    }

    #[test]
    fn test_no_duplicate_ids_in_output() {
        let selector = MatchSelector::default();
        let pool = vec![
            profile("u2", Gender::Female, Interest::Boys),
            profile("u2", Gender::Female, Interest::Girls),
            profile("u3", Gender::Female, Interest::Girls),
        ];

        let matches = selector.select_matches(&requester(), pool, 5).unwrap();

        let mut ids: Vec<&str> = matches.iter().map(|m| m.profile.id.as_str()).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
