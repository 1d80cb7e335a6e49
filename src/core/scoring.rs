use crate::core::compatibility::is_compatible;
use crate::models::{Gender, Interest, UserProfile};

/// Bonus for a candidate whose gender exactly matches the requester's
/// stated preference.
pub const EXACT_MATCH_BONUS: f64 = 200.0;

/// Bonus for a requester who is open to both genders.
pub const OPEN_PREFERENCE_BONUS: f64 = 50.0;

/// Score a candidate against the requester
///
/// Returns `None` when the pair is incompatible under the given
/// strictness; such candidates are excluded from results. A compatible
/// candidate always gets `Some(score)`, even when the preference bonus
/// works out to zero (possible in relaxed mode, where only the
/// candidate's interest may be satisfied).
#[inline]
pub fn match_score(requester: &UserProfile, candidate: &UserProfile, strict: bool) -> Option<f64> {
    if !is_compatible(requester, candidate, strict) {
        return None;
    }

    Some(preference_bonus(requester.interested_in, candidate.gender))
}

/// Preference-alignment bonus for a compatible pair
#[inline]
pub fn preference_bonus(interest: Option<Interest>, candidate_gender: Option<Gender>) -> f64 {
    match (interest, candidate_gender) {
        (Some(Interest::Girls), Some(Gender::Female)) => EXACT_MATCH_BONUS,
        (Some(Interest::Boys), Some(Gender::Male)) => EXACT_MATCH_BONUS,
        (Some(Interest::Both), _) => OPEN_PREFERENCE_BONUS,
        _ => 0.0,
    }
}
