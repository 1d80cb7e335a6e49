use crate::models::UserProfile;

/// Check whether two users are compatible based on gender preferences
///
/// Strict mode requires mutual interest: each user's stated preference
/// must accept the other's gender. Relaxed mode requires only one
/// direction to hold.
///
/// If either profile is missing its gender or preference, the pair is
/// incompatible under strict mode and compatible under relaxed mode.
#[inline]
pub fn is_compatible(requester: &UserProfile, candidate: &UserProfile, strict: bool) -> bool {
    let (req_gender, req_interest, cand_gender, cand_interest) = match (
        requester.gender,
        requester.interested_in,
        candidate.gender,
        candidate.interested_in,
    ) {
        (Some(rg), Some(ri), Some(cg), Some(ci)) => (rg, ri, cg, ci),
        _ => return !strict,
    };

    let requester_ok = req_interest.accepts(cand_gender);
    let candidate_ok = cand_interest.accepts(req_gender);

    if strict {
        requester_ok && candidate_ok
    } else {
        requester_ok || candidate_ok
    }
}
