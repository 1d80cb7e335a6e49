use crate::models::UserProfile;

/// Reorder the candidate pool so preference-aligned candidates come first
///
/// Removes the requester's own profile, then stable-partitions the pool:
/// candidates of the requester's preferred gender keep their relative
/// order at the front, everyone else keeps theirs behind them. With no
/// single preferred gender the pool passes through in original order.
///
/// The selector caps how many candidates it evaluates per pass, so this
/// ordering decides who survives that cap on large pools.
pub fn prioritize(requester: &UserProfile, pool: Vec<UserProfile>) -> Vec<UserProfile> {
    let preferred = requester.interested_in.and_then(|i| i.preferred_gender());

    match preferred {
        Some(gender) => {
            let mut aligned = Vec::new();
            let mut others = Vec::new();
            for candidate in pool {
                if candidate.id == requester.id {
                    continue;
                }
                if candidate.gender == Some(gender) {
                    aligned.push(candidate);
                } else {
                    others.push(candidate);
                }
            }
            aligned.extend(others);
            aligned
        }
        None => pool
            .into_iter()
            .filter(|candidate| candidate.id != requester.id)
            .collect(),
    }
}
