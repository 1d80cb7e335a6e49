// Unit tests for the datemate-algo matching core

use datemate_algo::core::{
    compatibility::is_compatible,
    scoring::{match_score, preference_bonus},
};
use datemate_algo::models::{Gender, Interest, UserProfile};

fn profile(id: &str, gender: Gender, interest: Interest) -> UserProfile {
    UserProfile::new(id).with_gender(gender).with_interest(interest)
}

#[test]
fn test_missing_fields_are_incompatible_only_under_strict() {
    let complete = profile("a", Gender::Female, Interest::Boys);

    let missing_variants = vec![
        UserProfile::new("b"),
        UserProfile::new("c").with_gender(Gender::Male),
        UserProfile::new("d").with_interest(Interest::Girls),
    ];

    for other in &missing_variants {
        assert!(!is_compatible(&complete, other, true));
        assert!(is_compatible(&complete, other, false));
        assert!(!is_compatible(other, &complete, true));
        assert!(is_compatible(other, &complete, false));
    }
}

#[test]
fn test_score_is_none_whenever_incompatible() {
    let genders = [Gender::Male, Gender::Female];
    let interests = [Interest::Boys, Interest::Girls, Interest::Both];

    for &rg in &genders {
        for &ri in &interests {
            for &cg in &genders {
                for &ci in &interests {
                    let requester = profile("r", rg, ri);
                    let candidate = profile("c", cg, ci);
                    for strict in [true, false] {
                        let compatible = is_compatible(&requester, &candidate, strict);
                        let score = match_score(&requester, &candidate, strict);
                        assert_eq!(score.is_some(), compatible);
                    }
                }
            }
        }
    }
}

#[test]
fn test_preference_bonus_values() {
    assert_eq!(
        preference_bonus(Some(Interest::Girls), Some(Gender::Female)),
        200.0
    );
    assert_eq!(
        preference_bonus(Some(Interest::Boys), Some(Gender::Male)),
        200.0
    );
    assert_eq!(
        preference_bonus(Some(Interest::Both), Some(Gender::Male)),
        50.0
    );
    assert_eq!(
        preference_bonus(Some(Interest::Both), None),
        50.0
    );
    assert_eq!(
        preference_bonus(Some(Interest::Girls), Some(Gender::Male)),
        0.0
    );
    assert_eq!(preference_bonus(None, Some(Gender::Female)), 0.0);
}

#[test]
fn test_strict_requires_mutual_interest() {
    // u3 from the product scenario: wants girls, requester is male
    let requester = profile("u1", Gender::Male, Interest::Girls);
    let u3 = profile("u3", Gender::Male, Interest::Girls);

    assert!(!is_compatible(&requester, &u3, true));
    assert_eq!(match_score(&requester, &u3, true), None);
}
