// ../tests/wounds_tests.rs
use deadlight::wounds::apply_wound_cascading;
use deadlight::*;
use std::str::FromStr;

#[test]
fn test_damage_by_hits() {
    assert_eq!(damage(3, 0), 0);
    assert_eq!(damage(3, 1), 3);
    assert_eq!(damage(3, 2), 4);
    assert_eq!(damage(3, 3), 5);
    assert_eq!(damage(3, 4), 6);
    assert_eq!(damage(3, 10), 6);
}

#[test]
fn test_damage_never_shrinks_with_more_hits() {
    for base in 0..=8u8 {
        let mut last = 0;
        for hits in 0..=12u8 {
            let dealt = damage(base, hits);
            assert!(dealt >= last, "damage({base}, {hits}) dropped");
            last = dealt;
        }
        assert_eq!(damage(base, 12), base + 3);
    }
}

#[test]
fn test_severity_boundaries() {
    assert_eq!(severity_of(0), None);
    assert_eq!(severity_of(1), Some(WoundTier::Bruised));
    assert_eq!(severity_of(2), Some(WoundTier::Bruised));
    assert_eq!(severity_of(3), Some(WoundTier::Bleeding));
    assert_eq!(severity_of(4), Some(WoundTier::Bleeding));
    assert_eq!(severity_of(5), Some(WoundTier::Broken));
    assert_eq!(severity_of(6), Some(WoundTier::Broken));
    assert_eq!(severity_of(7), Some(WoundTier::Critical));
    assert_eq!(severity_of(200), Some(WoundTier::Critical));
}

#[test]
fn test_healing_stops_at_zero() {
    let wounds = Wounds {
        bruised: 1,
        ..Wounds::default()
    };
    assert_eq!(apply_wound(wounds, WoundTier::Bruised, -99).bruised, 0);

    let wounds = Wounds {
        bleeding: 2,
        broken: 1,
        ..Wounds::default()
    };
    let healed = apply_wound(wounds, WoundTier::Bleeding, -1);
    assert_eq!(healed.bleeding, 1);
    assert_eq!(healed.broken, 1);
}

#[test]
fn test_single_tier_wounds_have_no_cap() {
    let wounds = apply_wound(Wounds::default(), WoundTier::Bruised, 50);
    assert_eq!(wounds.bruised, 50);
    assert_eq!(wounds.bleeding, 0);
}

#[test]
fn test_critical_is_a_flag() {
    let wounds = apply_wound(Wounds::default(), WoundTier::Critical, 3);
    assert!(wounds.critical);
    assert_eq!(wounds.worst(), Some(WoundTier::Critical));

    assert!(!apply_wound(wounds, WoundTier::Critical, 0).critical);
    assert!(!apply_wound(wounds, WoundTier::Critical, -1).critical);
}

#[test]
fn test_capacity_follows_grit() {
    let capacity = WoundCapacity::for_grit(1);
    assert_eq!(capacity.bruised, 3);
    assert_eq!(capacity.bleeding, 3);
    assert_eq!(capacity.broken, 2);
    assert_eq!(WoundCapacity::for_grit(4).bruised, 6);
}

#[test]
fn test_cascade_spills_into_next_tier() {
    let capacity = WoundCapacity::for_grit(1);
    let wounds = Wounds {
        bruised: 2,
        ..Wounds::default()
    };

    let next = apply_wound_cascading(wounds, WoundTier::Bruised, 3, &capacity);
    assert_eq!(next.bruised, 3);
    assert_eq!(next.bleeding, 2);
    assert!(!next.critical);
}

#[test]
fn test_cascade_past_broken_is_critical() {
    let capacity = WoundCapacity::for_grit(1);
    let wounds = Wounds {
        bruised: 3,
        bleeding: 3,
        broken: 2,
        critical: false,
    };

    let next = apply_wound_cascading(wounds, WoundTier::Bruised, 1, &capacity);
    assert_eq!(next.bruised, 3);
    assert_eq!(next.bleeding, 3);
    assert_eq!(next.broken, 2);
    assert!(next.critical);
}

#[test]
fn test_cascade_heals_like_single_tier() {
    let capacity = WoundCapacity::for_grit(2);
    let wounds = Wounds {
        bleeding: 2,
        ..Wounds::default()
    };
    assert_eq!(
        apply_wound_cascading(wounds, WoundTier::Bleeding, -5, &capacity),
        apply_wound(wounds, WoundTier::Bleeding, -5)
    );
}

#[test]
fn test_wound_tier_parses_any_case() {
    assert_eq!(WoundTier::from_str("BLEEDING").ok(), Some(WoundTier::Bleeding));
    assert_eq!(WoundTier::from_str("broken").ok(), Some(WoundTier::Broken));
    assert!(WoundTier::from_str("scratched").is_err());
    assert_eq!(WoundTier::Bruised.to_string(), "bruised");
}

#[test]
fn test_unwounded() {
    assert!(Wounds::default().is_unwounded());
    let wounds = apply_wound(Wounds::default(), WoundTier::Broken, 1);
    assert_eq!(wounds.worst(), Some(WoundTier::Broken));
}

#[test]
fn test_wounds_accumulate_past_small_counts() {
    let wounds = apply_wound(Wounds::default(), WoundTier::Bruised, 300);
    assert_eq!(wounds.bruised, 300);

    let wounds = apply_wound(wounds, WoundTier::Bruised, 200);
    assert_eq!(wounds.bruised, 500);
    assert_eq!(apply_wound(wounds, WoundTier::Bruised, i32::MIN).bruised, 0);

    // A huge hit fills every tier and ends critical.
    let capacity = WoundCapacity::for_grit(2);
    let wounds = apply_wound_cascading(Wounds::default(), WoundTier::Bruised, i32::MAX, &capacity);
    assert_eq!(wounds.bruised, 4);
    assert_eq!(wounds.bleeding, 3);
    assert_eq!(wounds.broken, 2);
    assert!(wounds.critical);
}
