// ../tests/tracks_tests.rs
use deadlight::tracks::{MAX_GUTS, MAX_THREAT, apply_delta, set_value};
use deadlight::*;

#[test]
fn test_apply_delta_clamps() {
    assert_eq!(apply_delta(3, 2, 0, 10), 5);
    assert_eq!(apply_delta(9, 4, 0, 10), 10);
    assert_eq!(apply_delta(2, -7, 0, 10), 0);
    assert_eq!(apply_delta(i32::MAX, 1, 0, 10), 10);
}

#[test]
fn test_set_value_clamps() {
    assert_eq!(set_value(7, 0, 10), 7);
    assert_eq!(set_value(15, 0, 10), 10);
    assert_eq!(set_value(-2, 0, 10), 0);
}

#[test]
fn test_no_op_changes_are_idempotent() {
    let threat = ScalarTrack::threat().set(4);
    assert_eq!(threat.apply(0), threat);
    assert_eq!(threat.apply(0).apply(0), threat);
    assert_eq!(threat.set(4).set(4), threat);
    assert_eq!(apply_delta(apply_delta(6, 0, 0, 10), 0, 0, 10), 6);
}

#[test]
fn test_inverted_bounds_do_not_panic() {
    assert_eq!(apply_delta(5, 1, 10, 0), 0);
    assert_eq!(set_value(5, 10, 0), 0);
}

#[test]
fn test_track_bounds() {
    let stress = ScalarTrack::stress(8);
    assert_eq!((stress.current, stress.min, stress.max), (0, 0, 8));
    assert!(stress.apply(12).is_maxed());

    let threat = ScalarTrack::threat();
    assert_eq!(threat.max, MAX_THREAT);
    assert_eq!(threat.apply(25).current, 10);

    let guts = ScalarTrack::guts();
    assert_eq!(guts.current, MAX_GUTS);
    assert!(guts.apply(-9).is_empty());
}

#[test]
fn test_new_track_clamps_its_start() {
    let track = ScalarTrack::new(12, 0, 5);
    assert_eq!(track.current, 5);
    assert_eq!(track.with_max(3).current, 3);
}
