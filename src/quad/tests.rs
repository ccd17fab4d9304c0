use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;

fn random_quad3(rng: &mut ChaCha8Rng) -> Quad3 {
    Quad3::new(
        Quad2::from_bits(rng.gen()),
        Quad2::from_bits(rng.gen()),
        Quad2::from_bits(rng.gen()),
        Quad2::from_bits(rng.gen()),
    )
}

#[test]
fn point_ops_return_new_values() {
    let q = Quad2::EMPTY.set(1, 2);
    assert!(q.get(1, 2));
    assert!(!Quad2::EMPTY.get(1, 2));
    let cleared = q.clear(1, 2);
    assert!(q.get(1, 2));
    assert!(cleared.is_empty());
    assert_eq!(q.with(1, 2, false), cleared);
    assert_eq!(q.set(1, 2), q);
    assert_eq!(cleared.clear(1, 2), cleared);
}

#[test]
fn quadrants_partition_the_square() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..100 {
        let q = Quad2::from_bits(rng.gen());
        assert_eq!((q.nw() | q.ne() | q.sw() | q.se()).bits(), q.bits());
        assert_eq!(q.nw().bits() & q.ne().bits(), 0);
        assert_eq!(q.sw().bits() & q.se().bits(), 0);
        assert_eq!(
            (q.nw().bits() | q.ne().bits()) & (q.sw().bits() | q.se().bits()),
            0
        );
    }
}

#[test]
fn edge_masks_select_the_rim() {
    let q = Quad2::EMPTY.set(0, 0).set(3, 0).set(0, 3).set(2, 2);
    assert_eq!(q.north(), Quad2::EMPTY.set(0, 0).set(3, 0));
    assert_eq!(q.west(), Quad2::EMPTY.set(0, 0).set(0, 3));
    assert_eq!(q.south(), Quad2::EMPTY.set(0, 3));
    assert!(q.east().is_empty());
    assert!(q.set(3, 1).east() == Quad2::EMPTY.set(3, 1));
}

#[test]
fn seams_combine_with_or() {
    let upper = Quad2::EMPTY.set(2, 3);
    let lower = Quad2::EMPTY;
    assert!(!(upper.south() | lower.north()).is_empty());
    assert!((upper.north() | lower.south()).is_empty());
}

#[test]
fn quad3_points_reach_the_right_corner() {
    let q = Quad3::EMPTY.set(1, 1).set(6, 2).set(0, 7).set(5, 5);
    assert!(q.get(1, 1) && q.get(6, 2) && q.get(0, 7) && q.get(5, 5));
    assert!(!q.get(6, 6));
    assert_eq!(q.nw(), Quad2::EMPTY.set(1, 1));
    assert_eq!(q.ne(), Quad2::EMPTY.set(2, 2));
    assert_eq!(q.sw(), Quad2::EMPTY.set(0, 3));
    assert_eq!(q.se(), Quad2::EMPTY.set(1, 1));
    assert!(q.clear(1, 1).nw().is_empty());
    assert!(q.get(1, 1));
}

#[test]
fn quad3_edge_predicates() {
    assert!(Quad3::EMPTY.north_empty() && Quad3::EMPTY.south_empty());
    assert!(Quad3::EMPTY.west_empty() && Quad3::EMPTY.east_empty());

    let q = Quad3::EMPTY.set(5, 0);
    assert!(!q.north_empty());
    assert!(q.south_empty() && q.west_empty() && q.east_empty());

    let q = Quad3::EMPTY.set(7, 6);
    assert!(!q.east_empty());
    assert!(q.north_empty() && q.south_empty() && q.west_empty());

    let q = Quad3::EMPTY.set(0, 3).set(2, 7);
    assert!(!q.west_empty() && !q.south_empty());
    assert!(q.north_empty() && q.east_empty());
}

#[test]
fn diff_is_empty_iff_identical() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..200 {
        let a = random_quad3(&mut rng);
        let b = random_quad3(&mut rng);
        assert!(a.diff(a).no_change());
        assert_eq!(a.diff(b).no_change(), a == b);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(a.diff(b).get(x, y), a.get(x, y) != b.get(x, y));
            }
        }
    }
}

#[test]
fn diff_localizes_changes() {
    let a = Quad3::EMPTY.set(2, 2).set(6, 1);
    let report = a.set(0, 6).diff(a);
    assert!(!report.no_change());
    assert!(report.nw_unchanged() && report.ne_unchanged() && report.se_unchanged());
    assert!(!report.sw_unchanged());
    assert!(!report.west_unchanged());
    assert!(report.north_unchanged() && report.south_unchanged() && report.east_unchanged());

    let report = a.clear(6, 1).diff(a);
    assert!(!report.ne_unchanged());
    assert!(report.nw_unchanged() && report.sw_unchanged() && report.se_unchanged());
    assert!(report.north_unchanged() && report.south_unchanged());
    assert!(report.west_unchanged() && report.east_unchanged());
}
