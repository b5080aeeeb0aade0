//! Randomized property tests for the ship registry.
//!
//! These tests verify:
//! 1. Ship ordering is a strong total order agreeing with field equality
//! 2. Merge partitions ships into union and collisions
//! 3. Digests depend only on contents, never on insertion order
//! 4. Weak float sorting is total and loses nothing
//!
//! ## Running
//!
//! ```bash
//! cargo test --test fleet_properties -- --nocapture
//! ```

use std::cmp::Ordering;

use ship_registry::ordering::{nan_with_payload, partial_order, sort_weak, weak_cmp};
use ship_registry::{Fleet, Outcome, Ship, ShipClass};

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

const NAMES: [&str; 6] = ["Defiant", "Enterprise", "Excelsior", "Ganges", "Rubicon", "Voyager"];
const REGISTRIES: [&str; 4] = ["NCC-1701", "NCC-1701-A", "NX-74205", "NCC-72936"];

/// Generate ships from a small field domain so collisions are common.
///
/// Uses a seeded RNG for reproducibility. Same seed = same ships.
fn generate_ships(count: usize, seed: u64) -> Vec<Ship> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    (0..count)
        .map(|_| {
            let name = NAMES[rng.gen_range(0..NAMES.len())];
            let registry = REGISTRIES[rng.gen_range(0..REGISTRIES.len())];
            let class = ShipClass::ALL[rng.gen_range(0..ShipClass::ALL.len())];
            let year = rng.gen_range(2360..=2363);
            Ship::new(name, registry, class, year)
        })
        .collect()
}

fn fields_equal(a: &Ship, b: &Ship) -> bool {
    a.name() == b.name()
        && a.registry() == b.registry()
        && a.class() == b.class()
        && a.first_seen() == b.first_seen()
}

fn tuple(ship: &Ship) -> (&str, &str, ShipClass, u32) {
    (ship.name(), ship.registry(), ship.class(), ship.first_seen())
}

// ============================================================================
// ORDERING
// ============================================================================

#[test]
fn ship_order_is_strong_and_total() {
    let ships = generate_ships(200, 7);

    for a in &ships {
        for b in &ships {
            let lt = a < b;
            let eq = a == b;
            let gt = a > b;
            assert_eq!(
                [lt, eq, gt].iter().filter(|x| **x).count(),
                1,
                "exactly one of <, ==, > must hold for {a:?} / {b:?}"
            );
            assert_eq!(eq, fields_equal(a, b));
            assert_eq!(a.cmp(b), b.cmp(a).reverse());
            assert_eq!(a.cmp(b), tuple(a).cmp(&tuple(b)));
        }
    }
}

#[test]
fn ship_order_is_transitive() {
    let ships = generate_ships(60, 11);

    for a in &ships {
        for b in &ships {
            for c in &ships {
                if a < b && b < c {
                    assert!(a < c);
                }
            }
        }
    }
}

// ============================================================================
// FLEET
// ============================================================================

#[test]
fn fleet_is_sorted_and_unique() {
    let ships = generate_ships(500, 42);
    let fleet: Fleet = ships.iter().cloned().collect();

    let listed = fleet.snapshot();
    assert!(listed.windows(2).all(|w| w[0] < w[1]));

    let mut expected = ships.clone();
    expected.sort();
    expected.dedup();
    assert_eq!(listed, expected);

    println!("  {} generated, {} unique", ships.len(), fleet.len());
}

#[test]
fn merge_partitions_into_union_and_collisions() {
    for seed in 0..20 {
        let mut target: Fleet = generate_ships(40, seed).into_iter().collect();
        let mut source: Fleet = generate_ships(40, seed + 1000).into_iter().collect();

        let m = target.len();
        let n = source.len();
        let k = source.iter().filter(|s| target.contains(s)).count();
        let collisions: Vec<Ship> = source.iter().filter(|s| target.contains(s)).cloned().collect();

        let moved = target.merge(&mut source);

        assert_eq!(moved, n - k);
        assert_eq!(target.len(), m + n - k);
        assert_eq!(source.snapshot(), collisions);
    }
}

#[test]
fn merge_scenario_orders_by_name() {
    let mut fleet: Fleet = [
        Ship::new("Enterprise", "NCC-1701", ShipClass::Constitution, 2245),
        Ship::new("Excelsior", "NCC-2000", ShipClass::Excelsior, 2285),
    ]
    .into_iter()
    .collect();
    let mut defiant: Fleet = [Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370)]
        .into_iter()
        .collect();

    fleet.merge(&mut defiant);

    let names: Vec<&str> = fleet.iter().map(|s| s.name()).collect();
    assert_eq!(names, ["Defiant", "Enterprise", "Excelsior"]);
    assert!(defiant.is_empty());
}

#[test]
fn replace_by_name_keeps_size() {
    let mut fleet: Fleet = [
        Ship::new("Defiant", "NX-74205", ShipClass::Defiant, 2370),
        Ship::new("Voyager", "NCC-74656", ShipClass::Intrepid, 2371),
    ]
    .into_iter()
    .collect();
    let new = Ship::new("Defiant", "NX-74205-A", ShipClass::Defiant, 2375);

    assert_eq!(fleet.replace_by_name([new.clone()]), 1);
    assert_eq!(fleet.len(), 2);
    assert!(fleet.contains(&new));
    assert!(fleet.find_by(|s| s.registry() == "NX-74205").is_none());

    let before = fleet.clone();
    assert_eq!(
        fleet.replace_by_name([Ship::new("Yamato", "NCC-71807", ShipClass::Galaxy, 2365)]),
        0
    );
    assert_eq!(fleet, before);
}

// ============================================================================
// DIGEST
// ============================================================================

#[test]
fn digest_ignores_insertion_order() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);
    let ships = generate_ships(300, 12345);

    let reference: Fleet = ships.iter().cloned().collect();
    let root = reference.digest().expect("digest");

    for _ in 0..5 {
        let mut shuffled = ships.clone();
        shuffled.shuffle(&mut rng);
        let fleet: Fleet = shuffled.into_iter().collect();
        assert_eq!(fleet.digest().expect("digest"), root);
    }

    let other: Fleet = generate_ships(300, 12346).into_iter().collect();
    assert_ne!(other.digest().expect("digest"), root);

    println!("  Digest: {}", hex::encode(root));
}

// ============================================================================
// FLOATS
// ============================================================================

#[test]
fn weak_sort_sample_clusters_nans() {
    let nan_a = nan_with_payload(1);
    let nan_b = nan_with_payload(2);
    let mut values = [2.0, nan_a, f32::INFINITY, nan_b, nan_a, 1.0];

    sort_weak(&mut values);

    assert_eq!(values.len(), 6);
    assert_eq!(&values[..3], &[1.0, 2.0, f32::INFINITY]);
    assert!(values[3..].iter().all(|v| v.is_nan()));
    assert_eq!(values.iter().filter(|v| v.to_bits() == nan_a.to_bits()).count(), 2);
    assert_eq!(values.iter().filter(|v| v.to_bits() == nan_b.to_bits()).count(), 1);
}

#[test]
fn weak_sort_random_floats() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);

    for _ in 0..50 {
        let mut values: Vec<f32> = (0..64)
            .map(|_| match rng.gen_range(0..10) {
                0 => nan_with_payload(rng.gen_range(0..4)),
                1 => f32::INFINITY,
                2 => f32::NEG_INFINITY,
                _ => rng.gen_range(-1000.0..1000.0),
            })
            .collect();
        let nan_count = values.iter().filter(|v| v.is_nan()).count();

        sort_weak(&mut values);

        assert_eq!(values.len(), 64);
        assert!(values.windows(2).all(|w| weak_cmp(w[0], w[1]) != Ordering::Greater));
        assert!(values[values.len() - nan_count..].iter().all(|v| v.is_nan()));
        assert!(values[..values.len() - nan_count].iter().all(|v| !v.is_nan()));
    }
}

#[test]
fn partial_order_against_nan_is_unordered() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let nan = nan_with_payload(3);

    for _ in 0..100 {
        let x: f32 = rng.gen_range(-1e6..1e6);
        assert_eq!(partial_order(x, nan).outcome(), Outcome::Unordered);
        assert_eq!(partial_order(nan, x).outcome(), Outcome::Unordered);
    }
    assert_eq!(partial_order(1.0, f32::NAN).outcome(), Outcome::Unordered);
}
