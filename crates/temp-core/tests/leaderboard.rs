// File: crates/temp-core/tests/leaderboard.rs
// Purpose: Guess ranking against the listings' known daily maximum.

use temp_core::{rank_guesses, Guess, TemperatureListings};

fn fixture(name: &str) -> String {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name);
    std::fs::read_to_string(path).expect("read fixture")
}

#[test]
fn canonical_tie_case() {
    let guesses = vec![Guess::new("A", 100.0), Guess::new("B", 90.0), Guess::new("C", 90.0)];
    let ranked = rank_guesses(100.0, &guesses);

    let rows = ranked.iter().map(|g| (g.name.as_str(), g.distance, g.rank)).collect::<Vec<_>>();
    assert_eq!(rows, vec![("A", 0.0, 1), ("B", 10.0, 2), ("C", 10.0, 2)]);
}

#[test]
fn ranks_fixture_guesses_against_listing_maximum() {
    let listings = TemperatureListings::from_json_str(&fixture("listings.json")).expect("listings");
    let guesses: Vec<Guess> = serde_json::from_str(&fixture("guesses.json")).expect("guesses");
    let max = listings.max_temperature_for("6/29/2022").expect("known max");
    assert_eq!(max, 108.39);

    let ranked = rank_guesses(max, &guesses);
    let order = ranked.iter().map(|g| (g.name.as_str(), g.rank)).collect::<Vec<_>>();
    assert_eq!(order, vec![("Ana", 1), ("Cy", 2), ("Ben", 3), ("Dee", 4)]);
    assert!(ranked.windows(2).all(|w| w[0].distance <= w[1].distance));
}

#[test]
fn ranking_is_idempotent() {
    let guesses = vec![
        Guess::new("A", 95.0),
        Guess::new("B", 105.0),
        Guess::new("C", 100.0),
        Guess::new("D", 80.0),
        Guess::new("E", 120.0),
    ];
    let once = rank_guesses(100.0, &guesses);
    let twice = rank_guesses(100.0, &once.iter().map(Guess::from).collect::<Vec<_>>());
    assert_eq!(once, twice);
    assert_eq!(once.iter().map(|g| g.rank).collect::<Vec<_>>(), vec![1, 2, 2, 3, 3]);
}

#[test]
fn ranked_output_serializes_with_distinct_fields() {
    let ranked = rank_guesses(100.0, &[Guess::new("A", 97.5)]);
    let v = serde_json::to_value(&ranked).unwrap();
    assert_eq!(v[0]["distance"], 2.5);
    assert_eq!(v[0]["rank"], 1);
    assert_eq!(v[0]["guess"], 97.5);
}
