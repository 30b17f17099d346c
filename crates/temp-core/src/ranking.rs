// File: crates/temp-core/src/ranking.rs
// Summary: Leaderboard ranking of temperature guesses against the day's peak.

use serde::{Deserialize, Serialize};

/// A submitted guess, as read from the guesses resource.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Guess {
    pub name: String,
    pub guess: f64,
}

impl Guess {
    pub fn new(name: impl Into<String>, guess: f64) -> Self {
        Self { name: name.into(), guess }
    }
}

/// A guess placed on the leaderboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RankedGuess {
    pub name: String,
    pub guess: f64,
    /// Absolute distance from the known maximum.
    pub distance: f64,
    /// 1-based; equal distances share a rank and the next distance takes the next integer.
    pub rank: u32,
}

impl From<&RankedGuess> for Guess {
    fn from(r: &RankedGuess) -> Self {
        Guess { name: r.name.clone(), guess: r.guess }
    }
}

/// Rank guesses by closeness to `maximum`, closest first.
///
/// Guesses with equal distance share a rank, and the counter advances by one
/// per distinct distance (1, 2, 2, 3, ...). The sort is stable, so tied guesses
/// keep their submission order.
///
/// ```
/// use temp_core::ranking::{rank_guesses, Guess};
///
/// let ranked = rank_guesses(100.0, &[Guess::new("A", 100.0), Guess::new("B", 90.0), Guess::new("C", 110.0)]);
/// let ranks: Vec<u32> = ranked.iter().map(|g| g.rank).collect();
/// assert_eq!(ranks, vec![1, 2, 2]);
/// ```
pub fn rank_guesses(maximum: f64, guesses: &[Guess]) -> Vec<RankedGuess> {
    let mut ranked = guesses
        .iter()
        .map(|g| RankedGuess { name: g.name.clone(), guess: g.guess, distance: (g.guess - maximum).abs(), rank: 0 })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| sort_key(a.distance, maximum).total_cmp(&sort_key(b.distance, maximum)));

    let mut previous: Option<f64> = None;
    let mut current = 0u32;
    for g in &mut ranked {
        if previous.map_or(true, |p| !same_distance(p, g.distance)) {
            current += 1;
        }
        g.rank = current;
        previous = Some(g.distance);
    }
    ranked
}

/// A distance that is not a number sorts as if it were `maximum` away.
#[inline]
fn sort_key(distance: f64, maximum: f64) -> f64 {
    if distance.is_nan() { maximum } else { distance }
}

#[inline]
fn same_distance(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}
