//! RNG tests
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие колод
//! - отсутствие повторяющихся карт после тасовки
//! - draw(n) + draw(m) == draw(n + m) на одинаково перемешанных колодах
//! - RoundRng с seed'ом и без

use std::collections::HashSet;

use joker_ante_engine::domain::{Card, Deck};
use joker_ante_engine::engine::RandomSource;
use joker_ante_engine::infra::{DeterministicRng, RoundRng, SystemRng};

fn seeded_deck(seed: u64) -> Deck {
    let mut deck = Deck::new();
    deck.shuffle(&mut DeterministicRng::from_seed(seed));
    deck
}

//
// TEST 1 — same seed, same permutation
//
#[test]
fn same_seed_same_deck_order() {
    for seed in 0..64 {
        assert_eq!(seeded_deck(seed), seeded_deck(seed), "seed {seed}");
    }
}

//
// TEST 2 — different seeds produce different orders
//
#[test]
fn different_seeds_different_deck_order() {
    let orders: HashSet<Vec<Card>> = (0..64).map(|s| seeded_deck(s).cards).collect();
    assert_eq!(orders.len(), 64, "64 seeds must give 64 distinct shuffles");
}

//
// TEST 3 — shuffle is a permutation of the fresh deck
//
#[test]
fn shuffle_keeps_all_54_cards() {
    let fresh: HashSet<Card> = Deck::new().cards.into_iter().collect();
    for seed in [1, 42, 1234, u64::MAX] {
        let deck = seeded_deck(seed);
        assert_eq!(deck.len(), 54);
        let shuffled: HashSet<Card> = deck.cards.iter().copied().collect();
        assert_eq!(shuffled, fresh);
    }
    assert_ne!(seeded_deck(7).cards, Deck::new().cards);
}

//
// TEST 4 — split draws equal one combined draw
//
#[test]
fn split_draws_match_single_draw() {
    for seed in 0..32 {
        for (n, m) in [(4, 4), (0, 8), (13, 27), (50, 4)] {
            let mut split = seeded_deck(seed);
            let first = split.draw(n).unwrap();
            let second = split.draw(m).unwrap();

            let mut whole = seeded_deck(seed);
            let combined = whole.draw(n + m).unwrap();

            let a: HashSet<Card> = first.iter().copied().collect();
            let b: HashSet<Card> = second.iter().copied().collect();
            assert!(a.is_disjoint(&b), "seed {seed}: draws overlap");

            let mut joined = first.clone();
            joined.extend(second);
            assert_eq!(joined, combined, "seed {seed}, n={n}, m={m}");
            assert_eq!(split, whole);
        }
    }
}

//
// TEST 5 — RoundRng with a seed behaves like DeterministicRng
//
#[test]
fn round_rng_seeded_is_reproducible() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle(&mut RoundRng::new(Some(2024)));
    b.shuffle(&mut DeterministicRng::from_seed(2024));
    assert_eq!(a, b);

    assert!(matches!(RoundRng::new(None), RoundRng::System(_)));
    assert!(matches!(RoundRng::new(Some(1)), RoundRng::Seeded(_)));
}

//
// TEST 6 — system shuffles are still permutations
//
#[test]
fn system_rng_shuffle_keeps_cards() {
    let mut deck = Deck::new();
    deck.shuffle(&mut SystemRng);
    let mut sorted = deck.cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    sorted.sort();
    let mut fresh = Deck::new().cards.iter().map(|c| c.to_string()).collect::<Vec<_>>();
    fresh.sort();
    assert_eq!(sorted, fresh);
}

//
// TEST 7 — shuffle on empty / 1-element slice must not crash
//
#[test]
fn shuffle_tiny_slices_ok() {
    let mut rng = DeterministicRng::from_seed(42);
    let mut empty: Vec<u32> = vec![];
    rng.shuffle(&mut empty);
    assert!(empty.is_empty());

    let mut one = vec![123];
    rng.shuffle(&mut one);
    assert_eq!(one, vec![123]);
}
