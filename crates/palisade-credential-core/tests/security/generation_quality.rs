//! Positional and degeneracy checks for generated passwords.
//!
//! The generator seeds one guaranteed character per enabled class before
//! filling and shuffling. Without the shuffle those seeds would sit at
//! fixed leading positions — an attacker-visible structure. These tests
//! pin the absence of that structure and of degenerate repeated output.

use std::collections::HashSet;

use palisade_credential_core::password::{generate_password, CharsetConfig};
use palisade_credential_core::secure_shuffle;

/// With all four classes at length 8, roughly 29% of first characters are
/// uppercase (one guaranteed draw plus pool fills). Seed-first placement
/// would make it 100%; a generous window around the expectation catches
/// both a missing shuffle and a grossly biased one.
#[test]
fn guaranteed_characters_are_not_pinned_to_the_front() {
    const RUNS: usize = 2_000;
    let uppercase_first = (0..RUNS)
        .filter(|_| {
            let pw = generate_password(8, &CharsetConfig::default())
                .expect("generation should succeed");
            pw.chars().next().is_some_and(|c| c.is_ascii_uppercase())
        })
        .count();
    // Expectation ~580 of 2000; ±20 sigma keeps false alarms out while a
    // missing shuffle (2000 of 2000) is unmistakable.
    assert!(
        (200..=1200).contains(&uppercase_first),
        "uppercase led {uppercase_first} of {RUNS} passwords — positional bias"
    );
}

/// Element 0 of a 3-element shuffle should stay in place about a third of
/// the time. Position counts over a tiny permutation space are the
/// cheapest way to spot a broken swap loop.
#[test]
fn shuffle_leaves_no_positional_preference() {
    const RUNS: usize = 6_000;
    let mut stayed = 0usize;
    for _ in 0..RUNS {
        let mut items = [0u8, 1, 2];
        secure_shuffle(&mut items).expect("CSPRNG should succeed");
        if items[0] == 0 {
            stayed += 1;
        }
    }
    // Expectation 2000; the window is ±13 sigma.
    assert!(
        (1500..=2500).contains(&stayed),
        "element stayed in place {stayed} of {RUNS} shuffles"
    );
}

/// Repeated generation must never produce duplicate passwords at a
/// realistic length — duplicates at 16 characters over a 79-symbol pool
/// mean the entropy source is broken, not that we were unlucky.
#[test]
fn repeated_generation_is_never_degenerate() {
    let passwords: HashSet<String> = (0..500)
        .map(|_| {
            generate_password(16, &CharsetConfig::default()).expect("generation should succeed")
        })
        .collect();
    assert_eq!(passwords.len(), 500, "duplicate generated passwords");
}
