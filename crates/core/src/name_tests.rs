// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::clock::FakeClock;
use proptest::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

#[test]
fn codename_is_deterministic() {
    assert_eq!(codename("configs/run.yaml-1.0"), codename("configs/run.yaml-1.0"));
}

#[test]
fn codename_shape() {
    let name = codename("configs/run.yaml-1700000000.000001");
    let parts: Vec<&str> = name.as_str().split('-').collect();
    assert_eq!(parts.len(), 3, "unexpected name {}", name);
    assert!(ADJECTIVES.contains(&parts[0]));
    assert!(NOUNS.contains(&parts[1]));
    assert_eq!(parts[2].len(), 6);
    assert!(name.is_dns_label());
}

#[test]
fn same_seed_differs_across_clock_ticks() {
    let clock = FakeClock::new();
    let generator = NameGenerator::new(clock.clone());
    let first = generator.new_name("configs/run.yaml");
    clock.advance(Duration::from_micros(1));
    let second = generator.new_name("configs/run.yaml");
    assert_ne!(first, second);
}

#[test]
fn same_seed_same_instant_is_stable() {
    let generator = NameGenerator::new(FakeClock::new());
    assert_eq!(generator.new_name("a.yaml"), generator.new_name("a.yaml"));
}

#[test]
fn different_seeds_differ() {
    let generator = NameGenerator::new(FakeClock::new());
    assert_ne!(generator.new_name("a.yaml"), generator.new_name("b.yaml"));
}

#[test]
fn consecutive_ticks_do_not_collide() {
    let clock = FakeClock::new();
    let generator = NameGenerator::new(clock.clone());
    let mut seen = HashSet::new();
    for _ in 0..10_000 {
        assert!(seen.insert(generator.new_name("configs/run.yaml")));
        clock.advance(Duration::from_micros(1));
    }
}

#[yare::parameterized(
    generated  = { "quiet-river-0a1b2c", true },
    empty      = { "",                   false },
    uppercase  = { "Quiet-river",        false },
    underscore = { "quiet_river",        false },
    leading    = { "-quiet",             false },
    trailing   = { "quiet-",             false },
)]
fn dns_label_check(name: &str, expected: bool) {
    assert_eq!(JobName::from_string(name).is_dns_label(), expected);
}

proptest! {
    #[test]
    fn every_codename_is_a_dns_label(seed in any::<String>()) {
        prop_assert!(codename(&seed).is_dns_label());
    }
}

#[test]
fn word_lists_do_not_overlap() {
    for adjective in ADJECTIVES {
        assert!(!NOUNS.contains(adjective), "{adjective} is also a noun");
    }
}

#[test]
fn adjective_and_noun_always_differ() {
    for i in 0..200 {
        let name = codename(&format!("run.yaml-{i}"));
        let parts: Vec<&str> = name.as_str().split('-').collect();
        assert_ne!(parts[0], parts[1], "{name}");
    }
}
