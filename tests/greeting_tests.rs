// Host-side tests for the typewriter pacing.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod greeting {
    include!("../src/core/greeting.rs");
}

use greeting::Typewriter;

#[test]
fn starts_hidden() {
    let tw = Typewriter::new("hello", 50.0);
    assert_eq!(tw.revealed(), 0);
    assert_eq!(tw.visible(), "");
    assert!(!tw.is_complete());
}

#[test]
fn reveals_one_character_per_interval() {
    let mut tw = Typewriter::new("hello", 50.0);
    assert!(!tw.tick(49.0));
    assert_eq!(tw.revealed(), 0);
    assert!(tw.tick(1.0));
    assert_eq!(tw.visible(), "h");
    assert!(tw.tick(50.0));
    assert_eq!(tw.visible(), "he");
}

#[test]
fn large_deltas_reveal_multiple_characters() {
    let mut tw = Typewriter::new("hello there", 50.0);
    assert!(tw.tick(200.0));
    assert_eq!(tw.revealed(), 4);
}

#[test]
fn completes_once_and_never_loops() {
    let text = "happy birthday";
    let mut tw = Typewriter::new(text, 50.0);
    let mut ticks = 0;
    while !tw.is_complete() {
        tw.tick(16.0);
        ticks += 1;
        assert!(ticks < 10_000, "never completed");
    }
    assert_eq!(tw.visible(), text);
    assert_eq!(tw.revealed(), text.chars().count());

    // once complete, nothing changes
    assert!(!tw.tick(10_000.0));
    assert_eq!(tw.visible(), text);
}

#[test]
fn reveal_is_monotonic() {
    let mut tw = Typewriter::new("some greeting text", 50.0);
    let mut last = 0;
    for _ in 0..200 {
        tw.tick(16.7);
        assert!(tw.revealed() >= last);
        last = tw.revealed();
    }
}

#[test]
fn handles_non_ascii_text() {
    let mut tw = Typewriter::new("mutlu yıllar ❤", 50.0);
    while !tw.is_complete() {
        tw.tick(50.0);
    }
    assert_eq!(tw.visible(), "mutlu yıllar ❤");
}
