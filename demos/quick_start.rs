//! Quick Start Example
//!
//! This example demonstrates the minimal API surface of outcome-rail.
//! No feature flags required - works with the default configuration.
//!
//! Run with: `cargo run --example quick_start`
//!
//! ## What You'll Learn
//!
//! 1. Adopt `Option`-returning APIs with `Maybe`
//! 2. Promote absence into a fault with `into_outcome`
//! 3. Branch on the outcome with `inspect` / `inspect_failure`

use outcome_rail::prelude::*;

/// Simulates a cache lookup.
///
/// In a real application, this would hit a map or a store.
fn cache_lookup(key: &str) -> Maybe<u32> {
    let hit = if key == "answer" { Some(42) } else { None };
    hit.into_maybe()
}

fn main() {
    println!("=== outcome-rail Quick Start ===\n");

    // A hit flows through the chain untouched.
    let hit = cache_lookup("answer")
        .map(|value| value * 2)
        .into_outcome();
    match hit {
        Outcome::Success(value) => println!("hit: {value}"),
        Outcome::Failure(fault) => println!("miss: {}", fault.message()),
    }

    // A miss short-circuits the map and surfaces the standard fault.
    let miss = cache_lookup("question")
        .map(|value| value * 2)
        .into_outcome();
    match miss {
        Outcome::Success(value) => println!("hit: {value}"),
        Outcome::Failure(fault) => println!("miss: {}", fault.message()),
    }
}
