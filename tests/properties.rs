//! Property tests for envsync.
//!
//! Properties use randomized name sets to protect the diff invariants.
//!
//! Run with: `cargo test --test properties`

#[path = "properties/plan.rs"]
mod plan;
