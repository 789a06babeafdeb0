//! Property tests for the list view engine.
//!
//! Properties use randomized input generation to protect invariants like
//! "indices stay in range" and "rows never show without their header".
//!
//! Run with: `cargo test --test properties`

#[path = "properties/category_state.rs"]
mod category_state;

#[path = "properties/projection.rs"]
mod projection;

#[path = "properties/filter.rs"]
mod filter;

#[path = "properties/selection.rs"]
mod selection;
