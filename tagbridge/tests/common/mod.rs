// Shared helpers for integration tests. Each aggregator includes this via
// `#[path = "../common/mod.rs"]`, so not every helper is used everywhere.
#![allow(dead_code)]

pub mod fixtures;
pub mod helpers;
